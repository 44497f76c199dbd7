use crate::board::{Board, Position};

/// Every lifecycle point the generator can report. Delivered in strict
/// program order on the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    GenerationStart,
    GenerationComplete,
    GenerationFailed,
    DiagonalFillStart,
    DiagonalFillComplete,
    BacktrackStart,
    BacktrackComplete,
    Phase1Start,
    Phase1Complete,
    Phase1CellSelected,
    Phase1Removed,
    Phase2Start,
    Phase2Complete,
    Phase2RoundStart,
    Phase2RoundComplete,
    Phase2CellSelected,
    Phase2Removed,
    Phase2Kept,
    Phase3Start,
    Phase3Complete,
    Phase3CellSelected,
    Phase3Tested,
    Phase3Removed,
    Phase3Kept,
    Ac3Start,
    Ac3Revision,
    Ac3ValueRemoved,
    Ac3Complete,
    Ac3DeadEnd,
    HeuristicSelect,
}

/// A read-only snapshot handed to the event callback; valid only for the
/// duration of that call.
#[derive(Debug, Clone, Copy)]
pub struct EventData<'a> {
    pub kind: EventKind,
    pub board: &'a Board,
    pub phase: u32,
    pub cumulative_removed: usize,
    pub round: u32,
    pub cell: Option<(Position, u8)>,
}

impl<'a> EventData<'a> {
    pub fn new(kind: EventKind, board: &'a Board) -> EventData<'a> {
        EventData {
            kind,
            board,
            phase: 0,
            cumulative_removed: 0,
            round: 0,
            cell: None,
        }
    }

    pub fn with_phase(mut self, phase: u32) -> EventData<'a> {
        self.phase = phase;
        self
    }

    pub fn with_round(mut self, round: u32) -> EventData<'a> {
        self.round = round;
        self
    }

    pub fn with_cumulative_removed(mut self, n: usize) -> EventData<'a> {
        self.cumulative_removed = n;
        self
    }

    pub fn with_cell(mut self, pos: Position, value: u8) -> EventData<'a> {
        self.cell = Some((pos, value));
        self
    }
}

/// A single-callback observability sink. A boxed closure stands in for the
/// classic `fn(event_data, user_data)` pair: whatever state a C callback
/// would thread through `user_data` is instead captured directly by the
/// closure. Disabled (a no-op) when `None`.
pub type EventSink<'a> = Box<dyn FnMut(&EventData) + 'a>;

/// Invokes `sink` with `event`, if a sink is registered. The callback must
/// not block or mutate the board; `event.board` is a shared reference for
/// exactly that reason.
pub fn emit(sink: &mut Option<EventSink<'_>>, event: EventData<'_>) {
    if let Some(f) = sink {
        f(&event);
    }
}
