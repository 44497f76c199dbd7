use crate::board::{Board, Position};
use crate::domain::Domain;

/// Per-cell bitset domains over a row/column/block adjacency graph, built
/// once from a [`Board`] snapshot and then mutated in place as a completion
/// engine assigns and backtracks.
///
/// Construction performs the initial forward-checking pass: every already
/// filled cell gets a singleton domain, and its value is struck from every
/// peer's domain.
#[derive(Debug, Clone)]
pub struct ConstraintNetwork {
    k: usize,
    n: usize,
    domains: Vec<Domain>,
    peers: Vec<Vec<Position>>,
}

impl ConstraintNetwork {
    /// Builds a network from `board`. Peer lists (row ∪ column ∪ block,
    /// self excluded, deduplicated) are computed once up front.
    pub fn from_board(board: &Board) -> ConstraintNetwork {
        let k = board.subgrid_size();
        let n = board.board_size();
        let peers: Vec<Vec<Position>> = (0..n * n)
            .map(|i| compute_peers(k, n, Position::new(i / n, i % n)))
            .collect();

        let mut domains = vec![Domain::full(n); n * n];
        for (pos, v) in board.iter_cells() {
            if v != 0 {
                domains[pos.row * n + pos.col] = Domain::singleton(n, v);
            }
        }
        for (pos, v) in board.iter_cells() {
            if v != 0 {
                for &peer in &peers[pos.row * n + pos.col] {
                    domains[peer.row * n + peer.col].remove(v);
                }
            }
        }

        ConstraintNetwork { k, n, domains, peers }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn n(&self) -> usize {
        self.n
    }

    fn idx(&self, pos: Position) -> usize {
        pos.row * self.n + pos.col
    }

    pub fn get_domain(&self, pos: Position) -> &Domain {
        &self.domains[self.idx(pos)]
    }

    pub fn has_value(&self, pos: Position, v: u8) -> bool {
        self.get_domain(pos).contains(v)
    }

    pub fn domain_size(&self, pos: Position) -> usize {
        self.get_domain(pos).popcount()
    }

    pub fn domain_empty(&self, pos: Position) -> bool {
        self.get_domain(pos).is_empty()
    }

    /// Removes `v` from `pos`'s domain, returning whether it had been
    /// present.
    pub fn remove_value(&mut self, pos: Position, v: u8) -> bool {
        let i = self.idx(pos);
        self.domains[i].remove(v)
    }

    /// Collapses `pos`'s domain to `{v}`.
    pub fn assign_value(&mut self, pos: Position, v: u8) {
        let n = self.n;
        let i = self.idx(pos);
        self.domains[i] = Domain::singleton(n, v);
    }

    /// Resets `pos`'s domain back to `{1..=n}`.
    pub fn restore_domain(&mut self, pos: Position) {
        let n = self.n;
        let i = self.idx(pos);
        self.domains[i].reset_full(n);
    }

    pub fn peers(&self, pos: Position) -> &[Position] {
        &self.peers[self.idx(pos)]
    }

    /// The product of every cell's domain size, i.e. the size of the naive
    /// search space this network describes.
    pub fn total_possibilities(&self) -> u128 {
        self.domains
            .iter()
            .map(|d| d.popcount() as u128)
            .product()
    }

    /// Writes every singleton domain's value back into `board`. Cells whose
    /// domain is not a singleton are left untouched.
    pub fn write_singletons_to(&self, board: &mut Board) {
        for row in 0..self.n {
            for col in 0..self.n {
                let pos = Position::new(row, col);
                if let Some(v) = self.get_domain(pos).singleton_value() {
                    board.set_cell(pos, v);
                }
            }
        }
    }

    pub fn all_singletons(&self) -> bool {
        self.domains.iter().all(|d| d.popcount() == 1)
    }
}

fn compute_peers(k: usize, n: usize, pos: Position) -> Vec<Position> {
    let mut peers = Vec::with_capacity(3 * (n - 1));
    for col in 0..n {
        if col != pos.col {
            peers.push(Position::new(pos.row, col));
        }
    }
    for row in 0..n {
        if row != pos.row {
            peers.push(Position::new(row, pos.col));
        }
    }
    let block_row = (pos.row / k) * k;
    let block_col = (pos.col / k) * k;
    for r in block_row..block_row + k {
        for c in block_col..block_col + k {
            let p = Position::new(r, c);
            if p != pos && p.row != pos.row && p.col != pos.col {
                peers.push(p);
            }
        }
    }
    peers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_k3_board_has_729_total_possibilities() {
        let board = Board::create(3).unwrap();
        let net = ConstraintNetwork::from_board(&board);
        assert_eq!(net.total_possibilities(), 9u128.pow(9));
    }

    #[test]
    fn peer_count_and_uniqueness_for_k3() {
        let board = Board::create(3).unwrap();
        let net = ConstraintNetwork::from_board(&board);
        let pos = Position::new(4, 4);
        let peers = net.peers(pos);
        assert_eq!(peers.len(), 20);
        assert!(!peers.contains(&pos));
        let mut dedup = peers.to_vec();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), peers.len());
    }

    #[test]
    fn construction_forward_checks_filled_cells() {
        let mut board = Board::create(3).unwrap();
        board.set_cell(Position::new(0, 0), 5);
        board.update_stats();
        let net = ConstraintNetwork::from_board(&board);
        assert_eq!(net.get_domain(Position::new(0, 0)).singleton_value(), Some(5));
        for &peer in net.peers(Position::new(0, 0)) {
            assert!(!net.has_value(peer, 5));
        }
    }

    #[test]
    fn assign_and_restore_round_trip() {
        let board = Board::create(2).unwrap();
        let mut net = ConstraintNetwork::from_board(&board);
        let pos = Position::new(0, 0);
        net.assign_value(pos, 3);
        assert_eq!(net.domain_size(pos), 1);
        net.restore_domain(pos);
        assert_eq!(net.domain_size(pos), 4);
    }
}
