use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Mutex, MutexGuard, OnceLock};

static RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();

fn cell() -> &'static Mutex<StdRng> {
    RNG.get_or_init(|| Mutex::new(StdRng::from_entropy()))
}

/// Re-seeds the process-scoped RNG. Call before [`crate::generate`] to make
/// a run reproducible; otherwise the RNG lazily seeds itself from the
/// platform entropy source on first use.
pub fn seed(seed: u64) {
    *cell().lock().unwrap() = StdRng::seed_from_u64(seed);
}

/// Locks the process-scoped RNG for the duration of one call. The library
/// is single-threaded per generation; this is not a concurrency primitive,
/// just lazy-init bookkeeping.
pub fn lock() -> MutexGuard<'static, StdRng> {
    cell().lock().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn reseeding_makes_draws_reproducible() {
        seed(12345);
        let a: u32 = lock().gen();
        seed(12345);
        let b: u32 = lock().gen();
        assert_eq!(a, b);
    }
}
