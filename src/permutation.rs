use rand::Rng;

/// Fills `buf` with `start, start + 1, ..., start + buf.len() - 1` in a
/// uniformly random order (Fisher-Yates).
///
/// Deliberately uses the inclusive draw `uniform_int(0, i)` rather than
/// Sattolo's `uniform_int(0, i - 1)`: fixed points (`buf[i] == start + i`)
/// must remain possible, since Sattolo's variant only produces derangements.
pub fn permutation(buf: &mut [usize], start: usize, rng: &mut impl Rng) {
    for (offset, slot) in buf.iter_mut().enumerate() {
        *slot = start + offset;
    }
    let n = buf.len();
    if n == 0 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.gen_range(0..=i);
        buf.swap(i, j);
    }
}

/// Shuffles `buf` in place (Fisher-Yates on the existing contents).
pub fn shuffle<T>(buf: &mut [T], rng: &mut impl Rng) {
    let n = buf.len();
    if n == 0 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.gen_range(0..=i);
        buf.swap(i, j);
    }
}
