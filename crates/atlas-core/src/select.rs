/// Uniform random selection over the record set.
///
/// Every function takes the generator as an argument so handlers can pass
/// `rand::rng()` while tests inject a seeded `StdRng`.
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Choose one element uniformly at random. `None` on an empty slice; the
/// dataset is assumed non-empty, so callers treat that as an error.
pub fn pick_one<'a, T, R: Rng + ?Sized>(rng: &mut R, records: &'a [T]) -> Option<&'a T> {
    records.choose(rng)
}

/// Choose `min(k, len)` distinct elements uniformly without replacement,
/// in randomized order. A short slice shrinks the sample silently rather
/// than failing.
pub fn pick_k<'a, T, R: Rng + ?Sized>(rng: &mut R, records: &'a [T], k: usize) -> Vec<&'a T> {
    let amount = k.min(records.len());
    let mut picked: Vec<&T> = records.choose_multiple(rng, amount).collect();
    // choose_multiple makes no ordering guarantee; the caller needs the
    // first element (and thus the answer position) uniformly placed
    picked.shuffle(rng);
    picked
}
