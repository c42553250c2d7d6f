//! Daily slate draw.
//!
//! The draw must be a uniformly random subset: `SliceRandom::shuffle` is
//! a Fisher-Yates shuffle, unlike the sort-by-random-comparator trick
//! which skews toward the original order.

use rand::seq::SliceRandom;
use rand::Rng;

/// Draw up to `size` items uniformly at random from `pool`, in random
/// order. Catalogs smaller than `size` are returned whole (shuffled).
pub fn draw_slate<T, R: Rng + ?Sized>(mut pool: Vec<T>, size: usize, rng: &mut R) -> Vec<T> {
    pool.shuffle(rng);
    pool.truncate(size);
    pool
}
