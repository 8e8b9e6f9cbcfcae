//! Random sampling of the primer pool.
//!
//! One round draws a fixed-size subset without replacement, in randomized
//! order, by shuffling an index vector and taking its prefix. The random
//! source is a parameter so tests can pin a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{BisociateError, Result};

/// Draw `count` distinct mechanisms from `pool`, uniformly at random.
///
/// Asking for more mechanisms than the pool holds is a configuration error,
/// not a silent truncation.
pub fn sample_mechanisms<R: Rng + ?Sized>(
    pool: &[String],
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    if count == 0 {
        return Err(BisociateError::Config(
            "sample count must be at least 1".to_string(),
        ));
    }
    if count > pool.len() {
        return Err(BisociateError::Config(format!(
            "cannot sample {} mechanisms from a pool of {}",
            count,
            pool.len()
        )));
    }

    let mut indices: Vec<usize> = (0..pool.len()).collect();
    let (picked, _) = indices.partial_shuffle(rng, count);
    Ok(picked.iter().map(|&i| pool[i].clone()).collect())
}
