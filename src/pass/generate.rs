//! Password generation.

use zeroize::Zeroizing;

use super::{Error, Password, Result};
use crate::rand::RandomSource;

/// Generate a password of `length` characters drawn from `classes`.
///
/// Position `i` is first seeded from `classes[i]`, so every class appears at
/// least once. The rest is drawn uniformly from all characters of all
/// classes (a class with more characters is picked proportionally more
/// often), then the whole sequence is Fisher-Yates shuffled.
pub fn generate<R, S>(rng: &mut R, length: usize, classes: &[S]) -> Result<Password>
where
    R: RandomSource + ?Sized,
    S: AsRef<str>,
{
    let pools = validate(length, classes)?;
    let total: usize = pools.iter().map(Vec::len).sum();

    let mut chars = Zeroizing::new(Vec::with_capacity(length));

    for pool in &pools {
        chars.push(pick(rng, pool));
    }

    while chars.len() < length {
        chars.push(pick_from_all(rng, &pools, total));
    }

    shuffle(rng, chars.as_mut_slice())?;

    Ok(Password::from_chars(chars.as_slice()))
}

fn validate<S: AsRef<str>>(length: usize, classes: &[S]) -> Result<Vec<Vec<char>>> {
    if classes.is_empty() {
        return Err(Error::EmptyClassSet);
    }

    let pools: Vec<Vec<char>> = classes.iter().map(|c| c.as_ref().chars().collect()).collect();

    if let Some(index) = pools.iter().position(Vec::is_empty) {
        return Err(Error::EmptyClass { index });
    }

    if length < pools.len() {
        return Err(Error::InvalidLength {
            length,
            classes: pools.len(),
        });
    }

    Ok(pools)
}

#[inline]
fn pick<R: RandomSource + ?Sized>(rng: &mut R, pool: &[char]) -> char {
    pool[rng.below(pool.len())]
}

/// Draw one index over the concatenation of all pools and walk the pools
/// to find which one it lands in.
fn pick_from_all<R: RandomSource + ?Sized>(rng: &mut R, pools: &[Vec<char>], total: usize) -> char {
    let mut index = rng.below(total);
    for pool in pools {
        if index < pool.len() {
            return pool[index];
        }
        index -= pool.len();
    }
    unreachable!("index {index} past the end of {total} pooled characters")
}

/// Unbiased in-place Fisher-Yates shuffle.
pub fn shuffle<R, T>(rng: &mut R, seq: &mut [T]) -> Result<()>
where
    R: RandomSource + ?Sized,
{
    let len = seq.len();
    for i in 0..len.saturating_sub(1) {
        let j = i + rng.below(len - i);
        swap(seq, i, j)?;
    }
    Ok(())
}

/// Exchange two elements. Both indices must be in `[0, len)`; there is no
/// wrap-around.
pub fn swap<T>(seq: &mut [T], a: usize, b: usize) -> Result<()> {
    let len = seq.len();
    for index in [a, b] {
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
    }
    seq.swap(a, b);
    Ok(())
}
