#![forbid(unsafe_code)]

//! Numeric utilities over sequences of `f64`

use crate::status::{Error, Result};
use rand::Rng;

/// Arithmetic mean of `values`
///
/// `None` stands for an absent sequence and fails with [`Error::NullPtr`];
/// an empty sequence fails with [`Error::LzeroArray`]. Neither case ever
/// yields a number.
pub fn mean(values: Option<&[f64]>) -> Result<f64> {
    let values = values.ok_or(Error::NullPtr)?;
    if values.is_empty() {
        return Err(Error::LzeroArray);
    }

    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Largest value of a non-empty sequence
pub fn maximum(values: &[f64]) -> Result<f64> {
    let (first, rest) = values.split_first().ok_or(Error::LzeroArray)?;
    Ok(rest.iter().fold(*first, |m, &v| if v > m { v } else { m }))
}

/// Sum of the main diagonal of a square matrix
///
/// An empty matrix has trace zero. Rows of unequal length, or a row count
/// that differs from the column count, fail with [`Error::InvalidArg`].
pub fn trace(matrix: &[Vec<f64>]) -> Result<f64> {
    let rows = matrix.len();
    if let Some((index, row)) = matrix
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != rows)
    {
        return Err(Error::InvalidArg(format!(
            "matrix is not square: {} rows but row {} has {} columns",
            rows,
            index,
            row.len()
        )));
    }

    Ok(matrix.iter().enumerate().map(|(i, row)| row[i]).sum())
}

/// Fills `values` with samples drawn uniformly from `[low, high]`
pub fn uniform_fill<R: Rng + ?Sized>(
    values: &mut [f64],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<()> {
    check_bounds(low, high)?;

    for slot in values.iter_mut() {
        let u: f64 = rng.gen_range(0.0..=1.0);
        *slot = (high - low) * u + low;
    }

    Ok(())
}

/// `count` samples drawn uniformly from `[low, high]`
///
/// A `count` too large to allocate fails with [`Error::InvalidArg`].
pub fn uniform<R: Rng + ?Sized>(
    count: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(count)
        .map_err(|_| Error::InvalidArg(format!("cannot allocate {} samples", count)))?;
    values.resize(count, 0.0);
    uniform_fill(&mut values, low, high, rng)?;
    Ok(values)
}

fn check_bounds(low: f64, high: f64) -> Result<()> {
    if !low.is_finite() || !high.is_finite() {
        return Err(Error::InvalidArg(format!(
            "bounds must be finite, got [{}, {}]",
            low, high
        )));
    }

    if low > high {
        return Err(Error::InvalidArg(format!(
            "lower bound {} is above upper bound {}",
            low, high
        )));
    }

    Ok(())
}
