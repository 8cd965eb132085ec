use crate::prelude::{CurveError, CurveResult};
use ndarray::ArrayView1;

/// Element-wise helpers over sampled series.
pub struct SeriesHelper;

impl SeriesHelper {
    /// Multiplies every sample by `factor`.
    pub fn scale(values: &[f64], factor: f64) -> Vec<f64> {
        ArrayView1::from(values).mapv(|v| factor * v).to_vec()
    }

    /// Element-wise sum of two equally long series.
    pub fn add(lhs: &[f64], rhs: &[f64]) -> CurveResult<Vec<f64>> {
        if lhs.len() != rhs.len() {
            return Err(CurveError::LengthMismatch {
                left: lhs.len(),
                right: rhs.len(),
            });
        }
        let sum = &ArrayView1::from(lhs) + &ArrayView1::from(rhs);
        Ok(sum.to_vec())
    }

    /// Set union of all samples, sorted ascending. Duplicates are matched by
    /// exact floating-point equality.
    pub fn sorted_union<'a, I>(series: I) -> Vec<f64>
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let mut merged: Vec<f64> = series.into_iter().flatten().copied().collect();
        merged.sort_by(f64::total_cmp);
        merged.dedup_by(|a, b| a == b);
        merged
    }

    pub fn is_non_decreasing(values: &[f64]) -> bool {
        values.windows(2).all(|pair| pair[0] <= pair[1])
    }

    pub fn is_strictly_increasing(values: &[f64]) -> bool {
        values.windows(2).all(|pair| pair[0] < pair[1])
    }

    pub fn max(values: &[f64]) -> Option<f64> {
        values.iter().copied().reduce(f64::max)
    }
}
