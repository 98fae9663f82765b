//! Descriptive statistics over float slices.
//!
//! All functions compute in the sample's own precision and return `None`
//! for an empty slice. Variance is the population variance (divides by
//! `n`, not `n - 1`).

use std::ops::{Add, Div, Mul, Sub};

/// Floating-point element type accepted by the statistics functions.
pub trait Sample:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Convert an element count into this type.
    fn from_count(n: usize) -> Self;
}

impl Sample for f32 {
    const ZERO: Self = 0.0;

    fn from_count(n: usize) -> Self {
        n as f32
    }
}

impl Sample for f64 {
    const ZERO: Self = 0.0;

    fn from_count(n: usize) -> Self {
        n as f64
    }
}

/// Arithmetic mean.
pub fn mean<T: Sample>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().fold(T::ZERO, |acc, &v| acc + v);
    Some(sum / T::from_count(values.len()))
}

/// Population variance.
pub fn variance<T: Sample>(values: &[T]) -> Option<T> {
    let m = mean(values)?;
    let sq = values.iter().fold(T::ZERO, |acc, &v| {
        let d = v - m;
        acc + d * d
    });
    Some(sq / T::from_count(values.len()))
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Mean, variance, and standard deviation computed together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Number of samples.
    pub count: usize,
}

/// Summarise `values`, or `None` when empty.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    let mean = mean(values)?;
    let variance = variance(values)?;
    Some(Summary {
        mean,
        variance,
        std_dev: variance.sqrt(),
        count: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn empty_has_no_statistics() {
        assert_eq!(mean::<f64>(&[]), None);
        assert_eq!(variance::<f64>(&[]), None);
        assert_eq!(std_dev(&[]), None);
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn known_sample() {
        assert_eq!(mean(&SAMPLE), Some(5.0));
        assert_eq!(variance(&SAMPLE), Some(4.0));
        assert_eq!(std_dev(&SAMPLE), Some(2.0));
    }

    #[test]
    fn f32_mean() {
        assert_eq!(mean(&[1.0f32, 2.0, 3.0]), Some(2.0f32));
    }

    #[test]
    fn single_value_has_zero_spread() {
        assert_eq!(variance(&[3.5]), Some(0.0));
    }

    #[test]
    fn summary_matches_individual_functions() {
        let s = summarize(&SAMPLE).unwrap();
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.variance, 4.0);
        assert_eq!(s.std_dev, 2.0);
        assert_eq!(s.count, 8);
    }
}
