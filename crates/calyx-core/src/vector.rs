//! Growable ordered sequence of `i32` values.

use crate::error::CoreError;

/// An ordered, growable sequence of signed integers.
///
/// Insertion order is preserved until [`sort`](IntVector::sort) is called,
/// after which the elements are in ascending order. Duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntVector {
    data: Vec<i32>,
}

impl IntVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Append a value at the end.
    pub fn push(&mut self, value: i32) {
        self.data.push(value);
    }

    /// Bounds-checked read.
    pub fn get(&self, index: usize) -> Result<i32, CoreError> {
        self.data
            .get(index)
            .copied()
            .ok_or(CoreError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Left fold with `+`, identity 0. Wraps on `i32` overflow.
    pub fn sum(&self) -> i32 {
        self.data.iter().fold(0i32, |acc, &v| acc.wrapping_add(v))
    }

    /// Sort ascending in place.
    pub fn sort(&mut self) {
        self.data.sort_unstable();
    }

    /// Borrow the elements in their current order.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }
}

impl From<Vec<i32>> for IntVector {
    fn from(data: Vec<i32>) -> Self {
        Self { data }
    }
}

impl FromIterator<i32> for IntVector {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
