//! Selection-based median of feature uncertainty samples
//!
//! ## Overview
//!
//! The degradation metric is the median of the per-feature pixel covariance
//! ellipse areas. Only the middle element matters, so a full sort is wasted
//! work: `select_nth_unstable_by` places the element at `len / 2` in its sorted
//! position in O(n) average time and leaves the rest partitioned.
//!
//! ## Convention
//!
//! ```text
//! len = 5: [a b c d e] → index 2 (true median)
//! len = 4: [a b c d]   → index 2 (upper-middle of sorted order)
//! len = 0:             → no median
//! ```
//!
//! The single index `len / 2` is used for every size; even-sized inputs are
//! never averaged.
//!
//! ## Ordering
//!
//! Samples are compared with `f32::total_cmp`, so NaN never panics the
//! selection. Positive NaN sorts above every finite value.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Median of `samples` by selection, reordering the slice in place.
///
/// Returns the element at index `len / 2` of the sorted order, or `None`
/// when the slice is empty.
pub fn select_median(samples: &mut [f32]) -> Option<f32> {
    if samples.is_empty() {
        return None;
    }

    let middle = samples.len() / 2;
    let (_, median, _) = samples.select_nth_unstable_by(middle, |a, b| a.total_cmp(b));
    Some(*median)
}

/// Median of `samples` without touching them, or `0.0` when empty.
///
/// `scratch` is cleared and refilled; passing the same buffer every cycle
/// avoids reallocating once it has grown to the working feature count.
pub fn median_or_zero(samples: &[f32], scratch: &mut Vec<f32>) -> f32 {
    scratch.clear();
    scratch.extend_from_slice(samples);
    select_median(scratch).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn empty_has_no_median() {
        assert_eq!(select_median(&mut []), None);

        let mut scratch = Vec::new();
        assert_eq!(median_or_zero(&[], &mut scratch), 0.0);
    }

    #[test]
    fn odd_length_picks_middle() {
        let mut samples = [5.0, 1.0, 3.0, 4.0, 2.0];
        assert_eq!(select_median(&mut samples), Some(3.0));
    }

    #[test]
    fn even_length_uses_index_len_over_two() {
        let mut samples = [4.0, 1.0, 3.0, 2.0];
        // sorted: [1, 2, 3, 4], index 2
        assert_eq!(select_median(&mut samples), Some(3.0));

        let mut pair = [0.7, 0.2];
        assert_eq!(select_median(&mut pair), Some(0.7));
    }

    #[test]
    fn single_sample() {
        let mut samples = [0.42];
        assert_eq!(select_median(&mut samples), Some(0.42));
    }

    #[test]
    fn input_is_left_untouched() {
        let samples = [9.0, 0.5, 4.0];
        let mut scratch = Vec::new();
        assert_eq!(median_or_zero(&samples, &mut scratch), 4.0);
        assert_eq!(samples, [9.0, 0.5, 4.0]);
    }

    #[test]
    fn scratch_is_reused() {
        let mut scratch = Vec::with_capacity(8);
        median_or_zero(&[1.0, 2.0, 3.0], &mut scratch);
        let capacity = scratch.capacity();

        assert_eq!(median_or_zero(&[7.0], &mut scratch), 7.0);
        assert_eq!(scratch.capacity(), capacity);
    }

    #[test]
    fn duplicates_and_nan_do_not_panic() {
        let mut samples = vec![1.0, 1.0, 1.0, 1.0];
        assert_eq!(select_median(&mut samples), Some(1.0));

        let mut with_nan = [f32::NAN, 1.0, 2.0];
        assert_eq!(select_median(&mut with_nan), Some(2.0));
    }
}
