//! Binary search over slices that are already sorted ascending.
//!
//! Sortedness is the caller's responsibility and is deliberately not
//! verified at runtime; results on unsorted input are meaningless.

use crate::error::{Result, RevzError};
use std::fmt::Debug;

/// Whether `target` occurs in the sorted slice.
pub fn contains<T: Ord>(items: &[T], target: &T) -> bool {
    probe(items, target).is_some()
}

/// The position of `target` in the sorted slice.
///
/// Fails with [`RevzError::TargetNotFound`] when there is no exact match.
/// When `target` occurs more than once, any matching index may be returned.
pub fn position<T: Ord + Debug>(items: &[T], target: &T) -> Result<usize> {
    probe(items, target).ok_or_else(|| RevzError::TargetNotFound(format!("{target:?}")))
}

fn probe<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut lower = 0usize;
    let mut upper = items.len().checked_sub(1)?;

    loop {
        let mid = (lower + upper) / 2;
        match target.cmp(&items[mid]) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => {
                upper = mid.checked_sub(1)?;
                if upper < lower {
                    return None;
                }
            }
            std::cmp::Ordering::Greater => {
                lower = mid + 1;
                if lower > upper {
                    return None;
                }
            }
        }
    }
}
