//! Nearest-signature selection

use crate::algorithm::signature::ColorAverage;
use crate::io::error::{MosaicError, Result};

/// Index of the candidate closest to `target` by squared Euclidean distance
///
/// Scans in order with a strict less-than comparison, so the earliest of
/// several equally close candidates wins.
///
/// # Errors
///
/// Returns an error if `candidates` is empty
pub fn best_match(target: ColorAverage, candidates: &[ColorAverage]) -> Result<usize> {
    let mut best: Option<(usize, u32)> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let distance = target.squared_distance(candidate);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
        .ok_or(MosaicError::EmptyCandidateSet)
}
