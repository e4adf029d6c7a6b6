//! Candidate arena with atomic take-and-remove
//!
//! Candidates are never moved or dropped once loaded. Removal only clears the
//! candidate's availability bit, so ids stay stable for the whole run and
//! already-placed images remain addressable during assembly.

use crate::io::error::{MosaicError, Result};
use bitvec::bitvec;
use bitvec::vec::BitVec;
use image::RgbImage;
use std::fmt;

/// Stable handle to a candidate, equal to its position in load order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateId(usize);

impl CandidateId {
    /// Load-order index of the candidate
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Ordered pool of candidate images with an availability set
pub struct CandidatePool {
    images: Vec<RgbImage>,
    available: BitVec,
}

impl CandidatePool {
    /// Create a pool where every image is available
    pub fn new(images: Vec<RgbImage>) -> Self {
        let available = bitvec![1; images.len()];
        Self { images, available }
    }

    /// Number of candidates that can still be selected
    pub fn len(&self) -> usize {
        self.available.count_ones()
    }

    /// Test if no candidates can be selected
    pub fn is_empty(&self) -> bool {
        self.available.not_any()
    }

    /// Number of candidates ever loaded, including taken ones
    pub fn capacity(&self) -> usize {
        self.images.len()
    }

    /// Look up the id of the candidate at a load-order index
    pub fn id(&self, index: usize) -> Option<CandidateId> {
        (index < self.images.len()).then_some(CandidateId(index))
    }

    /// Test candidate availability
    pub fn is_available(&self, id: CandidateId) -> bool {
        self.available.get(id.0).as_deref() == Some(&true)
    }

    /// Ids of all available candidates in load order
    pub fn available_ids(&self) -> impl Iterator<Item = CandidateId> + '_ {
        self.available.iter_ones().map(CandidateId)
    }

    /// Image of a candidate, whether or not it has been taken
    pub fn image(&self, id: CandidateId) -> Option<&RgbImage> {
        self.images.get(id.0)
    }

    /// Mark a candidate as used so it cannot be selected again
    ///
    /// # Errors
    ///
    /// Returns an error if the candidate was already taken or does not exist
    pub fn take_and_remove(&mut self, id: CandidateId) -> Result<&RgbImage> {
        if !self.is_available(id) {
            return Err(MosaicError::CandidateUnavailable { index: id.0 });
        }
        self.available.set(id.0, false);
        self.images
            .get(id.0)
            .ok_or(MosaicError::CandidateUnavailable { index: id.0 })
    }
}

impl fmt::Display for CandidatePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CandidatePool({} of {} available)",
            self.len(),
            self.capacity()
        )
    }
}
