use super::{Packer, Placement, check_item, open, put};
use crate::config::Strategy;
use crate::error::Result;
use crate::model::Bin;

/// Picks the bin that would be left with the least room after the item is
/// added. Ties go to the lowest index.
pub struct BestFitPacker {
    capacity: u32,
    bins: Vec<Bin>,
}

impl BestFitPacker {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            bins: Vec::new(),
        }
    }

    fn choose(&self, item: u32) -> Option<usize> {
        let mut best_idx = None;
        let mut best_remaining = u32::MAX;
        for (i, bin) in self.bins.iter().enumerate() {
            if !bin.fits(item) {
                continue;
            }
            let remaining = bin.remaining_capacity();
            // strict: earlier bins keep ties
            if best_idx.is_none() || remaining < best_remaining {
                best_idx = Some(i);
                best_remaining = remaining;
            }
        }
        best_idx
    }
}

impl Packer for BestFitPacker {
    fn strategy(&self) -> Strategy {
        Strategy::BestFit
    }

    fn capacity(&self) -> u32 {
        self.capacity
    }

    fn bins(&self) -> &[Bin] {
        &self.bins
    }

    fn place(&mut self, item: u32) -> Result<Placement> {
        check_item(item, self.capacity)?;
        match self.choose(item) {
            Some(idx) => put(&mut self.bins, idx, item),
            None => open(&mut self.bins, self.capacity, item),
        }
    }

    fn into_bins(self: Box<Self>) -> Vec<Bin> {
        self.bins
    }
}
