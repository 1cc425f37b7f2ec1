use super::{Packer, Placement, check_item, open, put};
use crate::config::Strategy;
use crate::error::Result;
use crate::model::Bin;

/// Scans bins in creation order and takes the first one with room.
pub struct FirstFitPacker {
    capacity: u32,
    bins: Vec<Bin>,
}

impl FirstFitPacker {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            bins: Vec::new(),
        }
    }
}

impl Packer for FirstFitPacker {
    fn strategy(&self) -> Strategy {
        Strategy::FirstFit
    }

    fn capacity(&self) -> u32 {
        self.capacity
    }

    fn bins(&self) -> &[Bin] {
        &self.bins
    }

    fn place(&mut self, item: u32) -> Result<Placement> {
        check_item(item, self.capacity)?;
        match self.bins.iter().position(|b| b.fits(item)) {
            Some(idx) => put(&mut self.bins, idx, item),
            None => open(&mut self.bins, self.capacity, item),
        }
    }

    fn into_bins(self: Box<Self>) -> Vec<Bin> {
        self.bins
    }
}
