use super::{Packer, Placement, check_item, open, put};
use crate::config::Strategy;
use crate::error::Result;
use crate::model::Bin;

/// Only the last bin is ever considered; once it cannot take an item it is
/// closed for good.
pub struct NextFitPacker {
    capacity: u32,
    bins: Vec<Bin>,
}

impl NextFitPacker {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            bins: Vec::new(),
        }
    }
}

impl Packer for NextFitPacker {
    fn strategy(&self) -> Strategy {
        Strategy::NextFit
    }

    fn capacity(&self) -> u32 {
        self.capacity
    }

    fn bins(&self) -> &[Bin] {
        &self.bins
    }

    fn place(&mut self, item: u32) -> Result<Placement> {
        check_item(item, self.capacity)?;
        if self.bins.last().is_some_and(|last| last.fits(item)) {
            let idx = self.bins.len() - 1;
            put(&mut self.bins, idx, item)
        } else {
            open(&mut self.bins, self.capacity, item)
        }
    }

    fn into_bins(self: Box<Self>) -> Vec<Bin> {
        self.bins
    }
}
