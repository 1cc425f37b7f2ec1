use crate::config::Strategy;
use crate::error::{BinPackError, Result};
use crate::model::Bin;

pub mod best_fit;
pub mod first_fit;
pub mod next_fit;

pub use best_fit::BestFitPacker;
pub use first_fit::FirstFitPacker;
pub use next_fit::NextFitPacker;

/// Where a single item ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the receiving bin, in creation order.
    pub bin: usize,
    /// True if the bin was appended for this item.
    pub opened: bool,
}

/// A packer places items into its own append-only sequence of bins.
///
/// Implementations must reject items that can never fit (`ItemTooLarge`)
/// before touching any bin, and must only call `Bin::add` on bins that fit.
pub trait Packer {
    fn strategy(&self) -> Strategy;
    fn capacity(&self) -> u32;
    fn bins(&self) -> &[Bin];
    fn place(&mut self, item: u32) -> Result<Placement>;
    fn into_bins(self: Box<Self>) -> Vec<Bin>;

    /// Returns true if `item` fits in an empty bin.
    fn can_pack(&self, item: u32) -> bool {
        item > 0 && item <= self.capacity()
    }
}

/// Builds the packer for `strategy` with bins of `capacity`.
pub fn new_packer(strategy: Strategy, capacity: u32) -> Box<dyn Packer> {
    match strategy {
        Strategy::NextFit => Box::new(NextFitPacker::new(capacity)),
        Strategy::FirstFit => Box::new(FirstFitPacker::new(capacity)),
        Strategy::BestFit => Box::new(BestFitPacker::new(capacity)),
    }
}

pub(crate) fn check_item(item: u32, capacity: u32) -> Result<()> {
    if item == 0 {
        return Err(BinPackError::InvalidInput(
            "item sizes must be positive".into(),
        ));
    }
    if item > capacity {
        return Err(BinPackError::ItemTooLarge { item, capacity });
    }
    Ok(())
}

/// Adds `item` to `bins[idx]`.
pub(crate) fn put(bins: &mut [Bin], idx: usize, item: u32) -> Result<Placement> {
    bins[idx].add(item)?;
    Ok(Placement {
        bin: idx,
        opened: false,
    })
}

/// Appends a fresh bin holding `item`.
pub(crate) fn open(bins: &mut Vec<Bin>, capacity: u32, item: u32) -> Result<Placement> {
    let mut bin = Bin::new(capacity);
    bin.add(item)?;
    bins.push(bin);
    Ok(Placement {
        bin: bins.len() - 1,
        opened: true,
    })
}
