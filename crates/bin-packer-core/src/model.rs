use crate::config::Strategy;
use crate::error::{BinPackError, Result};
use serde::Serialize;
use std::fmt;

/// A fixed-capacity container of item sizes.
///
/// `occupied <= capacity` holds at all times; `add` is the only mutator.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Bin {
    capacity: u32,
    items: Vec<u32>,
    occupied: u32,
}

impl Bin {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            items: Vec::new(),
            occupied: 0,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Sum of all items in the bin.
    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.capacity - self.occupied
    }

    /// Items in arrival order.
    pub fn items(&self) -> &[u32] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.capacity
    }

    /// Returns true if `item` can be added without exceeding capacity.
    pub fn fits(&self, item: u32) -> bool {
        item <= self.remaining_capacity()
    }

    /// Adds `item` to the bin.
    ///
    /// Fails with `CapacityExceeded` and leaves the bin untouched if the item
    /// does not fit. Packers check `fits` first, so an error here means the
    /// packer itself is wrong.
    pub fn add(&mut self, item: u32) -> Result<()> {
        let remaining = self.remaining_capacity();
        if item > remaining {
            return Err(BinPackError::CapacityExceeded { item, remaining });
        }
        self.items.push(item);
        self.occupied += item;
        Ok(())
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// The result of a packing session: bins in creation order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Packing {
    pub strategy: Strategy,
    pub capacity: u32,
    pub bins: Vec<Bin>,
}

impl Packing {
    pub fn new(strategy: Strategy, capacity: u32, bins: Vec<Bin>) -> Self {
        Self {
            strategy,
            capacity,
            bins,
        }
    }

    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// All placed items, bin by bin, in arrival order within each bin.
    pub fn items(&self) -> impl Iterator<Item = u32> + '_ {
        self.bins.iter().flat_map(|b| b.items().iter().copied())
    }

    /// Computes packing statistics for this packing.
    pub fn stats(&self) -> PackStats {
        let num_bins = self.bins.len();
        let mut num_items = 0;
        let mut used = 0u64;
        let mut full_bins = 0;
        for bin in &self.bins {
            num_items += bin.len();
            used += bin.occupied() as u64;
            if bin.is_full() {
                full_bins += 1;
            }
        }
        let total_capacity = num_bins as u64 * self.capacity as u64;
        let occupancy = if total_capacity > 0 {
            used as f64 / total_capacity as f64
        } else {
            0.0
        };
        let lower_bound = if self.capacity > 0 {
            used.div_ceil(self.capacity as u64) as usize
        } else {
            0
        };
        PackStats {
            num_bins,
            num_items,
            total_capacity,
            used,
            occupancy,
            full_bins,
            lower_bound,
        }
    }
}

/// Renders one line per bin: `Bin <index>: <items>`.
impl fmt::Display for Packing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bin) in self.bins.iter().enumerate() {
            writeln!(f, "Bin {}: {}", i, bin)?;
        }
        Ok(())
    }
}

/// Statistics about packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PackStats {
    /// Number of bins opened.
    pub num_bins: usize,
    /// Number of items placed.
    pub num_items: usize,
    /// `num_bins * capacity`.
    pub total_capacity: u64,
    /// Sum of all placed items.
    pub used: u64,
    /// Occupancy ratio: used / total_capacity (0.0 to 1.0).
    pub occupancy: f64,
    /// Bins with no remaining capacity.
    pub full_bins: usize,
    /// `ceil(used / capacity)`: no packing can use fewer bins.
    pub lower_bound: usize,
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Bins: {} (lower bound {}), Items: {}, Occupancy: {:.2}%, Used: {}/{}, Full bins: {}",
            self.num_bins,
            self.lower_bound,
            self.num_items,
            self.occupancy * 100.0,
            self.used,
            self.total_capacity,
            self.full_bins,
        )
    }

    /// Returns unused capacity summed over all bins.
    pub fn wasted(&self) -> u64 {
        self.total_capacity.saturating_sub(self.used)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.total_capacity > 0 {
            (self.wasted() as f64 / self.total_capacity as f64) * 100.0
        } else {
            0.0
        }
    }
}
