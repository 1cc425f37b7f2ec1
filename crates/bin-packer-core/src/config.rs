use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Capacity of a bin when none is configured.
pub const DEFAULT_CAPACITY: u32 = 10;

/// Greedy placement strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Only looks at the most recently opened bin (fast, least space-efficient).
    NextFit,
    /// First bin, in creation order, with enough room.
    FirstFit,
    /// Bin with the least remaining room that still fits the item.
    BestFit,
}

impl Strategy {
    /// All strategies, in the order used for comparisons and tie-breaks.
    pub const ALL: [Strategy; 3] = [Strategy::NextFit, Strategy::FirstFit, Strategy::BestFit];

    pub fn name(&self) -> &'static str {
        match self {
            Self::NextFit => "NextFit",
            Self::FirstFit => "FirstFit",
            Self::BestFit => "BestFit",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nf" | "next" | "next_fit" | "next-fit" | "nextfit" => Ok(Self::NextFit),
            "ff" | "first" | "first_fit" | "first-fit" | "firstfit" => Ok(Self::FirstFit),
            "bf" | "best" | "best_fit" | "best-fit" | "bestfit" => Ok(Self::BestFit),
            _ => Err(()),
        }
    }
}

/// Order in which items are fed to the packer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Arrival order (online packing).
    None,
    /// Largest first; turns First Fit into First Fit Decreasing.
    SizeDesc,
    SizeAsc,
}

impl FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "size_desc" | "desc" => Ok(Self::SizeDesc),
            "size_asc" | "asc" => Ok(Self::SizeAsc),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackerConfig {
    /// Capacity shared by every bin of a packing session.
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,
    #[serde(default = "default_sort_order")]
    pub sort_order: SortOrder,
    /// Evaluate strategy comparisons in parallel when feature "parallel" is on.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            strategy: default_strategy(),
            sort_order: default_sort_order(),
            parallel: default_parallel(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if the bin capacity is zero.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::BinPackError;

        if self.capacity == 0 {
            return Err(BinPackError::InvalidConfig(
                "capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}
fn default_strategy() -> Strategy {
    Strategy::FirstFit
}
fn default_sort_order() -> SortOrder {
    SortOrder::None
}
fn default_parallel() -> bool {
    false
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn capacity(mut self, v: u32) -> Self {
        self.cfg.capacity = v;
        self
    }
    pub fn strategy(mut self, v: Strategy) -> Self {
        self.cfg.strategy = v;
        self
    }
    pub fn sort_order(mut self, v: SortOrder) -> Self {
        self.cfg.sort_order = v;
        self
    }
    pub fn parallel(mut self, v: bool) -> Self {
        self.cfg.parallel = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
