use crate::config::{PackerConfig, SortOrder, Strategy};
use crate::error::{BinPackError, Result};
use crate::model::Packing;
use crate::packer::new_packer;
use std::borrow::Cow;
use tracing::{debug, error, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[instrument(skip_all, fields(strategy = %cfg.strategy, items = items.len()))]
/// Packs `items` with the strategy and capacity in `cfg`.
///
/// Items are placed one at a time in `sort_order` (stable, `None` keeps input
/// order). The first error aborts the run; no partial packing is returned.
pub fn pack_items(items: &[u32], cfg: &PackerConfig) -> Result<Packing> {
    pack_with(cfg.strategy, items, cfg)
}

/// Like `pack_items`, but overrides the configured strategy.
pub fn pack_with(strategy: Strategy, items: &[u32], cfg: &PackerConfig) -> Result<Packing> {
    cfg.validate()?;
    let ordered = order_items(items, cfg.sort_order);

    let mut packer = new_packer(strategy, cfg.capacity);
    for (pos, &item) in ordered.iter().enumerate() {
        match packer.place(item) {
            Ok(p) => trace!(pos, item, bin = p.bin, opened = p.opened, "placed"),
            Err(e @ BinPackError::CapacityExceeded { .. }) => {
                error!(%strategy, pos, item, error = %e, "packer violated bin capacity");
                return Err(e);
            }
            Err(e) => {
                debug!(%strategy, pos, item, error = %e, "item rejected");
                return Err(e);
            }
        }
    }

    let packing = Packing::new(strategy, cfg.capacity, packer.into_bins());
    debug!(%strategy, bins = packing.num_bins(), "packing done");
    Ok(packing)
}

#[instrument(skip_all, fields(items = items.len()))]
/// Runs every strategy on the same input, in `Strategy::ALL` order.
///
/// With feature "parallel" and `cfg.parallel` set, strategies are evaluated
/// concurrently; the result order is unchanged.
pub fn pack_all(items: &[u32], cfg: &PackerConfig) -> Result<Vec<Packing>> {
    cfg.validate()?;

    #[cfg(feature = "parallel")]
    {
        if cfg.parallel {
            return Strategy::ALL
                .par_iter()
                .map(|&s| pack_with(s, items, cfg))
                .collect();
        }
    }

    Strategy::ALL
        .iter()
        .map(|&s| pack_with(s, items, cfg))
        .collect()
}

/// Packs with every strategy and keeps the one using the fewest bins.
/// Ties go to the strategy listed first in `Strategy::ALL`.
pub fn pack_auto(items: &[u32], cfg: &PackerConfig) -> Result<Packing> {
    let results = pack_all(items, cfg)?;
    let best = best_index(&results);
    let packing = results
        .into_iter()
        .nth(best)
        .unwrap_or_else(|| Packing::new(cfg.strategy, cfg.capacity, Vec::new()));
    debug!(strategy = %packing.strategy, bins = packing.num_bins(), "auto picked");
    Ok(packing)
}

/// Index of the packing with the fewest bins (first one wins ties).
/// Returns 0 for an empty slice.
pub fn best_index(results: &[Packing]) -> usize {
    let mut best = 0;
    for (i, p) in results.iter().enumerate() {
        if p.num_bins() < results[best].num_bins() {
            best = i;
        }
    }
    best
}

fn order_items(items: &[u32], order: SortOrder) -> Cow<'_, [u32]> {
    match order {
        SortOrder::None => Cow::Borrowed(items),
        SortOrder::SizeDesc => {
            let mut v = items.to_vec();
            v.sort_by(|a, b| b.cmp(a));
            Cow::Owned(v)
        }
        SortOrder::SizeAsc => {
            let mut v = items.to_vec();
            v.sort();
            Cow::Owned(v)
        }
    }
}
