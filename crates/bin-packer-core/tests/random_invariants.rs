use bin_packer_core::prelude::*;
use rand::{Rng, SeedableRng};

fn random_items(seed: u64, count: usize, capacity: u32) -> Vec<u32> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(1..=capacity)).collect()
}

fn sorted(mut v: Vec<u32>) -> Vec<u32> {
    v.sort_unstable();
    v
}

#[test]
fn capacity_never_exceeded_and_items_conserved() {
    for seed in 0..20 {
        let capacity = 10 + (seed as u32 % 5) * 7;
        let items = random_items(seed, 200, capacity);
        for strategy in Strategy::ALL {
            let cfg = PackerConfig::builder()
                .capacity(capacity)
                .strategy(strategy)
                .build();
            let packing = pack_items(&items, &cfg).expect("all items fit");
            for bin in &packing.bins {
                assert!(bin.occupied() <= capacity);
                assert!(!bin.is_empty());
                assert_eq!(bin.occupied(), bin.items().iter().sum::<u32>());
            }
            assert_eq!(
                sorted(packing.items().collect()),
                sorted(items.clone()),
                "seed {seed}, {strategy}"
            );
            let stats = packing.stats();
            assert_eq!(stats.num_items, items.len());
            assert!(stats.num_bins >= stats.lower_bound);
            assert!(stats.occupancy <= 1.0);
        }
    }
}

#[test]
fn next_fit_consecutive_bins_overflow_capacity() {
    let items = random_items(7, 300, 10);
    let cfg = PackerConfig::builder().strategy(Strategy::NextFit).build();
    let packing = pack_items(&items, &cfg).unwrap();
    for pair in packing.bins.windows(2) {
        assert!(pair[0].occupied() + pair[1].occupied() > 10);
    }
}

#[test]
fn first_and_best_fit_leave_at_most_one_half_empty_bin() {
    for seed in 0..10 {
        let items = random_items(seed, 250, 20);
        for strategy in [Strategy::FirstFit, Strategy::BestFit] {
            let cfg = PackerConfig::builder()
                .capacity(20)
                .strategy(strategy)
                .build();
            let packing = pack_items(&items, &cfg).unwrap();
            let half_empty = packing
                .bins
                .iter()
                .filter(|b| b.occupied() * 2 <= 20)
                .count();
            assert!(half_empty <= 1, "seed {seed}, {strategy}: {half_empty}");
        }
    }
}

#[test]
fn items_keep_arrival_order_within_bins() {
    // With distinct sizes, each bin's items must be a subsequence of the input.
    let items: Vec<u32> = (1..=30).map(|i| (i * 7) % 31).collect();
    for strategy in Strategy::ALL {
        let cfg = PackerConfig::builder()
            .capacity(31)
            .strategy(strategy)
            .build();
        let packing = pack_items(&items, &cfg).unwrap();
        for bin in &packing.bins {
            let positions: Vec<usize> = bin
                .items()
                .iter()
                .map(|x| items.iter().position(|y| y == x).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{strategy}");
        }
    }
}

#[test]
fn random_runs_are_deterministic() {
    let items = random_items(99, 150, 10);
    for strategy in Strategy::ALL {
        let cfg = PackerConfig::builder().strategy(strategy).build();
        let a = pack_items(&items, &cfg).unwrap();
        let b = pack_items(&items, &cfg).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }
}
