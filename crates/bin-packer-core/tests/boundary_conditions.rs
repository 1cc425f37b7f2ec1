use bin_packer_core::prelude::*;

#[test]
fn bin_starts_empty() {
    let bin = Bin::new(10);
    assert!(bin.is_empty());
    assert_eq!(bin.occupied(), 0);
    assert_eq!(bin.remaining_capacity(), 10);
    assert_eq!(bin.to_string(), "");
}

#[test]
fn bin_accepts_item_equal_to_remaining() {
    let mut bin = Bin::new(10);
    bin.add(6).unwrap();
    assert!(bin.fits(4));
    bin.add(4).unwrap();
    assert!(bin.is_full());
    assert_eq!(bin.occupied(), 10);
    assert_eq!(bin.remaining_capacity(), 0);
    assert_eq!(bin.to_string(), "6 4");
}

#[test]
fn bin_rejects_overflow_without_mutating() {
    let mut bin = Bin::new(10);
    bin.add(7).unwrap();
    let result = bin.add(4);
    match result {
        Err(BinPackError::CapacityExceeded { item, remaining }) => {
            assert_eq!(item, 4);
            assert_eq!(remaining, 3);
        }
        _ => panic!("Expected CapacityExceeded error"),
    }
    assert_eq!(bin.items(), &[7]);
    assert_eq!(bin.occupied(), 7);
}

#[test]
fn exact_fill_is_accepted_by_every_strategy() {
    for strategy in Strategy::ALL {
        let cfg = PackerConfig::builder().strategy(strategy).build();
        let packing = pack_items(&[7, 3], &cfg).unwrap();
        assert_eq!(packing.num_bins(), 1, "{strategy}");
        assert!(packing.bins[0].is_full());
        assert_eq!(packing.bins[0].remaining_capacity(), 0);
    }
}

#[test]
fn item_equal_to_capacity_fills_a_fresh_bin() {
    for strategy in Strategy::ALL {
        let cfg = PackerConfig::builder().strategy(strategy).build();
        let packing = pack_items(&[10, 10], &cfg).unwrap();
        assert_eq!(packing.num_bins(), 2, "{strategy}");
        assert!(packing.bins.iter().all(|b| b.is_full()));
    }
}

#[test]
fn item_too_large_for_every_strategy() {
    for strategy in Strategy::ALL {
        let cfg = PackerConfig::builder().strategy(strategy).build();
        let result = pack_items(&[4, 11, 3], &cfg);
        match result {
            Err(BinPackError::ItemTooLarge { item, capacity }) => {
                assert_eq!(item, 11);
                assert_eq!(capacity, 10);
            }
            other => panic!("{strategy}: expected ItemTooLarge, got {other:?}"),
        }
    }
}

#[test]
fn item_too_large_leaves_packer_unchanged() {
    for strategy in Strategy::ALL {
        let mut packer = new_packer(strategy, 10);
        packer.place(4).unwrap();
        let before = packer.bins().to_vec();
        assert!(!packer.can_pack(12));
        assert!(matches!(
            packer.place(12),
            Err(BinPackError::ItemTooLarge { item: 12, capacity: 10 })
        ));
        assert_eq!(packer.bins(), before.as_slice(), "{strategy}");
    }
}

#[test]
fn zero_sized_item_is_invalid_input() {
    for strategy in Strategy::ALL {
        let mut packer = new_packer(strategy, 10);
        assert!(!packer.can_pack(0));
        assert!(matches!(packer.place(0), Err(BinPackError::InvalidInput(_))));
        assert!(packer.bins().is_empty());
    }
}

#[test]
fn zero_capacity_is_rejected() {
    let cfg = PackerConfig {
        capacity: 0,
        ..Default::default()
    };
    assert!(matches!(cfg.validate(), Err(BinPackError::InvalidConfig(_))));
    assert!(matches!(
        pack_items(&[1], &cfg),
        Err(BinPackError::InvalidConfig(_))
    ));
}

#[test]
fn empty_input_gives_no_bins() {
    let cfg = PackerConfig::default();
    let packing = pack_items(&[], &cfg).unwrap();
    assert_eq!(packing.num_bins(), 0);
    assert_eq!(packing.to_string(), "");
    let stats = packing.stats();
    assert_eq!(stats.occupancy, 0.0);
    assert_eq!(stats.lower_bound, 0);
}

#[test]
fn larger_capacity_changes_packing_not_rules() {
    let cfg = PackerConfig::builder()
        .capacity(100)
        .strategy(Strategy::NextFit)
        .build();
    let packing = pack_items(&[60, 50, 50, 1], &cfg).unwrap();
    assert_eq!(packing.to_string(), "Bin 0: 60\nBin 1: 50 50\nBin 2: 1\n");
    assert!(packing.bins.iter().all(|b| b.capacity() == 100));
}
