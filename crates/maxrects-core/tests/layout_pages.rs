use maxrects_core::config::{Heuristic, PackerConfig, SortOrder};
use maxrects_core::error::PackError;
use maxrects_core::layout::{Layout, pack_best, pack_pages};

fn items(n: usize, w: u32, h: u32) -> Vec<(String, u32, u32)> {
    (0..n).map(|i| (format!("r{i:02}"), w, h)).collect()
}

#[test]
fn overflow_rolls_over_to_new_pages() {
    let cfg = PackerConfig::builder()
        .with_dimensions(64, 64)
        .allow_rotation(false)
        .heuristic(Heuristic::BestShortSideFit)
        .build();
    let layout = pack_pages(items(20, 32, 32), &cfg).unwrap();
    assert_eq!(layout.pages.len(), 5);
    for (i, page) in layout.pages.iter().enumerate() {
        assert_eq!(page.id, i);
        assert_eq!(page.placements.len(), 4);
    }
    let stats = layout.stats();
    assert_eq!(stats.num_placements, 20);
    assert_eq!(stats.occupancy, 1.0);
    assert_eq!(stats.wasted_area(), 0);
}

#[test]
fn every_key_is_placed_exactly_once() {
    let input: Vec<(String, u32, u32)> = (0..40)
        .map(|i| (format!("k{i}"), 8 + (i * 7) % 40, 8 + (i * 13) % 40))
        .collect();
    let cfg = PackerConfig::builder()
        .with_dimensions(128, 128)
        .sort_order(SortOrder::AreaDesc)
        .build();
    let layout = pack_pages(input.clone(), &cfg).unwrap();
    let mut keys: Vec<String> = layout
        .pages
        .iter()
        .flat_map(|p| p.placements.iter().map(|pl| pl.key.clone()))
        .collect();
    keys.sort();
    let mut expected: Vec<String> = input.into_iter().map(|(k, _, _)| k).collect();
    expected.sort();
    assert_eq!(keys, expected);
}

#[test]
fn too_large_item_is_an_error() {
    let cfg = PackerConfig::builder().with_dimensions(32, 32).build();
    let err = pack_pages(vec![("big".to_string(), 40, 8)], &cfg).unwrap_err();
    match err {
        PackError::TooLarge { key, width, height } => {
            assert_eq!(key, "big");
            assert_eq!((width, height), (40, 8));
        }
        other => panic!("expected TooLarge, got {other:?}"),
    }
}

#[test]
fn empty_input_and_bad_config_are_rejected() {
    let cfg = PackerConfig::default();
    assert!(matches!(
        pack_pages(Vec::<(String, u32, u32)>::new(), &cfg),
        Err(PackError::Empty)
    ));
    let bad = PackerConfig::builder().with_dimensions(0, 0).build();
    assert!(matches!(
        pack_pages(items(1, 1, 1), &bad),
        Err(PackError::InvalidDimensions { .. })
    ));
}

#[test]
fn name_sort_orders_placements_on_ties() {
    let cfg = PackerConfig::builder()
        .with_dimensions(40, 10)
        .allow_rotation(false)
        .heuristic(Heuristic::BottomLeftRule)
        .sort_order(SortOrder::NameAsc)
        .build();
    let input = vec![
        ("c".to_string(), 10, 10),
        ("a".to_string(), 10, 10),
        ("b".to_string(), 10, 10),
    ];
    let layout = pack_pages(input, &cfg).unwrap();
    let order: Vec<(&str, u32)> = layout.pages[0]
        .placements
        .iter()
        .map(|p| (p.key.as_str(), p.rect.x))
        .collect();
    assert_eq!(order, vec![("a", 0), ("b", 10), ("c", 20)]);
}

#[test]
fn pack_best_is_no_worse_than_any_heuristic() {
    let input: Vec<(String, u32, u32)> = (0..60)
        .map(|i| (format!("s{i}"), 6 + (i * 11) % 50, 6 + (i * 17) % 50))
        .collect();
    let cfg = PackerConfig::builder().with_dimensions(160, 160).build();
    let best = pack_best(input.clone(), &cfg).unwrap().stats();
    for h in Heuristic::ALL {
        let mut c = cfg.clone();
        c.heuristic = h;
        let s = pack_pages(input.clone(), &c).unwrap().stats();
        assert!(
            best.num_pages < s.num_pages
                || (best.num_pages == s.num_pages && best.occupancy >= s.occupancy),
            "{h:?} beat pack_best"
        );
    }
}

#[test]
fn layout_serializes_to_json() {
    let cfg = PackerConfig::builder().with_dimensions(32, 32).build();
    let layout = pack_pages(items(2, 8, 4), &cfg).unwrap();
    let json = layout.to_json_pretty().unwrap();
    assert!(json.contains("\"heuristic\": \"bestshortsidefit\""));
    let back: Layout = serde_json::from_str(&json).unwrap();
    assert_eq!(back.pages[0].placements, layout.pages[0].placements);
}
