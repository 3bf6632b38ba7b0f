use maxrects_core::config::Heuristic;
use maxrects_core::model::Rect;
use maxrects_core::packer::MaxRectsBinPack;

#[test]
fn three_rects_fit_with_best_area_fit() {
    let mut p = MaxRectsBinPack::new(100, 100, false);
    let mut rects = vec![Rect::sized(60, 40), Rect::sized(40, 30), Rect::sized(30, 70)];
    let placed = p.insert_rects(&mut rects, Heuristic::BestAreaFit);
    assert_eq!(placed.len(), 3);
    assert!(rects.is_empty());
    let bin = p.bin().rect();
    for (i, a) in placed.iter().enumerate() {
        assert!(a.is_contained_in(&bin));
        assert!(!a.rotated);
        for b in &placed[i + 1..] {
            assert!(!a.intersects(b));
        }
    }
    // tightest area fit across all pending rects goes first
    assert_eq!(placed[0], Rect::new(0, 0, 60, 40));
    assert_eq!(placed[1], Rect::new(60, 0, 30, 70));
}

#[test]
fn second_square_does_not_fit_after_first() {
    let mut p = MaxRectsBinPack::new(10, 10, true);
    let mut rects = vec![Rect::sized(6, 6), Rect::sized(6, 6)];
    let placed = p.insert_rects(&mut rects, Heuristic::BestShortSideFit);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0], Rect::new(0, 0, 6, 6));
    assert_eq!(rects.len(), 1);
}

#[test]
fn bottom_left_stacks_toward_origin() {
    let mut p = MaxRectsBinPack::new(30, 30, false);
    let mut rects = vec![Rect::sized(10, 10); 4];
    let placed = p.insert_rects(&mut rects, Heuristic::BottomLeftRule);
    let coords: Vec<(u32, u32)> = placed.iter().map(|r| (r.x, r.y)).collect();
    assert_eq!(coords, vec![(0, 0), (10, 0), (20, 0), (0, 10)]);
}

#[test]
fn global_best_picks_perfect_fit_out_of_order() {
    let mut p = MaxRectsBinPack::new(40, 40, false);
    let mut rects = vec![Rect::sized(10, 10), Rect::sized(40, 40)];
    let placed = p.insert_rects(&mut rects, Heuristic::BestShortSideFit);
    assert_eq!(placed, vec![Rect::new(0, 0, 40, 40)]);
    assert_eq!(rects, vec![Rect::sized(10, 10)]);
}
