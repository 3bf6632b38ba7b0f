//! Placement scorers. Every score pair is minimized lexicographically (primary, then secondary).

use crate::config::Heuristic;
use crate::model::{Bin, Rect};

/// `(primary, secondary)`; lower is better.
pub type Score = (i64, i64);

/// Best placement found for one candidate size: the placed node and its score.
///
/// `node.rotated` is true when the node uses the swapped orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fit {
    pub node: Rect,
    pub score: Score,
}

/// Read-only view of the packer state that the scorers need.
pub(crate) struct ScoreContext<'a> {
    pub bin: &'a Bin,
    pub free: &'a [Rect],
    pub used: &'a [Rect],
    pub used_area: u64,
}

impl ScoreContext<'_> {
    /// Scans every free rectangle, unrotated first, then rotated when the bin allows it.
    /// Ties keep the first placement scanned. `None` means the size fits nowhere.
    pub(crate) fn find_position(&self, heuristic: Heuristic, width: u32, height: u32) -> Option<Fit> {
        let mut best: Option<Fit> = None;
        for fr in self.free {
            if fr.width >= width && fr.height >= height {
                let node = Rect::new(fr.x, fr.y, width, height);
                self.consider(heuristic, fr, node, &mut best);
            }
            if self.bin.allow_rotation && fr.width >= height && fr.height >= width {
                let mut node = Rect::new(fr.x, fr.y, height, width);
                node.rotated = true;
                self.consider(heuristic, fr, node, &mut best);
            }
        }
        best
    }

    fn consider(&self, heuristic: Heuristic, fr: &Rect, node: Rect, best: &mut Option<Fit>) {
        let score = self.score(heuristic, fr, &node);
        match *best {
            Some(b) if score >= b.score => {}
            _ => *best = Some(Fit { node, score }),
        }
    }

    fn score(&self, heuristic: Heuristic, fr: &Rect, node: &Rect) -> Score {
        match heuristic {
            Heuristic::BestShortSideFit => short_side_fit(fr, node),
            Heuristic::BestLongSideFit => long_side_fit(fr, node),
            Heuristic::BestAreaFit => area_fit(fr, node),
            Heuristic::BottomLeftRule => bottom_left(node),
            Heuristic::ContactPointRule => (-(self.contact_point_score(node) as i64), 0),
            Heuristic::LeftoverArea => self.leftover_area(node),
        }
    }

    /// Total edge length `node` shares with the bin border and with placed rectangles.
    pub(crate) fn contact_point_score(&self, node: &Rect) -> u64 {
        let mut score = 0u64;
        if node.x == 0 || node.right() == self.bin.width {
            score += u64::from(node.height);
        }
        if node.y == 0 || node.bottom() == self.bin.height {
            score += u64::from(node.width);
        }
        for u in self.used {
            if u.x == node.right() || u.right() == node.x {
                score += overlap_1d(node.y, node.bottom(), u.y, u.bottom());
            }
            if u.y == node.bottom() || u.bottom() == node.y {
                score += overlap_1d(node.x, node.right(), u.x, u.right());
            }
        }
        score
    }

    fn leftover_area(&self, node: &Rect) -> Score {
        let remaining = self
            .bin
            .area()
            .saturating_sub(self.used_area)
            .saturating_sub(node.area());
        let leftover_w = i64::from(self.bin.width) - i64::from(node.width);
        let leftover_h = i64::from(self.bin.height) - i64::from(node.height);
        (-(remaining as i64), -leftover_w.min(leftover_h))
    }
}

fn leftovers(fr: &Rect, node: &Rect) -> (i64, i64) {
    (
        i64::from(fr.width) - i64::from(node.width),
        i64::from(fr.height) - i64::from(node.height),
    )
}

fn short_side_fit(fr: &Rect, node: &Rect) -> Score {
    let (lw, lh) = leftovers(fr, node);
    (lw.min(lh), lw.max(lh))
}

fn long_side_fit(fr: &Rect, node: &Rect) -> Score {
    let (lw, lh) = leftovers(fr, node);
    (lw.max(lh), lw.min(lh))
}

fn area_fit(fr: &Rect, node: &Rect) -> Score {
    let (lw, lh) = leftovers(fr, node);
    (fr.area() as i64 - node.area() as i64, lw.min(lh))
}

fn bottom_left(node: &Rect) -> Score {
    (i64::from(node.bottom()), i64::from(node.x))
}

/// Length of the intersection of `[a1, a2)` and `[b1, b2)`; 0 when disjoint.
fn overlap_1d(a1: u32, a2: u32, b1: u32, b2: u32) -> u64 {
    if a2 < b1 || b2 < a1 {
        return 0;
    }
    u64::from(a2.min(b2) - a1.max(b1))
}
