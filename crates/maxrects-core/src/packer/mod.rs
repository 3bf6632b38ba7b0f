use tracing::{debug, trace};

use crate::config::Heuristic;
use crate::model::{Bin, Rect};

pub mod free_list;
pub mod score;

use score::{Fit, ScoreContext};

/// MaxRects bin packer.
///
/// Keeps the placed rectangles plus the set of maximal free rectangles of one bin.
/// Free rectangles may overlap each other but none is ever contained in another.
#[derive(Debug, Clone)]
pub struct MaxRectsBinPack {
    bin: Bin,
    used: Vec<Rect>,
    free: Vec<Rect>,
    used_area: u64,
}

impl MaxRectsBinPack {
    pub fn new(width: u32, height: u32, allow_rotation: bool) -> Self {
        let mut packer = Self {
            bin: Bin::new(width, height, allow_rotation),
            used: Vec::new(),
            free: Vec::new(),
            used_area: 0,
        };
        packer.init(width, height, allow_rotation);
        packer
    }

    /// (Re)initializes the bin; all previous placements are discarded.
    pub fn init(&mut self, width: u32, height: u32, allow_rotation: bool) {
        self.bin = Bin::new(width, height, allow_rotation);
        self.used.clear();
        self.free.clear();
        self.free.push(self.bin.rect());
        self.used_area = 0;
    }

    pub fn bin(&self) -> &Bin {
        &self.bin
    }

    pub fn used_rects(&self) -> &[Rect] {
        &self.used
    }

    pub fn free_rects(&self) -> &[Rect] {
        &self.free
    }

    /// Places as many of `rects` as possible, always committing the globally best
    /// (candidate, position) pair under `heuristic` next.
    ///
    /// Placed rectangles are removed from `rects` and returned in placement order with their
    /// final position; whatever is left in `rects` did not fit.
    pub fn insert_rects(&mut self, rects: &mut Vec<Rect>, heuristic: Heuristic) -> Vec<Rect> {
        let mut tagged: Vec<((), Rect)> = rects.drain(..).map(|r| ((), r)).collect();
        let placed = self.insert_tagged(&mut tagged, heuristic);
        rects.extend(tagged.into_iter().map(|(_, r)| r));
        placed.into_iter().map(|(_, r)| r).collect()
    }

    /// [`insert_rects`](Self::insert_rects) for rectangles carrying a caller tag.
    pub fn insert_tagged<T>(&mut self, items: &mut Vec<(T, Rect)>, heuristic: Heuristic) -> Vec<(T, Rect)> {
        let mut placed = Vec::with_capacity(items.len());
        while !items.is_empty() {
            let ctx = self.score_context();
            let mut best: Option<(usize, Fit)> = None;
            for (i, (_, r)) in items.iter().enumerate() {
                let Some(fit) = ctx.find_position(heuristic, r.width, r.height) else {
                    continue;
                };
                match best {
                    Some((_, b)) if fit.score >= b.score => {}
                    _ => best = Some((i, fit)),
                }
            }
            let Some((index, fit)) = best else {
                break;
            };
            let (tag, original) = items.remove(index);
            self.place_rect(&fit.node);
            placed.push((tag, finish_placement(&original, &fit.node)));
        }
        debug!(
            heuristic = ?heuristic,
            placed = placed.len(),
            unplaced = items.len(),
            free = self.free.len(),
            "insert_rects done"
        );
        placed
    }

    /// Places a single `width x height` rectangle at its best position, if any.
    pub fn insert(&mut self, width: u32, height: u32, heuristic: Heuristic) -> Option<Rect> {
        let fit = self.score_context().find_position(heuristic, width, height)?;
        self.place_rect(&fit.node);
        Some(finish_placement(&Rect::sized(width, height), &fit.node))
    }

    /// Ratio of used area to bin area.
    pub fn occupancy(&self) -> f32 {
        let area = self.bin.area();
        if area == 0 {
            return 0.0;
        }
        self.used_area as f32 / area as f32
    }

    fn score_context(&self) -> ScoreContext<'_> {
        ScoreContext {
            bin: &self.bin,
            free: &self.free,
            used: &self.used,
            used_area: self.used_area,
        }
    }

    fn place_rect(&mut self, node: &Rect) {
        free_list::split_all(&mut self.free, node);
        free_list::prune(&mut self.free);
        let node = node.bounds();
        self.used.push(node);
        self.used_area += node.area();
        trace!(x = node.x, y = node.y, w = node.width, h = node.height, free = self.free.len(), "placed");
    }
}

/// Carries the placement of `node` onto `original`, toggling `rotated` when the
/// dimensions came out swapped. Squares never toggle.
fn finish_placement(original: &Rect, node: &Rect) -> Rect {
    let swapped = !original.is_square()
        && node.width == original.height
        && node.height == original.width;
    Rect {
        x: node.x,
        y: node.y,
        width: node.width,
        height: node.height,
        rotated: original.rotated ^ swapped,
    }
}
