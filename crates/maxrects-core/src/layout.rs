use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{Heuristic, PackerConfig, SortOrder};
use crate::error::{PackError, Result};
use crate::model::{PackStats, Rect};
use crate::packer::MaxRectsBinPack;

/// A rectangle placed on a page, tagged with the caller's key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Placement<K = String> {
    pub key: K,
    pub rect: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutPage<K = String> {
    pub id: usize,
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement<K>>,
}

/// Multi-page layout produced by [`pack_pages`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout<K = String> {
    pub heuristic: Heuristic,
    pub allow_rotation: bool,
    pub pages: Vec<LayoutPage<K>>,
}

impl<K> Layout<K> {
    /// Computes packing statistics for this layout.
    pub fn stats(&self) -> PackStats {
        let mut num_placements = 0;
        let mut total_page_area = 0u64;
        let mut used_area = 0u64;
        let mut num_rotated = 0;
        for page in &self.pages {
            total_page_area += u64::from(page.width) * u64::from(page.height);
            for p in &page.placements {
                num_placements += 1;
                used_area += p.rect.area();
                if p.rect.rotated {
                    num_rotated += 1;
                }
            }
        }
        let occupancy = if total_page_area > 0 {
            used_area as f64 / total_page_area as f64
        } else {
            0.0
        };
        PackStats {
            num_pages: self.pages.len(),
            num_placements,
            total_page_area,
            used_area,
            occupancy,
            num_rotated,
        }
    }
}

impl<K: Serialize> Layout<K> {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[instrument(skip_all)]
/// Packs `(key, width, height)` items onto as many pages as needed.
///
/// Each page is a fresh bin fed with every item still pending; the ones that do not fit roll
/// over to the next page. Sorting is stable, so equal sort keys keep input order.
pub fn pack_pages<K>(items: Vec<(K, u32, u32)>, cfg: &PackerConfig) -> Result<Layout<K>>
where
    K: Ord + Display,
{
    cfg.validate()?;
    if items.is_empty() {
        return Err(PackError::Empty);
    }

    let mut items = items;
    sort_items(&mut items, cfg.sort_order);
    let mut pending: Vec<(K, Rect)> = items
        .into_iter()
        .map(|(k, w, h)| (k, Rect::sized(w, h)))
        .collect();

    let mut packer = MaxRectsBinPack::new(cfg.width, cfg.height, cfg.allow_rotation);
    let mut pages: Vec<LayoutPage<K>> = Vec::new();
    while !pending.is_empty() {
        packer.init(cfg.width, cfg.height, cfg.allow_rotation);
        let placed = packer.insert_tagged(&mut pending, cfg.heuristic);
        if placed.is_empty() {
            let (key, r) = &pending[0];
            return Err(PackError::TooLarge {
                key: key.to_string(),
                width: r.width,
                height: r.height,
            });
        }
        debug!(
            page = pages.len(),
            placed = placed.len(),
            remaining = pending.len(),
            occupancy = packer.occupancy(),
            "page packed"
        );
        pages.push(LayoutPage {
            id: pages.len(),
            width: cfg.width,
            height: cfg.height,
            placements: placed
                .into_iter()
                .map(|(key, rect)| Placement { key, rect })
                .collect(),
        });
    }

    Ok(Layout {
        heuristic: cfg.heuristic,
        allow_rotation: cfg.allow_rotation,
        pages,
    })
}

/// Packs with every heuristic and keeps the layout with the fewest pages, then the highest
/// occupancy. Ties go to the lower heuristic id.
#[instrument(skip_all)]
pub fn pack_best<K>(items: Vec<(K, u32, u32)>, cfg: &PackerConfig) -> Result<Layout<K>>
where
    K: Clone + Ord + Display + Send + Sync,
{
    let candidates: Vec<PackerConfig> = Heuristic::ALL
        .iter()
        .map(|h| {
            let mut c = cfg.clone();
            c.heuristic = *h;
            c
        })
        .collect();

    #[cfg(feature = "parallel")]
    let results: Vec<Result<Layout<K>>> = candidates
        .par_iter()
        .map(|c| pack_pages(items.clone(), c))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<Layout<K>>> = candidates
        .iter()
        .map(|c| pack_pages(items.clone(), c))
        .collect();

    let mut best: Option<(Layout<K>, usize, f64)> = None;
    for res in results {
        let layout = res?;
        let stats = layout.stats();
        let better = match &best {
            None => true,
            Some((_, pages, occ)) => {
                stats.num_pages < *pages || (stats.num_pages == *pages && stats.occupancy > *occ)
            }
        };
        if better {
            debug!(heuristic = ?layout.heuristic, pages = stats.num_pages, occupancy = stats.occupancy, "new best");
            best = Some((layout, stats.num_pages, stats.occupancy));
        }
    }
    best.map(|(l, _, _)| l).ok_or(PackError::Empty)
}

fn sort_items<K: Ord>(items: &mut [(K, u32, u32)], order: SortOrder) {
    let area = |w: u32, h: u32| u64::from(w) * u64::from(h);
    match order {
        SortOrder::None => {}
        SortOrder::NameAsc => items.sort_by(|a, b| a.0.cmp(&b.0)),
        SortOrder::AreaDesc => items.sort_by(|a, b| area(b.1, b.2).cmp(&area(a.1, a.2))),
        SortOrder::MaxSideDesc => items.sort_by(|a, b| b.1.max(b.2).cmp(&a.1.max(a.2))),
        SortOrder::HeightDesc => items.sort_by(|a, b| b.2.cmp(&a.2)),
        SortOrder::WidthDesc => items.sort_by(|a, b| b.1.cmp(&a.1)),
    }
}
