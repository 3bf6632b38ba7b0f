use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PackError;

/// MaxRects placement heuristics.
///
/// Discriminants are stable ids shared with callers that pass the heuristic as a number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Heuristic {
    /// Minimize the smaller leftover side of the chosen free rectangle.
    BestShortSideFit = 0,
    /// Minimize the larger leftover side of the chosen free rectangle.
    BestLongSideFit = 1,
    /// Minimize wasted area of the chosen free rectangle.
    BestAreaFit = 2,
    /// Tetris-style placement pulled toward the origin.
    BottomLeftRule = 3,
    /// Maximize edge contact with the bin border and placed rectangles.
    ContactPointRule = 4,
    /// Keep as much of the bin's global capacity free as possible.
    LeftoverArea = 5,
}

impl Heuristic {
    /// All heuristics in id order.
    pub const ALL: [Heuristic; 6] = [
        Heuristic::BestShortSideFit,
        Heuristic::BestLongSideFit,
        Heuristic::BestAreaFit,
        Heuristic::BottomLeftRule,
        Heuristic::ContactPointRule,
        Heuristic::LeftoverArea,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Short name as accepted by `FromStr`.
    pub fn short_name(self) -> &'static str {
        match self {
            Heuristic::BestShortSideFit => "bssf",
            Heuristic::BestLongSideFit => "blsf",
            Heuristic::BestAreaFit => "baf",
            Heuristic::BottomLeftRule => "bl",
            Heuristic::ContactPointRule => "cp",
            Heuristic::LeftoverArea => "la",
        }
    }
}

impl TryFrom<u8> for Heuristic {
    type Error = PackError;
    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Heuristic::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| PackError::UnknownHeuristic(id.to_string()))
    }
}

impl FromStr for Heuristic {
    type Err = PackError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<u8>() {
            return Heuristic::try_from(id);
        }
        match s.to_ascii_lowercase().as_str() {
            "bssf" | "bestshortsidefit" => Ok(Self::BestShortSideFit),
            "blsf" | "bestlongsidefit" => Ok(Self::BestLongSideFit),
            "baf" | "bestareafit" => Ok(Self::BestAreaFit),
            "bl" | "bottomleft" | "bottomleftrule" => Ok(Self::BottomLeftRule),
            "cp" | "contactpoint" | "contactpointrule" => Ok(Self::ContactPointRule),
            "la" | "leftoverarea" => Ok(Self::LeftoverArea),
            _ => Err(PackError::UnknownHeuristic(s.to_string())),
        }
    }
}

/// Pre-sort applied by the layout layer before packing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    AreaDesc,
    MaxSideDesc,
    HeightDesc,
    WidthDesc,
    NameAsc,
    None,
}

impl FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "area_desc" => Ok(Self::AreaDesc),
            "max_side_desc" => Ok(Self::MaxSideDesc),
            "height_desc" => Ok(Self::HeightDesc),
            "width_desc" => Ok(Self::WidthDesc),
            "name_asc" => Ok(Self::NameAsc),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Page width in pixels.
    #[serde(default = "default_dim")]
    pub width: u32,
    /// Page height in pixels.
    #[serde(default = "default_dim")]
    pub height: u32,
    /// Allow 90° rotations for placements where beneficial.
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
    #[serde(default = "default_heuristic")]
    pub heuristic: Heuristic,
    #[serde(default = "default_sort_order")]
    pub sort_order: SortOrder,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            width: default_dim(),
            height: default_dim(),
            allow_rotation: default_allow_rotation(),
            heuristic: default_heuristic(),
            sort_order: default_sort_order(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Zero-sized pages are rejected; the packer itself never checks its inputs.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PackError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_dim() -> u32 {
    1024
}
fn default_allow_rotation() -> bool {
    true
}
fn default_heuristic() -> Heuristic {
    Heuristic::BestShortSideFit
}
fn default_sort_order() -> SortOrder {
    SortOrder::None
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
    pub fn with_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.width = w;
        self.cfg.height = h;
        self
    }
    pub fn allow_rotation(mut self, v: bool) -> Self {
        self.cfg.allow_rotation = v;
        self
    }
    pub fn heuristic(mut self, v: Heuristic) -> Self {
        self.cfg.heuristic = v;
        self
    }
    pub fn sort_order(mut self, v: SortOrder) -> Self {
        self.cfg.sort_order = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
