//! Pixel → terrain class heuristic.
//!
//! A fixed cascade of colour thresholds tuned against a shaded-relief world
//! map. Rules are evaluated top to bottom and the first match wins; later
//! rules rely on earlier ones having already claimed their cases, so the
//! order below must not change.

use std::fmt;

use crate::sample::RgbSample;

/// Coarse terrain category for one grid cell. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TerrainClass {
    Ocean,
    Land,
    Desert,
    Ice,
    Mountain,
}

impl TerrainClass {
    /// All classes in code order ('0'..'4').
    pub const ALL: [TerrainClass; 5] = [
        TerrainClass::Ocean,
        TerrainClass::Land,
        TerrainClass::Desert,
        TerrainClass::Ice,
        TerrainClass::Mountain,
    ];

    /// Single-character code emitted in the rendered grid.
    pub const fn code(self) -> char {
        match self {
            TerrainClass::Ocean => '0',
            TerrainClass::Land => '1',
            TerrainClass::Desert => '2',
            TerrainClass::Ice => '3',
            TerrainClass::Mountain => '4',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == c)
    }

    pub const fn name(self) -> &'static str {
        match self {
            TerrainClass::Ocean => "ocean",
            TerrainClass::Land => "land",
            TerrainClass::Desert => "desert",
            TerrainClass::Ice => "ice",
            TerrainClass::Mountain => "mountain",
        }
    }
}

impl fmt::Display for TerrainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ── Thresholds ───────────────────────────────────────────────────────────────

/// Ice / snow: every channel strictly above this.
const ICE_MIN: i32 = 210;
/// Bright water: blue must exceed both red and green by more than this.
const WATER_BLUE_MARGIN: i32 = 10;
/// Dark water (deep ocean renders near-black): per-channel upper bounds.
const DARK_WATER_MAX: (i32, i32, i32) = (50, 60, 80);
/// Sand / tan: red and green floors, blue ceiling.
const DESERT_R_MIN: i32 = 160;
const DESERT_G_MIN: i32 = 130;
const DESERT_B_MAX: i32 = 140;
/// Sand must be visibly warm: red over blue by more than this.
const DESERT_WARMTH: i32 = 30;
/// Dark, unsaturated terrain: every channel strictly below this.
const MOUNTAIN_MAX: i32 = 100;

/// Map one RGB sample to its terrain class. Total and pure.
pub fn classify(sample: RgbSample) -> TerrainClass {
    // Widen first so the margin sums cannot overflow u8.
    let (r, g, b) = (sample.r as i32, sample.g as i32, sample.b as i32);

    if r > ICE_MIN && g > ICE_MIN && b > ICE_MIN {
        return TerrainClass::Ice;
    }

    if b > r + WATER_BLUE_MARGIN && b > g + WATER_BLUE_MARGIN {
        return TerrainClass::Ocean;
    }

    let (wr, wg, wb) = DARK_WATER_MAX;
    if r < wr && g < wg && b < wb {
        return TerrainClass::Ocean;
    }

    if r > DESERT_R_MIN && g > DESERT_G_MIN && b < DESERT_B_MAX && r > b + DESERT_WARMTH {
        return TerrainClass::Desert;
    }

    // Vegetation: green dominant.
    if g > r && g > b {
        return TerrainClass::Land;
    }

    if r < MOUNTAIN_MAX && g < MOUNTAIN_MAX && b < MOUNTAIN_MAX {
        return TerrainClass::Mountain;
    }

    // Browns and beiges left over: redder reads as dry land.
    if r > g {
        TerrainClass::Desert
    } else {
        TerrainClass::Land
    }
}
