use serde::Serialize;
use strum::FromRepr;

use crate::{FeatId, Pos};

/// Wilderness play mode: the full map, the scaled-down one, or a single
/// vanilla town.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, FromRepr)]
#[repr(u8)]
pub enum WildernessMode {
    /// `vanilla_town`: one town, no wilderness.
    None = 0,
    /// `lite_town`: towns without the connecting overworld.
    Lite = 1,
    #[default]
    Normal = 2,
}

/// One wilderness square.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct WildTile {
    pub terrain: FeatId,
    /// Town occupying this square, 0 for none.
    pub town: i16,
}

/// Table size limits (`max_*` variables), set by `M:` lines.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Maxima {
    pub towns: u16,
    pub quests: u16,
    pub races: u16,
    pub kinds: u16,
    pub vaults: u16,
    pub features: u16,
    pub artifacts: u16,
    pub egos: u16,
    pub dungeons: u16,
    /// Floor object list capacity.
    pub objects: u16,
    /// Floor monster list capacity.
    pub monsters: u16,
    pub wild_x: Pos,
    pub wild_y: Pos,
}

/// World-scoped state (`world_type`): seeds, maxima, the wilderness map.
#[derive(Debug, Clone, Serialize)]
pub struct World {
    /// Fixed seed for town layout; also feeds `$RANDOM`.
    pub seed_town: u32,
    pub mode: WildernessMode,
    pub maxima: Maxima,
    wilderness: Vec<Vec<WildTile>>,
}

impl World {
    pub fn new(seed_town: u32) -> Self {
        Self {
            seed_town,
            mode: WildernessMode::default(),
            maxima: Maxima::default(),
            wilderness: Vec::new(),
        }
    }

    /// Resize the wilderness map to `maxima.wild_y` by `maxima.wild_x`,
    /// keeping existing tiles.
    pub fn resize_wilderness(&mut self) {
        let (h, w) = (self.maxima.wild_y as usize, self.maxima.wild_x as usize);
        self.wilderness
            .resize_with(h, || vec![WildTile::default(); w]);
        for row in &mut self.wilderness {
            row.resize_with(w, WildTile::default);
        }
    }

    pub fn wild_in_bounds(&self, y: Pos, x: Pos) -> bool {
        y >= 0 && x >= 0 && y < self.maxima.wild_y && x < self.maxima.wild_x
    }

    pub fn wild(&self, y: Pos, x: Pos) -> &WildTile {
        &self.wilderness[y as usize][x as usize]
    }

    pub fn wild_mut(&mut self, y: Pos, x: Pos) -> &mut WildTile {
        &mut self.wilderness[y as usize][x as usize]
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(0)
    }
}
