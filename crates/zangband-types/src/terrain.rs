use bitflags::bitflags;
use serde::Serialize;

use crate::FeatId;

/// Number of state transitions a terrain may define (`MAX_FEAT_STATES`).
pub const MAX_FEAT_STATES: usize = 8;

bitflags! {
    /// Terrain characteristic flags from `defines.h` (FF_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct TerrainCharacteristics: u32 {
        const LOS       = 0x0000_0001;
        const PROJECT   = 0x0000_0002;
        const MOVE      = 0x0000_0004;
        const PLACE     = 0x0000_0008;
        const DROP      = 0x0000_0010;
        const REMEMBER  = 0x0000_0020;
        const GLOW      = 0x0000_0040;
        const PERMANENT = 0x0000_0080;
        const FLOOR     = 0x0000_0100;
        const WALL      = 0x0000_0200;
        const DOOR      = 0x0000_0400;
        const STAIRS    = 0x0000_0800;
        const LESS      = 0x0000_1000;
        const MORE      = 0x0000_2000;
        const TRAP      = 0x0000_4000;
        const STORE     = 0x0000_8000;
        const BLDG      = 0x0001_0000;
        const WATER     = 0x0002_0000;
        const DEEP      = 0x0004_0000;
        const LAVA      = 0x0008_0000;
        const TREE      = 0x0010_0000;
        const CONVERT   = 0x0020_0000;
        const PATTERN   = 0x0040_0000;
        const TOWN      = 0x0080_0000;
        const ENTRANCE  = 0x0100_0000;
    }
}

/// One state transition: what this terrain turns into when acted on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TerrainState {
    /// Triggering action, as a characteristic bit.
    pub action: u32,
    /// Tag of the destination terrain.
    pub result_tag: String,
    /// Resolved destination terrain id.
    pub result: FeatId,
}

/// A single terrain definition from the terrain table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TerrainType {
    pub idx: FeatId,
    /// Lookup tag, e.g. `FLOOR`, `GRANITE_WALL`.
    pub tag: String,
    pub name: String,
    /// Terrain shown while this one is undiscovered.
    pub mimic: FeatId,
    /// Terrain left behind by *destruction*.
    pub destroyed: FeatId,
    pub flags: TerrainCharacteristics,
    /// Display priority on the reduced-scale map.
    pub priority: i16,
    pub subtype: i16,
    pub power: i16,
    pub symbol: char,
    pub states: Vec<TerrainState>,
}

impl TerrainType {
    pub fn is_permanent_wall(&self) -> bool {
        self.flags
            .contains(TerrainCharacteristics::WALL | TerrainCharacteristics::PERMANENT)
    }
}

/// The terrain table (`f_info`), indexed by `FeatId` and searchable by tag.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TerrainList {
    terrains: Vec<TerrainType>,
}

impl TerrainList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut terrain: TerrainType) -> FeatId {
        let idx = self.terrains.len() as FeatId;
        terrain.idx = idx;
        self.terrains.push(terrain);
        idx
    }

    /// Resolve a tag to its terrain id.
    pub fn find(&self, tag: &str) -> Option<FeatId> {
        self.terrains
            .iter()
            .position(|t| t.tag == tag)
            .map(|i| i as FeatId)
    }

    pub fn get(&self, idx: FeatId) -> Option<&TerrainType> {
        self.terrains.get(idx as usize)
    }

    pub fn len(&self) -> usize {
        self.terrains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terrains.is_empty()
    }

    pub fn resize(&mut self, new_len: usize) {
        self.terrains.resize_with(new_len, TerrainType::default);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TerrainType> {
        self.terrains.iter()
    }
}

impl std::ops::Index<FeatId> for TerrainList {
    type Output = TerrainType;

    fn index(&self, idx: FeatId) -> &TerrainType {
        &self.terrains[idx as usize]
    }
}

impl std::ops::IndexMut<FeatId> for TerrainList {
    fn index_mut(&mut self, idx: FeatId) -> &mut TerrainType {
        &mut self.terrains[idx as usize]
    }
}
