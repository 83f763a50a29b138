use serde::Serialize;

use crate::artifact::ArtifactList;
use crate::building::{Building, MAX_BUILDINGS};
use crate::floor::Floor;
use crate::monster::MonsterRaceList;
use crate::object::ObjectKindList;
use crate::player::Player;
use crate::quest::QuestList;
use crate::terrain::TerrainList;
use crate::world::World;

/// Host/display facts the template language can condition on.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    /// Platform tag (`ANGBAND_SYS`), e.g. `gcu`, `x11`.
    pub sys: String,
    /// Graphics mode tag (`ANGBAND_GRAF`), e.g. `old`, `new`.
    pub graf: String,
    pub monochrome: bool,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            sys: "gcu".into(),
            graf: "old".into(),
            monochrome: false,
        }
    }
}

/// Everything the template engine reads and mutates, in one place.
///
/// The C game kept these as file-scope globals; here they travel as a
/// single state value so the loaders and the turn loop can borrow what
/// they need.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub player: Player,
    pub world: World,
    pub floor: Floor,
    pub quests: QuestList,
    pub terrains: TerrainList,
    pub races: MonsterRaceList,
    pub kinds: ObjectKindList,
    pub artifacts: ArtifactList,
    pub buildings: Vec<Building>,
    pub system: SystemInfo,
}

impl GameState {
    pub fn new(seed_town: u32, floor_height: i16, floor_width: i16) -> Self {
        Self {
            player: Player::default(),
            world: World::new(seed_town),
            floor: Floor::new(floor_height, floor_width),
            quests: QuestList::new(),
            terrains: TerrainList::new(),
            races: MonsterRaceList::new(),
            kinds: ObjectKindList::new(),
            artifacts: ArtifactList::new(),
            buildings: vec![Building::default(); MAX_BUILDINGS],
            system: SystemInfo::default(),
        }
    }
}
