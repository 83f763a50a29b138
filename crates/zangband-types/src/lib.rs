pub mod artifact;
pub mod building;
pub mod floor;
pub mod game;
pub mod grid;
pub mod monster;
pub mod object;
pub mod player;
pub mod quest;
pub mod terrain;
pub mod world;

pub use artifact::{Artifact, ArtifactList};
pub use building::{Building, BuildingAction, MAX_BUILDINGS};
pub use floor::Floor;
pub use game::{GameState, SystemInfo};
pub use grid::{CaveInfo, Grid};
pub use monster::{
    AbilityFlags, Monster, MonsterRace, MonsterRaceList, RaceFlags1, RaceFlags2, RaceFlags3,
    RaceFlags7, SmartFlags,
};
pub use object::{Feel, GenFlags, IdentFlags, ObjectItem, ObjectKind, ObjectKindList, Tval};
pub use player::Player;
pub use quest::{Quest, QuestFlags, QuestList, QuestStatus, QuestType};
pub use terrain::{TerrainCharacteristics, TerrainList, TerrainState, TerrainType};
pub use world::{Maxima, WildTile, WildernessMode, World};

/// Index into the terrain table (`FEAT_IDX`).
pub type FeatId = i16;
/// Index into the monster race table (`MONRACE_IDX`).
pub type RaceId = i16;
/// Index into the object kind table (`KIND_OBJECT_IDX`).
pub type KindId = i16;
/// Index into the artifact table (`ARTIFACT_IDX`).
pub type ArtifactId = i16;
/// Index into the quest table (`QUEST_IDX`).
pub type QuestId = i16;
/// Dungeon depth in levels (`DEPTH`).
pub type Depth = i16;
/// Grid coordinate (`POSITION`).
pub type Pos = i16;
