//! Baseline game tables: the terrain, monsters, objects and artifacts
//! the shipped template files refer to. A full game would read these
//! from its own info files; the engine only needs a consistent core
//! set.

use zangband_types::{
    AbilityFlags, Artifact, ArtifactList, GameState, MonsterRace, MonsterRaceList, ObjectKind,
    ObjectKindList, RaceFlags1, RaceFlags2, RaceFlags3, RaceFlags7, TerrainCharacteristics as Tc,
    TerrainList, TerrainType, Tval,
};

/// Default floor dimensions (`MAX_HGT` x `MAX_WID`).
pub const MAX_HGT: i16 = 66;
pub const MAX_WID: i16 = 198;

fn feat(tag: &str, name: &str, symbol: char, flags: Tc, subtype: i16) -> TerrainType {
    TerrainType {
        tag: tag.into(),
        name: name.into(),
        symbol,
        flags,
        subtype,
        ..Default::default()
    }
}

pub fn standard_terrains() -> TerrainList {
    let walkable = Tc::FLOOR | Tc::MOVE | Tc::PLACE | Tc::DROP | Tc::LOS | Tc::PROJECT;
    let trap = Tc::TRAP | Tc::MOVE | Tc::LOS | Tc::PROJECT | Tc::FLOOR;
    let entrance = Tc::MOVE | Tc::LOS | Tc::PROJECT | Tc::PERMANENT | Tc::REMEMBER;

    let mut list = TerrainList::new();
    list.push(feat("NONE", "nothing", ' ', Tc::empty(), 0));
    list.push(feat("FLOOR", "floor", '.', walkable | Tc::CONVERT, 0));
    list.push(feat("GRANITE_WALL", "granite wall", '#', Tc::WALL | Tc::CONVERT, 1));
    list.push(feat("PERM_WALL", "permanent wall", '#', Tc::WALL | Tc::PERMANENT, 0));
    list.push(feat("MAGMA_VEIN", "magma vein", '%', Tc::WALL, 0));
    list.push(feat("RUBBLE", "pile of rubble", ':', Tc::REMEMBER, 0));
    list.push(feat("TREE", "tree", '%', Tc::TREE, 0));
    list.push(feat(
        "SHALLOW_WATER",
        "shallow water",
        '~',
        Tc::WATER | Tc::MOVE | Tc::PLACE | Tc::DROP | Tc::LOS | Tc::PROJECT,
        0,
    ));
    list.push(feat(
        "DEEP_WATER",
        "deep water",
        '~',
        Tc::WATER | Tc::DEEP | Tc::LOS | Tc::PROJECT,
        0,
    ));
    list.push(feat(
        "SHALLOW_LAVA",
        "shallow lava",
        '~',
        Tc::LAVA | Tc::MOVE | Tc::LOS | Tc::PROJECT,
        0,
    ));
    list.push(feat(
        "DEEP_LAVA",
        "deep lava",
        '~',
        Tc::LAVA | Tc::DEEP | Tc::LOS | Tc::PROJECT,
        0,
    ));
    list.push(feat("GRASS", "grass", '.', walkable, 0));
    list.push(feat("DIRT", "dirt", '.', walkable, 0));
    list.push(feat(
        "OPEN_DOOR",
        "open door",
        '\'',
        Tc::DOOR | Tc::MOVE | Tc::LOS | Tc::PROJECT,
        0,
    ));
    list.push(feat("CLOSED_DOOR", "closed door", '+', Tc::DOOR, 0));
    list.push(feat(
        "UP_STAIR",
        "up staircase",
        '<',
        walkable | Tc::STAIRS | Tc::LESS | Tc::PERMANENT,
        0,
    ));
    list.push(feat(
        "DOWN_STAIR",
        "down staircase",
        '>',
        walkable | Tc::STAIRS | Tc::MORE | Tc::PERMANENT,
        0,
    ));
    list.push(feat("TRAP_TRAPDOOR", "trap door", '^', trap, 0));
    list.push(feat("TRAP_PIT", "pit", '^', trap, 0));
    list.push(feat("TRAP_ARROW", "arrow trap", '^', trap, 0));
    list.push(feat("TRAP_TELEPORT", "teleport trap", '^', trap, 0));
    list.push(feat("STORE_GENERAL", "general store", '1', entrance | Tc::STORE, 0));
    list.push(feat("STORE_ARMOURY", "armoury", '2', entrance | Tc::STORE, 1));
    list.push(feat("STORE_WEAPON", "weapon smith", '3', entrance | Tc::STORE, 2));
    list.push(feat("BUILDING_0", "arena", '0', entrance | Tc::BLDG, 0));
    list.push(feat("BUILDING_1", "fighters' hall", '8', entrance | Tc::BLDG, 1));
    list.push(feat("MOUNTAIN", "mountain chain", 'M', Tc::WALL, 0));
    list.push(feat(
        "TOWN_ENTRANCE",
        "town entrance",
        '>',
        walkable | Tc::TOWN | Tc::ENTRANCE | Tc::PERMANENT,
        0,
    ));
    list
}

fn race(
    name: &str,
    symbol: char,
    level: i16,
    flags1: RaceFlags1,
    flags3: RaceFlags3,
) -> MonsterRace {
    MonsterRace {
        name: name.into(),
        symbol,
        level,
        rarity: 1,
        max_num: if flags1.contains(RaceFlags1::UNIQUE) {
            1
        } else {
            100
        },
        flags1,
        flags3,
        ..Default::default()
    }
}

pub fn standard_races() -> MonsterRaceList {
    let mut list = MonsterRaceList::new();
    list.push(MonsterRace::default());
    list.push(race("filthy street urchin", 't', 0, RaceFlags1::empty(), RaceFlags3::empty()));
    list.push(race("fruit bat", 'b', 1, RaceFlags1::empty(), RaceFlags3::ANIMAL));
    let mouse_idx = list.push(race("giant white mouse", 'r', 1, RaceFlags1::empty(), RaceFlags3::ANIMAL));
    list[mouse_idx].flags2 = RaceFlags2::MULTIPLY;
    list.push(race("kobold", 'k', 2, RaceFlags1::empty(), RaceFlags3::EVIL));
    list.push(race("cave spider", 'S', 2, RaceFlags1::FRIENDS, RaceFlags3::ANIMAL));
    list.push(race("wild dog", 'C', 2, RaceFlags1::empty(), RaceFlags3::ANIMAL));
    list.push(race(
        "skeleton kobold",
        's',
        3,
        RaceFlags1::empty(),
        RaceFlags3::UNDEAD | RaceFlags3::EVIL,
    ));
    list.push(race("hill orc", 'o', 8, RaceFlags1::FRIENDS, RaceFlags3::ORC | RaceFlags3::EVIL));
    let dragon_idx = list.push(race(
        "baby blue dragon",
        'd',
        9,
        RaceFlags1::empty(),
        RaceFlags3::DRAGON | RaceFlags3::EVIL,
    ));
    list[dragon_idx].abilities = AbilityFlags::BR_COLD;
    list.push(race("stone golem", 'g', 10, RaceFlags1::empty(), RaceFlags3::NONLIVING));
    list.push(race("water elemental", 'E', 15, RaceFlags1::empty(), RaceFlags3::NONLIVING));
    list.push(race(
        "vampire",
        'V',
        20,
        RaceFlags1::empty(),
        RaceFlags3::UNDEAD | RaceFlags3::EVIL,
    ));
    list.push(race(
        "Grip, Farmer Maggot's dog",
        'C',
        2,
        RaceFlags1::UNIQUE,
        RaceFlags3::ANIMAL,
    ));
    let nazgul_idx = list.push(race(
        "Uvatha the Horseman",
        'W',
        40,
        RaceFlags1::empty(),
        RaceFlags3::UNDEAD | RaceFlags3::EVIL,
    ));
    list[nazgul_idx].flags7 = RaceFlags7::NAZGUL;
    list[nazgul_idx].max_num = 1;
    list.push(race("archangel", 'A', 30, RaceFlags1::empty(), RaceFlags3::GOOD));
    let cyber_idx = list.push(race(
        "cyber demon",
        'U',
        60,
        RaceFlags1::empty(),
        RaceFlags3::DEMON | RaceFlags3::EVIL,
    ));
    list[cyber_idx].abilities = AbilityFlags::ROCKET;
    let serpent_idx = list.push(race(
        "The Serpent of Chaos",
        'J',
        100,
        RaceFlags1::UNIQUE | RaceFlags1::QUESTOR,
        RaceFlags3::EVIL,
    ));
    list[serpent_idx].flags7 = RaceFlags7::GUARDIAN;
    list
}

fn kind(name: &str, tval: Tval, sval: i16, level: i16, cost: i32) -> ObjectKind {
    ObjectKind {
        name: name.into(),
        tval,
        sval,
        level,
        cost,
        ..Default::default()
    }
}

pub fn standard_kinds() -> ObjectKindList {
    let mut list = ObjectKindList::new();
    list.push(ObjectKind::default());
    let torch_idx = list.push(kind("wooden torch", Tval::Lite, 0, 1, 2));
    list[torch_idx].easy_know = true;
    list.push(kind("ration of food", Tval::Food, 35, 0, 3));
    list.push(kind("iron shot", Tval::Shot, 1, 1, 1));
    let dagger_idx = list.push(kind("dagger", Tval::Sword, 4, 0, 10));
    list[dagger_idx].dice_num = 1;
    list[dagger_idx].dice_sides = 4;
    let sword_idx = list.push(kind("long sword", Tval::Sword, 17, 10, 300));
    list[sword_idx].dice_num = 2;
    list[sword_idx].dice_sides = 5;
    list.push(kind("chain mail", Tval::HardArmor, 4, 20, 750));
    list.push(kind("potion of cure light wounds", Tval::Potion, 34, 0, 15));
    list.push(kind("scroll of phase door", Tval::Scroll, 8, 1, 15));
    list.push(kind(
        "scroll of acquirement",
        Tval::Scroll,
        crate::placement::SV_SCROLL_ACQUIREMENT,
        20,
        100000,
    ));
    list.push(kind("wand of magic missile", Tval::Wand, 2, 3, 200));
    list.push(kind("ring of protection", Tval::Ring, 16, 10, 500));
    let amulet_idx = list.push(kind("amulet of slow digestion", Tval::Amulet, 0, 5, 200));
    list[amulet_idx].easy_know = true;
    list.push(kind("copper", Tval::Gold, 0, 0, 10));
    list.push(kind("silver", Tval::Gold, 2, 0, 25));
    list.push(kind("gold", Tval::Gold, 4, 0, 60));
    list
}

pub fn standard_artifacts(kinds: &ObjectKindList) -> ArtifactList {
    let mut list = ArtifactList::new();
    list.push(Artifact::default());
    let torch = kinds.lookup(Tval::Lite, 0).unwrap_or(0);
    list.push(Artifact {
        name: "The Phial of Galadriel".into(),
        k_idx: torch,
        level: 1,
        cost: 10000,
        ..Default::default()
    });
    let sword = kinds.lookup(Tval::Sword, 17).unwrap_or(0);
    list.push(Artifact {
        name: "The Long Sword 'Ringil'".into(),
        k_idx: sword,
        level: 20,
        cost: 300000,
        ..Default::default()
    });
    let mail = kinds.lookup(Tval::HardArmor, 4).unwrap_or(0);
    list.push(Artifact {
        name: "The Chain Mail of Arvedui".into(),
        k_idx: mail,
        level: 20,
        cost: 32000,
        ..Default::default()
    });
    list
}

/// A ready-to-play state: baseline tables installed, floor sized to the
/// full map, conversions pointing at plain floor and granite.
pub fn standard_state(seed_town: u32) -> GameState {
    let mut state = GameState::new(seed_town, MAX_HGT, MAX_WID);
    state.terrains = standard_terrains();
    state.races = standard_races();
    state.kinds = standard_kinds();
    state.artifacts = standard_artifacts(&state.kinds);
    state.floor.floor_feat = state.terrains.find("FLOOR").expect("FLOOR terrain");
    state.floor.wall_feat = state.terrains.find("GRANITE_WALL").expect("GRANITE_WALL");
    let maxima = &mut state.world.maxima;
    maxima.features = state.terrains.len() as u16;
    maxima.races = state.races.len() as u16;
    maxima.kinds = state.kinds.len() as u16;
    maxima.artifacts = state.artifacts.len() as u16;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_tags_are_unique() {
        let list = standard_terrains();
        for t in list.iter() {
            assert_eq!(list.find(&t.tag), Some(t.idx), "duplicate tag {}", t.tag);
        }
    }

    #[test]
    fn conversions_resolve_to_real_terrain() {
        let state = standard_state(0);
        let floor = state.terrains[state.floor.floor_feat].clone();
        let wall = state.terrains[state.floor.wall_feat].clone();
        assert_eq!(floor.tag, "FLOOR");
        assert_eq!(wall.tag, "GRANITE_WALL");
    }

    #[test]
    fn acquirement_scroll_exists() {
        let kinds = standard_kinds();
        assert!(kinds
            .lookup(Tval::Scroll, crate::placement::SV_SCROLL_ACQUIREMENT)
            .is_some());
    }

    #[test]
    fn artifacts_have_base_kinds() {
        let kinds = standard_kinds();
        let arts = standard_artifacts(&kinds);
        for a in arts.iter().skip(1) {
            assert!(a.k_idx > 0, "artifact {} has no base kind", a.name);
        }
    }

    #[test]
    fn uniques_have_population_one() {
        let races = standard_races();
        for r in races.iter() {
            if r.is_unique() {
                assert_eq!(r.max_num, 1, "unique {} max_num", r.name);
            }
        }
    }
}
