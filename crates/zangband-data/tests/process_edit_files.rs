//! End-to-end runs of the shipped template files under `lib/edit`.

use std::path::Path;

use zangband_data::{process_dungeon_file, standard_state, InitFlags, Window};
use zangband_rng::ZRng;
use zangband_types::{GameState, QuestStatus, QuestType, SmartFlags, TerrainCharacteristics};

fn edit_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../lib/edit"))
}

fn full_window(state: &GameState) -> Window {
    Window::new(0, 0, state.floor.height, state.floor.width)
}

fn load(state: &mut GameState, rng: &mut ZRng, name: &str, init: InitFlags) {
    let window = full_window(state);
    process_dungeon_file(state, rng, edit_dir(), name, init, window)
        .unwrap_or_else(|e| panic!("process {name}: {e}"));
}

fn state_with_misc() -> (GameState, ZRng) {
    let mut state = standard_state(99);
    let mut rng = ZRng::new(42);
    load(&mut state, &mut rng, "misc.txt", InitFlags::empty());
    (state, rng)
}

#[test]
fn misc_sets_maxima() {
    let (state, _) = state_with_misc();
    let maxima = &state.world.maxima;
    assert_eq!(maxima.towns, 3);
    assert_eq!(maxima.quests, 30);
    assert_eq!(state.quests.len(), 30);
    assert_eq!(maxima.wild_x, 12);
    assert_eq!(maxima.wild_y, 8);
    assert!(state.world.wild_in_bounds(7, 11));
}

#[test]
fn town_terrain_and_buildings() {
    let (mut state, mut rng) = state_with_misc();
    load(
        &mut state,
        &mut rng,
        "t0000001.txt",
        InitFlags::CREATE_DUNGEON,
    );

    let perm = state.terrains.find("PERM_WALL").unwrap();
    assert_eq!(state.floor.grid(0, 0).feat, perm);

    let store = state.terrains.find("STORE_GENERAL").unwrap();
    assert_eq!(state.floor.grid(2, 5).feat, store);

    // Building entrances carry their building index in `special`.
    let bldg1 = state.terrains.find("BUILDING_1").unwrap();
    assert_eq!(state.floor.grid(6, 12).feat, bldg1);
    assert_eq!(state.floor.grid(6, 12).special, 1);

    assert_eq!(state.buildings[0].name, "Arena");
    assert_eq!(state.buildings[0].owner_name, "Dorbin");
    assert_eq!(state.buildings[0].actions.len(), 1);
    assert_eq!(state.buildings[0].class_costs.len(), 6);
    assert_eq!(state.buildings[1].name, "Fighters' Hall");
    assert_eq!(state.buildings[1].actions.len(), 2);
    assert_eq!(state.buildings[1].actions[1].member_cost, 500);

    // Outside a quest, `P` records the wilderness return point.
    assert_eq!(state.player.oldpy, 5);
    assert_eq!(state.player.oldpx, 15);

    // The townsperson on the green.
    let m_idx = state.floor.grid(5, 15).m_idx.expect("urchin placed");
    assert_eq!(state.floor.m_list[m_idx].r_idx, 1);
}

#[test]
fn town_floor_is_panel_sized() {
    let (mut state, mut rng) = state_with_misc();
    load(
        &mut state,
        &mut rng,
        "t0000001.txt",
        InitFlags::CREATE_DUNGEON,
    );
    assert_eq!(state.floor.height, 22);
    assert_eq!(state.floor.width, 66);
}

#[test]
fn only_features_skips_population() {
    let (mut state, mut rng) = state_with_misc();
    load(
        &mut state,
        &mut rng,
        "t0000001.txt",
        InitFlags::ONLY_FEATURES,
    );
    assert!(state.floor.m_list.is_empty());
    assert!(state.floor.o_list.is_empty());
    let perm = state.terrains.find("PERM_WALL").unwrap();
    assert_eq!(state.floor.grid(0, 0).feat, perm);
}

#[test]
fn quest_records_assigned() {
    let (mut state, mut rng) = state_with_misc();
    load(
        &mut state,
        &mut rng,
        "q0000001.txt",
        InitFlags::ASSIGN | InitFlags::SHOW_TEXT,
    );

    let quest = &state.quests[1];
    assert_eq!(quest.name, "The Thieves' Hideout");
    assert_eq!(quest.text.len(), 2);
    assert_eq!(quest.typ, QuestType::KillLevel);
    assert_eq!(quest.level, 5);
    assert_eq!(quest.r_idx, 4);
    assert_eq!(quest.max_num, 5);

    // The reward was drawn from artifacts 2 and 3.
    assert!(quest.k_idx == 2 || quest.k_idx == 3);
    assert!(state.artifacts[quest.k_idx]
        .gen_flags
        .contains(zangband_types::GenFlags::QUESTITEM));

    // Outside the quest floor, the map section stays bypassed.
    assert!(state.floor.m_list.is_empty());
    assert!(state.floor.o_list.is_empty());
}

#[test]
fn quest_floor_population() {
    let (mut state, mut rng) = state_with_misc();
    state.floor.inside_quest = 1;
    state.floor.base_level = 5;
    state.quests[1].status = QuestStatus::Taken;
    load(
        &mut state,
        &mut rng,
        "q0000001.txt",
        InitFlags::CREATE_DUNGEON,
    );

    // The scripted kobolds are where the map says.
    let k1 = state.floor.grid(3, 3).m_idx.expect("kobold at (3,3)");
    assert_eq!(state.floor.m_list[k1].r_idx, 4);
    let k2 = state.floor.grid(4, 5).m_idx.expect("kobold at (4,5)");
    assert_eq!(state.floor.m_list[k2].r_idx, 4);

    // The cloned one does not count against the race population.
    let clone_idx = state.floor.grid(7, 11).m_idx.expect("cloned kobold");
    assert!(state.floor.m_list[clone_idx]
        .smart
        .contains(SmartFlags::CLONED));

    // Ringil was created at the `R` spot.
    assert_eq!(state.artifacts[2].cur_num, 1);
    let o_idx = state.floor.grid(3, 21).o_idxs[0];
    assert_eq!(state.floor.o_list[o_idx].name1, 2);

    // Gold piles at the `$` spots.
    let gold_idx = state.floor.grid(3, 9).o_idxs[0];
    let gold = &state.floor.o_list[gold_idx];
    assert_eq!(
        state.kinds[gold.k_idx].tval,
        zangband_types::Tval::Gold
    );
    assert!(gold.pval > 0);

    // Hidden traps at the `^` spots.
    let trap_grid = state.floor.grid(7, 2);
    let trap = state.terrains.get(trap_grid.feat).unwrap();
    assert!(trap.flags.contains(TerrainCharacteristics::TRAP));
    assert_eq!(trap_grid.mimic, state.floor.floor_feat);

    // Inside a quest, `P` moves the player.
    assert_eq!(state.player.y, 9);
    assert_eq!(state.player.x, 2);
}

#[test]
fn finished_quest_floor_is_empty() {
    let (mut state, mut rng) = state_with_misc();
    state.floor.inside_quest = 1;
    state.floor.base_level = 5;
    state.quests[1].status = QuestStatus::Finished;
    load(
        &mut state,
        &mut rng,
        "q0000001.txt",
        InitFlags::CREATE_DUNGEON,
    );

    // The conditional section redefines the monster letters as bare
    // floor once the quest is over.
    assert!(state.floor.grid(3, 3).m_idx.is_none());
    assert!(state.floor.grid(4, 5).m_idx.is_none());
    assert!(state.floor.grid(7, 11).m_idx.is_none());
}

#[test]
fn duplicate_artifact_becomes_acquirement_scroll() {
    let (mut state, mut rng) = state_with_misc();
    state.floor.inside_quest = 1;
    state.floor.base_level = 5;
    state.quests[1].status = QuestStatus::Taken;
    state.artifacts[2].cur_num = 1;
    load(
        &mut state,
        &mut rng,
        "q0000001.txt",
        InitFlags::CREATE_DUNGEON,
    );

    let o_idx = state.floor.grid(3, 21).o_idxs[0];
    let item = &state.floor.o_list[o_idx];
    assert_eq!(item.name1, 0);
    let kind = &state.kinds[item.k_idx];
    assert_eq!(kind.name, "scroll of acquirement");
}

#[test]
fn wilderness_map_and_start() {
    let (mut state, mut rng) = state_with_misc();
    load(
        &mut state,
        &mut rng,
        "w_info.txt",
        InitFlags::CREATE_DUNGEON,
    );

    let mountain = state.terrains.find("MOUNTAIN").unwrap();
    assert_eq!(state.world.wild(0, 0).terrain, mountain);
    assert_eq!(state.world.wild(7, 11).terrain, mountain);

    let entrance = state.terrains.find("TOWN_ENTRANCE").unwrap();
    assert_eq!(state.world.wild(3, 4).terrain, entrance);
    assert_eq!(state.world.wild(3, 4).town, 1);
    assert_eq!(state.world.wild(3, 5).town, 0);

    assert_eq!(state.player.wilderness_y, 3);
    assert_eq!(state.player.wilderness_x, 4);
}

#[test]
fn random_spawns_respect_base_level() {
    let (mut state, mut rng) = state_with_misc();
    state.floor.inside_quest = 1;
    state.floor.base_level = 1;
    state.quests[1].status = QuestStatus::Taken;
    load(
        &mut state,
        &mut rng,
        "q0000001.txt",
        InitFlags::CREATE_DUNGEON,
    );

    // `*` letters spawn monsters no deeper than the floor.
    for monster in state
        .floor
        .m_list
        .iter()
        .filter(|m| !m.smart.contains(SmartFlags::CLONED))
    {
        let race = &state.races[monster.r_idx];
        if race.idx != 4 {
            assert!(race.level <= 1, "race {} too deep", race.name);
        }
    }
}

#[test]
fn loads_are_deterministic_per_seed() {
    let run = |seed| {
        let mut state = standard_state(99);
        let mut rng = ZRng::new(seed);
        load(&mut state, &mut rng, "misc.txt", InitFlags::empty());
        state.floor.inside_quest = 1;
        state.floor.base_level = 5;
        state.quests[1].status = QuestStatus::Taken;
        load(
            &mut state,
            &mut rng,
            "q0000001.txt",
            InitFlags::CREATE_DUNGEON,
        );
        state
            .floor
            .m_list
            .iter()
            .map(|m| (m.r_idx, m.fy, m.fx))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(7), run(7));
}
