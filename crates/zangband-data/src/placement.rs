//! Spawning helpers used by the grid populator: monsters, objects,
//! gold, traps and fixed artifacts.

use bitflags::bitflags;
use zangband_rng::ZRng;
use zangband_types::{
    ArtifactId, FeatId, GameState, KindId, Monster, ObjectItem, Pos, RaceFlags1, RaceId,
    SmartFlags, TerrainCharacteristics, Tval,
};

/// Sub-value of the scroll dropped in place of an already-created
/// artifact.
pub const SV_SCROLL_ACQUIREMENT: i16 = 16;

bitflags! {
    /// Monster placement modes (PM_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct PlaceMonsterFlags: u8 {
        const ALLOW_SLEEP = 0x01;
        const ALLOW_GROUP = 0x02;
    }
}

bitflags! {
    /// Object enchantment modes (AM_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ApplyMagicFlags: u8 {
        const NO_FIXED_ART = 0x01;
        const GOOD         = 0x02;
        const GREAT        = 0x04;
    }
}

/// Convert a generic terrain to this dungeon's own variant
/// (`conv_dungeon_feat`). Non-conversion terrains pass through.
pub fn conv_dungeon_feat(state: &GameState, feat: FeatId) -> FeatId {
    let Some(terrain) = state.terrains.get(feat) else {
        return feat;
    };
    if !terrain.flags.contains(TerrainCharacteristics::CONVERT) {
        return feat;
    }
    match terrain.subtype {
        0 => state.floor.floor_feat,
        1 => state.floor.wall_feat,
        _ => feat,
    }
}

/// Place a specific race at `(y, x)` (`place_monster_aux`). Fails when
/// the grid is taken, the terrain refuses monsters, or the race is at
/// its population cap.
pub fn place_fixed_monster(
    state: &mut GameState,
    rng: &mut ZRng,
    y: Pos,
    x: Pos,
    r_idx: RaceId,
    flags: PlaceMonsterFlags,
) -> Option<usize> {
    if !state.floor.in_bounds(y, x) {
        return None;
    }
    let race = state.races.get(r_idx)?;
    if race.name.is_empty() {
        return None;
    }
    if race.cur_num >= race.max_num {
        log::debug!("race {} at population cap", race.name);
        return None;
    }
    if state.floor.grid(y, x).m_idx.is_some() {
        return None;
    }
    let terrain = state.terrains.get(state.floor.grid(y, x).feat)?;
    if !terrain.flags.contains(TerrainCharacteristics::PLACE) {
        return None;
    }

    let grouped = flags.contains(PlaceMonsterFlags::ALLOW_GROUP)
        && race.flags1.contains(RaceFlags1::FRIENDS);

    let mut monster = Monster::new(r_idx, y, x);
    if flags.contains(PlaceMonsterFlags::ALLOW_SLEEP) {
        monster.asleep = rng.one_in(2);
    }
    state.races[r_idx].cur_num += 1;
    let m_idx = state.floor.place_monster_at(monster, y, x);

    if grouped {
        let extras = rng.randint1(3);
        for _ in 0..extras {
            let dy = rng.rand_range(-1, 1);
            let dx = rng.rand_range(-1, 1);
            place_fixed_monster(
                state,
                rng,
                y + dy as Pos,
                x + dx as Pos,
                r_idx,
                flags & !PlaceMonsterFlags::ALLOW_GROUP,
            );
        }
    }

    Some(m_idx)
}

/// Place a random race no deeper than the floor's monster level
/// (`place_monster`).
pub fn place_random_monster(
    state: &mut GameState,
    rng: &mut ZRng,
    y: Pos,
    x: Pos,
    flags: PlaceMonsterFlags,
) -> Option<usize> {
    let depth = state.floor.monster_level;
    let candidates: Vec<RaceId> = state
        .races
        .iter()
        .filter(|r| {
            r.idx > 0
                && !r.name.is_empty()
                && r.level <= depth
                && !r.flags1.contains(RaceFlags1::UNIQUE)
                && r.cur_num < r.max_num
        })
        .map(|r| r.idx)
        .collect();
    if candidates.is_empty() {
        log::debug!("no monster candidates at depth {depth}");
        return None;
    }
    let r_idx = candidates[rng.randint0(candidates.len() as i32) as usize];
    place_fixed_monster(state, rng, y, x, r_idx, flags)
}

/// Scale a bonus to depth: near 0 at the surface, up to `max` deep down.
fn m_bonus(rng: &mut ZRng, max: i32, level: i32) -> i32 {
    if max <= 0 {
        return 0;
    }
    let base = max * level.clamp(0, 127) / 128;
    (base + rng.randint0(max - base + 1)).min(max)
}

/// Enchant a freshly made object (`apply_magic`). Gold is left alone.
pub fn apply_magic(
    state: &mut GameState,
    rng: &mut ZRng,
    item: &mut ObjectItem,
    level: i16,
    flags: ApplyMagicFlags,
) {
    let Some(kind) = state.kinds.get(item.k_idx) else {
        return;
    };
    if kind.tval == Tval::Gold {
        return;
    }

    if flags.contains(ApplyMagicFlags::GREAT) && !flags.contains(ApplyMagicFlags::NO_FIXED_ART) {
        let unmade = state
            .artifacts
            .iter()
            .find(|a| a.idx > 0 && a.k_idx == item.k_idx && a.cur_num == 0)
            .map(|a| a.idx);
        if let Some(a_idx) = unmade {
            if rng.one_in(50) {
                item.name1 = a_idx;
                state.artifacts[a_idx].cur_num = 1;
            }
        }
    }

    if flags.contains(ApplyMagicFlags::GOOD) || flags.contains(ApplyMagicFlags::GREAT) {
        let power = if flags.contains(ApplyMagicFlags::GREAT) {
            2
        } else {
            1
        };
        item.to_hit += (rng.randint1(5) + m_bonus(rng, 5, level as i32)) as i16 * power;
        item.to_dam += (rng.randint1(5) + m_bonus(rng, 5, level as i32)) as i16 * power;
        item.to_ac += m_bonus(rng, 10, level as i32) as i16;
    } else if rng.one_in(20) {
        item.to_hit -= rng.randint1(5) as i16;
        item.to_dam -= rng.randint1(5) as i16;
    }
}

/// Roll a pile of money for a gold kind (`make_gold`).
pub fn make_gold(rng: &mut ZRng, k_idx: KindId, sval: i16) -> ObjectItem {
    let mut item = ObjectItem::new(k_idx);
    let base = (sval as i32 + 1) * 10;
    item.pval = (base + rng.randint1(8 * base)) as i16;
    item
}

/// Drop a random object no deeper than the floor's object level
/// (`place_object`).
pub fn place_random_object(
    state: &mut GameState,
    rng: &mut ZRng,
    y: Pos,
    x: Pos,
    flags: ApplyMagicFlags,
) -> Option<usize> {
    if !state.floor.in_bounds(y, x) {
        return None;
    }
    let depth = state.floor.object_level;
    let candidates: Vec<KindId> = state
        .kinds
        .iter()
        .filter(|k| {
            k.idx > 0
                && !k.name.is_empty()
                && k.level <= depth
                && k.tval != Tval::Gold
                && !k.gen_flags.contains(zangband_types::GenFlags::INSTA_ART)
        })
        .map(|k| k.idx)
        .collect();
    if candidates.is_empty() {
        log::debug!("no object candidates at depth {depth}");
        return None;
    }
    let k_idx = candidates[rng.randint0(candidates.len() as i32) as usize];
    let mut item = ObjectItem::new(k_idx);
    apply_magic(state, rng, &mut item, depth, flags);
    Some(state.floor.drop_here(item, y, x))
}

/// Hide a random trap under the grid's terrain (`place_trap`).
pub fn place_trap(state: &mut GameState, rng: &mut ZRng, y: Pos, x: Pos) {
    if !state.floor.in_bounds(y, x) {
        return;
    }
    let traps: Vec<FeatId> = state
        .terrains
        .iter()
        .filter(|t| t.flags.contains(TerrainCharacteristics::TRAP))
        .map(|t| t.idx)
        .collect();
    if traps.is_empty() {
        return;
    }
    let trap = traps[rng.randint0(traps.len() as i32) as usize];
    let grid = state.floor.grid_mut(y, x);
    grid.mimic = grid.feat;
    grid.feat = trap;
}

/// Instantiate a fixed artifact at `(y, x)` (`create_named_art`).
/// Returns false when the artifact has no base kind.
pub fn create_named_art(
    state: &mut GameState,
    rng: &mut ZRng,
    a_idx: ArtifactId,
    y: Pos,
    x: Pos,
) -> bool {
    let Some(artifact) = state.artifacts.get(a_idx) else {
        return false;
    };
    if artifact.k_idx == 0 {
        return false;
    }
    let mut item = ObjectItem::new(artifact.k_idx);
    item.name1 = a_idx;
    item.to_hit = (5 + m_bonus(rng, 10, artifact.level as i32)) as i16;
    item.to_dam = (5 + m_bonus(rng, 10, artifact.level as i32)) as i16;
    state.floor.drop_here(item, y, x);
    true
}

/// Mark a just-placed monster as a clone: it never counts against the
/// race's population.
pub fn mark_cloned(state: &mut GameState, m_idx: usize) {
    state.floor.m_list[m_idx].smart.insert(SmartFlags::CLONED);
}
