use bitflags::bitflags;
use serde::Serialize;

use crate::{Depth, Pos, RaceId};

bitflags! {
    /// Monster race flags set 1 from `defines.h` (RF1_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct RaceFlags1: u32 {
        const UNIQUE      = 0x0000_0001;
        const QUESTOR     = 0x0000_0002;
        const MALE        = 0x0000_0004;
        const FEMALE      = 0x0000_0008;
        const CHAR_CLEAR  = 0x0000_0010;
        const ATTR_CLEAR  = 0x0000_0020;
        const FORCE_DEPTH = 0x0000_0040;
        const FORCE_MAXHP = 0x0000_0080;
        const FORCE_SLEEP = 0x0000_0100;
        const FRIENDS     = 0x0000_0200;
        const ESCORT      = 0x0000_0400;
        const NEVER_MOVE  = 0x0000_0800;
        const RAND_25     = 0x0000_1000;
        const RAND_50     = 0x0000_2000;
    }
}

bitflags! {
    /// Monster race flags set 2 from `defines.h` (RF2_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct RaceFlags2: u32 {
        const STUPID          = 0x0000_0001;
        const SMART           = 0x0000_0002;
        const INVISIBLE       = 0x0000_0004;
        const MULTIPLY        = 0x0000_0008;
        const REGENERATE      = 0x0000_0010;
        const POWERFUL        = 0x0000_0020;
        const ELDRITCH_HORROR = 0x0000_0040;
        const OPEN_DOOR       = 0x0000_0080;
        const BASH_DOOR       = 0x0000_0100;
        const PASS_WALL       = 0x0000_0200;
        const KILL_WALL       = 0x0000_0400;
        const EMPTY_MIND      = 0x0000_0800;
        const WEIRD_MIND      = 0x0000_1000;
    }
}

bitflags! {
    /// Monster race flags set 3 from `defines.h` (RF3_* constants):
    /// creature kind and vulnerability bits.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct RaceFlags3: u32 {
        const ORC       = 0x0000_0001;
        const TROLL     = 0x0000_0002;
        const GIANT     = 0x0000_0004;
        const DRAGON    = 0x0000_0008;
        const DEMON     = 0x0000_0010;
        const UNDEAD    = 0x0000_0020;
        const EVIL      = 0x0000_0040;
        const ANIMAL    = 0x0000_0080;
        const AMBERITE  = 0x0000_0100;
        const GOOD      = 0x0000_0200;
        const NONLIVING = 0x0000_0400;
        const HURT_LITE = 0x0000_0800;
        const HURT_ROCK = 0x0000_1000;
    }
}

bitflags! {
    /// Monster race flags set 7 from `defines.h` (RF7_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct RaceFlags7: u32 {
        const AQUATIC        = 0x0000_0001;
        const CAN_SWIM       = 0x0000_0002;
        const CAN_FLY        = 0x0000_0004;
        const FRIENDLY       = 0x0000_0008;
        const NAZGUL         = 0x0000_0010;
        const UNIQUE2        = 0x0000_0020;
        const RIDING         = 0x0000_0040;
        const KAGE           = 0x0000_0080;
        const GUARDIAN       = 0x0000_0100;
        const WILD_MOUNTAIN  = 0x0000_0200;
        const WILD_ONLY      = 0x0000_0400;
    }
}

bitflags! {
    /// Spell-like ability flags (RF4_* subset).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct AbilityFlags: u32 {
        const SHRIEK = 0x0000_0001;
        const ROCKET = 0x0000_0002;
        const SHOOT  = 0x0000_0004;
        const BR_FIRE = 0x0000_0008;
        const BR_COLD = 0x0000_0010;
    }
}

bitflags! {
    /// Learned/structural facts about a live monster (SM_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct SmartFlags: u32 {
        const CLONED   = 0x0000_0001;
        const PET      = 0x0000_0002;
        const FRIENDLY = 0x0000_0004;
    }
}

/// A monster race definition (`monster_race`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct MonsterRace {
    pub idx: RaceId,
    pub name: String,
    pub symbol: char,
    pub level: Depth,
    pub rarity: u8,
    /// Live population of this race on the current floor.
    pub cur_num: i16,
    /// Population cap; 1 for uniques.
    pub max_num: i16,
    pub flags1: RaceFlags1,
    pub flags2: RaceFlags2,
    pub flags3: RaceFlags3,
    pub flags7: RaceFlags7,
    pub abilities: AbilityFlags,
}

impl MonsterRace {
    pub fn is_unique(&self) -> bool {
        self.flags1.contains(RaceFlags1::UNIQUE)
    }

    /// Living as opposed to undead, demonic or construct.
    pub fn has_living_flag(&self) -> bool {
        !self
            .flags3
            .intersects(RaceFlags3::UNDEAD | RaceFlags3::DEMON | RaceFlags3::NONLIVING)
    }
}

/// The monster race table (`r_info`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct MonsterRaceList {
    races: Vec<MonsterRace>,
}

impl MonsterRaceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut race: MonsterRace) -> RaceId {
        let idx = self.races.len() as RaceId;
        race.idx = idx;
        self.races.push(race);
        idx
    }

    pub fn get(&self, idx: RaceId) -> Option<&MonsterRace> {
        self.races.get(idx as usize)
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }

    pub fn resize(&mut self, new_len: usize) {
        self.races.resize_with(new_len, MonsterRace::default);
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonsterRace> {
        self.races.iter()
    }
}

impl std::ops::Index<RaceId> for MonsterRaceList {
    type Output = MonsterRace;

    fn index(&self, idx: RaceId) -> &MonsterRace {
        &self.races[idx as usize]
    }
}

impl std::ops::IndexMut<RaceId> for MonsterRaceList {
    fn index_mut(&mut self, idx: RaceId) -> &mut MonsterRace {
        &mut self.races[idx as usize]
    }
}

/// A live monster on the floor (`monster_type`).
#[derive(Debug, Clone, Serialize)]
pub struct Monster {
    pub r_idx: RaceId,
    pub fy: Pos,
    pub fx: Pos,
    pub smart: SmartFlags,
    pub asleep: bool,
    pub dead: bool,
}

impl Monster {
    pub fn new(r_idx: RaceId, fy: Pos, fx: Pos) -> Self {
        Self {
            r_idx,
            fy,
            fx,
            smart: SmartFlags::empty(),
            asleep: false,
            dead: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn living_flag_excludes_undead_demon_nonliving() {
        let mut race = MonsterRace::default();
        assert!(race.has_living_flag());
        race.flags3 = RaceFlags3::UNDEAD;
        assert!(!race.has_living_flag());
        race.flags3 = RaceFlags3::DEMON;
        assert!(!race.has_living_flag());
        race.flags3 = RaceFlags3::NONLIVING;
        assert!(!race.has_living_flag());
        race.flags3 = RaceFlags3::EVIL;
        assert!(race.has_living_flag());
    }

    #[test]
    fn race_list_push_assigns_ids() {
        let mut list = MonsterRaceList::new();
        list.push(MonsterRace::default());
        let idx = list.push(MonsterRace {
            name: "fruit bat".into(),
            symbol: 'b',
            ..Default::default()
        });
        assert_eq!(idx, 1);
        assert_eq!(list[1].name, "fruit bat");
        assert_eq!(list[1].idx, 1);
    }
}
