//! Summoning predicates: which races answer which kind of summons
//! (`check_summon_specific`).

use strum::{EnumCount, EnumIter};
use zangband_rng::ZRng;
use zangband_types::{AbilityFlags, MonsterRaceList, RaceFlags1, RaceFlags2, RaceFlags3, RaceFlags7, RaceId};

/// Summon categories (SUMMON_* constants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum SummonType {
    Ant,
    Spider,
    Hound,
    Hydra,
    Angel,
    Demon,
    Undead,
    Dragon,
    HiUndead,
    HiDragon,
    HiDemon,
    Amberite,
    Unique,
    Mold,
    Bat,
    Quylthulg,
    Golem,
    Cyber,
    Kin,
    Animal,
    AnimalRanger,
    Living,
    HiDragonLiving,
    Elemental,
    Vortex,
    Hybrid,
    Bird,
    Guardian,
    Eagle,
    ArmageGood,
    ArmageEvil,
    Pyramid,
    DeadUnique,
}

/// Symbols a ranger's nature magic can call on.
const RANGER_KIN: &str = "abcflqrwBCHIJKMRS";

/// Decide whether race `r_idx` satisfies the summon condition `kind`.
///
/// `summoner` is the race doing the summoning, if a monster; when the
/// player summons, `player_symbol` stands in for `Kin` matching.
pub fn is_summon_match(
    races: &MonsterRaceList,
    rng: &mut ZRng,
    summoner: Option<RaceId>,
    player_symbol: char,
    r_idx: RaceId,
    kind: SummonType,
) -> bool {
    let Some(race) = races.get(r_idx) else {
        return false;
    };
    let c = race.symbol;
    match kind {
        SummonType::Ant => c == 'a',
        SummonType::Spider => c == 'S',
        SummonType::Hound => c == 'C' || c == 'Z',
        SummonType::Hydra => c == 'M',
        SummonType::Angel => {
            c == 'A'
                && race
                    .flags3
                    .intersects(RaceFlags3::EVIL | RaceFlags3::GOOD)
        }
        SummonType::Demon => race.flags3.contains(RaceFlags3::DEMON),
        SummonType::Undead => race.flags3.contains(RaceFlags3::UNDEAD),
        SummonType::Dragon => race.flags3.contains(RaceFlags3::DRAGON),
        SummonType::HiUndead => c == 'L' || c == 'V' || c == 'W',
        SummonType::HiDragon => c == 'D',
        SummonType::HiDemon => {
            (c == 'U' || c == 'H' || c == 'B') && race.flags3.contains(RaceFlags3::DEMON)
        }
        SummonType::Amberite => race.flags3.contains(RaceFlags3::AMBERITE),
        SummonType::Unique => race.flags1.contains(RaceFlags1::UNIQUE),
        SummonType::Mold => c == 'm',
        SummonType::Bat => c == 'b',
        SummonType::Quylthulg => c == 'Q',
        SummonType::Golem => c == 'g',
        SummonType::Cyber => c == 'U' && race.abilities.contains(AbilityFlags::ROCKET),
        SummonType::Kin => {
            let kin = summoner
                .and_then(|s| races.get(s))
                .map(|r| r.symbol)
                .unwrap_or(player_symbol);
            c == kin
        }
        SummonType::Animal => race.flags3.contains(RaceFlags3::ANIMAL),
        SummonType::AnimalRanger => {
            race.flags3.contains(RaceFlags3::ANIMAL)
                && RANGER_KIN.contains(c)
                && !race.flags3.intersects(
                    RaceFlags3::DRAGON
                        | RaceFlags3::EVIL
                        | RaceFlags3::UNDEAD
                        | RaceFlags3::DEMON,
                )
                && !race.flags2.contains(RaceFlags2::MULTIPLY)
                && race.abilities.is_empty()
        }
        SummonType::Living => race.has_living_flag(),
        SummonType::HiDragonLiving => c == 'D' && race.has_living_flag(),
        SummonType::Elemental => c == 'E',
        SummonType::Vortex => c == 'v',
        SummonType::Hybrid => c == 'H',
        SummonType::Bird => c == 'B',
        SummonType::Guardian => race.flags7.contains(RaceFlags7::GUARDIAN),
        SummonType::Eagle => {
            c == 'B'
                && race
                    .flags7
                    .contains(RaceFlags7::WILD_MOUNTAIN | RaceFlags7::WILD_ONLY)
        }
        SummonType::ArmageGood => c == 'A' && race.flags3.contains(RaceFlags3::GOOD),
        SummonType::ArmageEvil => {
            race.flags3.contains(RaceFlags3::DEMON)
                || (c == 'A' && race.flags3.contains(RaceFlags3::EVIL))
        }
        SummonType::Pyramid => {
            if rng.one_in(16) {
                c == 'z'
            } else {
                race.name.contains("scarab")
            }
        }
        SummonType::DeadUnique => race.flags1.contains(RaceFlags1::UNIQUE) && race.max_num == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zangband_types::MonsterRace;

    fn races() -> MonsterRaceList {
        let mut list = MonsterRaceList::new();
        list.push(MonsterRace::default());
        list.push(MonsterRace {
            name: "giant ant".into(),
            symbol: 'a',
            flags3: RaceFlags3::ANIMAL,
            max_num: 100,
            ..Default::default()
        });
        list.push(MonsterRace {
            name: "archangel".into(),
            symbol: 'A',
            flags3: RaceFlags3::GOOD,
            max_num: 100,
            ..Default::default()
        });
        list.push(MonsterRace {
            name: "cyber demon".into(),
            symbol: 'U',
            flags3: RaceFlags3::DEMON,
            abilities: AbilityFlags::ROCKET,
            max_num: 100,
            ..Default::default()
        });
        list.push(MonsterRace {
            name: "fallen champion".into(),
            symbol: 'p',
            flags1: RaceFlags1::UNIQUE,
            max_num: 0,
            ..Default::default()
        });
        list
    }

    fn check(kind: SummonType, r_idx: RaceId) -> bool {
        let mut rng = ZRng::new(7);
        is_summon_match(&races(), &mut rng, None, '@', r_idx, kind)
    }

    #[test]
    fn ant_matches_symbol() {
        assert!(check(SummonType::Ant, 1));
        assert!(!check(SummonType::Ant, 2));
    }

    #[test]
    fn angel_needs_alignment_flag() {
        assert!(check(SummonType::Angel, 2));
        // An ant is not an angel no matter what.
        assert!(!check(SummonType::Angel, 1));
    }

    #[test]
    fn cyber_needs_rocket() {
        assert!(check(SummonType::Cyber, 3));
        assert!(!check(SummonType::Cyber, 2));
    }

    #[test]
    fn hi_demon_includes_cyber() {
        assert!(check(SummonType::HiDemon, 3));
    }

    #[test]
    fn animal_ranger_wants_harmless_beasts() {
        assert!(check(SummonType::AnimalRanger, 1));
        // The cyber demon is neither an animal nor harmless.
        assert!(!check(SummonType::AnimalRanger, 3));
    }

    #[test]
    fn kin_uses_summoner_symbol() {
        let mut rng = ZRng::new(7);
        // Summoner is the archangel; only 'A' races are kin.
        assert!(is_summon_match(
            &races(),
            &mut rng,
            Some(2),
            '@',
            2,
            SummonType::Kin
        ));
        assert!(!is_summon_match(
            &races(),
            &mut rng,
            Some(2),
            '@',
            1,
            SummonType::Kin
        ));
    }

    #[test]
    fn kin_falls_back_to_player_symbol() {
        let mut rng = ZRng::new(7);
        assert!(is_summon_match(
            &races(),
            &mut rng,
            None,
            'U',
            3,
            SummonType::Kin
        ));
    }

    #[test]
    fn dead_unique_needs_empty_population() {
        assert!(check(SummonType::DeadUnique, 4));
        assert!(!check(SummonType::Unique, 1));
    }

    #[test]
    fn living_excludes_demons() {
        assert!(check(SummonType::Living, 1));
        assert!(!check(SummonType::Living, 3));
    }
}
