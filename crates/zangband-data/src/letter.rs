//! The letter table: per-character grid directives installed by `F:`
//! lines and consumed by `D:` and `W:D:` rows.

use std::collections::HashMap;

use bitflags::bitflags;
use zangband_types::{ArtifactId, CaveInfo, FeatId, KindId, RaceId, TerrainList};

bitflags! {
    /// Which of a letter's spawn slots are randomized (RANDOM_*).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct RandomFlags: u8 {
        const FEATURE  = 0x01;
        const MONSTER  = 0x02;
        const OBJECT   = 0x04;
        const EGO      = 0x08;
        const ARTIFACT = 0x10;
        const TRAP     = 0x20;
    }
}

/// Everything one map character stands for.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterEntry {
    pub feature: FeatId,
    pub cave_info: CaveInfo,
    /// Race to place; negative means a cloned copy of that race.
    pub monster: RaceId,
    /// Kind to drop, or a depth offset when randomized.
    pub object: KindId,
    pub ego: i16,
    pub artifact: ArtifactId,
    /// Trap terrain hidden under the feature.
    pub trap: FeatId,
    pub special: i16,
    pub random: RandomFlags,
}

/// Letter definitions for one template load, shared across `%:`
/// includes.
#[derive(Debug, Clone, Default)]
pub struct LetterTable {
    entries: HashMap<char, LetterEntry>,
}

/// How a spawn field reads: `*` random, `*<n>` random with offset,
/// plain signed integer otherwise.
pub(crate) enum SpawnField {
    Fixed(i16),
    Random(i16),
}

pub(crate) fn parse_spawn_field(field: &str) -> Result<SpawnField, String> {
    if let Some(rest) = field.strip_prefix('*') {
        if rest.is_empty() {
            return Ok(SpawnField::Random(0));
        }
        return rest
            .parse::<i16>()
            .map(SpawnField::Random)
            .map_err(|_| format!("expected integer after '*', got: {field}"));
    }
    field
        .parse::<i16>()
        .map(SpawnField::Fixed)
        .map_err(|_| format!("expected integer, got: {field}"))
}

impl LetterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, letter: char) -> Option<&LetterEntry> {
        self.entries.get(&letter)
    }

    /// Install one `F:` definition. `fields` are the colon-separated
    /// fields after the tag, `F:<letter>:<terrain>[:...]`; trailing
    /// fields may be omitted.
    pub fn define(&mut self, fields: &[&str], terrains: &TerrainList) -> Result<(), String> {
        let mut letter_chars = fields
            .first()
            .copied()
            .unwrap_or_default()
            .chars();
        let letter = match (letter_chars.next(), letter_chars.next()) {
            (Some(c), None) => c,
            _ => return Err("letter must be a single character".into()),
        };

        let entry = self.entries.entry(letter).or_default();

        if let Some(tag) = fields.get(1).filter(|s| !s.is_empty()) {
            entry.feature = terrains
                .find(tag)
                .ok_or_else(|| format!("unknown terrain tag: {tag}"))?;
        }
        if let Some(info) = fields.get(2).filter(|s| !s.is_empty()) {
            let bits = info
                .parse::<u16>()
                .map_err(|_| format!("expected cave info bits, got: {info}"))?;
            entry.cave_info = CaveInfo::from_bits_truncate(bits);
        }
        if let Some(field) = fields.get(3).filter(|s| !s.is_empty()) {
            match parse_spawn_field(field)? {
                SpawnField::Fixed(v) => entry.monster = v,
                SpawnField::Random(v) => {
                    entry.random.insert(RandomFlags::MONSTER);
                    entry.monster = v;
                }
            }
        }
        if let Some(field) = fields.get(4).filter(|s| !s.is_empty()) {
            match parse_spawn_field(field)? {
                SpawnField::Fixed(v) => entry.object = v,
                SpawnField::Random(v) => {
                    entry.random.insert(RandomFlags::OBJECT);
                    entry.object = v;
                }
            }
        }
        if let Some(field) = fields.get(5).filter(|s| !s.is_empty()) {
            match parse_spawn_field(field)? {
                SpawnField::Fixed(v) => entry.ego = v,
                SpawnField::Random(v) => {
                    entry.random.insert(RandomFlags::EGO);
                    entry.ego = v;
                }
            }
        }
        if let Some(field) = fields.get(6).filter(|s| !s.is_empty()) {
            match parse_spawn_field(field)? {
                SpawnField::Fixed(v) => entry.artifact = v,
                SpawnField::Random(v) => {
                    entry.random.insert(RandomFlags::ARTIFACT);
                    entry.artifact = v;
                }
            }
        }
        if let Some(tag) = fields.get(7).filter(|s| !s.is_empty()) {
            if *tag == "*" {
                entry.random.insert(RandomFlags::TRAP);
            } else {
                entry.trap = terrains
                    .find(tag)
                    .ok_or_else(|| format!("unknown trap tag: {tag}"))?;
            }
        }
        if let Some(field) = fields.get(8).filter(|s| !s.is_empty()) {
            entry.special = field
                .parse::<i16>()
                .map_err(|_| format!("expected integer, got: {field}"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zangband_types::{TerrainCharacteristics, TerrainType};

    fn terrains() -> TerrainList {
        let mut list = TerrainList::new();
        list.push(TerrainType::default());
        list.push(TerrainType {
            tag: "FLOOR".into(),
            flags: TerrainCharacteristics::FLOOR,
            ..Default::default()
        });
        list.push(TerrainType {
            tag: "TRAP_PIT".into(),
            flags: TerrainCharacteristics::TRAP,
            ..Default::default()
        });
        list
    }

    #[test]
    fn minimal_definition() {
        let mut table = LetterTable::new();
        table.define(&[".", "FLOOR"], &terrains()).unwrap();
        let entry = table.get('.').unwrap();
        assert_eq!(entry.feature, 1);
        assert_eq!(entry.monster, 0);
        assert!(entry.random.is_empty());
    }

    #[test]
    fn full_definition() {
        let mut table = LetterTable::new();
        table
            .define(
                &["&", "FLOOR", "8", "-4", "12", "0", "3", "TRAP_PIT", "7"],
                &terrains(),
            )
            .unwrap();
        let entry = table.get('&').unwrap();
        assert_eq!(entry.cave_info.bits(), 8);
        assert_eq!(entry.monster, -4);
        assert_eq!(entry.object, 12);
        assert_eq!(entry.artifact, 3);
        assert_eq!(entry.trap, 2);
        assert_eq!(entry.special, 7);
    }

    #[test]
    fn star_fields_set_random_flags() {
        let mut table = LetterTable::new();
        table
            .define(&["x", "FLOOR", "0", "*", "*5", "0", "0", "*"], &terrains())
            .unwrap();
        let entry = table.get('x').unwrap();
        assert!(entry.random.contains(RandomFlags::MONSTER));
        assert!(entry.random.contains(RandomFlags::OBJECT));
        assert!(entry.random.contains(RandomFlags::TRAP));
        assert_eq!(entry.monster, 0);
        assert_eq!(entry.object, 5);
    }

    #[test]
    fn redefinition_updates_in_place() {
        let mut table = LetterTable::new();
        let t = terrains();
        table.define(&[".", "FLOOR", "8"], &t).unwrap();
        table.define(&[".", "FLOOR", "2"], &t).unwrap();
        assert_eq!(table.get('.').unwrap().cave_info.bits(), 2);
    }

    #[test]
    fn unknown_terrain_tag_is_rejected() {
        let mut table = LetterTable::new();
        assert!(table.define(&["?", "NO_SUCH"], &terrains()).is_err());
    }

    #[test]
    fn multi_char_letter_is_rejected() {
        let mut table = LetterTable::new();
        assert!(table.define(&["ab", "FLOOR"], &terrains()).is_err());
    }
}
