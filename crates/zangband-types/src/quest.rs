use bitflags::bitflags;
use serde::Serialize;
use strum::{EnumIter, FromRepr};

use crate::{ArtifactId, Depth, QuestId, RaceId};

/// Quest objective kinds from `quest.h` (QUEST_TYPE_* constants).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, EnumIter, FromRepr)]
#[repr(u8)]
pub enum QuestType {
    #[default]
    None = 0,
    KillLevel = 1,
    KillAnyLevel = 2,
    FindArtifact = 3,
    FindExit = 4,
    KillNumber = 5,
    KillAll = 6,
    Random = 7,
    Tower = 8,
}

/// Quest progress states from `quest.h` (QUEST_STATUS_* constants).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, EnumIter, FromRepr)]
#[repr(u8)]
pub enum QuestStatus {
    #[default]
    Untaken = 0,
    Taken = 1,
    Completed = 2,
    Rewarded = 3,
    Finished = 4,
    Failed = 5,
    FailedDone = 6,
}

bitflags! {
    /// Quest behavior flags (QUEST_FLAG_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct QuestFlags: u8 {
        const SILENT  = 0x01;
        const PRESET  = 0x02;
        const ONCE    = 0x04;
        const TOWER   = 0x08;
    }
}

/// One quest record (`quest_type`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Quest {
    pub typ: QuestType,
    pub status: QuestStatus,
    pub name: String,
    pub level: Depth,
    /// Target monster race for kill quests.
    pub r_idx: RaceId,
    /// Reward artifact, or target item for find quests.
    pub k_idx: ArtifactId,
    /// Kills so far.
    pub cur_num: i16,
    /// Kills required.
    pub max_num: i16,
    /// Number of target monsters to place.
    pub num_mon: i16,
    pub dungeon: i16,
    pub flags: QuestFlags,
    /// Description shown when the quest is presented.
    pub text: Vec<String>,
}

/// The quest table, indexed by quest number.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestList {
    quests: Vec<Quest>,
}

impl QuestList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_len(len: usize) -> Self {
        let mut list = Self::default();
        list.resize(len);
        list
    }

    pub fn get(&self, idx: QuestId) -> Option<&Quest> {
        self.quests.get(idx as usize)
    }

    pub fn get_mut(&mut self, idx: QuestId) -> Option<&mut Quest> {
        self.quests.get_mut(idx as usize)
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    pub fn resize(&mut self, new_len: usize) {
        self.quests.resize_with(new_len, Quest::default);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter()
    }
}

impl std::ops::Index<QuestId> for QuestList {
    type Output = Quest;

    fn index(&self, idx: QuestId) -> &Quest {
        &self.quests[idx as usize]
    }
}

impl std::ops::IndexMut<QuestId> for QuestList {
    fn index_mut(&mut self, idx: QuestId) -> &mut Quest {
        &mut self.quests[idx as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn quest_type_round_trip() {
        for t in QuestType::iter() {
            assert_eq!(QuestType::from_repr(t as u8), Some(t));
        }
    }

    #[test]
    fn quest_status_discriminants() {
        assert_eq!(QuestStatus::Untaken as u8, 0);
        assert_eq!(QuestStatus::Taken as u8, 1);
        assert_eq!(QuestStatus::FailedDone as u8, 6);
    }

    #[test]
    fn resize_fills_with_defaults() {
        let mut list = QuestList::new();
        list.resize(5);
        assert_eq!(list.len(), 5);
        assert_eq!(list[3].typ, QuestType::None);
        assert_eq!(list[3].status, QuestStatus::Untaken);
    }
}
