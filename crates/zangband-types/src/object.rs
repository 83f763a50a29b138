use bitflags::bitflags;
use serde::Serialize;
use strum::{EnumIter, FromRepr};

use crate::{ArtifactId, Depth, KindId, Pos};

/// Object base categories from `defines.h` (TV_* constants).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Tval {
    #[default]
    None = 0,
    Skeleton = 1,
    Bottle = 2,
    Junk = 3,
    Spike = 5,
    Chest = 7,
    Shot = 16,
    Arrow = 17,
    Bolt = 18,
    Bow = 19,
    Digging = 20,
    Hafted = 21,
    Polearm = 22,
    Sword = 23,
    Boots = 30,
    Gloves = 31,
    Helm = 32,
    Crown = 33,
    Shield = 34,
    Cloak = 35,
    SoftArmor = 36,
    HardArmor = 37,
    DragArmor = 38,
    Lite = 39,
    Amulet = 40,
    Ring = 45,
    Staff = 55,
    Wand = 65,
    Rod = 66,
    Scroll = 70,
    Potion = 75,
    Flask = 77,
    Food = 80,
    Gold = 127,
}

impl Tval {
    /// Display symbol for this category.
    pub fn symbol(self) -> char {
        match self {
            Tval::None => ' ',
            Tval::Skeleton | Tval::Bottle | Tval::Junk | Tval::Spike => '~',
            Tval::Chest => '&',
            Tval::Shot | Tval::Arrow | Tval::Bolt => '{',
            Tval::Bow => '}',
            Tval::Digging => '\\',
            Tval::Hafted | Tval::Polearm => '/',
            Tval::Sword => '|',
            Tval::Boots | Tval::Gloves | Tval::Cloak => ']',
            Tval::Helm | Tval::Crown => ']',
            Tval::Shield => ')',
            Tval::SoftArmor | Tval::HardArmor | Tval::DragArmor => '[',
            Tval::Lite => '~',
            Tval::Amulet => '"',
            Tval::Ring => '=',
            Tval::Staff => '_',
            Tval::Wand => '-',
            Tval::Rod => '-',
            Tval::Scroll => '?',
            Tval::Potion => '!',
            Tval::Flask => '!',
            Tval::Food => ',',
            Tval::Gold => '$',
        }
    }
}

bitflags! {
    /// Object generation flags from `defines.h` (TRG_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct GenFlags: u32 {
        const INSTA_ART   = 0x0000_0001;
        const QUESTITEM   = 0x0000_0002;
        const XTRA_POWER  = 0x0000_0004;
        const ONE_SIDED   = 0x0000_0008;
        const CURSED      = 0x0000_0010;
        const HEAVY_CURSE = 0x0000_0020;
        const PERMA_CURSE = 0x0000_0040;
    }
}

bitflags! {
    /// Identification state bits from `defines.h` (IDENT_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct IdentFlags: u8 {
        const SENSE  = 0x01;
        const FIXED  = 0x02;
        const EMPTY  = 0x04;
        const KNOWN  = 0x10;
        const STORE  = 0x20;
        const MENTAL = 0x80;
    }
}

/// Pseudo-id feelings (FEEL_* constants).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, FromRepr)]
#[repr(u8)]
pub enum Feel {
    #[default]
    None = 0,
    Broken = 1,
    Terrible = 2,
    Worthless = 3,
    Cursed = 4,
    Uncursed = 5,
    Average = 6,
    Good = 7,
    Excellent = 8,
    Special = 9,
}

/// An object kind definition (`object_kind`, one `k_info` entry).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ObjectKind {
    pub idx: KindId,
    pub name: String,
    pub tval: Tval,
    pub sval: i16,
    pub pval: i16,
    pub level: Depth,
    pub cost: i32,
    pub dice_num: i16,
    pub dice_sides: i16,
    pub gen_flags: GenFlags,
    /// The kind's unidentified appearance has no secret left.
    pub easy_know: bool,
    /// Player knows what this kind is.
    pub aware: bool,
    /// Player has used one of these.
    pub tried: bool,
}

impl ObjectKind {
    /// The player is now aware of this kind (`object_aware`).
    pub fn mark_aware(&mut self) {
        self.aware = true;
    }

    /// One of these has been sampled (`object_tried`).
    pub fn mark_tried(&mut self) {
        self.tried = true;
    }
}

/// The object kind table (`k_info`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ObjectKindList {
    kinds: Vec<ObjectKind>,
}

impl ObjectKindList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut kind: ObjectKind) -> KindId {
        let idx = self.kinds.len() as KindId;
        kind.idx = idx;
        self.kinds.push(kind);
        idx
    }

    /// Find the kind with the given category and sub-value (`lookup_kind`).
    pub fn lookup(&self, tval: Tval, sval: i16) -> Option<KindId> {
        self.kinds
            .iter()
            .position(|k| k.tval == tval && k.sval == sval)
            .map(|i| i as KindId)
    }

    pub fn get(&self, idx: KindId) -> Option<&ObjectKind> {
        self.kinds.get(idx as usize)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn resize(&mut self, new_len: usize) {
        self.kinds.resize_with(new_len, ObjectKind::default);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectKind> {
        self.kinds.iter()
    }
}

impl std::ops::Index<KindId> for ObjectKindList {
    type Output = ObjectKind;

    fn index(&self, idx: KindId) -> &ObjectKind {
        &self.kinds[idx as usize]
    }
}

impl std::ops::IndexMut<KindId> for ObjectKindList {
    fn index_mut(&mut self, idx: KindId) -> &mut ObjectKind {
        &mut self.kinds[idx as usize]
    }
}

/// A live object (`object_type`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ObjectItem {
    pub k_idx: KindId,
    pub iy: Pos,
    pub ix: Pos,
    /// Monster carrying this object, if any.
    pub held_m_idx: Option<usize>,
    pub number: i16,
    pub pval: i16,
    /// Fixed artifact this object is, 0 for none.
    pub name1: ArtifactId,
    pub to_hit: i16,
    pub to_dam: i16,
    pub to_ac: i16,
    pub ident: IdentFlags,
    pub feeling: Feel,
}

impl ObjectItem {
    pub fn new(k_idx: KindId) -> Self {
        Self {
            k_idx,
            number: 1,
            ..Default::default()
        }
    }

    /// Make the object's attributes known (`object_known`): the bonuses,
    /// cost and charges. Removes any pseudo-id feeling.
    pub fn mark_known(&mut self) {
        self.feeling = Feel::None;
        self.ident.remove(IdentFlags::SENSE);
        self.ident.remove(IdentFlags::EMPTY);
        self.ident.insert(IdentFlags::KNOWN);
    }

    /// Known either directly or because the kind has no secrets once
    /// aware (`object_is_known`).
    pub fn is_known(&self, kind: &ObjectKind) -> bool {
        self.ident.contains(IdentFlags::KNOWN) || (kind.easy_know && kind.aware)
    }

    /// *Identified*: every hidden power revealed (`object_is_fully_known`).
    pub fn is_fully_known(&self) -> bool {
        self.ident.contains(IdentFlags::MENTAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_clears_feeling_and_sense() {
        let mut item = ObjectItem::new(1);
        item.feeling = Feel::Excellent;
        item.ident = IdentFlags::SENSE | IdentFlags::EMPTY;
        item.mark_known();
        assert_eq!(item.feeling, Feel::None);
        assert!(!item.ident.contains(IdentFlags::SENSE));
        assert!(!item.ident.contains(IdentFlags::EMPTY));
        assert!(item.ident.contains(IdentFlags::KNOWN));
    }

    #[test]
    fn easy_know_needs_awareness() {
        let mut kind = ObjectKind {
            easy_know: true,
            ..Default::default()
        };
        let item = ObjectItem::new(0);
        assert!(!item.is_known(&kind));
        kind.mark_aware();
        assert!(item.is_known(&kind));
    }

    #[test]
    fn fully_known_is_mental_bit() {
        let mut item = ObjectItem::new(0);
        assert!(!item.is_fully_known());
        item.ident.insert(IdentFlags::MENTAL);
        assert!(item.is_fully_known());
    }

    #[test]
    fn lookup_kind_by_tval_sval() {
        let mut kinds = ObjectKindList::new();
        kinds.push(ObjectKind::default());
        let idx = kinds.push(ObjectKind {
            name: "scroll of acquirement".into(),
            tval: Tval::Scroll,
            sval: 16,
            ..Default::default()
        });
        assert_eq!(kinds.lookup(Tval::Scroll, 16), Some(idx));
        assert_eq!(kinds.lookup(Tval::Scroll, 99), None);
    }

    #[test]
    fn gold_symbol() {
        assert_eq!(Tval::Gold.symbol(), '$');
        assert_eq!(Tval::Potion.symbol(), '!');
    }
}
