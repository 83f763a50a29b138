use bitflags::bitflags;
use serde::Serialize;

use crate::FeatId;

bitflags! {
    /// Per-grid info flags from `defines.h` (CAVE_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct CaveInfo: u16 {
        const MARK  = 0x0001;
        const GLOW  = 0x0002;
        const ICKY  = 0x0004;
        const ROOM  = 0x0008;
        const LITE  = 0x0010;
        const VIEW  = 0x0020;
        const TEMP  = 0x0040;
        const XTRA  = 0x0080;
        const MNLT  = 0x0100;
        const MNDK  = 0x0200;
        const FLOOR = 0x0400;
        const UNSAFE = 0x0800;
    }
}

/// One dungeon grid (`grid_type`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Grid {
    pub feat: FeatId,
    pub info: CaveInfo,
    /// Terrain this grid pretends to be (hidden traps, secret doors).
    pub mimic: FeatId,
    /// Extra payload: quest number, town index, building id.
    pub special: i16,
    /// Monster standing here, as an index into the floor's monster list.
    pub m_idx: Option<usize>,
    /// Objects lying here, newest first, as indices into the floor's
    /// object list.
    pub o_idxs: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_empty() {
        let g = Grid::default();
        assert_eq!(g.feat, 0);
        assert!(g.info.is_empty());
        assert!(g.m_idx.is_none());
        assert!(g.o_idxs.is_empty());
    }

    #[test]
    fn cave_info_bits_are_distinct() {
        let all = CaveInfo::all();
        assert_eq!(all.bits().count_ones(), 12);
    }
}
