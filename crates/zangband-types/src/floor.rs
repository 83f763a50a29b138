use serde::Serialize;

use crate::grid::Grid;
use crate::monster::Monster;
use crate::object::ObjectItem;
use crate::{Depth, FeatId, Pos, QuestId};

/// The live dungeon floor (`floor_type`): the grid array plus the
/// monsters and objects on it.
#[derive(Debug, Clone, Serialize)]
pub struct Floor {
    pub width: Pos,
    pub height: Pos,
    /// Depth this floor was generated at.
    pub base_level: Depth,
    /// Level used for monster generation; temporarily offset while
    /// placing depth-boosted spawns.
    pub monster_level: Depth,
    /// Level used for object generation, same idea.
    pub object_level: Depth,
    /// Quest this floor belongs to, 0 when none.
    pub inside_quest: QuestId,
    /// Terrain substituted for the `FLOOR` conversion in this dungeon.
    pub floor_feat: FeatId,
    /// Terrain substituted for the `WALL` conversion in this dungeon.
    pub wall_feat: FeatId,
    grid: Vec<Vec<Grid>>,
    pub m_list: Vec<Monster>,
    pub o_list: Vec<ObjectItem>,
}

impl Floor {
    pub fn new(height: Pos, width: Pos) -> Self {
        let grid = (0..height)
            .map(|_| (0..width).map(|_| Grid::default()).collect())
            .collect();
        Self {
            width,
            height,
            base_level: 0,
            monster_level: 0,
            object_level: 0,
            inside_quest: 0,
            floor_feat: 0,
            wall_feat: 0,
            grid,
            m_list: Vec::new(),
            o_list: Vec::new(),
        }
    }

    pub fn in_bounds(&self, y: Pos, x: Pos) -> bool {
        y >= 0 && x >= 0 && y < self.height && x < self.width
    }

    pub fn grid(&self, y: Pos, x: Pos) -> &Grid {
        &self.grid[y as usize][x as usize]
    }

    pub fn grid_mut(&mut self, y: Pos, x: Pos) -> &mut Grid {
        &mut self.grid[y as usize][x as usize]
    }

    /// Grow the grid array. Existing grids keep their contents.
    pub fn resize(&mut self, height: Pos, width: Pos) {
        self.grid
            .resize_with(height as usize, || vec![Grid::default(); width as usize]);
        for row in &mut self.grid {
            row.resize_with(width as usize, Grid::default);
        }
        self.height = height;
        self.width = width;
    }

    /// Put `item` on the floor at `(y, x)`, newest on top (`drop_here`).
    pub fn drop_here(&mut self, mut item: ObjectItem, y: Pos, x: Pos) -> usize {
        item.iy = y;
        item.ix = x;
        item.held_m_idx = None;
        let o_idx = self.o_list.len();
        self.o_list.push(item);
        self.grid_mut(y, x).o_idxs.insert(0, o_idx);
        o_idx
    }

    /// Register a monster at `(y, x)` and point the grid at it.
    pub fn place_monster_at(&mut self, monster: Monster, y: Pos, x: Pos) -> usize {
        let m_idx = self.m_list.len();
        self.m_list.push(monster);
        self.grid_mut(y, x).m_idx = Some(m_idx);
        m_idx
    }

    /// Remove the monster standing at `(y, x)`, if any.
    pub fn delete_monster(&mut self, y: Pos, x: Pos) {
        if !self.in_bounds(y, x) {
            return;
        }
        if let Some(m_idx) = self.grid_mut(y, x).m_idx.take() {
            self.m_list[m_idx].dead = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectItem;

    #[test]
    fn new_floor_dimensions() {
        let floor = Floor::new(10, 20);
        assert_eq!(floor.height, 10);
        assert_eq!(floor.width, 20);
        assert!(floor.in_bounds(9, 19));
        assert!(!floor.in_bounds(10, 0));
        assert!(!floor.in_bounds(0, 20));
        assert!(!floor.in_bounds(-1, 0));
    }

    #[test]
    fn drop_here_stacks_newest_first() {
        let mut floor = Floor::new(5, 5);
        let a = floor.drop_here(ObjectItem::new(1), 2, 2);
        let b = floor.drop_here(ObjectItem::new(2), 2, 2);
        assert_eq!(floor.grid(2, 2).o_idxs, vec![b, a]);
        assert_eq!(floor.o_list[a].iy, 2);
        assert!(floor.o_list[a].held_m_idx.is_none());
    }

    #[test]
    fn resize_preserves_contents() {
        let mut floor = Floor::new(5, 5);
        floor.grid_mut(1, 1).feat = 7;
        floor.resize(8, 9);
        assert_eq!(floor.grid(1, 1).feat, 7);
        assert_eq!(floor.grid(7, 8).feat, 0);
    }

    #[test]
    fn delete_monster_clears_grid() {
        let mut floor = Floor::new(5, 5);
        let m_idx = floor.place_monster_at(crate::monster::Monster::new(3, 2, 2), 2, 2);
        floor.delete_monster(2, 2);
        assert!(floor.grid(2, 2).m_idx.is_none());
        assert!(floor.m_list[m_idx].dead);
    }
}
