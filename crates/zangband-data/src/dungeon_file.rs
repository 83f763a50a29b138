//! The template-file interpreter (`process_dungeon_file`).
//!
//! Quest floors, towns and the wilderness are described by
//! line-oriented template files. A leading tag picks the handler:
//! `F` defines map letters, `D` paints one floor row, `Q` fills quest
//! records, `W` writes the wilderness, `P` places the player, `B`
//! stocks buildings, `M` sets table maxima. `?:` lines gate whole
//! sections on game state through the expression language in
//! [`crate::expr`], and `%:` pulls in another file.

use std::path::{Path, PathBuf};

use bitflags::bitflags;
use zangband_rng::ZRng;
use zangband_types::{
    GameState, ObjectItem, Pos, QuestFlags, QuestType, RaceFlags1, RaceFlags7, Tval,
};

use crate::expr::eval_expression;
use crate::letter::{LetterEntry, LetterTable, RandomFlags};
use crate::placement::{
    apply_magic, conv_dungeon_feat, create_named_art, make_gold, place_fixed_monster,
    place_random_monster, place_random_object, place_trap, ApplyMagicFlags, PlaceMonsterFlags,
    SV_SCROLL_ACQUIREMENT,
};

/// Height of one display panel; floor heights are rounded up to this.
pub const SCREEN_HGT: Pos = 22;
/// Width of one display panel.
pub const SCREEN_WID: Pos = 66;

const MAX_INCLUDE_DEPTH: usize = 16;

bitflags! {
    /// What the current load is allowed to touch (INIT_* constants).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct InitFlags: u8 {
        const ONLY_FEATURES  = 0x01;
        const ONLY_BUILDINGS = 0x02;
        const ASSIGN         = 0x04;
        const SHOW_TEXT      = 0x08;
        const NAME_ONLY      = 0x10;
        const CREATE_DUNGEON = 0x20;
    }
}

/// The grid window a template file may paint into.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    pub ymin: Pos,
    pub xmin: Pos,
    pub ymax: Pos,
    pub xmax: Pos,
}

impl Window {
    pub fn new(ymin: Pos, xmin: Pos, ymax: Pos, xmax: Pos) -> Self {
        Self {
            ymin,
            xmin,
            ymax,
            xmax,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{file}, line {line}: {msg}")]
    Parse {
        file: String,
        line: usize,
        msg: String,
    },
    #[error("{file}, line {line}: too few arguments")]
    TooFewArguments { file: String, line: usize },
    #[error("{file}, line {line}: undefined directive '{tag}'")]
    UndefinedDirective {
        file: String,
        line: usize,
        tag: char,
    },
    #[error("{file}, line {line}: unknown letter '{letter}'")]
    UnknownLetter {
        file: String,
        line: usize,
        letter: char,
    },
    #[error("{file}, line {line}: {index} out of range for {what}")]
    OutOfRange {
        file: String,
        line: usize,
        what: &'static str,
        index: i32,
    },
    #[error("{file}: includes nested too deeply")]
    IncludeDepth { file: String },
}

/// Process one template file against the game state.
///
/// `name` is resolved relative to `edit_dir`. The file paints into
/// `window`; `init` gates which side effects happen. `%:` includes
/// share this call's letter table but start their own grid cursor.
pub fn process_dungeon_file(
    state: &mut GameState,
    rng: &mut ZRng,
    edit_dir: &Path,
    name: &str,
    init: InitFlags,
    window: Window,
) -> Result<(), TemplateError> {
    let mut processor = Processor {
        state,
        rng,
        edit_dir,
        init,
        letters: LetterTable::new(),
    };
    processor.run(name, window, 0)
}

struct Processor<'a> {
    state: &'a mut GameState,
    rng: &'a mut ZRng,
    edit_dir: &'a Path,
    init: InitFlags,
    letters: LetterTable,
}

impl Processor<'_> {
    fn run(&mut self, name: &str, window: Window, depth: usize) -> Result<(), TemplateError> {
        if depth > MAX_INCLUDE_DEPTH {
            return Err(TemplateError::IncludeDepth { file: name.into() });
        }
        let path = self.edit_dir.join(name);
        let text = std::fs::read_to_string(&path)
            .map_err(|source| TemplateError::Io { path, source })?;
        log::debug!("processing '{name}'");

        let mut bypass = false;
        let mut y = window.ymin;
        let mut x = window.xmin;

        for (idx, line) in text.lines().enumerate() {
            let lineno = idx + 1;
            if line.is_empty() || line.starts_with(char::is_whitespace) {
                continue;
            }
            if line.starts_with('#') {
                continue;
            }
            if let Some(expr) = line.strip_prefix("?:") {
                let value = eval_expression(self.state, expr);
                bypass = value == "0";
                log::debug!("{name}:{lineno}: ?:{expr} => {value}");
                continue;
            }
            if bypass {
                continue;
            }
            if let Err(err) = self.process_line(line, name, lineno, window, &mut y, &mut x, depth)
            {
                log::error!("while parsing '{line}'");
                return Err(err);
            }
        }

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn process_line(
        &mut self,
        line: &str,
        file: &str,
        lineno: usize,
        window: Window,
        y: &mut Pos,
        x: &mut Pos,
        depth: usize,
    ) -> Result<(), TemplateError> {
        let mut chars = line.chars();
        let tag = chars.next().expect("line is non-empty");
        if chars.next() != Some(':') {
            return Err(TemplateError::Parse {
                file: file.into(),
                line: lineno,
                msg: format!("expected ':' after tag '{tag}'"),
            });
        }
        let rest = chars.as_str();

        match tag {
            '%' => self.run(rest, window, depth + 1),
            'F' => {
                let fields: Vec<&str> = rest.split(':').collect();
                self.letters
                    .define(&fields, &self.state.terrains)
                    .map_err(|msg| TemplateError::Parse {
                        file: file.into(),
                        line: lineno,
                        msg,
                    })
            }
            'D' => self.d_line(rest, file, lineno, window, y, x),
            'Q' => self.q_line(rest, file, lineno),
            'W' => self.w_line(rest, file, lineno, window, y, x),
            'P' => self.p_line(rest, file, lineno, *y, *x),
            'B' => self.b_line(rest, file, lineno),
            'M' => self.m_line(rest, file, lineno),
            tag => Err(TemplateError::UndefinedDirective {
                file: file.into(),
                line: lineno,
                tag,
            }),
        }
    }

    /// `D:<row>` — one row of map characters through the letter table.
    fn d_line(
        &mut self,
        row: &str,
        file: &str,
        lineno: usize,
        window: Window,
        y: &mut Pos,
        x: &mut Pos,
    ) -> Result<(), TemplateError> {
        if self.init.contains(InitFlags::ONLY_BUILDINGS) {
            return Ok(());
        }
        if *y >= window.ymax {
            *y += 1;
            return Ok(());
        }
        *x = window.xmin;
        for letter in row.chars() {
            if *x >= window.xmax {
                break;
            }
            let entry = *self
                .letters
                .get(letter)
                .ok_or_else(|| TemplateError::UnknownLetter {
                    file: file.into(),
                    line: lineno,
                    letter,
                })?;
            self.populate_grid(*y, *x, &entry);
            *x += 1;
        }
        *y += 1;
        Ok(())
    }

    fn populate_grid(&mut self, y: Pos, x: Pos, entry: &LetterEntry) {
        if !self.state.floor.in_bounds(y, x) {
            return;
        }
        let feat = conv_dungeon_feat(self.state, entry.feature);
        self.state.floor.grid_mut(y, x).feat = feat;
        if self.init.contains(InitFlags::ONLY_FEATURES) {
            return;
        }
        self.state.floor.grid_mut(y, x).info = entry.cave_info;

        if entry.random.contains(RandomFlags::MONSTER) {
            let base = self.state.floor.base_level;
            self.state.floor.monster_level = base + entry.monster;
            place_random_monster(
                self.state,
                self.rng,
                y,
                x,
                PlaceMonsterFlags::ALLOW_SLEEP | PlaceMonsterFlags::ALLOW_GROUP,
            );
            self.state.floor.monster_level = base;
        } else if entry.monster != 0 {
            let (r_idx, clone) = if entry.monster < 0 {
                (-entry.monster, true)
            } else {
                (entry.monster, false)
            };
            if self.state.races.get(r_idx).is_some() {
                let old_cur = self.state.races[r_idx].cur_num;
                let old_max = self.state.races[r_idx].max_num;
                if self.state.races[r_idx].is_unique() {
                    // A scripted unique is placed even if already seen.
                    self.state.races[r_idx].cur_num = 0;
                    self.state.races[r_idx].max_num = 1;
                } else if self.state.races[r_idx].flags7.contains(RaceFlags7::NAZGUL)
                    && old_cur == old_max
                {
                    self.state.races[r_idx].max_num += 1;
                }
                let placed = place_fixed_monster(
                    self.state,
                    self.rng,
                    y,
                    x,
                    r_idx,
                    PlaceMonsterFlags::ALLOW_SLEEP,
                );
                if clone {
                    if let Some(m_idx) = placed {
                        crate::placement::mark_cloned(self.state, m_idx);
                    }
                    self.state.races[r_idx].cur_num = old_cur;
                    self.state.races[r_idx].max_num = old_max;
                }
            } else {
                log::warn!("letter spawns unknown race {r_idx}");
            }
        }

        let has_rnd_object = entry.random.contains(RandomFlags::OBJECT);
        let has_rnd_trap = entry.random.contains(RandomFlags::TRAP);
        if has_rnd_object && has_rnd_trap {
            let base = self.state.floor.base_level;
            self.state.floor.object_level = base + entry.object;
            // 75% chance of treasure, 25% of a trap.
            if self.rng.randint0(100) < 75 {
                place_random_object(self.state, self.rng, y, x, ApplyMagicFlags::empty());
            } else {
                place_trap(self.state, self.rng, y, x);
            }
            self.state.floor.object_level = base;
        } else if has_rnd_object {
            let base = self.state.floor.base_level;
            self.state.floor.object_level = base + entry.object;
            if self.rng.randint0(100) < 75 {
                place_random_object(self.state, self.rng, y, x, ApplyMagicFlags::empty());
            } else if self.rng.randint0(100) < 80 {
                place_random_object(self.state, self.rng, y, x, ApplyMagicFlags::GOOD);
            } else {
                place_random_object(
                    self.state,
                    self.rng,
                    y,
                    x,
                    ApplyMagicFlags::GOOD | ApplyMagicFlags::GREAT,
                );
            }
            self.state.floor.object_level = base;
        } else if has_rnd_trap {
            place_trap(self.state, self.rng, y, x);
        } else if entry.trap != 0 {
            let trap = conv_dungeon_feat(self.state, entry.trap);
            let grid = self.state.floor.grid_mut(y, x);
            grid.mimic = grid.feat;
            grid.feat = trap;
        } else if entry.object != 0 {
            if let Some(kind) = self.state.kinds.get(entry.object) {
                let mut item = if kind.tval == Tval::Gold {
                    make_gold(self.rng, entry.object, kind.sval)
                } else {
                    ObjectItem::new(entry.object)
                };
                let base = self.state.floor.base_level;
                apply_magic(
                    self.state,
                    self.rng,
                    &mut item,
                    base,
                    ApplyMagicFlags::NO_FIXED_ART | ApplyMagicFlags::GOOD,
                );
                self.state.floor.drop_here(item, y, x);
            } else {
                log::warn!("letter drops unknown kind {}", entry.object);
            }
        }

        if entry.artifact != 0 {
            let a_idx = entry.artifact;
            let already_made = self
                .state
                .artifacts
                .get(a_idx)
                .map(|a| a.cur_num > 0)
                .unwrap_or(true);
            if already_made {
                // Never duplicate an artifact; compensate with a scroll
                // of acquirement.
                if let Some(k_idx) = self.state.kinds.lookup(Tval::Scroll, SV_SCROLL_ACQUIREMENT)
                {
                    let item = ObjectItem::new(k_idx);
                    self.state.floor.drop_here(item, y, x);
                }
            } else if create_named_art(self.state, self.rng, a_idx, y, x) {
                self.state.artifacts[a_idx].cur_num = 1;
            }
        }

        self.state.floor.grid_mut(y, x).special = entry.special;
    }

    /// `Q:<num>:<sub>:...` — fill one quest record.
    fn q_line(&mut self, rest: &str, file: &str, lineno: usize) -> Result<(), TemplateError> {
        let tokens: Vec<&str> = rest.split(':').collect();
        if tokens.len() < 3 {
            return Err(TemplateError::TooFewArguments {
                file: file.into(),
                line: lineno,
            });
        }
        let q_idx = self.parse_i16(tokens[0], file, lineno)?;
        if self.state.quests.get(q_idx).is_none() {
            return Err(TemplateError::OutOfRange {
                file: file.into(),
                line: lineno,
                what: "quest",
                index: q_idx as i32,
            });
        }

        match tokens[1].chars().next() {
            Some('Q') => {
                if !self.init.contains(InitFlags::ASSIGN) {
                    return Ok(());
                }
                if tokens.len() < 10 {
                    return Err(TemplateError::TooFewArguments {
                        file: file.into(),
                        line: lineno,
                    });
                }
                let typ_raw = self.parse_i16(tokens[2], file, lineno)?;
                let typ =
                    QuestType::from_repr(typ_raw as u8).ok_or_else(|| TemplateError::Parse {
                        file: file.into(),
                        line: lineno,
                        msg: format!("invalid quest type: {typ_raw}"),
                    })?;
                let num_mon = self.parse_i16(tokens[3], file, lineno)?;
                let cur_num = self.parse_i16(tokens[4], file, lineno)?;
                let max_num = self.parse_i16(tokens[5], file, lineno)?;
                let level = self.parse_i16(tokens[6], file, lineno)?;
                let r_idx = self.parse_i16(tokens[7], file, lineno)?;
                let k_idx = self.parse_i16(tokens[8], file, lineno)?;
                let dungeon = self.parse_i16(tokens[9], file, lineno)?;
                let flags = match tokens.get(10) {
                    Some(tok) => {
                        QuestFlags::from_bits_truncate(self.parse_i16(tok, file, lineno)? as u8)
                    }
                    None => QuestFlags::empty(),
                };

                let quest = &mut self.state.quests[q_idx];
                quest.typ = typ;
                quest.num_mon = num_mon;
                quest.cur_num = cur_num;
                quest.max_num = max_num;
                quest.level = level;
                quest.r_idx = r_idx;
                quest.k_idx = k_idx;
                quest.dungeon = dungeon;
                quest.flags = flags;

                if r_idx > 0 {
                    if self.state.races.get(r_idx).is_none() {
                        return Err(TemplateError::OutOfRange {
                            file: file.into(),
                            line: lineno,
                            what: "monster race",
                            index: r_idx as i32,
                        });
                    }
                    if self.state.races[r_idx].is_unique() {
                        self.state.races[r_idx].flags1.insert(RaceFlags1::QUESTOR);
                    }
                }
                if k_idx > 0 {
                    if self.state.artifacts.get(k_idx).is_none() {
                        return Err(TemplateError::OutOfRange {
                            file: file.into(),
                            line: lineno,
                            what: "artifact",
                            index: k_idx as i32,
                        });
                    }
                    self.state.artifacts[k_idx]
                        .gen_flags
                        .insert(zangband_types::GenFlags::QUESTITEM);
                }
                Ok(())
            }
            Some('R') => {
                if !self.init.contains(InitFlags::ASSIGN) {
                    return Ok(());
                }
                // Uniform pick over the not-yet-created candidates.
                let mut count = 0;
                let mut reward = 0;
                for tok in &tokens[2..] {
                    let a_idx = self.parse_i16(tok, file, lineno)?;
                    if a_idx < 1 {
                        continue;
                    }
                    let Some(artifact) = self.state.artifacts.get(a_idx) else {
                        return Err(TemplateError::OutOfRange {
                            file: file.into(),
                            line: lineno,
                            what: "artifact",
                            index: a_idx as i32,
                        });
                    };
                    if artifact.cur_num > 0 {
                        continue;
                    }
                    count += 1;
                    if self.rng.one_in(count) {
                        reward = a_idx;
                    }
                }
                if reward != 0 {
                    self.state.quests[q_idx].k_idx = reward;
                    self.state.artifacts[reward]
                        .gen_flags
                        .insert(zangband_types::GenFlags::QUESTITEM);
                } else {
                    // Every candidate exists already; fall back to a
                    // kill-everything quest.
                    self.state.quests[q_idx].typ = QuestType::KillAll;
                }
                Ok(())
            }
            Some('N') => {
                if self.init.intersects(
                    InitFlags::ASSIGN | InitFlags::SHOW_TEXT | InitFlags::NAME_ONLY,
                ) {
                    self.state.quests[q_idx].name = tokens[2].to_string();
                }
                Ok(())
            }
            Some('T') => {
                if self.init.contains(InitFlags::SHOW_TEXT) {
                    self.state.quests[q_idx].text.push(tokens[2..].join(":"));
                }
                Ok(())
            }
            _ => Err(TemplateError::Parse {
                file: file.into(),
                line: lineno,
                msg: format!("unknown quest sub-record: {}", tokens[1]),
            }),
        }
    }

    /// `W:D:<row>` and `W:P:<y>:<x>` — wilderness map and start point.
    fn w_line(
        &mut self,
        rest: &str,
        file: &str,
        lineno: usize,
        window: Window,
        y: &mut Pos,
        x: &mut Pos,
    ) -> Result<(), TemplateError> {
        let Some((sub, data)) = rest.split_once(':') else {
            return Err(TemplateError::TooFewArguments {
                file: file.into(),
                line: lineno,
            });
        };
        match sub {
            "D" => {
                if *y >= window.ymax {
                    *y += 1;
                    return Ok(());
                }
                *x = window.xmin;
                for letter in data.chars() {
                    if *x >= window.xmax {
                        break;
                    }
                    let entry =
                        *self
                            .letters
                            .get(letter)
                            .ok_or_else(|| TemplateError::UnknownLetter {
                                file: file.into(),
                                line: lineno,
                                letter,
                            })?;
                    if self.state.world.wild_in_bounds(*y, *x) {
                        let tile = self.state.world.wild_mut(*y, *x);
                        tile.terrain = entry.feature;
                        tile.town = entry.special;
                    }
                    *x += 1;
                }
                *y += 1;
                Ok(())
            }
            "P" => {
                if !self.init.contains(InitFlags::CREATE_DUNGEON) {
                    return Ok(());
                }
                if self.state.player.wilderness_y != 0 || self.state.player.wilderness_x != 0 {
                    return Ok(());
                }
                let fields: Vec<&str> = data.split(':').collect();
                if fields.len() < 2 {
                    return Err(TemplateError::TooFewArguments {
                        file: file.into(),
                        line: lineno,
                    });
                }
                let wy = self.parse_i16(fields[0], file, lineno)?;
                let wx = self.parse_i16(fields[1], file, lineno)?;
                if !self.state.world.wild_in_bounds(wy, wx) {
                    return Err(TemplateError::OutOfRange {
                        file: file.into(),
                        line: lineno,
                        what: "wilderness",
                        index: wy as i32,
                    });
                }
                self.state.player.wilderness_y = wy;
                self.state.player.wilderness_x = wx;
                Ok(())
            }
            _ => Err(TemplateError::Parse {
                file: file.into(),
                line: lineno,
                msg: format!("unknown wilderness sub-record: {sub}"),
            }),
        }
    }

    /// `P:<y>:<x>` — fix the floor size to whole panels and place the
    /// player.
    fn p_line(
        &mut self,
        rest: &str,
        file: &str,
        lineno: usize,
        y: Pos,
        x: Pos,
    ) -> Result<(), TemplateError> {
        if !self.init.contains(InitFlags::CREATE_DUNGEON) {
            return Ok(());
        }
        let fields: Vec<&str> = rest.split(':').collect();
        if fields.len() != 2 {
            return Ok(());
        }

        let mut panels_y = y / SCREEN_HGT;
        if y % SCREEN_HGT != 0 {
            panels_y += 1;
        }
        let mut panels_x = x / SCREEN_WID;
        if x % SCREEN_WID != 0 {
            panels_x += 1;
        }
        self.state
            .floor
            .resize(panels_y * SCREEN_HGT, panels_x * SCREEN_WID);

        let py = self.parse_i16(fields[0], file, lineno)?;
        let px = self.parse_i16(fields[1], file, lineno)?;
        if self.state.floor.inside_quest != 0 {
            let (old_y, old_x) = (self.state.player.y, self.state.player.x);
            self.state.floor.delete_monster(old_y, old_x);
            self.state.player.y = py;
            self.state.player.x = px;
        } else if self.state.player.oldpx == 0 && self.state.player.oldpy == 0 {
            self.state.player.oldpy = py;
            self.state.player.oldpx = px;
        }
        Ok(())
    }

    /// `B:<idx>:<sub>:...` — name a building, add a service, set class
    /// costs.
    fn b_line(&mut self, rest: &str, file: &str, lineno: usize) -> Result<(), TemplateError> {
        let tokens: Vec<&str> = rest.split(':').collect();
        if tokens.len() < 2 {
            return Err(TemplateError::TooFewArguments {
                file: file.into(),
                line: lineno,
            });
        }
        let idx = self.parse_i16(tokens[0], file, lineno)? as usize;
        if idx >= self.state.buildings.len() {
            return Err(TemplateError::OutOfRange {
                file: file.into(),
                line: lineno,
                what: "building",
                index: idx as i32,
            });
        }

        match tokens[1] {
            "N" => {
                if tokens.len() < 5 {
                    return Err(TemplateError::TooFewArguments {
                        file: file.into(),
                        line: lineno,
                    });
                }
                let building = &mut self.state.buildings[idx];
                building.name = tokens[2].to_string();
                building.owner_name = tokens[3].to_string();
                building.owner_race = tokens[4].to_string();
                Ok(())
            }
            "A" => {
                if tokens.len() < 6 {
                    return Err(TemplateError::TooFewArguments {
                        file: file.into(),
                        line: lineno,
                    });
                }
                let member_cost = self.parse_i16(tokens[3], file, lineno)? as u16;
                let other_cost = self.parse_i16(tokens[4], file, lineno)? as u16;
                let action = self.parse_i16(tokens[5], file, lineno)?;
                self.state.buildings[idx]
                    .actions
                    .push(zangband_types::BuildingAction {
                        name: tokens[2].to_string(),
                        action,
                        member_cost,
                        other_cost,
                    });
                Ok(())
            }
            "C" => {
                let mut costs = Vec::with_capacity(tokens.len() - 2);
                for tok in &tokens[2..] {
                    costs.push(self.parse_i16(tok, file, lineno)? as u16);
                }
                self.state.buildings[idx].class_costs = costs;
                Ok(())
            }
            sub => Err(TemplateError::Parse {
                file: file.into(),
                line: lineno,
                msg: format!("unknown building sub-record: {sub}"),
            }),
        }
    }

    /// `M:<key>:<value>` — table maxima.
    fn m_line(&mut self, rest: &str, file: &str, lineno: usize) -> Result<(), TemplateError> {
        let Some((key, value)) = rest.split_once(':') else {
            return Err(TemplateError::TooFewArguments {
                file: file.into(),
                line: lineno,
            });
        };
        let value = self.parse_i16(value, file, lineno)? as u16;
        let maxima = &mut self.state.world.maxima;
        match key {
            "T" => maxima.towns = value,
            "Q" => {
                maxima.quests = value;
                self.state.quests.resize(value as usize);
            }
            "R" => {
                maxima.races = value;
                if value as usize > self.state.races.len() {
                    self.state.races.resize(value as usize);
                }
            }
            "K" => {
                maxima.kinds = value;
                if value as usize > self.state.kinds.len() {
                    self.state.kinds.resize(value as usize);
                }
            }
            "V" => maxima.vaults = value,
            "F" => {
                maxima.features = value;
                if value as usize > self.state.terrains.len() {
                    self.state.terrains.resize(value as usize);
                }
            }
            "A" => {
                maxima.artifacts = value;
                if value as usize > self.state.artifacts.len() {
                    self.state.artifacts.resize(value as usize);
                }
            }
            "E" => maxima.egos = value,
            "D" => maxima.dungeons = value,
            "O" => maxima.objects = value,
            "M" => maxima.monsters = value,
            "WX" => {
                maxima.wild_x = value as Pos;
                self.state.world.resize_wilderness();
            }
            "WY" => {
                maxima.wild_y = value as Pos;
                self.state.world.resize_wilderness();
            }
            key => log::warn!("{file}, line {lineno}: ignoring maxima key '{key}'"),
        }
        Ok(())
    }

    fn parse_i16(&self, s: &str, file: &str, lineno: usize) -> Result<i16, TemplateError> {
        s.trim().parse::<i16>().map_err(|_| TemplateError::Parse {
            file: file.into(),
            line: lineno,
            msg: format!("expected integer, got: {s}"),
        })
    }
}
