//! Expression evaluator for `?:` conditional directives.
//!
//! Template files condition lines on game state with bracketed prefix
//! expressions over string atoms, e.g.
//! `?:[AND [EQU $CLASS Warrior] [GEQ $LEVEL 5]]`. Every operand is
//! evaluated left to right; there is no short circuit. The evaluator is
//! total: broken input degrades to the marker values `?o?o?` (nothing
//! usable) and `?x?x?` (missing `]`) rather than failing, matching the
//! semantics of `init1.c`.

use zangband_types::GameState;

/// Value of `$VARIANT`.
pub const VARIANT: &str = "ZANGBAND";

const UNKNOWN: &str = "?o?o?";
const UNBALANCED: &str = "?x?x?";

/// Evaluate one expression against the current game state.
pub fn eval_expression(state: &GameState, expr: &str) -> String {
    let mut cursor = Cursor { rest: expr };
    cursor.eval(state).0
}

struct Cursor<'a> {
    rest: &'a str,
}

impl Cursor<'_> {
    /// Evaluate one term. Returns its value and the delimiter that
    /// ended it (already consumed), `None` at end of input.
    fn eval(&mut self, state: &GameState) -> (String, Option<char>) {
        self.rest = self.rest.trim_start();

        if let Some(rest) = self.rest.strip_prefix('[') {
            self.rest = rest;
            return self.eval_bracketed(state);
        }

        // Atom: a maximal run of printable characters outside ` []`.
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_graphic() || c == '[' || c == ']')
            .unwrap_or(self.rest.len());
        let atom = &self.rest[..end];
        self.rest = &self.rest[end..];
        let term = self.take_delim();

        let value = match atom.strip_prefix('$') {
            Some(name) => lookup_var(state, name).unwrap_or_else(|| UNKNOWN.to_string()),
            None => atom.to_string(),
        };
        (value, term)
    }

    fn eval_bracketed(&mut self, state: &GameState) -> (String, Option<char>) {
        let (head, mut term) = self.eval(state);
        let mut v = UNKNOWN.to_string();

        match head.as_str() {
            "" => {}
            "IOR" => {
                v = "0".into();
                while self.more(term) {
                    let (t, f) = self.eval(state);
                    term = f;
                    if !t.is_empty() && t != "0" {
                        v = "1".into();
                    }
                }
            }
            "AND" => {
                v = "1".into();
                while self.more(term) {
                    let (t, f) = self.eval(state);
                    term = f;
                    if !t.is_empty() && t == "0" {
                        v = "0".into();
                    }
                }
            }
            "NOT" => {
                v = "1".into();
                while self.more(term) {
                    let (t, f) = self.eval(state);
                    term = f;
                    if !t.is_empty() && t == "1" {
                        v = "0".into();
                    }
                }
            }
            "EQU" => {
                v = "0".into();
                let mut first = String::new();
                if self.more(term) {
                    let (t, f) = self.eval(state);
                    term = f;
                    first = t;
                }
                while self.more(term) {
                    let (p, f) = self.eval(state);
                    term = f;
                    if first == p {
                        v = "1".into();
                    }
                }
            }
            "LEQ" => {
                v = "1".into();
                let mut prev = String::new();
                if self.more(term) {
                    let (t, f) = self.eval(state);
                    term = f;
                    prev = t;
                }
                while self.more(term) {
                    let (t, f) = self.eval(state);
                    term = f;
                    if !t.is_empty() && atoi(&prev) > atoi(&t) {
                        v = "0".into();
                    }
                    prev = t;
                }
            }
            "GEQ" => {
                v = "1".into();
                let mut prev = String::new();
                if self.more(term) {
                    let (t, f) = self.eval(state);
                    term = f;
                    prev = t;
                }
                while self.more(term) {
                    let (t, f) = self.eval(state);
                    term = f;
                    if !t.is_empty() && atoi(&prev) < atoi(&t) {
                        v = "0".into();
                    }
                    prev = t;
                }
            }
            _ => {
                // Unknown operator: consume the operands, yield nothing.
                while self.more(term) {
                    let (_, f) = self.eval(state);
                    term = f;
                }
            }
        }

        if term != Some(']') {
            v = UNBALANCED.into();
        }
        let next = self.take_delim();
        (v, next)
    }

    /// The operand loop runs while input remains and no `]` has closed
    /// the form.
    fn more(&self, term: Option<char>) -> bool {
        term != Some(']') && !self.rest.is_empty()
    }

    fn take_delim(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        Some(c)
    }
}

/// C `atoi`: optional sign, leading digits, 0 for anything else.
fn atoi(s: &str) -> i32 {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i32>().map(|n| n * sign).unwrap_or(0)
}

/// Numeric suffix of prefixed variables like `$QUEST31`; a separating
/// `:` is accepted (`$RANDOM:11`).
fn numeric_suffix(rest: &str) -> i32 {
    atoi(rest.strip_prefix(':').unwrap_or(rest))
}

fn lookup_var(state: &GameState, name: &str) -> Option<String> {
    let value = match name {
        "SYS" => state.system.sys.clone(),
        "GRAF" => state.system.graf.clone(),
        "MONOCHROME" => {
            if state.system.monochrome {
                "ON".into()
            } else {
                "OFF".into()
            }
        }
        "RACE" => state.player.race.clone(),
        "CLASS" => state.player.class.clone(),
        "REALM1" => state.player.realm1.clone(),
        "REALM2" => state.player.realm2.clone(),
        "PLAYER" => state
            .player
            .name
            .chars()
            .map(|c| if c == ' ' || c == '[' || c == ']' { '_' } else { c })
            .collect(),
        "TOWN" => state.player.town_num.to_string(),
        "LEVEL" => state.player.lev.to_string(),
        "QUEST_NUMBER" => state.floor.inside_quest.to_string(),
        "LEAVING_QUEST" => state.player.leaving_quest.to_string(),
        "VARIANT" => VARIANT.into(),
        "WILDERNESS" => match state.world.mode {
            zangband_types::WildernessMode::None => "NONE".into(),
            zangband_types::WildernessMode::Lite => "LITE".into(),
            zangband_types::WildernessMode::Normal => "NORMAL".into(),
        },
        _ => {
            if let Some(rest) = name.strip_prefix("QUEST_TYPE") {
                let idx = numeric_suffix(rest) as i16;
                let typ = state.quests.get(idx).map(|q| q.typ).unwrap_or_default();
                (typ as u8).to_string()
            } else if let Some(rest) = name.strip_prefix("QUEST") {
                let idx = numeric_suffix(rest) as i16;
                let status = state.quests.get(idx).map(|q| q.status).unwrap_or_default();
                (status as u8).to_string()
            } else if let Some(rest) = name.strip_prefix("RANDOM") {
                let m = numeric_suffix(rest);
                if m <= 0 {
                    log::warn!("$RANDOM with modulus {m}");
                    "0".into()
                } else {
                    (state.world.seed_town % m as u32).to_string()
                }
            } else {
                return None;
            }
        }
    };
    Some(value)
}
