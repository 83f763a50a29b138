pub mod dungeon_file;
pub mod expr;
pub mod letter;
pub mod placement;
pub mod summon;
pub mod tables;

pub use dungeon_file::{process_dungeon_file, InitFlags, TemplateError, Window};
pub use expr::eval_expression;
pub use letter::{LetterEntry, LetterTable, RandomFlags};
pub use summon::{is_summon_match, SummonType};
pub use tables::standard_state;
