//! Command-line front end: process a template file against a fresh
//! game state and show what it built.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use zangband_data::{process_dungeon_file, standard_state, InitFlags, Window};
use zangband_rng::ZRng;
use zangband_types::{GameState, QuestType, WildernessMode};

#[derive(Debug, Parser)]
#[command(name = "zangband-rs", version, about = "ZAngband dungeon and quest engine")]
struct Cli {
    /// Template file to process, relative to the edit directory.
    file: String,

    /// Directory holding the template files (default from config, then
    /// `lib/edit`).
    #[arg(long)]
    edit_dir: Option<PathBuf>,

    /// Game RNG seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Player class title, visible to `$CLASS`.
    #[arg(long)]
    class: Option<String>,

    /// Player race title, visible to `$RACE`.
    #[arg(long)]
    race: Option<String>,

    /// Player level, visible to `$LEVEL`.
    #[arg(long, default_value_t = 1)]
    level: i16,

    /// Depth to populate the floor at.
    #[arg(long, default_value_t = 0)]
    depth: i16,

    /// Treat the floor as belonging to this quest number.
    #[arg(long, default_value_t = 0)]
    quest: i16,

    /// Also assign quest records and collect quest text.
    #[arg(long)]
    assign: bool,

    /// Print the populated floor.
    #[arg(long)]
    render: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let cli = Cli::parse();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("zangband").required(false))
        .add_source(config::Environment::with_prefix("ZANGBAND"))
        .build()
        .wrap_err("loading configuration")?;

    let edit_dir = cli.edit_dir.clone().unwrap_or_else(|| {
        settings
            .get_string("edit_dir")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("lib/edit"))
    });
    let seed_town = settings
        .get_int("seed_town")
        .map(|v| v as u32)
        .unwrap_or(1234);

    let mut state = standard_state(seed_town);
    if let Ok(mode) = settings.get_string("wilderness") {
        state.world.mode = match mode.as_str() {
            "none" => WildernessMode::None,
            "lite" => WildernessMode::Lite,
            _ => WildernessMode::Normal,
        };
    }
    if let Some(class) = &cli.class {
        state.player.class = class.clone();
    }
    if let Some(race) = &cli.race {
        state.player.race = race.clone();
    }
    state.player.lev = cli.level;
    state.floor.base_level = cli.depth;

    let mut rng = ZRng::new(cli.seed);

    // Table maxima come first when the edit directory ships them.
    if cli.file != "misc.txt" && edit_dir.join("misc.txt").is_file() {
        let window = Window::new(0, 0, state.floor.height, state.floor.width);
        process_dungeon_file(
            &mut state,
            &mut rng,
            &edit_dir,
            "misc.txt",
            InitFlags::empty(),
            window,
        )
        .wrap_err("processing misc.txt")?;
    }

    if cli.quest > 0 {
        state.floor.inside_quest = cli.quest;
        if let Some(quest) = state.quests.get_mut(cli.quest) {
            quest.status = zangband_types::QuestStatus::Taken;
        }
    }

    let mut init = InitFlags::CREATE_DUNGEON;
    if cli.assign {
        init |= InitFlags::ASSIGN | InitFlags::SHOW_TEXT;
    }

    let window = Window::new(0, 0, state.floor.height, state.floor.width);
    process_dungeon_file(&mut state, &mut rng, &edit_dir, &cli.file, init, window)
        .wrap_err_with(|| format!("processing {}", cli.file))?;

    summarize(&cli.file, &state);
    if cli.render {
        render(&state);
    }
    Ok(())
}

fn summarize(file: &str, state: &GameState) {
    println!(
        "{file}: floor {}x{}, {} monsters, {} objects",
        state.floor.width,
        state.floor.height,
        state.floor.m_list.len(),
        state.floor.o_list.len(),
    );
    for (idx, quest) in state
        .quests
        .iter()
        .enumerate()
        .filter(|(_, q)| q.typ != QuestType::None)
    {
        println!(
            "quest {idx}: {} ({:?}, {:?}, level {})",
            quest.name, quest.typ, quest.status, quest.level
        );
        for line in &quest.text {
            println!("  {line}");
        }
    }
}

fn render(state: &GameState) {
    for y in 0..state.floor.height {
        let mut row = String::with_capacity(state.floor.width as usize);
        for x in 0..state.floor.width {
            let grid = state.floor.grid(y, x);
            let ch = if state.player.y == y && state.player.x == x {
                '@'
            } else if let Some(m_idx) = grid.m_idx {
                let r_idx = state.floor.m_list[m_idx].r_idx;
                state.races.get(r_idx).map(|r| r.symbol).unwrap_or('?')
            } else if let Some(&o_idx) = grid.o_idxs.first() {
                let kind = state.kinds.get(state.floor.o_list[o_idx].k_idx);
                kind.map(|k| k.tval.symbol()).unwrap_or('?')
            } else {
                // Show the mimic: hidden traps look like what they hide
                // under.
                let shown = if grid.mimic != 0 { grid.mimic } else { grid.feat };
                state.terrains.get(shown).map(|t| t.symbol).unwrap_or(' ')
            };
            row.push(ch);
        }
        println!("{}", row.trim_end());
    }
}
