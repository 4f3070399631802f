use clap::Parser;
use slotmatch_core::{DEFAULT_ROUND_SECS, GameConfig, SearchMode};
use wasm_bindgen::prelude::*;

mod game;
mod scheduler;
mod screen;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Length of a round in seconds
    #[arg(long, default_value_t = DEFAULT_ROUND_SECS)]
    seconds: u32,

    /// Do not show the target pattern when a round starts
    #[arg(long)]
    hide_target: bool,

    /// Only searching for the target pattern completes a round
    #[arg(long)]
    secret_only: bool,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        let search_mode = if self.secret_only {
            SearchMode::SecretOnly
        } else {
            SearchMode::AnyPattern
        };
        let defaults = GameConfig::default();
        GameConfig::new(defaults.slots, defaults.pattern_len, self.seconds)
            .with_reveal_target(!self.hide_target)
            .with_search_mode(search_mode)
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let props = game::GameProps {
        config: args.game_config(),
        seed: args.seed,
    };

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}
