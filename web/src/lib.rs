use clap::Parser;
use wasm_bindgen::prelude::*;

mod app;
mod element;
mod menu;
mod scheduler;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: app::GameProps,
}

impl Args {
    /// Parses `#-v&--seed=3` style location hashes, the part before the first `#` stands in for
    /// the binary name.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
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

    let args = match Args::from_hash(&location_hash) {
        Ok(args) => {
            if let Some(log_level) = args.verbose.log_level() {
                console_log::init_with_level(log_level).expect("Error initializing logger");
            }
            args
        }
        Err(err) => {
            console_log::init_with_level(log::Level::Warn).expect("Error initializing logger");
            log::warn!("ignoring invalid hash arguments {:?}: {}", location_hash, err);
            Args::parse_from([""])
        }
    };
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<app::GameView>::with_root_and_props(root, args.game).render();
}
