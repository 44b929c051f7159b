use clap::Parser;

use termtrivia::cli::Cli;
use termtrivia::source;
use termtrivia::state::AppState;
use termtrivia::store::{FileStore, MemoryStore, ScoreStore};
use termtrivia::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    env_logger::init();

    let cli = Cli::parse();

    // An unresolvable data directory degrades to a session-only score.
    let mut store: Box<dyn ScoreStore> = match FileStore::open_default() {
        Ok(s) => Box::new(s),
        Err(e) => {
            log::warn!("high score will not persist: {}", e);
            Box::new(MemoryStore::new())
        }
    };

    if cli.clear {
        store.clear()?;
        eprintln!("High score cleared.");
    }

    if cli.best {
        match store.read_best() {
            Some(best) => println!("High score: {}", best),
            None => println!("No high score yet."),
        }
        return Ok(());
    }

    // Fetch in the background; the TUI shows a loading screen until the
    // receiver yields.
    let load_rx = source::spawn_load(cli.offline);

    let state = AppState::new(store);

    tui::run_tui(state, load_rx)
}
