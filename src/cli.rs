use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "termtrivia", version, about = "Terminal-based timed trivia quiz")]
pub struct Cli {
    /// Skip the network fetch and play the bundled question set
    #[arg(long)]
    pub offline: bool,

    /// Clear the saved high score before starting
    #[arg(long)]
    pub clear: bool,

    /// Print the saved high score without entering the TUI
    #[arg(long)]
    pub best: bool,
}
