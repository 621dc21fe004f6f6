mod cmd_clear;
mod cmd_config;
mod cmd_rules;
mod cmd_search;
mod cmd_show;
mod cmd_split;
mod context;
mod logging;
mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "topica",
    version,
    about = "Split chat transcripts into topic blocks"
)]
struct Cli {
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a transcript and print its topic blocks
    Split {
        /// Transcript file (reads stdin when omitted or "-")
        file: Option<PathBuf>,
        /// Split the built-in demo transcript instead of reading input
        #[arg(long, conflicts_with = "file")]
        sample: bool,
        /// Output blocks as JSON
        #[arg(long)]
        json: bool,
        /// Save the blocks to a slot for later show/search
        #[arg(long)]
        save: bool,
        /// Slot key (defaults to config `slot`, then chat_organizer_blocks)
        #[arg(long)]
        slot: Option<String>,
        /// YAML rule table replacing the built-in one
        #[arg(long, env = "TOPICA_RULES")]
        rules: Option<PathBuf>,
    },
    /// Print saved blocks
    Show {
        /// Slot key
        #[arg(long)]
        slot: Option<String>,
        /// Output blocks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Filter saved blocks by topic or message text
    Search {
        /// Case-insensitive text to look for
        query: String,
        /// Slot key
        #[arg(long)]
        slot: Option<String>,
        /// Output matching blocks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove saved blocks
    Clear {
        /// Slot key
        #[arg(long)]
        slot: Option<String>,
    },
    /// List the category rules used for classification
    Rules {
        /// YAML rule table to show instead of the active one
        #[arg(long, env = "TOPICA_RULES")]
        rules: Option<PathBuf>,
        /// Output the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in demo transcript
    Sample,
    /// Read and write settings
    Config {
        #[command(subcommand)]
        cmd: cmd_config::ConfigCmd,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json)?;
    dispatch(cli.cmd, topica_store::store_root())
}

fn dispatch(cmd: Command, root: PathBuf) -> anyhow::Result<()> {
    // Settings load lazily: `config` and `sample` must run with an invalid setting.
    let ctx = || context::Context::at(root.clone());
    match cmd {
        Command::Split {
            file,
            sample,
            json,
            save,
            slot,
            rules,
        } => cmd_split::execute(
            &ctx()?,
            &cmd_split::SplitParams {
                input: file.as_deref(),
                sample,
                json,
                save,
                slot: slot.as_deref(),
                rules: rules.as_deref(),
            },
        ),
        Command::Show { slot, json } => cmd_show::execute(&ctx()?, slot.as_deref(), json),
        Command::Search { query, slot, json } => {
            cmd_search::execute(&ctx()?, &query, slot.as_deref(), json)
        }
        Command::Clear { slot } => cmd_clear::execute(&ctx()?, slot.as_deref()),
        Command::Rules { rules, json } => cmd_rules::execute(&ctx()?, rules.as_deref(), json),
        Command::Sample => {
            println!("{}", topica_transcript::SAMPLE_TRANSCRIPT);
            Ok(())
        }
        Command::Config { cmd } => cmd_config::run(cmd, &root),
    }
}
