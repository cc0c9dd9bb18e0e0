use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log pipeline stages to stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a program.
    Build {
        /// The input file.
        input: String,

        /// Whether the given input should be used directly as the source instead
        /// of as the source file path.
        #[arg(long, short, action)]
        source: bool,

        /// The output file. If not specified, prints to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// What to produce.
        #[arg(long, value_enum, default_value_t = Emit::Asm)]
        emit: Emit,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// The instruction listing.
    Asm,

    /// One line per token.
    Tokens,

    /// The syntax tree as an indented outline.
    Ast,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
