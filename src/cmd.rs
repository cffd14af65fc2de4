use crate::{config::DEFAULT_CONFIG_FILE, solution::Part};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aoc")]
#[command(version)]
#[command(about = "Run and scaffold Advent of Code solutions", long_about = None)]
pub struct Cli {
    /// Config file ( default: ./aoc.kdl, optional )
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// More logging, repeat for even more
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve a day against its input.txt
    #[command(alias = "solve")]
    Run {
        /// Day to run ( default: the latest registered day )
        day: Option<u8>,

        /// Only run this part ( default: both )
        #[arg(short, long)]
        part: Option<Part>,
    },

    /// List registered days
    #[command(alias = "ls")]
    List,

    /// Start a new day from the template
    New {
        /// Day number, 1 to 25
        day: u8,
    },

    /// Print shell completions
    #[cfg(feature = "completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(feature = "completions")]
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    PowerShell,
    Zsh,
}

#[cfg(feature = "completions")]
impl Shell {
    pub fn generate(self, out: &mut dyn std::io::Write) {
        use clap::CommandFactory;
        use clap_complete::{generate, shells};

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();

        match self {
            Shell::Bash => generate(shells::Bash, &mut cmd, name, out),
            Shell::Elvish => generate(shells::Elvish, &mut cmd, name, out),
            Shell::Fish => generate(shells::Fish, &mut cmd, name, out),
            Shell::Nushell => generate(clap_complete_nushell::Nushell, &mut cmd, name, out),
            Shell::PowerShell => generate(shells::PowerShell, &mut cmd, name, out),
            Shell::Zsh => generate(shells::Zsh, &mut cmd, name, out),
        }
    }
}
