use clap::{Parser, Subcommand, ValueEnum};
use dimap_laws::WorldId;

#[derive(Parser)]
#[command(
    name = "dimap",
    about = "dimap: law checks for closed profunctors, composition and right Kan lifts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the law suite against one world
    Check {
        /// World to instantiate the laws in (overrides the profile)
        #[arg(long, value_enum)]
        world: Option<WorldArg>,

        /// Path to a TOML law profile
        #[arg(long)]
        profile: Option<String>,

        /// Law identifier to check (repeatable; default: the profile's laws)
        #[arg(long = "law")]
        laws: Vec<String>,

        /// Cap on generated values per quantified variable (overrides the profile)
        #[arg(long)]
        max_samples: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List law identifiers, references and statements
    Laws {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the worlds laws can be checked in
    Worlds {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum WorldArg {
    Function,
    KleisliPair,
    Tally,
}

impl From<WorldArg> for WorldId {
    fn from(arg: WorldArg) -> Self {
        match arg {
            WorldArg::Function => WorldId::Function,
            WorldArg::KleisliPair => WorldId::KleisliPair,
            WorldArg::Tally => WorldId::Tally,
        }
    }
}
