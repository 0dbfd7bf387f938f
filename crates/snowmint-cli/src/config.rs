use anyhow::bail;
use clap::{Parser, Subcommand};

/// Command-line arguments for the `snowmint` binary.
///
/// Values may also come from the environment (or a `.env` file loaded on
/// startup); explicit flags take precedence.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "snowmint",
    version,
    about = "Mint and decode 64-bit Snowflake IDs"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Mint IDs and print them, one per line.
    Generate {
        /// Worker identifier encoded into every ID (0..=1023).
        ///
        /// This must be unique per running generator; assigning it is the
        /// deployment's responsibility.
        ///
        /// Environment variable: `WORKER_ID`
        #[arg(short, long, env = "WORKER_ID", allow_negative_numbers = true)]
        worker_id: i64,

        /// Number of IDs to mint.
        ///
        /// Environment variable: `ID_COUNT`
        #[arg(short, long, env = "ID_COUNT", default_value_t = 1)]
        count: usize,
    },

    /// Split IDs into their components and print them as JSON lines.
    Decode {
        /// IDs to decode, as decimal integers.
        #[arg(required = true, allow_negative_numbers = true)]
        ids: Vec<i64>,
    },
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliConfig {
    Generate { worker_id: i64, count: usize },
    Decode { ids: Vec<i64> },
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        match args.command {
            Command::Generate { worker_id, count } => {
                if count == 0 {
                    bail!("ID_COUNT must be greater than 0");
                }
                // Worker id range is checked by the generator itself.
                Ok(Self::Generate { worker_id, count })
            }
            Command::Decode { ids } => Ok(Self::Decode { ids }),
        }
    }
}
