use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ride_core::pricing::RideKind;

#[derive(Parser)]
#[command(name = "ride_cli")]
#[command(about = "Price rides and print driver and rider histories.")]
pub struct CommandLine {
    /// Log domain events to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file overriding the per-mile rates
    #[arg(long, global = true, env = "RIDE_FARES")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the demonstration scenarios
    #[command(alias = "d")]
    Demo {
        #[arg(value_enum, long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Price a single ride and print its record
    #[command(alias = "q")]
    Quote {
        #[arg(value_enum, long, default_value_t = KindArg::Standard)]
        kind: KindArg,
        /// Trip distance in miles
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,
        #[arg(long, default_value_t = 1)]
        id: u32,
        #[arg(long, default_value = "Pickup")]
        pickup: String,
        #[arg(long, default_value = "Dropoff")]
        dropoff: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Standard,
    Premium,
}

impl From<KindArg> for RideKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Standard => RideKind::Standard,
            KindArg::Premium => RideKind::Premium,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_accepts_negative_distance_for_validation() {
        let cli = CommandLine::try_parse_from([
            "ride_cli", "quote", "--kind", "premium", "--distance", "-5",
        ])
        .expect("arguments should parse");
        match cli.command {
            Commands::Quote { kind, distance, .. } => {
                assert_eq!(RideKind::from(kind), RideKind::Premium);
                assert_eq!(distance, -5.0);
            }
            Commands::Demo { .. } => panic!("expected quote command"),
        }
    }

    #[test]
    fn demo_defaults_to_text() {
        let cli = CommandLine::try_parse_from(["ride_cli", "demo"]).expect("arguments should parse");
        assert!(matches!(
            cli.command,
            Commands::Demo {
                format: OutputFormat::Text
            }
        ));
        assert!(!cli.verbose);
    }
}
