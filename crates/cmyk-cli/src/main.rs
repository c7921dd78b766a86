//! cmyk - compare RGB to CMYK conversions across back ends
//!
//! Runs one color through naive formulas and ICC print profiles and reports
//! whether they agree, alongside ten informational color spaces.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cmyk_core::icc::RenderingIntent;
use cmyk_core::{EngineKind, InputMode};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod messages;
mod render;

use messages::Lang;

#[derive(Parser)]
#[command(name = "cmyk")]
#[command(author, version, about = "Compare RGB to CMYK conversions across libraries")]
#[command(long_about = "
Converts a color to CMYK with several formulas and ICC print profiles,
shows whether they agree, and lists the color in ten other color spaces.

Examples:
  cmyk convert '#3498db'                # Hex input
  cmyk convert '52, 152, 219'           # RGB input
  cmyk convert 3498db --json            # Machine-readable output
  cmyk --no-icc convert 'rgb(0, 15, 40)'
  cmyk --engine moxcms --profiles-dir ./icc convert '#fa0'
  cmyk batch colors.txt --json
  cmyk --lang ru interactive
  cmyk profiles --check
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output language
    #[arg(long, global = true, value_enum, default_value_t = Lang::En)]
    pub lang: Lang,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing the ICC profiles
    #[arg(long, global = true)]
    pub profiles_dir: Option<PathBuf>,

    /// Color engine for ICC profiles: lcms2, moxcms
    #[arg(long, global = true)]
    pub engine: Option<EngineKind>,

    /// Rendering intent for ICC transforms (default: perceptual)
    #[arg(long, global = true)]
    pub intent: Option<RenderingIntent>,

    /// Skip ICC profiles, formulas only
    #[arg(long, global = true)]
    pub no_icc: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one color
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Convert every line of a file
    #[command(visible_alias = "b")]
    Batch(BatchArgs),

    /// Read colors from stdin until :quit
    #[command(visible_alias = "i")]
    Interactive(InteractiveArgs),

    /// List configured ICC profiles
    Profiles(ProfilesArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Color: #RRGGBB, RRGGBB, #RGB, "R, G, B" or "rgb(R, G, B)"
    input: String,

    /// Input syntax (detected when omitted): hex, rgb
    #[arg(short, long)]
    mode: Option<InputMode>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,

    /// How long to wait for ICC profiles, in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,
}

#[derive(Args)]
pub struct BatchArgs {
    /// File with one color per line
    file: PathBuf,

    /// Input syntax for every line (detected per line when omitted)
    #[arg(short, long)]
    mode: Option<InputMode>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,

    /// How long to wait for ICC profiles, in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,
}

#[derive(Args)]
pub struct InteractiveArgs {
    /// Starting input syntax: hex, rgb
    #[arg(short, long, default_value = "hex")]
    mode: InputMode,
}

#[derive(Args)]
pub struct ProfilesArgs {
    /// Load the profiles and report the outcome
    #[arg(long)]
    check: bool,

    /// How long to wait for ICC profiles, in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, &cli.global),
        Commands::Batch(args) => commands::batch::run(args, &cli.global),
        Commands::Interactive(args) => {
            commands::interactive::run(args, &cli.global).map(|()| ExitCode::SUCCESS)
        }
        Commands::Profiles(args) => {
            commands::profiles::run(args, &cli.global).map(|()| ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cmyk", "convert", "#3498db", "--lang", "ru", "--no-icc", "--engine", "moxcms",
        ])
        .unwrap();
        assert_eq!(cli.global.lang, Lang::Ru);
        assert!(cli.global.no_icc);
        assert_eq!(cli.global.engine, Some(EngineKind::Moxcms));
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.input, "#3498db");
        assert_eq!(args.mode, None);
        assert_eq!(args.timeout_ms, 5000);
    }

    #[test]
    fn test_intent_flag() {
        let cli = Cli::try_parse_from(["cmyk", "--intent", "saturation", "profiles"]).unwrap();
        assert_eq!(cli.global.intent, Some(RenderingIntent::Saturation));
        assert!(Cli::try_parse_from(["cmyk", "--intent", "vivid", "profiles"]).is_err());
    }

    #[test]
    fn test_explicit_mode() {
        let cli = Cli::try_parse_from(["cmyk", "convert", "--mode", "rgb", "1, 2, 3"]).unwrap();
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.mode, Some(InputMode::Rgb));
    }
}
