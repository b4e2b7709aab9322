mod bulk;
mod error;
mod single;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use coilgen_core::{CoilType, Direction, PadType};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, ErrorCode};

#[derive(Parser)]
#[command(name = "coilgen", version, about = "Planar PCB coil footprint generator", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one coil footprint
    Single(SingleArgs),
    /// Sweep outer radius and coil type, writing one footprint per combination
    Bulk(BulkArgs),
}

#[derive(Args)]
pub(crate) struct SingleArgs {
    /// Output footprint file; `.kicad_mod` is appended when missing
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Coil shape
    #[arg(value_enum, value_name = "TYPE")]
    pub coil_type: CoilKind,

    /// Inner radius in mm
    #[arg(short = 'r', long, value_name = "MM")]
    pub r_inner: f64,

    /// Outer radius in mm
    #[arg(short = 'R', long, value_name = "MM")]
    pub r_outer: f64,

    /// Number of turns
    #[arg(short = 'n', long, value_name = "TURNS", required_unless_present = "spacing")]
    pub n_turns: Option<f64>,

    /// Gap between adjacent turns in mm
    #[arg(
        short = 's',
        long,
        value_name = "MM",
        conflicts_with = "n_turns",
        allow_negative_numbers = true
    )]
    pub spacing: Option<f64>,

    /// Track width in mm
    #[arg(short = 'w', long, value_name = "MM")]
    pub line_width: f64,

    #[arg(short = 'd', long, value_enum, default_value_t = Winding::CounterClockwise)]
    pub direction: Winding,

    #[arg(short = 'p', long = "pad", value_enum, default_value_t = PadKind::Connect)]
    pub pad_type: PadKind,

    /// Drill diameter as a fraction of the track width (through-hole pads)
    #[arg(short = 'D', long, value_name = "RATIO", default_value_t = 0.6)]
    pub drill_ratio: f64,

    /// Annular ring width in mm; sizes drilled pads as drill + 2 * ring
    #[arg(long, value_name = "MM")]
    pub ring_width: Option<f64>,

    /// Arc samples per spiral turn
    #[arg(long, value_name = "N", default_value_t = 4.0)]
    pub points_per_turn: f64,

    /// Move the end pad this far towards the coil center
    #[arg(long, value_name = "MM", default_value_t = 0.0)]
    pub via_offset: f64,
}

#[derive(Args)]
pub(crate) struct BulkArgs {
    /// Sweep configuration (YAML); built-in defaults when omitted
    #[arg(long, value_name = "YAML")]
    pub config: Option<PathBuf>,

    /// Output directory, overriding the config's `output_dir`
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum CoilKind {
    Spiral,
    Square,
}

impl From<CoilKind> for CoilType {
    fn from(kind: CoilKind) -> Self {
        match kind {
            CoilKind::Spiral => CoilType::Spiral,
            CoilKind::Square => CoilType::Square,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Winding {
    CounterClockwise,
    Clockwise,
}

impl From<Winding> for Direction {
    fn from(winding: Winding) -> Self {
        match winding {
            Winding::CounterClockwise => Direction::CounterClockwise,
            Winding::Clockwise => Direction::Clockwise,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum PadKind {
    Smt,
    Tht,
    Connect,
}

impl From<PadKind> for PadType {
    fn from(kind: PadKind) -> Self {
        match kind {
            PadKind::Smt => PadType::Smt,
            PadKind::Tht => PadType::Tht,
            PadKind::Connect => PadType::Connect,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Single(args) => single::run_single(&args),
        Command::Bulk(args) => bulk::run_bulk_command(&args),
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(ErrorCode::Usage as u8)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.code as u8)
        }
    }
}
