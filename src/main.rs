use clap::{Parser, Subcommand};
use jetgrade::cli::{self, GradeOptions};
use jetgrade::config::RotationCheck;
use jetgrade::error::JetResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jetgrade")]
#[command(about = "Autograder for JET aircraft-design workbooks")]
#[command(long_about = "jetgrade - Score a JET aircraft-design workbook out of 10

Reads the Aero, Miss, Main, Consts, Gear and Geom tabs of a submitted
.xlsm/.xlsx workbook and runs nine rubric modules over them:

  aero, mission, thrust, constraints, attachments,
  stability, fuel, cost, landing_gear

The feedback transcript is printed in that order, followed by the score
line. Grading never modifies the workbook.

EXAMPLES:
  jetgrade grade team7.xlsm
  jetgrade grade submissions/*.xlsm --json > scores.json
  jetgrade grade team7.xlsm --rotation-check speed
  jetgrade rubric --config grader.yaml")]
#[command(version)]
struct Cli {
    /// Debug logging to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Grade one or more workbooks.

Files are graded in the order given. A file that cannot be read (wrong
extension, missing tab, corrupt container) is reported on stderr and the
batch continues; the exit status is non-zero if any file failed.

.xlsx submissions are graded normally but carry an advisory that the
macros in the template are disabled.")]
    /// Grade JET workbooks
    Grade {
        /// Workbooks to grade (.xlsm or .xlsx)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Emit a JSON array of results instead of the transcript
        #[arg(long)]
        json: bool,

        /// YAML grader configuration
        #[arg(short, long, env = "JETGRADE_CONFIG")]
        config: Option<PathBuf>,

        /// Landing-gear rotation rule: authority or speed
        #[arg(long)]
        rotation_check: Option<RotationCheck>,
    },

    /// Show the rubric modules and the active configuration
    Rubric {
        /// YAML grader configuration
        #[arg(short, long, env = "JETGRADE_CONFIG")]
        config: Option<PathBuf>,

        /// Landing-gear rotation rule: authority or speed
        #[arg(long)]
        rotation_check: Option<RotationCheck>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("jetgrade=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "jetgrade=warn".into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> JetResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Grade {
            files,
            json,
            config,
            rotation_check,
        } => cli::grade(
            files,
            GradeOptions {
                json,
                config,
                rotation_check,
            },
        ),

        Commands::Rubric {
            config,
            rotation_check,
        } => cli::show_rubric(config, rotation_check),
    }
}
