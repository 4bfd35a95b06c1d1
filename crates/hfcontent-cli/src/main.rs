//! hfcontent CLI — score the high-frequency content of an image.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use hfcontent::{ErrorKind, Luminance, ScoreConfig, ScoreError, Scorer};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "hfcontent")]
#[command(
    about = "Measure high-frequency content of an image (Fourier magnitude outside a low-frequency disk)"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one image.
    Score(CliScoreArgs),

    /// Print the default scoring configuration as JSON.
    Config,
}

#[derive(Debug, Clone, Args)]
struct CliScoreArgs {
    /// Path to the input image.
    #[arg(long)]
    image: PathBuf,

    /// Path to write the full spectral report (JSON).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Scoring configuration file (JSON). Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cutoff radius divisor: radius = min(rows/2, cols/2) / divisor.
    #[arg(long)]
    cutoff_divisor: Option<usize>,

    /// Luminance mapping for color images.
    #[arg(long, value_enum)]
    luminance: Option<LuminanceArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LuminanceArg {
    Rec601,
    Rec709,
}

impl LuminanceArg {
    fn to_core(self) -> Luminance {
        match self {
            Self::Rec601 => Luminance::Rec601,
            Self::Rec709 => Luminance::Rec709,
        }
    }
}

impl CliScoreArgs {
    fn to_config(&self) -> CliResult<ScoreConfig> {
        let mut config = match &self.config {
            Some(path) => ScoreConfig::from_json_file(path).map_err(|e| -> CliError {
                format!("Failed to load config {}: {}", path.display(), e).into()
            })?,
            None => ScoreConfig::default(),
        };
        if let Some(divisor) = self.cutoff_divisor {
            config.cutoff_divisor = divisor;
        }
        if let Some(luminance) = self.luminance {
            config.luminance = luminance.to_core();
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score(args) => run_score(&args),
        Commands::Config => run_config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {e}");
            ExitCode::from(exit_status(&e))
        }
    }
}

/// 2 when the input image does not exist, 1 for every other failure.
fn exit_status(e: &CliError) -> u8 {
    let not_found = e
        .downcast_ref::<ScoreError>()
        .is_some_and(|e| e.is_not_found());
    if not_found {
        2
    } else {
        1
    }
}

// ── config ─────────────────────────────────────────────────────────────

fn run_config() -> CliResult<()> {
    println!("{}", ScoreConfig::default().to_json_string()?);
    Ok(())
}

// ── score ──────────────────────────────────────────────────────────────

fn run_score(args: &CliScoreArgs) -> CliResult<()> {
    let config = args.to_config().inspect_err(|e| println!("An error occurred: {e}"))?;
    tracing::info!(
        "Scoring {} (cutoff divisor {}, {:?} luminance)",
        args.image.display(),
        config.cutoff_divisor,
        config.luminance
    );

    let scorer = Scorer::with_config(config);
    let report = match scorer.analyze_path(&args.image) {
        Ok(report) => report,
        Err(e) => {
            println!("{}", failure_message(&args.image, &e));
            return Err(e.into());
        }
    };

    tracing::info!(
        "Image size: {}x{}, cutoff radius {}, {} high-frequency bins",
        report.image_size[0],
        report.image_size[1],
        report.cutoff_radius,
        report.n_high_frequency
    );
    println!("High-frequency content measure: {}", report.score);

    if let Some(out) = &args.out {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(out, &json)?;
        tracing::info!("Report written to {}", out.display());
    }

    Ok(())
}

fn failure_message(image: &Path, e: &ScoreError) -> String {
    match e.kind() {
        ErrorKind::NotFound => format!("Error: Image file not found at {}", image.display()),
        ErrorKind::DecodeError | ErrorKind::Other => format!("An error occurred: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_args(argv: &[&str]) -> CliScoreArgs {
        let mut full = vec!["hfcontent", "score", "--image", "in.png"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Score(args) => args,
            Commands::Config => panic!("expected score subcommand"),
        }
    }

    #[test]
    fn defaults_without_flags() {
        let config = score_args(&[]).to_config().unwrap();
        assert_eq!(config, ScoreConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = score_args(&["--cutoff-divisor", "8", "--luminance", "rec709"])
            .to_config()
            .unwrap();
        assert_eq!(config.cutoff_divisor, 8);
        assert_eq!(config.luminance, Luminance::Rec709);
    }

    #[test]
    fn zero_divisor_is_rejected() {
        assert!(score_args(&["--cutoff-divisor", "0"]).to_config().is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = score_args(&["--config", "/definitely/not/here.json"]);
        assert!(args.to_config().is_err());
    }

    #[test]
    fn missing_image_reports_path_and_exits_two() {
        let image = Path::new("/definitely/not/here.png");
        let err = ScoreError::NotFound {
            path: image.to_path_buf(),
        };
        assert_eq!(
            failure_message(image, &err),
            "Error: Image file not found at /definitely/not/here.png"
        );
        let err: CliError = err.into();
        assert_eq!(exit_status(&err), 2);
    }

    #[test]
    fn decode_failure_reports_message_and_exits_one() {
        let err = ScoreError::Decode {
            message: "bad header".to_string(),
        };
        assert_eq!(
            failure_message(Path::new("in.png"), &err),
            "An error occurred: failed to decode image: bad header"
        );
        let err: CliError = err.into();
        assert_eq!(exit_status(&err), 1);
    }

    #[test]
    fn non_score_errors_exit_one() {
        let err: CliError = "Failed to load config".into();
        assert_eq!(exit_status(&err), 1);
        let err = score_args(&["--cutoff-divisor", "0"]).to_config().unwrap_err();
        assert_eq!(exit_status(&err), 1);
    }

    #[test]
    fn scoring_a_missing_file_exits_two() {
        let args = score_args(&[]);
        let args = CliScoreArgs {
            image: PathBuf::from("/definitely/not/here.png"),
            ..args
        };
        let err = run_score(&args).unwrap_err();
        assert_eq!(exit_status(&err), 2);
    }
}
