use benchcurve::analysis::UnknownAlgorithmPolicy;
use benchcurve::cli::{self as prog_cli, Command, OutputMode, Settings};
use benchcurve::config::{AppConfig, load_config};
use benchcurve::logger;
use benchcurve::measure::MeasureOptions;
use benchcurve::render::{DEFAULT_FIT_FIGURE, DEFAULT_RATIO_FIGURE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "benchcurve", version, about = "Compare benchmark timings against complexity hypotheses", long_about = None)]
struct Cli {
    #[arg(long, global = true, help = "Path to a config file (TOML). Defaults to ./benchcurve.toml, then the user config dir.")]
    config: Option<PathBuf>,
    #[arg(long, global = true, default_value = "human", help = "Output format: human|plain|json")]
    format: String,
    #[arg(long, global = true, help = "Hypothesis preset: sorting|tower|all|none (overrides config)")]
    preset: Option<String>,
    #[arg(long, global = true, help = "Fail when the data contains algorithms without a hypothesis")]
    strict: bool,
    #[arg(long = "hypothesis", global = true, value_name = "ALGO=GROWTH", help = "Add or replace a hypothesis, e.g. bubble=n^2 (repeatable)")]
    hypotheses: Vec<String>,
    #[arg(long, global = true, help = "Log level: error|warn|info|debug|trace (overrides config)")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Average repeated trials per (algorithm, size)")]
    Aggregate {
        #[arg(help = "Benchmark CSV (algo,taille,temps)")]
        input: PathBuf,
        #[arg(long, help = "Also write the aggregated table to this CSV")]
        export: Option<PathBuf>,
    },
    #[command(about = "Constants test: regress mean time on the hypothesis")]
    Fit {
        #[arg(help = "Benchmark CSV (algo,taille,temps)")]
        input: PathBuf,
        #[arg(long, help = "SVG destination (default test_constantes.svg)")]
        plot: Option<PathBuf>,
        #[arg(long, conflicts_with = "plot", help = "Do not write a figure")]
        no_plot: bool,
    },
    #[command(about = "Ratio test: mean time divided by the hypothesis")]
    Ratio {
        #[arg(help = "Benchmark CSV (algo,taille,temps)")]
        input: PathBuf,
        #[arg(long, help = "SVG destination (default test_rapport.svg)")]
        plot: Option<PathBuf>,
        #[arg(long, conflicts_with = "plot", help = "Do not write a figure")]
        no_plot: bool,
    },
    #[command(about = "List the active hypothesis table")]
    Hypotheses,
    #[command(about = "Time the built-in sorting algorithms and write samples as CSV")]
    Measure {
        #[arg(long, help = "Sizes, e.g. 1000,2000 or 1000..8000:1000")]
        sizes: String,
        #[arg(long, default_value_t = 3, help = "Trials per size")]
        trials: usize,
        #[arg(long, value_delimiter = ',', help = "Comma-separated algorithms (default all)")]
        algorithms: Vec<String>,
        #[arg(long, default_value_t = 0, help = "Random seed")]
        seed: u64,
        #[arg(long, help = "Output CSV path")]
        output: PathBuf,
    },
}

fn plot_target(plot: Option<PathBuf>, no_plot: bool, default: &str) -> Option<PathBuf> {
    if no_plot { None } else { Some(plot.unwrap_or_else(|| PathBuf::from(default))) }
}

fn settings(cli: &Cli, cfg: &AppConfig) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut cfg = cfg.clone();
    if let Some(p) = &cli.preset {
        cfg.preset = Some(p.clone());
    }
    let mut settings = Settings::from_config(&cfg)?;
    if cli.strict {
        settings.policy = UnknownAlgorithmPolicy::Reject;
    }
    prog_cli::apply_overrides(&mut settings.hypotheses, &cli.hypotheses)?;
    Ok(settings)
}

fn command(cmd: Commands) -> Result<Command, Box<dyn std::error::Error>> {
    Ok(match cmd {
        Commands::Aggregate { input, export } => Command::Aggregate { input, export },
        Commands::Fit { input, plot, no_plot } => {
            Command::Fit { input, plot: plot_target(plot, no_plot, DEFAULT_FIT_FIGURE) }
        }
        Commands::Ratio { input, plot, no_plot } => {
            Command::Ratio { input, plot: plot_target(plot, no_plot, DEFAULT_RATIO_FIGURE) }
        }
        Commands::Hypotheses => Command::Hypotheses,
        Commands::Measure { sizes, trials, algorithms, seed, output } => Command::Measure {
            options: MeasureOptions {
                algorithms: prog_cli::parse_algorithms(&algorithms)?,
                sizes: prog_cli::parse_sizes(&sizes)?,
                trials,
                seed,
                ..MeasureOptions::default()
            },
            output,
        },
    })
}

fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = load_config(cli.config.as_deref())?;
    let level = cli.log_level.as_deref().or(cfg.logging.level.as_deref());
    logger::configure_logging(cfg.logging.dir.as_deref(), level, cfg.logging.retention)?;
    let mode: OutputMode = cli.format.parse()?;
    let settings = settings(&cli, &cfg)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    prog_cli::run_with_format(&mut out, command(cli.command)?, &settings, mode)
}

fn main() {
    if let Err(e) = try_main(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
