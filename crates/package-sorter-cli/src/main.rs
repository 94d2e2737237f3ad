use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use package_sorter_core::{
    parse_measurement, CategoryTally, Config, OutputFormat, PackageMeasurement, Result,
    SorterError, SAMPLE_PACKAGES,
};

mod args;
mod interactive;
mod output;

use args::{Cli, Commands, ConfigAction, MeasurementArgs, Shell};
use output::{category_label, report_lines, status_line};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);
    tracing::debug!("base dir: {:?}", base_dir);

    let result = match cli.command {
        Some(Commands::Classify { measurement, json }) => {
            handle_classify(base_dir.as_deref(), &measurement, json)
        }
        Some(Commands::Describe { measurement, json }) => {
            handle_describe(base_dir.as_deref(), &measurement, json)
        }
        Some(Commands::Demo) => handle_demo(base_dir.as_deref()),
        Some(Commands::Interactive) => handle_interactive(base_dir.as_deref()),
        Some(Commands::Config { action }) => {
            require_base_dir(base_dir.as_deref()).and_then(|base| handle_config(action, base))
        }
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "package-sorter", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(base) = cli_base {
        return Some(base);
    }

    if let Ok(base) = std::env::var("PACKAGE_SORTER_BASE") {
        return Some(PathBuf::from(base));
    }

    dirs::home_dir().map(|h| h.join(".package-sorter"))
}

fn require_base_dir(base_dir: Option<&Path>) -> Result<&Path> {
    base_dir.ok_or(SorterError::HomeNotFound)
}

/// Config for display purposes; defaults when no base dir can be resolved
fn load_config(base_dir: Option<&Path>) -> Result<Config> {
    let config = match base_dir {
        Some(base) => Config::load(base)?,
        None => Config::default(),
    };
    tracing::debug!("config: {:?}", config);
    Ok(config)
}

fn parse_args(args: &MeasurementArgs) -> Result<PackageMeasurement> {
    parse_measurement([&args.width, &args.height, &args.length, &args.mass])
}

fn wants_json(flag: bool, config: &Config) -> bool {
    flag || config.display.format == OutputFormat::Json
}

fn handle_classify(base_dir: Option<&Path>, args: &MeasurementArgs, json: bool) -> Result<()> {
    let config = load_config(base_dir)?;
    let measurement = parse_args(args)?;
    let category = measurement.classify()?;
    tracing::debug!(stack = %category, "classified {:?}", measurement);

    if wants_json(json, &config) {
        let value = serde_json::json!({ "stack": category });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", category_label(category));
    }
    Ok(())
}

fn handle_describe(base_dir: Option<&Path>, args: &MeasurementArgs, json: bool) -> Result<()> {
    let config = load_config(base_dir)?;
    let measurement = parse_args(args)?;
    let report = measurement.describe()?;
    tracing::debug!(stack = %report.category, "described {:?}", measurement);

    if wants_json(json, &config) {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        for line in report_lines(&report, &config.display) {
            println!("{}", line);
        }
        println!("{}", status_line(report.category));
        println!();
    }
    Ok(())
}

fn handle_demo(base_dir: Option<&Path>) -> Result<()> {
    let config = load_config(base_dir)?;
    let mut tally = CategoryTally::new();

    println!("{}", "Package Sorting Demo".cyan().bold());
    println!("{}", "=".repeat(50));

    for sample in SAMPLE_PACKAGES {
        let report = sample.measurement.describe()?;
        tally.record(report.category);

        println!();
        println!("{} {}", "Package:".bold(), sample.label);
        for line in report_lines(&report, &config.display) {
            println!("{}", line);
        }
        println!("{}", status_line(report.category));
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("Summary:");
    for (category, count) in tally.iter() {
        println!("   {} packages: {}", category_label(category), count);
    }
    println!("   Total packages: {}", tally.total());

    Ok(())
}

fn handle_interactive(base_dir: Option<&Path>) -> Result<()> {
    let config = load_config(base_dir)?;
    let stdin = io::stdin();
    interactive::run(stdin.lock(), io::stdout(), &config.display)?;
    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(SorterError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
