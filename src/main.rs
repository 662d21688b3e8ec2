use clap::{Parser, Subcommand, ValueEnum};
use smartconv::convert::{self, Quantity, Unit};
use smartconv::error::ConvertError;
use smartconv::input;
use smartconv::settings::{self, Config, Theme};
use smartconv::timezone;
use smartconv::transfer::{self, ProgressPlan, ProgressSimulation, RateUnit, SizeUnit};
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "smartconv")]
#[command(about = "Unit, transfer time and time zone converter", long_about = None)]
struct Cli {
    /// Config file (default: $SMARTCONV_CONFIG or ./smartconv.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a quantity to another unit
    Convert {
        /// Value and unit (e.g., "12 km", "-40 C")
        #[arg(allow_hyphen_values = true)]
        quantity: String,

        /// Target unit: km, mi, m, ft, C, F, K, kg, lb, kmh, mph
        to: Unit,
    },

    /// Estimate how long a file transfer takes
    Transfer {
        /// File size
        #[arg(allow_hyphen_values = true)]
        size: String,

        /// MB, GB or TB
        size_unit: SizeUnit,

        /// Link speed
        #[arg(allow_hyphen_values = true)]
        speed: String,

        /// Mbps or MBps
        speed_unit: RateUnit,

        /// Animate a progress bar for the estimate (capped, cosmetic)
        #[arg(long)]
        simulate: bool,
    },

    /// Convert a wall-clock time between time zones
    Time {
        /// Date and time (e.g., "2024-03-10T14:30")
        datetime: String,

        /// Zone the time is given in (e.g., "America/New_York")
        #[arg(long)]
        from: String,

        /// Zone to show it in (e.g., "Asia/Tokyo")
        #[arg(long)]
        to: String,
    },

    /// Show or change the saved theme
    Theme {
        action: Option<ThemeAction>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Dark,
    Light,
    Toggle,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config_path = settings::resolve_config_path(cli.config.as_deref());

    match run(cli, &config_path) {
        Ok(_) => {}
        Err(e) => {
            match e.downcast_ref::<ConvertError>() {
                Some(ce) => eprintln!("Error: {}", ce.user_message()),
                None => eprintln!("Error: {}", e),
            }
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli, config_path: &Path) -> Result<(), Box<dyn Error>> {
    // theme rewrites the file, so it must not start from a config it could not read
    let config = match cli.command {
        Commands::Theme { .. } => Config::load_or_default(config_path)?,
        _ => Config::load_or_warn(config_path),
    };

    match cli.command {
        Commands::Convert { quantity, to } => convert_quantity(&config, &quantity, to, cli.json),
        Commands::Transfer {
            size,
            size_unit,
            speed,
            speed_unit,
            simulate,
        } => estimate_transfer(
            &config, &size, size_unit, &speed, speed_unit, simulate, cli.json,
        ),
        Commands::Time { datetime, from, to } => convert_time(&datetime, &from, &to, cli.json),
        Commands::Theme { action } => update_theme(config, config_path, action, cli.json),
    }
}

fn convert_quantity(
    config: &Config,
    quantity: &str,
    to: Unit,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let input: Quantity = input::parse_quantity(quantity)?;
    if input.unit.dimension() != to.dimension() {
        log::warn!(
            "{} is a {} unit and {} is a {} unit; value left unchanged",
            input.unit,
            input.unit.dimension(),
            to,
            to.dimension()
        );
    }
    let output = input.convert_to(to);

    if json {
        let result = serde_json::json!({ "input": input, "output": output });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{}",
            convert::format_quantities(&input, &output, &config.display)
        );
    }

    Ok(())
}

fn estimate_transfer(
    config: &Config,
    size: &str,
    size_unit: SizeUnit,
    speed: &str,
    speed_unit: RateUnit,
    simulate: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let size = transfer::parse_amount(size)?;
    let speed = transfer::parse_amount(speed)?;
    let estimate = transfer::estimate(size, size_unit, speed, speed_unit)?;

    if json {
        let result = serde_json::json!({
            "estimate": estimate,
            "formatted": estimate.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Estimated: {}", estimate);
        println!("{}", transfer::summary(size, size_unit, speed, speed_unit));
    }

    if simulate {
        let plan = ProgressPlan::new(estimate.total_seconds, &config.progress);
        run_progress(ProgressSimulation::new(plan))?;
    }

    Ok(())
}

fn run_progress(mut simulation: ProgressSimulation) -> Result<(), Box<dyn Error>> {
    const WIDTH: usize = 40;
    let tick = simulation.plan().tick;
    let mut stderr = std::io::stderr();

    while let Some(pct) = simulation.tick() {
        std::thread::sleep(tick);
        let filled = ((pct / 100.0) * WIDTH as f64).round() as usize;
        write!(
            stderr,
            "\r[{}{}] {:>3.0}%",
            "#".repeat(filled),
            " ".repeat(WIDTH - filled),
            pct
        )?;
        stderr.flush()?;
    }
    writeln!(stderr)?;

    Ok(())
}

fn convert_time(datetime: &str, from: &str, to: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let local = input::parse_datetime_local(datetime)?;
    let converted = timezone::convert_local(&local, from, to)?;

    if json {
        let result = serde_json::json!({
            "input": local,
            "from": from,
            "output": converted,
            "formatted": converted.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", converted);
        println!("From: {} → To: {}", from, to);
    }

    Ok(())
}

fn update_theme(
    mut config: Config,
    config_path: &Path,
    action: Option<ThemeAction>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let theme = match action {
        None => config.ui.theme,
        Some(ThemeAction::Dark) => Theme::Dark,
        Some(ThemeAction::Light) => Theme::Light,
        Some(ThemeAction::Toggle) => config.ui.theme.toggle(),
    };

    if action.is_some() {
        config.ui.theme = theme;
        config.save_to_file(config_path)?;
        log::info!("saved theme '{}' to {}", theme, config_path.display());
    }

    if json {
        println!("{}", serde_json::json!({ "theme": theme }));
    } else {
        println!("Theme: {}", theme);
    }

    Ok(())
}
