mod error;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use error::{CliError, CliResult};
use report::CurveReport;
use std::fs;
use std::path::{Path, PathBuf};
use tj_atmosphere::{AtmosphereModel, StandardAtmosphere};
use tj_cycle::{OperatingPoint, ReferenceConstants, ReferenceInputs, evaluate};
use tj_sweep::{FailurePolicy, SweepDefinition, SweepOptions, sweep};
use tj_units::convert::{meters_to_km, pa_to_kpa};
use tj_units::{Quantity, UnitSystem, parse_quantity};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tj-cli")]
#[command(about = "Turbojet off-design performance and standard atmosphere", long_about = None)]
struct Cli {
    /// Reference engine YAML (defaults to the built-in engine)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Units for printed results: si or imperial
    #[arg(long, global = true, default_value = "si")]
    units: UnitSystem,

    #[command(subcommand)]
    command: Commands,
}

/// Operating-point fields other than Mach. Values take a unit suffix
/// ("-43.35C", "30.8kPa", "9km"); bare numbers are SI.
#[derive(clap::Args)]
struct Conditions {
    /// Ambient temperature T0
    #[arg(long, default_value = "229.8K", allow_hyphen_values = true)]
    ambient_temperature: String,
    /// Ambient pressure P0
    #[arg(long, default_value = "30.8kPa")]
    ambient_pressure: String,
    /// Take T0 and P0 from the standard atmosphere at this altitude instead
    #[arg(long, conflicts_with_all = ["ambient_temperature", "ambient_pressure"])]
    altitude: Option<String>,
    /// Turbine inlet temperature Tt4
    #[arg(long, default_value = "1670K")]
    tt4: String,
    /// Ambient-to-exit static pressure ratio P0/P9 ("0.955" or "95.5%")
    #[arg(long, default_value = "0.955")]
    exit_pressure_ratio: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one operating point
    Point {
        /// Free-stream Mach number
        #[arg(long)]
        mach: f64,
        #[command(flatten)]
        conditions: Conditions,
        /// Print the full result record as JSON (SI)
        #[arg(long)]
        json: bool,
    },
    /// Sweep Mach number with the other conditions held fixed
    Sweep {
        #[arg(long, default_value_t = 0.0)]
        from: f64,
        #[arg(long, default_value_t = 2.0)]
        to: f64,
        /// Number of Mach samples, endpoints included
        #[arg(long, default_value_t = 21)]
        points: usize,
        #[command(flatten)]
        conditions: Conditions,
        /// Keep going past failing samples and leave gaps
        #[arg(long)]
        record_gaps: bool,
        /// Evaluate samples in parallel
        #[arg(long)]
        parallel: bool,
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Standard atmosphere at an altitude ("11km", "36000ft")
    Atmosphere {
        altitude: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the derived reference engine constants
    Reference {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let units = cli.units;

    match cli.command {
        Commands::Point {
            mach,
            conditions,
            json,
        } => cmd_point(cli.config.as_deref(), mach, &conditions, units, json),
        Commands::Sweep {
            from,
            to,
            points,
            conditions,
            record_gaps,
            parallel,
            format,
            output,
        } => {
            let options = SweepOptions {
                failure_policy: if record_gaps {
                    FailurePolicy::RecordGaps
                } else {
                    FailurePolicy::Abort
                },
                parallel,
            };
            let definition = SweepDefinition::mach(from, to, points)?;
            cmd_sweep(
                cli.config.as_deref(),
                &definition,
                &conditions,
                options,
                units,
                format,
                output.as_deref(),
            )
        }
        Commands::Atmosphere { altitude, json } => cmd_atmosphere(&altitude, units, json),
        Commands::Reference { json } => cmd_reference(cli.config.as_deref(), json),
    }
}

fn load_reference(config: Option<&Path>) -> CliResult<ReferenceConstants> {
    let inputs = match config {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let inputs: ReferenceInputs =
                serde_yaml::from_str(&text).map_err(|e| CliError::Config {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            info!(path = %path.display(), "loaded reference engine");
            inputs
        }
        None => ReferenceInputs::default(),
    };
    Ok(ReferenceConstants::derive(inputs)?)
}

fn parse_altitude_km(text: &str) -> CliResult<f64> {
    Ok(meters_to_km(parse_quantity(text, Quantity::Length)?))
}

/// Resolve the non-Mach fields to SI; Mach is filled in by the caller.
fn resolve_conditions(conditions: &Conditions, mach: f64) -> CliResult<OperatingPoint> {
    let (t0, p0_kpa) = match &conditions.altitude {
        Some(altitude) => {
            let sample = StandardAtmosphere::new().sample(parse_altitude_km(altitude)?)?;
            info!(
                altitude_km = sample.geopotential_altitude_km,
                t0 = sample.temperature_k,
                p0 = sample.pressure_kpa,
                "ambient from standard atmosphere"
            );
            (sample.temperature_k, sample.pressure_kpa)
        }
        None => (
            parse_quantity(&conditions.ambient_temperature, Quantity::Temperature)?,
            pa_to_kpa(parse_quantity(&conditions.ambient_pressure, Quantity::Pressure)?),
        ),
    };
    let tt4 = parse_quantity(&conditions.tt4, Quantity::Temperature)?;
    let exit_ratio = parse_quantity(&conditions.exit_pressure_ratio, Quantity::Dimensionless)?;
    Ok(OperatingPoint::new(mach, t0, p0_kpa, tt4, exit_ratio)?)
}

fn cmd_point(
    config: Option<&Path>,
    mach: f64,
    conditions: &Conditions,
    units: UnitSystem,
    json: bool,
) -> CliResult<()> {
    let reference = load_reference(config)?;
    let point = resolve_conditions(conditions, mach)?;
    let perf = evaluate(&point, &reference)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&perf)?);
    } else {
        print!("{}", report::point_text(&perf, units));
    }
    Ok(())
}

fn cmd_sweep(
    config: Option<&Path>,
    definition: &SweepDefinition,
    conditions: &Conditions,
    options: SweepOptions,
    units: UnitSystem,
    format: OutputFormat,
    output: Option<&Path>,
) -> CliResult<()> {
    let reference = load_reference(config)?;
    let fixed = resolve_conditions(conditions, definition.start)?;
    info!(%definition, "running sweep");

    let curve = sweep(definition, &fixed, &reference, options)?;
    let report = CurveReport::new(&curve, units);

    let text = match format {
        OutputFormat::Csv => report.to_csv(),
        OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
        OutputFormat::Text => {
            let mut text = format!(
                "{:>8}  {:>14}  {:>14}\n",
                "M0",
                format!("F [{}]", report.thrust_unit),
                format!("S [{}]", report.tsfc_unit)
            );
            for ((m, f), s) in report.mach.iter().zip(&report.thrust).zip(&report.tsfc) {
                match (f, s) {
                    (Some(f), Some(s)) => text += &format!("{m:>8.3}  {f:>14.1}  {s:>14.4}\n"),
                    _ => text += &format!("{m:>8.3}  {:>14}  {:>14}\n", "-", "-"),
                }
            }
            text
        }
    };

    match output {
        Some(path) => {
            fs::write(path, text)?;
            println!("Wrote {} samples to {}", curve.len(), path.display());
        }
        None => print!("{text}"),
    }

    if !curve.is_complete() {
        eprintln!("{} of {} samples failed", curve.num_failed(), curve.len());
    }
    Ok(())
}

fn cmd_atmosphere(altitude: &str, units: UnitSystem, json: bool) -> CliResult<()> {
    let sample = StandardAtmosphere::new().sample(parse_altitude_km(altitude)?)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&sample)?);
    } else {
        print!("{}", report::atmosphere_text(&sample, units));
    }
    Ok(())
}

fn cmd_reference(config: Option<&Path>, json: bool) -> CliResult<()> {
    let reference = load_reference(config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&reference)?);
    } else {
        print!("{}", report::reference_text(&reference));
    }
    Ok(())
}
