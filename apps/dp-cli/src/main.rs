use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use dp_app::{AppError, AppResult, ExportFormat, export, playback, run_service, scenario_service};
use dp_sim::DAMPING_CATALOG;

#[derive(Parser)]
#[command(name = "dp-cli")]
#[command(about = "Dashpot CLI - Active damper simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// List scenarios in a file
    Scenarios {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Show the damping law catalog
    Catalog,
    /// Solve a scenario and print a run summary
    Solve {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Scenario ID to run
        scenario_id: String,
    },
    /// Solve a scenario and export the trajectory
    Export {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Scenario ID to run
        scenario_id: String,
        /// Output format (csv or json)
        #[arg(long, default_value = "csv")]
        format: String,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Preview playback as a deterministic tick table
    Play {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Scenario ID to run
        scenario_id: String,
        /// Playback rate (trajectory seconds per elapsed second)
        #[arg(long, default_value_t = 1.0)]
        rate: f64,
        /// Synthetic elapsed time per tick in seconds
        #[arg(long, default_value_t = 0.1)]
        tick: f64,
        /// Number of ticks to preview
        #[arg(long, default_value_t = 40)]
        ticks: usize,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Scenarios { scenario_path } => cmd_scenarios(&scenario_path),
        Commands::Catalog => cmd_catalog(),
        Commands::Solve {
            scenario_path,
            scenario_id,
        } => cmd_solve(&scenario_path, &scenario_id),
        Commands::Export {
            scenario_path,
            scenario_id,
            format,
            output,
        } => cmd_export(&scenario_path, &scenario_id, &format, output.as_deref()),
        Commands::Play {
            scenario_path,
            scenario_id,
            rate,
            tick,
            ticks,
        } => cmd_play(&scenario_path, &scenario_id, rate, tick, ticks),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario file: {}", scenario_path.display());
    let file = scenario_service::load_scenarios(scenario_path)?;
    println!("✓ '{}' is valid ({} scenarios)", file.name, file.scenarios.len());
    Ok(())
}

fn cmd_scenarios(scenario_path: &Path) -> AppResult<()> {
    let file = scenario_service::load_scenarios(scenario_path)?;
    let scenarios = scenario_service::list_scenarios(&file);

    if scenarios.is_empty() {
        println!("No scenarios found in file");
    } else {
        println!("Scenarios in '{}':", file.name);
        for s in scenarios {
            println!(
                "  {} - {} (damping={}, dt={}s, t_end={}s)",
                s.id, s.name, s.damping_id, s.dt_s, s.t_end_s
            );
        }
    }
    Ok(())
}

fn cmd_catalog() -> AppResult<()> {
    println!("Damping law catalog:");
    for entry in &DAMPING_CATALOG {
        println!(
            "  {:<10} {:<24} gamma = {}",
            entry.canonical_id, entry.display_name, entry.formula
        );
    }
    Ok(())
}

fn cmd_solve(scenario_path: &Path, scenario_id: &str) -> AppResult<()> {
    let file = scenario_service::load_scenarios(scenario_path)?;
    let scenario = scenario_service::get_scenario(&file, scenario_id)?;
    println!("Running scenario: {} ({})", scenario.id, scenario.name);
    println!(
        "  dt = {} s, t_end = {} s",
        scenario.run.dt_s, scenario.run.t_end_s
    );

    let outcome = run_service::run_scenario(scenario)?;
    let summary = &outcome.summary;
    println!("✓ Solve completed");

    println!("\nRun Summary:");
    println!("  Samples: {}", summary.sample_count);
    println!(
        "  Time range: {:.3} - {:.3} s",
        summary.time_range.0, summary.time_range.1
    );
    println!("  Peak |y|: {:.6} m", summary.peak_displacement);
    println!(
        "  Final state: y = {:.6} m, v = {:.6} m/s at t = {:.3} s",
        summary.final_sample.y, summary.final_sample.v, summary.final_sample.t
    );
    if let Some(onset) = summary.non_finite_onset {
        println!("  Warning: trajectory went non-finite at sample {onset}");
    }

    Ok(())
}

fn cmd_export(
    scenario_path: &Path,
    scenario_id: &str,
    format: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let format: ExportFormat = format.parse()?;
    let file = scenario_service::load_scenarios(scenario_path)?;
    let scenario = scenario_service::get_scenario(&file, scenario_id)?;
    let outcome = run_service::run_scenario(scenario)?;

    let content = export::export_trajectory(&outcome.scenario_id, &outcome.trajectory, format)?;

    if let Some(path) = output {
        std::fs::write(path, &content)?;
        println!(
            "✓ Exported {} samples to {}",
            outcome.trajectory.len(),
            path.display()
        );
    } else {
        print!("{content}");
    }

    Ok(())
}

fn cmd_play(
    scenario_path: &Path,
    scenario_id: &str,
    rate: f64,
    tick: f64,
    ticks: usize,
) -> AppResult<()> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "Playback rate must be positive, got {rate}"
        )));
    }
    if !(tick.is_finite() && tick > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "Tick length must be positive, got {tick}"
        )));
    }

    let file = scenario_service::load_scenarios(scenario_path)?;
    let scenario = scenario_service::get_scenario(&file, scenario_id)?;
    let outcome = run_service::run_scenario(scenario)?;

    println!(
        "Playback preview: {} at {}x, {} ticks of {} s",
        scenario_id, rate, ticks, tick
    );
    println!(
        "{:>5} {:>10} {:>7} {:>12} {:>12}",
        "tick", "clock_s", "index", "y_m", "v_m_per_s"
    );
    for row in playback::playback_table(&outcome.trajectory, rate, tick, ticks) {
        println!(
            "{:>5} {:>10.3} {:>7} {:>12.6} {:>12.6}",
            row.tick, row.time_s, row.index, row.sample.y, row.sample.v
        );
    }

    Ok(())
}
