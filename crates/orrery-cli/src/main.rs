use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use orrery_cli::{Scenario, ScenarioReport, run_scenario};
use orrery_view::OrbitConfig;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(about = "Click-to-orbit camera simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a scripted pointer scenario and report the final camera pose.
    Simulate(SimulateArgs),
    /// Print the default orbit configuration as JSON.
    DefaultConfig,
}

#[derive(Args)]
struct SimulateArgs {
    #[arg(long)]
    scene: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    #[arg(long, default_value_t = 2.0)]
    seconds: f64,
    /// Override the configured resting distance.
    #[arg(long)]
    zoom: Option<f64>,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(args) => simulate(args),
        Command::DefaultConfig => default_config(),
    }
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let scenario = Scenario::load(&args.scene)
        .with_context(|| format!("failed to load scene {}", args.scene.display()))?;
    let mut config = match &args.config {
        Some(path) => OrbitConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => OrbitConfig::default(),
    };
    if let Some(zoom) = args.zoom {
        if !zoom.is_finite() || zoom <= 0.0 {
            bail!("--zoom expects a positive distance, got {zoom}");
        }
        config.zoom_distance = zoom;
    }

    let report =
        run_scenario(&scenario, config, args.fps, args.seconds).context("simulation failed")?;
    info!(
        frames = report.frames,
        hits = report.hits.len(),
        "simulation complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn default_config() -> Result<()> {
    let text = OrbitConfig::default()
        .to_json_pretty()
        .context("failed to serialize default config")?;
    println!("{text}");
    Ok(())
}

fn print_report(report: &ScenarioReport) {
    for hit in &report.hits {
        println!(
            "t={:.3}s hit {} at [{:.3}, {:.3}, {:.3}]{}",
            hit.time,
            hit.name,
            hit.object_position[0],
            hit.object_position[1],
            hit.object_position[2],
            if hit.retargeted { "" } else { " (same target)" }
        );
    }
    let [px, py, pz] = report.final_pose.position;
    let [tx, ty, tz] = report.target;
    println!("frames:   {}", report.frames);
    println!("target:   [{tx:.3}, {ty:.3}, {tz:.3}]");
    println!("position: [{px:.3}, {py:.3}, {pz:.3}]");
    if report.transitioning {
        println!("state:    transitioning");
    } else {
        println!("state:    idle");
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
