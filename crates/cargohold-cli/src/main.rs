use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cargohold_cli::terminal::ColorPalette;
use cargohold_cli::{run_self_check, Menu};
use cargohold_lib::{resolve_ship_config, Ship, ShipConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Load and unload cargo containers on a ship")]
struct Cli {
    /// Path to a JSON ship configuration file.
    #[arg(long)]
    ship_config: Option<PathBuf>,

    /// Override the ship name.
    #[arg(long)]
    ship_name: Option<String>,

    /// Override the ship's maximum speed.
    #[arg(long)]
    max_speed: Option<f64>,

    /// Override the maximum number of containers on board.
    #[arg(long)]
    max_containers: Option<usize>,

    /// Override the maximum total weight of containers on board.
    #[arg(long)]
    max_weight: Option<f64>,

    /// Suppress the banner printed before the menu.
    #[arg(long)]
    no_logo: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive loading menu (default).
    Menu {
        /// Print the final ship state as JSON when the menu exits.
        #[arg(long)]
        summary: bool,
    },
    /// Run the built-in loading scenarios and report the results.
    SelfCheck,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::SelfCheck) => handle_self_check(),
        Some(Command::Menu { summary }) => handle_menu(&cli, summary),
        None => handle_menu(&cli, false),
    }
}

fn handle_menu(cli: &Cli, summary: bool) -> Result<()> {
    let config = ship_config(cli)?;
    let ship = Ship::from_config(&config).context("invalid ship configuration")?;

    if !cli.no_logo {
        println!(
            "=== Cargohold: {} ({} containers, {} max weight) ===",
            ship.name(),
            ship.max_container_count(),
            ship.max_total_weight()
        );
    }

    let stdin = io::stdin();
    let mut menu = Menu::new(ship, stdin.lock(), io::stdout(), ColorPalette::detect());
    menu.run().context("menu input/output failed")?;

    if summary {
        let json = serde_json::to_string_pretty(&menu.ship().summary())
            .context("failed to serialize ship summary")?;
        println!("{json}");
    }

    Ok(())
}

fn handle_self_check() -> Result<()> {
    let report = run_self_check();
    print!("{}", report.render(&ColorPalette::detect()));
    if !report.all_passed() {
        anyhow::bail!("{} self-check scenario(s) failed", report.failed());
    }
    Ok(())
}

/// Resolve the configuration file, then apply command-line overrides.
fn ship_config(cli: &Cli) -> Result<ShipConfig> {
    let mut config = resolve_ship_config(cli.ship_config.as_deref())
        .context("failed to resolve ship configuration")?;

    if let Some(name) = &cli.ship_name {
        config.name = name.clone();
    }
    if let Some(max_speed) = cli.max_speed {
        config.max_speed = max_speed;
    }
    if let Some(max_containers) = cli.max_containers {
        config.max_container_count = max_containers;
    }
    if let Some(max_weight) = cli.max_weight {
        config.max_total_weight = max_weight;
    }

    Ok(config)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
