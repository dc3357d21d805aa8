use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder_cli::grid::{Connectivity, Tile};
use wayfinder_cli::output::OutputFormat;
use wayfinder_cli::terminal::ColorPalette;

mod commands;

use commands::demo::handle_demo_command;
use commands::route::{handle_route_command, RouteCommandArgs};
use commands::SearchOptions;

#[derive(Parser, Debug)]
#[command(author, version, about = "Weighted A* pathfinding on tile maps")]
struct Cli {
    /// Greediness weight in [0, 1]: 0 orders by path cost, 1 by heuristic estimate.
    #[arg(
        long,
        env = "WAYFINDER_WEIGHT",
        default_value_t = 0.5,
        global = true,
        allow_hyphen_values = true
    )]
    weight: f64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Allow diagonal moves.
    #[arg(long, global = true)]
    diagonal: bool,

    /// Disable ANSI colors in rendered maps.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a path across an ASCII map file.
    Route {
        /// Map file ('#' wall, '.' floor, 'S' start, 'G' goal).
        #[arg(long)]
        map: PathBuf,
        /// Start tile as X,Y.
        #[arg(long = "from")]
        from: Option<Tile>,
        /// Goal tile as X,Y.
        #[arg(long = "to")]
        to: Option<Tile>,
    },
    /// Find a path across the built-in sample map.
    Demo,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let options = SearchOptions {
        weight: cli.weight,
        format: cli.format,
        connectivity: if cli.diagonal {
            Connectivity::Eight
        } else {
            Connectivity::Four
        },
        palette: if cli.no_color {
            ColorPalette::plain()
        } else {
            ColorPalette::detect()
        },
    };

    match cli.command {
        Command::Route { map, from, to } => {
            handle_route_command(&RouteCommandArgs { map, from, to }, &options)
        }
        Command::Demo => handle_demo_command(&options),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
