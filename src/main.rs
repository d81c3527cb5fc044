//! installconfig CLI
//!
//! Usage: installconfig [OPTIONS] <COMMAND>
//!
//! Commands:
//!   platform        Ask for (or read overrides for) the install platform
//!   list-platforms  Show supported platforms and their override variables

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use installconfig::config::{self, Config, InteractiveMode, OutputFormat, Verbosity};
use installconfig::presentation::factory::create_platform_asset;
use installconfig::presentation::output::{render_platform, render_platform_list};
use installconfig::{Asset, PlatformRegistry, Store};

/// installconfig - collect cluster installation configuration
#[derive(Parser, Debug)]
#[command(name = "installconfig")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ./installconfig.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Never prompt; use override variables and defaults only
    #[arg(long, global = true)]
    non_interactive: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the install platform and its platform-specific parameter
    Platform,

    /// List supported platforms
    ListPlatforms,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (mut config, warnings) =
        config::load_or_default(cli.config.as_deref(), &cwd, |key| std::env::var(key).ok())?;
    apply_flags(&mut config, &cli);

    init_logging(config.output.verbosity);
    for warning in warnings {
        warn!("{}", warning);
    }

    match cli.command {
        Commands::Platform => cmd_platform(&config),
        Commands::ListPlatforms => {
            print!(
                "{}",
                render_platform_list(&PlatformRegistry::default(), config.output.format)
            );
            Ok(())
        }
    }
}

/// CLI flags take precedence over env and config file
fn apply_flags(config: &mut Config, cli: &Cli) {
    if let Some(verbosity) = Verbosity::from_flag_count(cli.verbose) {
        config.output.verbosity = verbosity;
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.non_interactive {
        config.prompt.interactive = InteractiveMode::Never;
    }
}

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env("INSTALLCONFIG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn cmd_platform(config: &Config) -> Result<()> {
    let stdin_is_terminal = std::io::stdin().is_terminal();

    if stdin_is_terminal && config.prompt.interactive != InteractiveMode::Never {
        // Prompts hide the cursor while active; give it back on Ctrl+C.
        ctrlc::set_handler(|| {
            let _ = crossterm::execute!(std::io::stderr(), crossterm::cursor::Show);
            std::process::exit(130);
        })?;
    }

    let platform = Arc::new(create_platform_asset(config, stdin_is_terminal));
    let asset: Arc<dyn Asset> = platform.clone();
    let state = Store::new().fetch(&asset)?;
    let resolved = platform.registry().config_from_state(&state)?;

    print!("{}", render_platform(&resolved, config.output.format)?);
    Ok(())
}
