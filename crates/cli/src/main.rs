use clap::Parser;
use denv_config::Properties;
use std::path::PathBuf;

mod commands;
mod logging;

use commands::{Commands, Context};

#[derive(Parser)]
#[command(name = "denv")]
#[command(about = "Dotenv configuration for multi-project build trees", long_about = None)]
#[command(version)]
struct Cli {
    /// Root project directory (defaults to the current directory)
    #[arg(short = 'C', long = "directory", global = true, value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Invocation property override, repeatable (e.g. -P dotenv.filename=.env.ci)
    #[arg(short = 'P', long = "property", global = true, value_name = "KEY=VALUE")]
    properties: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    logging::init().map_err(|err| eyre::eyre!(err))?;
    let cli = Cli::parse();

    let root_dir = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut overrides = Properties::new();
    for pair in &cli.properties {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            eyre::eyre!("invalid property override '{pair}', expected KEY=VALUE")
        })?;
        overrides.insert(key, value);
    }

    let context = Context { root_dir, overrides };
    commands::execute(cli.command, &context)?;
    Ok(())
}
