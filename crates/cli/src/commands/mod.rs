use clap::Subcommand;
use denv_config::{NodeId, ProjectTree, Properties};
use denv_core::{Error, Result};
use std::path::PathBuf;

pub mod config;
pub mod expand;
pub mod init;
pub mod resolve;

#[derive(Subcommand)]
pub enum Commands {
    /// Print a project's resolved env mapping
    #[command(visible_alias = "r")]
    Resolve {
        /// Child project name (defaults to the root project)
        #[arg(short, long)]
        project: Option<String>,

        /// Output format
        #[arg(long, value_parser = ["env", "json"], default_value = "env")]
        format: String,
    },

    /// Expand ${KEY} placeholders in resource files
    Expand {
        /// Source root to process (repeatable; later roots overwrite earlier outputs)
        #[arg(short, long = "source", value_name = "DIR", required = true)]
        sources: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Child project name (defaults to the root project)
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Print a project's effective dotenv configuration
    Config {
        /// Child project name (defaults to the root project)
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Write starter .env and .env.template files
    Init {
        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

/// Invocation-wide state shared by every command.
pub struct Context {
    pub root_dir: PathBuf,
    pub overrides: Properties,
}

impl Context {
    /// Build the project tree, discovering child projects under the root.
    pub fn tree(&self) -> Result<ProjectTree> {
        ProjectTree::discover(&self.root_dir, self.overrides.clone())
    }
}

pub fn select_node(tree: &ProjectTree, project: Option<&str>) -> Result<NodeId> {
    match project {
        None => Ok(tree.root()),
        Some(name) => tree
            .find_by_name(name)
            .ok_or_else(|| Error::configuration(format!("unknown project '{name}'"))),
    }
}

pub fn execute(command: Commands, context: &Context) -> Result<()> {
    match command {
        Commands::Resolve { project, format } => {
            resolve::run(context, project.as_deref(), &format)
        }
        Commands::Expand {
            sources,
            output,
            project,
        } => expand::run(context, project.as_deref(), &sources, &output),
        Commands::Config { project } => config::run(context, project.as_deref()),
        Commands::Init { force } => init::run(context, force),
    }
}
