use crate::commands::{select_node, Context};
use denv_config::ConfigurationResolver;
use denv_core::{Error, Result};
use denv_env::{DotEnv, SystemEnvProvider};
use denv_expand::ResourceExpander;
use std::path::{Path, PathBuf};

pub fn run(
    context: &Context,
    project: Option<&str>,
    sources: &[PathBuf],
    output: &Path,
) -> Result<()> {
    let tree = context.tree()?;
    let node = select_node(&tree, project)?;

    let dotenv = DotEnv::apply(&tree, tree.root(), &SystemEnvProvider)?;
    let mapping = dotenv
        .mapping(node)
        .ok_or_else(|| Error::configuration("project was not resolved"))?;
    let configuration = ConfigurationResolver::new(&tree).resolve(node);

    let expander = ResourceExpander::new(mapping, &configuration.resources_pattern)?;
    let report = expander.expand_roots(sources, output)?;

    println!(
        "Expanded {} file(s), copied {} file(s) into {}",
        report.expanded,
        report.copied,
        output.display()
    );
    Ok(())
}
