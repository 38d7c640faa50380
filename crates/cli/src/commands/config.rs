use crate::commands::{select_node, Context};
use denv_config::ConfigurationResolver;
use denv_core::{Error, Result};

pub fn run(context: &Context, project: Option<&str>) -> Result<()> {
    let tree = context.tree()?;
    let node = select_node(&tree, project)?;
    let resolver = ConfigurationResolver::new(&tree);

    // The root also reports its ignore-parent flags.
    let json = if tree.is_root(node) {
        serde_json::to_string_pretty(resolver.root_configuration())
    } else {
        serde_json::to_string_pretty(&resolver.resolve(node))
    }
    .map_err(|err| Error::configuration(format!("failed to serialize configuration: {err}")))?;

    println!("{json}");
    Ok(())
}
