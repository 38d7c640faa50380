use crate::commands::{select_node, Context};
use denv_core::{Error, Result};
use denv_env::{DotEnv, SystemEnvProvider};

pub fn run(context: &Context, project: Option<&str>, format: &str) -> Result<()> {
    let tree = context.tree()?;
    let node = select_node(&tree, project)?;

    let dotenv = DotEnv::apply(&tree, tree.root(), &SystemEnvProvider)?;
    let mapping = dotenv
        .mapping(node)
        .ok_or_else(|| Error::configuration("project was not resolved"))?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(mapping)
                .map_err(|err| Error::configuration(format!("failed to serialize mapping: {err}")))?;
            println!("{json}");
        }
        _ => print!("{}", mapping.to_dotenv_string()),
    }
    Ok(())
}
