use crate::commands::Context;
use denv_core::{Error, Result, DEFAULT_ENV_FILENAME, DEFAULT_TEMPLATE_FILENAME};
use denv_env::EnvMapping;
use std::path::Path;

pub fn run(context: &Context, force: bool) -> Result<()> {
    let mut template = EnvMapping::new();
    template.insert("APP_ENV", Some("development".to_string()));
    template.insert("API_KEY", None);

    let mut env = EnvMapping::new();
    env.insert("APP_ENV", Some("development".to_string()));

    write_starter(
        &context.root_dir.join(DEFAULT_TEMPLATE_FILENAME),
        "# Variables this project expects.\n# Bare keys must be supplied by .env or the process environment.\n",
        &template,
        force,
    )?;
    write_starter(
        &context.root_dir.join(DEFAULT_ENV_FILENAME),
        "# Local values. Keep this file out of version control.\n",
        &env,
        force,
    )?;
    Ok(())
}

fn write_starter(path: &Path, header: &str, mapping: &EnvMapping, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::configuration(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }
    let contents = format!("{header}{}", mapping.to_dotenv_string());
    std::fs::write(path, contents).map_err(|err| Error::file_system(path, "write", err))?;
    println!("Wrote {}", path.display());
    Ok(())
}
