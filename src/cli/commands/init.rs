use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write a default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let target = cli.config.as_deref().map(expand_tilde);
    let path = target.clone().unwrap_or_else(Config::config_file);

    if path.exists() && !force {
        return Err(AppError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    println!("⚙️  Initializing crewsheet…");
    let written = Config::init_all(target.as_deref())?;
    println!("📄 Config file : {}", written.display());

    success("crewsheet initialization completed!");
    Ok(())
}
