use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: Option<&str>, is_test: bool) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        let path = path.map(expand_tilde);

        if *init {
            let written = Config::init(path.as_deref(), is_test)?;
            println!("📄 Config file: {}", written.display());
        }

        // ---- PRINT CONFIG ----
        if *print_config || !*init {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }
    }
    Ok(())
}
