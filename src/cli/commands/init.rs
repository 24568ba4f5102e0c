use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - a default configuration file (kept as is when it already exists)
///
/// In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rAttendance…");

    let path = Config::init_all(cli.test)?;

    if cli.test {
        info(format!(
            "Test mode: configuration not written ({})",
            path.display()
        ));
        return Ok(());
    }

    let cfg = Config::load_from(&path)?;
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Feed        : {}", cfg.source_path().display());

    success("rAttendance initialization completed!");
    Ok(())
}
