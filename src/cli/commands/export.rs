use crate::cli::commands::{prepare_view, ready_state};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ViewExport};

/// Handle the `export` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        view,
        format,
        file,
        force,
    } = &cli.command
    {
        let orchestrator = prepare_view(cli, cfg, view)?;
        let state = ready_state(&orchestrator)?;

        let export = ViewExport::new(orchestrator.owner(), state);
        ExportLogic::export(&export, *format, file, *force)?;
    }
    Ok(())
}
