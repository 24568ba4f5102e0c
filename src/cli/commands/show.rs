use crate::cli::commands::{prepare_view, ready_state};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{OutputFormat, ViewExport, write_csv, write_json};
use crate::ui::render::render_view;
use std::io;

/// Handle the `show` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { view, format } = &cli.command {
        let orchestrator = prepare_view(cli, cfg, view)?;
        let state = ready_state(&orchestrator)?;
        let owner = orchestrator.owner();

        match format {
            OutputFormat::Table => {
                print!(
                    "{}",
                    render_view(
                        &owner,
                        state,
                        orchestrator.settings(),
                        orchestrator.now(),
                        cfg.color
                    )
                );
            }
            OutputFormat::Json => write_json(&ViewExport::new(owner, state), io::stdout().lock())?,
            OutputFormat::Csv => {
                write_csv(&ViewExport::new(owner, state).records, io::stdout().lock())?
            }
        }
    }
    Ok(())
}
