pub mod config;
pub mod export;
pub mod init;
pub mod show;

use crate::cli::parser::{Cli, ViewArgs};
use crate::config::Config;
use crate::core::{Clock, ManualClock, SystemClock, ViewOrchestrator, ViewOutcome, ViewState};
use crate::errors::{AppError, AppResult};
use crate::models::{Page, RecordOwner};
use crate::source::FileSource;
use crate::utils::date::parse_reference_now;

/// Build an orchestrator for the command line request: load the feed for
/// the requested owner, then apply window and page in that order.
pub(crate) fn prepare_view(cli: &Cli, cfg: &Config, args: &ViewArgs) -> AppResult<ViewOrchestrator> {
    let mut settings = cfg.view_settings();
    if let Some(size) = args.page_size {
        settings.page_size = size;
    }
    let page = Page::new(args.page, settings.page_size)?;
    if let Some(scope) = args.scope {
        settings.scope = scope;
    }

    let clock: Box<dyn Clock> = match &cli.now {
        Some(raw) => Box::new(ManualClock::new(parse_reference_now(raw)?)),
        None => Box::new(SystemClock),
    };

    let owner = match args.member {
        Some(id) => RecordOwner::TeamMember(id),
        None => RecordOwner::Me(cfg.user_id),
    };

    let source = FileSource::new(cfg.source_path());
    let mut orchestrator = ViewOrchestrator::new(owner, settings, clock);

    orchestrator.load(&source, owner);
    orchestrator.select_window(args.window.unwrap_or(cfg.default_window));
    orchestrator.select_page(page.index);

    Ok(orchestrator)
}

/// The published view, or the reason there is none.
pub(crate) fn ready_state(orchestrator: &ViewOrchestrator) -> AppResult<&ViewState> {
    match orchestrator.outcome() {
        ViewOutcome::Ready(state) => Ok(state),
        ViewOutcome::Unavailable { reason } => Err(AppError::SourceUnavailable(reason.clone())),
        ViewOutcome::Loading => Err(AppError::Other("attendance records still loading".into())),
    }
}
