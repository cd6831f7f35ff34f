use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use drag_confirm::config::AppConfig;
use drag_confirm::core::asset::Asset;
use drag_confirm::core::logging;
use drag_confirm::error::{AppError, Result};
use drag_confirm::tui::app::AppState;

const DEFAULT_SOURCE: &str = "BNB.BNB";
const DEFAULT_TARGET: &str = "ETH.ETH";

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();

    // Initialize logging (file only, the TUI owns stdout)
    let _log_guard = logging::init_tui(&logging::log_dir(&config.data_dir()));
    log::info!("{} v{} starting", drag_confirm::NAME, drag_confirm::VERSION);

    let (source, target) = parse_assets(std::env::args().skip(1))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.tui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let mut app = AppState::new(&config.control, Some(source), Some(target), event_rx, event_tx);

    // Run the app
    let result = app
        .run(&mut terminal, Duration::from_millis(config.tui.tick_rate_ms))
        .await;

    // Restore terminal
    disable_raw_mode()?;
    if config.tui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("exiting after {} confirmation(s)", app.control.confirm_count());
    if let Err(e) = &result {
        log::error!("event loop failed: {e}");
    }

    // Return instead of exiting so `_log_guard` flushes the file log.
    result?;
    Ok(())
}

/// Positional `SOURCE TARGET` asset notations, with defaults.
fn parse_assets(mut args: impl Iterator<Item = String>) -> Result<(Asset, Asset)> {
    let source = args.next().unwrap_or_else(|| DEFAULT_SOURCE.to_string());
    let target = args.next().unwrap_or_else(|| DEFAULT_TARGET.to_string());

    let source = source.parse().map_err(|source| AppError::InvalidAsset {
        role: "source",
        source,
    })?;
    let target = target.parse().map_err(|source| AppError::InvalidAsset {
        role: "target",
        source,
    })?;

    Ok((source, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> impl Iterator<Item = String> {
        items
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_default_assets() {
        let (source, target) = parse_assets(args(&[])).unwrap();
        assert_eq!(source.to_string(), DEFAULT_SOURCE);
        assert_eq!(target.to_string(), DEFAULT_TARGET);
    }

    #[test]
    fn test_invalid_target_is_reported() {
        let err = parse_assets(args(&["BTC.BTC", "nope"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidAsset { role: "target", .. }));
    }
}
