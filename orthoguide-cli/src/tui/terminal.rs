//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use orthoguide_core::{IdentifierList, OrthoConfig, RootsService};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use super::app::{AnalysisOutcome, App};
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Owns the request side: forwards identifiers to the service and hands
/// outcomes back to the run loop
struct Coordinator {
    service: Arc<dyn RootsService>,
    runtime: Handle,
    tx: UnboundedSender<AnalysisOutcome>,
}

impl Coordinator {
    fn spawn_analysis(&self, app: &mut App, genes: IdentifierList) {
        let species = app.card.form.species().to_string();
        app.start_analysis(&genes);

        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = service.get_roots(&genes, &species).await;
            // Receiver is gone only if the TUI already exited
            let _ = tx.send(AnalysisOutcome {
                genes,
                species,
                result,
            });
        });
    }
}

/// Run the TUI application
///
/// Blocks the calling thread; requests run on `runtime`.
pub fn run(
    config: &OrthoConfig,
    species: &str,
    service: Arc<dyn RootsService>,
    runtime: Handle,
) -> Result<()> {
    // Build state before touching the terminal so config errors print normally
    let mut app = App::new(config, species)?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let coordinator = Coordinator {
        service,
        runtime,
        tx,
    };

    let mut terminal = init_terminal()?;
    info!(%species, "tui started");

    let result = run_loop(&mut terminal, &mut app, &coordinator, &mut rx);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    coordinator: &Coordinator,
    rx: &mut UnboundedReceiver<AnalysisOutcome>,
) -> Result<()> {
    loop {
        drain_outcomes(app, rx);
        app.on_tick();

        // Render UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events (with 100ms timeout for responsive UI)
        if let Some(event) = poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key(app, key) {
                        HandleResult::Quit => break,
                        HandleResult::Continue => {}
                        HandleResult::StartAnalysis(genes) => {
                            coordinator.spawn_analysis(app, genes);
                        }
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will be handled on next draw
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Apply every finished request without blocking
fn drain_outcomes(app: &mut App, rx: &mut UnboundedReceiver<AnalysisOutcome>) {
    loop {
        match rx.try_recv() {
            Ok(outcome) => app.finish_analysis(outcome),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                debug!("analysis channel closed");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use orthoguide_core::ResultRecord;

    struct StubService;

    #[async_trait]
    impl RootsService for StubService {
        async fn get_roots(
            &self,
            genes: &IdentifierList,
            _species: &str,
        ) -> orthoguide_core::Result<Vec<ResultRecord>> {
            Ok(genes
                .iter()
                .map(|g| ResultRecord::new().with("preferred_name", g.as_str()))
                .collect())
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_spawned_analysis_reaches_the_table() {
        let mut app = App::new(&OrthoConfig::default(), "hsa").unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let coordinator = Coordinator {
            service: Arc::new(StubService),
            runtime: Handle::current(),
            tx,
        };

        coordinator.spawn_analysis(&mut app, IdentifierList::parse("CDK6\nNRP1"));
        assert!(app.is_loading());

        let outcome = rx.recv().await.expect("outcome sent");
        app.finish_analysis(outcome);

        assert!(!app.is_loading());
        assert_eq!(app.results.len(), 2);
        assert_eq!(app.results.view().rows[1][0], "NRP1");
    }

    #[test]
    fn test_drain_with_nothing_pending() {
        let mut app = App::new(&OrthoConfig::default(), "hsa").unwrap();
        let (_tx, mut rx) = mpsc::unbounded_channel();
        drain_outcomes(&mut app, &mut rx);
        assert!(app.status_message.is_none());
    }
}
