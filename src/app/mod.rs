mod line_mode;
mod view;

pub use line_mode::run_line_mode;
pub use view::{ChatView, ViewAction};

use crate::api::{WorkflowClient, WorkflowTransport};
use crate::config::Config;
use crate::runtime::{spawn_turn, UiUpdate};
use crate::state::ChatSession;
use anyhow::Result;
use crossterm::event;
use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::sync::mpsc;

const TUI_TICK_INTERVAL: Duration = Duration::from_millis(80);

pub struct App {
    view: ChatView,
    transport: Arc<dyn WorkflowTransport>,
    update_tx: mpsc::UnboundedSender<UiUpdate>,
    update_rx: mpsc::UnboundedReceiver<UiUpdate>,
    terminal: Option<crate::terminal::TerminalType>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = WorkflowClient::new(&config)?;
        tracing::info!(api_url = client.api_url(), "workflow client ready");

        let terminal = if io::stdin().is_terminal() && io::stdout().is_terminal() {
            Some(crate::terminal::setup()?)
        } else {
            None
        };

        Ok(Self::with_transport(&config, Arc::new(client), terminal))
    }

    pub fn with_transport(
        config: &Config,
        transport: Arc<dyn WorkflowTransport>,
        terminal: Option<crate::terminal::TerminalType>,
    ) -> Self {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        Self {
            view: ChatView::new(config.title.clone()),
            transport,
            update_tx,
            update_rx,
            terminal,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            return self.run_tui().await;
        }

        tracing::info!("no terminal attached, using line mode");
        let session = ChatSession::new(Arc::clone(&self.transport));
        run_line_mode(session, BufReader::new(tokio::io::stdin()), io::stdout()).await
    }

    async fn run_tui(&mut self) -> Result<()> {
        let mut tick = tokio::time::interval(TUI_TICK_INTERVAL);
        while !self.view.should_quit() {
            self.draw_tui_frame()?;
            self.process_tui_events()?;
            if self.view.should_quit() {
                break;
            }

            tokio::select! {
                _ = tick.tick() => self.view.tick(),
                update = self.update_rx.recv() => {
                    if let Some(update) = update {
                        self.view.apply_update(update);
                    }
                }
            }
        }

        Ok(())
    }

    fn draw_tui_frame(&mut self) -> Result<()> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Ok(());
        };
        let view = &mut self.view;
        terminal.draw(|frame| view.draw(frame))?;
        Ok(())
    }

    fn process_tui_events(&mut self) -> Result<()> {
        while event::poll(Duration::from_millis(0))? {
            let action = self.view.handle_event(event::read()?);
            self.dispatch(action);
        }
        Ok(())
    }

    fn dispatch(&mut self, action: ViewAction) {
        if let ViewAction::Dispatch(pending) = action {
            spawn_turn(
                Arc::clone(&self.transport),
                pending,
                self.update_tx.clone(),
            );
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if self.terminal.take().is_some() {
            let _ = crate::terminal::restore();
        }
    }
}
