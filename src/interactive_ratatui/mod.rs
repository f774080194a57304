use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind, poll,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::AppConfig;
use crate::catalog::Catalog;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::search_service::SearchService;
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, MESSAGE_CLEAR_DELAY_MS};
use self::domain::models::{Focus, Mode, SearchRequest, SearchResponse, Theme};
use self::ui::{
    app_state::AppState,
    commands::Command,
    components::{Component, EXIT_PROMPT, header::APP_TITLE},
    events::Message,
    icons::Icon,
    renderer::Renderer,
};

/// Undo every terminal mode the session enables. Each step runs even when an
/// earlier one fails; the first error is returned.
fn restore_terminal<W: Write>(out: &mut W) -> Result<()> {
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
    let raw = disable_raw_mode();
    if let Err(e) = &screen {
        tracing::warn!(error = %e, "failed to leave alternate screen");
    }
    if let Err(e) = &raw {
        tracing::warn!(error = %e, "failed to disable raw mode");
    }
    screen?;
    raw?;
    Ok(())
}

/// Owns the state, the renderer and the search worker for one TUI session
pub struct RoleFinderApp {
    config: AppConfig,
    state: AppState,
    renderer: Renderer,
    search_service: Arc<SearchService>,
    search_sender: Option<Sender<SearchRequest>>,
    search_receiver: Option<Receiver<SearchResponse>>,
    initialized: bool,
    terminal_active: bool,
    window_title: Option<String>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
}

impl RoleFinderApp {
    pub fn new(config: AppConfig, catalog: Arc<Catalog>) -> Self {
        let search_service = Arc::new(SearchService::new(catalog, config.latency));

        Self {
            config,
            state: AppState::new(),
            renderer: Renderer::new(),
            search_service,
            search_sender: None,
            search_receiver: None,
            initialized: false,
            terminal_active: false,
            window_title: None,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
        }
    }

    /// Start the search worker and apply the configured theme and query.
    /// Calling it again is a no-op.
    pub fn initialize(&mut self) {
        if self.initialized {
            tracing::debug!("role finder already initialized");
            return;
        }
        self.initialized = true;

        let (tx, rx) = self.start_search_worker();
        self.search_sender = Some(tx);
        self.search_receiver = Some(rx);

        self.handle_message(Message::SetTheme(self.config.theme));
        if let Some(query) = self.config.initial_query.clone() {
            self.state.set_query(query);
        }
        tracing::info!(
            theme = %self.config.theme,
            latency_ms = self.config.latency.as_millis() as u64,
            "role finder initialized"
        );
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        self.terminal_active = true;
        self.initialize();

        let result = self.run_app(&mut terminal);

        self.terminal_active = false;
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = restore_terminal(&mut stdout);
            return Err(e.into());
        }
        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(terminal),
            Err(e) => {
                let _ = restore_terminal(&mut io::stdout());
                Err(e.into())
            }
        }
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let restored = restore_terminal(terminal.backend_mut());
        let cursor = terminal.show_cursor();
        restored?;
        cursor?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            self.poll_search_responses();

            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                    self.execute_command(Command::ClearMessage);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_input(key) {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    // Resize is picked up by the next draw
                    _ => {}
                }
            }
        }
        Ok(())
    }

    pub fn render(&mut self, f: &mut Frame) {
        self.renderer.render(f, &self.state);
    }

    /// Drain finished searches from the worker into the state
    fn poll_search_responses(&mut self) {
        let Some(receiver) = &self.search_receiver else {
            return;
        };

        let mut messages = Vec::new();
        loop {
            match receiver.try_recv() {
                Ok(response) => messages.push(match response.outcome {
                    Ok(roles) => Message::SearchCompleted {
                        id: response.id,
                        roles,
                    },
                    Err(reason) => Message::SearchFailed {
                        id: response.id,
                        reason,
                    },
                }),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.state.search.loading {
                        messages.push(Message::SearchFailed {
                            id: self.state.search.current_search_id,
                            reason: "search worker stopped".to_string(),
                        });
                    }
                    break;
                }
            }
        }

        for message in messages {
            self.handle_message(message);
        }
    }

    /// Returns true when the app should quit
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.execute_command(Command::ShowMessage(EXIT_PROMPT.to_string()));
            self.execute_command(Command::ScheduleClearMessage(
                DOUBLE_CTRL_C_TIMEOUT_SECS * 1000,
            ));
            return false;
        }

        if self.state.mode == Mode::Help {
            if let Some(msg) = self.renderer.get_help_dialog_mut().handle_key(key) {
                self.handle_message(msg);
            }
            return false;
        }

        let message = match key.code {
            KeyCode::Esc => return true,
            KeyCode::F(1) => Some(Message::ShowHelp),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::ToggleTheme)
            }
            KeyCode::Tab | KeyCode::BackTab => Some(Message::ToggleFocus),
            _ => match self.state.ui.focus {
                Focus::SearchInput => self.renderer.get_search_bar_mut().handle_key(key),
                Focus::Results => self.renderer.get_results_panel_mut().handle_key(key),
            },
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(msg) = self.renderer.hit_test(mouse.column, mouse.row) {
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ExecuteSearch => self.execute_search(),
            Command::ApplyTheme(theme) => self.apply_theme(theme),
            Command::ShowMessage(msg) => {
                self.state.update(Message::SetStatus(msg));
            }
            Command::ClearMessage => {
                self.state.update(Message::ClearStatus);
                self.message_timer = None;
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
        }
    }

    fn execute_search(&mut self) {
        let id = self.state.search.current_search_id;
        let request = SearchRequest {
            id,
            query: self.state.search.query.trim().to_string(),
        };

        let sent = match &self.search_sender {
            Some(sender) => sender.send(request).is_ok(),
            None => false,
        };
        if !sent {
            tracing::error!(id, "search worker unavailable");
            self.handle_message(Message::SearchFailed {
                id,
                reason: "search worker unavailable".to_string(),
            });
        }
    }

    /// Title-bar counterpart of the page icon: the glyph follows the theme
    fn apply_theme(&mut self, theme: Theme) {
        let icon = match theme {
            Theme::Dark => Icon::Moon,
            Theme::Light => Icon::Sun,
        };
        let title = format!("{}{}", icon.prefix(), APP_TITLE);

        if self.terminal_active {
            if let Err(e) = execute!(io::stdout(), SetTitle(&title)) {
                tracing::warn!(error = %e, "failed to set terminal title");
            }
        }
        self.window_title = Some(title);
    }

    fn start_search_worker(&self) -> (Sender<SearchRequest>, Receiver<SearchResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<SearchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<SearchResponse>();
        let search_service = self.search_service.clone();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let response = search_service.respond(&request);
                if response_tx.send(response).is_err() {
                    break;
                }
            }
            tracing::debug!("search worker exiting");
        });

        (request_tx, response_rx)
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    #[cfg(test)]
    pub(crate) fn window_title(&self) -> Option<&str> {
        self.window_title.as_deref()
    }

    /// Pump worker responses until the pending search settles
    #[cfg(test)]
    pub(crate) fn wait_for_search(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            self.poll_search_responses();
            if !self.state.search.loading {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }
}
