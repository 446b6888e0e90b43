//! TUI application: main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 controller_task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ cmd_rx.recv()
//!   ├─ ui_rx (UiEvent from controller)    ├─ controller.submit() / reset()
//!   └─ tick_interval                      └─ controller.share_to() / ...
//!        └── cmd_tx ──────────────────>──┘
//! ```

use super::app_controller::controller_task;
use super::event::TuiCommand;
use super::mode::{self, KeyAction};
use super::presenter::TuiPresenter;
use super::state::TuiState;
use super::widgets::{
    MainLayout,
    express::{ExpressLayout, ExpressWidget},
    header::HeaderWidget,
    help::HelpWidget,
    reflection::ReflectionWidget,
    status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use imaginario_application::{
    DEFAULT_TRANSITION, GenerateWordUseCase, ReflectionController, ShareResultUseCase, UiEvent,
};
use imaginario_domain::ViewState;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const TICK: Duration = Duration::from_millis(120);
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Timings for the interactive screen
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Delay between screens
    pub transition: Duration,
    /// How long "¡Copiado!" and other flashes stay visible
    pub copy_feedback: Duration,
    /// Shown in the header
    pub model_name: String,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            transition: DEFAULT_TRANSITION,
            copy_feedback: Duration::from_secs(3),
            model_name: String::new(),
        }
    }
}

/// Main TUI application
pub struct TuiApp {
    // -- Actor channels --
    cmd_tx: mpsc::UnboundedSender<TuiCommand>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,

    // -- Controller task --
    controller_handle: Option<JoinHandle<()>>,
    cancel: CancellationToken,

    options: TuiOptions,
}

impl TuiApp {
    /// Create a new TUI application wired to a controller task
    pub fn new(
        generate: GenerateWordUseCase,
        share: ShareResultUseCase,
        options: TuiOptions,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
        let cancel = CancellationToken::new();

        let controller = ReflectionController::new(generate, share, ui_tx)
            .with_transition(options.transition)
            .with_cancellation(cancel.clone());

        let controller_handle = tokio::spawn(controller_task(controller, cmd_rx));

        Self {
            cmd_tx,
            ui_rx,
            controller_handle: Some(controller_handle),
            cancel,
            options,
        }
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new().with_model_name(self.options.model_name.clone());
        let result = self.event_loop(&mut terminal, &mut state).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        self.shutdown().await;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        state: &mut TuiState,
    ) -> io::Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(TICK);

        loop {
            terminal.draw(|frame| Self::render(frame, state))?;

            if state.should_quit {
                return Ok(());
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(state, event),
                        Some(Err(e)) => return Err(e),
                        None => return Ok(()),
                    }
                }

                // UiEvents from the controller task
                Some(ui_event) = self.ui_rx.recv() => {
                    TuiPresenter::apply(state, &ui_event);
                }

                // Tick for flash expiry and the spinner
                _ = tick.tick() => {
                    state.expire_flash(self.options.copy_feedback);
                    state.advance_spinner();
                }
            }
        }
    }

    /// Stop an in-flight request and wait briefly for the controller task
    async fn shutdown(&mut self) {
        self.cancel.cancel();
        let _ = self.cmd_tx.send(TuiCommand::Quit);
        if let Some(handle) = self.controller_handle.take() {
            match tokio::time::timeout(SHUTDOWN_GRACE, handle).await {
                Ok(Ok(())) => debug!("Controller task stopped"),
                Ok(Err(e)) => warn!("Controller task failed: {}", e),
                Err(_) => warn!("Controller task did not stop in time"),
            }
        }
    }

    /// Render all widgets
    fn render(frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);

        match state.view {
            ViewState::Express => {
                frame.render_widget(ExpressWidget::new(state), layout.body);
                if state.accepts_input()
                    && !state.show_help
                    && let Some(position) = ExpressLayout::compute(layout.body).cursor(state)
                {
                    frame.set_cursor_position(position);
                }
            }
            ViewState::Reflection => {
                frame.render_widget(ReflectionWidget::new(state), layout.body);
            }
        }

        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if state.show_help {
            let help_area = MainLayout::centered_overlay(70, 70, frame.area());
            frame.render_widget(HelpWidget, help_area);
        }
    }

    fn handle_terminal_event(&self, state: &mut TuiState, event: Event) {
        // Resize is picked up by the next draw
        let Event::Key(key) = event else {
            return;
        };

        if state.show_help && matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            state.show_help = false;
            return;
        }

        let action = mode::handle_key_event(state.view, state.focus, key);
        self.handle_action(state, action);
    }

    /// Handle a semantic key action
    fn handle_action(&self, state: &mut TuiState, action: KeyAction) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => state.should_quit = true,
            KeyAction::ToggleHelp => state.show_help = !state.show_help,

            // Word editing (local first, then mirrored to the controller)
            KeyAction::InsertChar(c) => {
                if state.accepts_input()
                    && let Some((index, value)) = state.insert_char(c)
                {
                    self.send(TuiCommand::SetWord { index, value });
                }
            }
            KeyAction::DeleteChar => {
                if state.accepts_input()
                    && let Some((index, value)) = state.delete_char()
                {
                    self.send(TuiCommand::SetWord { index, value });
                }
            }
            KeyAction::CursorLeft => state.cursor_left(),
            KeyAction::CursorRight => state.cursor_right(),
            KeyAction::CursorHome => state.cursor_home(),
            KeyAction::CursorEnd => state.cursor_end(),
            KeyAction::FocusNext => state.focus_next(),
            KeyAction::FocusPrev => state.focus_prev(),

            KeyAction::Submit => {
                if state.can_submit() {
                    // Blocks repeat submits until the controller answers
                    state.is_loading = true;
                    self.send(TuiCommand::Submit);
                }
            }
            KeyAction::Reset => {
                if !state.is_transitioning {
                    self.send(TuiCommand::Reset);
                }
            }
            KeyAction::Copy => self.send(TuiCommand::Copy),
            KeyAction::Share(target) => self.send(TuiCommand::Share(target)),
            KeyAction::ExportCard => self.send(TuiCommand::ExportCard),
        }
    }

    fn send(&self, cmd: TuiCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            warn!("Controller task is gone; command dropped");
        }
    }
}
