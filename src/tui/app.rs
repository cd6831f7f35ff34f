use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Notification, NotificationLevel};
use super::input::DragInput;
use super::layout::ScreenLayout;
use super::theme;
use super::widgets::DragConfirmWidget;
use crate::config::ControlConfig;
use crate::core::asset::Asset;
use crate::core::confirm::{DragConfirm, DragConfirmProps};

/// Ticks a notification stays visible.
const NOTIFICATION_TTL_TICKS: u32 = 60;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// The confirm control on screen.
    pub control: DragConfirm,
    /// Mouse/keyboard gesture routing for the control.
    input: DragInput,
    /// Where the control was last drawn, for mouse hit-testing.
    control_area: Rect,
    /// Drag starts reported by the control.
    pub drag_count: u64,
    /// Active notifications (latest shown in the status bar).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Receiver for events raised by control callbacks.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl AppState {
    pub fn new(
        config: &ControlConfig,
        source: Option<Asset>,
        target: Option<Asset>,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let confirm_tx = event_tx.clone();
        let drag_tx = event_tx;
        let props = DragConfirmProps::new()
            .title(config.title.clone())
            .reset(false)
            .source(source)
            .target(target)
            .on_confirm(move || {
                let _ = confirm_tx.send(AppEvent::Confirmed);
            })
            .on_drag(move || {
                let _ = drag_tx.send(AppEvent::DragStarted);
            });

        let control = DragConfirm::new(props);
        let input = DragInput::new(control.bounds(), config.keyboard_step);

        Self {
            running: true,
            control,
            input,
            control_area: Rect::default(),
            drag_count: 0,
            notifications: Vec::new(),
            notification_counter: 0,
            event_rx,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            // Render
            terminal.draw(|frame| self.render(frame))?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    /// Process events queued by control callbacks without waiting.
    pub fn drain_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.on_tick(),
            AppEvent::Input(Event::Mouse(mouse)) => {
                let geometry = DragConfirmWidget::geometry(self.control_area);
                let handle = self.control.state().position;
                self.input
                    .handle_mouse(&mouse, &geometry, handle, &mut self.control);
            }
            AppEvent::Input(Event::Key(key)) => {
                let handle = self.control.state().position;
                if self.input.handle_key(&key, handle, &mut self.control) {
                    return;
                }
                if let Some(action) = map_key_to_action(&key) {
                    self.handle_action(action);
                }
            }
            AppEvent::Input(_) => {}
            AppEvent::DragStarted => {
                self.drag_count += 1;
            }
            AppEvent::Confirmed => {
                let message = format!("Swap confirmed: {}", self.swap_summary());
                self.push_notification(message, NotificationLevel::Success);
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        log::debug!("action: {}", action.label());
        match action {
            Action::ToggleReset => {
                let reset = !self.control.props().reset;
                self.control.set_reset(reset);
                // The reset returns the control to idle; a gesture still held
                // by the input layer must not keep driving it.
                if self.input.cancel() {
                    log::debug!("gesture in progress dropped by reset");
                }
                self.push_notification("Control reset".to_string(), NotificationLevel::Info);
            }
            Action::ToggleDisabled => {
                let disabled = !self.control.props().disabled;
                self.control.set_disabled(disabled);
                let message = if disabled {
                    "Control disabled by caller"
                } else {
                    "Control enabled by caller"
                };
                self.push_notification(message.to_string(), NotificationLevel::Warning);
            }
            Action::Quit => self.running = false,
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (max 3). Repeating a visible message refreshes it
    /// and moves it to the end instead of adding a duplicate.
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if let Some(index) = self.notifications.iter().position(|n| n.message == message) {
            let mut existing = self.notifications.remove(index);
            existing.level = level;
            existing.ttl_ticks = NOTIFICATION_TTL_TICKS;
            self.notifications.push(existing);
            return;
        }

        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL_TICKS,
        });

        while self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    fn swap_summary(&self) -> String {
        let props = self.control.props();
        let name = |asset: Option<&Asset>| {
            asset
                .map(|a| a.ticker().to_string())
                .unwrap_or_else(|| "?".to_string())
        };
        format!(
            "{} → {}",
            name(props.source.as_ref()),
            name(props.target.as_ref())
        )
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&mut self, frame: &mut Frame) {
        let layout = ScreenLayout::compute(frame.area());
        self.control_area = layout.control;

        let header = Line::from(vec![
            Span::styled(" Swap ", theme::title()),
            Span::styled(self.swap_summary(), Style::default().fg(theme::TEXT)),
        ]);
        frame.render_widget(Paragraph::new(header), layout.header);

        frame.render_widget(DragConfirmWidget::new(&self.control), layout.control);
        self.render_flags(frame, layout.flags);
        self.render_status_bar(frame, layout.status);
    }

    fn render_flags(&self, frame: &mut Frame, area: Rect) {
        let state = self.control.state();
        let flag = |name: &'static str, on: bool| {
            let style = if on { theme::flag_on() } else { theme::dim() };
            Span::styled(format!(" {name} "), style)
        };

        let line = Line::from(vec![
            flag("dragging", state.dragging),
            Span::raw(" "),
            flag("overlap", state.overlap),
            Span::raw(" "),
            flag("success", state.success),
            Span::raw(" "),
            flag("disabled", self.control.is_disabled()),
            Span::raw(" "),
            flag("missed", state.missed),
            Span::raw(" "),
            Span::styled(format!("x={}", state.position.x), theme::muted()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let notice = match self.notifications.last() {
            Some(n) => {
                let color = match n.level {
                    NotificationLevel::Info => theme::INFO,
                    NotificationLevel::Success => theme::SUCCESS,
                    NotificationLevel::Warning => theme::ACCENT,
                };
                Span::styled(n.message.clone(), Style::default().fg(color))
            }
            None => Span::styled("ready", theme::muted()),
        };

        let status = Line::from(vec![
            Span::styled(" CONFIRM ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(
                format!("{} confirmed", self.control.confirm_count()),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            notice,
            Span::raw(" │ "),
            Span::styled("→", theme::key_hint()),
            Span::raw(":slide "),
            Span::styled("Enter", theme::key_hint()),
            Span::raw(":release "),
            Span::styled("r", theme::key_hint()),
            Span::raw(":reset "),
            Span::styled("d", theme::key_hint()),
            Span::raw(":disable "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }
}

// ── Input mapping ───────────────────────────────────────────────────────

/// Map app-level keys to actions.
fn map_key_to_action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Action::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Action::ToggleReset),
        (KeyModifiers::NONE, KeyCode::Char('d')) => Some(Action::ToggleDisabled),
        _ => None,
    }
}
