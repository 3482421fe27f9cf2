//! App state and main loop: input handling, login, stats polling, and drawing.

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::{sync::mpsc, time::sleep};
use tracing::warn;

use crate::api::{ApiClient, ApiError};
use crate::session::SessionStore;
use crate::types::StatsSnapshot;
use crate::ui::{
    battery::draw_battery, cpu::draw_cores, disks::draw_disks, gpu::draw_gpu,
    header::draw_header, login::draw_login, net::draw_net, processes::draw_processes,
    resources::{draw_cpu_gauge, draw_mem_gauge},
    sensors::draw_sensors,
};

pub const POLL_PERIOD: Duration = Duration::from_millis(2000);

/// Shown on the login form when the request never got an answer.
const NETWORK_ERROR_MSG: &str = "Network error. Is the server reachable?";

/// Fixed-period tick source for the stats poll.
///
/// `start` arms an immediate tick. `pause` drops the pending tick with no
/// side effect. `resume` re-arms a full period out, so an unfocus/refocus
/// cycle never produces a catch-up burst.
#[derive(Debug)]
pub struct PollTimer {
    period: Duration,
    next_at: Option<Instant>,
}

impl PollTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_at: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_at = Some(now);
    }

    pub fn pause(&mut self) {
        self.next_at = None;
    }

    pub fn stop(&mut self) {
        self.next_at = None;
    }

    pub fn resume(&mut self, now: Instant) {
        self.next_at = Some(now + self.period);
    }

    pub fn is_armed(&self) -> bool {
        self.next_at.is_some()
    }

    /// True when a tick is due; rearms for one period from `now`.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        match self.next_at {
            Some(at) if now >= at => {
                self.next_at = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    fn active_field(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }
}

#[derive(Debug)]
enum View {
    Login(LoginForm),
    Main,
}

pub struct App {
    api: ApiClient,
    session: SessionStore,
    view: View,
    token: Option<String>,
    last_snapshot: Option<StatsSnapshot>,
    timer: PollTimer,
    procs_scroll: usize,
    should_quit: bool,
    fetch_tx: mpsc::UnboundedSender<Result<StatsSnapshot, ApiError>>,
    fetch_rx: mpsc::UnboundedReceiver<Result<StatsSnapshot, ApiError>>,
}

impl App {
    /// A persisted token skips the login view; polling then starts with an
    /// immediate first fetch.
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        let token = session.load();
        let mut timer = PollTimer::new(POLL_PERIOD);
        let view = if token.is_some() {
            timer.start(Instant::now());
            View::Main
        } else {
            View::Login(LoginForm::default())
        };
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        Self {
            api,
            session,
            view,
            token,
            last_snapshot: None,
            timer,
            procs_scroll: 0,
            should_quit: false,
            fetch_tx,
            fetch_rx,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.view, View::Main)
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal).await;

        // Teardown
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, DisableFocusChange, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                match event::read()? {
                    Event::Key(k) if k.kind != KeyEventKind::Release => {
                        self.handle_key(k).await;
                    }
                    Event::FocusLost => self.on_focus_lost(),
                    Event::FocusGained => self.on_focus_gained(),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
            if self.should_quit {
                break;
            }

            // Poll tick: fire-and-forget so a slow backend never blocks input.
            // Responses land in arrival order; the latest applied one wins.
            if self.is_logged_in() && self.timer.tick_due(Instant::now()) {
                self.spawn_fetch();
            }
            while let Ok(outcome) = self.fetch_rx.try_recv() {
                self.apply_fetch(outcome);
            }

            // Draw
            terminal.draw(|f| self.draw(f))?;

            sleep(Duration::from_millis(50)).await;
        }

        Ok(())
    }

    async fn handle_key(&mut self, k: KeyEvent) {
        if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if !self.is_logged_in() {
            match k.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit_login().await,
                code => {
                    if let View::Login(form) = &mut self.view {
                        match code {
                            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                                form.toggle_focus()
                            }
                            KeyCode::Backspace => {
                                form.active_field().pop();
                            }
                            KeyCode::Char(c) => form.active_field().push(c),
                            _ => {}
                        }
                    }
                }
            }
        } else {
            match k.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('l') | KeyCode::Char('L') => self.logout(),
                KeyCode::Up => self.procs_scroll = self.procs_scroll.saturating_sub(1),
                KeyCode::Down => self.procs_scroll = self.procs_scroll.saturating_add(1),
                KeyCode::PageUp => self.procs_scroll = self.procs_scroll.saturating_sub(10),
                KeyCode::PageDown => self.procs_scroll = self.procs_scroll.saturating_add(10),
                KeyCode::Home => self.procs_scroll = 0,
                _ => {}
            }
        }
    }

    /// Exactly one of {switch to main view + start polling} or {inline error}
    /// happens per submission; the stored session is untouched on failure.
    async fn submit_login(&mut self) {
        let (username, password) = match &self.view {
            View::Login(form) => (form.username.clone(), form.password.clone()),
            View::Main => return,
        };
        match self.api.login(&username, &password).await {
            Ok(token) => {
                if let Err(e) = self.session.save(&token) {
                    warn!(error = %e, "failed to persist token");
                }
                self.token = Some(token);
                self.view = View::Main;
                // First stats fetch goes out on the next loop turn.
                self.timer.start(Instant::now());
            }
            Err(e) => {
                let msg = match e {
                    ApiError::Rejected(msg) => msg,
                    _ => NETWORK_ERROR_MSG.to_string(),
                };
                if let View::Login(form) = &mut self.view {
                    form.error = Some(msg);
                }
            }
        }
    }

    /// Drop the session and reset to the initial logged-out state. Idempotent;
    /// also forced by a 401 mid-poll.
    fn logout(&mut self) {
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "failed to clear stored token");
        }
        self.token = None;
        self.last_snapshot = None;
        self.timer.stop();
        self.procs_scroll = 0;
        self.view = View::Login(LoginForm::default());
    }

    fn spawn_fetch(&self) {
        let Some(token) = self.token.clone() else {
            return;
        };
        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(api.fetch_stats(&token).await);
        });
    }

    fn apply_fetch(&mut self, outcome: Result<StatsSnapshot, ApiError>) {
        match outcome {
            Ok(snap) => {
                if self.is_logged_in() {
                    self.last_snapshot = Some(snap);
                }
            }
            Err(ApiError::Unauthorized) => self.logout(),
            Err(e) => warn!(error = %e, "stats fetch failed; retrying next tick"),
        }
    }

    // In-flight fetches are not cancelled on unfocus; a late response is
    // still applied.
    fn on_focus_lost(&mut self) {
        if self.is_logged_in() {
            self.timer.pause();
        }
    }

    fn on_focus_gained(&mut self) {
        if self.is_logged_in() {
            self.timer.resume(Instant::now());
        }
    }

    fn draw(&mut self, f: &mut ratatui::Frame<'_>) {
        match &self.view {
            View::Login(form) => draw_login(f, f.area(), form),
            View::Main => self.draw_main(f),
        }
    }

    fn draw_main(&mut self, f: &mut ratatui::Frame<'_>) {
        let area = f.area();
        let snap = self.last_snapshot.as_ref();
        let paused = !self.timer.is_armed();

        // Root rows: header, CPU/memory gauges, cores + GPU, bottom panels
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),   // header
                Constraint::Length(3),   // CPU + memory gauges
                Constraint::Ratio(1, 3), // per-core (left) + GPU (right)
                Constraint::Min(12),     // disks/net (left), procs/battery/sensors (right)
            ])
            .split(area);

        draw_header(f, rows[0], snap, paused);

        let gauges = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        draw_cpu_gauge(f, gauges[0], snap);
        draw_mem_gauge(f, gauges[1], snap);

        let mid = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[2]);
        draw_cores(f, mid[0], snap);
        draw_gpu(f, mid[1], snap);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[3]);

        let left_stack = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(6)])
            .split(bottom[0]);
        draw_disks(f, left_stack[0], snap);
        draw_net(f, left_stack[1], snap);

        let right_stack = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // processes
                Constraint::Length(3), // battery
                Constraint::Length(6), // sensors
            ])
            .split(bottom[1]);
        draw_processes(f, right_stack[0], snap, self.procs_scroll);
        draw_battery(f, right_stack[1], snap);
        draw_sensors(f, right_stack[2], snap);
    }
}
