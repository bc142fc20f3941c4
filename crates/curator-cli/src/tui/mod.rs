// Full-screen interactive terminal app:
//   - Welcome card (Enter to begin)
//   - Four-step onboarding form (type / arrow keys / Space to select)
//   - Dashboard with today's habits, suggestions, and a progress panel

mod draw;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use curator_core::flow::{Flow, Screen};
use curator_core::onboarding::OnboardingStep;
use curator_core::types::{Goal, Personality, TimeSlot};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Which dashboard list the cursor lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pane {
    Today,
    Suggestions,
}

pub struct App {
    flow: Flow,
    cursor: usize,
    pane: Pane,
}

impl App {
    pub fn new(flow: Flow) -> Self {
        Self {
            flow,
            cursor: 0,
            pane: Pane::Today,
        }
    }

    /// Enter the alternate screen and run the event loop until the user quits.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("create terminal")?;

        let result = self.event_loop(&mut terminal);

        // Restore terminal regardless of result.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| draw::draw(f, &self.flow, self.cursor, self.pane))?;

            if !event::poll(std::time::Duration::from_millis(50))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Ignore key releases (Windows terminals report both).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            if key.code == KeyCode::Esc {
                return Ok(());
            }

            // Each key press resolves fully before the next is read, so state
            // changes are strictly sequential.
            match self.flow.screen() {
                Screen::Welcome => {
                    if !self.on_welcome_key(key.code) {
                        return Ok(());
                    }
                }
                Screen::Onboarding => self.on_onboarding_key(key.code),
                Screen::Dashboard => {
                    if !self.on_dashboard_key(key.code) {
                        return Ok(());
                    }
                }
            }
        }
    }

    // ---------------------------------------------------------------------------
    // Key handling
    // ---------------------------------------------------------------------------

    /// Returns false to quit.
    fn on_welcome_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.flow.dismiss_welcome();
                self.cursor = 0;
                true
            }
            KeyCode::Char('q') => false,
            _ => true,
        }
    }

    fn on_onboarding_key(&mut self, code: KeyCode) {
        let step = self.flow.onboarding().step();
        let options = step_option_count(step);

        match code {
            KeyCode::Enter => {
                self.flow.complete_step();
                self.cursor = 0;
            }
            KeyCode::Left => {
                if let Some(o) = self.flow.onboarding_mut() {
                    o.back();
                }
                self.cursor = 0;
            }
            KeyCode::Up if options > 0 => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down if options > 0 => {
                self.cursor = (self.cursor + 1).min(options - 1);
            }
            KeyCode::Char(' ') if options > 0 => self.select_option(step),
            KeyCode::Char(c) if step == OnboardingStep::Name => {
                if let Some(o) = self.flow.onboarding_mut() {
                    o.push_name_char(c);
                }
            }
            KeyCode::Backspace if step == OnboardingStep::Name => {
                if let Some(o) = self.flow.onboarding_mut() {
                    o.pop_name_char();
                }
            }
            _ => {}
        }
    }

    fn select_option(&mut self, step: OnboardingStep) {
        let cursor = self.cursor;
        let Some(o) = self.flow.onboarding_mut() else {
            return;
        };
        match step {
            OnboardingStep::Name => {}
            OnboardingStep::Personality => {
                if let Some(p) = Personality::all().get(cursor) {
                    o.choose_personality(*p);
                }
            }
            OnboardingStep::Goals => {
                if let Some(g) = Goal::all().get(cursor) {
                    o.toggle_goal(*g);
                }
            }
            OnboardingStep::Preferences => {
                if let Some(t) = TimeSlot::all().get(cursor) {
                    o.toggle_preference(*t);
                }
            }
        }
    }

    /// Returns false to quit.
    fn on_dashboard_key(&mut self, code: KeyCode) -> bool {
        let Some(session) = self.flow.session() else {
            return true;
        };
        let len = match self.pane {
            Pane::Today => session.current().len(),
            Pane::Suggestions => session.suggested().len(),
        };

        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Tab => {
                self.pane = match self.pane {
                    Pane::Today => Pane::Suggestions,
                    Pane::Suggestions => Pane::Today,
                };
                self.cursor = 0;
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down if len > 0 => self.cursor = (self.cursor + 1).min(len - 1),
            KeyCode::Char(' ') if self.pane == Pane::Today => {
                let id = session.current().get(self.cursor).map(|h| h.id.clone());
                if let (Some(id), Some(s)) = (id, self.flow.session_mut()) {
                    s.toggle(&id);
                }
            }
            KeyCode::Enter | KeyCode::Char('a') if self.pane == Pane::Suggestions => {
                let id = session.suggested().get(self.cursor).map(|h| h.id.clone());
                if let (Some(id), Some(s)) = (id, self.flow.session_mut()) {
                    s.adopt(&id);
                }
                // The list under the cursor just shrank.
                if let Some(s) = self.flow.session() {
                    self.cursor = self.cursor.min(s.suggested().len().saturating_sub(1));
                }
            }
            _ => {}
        }
        true
    }
}

pub(crate) fn step_option_count(step: OnboardingStep) -> usize {
    match step {
        OnboardingStep::Name => 0,
        OnboardingStep::Personality => Personality::all().len(),
        OnboardingStep::Goals => Goal::all().len(),
        OnboardingStep::Preferences => TimeSlot::all().len(),
    }
}
