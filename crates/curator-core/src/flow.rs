use crate::catalog::Catalog;
use crate::onboarding::Onboarding;
use crate::session::DashboardSession;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Welcome,
    Onboarding,
    Dashboard,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Screen::Welcome => "welcome",
            Screen::Onboarding => "onboarding",
            Screen::Dashboard => "dashboard",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

/// Root view selector: welcome → onboarding → dashboard, strictly forward.
/// There is no backward transition and the dashboard is terminal. Inputs that
/// do not apply to the active screen are ignored.
#[derive(Debug)]
pub struct Flow {
    catalog: Catalog,
    streak: u32,
    screen: Screen,
    onboarding: Onboarding,
    session: Option<DashboardSession>,
}

impl Flow {
    pub fn new(catalog: Catalog, streak: u32) -> Self {
        Self {
            catalog,
            streak,
            screen: Screen::Welcome,
            onboarding: Onboarding::new(),
            session: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn onboarding(&self) -> &Onboarding {
        &self.onboarding
    }

    pub fn onboarding_mut(&mut self) -> Option<&mut Onboarding> {
        (self.screen == Screen::Onboarding).then_some(&mut self.onboarding)
    }

    pub fn session(&self) -> Option<&DashboardSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut DashboardSession> {
        (self.screen == Screen::Dashboard)
            .then_some(self.session.as_mut())
            .flatten()
    }

    /// Welcome's single exit. A no-op on any other screen.
    pub fn dismiss_welcome(&mut self) {
        if self.screen == Screen::Welcome {
            self.screen = Screen::Onboarding;
        }
    }

    /// Drive the onboarding form forward. When the final step completes this
    /// finalizes the profile, derives the habit split, and enters the
    /// dashboard. A no-op outside the onboarding screen or while the current
    /// step's predicate fails.
    pub fn complete_step(&mut self) {
        if self.screen != Screen::Onboarding {
            return;
        }
        if let Some(profile) = self.onboarding.advance() {
            tracing::info!(screen = %Screen::Dashboard, "entering dashboard");
            self.session = Some(DashboardSession::new(&self.catalog, profile, self.streak));
            self.screen = Screen::Dashboard;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
