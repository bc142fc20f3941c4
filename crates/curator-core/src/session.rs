use crate::catalog::{Catalog, HabitRecord};
use crate::profile::UserProfile;
use crate::recommend::Recommendation;
use chrono::{DateTime, Local, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Motivational state derived from today's completion ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Start,
    AllDone,
    Momentum,
    SmallStep,
}

impl Mood {
    /// Fixed thresholds: zero done → start; everything done → all done;
    /// at least half done → momentum; otherwise → small step.
    pub fn for_counts(completed: usize, total: usize) -> Self {
        if completed == 0 {
            Mood::Start
        } else if completed == total {
            Mood::AllDone
        } else if completed * 2 >= total {
            Mood::Momentum
        } else {
            Mood::SmallStep
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Mood::Start => "Ready to start your day with some tiny wins?",
            Mood::AllDone => "Amazing! You've completed all your habits today!",
            Mood::Momentum => "You're on fire! Keep the momentum going!",
            Mood::SmallStep => "Great start! Every small step counts.",
        }
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Snapshot of today's progress for the dashboard panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub ratio: f64,
    pub streak: u32,
    pub mood: Mood,
}

// ---------------------------------------------------------------------------
// DashboardSession
// ---------------------------------------------------------------------------

/// Transient dashboard state for one sitting: the active habit set, the
/// remaining suggestions, and today's completion marks. Discarded when a new
/// session starts; nothing here persists.
///
/// Invariants: `current` and `suggested` are disjoint by id, and every id in
/// `completed_today` references a habit in `current`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSession {
    pub profile: UserProfile,
    current: Vec<HabitRecord>,
    suggested: Vec<HabitRecord>,
    completed_today: HashSet<String>,
    /// Externally supplied; this design never computes or increments it.
    streak: u32,
    pub started_at: DateTime<Utc>,
}

impl DashboardSession {
    pub fn new(catalog: &Catalog, profile: UserProfile, streak: u32) -> Self {
        let rec = Recommendation::for_profile(catalog, &profile);
        Self {
            profile,
            current: rec.current,
            suggested: rec.suggested,
            completed_today: HashSet::new(),
            streak,
            started_at: Utc::now(),
        }
    }

    pub fn current(&self) -> &[HabitRecord] {
        &self.current
    }

    pub fn suggested(&self) -> &[HabitRecord] {
        &self.suggested
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed_today.contains(id)
    }

    // ---------------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------------

    /// Toggle today's completion mark for a current habit. Symmetric, so a
    /// double toggle restores the original state. Ids not in the current set
    /// are ignored, which keeps completed ⊆ current.
    pub fn toggle(&mut self, id: &str) {
        if !self.current.iter().any(|h| h.id == id) {
            tracing::debug!(id, "toggle ignored: not a current habit");
            return;
        }
        if !self.completed_today.remove(id) {
            self.completed_today.insert(id.to_string());
        }
    }

    /// Adopt a suggested habit: append it to the current set (adoption order,
    /// not catalog order) and drop it from the suggestions. A no-op for ids
    /// that are not currently suggested, so repeat adoption cannot duplicate.
    pub fn adopt(&mut self, id: &str) {
        let Some(pos) = self.suggested.iter().position(|h| h.id == id) else {
            tracing::debug!(id, "adopt ignored: not a suggested habit");
            return;
        };
        let habit = self.suggested.remove(pos);
        self.current.push(habit);
    }

    // ---------------------------------------------------------------------------
    // Derived values
    // ---------------------------------------------------------------------------

    pub fn completed_count(&self) -> usize {
        self.completed_today.len()
    }

    pub fn total_count(&self) -> usize {
        self.current.len()
    }

    /// Completion ratio in [0, 1]; 0 when there are no current habits.
    pub fn completion_ratio(&self) -> f64 {
        if self.current.is_empty() {
            0.0
        } else {
            self.completed_today.len() as f64 / self.current.len() as f64
        }
    }

    pub fn mood(&self) -> Mood {
        Mood::for_counts(self.completed_count(), self.total_count())
    }

    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.completed_count(),
            total: self.total_count(),
            ratio: self.completion_ratio(),
            streak: self.streak,
            mood: self.mood(),
        }
    }

    /// Greeting addressed to the user, keyed off the local hour.
    pub fn greeting(&self) -> String {
        let part = match Local::now().hour() {
            5..=11 => "Good morning",
            12..=17 => "Good afternoon",
            _ => "Good evening",
        };
        format!("{part}, {}!", self.profile.name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Goal, Personality, TimeSlot};

    fn session() -> DashboardSession {
        // Analytical + reduce_stress matches four habits: three current
        // (doodle-lunch, one-leg-brush, coffee-gratitude) and one suggested
        // (commute-podcast).
        let profile = UserProfile {
            name: "Sam".to_string(),
            personality: Personality::Analytical,
            goals: vec![Goal::ReduceStress],
            preferences: vec![TimeSlot::MorningCoffee],
        };
        DashboardSession::new(&Catalog::builtin(), profile, 7)
    }

    #[test]
    fn double_toggle_restores_original_set() {
        let mut s = session();
        s.toggle("doodle-lunch");
        assert!(s.is_completed("doodle-lunch"));
        s.toggle("doodle-lunch");
        assert!(!s.is_completed("doodle-lunch"));
        assert_eq!(s.completed_count(), 0);
    }

    #[test]
    fn toggle_unknown_or_suggested_id_is_noop() {
        let mut s = session();
        s.toggle("nope");
        s.toggle("commute-podcast"); // suggested, not current
        assert_eq!(s.completed_count(), 0);
    }

    #[test]
    fn adopt_moves_habit_once() {
        let mut s = session();
        assert_eq!(s.suggested().len(), 1);
        s.adopt("commute-podcast");
        assert!(s.suggested().is_empty());
        assert_eq!(s.current().len(), 4);
        assert_eq!(s.current().last().unwrap().id, "commute-podcast");

        // Repeat adoption is a no-op.
        s.adopt("commute-podcast");
        assert_eq!(s.current().len(), 4);
        assert!(s.suggested().is_empty());
    }

    #[test]
    fn adopted_habit_is_toggleable() {
        let mut s = session();
        s.adopt("commute-podcast");
        s.toggle("commute-podcast");
        assert!(s.is_completed("commute-podcast"));
    }

    #[test]
    fn completion_ratio_bounds() {
        let mut s = session();
        assert_eq!(s.completion_ratio(), 0.0);
        s.toggle("doodle-lunch");
        s.toggle("one-leg-brush");
        s.toggle("coffee-gratitude");
        assert_eq!(s.completion_ratio(), 1.0);
    }

    #[test]
    fn ratio_is_zero_for_empty_current_set() {
        // A profile matching nothing yields an empty current set.
        let one = Catalog::builtin().get("doodle-lunch").unwrap().clone();
        let tiny = Catalog::new(vec![one]).unwrap();
        let profile = UserProfile {
            name: "Sam".to_string(),
            personality: Personality::Methodical,
            goals: vec![Goal::SleepBetter],
            preferences: vec![TimeSlot::BeforeBed],
        };
        let s = DashboardSession::new(&tiny, profile, 0);
        assert_eq!(s.total_count(), 0);
        assert_eq!(s.completion_ratio(), 0.0);
        // Zero completed of zero total still reads as the start state.
        assert_eq!(s.mood(), Mood::Start);
    }

    #[test]
    fn mood_thresholds() {
        assert_eq!(Mood::for_counts(0, 3), Mood::Start);
        assert_eq!(Mood::for_counts(3, 3), Mood::AllDone);
        assert_eq!(Mood::for_counts(2, 4), Mood::Momentum);
        assert_eq!(Mood::for_counts(1, 4), Mood::SmallStep);
    }

    #[test]
    fn mood_tracks_session_progress() {
        let mut s = session();
        assert_eq!(s.mood(), Mood::Start);
        s.toggle("doodle-lunch");
        assert_eq!(s.mood(), Mood::SmallStep);
        s.toggle("one-leg-brush");
        assert_eq!(s.mood(), Mood::Momentum);
        s.toggle("coffee-gratitude");
        assert_eq!(s.mood(), Mood::AllDone);
    }

    #[test]
    fn streak_is_passed_through_untouched() {
        let mut s = session();
        assert_eq!(s.progress().streak, 7);
        s.toggle("doodle-lunch");
        assert_eq!(s.progress().streak, 7);
    }

    #[test]
    fn greeting_addresses_the_user() {
        let s = session();
        assert!(s.greeting().contains("Sam"));
    }
}
