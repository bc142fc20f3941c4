use crate::profile::UserProfile;
use crate::types::{Goal, Personality, TimeSlot};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// OnboardingStep
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Name,
    Personality,
    Goals,
    Preferences,
}

impl OnboardingStep {
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::Name,
            OnboardingStep::Personality,
            OnboardingStep::Goals,
            OnboardingStep::Preferences,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<OnboardingStep> {
        let all = OnboardingStep::all();
        all.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<OnboardingStep> {
        let all = OnboardingStep::all();
        self.index().checked_sub(1).map(|i| all[i])
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn title(self) -> &'static str {
        match self {
            OnboardingStep::Name => "What should we call you?",
            OnboardingStep::Personality => "How do you usually approach new things?",
            OnboardingStep::Goals => "What are you hoping to improve?",
            OnboardingStep::Preferences => "When do you have tiny pockets of time?",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            OnboardingStep::Name => "We'll use this to make everything feel more personal",
            OnboardingStep::Personality => "This helps us match habits to your natural style",
            OnboardingStep::Goals => "Pick any that resonate (you can always change these later)",
            OnboardingStep::Preferences => "We'll suggest habits that fit these moments perfectly",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OnboardingStep::Name => "name",
            OnboardingStep::Personality => "personality",
            OnboardingStep::Goals => "goals",
            OnboardingStep::Preferences => "preferences",
        };
        f.write_str(s)
    }
}

impl Default for OnboardingStep {
    fn default() -> Self {
        OnboardingStep::Name
    }
}

// ---------------------------------------------------------------------------
// Onboarding
// ---------------------------------------------------------------------------

/// Four-step profile collector. Selections mutate a draft; the draft becomes
/// an immutable [`UserProfile`] only when the final step advances.
///
/// There is no error state: an incomplete step simply refuses to advance.
#[derive(Debug, Clone, Default)]
pub struct Onboarding {
    step: OnboardingStep,
    name: String,
    personality: Option<Personality>,
    goals: Vec<Goal>,
    preferences: Vec<TimeSlot>,
    /// Sealed once the profile has been handed out.
    complete: bool,
}

impl Onboarding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn personality(&self) -> Option<Personality> {
        self.personality
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn preferences(&self) -> &[TimeSlot] {
        &self.preferences
    }

    /// Whether the profile has already been finalized. A complete collector
    /// accepts no further navigation.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    // ---------------------------------------------------------------------------
    // Draft mutations
    // ---------------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn push_name_char(&mut self, c: char) {
        self.name.push(c);
    }

    pub fn pop_name_char(&mut self) {
        self.name.pop();
    }

    /// Single-select: choosing overwrites any previous choice.
    pub fn choose_personality(&mut self, personality: Personality) {
        self.personality = Some(personality);
    }

    /// Pure set-toggle: adds the goal if absent, removes it if present.
    pub fn toggle_goal(&mut self, goal: Goal) {
        if self.goals.contains(&goal) {
            self.goals.retain(|g| *g != goal);
        } else {
            self.goals.push(goal);
        }
    }

    /// Pure set-toggle: adds the slot if absent, removes it if present.
    pub fn toggle_preference(&mut self, slot: TimeSlot) {
        if self.preferences.contains(&slot) {
            self.preferences.retain(|p| *p != slot);
        } else {
            self.preferences.push(slot);
        }
    }

    // ---------------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------------

    /// Whether the current step's completion predicate holds.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            OnboardingStep::Name => !self.name.trim().is_empty(),
            OnboardingStep::Personality => self.personality.is_some(),
            OnboardingStep::Goals => !self.goals.is_empty(),
            OnboardingStep::Preferences => !self.preferences.is_empty(),
        }
    }

    /// Move forward. A no-op while the current step is incomplete. On the
    /// final step this finalizes the draft, seals the collector, and returns
    /// the profile exactly once; otherwise it returns `None`.
    pub fn advance(&mut self) -> Option<UserProfile> {
        if self.complete || !self.can_proceed() {
            return None;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                None
            }
            None => {
                // Reaching the last step required every earlier predicate to
                // hold, and nothing clears a selection once made.
                let personality = self.personality?;
                self.complete = true;
                tracing::debug!(name = %self.name.trim(), "onboarding complete");
                Some(UserProfile {
                    name: self.name.trim().to_string(),
                    personality,
                    goals: self.goals.clone(),
                    preferences: self.preferences.clone(),
                })
            }
        }
    }

    /// Move backward. A no-op on the first step or once sealed.
    pub fn back(&mut self) {
        if self.complete {
            return;
        }
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
