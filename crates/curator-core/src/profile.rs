use crate::types::{Goal, Personality, TimeSlot};
use serde::{Deserialize, Serialize};

/// A finalized user profile. Built by the onboarding flow and immutable
/// afterwards: `goals` and `preferences` are non-empty by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub personality: Personality,
    pub goals: Vec<Goal>,
    pub preferences: Vec<TimeSlot>,
}

impl UserProfile {
    /// "Why these habits?" note shown on the dashboard, naming the
    /// personality and up to the first two goals.
    pub fn personalization_note(&self) -> String {
        let goals: Vec<String> = self
            .goals
            .iter()
            .take(2)
            .map(|g| g.label().to_lowercase())
            .collect();
        format!(
            "As someone who's {}, we picked habits that work with your natural style. \
             They're designed to help you {}.",
            self.personality,
            goals.join(" and ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personalization_note_names_personality_and_two_goals() {
        let profile = UserProfile {
            name: "Sam".to_string(),
            personality: Personality::Creative,
            goals: vec![Goal::BeMoreCreative, Goal::ReduceStress, Goal::MoveMore],
            preferences: vec![TimeSlot::LunchBreaks],
        };
        let note = profile.personalization_note();
        assert!(note.contains("creative"));
        assert!(note.contains("be more creative and reduce stress"));
        assert!(!note.contains("move more"));
    }
}
