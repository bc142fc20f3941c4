use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Personality
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Analytical,
    Spontaneous,
    Methodical,
    Creative,
}

impl Personality {
    pub fn all() -> &'static [Personality] {
        &[
            Personality::Analytical,
            Personality::Spontaneous,
            Personality::Methodical,
            Personality::Creative,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Personality::Analytical => "analytical",
            Personality::Spontaneous => "spontaneous",
            Personality::Methodical => "methodical",
            Personality::Creative => "creative",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Personality::Analytical => "Analytical",
            Personality::Spontaneous => "Spontaneous",
            Personality::Methodical => "Methodical",
            Personality::Creative => "Creative",
        }
    }

    /// Onboarding blurb shown under the label.
    pub fn describe(self) -> &'static str {
        match self {
            Personality::Analytical => "I like understanding the why behind things",
            Personality::Spontaneous => "I prefer to go with the flow",
            Personality::Methodical => "I like structure and clear steps",
            Personality::Creative => "I enjoy experimenting and trying new approaches",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Personality {
    type Err = crate::error::CuratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analytical" => Ok(Personality::Analytical),
            "spontaneous" => Ok(Personality::Spontaneous),
            "methodical" => Ok(Personality::Methodical),
            "creative" => Ok(Personality::Creative),
            _ => Err(crate::error::CuratorError::InvalidPersonality(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Creativity,
    Movement,
    Connection,
    Mindfulness,
    Learning,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Creativity => "creativity",
            Category::Movement => "movement",
            Category::Connection => "connection",
            Category::Mindfulness => "mindfulness",
            Category::Learning => "learning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::error::CuratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creativity" => Ok(Category::Creativity),
            "movement" => Ok(Category::Movement),
            "connection" => Ok(Category::Connection),
            "mindfulness" => Ok(Category::Mindfulness),
            "learning" => Ok(Category::Learning),
            _ => Err(crate::error::CuratorError::InvalidCategory(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Goal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FeelMoreEnergized,
    ReduceStress,
    BeMoreCreative,
    ConnectWithOthers,
    StayFocused,
    BuildConfidence,
    SleepBetter,
    MoveMore,
    LearnNewThings,
}

impl Goal {
    pub fn all() -> &'static [Goal] {
        &[
            Goal::FeelMoreEnergized,
            Goal::ReduceStress,
            Goal::BeMoreCreative,
            Goal::ConnectWithOthers,
            Goal::StayFocused,
            Goal::BuildConfidence,
            Goal::SleepBetter,
            Goal::MoveMore,
            Goal::LearnNewThings,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::FeelMoreEnergized => "feel_more_energized",
            Goal::ReduceStress => "reduce_stress",
            Goal::BeMoreCreative => "be_more_creative",
            Goal::ConnectWithOthers => "connect_with_others",
            Goal::StayFocused => "stay_focused",
            Goal::BuildConfidence => "build_confidence",
            Goal::SleepBetter => "sleep_better",
            Goal::MoveMore => "move_more",
            Goal::LearnNewThings => "learn_new_things",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::FeelMoreEnergized => "Feel more energized",
            Goal::ReduceStress => "Reduce stress",
            Goal::BeMoreCreative => "Be more creative",
            Goal::ConnectWithOthers => "Connect with others",
            Goal::StayFocused => "Stay focused",
            Goal::BuildConfidence => "Build confidence",
            Goal::SleepBetter => "Sleep better",
            Goal::MoveMore => "Move more",
            Goal::LearnNewThings => "Learn new things",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Goal {
    type Err = crate::error::CuratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::all()
            .iter()
            .find(|g| g.as_str() == s || g.label() == s)
            .copied()
            .ok_or_else(|| crate::error::CuratorError::InvalidGoal(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// TimeSlot
// ---------------------------------------------------------------------------

/// A tiny pocket of time the user says they have available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    MorningCoffee,
    LunchBreaks,
    Commuting,
    BeforeBed,
    WaitingInLines,
    BetweenMeetings,
    WeekendMornings,
    WalkingTheDog,
}

impl TimeSlot {
    pub fn all() -> &'static [TimeSlot] {
        &[
            TimeSlot::MorningCoffee,
            TimeSlot::LunchBreaks,
            TimeSlot::Commuting,
            TimeSlot::BeforeBed,
            TimeSlot::WaitingInLines,
            TimeSlot::BetweenMeetings,
            TimeSlot::WeekendMornings,
            TimeSlot::WalkingTheDog,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeSlot::MorningCoffee => "morning_coffee",
            TimeSlot::LunchBreaks => "lunch_breaks",
            TimeSlot::Commuting => "commuting",
            TimeSlot::BeforeBed => "before_bed",
            TimeSlot::WaitingInLines => "waiting_in_lines",
            TimeSlot::BetweenMeetings => "between_meetings",
            TimeSlot::WeekendMornings => "weekend_mornings",
            TimeSlot::WalkingTheDog => "walking_the_dog",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::MorningCoffee => "Morning coffee time",
            TimeSlot::LunchBreaks => "Lunch breaks",
            TimeSlot::Commuting => "Commuting",
            TimeSlot::BeforeBed => "Before bed",
            TimeSlot::WaitingInLines => "Waiting in lines",
            TimeSlot::BetweenMeetings => "Between meetings",
            TimeSlot::WeekendMornings => "Weekend mornings",
            TimeSlot::WalkingTheDog => "Walking the dog",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = crate::error::CuratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::all()
            .iter()
            .find(|t| t.as_str() == s || t.label() == s)
            .copied()
            .ok_or_else(|| crate::error::CuratorError::InvalidTimeSlot(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn personality_roundtrip() {
        for p in Personality::all() {
            let parsed = Personality::from_str(p.as_str()).unwrap();
            assert_eq!(*p, parsed);
        }
    }

    #[test]
    fn personality_rejects_unknown() {
        assert!(Personality::from_str("chaotic").is_err());
        assert!(Personality::from_str("").is_err());
    }

    #[test]
    fn goal_parses_snake_case_and_label() {
        assert_eq!(Goal::from_str("move_more").unwrap(), Goal::MoveMore);
        assert_eq!(Goal::from_str("Move more").unwrap(), Goal::MoveMore);
        assert!(Goal::from_str("win the lottery").is_err());
    }

    #[test]
    fn goal_vocabulary_complete() {
        assert_eq!(Goal::all().len(), 9);
    }

    #[test]
    fn time_slot_vocabulary_complete() {
        assert_eq!(TimeSlot::all().len(), 8);
        assert_eq!(
            TimeSlot::from_str("Walking the dog").unwrap(),
            TimeSlot::WalkingTheDog
        );
    }

    #[test]
    fn category_roundtrip() {
        for s in ["creativity", "movement", "connection", "mindfulness", "learning"] {
            assert_eq!(Category::from_str(s).unwrap().as_str(), s);
        }
    }
}
