use crate::error::{CuratorError, Result};
use crate::types::{Category, Goal, Personality};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// HabitRecord
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub science_note: String,
    pub category: Category,
    pub personality_tags: Vec<Personality>,
    pub goal_tags: Vec<Goal>,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Ordered, read-only collection of habit records. Order is meaningful:
/// recommendation output preserves it. The on-disk form is a bare YAML list
/// of records.
#[derive(Debug, Clone)]
pub struct Catalog {
    habits: Vec<HabitRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and records missing either
    /// kind of tag. An untagged record could never match any profile.
    pub fn new(habits: Vec<HabitRecord>) -> Result<Self> {
        if habits.is_empty() {
            return Err(CuratorError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for h in &habits {
            if !seen.insert(h.id.as_str()) {
                return Err(CuratorError::DuplicateHabitId(h.id.clone()));
            }
            if h.personality_tags.is_empty() || h.goal_tags.is_empty() {
                return Err(CuratorError::MissingTags(h.id.clone()));
            }
        }
        Ok(Self { habits })
    }

    /// Load a catalog from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let habits: Vec<HabitRecord> = serde_yaml::from_str(&data)?;
        Self::new(habits)
    }

    pub fn habits(&self) -> &[HabitRecord] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&HabitRecord> {
        self.habits
            .iter()
            .find(|h| h.id == id)
            .ok_or_else(|| CuratorError::HabitNotFound(id.to_string()))
    }

    /// The built-in five-record catalog.
    pub fn builtin() -> Self {
        let habits = vec![
            HabitRecord {
                id: "doodle-lunch".to_string(),
                title: "Doodle after lunch".to_string(),
                description: "Spend 2 minutes doodling whatever comes to mind".to_string(),
                duration: "2 min".to_string(),
                science_note: "Enhances creativity and reduces afternoon stress".to_string(),
                category: Category::Creativity,
                personality_tags: vec![Personality::Creative, Personality::Spontaneous],
                goal_tags: vec![Goal::BeMoreCreative, Goal::ReduceStress],
            },
            HabitRecord {
                id: "one-leg-brush".to_string(),
                title: "Stand on one leg while brushing teeth".to_string(),
                description: "Alternate legs each day for balance practice".to_string(),
                duration: "2 min".to_string(),
                science_note: "Improves balance and proprioception".to_string(),
                category: Category::Movement,
                personality_tags: vec![Personality::Methodical, Personality::Analytical],
                goal_tags: vec![Goal::MoveMore, Goal::FeelMoreEnergized],
            },
            HabitRecord {
                id: "thursday-text".to_string(),
                title: "Text a friend every Thursday".to_string(),
                description: "Send a quick \"thinking of you\" message".to_string(),
                duration: "1 min".to_string(),
                science_note: "Strengthens social bonds and reduces loneliness".to_string(),
                category: Category::Connection,
                personality_tags: vec![Personality::Spontaneous, Personality::Creative],
                goal_tags: vec![Goal::ConnectWithOthers, Goal::FeelMoreEnergized],
            },
            HabitRecord {
                id: "coffee-gratitude".to_string(),
                title: "Name one thing you're grateful for with your morning coffee"
                    .to_string(),
                description: "Before your first sip, think of something good".to_string(),
                duration: "30 sec".to_string(),
                science_note: "Increases positive emotions and life satisfaction".to_string(),
                category: Category::Mindfulness,
                personality_tags: vec![Personality::Analytical, Personality::Methodical],
                goal_tags: vec![Goal::ReduceStress, Goal::BuildConfidence],
            },
            HabitRecord {
                id: "commute-podcast".to_string(),
                title: "Listen to a 5-minute educational podcast snippet".to_string(),
                description: "Queue up bite-sized learning for your commute".to_string(),
                duration: "5 min".to_string(),
                science_note: "Enhances neuroplasticity and knowledge retention".to_string(),
                category: Category::Learning,
                personality_tags: vec![Personality::Analytical, Personality::Methodical],
                goal_tags: vec![Goal::LearnNewThings, Goal::StayFocused],
            },
        ];

        // The built-in records are known-unique; construction cannot fail.
        Self { habits }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
