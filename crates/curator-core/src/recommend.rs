use crate::catalog::{Catalog, HabitRecord};
use crate::profile::UserProfile;
use serde::{Deserialize, Serialize};

/// How many matched habits become the active working set; the rest are
/// offered as suggestions.
pub const CURRENT_LIMIT: usize = 3;

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// The derived split of the catalog for one profile. Computed once when the
/// dashboard is entered, not on every render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub current: Vec<HabitRecord>,
    pub suggested: Vec<HabitRecord>,
}

impl Recommendation {
    /// Filter the catalog for habits matching the profile, preserving catalog
    /// order. A habit matches when the profile's personality appears in its
    /// personality tags OR any of its goal tags is one of the profile's goals.
    ///
    /// The first [`CURRENT_LIMIT`] matches become `current`; the remainder are
    /// `suggested`. Fewer matches than the limit is fine: `suggested` is then
    /// empty and nothing is backfilled from unmatched habits.
    pub fn for_profile(catalog: &Catalog, profile: &UserProfile) -> Self {
        let mut matched: Vec<HabitRecord> = catalog
            .habits()
            .iter()
            .filter(|h| {
                h.personality_tags.contains(&profile.personality)
                    || h.goal_tags.iter().any(|g| profile.goals.contains(g))
            })
            .cloned()
            .collect();

        let suggested = matched.split_off(matched.len().min(CURRENT_LIMIT));
        tracing::debug!(
            personality = %profile.personality,
            current = matched.len(),
            suggested = suggested.len(),
            "matched habits"
        );
        Self {
            current: matched,
            suggested,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Goal, Personality, TimeSlot};

    fn profile(personality: Personality, goals: &[Goal]) -> UserProfile {
        UserProfile {
            name: "Sam".to_string(),
            personality,
            goals: goals.to_vec(),
            preferences: vec![TimeSlot::LunchBreaks],
        }
    }

    fn ids(records: &[HabitRecord]) -> Vec<&str> {
        records.iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn creative_profile_matches_in_catalog_order() {
        let catalog = Catalog::builtin();
        let rec = Recommendation::for_profile(
            &catalog,
            &profile(Personality::Creative, &[Goal::BeMoreCreative]),
        );
        // doodle-lunch and thursday-text both carry the creative tag.
        assert_eq!(ids(&rec.current), ["doodle-lunch", "thursday-text"]);
        assert!(rec.suggested.is_empty());
    }

    #[test]
    fn personality_or_goal_not_and() {
        let catalog = Catalog::builtin();
        // one-leg-brush matches methodical by personality tag alone; its goal
        // tags overlap too, but the predicate must already pass on either arm.
        let rec = Recommendation::for_profile(
            &catalog,
            &profile(Personality::Methodical, &[Goal::MoveMore]),
        );
        assert!(ids(&rec.current).contains(&"one-leg-brush"));

        // Goal-only match: spontaneous personality is not on coffee-gratitude,
        // but build_confidence is one of its goal tags.
        let rec = Recommendation::for_profile(
            &catalog,
            &profile(Personality::Spontaneous, &[Goal::BuildConfidence]),
        );
        assert!(rec.suggested.iter().chain(rec.current.iter()).any(|h| h.id == "coffee-gratitude"));
    }

    #[test]
    fn splits_at_current_limit() {
        let catalog = Catalog::builtin();
        // Analytical matches one-leg-brush, coffee-gratitude, commute-podcast
        // by personality; reduce_stress also pulls in doodle-lunch.
        let rec = Recommendation::for_profile(
            &catalog,
            &profile(Personality::Analytical, &[Goal::ReduceStress]),
        );
        assert_eq!(rec.current.len(), CURRENT_LIMIT);
        assert_eq!(
            ids(&rec.current),
            ["doodle-lunch", "one-leg-brush", "coffee-gratitude"]
        );
        assert_eq!(ids(&rec.suggested), ["commute-podcast"]);
    }

    #[test]
    fn current_and_suggested_are_disjoint_and_cover_matches() {
        let catalog = Catalog::builtin();
        for p in Personality::all() {
            for g in Goal::all() {
                let rec = Recommendation::for_profile(&catalog, &profile(*p, &[*g]));
                let mut all = ids(&rec.current);
                all.extend(ids(&rec.suggested));
                let unique: std::collections::HashSet<&str> = all.iter().copied().collect();
                assert_eq!(unique.len(), all.len(), "overlap for {p}/{g}");

                // The union is exactly the match set, in catalog order.
                let expected: Vec<&str> = catalog
                    .habits()
                    .iter()
                    .filter(|h| {
                        h.personality_tags.contains(p) || h.goal_tags.contains(g)
                    })
                    .map(|h| h.id.as_str())
                    .collect();
                assert_eq!(all, expected, "match set mismatch for {p}/{g}");
            }
        }
    }

    #[test]
    fn no_match_yields_empty_lists() {
        // doodle-lunch is neither methodical nor tagged sleep_better.
        let one = Catalog::builtin().get("doodle-lunch").unwrap().clone();
        let tiny = Catalog::new(vec![one]).unwrap();
        let rec = Recommendation::for_profile(
            &tiny,
            &profile(Personality::Methodical, &[Goal::SleepBetter]),
        );
        assert!(rec.current.is_empty());
        assert!(rec.suggested.is_empty());
    }
}
