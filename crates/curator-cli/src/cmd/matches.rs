use crate::output::{print_json, print_table};
use curator_core::catalog::{Catalog, HabitRecord};
use curator_core::profile::UserProfile;
use curator_core::recommend::Recommendation;
use curator_core::types::{Goal, Personality, TimeSlot};

pub fn run(
    catalog: &Catalog,
    name: String,
    personality: Personality,
    goals: Vec<Goal>,
    preferences: Vec<TimeSlot>,
    json: bool,
) -> anyhow::Result<()> {
    let profile = UserProfile {
        name,
        personality,
        goals,
        preferences,
    };
    let rec = Recommendation::for_profile(catalog, &profile);

    if json {
        #[derive(serde::Serialize)]
        struct MatchOutput<'a> {
            personality: Personality,
            goals: &'a [Goal],
            current: &'a [HabitRecord],
            suggested: &'a [HabitRecord],
        }
        return print_json(&MatchOutput {
            personality: profile.personality,
            goals: &profile.goals,
            current: &rec.current,
            suggested: &rec.suggested,
        });
    }

    // -- Human-readable output ------------------------------------------------

    if rec.current.is_empty() {
        println!("No habits match this profile.");
        return Ok(());
    }

    println!("Today's micro-habits:");
    print_table(&["ID", "DURATION", "TITLE"], &habit_rows(&rec.current));

    if !rec.suggested.is_empty() {
        println!("\nMore habits curated for you:");
        print_table(&["ID", "DURATION", "TITLE"], &habit_rows(&rec.suggested));
    }

    println!("\nWhy these habits? {}", profile.personalization_note());
    Ok(())
}

fn habit_rows(habits: &[HabitRecord]) -> Vec<Vec<String>> {
    habits
        .iter()
        .map(|h| vec![h.id.clone(), h.duration.clone(), h.title.clone()])
        .collect()
}
