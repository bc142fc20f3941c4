use crate::output::{print_json, print_kv, print_table};
use anyhow::Context;
use clap::Subcommand;
use curator_core::catalog::{Catalog, HabitRecord};

#[derive(Subcommand)]
pub enum CatalogSubcommand {
    /// List all habit records
    List,
    /// Show one habit record
    Show { id: String },
}

pub fn run(catalog: &Catalog, subcmd: CatalogSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        CatalogSubcommand::List => list(catalog, json),
        CatalogSubcommand::Show { id } => show(catalog, &id, json),
    }
}

fn list(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&catalog.habits());
    }

    let rows: Vec<Vec<String>> = catalog
        .habits()
        .iter()
        .map(|h| {
            vec![
                h.id.clone(),
                h.category.to_string(),
                h.duration.clone(),
                h.title.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "CATEGORY", "DURATION", "TITLE"], &rows);
    Ok(())
}

fn show(catalog: &Catalog, id: &str, json: bool) -> anyhow::Result<()> {
    let habit = catalog
        .get(id)
        .with_context(|| format!("no such habit '{id}'"))?;

    if json {
        return print_json(habit);
    }

    print_kv(&record_pairs(habit));
    Ok(())
}

fn record_pairs(h: &HabitRecord) -> Vec<(&'static str, String)> {
    vec![
        ("id", h.id.clone()),
        ("title", h.title.clone()),
        ("description", h.description.clone()),
        ("duration", h.duration.clone()),
        ("science", h.science_note.clone()),
        ("category", h.category.to_string()),
        (
            "personalities",
            h.personality_tags
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        (
            "goals",
            h.goal_tags
                .iter()
                .map(|g| g.label())
                .collect::<Vec<_>>()
                .join(", "),
        ),
    ]
}
