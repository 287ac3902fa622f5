//! Startup seed data for the activity catalog.
//!
//! The built-in list mirrors the school's standing catalog; operators
//! can point `seed_file` at a JSON array with the same shape instead.

use anyhow::{Context, Result};
use log::info;
use roster_core::{Activity, Catalog};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One catalog entry as it appears in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl SeedActivity {
    fn new(
        name: &str,
        description: &str,
        schedule: &str,
        max_participants: usize,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// The built-in school catalog.
pub fn default_activities() -> Vec<SeedActivity> {
    vec![
        SeedActivity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        SeedActivity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        SeedActivity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        SeedActivity::new(
            "Tennis Club",
            "Practice tennis skills and play friendly matches",
            "Wednesdays, 3:30 PM - 5:00 PM",
            10,
            &["liam@mergington.edu"],
        ),
        SeedActivity::new(
            "Art Studio",
            "Painting, drawing and mixed media projects",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "isabella@mergington.edu"],
        ),
        SeedActivity::new(
            "Basketball Team",
            "Team practice and interscholastic games",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            15,
            &["noah@mergington.edu", "mia@mergington.edu"],
        ),
    ]
}

/// Reads a seed file: a JSON array of [`SeedActivity`] entries.
pub fn load(path: &Path) -> Result<Vec<SeedActivity>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let entries: Vec<SeedActivity> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    Ok(entries)
}

/// Builds the catalog from seed entries, refusing bad data outright
/// rather than serving a partial catalog.
pub fn build_catalog(entries: Vec<SeedActivity>) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    for entry in entries {
        let name = entry.name;
        let activity = Activity::new(entry.description, entry.schedule, entry.max_participants)
            .with_participants(entry.participants);
        catalog
            .seed(name.clone(), activity)
            .with_context(|| format!("Rejected seed entry '{}'", name))?;
    }
    info!("Seed: catalog ready with {} activities", catalog.len());
    Ok(catalog)
}
