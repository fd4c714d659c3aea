use std::collections::BTreeMap;

use super::model::Roster;

// ---------------------------------------------------------------------------
// Aggregates: one left-to-right fold from an explicit seed
// ---------------------------------------------------------------------------

/// Sum of every mass, seeded at zero.
pub fn total_mass(roster: &Roster) -> f64 {
    roster.iter().fold(0.0, |acc, c| acc + c.mass)
}

/// Sum of every height, seeded at zero.
pub fn total_height(roster: &Roster) -> u32 {
    roster.iter().fold(0, |acc, c| acc + c.height)
}

/// Number of characters per eye colour.
///
/// Starts from an empty map; the first sighting of a colour inserts it with a
/// count of one, later sightings increment.
pub fn count_by_eye_color(roster: &Roster) -> BTreeMap<String, usize> {
    roster.iter().fold(BTreeMap::new(), |mut acc, c| {
        *acc.entry(c.eye_color.clone()).or_insert(0) += 1;
        acc
    })
}

/// Total character count across all full names (Unicode scalar values).
pub fn total_name_chars(roster: &Roster) -> usize {
    roster.iter().fold(0, |acc, c| acc + c.name.chars().count())
}
