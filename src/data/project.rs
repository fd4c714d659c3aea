use super::model::{NameAndHeight, Roster};

// ---------------------------------------------------------------------------
// Projections: one output per character, order preserved
// ---------------------------------------------------------------------------

/// All full names.
pub fn names(roster: &Roster) -> Vec<String> {
    roster.iter().map(|c| c.name.clone()).collect()
}

/// All heights.
pub fn heights(roster: &Roster) -> Vec<u32> {
    roster.iter().map(|c| c.height).collect()
}

/// Name and height of every character.
pub fn names_and_heights(roster: &Roster) -> Vec<NameAndHeight> {
    roster
        .iter()
        .map(|c| NameAndHeight {
            name: c.name.clone(),
            height: c.height,
        })
        .collect()
}

/// First token of every name, split on the first whitespace.
/// A single-word name comes back whole; an empty name comes back empty.
pub fn first_names(roster: &Roster) -> Vec<String> {
    roster
        .iter()
        .map(|c| c.name.split(char::is_whitespace).next().unwrap_or("").to_string())
        .collect()
}
