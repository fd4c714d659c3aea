use super::model::{Character, Roster, FEMALE, MALE};

// ---------------------------------------------------------------------------
// Selections: characters passing a predicate, in roster order
// ---------------------------------------------------------------------------

/// Return the characters that satisfy `predicate`, borrowed from the roster.
///
/// The result is always a subsequence of the roster:
/// * relative order is preserved
/// * the roster itself is never modified
/// * no match → empty vector
pub fn select<F>(roster: &Roster, predicate: F) -> Vec<&Character>
where
    F: Fn(&Character) -> bool,
{
    roster.iter().filter(|c| predicate(*c)).collect()
}

/// Characters whose mass is strictly greater than `mass`.
pub fn heavier_than(roster: &Roster, mass: f64) -> Vec<&Character> {
    select(roster, |c| c.mass > mass)
}

/// Characters whose height is strictly less than `height`.
pub fn shorter_than(roster: &Roster, height: u32) -> Vec<&Character> {
    select(roster, |c| c.height < height)
}

/// Characters whose gender label equals `gender` exactly.
pub fn with_gender<'a>(roster: &'a Roster, gender: &str) -> Vec<&'a Character> {
    select(roster, |c| c.gender == gender)
}

pub fn heavier_than_100(roster: &Roster) -> Vec<&Character> {
    heavier_than(roster, 100.0)
}

pub fn shorter_than_200(roster: &Roster) -> Vec<&Character> {
    shorter_than(roster, 200)
}

pub fn males(roster: &Roster) -> Vec<&Character> {
    with_gender(roster, MALE)
}

pub fn females(roster: &Roster) -> Vec<&Character> {
    with_gender(roster, FEMALE)
}
