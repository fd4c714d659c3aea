use super::model::{Character, Roster, BLUE, MALE};

// ---------------------------------------------------------------------------
// Universal / existential checks
// ---------------------------------------------------------------------------

/// True iff every character satisfies `predicate`. Stops at the first failure.
/// An empty roster is vacuously true.
pub fn every<F>(roster: &Roster, predicate: F) -> bool
where
    F: Fn(&Character) -> bool,
{
    roster.iter().all(predicate)
}

/// True iff at least one character satisfies `predicate`. Stops at the first
/// match. An empty roster is false.
pub fn some<F>(roster: &Roster, predicate: F) -> bool
where
    F: Fn(&Character) -> bool,
{
    roster.iter().any(predicate)
}

pub fn all_blue_eyed(roster: &Roster) -> bool {
    every(roster, |c| c.eye_color == BLUE)
}

pub fn all_heavier_than(roster: &Roster, mass: f64) -> bool {
    every(roster, |c| c.mass > mass)
}

pub fn all_shorter_than(roster: &Roster, height: u32) -> bool {
    every(roster, |c| c.height < height)
}

pub fn all_male(roster: &Roster) -> bool {
    every(roster, |c| c.gender == MALE)
}

pub fn any_male(roster: &Roster) -> bool {
    some(roster, |c| c.gender == MALE)
}

pub fn any_blue_eyed(roster: &Roster) -> bool {
    some(roster, |c| c.eye_color == BLUE)
}

pub fn any_taller_than(roster: &Roster, height: u32) -> bool {
    some(roster, |c| c.height > height)
}

pub fn any_lighter_than(roster: &Roster, mass: f64) -> bool {
    some(roster, |c| c.mass < mass)
}
