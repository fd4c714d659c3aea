use std::cmp::Ordering;

use serde::Serialize;

use super::model::{Character, Roster, MALE};

// ---------------------------------------------------------------------------
// Sort keys and their comparators
// ---------------------------------------------------------------------------

/// The orderings the worksheet demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Mass, ascending.
    Mass,
    /// Height, ascending.
    Height,
    /// Name, ascending byte-wise lexicographic.
    Name,
    /// Every `"male"` record after every other record.
    GenderFemalesFirst,
}

impl SortKey {
    /// Order in which the worksheet applies the keys.
    pub const ALL: [SortKey; 4] = [
        SortKey::Mass,
        SortKey::Height,
        SortKey::Name,
        SortKey::GenderFemalesFirst,
    ];

    /// Three-way comparison of two characters under this key.
    ///
    /// Always a total order: equal names or two records on the same side of
    /// the gender split compare `Equal`, and the stable sort keeps their
    /// incoming order.
    pub fn compare(self, a: &Character, b: &Character) -> Ordering {
        match self {
            SortKey::Mass => a.mass.total_cmp(&b.mass),
            SortKey::Height => a.height.cmp(&b.height),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::GenderFemalesFirst => (a.gender == MALE).cmp(&(b.gender == MALE)),
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Sorted copy of the roster. The roster itself is left as it was.
pub fn sorted(roster: &Roster, key: SortKey) -> Vec<Character> {
    let mut out = roster.characters.clone();
    out.sort_by(|a, b| key.compare(a, b));
    out
}

/// Reorder the roster itself.
pub fn sort_in_place(roster: &mut Roster, key: SortKey) {
    roster.characters.sort_by(|a, b| key.compare(a, b));
}

/// Apply `keys` one after another to a single working copy, snapshotting
/// each stage. Stage `n` starts from the output of stage `n - 1`, so ties
/// under a later key keep the order left by the earlier ones.
pub fn chained(roster: &Roster, keys: &[SortKey]) -> Vec<Vec<Character>> {
    let mut working = roster.clone();
    keys.iter()
        .map(|&key| {
            sort_in_place(&mut working, key);
            log::trace!("chained sort by {key:?}: {:?}", names(&working.characters));
            working.characters.clone()
        })
        .collect()
}

fn names(chars: &[Character]) -> Vec<&str> {
    chars.iter().map(|c| c.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::{fixtures, FEMALE};

    #[test]
    fn by_mass_ascending() {
        let out = sorted(&Roster::starter(), SortKey::Mass);
        assert_eq!(
            names(&out),
            ["Leia Organa", "Luke Skywalker", "Anakin Skywalker", "Darth Vader"]
        );
    }

    #[test]
    fn by_height_ascending() {
        let out = sorted(&Roster::starter(), SortKey::Height);
        assert_eq!(
            names(&out),
            ["Leia Organa", "Luke Skywalker", "Anakin Skywalker", "Darth Vader"]
        );
    }

    #[test]
    fn by_name_alphabetical() {
        let out = sorted(&Roster::starter(), SortKey::Name);
        assert_eq!(
            names(&out),
            ["Anakin Skywalker", "Darth Vader", "Leia Organa", "Luke Skywalker"]
        );
    }

    #[test]
    fn females_first_keeps_male_order() {
        let out = sorted(&Roster::starter(), SortKey::GenderFemalesFirst);
        assert_eq!(out[0].gender, FEMALE);
        assert_eq!(
            names(&out[1..]),
            ["Luke Skywalker", "Darth Vader", "Anakin Skywalker"]
        );
    }

    #[test]
    fn independent_sort_leaves_roster_unchanged() {
        let roster = Roster::starter();
        let _ = sorted(&roster, SortKey::Name);
        assert_eq!(roster, Roster::starter());
    }

    #[test]
    fn chained_gender_sort_inherits_name_order() {
        let stages = chained(&Roster::starter(), &SortKey::ALL);
        assert_eq!(stages.len(), 4);
        assert_eq!(
            names(&stages[2]),
            ["Anakin Skywalker", "Darth Vader", "Leia Organa", "Luke Skywalker"]
        );
        // Males follow Leia in the name order left by the previous stage,
        // not in the original roster order.
        assert_eq!(
            names(&stages[3]),
            ["Leia Organa", "Anakin Skywalker", "Darth Vader", "Luke Skywalker"]
        );
    }

    #[test]
    fn sort_in_place_mutates_roster() {
        let mut roster = Roster::starter();
        sort_in_place(&mut roster, SortKey::Mass);
        assert_eq!(roster.characters[0].name, "Leia Organa");
    }

    #[test]
    fn equal_names_keep_incoming_order() {
        let roster = Roster::new(vec![
            Character::new("Clone Trooper", 183, 80.0, "brown", MALE),
            Character::new("Boba Fett", 183, 78.0, "brown", MALE),
            Character::new("Clone Trooper", 183, 79.0, "brown", MALE),
        ]);
        let out = sorted(&roster, SortKey::Name);
        let masses: Vec<f64> = out.iter().map(|c| c.mass).collect();
        assert_eq!(masses, [78.0, 80.0, 79.0]);
    }

    proptest! {
        #[test]
        fn prop_sorted_is_ordered_permutation(roster in fixtures::roster()) {
            for key in SortKey::ALL {
                let out = sorted(&roster, key);
                prop_assert_eq!(out.len(), roster.len());
                for pair in out.windows(2) {
                    prop_assert_ne!(key.compare(&pair[0], &pair[1]), Ordering::Greater);
                }
                for c in roster.iter() {
                    let want = roster.iter().filter(|r| *r == c).count();
                    let got = out.iter().filter(|r| *r == c).count();
                    prop_assert_eq!(want, got);
                }
            }
        }
    }
}
