use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::model::{Character, NameAndHeight, Roster, SAMPLE_SEQUENCE};
use crate::data::sort::{self, SortKey};
use crate::data::{aggregate, check, filter, project};
use crate::dedup;

// ---------------------------------------------------------------------------
// Worksheet report
// ---------------------------------------------------------------------------

/// Every worksheet result, computed from one roster.
#[derive(Debug, Clone, Serialize)]
pub struct WorksheetReport {
    pub projections: Projections,
    pub aggregates: Aggregates,
    pub selections: Selections,
    pub sorts: Sorts,
    pub checks: Checks,
    pub dedup: Dedup,
}

#[derive(Debug, Clone, Serialize)]
pub struct Projections {
    pub names: Vec<String>,
    pub heights: Vec<u32>,
    pub names_and_heights: Vec<NameAndHeight>,
    pub first_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Aggregates {
    pub total_mass: f64,
    pub total_height: u32,
    pub by_eye_color: BTreeMap<String, usize>,
    pub total_name_chars: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Selections {
    pub heavier_than_100: Vec<Character>,
    pub shorter_than_200: Vec<Character>,
    pub males: Vec<Character>,
    pub females: Vec<Character>,
}

/// Independent sorts of the untouched roster, plus the same keys applied one
/// after another to a single working copy.
#[derive(Debug, Clone, Serialize)]
pub struct Sorts {
    pub independent: Vec<SortStage>,
    pub chained: Vec<SortStage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortStage {
    pub key: SortKey,
    pub characters: Vec<Character>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Checks {
    pub all_blue_eyes: bool,
    pub all_heavier_than_40: bool,
    pub all_shorter_than_200: bool,
    pub all_male: bool,
    pub any_male: bool,
    pub any_blue_eyes: bool,
    pub any_taller_than_210: bool,
    pub any_lighter_than_50: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dedup {
    pub input: Vec<i64>,
    pub by_first_index: Vec<i64>,
    pub by_accumulation: Vec<i64>,
}

fn owned(chars: Vec<&Character>) -> Vec<Character> {
    chars.into_iter().cloned().collect()
}

impl WorksheetReport {
    /// Run every worksheet query against `roster`.
    pub fn build(roster: &Roster) -> Self {
        let projections = Projections {
            names: project::names(roster),
            heights: project::heights(roster),
            names_and_heights: project::names_and_heights(roster),
            first_names: project::first_names(roster),
        };
        log::debug!("projections: first names {:?}", projections.first_names);

        let aggregates = Aggregates {
            total_mass: aggregate::total_mass(roster),
            total_height: aggregate::total_height(roster),
            by_eye_color: aggregate::count_by_eye_color(roster),
            total_name_chars: aggregate::total_name_chars(roster),
        };
        log::debug!(
            "aggregates: mass {} kg, height {} cm, eye colours {:?}",
            aggregates.total_mass,
            aggregates.total_height,
            aggregates.by_eye_color
        );

        let selections = Selections {
            heavier_than_100: owned(filter::heavier_than_100(roster)),
            shorter_than_200: owned(filter::shorter_than_200(roster)),
            males: owned(filter::males(roster)),
            females: owned(filter::females(roster)),
        };
        log::debug!(
            "selections: {} heavy, {} short, {} male, {} female",
            selections.heavier_than_100.len(),
            selections.shorter_than_200.len(),
            selections.males.len(),
            selections.females.len()
        );

        let independent = SortKey::ALL
            .iter()
            .map(|&key| SortStage {
                key,
                characters: sort::sorted(roster, key),
            })
            .collect();
        let chained = SortKey::ALL
            .iter()
            .zip(sort::chained(roster, &SortKey::ALL))
            .map(|(&key, characters)| SortStage { key, characters })
            .collect();
        let sorts = Sorts {
            independent,
            chained,
        };
        log::debug!("sorts: {} keys, independent and chained", SortKey::ALL.len());

        let checks = Checks {
            all_blue_eyes: check::all_blue_eyed(roster),
            all_heavier_than_40: check::all_heavier_than(roster, 40.0),
            all_shorter_than_200: check::all_shorter_than(roster, 200),
            all_male: check::all_male(roster),
            any_male: check::any_male(roster),
            any_blue_eyes: check::any_blue_eyed(roster),
            any_taller_than_210: check::any_taller_than(roster, 210),
            any_lighter_than_50: check::any_lighter_than(roster, 50.0),
        };
        log::debug!("checks: {checks:?}");

        let dedup = Dedup {
            input: SAMPLE_SEQUENCE.to_vec(),
            by_first_index: dedup::dedup_by_first_index(&SAMPLE_SEQUENCE),
            by_accumulation: dedup::dedup_by_accumulation(&SAMPLE_SEQUENCE),
        };
        if dedup.by_first_index != dedup.by_accumulation {
            log::warn!(
                "dedup strategies disagree: {:?} vs {:?}",
                dedup.by_first_index,
                dedup.by_accumulation
            );
        }

        log::info!(
            "worksheet built for {} characters ({} distinct sample values)",
            roster.len(),
            dedup.by_first_index.len()
        );

        WorksheetReport {
            projections,
            aggregates,
            selections,
            sorts,
            checks,
            dedup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(chars: &[Character]) -> Vec<&str> {
        chars.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn starter_report_matches_worksheet_answers() {
        let report = WorksheetReport::build(&Roster::starter());

        assert_eq!(report.projections.heights, [172, 202, 150, 188]);
        assert_eq!(report.aggregates.total_mass, 346.0);
        assert_eq!(report.aggregates.total_height, 712);
        assert_eq!(report.aggregates.total_name_chars, 52);
        assert_eq!(names(&report.selections.heavier_than_100), ["Darth Vader"]);
        assert_eq!(names(&report.selections.females), ["Leia Organa"]);

        let c = &report.checks;
        assert!(!c.all_blue_eyes && c.all_heavier_than_40 && !c.all_shorter_than_200 && !c.all_male);
        assert!(c.any_male && c.any_blue_eyes && !c.any_taller_than_210 && c.any_lighter_than_50);

        assert_eq!(report.dedup.by_first_index, [1, 2, 5, 6, 3, 7]);
        assert_eq!(report.dedup.by_first_index, report.dedup.by_accumulation);
    }

    #[test]
    fn independent_and_chained_sorts_differ_only_where_ties_inherit() {
        let report = WorksheetReport::build(&Roster::starter());
        let independent = &report.sorts.independent;
        let chained = &report.sorts.chained;

        assert_eq!(independent.len(), 4);
        assert_eq!(chained.len(), 4);
        for (a, b) in independent.iter().zip(chained).take(3) {
            assert_eq!(a.key, b.key);
            assert_eq!(a.characters, b.characters);
        }
        assert_eq!(
            names(&independent[3].characters),
            ["Leia Organa", "Luke Skywalker", "Darth Vader", "Anakin Skywalker"]
        );
        assert_eq!(
            names(&chained[3].characters),
            ["Leia Organa", "Anakin Skywalker", "Darth Vader", "Luke Skywalker"]
        );
    }

    #[test]
    fn report_serializes_to_json() {
        let report = WorksheetReport::build(&Roster::starter());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["aggregates"]["by_eye_color"]["blue"], 2);
        assert_eq!(json["sorts"]["independent"][0]["key"], "mass");
        assert_eq!(json["sorts"]["chained"][3]["key"], "gender_females_first");
        assert_eq!(json["projections"]["first_names"][3], "Anakin");
    }
}
