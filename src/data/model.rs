use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Labels used by the worksheet queries
// ---------------------------------------------------------------------------

pub const MALE: &str = "male";
pub const FEMALE: &str = "female";
pub const BLUE: &str = "blue";

/// Integer sample with repeats, used by the deduplication demo.
pub const SAMPLE_SEQUENCE: [i64; 11] = [1, 2, 1, 5, 2, 1, 6, 3, 6, 7, 2];

// ---------------------------------------------------------------------------
// Character – one row of the roster
// ---------------------------------------------------------------------------

/// A single character record.
///
/// `eye_color` and `gender` are free text; nothing constrains them to a
/// fixed set of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub name: String,
    /// Height in centimetres.
    pub height: u32,
    /// Mass in kilograms.
    pub mass: f64,
    pub eye_color: String,
    pub gender: String,
}

impl Character {
    pub fn new(name: &str, height: u32, mass: f64, eye_color: &str, gender: &str) -> Self {
        Self {
            name: name.to_string(),
            height,
            mass,
            eye_color: eye_color.to_string(),
            gender: gender.to_string(),
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cm, {} kg)", self.name, self.height, self.mass)
    }
}

/// Reduced view of a character: name and height only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameAndHeight {
    pub name: String,
    pub height: u32,
}

// ---------------------------------------------------------------------------
// Roster – the ordered dataset
// ---------------------------------------------------------------------------

/// The ordered sequence of characters every query reads from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    pub characters: Vec<Character>,
}

impl Roster {
    pub fn new(characters: Vec<Character>) -> Self {
        Roster { characters }
    }

    /// The built-in four-character roster, in its original order.
    pub fn starter() -> Self {
        Roster::new(vec![
            Character::new("Luke Skywalker", 172, 77.0, "blue", MALE),
            Character::new("Darth Vader", 202, 136.0, "yellow", MALE),
            Character::new("Leia Organa", 150, 49.0, "brown", FEMALE),
            Character::new("Anakin Skywalker", 188, 84.0, "blue", MALE),
        ])
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.characters.iter()
    }

    pub fn as_slice(&self) -> &[Character] {
        &self.characters
    }
}

impl From<Vec<Character>> for Roster {
    fn from(characters: Vec<Character>) -> Self {
        Roster::new(characters)
    }
}
