//! Sequential name generation: `bone_1`, `bone_2`, ... or `Row_A` ... `Row_AA`.

use serde::{Deserialize, Serialize};

const DEFAULT_START: &str = "1";

/// Counting direction over the selected entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Top of the table gets the first value.
    #[default]
    Down,
    /// Bottom of the table gets the first value.
    Up,
}

/// User input for one sequence application. Consumed when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSpec {
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub last: String,
    #[serde(default)]
    pub direction: Direction,
}

impl SequenceSpec {
    pub fn new(base: impl Into<String>, start: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            start: start.into(),
            last: last.into(),
            direction: Direction::Down,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Name for the entry at `index` (0-based, in counting order).
    pub fn name_at(&self, index: usize) -> String {
        generate_sequence(&self.base, &self.start, index, &self.last)
    }
}

/// Produce the `index`-th name of a sequence.
///
/// `start` decides the counter style:
/// - all digits: decimal counting from that value (leading zeros are dropped)
/// - one ASCII letter: spreadsheet-style letters, `A..Z, AA, AB, ...`, keeping
///   the letter's case
/// - anything else: decimal counting from 1, `start` itself is ignored
///
/// `base` and `last` are concatenated around the counter as given.
pub fn generate_sequence(base: &str, start: &str, index: usize, last: &str) -> String {
    let start = match start.trim() {
        "" => DEFAULT_START,
        trimmed => trimmed,
    };

    let core = if start.bytes().all(|b| b.is_ascii_digit()) {
        add_decimal(start, index)
    } else if let Some(letter) = single_ascii_letter(start) {
        let offset = (letter.to_ascii_uppercase() as u8 - b'A') as u128;
        let letters = index_to_letters(offset + index as u128);
        if letter.is_ascii_lowercase() {
            letters.to_ascii_lowercase()
        } else {
            letters
        }
    } else {
        (index as u128 + 1).to_string()
    };

    format!("{}{}{}", base, core, last)
}

fn single_ascii_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

/// Zero-based index to spreadsheet column letters: 0 → A, 25 → Z, 26 → AA.
fn index_to_letters(index: u128) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push(b'A' + rem);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Add `addend` to a decimal digit string of any length.
fn add_decimal(digits: &str, addend: usize) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(digits.len() + 1);
    let mut carry = addend as u128;

    for b in digits.bytes().rev() {
        let sum = (b - b'0') as u128 + carry;
        out.push(b'0' + (sum % 10) as u8);
        carry = sum / 10;
    }
    while carry > 0 {
        out.push(b'0' + (carry % 10) as u8);
        carry /= 10;
    }

    while out.len() > 1 && out.last() == Some(&b'0') {
        out.pop();
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
