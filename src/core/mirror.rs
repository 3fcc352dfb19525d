//! Left/right mirroring of naming-convention tokens.
//!
//! `thigh.L` becomes `thigh.R`, `Left_Arm` becomes `Right_Arm`, `lt_hand`
//! becomes `rt_hand`. Tokens are only recognised as whole alphanumeric runs,
//! so `Leftover` or `Bolt` are never touched.

use regex::Regex;
use std::sync::LazyLock;

/// Multi-character laterality tokens, as `(left, right)` pairs.
///
/// Each casing is its own pair: `left` mirrors to `right`, `LEFT` to `RIGHT`.
const LONG_PAIRS: &[(&str, &str)] = &[
    // Order only matters for readability; the casings never overlap.
    ("Left", "Right"),
    ("left", "right"),
    ("LEFT", "RIGHT"),
    ("Lt", "Rt"),
    ("lt", "rt"),
    ("LT", "RT"),
    ("Lf", "Rf"),
    ("lf", "rf"),
    ("LF", "RF"),
];

/// Single-letter suffix tokens. Only swapped between a `SHORT_SEPARATORS`
/// character and another separator or the end of the name.
const SHORT_PAIRS: &[(&str, &str)] = &[("L", "R"), ("l", "r")];

const SHORT_SEPARATORS: &[char] = &['.', '_'];

// A token boundary is any non-alphanumeric ASCII character, so every candidate
// token is exactly one maximal alphanumeric run.
static ALNUM_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+").unwrap());

/// Mirror every left/right token in `name`.
///
/// Never fails: a name without laterality tokens comes back unchanged.
/// Every run is rewritten at most once, so applying `mirror` twice restores
/// the input.
pub fn mirror(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut last = 0;

    for run in ALNUM_RUN.find_iter(name) {
        out.push_str(&name[last..run.start()]);
        out.push_str(opposite(name, run.start(), run.end()).unwrap_or(run.as_str()));
        last = run.end();
    }

    out.push_str(&name[last..]);
    out
}

/// Whether `name` carries at least one token `mirror` would rewrite.
pub fn has_laterality(name: &str) -> bool {
    ALNUM_RUN
        .find_iter(name)
        .any(|run| opposite(name, run.start(), run.end()).is_some())
}

/// Mirrored form of the run `name[start..end]`, if it is a laterality token.
fn opposite(name: &str, start: usize, end: usize) -> Option<&'static str> {
    let token = &name[start..end];
    if let Some(swapped) = swap_in(LONG_PAIRS, token) {
        return Some(swapped);
    }

    let preceding = name[..start].chars().next_back();
    let following = name[end..].chars().next();
    let after_separator = preceding.is_some_and(|c| SHORT_SEPARATORS.contains(&c));
    let before_separator_or_end = following.map_or(true, |c| SHORT_SEPARATORS.contains(&c));

    if after_separator && before_separator_or_end {
        swap_in(SHORT_PAIRS, token)
    } else {
        None
    }
}

fn swap_in(pairs: &'static [(&'static str, &'static str)], token: &str) -> Option<&'static str> {
    pairs.iter().find_map(|&(left, right)| {
        if token == left {
            Some(right)
        } else if token == right {
            Some(left)
        } else {
            None
        }
    })
}
