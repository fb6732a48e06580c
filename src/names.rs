// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Credit value name handling.
//!
//! The value side of a credit line like `Violin: Jane Doe, John Doe (Strings
//! Inc., Tokyo)` lists one or more names separated by commas. Commas that sit
//! inside parentheses belong to the name itself, so they never split.

/// Split a credit value into individual names.
///
/// An empty value has no names. A value without any comma is returned as-is
/// without trimming. Otherwise the value is split on every comma at
/// parenthesis depth zero, and each segment is trimmed.
///
/// Unbalanced parentheses are not rejected. A stray `)` drives the depth
/// negative, which suppresses splitting until the depth returns to zero.
pub fn split_into_names(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }

    if !value.contains(',') {
        return vec![value.to_owned()];
    }

    let mut names = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    for (idx, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                names.push(value[start..idx].trim().to_owned());
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    names.push(value[start..].trim().to_owned());

    names
}

/// Join names for human consumption, e.g., "A, B and C".
///
/// Return `None` if there are no names to join.
pub fn pretty_names(names: &[String]) -> Option<String> {
    match names {
        [] => None,
        [name] => Some(name.clone()),
        [head @ .., last] => Some(format!("{} and {}", head.join(", "), last)),
    }
}
