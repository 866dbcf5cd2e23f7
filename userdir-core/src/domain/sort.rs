//! Sort keys and the locale-aware string comparison used to order rows

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::User;

/// Record attribute the directory is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Email,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Email => "email",
        }
    }

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Email => "Email",
        }
    }

    /// The value of this field on a user
    pub fn key<'a>(&self, user: &'a User) -> &'a str {
        match self {
            SortField::Name => &user.name,
            SortField::Email => &user.email,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "email" => Ok(SortField::Email),
            other => Err(format!("Unknown sort field '{}' (expected name or email)", other)),
        }
    }
}

/// Ordering applied after the field comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply the direction to an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Locale-aware string comparison
///
/// Orders strings the way the root collation does: first by base letters
/// (ignoring accents and case, with punctuation before digits before
/// letters), then by accents, then by case with lowercase first. Strings
/// that tie on every level fall back to their code points.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// ASCII punctuation and symbols in root collation order
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Punctuation,
    Digit,
    Letter,
}

/// Tertiary weight of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Case {
    Lower,
    /// Expansions such as `ß` -> `ss` sort after the plain spelling
    Variant,
    Upper,
}

/// Multi-level sort key; field order is comparison order
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: Vec<(CharClass, u32)>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<Case>,
    identical: String,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        let mut key = Self {
            primary: Vec::new(),
            secondary: Vec::new(),
            tertiary: Vec::new(),
            identical: text.to_string(),
        };

        for c in text.nfd() {
            if is_combining_mark(c) {
                match key.secondary.last_mut() {
                    Some(marks) => marks.push(c),
                    None => key.push(CharClass::Punctuation, c as u32, vec![c], Case::Lower),
                }
                continue;
            }

            let case = if c.is_uppercase() { Case::Upper } else { Case::Lower };
            for lower in c.to_lowercase() {
                if is_combining_mark(lower) {
                    if let Some(marks) = key.secondary.last_mut() {
                        marks.push(lower);
                        continue;
                    }
                }
                key.push_char(lower, case);
            }
        }

        key
    }

    fn push(&mut self, class: CharClass, weight: u32, marks: Vec<char>, case: Case) {
        self.primary.push((class, weight));
        self.secondary.push(marks);
        self.tertiary.push(case);
    }

    fn push_char(&mut self, c: char, case: Case) {
        let variant = if case == Case::Upper { Case::Upper } else { Case::Variant };

        match c {
            'ß' => {
                self.push_letter('s', Vec::new(), variant);
                self.push_letter('s', Vec::new(), variant);
            }
            'æ' => {
                self.push_letter('a', Vec::new(), variant);
                self.push_letter('e', Vec::new(), variant);
            }
            'œ' => {
                self.push_letter('o', Vec::new(), variant);
                self.push_letter('e', Vec::new(), variant);
            }
            'ø' => self.push_letter('o', vec!['\u{338}'], case),
            'ł' => self.push_letter('l', vec!['\u{338}'], case),
            'đ' | 'ð' => self.push_letter('d', vec!['\u{335}'], case),
            'ı' => self.push_letter('i', vec!['\u{335}'], case),
            _ => {
                let (class, weight) = classify(c);
                self.push(class, weight, Vec::new(), case);
            }
        }
    }

    fn push_letter(&mut self, base: char, marks: Vec<char>, case: Case) {
        self.push(CharClass::Letter, base as u32, marks, case);
    }
}

fn classify(c: char) -> (CharClass, u32) {
    if c.is_whitespace() {
        return (CharClass::Space, c as u32);
    }
    if let Some(digit) = c.to_digit(10) {
        return (CharClass::Digit, digit);
    }
    if c.is_numeric() {
        return (CharClass::Digit, 10 + c as u32);
    }
    if c.is_alphabetic() {
        return (CharClass::Letter, c as u32);
    }
    match PUNCTUATION_ORDER.chars().position(|p| p == c) {
        Some(rank) => (CharClass::Punctuation, rank as u32),
        None => (CharClass::Punctuation, PUNCTUATION_ORDER.len() as u32 + c as u32),
    }
}
