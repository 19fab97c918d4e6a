//! Heuristic column role detection
//!
//! A header is a candidate for a role when its lower-cased text contains
//! any keyword of that role's vocabulary. Roles are not exclusive.

use serde::Serialize;

/// Built-in keywords for vehicle (car) number columns
pub const DEFAULT_VEHICLE_KEYWORDS: &[&str] = &["车号", "车辆", "vehicle", "编号"];

/// Built-in keywords for car sequence (position in train) columns
pub const DEFAULT_SEQUENCE_KEYWORDS: &[&str] = &["辆序", "序号", "车厢", "seq", "序"];

/// Keyword sets for both roles, stored lower-cased
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    vehicle: Vec<String>,
    sequence: Vec<String>,
}

impl Vocabulary {
    pub fn new<V, S>(vehicle: V, sequence: S) -> Self
    where
        V: IntoIterator,
        V::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            vehicle: normalize_keywords(vehicle),
            sequence: normalize_keywords(sequence),
        }
    }

    pub fn vehicle(&self) -> &[String] {
        &self.vehicle
    }

    pub fn sequence(&self) -> &[String] {
        &self.sequence
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_VEHICLE_KEYWORDS, DEFAULT_SEQUENCE_KEYWORDS)
    }
}

fn normalize_keywords<I>(keywords: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Candidate columns for each role, in header order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnRoles {
    pub vehicle: Vec<String>,
    pub sequence: Vec<String>,
}

impl ColumnRoles {
    pub fn is_empty(&self) -> bool {
        self.vehicle.is_empty() && self.sequence.is_empty()
    }
}

/// Classify headers against both vocabularies
pub fn classify_columns<S: AsRef<str>>(headers: &[S], vocabulary: &Vocabulary) -> ColumnRoles {
    let mut roles = ColumnRoles::default();

    for header in headers {
        let header = header.as_ref();
        let folded = header.to_lowercase();

        if contains_any(&folded, &vocabulary.vehicle) {
            roles.vehicle.push(header.to_string());
        }
        if contains_any(&folded, &vocabulary.sequence) {
            roles.sequence.push(header.to_string());
        }
    }

    roles
}

fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}
