use std::fmt;

/// A human-readable race identifier derived from an office and an optional
/// district.
///
/// Two result rows describing the same contest derive the same label, which
/// is what deduplication keys on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RaceLabel(String);

impl RaceLabel {
    /// Derive the label for a result row.
    ///
    /// A non-empty district qualifies the office
    /// (`"State House - District 67"`); an empty district leaves the office
    /// name untouched.
    pub fn new(office: &str, district: &str) -> Self {
        if district.is_empty() {
            RaceLabel(office.to_string())
        } else {
            RaceLabel(format!("{office} - District {district}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RaceLabel> for String {
    fn from(val: RaceLabel) -> Self {
        val.0
    }
}
