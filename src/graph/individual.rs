// Accumulator for the INDI record currently being read

use crate::graph::model::Individual;
use regex::Regex;
use std::sync::LazyLock;

/// First four-digit year between 1000 and 3999
static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[1-3][0-9]{3}").expect("valid year pattern"));

/// Holds at most one individual while its record is open
#[derive(Debug, Default)]
pub struct IndividualBuilder {
    current: Option<Individual>,
}

impl IndividualBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new individual, returning the one that was still open
    pub fn begin(&mut self, id: &str) -> Option<Individual> {
        self.current.replace(Individual::new(id))
    }

    /// Close the open individual, if any
    pub fn finish(&mut self) -> Option<Individual> {
        self.current.take()
    }

    pub fn set_name(&mut self, raw: Option<&str>) {
        if let Some(current) = self.current.as_mut() {
            current.name = raw.and_then(clean_name);
        }
    }

    /// Apply a birth date; dates without a recognizable year change nothing
    pub fn set_birth(&mut self, date: Option<&str>) {
        let Some(current) = self.current.as_mut() else {
            return;
        };
        match date.and_then(extract_birth_year) {
            Some(year) => current.birth_year = Some(year),
            None => log::debug!("no birth year for {} in {:?}", current.id, date),
        }
    }
}

/// Strip GEDCOM surname slashes and surrounding whitespace
pub fn clean_name(raw: &str) -> Option<String> {
    let name = raw.replace('/', "");
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Extract the first year in 1000..=3999 from a GEDCOM date value
pub fn extract_birth_year(date: &str) -> Option<i32> {
    RE_YEAR.find(date).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("John /Smith/"), Some("John Smith".to_string()));
        assert_eq!(clean_name("/Smith/"), Some("Smith".to_string()));
        assert_eq!(clean_name("  Anna  "), Some("Anna".to_string()));
        assert_eq!(clean_name("//"), None);
    }

    #[test]
    fn test_extract_birth_year() {
        assert_eq!(extract_birth_year("1 JAN 1950"), Some(1950));
        assert_eq!(extract_birth_year("ABT 1820"), Some(1820));
        assert_eq!(extract_birth_year("BET 1801 AND 1805"), Some(1801));
        assert_eq!(extract_birth_year("12 MAR 0950"), None);
        assert_eq!(extract_birth_year("unknown"), None);
    }

    #[test]
    fn test_begin_returns_previous() {
        let mut builder = IndividualBuilder::new();
        assert!(builder.begin("@I1@").is_none());
        builder.set_name(Some("Anna /A/"));

        let previous = builder.begin("@I2@").unwrap();
        assert_eq!(previous.id, "@I1@");
        assert_eq!(previous.name.as_deref(), Some("Anna A"));

        let last = builder.finish().unwrap();
        assert_eq!(last.id, "@I2@");
        assert!(builder.finish().is_none());
    }

    #[test]
    fn test_birth_year_kept_when_date_has_none() {
        let mut builder = IndividualBuilder::new();
        builder.begin("@I1@");
        builder.set_birth(Some("1 JAN 1950"));
        builder.set_birth(Some("unknown"));
        builder.set_birth(None);
        assert_eq!(builder.finish().unwrap().birth_year, Some(1950));
    }

    #[test]
    fn test_fields_ignored_without_open_record() {
        let mut builder = IndividualBuilder::new();
        builder.set_name(Some("Nobody"));
        builder.set_birth(Some("1900"));
        assert!(builder.finish().is_none());
    }
}
