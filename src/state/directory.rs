//! Country reference data: dialing codes and the cities offered per country

use serde::{Deserialize, Serialize};

/// One selectable country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    /// Dialing code including the leading `+`
    pub code: String,
    /// Cities in the order they are offered
    pub cities: Vec<String>,
}

impl CountryEntry {
    pub fn new(name: &str, code: &str, cities: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            cities: cities.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Ordered country list. Lookups are exact string matches on the name;
/// when a name appears twice the first entry wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryDirectory {
    entries: Vec<CountryEntry>,
}

impl CountryDirectory {
    pub fn new(entries: Vec<CountryEntry>) -> Self {
        Self { entries }
    }

    /// The five countries offered when no configuration overrides them
    pub fn builtin() -> Self {
        Self::new(vec![
            CountryEntry::new(
                "India",
                "+91",
                &[
                    "Mumbai",
                    "Delhi",
                    "Bangalore",
                    "Chennai",
                    "Kolkata",
                    "Hyderabad",
                    "Pune",
                    "Ahmedabad",
                ],
            ),
            CountryEntry::new(
                "United States",
                "+1",
                &[
                    "New York",
                    "Los Angeles",
                    "Chicago",
                    "Houston",
                    "Phoenix",
                    "Philadelphia",
                    "San Antonio",
                    "San Diego",
                ],
            ),
            CountryEntry::new(
                "United Kingdom",
                "+44",
                &[
                    "London",
                    "Birmingham",
                    "Manchester",
                    "Glasgow",
                    "Liverpool",
                    "Leeds",
                    "Sheffield",
                    "Edinburgh",
                ],
            ),
            CountryEntry::new(
                "Canada",
                "+1",
                &[
                    "Toronto",
                    "Montreal",
                    "Vancouver",
                    "Calgary",
                    "Edmonton",
                    "Ottawa",
                    "Winnipeg",
                    "Quebec City",
                ],
            ),
            CountryEntry::new(
                "Australia",
                "+61",
                &[
                    "Sydney",
                    "Melbourne",
                    "Brisbane",
                    "Perth",
                    "Adelaide",
                    "Gold Coast",
                    "Newcastle",
                    "Canberra",
                ],
            ),
        ])
    }

    /// Country names in directory order
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entry(&self, country: &str) -> Option<&CountryEntry> {
        self.entries.iter().find(|e| e.name == country)
    }

    pub fn dialing_code(&self, country: &str) -> Option<&str> {
        self.entry(country).map(|e| e.code.as_str())
    }

    /// Cities for a country; empty for an empty or unknown name
    pub fn cities(&self, country: &str) -> &[String] {
        self.entry(country)
            .map(|e| e.cities.as_slice())
            .unwrap_or(&[])
    }

    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CountryDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
