use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::selection::{LocationLevel, LocationSelection};
use crate::console_error;
use crate::services::errors::{FormError, FormResult};

const COUNTIES_JSON: &str = include_str!("../../../assets/data/counties.json");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ward {
    pub ward_name: String,
    #[serde(default)]
    pub stages: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubCounty {
    pub subcounty_name: String,
    #[serde(default)]
    pub wards: Vec<Ward>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct County {
    pub county_code: u32,
    pub county_name: String,
    #[serde(default)]
    pub sub_counties: Vec<SubCounty>,
}

/// Read-only county → sub-county → ward → stage dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationHierarchy {
    counties: Vec<County>,
}

impl LocationHierarchy {
    pub fn new(counties: Vec<County>) -> Self {
        Self { counties }
    }

    pub fn from_json(json: &str) -> FormResult<Self> {
        serde_json::from_str::<Vec<County>>(json)
            .map(Self::new)
            .map_err(|e| FormError::LocationData {
                message: e.to_string(),
            })
    }

    /// The dataset bundled with the app, parsed once
    pub fn embedded() -> &'static LocationHierarchy {
        static HIERARCHY: OnceLock<LocationHierarchy> = OnceLock::new();
        HIERARCHY.get_or_init(|| {
            Self::from_json(COUNTIES_JSON).unwrap_or_else(|e| {
                console_error!("[Location] Bundled county data is unusable: {}", e);
                Self::default()
            })
        })
    }

    pub fn county(&self, county: &str) -> Option<&County> {
        self.counties.iter().find(|c| c.county_name == county)
    }

    pub fn sub_county(&self, county: &str, sub_county: &str) -> Option<&SubCounty> {
        self.county(county)?
            .sub_counties
            .iter()
            .find(|s| s.subcounty_name == sub_county)
    }

    pub fn ward(&self, county: &str, sub_county: &str, ward: &str) -> Option<&Ward> {
        self.sub_county(county, sub_county)?
            .wards
            .iter()
            .find(|w| w.ward_name == ward)
    }

    /// Choices for `level` given everything selected above it.
    /// Empty while the parent level is unset or unknown.
    pub fn options(&self, selection: &LocationSelection, level: LocationLevel) -> Vec<String> {
        match level {
            LocationLevel::County => self
                .counties
                .iter()
                .map(|c| c.county_name.clone())
                .collect(),
            LocationLevel::SubCounty => self
                .county(&selection.county)
                .map(|c| {
                    c.sub_counties
                        .iter()
                        .map(|s| s.subcounty_name.clone())
                        .collect()
                })
                .unwrap_or_default(),
            LocationLevel::Ward => self
                .sub_county(&selection.county, &selection.sub_county)
                .map(|s| s.wards.iter().map(|w| w.ward_name.clone()).collect())
                .unwrap_or_default(),
            LocationLevel::Stage => self
                .ward(&selection.county, &selection.sub_county, &selection.ward)
                .map(|w| w.stages.clone())
                .unwrap_or_default(),
        }
    }

    /// A selector is usable once its parent holds a known value
    pub fn is_selectable(&self, selection: &LocationSelection, level: LocationLevel) -> bool {
        match level.parent() {
            None => true,
            Some(parent) => {
                let value = selection.get(parent);
                !value.is_empty() && self.options(selection, parent).iter().any(|o| o == value)
            }
        }
    }

    /// First level whose value does not belong under its parent
    pub fn first_invalid_level(&self, selection: &LocationSelection) -> Option<LocationLevel> {
        LocationLevel::ALL.into_iter().find(|level| {
            let value = selection.get(*level);
            !value.is_empty() && !self.options(selection, *level).iter().any(|o| o == value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(county: &str, sub_county: &str, ward: &str, stage: &str) -> LocationSelection {
        LocationSelection {
            county: county.to_string(),
            sub_county: sub_county.to_string(),
            ward: ward.to_string(),
            stage: stage.to_string(),
        }
    }

    #[test]
    fn test_embedded_data_parses() {
        let hierarchy = LocationHierarchy::embedded();
        assert!(!hierarchy
            .options(&LocationSelection::default(), LocationLevel::County)
            .is_empty());
        assert!(hierarchy.county("Nairobi").is_some());
        assert!(hierarchy
            .ward("Nairobi", "Starehe", "Ziwani/Kariokor")
            .map(|w| w.stages.contains(&"Kariokor".to_string()))
            .unwrap_or(false));
    }

    #[test]
    fn test_sub_county_options_belong_to_county() {
        let hierarchy = LocationHierarchy::embedded();
        let mut selection = LocationSelection::default();
        selection.select(LocationLevel::County, "Kisumu");

        let options = hierarchy.options(&selection, LocationLevel::SubCounty);
        assert_eq!(options, vec!["Kisumu Central", "Kisumu East"]);
        assert!(hierarchy
            .options(&selection, LocationLevel::Ward)
            .is_empty());
    }

    #[test]
    fn test_changing_county_repopulates_only_new_options() {
        let hierarchy = LocationHierarchy::embedded();
        let mut selection = select("Nairobi", "Starehe", "Ngara", "Ngara Market");

        selection.select(LocationLevel::County, "Mombasa");

        assert_eq!(selection.sub_county, "");
        assert_eq!(selection.ward, "");
        assert_eq!(selection.stage, "");
        let options = hierarchy.options(&selection, LocationLevel::SubCounty);
        assert_eq!(options, vec!["Mvita", "Nyali", "Likoni"]);
        assert!(!options.contains(&"Starehe".to_string()));
    }

    #[test]
    fn test_selectors_disabled_until_parent_chosen() {
        let hierarchy = LocationHierarchy::embedded();
        let mut selection = LocationSelection::default();

        assert!(hierarchy.is_selectable(&selection, LocationLevel::County));
        assert!(!hierarchy.is_selectable(&selection, LocationLevel::SubCounty));

        selection.select(LocationLevel::County, "Nakuru");
        assert!(hierarchy.is_selectable(&selection, LocationLevel::SubCounty));
        assert!(!hierarchy.is_selectable(&selection, LocationLevel::Ward));

        selection.select(LocationLevel::SubCounty, "Naivasha");
        selection.select(LocationLevel::Ward, "Lakeview");
        assert!(hierarchy.is_selectable(&selection, LocationLevel::Stage));
        assert_eq!(
            hierarchy.options(&selection, LocationLevel::Stage),
            vec!["Naivasha Bus Park", "Karagita"]
        );
    }

    #[test]
    fn test_first_invalid_level() {
        let hierarchy = LocationHierarchy::embedded();

        let valid = select("Nairobi", "Starehe", "Ngara", "Globe Roundabout");
        assert_eq!(hierarchy.first_invalid_level(&valid), None);

        let stale = select("Mombasa", "Starehe", "Ngara", "Globe Roundabout");
        assert_eq!(
            hierarchy.first_invalid_level(&stale),
            Some(LocationLevel::SubCounty)
        );

        let unknown = select("Atlantis", "", "", "");
        assert_eq!(
            hierarchy.first_invalid_level(&unknown),
            Some(LocationLevel::County)
        );
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            LocationHierarchy::from_json("{\"county_name\": 1}"),
            Err(FormError::LocationData { .. })
        ));
    }
}
