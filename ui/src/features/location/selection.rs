use serde::{Deserialize, Serialize};

/// Administrative levels, most general first
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LocationLevel {
    County,
    SubCounty,
    Ward,
    Stage,
}

impl LocationLevel {
    pub const ALL: [LocationLevel; 4] = [
        LocationLevel::County,
        LocationLevel::SubCounty,
        LocationLevel::Ward,
        LocationLevel::Stage,
    ];

    pub fn parent(self) -> Option<LocationLevel> {
        match self {
            LocationLevel::County => None,
            LocationLevel::SubCounty => Some(LocationLevel::County),
            LocationLevel::Ward => Some(LocationLevel::SubCounty),
            LocationLevel::Stage => Some(LocationLevel::Ward),
        }
    }

    /// Levels strictly more specific than this one
    pub fn below(self) -> impl Iterator<Item = LocationLevel> {
        Self::ALL.into_iter().filter(move |level| *level > self)
    }

    pub fn label(self) -> &'static str {
        match self {
            LocationLevel::County => "Chagua Kaunti Yako",
            LocationLevel::SubCounty => "Chagua Kaunti Ndogo",
            LocationLevel::Ward => "Chagua Ward Yako",
            LocationLevel::Stage => "Chagua Stage Yako",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            LocationLevel::County => "Kaunti",
            LocationLevel::SubCounty => "Kaunti Ndogo",
            LocationLevel::Ward => "Ward",
            LocationLevel::Stage => "Stage",
        }
    }
}

/// The four-level cascade. Choosing a level clears every level below it in
/// the same step, so a downstream value can never outlive its parent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSelection {
    pub county: String,
    pub sub_county: String,
    pub ward: String,
    pub stage: String,
}

impl LocationSelection {
    pub fn get(&self, level: LocationLevel) -> &str {
        match level {
            LocationLevel::County => &self.county,
            LocationLevel::SubCounty => &self.sub_county,
            LocationLevel::Ward => &self.ward,
            LocationLevel::Stage => &self.stage,
        }
    }

    fn slot_mut(&mut self, level: LocationLevel) -> &mut String {
        match level {
            LocationLevel::County => &mut self.county,
            LocationLevel::SubCounty => &mut self.sub_county,
            LocationLevel::Ward => &mut self.ward,
            LocationLevel::Stage => &mut self.stage,
        }
    }

    pub fn is_set(&self, level: LocationLevel) -> bool {
        !self.get(level).is_empty()
    }

    pub fn select(&mut self, level: LocationLevel, value: impl Into<String>) {
        *self.slot_mut(level) = value.into();
        self.clear_below(level);
    }

    pub fn clear_below(&mut self, level: LocationLevel) {
        for lower in level.below() {
            self.slot_mut(lower).clear();
        }
    }
}
