use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One row of the housing CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    #[serde(rename = "house_address")]
    pub address: String,
    pub floor_count: i64,
    pub population: i64,
    pub heating_value: f64,
    pub area_residential: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeightCategory {
    LowRise,
    MidRise,
    HighRise,
}

impl HeightCategory {
    pub const ALL: [HeightCategory; 3] = [
        HeightCategory::LowRise,
        HeightCategory::MidRise,
        HeightCategory::HighRise,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HeightCategory::LowRise => "Малоэтажный",
            HeightCategory::MidRise => "Среднеэтажный",
            HeightCategory::HighRise => "Многоэтажный",
        }
    }
}

impl fmt::Display for HeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of houses per height category. All three counters always exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub low_rise: usize,
    pub mid_rise: usize,
    pub high_rise: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: HeightCategory) -> usize {
        match category {
            HeightCategory::LowRise => self.low_rise,
            HeightCategory::MidRise => self.mid_rise,
            HeightCategory::HighRise => self.high_rise,
        }
    }

    pub fn increment(&mut self, category: HeightCategory) {
        match category {
            HeightCategory::LowRise => self.low_rise += 1,
            HeightCategory::MidRise => self.mid_rise += 1,
            HeightCategory::HighRise => self.high_rise += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low_rise + self.mid_rise + self.high_rise
    }

    pub fn iter(&self) -> impl Iterator<Item = (HeightCategory, usize)> + '_ {
        HeightCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

// {'Малоэтажный': 1, 'Среднеэтажный': 0, 'Многоэтажный': 1}
impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (category, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}': {}", category.label(), count)?;
        }
        f.write_str("}")
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(HeightCategory::ALL.len()))?;
        for (category, count) in self.iter() {
            map.serialize_entry(category.label(), &count)?;
        }
        map.end()
    }
}

/// Residential area per resident for one address, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaPerResident {
    pub address: String,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousingReport {
    pub categories: CategoryCounts,
    pub min_area_address: Option<String>,
}

/// What to do when an address shows up on more than one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DuplicatePolicy {
    /// Later rows replace the value but keep the first row's position.
    #[default]
    LastWins,
    /// Later rows are ignored.
    FirstWins,
    /// Any duplicate aborts the run.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
