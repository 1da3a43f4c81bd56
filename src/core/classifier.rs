use crate::domain::model::{HeightCategory, HouseRecord};
use crate::utils::error::{ClassifyError, HousingError, Result};

/// Highest floor count (inclusive) still classified as low-rise.
pub const LOW_RISE_MAX_FLOORS: i64 = 5;
/// Highest floor count (inclusive) still classified as mid-rise.
pub const MID_RISE_MAX_FLOORS: i64 = 15;

pub fn classify(floor_count: i64) -> std::result::Result<HeightCategory, ClassifyError> {
    if floor_count <= 0 {
        return Err(ClassifyError::NotPositive {
            floors: floor_count,
        });
    }

    let category = if floor_count <= LOW_RISE_MAX_FLOORS {
        HeightCategory::LowRise
    } else if floor_count <= MID_RISE_MAX_FLOORS {
        HeightCategory::MidRise
    } else {
        HeightCategory::HighRise
    };
    Ok(category)
}

/// A floor count whose numeric type is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloorValue {
    Integer(i64),
    Decimal(f64),
}

impl From<i64> for FloorValue {
    fn from(value: i64) -> Self {
        FloorValue::Integer(value)
    }
}

impl From<f64> for FloorValue {
    fn from(value: f64) -> Self {
        FloorValue::Decimal(value)
    }
}

/// Checks the type before the range: any decimal is rejected as
/// `NotInteger`, whole or not, and only integers reach `classify`.
pub fn classify_value(
    value: impl Into<FloorValue>,
) -> std::result::Result<HeightCategory, ClassifyError> {
    match value.into() {
        FloorValue::Integer(floors) => classify(floors),
        FloorValue::Decimal(value) => Err(ClassifyError::NotInteger { value }),
    }
}

pub fn classify_all(records: &[HouseRecord]) -> Result<Vec<HeightCategory>> {
    records
        .iter()
        .map(|record| {
            classify(record.floor_count).map_err(|e| {
                tracing::debug!("Cannot classify '{}': {}", record.address, e);
                HousingError::from(e)
            })
        })
        .collect()
}
