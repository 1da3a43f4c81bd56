use crate::domain::model::{AreaPerResident, DuplicatePolicy, HouseRecord};
use crate::utils::error::{HousingError, Result};
use std::collections::HashMap;

/// Rounds the stored value to two decimals in one step. Scaling by 100 first
/// would round twice and push values just below a tie over it.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

pub fn area_per_resident(record: &HouseRecord) -> Result<f64> {
    if record.population == 0 {
        return Err(HousingError::DivisionByZero {
            address: record.address.clone(),
        });
    }
    Ok(round_to_cents(
        record.area_residential / record.population as f64,
    ))
}

/// Computes the per-resident area of every address, in order of first
/// appearance. Repeated addresses are resolved by `policy`.
pub fn per_capita_ratios(
    records: &[HouseRecord],
    policy: DuplicatePolicy,
) -> Result<Vec<AreaPerResident>> {
    let mut ratios: Vec<AreaPerResident> = Vec::with_capacity(records.len());
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let area = area_per_resident(record)?;

        let Some(idx) = positions.get(record.address.as_str()).copied() else {
            positions.insert(record.address.as_str(), ratios.len());
            ratios.push(AreaPerResident {
                address: record.address.clone(),
                area,
            });
            continue;
        };

        tracing::warn!(
            "Duplicate address '{}' ({:?}): previous {}, current {}",
            record.address,
            policy,
            ratios[idx].area,
            area
        );
        match policy {
            DuplicatePolicy::LastWins => ratios[idx].area = area,
            DuplicatePolicy::FirstWins => {}
            DuplicatePolicy::Reject => {
                return Err(HousingError::DuplicateAddress {
                    address: record.address.clone(),
                })
            }
        }
    }

    Ok(ratios)
}

/// Address with the strictly smallest area. The first address reaching the
/// minimum wins ties.
pub fn min_area_address(ratios: &[AreaPerResident]) -> Option<&str> {
    let mut min_address = None;
    let mut min_area = f64::INFINITY;
    for ratio in ratios {
        if ratio.area < min_area {
            min_area = ratio.area;
            min_address = Some(ratio.address.as_str());
        }
    }
    min_address
}

pub fn find_min_area_address(
    records: &[HouseRecord],
    policy: DuplicatePolicy,
) -> Result<Option<String>> {
    let ratios = per_capita_ratios(records, policy)?;
    Ok(min_area_address(&ratios).map(str::to_string))
}
