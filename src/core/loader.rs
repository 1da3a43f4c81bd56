use crate::domain::model::HouseRecord;
use crate::domain::ports::Storage;
use crate::utils::error::{HousingError, Result};

pub const REQUIRED_COLUMNS: [&str; 5] = [
    "house_address",
    "floor_count",
    "population",
    "heating_value",
    "area_residential",
];

/// Columns parsed as numbers. Only these tolerate surrounding whitespace; the
/// address is kept exactly as written.
pub const NUMERIC_COLUMNS: [&str; 4] = [
    "floor_count",
    "population",
    "heating_value",
    "area_residential",
];

/// Reads `path` through `storage` and parses every row in file order.
pub fn load_records<S: Storage>(storage: &S, path: &str) -> Result<Vec<HouseRecord>> {
    let data = storage.read_file(path)?;
    tracing::debug!("Read {} bytes from {}", data.len(), path);
    parse_records(&data)
}

/// Parses CSV with a header row. Columns are matched by name, so their order
/// does not matter and extra columns are ignored. A zero-byte input has no
/// header and is rejected.
pub fn parse_records(data: &[u8]) -> Result<Vec<HouseRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| to_parse_error(e, None))?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(HousingError::Parse {
                line: 1,
                column: column.to_string(),
                message: "required column is missing from the header".to_string(),
            });
        }
    }

    let numeric: Vec<bool> = headers
        .iter()
        .map(|h| NUMERIC_COLUMNS.contains(&h))
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let raw = result.map_err(|e| to_parse_error(e, Some(&headers)))?;

        let mut row: csv::StringRecord = raw
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                if numeric.get(idx).copied().unwrap_or(false) {
                    field.trim()
                } else {
                    field
                }
            })
            .collect();
        row.set_position(raw.position().cloned());

        let record: HouseRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| to_parse_error(e, Some(&headers)))?;
        records.push(record);
    }

    tracing::debug!("Parsed {} records", records.len());
    Ok(records)
}

fn to_parse_error(err: csv::Error, headers: Option<&csv::StringRecord>) -> HousingError {
    let line = err.position().map(|p| p.line()).unwrap_or(1);

    if let csv::ErrorKind::Deserialize { err: de, .. } = err.kind() {
        let column = de
            .field()
            .and_then(|idx| headers.and_then(|h| h.get(idx as usize)))
            .unwrap_or("<unknown>")
            .to_string();
        return HousingError::Parse {
            line,
            column,
            message: de.kind().to_string(),
        };
    }

    HousingError::Parse {
        line,
        column: "<row>".to_string(),
        message: err.to_string(),
    }
}
