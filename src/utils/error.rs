use thiserror::Error;

/// Failure kinds of floor-count classification. Kept apart from the rest of
/// the taxonomy so callers can tell a type violation from a range violation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("floor count must be a whole number, got {value}")]
    NotInteger { value: f64 },

    #[error("floor count must be positive, got {floors}")]
    NotPositive { floors: i64 },
}

#[derive(Error, Debug)]
pub enum HousingError {
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error at line {line}, column '{column}': {message}")]
    Parse {
        line: u64,
        column: String,
        message: String,
    },

    #[error("Classification error: {0}")]
    Classification(#[from] ClassifyError),

    #[error("Population is zero for '{address}', area per resident is undefined")]
    DivisionByZero { address: String },

    #[error("Duplicate address '{address}'")]
    DuplicateAddress { address: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl HousingError {
    pub fn is_type_violation(&self) -> bool {
        matches!(
            self,
            HousingError::Classification(ClassifyError::NotInteger { .. })
        )
    }

    pub fn is_range_violation(&self) -> bool {
        matches!(
            self,
            HousingError::Classification(ClassifyError::NotPositive { .. })
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HousingError::Io { path, .. } => format!("Could not read input file '{}'", path),
            HousingError::Parse { line, column, .. } => {
                format!("Malformed value in column '{}' on line {}", column, line)
            }
            HousingError::Classification(e) => format!("Invalid floor count: {}", e),
            HousingError::DivisionByZero { address } => {
                format!("House '{}' has zero population", address)
            }
            HousingError::DuplicateAddress { address } => {
                format!("Address '{}' appears more than once", address)
            }
            HousingError::Serialization(_) => "Failed to render the report".to_string(),
            HousingError::Validation { field, reason } => {
                format!("Invalid option '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HousingError::Io { .. } => "Check that the file exists and is readable",
            HousingError::Parse { .. } => {
                "Make sure floor_count and population are integers and heating_value, area_residential are numbers"
            }
            HousingError::Classification(_) => "floor_count must be a whole number greater than zero",
            HousingError::DivisionByZero { .. } => "Fix or remove rows with population = 0",
            HousingError::DuplicateAddress { .. } => {
                "Remove duplicate rows or rerun with --duplicates last-wins or first-wins"
            }
            HousingError::Serialization(_) => "Try the text output format",
            HousingError::Validation { .. } => "Run with --help to see accepted values",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            HousingError::Io { .. } => 2,
            HousingError::Validation { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, HousingError>;
