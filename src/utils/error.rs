use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Inventory file not found: {path}")]
    FileNotFoundError { path: String },

    #[error("Malformed inventory line {line}: {message}")]
    ParseError { line: u64, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

impl InventoryError {
    /// 給使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            InventoryError::IoError(e) => format!("Could not access the inventory file: {}", e),
            InventoryError::CsvError(e) => format!("Could not read the inventory data: {}", e),
            InventoryError::FileNotFoundError { path } => {
                format!("The file '{}' was not found.", path)
            }
            InventoryError::ParseError { line, message } => {
                format!("Line {} of the inventory file is malformed: {}", line, message)
            }
            InventoryError::ConfigError { message } => format!("Configuration problem: {}", message),
            InventoryError::ValidationError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InventoryError::IoError(_) => "Check that the inventory file is writable and the disk is not full",
            InventoryError::CsvError(_) | InventoryError::ParseError { .. } => {
                "Every line after the header needs five comma-separated fields with whole-number cost and quantity"
            }
            InventoryError::FileNotFoundError { .. } => {
                "Create the file with the header 'Country,Code,Product,Cost,Quantity' or pass --file"
            }
            InventoryError::ConfigError { .. } | InventoryError::ValidationError { .. } => {
                "Fix the configuration value and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
