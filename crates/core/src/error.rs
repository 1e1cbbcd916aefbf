use std::fmt;

#[derive(Debug)]
pub enum AlignError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (bad threshold, duplicate sheet names, etc.).
    ConfigValidation(String),
    /// Missing required column in an input table.
    MissingColumn { table: String, column: String },
    /// Impact factor cell present but not a number.
    ImpactFactorParse { row: usize, value: String },
    /// IO error (file read, CSV parse, etc.).
    Io(String),
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingColumn { table, column } => {
                write!(f, "table '{table}': missing column '{column}'")
            }
            Self::ImpactFactorParse { row, value } => {
                write!(f, "journals row {row}: cannot parse impact factor '{value}'")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for AlignError {}
