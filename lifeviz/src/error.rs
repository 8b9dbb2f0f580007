use std::fmt;

/// Failure while reading either input. The display stays blank on any of these.
#[derive(Debug)]
pub enum LoadError {
    Csv(csv::Error),
    MissingColumn(&'static str),
    Topology(serde_json::Error),
    MissingObject(String),
    Fetch { url: String, message: String },
}

impl LoadError {
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Csv(_) => "csv",
            LoadError::MissingColumn(_) => "missing_column",
            LoadError::Topology(_) => "topology",
            LoadError::MissingObject(_) => "missing_object",
            LoadError::Fetch { .. } => "fetch",
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Csv(e) => write!(f, "malformed CSV: {}", e),
            LoadError::MissingColumn(c) => write!(f, "missing column '{}'", c),
            LoadError::Topology(e) => write!(f, "malformed topology: {}", e),
            LoadError::MissingObject(name) => {
                write!(f, "topology has no object named '{}'", name)
            }
            LoadError::Fetch { url, message } => write!(f, "fetching {} failed: {}", url, message),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Csv(e) => Some(e),
            LoadError::Topology(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Topology(e)
    }
}

/// The two selection controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Country,
    Year,
}

impl Control {
    pub fn as_str(self) -> &'static str {
        match self {
            Control::Country => "country",
            Control::Year => "year",
        }
    }
}

/// An input event that could not be applied. State is left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
    UnknownOption { control: Control, value: String },
}

impl DispatchError {
    pub fn code(&self) -> &'static str {
        match self {
            DispatchError::UnknownOption { .. } => "unknown_option",
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::UnknownOption { control, value } => {
                write!(f, "'{}' is not a {} option", value, control.as_str())
            }
        }
    }
}

impl std::error::Error for DispatchError {}
