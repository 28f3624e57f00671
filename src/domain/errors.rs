/// Simplified error system - the numeric core is total and recovers locally,
/// so errors only surface at the configuration and serialization boundaries.
#[derive(Debug, Clone)]
pub enum EngineError {
    ConfigError(String),
    ValidationError(String),
    SerializationError(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            EngineError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            EngineError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

// Simple convenience type alias
pub type EngineResult<T> = Result<T, EngineError>;
