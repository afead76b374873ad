use thiserror::Error;

use crate::range::RangeScale;

/// Main error type for search-space construction and enumeration
#[derive(Error, Debug)]
pub enum ParamError {
    #[error("Invalid parameter tree: {message}")]
    InvalidTree { message: String },

    #[error("Invalid range [{min}, {max}] with {scale} scale: {message}")]
    InvalidRange {
        min: f64,
        max: f64,
        scale: RangeScale,
        message: String,
    },

    #[error("Component {component} has no {kind} parameter named '{parameter}'")]
    UnboundName {
        component: String,
        parameter: String,
        kind: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ParamError {
    pub(crate) fn invalid_range(
        min: f64,
        max: f64,
        scale: RangeScale,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidRange {
            min,
            max,
            scale,
            message: message.into(),
        }
    }
}

/// Result type alias for search-space operations
pub type ParamResult<T> = Result<T, ParamError>;

/// Macro for creating tree structure errors
#[macro_export]
macro_rules! invalid_tree {
    ($($arg:tt)*) => {
        $crate::ParamError::InvalidTree { message: format!($($arg)*) }
    };
}

/// Macro for creating configuration errors
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)*) => {
        $crate::ParamError::Config(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ParamError::invalid_range(2.0, 1.0, RangeScale::Linear, "min exceeds max");

        let text = error.to_string();
        assert!(text.contains("Invalid range"));
        assert!(text.contains("[2, 1]"));
        assert!(text.contains("linear"));
    }

    #[test]
    fn test_unbound_name_display() {
        let error = ParamError::UnboundName {
            component: "GaussianKernel".to_string(),
            parameter: "degree".to_string(),
            kind: "scalar".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Component GaussianKernel has no scalar parameter named 'degree'"
        );
    }

    #[test]
    fn test_serde_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ParamError = json_err.into();

        match err {
            ParamError::Serialization(_) => (),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_macros() {
        let tree_err = invalid_tree!("leaf '{}' cannot have children", "C");
        assert!(matches!(tree_err, ParamError::InvalidTree { .. }));
        let config_err = config_error!("sample_count must be at least {}", 1);
        assert!(config_err.to_string().contains("sample_count"));
    }
}
