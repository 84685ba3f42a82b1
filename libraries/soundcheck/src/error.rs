/// Platform query errors
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result type for platform audio queries
pub type Result<T> = std::result::Result<T, QueryError>;

/// Platform audio property addressed by a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// System-wide default output device
    DefaultOutputDevice,

    /// Whether the device is streaming audio for any client
    DeviceIsRunningSomewhere,

    /// Scalar volume of the primary (left) output channel
    VolumeScalar,
}

impl Property {
    /// Get human-readable name of the property
    pub fn name(&self) -> &'static str {
        match self {
            Self::DefaultOutputDevice => "default output device",
            Self::DeviceIsRunningSomewhere => "device is running somewhere",
            Self::VolumeScalar => "volume scalar",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to resolve the device or read one of its properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryError {
    /// The audio service answered with a non-success status
    #[error("Failed to read {property}: status {status}")]
    Status {
        /// Property being read
        property: Property,
        /// Raw platform status code
        status: i32,
    },

    /// No audio service is available on this platform
    #[error("No platform audio service available")]
    Unsupported,
}

impl QueryError {
    /// Create an error from a non-success platform status
    pub fn status(property: Property, status: i32) -> Self {
        Self::Status { property, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_names_property() {
        let err = QueryError::status(Property::DeviceIsRunningSomewhere, 560947818);
        assert_eq!(
            err.to_string(),
            "Failed to read device is running somewhere: status 560947818"
        );
    }

    #[test]
    fn test_error_serializes_tagged() {
        let json = serde_json::to_value(QueryError::status(Property::VolumeScalar, -50)).unwrap();
        assert_eq!(json["kind"], "status");
        assert_eq!(json["property"], "volume_scalar");
        assert_eq!(json["status"], -50);

        let json = serde_json::to_value(QueryError::Unsupported).unwrap();
        assert_eq!(json["kind"], "unsupported");
    }
}
