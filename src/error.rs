// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Gesture input never fails: every delta is clamped or ignored. Errors only
//! arise when a controller is built from an impossible configuration, or when
//! the ambient layers (settings file, flag store, replay parser) hit bad data.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A controller was constructed with values that violate its invariants.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The flag store could not encode or decode its contents.
    #[error("Store Error: {0}")]
    Store(String),

    /// A replay token could not be parsed into a gesture message.
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_converts_and_displays() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(format!("{err}"), "I/O Error: missing");
    }

    #[test]
    fn invalid_configuration_displays_reason() {
        let err = Error::InvalidConfiguration("track too narrow".into());
        assert_eq!(err.to_string(), "Invalid configuration: track too narrow");
    }

    #[test]
    fn toml_decode_error_maps_to_config() {
        let err: Error = toml::from_str::<toml::Table>("not = valid = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }
}
