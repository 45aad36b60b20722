//! Error types for the Panther7 HDMA driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Channel selection and transfer parameter failures
//! - [`StateError`]: Lifecycle operations issued in the wrong state
//! - [`IrqError`]: Shared interrupt line registration failures
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by the channel operation table.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Channel selection and transfer configuration errors
///
/// All of these are detected before any register is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Channel index outside {0, 1}
    UnknownChannel,
    /// Burst type is not single, INCR4, INCR8 or INCR16
    InvalidBurstType,
    /// Data width is not 1, 2 or 4 bytes
    InvalidDataWidth,
    /// External hardware request select does not fit the 4-bit field
    InvalidHardwareRequest,
    /// Byte count is not a multiple of burst length times data width
    MisalignedCount,
    /// Byte count is zero
    InvalidLength,
    /// Slice count is zero, or buffer size is zero or not a multiple of the width
    InvalidSliceConfig,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::UnknownChannel => "unknown channel number",
            ConfigError::InvalidBurstType => "unknown burst type",
            ConfigError::InvalidDataWidth => "unknown data width",
            ConfigError::InvalidHardwareRequest => "hardware request select out of range",
            ConfigError::MisalignedCount => "transfer count not a multiple of burst size",
            ConfigError::InvalidLength => "zero-length transfer",
            ConfigError::InvalidSliceConfig => "invalid slice configuration",
        }
    }
}

// =============================================================================
// State Errors
// =============================================================================

/// Lifecycle state errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateError {
    /// Channel is already enabled; disable it before programming a new transfer
    AlreadyEnabled,
}

impl core::fmt::Display for StateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            StateError::AlreadyEnabled => "channel already enabled",
        }
    }
}

// =============================================================================
// Interrupt Errors
// =============================================================================

/// Shared interrupt line errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IrqError {
    /// The interrupt subsystem refused to register the line
    RequestFailed,
    /// The channel already has a handler installed
    AlreadyRequested,
}

impl core::fmt::Display for IrqError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IrqError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IrqError::RequestFailed => "failed to request interrupt",
            IrqError::AlreadyRequested => "interrupt already requested",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match channel.enable(&transfer) {
///     Err(Error::Config(ConfigError::MisalignedCount)) => { /* ... */ }
///     Err(Error::State(StateError::AlreadyEnabled)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Lifecycle state error
    State(StateError),
    /// Interrupt registration error
    Irq(IrqError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::State(e) => write!(f, "state: {}", e.as_str()),
            Error::Irq(e) => write!(f, "irq: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<StateError> for Error {
    fn from(e: StateError) -> Self {
        Error::State(e)
    }
}

impl From<IrqError> for Error {
    fn from(e: IrqError) -> Self {
        Error::Irq(e)
    }
}

/// Result type alias for HDMA operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for interrupt registration operations
pub type IrqResult<T> = core::result::Result<T, IrqError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn config_error_as_str_non_empty() {
        let variants = [
            ConfigError::UnknownChannel,
            ConfigError::InvalidBurstType,
            ConfigError::InvalidDataWidth,
            ConfigError::InvalidHardwareRequest,
            ConfigError::MisalignedCount,
            ConfigError::InvalidLength,
            ConfigError::InvalidSliceConfig,
        ];

        for variant in variants {
            assert!(
                !variant.as_str().is_empty(),
                "ConfigError::{variant:?} has empty string"
            );
        }
    }

    #[test]
    fn config_error_display() {
        let display = format!("{}", ConfigError::UnknownChannel);
        assert_eq!(display, "unknown channel number");
    }

    #[test]
    fn irq_error_display() {
        assert_eq!(
            format!("{}", IrqError::RequestFailed),
            "failed to request interrupt"
        );
        assert_eq!(
            format!("{}", IrqError::AlreadyRequested),
            "interrupt already requested"
        );
    }

    #[test]
    fn state_error_display() {
        assert_eq!(
            format!("{}", StateError::AlreadyEnabled),
            "channel already enabled"
        );
    }

    #[test]
    fn error_from_domain_errors() {
        assert_eq!(
            Error::from(ConfigError::MisalignedCount),
            Error::Config(ConfigError::MisalignedCount)
        );
        assert_eq!(
            Error::from(StateError::AlreadyEnabled),
            Error::State(StateError::AlreadyEnabled)
        );
        assert_eq!(
            Error::from(IrqError::RequestFailed),
            Error::Irq(IrqError::RequestFailed)
        );
    }

    #[test]
    fn error_display_prefixes_domain() {
        let display = format!("{}", Error::Config(ConfigError::InvalidDataWidth));
        assert!(display.starts_with("config:"));
        assert!(display.contains("data width"));

        let display = format!("{}", Error::Irq(IrqError::RequestFailed));
        assert!(display.starts_with("irq:"));

        let display = format!("{}", Error::State(StateError::AlreadyEnabled));
        assert!(display.starts_with("state:"));
    }

    #[test]
    fn question_mark_converts_domain_errors() {
        fn inner() -> ConfigResult<u32> {
            Err(ConfigError::InvalidLength)
        }

        fn outer() -> Result<u32> {
            Ok(inner()?)
        }

        assert_eq!(outer(), Err(Error::Config(ConfigError::InvalidLength)));
    }
}
