//! Driver constants
//!
//! Limits and defaults shared across the encoder, lifecycle and interrupt
//! code. Register offsets and bit positions live in
//! [`crate::internal::register::hdma`].

// =============================================================================
// Controller Topology
// =============================================================================

/// Number of channels on one HDMA controller
pub const CHANNEL_COUNT: usize = 2;

/// Default name of channel 0
pub const CH0_NAME: &str = "PANTHER7 HDMA Channel 0";

/// Default name of channel 1
pub const CH1_NAME: &str = "PANTHER7 HDMA Channel 1";

// =============================================================================
// Field Limits
// =============================================================================

/// Largest external hardware request select value (4-bit field)
pub const MAX_HARDWARE_REQUEST: u8 = 0xF;
