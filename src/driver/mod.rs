//! Core driver components for the Panther7 HDMA controller.
//!
//! This module contains the building blocks for programming and servicing
//! the two DMA channels:
//!
//! - [`channel`] - Channel identity and per-channel register layout
//! - [`config`] - Transfer descriptor types and builder methods
//! - [`encoder`] - Pure translation of a descriptor into register values
//! - [`error`] - Error types and result aliases
//! - [`hdma`] - The channel lifecycle controller and event dispatcher
//! - [`interrupt`] - Per-channel events and framework notifier callbacks
//!
//! # Example
//!
//! ```ignore
//! use ph_panther7_hdma::driver::{BurstType, DataWidth, TransferConfig};
//!
//! let transfer = TransferConfig::new(src, dst, 64)
//!     .with_burst(BurstType::Incr4)
//!     .with_width(DataWidth::Word);
//! ```

// Submodules
pub mod channel;
pub mod config;
pub mod encoder;
pub mod error;
pub mod hdma;
pub mod interrupt;

// Re-exports for convenience
pub use channel::{Channel, ChannelRegs};
pub use config::{
    AddressMode, BurstType, DataWidth, SliceConfig, State, TransferConfig, TransferMode,
};
pub use encoder::{ChannelProgram, SliceProgram, build_config};
pub use error::{
    ConfigError, ConfigResult, Error, IrqError, IrqResult, Result, StateError,
};
pub use hdma::{DmaOps, HdmaChannel};
pub use interrupt::{ChannelEvents, EventCallback, Notifier};
