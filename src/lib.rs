//! Panther7 HDMA Driver
//!
//! A `no_std`, `no_alloc` driver core for the Panther7 two-channel AHB DMA
//! (HDMA) controller.
//!
//! The crate programs the controller's memory-mapped registers to set up, run
//! and tear down transfers, and splits the controller's single interrupt line
//! into per-channel completion, page and page-overflow events.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **Driver Layer** ([`driver`]): Transfer descriptors, the configuration
//!    encoder, the channel lifecycle controller and the event dispatcher
//! 2. **Sync Layer** ([`sync`]): The shared interrupt line demultiplexer
//! 3. **HAL Layer** ([`hal`]): Register access and the interrupt subsystem
//!    interface, both as traits
//!
//! The generic DMA framework that owns descriptors, the interrupt controller,
//! and platform bring-up all live outside this crate. They meet the driver at
//! [`DmaOps`], [`InterruptController`] and [`RegisterAccess`].
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for driver types and diagnostic logging
//!
//! # Example
//!
//! ```ignore
//! use ph_panther7_hdma::{
//!     BurstType, Channel, DataWidth, DmaOps, HdmaChannel, Mmio, Notifier, SharedIrq,
//!     TransferConfig,
//! };
//!
//! let regs = unsafe { Mmio::new(HDMA_BASE) };
//! let shared = SharedIrq::new(HDMA_IRQ, &intc);
//!
//! let on_complete = |ch: Channel| done[ch.index()].store(true, Ordering::Release);
//! let notifier = Notifier::new().with_complete(&on_complete);
//!
//! let ch0 = HdmaChannel::new(Channel::Ch0, regs, &shared, &notifier);
//! ch0.request()?;
//!
//! let transfer = TransferConfig::new(src, dst, 64)
//!     .with_burst(BurstType::Incr4)
//!     .with_width(DataWidth::Word);
//! ch0.enable(&transfer)?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod hal;
pub mod sync;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::channel::Channel;
pub use driver::config::{
    AddressMode, BurstType, DataWidth, SliceConfig, State, TransferConfig, TransferMode,
};
pub use driver::encoder::{ChannelProgram, build_config};
pub use driver::error::{
    ConfigError, ConfigResult, Error, IrqError, IrqResult, Result, StateError,
};
pub use driver::hdma::{DmaOps, HdmaChannel};
pub use driver::interrupt::{ChannelEvents, Notifier};
pub use hal::{InterruptController, InterruptHandler, Irq, Mmio, RegisterAccess};
pub use sync::SharedIrq;

/// Low-level register offsets and bit fields for advanced use.
///
/// These are intentionally separated from the primary facade. Most users should
/// prefer [`HdmaChannel`] instead of touching registers directly.
///
/// # Safety
///
/// Direct register access bypasses driver invariants such as the
/// configuration-word-last ordering. Use only if you fully understand the
/// controller and accept responsibility for correct sequencing.
pub mod unsafe_registers {
    pub use crate::internal::register::hdma::*;
}

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types and integration points.
pub mod constants {
    pub use crate::internal::constants::{
        // Topology
        CH0_NAME,
        CH1_NAME,
        CHANNEL_COUNT,
        // Field limits
        MAX_HARDWARE_REQUEST,
    };
}
