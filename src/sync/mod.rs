//! Synchronization and Interrupt Sharing
//!
//! This module provides the state shared between framework context and
//! interrupt context:
//!
//! - **Primitives** (`primitives`): Low-level synchronization types
//!   - [`CriticalSectionCell`] - ISR-safe interior mutability
//!
//! - **Shared Line** (`shared_irq`): Demultiplexer for the shared HDMA line
//!   - [`SharedIrq`] - Per-channel handler table, dispatched channel 0 first
//!
//! # Example
//!
//! ```ignore
//! use ph_panther7_hdma::sync::SharedIrq;
//!
//! let shared = SharedIrq::new(HDMA_IRQ, &intc);
//! ch0.request()?;
//! ch1.request()?;
//!
//! // The interrupt subsystem now calls `shared.handle_interrupt()` on every
//! // assertion; each channel acks and reports only its own events.
//! ```

mod primitives;

pub use primitives::CriticalSectionCell;

mod shared_irq;

pub use shared_irq::SharedIrq;
