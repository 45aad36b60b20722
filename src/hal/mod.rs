//! Hardware Abstraction Layer
//!
//! This module provides the hardware-facing seams of the driver:
//!
//! - [`registers`]: 32-bit register access relative to the controller base
//! - [`irq`]: The interrupt subsystem interface consumed by the driver
//!
//! Both are traits, so the driver core can run against mocks on the host.

pub mod irq;
pub mod registers;

pub use irq::{InterruptController, InterruptHandler, Irq};
pub use registers::{Mmio, RegisterAccess};
