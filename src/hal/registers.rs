//! Register Access HAL
//!
//! This module provides the primitive 32-bit register accessor used by every
//! other layer of the driver. Offsets are relative to the controller base
//! supplied when the accessor is created.
//!
//! The [`RegisterAccess`] trait can be implemented by different backends:
//! [`Mmio`] talks to the real controller, while tests substitute a recording
//! mock.

use crate::internal::register::{read_reg, write_reg};

// =============================================================================
// Register Access Trait
// =============================================================================

/// Trait for 32-bit register access relative to a controller base
///
/// There are no retries and no validation. A bad offset or a bus fault is a
/// fatal condition, not a recoverable error.
///
/// One accessor is used from both framework and interrupt context.
pub trait RegisterAccess: Sync {
    /// Read the register at `offset`
    fn read32(&self, offset: usize) -> u32;

    /// Write `value` to the register at `offset`
    fn write32(&self, offset: usize, value: u32);

    /// Modify a register using a read-modify-write operation
    #[inline]
    fn modify32<F>(&self, offset: usize, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read32(offset);
        self.write32(offset, f(value));
    }

    /// Set bits in a register (read-modify-write)
    #[inline]
    fn set_bits32(&self, offset: usize, bits: u32) {
        self.modify32(offset, |v| v | bits);
    }

    /// Clear bits in a register (read-modify-write)
    #[inline]
    fn clear_bits32(&self, offset: usize, bits: u32) {
        self.modify32(offset, |v| v & !bits);
    }
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for &T {
    #[inline]
    fn read32(&self, offset: usize) -> u32 {
        (**self).read32(offset)
    }

    #[inline]
    fn write32(&self, offset: usize, value: u32) {
        (**self).write32(offset, value);
    }
}

// =============================================================================
// Memory-Mapped Backend
// =============================================================================

/// Volatile memory-mapped access to one HDMA controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// Create an accessor for the controller at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the address of an HDMA register block, mapped and
    /// 4-byte aligned, for as long as this accessor (or a copy) is used.
    /// The caller is responsible for not creating conflicting drivers for the
    /// same block.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Controller base address
    pub const fn base(&self) -> usize {
        self.base
    }
}

impl RegisterAccess for Mmio {
    #[inline(always)]
    fn read32(&self, offset: usize) -> u32 {
        // SAFETY: `Mmio::new` requires `base` to map the register block.
        unsafe { read_reg(self.base + offset) }
    }

    #[inline(always)]
    fn write32(&self, offset: usize, value: u32) {
        // SAFETY: `Mmio::new` requires `base` to map the register block.
        unsafe { write_reg(self.base + offset, value) }
    }
}
