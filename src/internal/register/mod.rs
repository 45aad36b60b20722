//! Memory-mapped register access for the HDMA controller
//!
//! All register access is volatile to ensure proper hardware interaction.
//! Addresses are absolute; the [`crate::hal::registers::Mmio`] accessor adds
//! the controller base to the offsets defined in [`hdma`].

pub mod hdma;

/// Read a 32-bit register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn read_reg(addr: usize) -> u32 {
    unsafe { core::ptr::read_volatile(addr as *const u32) }
}

/// Write a 32-bit value to a register at the given address
///
/// # Safety
/// The caller must ensure the address is valid and properly aligned.
#[inline(always)]
pub unsafe fn write_reg(addr: usize, value: u32) {
    unsafe { core::ptr::write_volatile(addr as *mut u32, value) }
}
