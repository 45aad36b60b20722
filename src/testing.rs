//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the HDMA driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]
#![allow(clippy::new_without_default)]

extern crate std;

use std::collections::BTreeMap;
use std::vec::Vec;

use crate::driver::channel::Channel;
use crate::driver::error::{IrqError, IrqResult};
use crate::hal::irq::{InterruptController, InterruptHandler, Irq};
use crate::hal::registers::RegisterAccess;
use crate::sync::CriticalSectionCell;

// =============================================================================
// Mock Register File
// =============================================================================

/// Mock register block for testing without hardware
///
/// Unset registers read as zero. Every write is recorded in order, so tests
/// can check both the final register values and the write sequence. The
/// block is `Sync` and const-constructible, so it can sit in a `static`
/// shared with interrupt handlers.
///
/// # Example
///
/// ```ignore
/// let regs = MockRegisters::new();
/// regs.set(HDMA_ISR_OFFSET, HDMA_CH0_INT_ACT);
///
/// let channel = HdmaChannel::new(Channel::Ch0, &regs, &shared, &notifier);
/// channel.handle();
/// assert_eq!(regs.get(HDMA_ISR_OFFSET), 0);
/// ```
pub struct MockRegisters {
    /// Register values by offset
    registers: CriticalSectionCell<BTreeMap<usize, u32>>,
    /// Record of writes: (offset, value)
    write_log: CriticalSectionCell<Vec<(usize, u32)>>,
}

impl MockRegisters {
    /// Create an empty register block
    pub const fn new() -> Self {
        Self {
            registers: CriticalSectionCell::new(BTreeMap::new()),
            write_log: CriticalSectionCell::new(Vec::new()),
        }
    }

    /// Preset a register value without logging a write
    pub fn set(&self, offset: usize, value: u32) {
        self.registers.with(|regs| {
            regs.insert(offset, value);
        });
    }

    /// Current value of a register (zero if never written)
    pub fn get(&self, offset: usize) -> u32 {
        self.registers
            .with_ref(|regs| regs.get(&offset).copied().unwrap_or(0))
    }

    /// All writes made so far
    pub fn writes(&self) -> Vec<(usize, u32)> {
        self.write_log.with_ref(Vec::clone)
    }

    /// Values written to one register, in order
    pub fn writes_to(&self, offset: usize) -> Vec<u32> {
        self.write_log.with_ref(|log| {
            log.iter()
                .filter(|(off, _)| *off == offset)
                .map(|(_, value)| *value)
                .collect()
        })
    }

    /// Position of the first write to `offset` in the write log
    pub fn first_write_index(&self, offset: usize) -> Option<usize> {
        self.write_log
            .with_ref(|log| log.iter().position(|(off, _)| *off == offset))
    }

    /// Clear the write log
    pub fn clear_writes(&self) {
        self.write_log.with(Vec::clear);
    }
}

impl Default for MockRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterAccess for MockRegisters {
    fn read32(&self, offset: usize) -> u32 {
        self.get(offset)
    }

    fn write32(&self, offset: usize, value: u32) {
        self.set(offset, value);
        self.write_log.with(|log| log.push((offset, value)));
    }
}

// =============================================================================
// Mock Interrupt Controller
// =============================================================================

/// Call made to the mock interrupt controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerCall {
    Register(Irq),
    Unregister(Irq),
}

/// Mock interrupt subsystem holding at most one handler
///
/// [`fire`](Self::fire) plays the role of the hardware line asserting.
pub struct MockInterruptController<'a> {
    handler: CriticalSectionCell<Option<&'a dyn InterruptHandler>>,
    calls: CriticalSectionCell<Vec<ControllerCall>>,
    fail: CriticalSectionCell<bool>,
}

impl MockInterruptController<'_> {
    pub const fn new() -> Self {
        Self {
            handler: CriticalSectionCell::new(None),
            calls: CriticalSectionCell::new(Vec::new()),
            fail: CriticalSectionCell::new(false),
        }
    }

    /// Make subsequent registrations fail with [`IrqError::RequestFailed`]
    pub fn set_fail(&self, fail: bool) {
        self.fail.with(|f| *f = fail);
    }

    /// Registration calls seen so far (failed ones are not recorded)
    pub fn calls(&self) -> Vec<ControllerCall> {
        self.calls.with_ref(Vec::clone)
    }

    /// Whether a handler is currently registered
    pub fn is_registered(&self) -> bool {
        self.handler.with_ref(Option::is_some)
    }

    /// Assert the line; returns false if nothing was registered
    ///
    /// The handler runs outside the mock's own critical section.
    pub fn fire(&self) -> bool {
        let handler = self.handler.with_ref(|h| *h);
        match handler {
            Some(h) => {
                h.handle_interrupt();
                true
            }
            None => false,
        }
    }
}

impl<'a> InterruptController<'a> for MockInterruptController<'a> {
    fn register_handler(&self, irq: Irq, handler: &'a dyn InterruptHandler) -> IrqResult<()> {
        if self.fail.with_ref(|f| *f) {
            return Err(IrqError::RequestFailed);
        }
        self.handler.with(|h| *h = Some(handler));
        self.calls.with(|c| c.push(ControllerCall::Register(irq)));
        Ok(())
    }

    fn unregister_handler(&self, irq: Irq) {
        self.handler.with(|h| *h = None);
        self.calls.with(|c| c.push(ControllerCall::Unregister(irq)));
    }
}

// =============================================================================
// Handlers and Callbacks
// =============================================================================

/// Ordered log of handler tags
pub struct CallLog {
    entries: CriticalSectionCell<Vec<&'static str>>,
}

impl CallLog {
    pub const fn new() -> Self {
        Self {
            entries: CriticalSectionCell::new(Vec::new()),
        }
    }

    pub fn push(&self, tag: &'static str) {
        self.entries.with(|e| e.push(tag));
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.with_ref(Vec::clone)
    }
}

/// Handler that appends its tag to a shared log when run
pub struct MockHandler<'l> {
    tag: &'static str,
    log: &'l CallLog,
}

impl<'l> MockHandler<'l> {
    pub fn new(tag: &'static str, log: &'l CallLog) -> Self {
        Self { tag, log }
    }
}

impl InterruptHandler for MockHandler<'_> {
    fn handle_interrupt(&self) {
        self.log.push(self.tag);
    }
}

/// Kind of notifier callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Complete,
    Page,
    PageOverflow,
}

/// Records notifier callbacks in the order they fire
pub struct EventRecorder {
    events: CriticalSectionCell<Vec<(EventKind, Channel)>>,
}

impl EventRecorder {
    pub const fn new() -> Self {
        Self {
            events: CriticalSectionCell::new(Vec::new()),
        }
    }

    pub fn record(&self, kind: EventKind, channel: Channel) {
        self.events.with(|e| e.push((kind, channel)));
    }

    pub fn events(&self) -> Vec<(EventKind, Channel)> {
        self.events.with_ref(Vec::clone)
    }

    /// Number of callbacks of `kind` seen for `channel`
    pub fn count(&self, kind: EventKind, channel: Channel) -> usize {
        self.events.with_ref(|e| {
            e.iter()
                .filter(|&&(k, ch)| k == kind && ch == channel)
                .count()
        })
    }

    pub fn clear(&self) {
        self.events.with(Vec::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_registers_log_writes_not_presets() {
        let regs = MockRegisters::new();
        regs.set(0x10, 5);
        regs.write32(0x10, 6);
        regs.write32(0x14, 7);
        assert_eq!(regs.get(0x10), 6);
        assert_eq!(regs.writes(), [(0x10, 6), (0x14, 7)]);
        assert_eq!(regs.writes_to(0x14), [7]);
        assert_eq!(regs.first_write_index(0x14), Some(1));
        assert_eq!(regs.get(0x99), 0);
    }

    #[test]
    fn mock_controller_fire_without_handler() {
        let intc = MockInterruptController::new();
        assert!(!intc.fire());
        assert!(!intc.is_registered());
    }

    #[test]
    fn event_recorder_counts() {
        let rec = EventRecorder::new();
        rec.record(EventKind::Complete, Channel::Ch0);
        rec.record(EventKind::Complete, Channel::Ch1);
        rec.record(EventKind::Page, Channel::Ch0);
        assert_eq!(rec.count(EventKind::Complete, Channel::Ch0), 1);
        assert_eq!(rec.count(EventKind::PageOverflow, Channel::Ch0), 0);
        rec.clear();
        assert!(rec.events().is_empty());
    }
}
