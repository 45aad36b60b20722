//! Shared interrupt line demultiplexer.
//!
//! Both HDMA channels raise the same interrupt line. [`SharedIrq`] owns the
//! line registration with the interrupt subsystem and keeps one handler slot
//! per channel. When the line fires, every installed handler runs, channel 0
//! first, and each handler decides from the status register whether the
//! interrupt was for it.

use super::primitives::CriticalSectionCell;
use crate::driver::channel::Channel;
use crate::driver::error::{IrqError, IrqResult};
use crate::hal::irq::{InterruptController, InterruptHandler, Irq};
use crate::internal::constants::CHANNEL_COUNT;

/// Handler slots plus whether the line is currently routed to us
struct IrqTable<'a> {
    slots: [Option<&'a dyn InterruptHandler>; CHANNEL_COUNT],
    line_registered: bool,
}

/// Per-channel handler table for the shared HDMA interrupt line
///
/// The table is guarded by a critical section so installs and removals from
/// process context cannot tear a concurrent dispatch. Handlers are copied out
/// of the table first and invoked after the critical section ends.
///
/// # Example
///
/// ```ignore
/// let shared = SharedIrq::new(HDMA_IRQ, &intc);
/// let ch0 = HdmaChannel::new(Channel::Ch0, regs, &shared, &notifier);
/// ch0.request()?;
/// ```
pub struct SharedIrq<'a> {
    irq: Irq,
    controller: &'a dyn InterruptController<'a>,
    table: CriticalSectionCell<IrqTable<'a>>,
}

impl<'a> SharedIrq<'a> {
    /// Create an empty table for `irq`; nothing is registered yet
    pub const fn new(irq: Irq, controller: &'a dyn InterruptController<'a>) -> Self {
        Self {
            irq,
            controller,
            table: CriticalSectionCell::new(IrqTable {
                slots: [None; CHANNEL_COUNT],
                line_registered: false,
            }),
        }
    }

    /// Interrupt line served by this table
    #[inline]
    pub fn irq(&self) -> Irq {
        self.irq
    }

    /// Install `handler` for `channel`
    ///
    /// The first install registers the line with the interrupt subsystem. If
    /// that registration fails the table is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`IrqError::AlreadyRequested`] if `channel` already has a handler
    /// - [`IrqError::RequestFailed`] if the line could not be registered
    pub fn request(
        &'a self,
        channel: Channel,
        handler: &'a dyn InterruptHandler,
    ) -> IrqResult<()> {
        self.table.with(|table| {
            if table.slots[channel.index()].is_some() {
                return Err(IrqError::AlreadyRequested);
            }

            if !table.line_registered {
                if let Err(e) = self.controller.register_handler(self.irq, self) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("HDMA: failed to request irq {}", self.irq);
                    return Err(e);
                }
                table.line_registered = true;

                #[cfg(feature = "defmt")]
                defmt::info!("HDMA: irq {} registered", self.irq);
            }

            table.slots[channel.index()] = Some(handler);
            Ok(())
        })
    }

    /// Remove the handler for `channel`
    ///
    /// Removing the last handler unregisters the line. Freeing an empty slot
    /// does nothing.
    pub fn free(&self, channel: Channel) {
        self.table.with(|table| {
            table.slots[channel.index()] = None;

            if table.line_registered && table.slots.iter().all(Option::is_none) {
                self.controller.unregister_handler(self.irq);
                table.line_registered = false;

                #[cfg(feature = "defmt")]
                defmt::info!("HDMA: irq {} unregistered", self.irq);
            }
        });
    }

    /// Run every installed handler, channel 0 then channel 1
    pub fn dispatch(&self) {
        let slots = self.table.with_ref(|table| table.slots);
        for handler in slots.into_iter().flatten() {
            handler.handle_interrupt();
        }
    }

    /// Whether `channel` has a handler installed
    pub fn is_requested(&self, channel: Channel) -> bool {
        self.table.with_ref(|table| table.slots[channel.index()].is_some())
    }

    /// Whether the line is currently registered with the interrupt subsystem
    pub fn is_line_registered(&self) -> bool {
        self.table.with_ref(|table| table.line_registered)
    }
}

impl InterruptHandler for SharedIrq<'_> {
    fn handle_interrupt(&self) {
        self.dispatch();
    }
}

impl core::fmt::Debug for SharedIrq<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedIrq")
            .field("irq", &self.irq)
            .field("ch0", &self.is_requested(Channel::Ch0))
            .field("ch1", &self.is_requested(Channel::Ch1))
            .field("line_registered", &self.is_line_registered())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CallLog, ControllerCall, MockHandler, MockInterruptController};

    const IRQ: Irq = 21;

    #[test]
    fn first_request_registers_line_once() {
        let log = CallLog::new();
        let a = MockHandler::new("a", &log);
        let b = MockHandler::new("b", &log);
        let intc = MockInterruptController::new();
        let shared = SharedIrq::new(IRQ, &intc);

        shared.request(Channel::Ch0, &a).unwrap();
        assert!(shared.is_line_registered());
        shared.request(Channel::Ch1, &b).unwrap();

        assert_eq!(intc.calls(), [ControllerCall::Register(IRQ)]);
        assert!(shared.is_requested(Channel::Ch0));
        assert!(shared.is_requested(Channel::Ch1));
    }

    #[test]
    fn dispatch_runs_channel0_then_channel1() {
        let log = CallLog::new();
        let a = MockHandler::new("a", &log);
        let b = MockHandler::new("b", &log);
        let intc = MockInterruptController::new();
        let shared = SharedIrq::new(IRQ, &intc);

        // Install in reverse order; dispatch order is by channel.
        shared.request(Channel::Ch1, &b).unwrap();
        shared.request(Channel::Ch0, &a).unwrap();

        assert!(intc.fire());
        assert_eq!(log.entries(), ["a", "b"]);
    }

    #[test]
    fn freed_handler_no_longer_runs() {
        let log = CallLog::new();
        let a = MockHandler::new("a", &log);
        let b = MockHandler::new("b", &log);
        let intc = MockInterruptController::new();
        let shared = SharedIrq::new(IRQ, &intc);

        shared.request(Channel::Ch0, &a).unwrap();
        shared.request(Channel::Ch1, &b).unwrap();
        shared.free(Channel::Ch0);

        assert!(shared.is_line_registered());
        assert!(intc.fire());
        assert_eq!(log.entries(), ["b"]);
    }

    #[test]
    fn duplicate_request_rejected() {
        let log = CallLog::new();
        let a = MockHandler::new("a", &log);
        let b = MockHandler::new("b", &log);
        let intc = MockInterruptController::new();
        let shared = SharedIrq::new(IRQ, &intc);

        shared.request(Channel::Ch0, &a).unwrap();
        assert_eq!(
            shared.request(Channel::Ch0, &b),
            Err(IrqError::AlreadyRequested)
        );

        shared.dispatch();
        assert_eq!(log.entries(), ["a"]);
    }

    #[test]
    fn failed_registration_leaves_table_unchanged() {
        let log = CallLog::new();
        let a = MockHandler::new("a", &log);
        let intc = MockInterruptController::new();
        intc.set_fail(true);
        let shared = SharedIrq::new(IRQ, &intc);

        assert_eq!(
            shared.request(Channel::Ch0, &a),
            Err(IrqError::RequestFailed)
        );
        assert!(!shared.is_requested(Channel::Ch0));
        assert!(!shared.is_line_registered());

        intc.set_fail(false);
        shared.request(Channel::Ch0, &a).unwrap();
        assert!(shared.is_requested(Channel::Ch0));
    }

    #[test]
    fn last_free_unregisters_and_rerequest_registers_again() {
        let log = CallLog::new();
        let a = MockHandler::new("a", &log);
        let b = MockHandler::new("b", &log);
        let intc = MockInterruptController::new();
        let shared = SharedIrq::new(IRQ, &intc);

        shared.request(Channel::Ch0, &a).unwrap();
        shared.request(Channel::Ch1, &b).unwrap();
        shared.free(Channel::Ch1);
        shared.free(Channel::Ch0);
        assert!(!shared.is_line_registered());
        assert!(!intc.fire());

        shared.request(Channel::Ch1, &b).unwrap();
        assert_eq!(
            intc.calls(),
            [
                ControllerCall::Register(IRQ),
                ControllerCall::Unregister(IRQ),
                ControllerCall::Register(IRQ),
            ]
        );
    }

    #[test]
    fn free_empty_slot_is_noop() {
        let intc = MockInterruptController::new();
        let shared = SharedIrq::new(IRQ, &intc);
        shared.free(Channel::Ch1);
        assert!(intc.calls().is_empty());
        shared.dispatch();
    }
}
