//! Interrupt Subsystem Interface
//!
//! The driver does not own the interrupt controller. It consumes two
//! primitives from it, registering and unregistering a handler for a line,
//! expressed here as the [`InterruptController`] trait. The handler itself is
//! an [`InterruptHandler`] trait object, which carries both the entry point
//! and its context.

use crate::driver::error::IrqResult;

/// Interrupt line identifier as understood by the interrupt subsystem
pub type Irq = u32;

/// Entry point invoked when an interrupt line asserts
///
/// Handlers are installed from framework context and run from interrupt
/// context, so they must be `Sync`.
pub trait InterruptHandler: Sync {
    /// Service the interrupt
    fn handle_interrupt(&self);
}

/// Handler registration primitives provided by the interrupt subsystem
///
/// Implementations must serialize delivery for a line: the handler registered
/// for `irq` never runs concurrently with itself.
pub trait InterruptController<'a>: Sync {
    /// Route `irq` to `handler`
    ///
    /// Returns [`IrqError::RequestFailed`](crate::driver::error::IrqError::RequestFailed)
    /// if the line cannot be claimed.
    fn register_handler(&self, irq: Irq, handler: &'a dyn InterruptHandler) -> IrqResult<()>;

    /// Stop routing `irq`
    fn unregister_handler(&self, irq: Irq);
}
