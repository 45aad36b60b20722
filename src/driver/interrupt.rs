//! Per-channel interrupt events and notifier callbacks.
//!
//! This module provides [`ChannelEvents`] for parsing one channel's bits out
//! of the shared interrupt status register, and [`Notifier`] for the
//! framework-supplied callbacks those events are reported to.

use crate::driver::channel::Channel;

// =============================================================================
// Channel Events
// =============================================================================

/// Interrupt events of one channel, parsed from the shared status register
///
/// # Example
///
/// ```ignore
/// let events = ChannelEvents::from_raw(Channel::Ch0, regs.read32(HDMA_ISR_OFFSET));
/// if events.complete {
///     // Transfer finished
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelEvents {
    /// Transfer complete
    pub complete: bool,
    /// Page finished (slice mode)
    pub page: bool,
    /// Page accumulation counter overflowed (slice mode)
    pub page_overflow: bool,
}

impl ChannelEvents {
    /// Parse `channel`'s bits from a raw status value, ignoring all others
    #[inline]
    pub fn from_raw(channel: Channel, status: u32) -> Self {
        let regs = channel.regs();
        Self {
            complete: (status & regs.complete_act) != 0,
            page: (status & regs.page_act) != 0,
            page_overflow: (status & regs.page_ovf_act) != 0,
        }
    }

    /// Convert back to `channel`'s bit positions
    #[inline]
    pub fn to_raw(&self, channel: Channel) -> u32 {
        let regs = channel.regs();
        let mut val = 0u32;
        if self.complete {
            val |= regs.complete_act;
        }
        if self.page {
            val |= regs.page_act;
        }
        if self.page_overflow {
            val |= regs.page_ovf_act;
        }
        val
    }

    /// Check if any event occurred
    #[inline]
    pub fn any(&self) -> bool {
        self.complete || self.page || self.page_overflow
    }
}

// =============================================================================
// Notifier
// =============================================================================

/// Callback invoked with the channel that raised the event
///
/// Callbacks run in interrupt context.
pub type EventCallback<'a> = &'a (dyn Fn(Channel) + Sync);

/// Framework callbacks for channel events
///
/// Every callback is optional; an event without a registered callback is
/// acknowledged and dropped. Context travels inside the closure.
///
/// ```ignore
/// let done = AtomicBool::new(false);
/// let on_done = |_ch| done.store(true, Ordering::Release);
/// let notifier = Notifier::new().with_complete(&on_done);
/// ```
#[derive(Clone, Copy, Default)]
pub struct Notifier<'a> {
    complete: Option<EventCallback<'a>>,
    page_interrupt: Option<EventCallback<'a>>,
    page_overflow: Option<EventCallback<'a>>,
}

impl<'a> Notifier<'a> {
    /// Notifier with no callbacks
    pub const fn new() -> Self {
        Self {
            complete: None,
            page_interrupt: None,
            page_overflow: None,
        }
    }

    /// Set the transfer-complete callback
    #[must_use]
    pub const fn with_complete(mut self, f: EventCallback<'a>) -> Self {
        self.complete = Some(f);
        self
    }

    /// Set the page-interrupt callback
    #[must_use]
    pub const fn with_page_interrupt(mut self, f: EventCallback<'a>) -> Self {
        self.page_interrupt = Some(f);
        self
    }

    /// Set the page-accumulation-overflow callback
    #[must_use]
    pub const fn with_page_overflow(mut self, f: EventCallback<'a>) -> Self {
        self.page_overflow = Some(f);
        self
    }

    /// Report `events` in the order complete, page, overflow
    pub fn notify(&self, channel: Channel, events: ChannelEvents) {
        if events.complete {
            if let Some(f) = self.complete {
                f(channel);
            }
        }
        if events.page {
            if let Some(f) = self.page_interrupt {
                f(channel);
            }
        }
        if events.page_overflow {
            if let Some(f) = self.page_overflow {
                f(channel);
            }
        }
    }
}

impl core::fmt::Debug for Notifier<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Notifier")
            .field("complete", &self.complete.is_some())
            .field("page_interrupt", &self.page_interrupt.is_some())
            .field("page_overflow", &self.page_overflow.is_some())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
