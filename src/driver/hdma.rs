//! HDMA channel lifecycle and event dispatch.
//!
//! [`HdmaChannel`] is one logical channel of the controller. It applies
//! encoded [`ChannelProgram`](crate::driver::encoder::ChannelProgram)s to the
//! hardware, tears transfers down again, and services its share of the
//! interrupt line. The framework drives it through the [`DmaOps`] operation
//! table.
//!
//! # Ordering
//!
//! `enable` unmasks the channel's interrupt sources, writes the address,
//! count and slice registers, and writes the configuration word last. The
//! configuration write is what arms the channel, so everything it depends on
//! is already in place when it lands.
//!
//! `disable` stops the channel first, then acknowledges and masks its
//! interrupt sources, and finally zeroes the data-path registers.
//!
//! # Concurrency
//!
//! Lifecycle calls run in framework context and are not synchronized against
//! interrupt delivery. The framework serializes lifecycle calls per channel;
//! the shared status register is only touched by read-modify-write on this
//! channel's own bits. A channel is `Sync`, so it can live in a `static` and
//! be installed as the handler for the shared line.

use crate::driver::channel::Channel;
use crate::driver::config::{State, TransferConfig};
use crate::driver::encoder::{CON_TEARDOWN, build_config};
use crate::driver::error::{Result, StateError};
use crate::driver::interrupt::{ChannelEvents, Notifier};
use crate::hal::irq::{InterruptHandler, Irq};
use crate::hal::registers::RegisterAccess;
use crate::internal::register::hdma::HDMA_ISR_OFFSET;
use crate::sync::{CriticalSectionCell, SharedIrq};

// =============================================================================
// Operation Table
// =============================================================================

/// Operations the generic DMA framework invokes on a channel
pub trait DmaOps<'a> {
    /// Claim this channel's slot on the shared interrupt line
    fn request(&'a self) -> Result<()>;

    /// Release this channel's slot on the shared interrupt line
    fn free(&self);

    /// Program and arm a transfer
    fn enable(&self, transfer: &TransferConfig) -> Result<()>;

    /// Stop the channel and return its registers to a clean state
    fn disable(&self) -> Result<()>;

    /// Write the slice-mode page count
    fn set_page_number(&self, pages: u32) -> Result<()>;
}

// =============================================================================
// Channel
// =============================================================================

/// One HDMA channel bound to a register block, a shared interrupt line and a
/// framework notifier
///
/// # Example
///
/// ```ignore
/// let regs = unsafe { Mmio::new(HDMA_BASE) };
/// let shared = SharedIrq::new(HDMA_IRQ, &intc);
/// let notifier = Notifier::new().with_complete(&on_complete);
///
/// let ch0 = HdmaChannel::new(Channel::Ch0, regs, &shared, &notifier);
/// ch0.request()?;
/// ch0.enable(&TransferConfig::new(src, dst, 64).with_burst(BurstType::Incr4))?;
/// ```
pub struct HdmaChannel<'a, R: RegisterAccess + 'a> {
    channel: Channel,
    name: &'a str,
    regs: R,
    shared: &'a SharedIrq<'a>,
    notifier: &'a Notifier<'a>,
    lifecycle: CriticalSectionCell<Lifecycle>,
}

#[derive(Clone, Copy)]
struct Lifecycle {
    state: State,
    /// Last armed transfer used the slice registers
    slice_armed: bool,
}

impl<'a, R: RegisterAccess + 'a> HdmaChannel<'a, R> {
    /// Create a disabled channel with its default name
    pub const fn new(
        channel: Channel,
        regs: R,
        shared: &'a SharedIrq<'a>,
        notifier: &'a Notifier<'a>,
    ) -> Self {
        Self::with_name(channel, channel.default_name(), regs, shared, notifier)
    }

    /// Create a disabled channel with a custom name
    pub const fn with_name(
        channel: Channel,
        name: &'a str,
        regs: R,
        shared: &'a SharedIrq<'a>,
        notifier: &'a Notifier<'a>,
    ) -> Self {
        Self {
            channel,
            name,
            regs,
            shared,
            notifier,
            lifecycle: CriticalSectionCell::new(Lifecycle {
                state: State::Disabled,
                slice_armed: false,
            }),
        }
    }

    /// Channel this instance drives
    #[inline]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Human-readable channel name
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Interrupt line shared by both channels
    #[inline]
    pub fn irq(&self) -> Irq {
        self.shared.irq()
    }

    /// Current lifecycle state
    #[inline]
    pub fn state(&self) -> State {
        self.lifecycle.with_ref(|l| l.state)
    }

    /// Register access backend
    #[inline]
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Claim this channel's slot on the shared interrupt line
    ///
    /// # Errors
    ///
    /// [`IrqError`](crate::IrqError) if the slot is taken or the interrupt
    /// subsystem refuses the line. The channel state is unchanged either way.
    pub fn request(&'a self) -> Result<()> {
        self.shared.request(self.channel, self)?;
        Ok(())
    }

    /// Release this channel's slot on the shared interrupt line
    pub fn free(&self) {
        self.shared.free(self.channel);
    }

    /// Program and arm a transfer
    ///
    /// The transfer is encoded before anything is written; a rejected
    /// transfer leaves every register untouched.
    ///
    /// # Errors
    ///
    /// - [`StateError::AlreadyEnabled`] if the channel is enabled
    /// - [`ConfigError`](crate::ConfigError) if the transfer is invalid
    pub fn enable(&self, transfer: &TransferConfig) -> Result<()> {
        if self.state() == State::Enabled {
            return Err(StateError::AlreadyEnabled.into());
        }

        let program = match build_config(self.channel, transfer) {
            Ok(p) => p,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{}: rejected transfer: {}", self.name, e);
                return Err(e.into());
            }
        };
        let regs = program.regs;

        // Unmask completion, page and overflow for this channel only
        self.regs.clear_bits32(HDMA_ISR_OFFSET, regs.int_mask);

        self.regs.write32(regs.src, program.src);
        self.regs.write32(regs.dst, program.dst);
        self.regs.write32(regs.cnt, program.cnt);
        if let Some(slice) = program.slice {
            self.regs.write32(regs.slice_cnt, slice.slice_cnt);
            self.regs.write32(regs.buf_size, slice.buf_size);
        }

        // Arms the channel
        self.regs.write32(regs.con, program.con);

        self.lifecycle.with(|l| {
            l.state = State::Enabled;
            l.slice_armed = program.slice.is_some();
        });

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: enabled con={:#010x} cnt={}",
            self.name,
            program.con,
            program.cnt
        );

        Ok(())
    }

    /// Stop the channel and return its registers to a clean state
    ///
    /// Safe to call on a channel that is already disabled.
    pub fn disable(&self) -> Result<()> {
        let regs = self.channel.regs();

        self.regs.write32(regs.con, CON_TEARDOWN);

        // Ack pending status, then mask all three sources
        self.regs.modify32(HDMA_ISR_OFFSET, |v| v & !regs.int_act());
        self.regs.set_bits32(HDMA_ISR_OFFSET, regs.int_mask);

        self.regs.write32(regs.src, 0);
        self.regs.write32(regs.dst, 0);
        self.regs.write32(regs.cnt, 0);
        if self.lifecycle.with_ref(|l| l.slice_armed) {
            self.regs.write32(regs.slice_cnt, 0);
            self.regs.write32(regs.page_cnt, 0);
            self.regs.write32(regs.buf_size, 0);
            self.regs.write32(regs.page_accum, 0);
        }

        self.lifecycle.with(|l| {
            l.state = State::Disabled;
            l.slice_armed = false;
        });

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: disabled", self.name);

        Ok(())
    }

    /// Write the slice-mode page count
    pub fn set_page_number(&self, pages: u32) -> Result<()> {
        self.regs.write32(self.channel.regs().page_cnt, pages);
        Ok(())
    }

    /// Acknowledge and report this channel's pending interrupt events
    ///
    /// Only this channel's status bits are read, cleared or reported. When
    /// none are set the status register is not written at all, which is the
    /// common case when the other channel raised the line.
    pub fn handle(&self) -> ChannelEvents {
        let act = self.channel.regs().int_act();
        let status = self.regs.read32(HDMA_ISR_OFFSET) & act;
        if status == 0 {
            return ChannelEvents::default();
        }

        self.regs.clear_bits32(HDMA_ISR_OFFSET, status);

        let events = ChannelEvents::from_raw(self.channel, status);
        self.notifier.notify(self.channel, events);
        events
    }
}

impl<'a, R: RegisterAccess + 'a> InterruptHandler for HdmaChannel<'a, R> {
    fn handle_interrupt(&self) {
        self.handle();
    }
}

impl<'a, R: RegisterAccess + 'a> DmaOps<'a> for HdmaChannel<'a, R> {
    fn request(&'a self) -> Result<()> {
        HdmaChannel::request(self)
    }

    fn free(&self) {
        HdmaChannel::free(self);
    }

    fn enable(&self, transfer: &TransferConfig) -> Result<()> {
        HdmaChannel::enable(self, transfer)
    }

    fn disable(&self) -> Result<()> {
        HdmaChannel::disable(self)
    }

    fn set_page_number(&self, pages: u32) -> Result<()> {
        HdmaChannel::set_page_number(self, pages)
    }
}

impl<'a, R: RegisterAccess + 'a> core::fmt::Debug for HdmaChannel<'a, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HdmaChannel")
            .field("channel", &self.channel)
            .field("name", &self.name)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
