//! Channel identity and per-channel register layout.
//!
//! The controller has exactly two channels. Everything that differs between
//! them (register offsets, interrupt bits, default name) is looked up through
//! [`ChannelRegs::for_channel`], so the encoder, lifecycle and event code is
//! written once for both.

use crate::driver::error::{ConfigError, ConfigResult};
use crate::internal::constants::{CH0_NAME, CH1_NAME, CHANNEL_COUNT};
use crate::internal::register::hdma::*;

// =============================================================================
// Channel
// =============================================================================

/// One of the two logical HDMA channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Channel {
    /// Channel 0
    Ch0 = 0,
    /// Channel 1
    Ch1 = 1,
}

impl Channel {
    /// Both channels, in dispatch order
    pub const ALL: [Channel; CHANNEL_COUNT] = [Channel::Ch0, Channel::Ch1];

    /// Convert a raw channel number
    ///
    /// Returns [`ConfigError::UnknownChannel`] for anything but 0 or 1.
    pub const fn from_index(index: u32) -> ConfigResult<Self> {
        match index {
            0 => Ok(Channel::Ch0),
            1 => Ok(Channel::Ch1),
            _ => Err(ConfigError::UnknownChannel),
        }
    }

    /// Table index of this channel
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Default human-readable name
    pub const fn default_name(self) -> &'static str {
        match self {
            Channel::Ch0 => CH0_NAME,
            Channel::Ch1 => CH1_NAME,
        }
    }

    /// Register layout of this channel
    #[inline]
    pub const fn regs(self) -> &'static ChannelRegs {
        ChannelRegs::for_channel(self)
    }
}

impl TryFrom<u32> for Channel {
    type Error = ConfigError;

    fn try_from(index: u32) -> ConfigResult<Self> {
        Self::from_index(index)
    }
}

impl From<Channel> for u32 {
    fn from(channel: Channel) -> Self {
        channel as u32
    }
}

// =============================================================================
// Register Offset Table
// =============================================================================

/// Register offsets and interrupt bits belonging to one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelRegs {
    /// Configuration register
    pub con: usize,
    /// Source address register
    pub src: usize,
    /// Destination address register
    pub dst: usize,
    /// Transfer count register
    pub cnt: usize,
    /// Slice count register (slice mode)
    pub slice_cnt: usize,
    /// Page number count register (slice mode)
    pub page_cnt: usize,
    /// Buffer size register (slice mode)
    pub buf_size: usize,
    /// Page accumulation count register (slice mode)
    pub page_accum: usize,
    /// Transfer complete bit in the shared status register
    pub complete_act: u32,
    /// Page interrupt bit in the shared status register
    pub page_act: u32,
    /// Page accumulation overflow bit in the shared status register
    pub page_ovf_act: u32,
    /// All mask bits of this channel in the shared status register
    pub int_mask: u32,
}

const CH0_REGS: ChannelRegs = ChannelRegs {
    con: HDMA_CON0_OFFSET,
    src: HDMA_ISRC0_OFFSET,
    dst: HDMA_IDST0_OFFSET,
    cnt: HDMA_ICNT0_OFFSET,
    slice_cnt: HDMA_ISCNT0_OFFSET,
    page_cnt: HDMA_IPNCNT0_OFFSET,
    buf_size: HDMA_IADDR_BS0_OFFSET,
    page_accum: HDMA_PACNT0_OFFSET,
    complete_act: HDMA_CH0_INT_ACT,
    page_act: HDMA_CH0_PAGE_INT_ACT,
    page_ovf_act: HDMA_CH0_PAGE_ACCUM_OVF_INT_ACT,
    int_mask: HDMA_CH0_ALL_MASK,
};

const CH1_REGS: ChannelRegs = ChannelRegs {
    con: HDMA_CON1_OFFSET,
    src: HDMA_ISRC1_OFFSET,
    dst: HDMA_IDST1_OFFSET,
    cnt: HDMA_ICNT1_OFFSET,
    slice_cnt: HDMA_ISCNT1_OFFSET,
    page_cnt: HDMA_IPNCNT1_OFFSET,
    buf_size: HDMA_IADDR_BS1_OFFSET,
    page_accum: HDMA_PACNT1_OFFSET,
    complete_act: HDMA_CH1_INT_ACT,
    page_act: HDMA_CH1_PAGE_INT_ACT,
    page_ovf_act: HDMA_CH1_PAGE_ACCUM_OVF_INT_ACT,
    int_mask: HDMA_CH1_ALL_MASK,
};

impl ChannelRegs {
    /// Look up the layout for `channel`
    #[inline]
    pub const fn for_channel(channel: Channel) -> &'static ChannelRegs {
        match channel {
            Channel::Ch0 => &CH0_REGS,
            Channel::Ch1 => &CH1_REGS,
        }
    }

    /// All active (status) bits of this channel
    #[inline]
    pub const fn int_act(&self) -> u32 {
        self.complete_act | self.page_act | self.page_ovf_act
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_accepts_only_two_channels() {
        assert_eq!(Channel::from_index(0), Ok(Channel::Ch0));
        assert_eq!(Channel::from_index(1), Ok(Channel::Ch1));
        assert_eq!(Channel::from_index(2), Err(ConfigError::UnknownChannel));
        assert_eq!(
            Channel::try_from(u32::MAX),
            Err(ConfigError::UnknownChannel)
        );
    }

    #[test]
    fn index_round_trips_through_u32() {
        for ch in Channel::ALL {
            assert_eq!(Channel::from_index(u32::from(ch)), Ok(ch));
            assert_eq!(ch.index() as u32, u32::from(ch));
        }
    }

    #[test]
    fn channel_register_sets_are_disjoint() {
        let a = Channel::Ch0.regs();
        let b = Channel::Ch1.regs();
        let offs_a = [
            a.con,
            a.src,
            a.dst,
            a.cnt,
            a.slice_cnt,
            a.page_cnt,
            a.buf_size,
            a.page_accum,
        ];
        let offs_b = [
            b.con,
            b.src,
            b.dst,
            b.cnt,
            b.slice_cnt,
            b.page_cnt,
            b.buf_size,
            b.page_accum,
        ];
        for off in offs_a {
            assert!(
                !offs_b.contains(&off),
                "offset {off:#x} shared by both channels"
            );
            assert_ne!(off, HDMA_ISR_OFFSET);
        }
        assert_eq!(a.int_act() & b.int_act(), 0);
        assert_eq!(a.int_mask & b.int_mask, 0);
    }

    #[test]
    fn default_names() {
        assert_eq!(Channel::Ch0.default_name(), "PANTHER7 HDMA Channel 0");
        assert_eq!(Channel::Ch1.default_name(), "PANTHER7 HDMA Channel 1");
    }
}
