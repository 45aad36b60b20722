//! Channel configuration encoder.
//!
//! Translates a [`TransferConfig`] into the packed configuration word and the
//! per-channel register values. Encoding is pure: nothing is written until the
//! lifecycle controller applies the resulting [`ChannelProgram`], so a
//! rejected descriptor never leaves a half-programmed channel behind.

use crate::driver::channel::{Channel, ChannelRegs};
use crate::driver::config::{AddressMode, BurstType, DataWidth, TransferConfig, TransferMode};
use crate::driver::error::ConfigResult;
use crate::internal::register::hdma::*;

/// Configuration word fields that every transfer starts from
pub const CON_BASE: u32 = HDMA_SLICE_MODE_DIS
    | HDMA_CH_EN
    | HDMA_INT_MODE_INTERRUPT
    | HDMA_FLY_DIS
    | HDMA_BURST_SINGLE
    | HDMA_DIR_SRC_INC
    | HDMA_DIR_DST_INC
    | HDMA_DATA_BYTE
    | HDMA_SWDMA_OP_NO
    | HDMA_HWDMA_TRIGGER_DIS;

/// Configuration word written on teardown
pub const CON_TEARDOWN: u32 = HDMA_CPNCNTD_CLR;

// =============================================================================
// Field Encoders
// =============================================================================

/// Burst type field value
#[inline]
pub const fn burst_bits(burst: BurstType) -> u32 {
    match burst {
        BurstType::Single => HDMA_BURST_SINGLE,
        BurstType::Incr4 => HDMA_BURST_INCR4,
        BurstType::Incr8 => HDMA_BURST_INCR8,
        BurstType::Incr16 => HDMA_BURST_INCR16,
    }
}

/// Data size field value
#[inline]
pub const fn width_bits(width: DataWidth) -> u32 {
    match width {
        DataWidth::Byte => HDMA_DATA_BYTE,
        DataWidth::HalfWord => HDMA_DATA_HALFWORD,
        DataWidth::Word => HDMA_DATA_WORD,
    }
}

/// Source/destination fixed-address bits
#[inline]
pub const fn address_mode_bits(src: AddressMode, dst: AddressMode) -> u32 {
    let mut bits = 0;
    if matches!(src, AddressMode::Fixed) {
        bits |= HDMA_DIR_SRC_FIXED;
    }
    if matches!(dst, AddressMode::Fixed) {
        bits |= HDMA_DIR_DST_FIXED;
    }
    bits
}

/// Trigger bits: hardware trigger for slice/hardware modes, software start otherwise
#[inline]
pub const fn trigger_bits(mode: TransferMode) -> u32 {
    if mode.is_hardware_triggered() {
        HDMA_HWDMA_TRIGGER_EN
    } else {
        HDMA_SWDMA_OP_START
    }
}

/// Compose the configuration word for a transfer
///
/// Does not validate; see [`build_config`].
pub const fn config_word(transfer: &TransferConfig) -> u32 {
    let mut con = CON_BASE;
    if transfer.is_slice() {
        con |= HDMA_SLICE_MODE_EN;
    }
    con |= burst_bits(transfer.burst);
    con |= hdma_ext_hdreq_sel(transfer.hardware_request as u32);
    con |= address_mode_bits(transfer.src_mode, transfer.dst_mode);
    con |= width_bits(transfer.width);
    con |= trigger_bits(transfer.mode);
    con
}

/// Transfer count register value: beats minus one
///
/// `byte_count` must already be validated as a non-zero multiple of the
/// burst size.
#[inline]
pub const fn count_value(transfer: &TransferConfig) -> u32 {
    transfer.byte_count / transfer.width.bytes() - 1
}

// =============================================================================
// Channel Program
// =============================================================================

/// Slice register values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SliceProgram {
    /// Slice count register value (`slice_count - 1`)
    pub slice_cnt: u32,
    /// Buffer size register value (`buffer_size - width`)
    pub buf_size: u32,
}

/// Everything needed to arm one channel for one transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelProgram {
    /// Target channel
    pub channel: Channel,
    /// Register layout of the target channel
    pub regs: &'static ChannelRegs,
    /// Configuration word, written last
    pub con: u32,
    /// Source address register value
    pub src: u32,
    /// Destination address register value
    pub dst: u32,
    /// Transfer count register value
    pub cnt: u32,
    /// Slice registers, present only in slice mode
    pub slice: Option<SliceProgram>,
}

/// Encode `transfer` for `channel`
///
/// Validation happens first, so an error means no register value was
/// produced:
/// - [`ConfigError::InvalidLength`](crate::ConfigError::InvalidLength) for a zero byte count
/// - [`ConfigError::MisalignedCount`](crate::ConfigError::MisalignedCount) when the byte
///   count is not a multiple of burst length times width
/// - [`ConfigError::InvalidHardwareRequest`](crate::ConfigError::InvalidHardwareRequest)
/// - [`ConfigError::InvalidSliceConfig`](crate::ConfigError::InvalidSliceConfig)
pub fn build_config(channel: Channel, transfer: &TransferConfig) -> ConfigResult<ChannelProgram> {
    transfer.validate()?;

    let slice = match (transfer.is_slice(), transfer.slice) {
        (true, Some(s)) => Some(SliceProgram {
            slice_cnt: s.slice_count - 1,
            buf_size: s.buffer_size - transfer.width.bytes(),
        }),
        _ => None,
    };

    Ok(ChannelProgram {
        channel,
        regs: channel.regs(),
        con: config_word(transfer),
        src: transfer.src_addr,
        dst: transfer.dst_addr,
        cnt: count_value(transfer),
        slice,
    })
}
