//! HDMA Controller Register Definitions
//!
//! The Panther7 AHB DMA controller exposes two channels behind one register
//! block. Both channels share a single interrupt status/mask register; every
//! other register is duplicated per channel at a disjoint offset.

// =============================================================================
// Register Offsets
// =============================================================================

/// Channel 0 Configuration Register offset
pub const HDMA_CON0_OFFSET: usize = 0x00;
/// Channel 1 Configuration Register offset
pub const HDMA_CON1_OFFSET: usize = 0x04;
/// Channel 0 Initial Source Address Register offset
pub const HDMA_ISRC0_OFFSET: usize = 0x08;
/// Channel 0 Initial Destination Address Register offset
pub const HDMA_IDST0_OFFSET: usize = 0x0C;
/// Channel 0 Initial Transfer Count Register offset
pub const HDMA_ICNT0_OFFSET: usize = 0x10;
/// Channel 1 Initial Source Address Register offset
pub const HDMA_ISRC1_OFFSET: usize = 0x14;
/// Channel 1 Initial Destination Address Register offset
pub const HDMA_IDST1_OFFSET: usize = 0x18;
/// Channel 1 Initial Transfer Count Register offset
pub const HDMA_ICNT1_OFFSET: usize = 0x1C;
/// Interrupt Status/Mask Register offset (shared by both channels)
pub const HDMA_ISR_OFFSET: usize = 0x38;
/// Channel 0 Initial Slice Count Register offset
pub const HDMA_ISCNT0_OFFSET: usize = 0x40;
/// Channel 0 Initial Page Number Count Register offset
pub const HDMA_IPNCNT0_OFFSET: usize = 0x44;
/// Channel 0 Initial Address Buffer Size Register offset
pub const HDMA_IADDR_BS0_OFFSET: usize = 0x48;
/// Channel 1 Initial Slice Count Register offset
pub const HDMA_ISCNT1_OFFSET: usize = 0x4C;
/// Channel 1 Initial Page Number Count Register offset
pub const HDMA_IPNCNT1_OFFSET: usize = 0x50;
/// Channel 1 Initial Address Buffer Size Register offset
pub const HDMA_IADDR_BS1_OFFSET: usize = 0x54;
/// Channel 0 Page Accumulation Count Register offset
pub const HDMA_PACNT0_OFFSET: usize = 0x58;
/// Channel 1 Page Accumulation Count Register offset
pub const HDMA_PACNT1_OFFSET: usize = 0x5C;

// =============================================================================
// Configuration Register (HDMA_CONx) Bits
// =============================================================================

/// Software DMA operation: not started
pub const HDMA_SWDMA_OP_NO: u32 = 0;
/// Software DMA operation: start transfer now
pub const HDMA_SWDMA_OP_START: u32 = 1 << 0;
/// Hardware DMA trigger disabled
pub const HDMA_HWDMA_TRIGGER_DIS: u32 = 0;
/// Hardware DMA trigger enabled (transfer paced by external request line)
pub const HDMA_HWDMA_TRIGGER_EN: u32 = 1 << 1;
/// Data size field shift
pub const HDMA_DATA_SHIFT: u32 = 2;
/// Data size field mask
pub const HDMA_DATA_MASK: u32 = 0x3 << 2;
/// Data size: 8-bit
pub const HDMA_DATA_BYTE: u32 = 0 << 2;
/// Data size: 16-bit
pub const HDMA_DATA_HALFWORD: u32 = 1 << 2;
/// Data size: 32-bit
pub const HDMA_DATA_WORD: u32 = 2 << 2;
/// Source address increments after each beat
pub const HDMA_DIR_SRC_INC: u32 = 0;
/// Source address stays fixed
pub const HDMA_DIR_SRC_FIXED: u32 = 1 << 4;
/// Destination address increments after each beat
pub const HDMA_DIR_DST_INC: u32 = 0;
/// Destination address stays fixed
pub const HDMA_DIR_DST_FIXED: u32 = 1 << 5;
/// Burst type field shift
pub const HDMA_BURST_SHIFT: u32 = 8;
/// Burst type field mask
pub const HDMA_BURST_MASK: u32 = 0x3 << 8;
/// Burst type: single transfer
pub const HDMA_BURST_SINGLE: u32 = 0 << 8;
/// Burst type: 4-beat incrementing burst
pub const HDMA_BURST_INCR4: u32 = 1 << 8;
/// Burst type: 8-beat incrementing burst
pub const HDMA_BURST_INCR8: u32 = 2 << 8;
/// Burst type: 16-beat incrementing burst
pub const HDMA_BURST_INCR16: u32 = 3 << 8;
/// External hardware request select field shift
pub const HDMA_EXT_HDREQ_SHIFT: u32 = 12;
/// External hardware request select field mask (4 bits)
pub const HDMA_EXT_HDREQ_MASK: u32 = 0xF << 12;
/// Fly-by burst mode disabled
pub const HDMA_FLY_DIS: u32 = 0;
/// Fly-by burst mode enabled
pub const HDMA_FLY_EN: u32 = 1 << 16;
/// Completion signalled through the interrupt line
pub const HDMA_INT_MODE_INTERRUPT: u32 = 0;
/// Completion signalled only through polled status
pub const HDMA_INT_MODE_POLLING: u32 = 1 << 18;
/// Channel enable
pub const HDMA_CH_EN: u32 = 1 << 19;
/// Slice mode disabled
pub const HDMA_SLICE_MODE_DIS: u32 = 0;
/// Slice mode enabled
pub const HDMA_SLICE_MODE_EN: u32 = 1 << 20;
/// Clear current page number count (written on teardown)
pub const HDMA_CPNCNTD_CLR: u32 = 1 << 24;

/// Encode the external hardware request select field
#[inline(always)]
pub const fn hdma_ext_hdreq_sel(sel: u32) -> u32 {
    (sel << HDMA_EXT_HDREQ_SHIFT) & HDMA_EXT_HDREQ_MASK
}

// =============================================================================
// Interrupt Status/Mask Register (HDMA_ISR) Bits
// =============================================================================

/// Channel 0 transfer complete interrupt active
pub const HDMA_CH0_INT_ACT: u32 = 1 << 0;
/// Channel 1 transfer complete interrupt active
pub const HDMA_CH1_INT_ACT: u32 = 1 << 1;
/// Channel 0 page interrupt active
pub const HDMA_CH0_PAGE_INT_ACT: u32 = 1 << 2;
/// Channel 1 page interrupt active
pub const HDMA_CH1_PAGE_INT_ACT: u32 = 1 << 3;
/// Channel 0 page accumulation overflow interrupt active
pub const HDMA_CH0_PAGE_ACCUM_OVF_INT_ACT: u32 = 1 << 4;
/// Channel 1 page accumulation overflow interrupt active
pub const HDMA_CH1_PAGE_ACCUM_OVF_INT_ACT: u32 = 1 << 5;
/// Channel 0 transfer complete interrupt mask
pub const HDMA_CH0_INT_MASK: u32 = 1 << 16;
/// Channel 1 transfer complete interrupt mask
pub const HDMA_CH1_INT_MASK: u32 = 1 << 17;
/// Channel 0 page interrupt mask
pub const HDMA_CH0_PAGE_INT_MASK: u32 = 1 << 18;
/// Channel 1 page interrupt mask
pub const HDMA_CH1_PAGE_INT_MASK: u32 = 1 << 19;
/// Channel 0 page accumulation overflow interrupt mask
pub const HDMA_CH0_PAGE_ACCUM_OVF_INT_MASK: u32 = 1 << 20;
/// Channel 1 page accumulation overflow interrupt mask
pub const HDMA_CH1_PAGE_ACCUM_OVF_INT_MASK: u32 = 1 << 21;

/// All channel 0 active bits
pub const HDMA_CH0_ALL_ACT: u32 =
    HDMA_CH0_INT_ACT | HDMA_CH0_PAGE_INT_ACT | HDMA_CH0_PAGE_ACCUM_OVF_INT_ACT;
/// All channel 1 active bits
pub const HDMA_CH1_ALL_ACT: u32 =
    HDMA_CH1_INT_ACT | HDMA_CH1_PAGE_INT_ACT | HDMA_CH1_PAGE_ACCUM_OVF_INT_ACT;
/// All channel 0 mask bits
pub const HDMA_CH0_ALL_MASK: u32 =
    HDMA_CH0_INT_MASK | HDMA_CH0_PAGE_INT_MASK | HDMA_CH0_PAGE_ACCUM_OVF_INT_MASK;
/// All channel 1 mask bits
pub const HDMA_CH1_ALL_MASK: u32 =
    HDMA_CH1_INT_MASK | HDMA_CH1_PAGE_INT_MASK | HDMA_CH1_PAGE_ACCUM_OVF_INT_MASK;
