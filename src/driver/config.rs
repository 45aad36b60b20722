//! Configuration types for the Panther7 HDMA driver

use crate::driver::error::{ConfigError, ConfigResult};
use crate::internal::constants::MAX_HARDWARE_REQUEST;

/// AHB burst type used by the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BurstType {
    /// Single transfer per request
    #[default]
    Single = 1,
    /// 4-beat incrementing burst
    Incr4 = 4,
    /// 8-beat incrementing burst
    Incr8 = 8,
    /// 16-beat incrementing burst
    Incr16 = 16,
}

impl BurstType {
    /// Convert a burst length in beats
    ///
    /// Returns [`ConfigError::InvalidBurstType`] for anything but 1, 4, 8 or 16.
    pub const fn from_beats(beats: u32) -> ConfigResult<Self> {
        match beats {
            1 => Ok(BurstType::Single),
            4 => Ok(BurstType::Incr4),
            8 => Ok(BurstType::Incr8),
            16 => Ok(BurstType::Incr16),
            _ => Err(ConfigError::InvalidBurstType),
        }
    }

    /// Number of beats per burst
    #[must_use]
    pub const fn beats(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for BurstType {
    type Error = ConfigError;

    fn try_from(beats: u32) -> ConfigResult<Self> {
        Self::from_beats(beats)
    }
}

/// Size of one beat on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DataWidth {
    /// 8-bit
    #[default]
    Byte = 1,
    /// 16-bit
    HalfWord = 2,
    /// 32-bit
    Word = 4,
}

impl DataWidth {
    /// Convert a width in bytes
    ///
    /// Returns [`ConfigError::InvalidDataWidth`] for anything but 1, 2 or 4.
    pub const fn from_bytes(bytes: u32) -> ConfigResult<Self> {
        match bytes {
            1 => Ok(DataWidth::Byte),
            2 => Ok(DataWidth::HalfWord),
            4 => Ok(DataWidth::Word),
            _ => Err(ConfigError::InvalidDataWidth),
        }
    }

    /// Width in bytes
    #[must_use]
    pub const fn bytes(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for DataWidth {
    type Error = ConfigError;

    fn try_from(bytes: u32) -> ConfigResult<Self> {
        Self::from_bytes(bytes)
    }
}

/// How an address advances between beats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressMode {
    /// Address advances by the data width
    #[default]
    Increment,
    /// Address stays put (peripheral FIFO)
    Fixed,
}

/// Transfer trigger mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferMode {
    /// Started by software as soon as the channel is armed
    #[default]
    Software,
    /// Paced by the selected external hardware request line
    Hardware,
    /// Hardware-paced, split into pages that each raise a page interrupt
    Slice,
}

impl TransferMode {
    /// Whether the transfer waits for an external hardware request
    #[inline]
    pub const fn is_hardware_triggered(self) -> bool {
        matches!(self, TransferMode::Hardware | TransferMode::Slice)
    }
}

/// Slice mode parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SliceConfig {
    /// Number of slices per page
    pub slice_count: u32,
    /// Buffer size in bytes
    pub buffer_size: u32,
}

impl SliceConfig {
    /// Create slice parameters
    #[must_use]
    pub const fn new(slice_count: u32, buffer_size: u32) -> Self {
        Self {
            slice_count,
            buffer_size,
        }
    }
}

/// Channel runtime state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Registers cleared, interrupts masked
    #[default]
    Disabled,
    /// Transfer programmed, interrupts unmasked
    Enabled,
}

/// Transfer descriptor handed to [`HdmaChannel::enable`](crate::HdmaChannel::enable)
///
/// Use the builder methods to override the defaults:
///
/// ```ignore
/// let transfer = TransferConfig::new(src, dst, 64)
///     .with_burst(BurstType::Incr4)
///     .with_width(DataWidth::Word);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransferConfig {
    /// Source bus address
    pub src_addr: u32,
    /// Destination bus address
    pub dst_addr: u32,
    /// Total bytes to move
    pub byte_count: u32,
    /// Burst type
    pub burst: BurstType,
    /// Beat width
    pub width: DataWidth,
    /// Source address mode
    pub src_mode: AddressMode,
    /// Destination address mode
    pub dst_mode: AddressMode,
    /// Trigger mode
    pub mode: TransferMode,
    /// External hardware request line (0-15)
    pub hardware_request: u8,
    /// Slice parameters, used only in [`TransferMode::Slice`]
    pub slice: Option<SliceConfig>,
}

impl TransferConfig {
    /// Create a software-triggered, byte-wide, single-beat, incrementing transfer
    #[must_use]
    pub const fn new(src_addr: u32, dst_addr: u32, byte_count: u32) -> Self {
        Self {
            src_addr,
            dst_addr,
            byte_count,
            burst: BurstType::Single,
            width: DataWidth::Byte,
            src_mode: AddressMode::Increment,
            dst_mode: AddressMode::Increment,
            mode: TransferMode::Software,
            hardware_request: 0,
            slice: None,
        }
    }

    /// Set the burst type
    #[must_use]
    pub const fn with_burst(mut self, burst: BurstType) -> Self {
        self.burst = burst;
        self
    }

    /// Set the beat width
    #[must_use]
    pub const fn with_width(mut self, width: DataWidth) -> Self {
        self.width = width;
        self
    }

    /// Set the source address mode
    #[must_use]
    pub const fn with_source_mode(mut self, mode: AddressMode) -> Self {
        self.src_mode = mode;
        self
    }

    /// Set the destination address mode
    #[must_use]
    pub const fn with_destination_mode(mut self, mode: AddressMode) -> Self {
        self.dst_mode = mode;
        self
    }

    /// Set the trigger mode
    #[must_use]
    pub const fn with_mode(mut self, mode: TransferMode) -> Self {
        self.mode = mode;
        self
    }

    /// Select the external hardware request line
    #[must_use]
    pub const fn with_hardware_request(mut self, line: u8) -> Self {
        self.hardware_request = line;
        self
    }

    /// Switch to slice mode with the given parameters
    #[must_use]
    pub const fn with_slice(mut self, slice: SliceConfig) -> Self {
        self.mode = TransferMode::Slice;
        self.slice = Some(slice);
        self
    }

    /// Bytes moved by one burst
    #[inline]
    pub const fn burst_bytes(&self) -> u32 {
        self.burst.beats() * self.width.bytes()
    }

    /// Whether slice mode is selected
    #[inline]
    pub const fn is_slice(&self) -> bool {
        matches!(self.mode, TransferMode::Slice)
    }

    /// Validate the descriptor against the controller's limits
    ///
    /// Checks, in order: non-zero length, burst alignment of the byte count,
    /// hardware request range, and slice parameters when slice mode is
    /// selected.
    pub const fn validate(&self) -> ConfigResult<()> {
        if self.byte_count == 0 {
            return Err(ConfigError::InvalidLength);
        }
        if self.byte_count % self.burst_bytes() != 0 {
            return Err(ConfigError::MisalignedCount);
        }
        if self.hardware_request > MAX_HARDWARE_REQUEST {
            return Err(ConfigError::InvalidHardwareRequest);
        }
        if self.is_slice() {
            let width = self.width.bytes();
            let valid = match self.slice {
                Some(s) => s.slice_count != 0 && s.buffer_size != 0 && s.buffer_size % width == 0,
                None => false,
            };
            if !valid {
                return Err(ConfigError::InvalidSliceConfig);
            }
        }
        Ok(())
    }
}
