/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel bitmask helpers
//!
//! Uncompressed 16/24/32 bit pixels found in texture and bitmap containers
//! describe where each channel lives with a 32 bit mask. The helpers here
//! turn such a mask into the shifts needed to pull the channel out of a
//! packed word.
//!
//! A zero mask is valid and means the channel is absent, it always reads as zero.

/// Derive `(left_shift, right_shift)` for a channel mask
///
/// - `right_shift` is the index of the lowest set bit
/// - `left_shift` is `8 - min(8, run)` where `run` is the number of
///   contiguous set bits starting at `right_shift`
///
/// An 8 bit value is then `((word & mask) >> right_shift) << left_shift`
///
/// Masks with several disjoint runs are not rejected, only the
/// lowest run is measured.
///
/// ```
/// use texel_core::bitmask::derive;
/// assert_eq!(derive(0), (0, 0));
/// assert_eq!(derive(0x0000_FF00), (0, 8));
/// assert_eq!(derive(0x07E0), (2, 5));
/// ```
pub const fn derive(mask: u32) -> (u32, u32) {
    if mask == 0 {
        return (0, 0);
    }
    let right_shift = mask.trailing_zeros();
    let run = run_length(mask);
    let left_shift = 8 - min(8, run);

    (left_shift, right_shift)
}

/// Derive `(left_shift, right_shift)` for a channel stored in a 16 bit output channel
///
/// The left shift is `pad = 16 - popcount(mask)` so narrow fields land in the
/// high bits of the 16 bit channel, masks wider than 16 bits get no padding.
///
/// ```
/// use texel_core::bitmask::derive16;
/// assert_eq!(derive16(0xF800), (11, 11));
/// assert_eq!(derive16(0xFFFF_0000), (0, 16));
/// ```
pub const fn derive16(mask: u32) -> (u32, u32) {
    if mask == 0 {
        return (0, 0);
    }
    let right_shift = mask.trailing_zeros();
    let pad = 16 - min(16, mask.count_ones());

    (pad, right_shift)
}

const fn min(a: u32, b: u32) -> u32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Number of contiguous set bits starting at the lowest set bit
const fn run_length(mask: u32) -> u32 {
    if mask == 0 {
        return 0;
    }
    (mask >> mask.trailing_zeros()).trailing_ones()
}

/// A channel mask with its shifts computed once
///
/// Use this when unpacking many pixels with the same mask
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BitField {
    mask:        u32,
    left_shift:  u32,
    right_shift: u32,
    run_length:  u32
}

impl BitField {
    pub const fn new(mask: u32) -> BitField {
        let (left_shift, right_shift) = derive(mask);

        BitField {
            mask,
            left_shift,
            right_shift,
            run_length: run_length(mask)
        }
    }

    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Return `(left_shift, right_shift)`, see [`derive`]
    pub const fn shifts(&self) -> (u32, u32) {
        (self.left_shift, self.right_shift)
    }

    /// Number of bits the channel occupies
    pub const fn bits(&self) -> u32 {
        self.run_length
    }

    /// Whether the mask is zero or a single run of set bits
    ///
    /// Nothing in the unpacking path relies on this, it exists
    /// so callers can choose to reject odd masks
    pub const fn is_contiguous(&self) -> bool {
        self.mask.count_ones() == self.run_length
    }

    /// Extract the channel with the literal shift formula
    /// `((word & mask) >> right_shift) << left_shift`
    ///
    /// The low bits freed by the left shift stay zero, so a 5 bit
    /// channel at full intensity reads as `0xF8`. Channels wider than
    /// 8 bits are truncated to their low byte.
    #[inline(always)]
    pub const fn extract_u8(&self, word: u32) -> u8 {
        (((word & self.mask) >> self.right_shift) << self.left_shift) as u8
    }

    /// Extract the channel and scale it to the full byte range
    ///
    /// Narrow channels are bit replicated (`0b11111` becomes `0xFF`),
    /// wide channels keep their top 8 bits.
    #[inline(always)]
    pub const fn expand_u8(&self, word: u32) -> u8 {
        replicate((word & self.mask) >> self.right_shift, self.run_length, 8) as u8
    }

    /// Extract the channel and scale it to the full 16 bit range
    ///
    /// The channel is aligned to the high bits of the output and the vacated
    /// low bits are filled by bit replication.
    #[inline(always)]
    pub const fn expand_u16(&self, word: u32) -> u16 {
        replicate((word & self.mask) >> self.right_shift, self.run_length, 16) as u16
    }
}

/// Scale a `bits` wide value to `target` bits
const fn replicate(value: u32, bits: u32, target: u32) -> u32 {
    if bits == 0 {
        return 0;
    }
    if bits >= target {
        return (value >> (bits - target)) & ((1 << target) - 1);
    }
    // only the measured run takes part, stray bits of a disjoint mask are dropped
    let value = value & ((1 << bits) - 1);
    let mut out = value << (target - bits);
    let mut shift = bits;

    while shift < target {
        out |= out >> shift;
        shift *= 2;
    }
    out
}
