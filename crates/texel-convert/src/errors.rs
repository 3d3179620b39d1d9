/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::fmt::{Debug, Display, Formatter};

use texel_core::bytestream::ByteIoError;
use texel_core::palette::PaletteLayout;

/// Errors that can occur during pixel and palette conversions
#[non_exhaustive]
pub enum ConvertErrors {
    /// The requested conversion has no defined mapping
    ///
    /// from, to
    UnsupportedConversion(String, String),
    /// The palette layout can't be the source of a conversion
    UnsupportedPalette(PaletteLayout),
    /// An indexed buffer carries no palette
    MissingPalette,
    /// A channel mask is not a single run of set bits,
    /// only raised when strict masks are requested
    InvalidMask(u32),
    /// The output buffer of the given size could not be allocated
    AllocationFailure(usize),
    /// Input is shorter than its dimensions imply
    ///
    /// expected, found
    TruncatedInput(usize, usize),
    /// A calculation overflowed
    OverflowOccurred,
    /// The quantizer could not build a palette
    Quantizer(String),
    IoErrors(ByteIoError)
}

impl Debug for ConvertErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedConversion(from, to) => {
                writeln!(f, "Unsupported conversion from {from} to {to}")
            }
            Self::UnsupportedPalette(layout) => {
                writeln!(f, "Palettes in {layout:?} layout can't be converted")
            }
            Self::MissingPalette => {
                writeln!(f, "Indexed image has no palette")
            }
            Self::InvalidMask(mask) => {
                writeln!(f, "Channel mask {mask:#010X} is not contiguous")
            }
            Self::AllocationFailure(size) => {
                writeln!(f, "Could not allocate {size} bytes for the output")
            }
            Self::TruncatedInput(expected, found) => {
                writeln!(
                    f,
                    "Not enough data, expected {} bytes but found {}",
                    expected, found
                )
            }
            Self::OverflowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::Quantizer(message) => {
                writeln!(f, "Quantizer error: {message}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for ConvertErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ConvertErrors {}

impl From<ByteIoError> for ConvertErrors {
    fn from(value: ByteIoError) -> Self {
        ConvertErrors::IoErrors(value)
    }
}
