/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use texel_core::bytestream::ByteIoError;

use crate::common::BcFormat;

/// Errors that can occur during block decoding
#[non_exhaustive]
pub enum BcDecodeErrors {
    /// The compressed data ends before every block could be read
    TruncatedInput {
        format:   BcFormat,
        /// Bytes the image needs
        expected: usize,
        /// Bytes that were present
        found:    usize
    },
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// Width, height or depth is zero
    ZeroDimensions,
    /// The output buffer is too small, expected at least
    /// a size but got another size
    TooSmallBuffer(usize, usize),
    /// The output buffer of the given size could not be allocated
    AllocationFailure(usize),
    /// A calculation overflowed
    OverflowOccurred,
    IoErrors(ByteIoError)
}

impl Debug for BcDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TruncatedInput {
                format,
                expected,
                found
            } => {
                writeln!(
                    f,
                    "Truncated {format:?} data, expected {expected} bytes but found {found}"
                )
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::ZeroDimensions => {
                writeln!(f, "Zero width, height or depth")
            }
            Self::TooSmallBuffer(expected, found) => {
                writeln!(
                    f,
                    "Too small of buffer, expected {} but found {}",
                    expected, found
                )
            }
            Self::AllocationFailure(size) => {
                writeln!(f, "Could not allocate {size} bytes for the output")
            }
            Self::OverflowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BcDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BcDecodeErrors {}

impl From<ByteIoError> for BcDecodeErrors {
    fn from(value: ByteIoError) -> Self {
        BcDecodeErrors::IoErrors(value)
    }
}
