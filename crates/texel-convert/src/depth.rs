/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Element type conversions
//!
//! Unsigned integers scale by the exact ratio of their maxima,
//! so `u8 -> u16 -> u8` is lossless. Every other pair goes through
//! a value normalized to `0.0..=1.0` (or `-1.0..=1.0` for signed types).
use texel_core::buffer::PixelBuffer;
use texel_core::colorspace::ColorModel;
use texel_core::element::ElementType;
use texel_core::log::trace;

use crate::errors::ConvertErrors;
use crate::utils::{alloc_like, check_input, finish_like, read_sample, unsupported, write_sample};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Scale {
    Widen(u64),
    Narrow(u64),
    Normalized
}

fn unsigned_bits(element: ElementType) -> Option<u32> {
    match element {
        ElementType::U8 => Some(8),
        ElementType::U16 => Some(16),
        ElementType::U32 => Some(32),
        _ => None
    }
}

fn scale_between(from: ElementType, to: ElementType) -> Scale {
    match (unsigned_bits(from), unsigned_bits(to)) {
        (Some(a), Some(b)) if a <= b => Scale::Widen(ratio(a, b)),
        (Some(a), Some(b)) => Scale::Narrow(ratio(b, a)),
        _ => Scale::Normalized
    }
}

/// `(2^wide - 1) / (2^narrow - 1)`, 257 for 8 -> 16 bits
const fn ratio(narrow: u32, wide: u32) -> u64 {
    ((1_u64 << wide) - 1) / ((1_u64 << narrow) - 1)
}

/// Convert raw samples between element types
pub(crate) fn convert_samples(
    input: &[u8], from: ElementType, to: ElementType, output: &mut [u8]
) {
    let scale = scale_between(from, to);
    let (from_max, to_max) = (from.max_value(), to.max_value());

    for (src, dst) in input
        .chunks_exact(from.size_of())
        .zip(output.chunks_exact_mut(to.size_of()))
    {
        let raw = read_sample(from, src);

        let value = match scale {
            // products stay below 2^53 so f64 is exact
            Scale::Widen(ratio) => raw * ratio as f64,
            Scale::Narrow(ratio) => (raw as u64 / ratio) as f64,
            Scale::Normalized => {
                let normalized = if from.is_float() { raw } else { raw / from_max };

                if to.is_float() {
                    normalized
                } else {
                    (normalized * to_max).clamp(to.min_value(), to_max)
                }
            }
        };
        write_sample(to, value, dst);
    }
}

/// Convert every element of `buf` to `element`
///
/// The colour model is kept, indexed buffers keep their palette
/// but their indices must stay `U8`.
///
/// # Errors
/// - [`ConvertErrors::UnsupportedConversion`] for indexed buffers wider than a byte
/// - [`ConvertErrors::TruncatedInput`] if `buf` is smaller than its shape says
/// - [`ConvertErrors::AllocationFailure`] if the output can't be allocated
pub fn convert_element_type(
    buf: &PixelBuffer, element: ElementType
) -> Result<PixelBuffer, ConvertErrors> {
    check_input(buf)?;

    if buf.element() == element {
        trace!("Element type already {:?}, nothing to do", element);
        return Ok(buf.clone());
    }
    if buf.model() == ColorModel::Indexed {
        return Err(unsupported(buf, ColorModel::Indexed, element));
    }
    trace!("Converting elements {:?} -> {:?}", buf.element(), element);

    let mut output = alloc_like(buf, buf.model(), element)?;
    convert_samples(buf.data(), buf.element(), element, &mut output);

    finish_like(buf, output, buf.model(), element)
}
