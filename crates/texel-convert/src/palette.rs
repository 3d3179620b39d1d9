/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Palette layout conversions
//!
//! Every entry is read into red, green, blue and an optional alpha
//! and written back in the destination layout.
use texel_core::log::trace;
use texel_core::palette::{Palette, PaletteLayout};

use crate::errors::ConvertErrors;
use crate::utils::alloc_output;

/// Luminance weights for red, green and blue
pub const LUMA_WEIGHTS: [f64; 3] = [0.212671, 0.715160, 0.072169];

/// Weighted luminance of a colour given in red, green, blue order
#[inline]
pub(crate) fn luminance(red: f64, green: f64, blue: f64) -> f64 {
    LUMA_WEIGHTS[0] * red + LUMA_WEIGHTS[1] * green + LUMA_WEIGHTS[2] * blue
}

/// An entry split into its channels
struct Entry {
    rgb:   [u8; 3],
    alpha: Option<u8>,
    // fourth byte of 32 bit layouts, alpha or padding
    extra: Option<u8>
}

fn read_entry(layout: PaletteLayout, bytes: &[u8]) -> Entry {
    let rgb = if layout.is_bgr() {
        [bytes[2], bytes[1], bytes[0]]
    } else {
        [bytes[0], bytes[1], bytes[2]]
    };
    let extra = bytes.get(3).copied();
    let alpha = if layout.has_alpha() { extra } else { None };

    Entry { rgb, alpha, extra }
}

fn write_entry(layout: PaletteLayout, entry: &Entry, out: &mut [u8]) {
    let [r, g, b] = entry.rgb;

    match layout {
        PaletteLayout::RGB24 => out.copy_from_slice(&[r, g, b]),
        PaletteLayout::BGR24 => out.copy_from_slice(&[b, g, r]),
        // padding byte rides along when the source had one
        PaletteLayout::RGB32 => out.copy_from_slice(&[r, g, b, entry.extra.unwrap_or(255)]),
        PaletteLayout::BGR32 => out.copy_from_slice(&[b, g, r, entry.extra.unwrap_or(255)]),
        PaletteLayout::RGBA32 => out.copy_from_slice(&[r, g, b, entry.alpha.unwrap_or(255)]),
        PaletteLayout::BGRA32 => out.copy_from_slice(&[b, g, r, entry.alpha.unwrap_or(255)]),
        PaletteLayout::Luminance => {
            let luma = luminance(f64::from(r), f64::from(g), f64::from(b));
            out[0] = luma.round().clamp(0.0, 255.0) as u8;
        }
        PaletteLayout::Alpha => out[0] = entry.alpha.unwrap_or(255)
    }
}

/// Convert a palette to `layout`
///
/// Colour layouts convert into any layout. Luminance and alpha
/// palettes can only be converted to their own layout, which is a copy.
///
/// # Errors
/// - [`ConvertErrors::UnsupportedPalette`] if the source is a luminance or alpha
///   palette and `layout` differs
/// - [`ConvertErrors::AllocationFailure`] if the new entries can't be allocated
pub fn convert_palette(palette: &Palette, layout: PaletteLayout) -> Result<Palette, ConvertErrors> {
    let source = palette.layout();

    if source == layout {
        trace!("Palette already in {:?} layout, nothing to do", layout);
        return Ok(palette.clone());
    }
    if !source.is_color() {
        return Err(ConvertErrors::UnsupportedPalette(source));
    }
    let in_size = source.bytes_per_entry();
    let out_size = layout.bytes_per_entry();
    let entries = palette.num_entries();

    let mut output = alloc_output(
        entries
            .checked_mul(out_size)
            .ok_or(ConvertErrors::OverflowOccurred)?
    )?;

    for (src, dst) in palette
        .data()
        .chunks_exact(in_size)
        .zip(output.chunks_exact_mut(out_size))
    {
        write_entry(layout, &read_entry(source, src), dst);
    }

    Palette::new(layout, output).ok_or(ConvertErrors::OverflowOccurred)
}
