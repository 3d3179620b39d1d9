/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Adding, removing and keying the alpha channel
use texel_core::buffer::PixelBuffer;
use texel_core::colorspace::ColorModel;
use texel_core::element::ElementType;
use texel_core::log::trace;
use texel_core::palette::PaletteLayout;

use crate::errors::ConvertErrors;
use crate::palette::convert_palette;
use crate::utils::{
    alloc_like, check_input, finish_like, max_sample_bytes, read_sample, unsupported, write_sample
};

/// A colour whose pixels become transparent
///
/// Components are in `0.0..=1.0`. For indexed images only
/// `alpha` is used, it selects the palette entry
/// `round(alpha * 255)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ColorKey {
    pub red:   f64,
    pub green: f64,
    pub blue:  f64,
    pub alpha: f64
}

impl ColorKey {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> ColorKey {
        ColorKey {
            red,
            green,
            blue,
            alpha
        }
    }

    /// A key on colour only
    pub const fn rgb(red: f64, green: f64, blue: f64) -> ColorKey {
        ColorKey::new(red, green, blue, 0.0)
    }
}

/// Append an opaque alpha channel to a three channel buffer
///
/// The alpha element is the maximum of the element type, `1.0` for floats.
/// Colour channels are copied bit for bit.
///
/// # Errors
/// [`ConvertErrors::UnsupportedConversion`] if `buf` does not have exactly three channels
pub fn add_alpha(buf: &PixelBuffer) -> Result<PixelBuffer, ConvertErrors> {
    add_alpha_inner(buf, |_| true)
}

/// Add alpha, `opaque` decides per pixel between the element maximum and zero
fn add_alpha_inner<F>(buf: &PixelBuffer, mut opaque: F) -> Result<PixelBuffer, ConvertErrors>
where
    F: FnMut(&[u8]) -> bool
{
    check_input(buf)?;

    let element = buf.element();
    let target = match buf.model().with_alpha() {
        Some(model) if buf.channels() == 3 => model,
        _ => return Err(unsupported(buf, ColorModel::RGBA, element))
    };
    let (max, size) = max_sample_bytes(element);
    let in_stride = 3 * size;

    let mut output = alloc_like(buf, target, element)?;

    for (src, dst) in buf
        .data()
        .chunks_exact(in_stride)
        .zip(output.chunks_exact_mut(in_stride + size))
    {
        let (color, alpha) = dst.split_at_mut(in_stride);
        color.copy_from_slice(src);

        if opaque(src) {
            alpha.copy_from_slice(&max[..size]);
        }
        // else stays zero, which is zero in every element type
    }
    finish_like(buf, output, target, element)
}

/// Drop the alpha channel of a four channel buffer
///
/// # Errors
/// [`ConvertErrors::UnsupportedConversion`] if `buf` does not have exactly four channels
pub fn remove_alpha(buf: &PixelBuffer) -> Result<PixelBuffer, ConvertErrors> {
    check_input(buf)?;

    let element = buf.element();
    let target = match buf.model().without_alpha() {
        Some(model) if buf.channels() == 4 => model,
        _ => return Err(unsupported(buf, ColorModel::RGB, element))
    };
    let out_stride = 3 * element.size_of();

    let mut output = alloc_like(buf, target, element)?;

    for (src, dst) in buf
        .data()
        .chunks_exact(out_stride + element.size_of())
        .zip(output.chunks_exact_mut(out_stride))
    {
        dst.copy_from_slice(&src[..out_stride]);
    }
    finish_like(buf, output, target, element)
}

/// The key component as it reads back after being stored as `element`,
/// so it compares equal to samples holding the same stored value
fn key_sample(component: f64, element: ElementType) -> f64 {
    let value = if element.is_float() {
        component
    } else {
        component * element.max_value()
    };
    let mut stored = [0_u8; 8];
    let stored = &mut stored[..element.size_of()];

    write_sample(element, value, stored);
    read_sample(element, stored)
}

/// Make pixels matching `key` transparent
///
/// Three channel buffers gain an alpha channel that is zero where
/// all colour channels equal the key scaled to the element range,
/// and the maximum elsewhere.
///
/// Indexed buffers keep their pixels, instead the palette entry
/// selected by the key's alpha gets an alpha of zero. Palettes without
/// alpha are converted to `RGBA32` (`BGRA32` for blue first palettes) first.
///
/// # Errors
/// - [`ConvertErrors::MissingPalette`] for indexed buffers without a palette
/// - [`ConvertErrors::UnsupportedConversion`] for direct buffers without exactly three channels
pub fn apply_color_key(buf: &PixelBuffer, key: &ColorKey) -> Result<PixelBuffer, ConvertErrors> {
    if buf.model() == ColorModel::Indexed {
        return key_palette(buf, key);
    }
    let element = buf.element();
    let size = element.size_of();

    let mut targets = [
        key_sample(key.red, element),
        key_sample(key.green, element),
        key_sample(key.blue, element)
    ];
    if buf.model().is_bgr() {
        targets.swap(0, 2);
    }

    add_alpha_inner(buf, |pixel| {
        !pixel
            .chunks_exact(size)
            .zip(targets.iter())
            .all(|(sample, target)| read_sample(element, sample) == *target)
    })
}

fn key_palette(buf: &PixelBuffer, key: &ColorKey) -> Result<PixelBuffer, ConvertErrors> {
    let palette = buf.palette().ok_or(ConvertErrors::MissingPalette)?;

    let layout = match palette.layout() {
        PaletteLayout::RGBA32 | PaletteLayout::BGRA32 | PaletteLayout::Alpha => palette.layout(),
        layout if layout.is_bgr() => PaletteLayout::BGRA32,
        _ => PaletteLayout::RGBA32
    };
    let mut palette = convert_palette(palette, layout)?;

    let index = (key.alpha * 255.0).round().clamp(0.0, 255.0) as usize;
    let entry_size = layout.bytes_per_entry();

    match palette
        .data_mut()
        .chunks_exact_mut(entry_size)
        .nth(index)
    {
        Some(entry) => entry[entry_size - 1] = 0,
        None => trace!("Color key index {} is past the palette, nothing keyed", index)
    }

    let mut output = buf.clone();
    output.set_palette(palette);
    Ok(output)
}
