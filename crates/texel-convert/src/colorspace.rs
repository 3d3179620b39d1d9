/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Colour model conversions
use std::borrow::Cow;

use texel_core::buffer::PixelBuffer;
use texel_core::colorspace::ColorModel;
use texel_core::element::ElementType;
use texel_core::log::{trace, warn};
use texel_core::palette::PaletteLayout;

use crate::alpha::{add_alpha, remove_alpha};
use crate::depth::convert_element_type;
use crate::errors::ConvertErrors;
use crate::palette::{convert_palette, luminance};
use crate::quantize::{MedianCutQuantizer, Quantizer};
use crate::swizzle::swap_channel_order;
use crate::utils::{alloc_like, check_input, finish_like, read_sample, unsupported, write_sample};

/// Convert a buffer to another colour model and element type
///
/// # Example
/// ```
/// use texel_convert::PixelConverter;
/// use texel_core::buffer::PixelBuffer;
/// use texel_core::colorspace::ColorModel;
/// use texel_core::element::ElementType;
///
/// let pixels = PixelBuffer::new(vec![255, 0, 0], 1, 1, ColorModel::RGB, ElementType::U8).unwrap();
/// let gray = PixelConverter::new(ColorModel::Luma, ElementType::U8)
///     .convert(&pixels)
///     .unwrap();
/// assert_eq!(gray.data(), &[54]);
/// ```
pub struct PixelConverter {
    model:      ColorModel,
    element:    ElementType,
    quantizer:  Box<dyn Quantizer>,
    max_colors: usize
}

impl PixelConverter {
    /// Create a converter to `model` with `element` typed channels
    ///
    /// Conversions to [`ColorModel::Indexed`] use a [`MedianCutQuantizer`]
    /// building palettes of up to 256 entries.
    pub fn new(model: ColorModel, element: ElementType) -> PixelConverter {
        PixelConverter {
            model,
            element,
            quantizer: Box::new(MedianCutQuantizer::new()),
            max_colors: 256
        }
    }

    /// Use another quantizer for conversions to indexed buffers
    pub fn set_quantizer(mut self, quantizer: Box<dyn Quantizer>) -> Self {
        self.quantizer = quantizer;
        self
    }

    /// Set the maximum palette size for conversions to indexed buffers
    pub fn set_max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = max_colors;
        self
    }

    pub const fn model(&self) -> ColorModel {
        self.model
    }

    pub const fn element(&self) -> ElementType {
        self.element
    }

    pub const fn max_colors(&self) -> usize {
        self.max_colors
    }

    /// Convert `buf`, returning a new buffer
    ///
    /// Indexed sources are expanded through their palette first, then
    /// the colour model and finally the element type are converted.
    pub fn convert(&self, buf: &PixelBuffer) -> Result<PixelBuffer, ConvertErrors> {
        check_input(buf)?;

        let (model, element) = (self.model, self.element);

        if buf.model() == model && buf.element() == element {
            trace!("Image already {:?}({:?}), nothing to do", model, element);
            return Ok(buf.clone());
        }
        if model == ColorModel::Indexed {
            if element != ElementType::U8 || buf.model() == ColorModel::Indexed {
                return Err(unsupported(buf, model, element));
            }
            return self.quantize(buf);
        }

        let expanded;
        let source = if buf.model() == ColorModel::Indexed {
            if buf.element() != ElementType::U8 {
                return Err(unsupported(buf, model, element));
            }
            expanded = depalettize(buf, model)?;
            &expanded
        } else {
            buf
        };

        let modeled = if source.model() == model {
            Cow::Borrowed(source)
        } else {
            Cow::Owned(convert_model(source, model)?)
        };
        if modeled.element() == element {
            return Ok(modeled.into_owned());
        }
        convert_element_type(&modeled, element)
    }

    fn quantize(&self, buf: &PixelBuffer) -> Result<PixelBuffer, ConvertErrors> {
        let direct = if buf.model().has_alpha() {
            ColorModel::RGBA
        } else {
            ColorModel::RGB
        };
        let prepared = PixelConverter::new(direct, ElementType::U8).convert(buf)?;

        let (indices, palette) = self.quantizer.quantize(&prepared, self.max_colors)?;
        let found = indices.len();

        let mut output = PixelBuffer::new_volume(
            indices,
            buf.width(),
            buf.height(),
            buf.depth(),
            ColorModel::Indexed,
            ElementType::U8
        )
        .ok_or_else(|| {
            ConvertErrors::Quantizer(format!(
                "Quantizer returned {} indices for {} pixels",
                found,
                buf.num_pixels()
            ))
        })?;

        output.set_palette(palette);
        Ok(output)
    }
}

/// Expand an indexed buffer through its palette into `U8` pixels
///
/// The palette is first converted to the layout closest to `target`,
/// the returned model is that layout's model.
fn depalettize(buf: &PixelBuffer, target: ColorModel) -> Result<PixelBuffer, ConvertErrors> {
    let palette = buf.palette().ok_or(ConvertErrors::MissingPalette)?;

    let layout = if palette.layout().is_color() {
        match target {
            ColorModel::RGB => PaletteLayout::RGB24,
            ColorModel::BGR => PaletteLayout::BGR24,
            ColorModel::RGBA => PaletteLayout::RGBA32,
            ColorModel::BGRA => PaletteLayout::BGRA32,
            ColorModel::Luma => PaletteLayout::Luminance,
            ColorModel::Alpha => PaletteLayout::Alpha,
            ColorModel::LumaA | ColorModel::Indexed => PaletteLayout::RGBA32
        }
    } else {
        palette.layout()
    };
    let palette = convert_palette(palette, layout)?;
    let model = layout.color_model();
    let entry_size = layout.bytes_per_entry();

    let mut output = alloc_like(buf, model, ElementType::U8)?;
    let mut missing = 0_usize;

    for (index, pixel) in buf
        .data()
        .iter()
        .zip(output.chunks_exact_mut(entry_size))
    {
        match palette.entry(usize::from(*index)) {
            Some(entry) => pixel.copy_from_slice(entry),
            None => missing += 1
        }
    }
    if missing > 0 {
        warn!(
            "{} pixels point past the {} entry palette, left black",
            missing,
            palette.num_entries()
        );
    }
    finish_like(buf, output, model, ElementType::U8)
}

/// Read a pixel as red, green, blue and alpha
fn read_rgba(model: ColorModel, element: ElementType, pixel: &[u8]) -> [f64; 4] {
    let size = element.size_of();
    let max = element.max_value();
    let sample = |channel: usize| read_sample(element, &pixel[channel * size..][..size]);

    match model {
        ColorModel::Luma | ColorModel::Indexed => {
            let luma = sample(0);
            [luma, luma, luma, max]
        }
        ColorModel::LumaA => {
            let luma = sample(0);
            [luma, luma, luma, sample(1)]
        }
        ColorModel::Alpha => [max, max, max, sample(0)],
        ColorModel::RGB => [sample(0), sample(1), sample(2), max],
        ColorModel::BGR => [sample(2), sample(1), sample(0), max],
        ColorModel::RGBA => [sample(0), sample(1), sample(2), sample(3)],
        ColorModel::BGRA => [sample(2), sample(1), sample(0), sample(3)]
    }
}

fn write_rgba(model: ColorModel, element: ElementType, rgba: [f64; 4], pixel: &mut [u8]) {
    let [r, g, b, a] = rgba;

    let channels = match model {
        ColorModel::Luma | ColorModel::Indexed => [luminance(r, g, b), 0.0, 0.0, 0.0],
        ColorModel::LumaA => [luminance(r, g, b), a, 0.0, 0.0],
        ColorModel::Alpha => [a, 0.0, 0.0, 0.0],
        ColorModel::RGB | ColorModel::RGBA => [r, g, b, a],
        ColorModel::BGR | ColorModel::BGRA => [b, g, r, a]
    };
    for (value, out) in channels
        .iter()
        .zip(pixel.chunks_exact_mut(element.size_of()))
    {
        write_sample(element, *value, out);
    }
}

/// Convert between direct colour models keeping the element type
pub(crate) fn convert_model(
    buf: &PixelBuffer, model: ColorModel
) -> Result<PixelBuffer, ConvertErrors> {
    let from = buf.model();

    if from == model {
        return Ok(buf.clone());
    }
    if from == ColorModel::Indexed || model == ColorModel::Indexed {
        return Err(unsupported(buf, model, buf.element()));
    }
    // exact paths
    if buf.channels() == 3 && from.with_alpha() == Some(model) {
        return add_alpha(buf);
    }
    if buf.channels() == 4 && from.without_alpha() == Some(model) {
        return remove_alpha(buf);
    }
    if buf.channels() >= 3 && from.swapped_order() == model {
        return swap_channel_order(buf);
    }
    trace!("Converting {:?} -> {:?}", from, model);

    let element = buf.element();
    let in_stride = buf.pixel_stride();
    let out_stride = model.num_components() * element.size_of();

    let mut output = alloc_like(buf, model, element)?;

    for (src, dst) in buf
        .data()
        .chunks_exact(in_stride)
        .zip(output.chunks_exact_mut(out_stride))
    {
        write_rgba(model, element, read_rgba(from, element, src), dst);
    }
    finish_like(buf, output, model, element)
}
