/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Reducing direct colour images to a palette
use std::collections::HashMap;

use texel_core::buffer::PixelBuffer;
use texel_core::colorspace::ColorModel;
use texel_core::element::ElementType;
use texel_core::log::trace;
use texel_core::palette::{Palette, PaletteLayout};

use crate::errors::ConvertErrors;

/// Builds a palette for a direct colour image
pub trait Quantizer {
    /// Quantize `buf` to at most `max_colors` palette entries
    ///
    /// `buf` is an `RGB`, `RGBA`, `BGR` or `BGRA` buffer of `U8` elements.
    /// Returns one index per pixel and the palette the indices point into.
    fn quantize(
        &self, buf: &PixelBuffer, max_colors: usize
    ) -> Result<(Vec<u8>, Palette), ConvertErrors>;
}

/// A median cut quantizer
///
/// Images with at most `max_colors` distinct colours get an exact
/// palette. Otherwise the colours are split into boxes, always
/// halving the box with the widest channel range at its median,
/// and every box contributes its average colour.
#[derive(Copy, Clone, Debug, Default)]
pub struct MedianCutQuantizer;

impl MedianCutQuantizer {
    pub const fn new() -> MedianCutQuantizer {
        MedianCutQuantizer
    }
}

fn to_rgba(model: ColorModel, pixel: &[u8]) -> [u8; 4] {
    match model {
        ColorModel::BGR => [pixel[2], pixel[1], pixel[0], 255],
        ColorModel::BGRA => [pixel[2], pixel[1], pixel[0], pixel[3]],
        ColorModel::RGBA => [pixel[0], pixel[1], pixel[2], pixel[3]],
        _ => [pixel[0], pixel[1], pixel[2], 255]
    }
}

/// The channel with the largest spread and its range
fn widest_channel(colors: &[[u8; 4]]) -> (usize, u8) {
    let mut low = [u8::MAX; 4];
    let mut high = [0; 4];

    for color in colors {
        for channel in 0..4 {
            low[channel] = low[channel].min(color[channel]);
            high[channel] = high[channel].max(color[channel]);
        }
    }
    (0..4)
        .map(|channel| (channel, high[channel].saturating_sub(low[channel])))
        .max_by_key(|(_, range)| *range)
        .unwrap_or((0, 0))
}

fn average(colors: &[[u8; 4]]) -> [u8; 4] {
    let count = colors.len().max(1) as u64;
    let mut sums = [0_u64; 4];

    for color in colors {
        for (sum, value) in sums.iter_mut().zip(color) {
            *sum += u64::from(*value);
        }
    }
    sums.map(|sum| ((sum + count / 2) / count) as u8)
}

fn median_cut(colors: Vec<[u8; 4]>, max_colors: usize) -> Vec<[u8; 4]> {
    let mut boxes = vec![colors];

    while boxes.len() < max_colors {
        let widest = boxes
            .iter()
            .enumerate()
            .map(|(index, colors)| (index, widest_channel(colors)))
            .filter(|(_, (_, range))| *range > 0)
            .max_by_key(|(_, (_, range))| *range);

        let Some((index, (channel, _))) = widest else {
            // every box holds a single colour
            break;
        };
        let mut lower = boxes.swap_remove(index);
        lower.sort_unstable_by_key(|color| color[channel]);

        let upper = lower.split_off(lower.len() / 2);
        boxes.push(lower);
        boxes.push(upper);
    }
    boxes.iter().map(|colors| average(colors)).collect()
}

fn distance(a: &[u8; 4], b: &[u8; 4]) -> u32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = u32::from(x.abs_diff(*y));
            d * d
        })
        .sum()
}

impl Quantizer for MedianCutQuantizer {
    fn quantize(
        &self, buf: &PixelBuffer, max_colors: usize
    ) -> Result<(Vec<u8>, Palette), ConvertErrors> {
        let model = buf.model();

        if buf.element() != ElementType::U8
            || !matches!(
                model,
                ColorModel::RGB | ColorModel::RGBA | ColorModel::BGR | ColorModel::BGRA
            )
        {
            return Err(ConvertErrors::Quantizer(format!(
                "Cannot quantize {:?} pixels of {:?} elements",
                model,
                buf.element()
            )));
        }
        if !(1..=256).contains(&max_colors) {
            return Err(ConvertErrors::Quantizer(format!(
                "Palette size must be between 1 and 256, got {max_colors}"
            )));
        }
        let colors: Vec<[u8; 4]> = buf
            .data()
            .chunks_exact(buf.channels())
            .map(|pixel| to_rgba(model, pixel))
            .collect();

        let mut distinct = colors.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let entries = if distinct.len() <= max_colors {
            trace!("{} distinct colors, palette is exact", distinct.len());
            distinct
        } else {
            trace!("Reducing {} colors to {}", distinct.len(), max_colors);
            median_cut(colors.clone(), max_colors)
        };

        let mut lookup: HashMap<[u8; 4], u8> = HashMap::new();
        let mut indices = Vec::new();
        indices
            .try_reserve_exact(colors.len())
            .map_err(|_| ConvertErrors::AllocationFailure(colors.len()))?;

        for color in &colors {
            let index = *lookup.entry(*color).or_insert_with(|| {
                entries
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, entry)| distance(color, entry))
                    .map_or(0, |(index, _)| index as u8)
            });
            indices.push(index);
        }

        let (layout, entry_size) = if model.has_alpha() {
            (PaletteLayout::RGBA32, 4)
        } else {
            (PaletteLayout::RGB24, 3)
        };
        let data = entries
            .iter()
            .flat_map(|entry| entry[..entry_size].iter().copied())
            .collect();

        let palette = Palette::new(layout, data).ok_or(ConvertErrors::OverflowOccurred)?;

        Ok((indices, palette))
    }
}
