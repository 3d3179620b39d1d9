/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Palettes for indexed pixel buffers
use alloc::vec::Vec;

use crate::colorspace::ColorModel;

/// Byte layout of a single palette entry
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PaletteLayout {
    /// `[R,G,B]`
    RGB24,
    /// `[R,G,B,pad]`
    RGB32,
    /// `[B,G,R]`
    BGR24,
    /// `[B,G,R,pad]`
    BGR32,
    /// `[R,G,B,A]`
    RGBA32,
    /// `[B,G,R,A]`
    BGRA32,
    /// `[L]`, synthesized from the color layouts
    Luminance,
    /// `[A]`, synthesized from the color layouts
    Alpha
}

/// The six color layouts palettes are stored in
pub static ALL_COLOR_LAYOUTS: [PaletteLayout; 6] = [
    PaletteLayout::RGB24,
    PaletteLayout::RGB32,
    PaletteLayout::BGR24,
    PaletteLayout::BGR32,
    PaletteLayout::RGBA32,
    PaletteLayout::BGRA32
];

impl PaletteLayout {
    pub const fn bytes_per_entry(self) -> usize {
        match self {
            Self::RGB24 | Self::BGR24 => 3,
            Self::RGB32 | Self::BGR32 | Self::RGBA32 | Self::BGRA32 => 4,
            Self::Luminance | Self::Alpha => 1
        }
    }

    /// Whether the fourth byte carries alpha rather than padding
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::RGBA32 | Self::BGRA32 | Self::Alpha)
    }

    /// Whether byte 0 of an entry is blue
    pub const fn is_bgr(self) -> bool {
        matches!(self, Self::BGR24 | Self::BGR32 | Self::BGRA32)
    }

    /// Whether the layout carries three color bytes
    pub const fn is_color(self) -> bool {
        !matches!(self, Self::Luminance | Self::Alpha)
    }

    /// The direct color model an entry of this layout expands to
    /// when an indexed buffer is de-palettized
    ///
    /// Padding bytes are not part of the model
    pub const fn color_model(self) -> ColorModel {
        match self {
            Self::RGB24 | Self::RGB32 => ColorModel::RGB,
            Self::BGR24 | Self::BGR32 => ColorModel::BGR,
            Self::RGBA32 => ColorModel::RGBA,
            Self::BGRA32 => ColorModel::BGRA,
            Self::Luminance => ColorModel::Luma,
            Self::Alpha => ColorModel::Alpha
        }
    }
}

/// A palette, a list of colors indexed pixels point into
///
/// The length of the data is always a multiple of
/// [`bytes_per_entry`](PaletteLayout::bytes_per_entry)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Palette {
    layout: PaletteLayout,
    data:   Vec<u8>
}

impl Palette {
    /// Create a new palette
    ///
    /// Returns `None` if `data` does not hold a whole number of entries
    ///
    /// ```
    /// use texel_core::palette::{Palette, PaletteLayout};
    /// assert!(Palette::new(PaletteLayout::RGB24, vec![0;6]).is_some());
    /// assert!(Palette::new(PaletteLayout::RGB24, vec![0;7]).is_none());
    /// ```
    pub fn new(layout: PaletteLayout, data: Vec<u8>) -> Option<Palette> {
        if data.len() % layout.bytes_per_entry() != 0 {
            return None;
        }
        Some(Palette { layout, data })
    }

    pub const fn layout(&self) -> PaletteLayout {
        self.layout
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the entries
    ///
    /// The length can't change through this so the
    /// whole number of entries is preserved
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn num_entries(&self) -> usize {
        self.data.len() / self.layout.bytes_per_entry()
    }

    /// Return the bytes of entry `index` or `None`
    /// if the palette is smaller
    pub fn entry(&self, index: usize) -> Option<&[u8]> {
        let size = self.layout.bytes_per_entry();
        let start = index.checked_mul(size)?;
        self.data.get(start..start.checked_add(size)?)
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
