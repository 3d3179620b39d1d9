/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use texel_core::colorspace::ColorModel;

/// Block compressed formats the decoder understands
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BcFormat {
    /// BC1, 565 colors with optional one bit alpha
    DXT1,
    /// DXT3 with premultiplied alpha
    DXT2,
    /// BC2, explicit 4 bit alpha
    DXT3,
    /// DXT5 with premultiplied alpha
    DXT4,
    /// BC3, interpolated alpha
    DXT5,
    /// BC4, one interpolated channel
    ATI1N,
    /// BC5 (3Dc), two interpolated channels
    ATI2,
    /// DXT5 layout storing a swizzled normal map
    RXGB
}

impl BcFormat {
    /// Size in bytes of a single compressed 4x4 block
    pub const fn block_size(self) -> usize {
        match self {
            Self::DXT1 | Self::ATI1N => 8,
            Self::DXT2 | Self::DXT3 | Self::DXT4 | Self::DXT5 | Self::ATI2 | Self::RXGB => 16
        }
    }

    /// The color model of decoded pixels
    ///
    /// - `ATI1N` decodes to one luma channel
    /// - `ATI2` decodes to RGB, red and green hold X and Y
    ///   and blue the reconstructed Z
    /// - everything else decodes to RGBA
    pub const fn colorspace(self) -> ColorModel {
        match self {
            Self::ATI1N => ColorModel::Luma,
            Self::ATI2 => ColorModel::RGB,
            _ => ColorModel::RGBA
        }
    }

    /// Channels per decoded pixel, 1 for `ATI1N`, 3 for `ATI2` and 4 otherwise
    pub const fn num_components(self) -> usize {
        self.colorspace().num_components()
    }

    /// Whether colors were premultiplied by alpha before compression
    pub const fn is_premultiplied(self) -> bool {
        matches!(self, Self::DXT2 | Self::DXT4)
    }

    /// Number of compressed bytes a single `width` x `height` slice needs
    ///
    /// Returns `None` on overflow
    pub fn compressed_size(self, width: usize, height: usize) -> Option<usize> {
        width
            .div_ceil(4)
            .checked_mul(height.div_ceil(4))?
            .checked_mul(self.block_size())
    }
}

/// A decoded 4x4 tile
///
/// Pixels are stored row by row, each pixel has room for four channels,
/// only the first [`num_components`](BcFormat::num_components) of the decoded
/// format are meaningful.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Tile {
    pub pixels: [[u8; 4]; 16]
}

impl Tile {
    /// Return the pixel at column `x` and row `y` of the tile
    pub const fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        self.pixels[y * 4 + x]
    }
}
