/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The 565 color sub-block shared by DXT1..DXT5 and RXGB

use crate::common::Tile;

/// Expand a 5:6:5 color word into 8 bit channels
///
/// Red and blue use `v << 3 | v >> 2`, green uses `v << 2 | v >> 3`
///
/// ```
/// use texel_bcn::rgb565_to_rgb888;
/// assert_eq!(rgb565_to_rgb888(0xFFFF), [255, 255, 255]);
/// assert_eq!(rgb565_to_rgb888(0xF800), [255, 0, 0]);
/// ```
#[inline]
pub const fn rgb565_to_rgb888(color: u16) -> [u8; 3] {
    let r = ((color >> 11) & 0x1F) as u8;
    let g = ((color >> 5) & 0x3F) as u8;
    let b = (color & 0x1F) as u8;

    [r << 3 | r >> 2, g << 2 | g >> 3, b << 3 | b >> 2]
}

/// How the two reference colors of a block are expanded into four
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ColorMode {
    /// DXT1, three colors plus a transparent entry when `color0 <= color1`
    AllowTransparent,
    /// DXT2..DXT5 and RXGB, always four opaque colors
    AlwaysOpaque
}

#[inline(always)]
fn blend(a: [u8; 3], b: [u8; 3], wa: u32, wb: u32, div: u32) -> [u8; 3] {
    let mix = |x: u8, y: u8| ((wa * u32::from(x) + wb * u32::from(y)) / div) as u8;

    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

/// Build the four RGBA colors a color sub-block can index
pub(crate) fn color_palette(color0: u16, color1: u16, mode: ColorMode) -> [[u8; 4]; 4] {
    let c0 = rgb565_to_rgb888(color0);
    let c1 = rgb565_to_rgb888(color1);

    // the comparison is on the raw words, not the expanded colors
    let four_colors = color0 > color1 || mode == ColorMode::AlwaysOpaque;

    let c3 = blend(c0, c1, 1, 2, 3);

    let (c2, alpha3) = if four_colors {
        (blend(c0, c1, 2, 1, 3), 255)
    } else {
        (blend(c0, c1, 1, 1, 2), 0)
    };

    [
        [c0[0], c0[1], c0[2], 255],
        [c1[0], c1[1], c1[2], 255],
        [c2[0], c2[1], c2[2], 255],
        [c3[0], c3[1], c3[2], alpha3]
    ]
}

/// Decode an 8 byte color sub-block writing RGBA into `tile`
pub(crate) fn decode_color_block(block: &[u8; 8], mode: ColorMode, tile: &mut Tile) {
    let color0 = u16::from_le_bytes([block[0], block[1]]);
    let color1 = u16::from_le_bytes([block[2], block[3]]);
    let indices = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

    let palette = color_palette(color0, color1, mode);

    for (i, pixel) in tile.pixels.iter_mut().enumerate() {
        let index = (indices >> (2 * i)) & 0b11;
        *pixel = palette[index as usize];
    }
}
