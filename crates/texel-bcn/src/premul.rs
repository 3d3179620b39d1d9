/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use texel_core::utils::clamp_byte;

use crate::common::Tile;

/// Undo alpha premultiplication of a decoded DXT2/DXT4 tile
///
/// Every color channel of a pixel with non zero alpha becomes
/// `clamp((channel << 8) / alpha)`, pixels with zero alpha are left as they are.
///
/// ```
/// use texel_bcn::{unpremultiply_tile, Tile};
/// let mut tile = Tile { pixels: [[64, 32, 0, 128]; 16] };
/// unpremultiply_tile(&mut tile);
/// assert_eq!(tile.pixels[0], [128, 64, 0, 128]);
/// ```
pub fn unpremultiply_tile(tile: &mut Tile) {
    for pixel in tile.pixels.iter_mut() {
        let alpha = i32::from(pixel[3]);

        if alpha == 0 {
            // nothing to divide by, color stays premultiplied
            continue;
        }
        for channel in pixel[..3].iter_mut() {
            *channel = clamp_byte((i32::from(*channel) << 8) / alpha);
        }
    }
}
