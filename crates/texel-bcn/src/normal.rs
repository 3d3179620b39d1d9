/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use texel_core::utils::isqrt;

use crate::alpha::decode_interpolated_block;
use crate::common::Tile;

/// Reconstruct the Z channel of a 3Dc normal from its X and Y channels
///
/// With `d = 127*128 - (x-127)*(x-128) - (y-127)*(y-128)` this returns
/// `isqrt(d) + 128` when `d > 0` and `0x7F` otherwise.
///
/// ```
/// use texel_bcn::reconstruct_normal_z;
/// // a normal pointing straight out of the surface
/// assert_eq!(reconstruct_normal_z(127, 128), 255);
/// assert_eq!(reconstruct_normal_z(0, 0), 0x7F);
/// ```
pub const fn reconstruct_normal_z(x: u8, y: u8) -> u8 {
    let x = x as i32;
    let y = y as i32;
    let d = 127 * 128 - (x - 127) * (x - 128) - (y - 127) * (y - 128);

    if d > 0 {
        // d <= 127*128 so the root is at most 127
        (isqrt(d as u32) + 128) as u8
    } else {
        0x7F
    }
}

/// Decode a 16 byte 3Dc block, X sub-block first
///
/// X goes to channel 0, Y to channel 1 and the reconstructed Z to channel 2
pub(crate) fn decode_ati2_block(x_block: &[u8; 8], y_block: &[u8; 8], tile: &mut Tile) {
    let xs = decode_interpolated_block(x_block);
    let ys = decode_interpolated_block(y_block);

    for ((pixel, x), y) in tile.pixels.iter_mut().zip(xs).zip(ys) {
        *pixel = [x, y, reconstruct_normal_z(x, y), 255];
    }
}

#[cfg(test)]
mod tests {
    use crate::normal::reconstruct_normal_z;

    #[test]
    fn z_is_pure_and_in_range() {
        for x in 0..=255_u8 {
            for y in 0..=255_u8 {
                let z = reconstruct_normal_z(x, y);
                assert_eq!(z, reconstruct_normal_z(x, y));

                let (xi, yi) = (i32::from(x), i32::from(y));
                let sum = (xi - 127) * (xi - 128) + (yi - 127) * (yi - 128);
                if sum >= 127 * 128 {
                    assert_eq!(z, 0x7F);
                } else {
                    assert!(z >= 128);
                }
            }
        }
    }
}
