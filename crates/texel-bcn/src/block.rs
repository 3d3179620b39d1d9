/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use crate::alpha::{decode_explicit_block, decode_interpolated_block};
use crate::color::{decode_color_block, ColorMode};
use crate::common::{BcFormat, Tile};
use crate::errors::BcDecodeErrors;
use crate::normal::decode_ati2_block;
use crate::premul::unpremultiply_tile;

/// Copy the 8 byte sub-block starting at `offset`
#[inline(always)]
fn sub_block(block: &[u8], offset: usize) -> [u8; 8] {
    let mut out = [0; 8];
    out.copy_from_slice(&block[offset..offset + 8]);
    out
}

#[inline(always)]
fn apply_alpha(tile: &mut Tile, alpha: [u8; 16]) {
    for (pixel, a) in tile.pixels.iter_mut().zip(alpha) {
        pixel[3] = a;
    }
}

/// Decode a single compressed block of `format` into `tile`
///
/// `block` must hold at least [`block_size`](BcFormat::block_size) bytes,
/// extra bytes are ignored.
///
/// For `ATI1N` only channel 0 of each tile pixel is
/// written, for `ATI2` channels 0 to 2.
///
/// # Errors
/// - [`BcDecodeErrors::TruncatedInput`] if the block is too short, the tile
///   is not modified in that case
pub fn decode_block(format: BcFormat, block: &[u8], tile: &mut Tile) -> Result<(), BcDecodeErrors> {
    let size = format.block_size();

    if block.len() < size {
        return Err(BcDecodeErrors::TruncatedInput {
            format,
            expected: size,
            found: block.len()
        });
    }

    match format {
        BcFormat::DXT1 => {
            decode_color_block(&sub_block(block, 0), ColorMode::AllowTransparent, tile);
        }
        BcFormat::DXT2 | BcFormat::DXT3 => {
            decode_color_block(&sub_block(block, 8), ColorMode::AlwaysOpaque, tile);
            apply_alpha(tile, decode_explicit_block(&sub_block(block, 0)));
        }
        BcFormat::DXT4 | BcFormat::DXT5 | BcFormat::RXGB => {
            // RXGB keeps the channels exactly as stored, no swizzle is undone
            decode_color_block(&sub_block(block, 8), ColorMode::AlwaysOpaque, tile);
            apply_alpha(tile, decode_interpolated_block(&sub_block(block, 0)));
        }
        BcFormat::ATI1N => {
            let values = decode_interpolated_block(&sub_block(block, 0));

            for (pixel, value) in tile.pixels.iter_mut().zip(values) {
                pixel[0] = value;
            }
        }
        BcFormat::ATI2 => {
            decode_ati2_block(&sub_block(block, 0), &sub_block(block, 8), tile);
        }
    }

    if format.is_premultiplied() {
        unpremultiply_tile(tile);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::block::decode_block;
    use crate::common::{BcFormat, Tile};
    use crate::errors::BcDecodeErrors;

    #[test]
    fn short_block_leaves_tile_alone() {
        let mut tile = Tile::default();
        tile.pixels[0] = [1, 2, 3, 4];

        match decode_block(BcFormat::DXT5, &[0; 15], &mut tile) {
            Err(BcDecodeErrors::TruncatedInput {
                expected: 16,
                found: 15,
                ..
            }) => (),
            _ => panic!("expected a truncation error")
        }
        assert_eq!(tile.pixels[0], [1, 2, 3, 4]);
    }

    #[test]
    fn rxgb_is_decoded_literally() {
        // color0 < color1 would select three colors in DXT1
        let block = [
            0x80, 0x80, 0, 0, 0, 0, 0, 0, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF
        ];
        let mut tile = Tile::default();
        decode_block(BcFormat::RXGB, &block, &mut tile).unwrap();

        // index 3 of an always opaque palette, (0 + 2*255)/3
        assert!(tile.pixels.iter().all(|p| *p == [170, 170, 170, 0x80]));
    }

    #[test]
    fn ati1n_writes_one_channel() {
        let mut tile = Tile {
            pixels: [[9, 9, 9, 9]; 16]
        };
        decode_block(BcFormat::ATI1N, &[255, 0, 0, 0, 0, 0, 0, 0], &mut tile).unwrap();
        assert!(tile.pixels.iter().all(|p| *p == [255, 9, 9, 9]));
    }
}
