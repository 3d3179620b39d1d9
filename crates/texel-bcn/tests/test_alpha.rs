/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use texel_bcn::{decode_block, decompress, interpolated_alpha_table, BcFormat, Tile};

/// A flat color sub-block, every pixel selects color0
fn flat_color(color: u16) -> [u8; 8] {
    let [lo, hi] = color.to_le_bytes();
    [lo, hi, lo, hi, 0, 0, 0, 0]
}

#[test]
fn dxt5_alpha_table_from_full_range() {
    assert_eq!(
        interpolated_alpha_table(255, 0),
        [255, 0, 219, 182, 146, 109, 73, 36]
    );
}

#[test]
fn dxt5_uses_alpha_indices() {
    let mut block = [0_u8; 16];
    // a0 = 255, a1 = 0, first row selects indices 0,1,2,3
    block[0] = 255;
    block[1] = 0;
    let bits: u32 = 1 << 3 | 2 << 6 | 3 << 9;
    block[2..5].copy_from_slice(&bits.to_le_bytes()[..3]);
    block[8..].copy_from_slice(&flat_color(0xFFFF));

    let pixels = decompress(BcFormat::DXT5, &block, 4, 1).unwrap();
    let alphas: Vec<u8> = pixels.chunks_exact(4).map(|p| p[3]).collect();
    assert_eq!(alphas, [255, 0, 219, 182]);
    assert!(pixels.chunks_exact(4).all(|p| p[..3] == [255, 255, 255]));
}

#[test]
fn dxt3_explicit_alpha() {
    let mut block = [0_u8; 16];
    for (i, byte) in block[..8].iter_mut().enumerate() {
        // pixel 2i gets i, pixel 2i+1 gets 15-i
        *byte = (i as u8) | ((15 - i as u8) << 4);
    }
    block[8..].copy_from_slice(&flat_color(0x0000));

    let mut tile = Tile::default();
    decode_block(BcFormat::DXT3, &block, &mut tile).unwrap();

    for (i, pixel) in tile.pixels.iter().enumerate() {
        let nibble = (if i % 2 == 0 { i / 2 } else { 15 - i / 2 }) as u8;
        assert_eq!(pixel[3], nibble << 4 | nibble);
        assert_eq!(&pixel[..3], &[0, 0, 0]);
    }
}

#[test]
fn dxt2_divides_out_alpha() {
    let mut block = [0_u8; 16];
    // alpha 0x8 -> 0x88 on pixel 0, zero alpha on pixel 1, full alpha elsewhere
    block[0] = 0x08;
    for byte in block[1..8].iter_mut() {
        *byte = 0xFF;
    }
    // gray 565 color, expands to (66, 66, 66)
    block[8..].copy_from_slice(&flat_color(0x4208));

    let mut premultiplied = Tile::default();
    decode_block(BcFormat::DXT2, &block, &mut premultiplied).unwrap();

    let mut straight = Tile::default();
    decode_block(BcFormat::DXT3, &block, &mut straight).unwrap();

    assert_eq!(straight.pixels[0], [66, 66, 66, 0x88]);
    // (66 << 8) / 0x88 = 124
    assert_eq!(premultiplied.pixels[0], [124, 124, 124, 0x88]);
    // zero alpha, no division
    assert_eq!(premultiplied.pixels[1], [66, 66, 66, 0]);
    // full alpha, (66 << 8) / 255 = 66
    assert_eq!(premultiplied.pixels[2], [66, 66, 66, 255]);
}

#[test]
fn dxt4_matches_dxt5_then_unpremultiply() {
    let mut block = [0_u8; 16];
    block[0] = 40;
    block[1] = 40;
    block[8..].copy_from_slice(&flat_color(0x2104));

    let mut dxt5 = Tile::default();
    decode_block(BcFormat::DXT5, &block, &mut dxt5).unwrap();
    texel_bcn::unpremultiply_tile(&mut dxt5);

    let mut dxt4 = Tile::default();
    decode_block(BcFormat::DXT4, &block, &mut dxt4).unwrap();

    assert_eq!(dxt4, dxt5);
    assert_eq!(dxt4.pixels[0][3], 40);
}
