/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use texel_bcn::{decompress, reconstruct_normal_z, BcFormat};

#[test]
fn ati1n_is_single_channel() {
    // v0 = 0, v1 = 255 -> six step table, first row indices 6,7,2,5
    let bits: u32 = 6 | 7 << 3 | 2 << 6 | 5 << 9;
    let mut block = [0_u8, 255, 0, 0, 0, 0, 0, 0];
    block[2..5].copy_from_slice(&bits.to_le_bytes()[..3]);

    let pixels = decompress(BcFormat::ATI1N, &block, 4, 4).unwrap();
    assert_eq!(pixels.len(), 16);
    assert_eq!(&pixels[..4], &[0, 255, 51, 204]);
    assert!(pixels[4..].iter().all(|x| *x == 0));
}

#[test]
fn ati2_reconstructs_z() {
    // flat X = 127, flat Y = 128: straight up normal
    let mut block = [0_u8; 16];
    block[0] = 127;
    block[1] = 127;
    block[8] = 128;
    block[9] = 128;

    let pixels = decompress(BcFormat::ATI2, &block, 4, 4).unwrap();
    assert_eq!(pixels.len(), 4 * 4 * 3);
    assert!(pixels.chunks_exact(3).all(|p| p == [127, 128, 255]));
}

#[test]
fn ati2_out_of_range_normal() {
    let mut block = [0_u8; 16];
    block[0] = 255;
    block[1] = 255;
    block[8] = 255;
    block[9] = 255;

    let pixels = decompress(BcFormat::ATI2, &block, 4, 4).unwrap();
    assert!(pixels.chunks_exact(3).all(|p| p == [255, 255, 0x7F]));
    assert_eq!(reconstruct_normal_z(255, 255), 0x7F);
}

#[test]
fn z_reconstruction_matches_formula() {
    for (x, y) in [(100_u8, 140_u8), (127, 0), (60, 200), (128, 128)] {
        let (xi, yi) = (i32::from(x), i32::from(y));
        let d = 127 * 128 - (xi - 127) * (xi - 128) - (yi - 127) * (yi - 128);
        let expected = if d > 0 {
            (f64::from(d).sqrt() as i32 + 128) as u8
        } else {
            0x7F
        };
        assert_eq!(reconstruct_normal_z(x, y), expected);
    }
}
