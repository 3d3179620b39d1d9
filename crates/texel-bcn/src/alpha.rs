/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Alpha and single channel sub-blocks
//!
//! The explicit 4 bit alpha of DXT2/DXT3 and the interpolated 3 bit index
//! sub-block used by DXT4/DXT5 alpha, ATI1n and both 3Dc channels.

/// Build the 8 entry lookup table of an interpolated sub-block
///
/// When `a0 > a1` six values are interpolated between the two references,
/// otherwise four are and the last two entries are `0` and `255`.
///
/// ```
/// use texel_bcn::interpolated_alpha_table;
/// assert_eq!(interpolated_alpha_table(255, 0), [255, 0, 219, 182, 146, 109, 73, 36]);
/// ```
pub const fn interpolated_alpha_table(a0: u8, a1: u8) -> [u8; 8] {
    let mut table = [a0, a1, 0, 0, 0, 0, 0, 0];
    let a0 = a0 as u32;
    let a1 = a1 as u32;

    if a0 > a1 {
        let mut i = 2;
        while i < 8 {
            table[i] = (((8 - i as u32) * a0 + (i as u32 - 1) * a1 + 3) / 7) as u8;
            i += 1;
        }
    } else {
        let mut i = 2;
        while i < 6 {
            table[i] = (((6 - i as u32) * a0 + (i as u32 - 1) * a1 + 2) / 5) as u8;
            i += 1;
        }
        table[6] = 0;
        table[7] = 255;
    }
    table
}

/// Decode an interpolated sub-block `[v0][v1][6 index bytes]` into
/// sixteen values, row major
pub(crate) fn decode_interpolated_block(block: &[u8; 8]) -> [u8; 16] {
    let table = interpolated_alpha_table(block[0], block[1]);
    let mut out = [0; 16];

    // two 24 bit little endian windows, eight pixels each
    for (window, chunk) in block[2..].chunks_exact(3).enumerate() {
        let bits = u32::from(chunk[0]) | u32::from(chunk[1]) << 8 | u32::from(chunk[2]) << 16;

        for j in 0..8 {
            let index = (bits >> (3 * j)) & 0b111;
            out[window * 8 + j] = table[index as usize];
        }
    }
    out
}

/// Decode an explicit alpha sub-block, sixteen 4 bit values,
/// low nibble first
pub(crate) fn decode_explicit_block(block: &[u8; 8]) -> [u8; 16] {
    let mut out = [0; 16];

    for (pair, byte) in out.chunks_exact_mut(2).zip(block.iter()) {
        let low = byte & 0x0F;
        let high = byte >> 4;
        pair[0] = low << 4 | low;
        pair[1] = high << 4 | high;
    }
    out
}
