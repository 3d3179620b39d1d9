/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use nanorand::Rng;
use texel_convert::{unpack_bitfields, ConvertErrors};
use texel_core::bitmask::{derive, BitField};
use texel_core::colorspace::ColorModel;
use texel_core::element::ElementType;
use texel_core::options::DecoderOptions;

const MASKS_565: [u32; 4] = [0xF800, 0x07E0, 0x001F, 0];

#[test]
fn red_channel_matches_derived_shifts() {
    let (left, right) = derive(0xF800);
    assert_eq!((left, right), (3, 11));

    let mut rand = nanorand::WyRand::new_seed(565);
    let words: Vec<u16> = (0..1024).map(|_| rand.generate::<u16>()).collect();
    let data: Vec<u8> = words.iter().flat_map(|x| x.to_le_bytes()).collect();

    let out = unpack_bitfields(
        &data,
        32,
        32,
        2,
        MASKS_565,
        ElementType::U8,
        &DecoderOptions::default()
    )
    .unwrap();

    for (word, pixel) in words.iter().zip(out.data().chunks_exact(3)) {
        let red5 = (u32::from(*word) & 0xF800) >> right;
        let red8 = (red5 << left) | (red5 >> 2);
        assert_eq!(u32::from(pixel[0]), red8);

        let green6 = (u32::from(*word) & 0x07E0) >> 5;
        assert_eq!(u32::from(pixel[1]), (green6 << 2) | (green6 >> 4));
    }
}

#[test]
fn sixteen_bit_output() {
    let mut rand = nanorand::WyRand::new_seed(16);
    let mut data = vec![0_u8; 4 * 4 * 4];
    rand.fill(&mut data);

    let masks = [0x3FF0_0000, 0x000F_FC00, 0x0000_03FF, 0xC000_0000];
    let out = unpack_bitfields(
        &data,
        4,
        4,
        4,
        masks,
        ElementType::U16,
        &DecoderOptions::default()
    )
    .unwrap();

    assert_eq!(out.model(), ColorModel::RGBA);
    assert_eq!(out.element(), ElementType::U16);

    let fields = masks.map(BitField::new);
    for (word, pixel) in data.chunks_exact(4).zip(out.data().chunks_exact(8)) {
        let word = u32::from_le_bytes(word.try_into().unwrap());

        for (field, channel) in fields.iter().zip(pixel.chunks_exact(2)) {
            let value = u16::from_ne_bytes(channel.try_into().unwrap());
            assert_eq!(value, field.expand_u16(word));
        }
    }
}

#[test]
fn twenty_four_bit_pixels() {
    let masks = [0xFF_0000, 0x00_FF00, 0x00_00FF, 0];
    let out = unpack_bitfields(
        &[0x10, 0x20, 0x30, 0x40, 0x50, 0x60],
        2,
        1,
        3,
        masks,
        ElementType::U8,
        &DecoderOptions::default()
    )
    .unwrap();

    assert_eq!(out.data(), &[0x30, 0x20, 0x10, 0x60, 0x50, 0x40]);
}

#[test]
fn odd_masks_only_fail_when_strict() {
    let masks = [0b1010_0000, 0x0F, 0, 0];

    let lenient = unpack_bitfields(&[0xFF], 1, 1, 1, masks, ElementType::U8, &DecoderOptions::default());
    assert!(lenient.is_ok());

    let options = DecoderOptions::default().set_strict_bitmasks(true);
    let strict = unpack_bitfields(&[0xFF], 1, 1, 1, masks, ElementType::U8, &options);
    assert!(matches!(strict, Err(ConvertErrors::InvalidMask(0b1010_0000))));
}

#[test]
fn unsupported_shapes() {
    let options = DecoderOptions::default();

    let wide = unpack_bitfields(&[0; 5], 1, 1, 5, MASKS_565, ElementType::U8, &options);
    assert!(matches!(wide, Err(ConvertErrors::UnsupportedConversion(_, _))));

    let float = unpack_bitfields(&[0; 2], 1, 1, 2, MASKS_565, ElementType::F32, &options);
    assert!(matches!(float, Err(ConvertErrors::UnsupportedConversion(_, _))));

    let short = unpack_bitfields(&[0; 3], 2, 1, 2, MASKS_565, ElementType::U8, &options);
    assert!(matches!(short, Err(ConvertErrors::TruncatedInput(4, 3))));
}
