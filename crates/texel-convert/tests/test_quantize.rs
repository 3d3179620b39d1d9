/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use nanorand::Rng;
use texel_convert::{MedianCutQuantizer, PixelConverter, Quantizer};
use texel_core::buffer::PixelBuffer;
use texel_core::colorspace::ColorModel;
use texel_core::element::ElementType;
use texel_core::palette::PaletteLayout;

#[test]
fn few_colors_give_exact_palette() {
    let colors = [[10_u8, 20, 30], [200, 100, 0], [0, 0, 0]];
    let data: Vec<u8> = (0..64).flat_map(|i| colors[i % 3]).collect();
    let buf = PixelBuffer::new(data, 8, 8, ColorModel::RGB, ElementType::U8).unwrap();

    let indexed = PixelConverter::new(ColorModel::Indexed, ElementType::U8)
        .convert(&buf)
        .unwrap();
    let palette = indexed.palette().unwrap();

    assert_eq!(palette.layout(), PaletteLayout::RGB24);
    assert_eq!(palette.num_entries(), 3);

    let back = PixelConverter::new(ColorModel::RGB, ElementType::U8)
        .convert(&indexed)
        .unwrap();
    assert_eq!(back.data(), buf.data());
}

#[test]
fn palette_size_is_bounded() {
    let mut rand = nanorand::WyRand::new_seed(256);
    let mut data = vec![0_u8; 32 * 32 * 4];
    rand.fill(&mut data);

    let buf = PixelBuffer::new(data, 32, 32, ColorModel::RGBA, ElementType::U8).unwrap();
    let (indices, palette) = MedianCutQuantizer::new().quantize(&buf, 16).unwrap();

    assert_eq!(indices.len(), 32 * 32);
    assert_eq!(palette.layout(), PaletteLayout::RGBA32);
    assert!(palette.num_entries() <= 16);
    assert!(indices.iter().all(|x| usize::from(*x) < palette.num_entries()));
}

#[test]
fn converter_prepares_other_models() {
    let data: Vec<u16> = (0..16).map(|x| x * 4000).collect();
    let bytes: Vec<u8> = data.iter().flat_map(|x| x.to_ne_bytes()).collect();
    let buf = PixelBuffer::new(bytes, 4, 4, ColorModel::Luma, ElementType::U16).unwrap();

    let indexed = PixelConverter::new(ColorModel::Indexed, ElementType::U8)
        .set_max_colors(4)
        .convert(&buf)
        .unwrap();

    assert_eq!(indexed.model(), ColorModel::Indexed);
    assert!(indexed.palette().unwrap().num_entries() <= 4);
}

#[test]
fn bad_sizes_are_errors() {
    let buf = PixelBuffer::new(vec![0; 3], 1, 1, ColorModel::RGB, ElementType::U8).unwrap();

    assert!(MedianCutQuantizer::new().quantize(&buf, 0).is_err());
    assert!(MedianCutQuantizer::new().quantize(&buf, 257).is_err());

    let luma = PixelBuffer::new(vec![0; 1], 1, 1, ColorModel::Luma, ElementType::U8).unwrap();
    assert!(MedianCutQuantizer::new().quantize(&luma, 8).is_err());
}
