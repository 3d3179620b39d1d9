/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use nanorand::Rng;
use texel_convert::{
    add_alpha, apply_color_key, remove_alpha, swap_channel_order, ColorKey, ConvertErrors
};
use texel_core::buffer::PixelBuffer;
use texel_core::colorspace::ColorModel;
use texel_core::element::ElementType;
use texel_core::palette::{Palette, PaletteLayout};

#[test]
fn color_key_on_rgb24() {
    let mut rand = nanorand::WyRand::new_seed(0xC0102);
    let mut data = vec![0_u8; 8 * 8 * 3];
    rand.fill(&mut data);

    // make roughly a quarter of the pixels pure red
    for pixel in data.chunks_exact_mut(3) {
        if rand.generate_range(0_u8..4) == 0 {
            pixel.copy_from_slice(&[255, 0, 0]);
        }
    }
    let buf = PixelBuffer::new(data.clone(), 8, 8, ColorModel::RGB, ElementType::U8).unwrap();
    let out = apply_color_key(&buf, &ColorKey::rgb(1.0, 0.0, 0.0)).unwrap();

    assert_eq!(out.model(), ColorModel::RGBA);
    assert_eq!(out.data().len(), 8 * 8 * 4);

    for (src, dst) in data.chunks_exact(3).zip(out.data().chunks_exact(4)) {
        assert_eq!(src, &dst[..3]);

        let expected = if src == [255, 0, 0] { 0 } else { 255 };
        assert_eq!(dst[3], expected);
    }
}

#[test]
fn color_key_follows_bgr_order() {
    // blue first, this pixel is red
    let buf = PixelBuffer::new(vec![0, 0, 255, 255, 0, 0], 2, 1, ColorModel::BGR, ElementType::U8)
        .unwrap();
    let out = apply_color_key(&buf, &ColorKey::rgb(1.0, 0.0, 0.0)).unwrap();

    assert_eq!(out.model(), ColorModel::BGRA);
    assert_eq!(out.data(), &[0, 0, 255, 0, 255, 0, 0, 255]);
}

#[test]
fn color_key_on_palette() {
    let palette = Palette::new(PaletteLayout::RGB24, vec![1, 1, 1, 2, 2, 2, 3, 3, 3]).unwrap();
    let mut buf = PixelBuffer::new(vec![0, 1, 2, 1], 2, 2, ColorModel::Indexed, ElementType::U8)
        .unwrap();
    buf.set_palette(palette);

    // selects entry 1
    let key = ColorKey::new(0.0, 0.0, 0.0, 1.0 / 255.0);
    let out = apply_color_key(&buf, &key).unwrap();

    assert_eq!(out.data(), buf.data());
    let palette = out.palette().unwrap();
    assert_eq!(palette.layout(), PaletteLayout::RGBA32);
    assert_eq!(palette.data(), &[1, 1, 1, 255, 2, 2, 2, 0, 3, 3, 3, 255]);
}

#[test]
fn color_key_without_palette() {
    let buf = PixelBuffer::new(vec![0; 4], 2, 2, ColorModel::Indexed, ElementType::U8).unwrap();
    let result = apply_color_key(&buf, &ColorKey::default());

    assert!(matches!(result, Err(ConvertErrors::MissingPalette)));
}

#[test]
fn color_key_on_f32_rgb() {
    // none of these are exact in binary
    let values = [0.1_f32, 0.2, 0.3, 0.1, 0.2, 0.31];
    let data: Vec<u8> = values.iter().flat_map(|x| x.to_ne_bytes()).collect();

    let buf = PixelBuffer::new(data, 2, 1, ColorModel::RGB, ElementType::F32).unwrap();
    let out = apply_color_key(&buf, &ColorKey::rgb(0.1, 0.2, 0.3)).unwrap();

    assert_eq!(out.model(), ColorModel::RGBA);
    let alphas: Vec<f32> = out
        .data()
        .chunks_exact(16)
        .map(|x| f32::from_ne_bytes(x[12..16].try_into().unwrap()))
        .collect();
    assert_eq!(alphas, [0.0, 1.0]);
}

#[test]
fn color_key_on_f64_bgr() {
    let values = [0.3_f64, 0.2, 0.1, 0.1, 0.2, 0.3];
    let data: Vec<u8> = values.iter().flat_map(|x| x.to_ne_bytes()).collect();

    let buf = PixelBuffer::new(data, 2, 1, ColorModel::BGR, ElementType::F64).unwrap();
    let out = apply_color_key(&buf, &ColorKey::rgb(0.1, 0.2, 0.3)).unwrap();

    assert_eq!(out.model(), ColorModel::BGRA);
    let alphas: Vec<f64> = out
        .data()
        .chunks_exact(32)
        .map(|x| f64::from_ne_bytes(x[24..32].try_into().unwrap()))
        .collect();
    assert_eq!(alphas, [0.0, 1.0]);
}

#[test]
fn add_alpha_to_float_rgb() {
    let values = [0.25_f32, -3.5, f32::NAN, 1.0, 0.0, 7.0, f32::INFINITY, 0.5, 0.75, 1e-9, 2.0, 3.0];
    let data: Vec<u8> = values.iter().flat_map(|x| x.to_ne_bytes()).collect();

    let buf = PixelBuffer::new(data.clone(), 2, 2, ColorModel::RGB, ElementType::F32).unwrap();
    let out = add_alpha(&buf).unwrap();

    assert_eq!(out.model(), ColorModel::RGBA);
    assert_eq!(out.element(), ElementType::F32);

    for (src, dst) in data.chunks_exact(12).zip(out.data().chunks_exact(16)) {
        assert_eq!(src, &dst[..12]);
        assert_eq!(f32::from_ne_bytes(dst[12..16].try_into().unwrap()), 1.0);
    }
}

#[test]
fn add_alpha_to_f64_and_u32() {
    let buf = PixelBuffer::new(vec![0; 24], 1, 1, ColorModel::RGB, ElementType::F64).unwrap();
    let out = add_alpha(&buf).unwrap();
    assert_eq!(&out.data()[24..], &1.0_f64.to_ne_bytes());

    let buf = PixelBuffer::new(vec![0; 12], 1, 1, ColorModel::BGR, ElementType::U32).unwrap();
    let out = add_alpha(&buf).unwrap();
    assert_eq!(out.model(), ColorModel::BGRA);
    assert_eq!(&out.data()[12..], &u32::MAX.to_ne_bytes());
}

#[test]
fn remove_alpha_keeps_colors() {
    let buf = PixelBuffer::new(
        vec![1, 2, 3, 4, 5, 6, 7, 8],
        1,
        1,
        ColorModel::RGBA,
        ElementType::U16
    )
    .unwrap();
    let out = remove_alpha(&buf).unwrap();

    assert_eq!(out.model(), ColorModel::RGB);
    assert_eq!(out.data(), &[1, 2, 3, 4, 5, 6]);
    assert!(remove_alpha(&out).is_err());
}

#[test]
fn swap_is_an_involution() {
    let mut rand = nanorand::WyRand::new_seed(11);
    let mut data = vec![0_u8; 3 * 5 * 4 * 2];
    rand.fill(&mut data);

    let buf = PixelBuffer::new(data, 3, 5, ColorModel::RGBA, ElementType::U16).unwrap();
    let swapped = swap_channel_order(&buf).unwrap();

    assert_eq!(swapped.model(), ColorModel::BGRA);
    for (a, b) in buf.data().chunks_exact(8).zip(swapped.data().chunks_exact(8)) {
        assert_eq!(&a[0..2], &b[4..6]);
        assert_eq!(&a[2..4], &b[2..4]);
        assert_eq!(&a[4..6], &b[0..2]);
        assert_eq!(&a[6..8], &b[6..8]);
    }
    assert_eq!(swap_channel_order(&swapped).unwrap(), buf);
}

#[test]
fn swap_ignores_gray() {
    let buf = PixelBuffer::new(vec![1, 2], 1, 1, ColorModel::LumaA, ElementType::U8).unwrap();
    assert_eq!(swap_channel_order(&buf).unwrap(), buf);
}
