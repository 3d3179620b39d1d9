/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use texel_bcn::{decompress, BcDecodeErrors, BcDecoder, BcFormat};
use texel_core::bytestream::ByteCursor;
use texel_core::colorspace::ColorModel;
use texel_core::options::DecoderOptions;

/// Two flat white DXT1 blocks, enough for an 8x4 image
fn two_white_blocks() -> Vec<u8> {
    [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0].repeat(2)
}

#[test]
fn truncated_input_is_reported() {
    let mut data = two_white_blocks();
    data.truncate(13);

    match decompress(BcFormat::DXT1, &data, 8, 8) {
        Err(BcDecodeErrors::TruncatedInput {
            format: BcFormat::DXT1,
            expected: 32,
            found: 13
        }) => (),
        Err(e) => panic!("wrong error {e:?}"),
        Ok(_) => panic!("decoding truncated data succeeded")
    }
}

#[test]
fn failed_decode_zeroes_output_by_default() {
    let data = two_white_blocks();
    let mut output = vec![7_u8; 8 * 8 * 4];

    let mut decoder = BcDecoder::new(ByteCursor::new(&data), BcFormat::DXT1, 8, 8);
    assert!(decoder.decode_into(&mut output).is_err());
    assert!(output.iter().all(|x| *x == 0));
}

#[test]
fn partial_image_kept_when_asked() {
    let data = two_white_blocks();
    let mut output = vec![7_u8; 8 * 8 * 4];

    let options = DecoderOptions::default().set_keep_partial_image(true);
    let mut decoder =
        BcDecoder::new_with_options(ByteCursor::new(&data), BcFormat::DXT1, 8, 8, options);
    assert!(decoder.decode_into(&mut output).is_err());

    // first tile row decoded, second untouched
    let (top, bottom) = output.split_at(8 * 4 * 4);
    assert!(top.iter().all(|x| *x == 255));
    assert!(bottom.iter().all(|x| *x == 7));
}

#[test]
fn volume_slices_follow_each_other() {
    let mut data = vec![];
    for color in [0xF800_u16, 0x001F] {
        data.extend_from_slice(&color.to_le_bytes());
        data.extend_from_slice(&color.to_le_bytes());
        data.extend_from_slice(&[0; 4]);
    }
    let mut decoder = BcDecoder::new(ByteCursor::new(&data), BcFormat::DXT1, 2, 2);
    decoder.set_depth(2);
    assert_eq!(decoder.output_buf_size(), Some(2 * 2 * 2 * 4));

    let pixels = decoder.decode().unwrap();
    let (first, second) = pixels.split_at(16);
    assert!(first.chunks_exact(4).all(|p| p == [255, 0, 0, 255]));
    assert!(second.chunks_exact(4).all(|p| p == [0, 0, 255, 255]));
}

#[test]
fn dimensions_are_checked() {
    let data = two_white_blocks();

    let options = DecoderOptions::default().set_max_width(4);
    let mut decoder =
        BcDecoder::new_with_options(ByteCursor::new(&data), BcFormat::DXT1, 8, 4, options);
    assert!(matches!(
        decoder.decode(),
        Err(BcDecodeErrors::TooLargeDimensions("width", 4, 8))
    ));

    assert!(matches!(
        decompress(BcFormat::DXT1, &data, 0, 4),
        Err(BcDecodeErrors::ZeroDimensions)
    ));

    let mut decoder = BcDecoder::new(ByteCursor::new(&data), BcFormat::DXT1, 8, 4);
    let mut small = [0; 10];
    assert!(matches!(
        decoder.decode_into(&mut small),
        Err(BcDecodeErrors::TooSmallBuffer(128, 10))
    ));
}

#[test]
fn output_models_per_format() {
    assert_eq!(BcFormat::ATI1N.colorspace(), ColorModel::Luma);
    assert_eq!(BcFormat::ATI2.colorspace(), ColorModel::RGB);
    assert_eq!(BcFormat::RXGB.colorspace(), ColorModel::RGBA);
    assert_eq!(BcFormat::DXT1.compressed_size(5, 5), Some(32));
    assert_eq!(BcFormat::DXT5.compressed_size(4, 4), Some(16));
}

#[test]
fn std_readers_feed_the_decoder() {
    let data = two_white_blocks();
    let mut decoder = BcDecoder::new(std::io::Cursor::new(data), BcFormat::DXT1, 8, 4);
    let pixels = decoder.decode().unwrap();
    assert!(pixels.iter().all(|x| *x == 255));
}
