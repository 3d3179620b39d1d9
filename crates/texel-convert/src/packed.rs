/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Unpacking masked pixels
//!
//! Uncompressed DDS surfaces and 16/32 bit BMP images store
//! every pixel as a word with the position of each channel given
//! by a bit mask.
use texel_core::bitmask::BitField;
use texel_core::buffer::PixelBuffer;
use texel_core::bytestream::{ByteCursor, ByteEndian, ByteReader};
use texel_core::colorspace::ColorModel;
use texel_core::element::ElementType;
use texel_core::log::trace;
use texel_core::options::DecoderOptions;

use crate::errors::ConvertErrors;
use crate::utils::{alloc_output, describe};

fn read_word(
    stream: &mut ByteReader<ByteCursor<&[u8]>>, bytes_per_pixel: usize, endian: ByteEndian
) -> Result<u32, ConvertErrors> {
    let word = match bytes_per_pixel {
        1 => u32::from(stream.read_u8_err()?),
        2 => u32::from(stream.get_u16_err(endian)?),
        3 => {
            let [a, b, c] = stream.read_fixed_bytes_or_error::<3>()?;
            match endian {
                ByteEndian::LE => u32::from_le_bytes([a, b, c, 0]),
                ByteEndian::BE => u32::from_be_bytes([0, a, b, c])
            }
        }
        _ => stream.get_u32_err(endian)?
    };
    Ok(word)
}

/// Unpack `width * height` masked pixels into an RGB or RGBA buffer
///
/// # Arguments
/// - `data`: tightly packed pixel words, rows without padding
/// - `bytes_per_pixel`: 1, 2, 3 or 4
/// - `masks`: red, green, blue and alpha masks, a zero alpha mask
///   produces an `RGB` buffer
/// - `element`: [`ElementType::U8`] or [`ElementType::U16`], channels are
///   scaled to the full range of the element by bit replication
/// - `options`: the word byte order and whether masks must be contiguous
///
/// # Errors
/// - [`ConvertErrors::InvalidMask`] if strict bitmasks are requested and a
///   mask is not a single run of bits
/// - [`ConvertErrors::TruncatedInput`] if `data` is too short
/// - [`ConvertErrors::UnsupportedConversion`] for other pixel sizes or element types
pub fn unpack_bitfields(
    data: &[u8], width: usize, height: usize, bytes_per_pixel: usize, masks: [u32; 4],
    element: ElementType, options: &DecoderOptions
) -> Result<PixelBuffer, ConvertErrors> {
    let model = if masks[3] != 0 {
        ColorModel::RGBA
    } else {
        ColorModel::RGB
    };
    if !(1..=4).contains(&bytes_per_pixel)
        || !matches!(element, ElementType::U8 | ElementType::U16)
    {
        return Err(ConvertErrors::UnsupportedConversion(
            format!("{}-bit packed pixels", bytes_per_pixel * 8),
            describe(model, element)
        ));
    }
    let fields = masks.map(BitField::new);

    if options.get_strict_bitmasks() {
        if let Some(field) = fields.iter().find(|field| !field.is_contiguous()) {
            return Err(ConvertErrors::InvalidMask(field.mask()));
        }
    }
    let pixels = width
        .checked_mul(height)
        .ok_or(ConvertErrors::OverflowOccurred)?;
    let expected = pixels
        .checked_mul(bytes_per_pixel)
        .ok_or(ConvertErrors::OverflowOccurred)?;

    if data.len() < expected {
        return Err(ConvertErrors::TruncatedInput(expected, data.len()));
    }
    let channels = model.num_components();
    let out_size = PixelBuffer::expected_size(width, height, 1, model, element)
        .ok_or(ConvertErrors::OverflowOccurred)?;

    trace!("Unpacking {} bit pixels with masks {:08X?}", bytes_per_pixel * 8, masks);

    let mut output = alloc_output(out_size)?;
    let mut stream = ByteReader::new(ByteCursor::new(data));
    let endian = options.get_byte_endian();

    match element {
        ElementType::U16 => {
            for pixel in output.chunks_exact_mut(channels * 2) {
                let word = read_word(&mut stream, bytes_per_pixel, endian)?;

                for (field, out) in fields.iter().zip(pixel.chunks_exact_mut(2)) {
                    out.copy_from_slice(bytemuck::bytes_of(&field.expand_u16(word)));
                }
            }
        }
        _ => {
            for pixel in output.chunks_exact_mut(channels) {
                let word = read_word(&mut stream, bytes_per_pixel, endian)?;

                for (field, out) in fields.iter().zip(pixel.iter_mut()) {
                    *out = field.expand_u8(word);
                }
            }
        }
    }

    let out = PixelBuffer::new(output, width, height, model, element)
        .ok_or(ConvertErrors::TruncatedInput(out_size, 0))?;
    debug_assert!(out.is_consistent());

    Ok(out)
}

#[cfg(test)]
mod tests {
    use texel_core::bytestream::ByteEndian;
    use texel_core::colorspace::ColorModel;
    use texel_core::element::ElementType;
    use texel_core::options::DecoderOptions;

    use crate::packed::unpack_bitfields;

    const MASKS_565: [u32; 4] = [0xF800, 0x07E0, 0x001F, 0];

    #[test]
    fn rgb565_white() {
        let out = unpack_bitfields(
            &[0xFF, 0xFF],
            1,
            1,
            2,
            MASKS_565,
            ElementType::U8,
            &DecoderOptions::default()
        )
        .unwrap();
        assert_eq!(out.model(), ColorModel::RGB);
        assert_eq!(out.data(), &[255, 255, 255]);
    }

    #[test]
    fn big_endian_words() {
        let options = DecoderOptions::default().set_byte_endian(ByteEndian::BE);
        // pure red, 0xF800
        let out =
            unpack_bitfields(&[0xF8, 0x00], 1, 1, 2, MASKS_565, ElementType::U8, &options).unwrap();
        assert_eq!(out.data(), &[255, 0, 0]);
    }

    #[test]
    fn alpha_mask_adds_channel() {
        let masks = [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000];
        // BGRA bytes in memory
        let out = unpack_bitfields(
            &[1, 2, 3, 4],
            1,
            1,
            4,
            masks,
            ElementType::U8,
            &DecoderOptions::default()
        )
        .unwrap();
        assert_eq!(out.model(), ColorModel::RGBA);
        assert_eq!(out.data(), &[3, 2, 1, 4]);
    }

    #[test]
    fn truncated_data() {
        let result = unpack_bitfields(
            &[0; 7],
            2,
            2,
            2,
            MASKS_565,
            ElementType::U8,
            &DecoderOptions::default()
        );
        assert!(result.is_err());
    }
}
