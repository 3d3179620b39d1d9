/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use texel_core::buffer::PixelBuffer;
use texel_core::colorspace::ColorModel;
use texel_core::element::ElementType;

use crate::errors::ConvertErrors;
use crate::traits::Sample;

/// Allocate a zeroed output buffer, reporting failure instead of aborting
pub(crate) fn alloc_output(size: usize) -> Result<Vec<u8>, ConvertErrors> {
    let mut output = Vec::new();
    output
        .try_reserve_exact(size)
        .map_err(|_| ConvertErrors::AllocationFailure(size))?;
    output.resize(size, 0);
    Ok(output)
}

/// Allocate the data of a buffer shaped like `buf` but with
/// another model and element type
pub(crate) fn alloc_like(
    buf: &PixelBuffer, model: ColorModel, element: ElementType
) -> Result<Vec<u8>, ConvertErrors> {
    let size = PixelBuffer::expected_size(buf.width(), buf.height(), buf.depth(), model, element)
        .ok_or(ConvertErrors::OverflowOccurred)?;
    alloc_output(size)
}

/// Wrap converted data in a buffer with the dimensions of `like`
pub(crate) fn finish_like(
    like: &PixelBuffer, data: Vec<u8>, model: ColorModel, element: ElementType
) -> Result<PixelBuffer, ConvertErrors> {
    let found = data.len();
    let expected =
        PixelBuffer::expected_size(like.width(), like.height(), like.depth(), model, element)
            .ok_or(ConvertErrors::OverflowOccurred)?;

    let out = PixelBuffer::new_volume(
        data,
        like.width(),
        like.height(),
        like.depth(),
        model,
        element
    )
    .ok_or(ConvertErrors::TruncatedInput(expected, found))?;

    debug_assert!(out.is_consistent());
    Ok(out)
}

/// Check the buffer holds what its shape says
pub(crate) fn check_input(buf: &PixelBuffer) -> Result<(), ConvertErrors> {
    if buf.is_consistent() {
        return Ok(());
    }
    let expected = PixelBuffer::expected_size(
        buf.width(),
        buf.height(),
        buf.depth(),
        buf.model(),
        buf.element()
    )
    .ok_or(ConvertErrors::OverflowOccurred)?;

    Err(ConvertErrors::TruncatedInput(expected, buf.data().len()))
}

#[inline(always)]
fn read<T: Sample>(bytes: &[u8]) -> f64 {
    bytemuck::pod_read_unaligned::<T>(bytes).to_f64()
}

#[inline(always)]
fn write<T: Sample>(value: f64, out: &mut [u8]) {
    out.copy_from_slice(bytemuck::bytes_of(&T::from_f64(value)));
}

/// Read one native endian element of `element` type
///
/// `bytes` must be exactly `element.size_of()` long
#[inline]
pub(crate) fn read_sample(element: ElementType, bytes: &[u8]) -> f64 {
    match element {
        ElementType::U8 => read::<u8>(bytes),
        ElementType::I8 => read::<i8>(bytes),
        ElementType::U16 => read::<u16>(bytes),
        ElementType::I16 => read::<i16>(bytes),
        ElementType::U32 => read::<u32>(bytes),
        ElementType::I32 => read::<i32>(bytes),
        ElementType::F32 => read::<f32>(bytes),
        ElementType::F64 => read::<f64>(bytes)
    }
}

/// Write `value` as a native endian element of `element` type
///
/// Integers are rounded and saturate
#[inline]
pub(crate) fn write_sample(element: ElementType, value: f64, out: &mut [u8]) {
    match element {
        ElementType::U8 => write::<u8>(value, out),
        ElementType::I8 => write::<i8>(value, out),
        ElementType::U16 => write::<u16>(value, out),
        ElementType::I16 => write::<i16>(value, out),
        ElementType::U32 => write::<u32>(value, out),
        ElementType::I32 => write::<i32>(value, out),
        ElementType::F32 => write::<f32>(value, out),
        ElementType::F64 => write::<f64>(value, out)
    }
}

/// The bytes of the maximum value of `element`, what an opaque alpha holds
pub(crate) fn max_sample_bytes(element: ElementType) -> ([u8; 8], usize) {
    let size = element.size_of();
    let mut bytes = [0; 8];
    write_sample(element, element.max_value(), &mut bytes[..size]);
    (bytes, size)
}

pub(crate) fn describe(model: ColorModel, element: ElementType) -> String {
    format!("{model:?}({element:?})")
}

pub(crate) fn unsupported(
    buf: &PixelBuffer, model: ColorModel, element: ElementType
) -> ConvertErrors {
    ConvertErrors::UnsupportedConversion(
        describe(buf.model(), buf.element()),
        describe(model, element)
    )
}
