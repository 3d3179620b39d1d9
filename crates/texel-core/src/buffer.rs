/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The canonical pixel buffer all conversions work on
use alloc::vec::Vec;

use crate::colorspace::ColorModel;
use crate::element::ElementType;
use crate::palette::Palette;
use crate::utils::checked_size;

/// A contiguous, tightly packed image
///
/// Pixels are stored row by row, slice by slice for volume
/// textures, with every channel element in native endian.
///
/// The buffer always satisfies
/// `data.len() == width * height * depth * channels * element.size_of()`
/// where `channels == model.num_components()`
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    data:    Vec<u8>,
    width:   usize,
    height:  usize,
    depth:   usize,
    model:   ColorModel,
    element: ElementType,
    palette: Option<Palette>
}

impl PixelBuffer {
    /// Create a new single slice pixel buffer
    ///
    /// Returns `None` if `data` doesn't have the size the dimensions,
    /// model and element type imply
    pub fn new(
        data: Vec<u8>, width: usize, height: usize, model: ColorModel, element: ElementType
    ) -> Option<PixelBuffer> {
        PixelBuffer::new_volume(data, width, height, 1, model, element)
    }

    /// Create a new pixel buffer with `depth` slices
    pub fn new_volume(
        data: Vec<u8>, width: usize, height: usize, depth: usize, model: ColorModel,
        element: ElementType
    ) -> Option<PixelBuffer> {
        let expected = PixelBuffer::expected_size(width, height, depth, model, element)?;

        if expected != data.len() {
            return None;
        }
        Some(PixelBuffer {
            data,
            width,
            height,
            depth,
            model,
            element,
            palette: None
        })
    }

    /// Number of bytes a buffer with these attributes occupies, `None` on overflow
    pub fn expected_size(
        width: usize, height: usize, depth: usize, model: ColorModel, element: ElementType
    ) -> Option<usize> {
        checked_size(&[
            width,
            height,
            depth,
            model.num_components(),
            element.size_of()
        ])
    }

    /// Attach a palette, returning the previous one
    pub fn set_palette(&mut self, palette: Palette) -> Option<Palette> {
        self.palette.replace(palette)
    }

    pub fn take_palette(&mut self) -> Option<Palette> {
        self.palette.take()
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn palette_mut(&mut self) -> Option<&mut Palette> {
        self.palette.as_mut()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the pixels, the length stays fixed
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn model(&self) -> ColorModel {
        self.model
    }

    pub const fn element(&self) -> ElementType {
        self.element
    }

    pub const fn channels(&self) -> usize {
        self.model.num_components()
    }

    /// Bytes in a single pixel
    pub const fn pixel_stride(&self) -> usize {
        self.channels() * self.element.size_of()
    }

    /// Bytes in a single row
    pub const fn row_stride(&self) -> usize {
        self.width * self.pixel_stride()
    }

    /// Number of pixels across all slices
    pub const fn num_pixels(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// Whether the size invariant holds
    ///
    /// Always true for buffers built through the constructors, exposed so
    /// operations can `debug_assert!` what they produce
    pub fn is_consistent(&self) -> bool {
        PixelBuffer::expected_size(self.width, self.height, self.depth, self.model, self.element)
            == Some(self.data.len())
    }
}
