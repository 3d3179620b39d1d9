/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use alloc::vec::Vec;

use texel_core::bytestream::{ByteCursor, ByteIoError, ByteReader, ByteSource};
use texel_core::colorspace::ColorModel;
use texel_core::log::{trace, warn};
use texel_core::options::DecoderOptions;

use crate::block::decode_block;
use crate::common::{BcFormat, Tile};
use crate::errors::BcDecodeErrors;

/// A block compressed image decoder
///
/// Block compressed data carries no header of its own, the container
/// (DDS, VTF, ...) tells the format and dimensions, the decoder then
/// turns the blocks into pixels of [`colorspace`](Self::colorspace).
///
/// Blocks are read tile row by tile row, slices of a volume texture one
/// after another. Tiles hanging over the right or bottom edge are
/// decoded but only the pixels inside the image are written.
///
/// # Example
/// ```
/// use texel_bcn::{BcDecoder, BcFormat};
/// use texel_core::bytestream::ByteCursor;
///
/// fn main() -> Result<(), texel_bcn::BcDecodeErrors> {
///     // two flat ATI1n blocks for a 8x4 image
///     let data = [200, 200, 0, 0, 0, 0, 0, 0, 10, 10, 0, 0, 0, 0, 0, 0];
///     let mut decoder = BcDecoder::new(ByteCursor::new(&data), BcFormat::ATI1N, 8, 4);
///     let pixels = decoder.decode()?;
///     assert_eq!(pixels.len(), 32);
///     assert_eq!(&pixels[..8], &[200, 200, 200, 200, 10, 10, 10, 10]);
///     Ok(())
/// }
/// ```
pub struct BcDecoder<T: ByteSource> {
    stream:  ByteReader<T>,
    options: DecoderOptions,
    format:  BcFormat,
    width:   usize,
    height:  usize,
    depth:   usize
}

impl<T: ByteSource> BcDecoder<T> {
    /// Create a new decoder reading `format` blocks for a
    /// `width` x `height` image from `source`
    pub fn new(source: T, format: BcFormat, width: usize, height: usize) -> BcDecoder<T> {
        BcDecoder::new_with_options(source, format, width, height, DecoderOptions::default())
    }

    /// Create a new decoder with specified options
    ///
    /// # Arguments
    ///
    /// * `source`: Where compressed blocks are read from
    /// * `format`: The block format
    /// * `width`, `height`: Image dimensions in pixels
    /// * `options`: Specialized options for this decoder
    pub fn new_with_options(
        source: T, format: BcFormat, width: usize, height: usize, options: DecoderOptions
    ) -> BcDecoder<T> {
        BcDecoder {
            stream: ByteReader::new(source),
            options,
            format,
            width,
            height,
            depth: 1
        }
    }

    /// Set the number of slices of a volume texture, default is 1
    pub fn set_depth(&mut self, depth: usize) -> &mut Self {
        self.depth = depth;
        self
    }

    /// Get dimensions of the image as a tuple of width,height
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of slices that will be decoded
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The block compression format of the input
    pub const fn format(&self) -> BcFormat {
        self.format
    }

    /// Color model of the decoded pixels, see [`BcFormat::colorspace`]
    pub const fn colorspace(&self) -> ColorModel {
        self.format.colorspace()
    }

    /// Return the expected size of the output buffer for which
    /// a contiguous slice of `&[u8]` can store it without needing reallocation
    ///
    /// Returns `None` if the calculation overflows
    pub fn output_buf_size(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.depth)?
            .checked_mul(self.format.num_components())
    }

    /// Number of compressed bytes a complete image needs
    pub fn compressed_size(&self) -> Option<usize> {
        self.format
            .compressed_size(self.width, self.height)?
            .checked_mul(self.depth)
    }

    fn check_dimensions(&self) -> Result<(), BcDecodeErrors> {
        if self.width == 0 || self.height == 0 || self.depth == 0 {
            return Err(BcDecodeErrors::ZeroDimensions);
        }
        if self.width > self.options.get_max_width() {
            return Err(BcDecodeErrors::TooLargeDimensions(
                "width",
                self.options.get_max_width(),
                self.width
            ));
        }
        if self.height > self.options.get_max_height() {
            return Err(BcDecodeErrors::TooLargeDimensions(
                "height",
                self.options.get_max_height(),
                self.height
            ));
        }
        if self.depth > self.options.get_max_depth() {
            return Err(BcDecodeErrors::TooLargeDimensions(
                "depth",
                self.options.get_max_depth(),
                self.depth
            ));
        }
        Ok(())
    }

    /// Decode the image returning the decoded bytes as an
    /// allocated `Vec<u8>` or an error if decoding could not be completed
    ///
    /// Also see [`decode_into`](Self::decode_into) which decodes into
    /// a pre-allocated buffer
    pub fn decode(&mut self) -> Result<Vec<u8>, BcDecodeErrors> {
        self.check_dimensions()?;

        let size = self
            .output_buf_size()
            .ok_or(BcDecodeErrors::OverflowOccurred)?;

        let mut output = Vec::new();
        output
            .try_reserve_exact(size)
            .map_err(|_| BcDecodeErrors::AllocationFailure(size))?;
        output.resize(size, 0);

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode the image into `buf` or return an error
    /// if something bad occurred
    ///
    /// Only the first [`output_buf_size`](Self::output_buf_size) bytes are written.
    ///
    /// On error the output is zeroed unless the decoder was created with
    /// [`DecoderOptions::set_keep_partial_image`], in which case the
    /// tiles decoded before the error remain.
    pub fn decode_into(&mut self, buf: &mut [u8]) -> Result<(), BcDecodeErrors> {
        self.check_dimensions()?;

        let size = self
            .output_buf_size()
            .ok_or(BcDecodeErrors::OverflowOccurred)?;

        if buf.len() < size {
            return Err(BcDecodeErrors::TooSmallBuffer(size, buf.len()));
        }
        let buf = &mut buf[..size];

        trace!("Format: {:?}", self.format);
        trace!("Width: {}", self.width);
        trace!("Height: {}", self.height);
        trace!("Depth: {}", self.depth);

        if let Err(err) = self.decode_tiles(buf) {
            if self.options.get_keep_partial_image() {
                warn!("Decoding stopped early, keeping tiles decoded so far");
            } else {
                buf.fill(0);
            }
            return Err(err);
        }
        Ok(())
    }

    fn decode_tiles(&mut self, buf: &mut [u8]) -> Result<(), BcDecodeErrors> {
        let format = self.format;
        let components = format.num_components();
        let block_size = format.block_size();
        let expected = self
            .compressed_size()
            .ok_or(BcDecodeErrors::OverflowOccurred)?;

        let (width, height) = (self.width, self.height);
        let row_stride = width * components;
        let slice_size = row_stride * height;

        let mut block = [0_u8; 16];
        let mut tile = Tile::default();
        let mut consumed = 0;

        for slice in buf.chunks_exact_mut(slice_size) {
            for tile_y in 0..height.div_ceil(4) {
                for tile_x in 0..width.div_ceil(4) {
                    let bytes = &mut block[..block_size];

                    match self.stream.read_exact_bytes(bytes) {
                        Ok(()) => consumed += block_size,
                        Err(ByteIoError::NotEnoughBytes(_, available)) => {
                            return Err(BcDecodeErrors::TruncatedInput {
                                format,
                                expected,
                                found: consumed + available
                            });
                        }
                        Err(err) => return Err(err.into())
                    }
                    decode_block(format, bytes, &mut tile)?;

                    // partial tiles at the right and bottom edges are clipped
                    for py in 0..4 {
                        let y = tile_y * 4 + py;
                        if y >= height {
                            break;
                        }
                        let row = &mut slice[y * row_stride..(y + 1) * row_stride];

                        for px in 0..4 {
                            let x = tile_x * 4 + px;
                            if x >= width {
                                break;
                            }
                            let pixel = tile.pixel(px, py);
                            row[x * components..(x + 1) * components]
                                .copy_from_slice(&pixel[..components]);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Decode a single slice image of `format` blocks stored in `data`
///
/// This is a shorthand for [`BcDecoder::new`] over an in-memory buffer
/// followed by [`BcDecoder::decode`]
pub fn decompress(
    format: BcFormat, data: &[u8], width: usize, height: usize
) -> Result<Vec<u8>, BcDecodeErrors> {
    BcDecoder::new(ByteCursor::new(data), format, width, height).decode()
}
