/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! This module exposes a struct for which all implemented
//! decoders and unpacking routines get shared options
//!
//! All supported options are put into one `DecoderOptions` to allow for global configurations
//! options i.e the same `DecoderOptions` can be reused for the block decoder and
//! the packed pixel routines
use crate::bytestream::ByteEndian;

/// Decoder options
///
/// Not all options are respected by every routine,
/// each option specifies what respects it
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_width:          usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_height:         usize,
    /// Maximum number of slices of a volume texture
    ///
    /// - Default value: 4096
    /// - Respected by: `bcn`
    max_depth:          usize,
    /// Keep pixels of tiles decoded before an error
    ///
    /// When false the output is zeroed before the error is returned
    ///
    /// - Default value: false
    /// - Respected by: `bcn`
    keep_partial_image: bool,
    /// Reject channel masks that are not a single run of set bits
    ///
    /// - Default value: false
    /// - Respected by: `packed pixel unpacking`
    strict_bitmasks:    bool,
    /// Byte order of packed pixels
    ///
    /// - Default value: `ByteEndian::LE`
    /// - Respected by: `packed pixel unpacking`
    byte_endian:        ByteEndian
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:          1 << 14,
            max_height:         1 << 14,
            max_depth:          1 << 12,
            keep_partial_image: false,
            strict_bitmasks:    false,
            byte_endian:        ByteEndian::LE
        }
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Get maximum number of slices of a volume texture
    pub const fn get_max_depth(&self) -> usize {
        self.max_depth
    }

    /// Return true whether pixels decoded before an error are kept
    pub const fn get_keep_partial_image(&self) -> bool {
        self.keep_partial_image
    }

    /// Return true if non contiguous channel masks are rejected
    pub const fn get_strict_bitmasks(&self) -> bool {
        self.strict_bitmasks
    }

    /// Get the byte order packed pixels are read in
    pub const fn get_byte_endian(&self) -> ByteEndian {
        self.byte_endian
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set maximum number of slices a volume texture may have
    pub fn set_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set whether pixels of tiles decoded before an error survive it
    ///
    /// This is an explicit opt in, by default a failed decode leaves
    /// a zeroed output
    pub fn set_keep_partial_image(mut self, yes: bool) -> Self {
        self.keep_partial_image = yes;
        self
    }

    /// Set whether channel masks that are not a single run of set bits
    /// are rejected instead of being decoded as is
    pub fn set_strict_bitmasks(mut self, yes: bool) -> Self {
        self.strict_bitmasks = yes;
        self
    }

    /// Set the byte order packed pixels are stored in
    pub fn set_byte_endian(mut self, endian: ByteEndian) -> Self {
        self.byte_endian = endian;
        self
    }
}
