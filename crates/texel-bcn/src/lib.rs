/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A block compressed texture decoder
//!
//! This crate decodes fixed ratio block compressed textures, where every
//! 4x4 pixel tile is stored in an 8 or 16 byte block, into linear pixels.
//!
//! # Supported formats
//! - DXT1 (BC1), opaque and one bit alpha blocks
//! - DXT2 and DXT3 (BC2), explicit 4 bit alpha, DXT2 premultiplied
//! - DXT4 and DXT5 (BC3), interpolated alpha, DXT4 premultiplied
//! - ATI1n (BC4), a single channel
//! - 3Dc/ATI2 (BC5), two channel normal maps with a reconstructed Z channel
//! - RXGB, the DXT5 layout with swizzled normal map channels
//!
//! Encoding is not supported.
//!
//! # Usage
//! For a whole image use [`BcDecoder`] or [`decompress`], single blocks
//! can be decoded with [`decode_block`].
//!
//! ```
//! use texel_bcn::{decompress, BcFormat};
//! // one flat white DXT1 block
//! let block = [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0];
//! let pixels = decompress(BcFormat::DXT1, &block, 4, 4).unwrap();
//! assert_eq!(pixels.len(), 4 * 4 * 4);
//! assert!(pixels.iter().all(|x| *x == 255));
//! ```
//!
//! # Features
//! - `no_std` by default with `alloc` needed for the output buffer
//! - `std`: `std::error::Error` for the error type and `std::io` backed readers
//! - `log`: trace level diagnostics through the `log` crate
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use crate::alpha::interpolated_alpha_table;
pub use crate::block::decode_block;
pub use crate::color::rgb565_to_rgb888;
pub use crate::common::{BcFormat, Tile};
pub use crate::decoder::{decompress, BcDecoder};
pub use crate::errors::BcDecodeErrors;
pub use crate::normal::reconstruct_normal_z;
pub use crate::premul::unpremultiply_tile;

mod alpha;
mod block;
mod color;
mod common;
mod decoder;
mod errors;
mod normal;
mod premul;
