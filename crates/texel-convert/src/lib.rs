/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Pixel and palette conversions for texel buffers
//!
//! This crate converts [`PixelBuffer`](texel_core::buffer::PixelBuffer)s
//! between colour models and element types, converts palettes between
//! layouts and unpacks masked (bit field) pixels.
//!
//! # Operations
//! - [`PixelConverter`]: any model and element type to any other, including
//!   expanding indexed images and quantizing to a palette
//! - [`convert_palette`]: palette layout conversion
//! - [`add_alpha`], [`remove_alpha`], [`apply_color_key`]: alpha channel handling
//! - [`swap_channel_order`]: RGB to BGR and back
//! - [`convert_element_type`]: element type conversion keeping the model
//! - [`unpack_bitfields`]: masked 8 to 32 bit pixels to RGB(A)
//!
//! # Features
//! - `log`: trace level diagnostics through the `log` crate
pub use crate::alpha::{add_alpha, apply_color_key, remove_alpha, ColorKey};
pub use crate::colorspace::PixelConverter;
pub use crate::depth::convert_element_type;
pub use crate::errors::ConvertErrors;
pub use crate::packed::unpack_bitfields;
pub use crate::palette::{convert_palette, LUMA_WEIGHTS};
pub use crate::quantize::{MedianCutQuantizer, Quantizer};
pub use crate::swizzle::swap_channel_order;
pub use crate::traits::Sample;

mod alpha;
mod colorspace;
mod depth;
mod errors;
mod packed;
mod palette;
mod quantize;
mod swizzle;
pub mod traits;
mod utils;
