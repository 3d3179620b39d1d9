/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by all texel libraries
//!
//! This crate provides a set of core routines shared
//! by the block decoder and pixel conversion crates
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//!   of integers and IEEE floats
//! - Bitfield mask helpers for unpacking custom packed pixel formats
//! - The pixel buffer and palette types the conversion routines operate on,
//!   together with color model and element type information
//! - Decoder options
//!
//! This library is `#[no_std]` with `alloc` feature needed for defining `Vec`
//! which we need for storing decoded  bytes.
//!
//!
//! # Features
//!  - `std`: Enables readers and writers backed by `std::io` types and
//!     `std::error::Error` implementations.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
//!  - `log`: Forwards the crate's logging macros to the `log` crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bitmask;
pub mod buffer;
pub mod bytestream;
pub mod colorspace;
pub mod element;
pub mod log;
pub mod options;
pub mod palette;
pub mod serde;
pub mod utils;
