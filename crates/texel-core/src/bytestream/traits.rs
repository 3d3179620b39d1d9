/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Where bytes come from and where they go
//!
//! Block decoders and packed pixel routines only ever read forward,
//! so a source is little more than "fill this buffer".

use crate::bytestream::reader::ByteIoError;

/// A forward only source of bytes
///
/// Implemented for [`ByteCursor`](crate::bytestream::ByteCursor) and, with the
/// `std` feature, for `std::io::Cursor` and `BufReader` over seekable readers.
///
/// A failed fill must leave the source where it was, callers rely on
/// that to report how much input was left.
pub trait ByteSource {
    /// Next byte, or `0` once the source is exhausted
    fn next_byte_or_zero(&mut self) -> u8;

    /// Fill all of `buf` or fail with
    /// [`NotEnoughBytes`](ByteIoError::NotEnoughBytes)
    fn fill_exact(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;

    /// [`fill_exact`](Self::fill_exact) for buffers with a size known at compile time
    fn fill_array<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError>;

    /// Fill `buf` if the source holds `N` more bytes, otherwise leave
    /// both `buf` and the source untouched
    fn fill_array_or_keep<const N: usize>(&mut self, buf: &mut [u8; N]);
}

/// A destination for bytes
///
/// Implemented for `&mut [u8]`, `&mut Vec<u8>` and with `std`
/// for `&mut BufWriter<File>`
pub trait ByteSink {
    /// Write as much of `buf` as fits, returning how many bytes were taken
    fn put_some(&mut self, buf: &[u8]) -> Result<usize, ByteIoError>;

    /// Write all of `buf` or fail with
    /// [`NotEnoughBuffer`](ByteIoError::NotEnoughBuffer) without writing anything
    fn put_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError>;

    /// [`put_all`](Self::put_all) for buffers with a size known at compile time
    fn put_array<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError>;

    /// Push buffered bytes to their final destination
    fn flush_sink(&mut self) -> Result<(), ByteIoError>;
}
