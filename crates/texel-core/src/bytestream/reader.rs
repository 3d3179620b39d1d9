/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use core::fmt::{Debug, Display, Formatter};

pub use cursor::ByteCursor;

use crate::bytestream::{ByteEndian, ByteSource};

mod cursor;
mod std_readers;

/// Errors that can occur when reading from or writing to a byte stream
pub enum ByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    /// The stream ended before a read could be satisfied
    ///
    /// requested, available
    NotEnoughBytes(usize, usize),
    /// The sink cannot hold the bytes we want to write
    ///
    /// requested, available
    NotEnoughBuffer(usize, usize)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

/// An endian aware reader over any [`ByteSource`]
///
/// Every scalar read comes in four flavours, e.g for `u32`
/// - `get_u32_le_err`/`get_u32_be_err`: error out on short input
/// - `get_u32_le`/`get_u32_be`: return `0` on short input
/// - `get_u32_err(endian)`: byte order chosen at runtime
pub struct ByteReader<T: ByteSource> {
    inner: T
}

impl<T: ByteSource> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader { inner: source }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.inner
    }
    /// Read a byte, `0` if the source is exhausted
    #[inline(always)]
    pub fn read_u8(&mut self) -> u8 {
        self.inner.next_byte_or_zero()
    }
    #[inline(always)]
    pub fn read_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let mut buf = [0];
        self.inner.fill_array(&mut buf)?;
        Ok(buf[0])
    }
    #[inline(always)]
    pub fn read_i8_err(&mut self) -> Result<i8, ByteIoError> {
        Ok(self.read_u8_err()? as i8)
    }
    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.fill_array(&mut byte_store)?;
        Ok(byte_store)
    }
    /// Fill `buf` completely or return an error, leaving the
    /// position unchanged on failure
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.inner.fill_exact(buf)
    }
}

macro_rules! get_single_type {
    ($name:tt,$name2:tt,$name3:tt,$name4:tt,$name5:tt,$name6:tt,$name7:tt,$int_type:tt) => {
        impl<T:ByteSource> ByteReader<T>
        {
            #[inline(always)]
            fn $name(&mut self, mode: ByteEndian) -> $int_type
            {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                self.inner.fill_array_or_keep(&mut space);

                match mode {
                    ByteEndian::BE => $int_type::from_be_bytes(space),
                    ByteEndian::LE => $int_type::from_le_bytes(space)
                }
            }

            #[inline(always)]
            fn $name2(&mut self, mode: ByteEndian) -> Result<$int_type, ByteIoError>
            {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                self.inner.fill_array(&mut space)?;

                match mode {
                    ByteEndian::BE => Ok($int_type::from_be_bytes(space)),
                    ByteEndian::LE => Ok($int_type::from_le_bytes(space))
                }
            }
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian value")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name3(&mut self) -> Result<$int_type, ByteIoError>
            {
                self.$name2(ByteEndian::BE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian value")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name4(&mut self) -> Result<$int_type, ByteIoError>
            {
                self.$name2(ByteEndian::LE)
            }
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian value")]
            #[doc=concat!("Returning 0 if the underlying  buffer does not have enough bytes for a ",stringify!($int_type)," read.")]
            #[inline(always)]
            pub fn $name5(&mut self) -> $int_type
            {
                self.$name(ByteEndian::BE)
            }
            #[doc=concat!("Read ",stringify!($int_type)," as a little endian value")]
            #[doc=concat!("Returning 0 if the underlying buffer does not have enough bytes for a ",stringify!($int_type)," read.")]
            #[inline(always)]
            pub fn $name6(&mut self) -> $int_type
            {
                self.$name(ByteEndian::LE)
            }
            #[doc=concat!("Read ",stringify!($int_type)," stored in `endian` byte order")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name7(&mut self, endian: ByteEndian) -> Result<$int_type, ByteIoError>
            {
                self.$name2(endian)
            }
        }
    };
}

get_single_type!(
    get_u16_inner_or_default,
    get_u16_inner_or_die,
    get_u16_be_err,
    get_u16_le_err,
    get_u16_be,
    get_u16_le,
    get_u16_err,
    u16
);
get_single_type!(
    get_i16_inner_or_default,
    get_i16_inner_or_die,
    get_i16_be_err,
    get_i16_le_err,
    get_i16_be,
    get_i16_le,
    get_i16_err,
    i16
);
get_single_type!(
    get_u32_inner_or_default,
    get_u32_inner_or_die,
    get_u32_be_err,
    get_u32_le_err,
    get_u32_be,
    get_u32_le,
    get_u32_err,
    u32
);
get_single_type!(
    get_i32_inner_or_default,
    get_i32_inner_or_die,
    get_i32_be_err,
    get_i32_le_err,
    get_i32_be,
    get_i32_le,
    get_i32_err,
    i32
);
get_single_type!(
    get_u64_inner_or_default,
    get_u64_inner_or_die,
    get_u64_be_err,
    get_u64_le_err,
    get_u64_be,
    get_u64_le,
    get_u64_err,
    u64
);
get_single_type!(
    get_i64_inner_or_default,
    get_i64_inner_or_die,
    get_i64_be_err,
    get_i64_le_err,
    get_i64_be,
    get_i64_le,
    get_i64_err,
    i64
);
// floats go through from_{le,be}_bytes which is a bit cast,
// NaN payloads and infinities come out exactly as stored
get_single_type!(
    get_f32_inner_or_default,
    get_f32_inner_or_die,
    get_f32_be_err,
    get_f32_le_err,
    get_f32_be,
    get_f32_le,
    get_f32_err,
    f32
);
get_single_type!(
    get_f64_inner_or_default,
    get_f64_inner_or_die,
    get_f64_be_err,
    get_f64_le_err,
    get_f64_be,
    get_f64_le,
    get_f64_err,
    f64
);
