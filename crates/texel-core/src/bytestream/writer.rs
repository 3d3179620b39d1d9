/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use crate::bytestream::{ByteEndian, ByteIoError, ByteSink};

mod memory_writer;
mod std_writer;

/// Encapsulates a simple Byte writer with
/// support for Endian aware writes
///
/// Writes are forwarded to any sink implementing [`ByteSink`],
/// e.g `&mut [u8]` or `&mut Vec<u8>`
pub struct ByteWriter<T: ByteSink> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ByteSink> ByteWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ByteWriter<T> {
        ByteWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use texel_core::bytestream::ByteWriter;
    /// let mut sink: Vec<u8> = vec![];
    /// let mut stream = ByteWriter::new(&mut sink);
    /// assert_eq!(stream.bytes_written(),0);
    /// stream.write_u16_be_err(12).unwrap();
    /// assert_eq!(stream.bytes_written(),2);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
    /// Destroy this writer returning the underlying sink
    pub fn inner(self) -> T {
        self.buffer
    }
    /// Write bytes from the buf into the sink, returning how many
    /// bytes were written
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, ByteIoError> {
        let bytes = self.buffer.put_some(buf)?;
        self.bytes_written += bytes;
        Ok(bytes)
    }
    /// Write all bytes from `buf` into the sink or error out
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.buffer.put_all(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }
    /// Write a fixed compile time known number of bytes to the sink
    pub fn write_const_bytes<const N: usize>(&mut self, byte: &[u8; N]) -> Result<(), ByteIoError> {
        self.buffer.put_array(byte)?;
        self.bytes_written += N;
        Ok(())
    }
    /// Write a single byte into the bytestream or error out
    /// if there is not enough space
    ///
    /// # Example
    /// ```
    /// use texel_core::bytestream::ByteWriter;
    /// let mut buf = [0;10];
    /// let mut stream  =  ByteWriter::new(&mut buf[..]);
    /// assert!(stream.write_u8_err(34).is_ok());
    /// ```
    /// No space
    /// ```
    /// use texel_core::bytestream::ByteWriter;
    /// let mut no_space: [u8; 0] = [];
    /// let mut stream = ByteWriter::new(&mut no_space[..]);
    /// assert!(stream.write_u8_err(32).is_err());
    /// ```
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), ByteIoError> {
        self.write_const_bytes(&[byte])
    }
    /// Write a single byte, silently dropping it if the sink is full
    pub fn write_u8(&mut self, byte: u8) {
        let _ = self.write_const_bytes(&[byte]);
    }
    /// Ensure written bytes reach the sink
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.buffer.flush_sink()
    }
}

macro_rules! write_single_type {
    ($name:tt,$name2:tt,$name3:tt,$name4:tt,$name5:tt,$name6:tt,$name7:tt,$int_type:tt) => {
        impl<T: ByteSink> ByteWriter<T> {
            #[inline(always)]
            fn $name(&mut self, byte: $int_type, mode: ByteEndian) -> Result<(), ByteIoError> {
                // get bits, depending on mode.
                // This should be inlined and not visible in
                // the generated binary since mode is a compile
                // time constant.
                let bytes = match mode {
                    ByteEndian::BE => byte.to_be_bytes(),
                    ByteEndian::LE => byte.to_le_bytes()
                };
                self.write_const_bytes(&bytes)
            }
            #[inline(always)]
            fn $name2(&mut self, byte: $int_type, mode: ByteEndian) {
                let _ = self.$name(byte, mode);
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a big endian value")]
            #[doc=concat!("Returning an error if the underlying sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name3(&mut self, byte: $int_type) -> Result<(), ByteIoError> {
                self.$name(byte, ByteEndian::BE)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a little endian value")]
            #[doc=concat!("Returning an error if the underlying sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name4(&mut self, byte: $int_type) -> Result<(), ByteIoError> {
                self.$name(byte, ByteEndian::LE)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a big endian value")]
            #[doc=concat!("Or don't write anything if the sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name5(&mut self, byte: $int_type) {
                self.$name2(byte, ByteEndian::BE)
            }
            #[doc=concat!("Write ",stringify!($int_type)," as a little endian value")]
            #[doc=concat!("Or don't write anything if the sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name6(&mut self, byte: $int_type) {
                self.$name2(byte, ByteEndian::LE)
            }
            #[doc=concat!("Write ",stringify!($int_type)," in `endian` byte order")]
            #[doc=concat!("Returning an error if the underlying sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name7(&mut self, byte: $int_type, endian: ByteEndian) -> Result<(), ByteIoError> {
                self.$name(byte, endian)
            }
        }
    };
}

write_single_type!(
    write_u16_inner_or_die,
    write_u16_inner_or_none,
    write_u16_be_err,
    write_u16_le_err,
    write_u16_be,
    write_u16_le,
    write_u16_err,
    u16
);
write_single_type!(
    write_i16_inner_or_die,
    write_i16_inner_or_none,
    write_i16_be_err,
    write_i16_le_err,
    write_i16_be,
    write_i16_le,
    write_i16_err,
    i16
);
write_single_type!(
    write_u32_inner_or_die,
    write_u32_inner_or_none,
    write_u32_be_err,
    write_u32_le_err,
    write_u32_be,
    write_u32_le,
    write_u32_err,
    u32
);
write_single_type!(
    write_i32_inner_or_die,
    write_i32_inner_or_none,
    write_i32_be_err,
    write_i32_le_err,
    write_i32_be,
    write_i32_le,
    write_i32_err,
    i32
);
write_single_type!(
    write_u64_inner_or_die,
    write_u64_inner_or_none,
    write_u64_be_err,
    write_u64_le_err,
    write_u64_be,
    write_u64_le,
    write_u64_err,
    u64
);
write_single_type!(
    write_i64_inner_or_die,
    write_i64_inner_or_none,
    write_i64_be_err,
    write_i64_le_err,
    write_i64_be,
    write_i64_le,
    write_i64_err,
    i64
);
write_single_type!(
    write_f32_inner_or_die,
    write_f32_inner_or_none,
    write_f32_be_err,
    write_f32_le_err,
    write_f32_be,
    write_f32_le,
    write_f32_err,
    f32
);
write_single_type!(
    write_f64_inner_or_die,
    write_f64_inner_or_none,
    write_f64_be_err,
    write_f64_le_err,
    write_f64_be,
    write_f64_le,
    write_f64_err,
    f64
);
