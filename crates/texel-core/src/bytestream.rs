/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! This module contains two main structs that help in
//! byte reading and byte writing
//!
//! Useful for a lot of image readers and writers, it's put
//! here to minimize code reuse
//!
//! Every multi-byte read and write comes in a big endian, little endian
//! and runtime selected ([`ByteEndian`]) flavour, for `u16`,`i16`,`u32`,`i32`,
//! `u64`,`i64`,`f32` and `f64`.
pub use reader::{ByteCursor, ByteIoError, ByteReader};
pub use traits::*;
pub use writer::ByteWriter;

mod reader;
mod traits;
mod writer;

/// The byte order a multi-byte value is stored in
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ByteEndian {
    /// Little endian, least significant byte first
    #[default]
    LE,
    /// Big endian, most significant byte first
    BE
}

impl ByteEndian {
    /// The byte order of the machine we are running on
    pub const fn native() -> ByteEndian {
        if cfg!(target_endian = "little") {
            ByteEndian::LE
        } else {
            ByteEndian::BE
        }
    }

    /// Return true if values stored in this order can be used
    /// without any byte reversal
    pub const fn is_native(self) -> bool {
        matches!(
            (self, ByteEndian::native()),
            (ByteEndian::LE, ByteEndian::LE) | (ByteEndian::BE, ByteEndian::BE)
        )
    }
}

macro_rules! swap_endian_impl {
    ($name:tt,$int_type:tt) => {
        #[doc=concat!("Reverse the bytes of every ",stringify!($int_type)," sample in `samples`")]
        ///
        /// Trailing bytes that do not make up a full sample are left untouched
        pub fn $name(samples: &mut [u8]) {
            const SIZE: usize = core::mem::size_of::<$int_type>();

            for chunk in samples.chunks_exact_mut(SIZE) {
                chunk.reverse();
            }
        }
    };
}

swap_endian_impl!(swap_endian_u16, u16);
swap_endian_impl!(swap_endian_u32, u32);
swap_endian_impl!(swap_endian_u64, u64);

/// Convert samples of `size` bytes stored in `from` order to native order in place
///
/// This is a no-op when `from` is already the native order, or when
/// `size` is one byte
pub fn samples_to_native(samples: &mut [u8], size: usize, from: ByteEndian) {
    if from.is_native() {
        return;
    }
    match size {
        2 => swap_endian_u16(samples),
        4 => swap_endian_u32(samples),
        8 => swap_endian_u64(samples),
        _ => ()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::bytestream::{samples_to_native, swap_endian_u32, ByteEndian};

    #[test]
    fn big_endian_samples_become_native() {
        let values = [0x0102_u16, 0xA0B0, 0xFFFE];
        let mut bytes: Vec<u8> = values.iter().flat_map(|x| x.to_be_bytes()).collect();

        samples_to_native(&mut bytes, 2, ByteEndian::BE);

        let decoded: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|x| u16::from_ne_bytes([x[0], x[1]]))
            .collect();
        assert_eq!(decoded, values);
    }

    #[test]
    fn native_order_and_bytes_are_untouched() {
        let mut bytes = [1, 2, 3, 4, 5];

        samples_to_native(&mut bytes, 4, ByteEndian::native());
        assert_eq!(bytes, [1, 2, 3, 4, 5]);

        let other = if ByteEndian::native() == ByteEndian::LE {
            ByteEndian::BE
        } else {
            ByteEndian::LE
        };
        samples_to_native(&mut bytes, 1, other);
        assert_eq!(bytes, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn trailing_bytes_are_left_alone() {
        let mut bytes = [1, 2, 3, 4, 5];
        swap_endian_u32(&mut bytes);
        assert_eq!(bytes, [4, 3, 2, 1, 5]);
    }
}
