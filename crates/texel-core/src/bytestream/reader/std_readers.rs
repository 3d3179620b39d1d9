/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "std")]

use std::io::{BufReader, Read, Seek};

use crate::bytestream::reader::ByteIoError;
use crate::bytestream::ByteSource;

/// Read exactly `buf.len()` bytes, rewinding to where we started
/// if the source ends early so that a failed read does not move the position
fn read_exact_or_rewind<R: Read + Seek>(source: &mut R, buf: &mut [u8]) -> Result<(), ByteIoError> {
    let start = source.stream_position()?;
    let mut filled = 0;

    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(amount) => filled += amount,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ByteIoError::from(e))
        }
    }
    if filled != buf.len() {
        source.seek(std::io::SeekFrom::Start(start))?;
        return Err(ByteIoError::NotEnoughBytes(buf.len(), filled));
    }
    Ok(())
}

macro_rules! std_reader_impl {
    ($ty:ty, $($bounds:tt)*) => {
        impl<$($bounds)*> ByteSource for $ty {
            #[inline(always)]
            fn next_byte_or_zero(&mut self) -> u8 {
                let mut buf = [0];
                let _ = read_exact_or_rewind(self, &mut buf);
                buf[0]
            }

            #[inline(always)]
            fn fill_exact(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
                read_exact_or_rewind(self, buf)
            }

            #[inline(always)]
            fn fill_array<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
                read_exact_or_rewind(self, buf)
            }

            fn fill_array_or_keep<const N: usize>(&mut self, buf: &mut [u8; N]) {
                let mut temp = [0; N];
                if read_exact_or_rewind(self, &mut temp).is_ok() {
                    *buf = temp;
                }
            }
        }
    };
}

std_reader_impl!(std::io::Cursor<T>, T: AsRef<[u8]>);
std_reader_impl!(BufReader<T>, T: Read + Seek);
