/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use crate::bytestream::{ByteIoError, ByteSource};

/// An in memory source of bytes
///
/// This is the reader to use when the whole compressed payload
/// (a "lump") is already in memory.
pub struct ByteCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(buffer: T) -> ByteCursor<T> {
        ByteCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Number of bytes not yet consumed
    #[inline]
    pub fn bytes_left(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }
    /// Return the bytes not yet consumed without
    /// advancing the cursor
    #[inline]
    pub fn remaining(&self) -> &[u8] {
        let data = self.stream.as_ref();
        &data[self.position.min(data.len())..]
    }
}

impl<T: AsRef<[u8]>> ByteSource for ByteCursor<T> {
    #[inline(always)]
    fn next_byte_or_zero(&mut self) -> u8 {
        match self.stream.as_ref().get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    #[inline(always)]
    fn fill_exact(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let remaining = self.remaining();

        match remaining.get(..buf.len()) {
            Some(bytes) => {
                buf.copy_from_slice(bytes);
                self.position += buf.len();
                Ok(())
            }
            None => Err(ByteIoError::NotEnoughBytes(buf.len(), remaining.len()))
        }
    }

    #[inline(always)]
    fn fill_array<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        self.fill_exact(buf)
    }

    #[inline(always)]
    fn fill_array_or_keep<const N: usize>(&mut self, buf: &mut [u8; N]) {
        if let Some(bytes) = self.remaining().get(..N) {
            buf.copy_from_slice(bytes);
            self.position += N;
        }
    }
}
