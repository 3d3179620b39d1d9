/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Sinks backed by memory, available with and without `std`
use crate::bytestream::{ByteIoError, ByteSink};

impl ByteSink for &mut [u8] {
    fn put_some(&mut self, buf: &[u8]) -> Result<usize, ByteIoError> {
        let amt = core::cmp::min(buf.len(), self.len());
        let (a, b) = core::mem::take(self).split_at_mut(amt);
        a.copy_from_slice(&buf[..amt]);
        *self = b;
        Ok(amt)
    }

    fn put_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        if buf.len() > self.len() {
            return Err(ByteIoError::NotEnoughBuffer(buf.len(), self.len()));
        }
        let (a, b) = core::mem::take(self).split_at_mut(buf.len());
        a.copy_from_slice(buf);
        *self = b;

        Ok(())
    }

    fn put_array<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.put_all(buf)
    }

    fn flush_sink(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }
}

impl ByteSink for &mut alloc::vec::Vec<u8> {
    fn put_some(&mut self, buf: &[u8]) -> Result<usize, ByteIoError> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn put_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn put_array<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }
    fn flush_sink(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }
}
