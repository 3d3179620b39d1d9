/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "std")]
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::bytestream::ByteIoError;

impl crate::bytestream::ByteSink for &mut BufWriter<File> {
    fn put_some(&mut self, buf: &[u8]) -> Result<usize, ByteIoError> {
        self.write(buf).map_err(ByteIoError::StdIoError)
    }

    fn put_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.write_all(buf).map_err(ByteIoError::StdIoError)
    }

    fn put_array<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.put_all(buf)
    }
    fn flush_sink(&mut self) -> Result<(), ByteIoError> {
        self.flush().map_err(ByteIoError::StdIoError)
    }
}
