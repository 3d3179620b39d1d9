/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel element types, information and manipulations

/// The storage type of a single channel value
///
/// All multi-byte elements are stored in native endian
/// inside a [`PixelBuffer`](crate::buffer::PixelBuffer)
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum ElementType {
    /// Unsigned byte, range 0..=255
    #[default]
    U8,
    /// Signed byte, range -128..=127
    I8,
    /// Unsigned short, range 0..=65535
    U16,
    /// Signed short
    I16,
    /// Unsigned int, range 0..=2^32-1
    U32,
    /// Signed int
    I32,
    /// IEEE single precision float, nominal range 0.0..=1.0
    F32,
    /// IEEE double precision float, nominal range 0.0..=1.0
    F64
}

/// All element types supported by the library
pub static ALL_ELEMENT_TYPES: [ElementType; 8] = [
    ElementType::U8,
    ElementType::I8,
    ElementType::U16,
    ElementType::I16,
    ElementType::U32,
    ElementType::I32,
    ElementType::F32,
    ElementType::F64
];

impl ElementType {
    /// Get the number of bytes needed to store a single element
    ///
    /// ```
    /// use texel_core::element::ElementType;
    /// assert_eq!(ElementType::U16.size_of(),2);
    /// assert_eq!(ElementType::F64.size_of(),8);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::F64 => 8
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32)
    }

    /// Get the maximum value representable by the element type
    ///
    /// This is the value a fully opaque alpha channel carries, and the value
    /// that maps to `1.0` when converting to floating point.
    ///
    /// Floats use `1.0`
    pub const fn max_value(self) -> f64 {
        match self {
            Self::U8 => u8::MAX as f64,
            Self::I8 => i8::MAX as f64,
            Self::U16 => u16::MAX as f64,
            Self::I16 => i16::MAX as f64,
            Self::U32 => u32::MAX as f64,
            Self::I32 => i32::MAX as f64,
            Self::F32 | Self::F64 => 1.0
        }
    }

    /// Get the minimum value representable by the element type
    ///
    /// Floats use `0.0`, values below it are allowed but
    /// clamped when converting to integer types
    pub const fn min_value(self) -> f64 {
        match self {
            Self::U8 | Self::U16 | Self::U32 | Self::F32 | Self::F64 => 0.0,
            Self::I8 => i8::MIN as f64,
            Self::I16 => i16::MIN as f64,
            Self::I32 => i32::MIN as f64
        }
    }
}
