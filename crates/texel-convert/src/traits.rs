/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use bytemuck::Pod;

/// A native type pixel elements are stored as
pub trait Sample: Pod {
    fn to_f64(self) -> f64;
    /// Convert from `f64`, integers are rounded and saturate at
    /// their range, floats are cast
    fn from_f64(value: f64) -> Self;
}

macro_rules! sample_for_int {
    ($int:tt) => {
        impl Sample for $int {
            #[inline(always)]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            #[inline(always)]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> $int {
                // saturating cast, NaN becomes zero
                value.round().clamp(f64::from($int::MIN), f64::from($int::MAX)) as $int
            }
        }
    };
}

sample_for_int!(u8);
sample_for_int!(i8);
sample_for_int!(u16);
sample_for_int!(i16);
sample_for_int!(u32);
sample_for_int!(i32);

impl Sample for f32 {
    #[inline(always)]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> f32 {
        value as f32
    }
}

impl Sample for f64 {
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline(always)]
    fn from_f64(value: f64) -> f64 {
        value
    }
}
