/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Small helpers shared across texel crates

/// Multiply all dimensions together returning `None` on overflow
///
/// ```
/// use texel_core::utils::checked_size;
/// assert_eq!(checked_size(&[4, 4, 4]), Some(64));
/// assert_eq!(checked_size(&[usize::MAX, 2]), None);
/// ```
pub fn checked_size(dimensions: &[usize]) -> Option<usize> {
    dimensions
        .iter()
        .try_fold(1_usize, |acc, dim| acc.checked_mul(*dim))
}

/// Clamp an integer into the byte range
#[inline(always)]
pub const fn clamp_byte(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Integer square root, truncating
///
/// Exact for every `u32` input
pub const fn isqrt(value: u32) -> u32 {
    if value < 2 {
        return value;
    }
    // Newton iteration starting above the root, decreases monotonically
    let mut x = value / 2 + 1;
    let mut y = (x + value / x) / 2;
    while y < x {
        x = y;
        y = (x + value / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use crate::utils::{clamp_byte, isqrt};

    #[test]
    fn isqrt_truncates() {
        for v in 0..100_000_u32 {
            let root = isqrt(v);
            assert!(root * root <= v);
            assert!((root + 1) * (root + 1) > v);
        }
        assert_eq!(isqrt(u32::MAX), 65535);
    }

    #[test]
    fn clamp_byte_saturates() {
        assert_eq!(clamp_byte(-4), 0);
        assert_eq!(clamp_byte(300), 255);
        assert_eq!(clamp_byte(128), 128);
    }
}
