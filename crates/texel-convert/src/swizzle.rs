/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use texel_core::buffer::PixelBuffer;
use texel_core::log::trace;

use crate::errors::ConvertErrors;
use crate::utils::{alloc_output, check_input, finish_like};

/// Swap the first and third element of every pixel in place
///
/// `channels` below three leaves the data untouched
pub(crate) fn swap_elements(data: &mut [u8], channels: usize, size: usize) {
    if channels < 3 {
        return;
    }
    for pixel in data.chunks_exact_mut(channels * size) {
        let (first, rest) = pixel.split_at_mut(size);
        first.swap_with_slice(&mut rest[size..2 * size]);
    }
}

/// Convert between RGB and BGR (or RGBA and BGRA) ordering
///
/// Green and alpha are untouched. One and two channel buffers
/// are returned as they are.
pub fn swap_channel_order(buf: &PixelBuffer) -> Result<PixelBuffer, ConvertErrors> {
    check_input(buf)?;

    if buf.channels() < 3 {
        trace!("{:?} has no channel order to swap", buf.model());
        return Ok(buf.clone());
    }
    let mut output = alloc_output(buf.data().len())?;
    output.copy_from_slice(buf.data());

    swap_elements(&mut output, buf.channels(), buf.element().size_of());

    finish_like(buf, output, buf.model().swapped_order(), buf.element())
}

#[cfg(test)]
mod tests {
    use crate::swizzle::swap_elements;

    #[test]
    fn swaps_whole_elements() {
        // two RGBA u16 pixels
        let mut data: Vec<u8> = (0..16).collect();
        swap_elements(&mut data, 4, 2);

        assert_eq!(
            data,
            [4, 5, 2, 3, 0, 1, 6, 7, 12, 13, 10, 11, 8, 9, 14, 15]
        );
    }

    #[test]
    fn two_channels_untouched() {
        let mut data = vec![1, 2, 3, 4];
        swap_elements(&mut data, 2, 1);
        assert_eq!(data, [1, 2, 3, 4]);
    }
}
