/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Color model information and manipulation utilities.

/// All color models a pixel buffer can be in
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColorModel {
    /// One index per pixel into a [`Palette`](crate::palette::Palette)
    Indexed,
    /// Grayscale colorspace
    Luma,
    /// Grayscale with alpha colorspace
    LumaA,
    /// A lone alpha channel
    Alpha,
    /// Red, Green , Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA,
    /// Blue, Green, Red
    BGR,
    /// Blue, Green, Red, Alpha
    BGRA
}

impl ColorModel {
    /// Number of channels present for a certain color model
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel,
    /// an indexed pixel is a single index.
    pub const fn num_components(&self) -> usize {
        match self {
            Self::Indexed | Self::Luma | Self::Alpha => 1,
            Self::LumaA => 2,
            Self::RGB | Self::BGR => 3,
            Self::RGBA | Self::BGRA => 4
        }
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::LumaA | Self::Alpha | Self::RGBA | Self::BGRA)
    }

    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::Luma | Self::LumaA)
    }

    /// Whether the color channels are stored blue first
    pub const fn is_bgr(&self) -> bool {
        matches!(self, Self::BGR | Self::BGRA)
    }

    /// Returns the position of the alpha channel in a pixel
    ///
    /// For an array of components say `[0,1,2,3]` in RGBA format
    /// this returns `Some(3)`, for a lone alpha channel `Some(0)`.
    ///
    /// If the model doesn't have an alpha channel returns `None`
    pub const fn alpha_position(&self) -> Option<usize> {
        match self {
            Self::Alpha => Some(0),
            Self::LumaA => Some(1),
            Self::RGBA | Self::BGRA => Some(3),
            _ => None
        }
    }

    /// The model with an alpha channel appended, or `None`
    /// if the model can't carry a trailing alpha channel
    pub const fn with_alpha(&self) -> Option<ColorModel> {
        match self {
            Self::Luma => Some(Self::LumaA),
            Self::RGB => Some(Self::RGBA),
            Self::BGR => Some(Self::BGRA),
            Self::LumaA | Self::RGBA | Self::BGRA => Some(*self),
            Self::Indexed | Self::Alpha => None
        }
    }

    /// The model with its trailing alpha channel dropped
    pub const fn without_alpha(&self) -> Option<ColorModel> {
        match self {
            Self::LumaA => Some(Self::Luma),
            Self::RGBA => Some(Self::RGB),
            Self::BGRA => Some(Self::BGR),
            Self::Luma | Self::RGB | Self::BGR => Some(*self),
            Self::Indexed | Self::Alpha => None
        }
    }

    /// The model with red and blue exchanged, one and two channel
    /// models map to themselves
    pub const fn swapped_order(&self) -> ColorModel {
        match self {
            Self::RGB => Self::BGR,
            Self::BGR => Self::RGB,
            Self::RGBA => Self::BGRA,
            Self::BGRA => Self::RGBA,
            _ => *self
        }
    }
}

/// Encapsulates all color models supported by
/// the library
pub static ALL_COLOR_MODELS: [ColorModel; 8] = [
    ColorModel::Indexed,
    ColorModel::Luma,
    ColorModel::LumaA,
    ColorModel::Alpha,
    ColorModel::RGB,
    ColorModel::RGBA,
    ColorModel::BGR,
    ColorModel::BGRA
];
