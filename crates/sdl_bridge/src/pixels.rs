//! Pixel formats, colorspaces, colors and palettes
//!
//! [`PixelFormat`] and [`Colorspace`] are the native 32-bit codes. Their
//! field decoders are header macros in SDL, so they are implemented here and
//! work without the library loaded. Name lookup, mask conversion and
//! RGBA mapping go through the library.

use std::ffi::c_int;
use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ops::Deref;
use std::ptr::NonNull;

use bytemuck::{Pod, Zeroable};

use crate::context::Sdl;
use crate::error::{to_c_int, Result};
use crate::sys::{self, SDL_Palette, SDL_PixelFormatDetails};

/// 8-bit RGBA color (`SDL_Color`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Floating point RGBA color (`SDL_FColor`), nominally in `0.0..=1.0`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FColor {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl FColor {
    /// Create a color
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for FColor {
    fn from(c: Color) -> Self {
        Self::new(
            f32::from(c.r) / 255.0,
            f32::from(c.g) / 255.0,
            f32::from(c.b) / 255.0,
            f32::from(c.a) / 255.0,
        )
    }
}

impl From<FColor> for Color {
    fn from(c: FColor) -> Self {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgba(channel(c.r), channel(c.g), channel(c.b), channel(c.a))
    }
}

/// `SDL_PixelType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelType {
    /// Unknown
    Unknown = 0,
    /// 1 bit palette index
    Index1 = 1,
    /// 4 bit palette index
    Index4 = 2,
    /// 8 bit palette index
    Index8 = 3,
    /// Packed into 8 bits
    Packed8 = 4,
    /// Packed into 16 bits
    Packed16 = 5,
    /// Packed into 32 bits
    Packed32 = 6,
    /// Array of u8 channels
    ArrayU8 = 7,
    /// Array of u16 channels
    ArrayU16 = 8,
    /// Array of u32 channels
    ArrayU32 = 9,
    /// Array of f16 channels
    ArrayF16 = 10,
    /// Array of f32 channels
    ArrayF32 = 11,
    /// 2 bit palette index
    Index2 = 12,
}

impl PixelType {
    /// Decode a raw type field
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Index1,
            2 => Self::Index4,
            3 => Self::Index8,
            4 => Self::Packed8,
            5 => Self::Packed16,
            6 => Self::Packed32,
            7 => Self::ArrayU8,
            8 => Self::ArrayU16,
            9 => Self::ArrayU32,
            10 => Self::ArrayF16,
            11 => Self::ArrayF32,
            12 => Self::Index2,
            _ => Self::Unknown,
        }
    }
}

/// `SDL_BitmapOrder` values
pub mod bitmap_order {
    /// No order
    pub const NONE: u32 = 0;
    /// Most significant bit first
    pub const ORDER_4321: u32 = 1;
    /// Least significant bit first
    pub const ORDER_1234: u32 = 2;
}

/// `SDL_PackedOrder` values
pub mod packed_order {
    #![allow(missing_docs)]
    pub const NONE: u32 = 0;
    pub const XRGB: u32 = 1;
    pub const RGBX: u32 = 2;
    pub const ARGB: u32 = 3;
    pub const RGBA: u32 = 4;
    pub const XBGR: u32 = 5;
    pub const BGRX: u32 = 6;
    pub const ABGR: u32 = 7;
    pub const BGRA: u32 = 8;
}

/// `SDL_ArrayOrder` values
pub mod array_order {
    #![allow(missing_docs)]
    pub const NONE: u32 = 0;
    pub const RGB: u32 = 1;
    pub const RGBA: u32 = 2;
    pub const ARGB: u32 = 3;
    pub const BGR: u32 = 4;
    pub const BGRA: u32 = 5;
    pub const ABGR: u32 = 6;
}

/// `SDL_PackedLayout` values
pub mod packed_layout {
    #![allow(missing_docs)]
    pub const NONE: u32 = 0;
    pub const L332: u32 = 1;
    pub const L4444: u32 = 2;
    pub const L1555: u32 = 3;
    pub const L5551: u32 = 4;
    pub const L565: u32 = 5;
    pub const L8888: u32 = 6;
    pub const L2101010: u32 = 7;
    pub const L1010102: u32 = 8;
}

/// Native pixel format code (`SDL_PixelFormat`)
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable)]
pub struct PixelFormat(pub u32);

impl fmt::Debug for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelFormat({:#010x})", self.0)
    }
}

#[allow(missing_docs)]
impl PixelFormat {
    pub const UNKNOWN: Self = Self(0);
    pub const INDEX1LSB: Self = Self::define(1, bitmap_order::ORDER_4321, 0, 1, 0);
    pub const INDEX1MSB: Self = Self::define(1, bitmap_order::ORDER_1234, 0, 1, 0);
    pub const INDEX2LSB: Self = Self::define(12, bitmap_order::ORDER_4321, 0, 2, 0);
    pub const INDEX2MSB: Self = Self::define(12, bitmap_order::ORDER_1234, 0, 2, 0);
    pub const INDEX4LSB: Self = Self::define(2, bitmap_order::ORDER_4321, 0, 4, 0);
    pub const INDEX4MSB: Self = Self::define(2, bitmap_order::ORDER_1234, 0, 4, 0);
    pub const INDEX8: Self = Self::define(3, 0, 0, 8, 1);
    pub const RGB332: Self = Self::define(4, packed_order::XRGB, packed_layout::L332, 8, 1);
    pub const XRGB4444: Self = Self::define(5, packed_order::XRGB, packed_layout::L4444, 12, 2);
    pub const XBGR4444: Self = Self::define(5, packed_order::XBGR, packed_layout::L4444, 12, 2);
    pub const XRGB1555: Self = Self::define(5, packed_order::XRGB, packed_layout::L1555, 15, 2);
    pub const XBGR1555: Self = Self::define(5, packed_order::XBGR, packed_layout::L1555, 15, 2);
    pub const ARGB4444: Self = Self::define(5, packed_order::ARGB, packed_layout::L4444, 16, 2);
    pub const RGBA4444: Self = Self::define(5, packed_order::RGBA, packed_layout::L4444, 16, 2);
    pub const ABGR4444: Self = Self::define(5, packed_order::ABGR, packed_layout::L4444, 16, 2);
    pub const BGRA4444: Self = Self::define(5, packed_order::BGRA, packed_layout::L4444, 16, 2);
    pub const ARGB1555: Self = Self::define(5, packed_order::ARGB, packed_layout::L1555, 16, 2);
    pub const RGBA5551: Self = Self::define(5, packed_order::RGBA, packed_layout::L5551, 16, 2);
    pub const ABGR1555: Self = Self::define(5, packed_order::ABGR, packed_layout::L1555, 16, 2);
    pub const BGRA5551: Self = Self::define(5, packed_order::BGRA, packed_layout::L5551, 16, 2);
    pub const RGB565: Self = Self::define(5, packed_order::XRGB, packed_layout::L565, 16, 2);
    pub const BGR565: Self = Self::define(5, packed_order::XBGR, packed_layout::L565, 16, 2);
    pub const RGB24: Self = Self::define(7, array_order::RGB, 0, 24, 3);
    pub const BGR24: Self = Self::define(7, array_order::BGR, 0, 24, 3);
    pub const XRGB8888: Self = Self::define(6, packed_order::XRGB, packed_layout::L8888, 24, 4);
    pub const RGBX8888: Self = Self::define(6, packed_order::RGBX, packed_layout::L8888, 24, 4);
    pub const XBGR8888: Self = Self::define(6, packed_order::XBGR, packed_layout::L8888, 24, 4);
    pub const BGRX8888: Self = Self::define(6, packed_order::BGRX, packed_layout::L8888, 24, 4);
    pub const ARGB8888: Self = Self::define(6, packed_order::ARGB, packed_layout::L8888, 32, 4);
    pub const RGBA8888: Self = Self::define(6, packed_order::RGBA, packed_layout::L8888, 32, 4);
    pub const ABGR8888: Self = Self::define(6, packed_order::ABGR, packed_layout::L8888, 32, 4);
    pub const BGRA8888: Self = Self::define(6, packed_order::BGRA, packed_layout::L8888, 32, 4);
    pub const XRGB2101010: Self = Self::define(6, packed_order::XRGB, packed_layout::L2101010, 32, 4);
    pub const XBGR2101010: Self = Self::define(6, packed_order::XBGR, packed_layout::L2101010, 32, 4);
    pub const ARGB2101010: Self = Self::define(6, packed_order::ARGB, packed_layout::L2101010, 32, 4);
    pub const ABGR2101010: Self = Self::define(6, packed_order::ABGR, packed_layout::L2101010, 32, 4);
    pub const RGB48: Self = Self::define(8, array_order::RGB, 0, 48, 6);
    pub const BGR48: Self = Self::define(8, array_order::BGR, 0, 48, 6);
    pub const RGBA64: Self = Self::define(8, array_order::RGBA, 0, 64, 8);
    pub const ARGB64: Self = Self::define(8, array_order::ARGB, 0, 64, 8);
    pub const BGRA64: Self = Self::define(8, array_order::BGRA, 0, 64, 8);
    pub const ABGR64: Self = Self::define(8, array_order::ABGR, 0, 64, 8);
    pub const RGB48_FLOAT: Self = Self::define(10, array_order::RGB, 0, 48, 6);
    pub const BGR48_FLOAT: Self = Self::define(10, array_order::BGR, 0, 48, 6);
    pub const RGBA64_FLOAT: Self = Self::define(10, array_order::RGBA, 0, 64, 8);
    pub const ARGB64_FLOAT: Self = Self::define(10, array_order::ARGB, 0, 64, 8);
    pub const BGRA64_FLOAT: Self = Self::define(10, array_order::BGRA, 0, 64, 8);
    pub const ABGR64_FLOAT: Self = Self::define(10, array_order::ABGR, 0, 64, 8);
    pub const RGB96_FLOAT: Self = Self::define(11, array_order::RGB, 0, 96, 12);
    pub const BGR96_FLOAT: Self = Self::define(11, array_order::BGR, 0, 96, 12);
    pub const RGBA128_FLOAT: Self = Self::define(11, array_order::RGBA, 0, 128, 16);
    pub const ARGB128_FLOAT: Self = Self::define(11, array_order::ARGB, 0, 128, 16);
    pub const BGRA128_FLOAT: Self = Self::define(11, array_order::BGRA, 0, 128, 16);
    pub const ABGR128_FLOAT: Self = Self::define(11, array_order::ABGR, 0, 128, 16);
    pub const YV12: Self = Self::fourcc(*b"YV12");
    pub const IYUV: Self = Self::fourcc(*b"IYUV");
    pub const YUY2: Self = Self::fourcc(*b"YUY2");
    pub const UYVY: Self = Self::fourcc(*b"UYVY");
    pub const YVYU: Self = Self::fourcc(*b"YVYU");
    pub const NV12: Self = Self::fourcc(*b"NV12");
    pub const NV21: Self = Self::fourcc(*b"NV21");
    pub const P010: Self = Self::fourcc(*b"P010");
    pub const EXTERNAL_OES: Self = Self::fourcc(*b"OES ");
    pub const MJPG: Self = Self::fourcc(*b"MJPG");
}

// Byte-order aliases: the named channel order as laid out in memory.
#[cfg(target_endian = "little")]
#[allow(missing_docs)]
impl PixelFormat {
    pub const RGBA32: Self = Self::ABGR8888;
    pub const ARGB32: Self = Self::BGRA8888;
    pub const BGRA32: Self = Self::ARGB8888;
    pub const ABGR32: Self = Self::RGBA8888;
    pub const RGBX32: Self = Self::XBGR8888;
    pub const XRGB32: Self = Self::BGRX8888;
    pub const BGRX32: Self = Self::XRGB8888;
    pub const XBGR32: Self = Self::RGBX8888;
}

#[cfg(target_endian = "big")]
#[allow(missing_docs)]
impl PixelFormat {
    pub const RGBA32: Self = Self::RGBA8888;
    pub const ARGB32: Self = Self::ARGB8888;
    pub const BGRA32: Self = Self::BGRA8888;
    pub const ABGR32: Self = Self::ABGR8888;
    pub const RGBX32: Self = Self::RGBX8888;
    pub const XRGB32: Self = Self::XRGB8888;
    pub const BGRX32: Self = Self::BGRX8888;
    pub const XBGR32: Self = Self::XBGR8888;
}

impl PixelFormat {
    /// Build a non-FourCC format code (`SDL_DEFINE_PIXELFORMAT`)
    pub const fn define(pixel_type: u32, order: u32, layout: u32, bits: u32, bytes: u32) -> Self {
        Self((1 << 28) | (pixel_type << 24) | (order << 20) | (layout << 16) | (bits << 8) | bytes)
    }

    /// Build a FourCC code (`SDL_DEFINE_PIXELFOURCC`)
    pub const fn fourcc(code: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(code))
    }

    /// Raw flag nibble; 1 for every non-FourCC format
    pub const fn flag(self) -> u32 {
        (self.0 >> 28) & 0x0F
    }

    /// Pixel type
    pub const fn pixel_type(self) -> PixelType {
        PixelType::from_raw((self.0 >> 24) & 0x0F)
    }

    /// Channel or bit order; interpret with [`bitmap_order`], [`packed_order`] or [`array_order`]
    pub const fn order(self) -> u32 {
        (self.0 >> 20) & 0x0F
    }

    /// Packed layout, see [`packed_layout`]
    pub const fn layout(self) -> u32 {
        (self.0 >> 16) & 0x0F
    }

    /// Bits per pixel; 0 for FourCC formats
    pub const fn bits_per_pixel(self) -> u32 {
        if self.is_fourcc() {
            0
        } else {
            (self.0 >> 8) & 0xFF
        }
    }

    /// Bytes per pixel; FourCC formats report their first plane
    pub const fn bytes_per_pixel(self) -> u32 {
        if self.is_fourcc() {
            if self.0 == Self::YUY2.0 || self.0 == Self::UYVY.0 || self.0 == Self::YVYU.0 || self.0 == Self::P010.0 {
                2
            } else {
                1
            }
        } else {
            self.0 & 0xFF
        }
    }

    /// FourCC (planar or vendor) format
    pub const fn is_fourcc(self) -> bool {
        self.0 != 0 && self.flag() != 1
    }

    /// Palette indexed format
    pub const fn is_indexed(self) -> bool {
        !self.is_fourcc()
            && matches!(
                self.pixel_type(),
                PixelType::Index1 | PixelType::Index2 | PixelType::Index4 | PixelType::Index8
            )
    }

    /// Channels packed into one integer
    pub const fn is_packed(self) -> bool {
        !self.is_fourcc()
            && matches!(
                self.pixel_type(),
                PixelType::Packed8 | PixelType::Packed16 | PixelType::Packed32
            )
    }

    /// One array element per channel
    pub const fn is_array(self) -> bool {
        !self.is_fourcc()
            && matches!(
                self.pixel_type(),
                PixelType::ArrayU8
                    | PixelType::ArrayU16
                    | PixelType::ArrayU32
                    | PixelType::ArrayF16
                    | PixelType::ArrayF32
            )
    }

    /// 10 bits per color channel
    pub const fn is_10bit(self) -> bool {
        !self.is_fourcc()
            && matches!(self.pixel_type(), PixelType::Packed32)
            && self.layout() == packed_layout::L2101010
    }

    /// Floating point channels
    pub const fn is_float(self) -> bool {
        !self.is_fourcc() && matches!(self.pixel_type(), PixelType::ArrayF16 | PixelType::ArrayF32)
    }

    /// Carries an alpha channel
    pub const fn is_alpha(self) -> bool {
        let order = self.order();
        (self.is_packed()
            && matches!(
                order,
                packed_order::ARGB | packed_order::RGBA | packed_order::ABGR | packed_order::BGRA
            ))
            || (self.is_array()
                && matches!(
                    order,
                    array_order::ARGB | array_order::RGBA | array_order::ABGR | array_order::BGRA
                ))
    }
}

/// `SDL_ColorType` values
pub mod color_type {
    #![allow(missing_docs)]
    pub const UNKNOWN: u32 = 0;
    pub const RGB: u32 = 1;
    pub const YCBCR: u32 = 2;
}

/// `SDL_ColorRange` values
pub mod color_range {
    #![allow(missing_docs)]
    pub const UNKNOWN: u32 = 0;
    /// Video range, e.g. 16-235 for 8-bit
    pub const LIMITED: u32 = 1;
    pub const FULL: u32 = 2;
}

/// `SDL_ColorPrimaries` values
pub mod color_primaries {
    #![allow(missing_docs)]
    pub const UNKNOWN: u32 = 0;
    pub const BT709: u32 = 1;
    pub const UNSPECIFIED: u32 = 2;
    pub const BT470M: u32 = 4;
    pub const BT470BG: u32 = 5;
    pub const BT601: u32 = 6;
    pub const SMPTE240: u32 = 7;
    pub const GENERIC_FILM: u32 = 8;
    pub const BT2020: u32 = 9;
    pub const XYZ: u32 = 10;
    pub const SMPTE431: u32 = 11;
    pub const SMPTE432: u32 = 12;
    pub const EBU3213: u32 = 22;
    pub const CUSTOM: u32 = 31;
}

/// `SDL_TransferCharacteristics` values
pub mod transfer_characteristics {
    #![allow(missing_docs)]
    pub const UNKNOWN: u32 = 0;
    pub const BT709: u32 = 1;
    pub const UNSPECIFIED: u32 = 2;
    pub const GAMMA22: u32 = 4;
    pub const GAMMA28: u32 = 5;
    pub const BT601: u32 = 6;
    pub const SMPTE240: u32 = 7;
    pub const LINEAR: u32 = 8;
    pub const LOG100: u32 = 9;
    pub const LOG100_SQRT10: u32 = 10;
    pub const IEC61966: u32 = 11;
    pub const BT1361: u32 = 12;
    pub const SRGB: u32 = 13;
    pub const BT2020_10BIT: u32 = 14;
    pub const BT2020_12BIT: u32 = 15;
    pub const PQ: u32 = 16;
    pub const SMPTE428: u32 = 17;
    pub const HLG: u32 = 18;
    pub const CUSTOM: u32 = 31;
}

/// `SDL_MatrixCoefficients` values
pub mod matrix_coefficients {
    #![allow(missing_docs)]
    pub const IDENTITY: u32 = 0;
    pub const BT709: u32 = 1;
    pub const UNSPECIFIED: u32 = 2;
    pub const FCC: u32 = 4;
    pub const BT470BG: u32 = 5;
    pub const BT601: u32 = 6;
    pub const SMPTE240: u32 = 7;
    pub const YCGCO: u32 = 8;
    pub const BT2020_NCL: u32 = 9;
    pub const BT2020_CL: u32 = 10;
    pub const SMPTE2085: u32 = 11;
    pub const CHROMA_DERIVED_NCL: u32 = 12;
    pub const CHROMA_DERIVED_CL: u32 = 13;
    pub const ICTCP: u32 = 14;
    pub const CUSTOM: u32 = 31;
}

/// `SDL_ChromaLocation` values
pub mod chroma_location {
    #![allow(missing_docs)]
    pub const NONE: u32 = 0;
    pub const LEFT: u32 = 1;
    pub const CENTER: u32 = 2;
    pub const TOPLEFT: u32 = 3;
}

/// Native colorspace code (`SDL_Colorspace`)
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Colorspace(pub u32);

impl fmt::Debug for Colorspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colorspace({:#010x})", self.0)
    }
}

#[allow(missing_docs)]
impl Colorspace {
    pub const UNKNOWN: Self = Self(0);
    pub const SRGB: Self = Self::define(
        color_type::RGB,
        color_range::FULL,
        color_primaries::BT709,
        transfer_characteristics::SRGB,
        matrix_coefficients::IDENTITY,
        chroma_location::NONE,
    );
    pub const SRGB_LINEAR: Self = Self::define(
        color_type::RGB,
        color_range::FULL,
        color_primaries::BT709,
        transfer_characteristics::LINEAR,
        matrix_coefficients::IDENTITY,
        chroma_location::NONE,
    );
    pub const HDR10: Self = Self::define(
        color_type::RGB,
        color_range::FULL,
        color_primaries::BT2020,
        transfer_characteristics::PQ,
        matrix_coefficients::IDENTITY,
        chroma_location::NONE,
    );
    pub const JPEG: Self = Self::define(
        color_type::YCBCR,
        color_range::FULL,
        color_primaries::BT709,
        transfer_characteristics::BT601,
        matrix_coefficients::BT601,
        chroma_location::NONE,
    );
    pub const BT601_LIMITED: Self = Self::define(
        color_type::YCBCR,
        color_range::LIMITED,
        color_primaries::BT601,
        transfer_characteristics::BT601,
        matrix_coefficients::BT601,
        chroma_location::LEFT,
    );
    pub const BT601_FULL: Self = Self::define(
        color_type::YCBCR,
        color_range::FULL,
        color_primaries::BT601,
        transfer_characteristics::BT601,
        matrix_coefficients::BT601,
        chroma_location::LEFT,
    );
    pub const BT709_LIMITED: Self = Self::define(
        color_type::YCBCR,
        color_range::LIMITED,
        color_primaries::BT709,
        transfer_characteristics::BT709,
        matrix_coefficients::BT709,
        chroma_location::LEFT,
    );
    pub const BT709_FULL: Self = Self::define(
        color_type::YCBCR,
        color_range::FULL,
        color_primaries::BT709,
        transfer_characteristics::BT709,
        matrix_coefficients::BT709,
        chroma_location::LEFT,
    );
    pub const BT2020_LIMITED: Self = Self::define(
        color_type::YCBCR,
        color_range::LIMITED,
        color_primaries::BT2020,
        transfer_characteristics::PQ,
        matrix_coefficients::BT2020_NCL,
        chroma_location::LEFT,
    );
    pub const BT2020_FULL: Self = Self::define(
        color_type::YCBCR,
        color_range::FULL,
        color_primaries::BT2020,
        transfer_characteristics::PQ,
        matrix_coefficients::BT2020_NCL,
        chroma_location::LEFT,
    );
    pub const RGB_DEFAULT: Self = Self::SRGB;
    pub const YUV_DEFAULT: Self = Self::JPEG;
}

impl Colorspace {
    /// Build a colorspace code (`SDL_DEFINE_COLORSPACE`)
    pub const fn define(
        color_type: u32,
        range: u32,
        primaries: u32,
        transfer: u32,
        matrix: u32,
        chroma: u32,
    ) -> Self {
        Self((color_type << 28) | (range << 24) | (chroma << 20) | (primaries << 10) | (transfer << 5) | matrix)
    }

    /// See [`color_type`]
    pub const fn color_type(self) -> u32 {
        (self.0 >> 28) & 0x0F
    }

    /// See [`color_range`]
    pub const fn range(self) -> u32 {
        (self.0 >> 24) & 0x0F
    }

    /// See [`chroma_location`]
    pub const fn chroma(self) -> u32 {
        (self.0 >> 20) & 0x0F
    }

    /// See [`color_primaries`]
    pub const fn primaries(self) -> u32 {
        (self.0 >> 10) & 0x1F
    }

    /// See [`transfer_characteristics`]
    pub const fn transfer(self) -> u32 {
        (self.0 >> 5) & 0x1F
    }

    /// See [`matrix_coefficients`]
    pub const fn matrix(self) -> u32 {
        self.0 & 0x1F
    }

    /// BT.601 family YCbCr matrix
    pub const fn is_matrix_bt601(self) -> bool {
        self.matrix() == matrix_coefficients::BT601 || self.matrix() == matrix_coefficients::BT470BG
    }

    /// BT.709 YCbCr matrix
    pub const fn is_matrix_bt709(self) -> bool {
        self.matrix() == matrix_coefficients::BT709
    }

    /// BT.2020 non-constant luminance matrix
    pub const fn is_matrix_bt2020_ncl(self) -> bool {
        self.matrix() == matrix_coefficients::BT2020_NCL
    }

    /// Anything other than full range counts as limited
    pub const fn is_limited_range(self) -> bool {
        self.range() != color_range::FULL
    }

    /// Full range
    pub const fn is_full_range(self) -> bool {
        self.range() == color_range::FULL
    }
}

/// Blend mode (`SDL_BlendMode`); custom composed modes keep their raw value
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlendMode(pub u32);

impl BlendMode {
    /// `dst = src`
    pub const NONE: Self = Self(0x0000_0000);
    /// Alpha blending
    pub const BLEND: Self = Self(0x0000_0001);
    /// Pre-multiplied alpha blending
    pub const BLEND_PREMULTIPLIED: Self = Self(0x0000_0010);
    /// Additive blending
    pub const ADD: Self = Self(0x0000_0002);
    /// Pre-multiplied additive blending
    pub const ADD_PREMULTIPLIED: Self = Self(0x0000_0020);
    /// Color modulate
    pub const MOD: Self = Self(0x0000_0004);
    /// Color multiply
    pub const MUL: Self = Self(0x0000_0008);
    /// Returned on error
    pub const INVALID: Self = Self(0x7FFF_FFFF);
}

/// Scaling filter (`SDL_ScaleMode`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ScaleMode {
    /// Nearest pixel sampling
    Nearest = 0,
    /// Linear filtering
    #[default]
    Linear = 1,
}

impl ScaleMode {
    /// Decode a native value
    pub const fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(Self::Nearest),
            1 => Some(Self::Linear),
            _ => None,
        }
    }
}

/// Mirror direction (`SDL_FlipMode`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum FlipMode {
    /// Unchanged
    #[default]
    None = 0,
    /// Mirror left to right
    Horizontal = 1,
    /// Mirror top to bottom
    Vertical = 2,
}

/// Channel masks for a packed format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelMasks {
    /// Bits per pixel
    pub bits_per_pixel: i32,
    /// Red mask
    pub red: u32,
    /// Green mask
    pub green: u32,
    /// Blue mask
    pub blue: u32,
    /// Alpha mask
    pub alpha: u32,
}

/// Decoded description of a pixel format (`SDL_PixelFormatDetails`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormatDetails {
    /// The format described
    pub format: PixelFormat,
    /// Significant bits per pixel
    pub bits_per_pixel: u8,
    /// Storage bytes per pixel
    pub bytes_per_pixel: u8,
    /// Channel masks (`bits_per_pixel` is filled in)
    pub masks: PixelMasks,
    /// Bits per channel, RGBA
    pub bits: [u8; 4],
    /// Shift per channel, RGBA
    pub shifts: [u8; 4],
}

impl From<&SDL_PixelFormatDetails> for PixelFormatDetails {
    fn from(raw: &SDL_PixelFormatDetails) -> Self {
        Self {
            format: PixelFormat(raw.format),
            bits_per_pixel: raw.bits_per_pixel,
            bytes_per_pixel: raw.bytes_per_pixel,
            masks: PixelMasks {
                bits_per_pixel: i32::from(raw.bits_per_pixel),
                red: raw.r_mask,
                green: raw.g_mask,
                blue: raw.b_mask,
                alpha: raw.a_mask,
            },
            bits: [raw.r_bits, raw.g_bits, raw.b_bits, raw.a_bits],
            shifts: [raw.r_shift, raw.g_shift, raw.b_shift, raw.a_shift],
        }
    }
}

/// Indexed color table (`SDL_Palette`)
///
/// SDL reference counts palettes; a surface keeps its own reference, so an
/// owned palette may be dropped after it was attached.
pub struct Palette {
    sdl: Sdl,
    raw: NonNull<SDL_Palette>,
}

impl Palette {
    /// Create a palette of `ncolors` entries, initialised to white
    pub fn new(sdl: &Sdl, ncolors: usize) -> Result<Self> {
        let count = to_c_int("palette size", ncolors)?;
        let raw = sdl.check_ptr(unsafe { (sdl.api().SDL_CreatePalette)(count) })?;
        Ok(Self { sdl: sdl.clone(), raw })
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        usize::try_from(unsafe { self.raw.as_ref() }.ncolors).unwrap_or(0)
    }

    /// True if the palette has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Incremented by SDL whenever the colors change
    pub fn version(&self) -> u32 {
        unsafe { self.raw.as_ref() }.version
    }

    /// Copy of the current entries
    pub fn colors(&self) -> Vec<Color> {
        let raw = unsafe { self.raw.as_ref() };
        if raw.colors.is_null() {
            return Vec::new();
        }
        unsafe { std::slice::from_raw_parts(raw.colors, self.len()) }.to_vec()
    }

    /// Overwrite entries starting at `first`
    pub fn set_colors(&self, colors: &[Color], first: usize) -> Result<()> {
        let first = to_c_int("palette offset", first)?;
        let count = to_c_int("color count", colors.len())?;
        self.sdl.check(unsafe {
            (self.sdl.api().SDL_SetPaletteColors)(self.raw.as_ptr(), colors.as_ptr(), first, count)
        })
    }

    /// Raw palette pointer
    pub fn raw(&self) -> *mut SDL_Palette {
        self.raw.as_ptr()
    }

    /// Borrow a palette owned elsewhere without taking a reference
    ///
    /// # Safety
    /// `raw` must stay valid for `'a`.
    pub(crate) unsafe fn borrowed<'a>(sdl: &Sdl, raw: NonNull<SDL_Palette>) -> PaletteView<'a> {
        PaletteView {
            palette: ManuallyDrop::new(Self { sdl: sdl.clone(), raw }),
            _owner: PhantomData,
        }
    }
}

impl Drop for Palette {
    fn drop(&mut self) {
        unsafe { (self.sdl.api().SDL_DestroyPalette)(self.raw.as_ptr()) };
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette").field("len", &self.len()).finish()
    }
}

/// A palette owned by a surface, valid while the surface is borrowed
pub struct PaletteView<'a> {
    palette: ManuallyDrop<Palette>,
    _owner: PhantomData<&'a ()>,
}

impl Deref for PaletteView<'_> {
    type Target = Palette;

    fn deref(&self) -> &Palette {
        &self.palette
    }
}

impl Drop for PaletteView<'_> {
    fn drop(&mut self) {
        // SAFETY: the view is not touched again; only the context handle is released.
        unsafe { std::ptr::drop_in_place(&mut self.palette.sdl) };
    }
}

fn palette_ptr(palette: Option<&Palette>) -> *const SDL_Palette {
    palette.map_or(std::ptr::null(), |p| p.raw.as_ptr().cast_const())
}

impl Sdl {
    /// Human readable name of a format, e.g. `SDL_PIXELFORMAT_RGBA8888`
    pub fn pixel_format_name(&self, format: PixelFormat) -> String {
        unsafe { sys::string_from_ptr((self.api().SDL_GetPixelFormatName)(format.0)) }
    }

    /// Channel masks of a format
    pub fn masks_for_pixel_format(&self, format: PixelFormat) -> Result<PixelMasks> {
        let mut masks = PixelMasks::default();
        self.check(unsafe {
            (self.api().SDL_GetMasksForPixelFormat)(
                format.0,
                &mut masks.bits_per_pixel,
                &mut masks.red,
                &mut masks.green,
                &mut masks.blue,
                &mut masks.alpha,
            )
        })?;
        Ok(masks)
    }

    /// Format matching a set of masks, [`PixelFormat::UNKNOWN`] if none does
    pub fn pixel_format_for_masks(&self, masks: &PixelMasks) -> PixelFormat {
        PixelFormat(unsafe {
            (self.api().SDL_GetPixelFormatForMasks)(
                masks.bits_per_pixel,
                masks.red,
                masks.green,
                masks.blue,
                masks.alpha,
            )
        })
    }

    pub(crate) fn raw_format_details(&self, format: PixelFormat) -> Result<NonNull<SDL_PixelFormatDetails>> {
        self.check_const_ptr(unsafe { (self.api().SDL_GetPixelFormatDetails)(format.0) })
    }

    /// Decoded details of a format
    pub fn pixel_format_details(&self, format: PixelFormat) -> Result<PixelFormatDetails> {
        let raw = self.raw_format_details(format)?;
        // SAFETY: SDL caches details for the life of the process.
        Ok(PixelFormatDetails::from(unsafe { raw.as_ref() }))
    }

    /// Opaque color to a pixel value in `format`
    pub fn map_rgb(&self, format: PixelFormat, palette: Option<&Palette>, r: u8, g: u8, b: u8) -> Result<u32> {
        let details = self.raw_format_details(format)?;
        Ok(unsafe { (self.api().SDL_MapRGB)(details.as_ptr(), palette_ptr(palette), r, g, b) })
    }

    /// Color to a pixel value in `format`
    pub fn map_rgba(&self, format: PixelFormat, palette: Option<&Palette>, color: Color) -> Result<u32> {
        let details = self.raw_format_details(format)?;
        Ok(unsafe {
            (self.api().SDL_MapRGBA)(details.as_ptr(), palette_ptr(palette), color.r, color.g, color.b, color.a)
        })
    }

    /// Pixel value to a color; alpha is 255 for formats without alpha
    pub fn get_rgba(&self, pixel: u32, format: PixelFormat, palette: Option<&Palette>) -> Result<Color> {
        let details = self.raw_format_details(format)?;
        let mut color = Color::default();
        unsafe {
            (self.api().SDL_GetRGBA)(
                pixel,
                details.as_ptr(),
                palette_ptr(palette),
                &mut color.r,
                &mut color.g,
                &mut color.b,
                &mut color.a,
            );
        }
        Ok(color)
    }

    /// Pixel value to RGB components
    pub fn get_rgb(&self, pixel: u32, format: PixelFormat, palette: Option<&Palette>) -> Result<(u8, u8, u8)> {
        let color = self.get_rgba(pixel, format, palette)?;
        Ok((color.r, color.g, color.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_format_codes_match_headers() {
        assert_eq!(PixelFormat::INDEX1LSB.0, 0x1110_0100);
        assert_eq!(PixelFormat::INDEX2MSB.0, 0x1c20_0200);
        assert_eq!(PixelFormat::INDEX8.0, 0x1300_0801);
        assert_eq!(PixelFormat::RGB332.0, 0x1411_0801);
        assert_eq!(PixelFormat::XRGB4444.0, 0x1512_0c02);
        assert_eq!(PixelFormat::RGB565.0, 0x1515_1002);
        assert_eq!(PixelFormat::RGB24.0, 0x1710_1803);
        assert_eq!(PixelFormat::XRGB8888.0, 0x1616_1804);
        assert_eq!(PixelFormat::ARGB8888.0, 0x1636_2004);
        assert_eq!(PixelFormat::ABGR2101010.0, 0x1677_2004);
        assert_eq!(PixelFormat::RGBA64.0, 0x1820_4008);
        assert_eq!(PixelFormat::RGB48_FLOAT.0, 0x1a10_3006);
        assert_eq!(PixelFormat::RGBA128_FLOAT.0, 0x1b20_8010);
        assert_eq!(PixelFormat::YV12.0, 0x3231_5659);
        assert_eq!(PixelFormat::NV12.0, 0x3231_564e);
        assert_eq!(PixelFormat::EXTERNAL_OES.0, 0x2053_454f);
        assert_eq!(PixelFormat::MJPG.0, 0x4750_4a4d);
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn test_byte_order_aliases() {
        assert_eq!(PixelFormat::RGBA32, PixelFormat::ABGR8888);
        assert_eq!(PixelFormat::XRGB32, PixelFormat::BGRX8888);
    }

    #[test]
    fn test_field_decoders() {
        let format = PixelFormat::ARGB8888;
        assert_eq!(format.flag(), 1);
        assert_eq!(format.pixel_type(), PixelType::Packed32);
        assert_eq!(format.order(), packed_order::ARGB);
        assert_eq!(format.layout(), packed_layout::L8888);
        assert_eq!(format.bits_per_pixel(), 32);
        assert_eq!(format.bytes_per_pixel(), 4);

        assert_eq!(PixelFormat::XRGB1555.bits_per_pixel(), 15);
        assert_eq!(PixelFormat::RGB96_FLOAT.bytes_per_pixel(), 12);
    }

    #[test]
    fn test_fourcc_sizes() {
        assert!(PixelFormat::YUY2.is_fourcc());
        assert_eq!(PixelFormat::YUY2.bits_per_pixel(), 0);
        assert_eq!(PixelFormat::YUY2.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::P010.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::NV12.bytes_per_pixel(), 1);
        assert!(!PixelFormat::UNKNOWN.is_fourcc());
        assert!(!PixelFormat::RGB24.is_fourcc());
    }

    #[test]
    fn test_format_predicates() {
        assert!(PixelFormat::INDEX4MSB.is_indexed());
        assert!(PixelFormat::INDEX2LSB.is_indexed());
        assert!(!PixelFormat::INDEX8.is_packed());

        assert!(PixelFormat::RGB565.is_packed());
        assert!(!PixelFormat::RGB565.is_alpha());
        assert!(PixelFormat::RGBA5551.is_alpha());

        assert!(PixelFormat::BGR24.is_array());
        assert!(!PixelFormat::BGR24.is_alpha());
        assert!(PixelFormat::ABGR64.is_alpha());
        assert!(PixelFormat::BGRA128_FLOAT.is_alpha());

        assert!(PixelFormat::XRGB2101010.is_10bit());
        assert!(!PixelFormat::XRGB8888.is_10bit());

        assert!(PixelFormat::RGBA64_FLOAT.is_float());
        assert!(!PixelFormat::RGBA64.is_float());

        assert!(!PixelFormat::NV21.is_packed());
        assert!(!PixelFormat::NV21.is_alpha());
    }

    #[test]
    fn test_colorspace_codes_match_headers() {
        assert_eq!(Colorspace::SRGB.0, 0x1200_05a0);
        assert_eq!(Colorspace::SRGB_LINEAR.0, 0x1200_0500);
        assert_eq!(Colorspace::HDR10.0, 0x1200_2600);
        assert_eq!(Colorspace::JPEG.0, 0x2200_04c6);
        assert_eq!(Colorspace::BT601_LIMITED.0, 0x2110_18c6);
        assert_eq!(Colorspace::BT601_FULL.0, 0x2210_18c6);
        assert_eq!(Colorspace::BT709_LIMITED.0, 0x2110_0421);
        assert_eq!(Colorspace::BT709_FULL.0, 0x2210_0421);
        assert_eq!(Colorspace::BT2020_LIMITED.0, 0x2110_2609);
        assert_eq!(Colorspace::BT2020_FULL.0, 0x2210_2609);
    }

    #[test]
    fn test_colorspace_decoders() {
        let cs = Colorspace::BT601_LIMITED;
        assert_eq!(cs.color_type(), color_type::YCBCR);
        assert_eq!(cs.range(), color_range::LIMITED);
        assert_eq!(cs.chroma(), chroma_location::LEFT);
        assert_eq!(cs.primaries(), color_primaries::BT601);
        assert_eq!(cs.transfer(), transfer_characteristics::BT601);
        assert_eq!(cs.matrix(), matrix_coefficients::BT601);
        assert!(cs.is_matrix_bt601());
        assert!(cs.is_limited_range());

        assert!(Colorspace::BT709_FULL.is_matrix_bt709());
        assert!(Colorspace::BT2020_FULL.is_matrix_bt2020_ncl());
        assert!(Colorspace::SRGB.is_full_range());
        assert_eq!(Colorspace::HDR10.transfer(), transfer_characteristics::PQ);
    }

    #[test]
    fn test_color_conversions() {
        let f: FColor = Color::rgba(255, 0, 51, 128).into();
        assert_relative_eq!(f.r, 1.0);
        assert_relative_eq!(f.g, 0.0);
        assert_relative_eq!(f.b, 0.2);
        assert_relative_eq!(f.a, 128.0 / 255.0);

        let back: Color = f.into();
        assert_eq!(back, Color::rgba(255, 0, 51, 128));

        let clamped: Color = FColor::new(1.5, -0.5, 0.5, 1.0).into();
        assert_eq!(clamped, Color::rgba(255, 0, 128, 255));
    }

    #[test]
    fn test_mode_values() {
        assert_eq!(BlendMode::BLEND_PREMULTIPLIED.0, 0x10);
        assert_eq!(BlendMode::MUL.0, 8);
        assert_eq!(ScaleMode::from_raw(1), Some(ScaleMode::Linear));
        assert_eq!(ScaleMode::from_raw(-1), None);
        assert_eq!(FlipMode::Vertical as i32, 2);
    }

    #[test]
    fn test_details_conversion() {
        let raw = SDL_PixelFormatDetails {
            format: PixelFormat::ARGB8888.0,
            bits_per_pixel: 32,
            bytes_per_pixel: 4,
            a_mask: 0xFF00_0000,
            r_mask: 0x00FF_0000,
            g_mask: 0x0000_FF00,
            b_mask: 0x0000_00FF,
            r_bits: 8,
            g_bits: 8,
            b_bits: 8,
            a_bits: 8,
            r_shift: 16,
            g_shift: 8,
            b_shift: 0,
            a_shift: 24,
            ..Default::default()
        };
        let details = PixelFormatDetails::from(&raw);
        assert_eq!(details.format, PixelFormat::ARGB8888);
        assert_eq!(details.masks.alpha, 0xFF00_0000);
        assert_eq!(details.shifts, [16, 8, 0, 24]);
    }
}
