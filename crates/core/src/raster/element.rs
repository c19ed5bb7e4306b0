//! Raster element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::{self, Debug};

/// Storage type of a raster cell, as reported in raster descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl DataType {
    /// Size of one sample in bits
    pub fn bits(&self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 | Self::F32 => 32,
            Self::I64 | Self::U64 | Self::F64 => 64,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I8 => "int8",
            Self::I16 => "int16",
            Self::I32 => "int32",
            Self::I64 => "int64",
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::F32 => "float32",
            Self::F64 => "float64",
        };
        f.write_str(name)
    }
}

/// Trait for types that can be stored in a raster cell.
///
/// This trait bounds the types that can be used as raster values,
/// ensuring they support necessary numeric operations.
pub trait RasterElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Storage type tag for descriptors
    fn data_type() -> DataType;

    /// Default no-data value for this type
    fn default_nodata() -> Self;

    /// Check if this value represents no-data
    fn is_nodata(&self, nodata: Option<Self>) -> bool;

    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

macro_rules! impl_raster_element_int {
    ($t:ty, $dt:ident) => {
        impl RasterElement for $t {
            fn data_type() -> DataType {
                DataType::$dt
            }

            fn default_nodata() -> Self {
                <$t>::MIN
            }

            fn is_nodata(&self, nodata: Option<Self>) -> bool {
                match nodata {
                    Some(nd) => *self == nd,
                    None => false,
                }
            }
        }
    };
}

macro_rules! impl_raster_element_float {
    ($t:ty, $dt:ident) => {
        impl RasterElement for $t {
            fn data_type() -> DataType {
                DataType::$dt
            }

            fn default_nodata() -> Self {
                <$t>::NAN
            }

            fn is_nodata(&self, nodata: Option<Self>) -> bool {
                if self.is_nan() {
                    return true;
                }
                match nodata {
                    Some(nd) => (self - nd).abs() < <$t>::EPSILON * 100.0,
                    None => false,
                }
            }
        }
    };
}

impl_raster_element_int!(i8, I8);
impl_raster_element_int!(i16, I16);
impl_raster_element_int!(i32, I32);
impl_raster_element_int!(i64, I64);
impl_raster_element_int!(u8, U8);
impl_raster_element_int!(u16, U16);
impl_raster_element_int!(u32, U32);
impl_raster_element_int!(u64, U64);
impl_raster_element_float!(f32, F32);
impl_raster_element_float!(f64, F64);
