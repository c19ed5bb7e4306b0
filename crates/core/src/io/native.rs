//! Native TIFF reading/writing
//!
//! Uses the `tiff` crate. Input samples of any integer or float format are
//! cast to the requested element type; output is always 8-bit RGB.

use crate::error::{Error, Result};
use crate::raster::{MultiBandRaster, RasterElement, RgbRaster};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::colortype::RGB8;
use tiff::encoder::TiffEncoder;

/// Read a (possibly multi-sample) TIFF file into a multi-band raster
///
/// The band count is the number of samples per pixel. Planar TIFFs are not
/// supported by the decoder.
pub fn read_multiband_tiff<T, P>(path: P) -> Result<MultiBandRaster<T>>
where
    T: RasterElement,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    decode_tiff(BufReader::new(file))
}

/// Read a TIFF from an in-memory buffer into a multi-band raster
pub fn read_multiband_tiff_from_buffer<T>(data: &[u8]) -> Result<MultiBandRaster<T>>
where
    T: RasterElement,
{
    decode_tiff(Cursor::new(data))
}

macro_rules! cast_all {
    ($buf:expr) => {
        $buf.iter()
            .map(|&v| num_traits::cast(v).unwrap_or(T::default_nodata()))
            .collect()
    };
}

/// Internal: decode a TIFF from any `Read + Seek` source
fn decode_tiff<T, R>(reader: R) -> Result<MultiBandRaster<T>>
where
    T: RasterElement,
    R: Read + Seek,
{
    let mut decoder = Decoder::new(reader)?;

    let (width, height) = decoder.dimensions()?;
    let rows = height as usize;
    let cols = width as usize;

    let data: Vec<T> = match decoder.read_image()? {
        DecodingResult::U8(buf) => cast_all!(buf),
        DecodingResult::U16(buf) => cast_all!(buf),
        DecodingResult::U32(buf) => cast_all!(buf),
        DecodingResult::U64(buf) => cast_all!(buf),
        DecodingResult::I8(buf) => cast_all!(buf),
        DecodingResult::I16(buf) => cast_all!(buf),
        DecodingResult::I32(buf) => cast_all!(buf),
        DecodingResult::I64(buf) => cast_all!(buf),
        DecodingResult::F32(buf) => cast_all!(buf),
        DecodingResult::F64(buf) => cast_all!(buf),
        #[allow(unreachable_patterns)]
        _ => return Err(Error::UnsupportedDataType("Unsupported TIFF sample format".to_string())),
    };

    let pixels = rows * cols;
    if pixels == 0 || data.len() % pixels != 0 {
        return Err(Error::InvalidDimensions {
            width: cols,
            height: rows,
            bands: if pixels == 0 { 0 } else { data.len() / pixels },
        });
    }
    let bands = data.len() / pixels;

    MultiBandRaster::from_vec(data, rows, cols, bands)
}

/// Write an RGB raster to an 8-bit RGB TIFF file
pub fn write_rgb_tiff<P: AsRef<Path>>(raster: &RgbRaster, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    encode_rgb_tiff(raster, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write an RGB raster to an in-memory 8-bit RGB TIFF buffer
pub fn write_rgb_tiff_to_buffer(raster: &RgbRaster) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode_rgb_tiff(raster, &mut Cursor::new(&mut buf))?;
    Ok(buf)
}

/// Internal: encode an RGB raster into any `Write + Seek` sink
fn encode_rgb_tiff<W: Write + Seek>(raster: &RgbRaster, writer: W) -> Result<()> {
    let (rows, cols) = raster.shape();
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidDimensions {
            width: cols,
            height: rows,
            bands: 3,
        });
    }

    let mut encoder = TiffEncoder::new(writer)?;
    encoder.write_image::<RGB8>(cols as u32, rows as u32, raster.as_bytes()?)?;
    Ok(())
}
