use crate::utils::error::{IconError, Result};
use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};
use std::io::Write;

pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// 1x1 完全透明的 RGBA PNG，編碼失敗時的備用圖示
pub const MINIMAL_PNG: [u8; 68] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, // signature
    0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, //
    0x1f, 0x15, 0xc4, 0x89, //
    0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x78, 0x9c, 0x63, 0x60, 0x00, 0x02, 0x00, 0x00, 0x05, 0x00, 0x01, //
    0x7a, 0x5e, 0xab, 0x3f, //
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, // IEND
    0xae, 0x42, 0x60, 0x82,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
}

pub fn chunk_crc(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(chunk_type);
    crc.update(data);
    crc.sum()
}

/// length | type | data | CRC-32(type + data)，皆為 big-endian
pub fn write_chunk(buf: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) -> Result<()> {
    let len = u32::try_from(data.len())
        .map_err(|_| IconError::encoding("chunk data exceeds 4 GiB"))?;
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(chunk_type);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&chunk_crc(chunk_type, data).to_be_bytes());
    Ok(())
}

/// Encodes an RGBA8 buffer as a non-interlaced PNG with unfiltered scanlines.
pub fn encode_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(IconError::encoding(format!(
            "image dimensions must be non-zero, got {}x{}",
            width, height
        )));
    }

    let row_len = width as usize * 4;
    let expected = row_len * height as usize;
    if rgba.len() != expected {
        return Err(IconError::encoding(format!(
            "pixel buffer has {} bytes, expected {} for {}x{}",
            rgba.len(),
            expected,
            width,
            height
        )));
    }

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGBA, 0, 0, 0]);

    let mut scanlines = Vec::with_capacity(expected + height as usize);
    for row in rgba.chunks_exact(row_len) {
        scanlines.push(FILTER_NONE);
        scanlines.extend_from_slice(row);
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&scanlines)?;
    let idat = encoder.finish()?;

    let mut buf = Vec::with_capacity(PNG_SIGNATURE.len() + idat.len() + 57);
    buf.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut buf, b"IHDR", &ihdr)?;
    write_chunk(&mut buf, b"IDAT", &idat)?;
    write_chunk(&mut buf, b"IEND", &[])?;

    tracing::debug!(
        "Encoded {}x{} PNG: {} raw bytes -> {} bytes",
        width,
        height,
        scanlines.len(),
        buf.len()
    );

    Ok(buf)
}

/// Checks the signature and the leading IHDR chunk (including its CRC).
pub fn read_header(bytes: &[u8]) -> Result<PngHeader> {
    if bytes.len() < 33 {
        return Err(IconError::invalid_png(format!(
            "file too short: {} bytes",
            bytes.len()
        )));
    }
    if bytes[..8] != PNG_SIGNATURE {
        return Err(IconError::invalid_png("missing PNG signature"));
    }

    let len = u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
    if len != 13 || &bytes[12..16] != b"IHDR" {
        return Err(IconError::invalid_png("first chunk is not a 13-byte IHDR"));
    }

    let data = &bytes[16..29];
    let stored_crc = u32::from_be_bytes([bytes[29], bytes[30], bytes[31], bytes[32]]);
    if stored_crc != chunk_crc(b"IHDR", data) {
        return Err(IconError::invalid_png("IHDR CRC mismatch"));
    }

    let header = PngHeader {
        width: u32::from_be_bytes([data[0], data[1], data[2], data[3]]),
        height: u32::from_be_bytes([data[4], data[5], data[6], data[7]]),
        bit_depth: data[8],
        color_type: data[9],
    };
    if header.width == 0 || header.height == 0 {
        return Err(IconError::invalid_png("zero image dimension"));
    }

    Ok(header)
}
