use crate::Error;
use flate2::read::GzDecoder;
use std::io::Read;

/// Inflates a gzip-compressed menu CSV (as produced by `build.rs`).
pub fn decompress_menu(compressed_bytes: &[u8]) -> Result<String, Error> {
    let mut decoder = GzDecoder::new(compressed_bytes);
    let mut csv = String::new();

    decoder.read_to_string(&mut csv)?;

    Ok(csv)
}
