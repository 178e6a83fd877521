#[path = "shared/constants.rs"]
mod constants;
use constants::{COMPRESSED_MENU_FILE_NAME, MENU_CSV_FILE_PATH};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::{self, File};
use std::io::{self};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!("cargo:rerun-if-changed={}", MENU_CSV_FILE_PATH.display());

    // Generated files go to Cargo's output directory and are picked up with `include_bytes!`
    let output_path = PathBuf::from(env::var("OUT_DIR")?).join(COMPRESSED_MENU_FILE_NAME);

    // Open the input CSV file
    let mut input_file = File::open(&*MENU_CSV_FILE_PATH)?;

    // Create a buffer to hold the compressed data
    let mut compressed_data = Vec::new();

    // Compress the data with GzEncoder
    {
        let mut encoder = GzEncoder::new(&mut compressed_data, Compression::default());
        io::copy(&mut input_file, &mut encoder)?;
        encoder.finish()?;
    }

    fs::write(&output_path, compressed_data)?;

    Ok(())
}
