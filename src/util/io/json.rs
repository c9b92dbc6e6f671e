use crate::try_config;
use crate::util::error::Result;

use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use std::path::Path;

pub fn from_file<T>(file_name: &Path) -> Result<T> where for<'de> T: Deserialize<'de> {
    let file = try_config!(File::open(file_name), format!("Could not open '{}' for reading", file_name.display()));
    let buf_reader = BufReader::new(file);

    let value = try_config!(serde_json::from_reader(buf_reader), format!("Failed reading the file '{}'", file_name.display()));
    Ok(value)
}
