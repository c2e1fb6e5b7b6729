use crate::cli_app::Args;
use crate::imagery::{Stroke, RGB};
use crate::serde::Serialize;
use std::path::Path;

/// Everything that went into one generated image, written as a JSON
/// sidecar when `--save-data` is passed.
#[derive(Debug, Serialize)]
pub struct Data {
    pub args: Args,
    pub seed: u64,
    pub start_color: RGB,
    pub end_color: RGB,
    pub render_size: u32,
    pub strokes: Vec<Stroke>,
    pub elapsed_seconds: f64,
}

pub fn save(data: &Data, image_path: &Path) {
    let data_path = image_path.with_extension("json");
    std::fs::write(data_path, serde_json::to_string(data).unwrap()).expect("Unable to write file");
}
