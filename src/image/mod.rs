//! Grayscale raster I/O.
pub mod io;

pub use self::io::{load_grayscale_image, save_edge_map, write_json_file};
