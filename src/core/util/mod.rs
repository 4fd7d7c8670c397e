pub mod aspect_ratio;
pub mod pixel_to_complex_coords;
