pub mod pixel_intensity;
