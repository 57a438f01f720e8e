use image::imageops::FilterType;
use image::DynamicImage;

/// Fixed-shape model input: `size * size * 3` floats in [0, 1], RGB,
/// row-major. Produced once per gated frame and consumed by one
/// inference call.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessedTensor {
    pub size: u32,
    pub pixels: Vec<f32>,
}

impl PreprocessedTensor {
    pub fn len_is_valid(&self) -> bool {
        self.pixels.len() == (self.size as usize) * (self.size as usize) * 3
    }
}

/// Center-crops the fraction of the frame inside `crop_margin` on each
/// side, scales it to `input_size` square, and normalizes to f32 RGB.
/// Deterministic for a given frame and geometry. Malformed frames
/// (zero dimensions) are skipped rather than treated as an error.
pub fn preprocess(
    frame: &DynamicImage,
    input_size: u32,
    crop_margin: f32,
) -> Option<PreprocessedTensor> {
    let width = frame.width();
    let height = frame.height();
    if width == 0 || height == 0 {
        return None;
    }

    let crop_x = (width as f32 * crop_margin) as u32;
    let crop_y = (height as f32 * crop_margin) as u32;
    let crop_width = (width as f32 * (1.0 - 2.0 * crop_margin)) as u32;
    let crop_height = (height as f32 * (1.0 - 2.0 * crop_margin)) as u32;
    if crop_width == 0 || crop_height == 0 {
        return None;
    }

    let cropped = frame.crop_imm(crop_x, crop_y, crop_width, crop_height);
    let resized = cropped.resize_exact(input_size, input_size, FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let pixels = rgb
        .pixels()
        .flat_map(|pixel| pixel.0.iter().map(|&channel| channel as f32 / 255.0))
        .collect();

    Some(PreprocessedTensor {
        size: input_size,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn solid_frame(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
            width,
            height,
            Rgb([value, value, value]),
        ))
    }

    #[test]
    fn test_preprocess_shape() {
        let frame = solid_frame(100, 80, 128);
        let tensor = preprocess(&frame, 32, 0.15).unwrap();
        assert_eq!(tensor.size, 32);
        assert_eq!(tensor.pixels.len(), 32 * 32 * 3);
        assert!(tensor.len_is_valid());
    }

    #[test]
    fn test_preprocess_normalizes_to_unit_range() {
        let frame = solid_frame(64, 64, 255);
        let tensor = preprocess(&frame, 16, 0.15).unwrap();
        assert!(tensor.pixels.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!(tensor.pixels.iter().all(|&v| (v - 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_preprocess_is_deterministic() {
        let frame = solid_frame(100, 100, 77);
        let a = preprocess(&frame, 24, 0.15).unwrap();
        let b = preprocess(&frame, 24, 0.15).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_preprocess_crops_center_region() {
        // White center covering the 70% crop, black margins. The crop
        // must only see the white region.
        let mut buffer = ImageBuffer::from_pixel(100, 100, Rgb([0u8, 0, 0]));
        for y in 15..85 {
            for x in 15..85 {
                buffer.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
        let frame = DynamicImage::ImageRgb8(buffer);
        let tensor = preprocess(&frame, 20, 0.15).unwrap();
        assert!(tensor.pixels.iter().all(|&v| v > 0.95));
    }

    #[test]
    fn test_preprocess_skips_zero_dimension_frame() {
        let frame = DynamicImage::new_rgb8(0, 0);
        assert!(preprocess(&frame, 32, 0.15).is_none());
    }
}
