#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, Rgba, RgbaImage};

    use crate::measurement_pipeline::common::error::MeasurementError;
    use crate::measurement_pipeline::decode::{PhotoReader, StandardPhotoReader};
    use crate::measurement_pipeline::test_utils::{BLACK, WHITE, centered_square, encode_png};

    #[test]
    fn test_decode_png_keeps_rgb_order() {
        let mut image = centered_square(16, 8, 4, WHITE, BLACK);
        image.put_pixel(0, 0, Rgb([200, 10, 30]));

        let decoded = StandardPhotoReader.read_rgb(&encode_png(&image)).unwrap();

        assert_eq!(decoded.dimensions(), (16, 8));
        assert_eq!(decoded.get_pixel(0, 0), &Rgb([200, 10, 30]));
        assert_eq!(decoded.get_pixel(8, 4), &BLACK);
    }

    #[test]
    fn test_decode_drops_alpha() {
        let rgba = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]));
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(rgba)
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();

        let decoded = StandardPhotoReader.read_rgb(buffer.get_ref()).unwrap();

        assert_eq!(decoded.get_pixel(2, 2), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_decode_expands_grayscale() {
        let gray = GrayImage::from_pixel(3, 5, Luma([77]));
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(gray)
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();

        let decoded = StandardPhotoReader.read_rgb(buffer.get_ref()).unwrap();

        assert_eq!(decoded.dimensions(), (3, 5));
        assert_eq!(decoded.get_pixel(1, 1), &Rgb([77, 77, 77]));
    }

    #[test]
    fn test_empty_buffer_is_decode_error() {
        let result = StandardPhotoReader.read_rgb(&[]);
        assert!(matches!(result.unwrap_err(), MeasurementError::DecodeError(_)));
    }

    #[test]
    fn test_truncated_png_is_decode_error() {
        let bytes = encode_png(&centered_square(64, 64, 10, WHITE, BLACK));
        let truncated = &bytes[..bytes.len() / 2];

        let result = StandardPhotoReader.read_rgb(truncated);

        assert!(matches!(result.unwrap_err(), MeasurementError::DecodeError(_)));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let result = StandardPhotoReader.read_rgb(b"definitely not an image");
        assert!(matches!(result.unwrap_err(), MeasurementError::DecodeError(_)));
    }

    #[test]
    fn test_stream_matches_buffer() {
        let bytes = encode_png(&centered_square(20, 10, 6, WHITE, BLACK));

        let from_buffer = StandardPhotoReader.read_rgb(&bytes).unwrap();
        let from_stream = StandardPhotoReader
            .read_rgb_stream(&mut Cursor::new(bytes.clone()))
            .unwrap();

        assert_eq!(from_buffer, from_stream);
    }
}
