#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};
    use imageproc::point::Point;

    use crate::measurement_pipeline::common::error::MeasurementError;
    use crate::measurement_pipeline::contours::{BoundingBox, Contour, ContourExtractor, Foreground};
    use crate::measurement_pipeline::preprocess::Preprocessor;
    use crate::measurement_pipeline::test_utils::{BLACK, WHITE, centered_square};

    fn fill_rect(image: &mut GrayImage, x0: u32, y0: u32, w: u32, h: u32, value: u8) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                image.put_pixel(x, y, Luma([value]));
            }
        }
    }

    fn square_chain(x0: i32, y0: i32, side: i32) -> Vec<Point<i32>> {
        let last = side - 1;
        let mut chain = Vec::new();
        for i in 0..last {
            chain.push(Point::new(x0, y0 + i));
        }
        for i in 0..last {
            chain.push(Point::new(x0 + i, y0 + last));
        }
        for i in 0..last {
            chain.push(Point::new(x0 + last, y0 + last - i));
        }
        for i in 0..last {
            chain.push(Point::new(x0 + last - i, y0));
        }
        chain
    }

    #[test]
    fn test_compression_keeps_only_corners() {
        let contour = Contour::from_chain(square_chain(2, 3, 6));
        assert_eq!(
            contour.points,
            vec![
                Point::new(2, 3),
                Point::new(2, 8),
                Point::new(7, 8),
                Point::new(7, 3),
            ]
        );
    }

    #[test]
    fn test_compression_preserves_geometry() {
        let dense = Contour::new(square_chain(0, 0, 11));
        let compressed = Contour::from_chain(square_chain(0, 0, 11));

        assert!(compressed.len() < dense.len());
        assert_eq!(dense.area(), compressed.area());
        assert_eq!(dense.arc_length(), compressed.arc_length());
        assert_eq!(dense.bounding_box(), compressed.bounding_box());
    }

    #[test]
    fn test_square_geometry() {
        let contour = Contour::from_chain(square_chain(10, 20, 5));

        assert_eq!(contour.area(), 16.0);
        assert_eq!(contour.arc_length(), 16.0);
        assert_eq!(
            contour.bounding_box(),
            BoundingBox { x: 10, y: 20, width: 5, height: 5 }
        );
    }

    #[test]
    fn test_diagonal_segments() {
        let contour = Contour::new(vec![Point::new(0, 0), Point::new(3, 4), Point::new(6, 0)]);

        assert_eq!(contour.area(), 12.0);
        assert!((contour.arc_length() - 16.0).abs() < 1e-9);
        assert_eq!(contour.bounding_box().width, 7);
        assert_eq!(contour.bounding_box().height, 5);
    }

    #[test]
    fn test_degenerate_contours() {
        let single = Contour::new(vec![Point::new(4, 4)]);
        assert_eq!(single.area(), 0.0);
        assert_eq!(single.arc_length(), 0.0);
        assert_eq!(single.bounding_box(), BoundingBox { x: 4, y: 4, width: 1, height: 1 });

        let empty = Contour::default();
        assert_eq!(empty.bounding_box(), BoundingBox::default());
        assert_eq!(empty.arc_length(), 0.0);
    }

    #[test]
    fn test_area_ignores_winding() {
        let mut chain = square_chain(0, 0, 4);
        let forward = Contour::new(chain.clone());
        chain.reverse();
        let backward = Contour::new(chain);
        assert_eq!(forward.area(), backward.area());
    }

    #[test]
    fn test_extract_light_rectangle() {
        let mut image = GrayImage::new(60, 40);
        fill_rect(&mut image, 10, 5, 20, 10, 255);

        let contours = ContourExtractor::new(Foreground::Light).extract(&image).unwrap();

        assert_eq!(contours.len(), 1);
        let contour = &contours[0];
        assert_eq!(contour.len(), 4);
        assert_eq!(contour.area(), 19.0 * 9.0);
        assert_eq!(contour.arc_length(), 2.0 * (19.0 + 9.0));
        assert_eq!(
            contour.bounding_box(),
            BoundingBox { x: 10, y: 5, width: 20, height: 10 }
        );
    }

    #[test]
    fn test_extract_dark_rectangle_on_light_backdrop() {
        let mut image = GrayImage::from_pixel(60, 40, Luma([255]));
        fill_rect(&mut image, 10, 5, 20, 10, 0);

        let contours = ContourExtractor::default().extract(&image).unwrap();

        assert_eq!(contours.len(), 1);
        assert_eq!(
            contours[0].bounding_box(),
            BoundingBox { x: 10, y: 5, width: 20, height: 10 }
        );
    }

    #[test]
    fn test_extract_keeps_only_external_outlines() {
        let mut image = GrayImage::new(80, 80);
        fill_rect(&mut image, 10, 10, 40, 40, 255);
        fill_rect(&mut image, 20, 20, 20, 20, 0);
        // Island inside the hole.
        fill_rect(&mut image, 27, 27, 6, 6, 255);

        let contours = ContourExtractor::new(Foreground::Light).extract(&image).unwrap();

        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].bounding_box().width, 40);
    }

    #[test]
    fn test_extract_separate_regions() {
        let mut image = GrayImage::new(100, 50);
        fill_rect(&mut image, 5, 5, 10, 10, 255);
        fill_rect(&mut image, 50, 20, 30, 20, 255);

        let contours = ContourExtractor::new(Foreground::Light).extract(&image).unwrap();

        assert_eq!(contours.len(), 2);
        let mut widths: Vec<u32> = contours.iter().map(|c| c.bounding_box().width).collect();
        widths.sort_unstable();
        assert_eq!(widths, vec![10, 30]);
    }

    #[test]
    fn test_all_zero_grid_has_no_contours() {
        let image = GrayImage::new(800, 600);
        let contours = ContourExtractor::default().extract(&image).unwrap();
        assert!(contours.is_empty());
    }

    #[test]
    fn test_uniform_grid_has_no_contours() {
        let image = GrayImage::from_pixel(30, 30, Luma([128]));
        for foreground in [Foreground::Dark, Foreground::Light] {
            let contours = ContourExtractor::new(foreground).extract(&image).unwrap();
            assert!(contours.is_empty());
        }
    }

    #[test]
    fn test_empty_grid_is_invalid_input() {
        let image = GrayImage::new(0, 0);
        let result = ContourExtractor::default().extract(&image);
        assert!(matches!(result.unwrap_err(), MeasurementError::InvalidInput(_)));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let mut image = GrayImage::new(64, 64);
        fill_rect(&mut image, 3, 7, 21, 13, 255);
        fill_rect(&mut image, 40, 30, 9, 25, 255);

        let extractor = ContourExtractor::new(Foreground::Light);
        assert_eq!(extractor.extract(&image).unwrap(), extractor.extract(&image).unwrap());
    }
    #[test]
    fn test_preprocessed_square_keeps_its_edges() {
        // The blur halo around the square is a thin band of mid-gray levels.
        let photo = centered_square(800, 600, 200, WHITE, BLACK);
        let preprocessed = Preprocessor::default().process(&photo);

        let contours = ContourExtractor::default()
            .extract_preprocessed(&preprocessed)
            .unwrap();

        assert_eq!(contours.len(), 1);
        assert_eq!(
            contours[0].bounding_box(),
            BoundingBox { x: 300, y: 200, width: 200, height: 200 }
        );
        let area = contours[0].area();
        assert!((39599.0..=39601.0).contains(&area), "traced area {area}");
    }

    #[test]
    fn test_preprocessed_blank_photo_has_no_contours() {
        let photo = centered_square(100, 80, 0, WHITE, BLACK);
        let preprocessed = Preprocessor::default().process(&photo);
        let contours = ContourExtractor::default()
            .extract_preprocessed(&preprocessed)
            .unwrap();
        assert!(contours.is_empty());
    }
}
