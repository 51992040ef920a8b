//! Synthetic photo builders shared by the unit tests.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Solid `background` canvas with a centered `side`×`side` square of `fill`.
pub fn centered_square(width: u32, height: u32, side: u32, background: Rgb<u8>, fill: Rgb<u8>) -> RgbImage {
    let x0 = (width - side) / 2;
    let y0 = (height - side) / 2;
    RgbImage::from_fn(width, height, |x, y| {
        if x >= x0 && x < x0 + side && y >= y0 && y < y0 + side {
            fill
        } else {
            background
        }
    })
}

pub fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut buffer, format)
        .expect("encoding a synthetic photo");
    buffer.into_inner()
}

pub fn encode_png(image: &RgbImage) -> Vec<u8> {
    encode(image, ImageFormat::Png)
}
