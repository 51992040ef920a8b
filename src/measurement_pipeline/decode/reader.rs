use std::io::Read;

use image::RgbImage;

use crate::measurement_pipeline::common::error::Result;

pub trait PhotoReader {
    fn read_rgb(&self, data: &[u8]) -> Result<RgbImage>;

    /// Buffers the whole stream, then decodes it like [`PhotoReader::read_rgb`].
    fn read_rgb_stream(&self, reader: &mut dyn Read) -> Result<RgbImage> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.read_rgb(&data)
    }
}
