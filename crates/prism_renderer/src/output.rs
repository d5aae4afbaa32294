//! Writing rendered images to disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::{ImageError, ImageResult, RgbImage};

use crate::renderer::{color_to_rgb, ImageBuffer};

impl ImageBuffer {
    /// Convert to an 8-bit `image` crate buffer.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(color_to_rgb(self.get(x, y))))
    }

    /// Save as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.to_image().save_with_format(path, image::ImageFormat::Png)
    }

    /// Save as plain-text PPM (P3).
    pub fn save_ppm(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_ppm(&mut writer)?;
        writer.flush()
    }

    /// Write the image as plain-text PPM (P3) to any writer.
    pub fn write_ppm(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for color in &self.pixels {
            let [r, g, b] = color_to_rgb(*color);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }

        Ok(())
    }

    /// Save to `path`, choosing PPM for a `.ppm` extension and PNG otherwise.
    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

        if is_ppm {
            self.save_ppm(path).map_err(ImageError::IoError)
        } else {
            self.save_png(path)
        }
    }
}
