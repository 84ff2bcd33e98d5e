//! Raster images and encoders for rendered pixel sets
use crate::{Grid, PixelSet, Point, RGBA};
use std::io::Write;

/// Dimensions and memory layout of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Width of the image
    pub width: usize,
    /// Height of the image
    pub height: usize,
    /// How many elements we need to skip to get to the next row.
    pub row_stride: usize,
    /// How many elements we need to skip to get to the next column.
    pub col_stride: usize,
}

impl Layout {
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        row * self.row_stride + col * self.col_stride
    }

    #[inline]
    pub fn nth(&self, n: usize) -> Option<(usize, usize)> {
        if self.width == 0 {
            return None;
        }
        let row = n / self.width;
        let col = n - row * self.width;
        (row < self.height).then_some((row, col))
    }
}

pub trait Image {
    type Pixel;

    fn data(&self) -> &[Self::Pixel];

    fn layout(&self) -> Layout;

    fn width(&self) -> usize {
        self.layout().width
    }

    fn height(&self) -> usize {
        self.layout().height
    }

    fn get(&self, row: usize, col: usize) -> Option<&Self::Pixel> {
        let layout = self.layout();
        if row >= layout.height || col >= layout.width {
            return None;
        }
        self.data().get(layout.offset(row, col))
    }

    /// Iterate over pixels in row-major order
    fn iter(&self) -> ImageIter<'_, Self::Pixel> {
        ImageIter {
            index: 0,
            layout: self.layout(),
            data: self.data(),
        }
    }
}

pub struct ImageIter<'a, P> {
    index: usize,
    layout: Layout,
    data: &'a [P],
}

impl<'a, P> Iterator for ImageIter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        self.nth(0)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.index += n + 1;
        let (row, col) = self.layout.nth(self.index - 1)?;
        self.data.get(self.layout.offset(row, col))
    }
}

pub trait ImageMut: Image {
    fn data_mut(&mut self) -> &mut [Self::Pixel];

    fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Self::Pixel> {
        let layout = self.layout();
        if row >= layout.height || col >= layout.width {
            return None;
        }
        self.data_mut().get_mut(layout.offset(row, col))
    }

    /// Set every pixel of the rectangle, parts outside of the image are ignored
    fn fill_rect(&mut self, row: usize, col: usize, height: usize, width: usize, value: Self::Pixel)
    where
        Self::Pixel: Copy,
    {
        let layout = self.layout();
        let data = self.data_mut();
        for r in row..(row + height).min(layout.height) {
            for c in col..(col + width).min(layout.width) {
                data[layout.offset(r, c)] = value;
            }
        }
    }

    fn clear(&mut self)
    where
        Self::Pixel: Default,
    {
        let layout = self.layout();
        let data = self.data_mut();
        for row in 0..layout.height {
            for col in 0..layout.width {
                data[layout.offset(row, col)] = Default::default();
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageOwned<P> {
    layout: Layout,
    data: Vec<P>,
}

impl<P> ImageOwned<P> {
    pub fn new_default(height: usize, width: usize) -> Self
    where
        P: Default,
    {
        Self::new_with(height, width, |_, _| Default::default())
    }

    pub fn new_with<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> P,
    {
        let mut data = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col))
            }
        }
        Self {
            layout: Layout {
                width,
                height,
                row_stride: width,
                col_stride: 1,
            },
            data,
        }
    }

    pub fn to_vec(self) -> Vec<P> {
        self.data
    }
}

impl<P> Image for ImageOwned<P> {
    type Pixel = P;

    fn layout(&self) -> Layout {
        self.layout
    }

    fn data(&self) -> &[Self::Pixel] {
        &self.data
    }
}

impl<P> ImageMut for ImageOwned<P> {
    fn data_mut(&mut self) -> &mut [Self::Pixel] {
        &mut self.data
    }
}

impl ImageOwned<RGBA> {
    /// Write image in the uncompressed 32-bit BMP format
    pub fn write_bmp(&self, mut out: impl Write) -> std::io::Result<()> {
        const HEADER_SIZE: u32 = 14 + 40;
        let width = self.width() as u32;
        let height = self.height() as u32;
        let data_size = width * height * 4;

        // file header
        out.write_all(b"BM")?;
        out.write_all(&(HEADER_SIZE + data_size).to_le_bytes())?;
        out.write_all(&0u32.to_le_bytes())?;
        out.write_all(&HEADER_SIZE.to_le_bytes())?;

        // info header, negative height means rows are stored top to bottom
        out.write_all(&40u32.to_le_bytes())?;
        out.write_all(&(width as i32).to_le_bytes())?;
        out.write_all(&(-(height as i32)).to_le_bytes())?;
        out.write_all(&1u16.to_le_bytes())?;
        out.write_all(&32u16.to_le_bytes())?;
        out.write_all(&0u32.to_le_bytes())?;
        out.write_all(&data_size.to_le_bytes())?;
        out.write_all(&2835u32.to_le_bytes())?;
        out.write_all(&2835u32.to_le_bytes())?;
        out.write_all(&0u32.to_le_bytes())?;
        out.write_all(&0u32.to_le_bytes())?;

        let mut row = Vec::with_capacity(self.width() * 4);
        for y in 0..self.height() {
            row.clear();
            for x in 0..self.width() {
                let [r, g, b, a] = self.get(y, x).copied().unwrap_or_default().to_rgba();
                row.extend_from_slice(&[b, g, r, a]);
            }
            out.write_all(&row)?;
        }
        out.flush()
    }

    /// Write image in the PNG format
    #[cfg(feature = "png")]
    pub fn write_png(&self, out: impl Write) -> std::io::Result<()> {
        let mut encoder = png::Encoder::new(out, self.width() as u32, self.height() as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(bytemuck::cast_slice(self.data()))?;
        writer.finish()?;
        Ok(())
    }
}

/// How a pixel set is converted into an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImageStyle {
    /// Size of a grid cell in image pixels
    pub cell_size: usize,
    /// Color of the filled cells
    pub foreground: RGBA,
    /// Color of the empty cells
    pub background: RGBA,
    /// Color of the one pixel wide lines separating cells
    pub grid_lines: Option<RGBA>,
}

impl Default for ImageStyle {
    fn default() -> Self {
        Self {
            cell_size: 16,
            foreground: RGBA::BLACK,
            background: RGBA::WHITE,
            grid_lines: Some(RGBA::new(208, 208, 208, 255)),
        }
    }
}

impl PixelSet {
    /// Render cells inside of the grid into an image, row `y = 0` is at the top
    pub fn to_image(&self, grid: Grid, style: &ImageStyle) -> ImageOwned<RGBA> {
        let cells = grid.size().max(0) as usize;
        let cell = style.cell_size.max(1);
        let size = cells * cell;
        let mut image = ImageOwned::new_with(size, size, |_, _| style.background);
        for point in self.iter().filter(|p| grid.contains(*p)) {
            let Point { x, y } = point;
            image.fill_rect(y as usize * cell, x as usize * cell, cell, cell, style.foreground);
        }
        if let Some(color) = style.grid_lines {
            if cell > 2 {
                for index in 0..cells {
                    let offset = index * cell;
                    image.fill_rect(offset, 0, 1, size, color);
                    image.fill_rect(0, offset, size, 1, color);
                }
            }
        }
        image
    }
}
