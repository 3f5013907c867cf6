//! Player skin bitmap
//!
//! A fixed-size RGBA pixel grid, painted one cell at a time in the editor
//! and persisted as a PNG at a well-known path. The game reads the same
//! file at startup to texture the player rectangle; a missing file is not
//! an error, it just means the placeholder gets drawn.

use std::fmt;
use std::path::Path;

use image::{imageops, RgbaImage};

/// Well-known skin path, shared by the game and the editor
pub const SKIN_FILE: &str = "player_skin.png";

/// Grid cells per side
pub const SKIN_SIZE: usize = 32;

/// Every cell starts out this color (the classic green skin)
pub const DEFAULT_COLOR: [u8; 4] = [0, 255, 0, 255];

/// Error type for skin file operations
#[derive(Debug)]
pub enum SkinError {
    Image(image::ImageError),
    Validation(String),
}

impl From<image::ImageError> for SkinError {
    fn from(e: image::ImageError) -> Self {
        SkinError::Image(e)
    }
}

impl fmt::Display for SkinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkinError::Image(e) => write!(f, "image error: {}", e),
            SkinError::Validation(msg) => write!(f, "validation error: {}", msg),
        }
    }
}

impl std::error::Error for SkinError {}

/// In-memory pixel grid, row-major RGBA
#[derive(Debug, Clone, PartialEq)]
pub struct SkinGrid {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 4]>,
}

impl SkinGrid {
    /// Fresh grid with every cell set to the default color
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![DEFAULT_COLOR; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read one cell; None when out of range
    pub fn cell(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Set one cell. Out-of-range coordinates are a silent no-op; stray
    /// clicks outside the canvas must never error.
    pub fn paint(&mut self, x: usize, y: usize, color: [u8; 4]) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Flat RGBA byte view, one pixel per cell
    pub fn rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Write the grid as a PNG, one pixel per cell, alpha preserved.
    /// Overwrites whatever is at the path.
    pub fn export(&self, path: &Path) -> Result<(), SkinError> {
        let img = RgbaImage::from_raw(self.width as u32, self.height as u32, self.rgba_bytes())
            .ok_or_else(|| SkinError::Validation("pixel buffer size mismatch".to_string()))?;
        img.save(path)?;
        Ok(())
    }

    /// Decode an image into a width x height grid, nearest-resampling if
    /// the stored dimensions differ.
    pub fn load(path: &Path, width: usize, height: usize) -> Result<Self, SkinError> {
        let mut img = image::open(path)?.to_rgba8();
        if img.dimensions() != (width as u32, height as u32) {
            img = imageops::resize(
                &img,
                width as u32,
                height as u32,
                imageops::FilterType::Nearest,
            );
        }

        let mut grid = SkinGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.pixels[y * width + x] = img.get_pixel(x as u32, y as u32).0;
            }
        }
        Ok(grid)
    }

    /// Startup path: stored skin if it decodes, default grid otherwise
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path, SKIN_SIZE, SKIN_SIZE) {
            Ok(grid) => {
                println!("Loaded skin from {}", path.display());
                grid
            }
            Err(e) => {
                if path.exists() {
                    eprintln!("Failed to load {}: {}, using default skin", path.display(), e);
                }
                SkinGrid::new(SKIN_SIZE, SKIN_SIZE)
            }
        }
    }
}
