/// Grayscale heightmap decoding and height lookup
use std::path::Path;

use constants::terrain::MIN_HEIGHTMAP_SIDE;
use image::DynamicImage;

use crate::error::TerrainError;

/// One grid point of the heightmap in mesh-local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightSample {
    pub x: u32,
    pub z: u32,
    pub height: f32,
}

/// Row-major grid of heights, `width` columns (x) by `depth` rows (z).
#[derive(Debug, Clone)]
pub struct Heightmap {
    width: u32,
    depth: u32,
    heights: Vec<f32>,
}

impl Heightmap {
    /// Decode an image file and scale its intensities by `multiplier`.
    pub fn open(path: impl AsRef<Path>, multiplier: f32) -> Result<Self, TerrainError> {
        let image = image::open(path)?;
        Self::from_image(&image, multiplier)
    }

    /// Use the red channel of every pixel as its intensity.
    /// For grayscale sources this is the gray level.
    pub fn from_image(image: &DynamicImage, multiplier: f32) -> Result<Self, TerrainError> {
        let rgb = image.to_rgb8();
        let intensities: Vec<u8> = rgb.pixels().map(|pixel| pixel.0[0]).collect();
        Self::from_intensities(rgb.width(), rgb.height(), &intensities, multiplier)
    }

    /// Build from raw row-major intensities.
    pub fn from_intensities(
        width: u32,
        depth: u32,
        intensities: &[u8],
        multiplier: f32,
    ) -> Result<Self, TerrainError> {
        if width < MIN_HEIGHTMAP_SIDE || depth < MIN_HEIGHTMAP_SIDE {
            return Err(TerrainError::TooSmall {
                width,
                height: depth,
            });
        }

        let expected = width as usize * depth as usize;
        if intensities.len() != expected {
            return Err(TerrainError::SizeMismatch {
                expected,
                actual: intensities.len(),
            });
        }

        let heights = intensities
            .iter()
            .map(|&intensity| intensity as f32 * multiplier)
            .collect();

        Ok(Self {
            width,
            depth,
            heights,
        })
    }

    /// Number of columns (x axis).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows (z axis).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Height at column `x`, row `z`. Panics outside the grid.
    pub fn height(&self, x: u32, z: u32) -> f32 {
        assert!(
            x < self.width && z < self.depth,
            "height sample ({}, {}) outside {}x{} heightmap",
            x,
            z,
            self.width,
            self.depth
        );
        self.heights[(z * self.width + x) as usize]
    }

    /// Every grid point in row order, z outer.
    pub fn samples(&self) -> impl Iterator<Item = HeightSample> + '_ {
        (0..self.depth).flat_map(move |z| {
            (0..self.width).map(move |x| HeightSample {
                x,
                z,
                height: self.height(x, z),
            })
        })
    }

    /// Highest scaled sample; 0 for an all-black map.
    pub fn max_height(&self) -> f32 {
        self.samples()
            .map(|sample| sample.height)
            .fold(0.0, f32::max)
    }
}
