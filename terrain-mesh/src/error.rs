/// Error types for heightmap loading.
#[derive(Debug)]
pub enum TerrainError {
    ImageError(image::ImageError),
    TooSmall { width: u32, height: u32 },
    SizeMismatch { expected: usize, actual: usize },
}

impl From<image::ImageError> for TerrainError {
    fn from(err: image::ImageError) -> Self {
        TerrainError::ImageError(err)
    }
}

impl std::fmt::Display for TerrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerrainError::ImageError(e) => write!(f, "Heightmap image error: {}", e),
            TerrainError::TooSmall { width, height } => write!(
                f,
                "Heightmap {}x{} has no cells, both sides must be at least 2 pixels",
                width, height
            ),
            TerrainError::SizeMismatch { expected, actual } => write!(
                f,
                "Heightmap expected {} intensity values, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerrainError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}
