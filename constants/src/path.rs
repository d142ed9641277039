/// Asset directory, relative to the root Bevy resolves assets from.
pub const ASSET_DIR: &str = "assets";

/// Heightmap image, decoded directly from disk before the app starts.
pub const HEIGHTMAP_FILE: &str = "heightmap.png";

/// Terrain colour texture, loaded through the asset server.
pub const TEXTURE_ASSET_PATH: &str = "texture.png";
