//! Shop catalog loaders.

use std::path::Path;

use phrase_core::{Catalog, CatalogEntry, GameConfig};
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogLayout, generate_catalog};
use crate::loaders::{LoadResult, read_file};

/// Explicit catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub entries: Vec<CatalogEntry>,
}

/// Loader for an explicit entry list from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        let file: CatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        Catalog::new(file.entries)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))
    }
}

/// Loader for a slot layout from TOML files; the catalog is generated from it.
pub struct LayoutLoader;

impl LayoutLoader {
    pub fn load(path: &Path) -> LoadResult<CatalogLayout> {
        let content = read_file(path)?;
        let layout: CatalogLayout = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse shop layout TOML: {}", e))?;

        Ok(layout)
    }

    pub fn load_catalog(path: &Path, config: &GameConfig) -> LoadResult<Catalog> {
        let layout = Self::load(path)?;
        Catalog::new(generate_catalog(&layout, config))
            .map_err(|e| anyhow::anyhow!("Invalid generated catalog {}: {}", path.display(), e))
    }
}
