//! Rules provider backed by a single JSON catalog file.
//!
//! File layout:
//!
//! ```json
//! { "races": [...], "classes": [...], "backgrounds": [...] }
//! ```
//!
//! Entries use the `charforge_domain::rules` shapes. The whole file is read
//! once at load time and served from memory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tokio::fs;

use charforge_domain::{BackgroundInfo, ClassInfo, RaceInfo, SubraceInfo};

use crate::infrastructure::ports::{RepoError, RulesProvider};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Rules catalog not found at {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    races: Vec<RaceInfo>,
    #[serde(default)]
    classes: Vec<ClassInfo>,
    #[serde(default)]
    backgrounds: Vec<BackgroundInfo>,
}

/// In-memory rules data loaded from JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonRulesCatalog {
    catalog: CatalogFile,
}

impl JsonRulesCatalog {
    /// Load a catalog file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !fs::try_exists(path).await.unwrap_or(false) {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).await?;
        let catalog = Self::from_json(&content)?;

        tracing::info!(
            path = %path.display(),
            races = catalog.catalog.races.len(),
            classes = catalog.catalog.classes.len(),
            backgrounds = catalog.catalog.backgrounds.len(),
            "Loaded rules catalog"
        );
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: serde_json::from_str(content)?,
        })
    }
}

#[async_trait]
impl RulesProvider for JsonRulesCatalog {
    async fn get_race(&self, race_id: &str) -> Result<Option<RaceInfo>, RepoError> {
        Ok(self.catalog.races.iter().find(|r| r.id == race_id).cloned())
    }

    async fn get_subrace(&self, subrace_id: &str) -> Result<Option<SubraceInfo>, RepoError> {
        Ok(self
            .catalog
            .races
            .iter()
            .find_map(|r| r.subrace(subrace_id))
            .cloned())
    }

    async fn get_class(&self, class_id: &str) -> Result<Option<ClassInfo>, RepoError> {
        Ok(self
            .catalog
            .classes
            .iter()
            .find(|c| c.id == class_id)
            .cloned())
    }

    async fn get_background(
        &self,
        background_id: &str,
    ) -> Result<Option<BackgroundInfo>, RepoError> {
        Ok(self
            .catalog
            .backgrounds
            .iter()
            .find(|b| b.id == background_id)
            .cloned())
    }

    async fn list_races(&self) -> Result<Vec<RaceInfo>, RepoError> {
        Ok(self.catalog.races.clone())
    }

    async fn list_classes(&self) -> Result<Vec<ClassInfo>, RepoError> {
        Ok(self.catalog.classes.clone())
    }

    async fn list_backgrounds(&self) -> Result<Vec<BackgroundInfo>, RepoError> {
        Ok(self.catalog.backgrounds.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = r#"{
        "races": [{
            "id": "elf",
            "name": "Elf",
            "speed": 30,
            "ability_bonuses": [{"ability": "dex", "bonus": 2}],
            "languages": ["common", "elvish"],
            "subraces": [{"id": "high-elf", "name": "High Elf"}]
        }],
        "classes": [{"id": "wizard", "name": "Wizard", "hit_die": 6}],
        "backgrounds": [{"id": "sage", "name": "Sage", "skill_proficiencies": ["arcana", "history"]}]
    }"#;

    #[tokio::test]
    async fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = JsonRulesCatalog::load(file.path()).await.unwrap();

        let elf = catalog.get_race("elf").await.unwrap().unwrap();
        assert_eq!(elf.speed, 30);
        let high_elf = catalog.get_subrace("high-elf").await.unwrap().unwrap();
        assert_eq!(high_elf.name, "High Elf");
        assert_eq!(catalog.list_classes().await.unwrap().len(), 1);
        assert!(catalog.get_background("acolyte").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonRulesCatalog::load(dir.path().join("nope.json")).await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let result = JsonRulesCatalog::from_json("{ not json");
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }
}
