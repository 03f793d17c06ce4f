//! Generated catalog manifest and descriptor binding.

use catalog_contract::{
    ComponentDescriptor, ComponentMeta, DescriptorId, LiveDemo, PreviewFields, SceneVariant,
};
use serde::Deserialize;

use crate::CatalogError;

include!(concat!(env!("OUT_DIR"), "/catalog_manifest_generated.rs"));

/// One authored feature section, in manifest order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestSection {
    /// Section label (`forms`, `ui`, ...).
    pub section: String,
    /// Entries in authored order.
    pub components: Vec<ManifestEntry>,
}

/// One authored catalog entry before its live demo key is bound.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestEntry {
    /// Display metadata.
    #[serde(flatten)]
    pub meta: ComponentMeta,
    /// Marks the entry as a 3D scene.
    #[serde(default)]
    pub is_3d: bool,
    /// Trusted static markup.
    #[serde(default)]
    pub preview_html: Option<String>,
    /// Key of a live demo factory.
    #[serde(default)]
    pub live_demo: Option<String>,
    /// Scene variant bound to a 3D entry.
    #[serde(default)]
    pub scene: Option<SceneVariant>,
}

impl ManifestEntry {
    /// Resolves the live demo key through `demos` and builds the descriptor.
    pub fn bind(
        self,
        demos: impl Fn(&str) -> Option<LiveDemo>,
    ) -> Result<ComponentDescriptor, CatalogError> {
        let id = self.meta.id;
        let component = match self.live_demo {
            Some(key) => Some(demos(&key).ok_or(CatalogError::UnknownDemo { id, key })?),
            None => None,
        };
        let fields = PreviewFields {
            is_3d: self.is_3d,
            component,
            preview_html: self.preview_html,
        };
        Ok(ComponentDescriptor::authored(self.meta, fields)?)
    }
}

/// Returns the generated manifest JSON payload.
pub fn manifest_json() -> &'static str {
    CATALOG_MANIFEST_JSON
}

/// Parses a manifest payload into its sections.
pub fn parse_manifest(raw: &str) -> Result<Vec<ManifestSection>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

/// `(id, variant)` pairs for every entry carrying a scene binding.
pub fn scene_bindings(sections: &[ManifestSection]) -> Vec<(DescriptorId, SceneVariant)> {
    sections
        .iter()
        .flat_map(|section| section.components.iter())
        .filter_map(|entry| entry.scene.map(|variant| (entry.meta.id, variant)))
        .collect()
}
