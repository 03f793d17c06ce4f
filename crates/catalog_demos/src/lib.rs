//! The authored UIKits Galaxy catalog.
//!
//! Entry metadata lives in `catalog/*.toml`, one file per feature section. The build script
//! validates those files and embeds them as JSON; [`catalog`] binds each entry's `live_demo` key
//! to a widget factory from [`demos`] and assembles the registry in authored order.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod demos;
mod manifest;
mod scenes;

use catalog_contract::{DescriptorError, DescriptorId};
use catalog_registry::{ComponentRegistry, RegistryError};
use component_preview::SceneTable;
use leptos::logging;
use thiserror::Error;

pub use manifest::{manifest_json, parse_manifest, scene_bindings, ManifestEntry, ManifestSection};
pub use scenes::StageSceneRenderer;

/// Catalog assembly failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The embedded manifest could not be parsed.
    #[error("catalog manifest is malformed: {0}")]
    Manifest(#[from] serde_json::Error),
    /// An entry names a live demo no factory is registered for.
    #[error("descriptor {id} references unknown live demo `{key}`")]
    UnknownDemo {
        /// Entry naming the key.
        id: DescriptorId,
        /// The unresolved key.
        key: String,
    },
    /// An entry failed descriptor validation.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
    /// The sections could not be assembled into a registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Assembles the registry from the embedded manifest.
pub fn catalog() -> Result<ComponentRegistry, CatalogError> {
    let sections = parse_manifest(manifest_json())?;
    let registry = assemble(sections)?;
    logging::log!(
        "catalog assembled: {} components in {} categories",
        registry.len(),
        registry.categories().len()
    );
    Ok(registry)
}

/// Binds and assembles already parsed sections.
pub fn assemble(sections: Vec<ManifestSection>) -> Result<ComponentRegistry, CatalogError> {
    let bound = sections
        .into_iter()
        .map(|section| {
            section
                .components
                .into_iter()
                .map(|entry| entry.bind(demos::live_demo))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ComponentRegistry::assemble(bound)?)
}

/// Scene variants bound in the embedded manifest, keyed by descriptor id.
pub fn scene_table() -> Result<SceneTable, CatalogError> {
    let sections = parse_manifest(manifest_json())?;
    Ok(SceneTable::new(scene_bindings(&sections)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use catalog_contract::{PreviewKind, PreviewSource, SceneKey};
    use catalog_registry::CatalogQuery;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_catalog_assembles() {
        let registry = catalog().expect("embedded catalog is valid");

        assert!(!registry.is_empty());
        let ids = registry
            .all()
            .iter()
            .map(|descriptor| descriptor.id())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn sections_keep_authored_order() {
        let registry = catalog().expect("embedded catalog is valid");
        let first_of_each = registry
            .all()
            .iter()
            .map(|descriptor| descriptor.category().to_string())
            .fold(Vec::<String>::new(), |mut seen, category| {
                if !seen.contains(&category) {
                    seen.push(category);
                }
                seen
            });

        assert_eq!(first_of_each, vec!["Form", "UI", "Animation", "3D"]);
        assert_eq!(registry.categories(), vec!["3D", "Animation", "Form", "UI"]);
    }

    #[test]
    fn every_render_path_is_represented() {
        let registry = catalog().expect("embedded catalog is valid");
        let kinds = registry
            .all()
            .iter()
            .map(|descriptor| descriptor.kind())
            .collect::<HashSet<_>>();

        for kind in [
            PreviewKind::ThreeD,
            PreviewKind::Live,
            PreviewKind::StaticMarkup,
            PreviewKind::Unavailable,
        ] {
            assert!(kinds.contains(&kind), "no {} entry", kind.label());
        }
    }

    #[test]
    fn scene_table_covers_bound_3d_entries_only() {
        let registry = catalog().expect("embedded catalog is valid");
        let scenes = scene_table().expect("embedded catalog is valid");
        let three_d = registry.by_category(Some("3D"));

        let unbound = three_d
            .iter()
            .filter_map(|descriptor| match descriptor.preview() {
                PreviewSource::ThreeD(key) if scenes.variant(*key).is_none() => {
                    Some(descriptor.name().to_string())
                }
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(unbound, vec!["Holographic Panel".to_string()]);
        assert_eq!(scenes.len(), three_d.len() - 1);

        for descriptor in registry.all() {
            if descriptor.kind() != PreviewKind::ThreeD {
                assert_eq!(scenes.variant(SceneKey(descriptor.id())), None);
            }
        }
    }

    #[test]
    fn search_reaches_tags_in_embedded_catalog() {
        let registry = catalog().expect("embedded catalog is valid");

        let names = registry
            .query(&CatalogQuery::text("LOADER"))
            .iter()
            .map(|descriptor| descriptor.name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Pulse Loader".to_string()]);
    }

    #[test]
    fn unknown_demo_key_fails_assembly() {
        let mut sections = parse_manifest(manifest_json()).expect("embedded manifest parses");
        sections[0].components[0].live_demo = Some("retired-widget".to_string());

        let err = assemble(sections).expect_err("unknown key");

        assert!(matches!(
            err,
            CatalogError::UnknownDemo { ref key, .. } if key == "retired-widget"
        ));
    }

    #[test]
    fn duplicate_ids_fail_assembly() {
        let mut sections = parse_manifest(manifest_json()).expect("embedded manifest parses");
        let duplicate = sections[0].components[0].clone();
        sections[1].components.push(duplicate);

        assert!(matches!(
            assemble(sections),
            Err(CatalogError::Registry(RegistryError::DuplicateId { .. }))
        ));
    }
}
