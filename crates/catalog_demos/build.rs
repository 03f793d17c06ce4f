use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;
const SECTIONS: [&str; 4] = ["forms", "ui", "animation", "three_d"];
const SCENES: [&str; 5] = [
    "spinning-cube",
    "floating-sphere",
    "torus-knot",
    "particle-galaxy",
    "wire-globe",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum PriceValue {
    Amount(f64),
    Label(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ComponentEntry {
    id: u32,
    name: String,
    category: String,
    framework: String,
    language: String,
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<PriceValue>,
    #[serde(default)]
    is_3d: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    preview_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    live_demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scene: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct SectionFile {
    schema_version: u32,
    section: String,
    #[serde(default, rename = "component")]
    components: Vec<ComponentEntry>,
}

#[derive(Debug, Clone, Serialize)]
struct SectionOut {
    section: String,
    components: Vec<ComponentEntry>,
}

fn section_path(root: &Path, name: &str) -> PathBuf {
    root.join("catalog").join(format!("{name}.toml"))
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut sections = Vec::<SectionOut>::new();
    let mut seen = HashMap::<u32, String>::new();

    for name in SECTIONS {
        let path = section_path(&crate_root, name);
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let file: SectionFile = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        if file.schema_version != SCHEMA_VERSION {
            panic!(
                "catalog schema mismatch in {}: expected {SCHEMA_VERSION} found {}",
                path.display(),
                file.schema_version
            );
        }
        if file.section != name {
            panic!(
                "section label mismatch in {}: expected `{name}` found `{}`",
                path.display(),
                file.section
            );
        }

        for entry in &file.components {
            if entry.name.trim().is_empty() {
                panic!("component {} in {} has an empty name", entry.id, path.display());
            }
            if entry.category.trim().is_empty() {
                panic!(
                    "component {} ({}) in {} has an empty category",
                    entry.id,
                    entry.name,
                    path.display()
                );
            }
            if let Some(scene) = entry.scene.as_deref() {
                if !entry.is_3d {
                    panic!(
                        "component {} ({}) names scene `{scene}` but is not marked is_3d",
                        entry.id, entry.name
                    );
                }
                if !SCENES.contains(&scene) {
                    panic!(
                        "component {} ({}) names unknown scene `{scene}`",
                        entry.id, entry.name
                    );
                }
            }
            if let Some(previous) = seen.insert(entry.id, entry.name.clone()) {
                panic!(
                    "duplicate component id {} in {}: `{previous}` and `{}`",
                    entry.id,
                    path.display(),
                    entry.name
                );
            }
        }

        sections.push(SectionOut {
            section: file.section,
            components: file.components,
        });
    }

    let json = serde_json::to_string_pretty(&sections).expect("serialize catalog manifest");
    let generated = format!(
        "/// Build-time generated catalog manifest JSON, sections in authored order.\n\
pub const CATALOG_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("catalog_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
