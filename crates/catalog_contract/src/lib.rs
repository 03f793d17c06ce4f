//! Shared descriptor contracts for the component catalog.
//!
//! A [`ComponentDescriptor`] is the immutable record behind one catalog entry: display
//! metadata plus the [`PreviewSource`] that decides how its demo renders. The render strategy
//! is resolved once, when the descriptor is authored, so consumers never re-inspect optional
//! flags at render time.
//!
//! The registry and preview crates both depend on this crate; neither depends on the other.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, rc::Rc};

use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable catalog identifier assigned when a descriptor is authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorId(pub u32);

impl fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display-only price tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// Numeric amount in whole currency units.
    Amount(f64),
    /// Free-form label such as `"Free"` or `"$19 / seat"`.
    Label(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) if *amount <= 0.0 => f.write_str("Free"),
            Self::Amount(amount) if amount.fract() == 0.0 => write!(f, "${amount:.0}"),
            Self::Amount(amount) => write!(f, "${amount:.2}"),
            Self::Label(label) => f.write_str(label.trim()),
        }
    }
}

/// Authored metadata for one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Unique catalog identifier.
    pub id: DescriptorId,
    /// Display name.
    pub name: String,
    /// Grouping key used by the category sidebar.
    pub category: String,
    /// Informational framework tag.
    #[serde(default)]
    pub framework: String,
    /// Informational language tag.
    #[serde(default)]
    pub language: String,
    /// Free-text summary.
    #[serde(default)]
    pub description: String,
    /// Search tags in authored order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Example source shown verbatim in the detail pane.
    #[serde(default)]
    pub code: String,
    /// Optional price tag.
    #[serde(default)]
    pub price: Option<Price>,
}

impl ComponentMeta {
    /// Creates metadata with the required fields and empty informational fields.
    pub fn new(id: u32, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: DescriptorId(id),
            name: name.into(),
            category: category.into(),
            framework: String::new(),
            language: String::new(),
            description: String::new(),
            tags: Vec::new(),
            code: String::new(),
            price: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the tag list.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the example source.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the price tag.
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }
}

/// Render-time failure raised inside a preview.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderFault {
    /// The demo factory returned an error.
    #[error("render failed: {0}")]
    Failed(String),
    /// The demo factory panicked.
    #[error("render panicked: {0}")]
    Panicked(String),
    /// The 3D scene collaborator reported a mount failure.
    #[error("scene mount failed: {0}")]
    SceneMount(String),
}

impl RenderFault {
    /// Shorthand for [`RenderFault::Failed`].
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }
}

type DemoFactory = dyn Fn() -> Result<View, RenderFault>;

/// Zero-argument factory producing a live demo view.
///
/// The factory is only invoked by the preview at render time.
#[derive(Clone)]
pub struct LiveDemo {
    factory: Rc<DemoFactory>,
}

impl LiveDemo {
    /// Wraps an infallible view factory.
    pub fn new<F, V>(factory: F) -> Self
    where
        F: Fn() -> V + 'static,
        V: IntoView,
    {
        Self {
            factory: Rc::new(move || Ok(factory().into_view())),
        }
    }

    /// Wraps a factory that can report a [`RenderFault`].
    pub fn fallible<F>(factory: F) -> Self
    where
        F: Fn() -> Result<View, RenderFault> + 'static,
    {
        Self {
            factory: Rc::new(factory),
        }
    }

    /// Invokes the factory.
    pub fn render(&self) -> Result<View, RenderFault> {
        (self.factory)()
    }
}

impl fmt::Debug for LiveDemo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveDemo").finish_non_exhaustive()
    }
}

impl PartialEq for LiveDemo {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.factory, &other.factory)
    }
}

/// Key handed to the 3D scene collaborator. It is the descriptor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneKey(pub DescriptorId);

/// Named scene variants offered by the 3D collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneVariant {
    /// Rotating shaded cube.
    SpinningCube,
    /// Sphere bobbing above a ground plane.
    FloatingSphere,
    /// Twisted torus knot.
    TorusKnot,
    /// Point cloud arranged as a spiral galaxy.
    ParticleGalaxy,
    /// Wireframe globe.
    WireGlobe,
}

impl SceneVariant {
    /// Stable token used in DOM attributes and logs.
    pub fn token(self) -> &'static str {
        match self {
            Self::SpinningCube => "spinning-cube",
            Self::FloatingSphere => "floating-sphere",
            Self::TorusKnot => "torus-knot",
            Self::ParticleGalaxy => "particle-galaxy",
            Self::WireGlobe => "wire-globe",
        }
    }
}

/// Render strategy for a descriptor, resolved once at authoring time.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewSource {
    /// Mount a scene from the 3D collaborator.
    ThreeD(SceneKey),
    /// Invoke a live demo factory.
    Live(LiveDemo),
    /// Insert trusted, author-controlled markup.
    StaticMarkup(String),
    /// No preview content.
    Unavailable,
}

/// Optional preview fields as they appear on an authored record.
#[derive(Debug, Clone, Default)]
pub struct PreviewFields {
    /// Marks the entry as a 3D scene.
    pub is_3d: bool,
    /// Live demo factory.
    pub component: Option<LiveDemo>,
    /// Static markup.
    pub preview_html: Option<String>,
}

impl PreviewSource {
    /// Resolves authored preview fields in priority order: 3D, live component, non-empty
    /// static markup, unavailable.
    pub fn resolve(id: DescriptorId, fields: PreviewFields) -> Self {
        if fields.is_3d {
            return Self::ThreeD(SceneKey(id));
        }
        if let Some(component) = fields.component {
            return Self::Live(component);
        }
        match fields.preview_html {
            Some(html) if !html.trim().is_empty() => Self::StaticMarkup(html),
            _ => Self::Unavailable,
        }
    }

    /// Returns the strategy tag.
    pub fn kind(&self) -> PreviewKind {
        match self {
            Self::ThreeD(_) => PreviewKind::ThreeD,
            Self::Live(_) => PreviewKind::Live,
            Self::StaticMarkup(_) => PreviewKind::StaticMarkup,
            Self::Unavailable => PreviewKind::Unavailable,
        }
    }
}

/// Data-free tag for a [`PreviewSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewKind {
    /// 3D scene.
    ThreeD,
    /// Live component.
    Live,
    /// Static markup.
    StaticMarkup,
    /// No preview.
    Unavailable,
}

impl PreviewKind {
    /// Stable token used in DOM attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::ThreeD => "3d",
            Self::Live => "live",
            Self::StaticMarkup => "markup",
            Self::Unavailable => "none",
        }
    }

    /// Short badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ThreeD => "3D",
            Self::Live => "Live",
            Self::StaticMarkup => "Markup",
            Self::Unavailable => "No preview",
        }
    }
}

/// Descriptor construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Name was empty or whitespace.
    #[error("descriptor {0} has an empty name")]
    EmptyName(DescriptorId),
    /// Category was empty or whitespace.
    #[error("descriptor {0} has an empty category")]
    EmptyCategory(DescriptorId),
}

#[derive(Debug)]
struct DescriptorInner {
    meta: ComponentMeta,
    preview: PreviewSource,
}

/// Immutable catalog entry. Cloning shares the underlying record.
#[derive(Debug, Clone)]
pub struct ComponentDescriptor(Rc<DescriptorInner>);

impl ComponentDescriptor {
    /// Validates `meta` and pairs it with an already resolved preview strategy.
    pub fn new(meta: ComponentMeta, preview: PreviewSource) -> Result<Self, DescriptorError> {
        if meta.name.trim().is_empty() {
            return Err(DescriptorError::EmptyName(meta.id));
        }
        if meta.category.trim().is_empty() {
            return Err(DescriptorError::EmptyCategory(meta.id));
        }
        Ok(Self(Rc::new(DescriptorInner { meta, preview })))
    }

    /// Builds a descriptor from authored optional preview fields.
    pub fn authored(meta: ComponentMeta, fields: PreviewFields) -> Result<Self, DescriptorError> {
        let preview = PreviewSource::resolve(meta.id, fields);
        Self::new(meta, preview)
    }

    /// Catalog identifier.
    pub fn id(&self) -> DescriptorId {
        self.0.meta.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.0.meta.name
    }

    /// Category label.
    pub fn category(&self) -> &str {
        &self.0.meta.category
    }

    /// Description text.
    pub fn description(&self) -> &str {
        &self.0.meta.description
    }

    /// Search tags.
    pub fn tags(&self) -> &[String] {
        &self.0.meta.tags
    }

    /// Example source.
    pub fn code(&self) -> &str {
        &self.0.meta.code
    }

    /// Price tag, if any.
    pub fn price(&self) -> Option<&Price> {
        self.0.meta.price.as_ref()
    }

    /// Full metadata record.
    pub fn meta(&self) -> &ComponentMeta {
        &self.0.meta
    }

    /// Resolved render strategy.
    pub fn preview(&self) -> &PreviewSource {
        &self.0.preview
    }

    /// Strategy tag.
    pub fn kind(&self) -> PreviewKind {
        self.0.preview.kind()
    }

    /// Returns `true` when `needle` (already lowercased) occurs in the name, description, or
    /// any tag, ignoring case.
    pub fn matches_text(&self, needle: &str) -> bool {
        let meta = &self.0.meta;
        contains_folded(&meta.name, needle)
            || contains_folded(&meta.description, needle)
            || meta.tags.iter().any(|tag| contains_folded(tag, needle))
    }
}

impl PartialEq for ComponentDescriptor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
            || (self.0.meta == other.0.meta && self.0.preview == other.0.preview)
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn live() -> LiveDemo {
        LiveDemo::fallible(|| Err(RenderFault::failed("not invoked in this test")))
    }

    #[test]
    fn three_d_flag_wins_over_live_component_and_markup() {
        let source = PreviewSource::resolve(
            DescriptorId(7),
            PreviewFields {
                is_3d: true,
                component: Some(live()),
                preview_html: Some("<b>x</b>".to_string()),
            },
        );

        assert_eq!(source, PreviewSource::ThreeD(SceneKey(DescriptorId(7))));
    }

    #[test]
    fn live_component_wins_over_markup() {
        let demo = live();
        let source = PreviewSource::resolve(
            DescriptorId(1),
            PreviewFields {
                is_3d: false,
                component: Some(demo.clone()),
                preview_html: Some("<b>x</b>".to_string()),
            },
        );

        assert_eq!(source, PreviewSource::Live(demo));
    }

    #[test]
    fn blank_markup_resolves_to_unavailable() {
        let source = PreviewSource::resolve(
            DescriptorId(1),
            PreviewFields {
                preview_html: Some("   \n".to_string()),
                ..PreviewFields::default()
            },
        );

        assert_eq!(source.kind(), PreviewKind::Unavailable);
        assert_eq!(
            PreviewSource::resolve(DescriptorId(1), PreviewFields::default()),
            PreviewSource::Unavailable
        );
    }

    #[test]
    fn descriptor_rejects_empty_category_and_name() {
        let err = ComponentDescriptor::new(
            ComponentMeta::new(3, "Card", "  "),
            PreviewSource::Unavailable,
        )
        .expect_err("empty category");
        assert_eq!(err, DescriptorError::EmptyCategory(DescriptorId(3)));

        let err =
            ComponentDescriptor::new(ComponentMeta::new(4, "", "UI"), PreviewSource::Unavailable)
                .expect_err("empty name");
        assert_eq!(err, DescriptorError::EmptyName(DescriptorId(4)));
    }

    #[test]
    fn text_match_covers_name_description_and_tags() {
        let descriptor = ComponentDescriptor::new(
            ComponentMeta::new(9, "Glass Toast", "UI")
                .with_description("Transient notification")
                .with_tags(["Feedback", "Overlay"]),
            PreviewSource::Unavailable,
        )
        .expect("descriptor");

        assert!(descriptor.matches_text("toast"));
        assert!(descriptor.matches_text("notification"));
        assert!(descriptor.matches_text("overlay"));
        assert!(!descriptor.matches_text("chart"));
    }

    #[test]
    fn price_formats_amounts_and_labels() {
        assert_eq!(Price::Amount(0.0).to_string(), "Free");
        assert_eq!(Price::Amount(29.0).to_string(), "$29");
        assert_eq!(Price::Amount(4.5).to_string(), "$4.50");
        assert_eq!(Price::Label(" Pro only ".to_string()).to_string(), "Pro only");
    }

    #[test]
    fn meta_deserializes_with_optional_fields_defaulted() {
        let meta: ComponentMeta = serde_json::from_str(
            r#"{"id": 12, "name": "Stepper", "category": "Form", "price": 19}"#,
        )
        .expect("meta json");

        assert_eq!(meta.id, DescriptorId(12));
        assert!(meta.tags.is_empty());
        assert_eq!(meta.price, Some(Price::Amount(19.0)));

        let labelled: ComponentMeta = serde_json::from_str(
            r#"{"id": 13, "name": "Chart", "category": "UI", "price": "Free"}"#,
        )
        .expect("meta json");
        assert_eq!(labelled.price, Some(Price::Label("Free".to_string())));
    }
}
