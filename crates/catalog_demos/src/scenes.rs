//! Stage renderer for the 3D catalog entries.

use catalog_contract::{RenderFault, SceneVariant};
use component_preview::{SceneRenderer, SceneSignals};
use leptos::*;

/// Draws each scene variant as a layered stage animated by the site stylesheet.
///
/// The stage reports completion on the next animation frame, after the browser has attached
/// the host element.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageSceneRenderer;

impl StageSceneRenderer {
    fn layers(variant: SceneVariant) -> usize {
        match variant {
            SceneVariant::SpinningCube => 6,
            SceneVariant::FloatingSphere => 2,
            SceneVariant::TorusKnot => 12,
            SceneVariant::ParticleGalaxy => 48,
            SceneVariant::WireGlobe => 9,
        }
    }
}

impl SceneRenderer for StageSceneRenderer {
    fn mount(&self, variant: SceneVariant, signals: SceneSignals) -> Result<View, RenderFault> {
        let layers = (0..Self::layers(variant))
            .map(|index| {
                view! { <span data-scene-layer=index style=format!("--layer: {index}")></span> }
            })
            .collect_view();

        let view = view! {
            <div
                class="kit-scene"
                data-kit-kind="scene"
                data-scene=variant.token()
                role="img"
                aria-label=format!("3D {} scene", variant.token().replace('-', " "))
            >
                <div data-kit-slot="object">{layers}</div>
            </div>
        }
        .into_view();

        request_animation_frame(move || signals.mounted());
        Ok(view)
    }
}
