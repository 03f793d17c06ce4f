//! Plan-to-content resolution for one render of the preview stage.

use catalog_contract::{LiveDemo, RenderFault, SceneVariant};

use crate::{boundary::isolate, dispatcher::PreviewPlan};

/// What the stage shows, with rendered views left generic so resolution runs without a DOM.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StageContent<V> {
    /// Nothing selected.
    Idle,
    /// "Preview not available" placeholder.
    Unavailable,
    /// Authored markup inserted as-is.
    Markup(String),
    /// Output of a live demo factory.
    Live(V),
    /// Freshly mounted 3D scene.
    Scene {
        /// Variant handed to the renderer.
        variant: SceneVariant,
        /// Renderer output.
        view: V,
    },
    /// Placeholder for a scene that already mounted for this selection.
    SceneMounted(SceneVariant),
    /// Fallback for a contained fault.
    Errored {
        /// Descriptor display name.
        name: String,
    },
}

impl<V> StageContent<V> {
    /// Render path token exposed on the preview frame.
    pub(crate) fn path(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Unavailable => "unavailable",
            Self::Markup(_) => "markup",
            Self::Live(_) => "live",
            Self::Scene { .. } => "scene",
            Self::SceneMounted(_) => "scene-mounted",
            Self::Errored { .. } => "errored",
        }
    }
}

/// Stage content plus the fault to record when a render path failed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StagePass<V> {
    pub(crate) content: StageContent<V>,
    pub(crate) fault: Option<RenderFault>,
}

impl<V> StagePass<V> {
    fn shown(content: StageContent<V>) -> Self {
        Self {
            content,
            fault: None,
        }
    }

    fn contained(name: &str, fault: RenderFault) -> Self {
        Self {
            content: StageContent::Errored {
                name: name.to_string(),
            },
            fault: Some(fault),
        }
    }
}

/// Resolves `plan` for the descriptor called `name`.
///
/// Live demos and scene mounts run inside [`isolate`]; a failure yields the errored fallback
/// and hands the fault back for the dispatcher to record. `mount_scene` is `None` when no scene
/// renderer is provided, which leaves 3D entries unavailable.
pub(crate) fn resolve_stage<V, L, M>(
    plan: PreviewPlan,
    name: &str,
    render_live: L,
    mount_scene: Option<M>,
) -> StagePass<V>
where
    L: FnOnce(LiveDemo) -> Result<V, RenderFault>,
    M: FnOnce(SceneVariant) -> Result<V, RenderFault>,
{
    match plan {
        PreviewPlan::Idle => StagePass::shown(StageContent::Idle),
        PreviewPlan::Unavailable => StagePass::shown(StageContent::Unavailable),
        PreviewPlan::StaticMarkup(html) => StagePass::shown(StageContent::Markup(html)),
        PreviewPlan::Live(demo) => match isolate(name, || render_live(demo)) {
            Ok(view) => StagePass::shown(StageContent::Live(view)),
            Err(fault) => StagePass::contained(name, fault),
        },
        PreviewPlan::Scene { variant, .. } => match mount_scene {
            Some(mount) => match isolate(name, || mount(variant)) {
                Ok(view) => StagePass::shown(StageContent::Scene { variant, view }),
                Err(fault) => StagePass::contained(name, fault),
            },
            None => StagePass::shown(StageContent::Unavailable),
        },
        PreviewPlan::SceneMounted { variant } => {
            StagePass::shown(StageContent::SceneMounted(variant))
        }
        PreviewPlan::Errored { name, .. } => StagePass::shown(StageContent::Errored { name }),
    }
}

#[cfg(test)]
mod tests {
    use catalog_contract::{
        ComponentDescriptor, ComponentMeta, DescriptorId, PreviewFields, SceneKey,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        dispatcher::{PreviewDispatcher, PreviewTicket},
        scene::{SceneEvent, SceneTable},
    };

    type Mount = fn(SceneVariant) -> Result<String, RenderFault>;

    fn descriptor(id: u32, name: &str, fields: PreviewFields) -> ComponentDescriptor {
        ComponentDescriptor::authored(ComponentMeta::new(id, name, "UI"), fields)
            .expect("valid descriptor")
    }

    fn live(id: u32, name: &str) -> ComponentDescriptor {
        descriptor(
            id,
            name,
            PreviewFields {
                component: Some(LiveDemo::fallible(|| Err(RenderFault::failed("unused")))),
                ..PreviewFields::default()
            },
        )
    }

    fn cube() -> ComponentDescriptor {
        descriptor(
            301,
            "Cube",
            PreviewFields {
                is_3d: true,
                ..PreviewFields::default()
            },
        )
    }

    fn dispatcher() -> PreviewDispatcher {
        PreviewDispatcher::new(SceneTable::new([(
            DescriptorId(301),
            SceneVariant::SpinningCube,
        )]))
    }

    fn render_ok(_: LiveDemo) -> Result<String, RenderFault> {
        Ok("<live/>".to_string())
    }

    fn mount_ok(variant: SceneVariant) -> Result<String, RenderFault> {
        Ok(format!("<canvas {}/>", variant.token()))
    }

    /// One render of the stage: select, resolve the plan, record any contained fault.
    fn show<L>(
        dispatcher: &mut PreviewDispatcher,
        target: &ComponentDescriptor,
        render_live: L,
        mount_scene: Option<Mount>,
    ) -> (PreviewTicket, StageContent<String>)
    where
        L: FnOnce(LiveDemo) -> Result<String, RenderFault>,
    {
        let ticket = dispatcher.select(target);
        let pass = resolve_stage(dispatcher.plan(), target.name(), render_live, mount_scene);
        if let Some(fault) = pass.fault {
            dispatcher.record_fault(ticket, fault);
        }
        (ticket, pass.content)
    }

    #[test]
    fn idle_markup_and_unavailable_plans_pass_through() {
        let none = None::<Mount>;

        let idle = resolve_stage(PreviewPlan::Idle, "", render_ok, none);
        let html = PreviewPlan::StaticMarkup("<b>x</b>".into());
        let markup = resolve_stage(html, "", render_ok, none);
        let unavailable = resolve_stage(PreviewPlan::Unavailable, "", render_ok, none);

        assert_eq!(idle, StagePass::shown(StageContent::Idle));
        assert_eq!(markup.content, StageContent::Markup("<b>x</b>".to_string()));
        assert_eq!(unavailable.content.path(), "unavailable");
    }

    #[test]
    fn live_demo_output_is_shown() {
        let mut dispatcher = dispatcher();

        let (_, content) = show(&mut dispatcher, &live(1, "Button"), render_ok, None);

        assert_eq!(content, StageContent::Live("<live/>".to_string()));
        assert_eq!(content.path(), "live");
        assert!(!dispatcher.has_error());
    }

    #[test]
    fn failing_live_demo_is_contained_and_recorded() {
        let mut dispatcher = dispatcher();
        let broken = live(10, "Broken Chart");

        let (_, content) = show(
            &mut dispatcher,
            &broken,
            |_| Err(RenderFault::failed("chart series is empty")),
            None,
        );

        assert_eq!(
            content,
            StageContent::Errored {
                name: "Broken Chart".to_string()
            }
        );
        assert!(dispatcher.has_error());
        assert_eq!(
            dispatcher.plan(),
            PreviewPlan::Errored {
                name: "Broken Chart".to_string(),
                fault: RenderFault::Failed("chart series is empty".to_string()),
            }
        );
    }

    #[test]
    fn panicking_live_demo_falls_back_and_stays_errored() {
        let mut dispatcher = dispatcher();
        let broken = live(11, "Exploding Carousel");

        let (_, first) = show(&mut dispatcher, &broken, |_| panic!("demo exploded"), None);
        let (_, again) = show(&mut dispatcher, &broken, render_ok, None);

        assert_eq!(first.path(), "errored");
        assert_eq!(again, first);
        assert_eq!(
            dispatcher.plan(),
            PreviewPlan::Errored {
                name: "Exploding Carousel".to_string(),
                fault: RenderFault::Panicked("demo exploded".to_string()),
            }
        );
    }

    #[test]
    fn scene_mounts_through_renderer() {
        let mut dispatcher = dispatcher();

        let (ticket, content) = show(&mut dispatcher, &cube(), render_ok, Some(mount_ok));

        assert_eq!(
            content,
            StageContent::Scene {
                variant: SceneVariant::SpinningCube,
                view: "<canvas spinning-cube/>".to_string(),
            }
        );
        assert_eq!(content.path(), "scene");

        dispatcher.apply_scene_event(ticket, SceneEvent::Mounted);
        let (_, remount) = show(&mut dispatcher, &cube(), render_ok, Some(mount_ok));
        assert_eq!(remount, StageContent::SceneMounted(SceneVariant::SpinningCube));
    }

    #[test]
    fn failing_scene_mount_is_contained() {
        let mut dispatcher = dispatcher();
        let fail: Mount = |_| Err(RenderFault::SceneMount("webgl context lost".to_string()));

        let (_, content) = show(&mut dispatcher, &cube(), render_ok, Some(fail));

        assert_eq!(content.path(), "errored");
        assert!(dispatcher.has_error());
    }

    #[test]
    fn scene_without_renderer_is_unavailable() {
        let plan = PreviewPlan::Scene {
            key: SceneKey(DescriptorId(301)),
            variant: SceneVariant::SpinningCube,
        };

        let pass = resolve_stage(plan, "Cube", render_ok, None::<Mount>);

        assert_eq!(pass, StagePass::shown(StageContent::Unavailable));
    }
}
