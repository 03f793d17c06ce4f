//! Leptos surface for the preview dispatcher.

use std::rc::Rc;

use catalog_contract::{ComponentDescriptor, LiveDemo, SceneVariant};
use catalog_ui::prelude::*;
use leptos::*;

use crate::{
    dispatcher::{PreviewDispatcher, PreviewTicket, SceneOutcome},
    scene::{SceneEvent, SceneRenderer, SceneSignals, SceneSink, SceneTable},
    stage::{resolve_stage, StageContent},
};

#[derive(Clone)]
/// Scene table and renderer shared by every preview below a [`PreviewProvider`].
pub struct PreviewHost {
    /// Descriptor id to scene variant mapping.
    pub scenes: SceneTable,
    /// The 3D collaborator.
    pub renderer: Rc<dyn SceneRenderer>,
}

#[component]
/// Provides [`PreviewHost`] to descendant previews.
///
/// Previews rendered without a provider treat every 3D entry as unavailable.
pub fn PreviewProvider(
    /// Descriptor id to scene variant mapping.
    scenes: SceneTable,
    /// The 3D collaborator.
    renderer: Rc<dyn SceneRenderer>,
    children: Children,
) -> impl IntoView {
    provide_context(PreviewHost { scenes, renderer });
    children().into_view()
}

/// Returns the nearest [`PreviewHost`], if one was provided.
pub fn use_preview_host() -> Option<PreviewHost> {
    use_context::<PreviewHost>()
}

#[component]
/// Renders the selected descriptor through the dispatcher inside an isolation boundary.
///
/// A broken demo only replaces this preview's content with a fallback; the fault never reaches
/// the surrounding catalog.
pub fn ComponentPreview(
    /// Descriptor to preview; `None` shows the idle prompt.
    #[prop(into)]
    descriptor: Signal<Option<ComponentDescriptor>>,
) -> impl IntoView {
    let host = use_preview_host();
    let scenes = host
        .as_ref()
        .map(|host| host.scenes.clone())
        .unwrap_or_default();
    let dispatcher = store_value(PreviewDispatcher::new(scenes));
    let revision = create_rw_signal(0_u64);
    let scene_loading = create_rw_signal(false);

    let sink: Rc<SceneSink> = Rc::new(move |ticket: PreviewTicket, event: SceneEvent| {
        let Some(outcome) =
            dispatcher.try_update_value(|state| state.apply_scene_event(ticket, event.clone()))
        else {
            return;
        };
        match (outcome, event) {
            (SceneOutcome::Mounted, _) => {
                logging::log!("scene for descriptor {} mounted", ticket.descriptor_id());
                scene_loading.set(false);
            }
            (SceneOutcome::Faulted, SceneEvent::Faulted(fault)) => {
                logging::error!(
                    "scene for descriptor {} failed after mount: {fault}",
                    ticket.descriptor_id()
                );
                scene_loading.set(false);
                revision.update(|value| *value += 1);
            }
            (SceneOutcome::Stale, _) => logging::warn!(
                "dropped scene signal for superseded descriptor {}",
                ticket.descriptor_id()
            ),
            _ => {}
        }
    });

    let path = create_rw_signal("idle");
    let body = move || {
        revision.track();
        let Some(selected) = descriptor.get() else {
            dispatcher.update_value(PreviewDispatcher::clear);
            return show_stage(path, StageContent::Idle, scene_loading);
        };

        let step = dispatcher.try_update_value(|state| {
            let ticket = state.select(&selected);
            (ticket, state.plan())
        });
        let Some((ticket, plan)) = step else {
            return ().into_view();
        };

        let mount = host.as_ref().map(|host| {
            let renderer = host.renderer.clone();
            let signals = SceneSignals::from_shared(ticket, sink.clone());
            move |variant: SceneVariant| {
                scene_loading.set(true);
                untrack(|| renderer.mount(variant, signals))
            }
        });
        let pass = resolve_stage(
            plan,
            selected.name(),
            |demo: LiveDemo| untrack(|| demo.render()),
            mount,
        );
        if let Some(fault) = pass.fault {
            dispatcher.update_value(|state| {
                state.record_fault(ticket, fault);
            });
        }
        show_stage(path, pass.content, scene_loading)
    };

    view! {
        <PreviewFrame
            aria_label="Component preview"
            state=Signal::derive(move || path.get().to_string())
        >
            {body}
        </PreviewFrame>
    }
}

fn show_stage(
    path: RwSignal<&'static str>,
    content: StageContent<View>,
    scene_loading: RwSignal<bool>,
) -> View {
    path.set(content.path());
    let view = match content {
        StageContent::Idle => idle_view(),
        StageContent::Unavailable => unavailable_view(),
        StageContent::Markup(html) => {
            view! { <div data-kit-slot="markup" inner_html=html></div> }.into_view()
        }
        StageContent::Live(view) => view,
        StageContent::Scene { variant, view } => scene_stage(variant, view, scene_loading),
        StageContent::SceneMounted(variant) => scene_available_view(variant),
        StageContent::Errored { name } => {
            scene_loading.set(false);
            errored_view(&name)
        }
    };
    view! { <div data-kit-slot="stage">{view}</div> }.into_view()
}

fn idle_view() -> View {
    view! {
        <EmptyState>
            <Text tone=TextTone::Secondary>"Select a component to preview it here."</Text>
        </EmptyState>
    }
    .into_view()
}

fn unavailable_view() -> View {
    view! {
        <EmptyState role="status">
            <Text tone=TextTone::Secondary>"Preview not available"</Text>
        </EmptyState>
    }
    .into_view()
}

fn scene_stage(variant: SceneVariant, scene: View, loading: RwSignal<bool>) -> View {
    view! {
        <div data-kit-slot="scene" data-scene=variant.token()>
            <Show when=move || loading.get() fallback=|| ()>
                <EmptyState role="status">
                    <Text tone=TextTone::Secondary>"Loading 3D preview..."</Text>
                </EmptyState>
            </Show>
            {scene}
        </div>
    }
    .into_view()
}

fn scene_available_view(variant: SceneVariant) -> View {
    view! {
        <EmptyState role="status">
            <Badge tone=TextTone::Accent>"3D"</Badge>
            <Text tone=TextTone::Secondary>
                {format!("3D preview available ({})", variant.token())}
            </Text>
        </EmptyState>
    }
    .into_view()
}

fn errored_view(name: &str) -> View {
    let title = format!("Could not load {name}");
    view! {
        <EmptyState tone=TextTone::Danger role="alert">
            <Heading role=TextRole::Label tone=TextTone::Danger>{title}</Heading>
            <Text tone=TextTone::Secondary>"Check the browser console for diagnostics."</Text>
        </EmptyState>
    }
    .into_view()
}
