//! Render-strategy selection and per-preview state transitions.

use catalog_contract::{
    ComponentDescriptor, DescriptorId, LiveDemo, PreviewSource, RenderFault, SceneKey,
    SceneVariant,
};

use crate::scene::{SceneEvent, SceneTable};

/// Identifies one selection of one descriptor.
///
/// Tickets from earlier selections never match the dispatcher's current ticket, even when the
/// same descriptor is selected again later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket {
    generation: u64,
    id: DescriptorId,
}

impl PreviewTicket {
    /// Descriptor this ticket was issued for.
    pub fn descriptor_id(self) -> DescriptorId {
        self.id
    }
}

/// What the preview should render right now.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewPlan {
    /// Nothing is selected.
    Idle,
    /// Mount a 3D scene behind a loading placeholder.
    Scene {
        /// Key handed to the collaborator.
        key: SceneKey,
        /// Resolved variant.
        variant: SceneVariant,
    },
    /// A scene already mounted for this selection; show the lightweight placeholder.
    SceneMounted {
        /// Variant that mounted.
        variant: SceneVariant,
    },
    /// Invoke the live demo factory.
    Live(LiveDemo),
    /// Insert static markup.
    StaticMarkup(String),
    /// Neutral "preview not available" placeholder.
    Unavailable,
    /// Fallback after a contained render fault.
    Errored {
        /// Descriptor display name.
        name: String,
        /// The contained fault.
        fault: RenderFault,
    },
}

impl PreviewPlan {
    /// Stable token for DOM attributes.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Scene { .. } => "scene-loading",
            Self::SceneMounted { .. } => "scene-mounted",
            Self::Live(_) => "live",
            Self::StaticMarkup(_) => "markup",
            Self::Unavailable => "unavailable",
            Self::Errored { .. } => "errored",
        }
    }
}

/// Result of applying an asynchronous scene signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneOutcome {
    /// Mount completion recorded; `live_render_complete` is now set.
    Mounted,
    /// Fault recorded; the preview moved to the errored state.
    Faulted,
    /// Signal belongs to a superseded selection and was dropped.
    Stale,
    /// Signal is current but changes nothing (already mounted or already errored).
    Ignored,
}

/// Per-preview state machine.
#[derive(Debug, Clone, Default)]
pub struct PreviewDispatcher {
    scenes: SceneTable,
    target: Option<ComponentDescriptor>,
    generation: u64,
    has_error: bool,
    live_render_complete: bool,
    fault: Option<RenderFault>,
}

impl PreviewDispatcher {
    /// Creates an idle dispatcher that resolves 3D entries through `scenes`.
    pub fn new(scenes: SceneTable) -> Self {
        Self {
            scenes,
            ..Self::default()
        }
    }

    /// Makes `descriptor` the dispatch target and returns the current ticket.
    ///
    /// Selecting a different descriptor starts a new generation and resets `has_error` and
    /// `live_render_complete`. Re-selecting the current descriptor keeps its state.
    pub fn select(&mut self, descriptor: &ComponentDescriptor) -> PreviewTicket {
        let same_target = self
            .target
            .as_ref()
            .is_some_and(|current| current.id() == descriptor.id());
        if !same_target {
            self.generation += 1;
            self.has_error = false;
            self.live_render_complete = false;
            self.fault = None;
            self.target = Some(descriptor.clone());
        }
        PreviewTicket {
            generation: self.generation,
            id: descriptor.id(),
        }
    }

    /// Drops the current target. Outstanding tickets become stale.
    pub fn clear(&mut self) {
        if self.target.take().is_some() {
            self.generation += 1;
        }
        self.has_error = false;
        self.live_render_complete = false;
        self.fault = None;
    }

    /// Ticket for the current selection.
    pub fn ticket(&self) -> Option<PreviewTicket> {
        self.target.as_ref().map(|target| PreviewTicket {
            generation: self.generation,
            id: target.id(),
        })
    }

    /// Whether a fault has been contained for the current selection.
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Whether the current selection's 3D scene has signalled mount completion.
    pub fn live_render_complete(&self) -> bool {
        self.live_render_complete
    }

    /// Returns `true` when `ticket` belongs to the current selection.
    pub fn is_current(&self, ticket: PreviewTicket) -> bool {
        self.ticket() == Some(ticket)
    }

    /// Selects the render path for the current state.
    ///
    /// Priority comes from the descriptor's resolved [`PreviewSource`]; an errored selection
    /// always yields [`PreviewPlan::Errored`].
    pub fn plan(&self) -> PreviewPlan {
        let Some(target) = self.target.as_ref() else {
            return PreviewPlan::Idle;
        };

        if self.has_error {
            return PreviewPlan::Errored {
                name: target.name().to_string(),
                fault: self
                    .fault
                    .clone()
                    .unwrap_or_else(|| RenderFault::failed("unknown fault")),
            };
        }

        match target.preview() {
            PreviewSource::ThreeD(key) => match self.scenes.variant(*key) {
                Some(variant) if self.live_render_complete => {
                    PreviewPlan::SceneMounted { variant }
                }
                Some(variant) => PreviewPlan::Scene { key: *key, variant },
                None => PreviewPlan::Unavailable,
            },
            PreviewSource::Live(demo) => PreviewPlan::Live(demo.clone()),
            PreviewSource::StaticMarkup(html) => PreviewPlan::StaticMarkup(html.clone()),
            PreviewSource::Unavailable => PreviewPlan::Unavailable,
        }
    }

    /// Records a contained fault for `ticket`.
    ///
    /// Returns `true` only for the first fault of the current selection; stale tickets and
    /// repeated faults change nothing.
    pub fn record_fault(&mut self, ticket: PreviewTicket, fault: RenderFault) -> bool {
        if !self.is_current(ticket) || self.has_error {
            return false;
        }
        self.has_error = true;
        self.fault = Some(fault);
        true
    }

    /// Applies an asynchronous scene signal, ignoring signals from superseded selections.
    pub fn apply_scene_event(&mut self, ticket: PreviewTicket, event: SceneEvent) -> SceneOutcome {
        if !self.is_current(ticket) {
            return SceneOutcome::Stale;
        }
        match event {
            SceneEvent::Mounted => {
                if self.has_error || self.live_render_complete {
                    return SceneOutcome::Ignored;
                }
                self.live_render_complete = true;
                SceneOutcome::Mounted
            }
            SceneEvent::Faulted(fault) => {
                if self.record_fault(ticket, fault) {
                    SceneOutcome::Faulted
                } else {
                    SceneOutcome::Ignored
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use catalog_contract::{ComponentMeta, PreviewFields};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{scene::SceneSignals, stage::resolve_stage};

    fn descriptor(id: u32, name: &str, fields: PreviewFields) -> ComponentDescriptor {
        ComponentDescriptor::authored(ComponentMeta::new(id, name, "UI"), fields)
            .expect("valid descriptor")
    }

    fn failing_demo() -> LiveDemo {
        LiveDemo::fallible(|| Err(RenderFault::failed("chart series is empty")))
    }

    fn panicking_demo() -> LiveDemo {
        LiveDemo::fallible(|| panic!("demo exploded"))
    }

    fn scenes() -> SceneTable {
        SceneTable::new([
            (DescriptorId(301), SceneVariant::SpinningCube),
            (DescriptorId(302), SceneVariant::TorusKnot),
        ])
    }

    fn markup(id: u32, html: &str) -> ComponentDescriptor {
        descriptor(
            id,
            "Markup",
            PreviewFields {
                preview_html: Some(html.to_string()),
                ..PreviewFields::default()
            },
        )
    }

    /// Selects `target`, resolves its stage, and records any contained fault.
    fn render_once(
        dispatcher: &mut PreviewDispatcher,
        target: &ComponentDescriptor,
    ) -> PreviewPlan {
        let ticket = dispatcher.select(target);
        let no_scene = None::<fn(SceneVariant) -> Result<(), RenderFault>>;
        let pass = resolve_stage(
            dispatcher.plan(),
            target.name(),
            |demo| demo.render().map(|_| ()),
            no_scene,
        );
        if let Some(fault) = pass.fault {
            dispatcher.record_fault(ticket, fault);
        }
        dispatcher.plan()
    }

    #[test]
    fn idle_until_something_is_selected() {
        let dispatcher = PreviewDispatcher::new(scenes());

        assert_eq!(dispatcher.plan(), PreviewPlan::Idle);
        assert!(dispatcher.ticket().is_none());
    }

    #[test]
    fn three_d_wins_over_live_component() {
        let mut dispatcher = PreviewDispatcher::new(scenes());
        let both = descriptor(
            301,
            "Cube",
            PreviewFields {
                is_3d: true,
                component: Some(failing_demo()),
                preview_html: None,
            },
        );

        dispatcher.select(&both);

        assert_eq!(
            dispatcher.plan(),
            PreviewPlan::Scene {
                key: SceneKey(DescriptorId(301)),
                variant: SceneVariant::SpinningCube,
            }
        );
    }

    #[test]
    fn three_d_without_scene_variant_is_unavailable() {
        let mut dispatcher = PreviewDispatcher::new(scenes());
        let orphan = descriptor(
            399,
            "Orphan scene",
            PreviewFields {
                is_3d: true,
                ..PreviewFields::default()
            },
        );

        dispatcher.select(&orphan);

        assert_eq!(dispatcher.plan(), PreviewPlan::Unavailable);
        assert!(!dispatcher.has_error());
    }

    #[test]
    fn static_markup_and_unavailable_paths() {
        let mut dispatcher = PreviewDispatcher::new(scenes());

        dispatcher.select(&markup(5, "<button>Hi</button>"));
        assert_eq!(
            dispatcher.plan(),
            PreviewPlan::StaticMarkup("<button>Hi</button>".to_string())
        );

        dispatcher.select(&descriptor(6, "Bare", PreviewFields::default()));
        assert_eq!(dispatcher.plan(), PreviewPlan::Unavailable);
    }

    #[test]
    fn failing_live_component_renders_fallback_without_propagating() {
        let mut dispatcher = PreviewDispatcher::new(scenes());
        let broken = descriptor(
            10,
            "Broken Chart",
            PreviewFields {
                component: Some(failing_demo()),
                ..PreviewFields::default()
            },
        );

        let plan = render_once(&mut dispatcher, &broken);

        assert!(dispatcher.has_error());
        assert_eq!(
            plan,
            PreviewPlan::Errored {
                name: "Broken Chart".to_string(),
                fault: RenderFault::Failed("chart series is empty".to_string()),
            }
        );
    }

    #[test]
    fn panicking_live_component_is_contained_and_siblings_keep_rendering() {
        let mut broken_preview = PreviewDispatcher::new(scenes());
        let mut sibling_preview = PreviewDispatcher::new(scenes());
        let broken = descriptor(
            11,
            "Exploding Carousel",
            PreviewFields {
                component: Some(panicking_demo()),
                ..PreviewFields::default()
            },
        );
        let sibling = markup(12, "<span>ok</span>");

        let broken_plan = render_once(&mut broken_preview, &broken);
        sibling_preview.select(&sibling);

        assert_eq!(broken_plan.token(), "errored");
        assert!(!sibling_preview.has_error());
        assert_eq!(
            sibling_preview.plan(),
            PreviewPlan::StaticMarkup("<span>ok</span>".to_string())
        );
    }

    #[test]
    fn errored_state_is_terminal_for_the_same_descriptor() {
        let mut dispatcher = PreviewDispatcher::new(scenes());
        let broken = descriptor(
            10,
            "Broken Chart",
            PreviewFields {
                component: Some(failing_demo()),
                ..PreviewFields::default()
            },
        );
        let ticket = dispatcher.select(&broken);
        assert!(dispatcher.record_fault(ticket, RenderFault::failed("first")));

        assert!(!dispatcher.record_fault(ticket, RenderFault::failed("second")));
        let again = dispatcher.select(&broken);

        assert_eq!(again, ticket);
        assert!(dispatcher.has_error());
        assert_eq!(
            dispatcher.plan(),
            PreviewPlan::Errored {
                name: "Broken Chart".to_string(),
                fault: RenderFault::Failed("first".to_string()),
            }
        );
    }

    #[test]
    fn switching_descriptor_resets_error_state() {
        let mut dispatcher = PreviewDispatcher::new(scenes());
        let broken = descriptor(
            10,
            "Broken Chart",
            PreviewFields {
                component: Some(failing_demo()),
                ..PreviewFields::default()
            },
        );
        render_once(&mut dispatcher, &broken);
        assert!(dispatcher.has_error());

        dispatcher.select(&markup(20, "<em>B</em>"));

        assert!(!dispatcher.has_error());
        assert_eq!(dispatcher.plan(), PreviewPlan::StaticMarkup("<em>B</em>".to_string()));
    }

    #[test]
    fn mounted_scene_short_circuits_until_descriptor_changes() {
        let mut dispatcher = PreviewDispatcher::new(scenes());
        let cube = descriptor(
            301,
            "Cube",
            PreviewFields {
                is_3d: true,
                ..PreviewFields::default()
            },
        );
        let knot = descriptor(
            302,
            "Knot",
            PreviewFields {
                is_3d: true,
                ..PreviewFields::default()
            },
        );

        let ticket = dispatcher.select(&cube);
        assert_eq!(
            dispatcher.apply_scene_event(ticket, SceneEvent::Mounted),
            SceneOutcome::Mounted
        );
        dispatcher.select(&cube);
        assert_eq!(
            dispatcher.plan(),
            PreviewPlan::SceneMounted {
                variant: SceneVariant::SpinningCube
            }
        );
        assert_eq!(
            dispatcher.apply_scene_event(ticket, SceneEvent::Mounted),
            SceneOutcome::Ignored
        );

        dispatcher.select(&knot);
        assert!(!dispatcher.live_render_complete());
        assert_eq!(dispatcher.plan().token(), "scene-loading");
    }

    #[test]
    fn stale_scene_signals_from_superseded_selection_are_dropped() {
        let dispatcher = Rc::new(RefCell::new(PreviewDispatcher::new(scenes())));
        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let cube = descriptor(
            301,
            "Cube",
            PreviewFields {
                is_3d: true,
                ..PreviewFields::default()
            },
        );
        let ticket = dispatcher.borrow_mut().select(&cube);
        let signals = SceneSignals::new(ticket, {
            let dispatcher = dispatcher.clone();
            let outcomes = outcomes.clone();
            move |ticket, event| {
                let outcome = dispatcher.borrow_mut().apply_scene_event(ticket, event);
                outcomes.borrow_mut().push(outcome);
            }
        });

        dispatcher.borrow_mut().select(&markup(40, "<p>next</p>"));
        signals.fault(RenderFault::SceneMount("webgl context lost".to_string()));
        signals.mounted();

        assert_eq!(*outcomes.borrow(), vec![SceneOutcome::Stale, SceneOutcome::Stale]);
        assert!(!dispatcher.borrow().has_error());
        assert!(!dispatcher.borrow().live_render_complete());
        assert_eq!(dispatcher.borrow().plan().token(), "markup");
    }

    #[test]
    fn reselecting_after_switch_away_issues_a_fresh_ticket() {
        let mut dispatcher = PreviewDispatcher::new(scenes());
        let cube = descriptor(
            301,
            "Cube",
            PreviewFields {
                is_3d: true,
                ..PreviewFields::default()
            },
        );
        let first = dispatcher.select(&cube);
        dispatcher.select(&markup(41, "<p>x</p>"));
        let second = dispatcher.select(&cube);

        assert_ne!(first, second);
        assert_eq!(
            dispatcher.apply_scene_event(first, SceneEvent::Mounted),
            SceneOutcome::Stale
        );
        let fault = RenderFault::SceneMount("shader compile".to_string());
        assert_eq!(
            dispatcher.apply_scene_event(second, SceneEvent::Faulted(fault)),
            SceneOutcome::Faulted
        );
        assert_eq!(dispatcher.plan().token(), "errored");
    }

    #[test]
    fn clear_invalidates_outstanding_tickets() {
        let mut dispatcher = PreviewDispatcher::new(scenes());
        let ticket = dispatcher.select(&markup(50, "<i>x</i>"));

        dispatcher.clear();

        assert_eq!(dispatcher.plan(), PreviewPlan::Idle);
        assert!(!dispatcher.record_fault(ticket, RenderFault::failed("late")));
    }
}
