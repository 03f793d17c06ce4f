//! Contract with the opaque 3D scene collaborator.

use std::{collections::HashMap, fmt, rc::Rc};

use catalog_contract::{DescriptorId, RenderFault, SceneKey, SceneVariant};
use leptos::View;

use crate::dispatcher::PreviewTicket;

/// Fixed mapping from descriptor id to named scene variant.
#[derive(Debug, Clone, Default)]
pub struct SceneTable {
    variants: Rc<HashMap<SceneKey, SceneVariant>>,
}

impl SceneTable {
    /// Builds a table from `(id, variant)` pairs. Later pairs win on repeated ids.
    pub fn new(entries: impl IntoIterator<Item = (DescriptorId, SceneVariant)>) -> Self {
        Self {
            variants: Rc::new(
                entries
                    .into_iter()
                    .map(|(id, variant)| (SceneKey(id), variant))
                    .collect(),
            ),
        }
    }

    /// Variant registered for `key`, if any.
    pub fn variant(&self, key: SceneKey) -> Option<SceneVariant> {
        self.variants.get(&key).copied()
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` when no variants are registered.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Asynchronous signal raised by a mounting scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneEvent {
    /// The scene finished mounting.
    Mounted,
    /// The scene failed after the synchronous mount call returned.
    Faulted(RenderFault),
}

pub(crate) type SceneSink = dyn Fn(PreviewTicket, SceneEvent);

/// Mount-complete and fault callbacks handed to a [`SceneRenderer`].
///
/// Every signal carries the ticket of the selection that started the mount, so the preview can
/// drop signals that arrive after the user has moved on.
#[derive(Clone)]
pub struct SceneSignals {
    ticket: PreviewTicket,
    sink: Rc<SceneSink>,
}

impl SceneSignals {
    /// Creates signals for `ticket` that forward into `sink`.
    pub fn new(ticket: PreviewTicket, sink: impl Fn(PreviewTicket, SceneEvent) + 'static) -> Self {
        Self {
            ticket,
            sink: Rc::new(sink),
        }
    }

    pub(crate) fn from_shared(ticket: PreviewTicket, sink: Rc<SceneSink>) -> Self {
        Self { ticket, sink }
    }

    /// Selection this mount belongs to.
    pub fn ticket(&self) -> PreviewTicket {
        self.ticket
    }

    /// Reports that the scene has mounted.
    pub fn mounted(&self) {
        (self.sink)(self.ticket, SceneEvent::Mounted);
    }

    /// Reports an asynchronous mount failure.
    pub fn fault(&self, fault: RenderFault) {
        (self.sink)(self.ticket, SceneEvent::Faulted(fault));
    }
}

impl fmt::Debug for SceneSignals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneSignals")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

/// The 3D rendering collaborator.
///
/// `mount` returns the scene's host view synchronously; a synchronous `Err` is treated like any
/// other render fault. Completion or later failure is reported through `signals`.
pub trait SceneRenderer {
    /// Starts mounting `variant`.
    fn mount(&self, variant: SceneVariant, signals: SceneSignals) -> Result<View, RenderFault>;
}
