//! Preview dispatch and fault isolation for catalog entries.
//!
//! [`PreviewDispatcher`] is the per-preview state machine: it tracks the selected descriptor,
//! the `has_error` / `live_render_complete` flags, and a generation counter that invalidates
//! asynchronous 3D mount signals from superseded selections. [`isolate`] is the boundary every
//! render path runs inside. [`ComponentPreview`] wires both into a Leptos view.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod boundary;
mod dispatcher;
mod scene;
mod stage;
mod view;

pub use boundary::isolate;
pub use dispatcher::{PreviewDispatcher, PreviewPlan, PreviewTicket, SceneOutcome};
pub use scene::{SceneEvent, SceneRenderer, SceneSignals, SceneTable};
pub use view::{use_preview_host, ComponentPreview, PreviewHost, PreviewProvider};
