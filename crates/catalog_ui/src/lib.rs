//! Shared UI primitives for the component catalog site and its demo widgets.
//!
//! Primitives emit a stable `data-kit-*` DOM contract (`data-kit-kind`, `data-kit-variant`,
//! `data-kit-tone`, ...) that the site stylesheet targets. Demo widgets and catalog chrome
//! compose these instead of emitting ad hoc markup, so no widget needs to inject styles of its
//! own.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod controls;
mod layout;
mod navigation;
mod surfaces;
mod text;
mod tokens;

pub use controls::{Button, ProgressBar, Switch, TextField};
pub use layout::{Cluster, Grid, SplitLayout, Stack};
pub use navigation::{NavItem, NavList};
pub use surfaces::{Card, EmptyState, PaneHeader, Panel, PreviewFrame, Surface};
pub use text::{Badge, CodeBlock, Heading, Text};
pub use tokens::{
    ButtonSize, ButtonVariant, Elevation, FieldVariant, LayoutAlign, LayoutGap, LayoutJustify,
    LayoutPadding, SurfaceVariant, TextRole, TextTone,
};

/// Convenience imports for crates composing the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, CodeBlock, Elevation, EmptyState,
        FieldVariant, Grid, Heading, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, NavItem,
        NavList, PaneHeader, Panel, PreviewFrame, ProgressBar, SplitLayout, Stack, Surface,
        SurfaceVariant, Switch, Text, TextField, TextRole, TextTone,
    };
}
