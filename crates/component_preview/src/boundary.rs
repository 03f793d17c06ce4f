//! Fault-containment wrapper for preview render paths.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use catalog_contract::RenderFault;
use leptos::logging;

/// Runs `render` and contains any fault it raises.
///
/// Returned errors and panics both come back as `Err(RenderFault)` and are logged under
/// `label`; neither propagates to the caller. Panics are only recoverable on targets that
/// unwind; on `panic = "abort"` builds the panic hook still reports them.
pub fn isolate<T>(
    label: &str,
    render: impl FnOnce() -> Result<T, RenderFault>,
) -> Result<T, RenderFault> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(render))
        .unwrap_or_else(|payload| Err(RenderFault::Panicked(panic_message(payload.as_ref()))));

    if let Err(fault) = &outcome {
        logging::error!("preview `{label}` could not render: {fault}");
    }
    outcome
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn successful_render_passes_through() {
        assert_eq!(isolate("ok", || Ok::<_, RenderFault>(42)), Ok(42));
    }

    #[test]
    fn returned_fault_is_contained() {
        let outcome = isolate("broken", || Err::<(), _>(RenderFault::failed("missing data")));

        assert_eq!(outcome, Err(RenderFault::Failed("missing data".to_string())));
    }

    #[test]
    fn panic_is_caught_and_converted() {
        let outcome = isolate("panicky", || -> Result<(), RenderFault> { panic!("boom") });

        assert_eq!(outcome, Err(RenderFault::Panicked("boom".to_string())));
    }

    #[test]
    fn formatted_panic_message_is_preserved() {
        let index = 7;
        let outcome = isolate("panicky", || -> Result<(), RenderFault> {
            panic!("series index {index} out of range")
        });

        assert_eq!(
            outcome,
            Err(RenderFault::Panicked("series index 7 out of range".to_string()))
        );
    }
}
