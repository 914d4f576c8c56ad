//! Keyframe styles injected for dialog and toast animations.

use std::sync::atomic::{AtomicBool, Ordering};

/// The `modal-in`/`modal-out` keyframes and their class bindings.
pub const ANIMATION_CSS: &str = r#"
@keyframes modal-in {
    from { opacity: 0; transform: scale(0.95) translateY(10px); }
    to { opacity: 1; transform: scale(1) translateY(0); }
}
@keyframes modal-out {
    from { opacity: 1; transform: scale(1) translateY(0); }
    to { opacity: 0; transform: scale(0.95) translateY(10px); }
}
.animate-modal-in { animation: modal-in 0.2s ease-out forwards; }
.animate-modal-out { animation: modal-out 0.15s ease-in forwards; }
"#;

static INJECTED: AtomicBool = AtomicBool::new(false);

/// Hands out the animation CSS on the first call and `None` afterwards,
/// so the styles land in the document exactly once per process.
pub(crate) fn take_animation_css() -> Option<&'static str> {
    (!INJECTED.swap(true, Ordering::Relaxed)).then_some(ANIMATION_CSS)
}
