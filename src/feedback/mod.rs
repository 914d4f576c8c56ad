//! Blocking prompts and transient notifications.

mod dialog;
mod surface;
mod toast;

pub use dialog::{DialogKind, ModalDialog, ModalDialogProps};
pub use surface::{
    PresentationSurface, Surface, SurfaceState, show_alert, show_confirm, show_toast,
};
pub use toast::{
    Severity, TOAST_REGION_ID, ToastCard, ToastCardProps, ToastRegion, ToastRegionProps,
};

/// The animation phase of a dialog or toast in the two-phase dismissal:
/// the exit animation plays first, and the node detaches once it ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The entrance animation is playing or has finished.
    #[default]
    Entering,
    /// The exit animation is playing.
    Leaving,
}

impl Phase {
    /// Returns `true` if the exit animation is playing.
    #[inline]
    pub fn is_leaving(&self) -> bool {
        self == &Phase::Leaving
    }
}
