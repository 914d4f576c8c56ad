//! Re-exports of components and common types.

pub use crate::{
    SharedString,
    class::Class,
    feedback::{
        DialogKind, ModalDialog, Phase, PresentationSurface, Severity, Surface, SurfaceState,
        TOAST_REGION_ID, ToastCard, ToastRegion, show_alert, show_confirm, show_toast,
    },
    icon::SvgIcon,
};
