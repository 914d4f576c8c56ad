use super::Phase;
use crate::{SharedString, class::Class, icon::SvgIcon};
use dioxus::prelude::*;
use dioxus_free_icons::icons::bs_icons::{BsCheckLg, BsXLg};
use std::{fmt, time::Duration};

/// The fixed identifier of the singleton toast region.
pub const TOAST_REGION_ID: &str = "hook-ui-toast-container";

/// How long a toast stays on screen before its exit animation starts.
pub(crate) const TOAST_DWELL: Duration = Duration::from_millis(3000);

/// The pause between triggering the exit animation and detaching the toast.
pub(crate) const TOAST_EXIT_DELAY: Duration = Duration::from_millis(200);

/// The severity category of a toast notification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A completed operation.
    #[default]
    Success,
    /// A failed operation.
    Error,
    /// A neutral status message.
    Info,
}

impl Severity {
    /// Returns the severity as `str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }

    /// Returns the palette classes for the icon bubble.
    pub(crate) fn bubble_palette(&self) -> &'static str {
        match self {
            Severity::Success => "text-emerald-500 bg-emerald-50",
            Severity::Error => "text-rose-500 bg-rose-50",
            Severity::Info => "text-blue-500 bg-blue-50",
        }
    }
}

impl From<&str> for Severity {
    /// Any value other than `success` and `error` maps to [`Severity::Info`].
    #[inline]
    fn from(value: &str) -> Self {
        match value {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Severity {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// The anchored region holding stacked toasts; newest entries render last.
pub fn ToastRegion(props: ToastRegionProps) -> Element {
    rsx! {
        div {
            id: TOAST_REGION_ID,
            class: props.class,
            { props.children }
        }
    }
}

/// The [`ToastRegion`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ToastRegionProps {
    /// The class attribute for the component.
    #[props(into, default = "fixed bottom-6 right-6 z-[200] space-y-3".into())]
    pub class: Class,
    /// The children to render within the component.
    children: Element,
}

/// A single auto-dismissing notification card.
pub fn ToastCard(props: ToastCardProps) -> Element {
    // Entries other than success keep the cross glyph; only the palette
    // distinguishes errors from neutral messages.
    let animation = if props.phase.is_leaving() {
        "animate-modal-out opacity-0"
    } else {
        "animate-modal-in"
    };
    let palette = props.severity.bubble_palette();
    rsx! {
        div {
            class: props.class,
            class: "{animation}",
            div {
                class: "flex-shrink-0 w-8 h-8 rounded-full flex items-center justify-center {palette}",
                if props.severity == Severity::Success {
                    SvgIcon { shape: BsCheckLg, width: 20 }
                } else {
                    SvgIcon { shape: BsXLg, width: 20 }
                }
            }
            span {
                class: "text-sm font-bold text-slate-700",
                "{props.message}"
            }
        }
    }
}

/// The [`ToastCard`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ToastCardProps {
    /// The class attribute for the component.
    #[props(
        into,
        default = "bg-white border border-slate-200 shadow-2xl rounded-2xl px-6 py-4 flex items-center gap-3 min-w-[240px]".into()
    )]
    pub class: Class,
    /// The message text.
    #[props(into)]
    pub message: SharedString,
    /// The severity category.
    #[props(default)]
    pub severity: Severity,
    /// The current phase of the two-phase dismissal.
    #[props(default)]
    pub phase: Phase,
}

#[cfg(test)]
mod tests {
    use super::Severity;

    #[test]
    fn it_parses_severities() {
        assert_eq!(Severity::from("success"), Severity::Success);
        assert_eq!(Severity::from("error"), Severity::Error);
        assert_eq!(Severity::from("warning"), Severity::Info);
        assert_eq!(Severity::from(""), Severity::Info);
        assert_eq!(Severity::default(), Severity::Success);
    }

    #[test]
    fn it_maps_palettes_by_severity() {
        assert_eq!(
            Severity::Success.bubble_palette(),
            "text-emerald-500 bg-emerald-50",
        );
        assert_eq!(Severity::Error.bubble_palette(), "text-rose-500 bg-rose-50");
        assert_eq!(Severity::Info.bubble_palette(), "text-blue-500 bg-blue-50");
    }
}
