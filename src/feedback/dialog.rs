use super::Phase;
use crate::{SharedString, class::Class, icon::SvgIcon};
use dioxus::prelude::*;
use dioxus_free_icons::icons::bs_icons::{BsExclamationTriangleFill, BsInfoCircleFill};
use std::time::Duration;

/// The default title of an informational dialog.
pub(crate) const DEFAULT_ALERT_TITLE: &str = "提示";

/// The default title of a confirmatory dialog.
pub(crate) const DEFAULT_CONFIRM_TITLE: &str = "确认执行?";

/// The acknowledgement button label of an informational dialog.
pub(crate) const ALERT_BUTTON_LABEL: &str = "知道了";

/// The cancel button label of a confirmatory dialog.
pub(crate) const CANCEL_BUTTON_LABEL: &str = "取消";

/// The confirm button label of a confirmatory dialog.
pub(crate) const CONFIRM_BUTTON_LABEL: &str = "确定";

/// The pause between triggering the exit animation and detaching the dialog.
pub(crate) const DIALOG_EXIT_DELAY: Duration = Duration::from_millis(150);

/// The mode of a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// An informational dialog with a single acknowledgement button.
    Alert,
    /// A confirmatory dialog with cancel and confirm buttons.
    Confirm,
}

impl DialogKind {
    /// Returns the title used when the caller does not supply one.
    #[inline]
    pub fn default_title(&self) -> &'static str {
        match self {
            DialogKind::Alert => DEFAULT_ALERT_TITLE,
            DialogKind::Confirm => DEFAULT_CONFIRM_TITLE,
        }
    }

    /// Returns `true` if a backdrop click dismisses the dialog.
    /// Confirmatory dialogs ignore the backdrop so a stray click cannot
    /// approve a destructive action.
    #[inline]
    pub fn dismisses_on_backdrop(&self) -> bool {
        matches!(self, DialogKind::Alert)
    }
}

/// A modal card on a full-viewport backdrop.
pub fn ModalDialog(props: ModalDialogProps) -> Element {
    let kind = props.kind;
    let on_dismiss = props.on_dismiss;
    let leaving = props.phase.is_leaving();
    let card_animation = if leaving {
        "animate-modal-out"
    } else {
        "animate-modal-in"
    };
    let bubble_palette = match kind {
        DialogKind::Alert => "bg-blue-100 text-blue-600",
        DialogKind::Confirm => "bg-amber-100 text-amber-600",
    };
    rsx! {
        div {
            class: props.overlay_class,
            class: if leaving { "opacity-0" },
            onclick: move |_event| {
                if kind.dismisses_on_backdrop() {
                    on_dismiss.call(true);
                }
            },
            div {
                class: props.class,
                class: "{card_animation}",
                onclick: move |event| {
                    event.stop_propagation();
                },
                div {
                    class: "px-6 pt-8 pb-6 text-center",
                    div {
                        class: "inline-flex items-center justify-center w-12 h-12 rounded-full mb-4 {bubble_palette}",
                        if kind == DialogKind::Confirm {
                            SvgIcon { shape: BsExclamationTriangleFill, width: 24 }
                        } else {
                            SvgIcon { shape: BsInfoCircleFill, width: 24 }
                        }
                    }
                    h3 {
                        class: "text-xl font-bold text-slate-800 mb-2",
                        "{props.title}"
                    }
                    if props.trusted_markup {
                        p {
                            class: "text-slate-500 text-sm leading-relaxed",
                            dangerous_inner_html: "{props.message}",
                        }
                    } else {
                        p {
                            class: "text-slate-500 text-sm leading-relaxed",
                            "{props.message}"
                        }
                    }
                }
                div {
                    class: "px-6 py-4 bg-slate-50 flex gap-3",
                    if kind == DialogKind::Confirm {
                        button {
                            r#type: "button",
                            class: "flex-1 px-4 py-2.5 bg-white border border-slate-200 text-slate-600 font-bold rounded-xl hover:bg-slate-100 transition-colors",
                            onclick: move |event| {
                                event.stop_propagation();
                                on_dismiss.call(false);
                            },
                            { CANCEL_BUTTON_LABEL }
                        }
                        button {
                            r#type: "button",
                            class: "flex-1 px-4 py-2.5 bg-slate-800 text-white font-bold rounded-xl hover:bg-slate-900 shadow-md transition-all active:scale-95",
                            onclick: move |event| {
                                event.stop_propagation();
                                on_dismiss.call(true);
                            },
                            { CONFIRM_BUTTON_LABEL }
                        }
                    } else {
                        button {
                            r#type: "button",
                            class: "w-full px-4 py-2.5 bg-blue-600 text-white font-bold rounded-xl hover:bg-blue-700 shadow-md transition-all active:scale-95",
                            onclick: move |event| {
                                event.stop_propagation();
                                on_dismiss.call(true);
                            },
                            { ALERT_BUTTON_LABEL }
                        }
                    }
                }
            }
        }
    }
}

/// The [`ModalDialog`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ModalDialogProps {
    /// The class attribute for the dialog card.
    #[props(
        into,
        default = "bg-white rounded-3xl shadow-2xl border border-slate-100 w-full max-w-sm overflow-hidden".into()
    )]
    pub class: Class,
    /// A class to apply to the overlay backdrop.
    #[props(
        into,
        default = "fixed inset-0 z-[100] flex items-center justify-center p-4 bg-slate-900/40 backdrop-blur-sm transition-opacity duration-300".into()
    )]
    pub overlay_class: Class,
    /// The dialog mode.
    pub kind: DialogKind,
    /// The title in the dialog header.
    #[props(into)]
    pub title: SharedString,
    /// The message body.
    #[props(into)]
    pub message: SharedString,
    /// A flag to render the message as trusted markup instead of text.
    #[props(default)]
    pub trusted_markup: bool,
    /// The current phase of the two-phase dismissal.
    #[props(default)]
    pub phase: Phase,
    /// An event handler to be called with the dialog outcome.
    pub on_dismiss: EventHandler<bool>,
}
