use super::{
    Phase,
    dialog::{DIALOG_EXIT_DELAY, DialogKind, ModalDialog},
    toast::{Severity, TOAST_DWELL, TOAST_EXIT_DELAY, ToastCard, ToastRegion},
};
use crate::{SharedString, style};
use dioxus::prelude::*;
use futures::channel::oneshot;
use std::future::Future;
use uuid::Uuid;

/// A blocking prompt tracked by the surface.
struct DialogEntry {
    /// The entry identifier.
    id: Uuid,
    /// The dialog mode.
    kind: DialogKind,
    /// The title in the dialog header.
    title: SharedString,
    /// The message body.
    message: SharedString,
    /// A flag to render the message as trusted markup.
    trusted_markup: bool,
    /// The current phase of the two-phase dismissal.
    phase: Phase,
    /// The outcome recorded by the terminal user action.
    outcome: bool,
    /// The channel settling the caller's pending result.
    responder: Option<oneshot::Sender<bool>>,
}

/// A transient notification tracked by the surface.
struct ToastEntry {
    /// The entry identifier.
    id: Uuid,
    /// The message text.
    message: SharedString,
    /// The severity category.
    severity: Severity,
    /// The current phase of the two-phase dismissal.
    phase: Phase,
}

/// The live set of dialogs and toasts managed by the presentation surface.
#[derive(Default)]
pub struct SurfaceState {
    /// Open dialogs in call order; later entries render on top.
    dialogs: Vec<DialogEntry>,
    /// Toasts in call order; the newest renders last.
    toasts: Vec<ToastEntry>,
    /// Whether the toast region has been mounted.
    toast_region_mounted: bool,
}

impl SurfaceState {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of open dialogs.
    #[inline]
    pub fn dialog_count(&self) -> usize {
        self.dialogs.len()
    }

    /// Returns the number of visible toasts.
    #[inline]
    pub fn toast_count(&self) -> usize {
        self.toasts.len()
    }

    /// Returns `true` if the toast region has been mounted.
    #[inline]
    pub fn is_toast_region_mounted(&self) -> bool {
        self.toast_region_mounted
    }

    /// Opens a dialog and returns its identifier with the pending result.
    fn open_dialog(
        &mut self,
        kind: DialogKind,
        message: SharedString,
        title: Option<SharedString>,
        trusted_markup: bool,
    ) -> (Uuid, oneshot::Receiver<bool>) {
        let (responder, receiver) = oneshot::channel();
        let id = Uuid::now_v7();
        let title = title.unwrap_or_else(|| kind.default_title().into());
        self.dialogs.push(DialogEntry {
            id,
            kind,
            title,
            message,
            trusted_markup,
            phase: Phase::Entering,
            outcome: false,
            responder: Some(responder),
        });
        (id, receiver)
    }

    /// Marks a dialog as leaving and records its outcome.
    /// Returns `false` if the dialog is unknown or already leaving,
    /// so a second terminal action cannot schedule a second detach.
    fn begin_dialog_exit(&mut self, id: Uuid, outcome: bool) -> bool {
        let Some(entry) = self.dialogs.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        if entry.phase.is_leaving() {
            return false;
        }
        entry.phase = Phase::Leaving;
        entry.outcome = outcome;
        true
    }

    /// Detaches a dialog and settles its pending result.
    fn finish_dialog_exit(&mut self, id: Uuid) {
        if let Some(index) = self.dialogs.iter().position(|entry| entry.id == id) {
            let mut entry = self.dialogs.remove(index);
            if let Some(responder) = entry.responder.take() {
                let _ = responder.send(entry.outcome);
            }
        }
    }

    /// Appends a toast and mounts the region on the first call.
    fn push_toast(&mut self, message: SharedString, severity: Severity) -> Uuid {
        let id = Uuid::now_v7();
        self.toast_region_mounted = true;
        self.toasts.push(ToastEntry {
            id,
            message,
            severity,
            phase: Phase::Entering,
        });
        id
    }

    /// Marks a toast as leaving.
    /// Returns `false` if the toast is unknown or already leaving.
    fn begin_toast_exit(&mut self, id: Uuid) -> bool {
        let Some(entry) = self.toasts.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        if entry.phase.is_leaving() {
            return false;
        }
        entry.phase = Phase::Leaving;
        true
    }

    /// Detaches a toast; a no-op when the entry is already gone.
    fn remove_toast(&mut self, id: Uuid) {
        self.toasts.retain(|entry| entry.id != id);
    }
}

static SURFACE: GlobalSignal<SurfaceState> = Signal::global(SurfaceState::new);

/// The presentation surface service raising dialogs and toasts.
///
/// All capabilities must be invoked from within a running Dioxus
/// application with a [`PresentationSurface`] mounted.
pub struct Surface;

impl Surface {
    /// Opens an informational dialog with a single acknowledgement button.
    ///
    /// The returned future resolves to `true` once the dialog is dismissed,
    /// by the button or by a backdrop click. Falls back to the title
    /// `提示` when none is supplied.
    pub fn alert(
        message: impl Into<SharedString>,
        title: Option<SharedString>,
    ) -> impl Future<Output = bool> {
        Self::open(DialogKind::Alert, message.into(), title, false)
    }

    /// Same as [`alert`](Self::alert), but renders the message as trusted
    /// markup. The caller is responsible for sanitizing the content.
    pub fn alert_html(
        message: impl Into<SharedString>,
        title: Option<SharedString>,
    ) -> impl Future<Output = bool> {
        Self::open(DialogKind::Alert, message.into(), title, true)
    }

    /// Opens a confirmatory dialog with cancel and confirm buttons.
    ///
    /// The returned future resolves to `true` on confirm and `false` on
    /// cancel; backdrop clicks are ignored. Falls back to the title
    /// `确认执行?` when none is supplied. The future never settles if the
    /// user never interacts.
    pub fn confirm(
        message: impl Into<SharedString>,
        title: Option<SharedString>,
    ) -> impl Future<Output = bool> {
        Self::open(DialogKind::Confirm, message.into(), title, false)
    }

    /// Same as [`confirm`](Self::confirm), but renders the message as
    /// trusted markup. The caller is responsible for sanitizing the content.
    pub fn confirm_html(
        message: impl Into<SharedString>,
        title: Option<SharedString>,
    ) -> impl Future<Output = bool> {
        Self::open(DialogKind::Confirm, message.into(), title, true)
    }

    /// Shows a toast notification which removes itself after the dwell time.
    ///
    /// Toasts stack in call order inside the singleton region anchored at
    /// the bottom right of the viewport.
    pub fn toast(message: impl Into<SharedString>, severity: impl Into<Severity>) {
        let severity = severity.into();
        let id = SURFACE.write().push_toast(message.into(), severity);
        tracing::debug!(%id, severity = severity.as_str(), "toast shown");
        spawn(async move {
            tokio::time::sleep(TOAST_DWELL).await;
            if SURFACE.write().begin_toast_exit(id) {
                tracing::debug!(%id, "toast expired");
                tokio::time::sleep(TOAST_EXIT_DELAY).await;
                SURFACE.write().remove_toast(id);
            }
        });
    }

    fn open(
        kind: DialogKind,
        message: SharedString,
        title: Option<SharedString>,
        trusted_markup: bool,
    ) -> impl Future<Output = bool> {
        let (id, receiver) = SURFACE
            .write()
            .open_dialog(kind, message, title, trusted_markup);
        tracing::debug!(%id, ?kind, "dialog opened");
        async move {
            // A torn-down surface settles to the mode's safe outcome.
            receiver.await.unwrap_or(kind == DialogKind::Alert)
        }
    }

    /// Starts the two-phase dismissal of a dialog.
    fn dismiss_dialog(id: Uuid, outcome: bool) {
        if SURFACE.write().begin_dialog_exit(id, outcome) {
            tracing::debug!(%id, outcome, "dialog dismissed");
            spawn(async move {
                tokio::time::sleep(DIALOG_EXIT_DELAY).await;
                SURFACE.write().finish_dialog_exit(id);
            });
        }
    }
}

/// Opens an informational dialog. Forwards to [`Surface::alert`].
#[inline]
pub fn show_alert(
    message: impl Into<SharedString>,
    title: Option<SharedString>,
) -> impl Future<Output = bool> {
    Surface::alert(message, title)
}

/// Opens a confirmatory dialog. Forwards to [`Surface::confirm`].
#[inline]
pub fn show_confirm(
    message: impl Into<SharedString>,
    title: Option<SharedString>,
) -> impl Future<Output = bool> {
    Surface::confirm(message, title)
}

/// Shows a toast notification. Forwards to [`Surface::toast`].
#[inline]
pub fn show_toast(message: impl Into<SharedString>, severity: impl Into<Severity>) {
    Surface::toast(message, severity)
}

/// The root component hosting every dialog overlay and the toast region.
///
/// Mount it once near the top of the application; the first mount also
/// injects the animation keyframes into the document.
pub fn PresentationSurface() -> Element {
    let animation_css = use_hook(style::take_animation_css);
    let state = SURFACE.read();
    let dialogs = state
        .dialogs
        .iter()
        .map(|entry| {
            let id = entry.id;
            rsx! {
                ModalDialog {
                    key: "{id}",
                    kind: entry.kind,
                    title: entry.title.clone(),
                    message: entry.message.clone(),
                    trusted_markup: entry.trusted_markup,
                    phase: entry.phase,
                    on_dismiss: move |outcome| Surface::dismiss_dialog(id, outcome),
                }
            }
        })
        .collect::<Vec<_>>();
    rsx! {
        if let Some(css) = animation_css {
            style { {css} }
        }
        { dialogs.into_iter() }
        if state.toast_region_mounted {
            ToastRegion {
                for entry in state.toasts.iter() {
                    ToastCard {
                        key: "{entry.id}",
                        message: entry.message.clone(),
                        severity: entry.severity,
                        phase: entry.phase,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DialogKind, Phase, Severity, SurfaceState};
    use futures::FutureExt;

    #[test]
    fn it_resolves_alert_on_acknowledgement() {
        let mut state = SurfaceState::new();
        let (id, receiver) = state.open_dialog(DialogKind::Alert, "saved".into(), None, false);
        assert!(state.begin_dialog_exit(id, true));
        state.finish_dialog_exit(id);
        assert_eq!(receiver.now_or_never(), Some(Ok(true)));
        assert_eq!(state.dialog_count(), 0);
    }

    #[test]
    fn it_resolves_alert_on_backdrop_click() {
        let mut state = SurfaceState::new();
        let (id, receiver) = state.open_dialog(DialogKind::Alert, "saved".into(), None, false);
        assert!(DialogKind::Alert.dismisses_on_backdrop());
        assert!(state.begin_dialog_exit(id, true));
        state.finish_dialog_exit(id);
        assert_eq!(receiver.now_or_never(), Some(Ok(true)));
    }

    #[test]
    fn it_resolves_confirm_by_chosen_button() {
        let mut state = SurfaceState::new();
        let (id, receiver) =
            state.open_dialog(DialogKind::Confirm, "delete?".into(), None, false);
        assert!(state.begin_dialog_exit(id, false));
        state.finish_dialog_exit(id);
        assert_eq!(receiver.now_or_never(), Some(Ok(false)));

        let (id, receiver) =
            state.open_dialog(DialogKind::Confirm, "delete?".into(), None, false);
        assert!(state.begin_dialog_exit(id, true));
        state.finish_dialog_exit(id);
        assert_eq!(receiver.now_or_never(), Some(Ok(true)));
    }

    #[test]
    fn it_keeps_confirm_pending_without_interaction() {
        let mut state = SurfaceState::new();
        let (_id, mut receiver) =
            state.open_dialog(DialogKind::Confirm, "delete?".into(), None, false);
        assert_eq!(receiver.try_recv(), Ok(None));
        assert_eq!(state.dialog_count(), 1);
    }

    #[test]
    fn it_applies_default_titles() {
        let mut state = SurfaceState::new();
        state.open_dialog(DialogKind::Alert, "saved".into(), None, false);
        state.open_dialog(DialogKind::Confirm, "delete?".into(), None, false);
        state.open_dialog(
            DialogKind::Confirm,
            "delete?".into(),
            Some("Danger".into()),
            false,
        );
        assert_eq!(state.dialogs[0].title, "提示");
        assert_eq!(state.dialogs[1].title, "确认执行?");
        assert_eq!(state.dialogs[2].title, "Danger");
    }

    #[test]
    fn it_guards_against_double_dismissal() {
        let mut state = SurfaceState::new();
        let (id, receiver) = state.open_dialog(DialogKind::Alert, "saved".into(), None, false);
        assert!(state.begin_dialog_exit(id, true));
        assert!(!state.begin_dialog_exit(id, true));
        state.finish_dialog_exit(id);
        state.finish_dialog_exit(id);
        assert_eq!(receiver.now_or_never(), Some(Ok(true)));
    }

    #[test]
    fn it_stacks_concurrent_dialogs() {
        let mut state = SurfaceState::new();
        let (first, _rx1) = state.open_dialog(DialogKind::Alert, "one".into(), None, false);
        let (_second, _rx2) =
            state.open_dialog(DialogKind::Confirm, "two".into(), None, false);
        assert_eq!(state.dialog_count(), 2);
        assert_eq!(state.dialogs[0].id, first);
    }

    #[test]
    fn it_stacks_toasts_in_call_order() {
        let mut state = SurfaceState::new();
        state.push_toast("Saved".into(), Severity::Success);
        state.push_toast("Failed".into(), Severity::Error);
        assert_eq!(state.toast_count(), 2);
        assert_eq!(state.toasts[0].message, "Saved");
        assert_eq!(state.toasts[0].severity, Severity::Success);
        assert_eq!(state.toasts[1].message, "Failed");
        assert_eq!(state.toasts[1].severity, Severity::Error);
    }

    #[test]
    fn it_mounts_the_toast_region_once() {
        let mut state = SurfaceState::new();
        assert!(!state.is_toast_region_mounted());
        state.push_toast("Saved".into(), Severity::Success);
        assert!(state.is_toast_region_mounted());
        state.push_toast("Saved again".into(), Severity::Success);
        assert!(state.is_toast_region_mounted());
    }

    #[test]
    fn it_tolerates_removing_a_missing_toast() {
        let mut state = SurfaceState::new();
        let id = state.push_toast("Saved".into(), Severity::Success);
        state.remove_toast(id);
        state.remove_toast(id);
        assert!(!state.begin_toast_exit(id));
        assert_eq!(state.toast_count(), 0);
    }

    #[test]
    fn it_runs_the_toast_exit_in_two_phases() {
        let mut state = SurfaceState::new();
        let id = state.push_toast("Saved".into(), Severity::Success);
        assert!(state.begin_toast_exit(id));
        assert_eq!(state.toasts[0].phase, Phase::Leaving);
        assert!(!state.begin_toast_exit(id));
        state.remove_toast(id);
        assert_eq!(state.toast_count(), 0);
    }

    #[test]
    fn it_settles_confirm_end_to_end() {
        let mut state = SurfaceState::new();
        let (id, receiver) = state.open_dialog(
            DialogKind::Confirm,
            "Delete hook?".into(),
            Some("Danger".into()),
            false,
        );
        assert_eq!(state.dialogs[0].title, "Danger");
        assert!(state.begin_dialog_exit(id, true));
        state.finish_dialog_exit(id);
        assert_eq!(receiver.now_or_never(), Some(Ok(true)));
        assert_eq!(state.dialog_count(), 0);
    }
}
