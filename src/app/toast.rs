//! Fire-and-forget toast notifications.
//!
//! A signal-backed queue installed at the app root; any component can push a
//! success or error message. Toasts are dismissible and expire on their own
//! in the browser.

use dioxus::prelude::*;

const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "toast toast-success",
            Severity::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Global toast queue shared via context.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), Severity::Error);
    }

    fn push(&self, message: String, severity: Severity) {
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast {
            id,
            message,
            severity,
        });

        // Auto-expire in the browser; on other targets toasts stay until
        // dismissed
        #[cfg(target_arch = "wasm32")]
        {
            let ctx = *self;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
                ctx.dismiss(id);
            });
        }
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}

/// Install the toast context - call once at the app root.
pub fn use_toast_provider() {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);

    use_context_provider(|| ToastContext { toasts, next_id });
}

/// Get the toast context - use in any component.
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}

/// Renders the active toasts in a fixed overlay. Mounted once, in the
/// layout.
#[component]
pub fn Toaster() -> Element {
    let ctx = use_toast();
    let toasts = (ctx.toasts)();

    rsx! {
        div { class: "toaster",
            for toast in toasts {
                div { key: "{toast.id}", class: toast.severity.css_class(),
                    span { "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| ctx.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
