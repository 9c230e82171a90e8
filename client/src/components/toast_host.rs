//! Fixed-position stack rendering the app-wide toast context.
//!
//! Finished toasts (success/error) dismiss themselves after a few seconds;
//! loading toasts stay until resolved or closed.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| (toast.id, toast.kind == ToastKind::Loading)
                children=move |toast: Toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;
    let class = match toast.kind {
        ToastKind::Loading => "toast toast--loading",
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };

    #[cfg(feature = "hydrate")]
    {
        if toast.kind != ToastKind::Loading {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
                toasts.update(|t| t.dismiss(id));
            });
        }
    }

    view! {
        <div class=class>
            <span class="toast__message">{toast.message}</span>
            <button
                class="toast__close"
                on:click=move |_| toasts.update(|t| t.dismiss(id))
                aria-label="Dismiss"
            >
                "✕"
            </button>
        </div>
    }
}
