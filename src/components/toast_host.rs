//! Renders the toast queue and schedules auto-dismissal.
//!
//! DESIGN
//! ======
//! Pages push into `ToastsState` and never touch timing; this host spawns a
//! dismiss timer per toast as it appears. SSR renders whatever is queued
//! without timers.

use leptos::prelude::*;

use crate::state::toasts::ToastsState;

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const TOAST_LIFETIME_SECS: u64 = 5;

/// Fixed-position stack of transient notifications.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    #[cfg(feature = "hydrate")]
    {
        let scheduled = RwSignal::new(0_u64);
        Effect::new(move || {
            for toast in toasts.get().toasts {
                if toast.id < scheduled.get_untracked() {
                    continue;
                }
                scheduled.set(toast.id + 1);
                let id = toast.id;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(
                        TOAST_LIFETIME_SECS,
                    ))
                    .await;
                    toasts.update(|t| t.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class="toast" class:toast--error=toast.is_error>
                                <span class="toast__title">{toast.title}</span>
                                <Show when={
                                    let detail = toast.detail.clone();
                                    move || !detail.is_empty()
                                }>
                                    <pre class="toast__detail">{toast.detail.clone()}</pre>
                                </Show>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                    aria-label="Dismiss"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
