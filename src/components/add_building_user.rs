//! Collapsible widget for granting a user access to a building.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::toasts::ToastsState;

/// Expandable "Add User" section shown on an open building.
///
/// Only building admins may submit; non-admins see the controls disabled
/// with an explanatory note. Both fields are required before the grant is
/// sent to `POST /buildings/user`.
#[component]
pub fn AddBuildingUser(building_id: i64, admin: bool) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let active = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    // None until the user picks a privilege level.
    let admin_choice = RwSignal::new(Option::<bool>::None);
    let field_error = RwSignal::new(false);

    let on_choice = move |ev: leptos::ev::Event| {
        admin_choice.set(match event_target_value(&ev).as_str() {
            "admin" => Some(true),
            "none" => Some(false),
            _ => None,
        });
    };

    let submit = move |_| {
        let (Some(grant_admin), false) =
            (admin_choice.get_untracked(), email.get_untracked().is_empty())
        else {
            field_error.set(true);
            return;
        };
        field_error.set(false);
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let payload = crate::net::types::AddBuildingUserPayload {
                building_id,
                new_user_email: email.get_untracked(),
                admin: grant_admin,
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::add_building_user(&token, &payload).await {
                    Ok(()) => {
                        email.set(String::new());
                        admin_choice.set(None);
                        toasts.update(|t| {
                            t.success("User added successfully!");
                        });
                    }
                    Err(e) => {
                        log::error!("building user grant failed: {e}");
                        toasts.update(|t| {
                            t.error("Looks like something went wrong", &e);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, toasts, grant_admin, building_id);
        }
    };

    view! {
        <div class="add-user">
            <button class="add-user__toggle" on:click=move |_| active.update(|a| *a = !*a)>
                "Add User"
                <Show when=move || active.get() && !admin>
                    <span class="add-user__warning">"You must be an admin to add a user"</span>
                </Show>
            </button>
            <Show when=move || active.get()>
                <div class="add-user__form">
                    <label>
                        "Email:"
                        <input
                            type="email"
                            disabled=!admin
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Select:"
                        <select disabled=!admin on:change=on_choice>
                            <option value="" selected=move || admin_choice.get().is_none()>
                                "Privilege"
                            </option>
                            <option value="admin">"Admin"</option>
                            <option value="none">"None"</option>
                        </select>
                    </label>
                    <button class="btn" disabled=!admin on:click=submit>
                        "Submit"
                    </button>
                    <Show when=move || field_error.get()>
                        <p class="add-user__error">"Please fill all fields before submitting"</p>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
