//! Dashboard page: per-building expiry and par reports with CSV downloads.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::buildings::BuildingsState;
use crate::state::dashboard::DashboardState;
use crate::state::toasts::ToastsState;
use crate::util::dates;

/// Which report card an empty-state message belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReportKind {
    BelowPar,
    Expiry,
}

/// Empty-state copy for a report card.
fn empty_report_message(building_selected: bool, kind: ReportKind) -> &'static str {
    if !building_selected {
        return "Please select a building to continue.";
    }
    match kind {
        ReportKind::BelowPar => "You have no items reaching par.",
        ReportKind::Expiry => "You have no expiring items.",
    }
}

#[cfg(feature = "hydrate")]
fn load_reports(
    auth: RwSignal<AuthState>,
    dashboard: RwSignal<DashboardState>,
    toasts: RwSignal<ToastsState>,
    building_id: i64,
) {
    let Some(token) = auth.get_untracked().token else {
        return;
    };
    dashboard.update(|d| d.loading = true);
    leptos::task::spawn_local(async move {
        let expiry = crate::net::api::fetch_expiry_report(&token, building_id).await;
        let below_par = crate::net::api::fetch_below_par_report(&token, building_id).await;
        dashboard.update(|d| d.loading = false);
        match expiry {
            Ok(report) => dashboard.update(|d| d.set_expiry(report)),
            Err(e) => {
                log::error!("expiry report failed: {e}");
                toasts.update(|t| {
                    t.error("Error getting expiry report", &e);
                });
            }
        }
        match below_par {
            Ok(report) => dashboard.update(|d| d.set_below_par(report)),
            Err(e) => {
                log::error!("below-par report failed: {e}");
                toasts.update(|t| {
                    t.error("Error getting par report", &e);
                });
            }
        }
    });
}

/// Aggregate stock-health view for one selected building.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let buildings = expect_context::<RwSignal<BuildingsState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if auth.get().is_authenticated() && buildings.get_untracked().items.is_empty() {
            super::load_buildings(auth, buildings, toasts);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, toasts);

    let on_building = move |ev: leptos::ev::Event| {
        let Ok(id) = event_target_value(&ev).parse::<i64>() else {
            return;
        };
        dashboard.update(|d| d.select_building(id));
        #[cfg(feature = "hydrate")]
        load_reports(auth, dashboard, toasts, id);
    };

    let current_building = move || {
        let id = dashboard.get().building_id?;
        buildings.get().items.into_iter().find(|b| b.id == id)
    };

    let download_expiry = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let csv = crate::util::csv_export::expiring_items_csv(&dashboard.get().expiry.items);
            crate::util::download::download_text_file(
                crate::util::csv_export::EXPIRY_FILENAME,
                "text/csv",
                &csv,
            );
        }
    };

    let download_below_par = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let csv = crate::util::csv_export::below_par_csv(&dashboard.get().below_par.items);
            crate::util::download::download_text_file(
                crate::util::csv_export::BELOW_PAR_FILENAME,
                "text/csv",
                &csv,
            );
        }
    };

    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__cards">
                <section class="card">
                    <header class="card__header">
                        <h3>"Short Expiry Items"</h3>
                    </header>
                    <div class="card__metric">{move || dashboard.get().expiry.count}</div>
                    <p class="card__hint">"Expiry less than 6 months from today"</p>
                </section>
                <section class="card">
                    <header class="card__header">
                        <h3>"Near Par Items"</h3>
                    </header>
                    <div class="card__metric">{move || dashboard.get().below_par.count}</div>
                    <p class="card__hint">"Below 150% par level"</p>
                </section>
                <section class="card card--wide">
                    <header class="card__header">
                        <h3>"Current Building"</h3>
                        <select on:change=on_building>
                            <option value="" selected=move || dashboard.get().building_id.is_none()>
                                "Select Building"
                            </option>
                            {move || {
                                buildings
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|b| {
                                        view! { <option value=b.id.to_string()>{b.name}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </header>
                    {move || {
                        current_building()
                            .map_or_else(
                                || {
                                    view! {
                                        <p class="card__empty">"You do not have any active buildings"</p>
                                    }
                                        .into_any()
                                },
                                |b| {
                                    view! {
                                        <div class="card__building">
                                            <img src=b.building_img_url alt="building preview"/>
                                            <h4>"Building Name: " {b.name}</h4>
                                        </div>
                                    }
                                        .into_any()
                                },
                            )
                    }}
                </section>
            </div>
            <div class="dashboard-page__reports">
                <section class="card">
                    <header class="card__header">
                        <div>
                            <h3>"Items to Reorder"</h3>
                            <p class="card__hint">"Items with less than 150% par level"</p>
                        </div>
                        <button class="btn" on:click=download_below_par>
                            "Download"
                        </button>
                    </header>
                    {move || {
                        let state = dashboard.get();
                        let items = state.below_par.items;
                        if items.is_empty() {
                            let message = empty_report_message(
                                state.building_id.is_some(),
                                ReportKind::BelowPar,
                            );
                            view! { <p class="card__empty">{message}</p> }.into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="report-row">
                                            <div class="report-row__main">
                                                <p class="report-row__name">{item.item_name}</p>
                                                <p class="report-row__serial">{item.serial_num}</p>
                                                <span class="badge">"Par: " {item.par_level}</span>
                                            </div>
                                            <span class="badge badge--wide">
                                                {item.item_total} " left"
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </section>
                <section class="card">
                    <header class="card__header">
                        <div>
                            <h3>"Short Expiry"</h3>
                            <p class="card__hint">"Items expiring in 6 months"</p>
                        </div>
                        <button class="btn" on:click=download_expiry>
                            "Download"
                        </button>
                    </header>
                    {move || {
                        let state = dashboard.get();
                        let items = state.expiry.items;
                        if items.is_empty() {
                            let message = empty_report_message(
                                state.building_id.is_some(),
                                ReportKind::Expiry,
                            );
                            view! { <p class="card__empty">{message}</p> }.into_any()
                        } else {
                            let today = dates::today();
                            items
                                .into_iter()
                                .map(|item| {
                                    let days = dates::parse_expiry(&item.expiry_date)
                                        .map_or(0, |d| dates::days_till_expiry(d, today));
                                    let expiry =
                                        dates::display_expiry(Some(&item.expiry_date));
                                    view! {
                                        <div class="report-row">
                                            <div class="report-row__main">
                                                <p class="report-row__name">{item.item.item_name}</p>
                                                <p class="report-row__serial">{item.item.serial_num}</p>
                                                <span class="badge">"Exp: " {expiry}</span>
                                                <span class="badge badge--muted">{item.room.name}</span>
                                            </div>
                                            <span class="badge badge--wide">
                                                {days} " days till expiry"
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}
