pub mod state;

use self::state::create_state;
use crate::domain::a002_cluster::ui::details::{model, ClusterDetails};
use crate::shared::api::use_api;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a002_cluster::aggregate::Cluster;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct ClusterRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub city: String,
    pub is_active: bool,
    pub created_at: String,
}

impl From<Cluster> for ClusterRow {
    fn from(c: Cluster) -> Self {
        Self {
            id: c.base.id.as_string(),
            code: c.base.code,
            description: c.base.description,
            city: c.city,
            is_active: c.is_active,
            created_at: format_timestamp(c.base.metadata.created_at),
        }
    }
}

impl Sortable for ClusterRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "description" => self
                .description
                .to_lowercase()
                .cmp(&other.description.to_lowercase()),
            "city" => self.city.to_lowercase().cmp(&other.city.to_lowercase()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ClusterList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let api = use_api();
    let state = create_state();
    let (items, set_items) = signal::<Vec<ClusterRow>>(Vec::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(v) = model::fetch_clusters(api).await {
                let rows: Vec<ClusterRow> = v.into_iter().map(Into::into).collect();
                set_items.set(rows);
            }
        });
    };

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        modal_stack.push_with_frame(
            Some("max-width: min(900px, 95vw); width: min(900px, 95vw);".to_string()),
            Some("cluster-modal".to_string()),
            move |handle| {
                view! {
                    <ClusterDetails
                        id=id_val.clone()
                        on_saved=Callback::new({
                            let handle = handle.clone();
                            move |_| {
                                handle.close();
                                fetch();
                            }
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id.clone());
            } else {
                s.remove(&id);
            }
        });
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_items = move || {
        let mut items_vec = items.get();
        let s = state.get();
        sort_list(&mut items_vec, &s.sort_field, s.sort_ascending);
        items_vec
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let count = ids.len();
        let confirmed = {
            if let Some(win) = web_sys::window() {
                win.confirm_with_message(&format!(
                    "Удалить выбранные кластеры? Количество: {}",
                    count
                ))
                .unwrap_or(false)
            } else {
                false
            }
        };
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            for id in ids {
                let _ = model::delete_cluster(api, &id).await;
            }
            fetch();
        });
        set_selected.set(HashSet::new());
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Кластеры"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Новый кластер"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| delete_selected() disabled={move || selected.get().is_empty()}>
                        {icon("delete")}
                        {move || format!("Удалить ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        let current_items = items.get();
                                        if checked {
                                            set_selected.update(|s| {
                                                for item in current_items.iter() {
                                                    s.insert(item.id.clone());
                                                }
                                            });
                                        } else {
                                            set_selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("code")>
                                "Код"
                                <span class={move || get_sort_class(&state.get().sort_field, "code")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "code", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("description")>
                                "Наименование"
                                <span class={move || get_sort_class(&state.get().sort_field, "description")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "description", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("city")>
                                "Город"
                                <span class={move || get_sort_class(&state.get().sort_field, "city")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "city", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Активен"}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("created_at")>
                                "Создан"
                                <span class={move || get_sort_class(&state.get().sort_field, "created_at")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "created_at", state.get().sort_ascending)}
                                </span>
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            let id_for_selected = row.id.clone();
                            let id_for_click = row.id.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected={move || selected.get().contains(&id_for_selected)}
                                    on:click=move |_| open_details_modal(Some(id_for_click.clone()))
                                >
                                    <td class="table__cell table__cell--checkbox" on:click=move |ev| ev.stop_propagation()>
                                        <input
                                            type="checkbox"
                                            class="table__checkbox"
                                            prop:checked=move || selected.get().contains(&id_for_checkbox)
                                            on:change=move |ev| toggle_select(id_for_toggle.clone(), event_target_checked(&ev))
                                        />
                                    </td>
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.city}</td>
                                    <td class="table__cell">{if row.is_active { "✓" } else { "—" }}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            // Details открывается через ModalStackService
        </div>
    }
}
