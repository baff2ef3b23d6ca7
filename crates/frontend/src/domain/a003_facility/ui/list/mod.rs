pub mod state;

use self::state::create_state;
use crate::domain::a003_facility::ui::details::model;
use crate::shared::api::use_api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    filter_list, get_sort_class, get_sort_indicator, sort_list, SearchInput, Searchable, Sortable,
};
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a003_facility::aggregate::Facility;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct FacilityRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub facility_type: &'static str,
    pub address: String,
    pub email: String,
    pub is_active: bool,
}

impl From<Facility> for FacilityRow {
    fn from(f: Facility) -> Self {
        Self {
            id: f.base.id.as_string(),
            code: f.base.code,
            description: f.base.description,
            facility_type: f.facility_type.display_name(),
            address: f.address,
            email: f.email,
            is_active: f.is_active,
        }
    }
}

impl Sortable for FacilityRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "description" => self
                .description
                .to_lowercase()
                .cmp(&other.description.to_lowercase()),
            "facility_type" => self.facility_type.cmp(other.facility_type),
            "address" => self.address.to_lowercase().cmp(&other.address.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for FacilityRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.description.to_lowercase().contains(&filter)
            || self.code.to_lowercase().contains(&filter)
            || self.address.to_lowercase().contains(&filter)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn FacilityList() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let api = use_api();
    let state = create_state();
    let (items, set_items) = signal::<Vec<FacilityRow>>(Vec::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(v) = model::fetch_facilities(api).await {
                let rows: Vec<FacilityRow> = v.into_iter().map(Into::into).collect();
                set_items.set(rows);
            }
        });
    };

    let open_detail_tab = move |id: String| {
        tabs_store.open_tab(&format!("a003_facility_detail_{}", id), "Торговый объект");
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

    let visible_items = move || {
        let s = state.get();
        let mut items_vec = filter_list(items.get(), &s.filter);
        sort_list(&mut items_vec, &s.sort_field, s.sort_ascending);
        items_vec
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = {
            if let Some(win) = web_sys::window() {
                win.confirm_with_message(&format!(
                    "Удалить выбранные объекты? Количество: {}",
                    ids.len()
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
                let _ = model::delete_facility(api, &id).await;
            }
            fetch();
        });
        set_selected.set(HashSet::new());
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Торговые объекты"}</h2>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().filter)
                        on_change=Callback::new(move |value: String| {
                            state.update(|s| s.filter = value);
                        })
                        placeholder="Поиск по наименованию, коду или адресу..."
                    />
                    <button class="button button--primary" on:click=move |_| {
                        tabs_store.open_tab("a003_facility_new", "Новый объект");
                    }>
                        {icon("plus")}
                        {"Новый объект"}
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("facility_type")>
                                "Тип"
                                <span class={move || get_sort_class(&state.get().sort_field, "facility_type")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "facility_type", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("address")>
                                "Адрес"
                                <span class={move || get_sort_class(&state.get().sort_field, "address")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "address", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">{"E-mail"}</th>
                            <th class="table__header-cell">{"Активен"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_items().into_iter().map(|row| {
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            let id_for_selected = row.id.clone();
                            let id_for_click = row.id.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected={move || selected.get().contains(&id_for_selected)}
                                    on:click=move |_| open_detail_tab(id_for_click.clone())
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
                                    <td class="table__cell">{row.facility_type}</td>
                                    <td class="table__cell">{row.address}</td>
                                    <td class="table__cell">{row.email}</td>
                                    <td class="table__cell">{if row.is_active { "✓" } else { "—" }}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
