pub mod state;

use self::state::create_state;
use crate::domain::a005_campaign::ui::details::{model, CampaignDetails};
use crate::shared::api::use_api;
use crate::shared::components::number_format::format_percent;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a005_campaign::aggregate::Campaign;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct CampaignRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub starts_at: String,
    pub ends_at: String,
    pub discount: String,
    pub clusters_count: usize,
    pub status_code: &'static str,
    pub status_name: &'static str,
}

impl From<Campaign> for CampaignRow {
    fn from(c: Campaign) -> Self {
        Self {
            id: c.base.id.as_string(),
            code: c.base.code,
            description: c.base.description,
            starts_at: c.starts_at.to_rfc3339(),
            ends_at: c.ends_at.to_rfc3339(),
            discount: format_percent(c.discount_percent),
            clusters_count: c.cluster_ids.len(),
            status_code: c.status.code(),
            status_name: c.status.display_name(),
        }
    }
}

impl Sortable for CampaignRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "description" => self
                .description
                .to_lowercase()
                .cmp(&other.description.to_lowercase()),
            // RFC 3339 сортируется лексикографически
            "starts_at" => self.starts_at.cmp(&other.starts_at),
            "ends_at" => self.ends_at.cmp(&other.ends_at),
            "status" => self.status_name.cmp(other.status_name),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CampaignList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let api = use_api();
    let state = create_state();
    let (items, set_items) = signal::<Vec<CampaignRow>>(Vec::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(v) = model::fetch_campaigns(api).await {
                let rows: Vec<CampaignRow> = v.into_iter().map(Into::into).collect();
                set_items.set(rows);
            }
        });
    };

    let open_details_modal = move |id: Option<String>| {
        let id_val = id.clone();
        modal_stack.push_with_frame(
            Some("max-width: min(800px, 95vw); width: min(800px, 95vw);".to_string()),
            Some("campaign-modal".to_string()),
            move |handle| {
                view! {
                    <CampaignDetails
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
                            move |_| {
                                handle.close();
                                // статус мог смениться из формы
                                fetch();
                            }
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

        let confirmed = {
            if let Some(win) = web_sys::window() {
                win.confirm_with_message(&format!(
                    "Удалить выбранные акции? Количество: {}",
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
                let _ = model::delete_campaign(api, &id).await;
            }
            fetch();
        });
        set_selected.set(HashSet::new());
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Промо-акции"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"Новая акция"}
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("starts_at")>
                                "Начало"
                                <span class={move || get_sort_class(&state.get().sort_field, "starts_at")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "starts_at", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("ends_at")>
                                "Окончание"
                                <span class={move || get_sort_class(&state.get().sort_field, "ends_at")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "ends_at", state.get().sort_ascending)}
                                </span>
                            </th>
                            <th class="table__header-cell">{"Скидка"}</th>
                            <th class="table__header-cell">{"Кластеры"}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("status")>
                                "Статус"
                                <span class={move || get_sort_class(&state.get().sort_field, "status")}>
                                    {move || get_sort_indicator(&state.get().sort_field, "status", state.get().sort_ascending)}
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
                                    <td class="table__cell">{format_date(&row.starts_at)}</td>
                                    <td class="table__cell">{format_date(&row.ends_at)}</td>
                                    <td class="table__cell">{row.discount}</td>
                                    <td class="table__cell">{row.clusters_count.to_string()}</td>
                                    <td class="table__cell">
                                        <span class=format!("badge badge--{}", row.status_code)>
                                            {row.status_name}
                                        </span>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
