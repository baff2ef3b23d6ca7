//! Прайс-матрица: каскадный фильтр кластер → объект/категория/бренд → варианты,
//! выбор строк и массовое применение наценки.

use super::super::api;
use super::super::state::{create_state, parse_margin};
use crate::domain::a002_cluster::ui::details::model as cluster_model;
use crate::shared::api::use_api;
use crate::shared::components::number_format::{format_money, format_percent};
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::a002_cluster::aggregate::Cluster;
use contracts::domain::common::AggregateId;
use contracts::projections::p910_price_margin::dto::{
    ApplyMarginRequest, PriceMatrixRow, PricingFilters,
};
use leptos::prelude::*;
use std::collections::HashSet;

#[component]
#[allow(non_snake_case)]
pub fn PriceMarginMatrix() -> impl IntoView {
    let api_client = use_api();
    let toasts = use_toasts();
    let state = create_state();

    let (clusters, set_clusters) = signal::<Vec<Cluster>>(Vec::new());
    let (filters, set_filters) = signal::<PricingFilters>(PricingFilters::default());
    let (rows, set_rows) = signal::<Vec<PriceMatrixRow>>(Vec::new());
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let (margin_input, set_margin_input) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let (is_applying, set_is_applying) = signal(false);

    // Справочник кластеров — корень каскада
    wasm_bindgen_futures::spawn_local(async move {
        if let Ok(list) = cluster_model::fetch_clusters(api_client).await {
            set_clusters.set(list);
        }
    });

    // Перечитать матрицу по текущему срезу. Быстрая смена фильтров может
    // обогнать ответы; устаревший ответ не отменяется.
    let reload_matrix = move || {
        let Some(query) = state.get_untracked().to_query() else {
            set_rows.set(Vec::new());
            return;
        };
        set_is_loading.set(true);
        set_selected.set(HashSet::new());
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(list) = api::fetch_matrix(api_client, &query).await {
                set_rows.set(list);
            }
            set_is_loading.set(false);
        });
    };

    // Смена кластера: сброс нижестоящих фильтров, новые допустимые значения
    let select_cluster = move |cluster_id: String| {
        let cluster_id = if cluster_id.is_empty() {
            None
        } else {
            Some(cluster_id)
        };
        state.update(|s| s.select_cluster(cluster_id.clone()));
        set_filters.set(PricingFilters::default());

        if let Some(cluster_id) = cluster_id {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(f) = api::fetch_filters(api_client, &cluster_id).await {
                    set_filters.set(f);
                }
            });
        }
        reload_matrix();
    };

    let select_facility = move |value: String| {
        state.update(|s| s.facility_id = if value.is_empty() { None } else { Some(value) });
        reload_matrix();
    };
    let select_category = move |value: String| {
        state.update(|s| s.category_id = if value.is_empty() { None } else { Some(value) });
        reload_matrix();
    };
    let select_brand = move |value: String| {
        state.update(|s| s.brand = if value.is_empty() { None } else { Some(value) });
        reload_matrix();
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

    let apply_margin = move || {
        let margin = match parse_margin(&margin_input.get()) {
            Ok(m) => m,
            Err(e) => {
                toasts.error(e);
                return;
            }
        };
        let variant_ids: Vec<String> = selected.get().into_iter().collect();
        if variant_ids.is_empty() {
            toasts.error("Выберите хотя бы один вариант");
            return;
        }
        let Some(scope) = state.get().to_query() else {
            toasts.error("Сначала выберите кластер");
            return;
        };

        set_is_applying.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let request = ApplyMarginRequest {
                scope,
                variant_ids,
                margin_percent: margin,
            };
            match api::apply_margin(api_client, &request).await {
                Ok(response) => {
                    toasts.success(format!("Наценка применена: {} вариантов", response.updated));
                    reload_matrix();
                }
                Err(_) => {
                    // ошибка уже показана тостом API-клиента
                }
            }
            set_is_applying.set(false);
        });
    };

    let has_cluster = move || state.get().cluster_id.is_some();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Матрица наценок"}</h2>
            </div>

            // Каскадный фильтр
            <div class="filter-panel" style="display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap; margin: 12px 0;">
                <div class="form-group">
                    <label>{"Кластер"}</label>
                    <select on:change=move |ev| select_cluster(event_target_value(&ev))>
                        <option value="" selected=move || state.get().cluster_id.is_none()>
                            {"— выберите кластер —"}
                        </option>
                        {move || clusters.get().into_iter().map(|c| {
                            let id = c.base.id.as_string();
                            let id_for_selected = id.clone();
                            view! {
                                <option
                                    value=id
                                    selected=move || state.get().cluster_id.as_deref() == Some(id_for_selected.as_str())
                                >
                                    {format!("{} ({})", c.base.description, c.city)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Объект"}</label>
                    <select
                        disabled=move || !has_cluster()
                        on:change=move |ev| select_facility(event_target_value(&ev))
                    >
                        <option value="" selected=move || state.get().facility_id.is_none()>
                            {"— все объекты —"}
                        </option>
                        {move || filters.get().facilities.into_iter().map(|opt| {
                            let id_for_selected = opt.id.clone();
                            view! {
                                <option
                                    value=opt.id
                                    selected=move || state.get().facility_id.as_deref() == Some(id_for_selected.as_str())
                                >
                                    {opt.name}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Категория"}</label>
                    <select
                        disabled=move || !has_cluster()
                        on:change=move |ev| select_category(event_target_value(&ev))
                    >
                        <option value="" selected=move || state.get().category_id.is_none()>
                            {"— все категории —"}
                        </option>
                        {move || filters.get().categories.into_iter().map(|opt| {
                            let id_for_selected = opt.id.clone();
                            view! {
                                <option
                                    value=opt.id
                                    selected=move || state.get().category_id.as_deref() == Some(id_for_selected.as_str())
                                >
                                    {opt.name}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>{"Бренд"}</label>
                    <select
                        disabled=move || !has_cluster()
                        on:change=move |ev| select_brand(event_target_value(&ev))
                    >
                        <option value="" selected=move || state.get().brand.is_none()>
                            {"— все бренды —"}
                        </option>
                        {move || filters.get().brands.into_iter().map(|brand| {
                            let brand_for_selected = brand.clone();
                            let brand_for_value = brand.clone();
                            view! {
                                <option
                                    value=brand_for_value
                                    selected=move || state.get().brand.as_deref() == Some(brand_for_selected.as_str())
                                >
                                    {brand}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group" style="width: 140px;">
                    <label>{"Наценка, %"}</label>
                    <input
                        type="text"
                        prop:value=move || margin_input.get()
                        on:input=move |ev| set_margin_input.set(event_target_value(&ev))
                        placeholder="15"
                    />
                </div>

                <button
                    class="button button--primary"
                    on:click=move |_| apply_margin()
                    disabled=move || is_applying.get() || selected.get().is_empty()
                >
                    {icon("pricing")}
                    {move || if is_applying.get() {
                        "Применение...".to_string()
                    } else {
                        format!("Применить ({})", selected.get().len())
                    }}
                </button>

                <button class="button button--secondary" on:click=move |_| reload_matrix() disabled=move || !has_cluster()>
                    {icon("refresh")}
                    {"Обновить"}
                </button>
            </div>

            {move || if !has_cluster() {
                view! { <div style="color: #888; padding: 24px; text-align: center;">{"Выберите кластер, чтобы загрузить матрицу вариантов"}</div> }.into_any()
            } else if is_loading.get() {
                view! { <div style="text-align: center; padding: 20px; color: #666;">{"⏳ Загрузка..."}</div> }.into_any()
            } else {
                view! {
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
                                                let current_rows = rows.get();
                                                if checked {
                                                    set_selected.update(|s| {
                                                        for row in current_rows.iter() {
                                                            s.insert(row.variant_id.clone());
                                                        }
                                                    });
                                                } else {
                                                    set_selected.set(HashSet::new());
                                                }
                                            }
                                        />
                                    </th>
                                    <th class="table__header-cell">{"Товар"}</th>
                                    <th class="table__header-cell">{"SKU"}</th>
                                    <th class="table__header-cell">{"Бренд"}</th>
                                    <th class="table__header-cell">{"Категория"}</th>
                                    <th class="table__header-cell table__header-cell--number">{"Базовая цена"}</th>
                                    <th class="table__header-cell table__header-cell--number">{"Текущая цена"}</th>
                                    <th class="table__header-cell table__header-cell--number">{"Наценка"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let list = rows.get();
                                    if list.is_empty() {
                                        view! { <tr><td colspan="8" class="text-center" style="color: #888; padding: 20px;">{"По текущему срезу вариантов нет"}</td></tr> }.into_any()
                                    } else {
                                        list.into_iter().map(|row| {
                                            let id_for_checkbox = row.variant_id.clone();
                                            let id_for_toggle = row.variant_id.clone();
                                            let id_for_selected = row.variant_id.clone();
                                            view! {
                                                <tr
                                                    class="table__row"
                                                    class:table__row--selected={move || selected.get().contains(&id_for_selected)}
                                                >
                                                    <td class="table__cell table__cell--checkbox">
                                                        <input
                                                            type="checkbox"
                                                            class="table__checkbox"
                                                            prop:checked=move || selected.get().contains(&id_for_checkbox)
                                                            on:change=move |ev| toggle_select(id_for_toggle.clone(), event_target_checked(&ev))
                                                        />
                                                    </td>
                                                    <td class="table__cell">{row.product_name}</td>
                                                    <td class="table__cell">{row.sku}</td>
                                                    <td class="table__cell">{row.brand}</td>
                                                    <td class="table__cell">{row.category_name}</td>
                                                    <td class="table__cell table__cell--number">{format_money(row.base_price)}</td>
                                                    <td class="table__cell table__cell--number">{format_money(row.current_price)}</td>
                                                    <td class="table__cell table__cell--number">{format_percent(row.current_margin)}</td>
                                                </tr>
                                            }
                                        }).collect_view().into_any()
                                    }
                                }}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
