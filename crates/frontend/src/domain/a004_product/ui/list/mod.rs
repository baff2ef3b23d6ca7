pub mod state;

use self::state::create_state;
use crate::domain::a004_product::ui::details::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::config::asset_url;
use crate::shared::api::use_api;
use crate::shared::components::number_format::format_money;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct ProductRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub brand: String,
    pub image_path: Option<String>,
    pub variants_count: usize,
    pub min_price: Option<f64>,
    pub is_active: bool,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        let min_price = p
            .variants
            .iter()
            .map(|v| v.base_price)
            .fold(None::<f64>, |acc, price| match acc {
                Some(m) if m <= price => Some(m),
                _ => Some(price),
            });
        Self {
            id: p.base.id.as_string(),
            code: p.base.code,
            description: p.base.description,
            brand: p.brand,
            image_path: p.image_path,
            variants_count: p.variants.len(),
            min_price,
            is_active: p.is_active,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let api = use_api();
    let state = create_state();
    let (items, set_items) = signal::<Vec<ProductRow>>(Vec::new());
    let (total, set_total) = signal(0usize);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());

    // Перечитывает текущую страницу. Быстрые смены фильтра могут
    // обогнать друг друга — устаревший ответ не отменяется (см. ApiClient).
    let fetch = move || {
        let s = state.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(page) = model::fetch_products(api, s.page, s.page_size, &s.search).await {
                set_total.set(page.total);
                let rows: Vec<ProductRow> = page.items.into_iter().map(Into::into).collect();
                set_items.set(rows);
            }
        });
    };

    let open_detail_tab = move |id: String| {
        tabs_store.open_tab(&format!("a004_product_detail_{}", id), "Товар");
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

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = {
            if let Some(win) = web_sys::window() {
                win.confirm_with_message(&format!(
                    "Удалить выбранные товары? Количество: {}",
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
                let _ = model::delete_product(api, &id).await;
            }
            fetch();
        });
        set_selected.set(HashSet::new());
    };

    let total_pages = move || {
        let s = state.get();
        if s.page_size == 0 {
            0
        } else {
            total.get().div_ceil(s.page_size)
        }
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Товары"}</h2>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().search)
                        on_change=Callback::new(move |value: String| {
                            state.update(|s| {
                                s.search = value;
                                s.page = 0;
                            });
                            fetch();
                        })
                        placeholder="Поиск по наименованию, коду или бренду..."
                    />
                    <button class="button button--primary" on:click=move |_| {
                        tabs_store.open_tab("a004_product_new", "Новый товар");
                    }>
                        {icon("plus")}
                        {"Новый товар"}
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
                            <th class="table__header-cell">{"Фото"}</th>
                            <th class="table__header-cell">{"Код"}</th>
                            <th class="table__header-cell">{"Наименование"}</th>
                            <th class="table__header-cell">{"Бренд"}</th>
                            <th class="table__header-cell">{"Варианты"}</th>
                            <th class="table__header-cell">{"Цена от"}</th>
                            <th class="table__header-cell">{"Активен"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            let id_for_selected = row.id.clone();
                            let id_for_click = row.id.clone();
                            let image_path = row.image_path.clone();
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
                                    <td class="table__cell">
                                        {match image_path {
                                            Some(path) => view! { <img src=asset_url(&path) alt="" style="max-width: 32px; max-height: 32px;" /> }.into_any(),
                                            None => view! { <span>{"-"}</span> }.into_any(),
                                        }}
                                    </td>
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.brand}</td>
                                    <td class="table__cell">{row.variants_count.to_string()}</td>
                                    <td class="table__cell">
                                        {row.min_price.map(format_money).unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell">{if row.is_active { "✓" } else { "—" }}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.get().page)
                total_pages=Signal::derive(total_pages)
                total_count=total
                page_size=Signal::derive(move || state.get().page_size)
                on_page_change=Callback::new(move |page: usize| {
                    state.update(|s| s.page = page);
                    fetch();
                })
                on_page_size_change=Callback::new(move |size: usize| {
                    state.update(|s| {
                        s.page_size = size;
                        s.page = 0;
                    });
                    fetch();
                })
            />
        </div>
    }
}
