//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Этот модуль содержит функцию `render_tab_content`, которая по ключу таба
//! возвращает соответствующий View. Все tab keys собраны здесь в одном месте.

use crate::domain::a001_category::ui::tree::CategoryTree;
use crate::domain::a002_cluster::ui::list::ClusterList;
use crate::domain::a003_facility::ui::details::FacilityDetails;
use crate::domain::a003_facility::ui::list::FacilityList;
use crate::domain::a004_product::ui::details::ProductDetails;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_campaign::ui::list::CampaignList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p910_price_margin::ui::matrix::PriceMarginMatrix;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a001_category", "a004_product_detail_{id}")
/// * `tabs_store` - контекст для закрытия таба (используется в detail-views с on_close)
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Справочники (a001-a005)
        // ═══════════════════════════════════════════════════════════════════

        // a001: дерево категорий
        "a001_category" => view! { <CategoryTree /> }.into_any(),

        // a002: кластеры
        "a002_cluster" => view! { <ClusterList /> }.into_any(),

        // a003: торговые объекты
        "a003_facility" => view! { <FacilityList /> }.into_any(),
        "a003_facility_new" => view! {
            <FacilityDetails
                id=None
                on_close=Callback::new({
                    let key_for_close = key_for_close.clone();
                    move |_| {
                        tabs_store.close_tab(&key_for_close);
                    }
                })
            />
        }
        .into_any(),
        k if k.starts_with("a003_facility_detail_") => {
            let id = k.strip_prefix("a003_facility_detail_").unwrap().to_string();
            view! {
                <FacilityDetails
                    id=Some(id)
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // a004: товары
        "a004_product" => view! { <ProductList /> }.into_any(),
        "a004_product_new" => view! {
            <ProductDetails
                id=None
                on_close=Callback::new({
                    let key_for_close = key_for_close.clone();
                    move |_| {
                        tabs_store.close_tab(&key_for_close);
                    }
                })
            />
        }
        .into_any(),
        k if k.starts_with("a004_product_detail_") => {
            let id = k.strip_prefix("a004_product_detail_").unwrap().to_string();
            view! {
                <ProductDetails
                    id=Some(id)
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // a005: промо-акции
        "a005_campaign" => view! { <CampaignList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Инструменты
        // ═══════════════════════════════════════════════════════════════════
        "p910_price_margin" => view! { <PriceMarginMatrix /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Unknown / Fallback
        // ═══════════════════════════════════════════════════════════════════
        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
