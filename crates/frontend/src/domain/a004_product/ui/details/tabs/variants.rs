//! Variants tab - SKU-level rows edited inline and saved with the product

use super::super::view_model::ProductDetailsVm;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn VariantsTab(vm: ProductDetailsVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Варианты (SKU)"</h4>
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">{"SKU"}</th>
                        <th class="table__header-cell">{"Размер"}</th>
                        <th class="table__header-cell">{"Цвет"}</th>
                        <th class="table__header-cell">{"Фасовка"}</th>
                        <th class="table__header-cell">{"Базовая цена"}</th>
                        <th class="table__header-cell">{"Активен"}</th>
                        <th class="table__header-cell" style="width: 48px;">{""}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = vm.variants.get();
                        if rows.is_empty() {
                            view! { <tr><td colspan="7" class="text-center" style="color: #888; padding: 12px;">{"У товара нет вариантов"}</td></tr> }.into_any()
                        } else {
                            rows.into_iter().map(|row| {
                                let key = row.key;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <input
                                                type="text"
                                                prop:value=move || row.sku.get()
                                                on:input=move |ev| row.sku.set(event_target_value(&ev))
                                                placeholder="SKU-0001"
                                            />
                                        </td>
                                        <td class="table__cell">
                                            <input
                                                type="text"
                                                prop:value=move || row.size.get()
                                                on:input=move |ev| row.size.set(event_target_value(&ev))
                                                placeholder="0.5 л"
                                            />
                                        </td>
                                        <td class="table__cell">
                                            <input
                                                type="text"
                                                prop:value=move || row.color.get()
                                                on:input=move |ev| row.color.set(event_target_value(&ev))
                                            />
                                        </td>
                                        <td class="table__cell">
                                            <input
                                                type="text"
                                                style="width: 70px;"
                                                prop:value=move || row.pack_qty.get()
                                                on:input=move |ev| row.pack_qty.set(event_target_value(&ev))
                                                placeholder="6"
                                            />
                                        </td>
                                        <td class="table__cell">
                                            <input
                                                type="text"
                                                style="width: 100px;"
                                                prop:value=move || row.base_price.get()
                                                on:input=move |ev| row.base_price.set(event_target_value(&ev))
                                                placeholder="99.90"
                                            />
                                        </td>
                                        <td class="table__cell text-center">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || row.is_active.get()
                                                on:change=move |ev| row.is_active.set(event_target_checked(&ev))
                                            />
                                        </td>
                                        <td class="table__cell text-center">
                                            <button
                                                class="icon-button"
                                                style="background: none; border: none; cursor: pointer; color: #c33;"
                                                title="Удалить вариант"
                                                on:click=move |_| vm.remove_variant(key)
                                            >
                                                {icon("x")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
            <button
                class="button button--secondary"
                style="margin-top: 8px;"
                on:click=move |_| vm.add_variant()
            >
                {icon("plus")}
                {"Добавить вариант"}
            </button>
        </div>
    }
}
