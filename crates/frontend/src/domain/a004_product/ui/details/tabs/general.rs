//! General tab - basic product fields
//!
//! Contains: description, code, brand, category, image, is_active, comment

use super::super::view_model::ProductDetailsVm;
use crate::shared::api::config::asset_url;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[component]
pub fn GeneralTab(vm: ProductDetailsVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Основные поля"</h4>
            <div class="details-form">
                <div class="form-group">
                    <label for="description">{"Наименование"}</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || vm.description.get()
                        on:input=move |ev| vm.description.set(event_target_value(&ev))
                        placeholder="Введите наименование товара"
                    />
                </div>

                <div class="form-group">
                    <label for="code">{"Код"}</label>
                    <input
                        type="text"
                        id="code"
                        prop:value=move || vm.code.get()
                        on:input=move |ev| vm.code.set(event_target_value(&ev))
                        placeholder="PRD-0001 (присвоит сервер, если пусто)"
                    />
                </div>

                <div class="form-group">
                    <label for="brand">{"Бренд"}</label>
                    <input
                        type="text"
                        id="brand"
                        prop:value=move || vm.brand.get()
                        on:input=move |ev| vm.brand.set(event_target_value(&ev))
                        placeholder="Введите бренд"
                    />
                </div>

                <div class="form-group">
                    <label for="category">{"Категория"}</label>
                    <select
                        id="category"
                        on:change=move |ev| vm.category_id.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || vm.category_id.get().is_empty()>
                            {"— без категории —"}
                        </option>
                        {move || vm.categories.get().into_iter().map(|c| {
                            let id = c.base.id.as_string();
                            let id_for_selected = id.clone();
                            view! {
                                <option
                                    value=id
                                    selected=move || vm.category_id.get() == id_for_selected
                                >
                                    {c.base.description.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="image_path">{"Изображение"}</label>
                    <input
                        type="text"
                        id="image_path"
                        prop:value=move || vm.image_path.get()
                        on:input=move |ev| vm.image_path.set(event_target_value(&ev))
                        placeholder="/images/products/water-still-05.png"
                    />
                    {move || {
                        let path = vm.image_path.get();
                        (!path.is_empty()).then(|| view! {
                            <img
                                src=asset_url(&path)
                                alt="preview"
                                style="margin-top: 8px; max-width: 120px; max-height: 120px; border: 1px solid #eee; border-radius: 4px;"
                            />
                        })
                    }}
                </div>

                <div class="form-group form-group--inline">
                    <label for="is_active">{"Активен"}</label>
                    <input
                        type="checkbox"
                        id="is_active"
                        prop:checked=move || vm.is_active.get()
                        on:change=move |ev| vm.is_active.set(event_target_checked(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="comment">{"Комментарий"}</label>
                    <textarea
                        id="comment"
                        prop:value=move || vm.comment.get()
                        on:input=move |ev| vm.comment.set(event_target_value(&ev))
                        placeholder="Введите дополнительную информацию (необязательно)"
                        rows="3"
                    />
                </div>
            </div>
        </div>
    }
}
