//! Main page component for Product details (EditDetails MVVM Standard)

use super::tabs::{GeneralTab, VariantsTab};
use super::view_model::ProductDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::use_api;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Main component for Product details form (opens in a tab)
#[component]
pub fn ProductDetails(id: Option<String>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let vm = ProductDetailsVm::new(use_api());

    vm.load_categories();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    // После загрузки записи подставляем её название в заголовок таба
    Effect::new(move |_| {
        if let Some(id) = vm.id.get() {
            let title = vm.description.get();
            if !title.is_empty() {
                tabs_store.update_tab_title(&format!("a004_product_detail_{}", id), &title);
            }
        }
    });

    view! {
        <div class="details-container product-details">
            <Header vm=vm on_close=on_close />

            <div class="details-body">
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <TabBar vm=vm />

                <div class="details-tab-content">
                    {move || match vm.active_tab.get().as_str() {
                        "variants" => view! { <VariantsTab vm=vm /> }.into_any(),
                        _ => view! { <GeneralTab vm=vm /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Header component with title and action buttons
#[component]
fn Header(vm: ProductDetailsVm, on_close: Callback<()>) -> impl IntoView {
    let is_edit_mode = vm.is_edit_mode();

    view! {
        <div class="details-header">
            <h3>
                {move || if is_edit_mode.get() {
                    "Редактирование товара"
                } else {
                    "Новый товар"
                }}
            </h3>
            <div class="details-header-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save(Callback::new(move |_| on_close.run(())))
                    disabled=move || vm.is_saving.get()
                >
                    {icon("save")}
                    {move || if vm.is_saving.get() { "Сохранение..." } else { "Сохранить" }}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_close.run(())
                >
                    {icon("cancel")}
                    {"Закрыть"}
                </button>
            </div>
        </div>
    }
}

/// Tab bar component
#[component]
fn TabBar(vm: ProductDetailsVm) -> impl IntoView {
    let tabs = [("general", "Основное"), ("variants", "Варианты")];

    view! {
        <div class="details-tabs">
            {tabs.into_iter().map(|(key, label)| {
                view! {
                    <button
                        class="details-tab"
                        class:details-tab--active=move || vm.active_tab.get() == key
                        on:click=move |_| vm.active_tab.set(key.to_string())
                    >
                        {label}
                        {move || if key == "variants" {
                            format!(" ({})", vm.variants.get().len())
                        } else {
                            String::new()
                        }}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
