use super::page::TabPage;
use super::tab::Tab as TabComponent;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Контейнер табов: панель заголовков + страницы контента.
///
/// Страницы всех открытых табов живут в DOM одновременно (скрыты через CSS),
/// чтобы состояние форм не терялось при переключении.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
            </div>
        </div>
    }
}
