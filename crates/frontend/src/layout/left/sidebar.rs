//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Каталог",
            icon: "products",
            items: vec![
                ("a001_category", tab_label_for_key("a001_category"), "categories"),
                ("a004_product", tab_label_for_key("a004_product"), "products"),
            ],
        },
        MenuGroup {
            id: "network",
            label: "Сеть",
            icon: "facility",
            items: vec![
                ("a002_cluster", tab_label_for_key("a002_cluster"), "clusters"),
                ("a003_facility", tab_label_for_key("a003_facility"), "facility"),
            ],
        },
        MenuGroup {
            id: "marketing",
            label: "Маркетинг",
            icon: "campaigns",
            items: vec![
                ("a005_campaign", tab_label_for_key("a005_campaign"), "campaigns"),
            ],
        },
        MenuGroup {
            id: "pricing",
            label: "Ценообразование",
            icon: "pricing",
            items: vec![
                ("p910_price_margin", tab_label_for_key("p910_price_margin"), "pricing"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Все группы раскрыты при старте: меню короткое
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .into_iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let group_id_for_items = group_id.clone();

                view! {
                    <div>
                        // Group header
                        <div
                            class="app-sidebar__item app-sidebar__item--group"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        // Group items
                        <Show when=move || expanded_groups.get().contains(&group_id_for_items)>
                            {group.items.clone().into_iter().map(|(key, label, item_icon)| {
                                let key_stored = StoredValue::new(key.to_string());
                                view! {
                                    <div
                                        class="app-sidebar__item app-sidebar__item--child"
                                        class:app-sidebar__item--active=move || {
                                            let k = key_stored.get_value();
                                            ctx.active.get().as_deref() == Some(k.as_str())
                                        }
                                        on:click=move |_| ctx.open_tab(key, label)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(item_icon)}
                                            <span>{label}</span>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
