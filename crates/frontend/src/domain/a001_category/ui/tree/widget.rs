use super::super::details::CategoryDetails;
use super::dnd::{classify_drop, plan_move, DropPosition, FlatNode};
use crate::domain::a001_category::ui::details::model;
use crate::shared::api::{use_api, ApiClient};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::{use_toasts, ToastService};
use contracts::domain::a001_category::aggregate::{Category, MoveCategoryRequest};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};
use wasm_bindgen::JsCast;

#[derive(Clone)]
struct TreeNode {
    item: Category,
    children: Vec<TreeNode>,
    expanded: RwSignal<bool>,
}

/// Построение дерева: сначала группируем детей, потом строим узлы
fn build_tree(items: Vec<Category>) -> Vec<TreeNode> {
    if items.is_empty() {
        return vec![];
    }

    // Set всех существующих ID для проверки валидности parent_id
    let existing_ids: HashSet<String> = items.iter().map(|item| item.base.id.as_string()).collect();

    // Группируем детей по parent_id
    let mut children_map: HashMap<Option<String>, Vec<Category>> = HashMap::new();
    for item in items {
        // Если parent_id указан, но родителя нет в списке — считаем элемент корневым
        let normalized_parent = match item.parent_id.clone() {
            Some(pid) if existing_ids.contains(&pid) => Some(pid),
            _ => None,
        };

        children_map.entry(normalized_parent).or_default().push(item);
    }

    // Рекурсивная функция для построения узла со всеми его детьми
    fn build_node(item: Category, children_map: &HashMap<Option<String>, Vec<Category>>) -> TreeNode {
        let id = item.base.id.as_string();
        let children = children_map
            .get(&Some(id))
            .map(|kids| {
                kids.iter()
                    .map(|kid| build_node(kid.clone(), children_map))
                    .collect()
            })
            .unwrap_or_else(Vec::new);

        TreeNode {
            item,
            children,
            expanded: RwSignal::new(false),
        }
    }

    // Сортировка узлов: по rank, при равенстве — по имени
    fn sort_nodes(nodes: &mut Vec<TreeNode>) {
        nodes.sort_by(|a, b| {
            a.item.rank.cmp(&b.item.rank).then_with(|| {
                a.item
                    .base
                    .description
                    .to_lowercase()
                    .cmp(&b.item.base.description.to_lowercase())
            })
        });
        for n in nodes.iter_mut() {
            if !n.children.is_empty() {
                sort_nodes(&mut n.children);
            }
        }
    }

    let mut roots = children_map
        .get(&None)
        .map(|root_items| {
            root_items
                .iter()
                .map(|item| build_node(item.clone(), &children_map))
                .collect()
        })
        .unwrap_or_else(Vec::new);

    sort_nodes(&mut roots);
    roots
}

/// Фильтрация дерева: возвращает узлы, соответствующие фильтру (рекурсивно)
fn filter_tree(nodes: Vec<TreeNode>, filter: &str) -> Vec<TreeNode> {
    if filter.trim().is_empty() {
        return nodes;
    }

    let filter_lower = filter.to_lowercase();
    let mut result = Vec::new();

    for node in nodes {
        let matches = node
            .item
            .base
            .description
            .to_lowercase()
            .contains(&filter_lower)
            || node.item.base.code.to_lowercase().contains(&filter_lower);

        let filtered_children = filter_tree(node.children.clone(), filter);

        if matches || !filtered_children.is_empty() {
            let new_node = TreeNode {
                item: node.item.clone(),
                children: filtered_children,
                expanded: node.expanded,
            };
            // Авто-раскрываем узлы при фильтрации
            if !new_node.children.is_empty() {
                new_node.expanded.set(true);
            }
            result.push(new_node);
        }
    }

    result
}

/// Плоский срез для расчётов DnD
fn flatten(items: &[Category]) -> Vec<FlatNode> {
    items
        .iter()
        .map(|c| FlatNode {
            id: c.base.id.as_string(),
            parent_id: c.parent_id.clone(),
            rank: c.rank,
        })
        .collect()
}

/// Copy-контекст строк дерева: сигналы DnD и общие сервисы
#[derive(Clone, Copy)]
struct RowCtx {
    api: ApiClient,
    toasts: ToastService,
    dragging: RwSignal<Option<String>>,
    hover: RwSignal<Option<(String, DropPosition)>>,
    flat: RwSignal<Vec<FlatNode>>,
    on_open: Callback<(Option<String>, Option<String>)>, // (id, parent preset)
    on_reload: Callback<()>,
}

fn render_rows(node: TreeNode, level: usize, ctx: RowCtx, filter: String) -> Vec<AnyView> {
    let mut rows: Vec<AnyView> = Vec::new();

    let has_children = !node.children.is_empty();
    let expanded = node.expanded;
    let label = node.item.base.description.clone();
    let code = node.item.base.code.clone();
    let id = node.item.base.id.as_string();
    let is_active = node.item.is_active;

    // Кнопка раскрытия/закрытия
    let toggle: AnyView = if has_children {
        let chevron_icon = move || {
            if expanded.get() {
                icon("chevron-down")
            } else {
                icon("chevron-right")
            }
        };
        view! {
            <button
                class="tree-toggle"
                style="background: none; border: none; cursor: pointer; padding: 0; display: inline-flex; align-items: center; color: #666;"
                on:click=move |ev| {
                    ev.stop_propagation();
                    expanded.update(|v| *v = !*v);
                }
            >
                {chevron_icon}
            </button>
        }
        .into_any()
    } else {
        view! { <span style="display:inline-block; width: 16px;">{""}</span> }.into_any()
    };

    let node_icon_view = if has_children {
        view! { <span style="color: #f4b942;">{icon("folder-closed")}</span> }.into_any()
    } else {
        view! { <span style="color: #888;">{icon("item")}</span> }.into_any()
    };

    // Подсветка текста в зависимости от фильтра
    let label_view = highlight_matches(&label, &filter);
    let code_view = highlight_matches(&code, &filter);

    let id_for_open = id.clone();
    let id_for_add = id.clone();
    let id_for_delete = id.clone();
    let id_for_dragstart = id.clone();
    let id_for_dragover = id.clone();
    let id_for_dragleave = id.clone();
    let id_for_drop = id.clone();
    let id_for_style = id.clone();
    let label_for_delete = label.clone();

    // Индикатор позиции сброса: линия сверху/снизу или подсветка узла
    let row_style = move || {
        match ctx.hover.get() {
            Some((ref target, pos)) if *target == id_for_style => match pos {
                DropPosition::Before => "box-shadow: inset 0 2px 0 #1976d2;",
                DropPosition::After => "box-shadow: inset 0 -2px 0 #1976d2;",
                DropPosition::Into => "background: #e3f2fd;",
            },
            _ => "",
        }
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let target_id = id_for_drop.clone();
        let Some(dragged_id) = ctx.dragging.get() else {
            return;
        };
        let position = ctx
            .hover
            .get()
            .filter(|(t, _)| *t == target_id)
            .map(|(_, p)| p)
            .unwrap_or(DropPosition::Into);
        ctx.dragging.set(None);
        ctx.hover.set(None);

        let planned = ctx
            .flat
            .with_untracked(|nodes| plan_move(nodes, &dragged_id, &target_id, position));
        let Some(planned) = planned else {
            ctx.toasts
                .info("Перенос недопустим: категория не может попасть в своё поддерево");
            return;
        };

        let api = ctx.api;
        wasm_bindgen_futures::spawn_local(async move {
            let request = MoveCategoryRequest {
                parent_id: planned.parent_id,
                rank: planned.rank,
            };
            if model::move_category(api, &dragged_id, &request).await.is_ok() {
                ctx.on_reload.run(());
            }
        });
    };

    let row = view! {
        <tr
            class="tree-row"
            draggable="true"
            style=row_style
            on:dragstart=move |ev: web_sys::DragEvent| {
                if let Some(dt) = ev.data_transfer() {
                    let _ = dt.set_data("text/plain", &id_for_dragstart);
                }
                ctx.dragging.set(Some(id_for_dragstart.clone()));
            }
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                let Some(target) = ev.current_target() else { return; };
                let Ok(el) = target.dyn_into::<web_sys::Element>() else { return; };
                let rect = el.get_bounding_client_rect();
                let offset = ev.client_y() as f64 - rect.top();
                let pos = classify_drop(offset, rect.height());
                ctx.hover.set(Some((id_for_dragover.clone(), pos)));
            }
            on:dragleave=move |_| {
                ctx.hover.update(|h| {
                    if h.as_ref().map(|(t, _)| t == &id_for_dragleave).unwrap_or(false) {
                        *h = None;
                    }
                });
            }
            on:dragend=move |_| {
                ctx.dragging.set(None);
                ctx.hover.set(None);
            }
            on:drop=handle_drop
        >
            <td class="text-center p-0-8 whitespace-nowrap" style="width: 32px; color: #aaa; cursor: grab;">
                {icon("grip")}
            </td>
            <td class="text-center p-0-8 whitespace-nowrap" style="width: 40px;">
                <div class="icon-cell-container">
                    {node_icon_view}
                </div>
            </td>
            <td class="cell-truncate p-0-8">
                <div style={format!(
                    "display: flex; align-items: center; gap: 6px; padding-left: {}px;",
                    level * 16
                )}>
                    {toggle}
                    <span class="tree-label" on:click=move |_| ctx.on_open.run((Some(id_for_open.clone()), None))>
                        {label_view}
                    </span>
                </div>
            </td>
            <td class="cell-truncate p-0-8">{code_view}</td>
            <td class="text-center p-0-8" style="width: 80px;">
                {if is_active { "✓" } else { "—" }}
            </td>
            <td class="text-center p-0-8 whitespace-nowrap" style="width: 72px;">
                <button
                    class="icon-button"
                    style="background: none; border: none; cursor: pointer; color: #666; padding: 2px;"
                    title="Добавить подкатегорию"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.on_open.run((None, Some(id_for_add.clone())));
                    }
                >
                    {icon("plus")}
                </button>
                <button
                    class="icon-button"
                    style="background: none; border: none; cursor: pointer; color: #c33; padding: 2px;"
                    title="Удалить"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let confirmed = web_sys::window()
                            .map(|w| {
                                w.confirm_with_message(&format!(
                                    "Удалить категорию «{}» со всеми подкатегориями?",
                                    label_for_delete
                                ))
                                .unwrap_or(false)
                            })
                            .unwrap_or(false);
                        if !confirmed {
                            return;
                        }
                        let api = ctx.api;
                        let id = id_for_delete.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            if model::delete_category(api, &id).await.is_ok() {
                                ctx.on_reload.run(());
                            }
                        });
                    }
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
    .into_any();

    rows.push(row);

    if expanded.get() {
        for child in node.children.clone().into_iter() {
            let mut child_rows = render_rows(child, level + 1, ctx, filter.clone());
            rows.append(&mut child_rows);
        }
    }

    rows
}

#[component]
pub fn CategoryTree() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let api = use_api();
    let toasts = use_toasts();

    let (all_roots, set_all_roots) = signal::<Vec<TreeNode>>(vec![]);
    let (filter_text, set_filter_text) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let dragging = RwSignal::new(None::<String>);
    let hover = RwSignal::new(None::<(String, DropPosition)>);
    let flat = RwSignal::new(Vec::<FlatNode>::new());

    let load = move || {
        set_is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_categories(api).await {
                Ok(list) => {
                    flat.set(flatten(&list));
                    set_all_roots.set(build_tree(list));
                }
                Err(_) => {
                    // ошибка уже показана тостом API-клиента
                }
            }
            set_is_loading.set(false);
        });
    };

    // Вычисляемое значение для отфильтрованного дерева
    let filtered_roots = move || {
        let roots = all_roots.get();
        let filter = filter_text.get();
        filter_tree(roots, &filter)
    };

    let open_details_modal = move |id: Option<String>, parent_id: Option<String>| {
        let id_val = id.clone();
        let parent_val = parent_id.clone();
        modal_stack.push_with_frame(
            Some("max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()),
            Some("category-modal".to_string()),
            move |handle| {
                view! {
                    <CategoryDetails
                        id=id_val.clone()
                        parent_id=parent_val.clone()
                        on_saved=Callback::new({
                            let handle = handle.clone();
                            move |_| {
                                handle.close();
                                load();
                            }
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let ctx = RowCtx {
        api,
        toasts,
        dragging,
        hover,
        flat,
        on_open: Callback::new(move |(id, parent_id): (Option<String>, Option<String>)| {
            open_details_modal(id, parent_id);
        }),
        on_reload: Callback::new(move |_| load()),
    };

    load();

    view! {
        <div class="content">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">{"Категории"}</h2>
                </div>
                <div class="page__header-right">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None, None)>
                        {icon("plus")}
                        {"Новая категория"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            {move || if is_loading.get() {
                view! { <div style="text-align: center; padding: 20px; color: #666;">{"⏳ Загрузка..."}</div> }.into_any()
            } else {
                view! {
                    <>
                        <div style="margin-top: 12px; margin-bottom: 8px; position: relative; display: inline-flex; align-items: center; width: 100%;">
                            <input
                                type="text"
                                placeholder="Поиск по наименованию или коду..."
                                style="width: 100%; padding: 8px 32px 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                                prop:value=move || filter_text.get()
                                on:input=move |ev| set_filter_text.set(event_target_value(&ev))
                            />
                            {move || if !filter_text.get().is_empty() {
                                view! {
                                    <button
                                        style="position: absolute; right: 8px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                                        on:click=move |_| set_filter_text.set(String::new())
                                        title="Очистить"
                                    >
                                        {icon("x")}
                                    </button>
                                }.into_any()
                            } else {
                                view! { <></> }.into_any()
                            }}
                        </div>

                        <div class="table-container">
                            <table>
                                <thead>
                                    <tr class="text-left" style="border-bottom: 2px solid #ddd;">
                                        <th class="text-center whitespace-nowrap p-0-8" style="width: 32px;">{""}</th>
                                        <th class="text-center whitespace-nowrap p-0-8" style="width: 40px;">{""}</th>
                                        <th class="th-w-50p p-6-8">{"Наименование"}</th>
                                        <th class="th-w-25p p-6-8">{"Код"}</th>
                                        <th class="text-center p-6-8" style="width: 80px;">{"Активна"}</th>
                                        <th class="text-center p-6-8" style="width: 72px;">{""}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        let roots = filtered_roots();
                                        if roots.is_empty() {
                                            let all_count = all_roots.get().len();
                                            let msg = if all_count == 0 {
                                                "Нет данных. Нажмите 'Обновить' или создайте первую категорию."
                                            } else {
                                                "По фильтру ничего не найдено"
                                            };
                                            view! { <tr><td colspan="6" class="text-center" style="color: #888; padding: 20px;">{msg}</td></tr> }.into_any()
                                        } else {
                                            let current_filter = filter_text.get();
                                            let all_rows = roots
                                                .into_iter()
                                                .flat_map(move |n| render_rows(n, 0, ctx, current_filter.clone()))
                                                .collect::<Vec<_>>();
                                            all_rows.into_view().into_any()
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </>
                }.into_any()
            }}
        </div>
    }
}
