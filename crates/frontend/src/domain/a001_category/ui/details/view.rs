use super::view_model::CategoryDetailsViewModel;
use crate::shared::api::use_api;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(
    id: Option<String>,
    #[prop(optional_no_strip)] parent_id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(use_api());
    vm.load_if_needed(id, parent_id);

    view! {
        <div class="details-container category-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode()() { "Редактирование категории" } else { "Новая категория" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="description">{"Наименование"}</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| {
                            vm.form.update(|f| f.description = event_target_value(&ev));
                        }
                        placeholder="Введите наименование категории"
                    />
                </div>

                <div class="form-group">
                    <label for="code">{"Код"}</label>
                    <input
                        type="text"
                        id="code"
                        prop:value=move || vm.form.get().code.clone().unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.code = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        placeholder="CAT-0001 (присвоит сервер, если пусто)"
                    />
                </div>

                <div class="form-group">
                    <label for="image_path">{"Путь к изображению"}</label>
                    <input
                        type="text"
                        id="image_path"
                        prop:value=move || vm.form.get().image_path.clone().unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.image_path = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        placeholder="/assets/categories/grocery.svg"
                    />
                </div>

                <div class="form-group form-group--inline">
                    <label for="is_active">{"Активна"}</label>
                    <input
                        type="checkbox"
                        id="is_active"
                        prop:checked=move || vm.form.get().is_active
                        on:change=move |ev| {
                            vm.form.update(|f| f.is_active = event_target_checked(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="comment">{"Комментарий"}</label>
                    <textarea
                        id="comment"
                        prop:value=move || vm.form.get().comment.clone().unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.comment = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        placeholder="Введите дополнительную информацию (необязательно)"
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || !vm.is_form_valid()()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode()() { "Сохранить" } else { "Создать" }}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
