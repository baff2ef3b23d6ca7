use super::view_model::ClusterDetailsViewModel;
use crate::shared::api::use_api;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ClusterDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ClusterDetailsViewModel::new(use_api());
    let is_edit = id.is_some();
    vm.load_if_needed(id);

    view! {
        <div class="details-container cluster-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode()() { "Редактирование кластера" } else { "Новый кластер" }}
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
                        placeholder="Введите наименование кластера"
                    />
                </div>

                <div class="form-group">
                    <label for="city">{"Город"}</label>
                    <input
                        type="text"
                        id="city"
                        prop:value=move || vm.form.get().city
                        on:input=move |ev| {
                            vm.form.update(|f| f.city = event_target_value(&ev));
                        }
                        placeholder="Москва"
                    />
                </div>

                <div class="form-group form-group--inline">
                    <label for="is_active">{"Активен"}</label>
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

            // Привязанные объекты видны только в режиме редактирования
            {is_edit.then(|| view! {
                <div class="details-section">
                    <h4>{"Объекты кластера"}</h4>
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">{"Код"}</th>
                                    <th class="table__header-cell">{"Наименование"}</th>
                                    <th class="table__header-cell">{"Адрес"}</th>
                                    <th class="table__header-cell">{"Тип"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let list = vm.facilities.get();
                                    if list.is_empty() {
                                        view! { <tr><td colspan="4" class="text-center" style="color: #888; padding: 12px;">{"К кластеру не привязано ни одного объекта"}</td></tr> }.into_any()
                                    } else {
                                        list.into_iter().map(|f| {
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{f.base.code.clone()}</td>
                                                    <td class="table__cell">{f.base.description.clone()}</td>
                                                    <td class="table__cell">{f.address.clone()}</td>
                                                    <td class="table__cell">{f.facility_type.display_name()}</td>
                                                </tr>
                                            }
                                        }).collect_view().into_any()
                                    }
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>
            })}

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
