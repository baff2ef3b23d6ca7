//! General tab - basic facility fields
//!
//! Contains: description, code, facility type, cluster, is_active, comment

use super::super::view_model::FacilityDetailsVm;
use contracts::domain::common::AggregateId;
use contracts::enums::facility_type::FacilityType;
use leptos::prelude::*;

#[component]
pub fn GeneralTab(vm: FacilityDetailsVm) -> impl IntoView {
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
                        placeholder="Введите наименование объекта"
                    />
                </div>

                <div class="form-group">
                    <label for="code">{"Код"}</label>
                    <input
                        type="text"
                        id="code"
                        prop:value=move || vm.code.get()
                        on:input=move |ev| vm.code.set(event_target_value(&ev))
                        placeholder="FAC-MSK-001 (присвоит сервер, если пусто)"
                    />
                </div>

                <div class="form-group">
                    <label for="facility_type">{"Тип объекта"}</label>
                    <select
                        id="facility_type"
                        on:change=move |ev| {
                            if let Some(ft) = FacilityType::from_code(&event_target_value(&ev)) {
                                vm.facility_type.set(ft);
                            }
                        }
                    >
                        {FacilityType::all().into_iter().map(|ft| {
                            view! {
                                <option
                                    value=ft.code()
                                    selected=move || vm.facility_type.get() == ft
                                >
                                    {ft.display_name()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="cluster">{"Кластер"}</label>
                    <select
                        id="cluster"
                        on:change=move |ev| vm.cluster_id.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || vm.cluster_id.get().is_empty()>
                            {"— без кластера —"}
                        </option>
                        {move || vm.clusters.get().into_iter().map(|c| {
                            let id = c.base.id.as_string();
                            let id_for_selected = id.clone();
                            view! {
                                <option
                                    value=id
                                    selected=move || vm.cluster_id.get() == id_for_selected
                                >
                                    {c.base.description.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
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
