//! Location tab - address, coordinates, service-area polygon
//!
//! Кнопка «Определить координаты» видна только если при сборке настроен
//! внешний геокодер (`ENRICH_API_URL`).

use super::super::model::geocoder_available;
use super::super::view_model::FacilityDetailsVm;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn LocationTab(vm: FacilityDetailsVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Расположение"</h4>
            <div class="details-form">
                <div class="form-group">
                    <label for="address">{"Адрес"}</label>
                    <div style="display: flex; gap: 8px;">
                        <input
                            type="text"
                            id="address"
                            style="flex: 1;"
                            prop:value=move || vm.address.get()
                            on:input=move |ev| vm.address.set(event_target_value(&ev))
                            placeholder="Город, улица, дом"
                        />
                        {geocoder_available().then(|| view! {
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| vm.detect_coordinates()
                                disabled=move || vm.is_geocoding.get()
                                title="Определить координаты по адресу"
                            >
                                {icon("map-pin")}
                                {move || if vm.is_geocoding.get() { "Поиск..." } else { "Определить координаты" }}
                            </button>
                        })}
                    </div>
                </div>

                <div style="display: flex; gap: 12px;">
                    <div class="form-group" style="flex: 1;">
                        <label for="lat">{"Широта"}</label>
                        <input
                            type="text"
                            id="lat"
                            prop:value=move || vm.lat.get()
                            on:input=move |ev| vm.lat.set(event_target_value(&ev))
                            placeholder="55.7558"
                        />
                    </div>
                    <div class="form-group" style="flex: 1;">
                        <label for="lon">{"Долгота"}</label>
                        <input
                            type="text"
                            id="lon"
                            prop:value=move || vm.lon.get()
                            on:input=move |ev| vm.lon.set(event_target_value(&ev))
                            placeholder="37.6173"
                        />
                    </div>
                </div>
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Зона обслуживания"</h4>
            <div style="color: #888; font-size: 13px; margin-bottom: 8px;">
                {"Полигон из вершин в порядке обхода. Пустой список — зона не задана, минимум 3 вершины."}
            </div>
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell" style="width: 40px;">{"№"}</th>
                        <th class="table__header-cell">{"Широта"}</th>
                        <th class="table__header-cell">{"Долгота"}</th>
                        <th class="table__header-cell" style="width: 48px;">{""}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let area = vm.service_area.get();
                        if area.is_empty() {
                            view! { <tr><td colspan="4" class="text-center" style="color: #888; padding: 12px;">{"Вершины не заданы"}</td></tr> }.into_any()
                        } else {
                            area.into_iter().enumerate().map(|(i, (lat_sig, lon_sig))| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{(i + 1).to_string()}</td>
                                        <td class="table__cell">
                                            <input
                                                type="text"
                                                prop:value=move || lat_sig.get()
                                                on:input=move |ev| lat_sig.set(event_target_value(&ev))
                                                placeholder="55.76"
                                            />
                                        </td>
                                        <td class="table__cell">
                                            <input
                                                type="text"
                                                prop:value=move || lon_sig.get()
                                                on:input=move |ev| lon_sig.set(event_target_value(&ev))
                                                placeholder="37.62"
                                            />
                                        </td>
                                        <td class="table__cell text-center">
                                            <button
                                                class="icon-button"
                                                style="background: none; border: none; cursor: pointer; color: #c33;"
                                                title="Удалить вершину"
                                                on:click=move |_| vm.remove_vertex(i)
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
                on:click=move |_| vm.add_vertex()
            >
                {icon("plus")}
                {"Добавить вершину"}
            </button>
        </div>
    }
}
