//! Contacts tab - email and phone

use super::super::view_model::FacilityDetailsVm;
use leptos::prelude::*;

#[component]
pub fn ContactsTab(vm: FacilityDetailsVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Контакты"</h4>
            <div class="details-form">
                <div class="form-group">
                    <label for="email">{"E-mail"}</label>
                    <input
                        type="text"
                        id="email"
                        prop:value=move || vm.email.get()
                        on:input=move |ev| vm.email.set(event_target_value(&ev))
                        placeholder="manager@example.com"
                    />
                </div>

                <div class="form-group">
                    <label for="phone">{"Телефон"}</label>
                    <input
                        type="text"
                        id="phone"
                        prop:value=move || vm.phone.get()
                        on:input=move |ev| vm.phone.set(event_target_value(&ev))
                        placeholder="+7 (900) 000-00-00"
                    />
                </div>
            </div>
        </div>
    }
}
