use super::view_model::CampaignDetailsViewModel;
use crate::shared::api::use_api;
use crate::shared::date_utils::{from_date_input_value, to_date_input_value};
use crate::shared::icons::icon;
use contracts::domain::common::AggregateId;
use contracts::enums::campaign_status::CampaignStatus;
use leptos::prelude::*;

#[component]
pub fn CampaignDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CampaignDetailsViewModel::new(use_api());
    vm.load_clusters();
    vm.load_if_needed(id);

    view! {
        <div class="details-container campaign-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode()() { "Редактирование промо-акции" } else { "Новая промо-акция" }}
                </h3>
                // Кнопки переходов показываем только для сохранённой акции;
                // допустимость перехода в итоге решает сервер
                {move || vm.is_edit_mode()().then(|| {
                    let status = vm.status.get();
                    view! {
                        <div class="details-header-actions">
                            <span class=format!("badge badge--{}", status.code())>
                                {status.display_name()}
                            </span>
                            {matches!(status, CampaignStatus::Draft | CampaignStatus::Paused).then(|| view! {
                                <button
                                    class="btn btn-secondary"
                                    on:click=move |_| vm.change_status_command(CampaignStatus::Active)
                                >
                                    {icon("play")}
                                    {"Активировать"}
                                </button>
                            })}
                            {matches!(status, CampaignStatus::Active).then(|| view! {
                                <button
                                    class="btn btn-secondary"
                                    on:click=move |_| vm.change_status_command(CampaignStatus::Paused)
                                >
                                    {icon("pause")}
                                    {"Приостановить"}
                                </button>
                            })}
                        </div>
                    }
                })}
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
                        placeholder="Введите наименование акции"
                    />
                </div>

                <div style="display: flex; gap: 12px;">
                    <div class="form-group" style="flex: 1;">
                        <label for="starts_at">{"Дата начала"}</label>
                        <input
                            type="date"
                            id="starts_at"
                            prop:value=move || to_date_input_value(vm.form.get().starts_at)
                            on:change=move |ev| {
                                if let Some(dt) = from_date_input_value(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.starts_at = dt);
                                }
                            }
                        />
                    </div>
                    <div class="form-group" style="flex: 1;">
                        <label for="ends_at">{"Дата окончания"}</label>
                        <input
                            type="date"
                            id="ends_at"
                            prop:value=move || to_date_input_value(vm.form.get().ends_at)
                            on:change=move |ev| {
                                if let Some(dt) = from_date_input_value(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.ends_at = dt);
                                }
                            }
                        />
                    </div>
                    <div class="form-group" style="width: 140px;">
                        <label for="discount">{"Скидка, %"}</label>
                        <input
                            type="number"
                            id="discount"
                            min="0"
                            max="100"
                            step="0.5"
                            prop:value=move || vm.form.get().discount_percent.to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                    vm.form.update(|f| f.discount_percent = value);
                                }
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label>{"Область действия (кластеры)"}</label>
                    <div class="checkbox-list" style="display: flex; flex-direction: column; gap: 4px; max-height: 180px; overflow-y: auto; border: 1px solid #eee; border-radius: 4px; padding: 8px;">
                        {move || {
                            let clusters = vm.clusters.get();
                            if clusters.is_empty() {
                                view! { <span style="color: #888;">{"Кластеры не найдены"}</span> }.into_any()
                            } else {
                                clusters.into_iter().map(|c| {
                                    let cluster_id = c.base.id.as_string();
                                    let id_for_checked = cluster_id.clone();
                                    let id_for_toggle = cluster_id.clone();
                                    view! {
                                        <label style="display: flex; align-items: center; gap: 6px; cursor: pointer;">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || vm.form.get().cluster_ids.contains(&id_for_checked)
                                                on:change=move |ev| {
                                                    vm.toggle_cluster(id_for_toggle.clone(), event_target_checked(&ev));
                                                }
                                            />
                                            <span>{c.base.description.clone()}</span>
                                            <span style="color: #888;">{format!("({})", c.city)}</span>
                                        </label>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </div>
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
