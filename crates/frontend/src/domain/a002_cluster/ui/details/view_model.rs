use super::model;
use crate::shared::api::ApiClient;
use contracts::domain::a002_cluster::aggregate::ClusterDto;
use contracts::domain::a003_facility::aggregate::Facility;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// ViewModel for Cluster details form
#[derive(Clone, Copy)]
pub struct ClusterDetailsViewModel {
    api: ApiClient,
    pub form: RwSignal<ClusterDto>,
    pub error: RwSignal<Option<String>>,
    /// Объекты кластера (read-only таблица в форме)
    pub facilities: RwSignal<Vec<Facility>>,
}

impl ClusterDetailsViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            form: RwSignal::new(ClusterDto {
                is_active: true,
                ..ClusterDto::default()
            }),
            error: RwSignal::new(None),
            facilities: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || Self::validate_form(&self.form.get()).is_ok()
    }

    fn validate_form(dto: &ClusterDto) -> Result<(), &'static str> {
        if dto.description.trim().is_empty() {
            return Err("Наименование обязательно для заполнения");
        }
        if dto.city.trim().is_empty() {
            return Err("Город обязателен для заполнения");
        }
        Ok(())
    }

    /// Load form data and assigned facilities if ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let api = self.api;
        let form = self.form;
        let error = self.error;
        let facilities = self.facilities;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(api, &existing_id).await {
                Ok(aggregate) => {
                    let dto = ClusterDto {
                        id: Some(aggregate.base.id.as_string()),
                        code: Some(aggregate.base.code),
                        description: aggregate.base.description,
                        city: aggregate.city,
                        is_active: aggregate.is_active,
                        comment: aggregate.base.comment,
                    };
                    form.set(dto);
                }
                Err(e) => {
                    error.set(Some(format!("Ошибка загрузки: {}", e)));
                    return;
                }
            }

            if let Ok(list) = model::fetch_cluster_facilities(api, &existing_id).await {
                facilities.set(list);
            }
        });
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();

        if let Err(msg) = Self::validate_form(&current) {
            self.error.set(Some(msg.to_string()));
            return;
        }

        let api = self.api;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(api, &current).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
