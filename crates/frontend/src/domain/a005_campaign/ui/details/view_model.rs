use super::model;
use crate::domain::a002_cluster::ui::details::model as cluster_model;
use crate::shared::api::ApiClient;
use contracts::domain::a002_cluster::aggregate::Cluster;
use contracts::domain::a005_campaign::aggregate::CampaignDto;
use contracts::domain::common::AggregateId;
use contracts::enums::campaign_status::CampaignStatus;
use leptos::prelude::*;

/// ViewModel for Campaign details form
#[derive(Clone, Copy)]
pub struct CampaignDetailsViewModel {
    api: ApiClient,
    pub form: RwSignal<CampaignDto>,
    pub status: RwSignal<CampaignStatus>,
    pub error: RwSignal<Option<String>>,
    /// Справочник кластеров для области действия
    pub clusters: RwSignal<Vec<Cluster>>,
}

impl CampaignDetailsViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            form: RwSignal::new(CampaignDto::default()),
            status: RwSignal::new(CampaignStatus::Draft),
            error: RwSignal::new(None),
            clusters: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || Self::validate_form(&self.form.get()).is_ok()
    }

    fn validate_form(dto: &CampaignDto) -> Result<(), &'static str> {
        if dto.description.trim().is_empty() {
            return Err("Наименование обязательно для заполнения");
        }
        if !(dto.discount_percent > 0.0 && dto.discount_percent <= 100.0) {
            return Err("Скидка должна быть в диапазоне (0; 100]");
        }
        if dto.ends_at <= dto.starts_at {
            return Err("Дата окончания должна быть позже даты начала");
        }
        Ok(())
    }

    pub fn load_clusters(&self) {
        let api = self.api;
        let clusters = self.clusters;
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(list) = cluster_model::fetch_clusters(api).await {
                clusters.set(list);
            }
        });
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let api = self.api;
        let form = self.form;
        let status = self.status;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(api, &existing_id).await {
                Ok(aggregate) => {
                    status.set(aggregate.status);
                    let dto = CampaignDto {
                        id: Some(aggregate.base.id.as_string()),
                        code: Some(aggregate.base.code),
                        description: aggregate.base.description,
                        starts_at: aggregate.starts_at,
                        ends_at: aggregate.ends_at,
                        discount_percent: aggregate.discount_percent,
                        cluster_ids: aggregate.cluster_ids,
                        comment: aggregate.base.comment,
                    };
                    form.set(dto);
                }
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    pub fn toggle_cluster(&self, cluster_id: String, checked: bool) {
        self.form.update(|f| {
            if checked {
                if !f.cluster_ids.contains(&cluster_id) {
                    f.cluster_ids.push(cluster_id);
                }
            } else {
                f.cluster_ids.retain(|id| id != &cluster_id);
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

    /// Запрос смены статуса (активация/пауза); после успеха перечитываем запись
    pub fn change_status_command(&self, new_status: CampaignStatus) {
        let Some(id) = self.form.get().id else {
            return;
        };
        let api = self.api;
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            if model::change_status(api, &id, new_status).await.is_ok() {
                vm.load_if_needed(Some(id));
            }
        });
    }
}
