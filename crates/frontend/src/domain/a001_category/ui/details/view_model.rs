use super::model;
use crate::shared::api::ApiClient;
use contracts::domain::a001_category::aggregate::CategoryDto;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// ViewModel for Category details form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    api: ApiClient,
    pub form: RwSignal<CategoryDto>,
    pub error: RwSignal<Option<String>>,
}

impl CategoryDetailsViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            form: RwSignal::new(CategoryDto {
                is_active: true,
                ..CategoryDto::default()
            }),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || Self::validate_form(&self.form.get()).is_ok()
    }

    fn validate_form(dto: &CategoryDto) -> Result<(), &'static str> {
        if dto.description.trim().is_empty() {
            return Err("Наименование обязательно для заполнения");
        }
        Ok(())
    }

    /// Load form data from server if ID is provided,
    /// otherwise preset the parent for a new subcategory
    pub fn load_if_needed(&self, id: Option<String>, parent_id: Option<String>) {
        let Some(existing_id) = id else {
            if parent_id.is_some() {
                self.form.update(|f| f.parent_id = parent_id);
            }
            return;
        };
        let api = self.api;
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(api, &existing_id).await {
                Ok(aggregate) => {
                    let dto = CategoryDto {
                        id: Some(aggregate.base.id.as_string()),
                        code: Some(aggregate.base.code),
                        description: aggregate.base.description,
                        parent_id: aggregate.parent_id,
                        image_path: aggregate.image_path,
                        is_active: aggregate.is_active,
                        comment: aggregate.base.comment,
                    };
                    form.set(dto);
                }
                Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
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
