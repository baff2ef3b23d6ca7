//! ViewModel формы товара (EditDetails MVVM Standard)
//!
//! Варианты редактируются локально построчно и уезжают на сервер
//! вместе с агрегатом товара.

use super::model;
use crate::domain::a001_category::ui::details::model as category_model;
use crate::shared::api::ApiClient;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a004_product::aggregate::{ProductDto, Variant};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use uuid::Uuid;

/// Строка варианта в таблице формы
#[derive(Clone, Copy)]
pub struct VariantRowVm {
    pub key: Uuid,
    pub id: RwSignal<String>,
    pub sku: RwSignal<String>,
    pub size: RwSignal<String>,
    pub color: RwSignal<String>,
    pub pack_qty: RwSignal<String>,
    pub base_price: RwSignal<String>,
    pub is_active: RwSignal<bool>,
}

impl VariantRowVm {
    fn empty() -> Self {
        Self {
            key: Uuid::new_v4(),
            id: RwSignal::new(Uuid::new_v4().to_string()),
            sku: RwSignal::new(String::new()),
            size: RwSignal::new(String::new()),
            color: RwSignal::new(String::new()),
            pack_qty: RwSignal::new(String::new()),
            base_price: RwSignal::new("0".to_string()),
            is_active: RwSignal::new(true),
        }
    }

    fn from_variant(v: Variant) -> Self {
        Self {
            key: Uuid::new_v4(),
            id: RwSignal::new(v.id),
            sku: RwSignal::new(v.sku),
            size: RwSignal::new(v.size.unwrap_or_default()),
            color: RwSignal::new(v.color.unwrap_or_default()),
            pack_qty: RwSignal::new(v.pack_qty.map(|q| q.to_string()).unwrap_or_default()),
            base_price: RwSignal::new(v.base_price.to_string()),
            is_active: RwSignal::new(v.is_active),
        }
    }

    /// Сборка строки с валидацией полей
    fn to_variant(&self, index: usize) -> Result<Variant, String> {
        let sku = self.sku.get();
        if sku.trim().is_empty() {
            return Err(format!("Вариант {}: SKU не может быть пустым", index + 1));
        }

        let base_price: f64 = self
            .base_price
            .get()
            .trim()
            .parse()
            .map_err(|_| format!("Вариант {}: цена должна быть числом", index + 1))?;
        if base_price < 0.0 {
            return Err(format!(
                "Вариант {}: цена не может быть отрицательной",
                index + 1
            ));
        }

        let pack_qty_raw = self.pack_qty.get();
        let pack_qty = if pack_qty_raw.trim().is_empty() {
            None
        } else {
            let qty: i32 = pack_qty_raw
                .trim()
                .parse()
                .map_err(|_| format!("Вариант {}: фасовка должна быть целым числом", index + 1))?;
            if qty < 1 {
                return Err(format!("Вариант {}: фасовка должна быть не меньше 1", index + 1));
            }
            Some(qty)
        };

        let size = self.size.get();
        let color = self.color.get();

        Ok(Variant {
            id: self.id.get(),
            sku,
            size: if size.is_empty() { None } else { Some(size) },
            color: if color.is_empty() { None } else { Some(color) },
            pack_qty,
            base_price,
            is_active: self.is_active.get(),
        })
    }
}

#[derive(Clone, Copy)]
pub struct ProductDetailsVm {
    api: ApiClient,

    pub active_tab: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,

    pub id: RwSignal<Option<String>>,
    pub code: RwSignal<String>,
    pub description: RwSignal<String>,
    pub brand: RwSignal<String>,
    pub category_id: RwSignal<String>,
    pub image_path: RwSignal<String>,
    pub is_active: RwSignal<bool>,
    pub comment: RwSignal<String>,

    pub variants: RwSignal<Vec<VariantRowVm>>,

    /// Справочник категорий для селектора
    pub categories: RwSignal<Vec<Category>>,
}

impl ProductDetailsVm {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            active_tab: RwSignal::new("general".to_string()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            id: RwSignal::new(None),
            code: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            brand: RwSignal::new(String::new()),
            category_id: RwSignal::new(String::new()),
            image_path: RwSignal::new(String::new()),
            is_active: RwSignal::new(true),
            comment: RwSignal::new(String::new()),
            variants: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let id = self.id;
        Signal::derive(move || id.get().is_some())
    }

    pub fn load_categories(&self) {
        let api = self.api;
        let categories = self.categories;
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(list) = category_model::fetch_categories(api).await {
                categories.set(list);
            }
        });
    }

    pub fn load(&self, existing_id: String) {
        let api = self.api;
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(api, &existing_id).await {
                Ok(p) => {
                    vm.id.set(Some(p.base.id.as_string()));
                    vm.code.set(p.base.code);
                    vm.description.set(p.base.description);
                    vm.brand.set(p.brand);
                    vm.category_id.set(p.category_id.unwrap_or_default());
                    vm.image_path.set(p.image_path.unwrap_or_default());
                    vm.is_active.set(p.is_active);
                    vm.comment.set(p.base.comment.unwrap_or_default());
                    vm.variants.set(
                        p.variants
                            .into_iter()
                            .map(VariantRowVm::from_variant)
                            .collect(),
                    );
                }
                Err(e) => vm.error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    pub fn add_variant(&self) {
        self.variants.update(|rows| rows.push(VariantRowVm::empty()));
    }

    pub fn remove_variant(&self, key: Uuid) {
        self.variants.update(|rows| rows.retain(|r| r.key != key));
    }

    fn to_dto(&self) -> Result<ProductDto, String> {
        if self.description.get().trim().is_empty() {
            return Err("Наименование обязательно для заполнения".to_string());
        }
        if self.brand.get().trim().is_empty() {
            return Err("Бренд обязателен для заполнения".to_string());
        }

        let mut variants = Vec::new();
        for (i, row) in self.variants.get().into_iter().enumerate() {
            variants.push(row.to_variant(i)?);
        }

        let code = self.code.get();
        let category_id = self.category_id.get();
        let image_path = self.image_path.get();
        let comment = self.comment.get();

        Ok(ProductDto {
            id: self.id.get(),
            code: if code.is_empty() { None } else { Some(code) },
            description: self.description.get(),
            brand: self.brand.get(),
            category_id: if category_id.is_empty() {
                None
            } else {
                Some(category_id)
            },
            image_path: if image_path.is_empty() {
                None
            } else {
                Some(image_path)
            },
            is_active: self.is_active.get(),
            variants,
            comment: if comment.is_empty() {
                None
            } else {
                Some(comment)
            },
        })
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let dto = match self.to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let api = self.api;
        let vm = *self;
        vm.is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(api, &dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => vm.error.set(Some(e)),
            }
            vm.is_saving.set(false);
        });
    }
}
