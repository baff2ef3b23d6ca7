//! ViewModel формы торгового объекта (EditDetails MVVM Standard)
//!
//! Поля формы — отдельные сигналы: вкладки редактируют их независимо,
//! DTO собирается только при сохранении.

use super::model;
use crate::domain::a002_cluster::ui::details::model as cluster_model;
use crate::shared::api::ApiClient;
use contracts::domain::a002_cluster::aggregate::Cluster;
use contracts::domain::a003_facility::aggregate::{is_plausible_email, FacilityDto, GeoPoint};
use contracts::domain::common::AggregateId;
use contracts::enums::facility_type::FacilityType;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct FacilityDetailsVm {
    api: ApiClient,

    pub active_tab: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,

    // Общие поля
    pub id: RwSignal<Option<String>>,
    pub code: RwSignal<String>,
    pub description: RwSignal<String>,
    pub cluster_id: RwSignal<String>,
    pub facility_type: RwSignal<FacilityType>,
    pub is_active: RwSignal<bool>,
    pub comment: RwSignal<String>,

    // Вкладка «Расположение»
    pub address: RwSignal<String>,
    pub lat: RwSignal<String>,
    pub lon: RwSignal<String>,
    pub service_area: RwSignal<Vec<(RwSignal<String>, RwSignal<String>)>>,
    pub is_geocoding: RwSignal<bool>,

    // Вкладка «Контакты»
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,

    // Справочник кластеров для выбора
    pub clusters: RwSignal<Vec<Cluster>>,
}

impl FacilityDetailsVm {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            active_tab: RwSignal::new("general".to_string()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            id: RwSignal::new(None),
            code: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            cluster_id: RwSignal::new(String::new()),
            facility_type: RwSignal::new(FacilityType::Store),
            is_active: RwSignal::new(true),
            comment: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            lat: RwSignal::new(String::new()),
            lon: RwSignal::new(String::new()),
            service_area: RwSignal::new(Vec::new()),
            is_geocoding: RwSignal::new(false),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            clusters: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let id = self.id;
        Signal::derive(move || id.get().is_some())
    }

    /// Справочник кластеров для селектора (нужен всегда)
    pub fn load_clusters(&self) {
        let api = self.api;
        let clusters = self.clusters;
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(list) = cluster_model::fetch_clusters(api).await {
                clusters.set(list);
            }
        });
    }

    /// Загрузка записи при редактировании
    pub fn load(&self, existing_id: String) {
        let api = self.api;
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(api, &existing_id).await {
                Ok(f) => {
                    vm.id.set(Some(f.base.id.as_string()));
                    vm.code.set(f.base.code);
                    vm.description.set(f.base.description);
                    vm.cluster_id.set(f.cluster_id.unwrap_or_default());
                    vm.facility_type.set(f.facility_type);
                    vm.is_active.set(f.is_active);
                    vm.comment.set(f.base.comment.unwrap_or_default());
                    vm.address.set(f.address);
                    vm.lat.set(f.geo.lat.to_string());
                    vm.lon.set(f.geo.lon.to_string());
                    vm.service_area.set(
                        f.service_area
                            .into_iter()
                            .map(|p| {
                                (
                                    RwSignal::new(p.lat.to_string()),
                                    RwSignal::new(p.lon.to_string()),
                                )
                            })
                            .collect(),
                    );
                    vm.email.set(f.email);
                    vm.phone.set(f.phone);
                }
                Err(e) => vm.error.set(Some(format!("Ошибка загрузки: {}", e))),
            }
        });
    }

    pub fn add_vertex(&self) {
        self.service_area.update(|area| {
            area.push((
                RwSignal::new(String::new()),
                RwSignal::new(String::new()),
            ));
        });
    }

    pub fn remove_vertex(&self, index: usize) {
        self.service_area.update(|area| {
            if index < area.len() {
                area.remove(index);
            }
        });
    }

    /// Запрос координат по адресу у сервиса обогащения
    pub fn detect_coordinates(&self) {
        let address = self.address.get();
        if address.trim().is_empty() {
            self.error.set(Some("Сначала заполните адрес".to_string()));
            return;
        }
        let vm = *self;
        vm.is_geocoding.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::geocode_address(&address).await {
                Ok(point) => {
                    vm.lat.set(point.lat.to_string());
                    vm.lon.set(point.lon.to_string());
                    vm.error.set(None);
                }
                Err(e) => vm.error.set(Some(format!("Геокодер: {}", e))),
            }
            vm.is_geocoding.set(false);
        });
    }

    /// Сборка DTO с поверхностной валидацией формы
    fn to_dto(&self) -> Result<FacilityDto, String> {
        if self.description.get().trim().is_empty() {
            return Err("Наименование обязательно для заполнения".to_string());
        }
        if self.address.get().trim().is_empty() {
            return Err("Адрес обязателен для заполнения".to_string());
        }

        let lat: f64 = self
            .lat
            .get()
            .trim()
            .parse()
            .map_err(|_| "Широта должна быть числом".to_string())?;
        let lon: f64 = self
            .lon
            .get()
            .trim()
            .parse()
            .map_err(|_| "Долгота должна быть числом".to_string())?;
        let geo = GeoPoint::new(lat, lon);
        if !geo.is_valid() {
            return Err("Координаты вне допустимого диапазона".to_string());
        }

        let email = self.email.get();
        if !email.trim().is_empty() && !is_plausible_email(&email) {
            return Err("Некорректный e-mail".to_string());
        }

        let mut service_area = Vec::new();
        for (i, (lat_sig, lon_sig)) in self.service_area.get().into_iter().enumerate() {
            let v_lat: f64 = lat_sig
                .get()
                .trim()
                .parse()
                .map_err(|_| format!("Вершина {}: широта должна быть числом", i + 1))?;
            let v_lon: f64 = lon_sig
                .get()
                .trim()
                .parse()
                .map_err(|_| format!("Вершина {}: долгота должна быть числом", i + 1))?;
            let p = GeoPoint::new(v_lat, v_lon);
            if !p.is_valid() {
                return Err(format!("Вершина {}: вне допустимого диапазона", i + 1));
            }
            service_area.push(p);
        }
        if !service_area.is_empty() && service_area.len() < 3 {
            return Err("Зона обслуживания должна содержать минимум 3 вершины".to_string());
        }

        let cluster_id = self.cluster_id.get();
        let code = self.code.get();
        let comment = self.comment.get();

        Ok(FacilityDto {
            id: self.id.get(),
            code: if code.is_empty() { None } else { Some(code) },
            description: self.description.get(),
            cluster_id: if cluster_id.is_empty() {
                None
            } else {
                Some(cluster_id)
            },
            facility_type: self.facility_type.get(),
            address: self.address.get(),
            geo,
            service_area,
            email,
            phone: self.phone.get(),
            is_active: self.is_active.get(),
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
