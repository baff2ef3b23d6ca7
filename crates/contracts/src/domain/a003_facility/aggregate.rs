use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use crate::enums::facility_type::FacilityType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор торгового объекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacilityId(pub Uuid);

impl FacilityId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for FacilityId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FacilityId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Value objects
// ============================================================================

/// Географическая точка (WGS 84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Координаты в допустимых диапазонах WGS 84
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Торговый объект сети (магазин/склад/дарксток)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    #[serde(flatten)]
    pub base: BaseAggregate<FacilityId>,

    // Специфичные поля агрегата
    #[serde(rename = "clusterId")]
    pub cluster_id: Option<String>,

    #[serde(rename = "facilityType")]
    pub facility_type: FacilityType,

    pub address: String,

    /// Точка расположения объекта
    pub geo: GeoPoint,

    /// Геозона обслуживания — полигон из вершин в порядке обхода.
    /// Пустой список означает «зона не задана».
    #[serde(rename = "serviceArea", default)]
    pub service_area: Vec<GeoPoint>,

    pub email: String,

    pub phone: String,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Поверхностная проверка формата e-mail перед отправкой формы.
/// Настоящая валидация адреса — на сервере.
pub fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.contains(char::is_whitespace)
        && value.matches('@').count() == 1
}

impl Facility {
    /// Создать новый объект для отправки на сервер
    pub fn new_for_insert(
        code: String,
        description: String,
        facility_type: FacilityType,
        address: String,
    ) -> Self {
        let base = BaseAggregate::new(FacilityId::new_v4(), code, description);
        Self {
            base,
            cluster_id: None,
            facility_type,
            address,
            geo: GeoPoint::default(),
            service_area: Vec::new(),
            email: String::new(),
            phone: String::new(),
            is_active: true,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &FacilityDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.cluster_id = dto.cluster_id.clone();
        self.facility_type = dto.facility_type;
        self.address = dto.address.clone();
        self.geo = dto.geo;
        self.service_area = dto.service_area.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        self.is_active = dto.is_active;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.address.trim().is_empty() {
            return Err("Адрес не может быть пустым".into());
        }
        if !self.geo.is_valid() {
            return Err("Координаты вне допустимого диапазона".into());
        }
        if !self.email.trim().is_empty() && !is_plausible_email(&self.email) {
            return Err("Некорректный e-mail".into());
        }
        if !self.service_area.is_empty() {
            if self.service_area.len() < 3 {
                return Err("Зона обслуживания должна содержать минимум 3 вершины".into());
            }
            if self.service_area.iter().any(|p| !p.is_valid()) {
                return Err("Вершина зоны обслуживания вне допустимого диапазона".into());
            }
        }
        Ok(())
    }
}

impl AggregateRoot for Facility {
    type Id = FacilityId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "facility"
    }

    fn element_name() -> &'static str {
        "Торговый объект"
    }

    fn list_name() -> &'static str {
        "Торговые объекты"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления торгового объекта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "clusterId")]
    pub cluster_id: Option<String>,
    #[serde(rename = "facilityType")]
    pub facility_type: FacilityType,
    pub address: String,
    pub geo: GeoPoint,
    #[serde(rename = "serviceArea", default)]
    pub service_area: Vec<GeoPoint>,
    pub email: String,
    pub phone: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub comment: Option<String>,
}

impl Default for FacilityDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            cluster_id: None,
            facility_type: FacilityType::Store,
            address: String::new(),
            geo: GeoPoint::default(),
            service_area: Vec::new(),
            email: String::new(),
            phone: String::new(),
            is_active: true,
            comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility() -> Facility {
        let mut f = Facility::new_for_insert(
            "FAC-001".into(),
            "Магазин на Тверской".into(),
            FacilityType::Store,
            "Москва, Тверская, 1".into(),
        );
        f.geo = GeoPoint::new(55.757, 37.615);
        f
    }

    #[test]
    fn test_validate_coordinates() {
        let mut f = facility();
        assert!(f.validate().is_ok());

        f.geo.lat = 91.0;
        assert!(f.validate().is_err());

        f.geo = GeoPoint::new(-90.0, 180.0);
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_validate_service_area() {
        let mut f = facility();
        f.service_area = vec![GeoPoint::new(55.0, 37.0), GeoPoint::new(55.1, 37.0)];
        assert!(f.validate().is_err());

        f.service_area.push(GeoPoint::new(55.1, 37.1));
        assert!(f.validate().is_ok());

        f.service_area[0].lon = 200.0;
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_plausible_email("ops@example.com"));
        assert!(is_plausible_email(" manager@retail.net "));
        assert!(!is_plausible_email("no-at-sign"));
        assert!(!is_plausible_email("two@@example.com"));
        assert!(!is_plausible_email("name@nodot"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("a b@example.com"));
    }

    #[test]
    fn test_validate_allows_empty_email() {
        let mut f = facility();
        f.email = String::new();
        assert!(f.validate().is_ok());

        f.email = "bad".into();
        assert!(f.validate().is_err());
    }
}
