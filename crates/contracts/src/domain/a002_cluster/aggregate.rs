use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор кластера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusterId(pub Uuid);

impl ClusterId {
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

impl AggregateId for ClusterId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClusterId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Кластер — именованная группа торговых объектов
///
/// Используется как область действия ценообразования и назначения акций.
/// Привязка объектов хранится на стороне объекта (`Facility.cluster_id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    #[serde(flatten)]
    pub base: BaseAggregate<ClusterId>,

    // Специфичные поля агрегата
    pub city: String,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Cluster {
    /// Создать новый кластер для отправки на сервер
    pub fn new_for_insert(code: String, description: String, city: String) -> Self {
        let base = BaseAggregate::new(ClusterId::new_v4(), code, description);
        Self {
            base,
            city,
            is_active: true,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &ClusterDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.city = dto.city.clone();
        self.is_active = dto.is_active;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.city.trim().is_empty() {
            return Err("Город не может быть пустым".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Cluster {
    type Id = ClusterId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "cluster"
    }

    fn element_name() -> &'static str {
        "Кластер"
    }

    fn list_name() -> &'static str {
        "Кластеры"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления кластера
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClusterDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub city: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub comment: Option<String>,
}
