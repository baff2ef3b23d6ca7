use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use crate::enums::campaign_status::CampaignStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор промо-акции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignId(pub Uuid);

impl CampaignId {
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

impl AggregateId for CampaignId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CampaignId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Промо-акция с областью действия по кластерам
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(flatten)]
    pub base: BaseAggregate<CampaignId>,

    // Специфичные поля агрегата
    #[serde(rename = "startsAt")]
    pub starts_at: chrono::DateTime<chrono::Utc>,

    #[serde(rename = "endsAt")]
    pub ends_at: chrono::DateTime<chrono::Utc>,

    /// Скидка в процентах, (0; 100]
    #[serde(rename = "discountPercent")]
    pub discount_percent: f64,

    /// Кластеры, на которые распространяется акция
    #[serde(rename = "clusterIds", default)]
    pub cluster_ids: Vec<String>,

    pub status: CampaignStatus,
}

impl Campaign {
    /// Создать новую акцию для отправки на сервер
    pub fn new_for_insert(
        code: String,
        description: String,
        starts_at: chrono::DateTime<chrono::Utc>,
        ends_at: chrono::DateTime<chrono::Utc>,
        discount_percent: f64,
    ) -> Self {
        let base = BaseAggregate::new(CampaignId::new_v4(), code, description);
        Self {
            base,
            starts_at,
            ends_at,
            discount_percent,
            cluster_ids: Vec::new(),
            status: CampaignStatus::Draft,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &CampaignDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.starts_at = dto.starts_at;
        self.ends_at = dto.ends_at;
        self.discount_percent = dto.discount_percent;
        self.cluster_ids = dto.cluster_ids.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if !(self.discount_percent > 0.0 && self.discount_percent <= 100.0) {
            return Err("Скидка должна быть в диапазоне (0; 100]".into());
        }
        if self.ends_at <= self.starts_at {
            return Err("Дата окончания должна быть позже даты начала".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Campaign {
    type Id = CampaignId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "campaign"
    }

    fn element_name() -> &'static str {
        "Промо-акция"
    }

    fn list_name() -> &'static str {
        "Промо-акции"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления промо-акции
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "startsAt")]
    pub starts_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "endsAt")]
    pub ends_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "discountPercent")]
    pub discount_percent: f64,
    #[serde(rename = "clusterIds", default)]
    pub cluster_ids: Vec<String>,
    pub comment: Option<String>,
}

impl Default for CampaignDto {
    fn default() -> Self {
        let now = chrono::Utc::now();
        Self {
            id: None,
            code: None,
            description: String::new(),
            starts_at: now,
            ends_at: now + chrono::Duration::days(7),
            discount_percent: 0.0,
            cluster_ids: Vec::new(),
            comment: None,
        }
    }
}

/// Запрос смены статуса (`POST /api/campaign/{id}/status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeCampaignStatusRequest {
    pub status: CampaignStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn campaign() -> Campaign {
        let now = Utc::now();
        Campaign::new_for_insert(
            "PROMO-1".into(),
            "Летняя распродажа".into(),
            now,
            now + Duration::days(14),
            15.0,
        )
    }

    #[test]
    fn test_validate_discount_bounds() {
        let mut c = campaign();
        assert!(c.validate().is_ok());

        c.discount_percent = 0.0;
        assert!(c.validate().is_err());

        c.discount_percent = 100.0;
        assert!(c.validate().is_ok());

        c.discount_percent = 100.5;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_period() {
        let mut c = campaign();
        c.ends_at = c.starts_at;
        assert!(c.validate().is_err());

        c.ends_at = c.starts_at + Duration::hours(1);
        assert!(c.validate().is_ok());
    }
}
