use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор категории каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
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

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория каталога (узел дерева)
///
/// Целостность родитель/потомок и порядок по rank принадлежат серверу;
/// клиент лишь подбирает правдоподобные значения перед вызовом move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,

    // Специфичные поля агрегата
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,

    /// Ключ сортировки среди соседей. Сервер держит разрядку с зазорами
    /// и перебалансирует при их исчерпании.
    pub rank: i64,

    #[serde(rename = "imagePath")]
    pub image_path: Option<String>,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Category {
    /// Создать новую категорию для отправки на сервер
    pub fn new_for_insert(
        code: String,
        description: String,
        parent_id: Option<String>,
        rank: i64,
    ) -> Self {
        let base = BaseAggregate::new(CategoryId::new_v4(), code, description);
        Self {
            base,
            parent_id,
            rank,
            image_path: None,
            is_active: true,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &CategoryDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.parent_id = dto.parent_id.clone();
        self.image_path = dto.image_path.clone();
        self.is_active = dto.is_active;
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if let Some(ref pid) = self.parent_id {
            if pid == &self.base.id.as_string() {
                return Err("Категория не может быть родителем самой себя".into());
            }
        }
        Ok(())
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Категория"
    }

    fn list_name() -> &'static str {
        "Категории"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления категории
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
    #[serde(rename = "imagePath")]
    pub image_path: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub comment: Option<String>,
}

/// Запрос перестановки узла дерева (`PUT /api/category/{id}/move`)
///
/// Клиентский rank — UX-подсказка; сервер пересчитывает и является
/// источником истины, после вызова дерево перечитывается.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCategoryRequest {
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
    pub rank: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_description() {
        let mut cat = Category::new_for_insert("CAT-001".into(), "Бакалея".into(), None, 1024);
        assert!(cat.validate().is_ok());

        cat.base.description = "   ".into();
        assert!(cat.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_self_parent() {
        let mut cat = Category::new_for_insert("CAT-002".into(), "Напитки".into(), None, 1024);
        cat.parent_id = Some(cat.base.id.as_string());
        assert!(cat.validate().is_err());
    }
}
