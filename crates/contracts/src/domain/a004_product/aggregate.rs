use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Nested rows
// ============================================================================

/// Вариант товара — конкретный SKU (размер/цвет/фасовка)
///
/// Варианты вложены в агрегат товара и сохраняются вместе с ним.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    /// ID варианта (генерирует клиент при добавлении строки)
    pub id: String,
    pub sku: String,
    pub size: Option<String>,
    pub color: Option<String>,
    /// Количество единиц в упаковке
    #[serde(rename = "packQty")]
    pub pack_qty: Option<i32>,
    /// Базовая цена до наценки
    #[serde(rename = "basePrice")]
    pub base_price: f64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Variant {
    pub fn new(sku: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sku,
            size: None,
            color: None,
            pack_qty: None,
            base_price: 0.0,
            is_active: true,
        }
    }

    /// Валидация строки варианта
    pub fn validate(&self) -> Result<(), String> {
        if self.sku.trim().is_empty() {
            return Err("SKU варианта не может быть пустым".into());
        }
        if self.base_price < 0.0 {
            return Err("Базовая цена не может быть отрицательной".into());
        }
        if let Some(qty) = self.pack_qty {
            if qty < 1 {
                return Err("Количество в упаковке должно быть не меньше 1".into());
            }
        }
        Ok(())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога с вложенными вариантами
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    // Специфичные поля агрегата
    pub brand: String,

    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    #[serde(rename = "imagePath")]
    pub image_path: Option<String>,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Создать новый товар для отправки на сервер
    pub fn new_for_insert(code: String, description: String, brand: String) -> Self {
        let base = BaseAggregate::new(ProductId::new_v4(), code, description);
        Self {
            base,
            brand,
            category_id: None,
            image_path: None,
            is_active: true,
            variants: Vec::new(),
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &ProductDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.brand = dto.brand.clone();
        self.category_id = dto.category_id.clone();
        self.image_path = dto.image_path.clone();
        self.is_active = dto.is_active;
        self.variants = dto.variants.clone();
    }

    /// Валидация данных, включая строки вариантов
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.brand.trim().is_empty() {
            return Err("Бренд не может быть пустым".into());
        }
        for (i, variant) in self.variants.iter().enumerate() {
            variant
                .validate()
                .map_err(|e| format!("Вариант {}: {}", i + 1, e))?;
        }
        Ok(())
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Товар"
    }

    fn list_name() -> &'static str {
        "Товары"
    }

    fn origin() -> Origin {
        Origin::Erp
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления товара
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub brand: String,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    #[serde(rename = "imagePath")]
    pub image_path: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(default)]
    pub variants: Vec<Variant>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_validation() {
        let mut v = Variant::new("SKU-1".into());
        assert!(v.validate().is_ok());

        v.base_price = -1.0;
        assert!(v.validate().is_err());

        v.base_price = 99.9;
        v.pack_qty = Some(0);
        assert!(v.validate().is_err());

        v.pack_qty = Some(6);
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_product_validation_reports_variant_index() {
        let mut p = Product::new_for_insert("PRD-1".into(), "Вода питьевая".into(), "Aqua".into());
        p.variants.push(Variant::new("SKU-1".into()));
        p.variants.push(Variant::new("".into()));

        let err = p.validate().unwrap_err();
        assert!(err.starts_with("Вариант 2:"), "{}", err);
    }
}
