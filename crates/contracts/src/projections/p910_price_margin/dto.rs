//! DTO инструмента наценок (прайс-матрица)
//!
//! Каскад фильтров открывается сервером: выбор кластера даёт допустимые
//! объекты/категории/бренды, любое уточнение перечитывает матрицу вариантов.
//! Расчёт цен по наценке выполняется сервером по запросу клиента.

use serde::{Deserialize, Serialize};

/// Параметры каскадной выборки (query string, кодируется serde_qs)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PricingFilterQuery {
    #[serde(rename = "clusterId")]
    pub cluster_id: String,
    #[serde(rename = "facilityId", skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<String>,
    #[serde(rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// Вариант значения фильтра, открытый сервером для текущего кластера
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
}

/// Допустимые значения фильтров для выбранного кластера
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PricingFilters {
    #[serde(default)]
    pub facilities: Vec<FilterOption>,
    #[serde(default)]
    pub categories: Vec<FilterOption>,
    #[serde(default)]
    pub brands: Vec<String>,
}

/// Строка прайс-матрицы (один вариант товара в области действия фильтра)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceMatrixRow {
    #[serde(rename = "variantId")]
    pub variant_id: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub sku: String,
    pub brand: String,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "basePrice")]
    pub base_price: f64,
    /// Действующая цена продажи (рассчитана сервером)
    #[serde(rename = "currentPrice")]
    pub current_price: f64,
    /// Действующая наценка в процентах
    #[serde(rename = "currentMargin")]
    pub current_margin: f64,
}

/// Запрос массового применения наценки (`POST /api/pricing/apply-margin`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyMarginRequest {
    #[serde(flatten)]
    pub scope: PricingFilterQuery,
    /// Выбранные варианты; пустой список недопустим
    #[serde(rename = "variantIds")]
    pub variant_ids: Vec<String>,
    /// Наценка в процентах к базовой цене
    #[serde(rename = "marginPercent")]
    pub margin_percent: f64,
}

/// Ответ сервера на применение наценки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyMarginResponse {
    /// Количество обновлённых вариантов
    pub updated: i64,
}
