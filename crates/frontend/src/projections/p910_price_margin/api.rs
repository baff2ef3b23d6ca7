//! Вызовы инструмента наценок (`/api/pricing/*`)
//!
//! Каскад открывается сервером: фильтры для кластера, затем матрица
//! вариантов по уточнённому фильтру. Наценку считает и применяет сервер.

use crate::shared::api::ApiClient;
use contracts::projections::p910_price_margin::dto::{
    ApplyMarginRequest, ApplyMarginResponse, PriceMatrixRow, PricingFilterQuery, PricingFilters,
};

/// Query string каскадного фильтра (без ведущего '?')
pub fn build_filter_query(query: &PricingFilterQuery) -> String {
    serde_qs::to_string(query).unwrap_or_default()
}

/// Допустимые значения объект/категория/бренд для выбранного кластера
pub async fn fetch_filters(api: ApiClient, cluster_id: &str) -> Result<PricingFilters, String> {
    api.get_json(&format!(
        "/api/pricing/filters?clusterId={}",
        urlencoding::encode(cluster_id)
    ))
    .await
}

/// Матрица вариантов по текущему срезу фильтра
pub async fn fetch_matrix(
    api: ApiClient,
    query: &PricingFilterQuery,
) -> Result<Vec<PriceMatrixRow>, String> {
    api.get_json(&format!("/api/pricing/matrix?{}", build_filter_query(query)))
        .await
}

/// Массовое применение наценки к выбранным вариантам
pub async fn apply_margin(
    api: ApiClient,
    request: &ApplyMarginRequest,
) -> Result<ApplyMarginResponse, String> {
    api.post_json("/api/pricing/apply-margin", request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_query_minimal() {
        let query = PricingFilterQuery {
            cluster_id: "c-1".to_string(),
            ..Default::default()
        };
        assert_eq!(build_filter_query(&query), "clusterId=c-1");
    }

    #[test]
    fn test_build_filter_query_full() {
        let query = PricingFilterQuery {
            cluster_id: "c-1".to_string(),
            facility_id: Some("f-2".to_string()),
            category_id: Some("cat-3".to_string()),
            brand: Some("Aqua".to_string()),
        };
        assert_eq!(
            build_filter_query(&query),
            "clusterId=c-1&facilityId=f-2&categoryId=cat-3&brand=Aqua"
        );
    }
}
