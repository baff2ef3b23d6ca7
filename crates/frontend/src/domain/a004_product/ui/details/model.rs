//! Типизированные вызовы ресурса `/api/product`
//!
//! Список товаров — единственная серверная пагинация в консоли:
//! страница/размер/поиск уходят в query string.

use crate::shared::api::ApiClient;
use contracts::domain::a004_product::aggregate::{Product, ProductDto};
use contracts::shared::PagedResponse;
use serde::Serialize;

/// Параметры страницы списка (кодируются serde_qs)
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct ProductListQuery {
    pub page: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Query string списка товаров (без ведущего '?')
pub fn build_list_query(page: usize, page_size: usize, search: &str) -> String {
    let query = ProductListQuery {
        page,
        page_size,
        search: if search.trim().is_empty() {
            None
        } else {
            Some(search.trim().to_string())
        },
    };
    serde_qs::to_string(&query).unwrap_or_default()
}

pub async fn fetch_products(
    api: ApiClient,
    page: usize,
    page_size: usize,
    search: &str,
) -> Result<PagedResponse<Product>, String> {
    api.get_json(&format!(
        "/api/product?{}",
        build_list_query(page, page_size, search)
    ))
    .await
}

pub async fn fetch_by_id(api: ApiClient, id: &str) -> Result<Product, String> {
    api.get_json(&format!("/api/product/{}", id)).await
}

pub async fn save_form(api: ApiClient, dto: &ProductDto) -> Result<(), String> {
    let _: serde_json::Value = match dto.id {
        Some(ref id) => api.put_json(&format!("/api/product/{}", id), dto).await?,
        None => api.post_json("/api/product", dto).await?,
    };
    Ok(())
}

pub async fn delete_product(api: ApiClient, id: &str) -> Result<(), String> {
    api.delete(&format!("/api/product/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_list_query() {
        assert_eq!(build_list_query(0, 50, ""), "page=0&pageSize=50");
        assert_eq!(build_list_query(2, 100, "  "), "page=2&pageSize=100");
        assert_eq!(
            build_list_query(1, 50, "вода"),
            format!("page=1&pageSize=50&search={}", urlencoding::encode("вода"))
        );
    }
}
