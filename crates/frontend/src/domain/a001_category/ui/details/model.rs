//! Типизированные вызовы ресурса `/api/category`

use crate::shared::api::ApiClient;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto, MoveCategoryRequest};

pub async fn fetch_categories(api: ApiClient) -> Result<Vec<Category>, String> {
    api.get_json("/api/category").await
}

pub async fn fetch_by_id(api: ApiClient, id: &str) -> Result<Category, String> {
    api.get_json(&format!("/api/category/{}", id)).await
}

pub async fn save_form(api: ApiClient, dto: &CategoryDto) -> Result<(), String> {
    let _: serde_json::Value = match dto.id {
        Some(ref id) => api.put_json(&format!("/api/category/{}", id), dto).await?,
        None => api.post_json("/api/category", dto).await?,
    };
    Ok(())
}

pub async fn delete_category(api: ApiClient, id: &str) -> Result<(), String> {
    api.delete(&format!("/api/category/{}", id)).await
}

/// Перестановка узла. Сервер — источник истины по parent/rank,
/// после успешного вызова дерево перечитывается.
pub async fn move_category(
    api: ApiClient,
    id: &str,
    request: &MoveCategoryRequest,
) -> Result<(), String> {
    let _: serde_json::Value = api
        .put_json(&format!("/api/category/{}/move", id), request)
        .await?;
    Ok(())
}
