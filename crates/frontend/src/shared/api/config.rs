//! Resolution of external endpoints.
//!
//! Compile-time overrides come from environment variables (`option_env!`);
//! without them the API base is derived from the current window location,
//! using port 3000 for the backend server.

/// Get the base URL for API requests
///
/// # Returns
/// - `API_BASE_URL` if it was set at build time
/// - otherwise an URL like "http://localhost:3000" or "https://example.com:3000"
/// - empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/category/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// База CDN для изображений каталога; без `ASSET_CDN_URL` картинки
/// отдаёт сам бэкенд.
pub fn asset_base() -> String {
    match option_env!("ASSET_CDN_URL") {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => api_base(),
    }
}

/// Абсолютный URL изображения по пути из агрегата
pub fn asset_url(path: &str) -> String {
    join_url(&asset_base(), path)
}

/// Внешний сервис обогащения адресов (геокодер); `None` — не настроен,
/// кнопка определения координат при этом скрывается.
pub fn enrichment_base() -> Option<&'static str> {
    option_env!("ENRICH_API_URL")
}

/// Токен сервиса обогащения
pub fn enrichment_token() -> Option<&'static str> {
    option_env!("ENRICH_API_TOKEN")
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://cdn", "/img/a.png"), "http://cdn/img/a.png");
        assert_eq!(join_url("http://cdn", "img/a.png"), "http://cdn/img/a.png");
        assert_eq!(
            join_url("http://cdn", "https://other/x.png"),
            "https://other/x.png"
        );
    }
}
