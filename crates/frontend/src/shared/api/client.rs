use gloo_net::http::Request;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::api_url;
use crate::shared::toast::ToastService;
use crate::system::auth::storage;

/// Типизированный клиент REST API.
///
/// Добавляет заголовок авторизации из localStorage и перехватывает ошибки:
/// любой сбой транспорта или не-2xx ответ превращается в тост и `Err`.
/// 401 намеренно НЕ перенаправляется на логин и НЕ сбрасывает токены —
/// каждый вызывающий решает сам.
#[derive(Clone, Copy)]
pub struct ApiClient {
    toasts: ToastService,
}

impl ApiClient {
    pub fn new(toasts: ToastService) -> Self {
        Self { toasts }
    }

    fn auth_header() -> Option<String> {
        storage::get_access_token().map(|token| format!("Bearer {}", token))
    }

    fn fail<T>(&self, message: String) -> Result<T, String> {
        self.toasts.error(message.clone());
        Err(message)
    }

    /// GET с декодированием JSON-ответа
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let mut request = Request::get(&api_url(path));
        if let Some(auth) = Self::auth_header() {
            request = request.header("Authorization", &auth);
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => return self.fail(format!("Сбой запроса {}: {}", path, e)),
        };
        if !response.ok() {
            return self.fail(format!("Ошибка {} ({})", response.status(), path));
        }
        match response.json::<T>().await {
            Ok(data) => Ok(data),
            Err(e) => self.fail(format!("Некорректный ответ {}: {}", path, e)),
        }
    }

    /// POST тела с декодированием JSON-ответа
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        self.send_json(path, "POST", body).await
    }

    /// PUT тела с декодированием JSON-ответа
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        self.send_json(path, "PUT", body).await
    }

    /// DELETE без тела
    pub async fn delete(&self, path: &str) -> Result<(), String> {
        let mut request = Request::delete(&api_url(path));
        if let Some(auth) = Self::auth_header() {
            request = request.header("Authorization", &auth);
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => return self.fail(format!("Сбой запроса {}: {}", path, e)),
        };
        if !response.ok() {
            return self.fail(format!("Ошибка {} ({})", response.status(), path));
        }
        Ok(())
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        method: &str,
        body: &B,
    ) -> Result<T, String> {
        let url = api_url(path);
        let mut request = match method {
            "PUT" => Request::put(&url),
            _ => Request::post(&url),
        };
        if let Some(auth) = Self::auth_header() {
            request = request.header("Authorization", &auth);
        }

        let request = match request.json(body) {
            Ok(r) => r,
            Err(e) => return self.fail(format!("Сбой сериализации {}: {}", path, e)),
        };
        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => return self.fail(format!("Сбой запроса {}: {}", path, e)),
        };
        if !response.ok() {
            return self.fail(format!("Ошибка {} ({})", response.status(), path));
        }
        match response.json::<T>().await {
            Ok(data) => Ok(data),
            Err(e) => self.fail(format!("Некорректный ответ {}: {}", path, e)),
        }
    }
}

/// Хук доступа к API-клиенту
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided in context")
}
