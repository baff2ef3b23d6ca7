//! Типизированный API-клиент — единственная граница системы.
//!
//! Весь обмен с REST-бэкендом идёт через [`client::ApiClient`]: базовый URL,
//! заголовок авторизации и перехват ошибок собраны здесь, а не размазаны по
//! экранам. Типизированные функции ресурсов живут в `model.rs`/`api.rs`
//! соответствующих модулей и принимают клиента параметром.

pub mod client;
pub mod config;

pub use client::{use_api, ApiClient};
