//! Контракты между фронтендом и REST-бэкендом консоли управления сетью.
//!
//! Крейт содержит только типы: агрегаты, DTO форм и проекций, enum-ы.
//! Вся бизнес-логика (валидация целостности, расчёты, хранение) живёт
//! на стороне сервера; здесь — сериализуемые структуры и поверхностная
//! валидация форм.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod system;
