use super::{EntityMetadata, EventStore, Origin};

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех агрегатов системы
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить бизнес-код записи (например, "CAT-0012")
    fn code(&self) -> &str;

    /// Получить описание/название записи
    fn description(&self) -> &str;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    /// Получить изменяемые метаданные
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Получить хранилище событий
    fn events(&self) -> &EventStore;

    /// Получить изменяемое хранилище событий
    fn events_mut(&mut self) -> &mut EventStore;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции в REST API (например, "category")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Категория")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Категории")
    fn list_name() -> &'static str;

    /// Источник данных агрегата
    fn origin() -> Origin;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата для системы (например, "a001_category")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Базовый путь ресурса в REST API (например, "/api/category")
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }
}
