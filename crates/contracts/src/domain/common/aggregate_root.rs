/// Трейт для корня агрегата
///
/// Определяет методы экземпляра и статические метаданные для всех агрегатов
/// каталога
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    fn id(&self) -> Self::Id;

    /// Получить бизнес-код записи (например, "sku-000123")
    fn code(&self) -> &str;

    fn description(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a005")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции для хранилища (например, "product")
    fn collection_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата для системы (например, "a005_product")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Префикс для таблиц хранилища (например, "a005_product_")
    fn table_prefix() -> String {
        format!("{}_", Self::full_name())
    }
}
