//! Tab labels - единственный источник правды для заголовков табов.

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Для detail-табов заголовок уточняется после загрузки записи через
/// `AppGlobalContext::update_tab_title`. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Справочники ───────────────────────────────────────────────────
        "a001_category" => "Категории",
        "a002_cluster" => "Кластеры",
        "a003_facility" => "Торговые объекты",
        "a004_product" => "Товары",
        "a005_campaign" => "Промо-акции",

        // ── Инструменты ───────────────────────────────────────────────────
        "p910_price_margin" => "Матрица наценок",

        // ── Detail-табы ───────────────────────────────────────────────────
        "a003_facility_new" => "Новый объект",
        k if k.starts_with("a003_facility_detail_") => "Торговый объект",
        "a004_product_new" => "Новый товар",
        k if k.starts_with("a004_product_detail_") => "Товар",

        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(tab_label_for_key("a001_category"), "Категории");
        assert_eq!(tab_label_for_key("p910_price_margin"), "Матрица наценок");
        assert_eq!(
            tab_label_for_key("a004_product_detail_42"),
            "Товар"
        );
        assert_eq!(tab_label_for_key("unknown"), "");
    }
}
