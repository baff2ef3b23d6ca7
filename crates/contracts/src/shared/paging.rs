use serde::{Deserialize, Serialize};

/// Страница серверной выборки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    /// Записи текущей страницы
    pub items: Vec<T>,
    /// Общее количество записей по фильтру
    pub total: usize,
}

impl<T> PagedResponse<T> {
    /// Количество страниц при заданном размере страницы
    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(page_size)
    }
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let page: PagedResponse<i32> = PagedResponse {
            items: vec![],
            total: 101,
        };
        assert_eq!(page.total_pages(50), 3);
        assert_eq!(page.total_pages(101), 1);
        assert_eq!(page.total_pages(0), 0);
    }
}
