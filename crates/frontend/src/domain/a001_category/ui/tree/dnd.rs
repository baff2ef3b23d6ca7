//! Чистая логика перестановки узлов дерева при drag-and-drop.
//!
//! Клиент лишь подбирает правдоподобные parent/rank по позиции указателя;
//! источник истины — сервер (`PUT /api/category/{id}/move`), после вызова
//! дерево перечитывается.

use std::collections::HashSet;

/// Шаг разрядки рангов. Сервер раздаёт ранги с зазорами этого порядка
/// и перебалансирует, когда зазор исчерпан.
pub const RANK_STEP: i64 = 1024;

/// Куда падает перетаскиваемый узел относительно целевой строки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    /// Соседом перед целью
    Before,
    /// Соседом после цели
    After,
    /// Последним ребёнком цели
    Into,
}

/// Классификация позиции сброса по вертикальной доле строки:
/// верхняя четверть — перед, нижняя четверть — после, середина — внутрь.
pub fn classify_drop(offset_y: f64, row_height: f64) -> DropPosition {
    if row_height <= 0.0 {
        return DropPosition::Into;
    }
    let ratio = (offset_y / row_height).clamp(0.0, 1.0);
    if ratio < 0.25 {
        DropPosition::Before
    } else if ratio > 0.75 {
        DropPosition::After
    } else {
        DropPosition::Into
    }
}

/// Плоское представление узла для расчётов перестановки
#[derive(Debug, Clone, PartialEq)]
pub struct FlatNode {
    pub id: String,
    pub parent_id: Option<String>,
    pub rank: i64,
}

/// Итог планирования переноса: новый родитель и ранг среди его детей
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMove {
    pub parent_id: Option<String>,
    pub rank: i64,
}

/// id узла и всех его потомков
pub fn subtree_ids(nodes: &[FlatNode], root_id: &str) -> HashSet<String> {
    let mut result = HashSet::new();
    result.insert(root_id.to_string());
    // Дерево неглубокое: простые проходы до насыщения
    loop {
        let before = result.len();
        for node in nodes {
            if let Some(ref pid) = node.parent_id {
                if result.contains(pid) {
                    result.insert(node.id.clone());
                }
            }
        }
        if result.len() == before {
            break;
        }
    }
    result
}

/// Проверка циклов: нельзя бросать узел на себя или в своё поддерево
pub fn is_valid_move(nodes: &[FlatNode], dragged_id: &str, target_id: &str) -> bool {
    if dragged_id == target_id {
        return false;
    }
    !subtree_ids(nodes, dragged_id).contains(target_id)
}

/// Ранг между двумя соседями.
///
/// При нулевом зазоре возвращается ранг левого соседа — сервер при записи
/// перебалансирует разрядку сам.
pub fn rank_between(prev: Option<i64>, next: Option<i64>) -> i64 {
    match (prev, next) {
        (None, None) => RANK_STEP,
        (Some(p), None) => p + RANK_STEP,
        (None, Some(n)) => n - RANK_STEP,
        (Some(p), Some(n)) => p + (n - p) / 2,
    }
}

/// Спланировать перенос `dragged_id` на строку `target_id` в позицию `position`.
///
/// Возвращает `None`, если перенос недопустим (цикл, неизвестные узлы).
pub fn plan_move(
    nodes: &[FlatNode],
    dragged_id: &str,
    target_id: &str,
    position: DropPosition,
) -> Option<PlannedMove> {
    if !is_valid_move(nodes, dragged_id, target_id) {
        return None;
    }
    let target = nodes.iter().find(|n| n.id == target_id)?;
    nodes.iter().find(|n| n.id == dragged_id)?;

    let new_parent = match position {
        DropPosition::Into => Some(target.id.clone()),
        DropPosition::Before | DropPosition::After => target.parent_id.clone(),
    };

    // Соседи в новом родителе, без самого переносимого узла, по возрастанию ранга
    let mut siblings: Vec<&FlatNode> = nodes
        .iter()
        .filter(|n| n.parent_id == new_parent && n.id != dragged_id)
        .collect();
    siblings.sort_by_key(|n| n.rank);

    let rank = match position {
        DropPosition::Into => {
            // в конец списка детей
            rank_between(siblings.last().map(|n| n.rank), None)
        }
        DropPosition::Before | DropPosition::After => {
            let idx = siblings.iter().position(|n| n.id == target_id)?;
            let (prev, next) = if position == DropPosition::Before {
                (
                    idx.checked_sub(1).map(|i| siblings[i].rank),
                    Some(siblings[idx].rank),
                )
            } else {
                (
                    Some(siblings[idx].rank),
                    siblings.get(idx + 1).map(|n| n.rank),
                )
            };
            rank_between(prev, next)
        }
    };

    Some(PlannedMove {
        parent_id: new_parent,
        rank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, parent: Option<&str>, rank: i64) -> FlatNode {
        FlatNode {
            id: id.to_string(),
            parent_id: parent.map(|s| s.to_string()),
            rank,
        }
    }

    /// root ── a (1024) ── a1 (1024), a2 (2048)
    ///      └─ b (2048)
    ///      └─ c (3072)
    fn sample() -> Vec<FlatNode> {
        vec![
            node("a", None, 1024),
            node("b", None, 2048),
            node("c", None, 3072),
            node("a1", Some("a"), 1024),
            node("a2", Some("a"), 2048),
        ]
    }

    #[test]
    fn test_classify_drop_thresholds() {
        assert_eq!(classify_drop(2.0, 40.0), DropPosition::Before);
        assert_eq!(classify_drop(9.9, 40.0), DropPosition::Before);
        assert_eq!(classify_drop(10.1, 40.0), DropPosition::Into);
        assert_eq!(classify_drop(20.0, 40.0), DropPosition::Into);
        assert_eq!(classify_drop(29.9, 40.0), DropPosition::Into);
        assert_eq!(classify_drop(30.1, 40.0), DropPosition::After);
        assert_eq!(classify_drop(39.0, 40.0), DropPosition::After);
        // дегенеративная строка
        assert_eq!(classify_drop(5.0, 0.0), DropPosition::Into);
    }

    #[test]
    fn test_subtree_ids() {
        let ids = subtree_ids(&sample(), "a");
        assert!(ids.contains("a") && ids.contains("a1") && ids.contains("a2"));
        assert!(!ids.contains("b"));
    }

    #[test]
    fn test_cycle_guard() {
        let nodes = sample();
        // на себя
        assert!(!is_valid_move(&nodes, "a", "a"));
        // в собственное поддерево
        assert!(!is_valid_move(&nodes, "a", "a1"));
        assert!(plan_move(&nodes, "a", "a2", DropPosition::Into).is_none());
        // валидный перенос
        assert!(is_valid_move(&nodes, "a1", "b"));
    }

    #[test]
    fn test_rank_between() {
        assert_eq!(rank_between(None, None), RANK_STEP);
        assert_eq!(rank_between(Some(2048), None), 2048 + RANK_STEP);
        assert_eq!(rank_between(None, Some(1024)), 0);
        assert_eq!(rank_between(Some(1024), Some(2048)), 1536);
        // нулевой зазор: отдаём левый ранг, сервер перебалансирует
        assert_eq!(rank_between(Some(5), Some(6)), 5);
    }

    #[test]
    fn test_plan_move_before_after() {
        let nodes = sample();

        // c перед b: между a (1024) и b (2048)
        let planned = plan_move(&nodes, "c", "b", DropPosition::Before).unwrap();
        assert_eq!(planned.parent_id, None);
        assert_eq!(planned.rank, 1536);

        // a1 после b: между b (2048) и c (3072)
        let planned = plan_move(&nodes, "a1", "b", DropPosition::After).unwrap();
        assert_eq!(planned.parent_id, None);
        assert_eq!(planned.rank, 2560);

        // b перед a: до первого соседа
        let planned = plan_move(&nodes, "b", "a", DropPosition::Before).unwrap();
        assert_eq!(planned.rank, 1024 - RANK_STEP);
    }

    #[test]
    fn test_plan_move_into() {
        let nodes = sample();

        // b внутрь a: после последнего ребёнка a2 (2048)
        let planned = plan_move(&nodes, "b", "a", DropPosition::Into).unwrap();
        assert_eq!(planned.parent_id, Some("a".to_string()));
        assert_eq!(planned.rank, 2048 + RANK_STEP);

        // внутрь пустого узла
        let planned = plan_move(&nodes, "a1", "c", DropPosition::Into).unwrap();
        assert_eq!(planned.parent_id, Some("c".to_string()));
        assert_eq!(planned.rank, RANK_STEP);
    }

    #[test]
    fn test_plan_move_ignores_dragged_in_neighbors() {
        let nodes = sample();
        // a2 перед a1: сосед слева отсутствует (a2 исключён из списка)
        let planned = plan_move(&nodes, "a2", "a1", DropPosition::Before).unwrap();
        assert_eq!(planned.parent_id, Some("a".to_string()));
        assert_eq!(planned.rank, 1024 - RANK_STEP);
    }
}
