//! 行动枚举
//!
//! 把棋盘报告的合法目标展开成 (起点, 终点) 行动列表

use protocol::{Action, ActionKind, Board, Side};

/// 行动枚举器
///
/// 无副作用；输出顺序与棋盘自身的枚举顺序一致，引擎依赖这个顺序
/// 实现 "先枚举者优先" 的平局决断。
pub struct ActionGenerator;

impl ActionGenerator {
    /// 枚举一方指定类别的所有合法行动
    pub fn generate<B: Board>(board: &B, side: Side, kind: ActionKind) -> Vec<Action> {
        match kind {
            ActionKind::Move => Self::moves(board, side),
            ActionKind::Mine => Self::mines(board, side),
        }
    }

    /// 枚举走子行动：每个棋子到它的每个可走格子
    pub fn moves<B: Board>(board: &B, side: Side) -> Vec<Action> {
        let mut actions = Vec::new();
        for piece in board.find_all(side) {
            for dest in board.walkable_destinations(piece) {
                actions.push(Action::new(piece, dest));
            }
        }
        actions
    }

    /// 枚举采矿行动：每个可采矿格一条行动
    ///
    /// 可采矿格按阵营全盘查询，一个矿格只生成一条行动，起点与
    /// 终点相同。挖矿的效果只取决于目标格，按棋子重复展开同一批
    /// 目标只会白白放大分支因子。
    pub fn mines<B: Board>(board: &B, side: Side) -> Vec<Action> {
        board
            .mineable_targets(side)
            .into_iter()
            .map(|target| Action::new(target, target))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testboard::ScriptBoard;
    use protocol::Coordinate;

    #[test]
    fn test_moves_per_piece_per_destination() {
        // 红方两个棋子：(0,0) 可走 (1,0)、(0,1)；(2,2) 无处可走
        let board = ScriptBoard::parse(&[
            "R.#",
            "..#",
            "##R",
        ]);
        let moves = ActionGenerator::moves(&board, Side::Red);
        assert_eq!(moves.len(), 2, "应该恰好枚举出两步走法: {:?}", moves);
        assert!(moves
            .iter()
            .all(|m| m.from == Coordinate::new(0, 0)));
    }

    #[test]
    fn test_moves_empty_for_blocked_piece() {
        let board = ScriptBoard::parse(&[
            "#R#",
            "###",
        ]);
        assert!(ActionGenerator::moves(&board, Side::Red).is_empty());
        // 对方没有棋子，同样为空
        assert!(ActionGenerator::moves(&board, Side::Blue).is_empty());
    }

    #[test]
    fn test_mines_one_action_per_target() {
        // 两个矿都与红方棋子相邻，每个矿只出现一次
        let board = ScriptBoard::parse(&[
            "*R*",
            ".R.",
        ]);
        let mines = ActionGenerator::mines(&board, Side::Red);
        assert_eq!(mines.len(), 2, "两个矿格应该各生成一条行动: {:?}", mines);
        assert!(mines.iter().all(|m| m.from == m.to));
    }

    #[test]
    fn test_mines_respect_side() {
        let board = ScriptBoard::parse(&[
            "*R.B",
        ]);
        // 矿只与红方相邻
        assert_eq!(ActionGenerator::mines(&board, Side::Red).len(), 1);
        assert!(ActionGenerator::mines(&board, Side::Blue).is_empty());
    }

    #[test]
    fn test_enumeration_order_stable() {
        let board = ScriptBoard::parse(&[
            "R..",
            "...",
        ]);
        let first = ActionGenerator::moves(&board, Side::Red);
        let second = ActionGenerator::moves(&board, Side::Red);
        assert_eq!(first, second, "同一棋盘的枚举顺序必须稳定");
    }
}
