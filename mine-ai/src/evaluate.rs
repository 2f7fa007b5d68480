//! 局面评估函数

use protocol::{Board, Side};

/// 矿差权重
pub const MINE_WEIGHT: i32 = 4;

/// 机动性差权重
pub const WALK_WEIGHT: i32 = 1;

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估局面（从 `side` 的视角，正值对 `side` 有利）
    ///
    /// 4:1 的矿差/机动性差加权。纯函数：只读取棋盘当前报告的
    /// 可采、可走统计，不携带任何状态。只应在叶子节点（深度耗尽）
    /// 或无行动可走的终端节点上调用。
    pub fn evaluate<B: Board>(board: &B, side: Side) -> i32 {
        let opp = side.opponent();

        let mine_diff = board.mineable_targets(side).len() as i32
            - board.mineable_targets(opp).len() as i32;
        let walk_diff = Self::mobility(board, side) - Self::mobility(board, opp);

        MINE_WEIGHT * mine_diff + WALK_WEIGHT * walk_diff
    }

    /// 一方的机动性：所有棋子可走格子数之和
    fn mobility<B: Board>(board: &B, side: Side) -> i32 {
        board
            .find_all(side)
            .into_iter()
            .map(|piece| board.walkable_destinations(piece).len() as i32)
            .sum()
    }
}
