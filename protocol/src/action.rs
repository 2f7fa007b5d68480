//! 行动定义

use serde::{Deserialize, Serialize};

use crate::space::Coordinate;

/// 行动类别
///
/// 同一个 (from, to) 坐标对既可以表示走子也可以表示采矿，
/// 类别由调用方显式传递，不从棋盘内容推断。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// 走子：清空起点，在终点放置本方棋子
    Move,
    /// 采矿：挖掉/占有目标矿格
    Mine,
}

/// 行动
///
/// 对于采矿行动，`to` 是被挖的矿格，`from` 与 `to` 相同。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// 起始位置
    pub from: Coordinate,
    /// 目标位置
    pub to: Coordinate,
}

impl Action {
    /// 创建新行动
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
