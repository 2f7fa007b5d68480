//! 棋盘契约
//!
//! 棋盘本身由外部对局引擎实现，引擎侧只依赖这里声明的查询和落子接口。

use crate::action::{Action, ActionKind};
use crate::space::{Coordinate, Side};

/// 外部棋盘必须满足的契约
///
/// 合法性判断完全由棋盘负责：`walkable_destinations` 和
/// `mineable_targets` 返回什么，引擎就信什么。
///
/// 两条额外约定：
/// - 枚举方法对同一个棋盘值必须返回稳定的顺序（引擎用
///   "先枚举者优先" 来打破同分平局）；
/// - `Clone + Eq + Hash` 提供基于内容的棋盘标识。`clone()` 是搜索的
///   模拟原语：每一步推演都在私有副本上进行，调用方的棋盘从不被改动；
///   `Eq + Hash` 用作置换表的键，相同内容的棋盘必须哈希相等。
pub trait Board: Clone + Eq + std::hash::Hash {
    /// 返回指定阵营所有棋子的位置
    fn find_all(&self, side: Side) -> Vec<Coordinate>;

    /// 返回从指定位置出发可以走到的所有格子
    fn walkable_destinations(&self, from: Coordinate) -> Vec<Coordinate>;

    /// 返回指定阵营当前可以采的所有矿格（全盘范围）
    fn mineable_targets(&self, side: Side) -> Vec<Coordinate>;

    /// 原地应用一个行动
    ///
    /// - `ActionKind::Move`：清空 `action.from`，在 `action.to` 放置
    ///   `side` 的棋子；
    /// - `ActionKind::Mine`：挖掉 `action.to` 处的矿。
    fn apply_action(&mut self, action: Action, kind: ActionKind, side: Side);
}
