//! 置换表
//!
//! 缓存已搜索过的节点，供迭代加深的各轮和重叠子树复用

use std::collections::HashMap;

use protocol::{Action, ActionKind, Board, Side};

/// 置换表条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// 精确值
    Exact,
    /// 下界（Beta 截断产生的值）
    LowerBound,
    /// 上界（Alpha 截断产生的值）
    UpperBound,
}

/// 搜索节点键
///
/// 键只包含节点身份：棋盘内容、根方视角、剩余深度、极大/极小角色、
/// 行动类别。查询时的 alpha/beta 窗口不参与键：在某个窗口下算出的
/// 剪枝值能否复用，由条目的界类型在查询时判定。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TTKey<B> {
    /// 棋盘内容
    pub board: B,
    /// 发起搜索的根方（评估视角）
    pub root: Side,
    /// 剩余搜索深度
    pub depth: u8,
    /// 当前节点是否极大层
    pub maximizing: bool,
    /// 行动类别
    pub kind: ActionKind,
}

/// 置换表条目
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    /// 评估分数
    pub score: i32,
    /// 条目类型
    pub entry_type: EntryType,
    /// 该节点找到的最佳行动
    pub best: Option<Action>,
}

/// 置换表
///
/// 生命周期与一个引擎实例一致：从不清空、从不淘汰、从不持久化。
/// 搜索深度小、对局长度有限，无界增长是可接受的。
pub struct TranspositionTable<B: Board> {
    entries: HashMap<TTKey<B>, TTEntry>,
    /// 命中次数
    hits: u64,
    /// 查询次数
    probes: u64,
}

impl<B: Board> TranspositionTable<B> {
    /// 创建空表
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            probes: 0,
        }
    }

    /// 查询条目
    ///
    /// 只有在当前窗口下可以直接复用时才算命中：精确值总是可用；
    /// 下界只有达到 beta 截断时可用；上界只有不超过 alpha 时可用。
    /// 其余情况按未命中处理，调用方重新搜索。
    pub fn probe(
        &mut self,
        key: &TTKey<B>,
        alpha: i32,
        beta: i32,
    ) -> Option<(i32, Option<Action>)> {
        self.probes += 1;

        let entry = self.entries.get(key)?;
        let usable = match entry.entry_type {
            EntryType::Exact => true,
            EntryType::LowerBound => entry.score >= beta,
            EntryType::UpperBound => entry.score <= alpha,
        };

        if usable {
            self.hits += 1;
            Some((entry.score, entry.best))
        } else {
            None
        }
    }

    /// 存储条目
    ///
    /// 同键覆盖旧值；同一个键在固定棋盘、深度、类别下的结果是
    /// 确定的，覆盖不会改变语义。
    pub fn store(&mut self, key: TTKey<B>, score: i32, entry_type: EntryType, best: Option<Action>) {
        self.entries.insert(
            key,
            TTEntry {
                score,
                entry_type,
                best,
            },
        );
    }

    /// 当前条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 表是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 获取统计信息
    pub fn stats(&self) -> TTStats {
        TTStats {
            entries: self.entries.len(),
            hits: self.hits,
            probes: self.probes,
        }
    }
}

impl<B: Board> Default for TranspositionTable<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// 置换表统计信息
#[derive(Debug, Clone)]
pub struct TTStats {
    pub entries: usize,
    pub hits: u64,
    pub probes: u64,
}

impl TTStats {
    /// 命中率
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64
        }
    }
}
