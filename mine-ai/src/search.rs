//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝 + 迭代加深

use protocol::{Action, ActionKind, Board, Side};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::Evaluator;
use crate::generate::ActionGenerator;
use crate::transposition::{EntryType, TTKey, TTStats, TranspositionTable};

/// 搜索窗口边界
const INFINITY: i32 = i32::MAX - 1;

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// 采矿策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MineStrategy {
    /// 对采矿行动跑迭代加深搜索
    Search,
    /// 在可采矿格中随机挑一个（轻量降级模式）
    Random,
}

/// AI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// 迭代加深的最大深度
    pub max_depth: u8,
    /// 返回采矿结果前的人为停顿（毫秒）
    ///
    /// 只用来给界面留 "思考时间"，不参与任何计算。
    pub artificial_delay_ms: u64,
    /// 采矿策略
    pub mine_strategy: MineStrategy,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                max_depth: 1,
                artificial_delay_ms: 0,
                mine_strategy: MineStrategy::Random,
            },
            Difficulty::Medium => Self {
                max_depth: 2,
                artificial_delay_ms: 0,
                mine_strategy: MineStrategy::Search,
            },
            Difficulty::Hard => Self {
                max_depth: 4,
                artificial_delay_ms: 0,
                mine_strategy: MineStrategy::Search,
            },
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// 搜索引擎
///
/// 一个实例对应一局游戏：置换表跨着法、跨迭代深度累积，
/// 不同对局之间不能共享，也不跨线程使用。
pub struct AiEngine<B: Board> {
    config: AiConfig,
    table: TranspositionTable<B>,
    nodes_searched: u64,
}

impl<B: Board> AiEngine<B> {
    /// 创建新的搜索引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            table: TranspositionTable::new(),
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 获取配置
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 迭代加深搜索入口
    ///
    /// 从 depth=1 搜到配置的最大深度，每轮都在根节点以满窗口
    /// 重新搜索。只要某一轮给出了行动就覆盖之前的结果，最深一轮
    /// 优先，不跨深度比较分数。全部轮次都没有行动时返回 None，
    /// 由调用方兜底。
    pub fn search(&mut self, board: &B, side: Side, kind: ActionKind) -> Option<Action> {
        let mut best = None;

        for depth in 1..=self.config.max_depth {
            let (score, action) =
                self.minimax_ab(board, side, depth, -INFINITY, INFINITY, true, kind);
            debug!(
                "depth {} finished: score={}, action={:?}, nodes={}",
                depth, score, action, self.nodes_searched
            );
            if action.is_some() {
                best = action;
            }
        }

        best
    }

    /// Alpha-Beta 极小极大搜索
    ///
    /// 分数始终从发起搜索的 `root` 一方视角给出；极大层由 `root`
    /// 行动，极小层由对手行动。候选按枚举顺序展开，严格大于/小于
    /// 才更新最优，平局保留先枚举到的行动。
    #[allow(clippy::too_many_arguments)]
    fn minimax_ab(
        &mut self,
        board: &B,
        root: Side,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        kind: ActionKind,
    ) -> (i32, Option<Action>) {
        self.nodes_searched += 1;

        let key = TTKey {
            board: board.clone(),
            root,
            depth,
            maximizing,
            kind,
        };
        if let Some(hit) = self.table.probe(&key, alpha, beta) {
            return hit;
        }
        let (alpha_in, beta_in) = (alpha, beta);

        // 深度耗尽，落到静态评估
        if depth == 0 {
            let value = Evaluator::evaluate(board, root);
            self.table.store(key, value, EntryType::Exact, None);
            return (value, None);
        }

        let acting = if maximizing { root } else { root.opponent() };
        let actions = ActionGenerator::generate(board, acting, kind);

        // 行动方无路可走，同样按叶子处理
        if actions.is_empty() {
            let value = Evaluator::evaluate(board, root);
            self.table.store(key, value, EntryType::Exact, None);
            return (value, None);
        }

        let mut best_action = None;

        let value = if maximizing {
            let mut value = i32::MIN;
            for action in actions {
                let mut child = board.clone();
                child.apply_action(action, kind, acting);
                let (eval, _) =
                    self.minimax_ab(&child, root, depth - 1, alpha, beta, false, kind);
                if eval > value {
                    value = eval;
                    best_action = Some(action);
                }
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        } else {
            let mut value = i32::MAX;
            for action in actions {
                let mut child = board.clone();
                child.apply_action(action, kind, acting);
                let (eval, _) =
                    self.minimax_ab(&child, root, depth - 1, alpha, beta, true, kind);
                if eval < value {
                    value = eval;
                    best_action = Some(action);
                }
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        };

        // 相对入口窗口标注界类型，供后续查询判断可否复用
        let entry_type = if value <= alpha_in {
            EntryType::UpperBound
        } else if value >= beta_in {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        self.table.store(key, value, entry_type, best_action);

        (value, best_action)
    }

    /// 已搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 置换表统计
    pub fn table_stats(&self) -> TTStats {
        self.table.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testboard::ScriptBoard;
    use protocol::Coordinate;

    /// 不剪枝的朴素极小极大，作为剪枝结果的对照
    fn plain_minimax(
        board: &ScriptBoard,
        root: Side,
        depth: u8,
        maximizing: bool,
        kind: ActionKind,
    ) -> i32 {
        if depth == 0 {
            return Evaluator::evaluate(board, root);
        }
        let acting = if maximizing { root } else { root.opponent() };
        let actions = ActionGenerator::generate(board, acting, kind);
        if actions.is_empty() {
            return Evaluator::evaluate(board, root);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for action in actions {
            let mut child = board.clone();
            child.apply_action(action, kind, acting);
            let eval = plain_minimax(&child, root, depth - 1, !maximizing, kind);
            best = if maximizing {
                best.max(eval)
            } else {
                best.min(eval)
            };
        }
        best
    }

    fn busy_board() -> ScriptBoard {
        // 四个角各一个棋子，双方各有两个相邻的矿
        ScriptBoard::parse(&[
            "R*.*B",
            ".....",
            "B*.*R",
        ])
    }

    #[test]
    fn test_pruning_preserves_minimax_value() {
        // 剪枝只能减少访问的节点数，不能改变返回的分数
        for depth in 1..=3 {
            for kind in [ActionKind::Move, ActionKind::Mine] {
                let board = busy_board();
                let mut engine = AiEngine::new(AiConfig {
                    max_depth: depth,
                    artificial_delay_ms: 0,
                    mine_strategy: MineStrategy::Search,
                });
                let (score, _) =
                    engine.minimax_ab(&board, Side::Red, depth, -INFINITY, INFINITY, true, kind);
                let reference = plain_minimax(&board, Side::Red, depth, true, kind);
                assert_eq!(
                    score, reference,
                    "depth={} kind={:?} 剪枝后的分数必须与朴素极小极大一致",
                    depth, kind
                );
            }
        }
    }

    #[test]
    fn test_search_returns_legal_move() {
        let board = busy_board();
        let mut engine = AiEngine::from_difficulty(Difficulty::Hard);
        let action = engine
            .search(&board, Side::Red, ActionKind::Move)
            .expect("应该找到走法");

        let pieces = board.find_all(Side::Red);
        assert!(pieces.contains(&action.from), "起点必须是红方棋子");
        assert!(
            board.walkable_destinations(action.from).contains(&action.to),
            "终点必须在起点的可走集合里"
        );
    }

    #[test]
    fn test_single_forced_move() {
        // 红方只有一个棋子、只有一个可走格，任何深度都必须返回这一步
        let board = ScriptBoard::parse(&[
            "#R.",
            "###",
        ]);
        for max_depth in 1..=4 {
            let mut engine = AiEngine::new(AiConfig {
                max_depth,
                artificial_delay_ms: 0,
                mine_strategy: MineStrategy::Search,
            });
            let action = engine.search(&board, Side::Red, ActionKind::Move);
            assert_eq!(
                action,
                Some(Action::new(Coordinate::new(1, 0), Coordinate::new(2, 0))),
                "max_depth={}",
                max_depth
            );
        }
    }

    #[test]
    fn test_terminal_node_scores_as_heuristic() {
        // 根方被完全困死：深度还有剩余，也必须直接返回静态评估
        let board = ScriptBoard::parse(&[
            "#R#",
            "#B#",
        ]);
        let mut engine = AiEngine::from_difficulty(Difficulty::Hard);
        let (score, action) =
            engine.minimax_ab(&board, Side::Red, 3, -INFINITY, INFINITY, true, ActionKind::Move);
        assert_eq!(score, Evaluator::evaluate(&board, Side::Red));
        assert!(action.is_none());
    }

    #[test]
    fn test_deepening_keeps_availability() {
        // 深度 1 能找到行动，则迭代加深的最终结果不可能退回 None
        let board = busy_board();

        let mut shallow = AiEngine::new(AiConfig {
            max_depth: 1,
            artificial_delay_ms: 0,
            mine_strategy: MineStrategy::Search,
        });
        assert!(shallow.search(&board, Side::Red, ActionKind::Move).is_some());

        let mut deep = AiEngine::new(AiConfig {
            max_depth: 4,
            artificial_delay_ms: 0,
            mine_strategy: MineStrategy::Search,
        });
        assert!(deep.search(&board, Side::Red, ActionKind::Move).is_some());
    }

    #[test]
    fn test_cache_returns_identical_results() {
        let board = busy_board();
        let mut engine = AiEngine::from_difficulty(Difficulty::Hard);

        let first = engine.search(&board, Side::Red, ActionKind::Move);

        // 第二次搜索命中缓存，结果必须逐位一致
        let second = engine.search(&board, Side::Red, ActionKind::Move);
        assert_eq!(first, second, "缓存命中与重新计算的结果必须一致");
        assert!(
            engine.table_stats().hits > 0,
            "重复搜索应该产生置换表命中"
        );

        // 与全新引擎的结果也一致（确定性）
        let mut fresh = AiEngine::from_difficulty(Difficulty::Hard);
        assert_eq!(fresh.search(&board, Side::Red, ActionKind::Move), first);
    }

    #[test]
    fn test_mine_search_picks_reachable_target() {
        let board = busy_board();
        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);
        let action = engine
            .search(&board, Side::Red, ActionKind::Mine)
            .expect("红方有矿可采");
        assert!(
            board.mineable_targets(Side::Red).contains(&action.to),
            "采矿目标必须在可采集合里"
        );
    }

    #[test]
    fn test_search_empty_board_returns_none() {
        let board = ScriptBoard::parse(&["###", "###"]);
        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);
        assert_eq!(engine.search(&board, Side::Red, ActionKind::Move), None);
        assert_eq!(engine.search(&board, Side::Red, ActionKind::Mine), None);
    }

    #[test]
    fn test_difficulty_config() {
        let easy = AiConfig::from_difficulty(Difficulty::Easy);
        assert_eq!(easy.max_depth, 1);
        assert_eq!(easy.mine_strategy, MineStrategy::Random);

        let medium = AiConfig::from_difficulty(Difficulty::Medium);
        assert_eq!(medium.max_depth, 2);
        assert_eq!(medium.mine_strategy, MineStrategy::Search);

        let hard = AiConfig::from_difficulty(Difficulty::Hard);
        assert_eq!(hard.max_depth, 4);
        assert_eq!(hard.mine_strategy, MineStrategy::Search);
    }
}
