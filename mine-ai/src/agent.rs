//! 对局代理
//!
//! 面向游戏主循环的入口：走子选择与采矿选择

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use protocol::{Action, ActionKind, Board, Coordinate, GameError, Side};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::search::{AiConfig, AiEngine, MineStrategy};

/// 从候选集中挑一个目标
///
/// 随机性通过该 trait 注入而不是写死在代理里，测试可以换成
/// 确定性实现。
pub trait TargetPicker {
    /// 从候选中挑一个；候选为空时返回 None
    fn pick(&mut self, options: &[Coordinate]) -> Option<Coordinate>;
}

/// 均匀随机挑选
pub struct RandomPicker {
    rng: ChaCha8Rng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// 固定种子创建，结果可复现
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetPicker for RandomPicker {
    fn pick(&mut self, options: &[Coordinate]) -> Option<Coordinate> {
        options.choose(&mut self.rng).copied()
    }
}

/// 对局代理
///
/// 一个代理对应一局游戏，内部的引擎和置换表都不跨对局复用。
pub struct AiAgent<B: Board> {
    name: String,
    engine: AiEngine<B>,
    picker: Box<dyn TargetPicker>,
}

impl<B: Board> AiAgent<B> {
    fn new(name: String, config: AiConfig, picker: Box<dyn TargetPicker>) -> Self {
        Self {
            name,
            engine: AiEngine::new(config),
            picker,
        }
    }

    /// 代理名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 选择走子
    ///
    /// 返回 None 表示搜索没有找到任何走法，调用方需要自己兜底
    /// （比如随机挑一步合法走法或跳过回合）。
    pub fn choose_move(&mut self, board: &B, side: Side) -> Option<Action> {
        let action = self.engine.search(board, side, ActionKind::Move);
        match action {
            Some(a) => debug!("{} chooses move {}", self.name, a),
            None => debug!("{} finds no legal move for {}", self.name, side),
        }
        action
    }

    /// 选择采矿目标
    ///
    /// 一个可采矿格都没有时调用本方法属于前置条件错误，直接报错
    /// 而不是悄悄返回。搜索策略没有给出结论时退回随机挑选。
    pub fn choose_mine(&mut self, board: &B, side: Side) -> protocol::Result<Coordinate> {
        let mineable = board.mineable_targets(side);
        if mineable.is_empty() {
            warn!("{} asked to mine but {} has no mineable targets", self.name, side);
            return Err(GameError::NoMineableTargets { side });
        }

        let strategy = self.engine.config().mine_strategy;
        let searched = match strategy {
            MineStrategy::Search => self
                .engine
                .search(board, side, ActionKind::Mine)
                .map(|action| action.to),
            MineStrategy::Random => None,
        };
        let target = match searched {
            Some(target) => target,
            None => self
                .picker
                .pick(&mineable)
                .ok_or(GameError::NoMineableTargets { side })?,
        };

        let delay = self.engine.config().artificial_delay_ms;
        if delay > 0 {
            // 纯表现层的停顿，模拟 "思考时间"，不影响选择结果
            thread::sleep(Duration::from_millis(delay));
        }

        debug!("{} chooses mine {}", self.name, target);
        Ok(target)
    }

    /// 已搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.engine.nodes_searched()
    }
}

/// 代理工厂
///
/// 代理编号由工厂实例持有：同一个工厂产出 aibot_0、aibot_1、……，
/// 新建一个工厂编号就从头开始，测试之间互不干扰。
pub struct AgentFactory {
    counter: AtomicU64,
}

impl AgentFactory {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// 创建代理，使用默认的随机挑选器
    pub fn create<B: Board>(&self, config: AiConfig) -> AiAgent<B> {
        self.create_with_picker(config, Box::new(RandomPicker::new()))
    }

    /// 创建代理并注入目标挑选器
    pub fn create_with_picker<B: Board>(
        &self,
        config: AiConfig,
        picker: Box<dyn TargetPicker>,
    ) -> AiAgent<B> {
        let id = self.counter.fetch_add(1, Ordering::Relaxed);
        let name = format!("aibot_{}", id);
        info!(
            "creating agent {} (max_depth={}, mine_strategy={:?})",
            name, config.max_depth, config.mine_strategy
        );
        AiAgent::new(name, config, picker)
    }
}

impl Default for AgentFactory {
    fn default() -> Self {
        Self::new()
    }
}
