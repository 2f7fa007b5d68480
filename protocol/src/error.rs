//! 错误类型定义

use thiserror::Error;

use crate::space::Side;

/// 对局规则错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// 当前没有可采的矿
    ///
    /// 一方没有任何矿可采时本不应进入采矿环节，属于调用方的
    /// 前置条件错误，必须上报而不是悄悄吞掉。
    #[error("no mineable targets for side {side}")]
    NoMineableTargets { side: Side },
}

/// 对局操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
