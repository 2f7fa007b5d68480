//! 阵营与坐标定义

use serde::{Deserialize, Serialize};

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 红方（先手）
    Red,
    /// 蓝方（后手）
    Blue,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Blue => write!(f, "Blue"),
        }
    }
}

/// 棋盘坐标
///
/// 引擎不解释坐标的含义，只把它当作棋盘格子的标识值使用；
/// 具体的边界和布局由外部棋盘定义。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// 列
    pub x: u8,
    /// 行
    pub y: u8,
}

impl Coordinate {
    /// 创建新坐标
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Red.opponent(), Side::Blue);
        assert_eq!(Side::Blue.opponent(), Side::Red);
    }

    #[test]
    fn test_coordinate_display() {
        let c = Coordinate::new(3, 7);
        assert_eq!(format!("{}", c), "(3, 7)");
    }

    #[test]
    fn test_coordinate_ordering() {
        // 派生的字典序（先 x 后 y），保证集合遍历顺序稳定
        let a = Coordinate::new(0, 2);
        let b = Coordinate::new(5, 1);
        assert!(a < b);
    }
}
