//! 测试用网格棋盘
//!
//! 实现 Board 契约的最小棋盘，只给测试使用：棋子在上下左右的空格
//! 间移动，矿格需要己方棋子相邻才可采。真实棋盘由外部对局引擎提供。

use protocol::{Action, ActionKind, Board, Coordinate, Side};

/// 格子内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Ore,
    Piece(Side),
}

/// 网格棋盘
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptBoard {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl ScriptBoard {
    /// 从字符行构建棋盘
    ///
    /// `R`/`B` 为红/蓝棋子，`*` 为矿，`#` 为墙，其余字符为空格。
    pub fn parse(rows: &[&str]) -> Self {
        let height = rows.len() as u8;
        let width = rows.first().map_or(0, |row| row.len()) as u8;

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            for ch in row.chars() {
                cells.push(match ch {
                    'R' => Cell::Piece(Side::Red),
                    'B' => Cell::Piece(Side::Blue),
                    '*' => Cell::Ore,
                    '#' => Cell::Wall,
                    _ => Cell::Empty,
                });
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    fn get(&self, c: Coordinate) -> Cell {
        self.cells[c.y as usize * self.width as usize + c.x as usize]
    }

    fn set(&mut self, c: Coordinate, cell: Cell) {
        self.cells[c.y as usize * self.width as usize + c.x as usize] = cell;
    }

    /// 上下左右相邻格，固定顺序
    fn neighbors(&self, c: Coordinate) -> Vec<Coordinate> {
        let mut result = Vec::new();
        let (x, y) = (c.x as i16, c.y as i16);
        for (dx, dy) in [(0, -1), (-1, 0), (1, 0), (0, 1)] {
            let (nx, ny) = (x + dx, y + dy);
            if nx >= 0 && ny >= 0 && (nx as u8) < self.width && (ny as u8) < self.height {
                result.push(Coordinate::new(nx as u8, ny as u8));
            }
        }
        result
    }

    /// 行主序遍历全部坐标，保证枚举顺序稳定
    fn coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coordinate::new(x, y)))
    }
}

impl Board for ScriptBoard {
    fn find_all(&self, side: Side) -> Vec<Coordinate> {
        self.coords()
            .filter(|&c| self.get(c) == Cell::Piece(side))
            .collect()
    }

    fn walkable_destinations(&self, from: Coordinate) -> Vec<Coordinate> {
        self.neighbors(from)
            .into_iter()
            .filter(|&c| self.get(c) == Cell::Empty)
            .collect()
    }

    fn mineable_targets(&self, side: Side) -> Vec<Coordinate> {
        self.coords()
            .filter(|&c| {
                self.get(c) == Cell::Ore
                    && self
                        .neighbors(c)
                        .iter()
                        .any(|&n| self.get(n) == Cell::Piece(side))
            })
            .collect()
    }

    fn apply_action(&mut self, action: Action, kind: ActionKind, side: Side) {
        match kind {
            ActionKind::Move => {
                self.set(action.from, Cell::Empty);
                self.set(action.to, Cell::Piece(side));
            }
            ActionKind::Mine => {
                self.set(action.to, Cell::Empty);
            }
        }
    }
}
