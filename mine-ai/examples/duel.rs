//! 双代理对战演示
//!
//! 运行方式:
//! ```bash
//! cargo run -p mine-ai --example duel
//! ```

use std::fmt;

use mine_ai::{AgentFactory, AiConfig, Difficulty};
use protocol::{Action, ActionKind, Board, Coordinate, Side};

/// 演示用网格棋盘
///
/// `R`/`B` 为红/蓝棋子，`*` 为矿，`#` 为墙，`.` 为空格。
/// 棋子在上下左右的空格间移动，矿格需要己方棋子相邻才可采。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DemoBoard {
    width: u8,
    height: u8,
    cells: Vec<char>,
}

impl DemoBoard {
    fn parse(rows: &[&str]) -> Self {
        let height = rows.len() as u8;
        let width = rows.first().map_or(0, |row| row.len()) as u8;
        let cells = rows.iter().flat_map(|row| row.chars()).collect();
        Self {
            width,
            height,
            cells,
        }
    }

    fn get(&self, c: Coordinate) -> char {
        self.cells[c.y as usize * self.width as usize + c.x as usize]
    }

    fn set(&mut self, c: Coordinate, cell: char) {
        self.cells[c.y as usize * self.width as usize + c.x as usize] = cell;
    }

    fn piece_char(side: Side) -> char {
        match side {
            Side::Red => 'R',
            Side::Blue => 'B',
        }
    }

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

    fn coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coordinate::new(x, y)))
    }
}

impl Board for DemoBoard {
    fn find_all(&self, side: Side) -> Vec<Coordinate> {
        let piece = Self::piece_char(side);
        self.coords().filter(|&c| self.get(c) == piece).collect()
    }

    fn walkable_destinations(&self, from: Coordinate) -> Vec<Coordinate> {
        self.neighbors(from)
            .into_iter()
            .filter(|&c| self.get(c) == '.')
            .collect()
    }

    fn mineable_targets(&self, side: Side) -> Vec<Coordinate> {
        let piece = Self::piece_char(side);
        self.coords()
            .filter(|&c| {
                self.get(c) == '*' && self.neighbors(c).iter().any(|&n| self.get(n) == piece)
            })
            .collect()
    }

    fn apply_action(&mut self, action: Action, kind: ActionKind, side: Side) {
        match kind {
            ActionKind::Move => {
                self.set(action.from, '.');
                self.set(action.to, Self::piece_char(side));
            }
            ActionKind::Mine => {
                self.set(action.to, '.');
            }
        }
    }
}

impl fmt::Display for DemoBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.get(Coordinate::new(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 挖矿对战演示 ===\n");

    let mut board = DemoBoard::parse(&[
        "R..*..B",
        ".#.*.#.",
        "...*...",
        "R..*..B",
    ]);
    println!("初始棋盘:\n{}", board);

    let factory = AgentFactory::new();
    let mut red = factory.create::<DemoBoard>(AiConfig::from_difficulty(Difficulty::Hard));
    let mut blue = factory.create::<DemoBoard>(AiConfig::from_difficulty(Difficulty::Easy));
    println!("红方: {} (Hard)  蓝方: {} (Easy)\n", red.name(), blue.name());

    let mut side = Side::Red;
    for turn in 1..=12 {
        let agent = match side {
            Side::Red => &mut red,
            Side::Blue => &mut blue,
        };

        // 有矿先采，没矿再走
        if !board.mineable_targets(side).is_empty() {
            let target = agent.choose_mine(&board, side)?;
            board.apply_action(Action::new(target, target), ActionKind::Mine, side);
            println!("{:>2}. {} 采矿 {}", turn, side, target);
        } else if let Some(action) = agent.choose_move(&board, side) {
            board.apply_action(action, ActionKind::Move, side);
            println!("{:>2}. {} 走子 {}", turn, side, action);
        } else {
            println!("{:>2}. {} 无路可走，跳过", turn, side);
        }

        side = side.opponent();
    }

    println!("\n最终棋盘:\n{}", board);
    println!("红方搜索节点: {}", red.nodes_searched());
    println!("蓝方搜索节点: {}", blue.nodes_searched());

    Ok(())
}
