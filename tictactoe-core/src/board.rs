//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_CELLS;
use crate::error::{GameError, Result};
use crate::mark::Mark;

/// 3x3 棋盘，索引 0-8 按行排列（0,1,2 / 3,4,5 / 6,7,8）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; BOARD_CELLS],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// 获取指定格子的标记
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// 指定格子是否为空
    pub fn is_empty_cell(&self, index: usize) -> bool {
        index < BOARD_CELLS && self.cells[index].is_none()
    }

    /// 落子（检查边界和占用）
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<()> {
        if index >= BOARD_CELLS {
            return Err(GameError::InvalidCell { index });
        }
        if self.cells[index].is_some() {
            return Err(GameError::CellOccupied { index });
        }
        self.cells[index] = Some(mark);
        Ok(())
    }

    /// 直接设置格子，搜索中的试探落子与撤销使用
    pub fn set(&mut self, index: usize, mark: Option<Mark>) {
        if index < BOARD_CELLS {
            self.cells[index] = mark;
        }
    }

    /// 收集所有空格索引（升序）
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..BOARD_CELLS)
            .filter(|&i| self.cells[i].is_none())
            .collect()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// 统计指定标记的数量
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// 转换为 9 字符记号（'X' / 'O' / '.'）
    pub fn notation(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.map(|m| m.to_char()).unwrap_or('.'))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::str::FromStr for Board {
    type Err = GameError;

    /// 从 9 字符记号解析棋盘，'X'/'O' 为落子，'.' 为空格
    fn from_str(s: &str) -> Result<Board> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_CELLS {
            return Err(GameError::InvalidNotation {
                reason: format!("expected {} cells, got {}", BOARD_CELLS, chars.len()),
            });
        }

        let mut board = Board::empty();
        for (index, c) in chars.into_iter().enumerate() {
            match c {
                '.' => {}
                _ => match Mark::from_char(c) {
                    Some(mark) => board.cells[index] = Some(mark),
                    None => {
                        return Err(GameError::InvalidNotation {
                            reason: format!("unexpected char '{}' at cell {}", c, index),
                        });
                    }
                },
            }
        }
        Ok(board)
    }
}
