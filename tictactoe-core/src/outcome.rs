//! 终局判定

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::WINNING_LINES;
use crate::mark::Mark;

/// 对局状态
///
/// 始终由棋盘重新推导，不单独存储
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 对局进行中
    InProgress,
    /// 玩家（X）获胜，附带连成的线
    XWins([usize; 3]),
    /// 电脑（O）获胜，附带连成的线
    OWins([usize; 3]),
    /// 平局
    Draw,
}

impl GameStatus {
    /// 对局是否已结束
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// 获胜方（如果有）
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWins(_) => Some(Mark::X),
            GameStatus::OWins(_) => Some(Mark::O),
            _ => None,
        }
    }

    /// 连成的获胜线（如果有）
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self {
            GameStatus::XWins(line) | GameStatus::OWins(line) => Some(*line),
            _ => None,
        }
    }
}

/// 终局判定器
pub struct Evaluator;

impl Evaluator {
    /// 判定当前棋盘的对局状态
    ///
    /// 按固定顺序扫描 8 条线，第一条三连的线决定胜方及高亮线。
    /// 单步合法落子不可能同时连成两线，顺序只为结果可复现。
    pub fn evaluate(board: &Board) -> GameStatus {
        for line in WINNING_LINES {
            let [a, b, c] = line;
            if let Some(mark) = board.get(a) {
                if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                    return match mark {
                        Mark::X => GameStatus::XWins(line),
                        Mark::O => GameStatus::OWins(line),
                    };
                }
            }
        }

        if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// 指定标记是否已连成一线
    pub fn has_win(board: &Board, mark: Mark) -> bool {
        Self::winning_line_for(board, mark).is_some()
    }

    /// 查找指定标记连成的线
    pub fn winning_line_for(board: &Board, mark: Mark) -> Option<[usize; 3]> {
        WINNING_LINES.iter().copied().find(|&[a, b, c]| {
            board.get(a) == Some(mark) && board.get(b) == Some(mark) && board.get(c) == Some(mark)
        })
    }
}
