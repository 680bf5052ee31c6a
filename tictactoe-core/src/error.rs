//! 错误类型定义

use thiserror::Error;

/// 游戏规则错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// 无效的格子索引
    #[error("Invalid cell index: {index}")]
    InvalidCell { index: usize },

    /// 格子已被占用
    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },

    /// 不是玩家的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 本局已结束
    #[error("Round is already over")]
    RoundOver,

    /// 无效的棋盘记号
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 游戏操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
