//! 井字棋核心规则库
//!
//! 包含:
//! - 棋盘、标记等核心数据结构
//! - 获胜线定义与终局判定
//! - 难度等级定义
//! - 错误类型

mod board;
mod constants;
mod difficulty;
mod error;
mod mark;
mod outcome;

pub use board::Board;
pub use constants::*;
pub use difficulty::Difficulty;
pub use error::{GameError, Result};
pub use mark::Mark;
pub use outcome::{Evaluator, GameStatus};
