//! 井字棋 AI 引擎
//!
//! 包含:
//! - 四档难度配置与 AiEngine 门面
//! - 抢胜/堵截一步启发式
//! - Minimax 完全搜索

mod engine;
mod heuristics;
mod minimax;

pub use engine::{AiConfig, AiEngine, Difficulty};
pub use heuristics::find_immediate_win;
