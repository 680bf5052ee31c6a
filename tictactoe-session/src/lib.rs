//! 对局控制库
//!
//! 包含:
//! - 回合状态机 (GameSession)
//! - 累计比分 (ScoreTally)

mod score;
mod session;

pub use score::ScoreTally;
pub use session::{GameSession, SessionPhase};
