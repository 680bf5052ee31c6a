//! 累计比分

use serde::{Deserialize, Serialize};

/// 累计比分
///
/// 每局结束恰好递增一项；进程存活期间从不清零，重开一局也不清零
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    /// 玩家胜场
    pub player_wins: u32,
    /// 电脑胜场
    pub computer_wins: u32,
    /// 平局数
    pub ties: u32,
}

impl ScoreTally {
    /// 已结束的总局数
    pub fn total_rounds(&self) -> u32 {
        self.player_wins + self.computer_wins + self.ties
    }
}
