//! 规则常量定义

use std::time::Duration;

/// 棋盘边长
pub const BOARD_SIZE: usize = 3;

/// 棋盘格子总数（3x3，索引 0-8 按行排列）
pub const BOARD_CELLS: usize = 9;

/// 中心格索引
pub const CENTER_CELL: usize = 4;

/// 四个角的索引
pub const CORNER_CELLS: [usize; 4] = [0, 2, 6, 8];

/// 8 条获胜线（3 横、3 竖、2 斜）
///
/// 枚举顺序固定，终局判定按此顺序报告第一条命中的线
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // 横排
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // 竖列
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // 对角线
    [2, 4, 6],
];

/// 电脑落子前的停顿（毫秒）- 仅用于界面节奏，不影响正确性
pub const AI_THINK_DELAY_MS: u64 = 600;

/// 思考停顿 Duration
pub const AI_THINK_DELAY: Duration = Duration::from_millis(AI_THINK_DELAY_MS);
