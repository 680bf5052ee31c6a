//! Minimax 完全搜索
//!
//! 3x3 规模下无需剪枝和置换表，最坏情况约 9! 个节点

use tictactoe_core::{Board, Evaluator, Mark};

/// 获胜分值基数
///
/// 实际得分按深度偏移：速胜分高，败局拖得越久分越高
const WIN_SCORE: i32 = 10;

/// 对剩余博弈树做 Minimax 评估
///
/// `maximizing` 为 true 时轮到电脑落子取子节点最大值，否则轮到玩家
/// 落子取最小值。搜索过程中的所有试探落子在返回前撤销，调用结束后
/// 棋盘保持原样。
pub(crate) fn minimax(
    board: &mut Board,
    computer: Mark,
    depth: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    // 终局判定，优先级固定：电脑胜、玩家胜、满盘平局
    if Evaluator::has_win(board, computer) {
        return WIN_SCORE - depth;
    }
    if Evaluator::has_win(board, computer.opponent()) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let mark = if maximizing {
        computer
    } else {
        computer.opponent()
    };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in board.empty_cells() {
        board.set(index, Some(mark));
        let score = minimax(board, computer, depth + 1, !maximizing, nodes);
        board.set(index, None);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// 搜索最优落子
///
/// 升序枚举每个空格，试探落子后对剩余局面做 Minimax 评估（下一手
/// 轮到玩家），只保留严格更优的分数，平分时保留先扫描到的索引。
pub(crate) fn best_move(board: &Board, computer: Mark, nodes: &mut u64) -> Option<usize> {
    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best_index = None;

    for index in scratch.empty_cells() {
        scratch.set(index, Some(computer));
        let score = minimax(&mut scratch, computer, 0, false, nodes);
        scratch.set(index, None);

        if score > best_score {
            best_score = score;
            best_index = Some(index);
        }
    }

    best_index
}
