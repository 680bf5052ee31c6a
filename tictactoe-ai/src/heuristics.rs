//! 一步启发式
//!
//! 中等和困难难度共用的抢胜/堵截扫描，以及困难难度的位置偏好

use tictactoe_core::{Board, Evaluator, Mark, CENTER_CELL, CORNER_CELLS};

/// 查找能让 `mark` 立即连成一线的空格
///
/// 升序扫描空格，逐格试探落子后检查胜形并撤销，返回第一个命中的索引。
/// 传入己方标记即抢胜，传入对方标记即找到需要堵截的格子。
pub fn find_immediate_win(board: &Board, mark: Mark) -> Option<usize> {
    let mut scratch = board.clone();
    for index in scratch.empty_cells() {
        scratch.set(index, Some(mark));
        let wins = Evaluator::has_win(&scratch, mark);
        scratch.set(index, None);
        if wins {
            return Some(index);
        }
    }
    None
}

/// 中心格（如果为空）
pub(crate) fn open_center(board: &Board) -> Option<usize> {
    board.is_empty_cell(CENTER_CELL).then_some(CENTER_CELL)
}

/// 收集所有空着的角落
pub(crate) fn open_corners(board: &Board) -> Vec<usize> {
    CORNER_CELLS
        .iter()
        .copied()
        .filter(|&i| board.is_empty_cell(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_winning_cell() {
        // O 在 3、4，落 5 即连成中排
        let board: Board = "XX.OO...X".parse().unwrap();
        assert_eq!(find_immediate_win(&board, Mark::O), Some(5));
    }

    #[test]
    fn test_finds_block_target() {
        // 玩家 X 占 0、1，电脑视角下需要堵 2
        let board: Board = "XX.O.....".parse().unwrap();
        assert_eq!(find_immediate_win(&board, Mark::X), Some(2));
    }

    #[test]
    fn test_ascending_tie_break() {
        // X 同时威胁 2 号位（横排）、7 号位（竖列）和 8 号位（对角线），取索引最小的
        let board: Board = "XX.OX.O..".parse().unwrap();
        assert_eq!(find_immediate_win(&board, Mark::X), Some(2));
    }

    #[test]
    fn test_no_immediate_win() {
        let board = Board::empty();
        assert_eq!(find_immediate_win(&board, Mark::O), None);
    }

    #[test]
    fn test_scan_leaves_board_untouched() {
        let board: Board = "XX.O.....".parse().unwrap();
        let before = board.notation();
        find_immediate_win(&board, Mark::X);
        assert_eq!(board.notation(), before);
    }

    #[test]
    fn test_center_and_corners() {
        let board = Board::empty();
        assert_eq!(open_center(&board), Some(4));
        assert_eq!(open_corners(&board), vec![0, 2, 6, 8]);

        let board: Board = "X...O...X".parse().unwrap();
        assert_eq!(open_center(&board), None);
        assert_eq!(open_corners(&board), vec![2, 6]);
    }
}
