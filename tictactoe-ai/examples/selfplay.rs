//! 随机玩家对抗 Impossible 难度的模拟
//!
//! 运行方式:
//! ```bash
//! cargo run -p tictactoe-ai --example selfplay
//! ```

use rand::seq::SliceRandom;

use tictactoe_ai::AiEngine;
use tictactoe_core::{Board, Difficulty, Evaluator, GameStatus, Mark};

fn main() {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut rng = rand::thread_rng();
    let mut engine = AiEngine::from_difficulty(Difficulty::Impossible);

    let games = 50;
    let mut computer_wins = 0u32;
    let mut ties = 0u32;

    for round in 1..=games {
        let mut board = Board::empty();

        let status = loop {
            // 玩家随机落子
            let index = *board
                .empty_cells()
                .choose(&mut rng)
                .expect("board not full");
            board.set(index, Some(Mark::X));
            let status = Evaluator::evaluate(&board);
            if status.is_terminal() {
                break status;
            }

            // 电脑应对
            let reply = engine.select_move(&board).expect("board not full");
            board.set(reply, Some(Mark::O));
            let status = Evaluator::evaluate(&board);
            if status.is_terminal() {
                break status;
            }
        };

        match status {
            GameStatus::XWins(_) => panic!("Impossible 难度不应输棋: {}", board.notation()),
            GameStatus::OWins(_) => computer_wins += 1,
            GameStatus::Draw => ties += 1,
            GameStatus::InProgress => unreachable!(),
        }
        println!("round {:2}: {}", round, board.notation());
    }

    println!(
        "\n{} games: computer {} wins, {} ties, 0 losses",
        games, computer_wins, ties
    );
}
