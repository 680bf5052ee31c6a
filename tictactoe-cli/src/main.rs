//! 终端客户端
//!
//! 读取标准输入驱动会话：数字落子，`d <难度>` 调难度，`r` 重开，`q` 退出

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tictactoe_core::{Difficulty, AI_THINK_DELAY};
use tictactoe_session::{GameSession, SessionPhase};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tictactoe_cli=info".parse()?),
        )
        .init();

    info!("井字棋启动");

    let mut session = GameSession::new(Difficulty::Medium);

    println!("Tic-Tac-Toe — you are X.");
    println!("Commands: 0-8 to play, d <easy|medium|hard|impossible>, r to reset, q to quit.");
    render(&session);
    println!("{}", session.status_phrase());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();

        match input {
            "" => {}
            "q" | "quit" => break,
            "r" | "reset" => {
                session.reset();
                render(&session);
                println!("{}", session.status_phrase());
            }
            _ if input.starts_with('d') => match parse_difficulty(input) {
                Some(difficulty) => {
                    session.set_difficulty(difficulty);
                    println!("difficulty set to {}", difficulty);
                }
                None => println!("usage: d <easy|medium|hard|impossible>"),
            },
            _ => match input.parse::<usize>() {
                Ok(index) => {
                    if !session.apply_human_move(index) {
                        println!("can't play there");
                        continue;
                    }
                    render(&session);

                    if session.phase() == SessionPhase::ComputerThinking {
                        println!("{}", session.status_phrase());
                        // 界面节奏停顿；期间会话保持思考阶段，输入不会被接受
                        tokio::time::sleep(AI_THINK_DELAY).await;
                        session.play_computer_move();
                        render(&session);
                    }

                    println!("{}", session.status_phrase());
                    if session.phase() == SessionPhase::RoundOver {
                        let scores = session.scores();
                        println!(
                            "You {} — Computer {} — Ties {}",
                            scores.player_wins, scores.computer_wins, scores.ties
                        );
                        println!("Press r to play again.");
                    }
                }
                Err(_) => println!("unrecognized input: {}", input),
            },
        }
    }

    Ok(())
}

/// 绘制棋盘，获胜线用方括号高亮
fn render(session: &GameSession) {
    let board = session.board();
    let winning_line = session.status().winning_line();

    for row in 0..3 {
        let mut out = String::new();
        for col in 0..3 {
            let index = row * 3 + col;
            let shown = board
                .get(index)
                .map(|m| m.to_char())
                .unwrap_or((b'0' + index as u8) as char);

            let highlighted = winning_line.map_or(false, |line| line.contains(&index));
            if highlighted {
                out.push('[');
                out.push(shown);
                out.push(']');
            } else {
                out.push(' ');
                out.push(shown);
                out.push(' ');
            }
            if col < 2 {
                out.push('|');
            }
        }
        println!("{}", out);
        if row < 2 {
            println!("---+---+---");
        }
    }
}

/// 解析难度指令（`d easy` 等）
fn parse_difficulty(input: &str) -> Option<Difficulty> {
    match input.trim_start_matches('d').trim() {
        "easy" => Some(Difficulty::Easy),
        "medium" => Some(Difficulty::Medium),
        "hard" => Some(Difficulty::Hard),
        "impossible" => Some(Difficulty::Impossible),
        _ => None,
    }
}
