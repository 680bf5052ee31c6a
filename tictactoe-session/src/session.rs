//! 对局控制
//!
//! 管理回合状态机、比分与难度选择。玩家执 X 先手，电脑执 O。

use serde::{Deserialize, Serialize};

use tictactoe_ai::AiEngine;
use tictactoe_core::{Board, Difficulty, Evaluator, GameError, GameStatus, Mark, Result};

use crate::score::ScoreTally;

/// 回合阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// 等待玩家落子
    AwaitingHuman,
    /// 电脑思考中，期间玩家输入被忽略
    ComputerThinking,
    /// 本局已结束，等待重开
    RoundOver,
}

/// 游戏会话
///
/// 独占持有棋盘与比分；难度在每次电脑落子前读取，
/// 局中改难度只影响之后的电脑落子
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    phase: SessionPhase,
    difficulty: Difficulty,
    scores: ScoreTally,
}

impl GameSession {
    /// 创建新会话
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::empty(),
            phase: SessionPhase::AwaitingHuman,
            difficulty,
            scores: ScoreTally::default(),
        }
    }

    /// 从给定棋盘恢复会话，按落子数推导当前阶段
    pub fn with_board(board: Board, difficulty: Difficulty) -> Self {
        let status = Evaluator::evaluate(&board);
        let phase = if status.is_terminal() {
            SessionPhase::RoundOver
        } else if board.count(Mark::X) > board.count(Mark::O) {
            SessionPhase::ComputerThinking
        } else {
            SessionPhase::AwaitingHuman
        };

        Self {
            board,
            phase,
            difficulty,
            scores: ScoreTally::default(),
        }
    }

    /// 当前棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前阶段
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// 当前比分
    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    /// 当前难度
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// 调整难度，只影响之后的电脑落子
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// 对局状态，始终由棋盘重新推导
    pub fn status(&self) -> GameStatus {
        Evaluator::evaluate(&self.board)
    }

    /// 玩家落子
    ///
    /// 非法输入（不在等待阶段、越界、格子已占用）一律静默忽略并返回
    /// false，符合状态机对无效点击的处理约定
    pub fn apply_human_move(&mut self, index: usize) -> bool {
        match self.try_human_move(index) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!("忽略玩家输入: {} ({})", index, err);
                false
            }
        }
    }

    fn try_human_move(&mut self, index: usize) -> Result<()> {
        match self.phase {
            SessionPhase::AwaitingHuman => {}
            SessionPhase::ComputerThinking => return Err(GameError::NotYourTurn),
            SessionPhase::RoundOver => return Err(GameError::RoundOver),
        }

        self.board.place(index, Mark::X)?;
        tracing::info!("玩家落子: {}", index);

        let status = self.status();
        if status.is_terminal() {
            self.conclude_round(&status);
        } else {
            self.phase = SessionPhase::ComputerThinking;
        }
        Ok(())
    }

    /// 电脑落子，按当前难度临时构建引擎
    pub fn play_computer_move(&mut self) -> Option<usize> {
        let mut engine = AiEngine::from_difficulty(self.difficulty);
        self.play_computer_move_with(&mut engine)
    }

    /// 电脑落子，使用注入的引擎（测试时注入固定种子）
    pub fn play_computer_move_with(&mut self, engine: &mut AiEngine) -> Option<usize> {
        if self.phase != SessionPhase::ComputerThinking {
            return None;
        }

        let index = engine.select_move(&self.board)?;
        if let Err(err) = self.board.place(index, engine.mark()) {
            // 引擎只会返回空格，走到这里说明引擎有缺陷
            tracing::error!("引擎返回非法落子: {} ({})", index, err);
            return None;
        }
        tracing::info!("电脑落子: {} (难度 {})", index, self.difficulty);

        let status = self.status();
        if status.is_terminal() {
            self.conclude_round(&status);
        } else {
            self.phase = SessionPhase::AwaitingHuman;
        }
        Some(index)
    }

    /// 结束本局并恰好递增一项比分
    fn conclude_round(&mut self, status: &GameStatus) {
        debug_assert!(status.is_terminal());

        match status {
            GameStatus::XWins(_) => self.scores.player_wins += 1,
            GameStatus::OWins(_) => self.scores.computer_wins += 1,
            GameStatus::Draw => self.scores.ties += 1,
            GameStatus::InProgress => return,
        }
        self.phase = SessionPhase::RoundOver;
        tracing::info!("本局结束: {:?}, 比分 {:?}", status, self.scores);
    }

    /// 重开一局，比分保留
    ///
    /// 任意阶段都可以重开，不限于局终
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.phase = SessionPhase::AwaitingHuman;
        tracing::info!("重开一局");
    }

    /// 界面状态短语
    pub fn status_phrase(&self) -> &'static str {
        match self.phase {
            SessionPhase::AwaitingHuman => "Your turn (X)",
            SessionPhase::ComputerThinking => "Computer is thinking...",
            SessionPhase::RoundOver => match self.status() {
                GameStatus::XWins(_) => "You Win!",
                GameStatus::OWins(_) => "Computer Wins!",
                _ => "It's a Tie!",
            },
        }
    }
}
