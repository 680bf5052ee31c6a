//! 难度等级定义

use serde::{Deserialize, Serialize};

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 简单：完全随机落子
    Easy,
    /// 中等：60% 概率执行抢胜/堵截扫描
    Medium,
    /// 困难：80% 概率执行抢胜/堵截 + 中心/角落偏好
    Hard,
    /// 不可战胜：Minimax 完全搜索
    Impossible,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Impossible => "impossible",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        assert_eq!(Difficulty::Impossible.to_string(), "impossible");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        let decoded: Difficulty = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, Difficulty::Hard);
    }
}
