use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub score: u32,
    pub last_word: Option<String>,
    pub last_played_at: Option<DateTime<Utc>>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score: 0,
            last_word: None,
            last_played_at: None,
        }
    }

    pub fn record_move(&mut self, word: String, score: u32) {
        self.score += score;
        self.last_word = Some(word);
        self.last_played_at = Some(Utc::now());
    }

    pub fn last_word(&self) -> &str {
        self.last_word.as_deref().unwrap_or("")
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("0", "Player 1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_move_accumulates() {
        let mut player = Player::default();
        assert_eq!(player.last_word(), "");

        player.record_move("OX".to_string(), 24);
        player.record_move("BOK".to_string(), 9);

        assert_eq!(player.score, 33);
        assert_eq!(player.last_word(), "BOK");
        assert!(player.last_played_at.is_some());
    }
}
