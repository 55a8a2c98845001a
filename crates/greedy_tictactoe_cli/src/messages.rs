//! User-facing text, per language.

use crate::session::Scoreboard;
use greedy_tictactoe::RoundStatus;
use serde::{Deserialize, Serialize};

/// Language of the game text.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    /// Bahasa Indonesia.
    #[default]
    #[serde(rename = "id")]
    #[strum(to_string = "id", serialize = "indonesian")]
    Indonesian,
    /// English.
    #[serde(rename = "en")]
    #[strum(to_string = "en", serialize = "english")]
    English,
}

/// Line of `=` framing the banner and each round.
pub const RULE: &str = "==============================";

/// Text catalogue for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    language: Language,
}

impl Messages {
    /// Creates the catalogue for `language`.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The catalogue's language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Title line inside the banner.
    pub fn welcome(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "  SELAMAT DATANG DI TIC TAC TOE",
            Language::English => "     WELCOME TO TIC TAC TOE",
        }
    }

    /// Which symbol the human plays.
    pub fn human_role(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Anda bermain sebagai X",
            Language::English => "You are playing as X",
        }
    }

    /// Which symbol the computer plays.
    pub fn computer_role(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Komputer bermain sebagai O",
            Language::English => "The computer is playing as O",
        }
    }

    /// Name shown for the computer player.
    pub fn computer_name(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Komputer",
            Language::English => "Computer",
        }
    }

    /// Heading above the numbered guide grid.
    pub fn guide_title(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Pilihan posisi:",
            Language::English => "Board positions:",
        }
    }

    /// Announces the human's turn.
    pub fn human_turn(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Giliran Anda (X):",
            Language::English => "Your turn (X):",
        }
    }

    /// Prompt for a position, without trailing newline.
    pub fn position_prompt(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Pilih posisi (1-9): ",
            Language::English => "Choose a position (1-9): ",
        }
    }

    /// Input was not a number.
    pub fn invalid_input(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Input tidak valid! Masukkan angka 1-9.",
            Language::English => "Invalid input! Enter a number from 1-9.",
        }
    }

    /// Number outside 1-9.
    pub fn out_of_range(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Posisi harus antara 1-9!",
            Language::English => "Position must be between 1-9!",
        }
    }

    /// Square already taken.
    pub fn occupied(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Posisi sudah terisi!",
            Language::English => "That position is already taken!",
        }
    }

    /// Announces the computer's turn.
    pub fn computer_turn(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Giliran Komputer (O):",
            Language::English => "Computer's turn (O):",
        }
    }

    /// Reports the computer's move using the 1-9 numbering.
    pub fn computer_chose(&self, number: usize) -> String {
        match self.language {
            Language::Indonesian => format!("Komputer memilih posisi: {number}"),
            Language::English => format!("The computer chose position: {number}"),
        }
    }

    /// Final message for a finished round. Empty while still in progress.
    pub fn outcome(&self, status: RoundStatus) -> &'static str {
        match (self.language, status) {
            (Language::Indonesian, RoundStatus::HumanWon) => "🎉 SELAMAT! ANDA MENANG!",
            (Language::Indonesian, RoundStatus::ComputerWon) => "😢 KOMPUTER MENANG! COBA LAGI!",
            (Language::Indonesian, RoundStatus::Draw) => "🤝 PERMAINAN SERI (DRAW)!",
            (Language::English, RoundStatus::HumanWon) => "🎉 CONGRATULATIONS! YOU WIN!",
            (Language::English, RoundStatus::ComputerWon) => "😢 THE COMPUTER WINS! TRY AGAIN!",
            (Language::English, RoundStatus::Draw) => "🤝 IT'S A DRAW!",
            (_, RoundStatus::InProgress) => "",
        }
    }

    /// Shown when a round had to be abandoned.
    pub fn round_error(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Terjadi kesalahan pada ronde ini.",
            Language::English => "Something went wrong in this round.",
        }
    }

    /// Replay prompt, without trailing newline.
    pub fn play_again(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Ingin bermain lagi? (y/n): ",
            Language::English => "Play again? (y/n): ",
        }
    }

    /// Running totals for the session.
    pub fn scoreboard(&self, score: &Scoreboard) -> String {
        match self.language {
            Language::Indonesian => format!(
                "Skor - Anda: {}, Komputer: {}, Seri: {}",
                score.human_wins, score.computer_wins, score.draws
            ),
            Language::English => format!(
                "Score - You: {}, Computer: {}, Draws: {}",
                score.human_wins, score.computer_wins, score.draws
            ),
        }
    }

    /// Parting line.
    pub fn farewell(&self) -> &'static str {
        match self.language {
            Language::Indonesian => "Terima kasih telah bermain! Sampai jumpa!",
            Language::English => "Thanks for playing! See you!",
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
