//! Scripted end-to-end sessions.

use greedy_tictactoe::{
    Board, Decision, HeuristicPlayer, Mark, PolicyError, RoundStatus, Strategy, Tier,
};
use greedy_tictactoe_cli::{GameConfig, Language, Scoreboard, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::io::Cursor;

/// Computer that replays a fixed list of squares.
struct Scripted {
    moves: VecDeque<usize>,
}

impl Scripted {
    fn new(moves: &[usize]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
        }
    }
}

impl Strategy for Scripted {
    fn choose(&mut self, _board: &Board) -> Result<Decision, PolicyError> {
        self.moves
            .pop_front()
            .map(|index| Decision {
                index,
                tier: Tier::Fallback,
            })
            .ok_or(PolicyError::NoMovesAvailable)
    }

    fn mark(&self) -> Mark {
        Mark::Computer
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn run_session<S: Strategy>(input: &str, config: &GameConfig, computer: S) -> (Scoreboard, String) {
    let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), config, computer);
    let score = session.run().expect("session runs");
    let output = String::from_utf8(session.into_output()).expect("utf-8 output");
    (score, output)
}

#[test]
fn test_human_wins_top_row() {
    let (score, output) = run_session("1\n2\n3\nn\n", &GameConfig::default(), Scripted::new(&[3, 4]));

    assert_eq!(score.human_wins, 1);
    assert_eq!(score.rounds(), 1);
    assert!(output.contains("SELAMAT DATANG DI TIC TAC TOE"));
    assert!(output.contains("Komputer memilih posisi: 4"));
    assert!(output.contains("Komputer memilih posisi: 5"));
    assert!(output.contains(" X | X | X "));
    assert!(output.contains("🎉 SELAMAT! ANDA MENANG!"));
    assert!(output.contains("Skor - Anda: 1, Komputer: 0, Seri: 0"));
    assert!(output.trim_end().ends_with("Terima kasih telah bermain! Sampai jumpa!"));
}

#[test]
fn test_heuristic_computer_wins_after_blocking() {
    // Human 2, 3 -> computer blocks 1 (index 0); human blocks 9 -> computer
    // blocks 6 (index 5) and now threatens 4 (index 3); human ignores it.
    for seed in 0..10 {
        let computer =
            HeuristicPlayer::new("Komputer", Mark::Computer, StdRng::seed_from_u64(seed));
        let (score, output) = run_session("2\n3\n9\n8\nn\n", &GameConfig::default(), computer);

        assert_eq!(score.computer_wins, 1);
        assert!(output.contains("Komputer memilih posisi: 5"));
        assert!(output.contains("Komputer memilih posisi: 1"));
        assert!(output.contains("Komputer memilih posisi: 6"));
        assert!(output.contains("Komputer memilih posisi: 4"));
        assert!(output.contains("😢 KOMPUTER MENANG! COBA LAGI!"));
    }
}

#[test]
fn test_draw_round() {
    // X O X / X O O / O X X
    let (score, output) = run_session(
        "1\n3\n4\n8\n9\nn\n",
        &GameConfig::default(),
        Scripted::new(&[1, 4, 5, 6]),
    );

    assert_eq!(score.draws, 1);
    assert_eq!(score.rounds(), 1);
    assert!(output.contains("🤝 PERMAINAN SERI (DRAW)!"));
}

#[test]
fn test_bad_input_reprompts() {
    let (score, output) = run_session(
        "abc\n0\n1\n1\n2\n3\nn\n",
        &GameConfig::default(),
        Scripted::new(&[3, 4]),
    );

    assert_eq!(score.human_wins, 1);
    assert!(output.contains("Input tidak valid! Masukkan angka 1-9."));
    assert!(output.contains("Posisi harus antara 1-9!"));
    assert!(output.contains("Posisi sudah terisi!"));
}

#[test]
fn test_huge_number_is_out_of_range_not_invalid() {
    let (score, output) = run_session(
        "99999999999999999999\n1\n2\n3\nn\n",
        &GameConfig::default(),
        Scripted::new(&[3, 4]),
    );

    assert_eq!(score.human_wins, 1);
    assert!(output.contains("Posisi harus antara 1-9!"));
    assert!(!output.contains("Input tidak valid!"));
}

#[test]
fn test_replay_accumulates_score() {
    let (score, output) = run_session(
        "1\n2\n3\ny\n1\n2\n3\nn\n",
        &GameConfig::default(),
        Scripted::new(&[3, 4, 3, 4]),
    );

    assert_eq!(score.human_wins, 2);
    assert_eq!(score.rounds(), 2);
    assert_eq!(output.matches("SELAMAT DATANG DI TIC TAC TOE").count(), 2);
    assert!(output.contains("Skor - Anda: 2, Komputer: 0, Seri: 0"));
}

#[test]
fn test_end_of_input_ends_session() {
    let (score, output) = run_session("1\n", &GameConfig::default(), Scripted::new(&[4]));

    assert_eq!(score, Scoreboard::default());
    assert!(output.contains("Terima kasih telah bermain! Sampai jumpa!"));
}

#[test]
fn test_policy_failure_abandons_round_only() {
    let (score, output) = run_session("5\nn\n", &GameConfig::default(), Scripted::new(&[]));

    assert_eq!(score.rounds(), 0);
    assert!(output.contains("Terjadi kesalahan pada ronde ini."));
    assert!(output.contains("Ingin bermain lagi? (y/n): "));
    assert!(output.contains("Terima kasih telah bermain! Sampai jumpa!"));
}

#[test]
fn test_illegal_computer_move_abandons_round() {
    let (score, output) = run_session(
        "5\ny\n1\n2\n3\nn\n",
        &GameConfig::default(),
        Scripted::new(&[4, 3, 4]),
    );

    // First round: computer tries the human's square. Second round plays out.
    assert_eq!(score.rounds(), 1);
    assert_eq!(score.human_wins, 1);
    assert!(output.contains("Terjadi kesalahan pada ronde ini."));
}

#[test]
fn test_english_text() {
    let config = GameConfig::default().with_overrides(Some(Language::English), None, false);
    let (_, output) = run_session("1\n2\n3\nn\n", &config, Scripted::new(&[3, 4]));

    assert!(output.contains("WELCOME TO TIC TAC TOE"));
    assert!(output.contains("The computer chose position: 4"));
    assert!(output.contains("🎉 CONGRATULATIONS! YOU WIN!"));
    assert!(output.contains("Thanks for playing! See you!"));
}

#[test]
fn test_guide_can_be_hidden() {
    let shown = run_session("1\n", &GameConfig::default(), Scripted::new(&[])).1;
    assert!(shown.contains(" 1 | 2 | 3 "));

    let config = GameConfig::default().with_overrides(None, None, true);
    let hidden = run_session("1\n", &config, Scripted::new(&[])).1;
    assert!(!hidden.contains(" 1 | 2 | 3 "));
}

#[test]
fn test_round_state_after_session() {
    let mut session = Session::new(
        Cursor::new("1\n2\n3\n".to_string()),
        Vec::new(),
        &GameConfig::default(),
        Scripted::new(&[3, 4]),
    );
    let status = session.play_round().unwrap();

    assert_eq!(status, RoundStatus::HumanWon);
    assert_eq!(session.round().history().len(), 5);
    assert!(session.round().board().is_winner(Mark::Human));
    // Only `run` records results.
    assert_eq!(session.scoreboard(), Scoreboard::default());
}
