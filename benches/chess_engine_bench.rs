//! Chess Mentor Benchmarks
//!
//! Performance benchmarks for move generation, status classification and the
//! scored AI tiers using Criterion.

use chess_mentor::evaluation::{evaluate_board_control, evaluate_mobility, evaluate_pawn_structure};
use chess_mentor::rules::{legal_moves_for_player, pseudo_legal_moves};
use chess_mentor::{check_game_status, generate_ai_move, get_suggestion, Board, Difficulty, Player};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A developed middlegame position with pieces on both wings
const MIDDLEGAME: &str = "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP2BPPP/R2QKB1R";

fn middlegame() -> Board {
    MIDDLEGAME.parse().unwrap()
}

fn bench_initial_board(c: &mut Criterion) {
    c.bench_function("initial_board", |b| b.iter(|| black_box(Board::initial())));
}

fn bench_move_generation(c: &mut Criterion) {
    let start = Board::initial();
    let board = middlegame();

    c.bench_function("pseudo_legal_moves_starting_position", |b| {
        b.iter(|| black_box(pseudo_legal_moves(&start, Player::White)))
    });
    c.bench_function("legal_moves_middlegame", |b| {
        b.iter(|| {
            let white = legal_moves_for_player(&board, Player::White);
            let black = legal_moves_for_player(&board, Player::Black);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_game_status(c: &mut Criterion) {
    let board = middlegame();

    c.bench_function("check_game_status_middlegame", |b| {
        b.iter(|| black_box(check_game_status(&board, Player::Black)))
    });
}

fn bench_evaluation(c: &mut Criterion) {
    let board = middlegame();

    c.bench_function("positional_terms_middlegame", |b| {
        b.iter(|| {
            black_box((
                evaluate_board_control(&board),
                evaluate_mobility(&board),
                evaluate_pawn_structure(&board),
            ))
        })
    });
}

fn bench_ai_selection(c: &mut Criterion) {
    let board = middlegame();

    c.bench_function("ai_intermediate_middlegame", |b| {
        b.iter(|| black_box(generate_ai_move(&board, Difficulty::Intermediate)))
    });
    c.bench_function("ai_advanced_middlegame", |b| {
        b.iter(|| black_box(generate_ai_move(&board, Difficulty::Advanced)))
    });
    c.bench_function("hint_middlegame", |b| {
        b.iter(|| black_box(get_suggestion(&board)))
    });
}

criterion_group!(
    benches,
    bench_initial_board,
    bench_move_generation,
    bench_game_status,
    bench_evaluation,
    bench_ai_selection,
);
criterion_main!(benches);
