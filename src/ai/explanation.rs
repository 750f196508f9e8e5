//! Human-readable explanations for automated moves

use super::selector::AIMoveResult;
use crate::pieces::PieceKind;
use crate::rules::{is_king_in_check, make_move, Board};
use rand::seq::IndexedRandom;
use rand::Rng;

const CAPTURE_SUFFIX: &str = "This also involves a capture.";
const CHECK_SUFFIX: &str = "Your king is now in check!";

/// Generic commentary used when the selector left no rationale
fn flavor_lines(kind: PieceKind) -> &'static [&'static str] {
    match kind {
        PieceKind::Pawn => &[
            "I moved my pawn forward to control more space on the board.",
            "Advancing this pawn helps me develop my pieces.",
            "This pawn move helps control important central squares.",
        ],
        PieceKind::Rook => &[
            "I moved my rook to control this file.",
            "Rooks work best on open files where they can move freely.",
            "I positioned my rook to attack your pieces along this line.",
        ],
        PieceKind::Knight => &[
            "Knights are powerful when placed in the center of the board.",
            "My knight now controls several important squares.",
            "Knights can jump over pieces, making them valuable in closed positions.",
        ],
        PieceKind::Bishop => &[
            "Bishops are effective along diagonals.",
            "This bishop now controls a long diagonal.",
            "I've developed my bishop to influence the center.",
        ],
        PieceKind::Queen => &[
            "The queen is powerful but needs to be used carefully.",
            "My queen is now positioned to threaten multiple squares.",
            "I've moved my queen to a more active position.",
        ],
        PieceKind::King => &[
            "King safety is important in chess.",
            "I've moved my king to a safer square.",
            "This move helps protect my king.",
        ],
    }
}

/// Explain `result`, played on `board` (the position before the move)
///
/// Starts from the selector's rationale, or a stock line for the moving piece,
/// and appends capture and check notes unless the text already covers them.
pub fn get_ai_move_explanation(board: &Board, result: &AIMoveResult) -> String {
    get_ai_move_explanation_with_rng(board, result, &mut rand::rng())
}

pub fn get_ai_move_explanation_with_rng<R: Rng + ?Sized>(
    board: &Board,
    result: &AIMoveResult,
    rng: &mut R,
) -> String {
    let mv = result.mv;
    let mover = board.get(mv.from).as_piece();

    let (Some(mover), false) = (mover, mv.is_null()) else {
        return result.rationale.clone().unwrap_or_default();
    };

    let mut text = match &result.rationale {
        Some(rationale) => rationale.clone(),
        None => flavor_lines(mover.kind)
            .choose(rng)
            .map(|line| line.to_string())
            .unwrap_or_default(),
    };

    let is_capture = board.get(mv.to).is_piece_of(mover.color.opponent());
    let gives_check = is_king_in_check(&make_move(board, mv), mover.color.opponent());

    let lowered = text.to_lowercase();
    if is_capture && !lowered.contains("captur") {
        append_sentence(&mut text, CAPTURE_SUFFIX);
    }
    if gives_check && !lowered.contains("check") {
        append_sentence(&mut text, CHECK_SUFFIX);
    }
    text
}

fn append_sentence(text: &mut String, sentence: &str) {
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(sentence);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Piece, Square};
    use crate::types::{Move, Player, Position};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn result(mv: Move, rationale: Option<&str>) -> AIMoveResult {
        AIMoveResult {
            mv,
            strategy: None,
            rationale: rationale.map(str::to_string),
        }
    }

    #[test]
    fn test_flavor_line_without_rationale() {
        let board = Board::initial();
        let mv = Move::new(Position::new(0, 6), Position::new(2, 5));
        let mut rng = StdRng::seed_from_u64(1);

        let text = get_ai_move_explanation_with_rng(&board, &result(mv, None), &mut rng);
        assert!(flavor_lines(PieceKind::Knight).contains(&text.as_str()));
    }

    #[test]
    fn test_capture_and_check_suffixes() {
        //! Black queen takes on e2 next to the white king on e1
        let board = Board::with_pieces(&[
            (Piece::new(PieceKind::King, Player::White), Position::new(7, 4)),
            (Piece::new(PieceKind::Pawn, Player::White), Position::new(6, 4)),
            (Piece::new(PieceKind::Queen, Player::Black), Position::new(2, 4)),
            (Piece::new(PieceKind::King, Player::Black), Position::new(0, 0)),
        ]);
        let mv = Move::new(Position::new(2, 4), Position::new(6, 4));

        let text = get_ai_move_explanation(&board, &result(mv, Some("A strong move.")));
        assert_eq!(
            text,
            "A strong move. This also involves a capture. Your king is now in check!"
        );
    }

    #[test]
    fn test_suffixes_not_repeated() {
        let mut board = Board::initial();
        board.set(Position::new(2, 3), Square::piece(PieceKind::Pawn, Player::White));
        let mv = Move::new(Position::new(1, 2), Position::new(2, 3));

        let text = get_ai_move_explanation(&board, &result(mv, Some("Capturing your pawn.")));
        assert_eq!(text, "Capturing your pawn.");
    }

    #[test]
    fn test_null_move_keeps_rationale() {
        let board = Board::initial();
        let text = get_ai_move_explanation(
            &board,
            &result(Move::null(), Some("I have no legal moves left.")),
        );
        assert_eq!(text, "I have no legal moves left.");
    }
}
