//! Static tip tables, one per phase

use super::{Phase, StrategyTip};
use crate::ai::Difficulty;

const fn tip(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    phase: Phase,
    difficulty: Difficulty,
) -> StrategyTip {
    StrategyTip {
        id,
        name,
        description,
        phase,
        difficulty,
    }
}

pub static OPENING: [StrategyTip; 5] = [
    tip(
        "opening-center",
        "Control the Center",
        "Try to control the central squares (d4, d5, e4, e5) with your pawns and pieces. The center is crucial for mobility and attacking options.",
        Phase::Opening,
        Difficulty::Beginner,
    ),
    tip(
        "opening-develop",
        "Develop Your Pieces",
        "Move your knights and bishops out early to prepare for attack and defense. Aim to have all minor pieces developed before making major attacks.",
        Phase::Opening,
        Difficulty::Beginner,
    ),
    tip(
        "opening-castle",
        "Castle Early",
        "Move your king to safety by castling as soon as possible, ideally within the first 6-10 moves.",
        Phase::Opening,
        Difficulty::Beginner,
    ),
    tip(
        "opening-tempo",
        "Don't Waste Tempo",
        "Avoid moving the same piece multiple times in the opening. Each move should contribute to development or control.",
        Phase::Opening,
        Difficulty::Intermediate,
    ),
    tip(
        "opening-queen",
        "Don't Bring Queen Out Early",
        "Avoid moving your queen out too early as it can become a target for enemy pieces and waste valuable development time.",
        Phase::Opening,
        Difficulty::Intermediate,
    ),
];

pub static MIDDLEGAME: [StrategyTip; 6] = [
    tip(
        "middlegame-activity",
        "Maximize Piece Activity",
        "Position your pieces where they control the most squares and coordinate well with other pieces.",
        Phase::Middlegame,
        Difficulty::Intermediate,
    ),
    tip(
        "middlegame-pawnstructure",
        "Pawn Structure",
        "Pay attention to your pawn structure. Avoid isolated or doubled pawns when possible, and look for opportunities to create passed pawns.",
        Phase::Middlegame,
        Difficulty::Intermediate,
    ),
    tip(
        "middlegame-weakpoints",
        "Exploit Weak Squares",
        "Identify and occupy weak squares in your opponent's position, especially those that cannot be defended by pawns.",
        Phase::Middlegame,
        Difficulty::Intermediate,
    ),
    tip(
        "middlegame-outposts",
        "Knight Outposts",
        "Knights are powerful when placed in central positions protected by pawns, especially when they can't be attacked by enemy pawns.",
        Phase::Middlegame,
        Difficulty::Intermediate,
    ),
    tip(
        "middlegame-bishops",
        "Bishop Pairs",
        "Try to keep both of your bishops, as they work well together covering different colored squares. The bishop pair is especially strong in open positions.",
        Phase::Middlegame,
        Difficulty::Intermediate,
    ),
    tip(
        "middlegame-open-files",
        "Rooks on Open Files",
        "Place your rooks on files (columns) with no pawns to maximize their effectiveness and potentially penetrate to the seventh rank.",
        Phase::Middlegame,
        Difficulty::Intermediate,
    ),
];

pub static ENDGAME: [StrategyTip; 4] = [
    tip(
        "endgame-king",
        "Activate Your King",
        "In the endgame, your king becomes a strong piece. Bring it to the center or toward the action when safe to do so.",
        Phase::Endgame,
        Difficulty::Intermediate,
    ),
    tip(
        "endgame-passed-pawns",
        "Create Passed Pawns",
        "A passed pawn (one with no opposing pawns in front of it or on adjacent files) can become a queen and win the game.",
        Phase::Endgame,
        Difficulty::Intermediate,
    ),
    tip(
        "endgame-opposition",
        "Use the Opposition",
        "When kings face each other, the player who doesn't have to move often has the advantage (the opposition).",
        Phase::Endgame,
        Difficulty::Advanced,
    ),
    tip(
        "endgame-zugzwang",
        "Create Zugzwang",
        "Force your opponent into a position where any move will worsen their position. This is particularly effective in endgames.",
        Phase::Endgame,
        Difficulty::Advanced,
    ),
];

pub static GENERAL: [StrategyTip; 8] = [
    tip(
        "general-threats",
        "Respond to Threats",
        "Always check what your opponent is threatening with their last move and respond appropriately.",
        Phase::General,
        Difficulty::Beginner,
    ),
    tip(
        "general-captures",
        "Analyze All Captures",
        "Before moving, consider all possible captures and exchanges to ensure you're not missing tactical opportunities.",
        Phase::General,
        Difficulty::Beginner,
    ),
    tip(
        "general-checks",
        "Consider All Checks",
        "Checks force your opponent to respond in limited ways. Always look for checking opportunities that can disrupt their plans.",
        Phase::General,
        Difficulty::Beginner,
    ),
    tip(
        "general-think-ahead",
        "Think Ahead",
        "Try to anticipate what your opponent will do after your move, and have a plan ready.",
        Phase::General,
        Difficulty::Beginner,
    ),
    tip(
        "general-forks",
        "Watch for Forks",
        "Be on the lookout for opportunities where one piece can attack two or more of your opponent's pieces simultaneously.",
        Phase::General,
        Difficulty::Intermediate,
    ),
    tip(
        "general-pins",
        "Create Pins",
        "A pin restricts an enemy piece's movement because moving would expose a more valuable piece behind it.",
        Phase::General,
        Difficulty::Intermediate,
    ),
    tip(
        "general-skewers",
        "Look for Skewers",
        "A skewer is like a pin in reverse: it attacks a valuable piece that, when moved, exposes a less valuable piece behind it.",
        Phase::General,
        Difficulty::Intermediate,
    ),
    tip(
        "general-material",
        "Count Material",
        "Regularly assess the material balance. A typical value system is: pawn=1, knight/bishop=3, rook=5, queen=9.",
        Phase::General,
        Difficulty::Beginner,
    ),
];
