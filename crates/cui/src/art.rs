//! Box-drawn card face for the reveal pane. When no card is up (idle, or
//! between runs) a neutral placeholder face of the same size is shown, the
//! terminal stand-in for a missing card image.

use shoecount_core::Card;

pub const FACE_WIDTH: u16 = 11;
pub const FACE_HEIGHT: u16 = 7;

pub fn face_lines(card: Option<Card>) -> Vec<String> {
    match card {
        Some(card) => {
            let rank = card.rank.symbol();
            let suit = card.suit.symbol();
            vec![
                "┌─────────┐".to_string(),
                format!("│ {rank:<7} │"),
                "│         │".to_string(),
                format!("│    {suit}    │"),
                "│         │".to_string(),
                format!("│ {rank:>7} │"),
                "└─────────┘".to_string(),
            ]
        }
        None => vec![
            "┌─────────┐".to_string(),
            "│         │".to_string(),
            "│         │".to_string(),
            "│    ·    │".to_string(),
            "│         │".to_string(),
            "│         │".to_string(),
            "└─────────┘".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoecount_core::{Rank, Suit};

    #[test]
    fn faces_and_placeholder_share_dimensions() {
        let face = face_lines(Some(Card::new(Rank::Queen, Suit::Hearts)));
        let placeholder = face_lines(None);
        assert_eq!(face.len(), FACE_HEIGHT as usize);
        assert_eq!(placeholder.len(), FACE_HEIGHT as usize);
        for line in face.iter().chain(placeholder.iter()) {
            assert_eq!(line.chars().count(), FACE_WIDTH as usize);
        }
    }

    #[test]
    fn face_shows_rank_in_both_corners() {
        let face = face_lines(Some(Card::new(Rank::Ten, Suit::Spades)));
        assert!(face[1].contains("10"));
        assert!(face[5].contains("10"));
        assert!(face[3].contains("♠"));
    }
}
