//! Territory cards and the draw pile.
//!
//! Cards are earned and traded in phases outside this crate's scope; the
//! placement rules only carry the pile along untouched. The pile is built
//! at setup so the later phases have something to draw from.

use super::territory::{Board, TerritoryId};

/// The symbol printed on a territory card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Infantry,
    Cavalry,
    Artillery,
    Wild,
}

/// A card in the match's draw pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub kind: CardKind,
    /// The territory pictured on the card. Wild cards carry none.
    pub territory: Option<TerritoryId>,
}

/// Builds the standard draw pile for a board: one card per territory with
/// the symbols cycling infantry, cavalry, artillery, plus two wilds.
pub fn standard_deck(board: &Board) -> Vec<Card> {
    const SYMBOLS: [CardKind; 3] = [CardKind::Infantry, CardKind::Cavalry, CardKind::Artillery];

    let mut deck: Vec<Card> = board
        .territories()
        .iter()
        .enumerate()
        .map(|(i, t)| Card {
            kind: SYMBOLS[i % SYMBOLS.len()],
            territory: Some(t.id),
        })
        .collect();
    deck.push(Card {
        kind: CardKind::Wild,
        territory: None,
    });
    deck.push(Card {
        kind: CardKind::Wild,
        territory: None,
    });
    deck
}
