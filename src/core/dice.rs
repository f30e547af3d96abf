//! Dice: five positional dice, exactly one of which is the wildcard.
//!
//! ## Wildcard semantics
//!
//! One die per hand is the designated wildcard. It is *wild* only while it
//! shows a 1 ([`Die::is_wild`]); at any other face it behaves as an
//! ordinary die at that face. The designation is positional and permanent
//! for the hand: rerolling the wildcard redraws its face, never its role.
//!
//! ## Positions
//!
//! Dice are addressed by stable position `0..5`. A reroll replaces the face
//! at a position in place; positions never reorder after the initial roll.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// A single die: a face in `1..=6` and a wildcard designation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    face: u8,
    wildcard: bool,
}

impl Die {
    fn new(face: u8, wildcard: bool) -> Self {
        assert!((1..=6).contains(&face), "die face must be 1-6");
        Self { face, wildcard }
    }

    /// The shown face (1-6).
    #[must_use]
    pub const fn face(self) -> u8 {
        self.face
    }

    /// Is this the hand's designated wildcard die?
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        self.wildcard
    }

    /// Is this die currently wild (the wildcard showing a 1)?
    #[must_use]
    pub const fn is_wild(self) -> bool {
        self.wildcard && self.face == 1
    }
}

/// The five dice of one turn.
///
/// ## Example
///
/// ```
/// use abaka_engine::core::DiceSet;
///
/// let dice = DiceSet::from_faces([2, 3, 4, 5, 1], 4);
/// assert_eq!(dice.faces(), [2, 3, 4, 5, 1]);
/// assert!(dice.wildcard().is_wild());
/// assert_eq!(dice.count_showing(4), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSet {
    dice: [Die; 5],
}

impl DiceSet {
    /// Roll a fresh hand: four ordinary dice and one wildcard, each face
    /// uniform over 1-6, with the wildcard's position shuffled in.
    #[must_use]
    pub fn roll(rng: &mut GameRng) -> Self {
        let mut dice = [
            Die::new(rng.roll_face(), false),
            Die::new(rng.roll_face(), false),
            Die::new(rng.roll_face(), false),
            Die::new(rng.roll_face(), false),
            Die::new(rng.roll_face(), true),
        ];
        rng.shuffle(&mut dice);
        Self { dice }
    }

    /// Build a hand from explicit faces, with the wildcard at the given
    /// position. Panics on a face outside `1..=6` or a position outside
    /// `0..5`.
    #[must_use]
    pub fn from_faces(faces: [u8; 5], wildcard_index: usize) -> Self {
        assert!(wildcard_index < 5, "wildcard index must be 0-4");
        let mut dice = faces.map(|face| Die::new(face, false));
        dice[wildcard_index].wildcard = true;
        Self { dice }
    }

    /// Redraw the face at one position in place. The wildcard designation
    /// at that position is untouched.
    pub fn reroll_at(&mut self, index: usize, rng: &mut GameRng) {
        assert!(index < 5, "die index must be 0-4");
        self.dice[index].face = rng.roll_face();
    }

    /// All five dice in position order.
    #[must_use]
    pub fn dice(&self) -> &[Die; 5] {
        &self.dice
    }

    /// The five shown faces in position order.
    #[must_use]
    pub fn faces(&self) -> [u8; 5] {
        self.dice.map(Die::face)
    }

    /// The designated wildcard die.
    #[must_use]
    pub fn wildcard(&self) -> Die {
        self.dice[self.wildcard_index()]
    }

    /// Position of the designated wildcard die.
    #[must_use]
    pub fn wildcard_index(&self) -> usize {
        // The one-wildcard invariant is upheld by both constructors.
        self.dice
            .iter()
            .position(|d| d.is_wildcard())
            .unwrap_or(0)
    }

    /// Is the hand's wildcard currently wild (showing a 1)?
    #[must_use]
    pub fn has_wild(&self) -> bool {
        self.wildcard().is_wild()
    }

    /// Number of dice currently showing `face`, wildcard included by the
    /// face it shows.
    #[must_use]
    pub fn count_showing(&self, face: u8) -> usize {
        self.dice.iter().filter(|d| d.face() == face).count()
    }
}
