//! Scoring categories: the fifteen rows of the scoreboard.
//!
//! ## Category
//!
//! Closed enum over the nine combination rows plus the six school rows.
//! School rows carry their denomination as a typed field; nothing in the
//! engine parses semantics out of a display name.
//!
//! ## Denomination
//!
//! Validated die face (1-6) naming a school row.

use serde::{Deserialize, Serialize};

/// A die face value naming a school row. Always in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Denomination(u8);

impl Denomination {
    /// All six denominations in ascending order.
    pub const ALL: [Denomination; 6] = [
        Denomination(1),
        Denomination(2),
        Denomination(3),
        Denomination(4),
        Denomination(5),
        Denomination(6),
    ];

    /// Create a denomination, or `None` if `face` is outside `1..=6`.
    ///
    /// ```
    /// use abaka_engine::core::Denomination;
    ///
    /// assert_eq!(Denomination::new(4).map(|d| d.face()), Some(4));
    /// assert!(Denomination::new(0).is_none());
    /// assert!(Denomination::new(7).is_none());
    /// ```
    #[must_use]
    pub fn new(face: u8) -> Option<Self> {
        (1..=6).contains(&face).then_some(Self(face))
    }

    /// The face value (1-6).
    #[must_use]
    pub const fn face(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scoreboard row.
///
/// ## Example
///
/// ```
/// use abaka_engine::core::{Category, Denomination};
///
/// let fours = Denomination::new(4).unwrap();
/// assert!(Category::School(fours).is_school());
/// assert_eq!(Category::School(fours).index(), 3);
/// assert_eq!(Category::Sum.index(), 14);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Two dice of the same face. Scores twice the face.
    Pair,
    /// Two distinct pairs. Scores their combined pip sum.
    TwoPairs,
    /// Three of a kind. Scores three times the face.
    Trips,
    /// Four consecutive faces anywhere in the hand. Scores the full pip total.
    SmallStraight,
    /// Five consecutive faces. Scores the pip total.
    LargeStraight,
    /// Three of one face plus two of another. Scores the pip total.
    Full,
    /// Four of a kind. Scores four times the face plus 20.
    Kare,
    /// Five of a kind. Scores the pip total plus 50.
    Abaka,
    /// Any hand. Scores the pip total.
    Sum,
    /// School row for one denomination: collect three of that face.
    School(Denomination),
}

impl Category {
    /// All fifteen categories in scoreboard order: school rows 1-6 first,
    /// then the nine combination rows.
    pub const ALL: [Category; 15] = [
        Category::School(Denomination(1)),
        Category::School(Denomination(2)),
        Category::School(Denomination(3)),
        Category::School(Denomination(4)),
        Category::School(Denomination(5)),
        Category::School(Denomination(6)),
        Category::Pair,
        Category::TwoPairs,
        Category::Trips,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Full,
        Category::Kare,
        Category::Abaka,
        Category::Sum,
    ];

    /// Stable position of this category in [`Category::ALL`].
    ///
    /// Used to key per-category arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Category::School(d) => d.face() as usize - 1,
            Category::Pair => 6,
            Category::TwoPairs => 7,
            Category::Trips => 8,
            Category::SmallStraight => 9,
            Category::LargeStraight => 10,
            Category::Full => 11,
            Category::Kare => 12,
            Category::Abaka => 13,
            Category::Sum => 14,
        }
    }

    /// The school row for `face`, or `None` if `face` is outside `1..=6`.
    #[must_use]
    pub fn school(face: u8) -> Option<Self> {
        Denomination::new(face).map(Category::School)
    }

    /// Is this a school row?
    #[must_use]
    pub const fn is_school(self) -> bool {
        matches!(self, Category::School(_))
    }

    /// The school denomination, or `None` for combination rows.
    #[must_use]
    pub const fn denomination(self) -> Option<Denomination> {
        match self {
            Category::School(d) => Some(d),
            _ => None,
        }
    }

    /// Short label as printed on the traditional paper sheet.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::School(d) => ["1", "2", "3", "4", "5", "6"][d.face() as usize - 1],
            Category::Pair => "D",
            Category::TwoPairs => "DD",
            Category::Trips => "T",
            Category::SmallStraight => "LS",
            Category::LargeStraight => "BS",
            Category::Full => "F",
            Category::Kare => "C",
            Category::Abaka => "A",
            Category::Sum => "Σ",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::School(d) => write!(f, "School {}", d),
            Category::Pair => write!(f, "Pair"),
            Category::TwoPairs => write!(f, "Two Pairs"),
            Category::Trips => write!(f, "Trips"),
            Category::SmallStraight => write!(f, "Small Straight"),
            Category::LargeStraight => write!(f, "Large Straight"),
            Category::Full => write!(f, "Full"),
            Category::Kare => write!(f, "Kare"),
            Category::Abaka => write!(f, "Abaka"),
            Category::Sum => write!(f, "Sum"),
        }
    }
}
