/// Census race/ethnicity categories carried on every district (ACS B03002).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demographic {
    White,
    Black,
    Hispanic,
    Asian,
    AmericanIndian,
    PacificIslander,
    TwoOrMore,
    Other,
}

impl Demographic {
    pub const ALL: [Demographic; 8] = [
        Demographic::White,
        Demographic::Black,
        Demographic::Hispanic,
        Demographic::Asian,
        Demographic::AmericanIndian,
        Demographic::PacificIslander,
        Demographic::TwoOrMore,
        Demographic::Other,
    ];

    /// Property key of the absolute count.
    pub fn key(&self) -> &'static str {
        match self {
            Demographic::White => "WHITE",
            Demographic::Black => "BLACK",
            Demographic::Hispanic => "HISPANIC",
            Demographic::Asian => "ASIAN",
            Demographic::AmericanIndian => "AMERICAN_INDIAN",
            Demographic::PacificIslander => "PACIFIC_ISLANDER",
            Demographic::TwoOrMore => "TWO_OR_MORE",
            Demographic::Other => "OTHER",
        }
    }

    /// Property key of the fractional share.
    pub fn pct_key(&self) -> &'static str {
        match self {
            Demographic::White => "WHITE_PCT",
            Demographic::Black => "BLACK_PCT",
            Demographic::Hispanic => "HISPANIC_PCT",
            Demographic::Asian => "ASIAN_PCT",
            Demographic::AmericanIndian => "AMERICAN_INDIAN_PCT",
            Demographic::PacificIslander => "PACIFIC_ISLANDER_PCT",
            Demographic::TwoOrMore => "TWO_OR_MORE_PCT",
            Demographic::Other => "OTHER_PCT",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Demographic::White => "White",
            Demographic::Black => "Black",
            Demographic::Hispanic => "Hispanic",
            Demographic::Asian => "Asian",
            Demographic::AmericanIndian => "American Indian",
            Demographic::PacificIslander => "Pacific Islander",
            Demographic::TwoOrMore => "Two or More",
            Demographic::Other => "Other",
        }
    }

    /// Position in `ALL` (declaration order).
    #[inline] pub(crate) fn index(&self) -> usize { *self as usize }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    pub fn from_pct_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.pct_key() == key)
    }
}
