use serde::{Deserialize, Serialize};

/// A 1 to 5 star rating. Zero stars is "no rating selected" and is not a
/// `StarRating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very bad",
            2 => "Bad",
            3 => "Average",
            4 => "Good",
            _ => "Excellent",
        }
    }
}

impl TryFrom<u8> for StarRating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        StarRating::new(value).ok_or_else(|| format!("rating must be between 1 and {}, got {value}", Self::MAX))
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

/// Body of `POST /api/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreate {
    pub ride_id: i64,
    pub rating: StarRating,
    pub comment: String,
}
