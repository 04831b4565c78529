use log::info;

use super::send_checked;
use crate::{
    error::{ClientError, ValidationError},
    http::ApiRequest,
    review::{ReviewCreate, StarRating},
    session::SessionManager,
    view::{alert::Alert, format::Star},
};

pub const REVIEW_FAILED: &str = "Failed to submit the review.";

/// The review dialog's state for one ride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub ride_id: i64,
    pub rating: Option<StarRating>,
    pub comment: String,
}

impl ReviewForm {
    pub fn new(ride_id: i64) -> Self {
        Self {
            ride_id,
            rating: None,
            comment: String::new(),
        }
    }

    pub fn validate(&self) -> Result<ReviewCreate, ValidationError> {
        let rating = self.rating.ok_or(ValidationError::MissingRating)?;
        Ok(ReviewCreate {
            ride_id: self.ride_id,
            rating,
            comment: self.comment.trim().to_owned(),
        })
    }
}

pub async fn submit(manager: &SessionManager, form: &ReviewForm) -> Result<Alert, ClientError> {
    let payload = form.validate()?;
    let request = ApiRequest::post("/reviews").json(&payload)?;
    send_checked(manager, request, REVIEW_FAILED).await?;

    info!("Reviewed ride {} with {} stars", payload.ride_id, payload.rating.value());
    Ok(Alert::success("Thank you for your review!"))
}

/// Pointer state of the five-star input. Hovering previews a rating without
/// committing it; leaving falls back to the selected one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarPicker {
    selected: Option<StarRating>,
    hover: Option<StarRating>,
}

impl StarPicker {
    pub fn selected(&self) -> Option<StarRating> {
        self.selected
    }

    pub fn hover(&mut self, star: u8) {
        self.hover = StarRating::new(star);
    }

    pub fn leave(&mut self) {
        self.hover = None;
    }

    pub fn select(&mut self, star: u8) {
        if let Some(rating) = StarRating::new(star) {
            self.selected = Some(rating);
        }
    }

    fn shown(&self) -> Option<StarRating> {
        self.hover.or(self.selected)
    }

    pub fn stars(&self) -> [Star; 5] {
        let lit = self.shown().map_or(0, StarRating::value);
        std::array::from_fn(|i| if (i as u8) < lit { Star::Full } else { Star::Empty })
    }

    pub fn label(&self) -> &'static str {
        self.shown().map_or("Select a rating", StarRating::label)
    }
}
