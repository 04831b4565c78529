use super::format::{format_rating, stars, Star};
use crate::user::{Role, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub role_label: &'static str,
    pub stars: [Star; 5],
    pub rating: String,
    pub reviews: u32,
}

impl From<&User> for ProfileView {
    fn from(user: &User) -> Self {
        ProfileView {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            role_label: user.role.label(),
            stars: stars(user.rating.unwrap_or(0.0)),
            rating: format_rating(user.rating),
            reviews: user.total_reviews.unwrap_or(0),
        }
    }
}
