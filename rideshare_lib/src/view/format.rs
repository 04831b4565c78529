use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    pub fn css_class(self) -> &'static str {
        match self {
            Star::Full => "bi bi-star-fill text-warning",
            Star::Half => "bi bi-star-half text-warning",
            Star::Empty => "bi bi-star text-muted",
        }
    }
}

/// Five stars for a 0 to 5 rating, rounding the remainder to a half star.
pub fn stars(rating: f64) -> [Star; 5] {
    let rating = if rating.is_finite() { rating.clamp(0.0, 5.0) } else { 0.0 };
    let full = rating.floor() as usize;
    let half = full < 5 && rating.fract() >= 0.5;

    let mut stars = [Star::Empty; 5];
    for star in stars.iter_mut().take(full) {
        *star = Star::Full;
    }
    if half {
        stars[full] = Star::Half;
    }
    stars
}

/// `$25` for whole amounts, `$12.50` otherwise.
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

/// e.g. `Jun 1, 2024`
pub fn format_date(date_time: &NaiveDateTime) -> String {
    date_time.format("%b %-d, %Y").to_string()
}

/// e.g. `Jun 1, 2024, 08:30 AM`
pub fn format_date_time(date_time: &NaiveDateTime) -> String {
    date_time.format("%b %-d, %Y, %I:%M %p").to_string()
}

pub fn format_rating(rating: Option<f64>) -> String {
    format!("{:.1}", rating.unwrap_or(0.0))
}

pub fn seats_label(seats: u32) -> String {
    if seats == 1 {
        "1 seat".to_owned()
    } else {
        format!("{seats} seats")
    }
}
