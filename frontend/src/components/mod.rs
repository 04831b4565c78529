pub mod alert;
pub mod nav_bar;
pub mod ride_card;
pub mod stars;
