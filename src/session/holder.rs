//! Rating holder interface
//!
//! A match never owns ratings. It reads and writes them through this trait,
//! so callers can back a holder with any storage.

use crate::types::{Player, Rating};

/// Trait for anything that carries a current rating
pub trait RatingHolder {
    fn rating(&self) -> Rating;

    fn set_rating(&mut self, rating: Rating);
}

impl RatingHolder for Rating {
    fn rating(&self) -> Rating {
        *self
    }

    fn set_rating(&mut self, rating: Rating) {
        *self = rating;
    }
}

impl RatingHolder for Player {
    fn rating(&self) -> Rating {
        self.rating
    }

    fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }
}
