//! Test fixtures and holder implementations for integration testing

#![allow(dead_code)]

use elo_match::{Rating, RatingHolder};

/// Printed-precision tolerance for comparing ratings
pub const EPSILON: f64 = 1e-6;

pub fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Rating holder that records every rating written to it
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    rating: Rating,
    writes: Vec<Rating>,
}

impl RecordingPlayer {
    pub fn new(rating: Rating) -> Self {
        Self {
            rating,
            writes: Vec::new(),
        }
    }

    /// Ratings written by matches, oldest first
    pub fn writes(&self) -> &[Rating] {
        &self.writes
    }

    /// Reset the rating between scenarios without recording a write
    pub fn reset(&mut self, rating: Rating) {
        self.rating = rating;
    }
}

impl RatingHolder for RecordingPlayer {
    fn rating(&self) -> Rating {
        self.rating
    }

    fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
        self.writes.push(rating);
    }
}

/// Create a pair of recording players
pub fn create_test_players(r1: Rating, r2: Rating) -> (RecordingPlayer, RecordingPlayer) {
    (RecordingPlayer::new(r1), RecordingPlayer::new(r2))
}
