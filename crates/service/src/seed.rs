//! Dummy data generation for manual API exploration.

use models::{Gender, NewMovie, NewUser};
use rand::seq::SliceRandom;
use rand::Rng;

pub const MOVIE_GENRES: [&str; 6] = ["SF", "Romantic", "Adventure", "Action", "Comedy", "Horror"];
pub const GENRES_PER_MOVIE: usize = 3;

/// Creation payload that can be synthesized from an index and an RNG.
pub trait Dummy {
    /// `index` starts at 1.
    fn dummy<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self;
}

impl Dummy for NewUser {
    fn dummy<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        let gender = if rng.gen_bool(0.5) { Gender::Male } else { Gender::Female };
        NewUser { username: format!("dummy_user {index}"), age: rng.gen_range(10..=60), gender }
    }
}

impl Dummy for NewMovie {
    fn dummy<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        let genre = MOVIE_GENRES
            .choose_multiple(rng, GENRES_PER_MOVIE)
            .map(|g| g.to_string())
            .collect();
        NewMovie { title: format!("dummy_movie {index}"), playtime: rng.gen_range(100..=300), genre }
    }
}
