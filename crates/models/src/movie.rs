use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::ModelError;
use crate::validation::ensure_positive;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub playtime: i64,
    pub genre: Vec<String>,
}

/// Payload of `POST /movies`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewMovie {
    pub title: String,
    pub playtime: i64,
    pub genre: Vec<String>,
}

/// Payload of `PATCH /movies/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MoviePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub playtime: Option<i64>,
    #[serde(default)]
    pub genre: Option<Vec<String>>,
}

/// Query string of `GET /movies`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieSearch {
    pub title: Option<String>,
    /// A single genre label; matches movies whose genre list contains it.
    pub genre: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MovieCriterion {
    Id(u64),
    Title(String),
    Playtime(i64),
    Genre(String),
}

impl Movie {
    pub fn new(id: u64, fields: NewMovie) -> Self {
        Self { id, title: fields.title, playtime: fields.playtime, genre: fields.genre }
    }

    pub fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(playtime) = patch.playtime {
            self.playtime = playtime;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }

    /// Value equality. A single genre label never equals a genre list, so a
    /// genre criterion makes an exact lookup miss.
    pub fn matches_exact(&self, criterion: &MovieCriterion) -> bool {
        match criterion {
            MovieCriterion::Id(id) => self.id == *id,
            MovieCriterion::Title(title) => &self.title == title,
            MovieCriterion::Playtime(playtime) => self.playtime == *playtime,
            MovieCriterion::Genre(_) => false,
        }
    }

    /// Equality, or membership for the genre list.
    pub fn matches(&self, criterion: &MovieCriterion) -> bool {
        match criterion {
            MovieCriterion::Genre(label) => self.genre.iter().any(|g| g == label),
            other => self.matches_exact(other),
        }
    }
}

impl MoviePatch {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(playtime) = self.playtime {
            ensure_positive("playtime", playtime)?;
        }
        Ok(())
    }
}

impl MovieSearch {
    pub fn criteria(&self) -> Vec<MovieCriterion> {
        let mut out = Vec::new();
        if let Some(title) = &self.title {
            out.push(MovieCriterion::Title(title.clone()));
        }
        if let Some(genre) = &self.genre {
            out.push(MovieCriterion::Genre(genre.clone()));
        }
        out
    }
}
