use models::{Movie, MovieCriterion, MoviePatch, NewMovie, NewUser, User, UserCriterion, UserPatch};

/// A record kind that can live in an [`EntityStore`](super::EntityStore).
///
/// `Criterion` is a per-entity tagged union, so a lookup on a field the
/// record does not have cannot be expressed.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Creation payload, everything but the id.
    type Fields: Send;
    /// Partial update; `None` members leave the record untouched.
    type Patch: Send;
    type Criterion: Send + Sync;

    /// Human-readable kind used in logs and not-found messages.
    const KIND: &'static str;

    fn build(id: u64, fields: Self::Fields) -> Self;
    fn id(&self) -> u64;
    fn apply(&mut self, patch: Self::Patch);
    fn id_criterion(id: u64) -> Self::Criterion;

    /// Exact value equality, used by `get`.
    fn matches_exact(&self, criterion: &Self::Criterion) -> bool;

    /// Equality or membership in a sequence field, used by `filter`.
    fn matches(&self, criterion: &Self::Criterion) -> bool {
        self.matches_exact(criterion)
    }
}

impl Entity for User {
    type Fields = NewUser;
    type Patch = UserPatch;
    type Criterion = UserCriterion;

    const KIND: &'static str = "user";

    fn build(id: u64, fields: NewUser) -> Self { User::new(id, fields) }
    fn id(&self) -> u64 { self.id }
    fn apply(&mut self, patch: UserPatch) { User::apply(self, patch) }
    fn id_criterion(id: u64) -> UserCriterion { UserCriterion::Id(id) }
    fn matches_exact(&self, criterion: &UserCriterion) -> bool { User::matches(self, criterion) }
}

impl Entity for Movie {
    type Fields = NewMovie;
    type Patch = MoviePatch;
    type Criterion = MovieCriterion;

    const KIND: &'static str = "movie";

    fn build(id: u64, fields: NewMovie) -> Self { Movie::new(id, fields) }
    fn id(&self) -> u64 { self.id }
    fn apply(&mut self, patch: MoviePatch) { Movie::apply(self, patch) }
    fn id_criterion(id: u64) -> MovieCriterion { MovieCriterion::Id(id) }
    fn matches_exact(&self, criterion: &MovieCriterion) -> bool { Movie::matches_exact(self, criterion) }
    fn matches(&self, criterion: &MovieCriterion) -> bool { Movie::matches(self, criterion) }
}
