use models::{NewUser, User, UserPatch, UserSearch};
use rand::Rng;
use tracing::info;

use crate::{errors::ServiceError, storage::{Entity, SharedStore}};

/// Users API semantics on top of the in-memory store.
///
/// Unlike movies, an empty listing or search result is reported as not found.
#[derive(Clone, Default)]
pub struct UserService {
    store: SharedStore<User>,
}

impl UserService {
    /// Create a user and return it with its assigned id.
    pub async fn create(&self, input: NewUser) -> User {
        let user = self.store.create(input).await;
        info!(user_id = user.id, "created user");
        user
    }

    /// All users in insertion order; `NotFound` when there are none.
    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.store.all().await;
        if users.is_empty() {
            return Err(ServiceError::not_found("users"));
        }
        Ok(users)
    }

    pub async fn get(&self, id: u64) -> Result<User, ServiceError> {
        self.store
            .read_store(|s| s.get_by_id(id).cloned())
            .await
            .ok_or_else(|| ServiceError::not_found(User::KIND))
    }

    /// Partially update a user.
    pub async fn update(&self, id: u64, patch: UserPatch) -> Result<User, ServiceError> {
        let updated = self
            .store
            .update_store(|s| {
                let current = s.get_by_id(id).cloned()?;
                s.update(&current, patch)
            })
            .await
            .ok_or_else(|| ServiceError::not_found(User::KIND))?;
        info!(user_id = id, "updated user");
        Ok(updated)
    }

    /// Delete a user and return the removed record.
    pub async fn delete(&self, id: u64) -> Result<User, ServiceError> {
        let removed = self
            .store
            .update_store(|s| {
                let current = s.get_by_id(id).cloned()?;
                s.delete(&current).then_some(current)
            })
            .await
            .ok_or_else(|| ServiceError::not_found(User::KIND))?;
        info!(user_id = id, "deleted user");
        Ok(removed)
    }

    /// Users matching every supplied parameter; `NotFound` when none match.
    pub async fn search(&self, query: UserSearch) -> Result<Vec<User>, ServiceError> {
        query.validate()?;
        let found = self.store.filter(&query.criteria()).await;
        if found.is_empty() {
            return Err(ServiceError::not_found("users"));
        }
        Ok(found)
    }

    pub async fn seed<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> usize {
        let seeded = self.store.update_store(|s| s.seed_dummy_data(count, rng)).await;
        info!(count = seeded, "seeded dummy users");
        seeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Gender;
    use rand::{rngs::StdRng, SeedableRng};

    fn ann() -> NewUser {
        NewUser { username: "ann".into(), age: 30, gender: Gender::Female }
    }

    #[tokio::test]
    async fn user_crud_service() -> Result<(), anyhow::Error> {
        let svc = UserService::default();

        let u = svc.create(ann()).await;
        assert_eq!(u.id, 1);

        let found = svc.get(u.id).await?;
        assert_eq!(found, User { id: 1, username: "ann".into(), age: 30, gender: Gender::Female });

        let updated = svc.update(u.id, UserPatch { username: None, age: Some(31) }).await?;
        assert_eq!(updated.age, 31);
        assert_eq!(updated.username, "ann");

        let removed = svc.delete(u.id).await?;
        assert_eq!(removed.id, 1);
        assert!(matches!(svc.get(u.id).await, Err(ServiceError::NotFound(msg)) if msg == "user not found"));
        assert!(matches!(svc.delete(u.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update(u.id, UserPatch::default()).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn empty_list_and_search_are_not_found() {
        let svc = UserService::default();
        assert!(matches!(svc.list().await, Err(ServiceError::NotFound(_))));
        svc.create(ann()).await;
        assert_eq!(svc.list().await.map(|l| l.len()).ok(), Some(1));

        let miss = UserSearch { username: Some("bob".into()), ..Default::default() };
        assert!(matches!(svc.search(miss).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn search_combines_criteria() -> Result<(), anyhow::Error> {
        let svc = UserService::default();
        svc.create(ann()).await;
        svc.create(NewUser { username: "bea".into(), age: 30, gender: Gender::Male }).await;
        svc.create(NewUser { username: "cat".into(), age: 41, gender: Gender::Female }).await;

        let by_age = svc.search(UserSearch { age: Some(30), ..Default::default() }).await?;
        assert_eq!(by_age.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2]);

        let female_30 = svc
            .search(UserSearch { age: Some(30), gender: Some(Gender::Female), ..Default::default() })
            .await?;
        assert_eq!(female_30.len(), 1);
        assert_eq!(female_30[0].username, "ann");

        let everyone = svc.search(UserSearch::default()).await?;
        assert_eq!(everyone.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn search_rejects_non_positive_age() {
        let svc = UserService::default();
        svc.create(ann()).await;
        let res = svc.search(UserSearch { age: Some(0), ..Default::default() }).await;
        assert!(matches!(res, Err(ServiceError::Model(_))));
    }

    #[tokio::test]
    async fn seeded_users_precede_created_ones() {
        let svc = UserService::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(svc.seed(10, &mut rng).await, 10);
        let u = svc.create(ann()).await;
        assert_eq!(u.id, 11);
    }
}
