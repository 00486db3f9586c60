use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User operations
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create_user(&self, user: User) -> UserResult<i64> {
        user.validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        self.repository.create(user).await
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository.get(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<()> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let mut user = self.repository.get(id).await?;
        user.apply_update(input);
        self.repository.update(user).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_create_passes_taken_username_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|u| Err(UserError::UsernameTaken(u.username)));
        let service = UserService::new(repo);

        let result = service
            .create_user(User {
                username: "apereyra".into(),
                email: "ana@campo.example".into(),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(UserError::UsernameTaken(name)) if name == "apereyra"));
    }

    #[tokio::test]
    async fn test_deactivate_keeps_other_fields() {
        let mut repo = MockUserRepository::new();
        repo.expect_get().with(eq(3)).returning(|id| {
            Ok(User {
                id,
                username: "apereyra".into(),
                email: "ana@campo.example".into(),
                person_id: Some(5),
                active: true,
            })
        });
        repo.expect_update()
            .withf(|u| u.id == 3 && !u.active && u.person_id == Some(5))
            .times(1)
            .returning(|_| Ok(()));
        let service = UserService::new(repo);

        service
            .update_user(
                3,
                UpdateUser {
                    active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_zero_person_id_is_rejected() {
        let mut repo = MockUserRepository::new();
        repo.expect_get().never();
        let service = UserService::new(repo);

        let result = service
            .update_user(
                3,
                UpdateUser {
                    person_id: Some(0),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }
}
