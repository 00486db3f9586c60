use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; a username already in use is [`UserError::UsernameTaken`]
    async fn create(&self, user: User) -> UserResult<i64>;

    async fn list(&self) -> UserResult<Vec<User>>;

    async fn get(&self, id: i64) -> UserResult<User>;

    async fn update(&self, user: User) -> UserResult<()>;

    async fn delete(&self, id: i64) -> UserResult<()>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_username_free(users: &[User], user: &User) -> UserResult<()> {
    if users
        .iter()
        .any(|u| u.id != user.id && u.username == user.username)
    {
        return Err(UserError::UsernameTaken(user.username.clone()));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> UserResult<i64> {
        let mut users = self.users.write().await;
        user.id = 0;
        ensure_username_free(&users, &user)?;
        user.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let id = user.id;
        users.push(user);

        tracing::info!(user_id = id, "Created user");
        Ok(id)
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn get(&self, id: i64) -> UserResult<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(UserError::NotFound(id))
    }

    async fn update(&self, user: User) -> UserResult<()> {
        let mut users = self.users.write().await;
        ensure_username_free(&users, &user)?;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(UserError::NotFound(user.id))?;
        *slot = user;
        Ok(())
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);

        if users.len() == before {
            return Err(UserError::NotFound(id));
        }
        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> User {
        User {
            username: username.into(),
            email: format!("{username}@campo.example"),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_duplicate_username_is_taken() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("apereyra")).await.unwrap();

        let result = repo.create(user("apereyra")).await;
        assert!(matches!(result, Err(UserError::UsernameTaken(name)) if name == "apereyra"));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_renaming_onto_another_username_is_taken() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("apereyra")).await.unwrap();
        let id = repo.create(user("jgomez")).await.unwrap();

        let mut renamed = repo.get(id).await.unwrap();
        renamed.username = "apereyra".into();
        assert!(matches!(
            repo.update(renamed).await,
            Err(UserError::UsernameTaken(_))
        ));

        let mut same = repo.get(id).await.unwrap();
        same.active = false;
        repo.update(same).await.unwrap();
        assert!(!repo.get(id).await.unwrap().active);
    }
}
