//! 服务层测试公共代码

use crate::auth::Principal;
use database::{MemoryStore, Repositories, Role, UserCreate, UserRepositoryTrait};

pub(crate) struct Fixture {
    pub store: MemoryStore,
    pub repos: Repositories,
}

impl Fixture {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let repos = Repositories::in_memory(store.clone());
        Self { store, repos }
    }

    pub async fn user(&self, username: &str) -> Principal {
        let user = self
            .store
            .create_user(UserCreate {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                role: Role::User,
            })
            .await
            .unwrap();
        Principal::new(user.id, user.role)
    }
}
