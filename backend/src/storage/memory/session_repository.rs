use anyhow::Result;

use crate::domain::models::user::User;
use crate::storage::memory::connection::MemoryConnection;
use crate::storage::traits::SessionStorage;

#[derive(Debug, Clone)]
pub struct SessionRepository {
    connection: MemoryConnection,
}

impl SessionRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl SessionStorage for SessionRepository {
    fn current_user(&self) -> Result<Option<User>> {
        Ok(self.connection.read()?.user.clone())
    }

    fn set_current_user(&self, user: Option<User>) -> Result<()> {
        self.connection.write()?.user = user;
        Ok(())
    }
}
