use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::auth::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, ProfileChanges,
};

use super::sea_orm_entity::users::{ActiveModel, Entity as Users, Model};

#[derive(Debug, Clone)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_account(&self, account: Account) -> Result<Account, AccountRepositoryError> {
        let active = ActiveModel {
            id: Set(account.id),
            username: Set(account.username),
            email: Set(account.email),
            password_hash: Set(account.password_hash),
            location: Set(account.location),
            farm_size: Set(account.farm_size),
            crops: Set(serde_json::json!(account.crops)),
            is_active: Set(account.is_active),
            created_at: Set(account.created_at.into()),
            updated_at: Set(account.updated_at.into()),
        };

        let inserted: Model = active
            .insert(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn update_profile(
        &self,
        account_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Account, AccountRepositoryError> {
        let model = Users::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        let mut active: ActiveModel = model.into();
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(location) = changes.location {
            active.location = Set(Some(location));
        }
        if let Some(farm_size) = changes.farm_size {
            active.farm_size = Set(Some(farm_size));
        }
        if let Some(crops) = changes.crops {
            active.crops = Set(serde_json::json!(crops));
        }

        let updated: Model = active
            .update(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_domain())
    }

    async fn deactivate_account(&self, account_id: Uuid) -> Result<(), AccountRepositoryError> {
        let model = Users::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        // Idempotent: re-deactivating is a no-op, not an error.
        if !model.is_active {
            return Ok(());
        }

        let mut active: ActiveModel = model.into();
        active.is_active = Set(false);
        active
            .update(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
