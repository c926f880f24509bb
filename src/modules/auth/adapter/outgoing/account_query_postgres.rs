use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::auth::application::ports::outgoing::{AccountQuery, AccountQueryError};

use super::sea_orm_entity::users::{Column, Entity as Users, Model};

#[derive(Debug, Clone)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, AccountQueryError> {
        let model: Option<Model> = Users::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Model::to_domain))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
        // Stored emails are normalized; normalize the probe too so the
        // lookup stays correct even for callers that skipped validation.
        let normalized = email.trim().to_lowercase();

        let model: Option<Model> = Users::find()
            .filter(Column::Email.eq(normalized))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Model::to_domain))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountQueryError> {
        let model: Option<Model> = Users::find()
            .filter(Column::Username.eq(username.trim()))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Model::to_domain))
    }
}
