use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::feedback::application::domain::entities::{FeedbackRecord, FeedbackWithOwner};
use crate::modules::feedback::application::ports::outgoing::{
    FeedbackFilters, FeedbackQuery, FeedbackQueryError,
};

use super::sea_orm_entity::{Column, Entity as Feedback, Model};

#[derive(Debug, Clone)]
pub struct FeedbackQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FeedbackQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeedbackQuery for FeedbackQueryPostgres {
    async fn find_by_id(
        &self,
        feedback_id: Uuid,
    ) -> Result<Option<FeedbackRecord>, FeedbackQueryError> {
        let model: Option<Model> = Feedback::find_by_id(feedback_id)
            .one(&*self.db)
            .await
            .map_err(|e| FeedbackQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Model::to_domain))
    }

    async fn list_with_owners(
        &self,
        filters: &FeedbackFilters,
        limit: u64,
    ) -> Result<Vec<FeedbackWithOwner>, FeedbackQueryError> {
        let mut query = Feedback::find();

        if let Some(status) = filters.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }
        if let Some(category) = filters.category {
            query = query.filter(Column::Category.eq(category.as_str()));
        }

        let models: Vec<Model> = query
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| FeedbackQueryError::DatabaseError(e.to_string()))?;

        if models.is_empty() {
            return Ok(vec![]);
        }

        // One batched lookup instead of a row-per-owner join; the page is
        // capped, so the id set stays small.
        let owner_ids: Vec<Uuid> = models.iter().map(|m| m.user_id).collect();
        let owners: HashMap<Uuid, (String, String)> = users::Entity::find()
            .filter(users::Column::Id.is_in(owner_ids))
            .all(&*self.db)
            .await
            .map_err(|e| FeedbackQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|user| (user.id, (user.username, user.email)))
            .collect();

        Ok(models
            .into_iter()
            .map(|model| {
                let owner = owners.get(&model.user_id).cloned();
                FeedbackWithOwner {
                    feedback: model.to_domain(),
                    owner_username: owner.as_ref().map(|(username, _)| username.clone()),
                    owner_email: owner.map(|(_, email)| email),
                }
            })
            .collect())
    }
}
