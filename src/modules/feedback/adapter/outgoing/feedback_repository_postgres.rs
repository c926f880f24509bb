use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::feedback::application::domain::entities::{FeedbackRecord, FeedbackStatus};
use crate::modules::feedback::application::ports::outgoing::{
    FeedbackRepository, FeedbackRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Entity as Feedback, Model};

#[derive(Debug, Clone)]
pub struct FeedbackRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FeedbackRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeedbackRepository for FeedbackRepositoryPostgres {
    async fn submit(
        &self,
        feedback: FeedbackRecord,
    ) -> Result<FeedbackRecord, FeedbackRepositoryError> {
        let active = ActiveModel {
            id: Set(feedback.id),
            user_id: Set(feedback.user_id),
            message: Set(feedback.message),
            category: Set(feedback.category.as_str().to_string()),
            rating: Set(feedback.rating),
            status: Set(feedback.status.as_str().to_string()),
            admin_response: Set(feedback.admin_response),
            is_public: Set(feedback.is_public),
            created_at: Set(feedback.created_at.into()),
            updated_at: Set(feedback.updated_at.into()),
        };

        let inserted: Model = active
            .insert(&*self.db)
            .await
            .map_err(|e| FeedbackRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn moderate(
        &self,
        feedback_id: Uuid,
        status: FeedbackStatus,
        admin_response: Option<String>,
    ) -> Result<FeedbackRecord, FeedbackRepositoryError> {
        let model = Feedback::find_by_id(feedback_id)
            .one(&*self.db)
            .await
            .map_err(|e| FeedbackRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(FeedbackRepositoryError::FeedbackNotFound)?;

        let mut active: ActiveModel = model.into();
        active.status = Set(status.as_str().to_string());
        if let Some(response) = admin_response {
            active.admin_response = Set(Some(response));
        }

        let updated: Model = active
            .update(&*self.db)
            .await
            .map_err(|e| FeedbackRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_domain())
    }
}
