use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::feedback::application::domain::entities::{
    FeedbackCategory, FeedbackRecord, FeedbackStatus,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub category: String,
    pub rating: Option<i16>,
    pub status: String,
    pub admin_response: Option<String>,
    pub is_public: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_domain(self) -> FeedbackRecord {
        FeedbackRecord {
            id: self.id,
            user_id: self.user_id,
            message: self.message,
            // Rows predate any taxonomy change; unknown strings degrade
            // to the defaults rather than poisoning the whole listing.
            category: FeedbackCategory::parse(&self.category)
                .unwrap_or(FeedbackCategory::General),
            rating: self.rating,
            status: FeedbackStatus::parse(&self.status).unwrap_or(FeedbackStatus::Pending),
            admin_response: self.admin_response,
            is_public: self.is_public,
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        }
    }
}
