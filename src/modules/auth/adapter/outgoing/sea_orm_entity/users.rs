use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub location: Option<String>,
    pub farm_size: Option<f64>,
    // Crop labels as a jsonb array; the set is small and only ever read
    // as a whole.
    pub crops: Json,
    pub is_active: bool,
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
            // Only update updated_at on UPDATE, not INSERT
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_domain(self) -> Account {
        Account {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            location: self.location,
            farm_size: self.farm_size,
            crops: serde_json::from_value(self.crops).unwrap_or_default(),
            is_active: self.is_active,
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        }
    }
}
