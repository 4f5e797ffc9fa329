use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with email `<username>@example.com` and a placeholder password hash
    pub async fn insert_user(&self, username: &str) -> Result<entity::app_user::Model, TestError> {
        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{}@example.com", username)),
                password_hash: ActiveValue::Set("hash".to_string()),
                first_name: ActiveValue::Set(None),
                last_name: ActiveValue::Set(None),
                phone_number: ActiveValue::Set(None),
                address: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
