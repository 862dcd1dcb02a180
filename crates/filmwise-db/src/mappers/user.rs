//! User model -> entity mapper

use filmwise_core::entities::{User, UserType};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            // The column is CHECK-constrained; anything else is treated as a regular user
            user_type: model.user_type.parse().unwrap_or(UserType::User),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
