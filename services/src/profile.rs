use db::models::profile::{self, Entity as Profile};
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::error::{ServiceError, ServiceResult};

pub use profile::Model as ProfileModel;

pub struct ProfileService;

impl ProfileService {
    pub async fn find(db: &DatabaseConnection, id: i64) -> ServiceResult<ProfileModel> {
        Profile::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("profile {id}")))
    }
}
