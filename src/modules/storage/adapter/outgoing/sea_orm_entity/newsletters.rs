use sea_orm::entity::prelude::*;

use crate::schema::domain::Newsletter;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "newsletters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub active: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_domain(self) -> Newsletter {
        Newsletter {
            id: self.id,
            email: self.email,
            active: self.active,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
