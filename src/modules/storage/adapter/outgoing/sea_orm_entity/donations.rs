use sea_orm::entity::prelude::*;

use crate::schema::domain::{Donation, DonationStatus, UnknownDonationStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "donations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub amount: Decimal,
    pub date: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub status: String,
}

impl Model {
    /// Fails when the stored status is not one the domain knows.
    pub fn into_domain(self) -> Result<Donation, DbErr> {
        let status: DonationStatus = self
            .status
            .parse()
            .map_err(|e: UnknownDonationStatus| DbErr::Type(e.to_string()))?;

        Ok(Donation {
            id: self.id,
            user_id: self.user_id,
            amount: self.amount,
            date: self.date.into(),
            message: self.message,
            status,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
