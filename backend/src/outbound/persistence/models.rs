//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{Age, NewUser, PersonName, User, UserId, UserValidationError};

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
    pub date_of_birth: NaiveDate,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub age: i32,
    pub date_of_birth: NaiveDate,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            firstname: user.firstname().as_ref(),
            lastname: user.lastname().as_ref(),
            age: user.age().get(),
            date_of_birth: user.date_of_birth(),
        }
    }
}

impl TryFrom<UserRow> for User {
    type Error = UserValidationError;

    /// Re-validate stored values; rows written outside this service may break
    /// the record rules.
    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let record = NewUser::new(
            PersonName::new(row.firstname)?,
            PersonName::new(row.lastname)?,
            Age::new(i64::from(row.age))?,
            row.date_of_birth,
        );
        Ok(Self::new(UserId::new(i64::from(row.id))?, record))
    }
}
