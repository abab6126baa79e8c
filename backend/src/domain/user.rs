//! User record model.
//!
//! [`NewUser`] is the creatable shape accepted at the boundary; [`User`] is
//! the stored shape with its server-assigned [`UserId`]. Field newtypes
//! enforce the length and range rules so an invalid record cannot be built.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum number of characters in a first or last name.
pub const NAME_MAX_CHARS: usize = 50;
/// Smallest accepted age.
pub const AGE_MIN: i64 = 0;
/// Largest accepted age; bounded by the 32-bit storage column.
pub const AGE_MAX: i64 = i32::MAX as i64;
/// Smallest identifier the database ever assigns.
pub const USER_ID_MIN: i64 = 1;

/// Validation errors returned by the field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    IdBelowMinimum { min: i64 },
    IdOutOfRange,
    NameTooLong { max: usize },
    AgeBelowMinimum { min: i64 },
    AgeAboveMaximum { max: i64 },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdBelowMinimum { min } => {
                write!(f, "Input should be greater than or equal to {min}")
            }
            Self::IdOutOfRange => write!(f, "Input should be a valid integer, out of range"),
            Self::NameTooLong { max } => {
                write!(f, "String should have at most {max} characters")
            }
            Self::AgeBelowMinimum { min } => {
                write!(f, "Input should be greater than or equal to {min}")
            }
            Self::AgeAboveMaximum { max } => {
                write!(f, "Input should be less than or equal to {max}")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Server-assigned user identifier (always at least one).
///
/// # Examples
/// ```
/// use mobility_api::domain::UserId;
///
/// let id = UserId::new(42).expect("positive id");
/// assert_eq!(id.get(), 42);
/// assert!(UserId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct UserId(i32);

impl UserId {
    /// Validate and construct an identifier.
    pub fn new(raw: i64) -> Result<Self, UserValidationError> {
        if raw < USER_ID_MIN {
            return Err(UserValidationError::IdBelowMinimum { min: USER_ID_MIN });
        }
        i32::try_from(raw)
            .map(Self)
            .map_err(|_| UserValidationError::IdOutOfRange)
    }

    /// Underlying integer as stored in the database.
    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// First or last name, at most [`NAME_MAX_CHARS`] characters.
///
/// Empty names are accepted; presence is checked at the schema level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a name.
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let value = value.into();
        if value.chars().count() > NAME_MAX_CHARS {
            return Err(UserValidationError::NameTooLong {
                max: NAME_MAX_CHARS,
            });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PersonName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

/// Non-negative age in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct Age(i32);

impl Age {
    /// Validate and construct an age.
    pub fn new(raw: i64) -> Result<Self, UserValidationError> {
        if raw < AGE_MIN {
            return Err(UserValidationError::AgeBelowMinimum { min: AGE_MIN });
        }
        i32::try_from(raw)
            .map(Self)
            .map_err(|_| UserValidationError::AgeAboveMaximum { max: AGE_MAX })
    }

    /// Underlying integer as stored in the database.
    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Age {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Age> for i32 {
    fn from(value: Age) -> Self {
        value.0
    }
}

/// Creatable user record: everything but the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    firstname: PersonName,
    lastname: PersonName,
    age: Age,
    date_of_birth: NaiveDate,
}

impl NewUser {
    /// Assemble a record from already validated fields.
    pub fn new(firstname: PersonName, lastname: PersonName, age: Age, date_of_birth: NaiveDate) -> Self {
        Self {
            firstname,
            lastname,
            age,
            date_of_birth,
        }
    }

    /// First name.
    pub fn firstname(&self) -> &PersonName {
        &self.firstname
    }

    /// Last name.
    pub fn lastname(&self) -> &PersonName {
        &self.lastname
    }

    /// Age in years.
    pub fn age(&self) -> Age {
        self.age
    }

    /// Calendar date of birth.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }
}

/// Stored user record.
///
/// Serialises as `{"id", "firstname", "lastname", "age", "date_of_birth"}`
/// with the date rendered as `YYYY-MM-DD`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use mobility_api::domain::{Age, NewUser, PersonName, User, UserId};
///
/// let record = NewUser::new(
///     PersonName::new("Alice").expect("name"),
///     PersonName::new("Smith").expect("name"),
///     Age::new(28).expect("age"),
///     NaiveDate::from_ymd_opt(1995, 2, 20).expect("date"),
/// );
/// let user = User::new(UserId::new(1).expect("id"), record);
/// let json = serde_json::to_value(&user).expect("serialise");
/// assert_eq!(json["date_of_birth"], "1995-02-20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    #[serde(flatten)]
    record: NewUser,
}

impl User {
    /// Pair a stored identifier with its record.
    pub fn new(id: UserId, record: NewUser) -> Self {
        Self { id, record }
    }

    /// Server-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Record fields without the identifier.
    pub fn record(&self) -> &NewUser {
        &self.record
    }

    /// First name.
    pub fn firstname(&self) -> &PersonName {
        self.record.firstname()
    }

    /// Last name.
    pub fn lastname(&self) -> &PersonName {
        self.record.lastname()
    }

    /// Age in years.
    pub fn age(&self) -> Age {
        self.record.age()
    }

    /// Calendar date of birth.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.record.date_of_birth()
    }
}
