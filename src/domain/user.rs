use crate::domain::attribute::UserAttribute;
use crate::domain::projection::{Project, PropertyValue};
use crate::utils::error::{BankError, Result};
use crate::utils::validation;
use serde::{Deserialize, Serialize};

/// A bank customer. `account` refers to an [`Account`](crate::domain::account::Account)
/// by id; nothing here checks that the account exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecord")]
pub struct User {
    id: i64,
    username: String,
    fullname: String,
    #[serde(rename = "phoneNumber")]
    phone: String,
    email: String,
    #[serde(rename = "accountRef")]
    account: i64,
}

impl User {
    pub fn builder() -> UserBuilder {
        UserBuilder::new()
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn account(&self) -> i64 {
        self.account
    }
}

impl Project for User {
    type Attribute = UserAttribute;

    fn property(&self, attribute: UserAttribute) -> PropertyValue {
        match attribute {
            UserAttribute::Id => self.id().into(),
            UserAttribute::Username => self.username().into(),
            UserAttribute::Fullname => self.fullname().into(),
            UserAttribute::Phone => self.phone().into(),
            UserAttribute::Email => self.email().into(),
            UserAttribute::Account => self.account().into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserBuilder {
    id: i64,
    username: String,
    fullname: String,
    phone: String,
    email: String,
    account: i64,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, identifier: i64) -> Result<Self> {
        validation::validate_natural("user id", identifier)?;
        self.id = identifier;
        Ok(self)
    }

    pub fn username(mut self, username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        validation::validate_alphanumeric("username", &username)?;
        self.username = username;
        Ok(self)
    }

    /// Letters only, so names with spaces are rejected.
    pub fn fullname(mut self, fullname: impl Into<String>) -> Result<Self> {
        let fullname = fullname.into();
        validation::validate_alpha("fullname", &fullname)?;
        self.fullname = fullname;
        Ok(self)
    }

    /// Stored as given. See [`validation::is_phone`] for the declared pattern.
    pub fn phone(mut self, number: impl Into<String>) -> Self {
        self.phone = number.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Result<Self> {
        let email = email.into();
        validation::validate_email("email", &email)?;
        self.email = email;
        Ok(self)
    }

    pub fn account(mut self, identifier: i64) -> Result<Self> {
        validation::validate_natural("account reference", identifier)?;
        self.account = identifier;
        Ok(self)
    }

    pub fn build(self) -> User {
        tracing::debug!("Built user {} (account {})", self.id, self.account);
        User {
            id: self.id,
            username: self.username,
            fullname: self.fullname,
            phone: self.phone,
            email: self.email,
            account: self.account,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserRecord {
    id: Option<i64>,
    username: Option<String>,
    fullname: Option<String>,
    #[serde(rename = "phoneNumber")]
    phone: Option<String>,
    email: Option<String>,
    #[serde(rename = "accountRef")]
    account: Option<i64>,
}

impl TryFrom<UserRecord> for User {
    type Error = BankError;

    fn try_from(record: UserRecord) -> Result<Self> {
        let mut builder = UserBuilder::new();
        if let Some(id) = record.id {
            builder = builder.id(id)?;
        }
        if let Some(username) = record.username {
            builder = builder.username(username)?;
        }
        if let Some(fullname) = record.fullname {
            builder = builder.fullname(fullname)?;
        }
        if let Some(phone) = record.phone {
            builder = builder.phone(phone);
        }
        if let Some(email) = record.email {
            builder = builder.email(email)?;
        }
        if let Some(account) = record.account {
            builder = builder.account(account)?;
        }
        Ok(builder.build())
    }
}
