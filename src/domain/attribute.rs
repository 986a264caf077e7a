//! Closed sets of addressable fields, one per entity.
//!
//! Adding a field means extending the enum here, the entity accessor, and the
//! entity's `Project::property` match together.

use std::fmt;
use thiserror::Error;

/// A raw identifier that does not belong to the entity's attribute set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown attribute identifier {0}")]
pub struct UnknownAttribute(pub i8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum AccountAttribute {
    Id = 0,
    Owner = 1,
    Balance = 2,
}

impl AccountAttribute {
    pub const ALL: [AccountAttribute; 3] = [
        AccountAttribute::Id,
        AccountAttribute::Owner,
        AccountAttribute::Balance,
    ];
}

impl fmt::Display for AccountAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountAttribute::Id => "AccountId",
            AccountAttribute::Owner => "AccountOwner",
            AccountAttribute::Balance => "AccountBalance",
        };
        f.write_str(name)
    }
}

impl TryFrom<i8> for AccountAttribute {
    type Error = UnknownAttribute;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccountAttribute::Id),
            1 => Ok(AccountAttribute::Owner),
            2 => Ok(AccountAttribute::Balance),
            other => Err(UnknownAttribute(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum UserAttribute {
    Id = 0,
    Username = 1,
    Fullname = 2,
    Phone = 3,
    Email = 4,
    Account = 5,
}

impl UserAttribute {
    pub const ALL: [UserAttribute; 6] = [
        UserAttribute::Id,
        UserAttribute::Username,
        UserAttribute::Fullname,
        UserAttribute::Phone,
        UserAttribute::Email,
        UserAttribute::Account,
    ];
}

impl fmt::Display for UserAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UserAttribute::Id => "UserId",
            UserAttribute::Username => "UserUsername",
            UserAttribute::Fullname => "UserFullname",
            UserAttribute::Phone => "UserPhone",
            UserAttribute::Email => "UserEmail",
            UserAttribute::Account => "UserAccount",
        };
        f.write_str(name)
    }
}

impl TryFrom<i8> for UserAttribute {
    type Error = UnknownAttribute;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserAttribute::Id),
            1 => Ok(UserAttribute::Username),
            2 => Ok(UserAttribute::Fullname),
            3 => Ok(UserAttribute::Phone),
            4 => Ok(UserAttribute::Email),
            5 => Ok(UserAttribute::Account),
            other => Err(UnknownAttribute(other)),
        }
    }
}
