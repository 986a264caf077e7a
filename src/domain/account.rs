use crate::domain::attribute::AccountAttribute;
use crate::domain::projection::{Project, PropertyValue};
use crate::utils::error::{BankError, Result};
use crate::utils::validation;
use serde::{Deserialize, Serialize};

/// A bank account. Only reachable through [`AccountBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountRecord")]
pub struct Account {
    id: i64,
    owner: String,
    /// Smallest currency unit.
    balance: i64,
}

impl Account {
    pub fn builder() -> AccountBuilder {
        AccountBuilder::new()
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }
}

impl Project for Account {
    type Attribute = AccountAttribute;

    fn property(&self, attribute: AccountAttribute) -> PropertyValue {
        match attribute {
            AccountAttribute::Id => self.id().into(),
            AccountAttribute::Owner => self.owner().into(),
            AccountAttribute::Balance => self.balance().into(),
        }
    }
}

/// Staging area for an [`Account`]. Each setter validates its value.
#[derive(Debug, Clone, Default)]
pub struct AccountBuilder {
    id: i64,
    owner: String,
    balance: i64,
}

impl AccountBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, identifier: i64) -> Result<Self> {
        validation::validate_natural("account id", identifier)?;
        self.id = identifier;
        Ok(self)
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Result<Self> {
        let owner = owner.into();
        validation::validate_alpha("account owner", &owner)?;
        self.owner = owner;
        Ok(self)
    }

    // 以十進位字串檢查，所以負數會被拒絕
    pub fn balance(mut self, balance: i64) -> Result<Self> {
        validation::validate_numeric("account balance", &balance.to_string())?;
        self.balance = balance;
        Ok(self)
    }

    pub fn build(self) -> Account {
        tracing::debug!("Built account {}", self.id);
        Account {
            id: self.id,
            owner: self.owner,
            balance: self.balance,
        }
    }
}

/// Wire form of an account; decoding goes back through the builder.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AccountRecord {
    id: Option<i64>,
    owner: Option<String>,
    balance: Option<i64>,
}

impl TryFrom<AccountRecord> for Account {
    type Error = BankError;

    fn try_from(record: AccountRecord) -> Result<Self> {
        let mut builder = AccountBuilder::new();
        if let Some(id) = record.id {
            builder = builder.id(id)?;
        }
        if let Some(owner) = record.owner {
            builder = builder.owner(owner)?;
        }
        if let Some(balance) = record.balance {
            builder = builder.balance(balance)?;
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Account {
        Account::builder()
            .id(7)
            .unwrap()
            .owner("Alice")
            .unwrap()
            .balance(100)
            .unwrap()
            .build()
    }

    #[test]
    fn test_build_and_project_in_order() {
        let account = alice();
        let values = account.get_properties(&[
            AccountAttribute::Id,
            AccountAttribute::Owner,
            AccountAttribute::Balance,
        ]);
        assert_eq!(
            values,
            vec![
                PropertyValue::Integer(7),
                PropertyValue::Text("Alice".to_string()),
                PropertyValue::Integer(100),
            ]
        );
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let values = alice().get_properties(&[AccountAttribute::Owner, AccountAttribute::Owner]);
        assert_eq!(values, vec![PropertyValue::from("Alice"), PropertyValue::from("Alice")]);
    }

    #[test]
    fn test_unknown_id_returns_partial_result() {
        let err = alice().get_properties_by_id(&[2, 0, 99, 1]).unwrap_err();
        assert!(err.to_string().contains("99"));
        assert_eq!(
            err.partial(),
            &[PropertyValue::Integer(100), PropertyValue::Integer(7)]
        );
    }

    #[test]
    fn test_unknown_id_first_gives_empty_partial() {
        let err = alice().get_properties_by_id(&[99]).unwrap_err();
        assert!(err.partial().is_empty());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(AccountBuilder::new().id(-1).is_err());
        assert!(AccountBuilder::new().owner("Al1ce").is_err());
        assert!(AccountBuilder::new().owner("Alice Smith").is_err());
        assert!(AccountBuilder::new().balance(-5).is_err());
    }

    #[test]
    fn test_unset_fields_keep_zero_values() {
        let account = AccountBuilder::new().id(3).unwrap().build();
        assert_eq!(account.owner(), "");
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn test_serialize_uses_field_names() {
        let json = serde_json::to_value(alice()).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "owner": "Alice", "balance": 100}));
    }

    #[test]
    fn test_deserialize_validates_fields() {
        let account: Account =
            serde_json::from_str(r#"{"id": 7, "owner": "Alice", "balance": 100}"#).unwrap();
        assert_eq!(account, alice());

        let bad = serde_json::from_str::<Account>(r#"{"id": -7, "owner": "Alice"}"#);
        assert!(bad.unwrap_err().to_string().contains("account id"));
    }

    #[test]
    fn test_deserialize_missing_fields_default() {
        let account: Account = serde_json::from_str(r#"{"owner": "Bob"}"#).unwrap();
        assert_eq!(account.id(), 0);
        assert_eq!(account.owner(), "Bob");
    }
}
