use crate::domain::attribute::UnknownAttribute;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single projected field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Integer(n) => write!(f, "{}", n),
            PropertyValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// Carries the values collected before the unknown identifier was reached.
    #[error("property '{attribute}' not found")]
    UnknownProperty {
        attribute: i8,
        partial: Vec<PropertyValue>,
    },
}

impl ProjectionError {
    pub fn partial(&self) -> &[PropertyValue] {
        match self {
            ProjectionError::UnknownProperty { partial, .. } => partial,
        }
    }
}

/// Attribute projection over an entity's closed attribute set.
pub trait Project {
    type Attribute: Copy + fmt::Display + TryFrom<i8, Error = UnknownAttribute>;

    fn property(&self, attribute: Self::Attribute) -> PropertyValue;

    /// Values in request order; duplicates are kept.
    fn get_properties(&self, attributes: &[Self::Attribute]) -> Vec<PropertyValue> {
        attributes.iter().map(|a| self.property(*a)).collect()
    }

    /// Same as [`Project::get_properties`] but for raw identifiers. Stops at the
    /// first identifier outside the attribute set.
    fn get_properties_by_id(&self, ids: &[i8]) -> Result<Vec<PropertyValue>, ProjectionError> {
        let mut values = Vec::with_capacity(ids.len());
        for &id in ids {
            match Self::Attribute::try_from(id) {
                Ok(attribute) => values.push(self.property(attribute)),
                Err(UnknownAttribute(attribute)) => {
                    tracing::debug!("Projection stopped at unknown attribute {}", attribute);
                    return Err(ProjectionError::UnknownProperty {
                        attribute,
                        partial: values,
                    });
                }
            }
        }
        Ok(values)
    }
}
