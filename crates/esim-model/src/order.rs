//! Contact details and the order intent handed to fulfillment.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{DataAmount, DatasetKind};

/// One of the three contact fields captured by the order dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Phone];

    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Mobile Number",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact details as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: ContactField, value: impl Into<String>) -> Self {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
        };
        *slot = value.into();
        self
    }

    /// Fields that are empty or whitespace-only, in dialog order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Finalized order payload.
///
/// Carries the chosen filter tuple for audit, and the selected plan's
/// traffic policy, id and price for fulfillment. Values are plain text;
/// encoding belongs to the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderIntent {
    pub contact: ContactDetails,
    pub dataset_kind: DatasetKind,
    pub region: String,
    pub data_gb: DataAmount,
    pub validity_days: u32,
    pub traffic_policy: String,
    pub product_id: String,
    pub price_info: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_in_dialog_order() {
        let contact = ContactDetails::new("", "a@x.com", "  ");
        assert_eq!(
            contact.missing_fields(),
            vec![ContactField::Name, ContactField::Phone]
        );
        assert!(!contact.is_complete());
    }

    #[test]
    fn with_field_replaces_one_value() {
        let contact = ContactDetails::default()
            .with_field(ContactField::Email, "a@x.com")
            .with_field(ContactField::Name, "A");
        assert_eq!(contact.get(ContactField::Name), "A");
        assert_eq!(contact.get(ContactField::Email), "a@x.com");
        assert_eq!(contact.get(ContactField::Phone), "");
    }
}
