//! The `Customer` document and its wire representation.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validate::{
    Violation, check_max_len, check_non_blank_if_present, check_required_non_blank,
};

/// A customer document as persisted in the `customer` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub customer_name: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_date: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub last_modified_date: DateTime<Utc>,
}

/// Wire-level representation of a customer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Customer {
    /// Build a new document from an incoming DTO, discarding any id.
    #[must_use]
    pub fn from_new_dto(dto: &CustomerDto, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            customer_name: dto.customer_name.clone(),
            created_date: now,
            last_modified_date: now,
        }
    }

    /// Map this document to its wire form.
    #[must_use]
    pub fn to_dto(&self) -> CustomerDto {
        CustomerDto {
            id: self.id.map(|id| id.to_hex()),
            customer_name: self.customer_name.clone(),
            created_date: Some(self.created_date),
            last_modified_date: Some(self.last_modified_date),
        }
    }

    /// Full replace of the mutable fields; refreshes `last_modified_date`.
    pub fn apply_update(&mut self, dto: &CustomerDto, now: DateTime<Utc>) {
        self.customer_name = dto.customer_name.clone();
        self.last_modified_date = now;
    }

    /// Partial patch: copy only the fields present in `dto`.
    pub fn apply_patch(&mut self, dto: &CustomerDto, now: DateTime<Utc>) {
        if let Some(customer_name) = &dto.customer_name {
            self.customer_name = Some(customer_name.clone());
        }
        self.last_modified_date = now;
    }
}

impl CustomerDto {
    /// Validate the full rule set: the name is required, non-blank, and
    /// bounded in length.
    ///
    /// # Errors
    ///
    /// Returns the complete list of field violations.
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        check_required_non_blank(&mut violations, "customerName", self.customer_name.as_deref());
        check_max_len(&mut violations, "customerName", self.customer_name.as_deref());
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Validate only the fields present, for partial patches.
    ///
    /// A patch may omit the name entirely, but a present-and-blank name is
    /// still rejected.
    ///
    /// # Errors
    ///
    /// Returns the complete list of field violations.
    pub fn validate_patch(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        check_non_blank_if_present(
            &mut violations,
            "customerName",
            self.customer_name.as_deref(),
        );
        check_max_len(&mut violations, "customerName", self.customer_name.as_deref());
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_name() {
        let dto = CustomerDto::default();
        let violations = dto.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "customerName");

        let blank = CustomerDto {
            customer_name: Some("   ".to_owned()),
            ..CustomerDto::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn validate_patch_allows_absent_name_but_not_blank() {
        let absent = CustomerDto::default();
        assert!(absent.validate_patch().is_ok());

        let blank = CustomerDto {
            customer_name: Some("".to_owned()),
            ..CustomerDto::default()
        };
        assert!(blank.validate_patch().is_err());
    }

    #[test]
    fn update_replaces_name_and_refreshes_modified() {
        let created = Utc::now();
        let dto = CustomerDto {
            customer_name: Some("Bobby Tables".to_owned()),
            ..CustomerDto::default()
        };
        let mut customer = Customer::from_new_dto(&dto, created);

        let replacement = CustomerDto {
            customer_name: Some("Joan Rivers".to_owned()),
            ..CustomerDto::default()
        };
        let later = created + chrono::Duration::seconds(5);
        customer.apply_update(&replacement, later);

        assert_eq!(customer.customer_name.as_deref(), Some("Joan Rivers"));
        assert_eq!(customer.created_date, created);
        assert_eq!(customer.last_modified_date, later);
    }

    #[test]
    fn patch_without_name_keeps_stored_name() {
        let created = Utc::now();
        let dto = CustomerDto {
            customer_name: Some("Bobby Tables".to_owned()),
            ..CustomerDto::default()
        };
        let mut customer = Customer::from_new_dto(&dto, created);

        let later = created + chrono::Duration::seconds(5);
        customer.apply_patch(&CustomerDto::default(), later);

        assert_eq!(customer.customer_name.as_deref(), Some("Bobby Tables"));
        assert_eq!(customer.last_modified_date, later);
    }

    #[test]
    fn dto_json_uses_wire_field_names() {
        let dto = CustomerDto {
            customer_name: Some("Bobby Tables".to_owned()),
            ..CustomerDto::default()
        };
        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(value["customerName"], "Bobby Tables");
    }
}
