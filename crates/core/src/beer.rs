//! The `Beer` document and its wire representation.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validate::{Violation, check_max_len, check_non_negative};

/// A beer document as persisted in the `beer` collection.
///
/// Field names are stored camelCase, matching the wire names. The id is
/// assigned by the store on first save and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub beer_name: Option<String>,
    pub beer_style: Option<String>,
    pub upc: Option<String>,
    pub price: Option<Decimal>,
    pub quantity_on_hand: Option<i32>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_date: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub last_modified_date: DateTime<Utc>,
}

/// Wire-level representation of a beer.
///
/// Every field except the timestamps is writable by clients; a field omitted
/// from a request body deserializes as `None` and, on full update, counts as
/// an explicit null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BeerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub beer_name: Option<String>,
    pub beer_style: Option<String>,
    pub upc: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub quantity_on_hand: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Beer {
    /// Build a new document from an incoming DTO.
    ///
    /// Any id carried by the DTO is discarded; the store assigns one on save.
    /// Both timestamps are set to `now`.
    #[must_use]
    pub fn from_new_dto(dto: &BeerDto, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            beer_name: dto.beer_name.clone(),
            beer_style: dto.beer_style.clone(),
            upc: dto.upc.clone(),
            price: dto.price,
            quantity_on_hand: dto.quantity_on_hand,
            created_date: now,
            last_modified_date: now,
        }
    }

    /// Map this document to its wire form, field by field.
    #[must_use]
    pub fn to_dto(&self) -> BeerDto {
        BeerDto {
            id: self.id.map(|id| id.to_hex()),
            beer_name: self.beer_name.clone(),
            beer_style: self.beer_style.clone(),
            upc: self.upc.clone(),
            price: self.price,
            quantity_on_hand: self.quantity_on_hand,
            created_date: Some(self.created_date),
            last_modified_date: Some(self.last_modified_date),
        }
    }

    /// Full replace: overwrite every mutable field from `dto` unconditionally.
    ///
    /// A field omitted from the DTO is an explicit null and clears the stored
    /// value. The id and `created_date` are untouched; `last_modified_date`
    /// is refreshed to `now`.
    pub fn apply_update(&mut self, dto: &BeerDto, now: DateTime<Utc>) {
        self.beer_name = dto.beer_name.clone();
        self.beer_style = dto.beer_style.clone();
        self.upc = dto.upc.clone();
        self.price = dto.price;
        self.quantity_on_hand = dto.quantity_on_hand;
        self.last_modified_date = now;
    }

    /// Partial patch: overwrite only the fields present in `dto`.
    ///
    /// Absent fields keep their stored values. `last_modified_date` is
    /// refreshed to `now`.
    pub fn apply_patch(&mut self, dto: &BeerDto, now: DateTime<Utc>) {
        if let Some(beer_name) = &dto.beer_name {
            self.beer_name = Some(beer_name.clone());
        }
        if let Some(beer_style) = &dto.beer_style {
            self.beer_style = Some(beer_style.clone());
        }
        if let Some(upc) = &dto.upc {
            self.upc = Some(upc.clone());
        }
        if let Some(price) = dto.price {
            self.price = Some(price);
        }
        if let Some(quantity_on_hand) = dto.quantity_on_hand {
            self.quantity_on_hand = Some(quantity_on_hand);
        }
        self.last_modified_date = now;
    }
}

impl BeerDto {
    /// Validate the full rule set, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns the complete list of field violations.
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        check_max_len(&mut violations, "beerName", self.beer_name.as_deref());
        check_non_negative(&mut violations, "quantityOnHand", self.quantity_on_hand);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Validate only the fields present, for partial patches.
    ///
    /// Every beer rule already applies only to present fields, so this is the
    /// full rule set.
    ///
    /// # Errors
    ///
    /// Returns the complete list of field violations.
    pub fn validate_patch(&self) -> Result<(), Vec<Violation>> {
        self.validate()
    }
}
