//! Text-field drafts decoupled from any input source.
//!
//! A draft carries the raw words captured from a prompt loop, a CSV row, or a
//! test fixture, and `build` is the single place those words are parsed into
//! the typed model. Numeric-as-text fields pass through untouched; only the
//! enumerated fields can fail.

use serde::{Deserialize, Serialize};

use super::domain::{
    FieldParseError, Property, PropertyDetails, PropertyKind, Transaction, TransactionTerms,
};

/// Base property fields as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDraft {
    #[serde(default)]
    pub square_feet: String,
    #[serde(default)]
    pub bedrooms: String,
    #[serde(default)]
    pub baths: String,
}

/// Kind-specific fields as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitDraft {
    Apartment {
        laundry: String,
        balcony: String,
    },
    House {
        stories: String,
        garage: String,
        fenced_yard: String,
    },
}

/// Financial fields as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermsDraft {
    Purchase {
        price: String,
        taxes: String,
    },
    Rental {
        rent: String,
        utilities: String,
        furnished: String,
    },
}

/// A complete captured listing, ready to be parsed into a `Transaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub property: PropertyDraft,
    pub unit: UnitDraft,
    pub terms: TermsDraft,
}

impl ListingDraft {
    /// Parse every enumerated field, rejecting the first invalid word with a
    /// typed error naming the field and its allowed set.
    pub fn build(self) -> Result<Transaction, FieldParseError> {
        let details = PropertyDetails {
            square_feet: self.property.square_feet,
            bedrooms: self.property.bedrooms,
            baths: self.property.baths,
        };

        let kind = match self.unit {
            UnitDraft::Apartment { laundry, balcony } => PropertyKind::Apartment {
                laundry: laundry.parse()?,
                balcony: balcony.parse()?,
            },
            UnitDraft::House {
                stories,
                garage,
                fenced_yard,
            } => PropertyKind::House {
                stories,
                garage: garage.parse()?,
                fenced_yard: fenced_yard.parse()?,
            },
        };

        let terms = match self.terms {
            TermsDraft::Purchase { price, taxes } => TransactionTerms::Purchase { price, taxes },
            TermsDraft::Rental {
                rent,
                utilities,
                furnished,
            } => TransactionTerms::Rental {
                rent,
                utilities,
                furnished: furnished.parse()?,
            },
        };

        Ok(Transaction {
            property: Property { details, kind },
            terms,
        })
    }
}
