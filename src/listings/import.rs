//! CSV batch intake: seed a book from an exported sheet instead of prompts.
//!
//! Rows carry every column for both unit kinds and both payment kinds;
//! inapplicable columns stay empty. Each row becomes a `ListingDraft` and is
//! built through the same parsers the interactive path uses.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::domain::{FieldParseError, PaymentType, PropertyType, Transaction};
use super::intake::{ListingDraft, PropertyDraft, TermsDraft, UnitDraft};

#[derive(Debug)]
pub enum ListingImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { row: usize, source: FieldParseError },
}

impl std::fmt::Display for ListingImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingImportError::Io(err) => write!(f, "failed to read listing export: {}", err),
            ListingImportError::Csv(err) => write!(f, "invalid listing CSV data: {}", err),
            ListingImportError::Row { row, source } => write!(f, "row {}: {}", row, source),
        }
    }
}

impl std::error::Error for ListingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingImportError::Io(err) => Some(err),
            ListingImportError::Csv(err) => Some(err),
            ListingImportError::Row { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for ListingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ListingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    property_type: String,
    payment_type: String,
    #[serde(default)]
    square_feet: String,
    #[serde(default)]
    bedrooms: String,
    #[serde(default)]
    baths: String,
    #[serde(default)]
    laundry: String,
    #[serde(default)]
    balcony: String,
    #[serde(default)]
    stories: String,
    #[serde(default)]
    garage: String,
    #[serde(default)]
    fenced_yard: String,
    #[serde(default)]
    price: String,
    #[serde(default)]
    taxes: String,
    #[serde(default)]
    rent: String,
    #[serde(default)]
    utilities: String,
    #[serde(default)]
    furnished: String,
}

impl ListingRow {
    fn into_draft(self) -> Result<ListingDraft, FieldParseError> {
        let property_type: PropertyType = self.property_type.parse()?;
        let payment_type: PaymentType = self.payment_type.parse()?;

        let property = PropertyDraft {
            square_feet: self.square_feet,
            bedrooms: self.bedrooms,
            baths: self.baths,
        };

        let unit = match property_type {
            PropertyType::Apartment => UnitDraft::Apartment {
                laundry: self.laundry,
                balcony: self.balcony,
            },
            PropertyType::House => UnitDraft::House {
                stories: self.stories,
                garage: self.garage,
                fenced_yard: self.fenced_yard,
            },
        };

        let terms = match payment_type {
            PaymentType::Purchase => TermsDraft::Purchase {
                price: self.price,
                taxes: self.taxes,
            },
            PaymentType::Rental => TermsDraft::Rental {
                rent: self.rent,
                utilities: self.utilities,
                furnished: self.furnished,
            },
        };

        Ok(ListingDraft {
            property,
            unit,
            terms,
        })
    }
}

pub struct ListingCsvImporter;

impl ListingCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>, ListingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Transaction>, ListingImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut transactions = Vec::new();

        // The header occupies row 1, so the first record is row 2.
        for (index, record) in csv_reader.deserialize::<ListingRow>().enumerate() {
            let row = index + 2;
            let draft = record?
                .into_draft()
                .map_err(|source| ListingImportError::Row { row, source })?;
            let transaction = draft
                .build()
                .map_err(|source| ListingImportError::Row { row, source })?;
            transactions.push(transaction);
        }

        Ok(transactions)
    }
}
