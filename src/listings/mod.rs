//! Real-estate listing capture, the agent's book, and its queries.

pub mod agent;
pub mod domain;
pub mod import;
pub mod intake;
pub mod sample;

#[cfg(test)]
mod tests;

pub use agent::{Agent, BookSummary, PriceParseError};
pub use domain::{
    Balcony, FencedYard, FieldParseError, Furnished, Garage, Laundry, PaymentType, Property,
    PropertyDetails, PropertyKind, PropertyType, Transaction, TransactionTerms,
};
pub use import::{ListingCsvImporter, ListingImportError};
pub use intake::{ListingDraft, PropertyDraft, TermsDraft, UnitDraft};
pub use sample::sample_book;
