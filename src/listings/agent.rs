use serde::Serialize;
use std::num::ParseIntError;

use super::domain::{PaymentType, PropertyType, Transaction};

/// Raised when a stored price cannot be coerced to a whole number at query
/// time. The offending text is kept for the error message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("price '{value}' is not a whole number")]
pub struct PriceParseError {
    pub value: String,
    #[source]
    pub source: ParseIntError,
}

fn parse_price(value: &str) -> Result<i64, PriceParseError> {
    value.trim().parse().map_err(|source| PriceParseError {
        value: value.trim().to_string(),
        source,
    })
}

/// The agent's book: every captured transaction, insertion-ordered,
/// append-only. Queries never mutate the book.
#[derive(Debug, Default)]
pub struct Agent {
    transactions: Vec<Transaction>,
}

impl Agent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Count transactions whose nested property is of the requested type.
    pub fn count_by_property_type(&self, property_type: PropertyType) -> usize {
        self.transactions
            .iter()
            .filter(|transaction| transaction.property_type() == property_type)
            .count()
    }

    /// Every purchase in the book, insertion order, independent of any
    /// price filter.
    pub fn purchases(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.payment_type() == PaymentType::Purchase)
            .collect()
    }

    /// The cheap end of the purchase list.
    ///
    /// With a ceiling, returns every purchase priced strictly below it.
    /// Without one, returns every purchase tied at the minimum price, so a
    /// book priced [200, 150, 150] yields both 150 entries. Prices are
    /// coerced from their stored text here and nowhere else; a non-numeric
    /// price fails the whole query. An empty purchase set is an empty `Ok`.
    pub fn cheapest_purchases(
        &self,
        ceiling: Option<i64>,
    ) -> Result<Vec<&Transaction>, PriceParseError> {
        let mut priced = Vec::new();
        for transaction in &self.transactions {
            if let Some(price) = transaction.purchase_price() {
                priced.push((parse_price(price)?, transaction));
            }
        }

        let matches = match ceiling {
            Some(ceiling) => priced
                .into_iter()
                .filter(|(price, _)| *price < ceiling)
                .map(|(_, transaction)| transaction)
                .collect(),
            None => {
                let minimum = priced.iter().map(|(price, _)| *price).min();
                match minimum {
                    Some(minimum) => priced
                        .into_iter()
                        .filter(|(price, _)| *price == minimum)
                        .map(|(_, transaction)| transaction)
                        .collect(),
                    None => Vec::new(),
                }
            }
        };

        Ok(matches)
    }

    /// Derived counts over the book, for rendering and the JSON report.
    pub fn summary(&self) -> BookSummary {
        let mut summary = BookSummary {
            total: self.transactions.len(),
            ..BookSummary::default()
        };

        for transaction in &self.transactions {
            match transaction.property_type() {
                PropertyType::Apartment => summary.apartments += 1,
                PropertyType::House => summary.houses += 1,
            }
            match transaction.payment_type() {
                PaymentType::Purchase => summary.purchases += 1,
                PaymentType::Rental => summary.rentals += 1,
            }
        }

        summary
    }
}

/// Aggregate counts over a book.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    pub total: usize,
    pub apartments: usize,
    pub houses: usize,
    pub purchases: usize,
    pub rentals: usize,
}
