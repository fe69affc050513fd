use super::agent::Agent;
use super::domain::{
    Balcony, FencedYard, Furnished, Garage, Laundry, Property, PropertyDetails, PropertyKind,
    Transaction, TransactionTerms,
};

/// A small built-in book covering both unit kinds and both payment kinds.
/// Two purchases share the minimum price so the ties query has something to
/// show. Used by the report command when no export file is given.
pub fn sample_book() -> Agent {
    let mut agent = Agent::new();
    for transaction in sample_transactions() {
        agent.add_transaction(transaction);
    }
    agent
}

fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            property: Property {
                details: PropertyDetails {
                    square_feet: "1850".to_string(),
                    bedrooms: "3".to_string(),
                    baths: "2".to_string(),
                },
                kind: PropertyKind::House {
                    stories: "2".to_string(),
                    garage: Garage::Attached,
                    fenced_yard: FencedYard::Yes,
                },
            },
            terms: TransactionTerms::Purchase {
                price: "259000".to_string(),
                taxes: "1700".to_string(),
            },
        },
        Transaction {
            property: Property {
                details: PropertyDetails {
                    square_feet: "900".to_string(),
                    bedrooms: "2".to_string(),
                    baths: "1".to_string(),
                },
                kind: PropertyKind::Apartment {
                    laundry: Laundry::Ensuite,
                    balcony: Balcony::Solarium,
                },
            },
            terms: TransactionTerms::Purchase {
                price: "149500".to_string(),
                taxes: "980".to_string(),
            },
        },
        Transaction {
            property: Property {
                details: PropertyDetails {
                    square_feet: "1400".to_string(),
                    bedrooms: "2".to_string(),
                    baths: "1".to_string(),
                },
                kind: PropertyKind::House {
                    stories: "1".to_string(),
                    garage: Garage::Detached,
                    fenced_yard: FencedYard::No,
                },
            },
            terms: TransactionTerms::Purchase {
                price: "149500".to_string(),
                taxes: "1050".to_string(),
            },
        },
        Transaction {
            property: Property {
                details: PropertyDetails {
                    square_feet: "650".to_string(),
                    bedrooms: "1".to_string(),
                    baths: "1".to_string(),
                },
                kind: PropertyKind::Apartment {
                    laundry: Laundry::Coin,
                    balcony: Balcony::No,
                },
            },
            terms: TransactionTerms::Rental {
                rent: "1150".to_string(),
                utilities: "150".to_string(),
                furnished: Furnished::No,
            },
        },
        Transaction {
            property: Property {
                details: PropertyDetails {
                    square_feet: "2100".to_string(),
                    bedrooms: "4".to_string(),
                    baths: "3".to_string(),
                },
                kind: PropertyKind::House {
                    stories: "2".to_string(),
                    garage: Garage::None,
                    fenced_yard: FencedYard::Yes,
                },
            },
            terms: TransactionTerms::Rental {
                rent: "2400".to_string(),
                utilities: "280".to_string(),
                furnished: Furnished::Yes,
            },
        },
    ]
}
