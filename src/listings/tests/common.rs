use crate::listings::domain::{
    Balcony, FencedYard, Furnished, Garage, Laundry, Property, PropertyDetails, PropertyKind,
    Transaction, TransactionTerms,
};

pub(super) fn base_details() -> PropertyDetails {
    PropertyDetails {
        square_feet: "150".to_string(),
        bedrooms: "2".to_string(),
        baths: "1".to_string(),
    }
}

pub(super) fn house_purchase(price: &str) -> Transaction {
    Transaction {
        property: Property {
            details: base_details(),
            kind: PropertyKind::House {
                stories: "2".to_string(),
                garage: Garage::Attached,
                fenced_yard: FencedYard::Yes,
            },
        },
        terms: TransactionTerms::Purchase {
            price: price.to_string(),
            taxes: "1500".to_string(),
        },
    }
}

pub(super) fn apartment_purchase(price: &str) -> Transaction {
    Transaction {
        property: Property {
            details: base_details(),
            kind: PropertyKind::Apartment {
                laundry: Laundry::Ensuite,
                balcony: Balcony::Yes,
            },
        },
        terms: TransactionTerms::Purchase {
            price: price.to_string(),
            taxes: "900".to_string(),
        },
    }
}

pub(super) fn apartment_rental(rent: &str) -> Transaction {
    Transaction {
        property: Property {
            details: base_details(),
            kind: PropertyKind::Apartment {
                laundry: Laundry::Coin,
                balcony: Balcony::No,
            },
        },
        terms: TransactionTerms::Rental {
            rent: rent.to_string(),
            utilities: "150".to_string(),
            furnished: Furnished::No,
        },
    }
}

pub(super) fn house_rental(rent: &str) -> Transaction {
    Transaction {
        property: Property {
            details: base_details(),
            kind: PropertyKind::House {
                stories: "1".to_string(),
                garage: Garage::None,
                fenced_yard: FencedYard::No,
            },
        },
        terms: TransactionTerms::Rental {
            rent: rent.to_string(),
            utilities: "220".to_string(),
            furnished: Furnished::Yes,
        },
    }
}
