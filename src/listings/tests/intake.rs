use crate::listings::domain::{PaymentType, PropertyType, TransactionTerms};
use crate::listings::intake::{ListingDraft, PropertyDraft, TermsDraft, UnitDraft};

fn house_draft() -> (PropertyDraft, UnitDraft) {
    let property = PropertyDraft {
        square_feet: "2000".to_string(),
        bedrooms: "3".to_string(),
        baths: "2".to_string(),
    };
    let unit = UnitDraft::House {
        stories: "2".to_string(),
        garage: "attached".to_string(),
        fenced_yard: "yes".to_string(),
    };
    (property, unit)
}

fn apartment_draft() -> (PropertyDraft, UnitDraft) {
    let property = PropertyDraft {
        square_feet: "700".to_string(),
        bedrooms: "1".to_string(),
        baths: "1".to_string(),
    };
    let unit = UnitDraft::Apartment {
        laundry: "coin".to_string(),
        balcony: "no".to_string(),
    };
    (property, unit)
}

fn purchase_terms() -> TermsDraft {
    TermsDraft::Purchase {
        price: "250000".to_string(),
        taxes: "1500".to_string(),
    }
}

fn rental_terms() -> TermsDraft {
    TermsDraft::Rental {
        rent: "1100".to_string(),
        utilities: "150".to_string(),
        furnished: "no".to_string(),
    }
}

#[test]
fn builds_every_property_payment_combination() {
    let combos = [
        (house_draft(), purchase_terms(), PropertyType::House, PaymentType::Purchase),
        (house_draft(), rental_terms(), PropertyType::House, PaymentType::Rental),
        (apartment_draft(), purchase_terms(), PropertyType::Apartment, PaymentType::Purchase),
        (apartment_draft(), rental_terms(), PropertyType::Apartment, PaymentType::Rental),
    ];

    for ((property, unit), terms, property_type, payment_type) in combos {
        let transaction = ListingDraft {
            property,
            unit,
            terms,
        }
        .build()
        .expect("draft builds");

        assert_eq!(transaction.property_type(), property_type);
        assert_eq!(transaction.payment_type(), payment_type);
    }
}

#[test]
fn numeric_text_fields_pass_through_untouched() {
    let (mut property, unit) = house_draft();
    property.square_feet = "tbd".to_string();

    let transaction = ListingDraft {
        property,
        unit,
        terms: TermsDraft::Purchase {
            price: "call for price".to_string(),
            taxes: "".to_string(),
        },
    }
    .build()
    .expect("numeric text is not validated at construction");

    assert_eq!(transaction.property.details.square_feet, "tbd");
    match &transaction.terms {
        TransactionTerms::Purchase { price, taxes } => {
            assert_eq!(price, "call for price");
            assert_eq!(taxes, "");
        }
        other => panic!("expected purchase terms, got {other:?}"),
    }
}

#[test]
fn enumerated_words_parse_case_insensitively_through_build() {
    let (property, _) = apartment_draft();
    let transaction = ListingDraft {
        property,
        unit: UnitDraft::Apartment {
            laundry: " ENSUITE ".to_string(),
            balcony: "Solarium".to_string(),
        },
        terms: rental_terms(),
    }
    .build()
    .expect("mixed-case words parse");

    assert_eq!(transaction.property_type(), PropertyType::Apartment);
}

#[test]
fn invalid_enumerated_word_fails_with_field_name() {
    let (property, _) = house_draft();
    let error = ListingDraft {
        property,
        unit: UnitDraft::House {
            stories: "2".to_string(),
            garage: "carport".to_string(),
            fenced_yard: "yes".to_string(),
        },
        terms: purchase_terms(),
    }
    .build()
    .expect_err("invalid garage word");

    assert_eq!(error.field, "garage");
    assert_eq!(error.value, "carport");
}

#[test]
fn invalid_furnished_word_fails_with_field_name() {
    let (property, unit) = apartment_draft();
    let error = ListingDraft {
        property,
        unit,
        terms: TermsDraft::Rental {
            rent: "1100".to_string(),
            utilities: "150".to_string(),
            furnished: "partially".to_string(),
        },
    }
    .build()
    .expect_err("invalid furnished word");

    assert_eq!(error.field, "furnished");
    assert_eq!(error.expected, &["yes", "no"]);
}
