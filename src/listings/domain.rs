use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when free text does not match an enumerated field's allowed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {} '{}' (expected one of: {})", .field, .value, .expected.join(", "))]
pub struct FieldParseError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

impl FieldParseError {
    fn new(field: &'static str, value: &str, expected: &'static [&'static str]) -> Self {
        Self {
            field,
            value: value.trim().to_string(),
            expected,
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Laundry facilities advertised with an apartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Laundry {
    Coin,
    Ensuite,
    None,
}

impl Laundry {
    pub const fn ordered() -> [Self; 3] {
        [Self::Coin, Self::Ensuite, Self::None]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Ensuite => "ensuite",
            Self::None => "none",
        }
    }

    pub const WORDS: &'static [&'static str] = &["coin", "ensuite", "none"];
}

impl FromStr for Laundry {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "coin" => Ok(Self::Coin),
            "ensuite" => Ok(Self::Ensuite),
            "none" => Ok(Self::None),
            _ => Err(FieldParseError::new("laundry", raw, Self::WORDS)),
        }
    }
}

/// Balcony situation advertised with an apartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Balcony {
    Yes,
    No,
    Solarium,
}

impl Balcony {
    pub const fn ordered() -> [Self; 3] {
        [Self::Yes, Self::No, Self::Solarium]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Solarium => "solarium",
        }
    }

    pub const WORDS: &'static [&'static str] = &["yes", "no", "solarium"];
}

impl FromStr for Balcony {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "solarium" => Ok(Self::Solarium),
            _ => Err(FieldParseError::new("balcony", raw, Self::WORDS)),
        }
    }
}

/// Garage attached to a house, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Garage {
    Attached,
    Detached,
    None,
}

impl Garage {
    pub const fn ordered() -> [Self; 3] {
        [Self::Attached, Self::Detached, Self::None]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Attached => "attached",
            Self::Detached => "detached",
            Self::None => "none",
        }
    }

    pub const WORDS: &'static [&'static str] = &["attached", "detached", "none"];
}

impl FromStr for Garage {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "attached" => Ok(Self::Attached),
            "detached" => Ok(Self::Detached),
            "none" => Ok(Self::None),
            _ => Err(FieldParseError::new("garage", raw, Self::WORDS)),
        }
    }
}

/// Whether a house's yard is fenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FencedYard {
    Yes,
    No,
}

impl FencedYard {
    pub const fn ordered() -> [Self; 2] {
        [Self::Yes, Self::No]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub const WORDS: &'static [&'static str] = &["yes", "no"];
}

impl FromStr for FencedYard {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(FieldParseError::new("fenced yard", raw, Self::WORDS)),
        }
    }
}

/// Whether a rental is offered furnished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Furnished {
    Yes,
    No,
}

impl Furnished {
    pub const fn ordered() -> [Self; 2] {
        [Self::Yes, Self::No]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub const WORDS: &'static [&'static str] = &["yes", "no"];
}

impl FromStr for Furnished {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(FieldParseError::new("furnished", raw, Self::WORDS)),
        }
    }
}

/// Discriminant for the two unit types a listing can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 2] {
        [Self::Apartment, Self::House]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
        }
    }

    pub const WORDS: &'static [&'static str] = &["apartment", "house"];
}

impl FromStr for PropertyType {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "apartment" => Ok(Self::Apartment),
            "house" => Ok(Self::House),
            _ => Err(FieldParseError::new("property type", raw, Self::WORDS)),
        }
    }
}

/// Discriminant for the two payment arrangements a listing can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Purchase,
    Rental,
}

impl PaymentType {
    pub const fn ordered() -> [Self; 2] {
        [Self::Purchase, Self::Rental]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Rental => "rental",
        }
    }

    pub const WORDS: &'static [&'static str] = &["purchase", "rental"];
}

impl FromStr for PaymentType {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "purchase" => Ok(Self::Purchase),
            "rental" => Ok(Self::Rental),
            _ => Err(FieldParseError::new("payment type", raw, Self::WORDS)),
        }
    }
}

/// Base fields shared by every listed unit.
///
/// Values are kept exactly as entered; numeric coercion happens only where a
/// query needs a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDetails {
    #[serde(default)]
    pub square_feet: String,
    #[serde(default)]
    pub bedrooms: String,
    #[serde(default)]
    pub baths: String,
}

/// Kind-specific attributes for the two unit types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Apartment {
        laundry: Laundry,
        balcony: Balcony,
    },
    House {
        stories: String,
        garage: Garage,
        fenced_yard: FencedYard,
    },
}

impl PropertyKind {
    pub const fn property_type(&self) -> PropertyType {
        match self {
            Self::Apartment { .. } => PropertyType::Apartment,
            Self::House { .. } => PropertyType::House,
        }
    }
}

/// A listed unit: shared base fields plus the kind-specific block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub details: PropertyDetails,
    pub kind: PropertyKind,
}

impl Property {
    pub const fn property_type(&self) -> PropertyType {
        self.kind.property_type()
    }
}

/// Financial terms attached to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionTerms {
    Purchase {
        price: String,
        taxes: String,
    },
    Rental {
        rent: String,
        utilities: String,
        furnished: Furnished,
    },
}

impl TransactionTerms {
    pub const fn payment_type(&self) -> PaymentType {
        match self {
            Self::Purchase { .. } => PaymentType::Purchase,
            Self::Rental { .. } => PaymentType::Rental,
        }
    }
}

/// One entry in the agent's book: exactly one property plus its terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub property: Property,
    pub terms: TransactionTerms,
}

impl Transaction {
    pub const fn payment_type(&self) -> PaymentType {
        self.terms.payment_type()
    }

    pub const fn property_type(&self) -> PropertyType {
        self.property.property_type()
    }

    /// The stored price text for purchases, `None` for rentals.
    pub fn purchase_price(&self) -> Option<&str> {
        match &self.terms {
            TransactionTerms::Purchase { price, .. } => Some(price),
            TransactionTerms::Rental { .. } => None,
        }
    }
}

impl fmt::Display for PropertyDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PROPERTY DETAILS")?;
        writeln!(f, "================")?;
        writeln!(f, "square footage: {}", self.square_feet)?;
        writeln!(f, "bedrooms: {}", self.bedrooms)?;
        writeln!(f, "bathrooms: {}", self.baths)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Base fields always print first, then the kind-specific block.
        write!(f, "{}", self.details)?;
        match &self.kind {
            PropertyKind::Apartment { laundry, balcony } => {
                writeln!(f)?;
                writeln!(f, "APARTMENT DETAILS")?;
                writeln!(f, "laundry: {}", laundry.label())?;
                writeln!(f, "has balcony: {}", balcony.label())
            }
            PropertyKind::House {
                stories,
                garage,
                fenced_yard,
            } => {
                writeln!(f)?;
                writeln!(f, "HOUSE DETAILS")?;
                writeln!(f, "# of stories: {}", stories)?;
                writeln!(f, "garage: {}", garage.label())?;
                writeln!(f, "fenced yard: {}", fenced_yard.label())
            }
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.property)?;
        match &self.terms {
            TransactionTerms::Purchase { price, taxes } => {
                writeln!(f)?;
                writeln!(f, "PURCHASE DETAILS")?;
                writeln!(f, "selling price: {}", price)?;
                writeln!(f, "estimated taxes: {}", taxes)
            }
            TransactionTerms::Rental {
                rent,
                utilities,
                furnished,
            } => {
                writeln!(f)?;
                writeln!(f, "RENTAL DETAILS")?;
                writeln!(f, "rent: {}", rent)?;
                writeln!(f, "estimated utilities: {}", utilities)?;
                writeln!(f, "furnished: {}", furnished.label())
            }
        }
    }
}
