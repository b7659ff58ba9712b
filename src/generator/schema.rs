//! Domain schemas for synthetic records
//!
//! Each built-in domain has a fixed field order. Unknown domains fall back to
//! a generic five-field schema derived from the domain name.

use chrono::{DateTime, Duration, Utc};
use fake::faker::address::en::{BuildingNumber, CityName, CountryName, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::currency::en::CurrencyCode;
use fake::faker::internet::en::SafeEmail;
use fake::faker::job::en::Title;
use fake::faker::lorem::en::{Sentence, Words};
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Sales",
    "Marketing",
    "HR",
    "Finance",
    "Operations",
];
const CUSTOMER_STATUSES: &[&str] = &["Active", "Inactive", "Pending"];
const SECTORS: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Retail",
    "Manufacturing",
    "Services",
];
const PRODUCT_CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Food",
    "Books",
    "Home",
    "Sports",
];
const TRANSACTION_STATUSES: &[&str] = &["Completed", "Pending", "Failed", "Refunded"];
const PAYMENT_METHODS: &[&str] = &["Credit Card", "Debit Card", "PayPal", "Bank Transfer"];
const DEVICE_TYPES: &[&str] = &["Sensor", "Camera", "Thermostat", "Smart Lock", "Light"];
const PERSON_DOMAINS: &[&str] = &["user", "person", "staff"];
const MAX_DESCRIPTION_CHARS: usize = 100;

/// A single generated value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text, quoted in SQL output
    Text(String),
    /// Whole number
    Integer(i64),
    /// Decimal number, already rounded
    Decimal(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(x) if x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Decimal(x) => write!(f, "{x}"),
        }
    }
}

/// Built-in and generic domains
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Domain {
    Employee,
    Customer,
    Business,
    Product,
    Transaction,
    Iot,
    /// Any other domain, keeps its lower-cased name
    Generic(String),
}

impl Domain {
    /// Match a domain name case-insensitively
    pub fn parse(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "employee" => Self::Employee,
            "customer" => Self::Customer,
            "business" => Self::Business,
            "product" => Self::Product,
            "transaction" => Self::Transaction,
            "iot" => Self::Iot,
            _ => Self::Generic(name),
        }
    }

    /// Lower-case domain name, also used as SQL table name
    pub fn name(&self) -> &str {
        match self {
            Self::Employee => "employee",
            Self::Customer => "customer",
            Self::Business => "business",
            Self::Product => "product",
            Self::Transaction => "transaction",
            Self::Iot => "iot",
            Self::Generic(name) => name,
        }
    }

    /// Field names in output order
    pub fn fields(&self) -> Vec<String> {
        let fixed: &[&str] = match self {
            Self::Employee => &[
                "employee_id",
                "name",
                "email",
                "department",
                "position",
                "salary",
                "hire_date",
            ],
            Self::Customer => &[
                "customer_id",
                "name",
                "email",
                "phone",
                "country",
                "registration_date",
                "status",
            ],
            Self::Business => &[
                "business_id",
                "name",
                "address",
                "city",
                "country",
                "revenue",
                "sector",
                "founded_year",
                "employees",
            ],
            Self::Product => &[
                "product_id",
                "name",
                "category",
                "price",
                "stock",
                "supplier",
                "rating",
            ],
            Self::Transaction => &[
                "transaction_id",
                "customer_id",
                "amount",
                "currency",
                "timestamp",
                "status",
                "payment_method",
            ],
            Self::Iot => &[
                "device_id",
                "device_type",
                "location",
                "temperature",
                "humidity",
                "battery_level",
                "last_update",
            ],
            Self::Generic(name) => {
                return vec![
                    format!("{name}_id"),
                    "name".to_string(),
                    "description".to_string(),
                    "created_at".to_string(),
                    "status".to_string(),
                ]
            }
        };
        fixed.iter().map(|f| f.to_string()).collect()
    }

    /// Generate the record at zero-based position `index`
    ///
    /// Time-dependent fields are drawn backwards from `as_of`.
    pub fn generate_record<R: Rng + ?Sized>(
        &self,
        index: usize,
        rng: &mut R,
        as_of: DateTime<Utc>,
    ) -> Vec<FieldValue> {
        use FieldValue::{Decimal, Integer, Text};

        let n = index + 1;
        match self {
            Self::Employee => vec![
                Text(format!("EMP{n:05}")),
                Text(Name().fake_with_rng(rng)),
                Text(SafeEmail().fake_with_rng(rng)),
                Text(pick(rng, DEPARTMENTS)),
                Text(Title().fake_with_rng(rng)),
                Integer(rng.gen_range(40_000..=150_000)),
                Text(date_within(rng, as_of, 5 * 365)),
            ],
            Self::Customer => vec![
                Text(format!("CUST{n:06}")),
                Text(Name().fake_with_rng(rng)),
                Text(SafeEmail().fake_with_rng(rng)),
                Text(PhoneNumber().fake_with_rng(rng)),
                Text(CountryName().fake_with_rng(rng)),
                Text(date_within(rng, as_of, 2 * 365)),
                Text(pick(rng, CUSTOMER_STATUSES)),
            ],
            Self::Business => vec![
                Text(format!("BIZ{n:05}")),
                Text(CompanyName().fake_with_rng(rng)),
                Text(street_address(rng)),
                Text(CityName().fake_with_rng(rng)),
                Text(CountryName().fake_with_rng(rng)),
                Integer(rng.gen_range(100_000..=10_000_000)),
                Text(pick(rng, SECTORS)),
                Integer(rng.gen_range(1950..=2024)),
                Integer(rng.gen_range(10..=5000)),
            ],
            Self::Product => vec![
                Text(format!("PRD{n:06}")),
                Text(product_name(rng)),
                Text(pick(rng, PRODUCT_CATEGORIES)),
                Decimal(round_to(rng.gen_range(10.0..1000.0), 2)),
                Integer(rng.gen_range(0..=1000)),
                Text(CompanyName().fake_with_rng(rng)),
                Decimal(round_to(rng.gen_range(1.0..5.0), 1)),
            ],
            Self::Transaction => vec![
                Text(format!("TXN{n:08}")),
                Text(format!("CUST{:06}", rng.gen_range(1..=10_000))),
                Decimal(round_to(rng.gen_range(5.0..5000.0), 2)),
                Text(CurrencyCode().fake_with_rng(rng)),
                Text(datetime_within(rng, as_of, 365)),
                Text(pick(rng, TRANSACTION_STATUSES)),
                Text(pick(rng, PAYMENT_METHODS)),
            ],
            Self::Iot => {
                let city: String = CityName().fake_with_rng(rng);
                let country: String = CountryName().fake_with_rng(rng);
                vec![
                    Text(format!("IOT{n:06}")),
                    Text(pick(rng, DEVICE_TYPES)),
                    Text(format!("{city}, {country}")),
                    Decimal(round_to(rng.gen_range(15.0..35.0), 1)),
                    Decimal(round_to(rng.gen_range(30.0..90.0), 1)),
                    Integer(rng.gen_range(0..=100)),
                    Text(datetime_within(rng, as_of, 7)),
                ]
            }
            Self::Generic(name) => {
                let prefix: String = name.to_uppercase().chars().take(3).collect();
                let display_name: String = if PERSON_DOMAINS.contains(&name.as_str()) {
                    Name().fake_with_rng(rng)
                } else {
                    CompanyName().fake_with_rng(rng)
                };
                let sentence: String = Sentence(6..14).fake_with_rng(rng);
                vec![
                    Text(format!("{prefix}{n:05}")),
                    Text(display_name),
                    Text(sentence.chars().take(MAX_DESCRIPTION_CHARS).collect()),
                    Text(datetime_within(rng, as_of, 365)),
                    Text(pick(rng, CUSTOMER_STATUSES)),
                ]
            }
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn date_within<R: Rng + ?Sized>(rng: &mut R, as_of: DateTime<Utc>, days: i64) -> String {
    let date = as_of - Duration::days(rng.gen_range(0..=days));
    date.format("%Y-%m-%d").to_string()
}

fn datetime_within<R: Rng + ?Sized>(rng: &mut R, as_of: DateTime<Utc>, days: i64) -> String {
    let moment = as_of - Duration::seconds(rng.gen_range(0..=days * 86_400));
    moment.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    format!("{number} {street}")
}

fn product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let words: Vec<String> = Words(2..4).fake_with_rng(rng);
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_known_and_generic() {
        assert_eq!(Domain::parse(" Employee "), Domain::Employee);
        assert_eq!(Domain::parse("IOT"), Domain::Iot);
        assert_eq!(
            Domain::parse("Vehicle"),
            Domain::Generic("vehicle".to_string())
        );
    }

    #[test]
    fn test_generic_fields() {
        let domain = Domain::parse("vehicle");
        assert_eq!(
            domain.fields(),
            vec!["vehicle_id", "name", "description", "created_at", "status"]
        );
    }

    #[test]
    fn test_record_width_matches_fields() {
        let mut rng = StdRng::seed_from_u64(42);
        for name in [
            "employee",
            "customer",
            "business",
            "product",
            "transaction",
            "iot",
            "user",
            "vehicle",
        ] {
            let domain = Domain::parse(name);
            let record = domain.generate_record(0, &mut rng, as_of());
            assert_eq!(record.len(), domain.fields().len(), "{name}");
        }
    }

    #[test]
    fn test_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let record = Domain::Employee.generate_record(41, &mut rng, as_of());
        assert_eq!(record[0], FieldValue::Text("EMP00042".to_string()));

        let record = Domain::Transaction.generate_record(0, &mut rng, as_of());
        assert_eq!(record[0], FieldValue::Text("TXN00000001".to_string()));

        let record = Domain::parse("vehicle").generate_record(2, &mut rng, as_of());
        assert_eq!(record[0], FieldValue::Text("VEH00003".to_string()));
    }

    #[test]
    fn test_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..50 {
            let record = Domain::Employee.generate_record(i, &mut rng, as_of());
            match &record[5] {
                FieldValue::Integer(salary) => assert!((40_000..=150_000).contains(salary)),
                other => panic!("unexpected salary {other:?}"),
            }
            match &record[6] {
                FieldValue::Text(date) => assert!(date.as_str() <= "2025-06-01"),
                other => panic!("unexpected date {other:?}"),
            }
        }
    }

    #[test]
    fn test_same_seed_same_records() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            Domain::Customer.generate_record(0, &mut a, as_of()),
            Domain::Customer.generate_record(0, &mut b, as_of())
        );
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Text("x".into()).to_string(), "x");
        assert_eq!(FieldValue::Integer(42).to_string(), "42");
        assert_eq!(FieldValue::Decimal(12.5).to_string(), "12.5");
        assert_eq!(FieldValue::Decimal(3.0).to_string(), "3.0");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.3456, 2), 12.35);
        assert_eq!(round_to(4.04, 1), 4.0);
    }
}
