//! Customer and metrics records
//!
//! Wire types returned by the customer API. Field names follow the upper-case
//! column names the service emits (`CUSTOMER_KEY`, `SANDWICH_COUNT`, ...).
//! Numeric columns are accepted either as JSON numbers or numeric strings,
//! since decimal aggregates may be serialized as text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque customer identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerKey {
    Number(i64),
    Text(String),
}

impl fmt::Display for CustomerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerKey::Number(n) => write!(f, "{}", n),
            CustomerKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CustomerKey {
    fn from(key: i64) -> Self {
        CustomerKey::Number(key)
    }
}

impl From<&str> for CustomerKey {
    fn from(key: &str) -> Self {
        match key.parse::<i64>() {
            Ok(n) => CustomerKey::Number(n),
            Err(_) => CustomerKey::Text(key.to_string()),
        }
    }
}

/// A loyalty customer as returned by the phone lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "CUSTOMER_KEY")]
    pub customer_key: CustomerKey,

    #[serde(rename = "CUSTOMERFNAME", default, deserialize_with = "lenient::text")]
    pub first_name: String,

    #[serde(rename = "CUSTOMERLNAME", default, deserialize_with = "lenient::text")]
    pub last_name: String,

    #[serde(
        rename = "CUSTOMERPHONE",
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,

    /// Any other columns the service returned, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomerRecord {
    pub fn new(customer_key: impl Into<CustomerKey>, first_name: impl Into<String>) -> Self {
        Self {
            customer_key: customer_key.into(),
            first_name: first_name.into(),
            last_name: String::new(),
            phone: None,
            extra: Map::new(),
        }
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// "First Last", as shown in the customer picker
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Response of the customer list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerList {
    #[serde(default)]
    pub results: Vec<CustomerRecord>,

    #[serde(default)]
    pub columns: Vec<String>,

    #[serde(default)]
    pub row_count: Option<u64>,
}

/// Year-in-review aggregate for one customer
///
/// Every section is optional: the service leaves out (or nulls) a metric
/// whose query matched no rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerMetrics {
    #[serde(default)]
    pub favorite_sandwich: Option<FavoriteSandwich>,

    #[serde(default)]
    pub favorite_side: Option<FavoriteSide>,

    #[serde(default)]
    pub total_inches: Option<SandwichInches>,

    #[serde(default)]
    pub most_visited_store: Option<StoreVisits>,

    #[serde(default)]
    pub favorite_month: Option<FavoriteMonth>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoriteSandwich {
    #[serde(rename = "SANDWICH", default, deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,

    #[serde(rename = "SANDWICH_COUNT", default, deserialize_with = "lenient::opt_count")]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoriteSide {
    #[serde(rename = "SIDE", default, deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,

    #[serde(rename = "SIDE_COUNT", default, deserialize_with = "lenient::opt_count")]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SandwichInches {
    #[serde(
        rename = "INCHES_OF_SANDWICH",
        default,
        deserialize_with = "lenient::opt_amount"
    )]
    pub inches: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreVisits {
    #[serde(rename = "CITY", default, deserialize_with = "lenient::opt_text")]
    pub city: Option<String>,

    #[serde(
        rename = "MOST_VISITED_COUNT",
        default,
        deserialize_with = "lenient::opt_count"
    )]
    pub visits: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoriteMonth {
    /// Month number as sent by the service; see [`crate::month::month_name`]
    #[serde(rename = "MONTH", default)]
    pub month: Option<Value>,

    #[serde(rename = "NUMOFVISITS", default, deserialize_with = "lenient::opt_count")]
    pub visits: Option<u64>,
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        opt_text(d).map(Option::unwrap_or_default)
    }

    pub fn opt_amount<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let amount = match Value::deserialize(d)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(amount.filter(|v| v.is_finite()))
    }

    pub fn opt_count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        let value = Value::deserialize(d)?;
        if let Some(n) = value.as_u64() {
            return Ok(Some(n));
        }
        let amount = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(amount.filter(|v| v.is_finite() && *v >= 0.0).map(|v| v as u64))
    }
}
