use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Timings,
    Location,
    Price,
    Booking,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Timings => "timings",
            Intent::Location => "location",
            Intent::Price => "price",
            Intent::Booking => "booking",
        }
    }
}

/// Reply language. Serialized as the short tag stored in the unmatched log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }
}
