use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

pub type RequestId = u64;

/// One element of the API's success array. Only the fields the cards use
/// are decoded; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
    pub name: NameRecord,
    pub flags: FlagsRecord,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    pub population: u64,
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub currencies: Option<OrderedEntries<CurrencyRecord>>,
    #[serde(default)]
    pub languages: Option<OrderedEntries<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameRecord {
    pub common: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlagsRecord {
    pub svg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyRecord {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// A JSON object decoded as `(key, value)` pairs in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedEntries<T>(pub Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedEntries<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = OrderedEntries<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, T>()? {
                    entries.push(entry);
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Status object the API sends instead of an array, e.g. `{"status":404,"message":"Not Found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusBody {
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
}

/// A lookup that produced a well-formed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Vec<CountryRecord>),
    NotFound { message: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Sent exactly once per enqueued request.
    Settled {
        request_id: RequestId,
        result: Result<LookupOutcome, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Timeout,
    Network,
    /// Body was not JSON, or an array element lacked a required field.
    Decode,
    /// Well-formed JSON that is neither a country array nor a 404 marker.
    UnexpectedPayload { status: Option<u16> },
    /// The request task ended without producing a result.
    Cancelled,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "decode error"),
            FailureKind::UnexpectedPayload { status: Some(code) } => {
                write!(f, "unexpected payload with status {code}")
            }
            FailureKind::UnexpectedPayload { status: None } => write!(f, "unexpected payload"),
            FailureKind::Cancelled => write!(f, "cancelled"),
        }
    }
}
