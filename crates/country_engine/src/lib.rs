//! Country lookup engine: HTTP fetch, response decoding and request execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::decode_lookup;
pub use engine::EngineHandle;
pub use fetch::{lookup_url, CountryFetcher, FetchSettings, ReqwestCountryFetcher, DEFAULT_BASE_URL};
pub use types::{
    CountryRecord, CurrencyRecord, EngineEvent, FailureKind, FetchError, FlagsRecord,
    LookupOutcome, NameRecord, OrderedEntries, RequestId, StatusBody,
};
