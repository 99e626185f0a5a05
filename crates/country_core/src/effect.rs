#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one lookup for `query`, exactly as the user typed it.
    FetchCountries {
        request_id: crate::RequestId,
        query: String,
    },
}
