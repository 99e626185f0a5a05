/// A country as shown in the result grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Country {
    pub name: String,
    pub flag_url: String,
    /// First listed capital, if the country has one.
    pub capital: Option<String>,
    pub population: u64,
    /// First listed continent.
    pub region: Option<String>,
    /// In the order the API listed them.
    pub currencies: Vec<Currency>,
    /// Language names in the order the API listed them.
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

/// How a dispatched lookup settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The API returned a (possibly empty) list of matches.
    Found(Vec<Country>),
    /// The API answered with its "not found" marker.
    NotFound,
    /// Transport failure or a body that could not be understood.
    Failed,
}
