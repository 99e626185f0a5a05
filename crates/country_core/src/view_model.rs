use crate::Country;

/// Placeholder for a card field the API left out.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub status: ResultView,
    pub dirty: bool,
}

/// The one thing the result region shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Idle,
    Loading,
    Error(String),
    Results(Vec<CountryCardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCardView {
    pub name: String,
    pub flag_url: String,
    pub capital: String,
    pub population: String,
    pub region: String,
    pub currency: String,
    pub languages: String,
}

impl From<&Country> for CountryCardView {
    fn from(country: &Country) -> Self {
        let currency = match country.currencies.first() {
            Some(currency) => match currency.symbol.as_deref() {
                Some(symbol) => format!("{} - {}", currency.name, symbol),
                None => currency.name.clone(),
            },
            None => NOT_AVAILABLE.to_string(),
        };
        let languages = if country.languages.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            country.languages.join(", ")
        };

        Self {
            name: country.name.clone(),
            flag_url: country.flag_url.clone(),
            capital: or_not_available(country.capital.as_deref()),
            population: format_with_commas(country.population),
            region: or_not_available(country.region.as_deref()),
            currency,
            languages,
        }
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// Formats `value` with `,` between groups of three digits.
pub fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
