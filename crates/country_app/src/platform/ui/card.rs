use country_core::CountryCardView;

/// Detail lines shown under a card's title.
pub fn card_lines(card: &CountryCardView) -> Vec<String> {
    vec![
        format!("Capital: {}", card.capital),
        format!("Population: {}", card.population),
        format!("Region: {}", card.region),
        format!("Currency: {}", card.currency),
        format!("Language: {}", card.languages),
        format!("Flag: {}", card.flag_url),
    ]
}
