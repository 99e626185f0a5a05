use std::time::Duration;

use country_core::{Country, Currency, Effect, Msg, SearchOutcome};
use country_engine::{
    CountryRecord, EngineEvent, EngineHandle, FetchError, LookupOutcome, RequestId,
};
use lookup_logging::{lookup_info, lookup_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCountries { request_id, query } => {
                    lookup_info!(
                        "FetchCountries request_id={} query_len={}",
                        request_id,
                        query.len()
                    );
                    self.engine.enqueue(request_id, query);
                }
            }
        }
    }

    /// Collects every settlement that has arrived, without blocking.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }

    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Settled { request_id, result } => {
            let outcome = map_result(request_id, result);
            Msg::SearchSettled {
                request_id,
                outcome,
            }
        }
    }
}

fn map_result(
    request_id: RequestId,
    result: Result<LookupOutcome, FetchError>,
) -> SearchOutcome {
    match result {
        Ok(LookupOutcome::Found(records)) => {
            lookup_info!("Request {} found {} countries", request_id, records.len());
            SearchOutcome::Found(records.into_iter().map(map_country).collect())
        }
        Ok(LookupOutcome::NotFound { message }) => {
            lookup_info!(
                "Request {} matched nothing ({})",
                request_id,
                message.as_deref().unwrap_or("no message")
            );
            SearchOutcome::NotFound
        }
        Err(err) => {
            lookup_warn!("Request {} failed: {}", request_id, err);
            SearchOutcome::Failed
        }
    }
}

fn map_country(record: CountryRecord) -> Country {
    Country {
        name: record.name.common,
        flag_url: record.flags.svg,
        capital: record.capital.and_then(|capitals| capitals.into_iter().next()),
        population: record.population,
        region: record.continents.into_iter().next(),
        currencies: record
            .currencies
            .map(|entries| {
                entries
                    .0
                    .into_iter()
                    .map(|(_code, currency)| Currency {
                        name: currency.name,
                        symbol: currency.symbol,
                    })
                    .collect()
            })
            .unwrap_or_default(),
        languages: record
            .languages
            .map(|entries| {
                entries
                    .0
                    .into_iter()
                    .map(|(_code, name)| name)
                    .collect()
            })
            .unwrap_or_default(),
    }
}
