use std::time::Duration;

use anyhow::bail;
use country_core::{update, AppState, Msg, ResultView};

use super::effects::EffectRunner;
use super::ui::card::card_lines;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs one search without the UI and prints what the result region would show.
pub fn run(runner: &EffectRunner, query: String) -> anyhow::Result<()> {
    let state = search(runner, query);

    match state.view().status {
        ResultView::Results(cards) => {
            for (index, card) in cards.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!("{}", card.name);
                for line in card_lines(card) {
                    println!("  {line}");
                }
            }
            Ok(())
        }
        ResultView::Error(message) => bail!(message),
        ResultView::Idle => {
            println!("No countries returned.");
            Ok(())
        }
        ResultView::Loading => bail!("search did not settle"),
    }
}

fn search(runner: &EffectRunner, query: String) -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged(query));
    let (mut state, effects) = update(state, Msg::SearchSubmitted);
    runner.enqueue(effects);

    // No timeout unless one was configured on the fetcher.
    while state.is_loading() {
        if let Some(msg) = runner.wait(POLL_INTERVAL) {
            state = update(state, msg).0;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use country_core::CountryCardView;
    use country_engine::{EngineHandle, FetchSettings};
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FRANCE_BODY: &str = r#"[{
        "name": {"common": "France"},
        "flags": {"svg": "f.svg"},
        "capital": ["Paris"],
        "population": 67000000,
        "continents": ["Europe"],
        "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
        "languages": {"fra": "French"}
    }]"#;

    fn runner_against(
        runtime: &tokio::runtime::Runtime,
        route: &str,
        response: ResponseTemplate,
    ) -> (MockServer, EffectRunner) {
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(response)
                .mount(&server)
                .await;
            server
        });
        let engine = EngineHandle::new(FetchSettings {
            base_url: format!("{}/v3.1", server.uri()),
            ..FetchSettings::default()
        })
        .expect("engine");
        (server, EffectRunner::new(engine))
    }

    #[test]
    fn france_search_end_to_end() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let (_server, runner) = runner_against(
            &runtime,
            "/v3.1/name/France",
            ResponseTemplate::new(200).set_body_raw(FRANCE_BODY, "application/json"),
        );

        let state = search(&runner, "France".to_string());

        assert!(!state.is_loading());
        let ResultView::Results(cards) = state.view().status else {
            panic!("expected results");
        };
        assert_eq!(
            cards,
            vec![CountryCardView {
                name: "France".to_string(),
                flag_url: "f.svg".to_string(),
                capital: "Paris".to_string(),
                population: "67,000,000".to_string(),
                region: "Europe".to_string(),
                currency: "Euro - €".to_string(),
                languages: "French".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_country_end_to_end() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let (_server, runner) = runner_against(
            &runtime,
            "/v3.1/name/atlantis",
            ResponseTemplate::new(404)
                .set_body_raw(r#"{"status":404,"message":"Not Found"}"#, "application/json"),
        );

        let state = search(&runner, "atlantis".to_string());

        assert_eq!(
            state.view().status,
            ResultView::Error("No matching countries found.".to_string())
        );
    }

    #[test]
    fn blank_query_fails_without_network() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let (server, runner) = runner_against(
            &runtime,
            "/v3.1/name/unused",
            ResponseTemplate::new(200).set_body_raw("[]", "application/json"),
        );

        let err = run(&runner, "   ".to_string()).unwrap_err();

        assert_eq!(err.to_string(), "The input field cannot be empty");
        let received = runtime.block_on(server.received_requests()).unwrap_or_default();
        assert!(received.is_empty());
    }
}
