use crate::{validate_query, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            if let Err(error) = validate_query(state.query()) {
                state.fail(error);
                return (state, Vec::new());
            }
            // Requests already in flight are left alone; whichever settles
            // last decides what is shown.
            let request_id = state.begin_search();
            vec![Effect::FetchCountries {
                request_id,
                query: state.query().to_string(),
            }]
        }
        Msg::SearchSettled {
            request_id: _,
            outcome,
        } => {
            state.settle(outcome);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
