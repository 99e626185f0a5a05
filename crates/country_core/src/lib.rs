//! Country finder core: pure search state machine and view-model helpers.
mod country;
mod effect;
mod error;
mod msg;
mod state;
mod update;
mod view_model;

pub use country::{Country, Currency, SearchOutcome};
pub use effect::Effect;
pub use error::LookupError;
pub use msg::Msg;
pub use state::{validate_query, AppState, RequestId};
pub use update::update;
pub use view_model::{format_with_commas, AppViewModel, CountryCardView, ResultView, NOT_AVAILABLE};
