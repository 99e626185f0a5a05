use crate::view_model::{AppViewModel, CountryCardView, ResultView};
use crate::{Country, LookupError, SearchOutcome};

pub type RequestId = u64;

/// Controller state: the query text, the last result set, the error line and
/// the loading flag.
///
/// Whenever the error is set the result set is emptied, and whenever results
/// are stored the error is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    query: String,
    results: Vec<Country>,
    error: Option<LookupError>,
    loading: bool,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            error: None,
            loading: false,
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let status = if self.loading {
            ResultView::Loading
        } else if let Some(error) = self.error {
            ResultView::Error(error.message().to_string())
        } else if !self.results.is_empty() {
            ResultView::Results(self.results.iter().map(CountryCardView::from).collect())
        } else {
            ResultView::Idle
        };

        AppViewModel {
            query: self.query.clone(),
            status,
            dirty: self.dirty,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Country] {
        &self.results
    }

    pub fn error(&self) -> Option<LookupError> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns whether the state changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.dirty = true;
        }
    }

    pub(crate) fn fail(&mut self, error: LookupError) {
        self.error = Some(error);
        self.results.clear();
        self.dirty = true;
    }

    /// Enters the loading state and allocates the id for the outbound request.
    pub(crate) fn begin_search(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.loading = true;
        self.dirty = true;
        request_id
    }

    /// Reconciles a settlement. The loading flag is released on every branch.
    pub(crate) fn settle(&mut self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Found(countries) => {
                self.results = countries;
                self.error = None;
                self.dirty = true;
            }
            SearchOutcome::NotFound => self.fail(LookupError::NotFound),
            SearchOutcome::Failed => self.fail(LookupError::TransportOrParseFailure),
        }
        self.loading = false;
    }
}

/// Rejects queries that are empty once surrounding whitespace is removed.
pub fn validate_query(query: &str) -> Result<(), LookupError> {
    if query.trim().is_empty() {
        Err(LookupError::EmptyInput)
    } else {
        Ok(())
    }
}
