#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box; stored verbatim.
    InputChanged(String),
    /// User triggered a search for the current input.
    SearchSubmitted,
    /// A dispatched lookup has settled.
    SearchSettled {
        request_id: crate::RequestId,
        outcome: crate::SearchOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
