use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use lookup_logging::lookup_warn;

use crate::fetch::{CountryFetcher, FetchSettings, ReqwestCountryFetcher};
use crate::{EngineEvent, FailureKind, FetchError, LookupOutcome, RequestId};

enum EngineCommand {
    Lookup { request_id: RequestId, query: String },
}

/// Runs lookups on a background tokio runtime and reports settlements.
///
/// Requests are independent: nothing is cancelled or serialized, and each
/// one produces exactly one [`EngineEvent::Settled`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let fetcher = ReqwestCountryFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn CountryFetcher>) -> Result<Self, FetchError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Lookup {
            request_id,
            query: query.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn CountryFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Lookup { request_id, query } => {
            let guard = SettlementGuard::new(request_id, event_tx);
            let result = fetcher.lookup(&query).await;
            guard.settle(result);
        }
    }
}

/// Reports a settlement for one request when it is dropped unsettled, so a
/// task that panics or is torn down still releases the caller's loading state.
struct SettlementGuard {
    request_id: RequestId,
    event_tx: Option<mpsc::Sender<EngineEvent>>,
}

impl SettlementGuard {
    fn new(request_id: RequestId, event_tx: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            request_id,
            event_tx: Some(event_tx),
        }
    }

    fn settle(mut self, result: Result<LookupOutcome, FetchError>) {
        if let Some(event_tx) = self.event_tx.take() {
            let _ = event_tx.send(EngineEvent::Settled {
                request_id: self.request_id,
                result,
            });
        }
    }
}

impl Drop for SettlementGuard {
    fn drop(&mut self) {
        if let Some(event_tx) = self.event_tx.take() {
            lookup_warn!("request {} ended without settling", self.request_id);
            let _ = event_tx.send(EngineEvent::Settled {
                request_id: self.request_id,
                result: Err(FetchError::new(
                    FailureKind::Cancelled,
                    "lookup ended without a result",
                )),
            });
        }
    }
}
