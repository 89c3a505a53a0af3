//! Drives searches issued from a UI or CLI. Starting a search supersedes the
//! one still in flight: its task is aborted and its result is never committed.

use std::sync::Arc;

use shared::protocol::{SearchOutcome, SearchRequest};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError, Mutex},
    task::JoinHandle,
};
use tracing::{debug, info};

use crate::{run_search, ClientError, LectureSource};

#[derive(Debug, Clone)]
pub enum SearchEvent {
    Started {
        ticket: u64,
        request: SearchRequest,
    },
    Completed {
        ticket: u64,
        outcome: SearchOutcome,
    },
    Superseded {
        ticket: u64,
    },
}

struct InflightSearch {
    ticket: u64,
    task: JoinHandle<()>,
}

#[derive(Default)]
struct ControllerState {
    generation: u64,
    inflight: Option<InflightSearch>,
    latest: Option<(u64, SearchOutcome)>,
}

pub struct SearchController {
    source: Arc<dyn LectureSource>,
    state: Mutex<ControllerState>,
    events: broadcast::Sender<SearchEvent>,
}

impl SearchController {
    pub fn new(source: Arc<dyn LectureSource>) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            source,
            state: Mutex::new(ControllerState::default()),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SearchEvent> {
        self.events.subscribe()
    }

    /// Outcome of the most recent search that was allowed to complete.
    pub async fn latest(&self) -> Option<SearchOutcome> {
        self.state
            .lock()
            .await
            .latest
            .as_ref()
            .map(|(_, outcome)| outcome.clone())
    }

    /// Settles `ticket` from committed state. `None` while it is still in flight.
    pub(crate) async fn resolve_ticket(
        &self,
        ticket: u64,
    ) -> Option<Result<SearchOutcome, ClientError>> {
        let state = self.state.lock().await;
        if state
            .inflight
            .as_ref()
            .is_some_and(|inflight| inflight.ticket == ticket)
        {
            return None;
        }
        match &state.latest {
            Some((done, outcome)) if *done == ticket => Some(Ok(outcome.clone())),
            _ => Some(Err(ClientError::Superseded { ticket })),
        }
    }

    /// Starts a search and returns its ticket. Invalid requests are rejected
    /// without touching the current in-flight search.
    pub async fn search(self: &Arc<Self>, request: SearchRequest) -> Result<u64, ClientError> {
        request.validate()?;

        let mut state = self.state.lock().await;
        state.generation += 1;
        let ticket = state.generation;

        if let Some(previous) = state.inflight.take() {
            previous.task.abort();
            info!(
                "search: ticket={} superseded by ticket={ticket}",
                previous.ticket
            );
            let _ = self.events.send(SearchEvent::Superseded {
                ticket: previous.ticket,
            });
        }

        let _ = self.events.send(SearchEvent::Started {
            ticket,
            request: request.clone(),
        });

        let controller = Arc::clone(self);
        let task = tokio::spawn(async move {
            let outcome = run_search(controller.source.as_ref(), &request).await;
            controller.commit(ticket, outcome).await;
        });
        state.inflight = Some(InflightSearch { ticket, task });

        Ok(ticket)
    }

    /// Starts a search and waits for its outcome.
    pub async fn search_and_wait(
        self: &Arc<Self>,
        request: SearchRequest,
    ) -> Result<SearchOutcome, ClientError> {
        let mut events = self.subscribe_events();
        let ticket = self.search(request).await?;

        loop {
            match events.recv().await {
                Ok(SearchEvent::Completed {
                    ticket: done,
                    outcome,
                }) if done == ticket => return Ok(outcome),
                Ok(SearchEvent::Superseded { ticket: done }) if done == ticket => {
                    return Err(ClientError::Superseded { ticket })
                }
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    debug!("search: ticket={ticket} lagged by {skipped} events");
                    if let Some(settled) = self.resolve_ticket(ticket).await {
                        return settled;
                    }
                }
                Err(RecvError::Closed) => return Err(ClientError::EventsClosed { ticket }),
            }
        }
    }

    async fn commit(&self, ticket: u64, outcome: SearchOutcome) {
        let mut state = self.state.lock().await;
        if state.generation != ticket {
            debug!("search: dropping stale outcome ticket={ticket}");
            return;
        }

        state.inflight = None;
        state.latest = Some((ticket, outcome.clone()));
        let _ = self
            .events
            .send(SearchEvent::Completed { ticket, outcome });
    }
}
