//! Async fetch worker.
//!
//! The worker task owns the catalog client and performs HTTP fetches off
//! the UI thread. The UI holds a [`Requester`] and submits [`WorkerTask`]s
//! over an unbounded channel; completions travel back over a std mpsc
//! channel that the event loop drains on every tick. Requests are handled
//! one at a time, which the loading guard upstream already guarantees.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::api::{CatalogClient, Product};
use crate::config::{INITIAL_PAGES, ITEMS_PER_PAGE};
use crate::error::Result;
use crate::window::FetchDirection;

/// What a fetch request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// The one-shot startup load that replaces the window wholesale
    Initial,
    /// A directional page fetch driven by scrolling
    Paginate(FetchDirection),
}

/// A single page fetch to perform.
#[derive(Debug, Clone, Copy)]
pub struct FetchRequest {
    /// What the completion should do with the page
    pub kind: FetchKind,
    /// Offset into the remote collection
    pub offset: usize,
    /// Page size to request
    pub limit: usize,
}

impl FetchRequest {
    /// The startup load: three pages at offset zero.
    pub fn initial() -> Self {
        Self {
            kind: FetchKind::Initial,
            offset: 0,
            limit: INITIAL_PAGES * ITEMS_PER_PAGE,
        }
    }

    /// A directional page fetch at the offset the window computed.
    pub fn paginate(direction: FetchDirection, offset: usize) -> Self {
        Self {
            kind: FetchKind::Paginate(direction),
            offset,
            limit: ITEMS_PER_PAGE,
        }
    }
}

/// Outcome of a fetch, delivered back to the UI thread.
#[derive(Debug)]
pub struct FetchComplete {
    /// The request this answers
    pub request: FetchRequest,
    /// The fetched page, or the error to log
    pub result: Result<Vec<Product>>,
}

/// Tasks the worker knows how to run.
#[derive(Debug)]
pub enum WorkerTask {
    /// Fetch one page and report completion
    Fetch(FetchRequest),
}

/// Sending handle for submitting work from the UI thread.
pub struct Requester {
    tx: UnboundedSender<WorkerTask>,
}

impl Requester {
    /// Submit a fetch. Dropped silently if the worker is gone, which only
    /// happens during teardown.
    pub fn fetch(&self, request: FetchRequest) {
        let _ = self.tx.send(WorkerTask::Fetch(request));
    }
}

/// The worker task: owns the client, runs tasks in arrival order.
pub struct CatalogWorker {
    client: CatalogClient,
    events: Sender<FetchComplete>,
}

impl CatalogWorker {
    /// Spawn the worker onto the current runtime and return its handle.
    pub async fn spawn(client: CatalogClient, events: Sender<FetchComplete>) -> Requester {
        let (tx, rx) = unbounded_channel();

        let worker = CatalogWorker { client, events };
        tokio::spawn(async move {
            worker.work(rx).await;
        });

        Requester { tx }
    }

    async fn work(self, mut rx: UnboundedReceiver<WorkerTask>) {
        while let Some(task) = rx.recv().await {
            self.run(task).await;
        }
    }

    async fn run(&self, task: WorkerTask) {
        match task {
            WorkerTask::Fetch(request) => {
                debug!(offset = request.offset, limit = request.limit, "fetching catalog page");
                let result = self.client.fetch_page(request.offset, request.limit).await;

                // The UI may already be gone during shutdown; the page has
                // nowhere to go then and is dropped.
                let _ = self.events.send(FetchComplete { request, result });
            },
        }
    }
}
