//! Effect executor bridging the pure controller to the runtime.
//!
//! # Responsibility
//! - Apply events to `AppState` and execute the effects they return.
//! - Turn resolved repository calls and expired timers back into events.
//! - Surface requests the frontend must answer (overwrite confirmation).
//!
//! # Invariants
//! - Single-threaded: events are processed strictly in arrival order.
//! - `settle` returns only when no spawned repository call is outstanding;
//!   notification timers do not hold it open.
//! - Timers are never cancelled; a stale expiry is invalidated by the
//!   controller's generation check.

use crate::controller::{AppState, Effect, Event, RemoteFailure};
use crate::model::{Contact, ContactDraft, ContactId, NOTIFICATION_CLEAR_DELAY};
use crate::repo::{ContactRepository, RepoError};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A request the driver cannot satisfy itself and hands to the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiRequest {
    /// Ask whether the named contact's number should be replaced. The
    /// answer must come back as `Event::OverwriteResolved`.
    ConfirmOverwrite { name: String },
}

impl UiRequest {
    /// Prompt text to show the user.
    pub fn prompt(&self) -> String {
        match self {
            Self::ConfirmOverwrite { name } => format!(
                "{name} is already added to the phonebook, \
                 replace the old number with a new one?"
            ),
        }
    }
}

/// Owns the controller state, the repository, and the event queue.
pub struct Driver<R> {
    state: AppState,
    repo: Arc<R>,
    events_tx: UnboundedSender<Event>,
    events_rx: UnboundedReceiver<Event>,
    ui_tx: UnboundedSender<UiRequest>,
    in_flight: usize,
}

impl<R> Driver<R>
where
    R: ContactRepository + Send + Sync + 'static,
{
    /// Builds a driver around `repo`. The returned receiver yields the
    /// requests the frontend must answer.
    pub fn new(repo: R) -> (Self, UnboundedReceiver<UiRequest>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let driver = Self {
            state: AppState::new(),
            repo: Arc::new(repo),
            events_tx,
            events_rx,
            ui_tx,
            in_flight: 0,
        };
        (driver, ui_rx)
    }

    /// Read-only snapshot of the controller state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies `event` and executes the effects it returns.
    pub fn dispatch(&mut self, event: Event) {
        self.process(event);
    }

    /// Processes queued events until the queue is empty and no repository
    /// call is in flight.
    ///
    /// # Contract
    /// - Pending notification timers are left running; their expiry events
    ///   are picked up by a later `settle` or `pump`.
    pub async fn settle(&mut self) {
        loop {
            while let Ok(event) = self.events_rx.try_recv() {
                self.process(event);
            }
            if self.in_flight == 0 {
                return;
            }
            match self.events_rx.recv().await {
                Some(event) => self.process(event),
                None => return,
            }
        }
    }

    /// Awaits the next queued event and processes it. Used by interactive
    /// frontends to react to completions and timer expiries as they land.
    pub async fn pump(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.process(event);
        }
    }

    fn process(&mut self, event: Event) {
        if event.is_remote_completion() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        let effects = self.state.apply(event);
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchContacts => self.spawn_fetch(),
            Effect::CreateContact { draft } => self.spawn_create(draft),
            Effect::UpdateContact { id, contact } => self.spawn_update(id, contact),
            Effect::RemoveContact { id, name } => self.spawn_remove(id, name),
            Effect::ConfirmOverwrite { name } => {
                let _ = self.ui_tx.send(UiRequest::ConfirmOverwrite { name });
            }
            Effect::ScheduleClear { generation } => self.spawn_clear_timer(generation),
        }
    }

    fn spawn_fetch(&mut self) {
        self.in_flight += 1;
        let repo = Arc::clone(&self.repo);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            log::info!("event=fetch_contacts module=driver status=start");
            let started = Instant::now();
            let result = repo.fetch_all().await;
            log_outcome("fetch_contacts", started, result.as_ref().err());
            let _ = tx.send(Event::FetchCompleted {
                result: result.map_err(RemoteFailure::from),
            });
        });
    }

    fn spawn_create(&mut self, draft: ContactDraft) {
        self.in_flight += 1;
        let repo = Arc::clone(&self.repo);
        let tx = self.events_tx.clone();
        let name = draft.name.clone();
        tokio::spawn(async move {
            log::info!("event=create_contact module=driver status=start");
            let started = Instant::now();
            let result = repo.create(&draft).await;
            log_outcome("create_contact", started, result.as_ref().err());
            let _ = tx.send(Event::CreateCompleted {
                name,
                result: result.map_err(RemoteFailure::from),
            });
        });
    }

    fn spawn_update(&mut self, id: ContactId, contact: Contact) {
        self.in_flight += 1;
        let repo = Arc::clone(&self.repo);
        let tx = self.events_tx.clone();
        let name = contact.name.clone();
        tokio::spawn(async move {
            log::info!("event=update_contact module=driver status=start");
            let started = Instant::now();
            let result = repo.update(&id, &contact).await;
            log_outcome("update_contact", started, result.as_ref().err());
            let _ = tx.send(Event::UpdateCompleted {
                id,
                name,
                result: result.map_err(RemoteFailure::from),
            });
        });
    }

    fn spawn_remove(&mut self, id: ContactId, name: String) {
        self.in_flight += 1;
        let repo = Arc::clone(&self.repo);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            log::info!("event=remove_contact module=driver status=start");
            let started = Instant::now();
            let result = repo.remove(&id).await;
            log_outcome("remove_contact", started, result.as_ref().err());
            let _ = tx.send(Event::RemoveCompleted {
                id,
                name,
                result: result.map_err(RemoteFailure::from),
            });
        });
    }

    fn spawn_clear_timer(&self, generation: u64) {
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(NOTIFICATION_CLEAR_DELAY).await;
            let _ = tx.send(Event::NotificationExpired { generation });
        });
    }
}

fn log_outcome(event: &str, started: Instant, error: Option<&RepoError>) {
    let duration_ms = started.elapsed().as_millis();
    match error {
        None => log::info!("event={event} module=driver status=ok duration_ms={duration_ms}"),
        Some(err) => log::error!(
            "event={event} module=driver status=error duration_ms={duration_ms} error={err}"
        ),
    }
}
