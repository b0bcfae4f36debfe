//! View state for a collection table.
//!
//! The table screen is a small explicit state machine: the listing inputs
//! (search text, status filter, page) plus a mode that is idle, editing one
//! frame, or showing a one-shot message. Events move the state forward and
//! [`render`] turns a state into a table page from a freshly read snapshot.
//! Nothing here reruns implicitly; callers render after every event.

use crate::api::FrameStore;
use crate::error::ApiError;
use crate::frame::{Collection, Frame, FrameId, Status, StatusFilter};
use crate::query::{filter_by_status, paginate, search, Page};
use crate::store::FrameBackend;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Editing(FrameId),
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub collection: Collection,
    pub search: String,
    pub status_filter: StatusFilter,
    pub page: usize,
    pub page_size: usize,
    pub mode: Mode,
}

/// Discrete user-level events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Search(String),
    FilterStatus(StatusFilter),
    GoToPage(usize),
    StartEdit(FrameId),
    CancelEdit,
    Added(String),
    AddRejected(String),
    Saved,
    Deleted(String),
    Failed(String),
    DismissMessage,
}

/// Mutations a user can request from the table screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Add { name: String, status: Status },
    Save { id: FrameId, name: String, status: Status },
    Delete { id: FrameId, name: String },
}

impl ViewState {
    pub fn new(collection: Collection, page_size: usize) -> Self {
        Self {
            collection,
            search: String::new(),
            status_filter: StatusFilter::All,
            page: 1,
            page_size,
            mode: Mode::Idle,
        }
    }

    pub fn apply(mut self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::Search(query) => {
                self.search = query;
                self.page = 1;
            }
            ViewEvent::FilterStatus(filter) => {
                self.status_filter = filter;
                self.page = 1;
            }
            ViewEvent::GoToPage(page) => self.page = page,
            ViewEvent::StartEdit(id) => self.mode = Mode::Editing(id),
            ViewEvent::CancelEdit | ViewEvent::DismissMessage => self.mode = Mode::Idle,
            ViewEvent::Added(name) => self.mode = Mode::Message(format!("Frame '{}' added.", name)),
            ViewEvent::AddRejected(reason) | ViewEvent::Failed(reason) => {
                self.mode = Mode::Message(reason)
            }
            ViewEvent::Saved => self.mode = Mode::Message("Updated successfully.".to_string()),
            ViewEvent::Deleted(name) => self.mode = Mode::Message(format!("Deleted: {}", name)),
        }
        self
    }

    pub fn message(&self) -> Option<&str> {
        match &self.mode {
            Mode::Message(text) => Some(text),
            _ => None,
        }
    }
}

/// What the table screen shows for one render.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub collection: Collection,
    pub label: &'static str,
    pub page: Page,
    pub message: Option<String>,
    pub editing: Option<Frame>,
    pub skipped: usize,
}

/// Render `state` against a fresh snapshot.
///
/// Returns the view and the follow-up state: the page number is clamped,
/// a shown message is consumed, and an edit whose frame has vanished is
/// dropped.
pub fn render<B: FrameBackend>(
    store: &FrameStore<B>,
    state: &ViewState,
) -> Result<(TableView, ViewState), ApiError> {
    let snapshot = store.list(state.collection)?;
    let skipped = snapshot.skipped;

    let editing = match state.mode {
        Mode::Editing(id) => snapshot.frames.iter().find(|f| f.id == id).cloned(),
        _ => None,
    };

    let rows = filter_by_status(search(snapshot.frames, &state.search), state.status_filter);
    let page = paginate(&rows, state.page_size, state.page);

    let mut next = state.clone();
    next.page = page.page;
    next.mode = match &state.mode {
        Mode::Editing(_) if editing.is_some() => state.mode.clone(),
        _ => Mode::Idle,
    };

    let view = TableView {
        collection: state.collection,
        label: state.collection.label(),
        page,
        message: state.message().map(str::to_string),
        editing,
        skipped,
    };
    Ok((view, next))
}

/// Run a mutation and fold its outcome into the next state. Store errors
/// become messages; nothing is retried.
pub fn perform<B: FrameBackend>(
    store: &FrameStore<B>,
    state: ViewState,
    action: UserAction,
) -> ViewState {
    let collection = state.collection;
    let event = match action {
        UserAction::Add { name, status } => match store.add(collection, &name, status) {
            Ok(frame) => ViewEvent::Added(frame.name),
            Err(e @ (ApiError::DuplicateName(_) | ApiError::EmptyName)) => {
                ViewEvent::AddRejected(e.to_string())
            }
            Err(e) => ViewEvent::Failed(e.to_string()),
        },
        UserAction::Save { id, name, status } => match store.update(collection, id, &name, status) {
            Ok(()) => ViewEvent::Saved,
            Err(e) => ViewEvent::Failed(e.to_string()),
        },
        UserAction::Delete { id, name } => match store.delete(collection, id) {
            Ok(()) => ViewEvent::Deleted(name),
            Err(e) => ViewEvent::Failed(e.to_string()),
        },
    };
    state.apply(event)
}
