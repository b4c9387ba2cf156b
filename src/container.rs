//! List Container
//!
//! Owns the client-side copy of the item list, the add-item draft and the
//! visible error message, and is the only component that talks to the
//! backing store.
//!
//! Every successful mutation is followed by a full reload that replaces the
//! list wholesale. The container never merges, diffs or flips `completed`
//! itself: the rendered list is always the last snapshot the store returned.
//!
//! Error handling differs per operation:
//! - load failures are logged only
//! - create failures (validation or request) set the visible message
//! - toggle failures are logged only, unless `surface_toggle_errors` is set

use crate::config::ClientConfig;
use crate::model::{Draft, DraftField, Item};
use crate::store::TodoStore;
use crate::view::ItemView;

/// Shown when a field is empty at submit time
pub const VALIDATION_MESSAGE: &str = "Both title and description are required";

/// Shown when the create request fails
pub const CREATE_FAILED_MESSAGE: &str = "Failed to add todo. Please try again.";

/// Shown when a toggle fails and toggle errors are surfaced
pub const TOGGLE_FAILED_MESSAGE: &str = "Failed to update todo. Please try again.";

/// Something a view asks the container to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A keystroke changed a draft field
    Input(DraftField, String),
    /// The add-item form was submitted
    Submit,
    /// The checkbox of an item was clicked
    Toggle(String),
    /// Re-read the list from the store
    Reload,
}

/// Where the add-item form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Nothing typed since the last successful submission
    #[default]
    Idle,
    /// The user has typed, or the last submission failed
    Editing,
    /// A create request is in flight
    Submitting,
}

/// Result of a form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was empty; no request was made
    Invalid,
    /// The store rejected the request or could not be reached
    Failed,
    /// The store accepted the item. The reload may still have failed.
    Created,
}

/// Owner of the list, the draft and the error message
pub struct ListContainer<S> {
    store: S,
    items: Vec<Item>,
    draft: Draft,
    error: String,
    phase: FormPhase,
    synced: bool,
    surface_toggle_errors: bool,
}

impl<S: TodoStore> ListContainer<S> {
    /// Create an empty container. Call [`ListContainer::mount`] to load.
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: Vec::new(),
            draft: Draft::default(),
            error: String::new(),
            phase: FormPhase::Idle,
            synced: false,
            surface_toggle_errors: false,
        }
    }

    /// Create a container with the error policy from `config`
    pub fn with_config(store: S, config: &ClientConfig) -> Self {
        let mut container = Self::new(store);
        container.surface_toggle_errors = config.surface_toggle_errors;
        container
    }

    /// Initial load, as done once when the page appears
    pub async fn mount(&mut self) {
        self.load().await;
    }

    /// Replace the list with the store's current snapshot.
    ///
    /// On failure the previous list is kept and nothing is shown to the user.
    /// Returns whether the list was replaced.
    pub async fn load(&mut self) -> bool {
        self.synced = match self.store.fetch_all().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Loaded items");
                self.items = items;
                true
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    rejected = e.is_rejection(),
                    "Failed to fetch items, keeping previous list"
                );
                false
            }
        };
        self.synced
    }

    /// Update one draft field and clear the error message
    pub fn input_change(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.error.clear();
        self.phase = FormPhase::Editing;
    }

    /// Submit the draft.
    ///
    /// Empty fields set the validation message without a request. A failed
    /// request keeps the draft so the user can retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.draft.is_complete() {
            self.error = VALIDATION_MESSAGE.to_string();
            self.phase = FormPhase::Editing;
            return SubmitOutcome::Invalid;
        }

        self.phase = FormPhase::Submitting;
        let payload = self.draft.to_new_item();

        match self.store.create(&payload).await {
            Ok(()) => {
                self.draft.clear();
                self.error.clear();
                self.phase = FormPhase::Idle;
                self.load().await;
                SubmitOutcome::Created
            }
            Err(e) => {
                tracing::error!(error = %e, title = %payload.title, "Failed to add todo");
                self.error = CREATE_FAILED_MESSAGE.to_string();
                self.phase = FormPhase::Editing;
                SubmitOutcome::Failed
            }
        }
    }

    /// Ask the store to flip `id`, then reload.
    ///
    /// The local `completed` flag only changes through that reload.
    /// Returns whether the store accepted the toggle. That says nothing about
    /// the reload; check [`ListContainer::is_synced`] before reporting state.
    pub async fn toggle(&mut self, id: &str) -> bool {
        match self.store.toggle(id).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(e) => {
                tracing::error!(
                    item_id = %id,
                    error = %e,
                    rejected = e.is_rejection(),
                    "Failed to update todo"
                );
                if self.surface_toggle_errors {
                    self.error = TOGGLE_FAILED_MESSAGE.to_string();
                }
                false
            }
        }
    }

    /// Perform the effect an intent asks for
    pub async fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Input(field, value) => self.input_change(field, value),
            Intent::Submit => {
                self.submit().await;
            }
            Intent::Toggle(id) => {
                self.toggle(&id).await;
            }
            Intent::Reload => {
                self.load().await;
            }
        }
    }

    /// One item view per item, in store order, each bound to its id
    pub fn render(&self) -> Vec<ItemView> {
        self.items
            .iter()
            .map(|item| {
                let id = item.id.clone();
                ItemView::new(
                    &item.title,
                    &item.description,
                    item.completed,
                    move || Intent::Toggle(id.clone()),
                )
            })
            .collect()
    }

    /// Current snapshot
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Unsubmitted form state
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Visible error message, empty when there is none
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Lifecycle position of the add-item form
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether the most recent load replaced the list.
    ///
    /// False before the first load and after any failed one, in which case
    /// [`ListContainer::items`] may predate the last accepted mutation.
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewItem;
    use crate::store::{StoreError, StoreResult};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Request as the store saw it
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        FetchAll,
        Create(NewItem),
        Toggle(String),
    }

    /// In-process store that records calls and can be told to fail
    #[derive(Default)]
    struct RecordingStore {
        items: Mutex<Vec<Item>>,
        calls: Mutex<Vec<Call>>,
        fail_fetch: Mutex<bool>,
        fail_create: Mutex<bool>,
        fail_toggle: Mutex<bool>,
    }

    impl RecordingStore {
        fn with_items(items: Vec<Item>) -> Self {
            let store = Self::default();
            *store.items.lock().unwrap() = items;
            store
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn set_fail_fetch(&self, fail: bool) {
            *self.fail_fetch.lock().unwrap() = fail;
        }

        fn rejected() -> StoreError {
            StoreError::Status {
                status: 500,
                message: "Internal Server Error".to_string(),
            }
        }
    }

    #[async_trait]
    impl TodoStore for RecordingStore {
        async fn fetch_all(&self) -> StoreResult<Vec<Item>> {
            self.calls.lock().unwrap().push(Call::FetchAll);
            if *self.fail_fetch.lock().unwrap() {
                return Err(Self::rejected());
            }
            Ok(self.items.lock().unwrap().clone())
        }

        async fn create(&self, item: &NewItem) -> StoreResult<()> {
            self.calls.lock().unwrap().push(Call::Create(item.clone()));
            if *self.fail_create.lock().unwrap() {
                return Err(StoreError::Unavailable("connection refused".to_string()));
            }
            let mut items = self.items.lock().unwrap();
            let id = (items.len() + 1).to_string();
            items.push(Item {
                id,
                title: item.title.clone(),
                description: item.description.clone(),
                completed: false,
            });
            Ok(())
        }

        async fn toggle(&self, id: &str) -> StoreResult<()> {
            self.calls.lock().unwrap().push(Call::Toggle(id.to_string()));
            if *self.fail_toggle.lock().unwrap() {
                return Err(Self::rejected());
            }
            let mut items = self.items.lock().unwrap();
            match items.iter_mut().find(|i| i.id == id) {
                Some(item) => {
                    item.completed = !item.completed;
                    Ok(())
                }
                None => Err(StoreError::Status {
                    status: 404,
                    message: "not found".to_string(),
                }),
            }
        }
    }

    fn item(id: &str, title: &str, description: &str, completed: bool) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            completed,
        }
    }

    #[tokio::test]
    async fn test_mount_loads_items() {
        let store = RecordingStore::with_items(vec![item("1", "A", "B", false)]);
        let mut container = ListContainer::new(store);

        container.mount().await;

        assert_eq!(container.items().len(), 1);
        assert_eq!(container.store().calls(), vec![Call::FetchAll]);
        assert_eq!(container.phase(), FormPhase::Idle);
    }

    #[tokio::test]
    async fn test_first_load_failure_leaves_list_empty() {
        let store = RecordingStore::with_items(vec![item("1", "A", "B", false)]);
        store.set_fail_fetch(true);
        let mut container = ListContainer::new(store);

        container.mount().await;

        assert!(container.items().is_empty());
        assert_eq!(container.error(), "");
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_list() {
        let store = RecordingStore::with_items(vec![item("1", "A", "B", false)]);
        let mut container = ListContainer::new(store);
        container.mount().await;
        let before = container.items().to_vec();

        container.store().set_fail_fetch(true);
        *container.store().items.lock().unwrap() = vec![item("2", "C", "D", true)];

        assert!(!container.load().await);
        assert_eq!(container.items(), before.as_slice());
        assert_eq!(container.error(), "");
    }

    #[tokio::test]
    async fn test_load_replaces_wholesale() {
        let store = RecordingStore::with_items(vec![
            item("1", "A", "B", false),
            item("2", "C", "D", false),
        ]);
        let mut container = ListContainer::new(store);
        container.mount().await;

        // Store dropped item 1 and reordered; nothing of the old list survives
        *container.store().items.lock().unwrap() = vec![item("3", "E", "F", true)];
        assert!(container.load().await);

        assert_eq!(container.items(), &[item("3", "E", "F", true)]);
    }

    #[tokio::test]
    async fn test_submit_empty_title_makes_no_request() {
        let mut container = ListContainer::new(RecordingStore::default());
        container.input_change(DraftField::Description, "only a description");

        let outcome = container.submit().await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(container.error(), VALIDATION_MESSAGE);
        assert!(container.store().calls().is_empty());
        assert_eq!(container.draft().description, "only a description");
    }

    #[tokio::test]
    async fn test_submit_empty_description_makes_no_request() {
        let mut container = ListContainer::new(RecordingStore::default());
        container.input_change(DraftField::Title, "only a title");

        assert_eq!(container.submit().await, SubmitOutcome::Invalid);
        assert_eq!(container.error(), VALIDATION_MESSAGE);
        assert!(container.store().calls().is_empty());
    }

    #[tokio::test]
    async fn test_submit_success_clears_draft_and_reloads() {
        let mut container = ListContainer::new(RecordingStore::default());
        container.mount().await;

        // A failed attempt leaves the banner up
        container.submit().await;
        assert_eq!(container.error(), VALIDATION_MESSAGE);

        container.input_change(DraftField::Title, "Buy milk");
        container.input_change(DraftField::Description, "2 litres");
        let outcome = container.submit().await;

        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(container.error(), "");
        assert_eq!(container.draft(), &Draft::default());
        assert_eq!(container.phase(), FormPhase::Idle);
        assert_eq!(container.items().len(), 1);
        assert_eq!(container.items()[0].title, "Buy milk");
        assert!(!container.items()[0].completed);

        assert_eq!(
            container.store().calls(),
            vec![
                Call::FetchAll,
                Call::Create(NewItem {
                    title: "Buy milk".to_string(),
                    description: "2 litres".to_string(),
                }),
                Call::FetchAll,
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_draft() {
        let store = RecordingStore::default();
        *store.fail_create.lock().unwrap() = true;
        let mut container = ListContainer::new(store);
        container.input_change(DraftField::Title, "Buy milk");
        container.input_change(DraftField::Description, "2 litres");

        let outcome = container.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(container.error(), CREATE_FAILED_MESSAGE);
        assert_eq!(container.draft().title, "Buy milk");
        assert_eq!(container.draft().description, "2 litres");
        assert_eq!(container.phase(), FormPhase::Editing);
        // no reload after a failed create
        assert!(!container.store().calls().contains(&Call::FetchAll));
    }

    #[tokio::test]
    async fn test_input_clears_error() {
        let mut container = ListContainer::new(RecordingStore::default());
        container.submit().await;
        assert_eq!(container.error(), VALIDATION_MESSAGE);

        container.input_change(DraftField::Title, "B");

        assert_eq!(container.error(), "");
        assert_eq!(container.phase(), FormPhase::Editing);
        assert_eq!(container.draft().title, "B");
    }

    #[tokio::test]
    async fn test_toggle_sends_id_and_reloads() {
        let store = RecordingStore::with_items(vec![item("42", "A", "B", false)]);
        let mut container = ListContainer::new(store);
        container.mount().await;

        assert!(container.toggle("42").await);

        let toggles: Vec<Call> = container
            .store()
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Toggle(_)))
            .collect();
        assert_eq!(toggles, vec![Call::Toggle("42".to_string())]);
        assert_eq!(
            container.store().calls().last(),
            Some(&Call::FetchAll)
        );
        assert!(container.items()[0].completed);
    }

    #[tokio::test]
    async fn test_toggle_accepted_but_reload_failed_is_not_synced() {
        let store = RecordingStore::with_items(vec![item("42", "A", "B", false)]);
        let mut container = ListContainer::new(store);
        container.mount().await;
        assert!(container.is_synced());

        container.store().set_fail_fetch(true);

        assert!(container.toggle("42").await);
        assert!(!container.is_synced());
        // store flipped it, but the snapshot still shows the old flag
        assert!(container.store().items.lock().unwrap()[0].completed);
        assert!(!container.items()[0].completed);
        assert_eq!(container.error(), "");

        container.store().set_fail_fetch(false);
        assert!(container.load().await);
        assert!(container.is_synced());
        assert!(container.items()[0].completed);
    }

    #[tokio::test]
    async fn test_created_but_reload_failed_is_not_synced() {
        let store = RecordingStore::with_items(vec![item("1", "A", "B", false)]);
        let mut container = ListContainer::new(store);
        container.mount().await;
        container.store().set_fail_fetch(true);

        container.input_change(DraftField::Title, "C");
        container.input_change(DraftField::Description, "D");

        assert_eq!(container.submit().await, SubmitOutcome::Created);
        assert!(!container.is_synced());
        assert_eq!(container.items().len(), 1);
        assert_eq!(container.draft(), &Draft::default());
    }

    #[tokio::test]
    async fn test_toggle_never_flips_locally_without_reload() {
        let store = RecordingStore::with_items(vec![item("42", "A", "B", false)]);
        let mut container = ListContainer::new(store);
        container.mount().await;

        // Store accepts the toggle but the follow-up reload fails
        container.store().set_fail_fetch(true);
        assert!(container.toggle("42").await);
        assert!(!container.items()[0].completed);
    }

    #[tokio::test]
    async fn test_toggle_failure_is_silent_by_default() {
        let store = RecordingStore::with_items(vec![item("42", "A", "B", false)]);
        *store.fail_toggle.lock().unwrap() = true;
        let mut container = ListContainer::new(store);
        container.mount().await;

        assert!(!container.toggle("42").await);

        assert_eq!(container.error(), "");
        assert!(!container.items()[0].completed);
        // no reload after a failed toggle
        assert_eq!(
            container.store().calls(),
            vec![Call::FetchAll, Call::Toggle("42".to_string())]
        );
    }

    #[tokio::test]
    async fn test_toggle_failure_surfaced_when_configured() {
        let config = ClientConfig {
            surface_toggle_errors: true,
            ..Default::default()
        };
        let mut container = ListContainer::with_config(RecordingStore::default(), &config);

        assert!(!container.toggle("missing").await);
        assert_eq!(container.error(), TOGGLE_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_rendered_view_dispatches_bound_toggle() {
        let store = RecordingStore::with_items(vec![item("1", "A", "B", false)]);
        let mut container = ListContainer::new(store);
        container.mount().await;

        let views = container.render();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].title(), "A");
        assert_eq!(views[0].description(), "B");
        assert!(!views[0].completed());

        let intent = views[0].toggle();
        assert_eq!(intent, Intent::Toggle("1".to_string()));

        container.dispatch(intent).await;
        assert!(container.store().calls().contains(&Call::Toggle("1".to_string())));
        assert!(container.render()[0].completed());
    }

    #[tokio::test]
    async fn test_dispatch_input_and_submit() {
        let mut container = ListContainer::new(RecordingStore::default());

        container
            .dispatch(Intent::Input(DraftField::Title, "T".to_string()))
            .await;
        container
            .dispatch(Intent::Input(DraftField::Description, "D".to_string()))
            .await;
        container.dispatch(Intent::Submit).await;

        assert_eq!(container.items().len(), 1);
        assert_eq!(container.draft(), &Draft::default());

        container.dispatch(Intent::Reload).await;
        assert_eq!(container.items().len(), 1);
    }
}
