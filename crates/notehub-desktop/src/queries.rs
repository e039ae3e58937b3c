//! Reactive list queries using dioxus-query

use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use dioxus_query::prelude::*;

use notehub_core::controller::ListKey;
use notehub_core::models::PER_PAGE;
use notehub_core::{Error, NoteListPage, NotesApi, NotesClient};

/// How long a page nobody renders stays cached before it is dropped.
pub const LIST_CLEAN_TIME: Duration = Duration::from_secs(5 * 60);

/// Query capability for one page of notes, keyed by (debounced search, page)
#[derive(Clone)]
pub struct NotesQuery(pub Arc<NotesClient>);

impl PartialEq for NotesQuery {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for NotesQuery {}

impl Hash for NotesQuery {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl QueryCapability for NotesQuery {
    type Ok = NoteListPage;
    type Err = Error;
    type Keys = ListKey;

    async fn run(&self, (search, page): &Self::Keys) -> Result<Self::Ok, Self::Err> {
        tracing::debug!(page = *page, search = %search, "NotesQuery: fetching notes");
        self.0.list_notes(*page, PER_PAGE, search).await
    }
}

/// Invalidate every cached notes page (call after creating or deleting notes).
///
/// All (search, page) entries match, so `keys` only names the page on screen.
pub async fn invalidate_notes_query(keys: ListKey) {
    tracing::debug!("Invalidating notes query");
    QueriesStorage::<NotesQuery>::invalidate_matching(keys).await;
}

/// Hook for the list query of `keys`
pub fn use_notes_query(client: Arc<NotesClient>, keys: ListKey) -> UseQuery<NotesQuery> {
    use_query(Query::new(keys, NotesQuery(client)).clean_time(LIST_CLEAN_TIME))
}

/// Latest result for the query, `None` while the first fetch is outstanding.
pub fn latest_result(query: &UseQuery<NotesQuery>) -> Option<Result<NoteListPage, Error>> {
    let reader = query.read();
    let state = reader.state();
    match &*state {
        QueryStateData::Pending => None,
        QueryStateData::Loading { res, .. } => res.clone(),
        QueryStateData::Settled { res, .. } => Some(res.clone()),
    }
}
