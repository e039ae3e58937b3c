use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use pretty_assertions::assert_eq;
use tokio::sync::oneshot;

use super::*;
use crate::error::Error;
use crate::models::{total_pages_for, NoteListPage, NoteTag};

/// In-memory notes service with a gate for holding deletes in flight.
#[derive(Default)]
struct FakeApi {
    notes: Mutex<Vec<Note>>,
    next_id: AtomicUsize,
    create_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    delete_gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl FakeApi {
    fn with_notes(count: usize) -> Self {
        let api = Self::default();
        for index in 0..count {
            api.insert(&format!("Note {index}"), "body", NoteTag::Todo);
        }
        api
    }

    fn insert(&self, title: &str, content: &str, tag: NoteTag) -> Note {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let note = Note {
            id: NoteId::new(format!("n{id}")),
            title: title.to_string(),
            content: content.to_string(),
            tag,
            created_at: None,
            updated_at: None,
        };
        self.notes.lock().unwrap().push(note.clone());
        note
    }
}

impl NotesApi for FakeApi {
    async fn list_notes(&self, page: u32, per_page: u32, search: &str) -> Result<NoteListPage> {
        let search = search.to_lowercase();
        let matching: Vec<Note> = self
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter(|note| search.is_empty() || note.title.to_lowercase().contains(&search))
            .cloned()
            .collect();
        let total_results = u32::try_from(matching.len()).unwrap();
        let skip = ((page - 1) * per_page) as usize;
        Ok(NoteListPage {
            notes: matching
                .into_iter()
                .skip(skip)
                .take(per_page as usize)
                .collect(),
            total_pages: total_pages_for(total_results, per_page),
            total_results,
        })
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if note.title == "reject me" {
            return Err(Error::Validation("title is not allowed".to_string()));
        }
        Ok(self.insert(&note.title, &note.content, note.tag))
    }

    async fn delete_note(&self, id: &NoteId) -> Result<Note> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.delete_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let mut notes = self.notes.lock().unwrap();
        let index = notes
            .iter()
            .position(|note| &note.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(notes.remove(index))
    }
}

fn groceries() -> NewNote {
    NewNote {
        title: "Groceries".to_string(),
        content: "Milk, eggs".to_string(),
        tag: NoteTag::Shopping,
    }
}

async fn wait_for_search(controller: &NotesController<FakeApi>, search: &str) -> NotesView {
    let mut receiver = controller.subscribe();
    let view = receiver
        .wait_for(|view| view.debounced_search == search)
        .await
        .unwrap()
        .clone();
    view
}

#[tokio::test]
async fn starts_on_first_page_without_search() {
    let controller = NotesController::new(FakeApi::default());
    let view = controller.view();

    assert_eq!(view.key(), (String::new(), 1));
    assert!(!view.modal_open);
    assert!(view.deleting.is_empty());
}

#[tokio::test]
async fn changing_search_resets_page() {
    let controller = NotesController::new(FakeApi::with_notes(40));
    for page in 1..=4 {
        controller.set_page(page);
        controller.set_search(format!("note {page}"));
        let view = controller.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.search, format!("note {page}"));
    }
}

#[tokio::test(start_paused = true)]
async fn rapid_search_edits_settle_on_final_text() {
    let controller = NotesController::new(FakeApi::default());

    controller.set_search("n");
    tokio::time::sleep(Duration::from_millis(100)).await;
    controller.set_search("no");
    tokio::time::sleep(Duration::from_millis(100)).await;
    controller.set_search("note 3");

    tokio::time::sleep(Duration::from_millis(499)).await;
    assert_eq!(controller.view().debounced_search, "");

    let view = wait_for_search(&controller, "note 3").await;
    assert_eq!(view.key(), ("note 3".to_string(), 1));
}

#[tokio::test(start_paused = true)]
async fn settled_search_returns_to_first_page() {
    let controller = NotesController::new(FakeApi::default());
    controller.set_search("meeting");
    wait_for_search(&controller, "meeting").await;

    controller.set_page(2);
    assert_eq!(controller.view().key(), ("meeting".to_string(), 2));

    controller.set_search("work");
    let view = wait_for_search(&controller, "work").await;
    assert_eq!(view.key(), ("work".to_string(), 1));
}

#[tokio::test]
async fn selecting_current_page_does_not_notify() {
    let controller = NotesController::new(FakeApi::default());
    let receiver = controller.subscribe();

    controller.set_page(1);
    assert!(!receiver.has_changed().unwrap());

    controller.set_page(2);
    assert!(receiver.has_changed().unwrap());
    assert_eq!(controller.view().page, 2);
}

#[tokio::test]
async fn page_zero_is_treated_as_first_page() {
    let controller = NotesController::new(FakeApi::default());
    controller.set_page(3);
    controller.set_page(0);
    assert_eq!(controller.view().page, 1);
}

#[tokio::test]
async fn shrinking_result_pulls_page_back_to_last() {
    let controller = NotesController::new(FakeApi::default());
    controller.set_page(3);

    controller.sync_total_pages(3);
    assert_eq!(controller.view().page, 3);

    controller.sync_total_pages(2);
    assert_eq!(controller.view().page, 2);

    controller.sync_total_pages(0);
    assert_eq!(controller.view().page, 1);
}

#[tokio::test]
async fn deleting_last_note_on_last_page_returns_to_previous_page() {
    let api = FakeApi::with_notes(13);
    let controller = NotesController::new(api);
    controller.set_page(2);

    let deleted = controller.delete_note(NoteId::from("n13")).await.unwrap();
    assert_eq!(deleted.map(|note| note.title), Some("Note 12".to_string()));

    let (search, page) = controller.view().key();
    let refetched = controller
        .api()
        .list_notes(page, crate::models::PER_PAGE, &search)
        .await
        .unwrap();
    assert!(refetched.is_empty());

    controller.sync_total_pages(refetched.total_pages);
    assert_eq!(controller.view().page, 1);
}

#[tokio::test]
async fn modal_toggles_notify_once() {
    let controller = NotesController::new(FakeApi::default());
    let mut receiver = controller.subscribe();

    controller.open_modal();
    assert!(receiver.has_changed().unwrap());
    receiver.borrow_and_update();

    controller.open_modal();
    assert!(!receiver.has_changed().unwrap());

    controller.close_modal();
    assert!(!controller.view().modal_open);
}

#[tokio::test]
async fn create_closes_modal() {
    let controller = NotesController::new(FakeApi::with_notes(2));
    controller.open_modal();
    assert!(controller.view().modal_open);

    let created = controller.create_note(groceries()).await.unwrap();

    assert!(!controller.view().modal_open);
    assert_eq!(created.title, "Groceries");
    assert_eq!(created.tag, NoteTag::Shopping);
    let listed = controller.api().list_notes(1, 12, "").await.unwrap();
    assert!(listed.notes.iter().any(|note| note.id == created.id));
}

#[tokio::test]
async fn rejected_create_keeps_modal_open() {
    let controller = NotesController::new(FakeApi::with_notes(1));
    controller.open_modal();

    let error = controller
        .create_note(NewNote {
            title: "reject me".to_string(),
            content: "x".to_string(),
            tag: NoteTag::Todo,
        })
        .await
        .unwrap_err();

    assert_eq!(error, Error::Validation("title is not allowed".to_string()));
    assert!(controller.view().modal_open);
    assert_eq!(controller.api().create_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn delete_returns_removed_note() {
    let controller = NotesController::new(FakeApi::with_notes(3));

    let deleted = controller.delete_note(NoteId::from("n2")).await.unwrap();
    assert_eq!(deleted.map(|note| note.title), Some("Note 1".to_string()));

    let remaining = controller.api().list_notes(1, 12, "").await.unwrap();
    let titles: Vec<_> = remaining.notes.iter().map(|note| note.title.as_str()).collect();
    assert_eq!(titles, vec!["Note 0", "Note 2"]);
    assert!(controller.view().deleting.is_empty());
}

#[tokio::test]
async fn duplicate_delete_is_ignored_while_in_flight() {
    let api = FakeApi::with_notes(2);
    let (release, gate) = oneshot::channel();
    *api.delete_gate.lock().unwrap() = Some(gate);
    let controller = NotesController::new(api);

    let id = NoteId::from("n1");
    let (first, second) = tokio::join!(controller.delete_note(id.clone()), async {
        tokio::task::yield_now().await;
        assert!(controller.view().is_deleting(&id));
        let second = controller.delete_note(id.clone()).await;
        let _ = release.send(());
        second
    });

    assert!(first.unwrap().is_some());
    assert_eq!(second.unwrap(), None);
    assert_eq!(controller.api().delete_calls.load(Ordering::SeqCst), 1);
    assert!(!controller.view().is_deleting(&id));
}

#[tokio::test]
async fn failed_delete_clears_in_flight_marker() {
    let controller = NotesController::new(FakeApi::with_notes(1));

    let error = controller
        .delete_note(NoteId::from("missing"))
        .await
        .unwrap_err();

    assert_eq!(error, Error::NotFound("missing".to_string()));
    assert!(controller.view().deleting.is_empty());
}
