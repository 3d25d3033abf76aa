//! End-to-end tests of the media ingestion pipeline and backend sequencing.

use std::io::Cursor;
use std::sync::Mutex;

use pretty_assertions::assert_eq;

use loam_core::capture::{route_drop, route_paste, DropAction, MediaPayload, PasteAction};
use loam_core::editor::{apply, Command, EditorAction, EditorState};
use loam_core::media::encode_image;
use loam_core::splice::SelectionRange;
use loam_core::{Error, Note, NoteBackend, NoteId, QuerySequencer, Result};

struct Payload {
    content_type: &'static str,
    bytes: Vec<u8>,
}

impl MediaPayload for Payload {
    fn content_type(&self) -> &str {
        self.content_type
    }
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::ImageBuffer::<image::Rgba<u8>, Vec<u8>>::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 64, 255])
    });
    let mut cursor = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .unwrap();
    cursor.into_inner()
}

#[test]
fn pasted_screenshot_lands_in_the_buffer_at_the_cursor() {
    // A clipboard carrying text first and an image second; the image wins.
    let action = route_paste(vec![
        Payload {
            content_type: "text/plain",
            bytes: b"ignored".to_vec(),
        },
        Payload {
            content_type: "image/png",
            bytes: png_bytes(1600, 900),
        },
    ]);

    let PasteAction::EncodeAndInsert(payload) = action else {
        panic!("image paste must be captured");
    };

    let encoded = encode_image(&payload.bytes).unwrap();
    assert_eq!((encoded.width, encoded.height), (800, 450));

    let state = EditorState {
        content: "Before after".to_string(),
        ..EditorState::default()
    };
    let (next, command) = apply(
        state,
        EditorAction::InsertFragment {
            selection: SelectionRange::caret(7),
            fragment: encoded.fragment(),
        },
    );

    assert!(next.content.starts_with("Before \n![Image](data:image/jpeg;base64,"));
    assert!(next.content.ends_with(")\nafter"));
    assert_eq!(command, Some(Command::MoveCaret(7 + encoded.fragment().len())));
}

#[test]
fn only_the_first_dropped_file_is_encoded() {
    let action = route_drop(vec![
        Payload {
            content_type: "image/png",
            bytes: png_bytes(4, 4),
        },
        Payload {
            content_type: "image/jpeg",
            bytes: png_bytes(1000, 1000),
        },
    ]);

    let DropAction::EncodeAndInsert(payload) = action else {
        panic!("first dropped image must be captured");
    };
    let encoded = encode_image(&payload.bytes).unwrap();

    // Dimensions prove the 4x4 file was chosen, not the 1000x1000 one.
    assert_eq!((encoded.width, encoded.height), (4, 4));
}

#[test]
fn undecodable_paste_is_dropped_without_touching_the_buffer() {
    let action = route_paste(vec![Payload {
        content_type: "image/png",
        bytes: b"corrupted".to_vec(),
    }]);

    let PasteAction::EncodeAndInsert(payload) = action else {
        panic!("declared image type must be captured");
    };

    // Decode failure: the operation aborts, nothing is inserted.
    assert!(matches!(encode_image(&payload.bytes), Err(Error::Decode(_))));
}

/// In-memory backend recording calls, in lieu of the real HTTP service.
#[derive(Default)]
struct MemoryBackend {
    notes: Mutex<Vec<Note>>,
    next_id: Mutex<u64>,
}

impl NoteBackend for MemoryBackend {
    async fn fetch_all(&self) -> Result<Vec<Note>> {
        Ok(self.notes.lock().unwrap().clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<Note>> {
        let query = query.to_lowercase();
        Ok(self
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&query)
                    || note.content.to_lowercase().contains(&query)
            })
            .cloned()
            .collect())
    }

    async fn create(&self, title: &str, content: &str, tags: &[String]) -> Result<Note> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let note = Note {
            id: NoteId::new(format!("mem-{next_id}")),
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.to_vec(),
        };
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn update(&self, id: &NoteId, title: &str, content: &str, tags: &[String]) -> Result<()> {
        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .iter_mut()
            .find(|note| &note.id == id)
            .ok_or_else(|| Error::Backend(format!("No such note: {id}")))?;
        note.title = title.to_string();
        note.content = content.to_string();
        note.tags = tags.to_vec();
        Ok(())
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|note| &note.id != id);
        if notes.len() == before {
            return Err(Error::Backend(format!("No such note: {id}")));
        }
        Ok(())
    }
}

#[tokio::test]
async fn save_dispatch_round_trips_through_the_backend() {
    let backend = MemoryBackend::default();

    let mut state = EditorState::default();
    for action in [
        EditorAction::SetTitle("Ownership".to_string()),
        EditorAction::SetContent("Moves by default".to_string()),
        EditorAction::SetTagsRaw("rust, semantics".to_string()),
    ] {
        (state, _) = apply(state, action);
    }

    let (state, command) = apply(state, EditorAction::Save);
    let Some(Command::Create {
        title,
        content,
        tags,
    }) = command
    else {
        panic!("save must dispatch a create");
    };

    let created = backend.create(&title, &content, &tags).await.unwrap();
    assert_eq!(created.title, "Ownership");
    assert_eq!(created.tags, vec!["rust", "semantics"]);

    // Re-fetch after the mutation, as the client always does.
    let notes = backend.fetch_all().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert!(state.title.is_empty());
}

#[tokio::test]
async fn stale_search_results_never_overwrite_fresher_ones() {
    let backend = MemoryBackend::default();
    backend.create("Rust notes", "borrowing", &[]).await.unwrap();
    backend.create("Go notes", "channels", &[]).await.unwrap();

    let mut sequencer = QuerySequencer::new();
    let slow_ticket = sequencer.begin();
    let fast_ticket = sequencer.begin();

    // The later query resolves first.
    let fast = backend.search("go").await.unwrap();
    assert!(sequencer.try_apply(fast_ticket));
    let mut displayed = fast;

    let slow = backend.search("rust").await.unwrap();
    if sequencer.try_apply(slow_ticket) {
        displayed = slow;
    }

    assert_eq!(displayed.len(), 1);
    assert_eq!(displayed[0].title, "Go notes");
}
