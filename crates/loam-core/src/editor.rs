//! Editor state machine.
//!
//! The UI is either browsing/searching notes or composing one (a new note or
//! an edit of an existing one). The whole machine is a pure reducer: the host
//! owns a single [`EditorState`] value and feeds it [`EditorAction`]s; each
//! application returns the next state plus an optional [`Command`] for the
//! host to execute (backend dispatch, caret restoration).

use crate::models::{parse_tags, Note, NoteId};
use crate::splice::{self, SelectionRange};

/// What kind of note the compose panel is working on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeKind {
    /// Drafting a brand-new note
    Create,
    /// Editing the existing note with this backend ID
    EditExisting(NoteId),
}

/// Mutually exclusive view modes. `ComposeKind` is only meaningful while
/// `Composing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Composing(ComposeKind),
}

/// The complete editor state owned by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub mode: Mode,
    /// Compose form: note title
    pub title: String,
    /// Compose form: Markdown content buffer
    pub content: String,
    /// Compose form: raw comma-separated tags field
    pub tags_raw: String,
    /// Live search query; empty means browse-all
    pub search_query: String,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            mode: Mode::Browsing,
            title: String::new(),
            content: String::new(),
            tags_raw: String::new(),
            search_query: String::new(),
        }
    }
}

/// User-triggered editor actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Begin drafting a new note
    StartCreate,
    /// Begin editing an existing note; form fields are populated from it
    StartEdit(Note),
    /// Abandon the compose form
    CancelCompose,
    /// Compose form field edits
    SetTitle(String),
    SetContent(String),
    SetTagsRaw(String),
    /// Search query changed
    SearchChanged(String),
    /// Splice an encoded media fragment into the content buffer at the
    /// selection that is live right now (not the one captured at event time)
    InsertFragment {
        selection: SelectionRange,
        fragment: String,
    },
    /// Attempt to save the compose form
    Save,
    /// A note was deleted; editing it forces an implicit cancel
    NoteDeleted(NoteId),
}

/// Side effects the host must carry out after a reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Dispatch a create request to the backend
    Create {
        title: String,
        content: String,
        tags: Vec<String>,
    },
    /// Dispatch an update request to the backend
    Update {
        id: NoteId,
        title: String,
        content: String,
        tags: Vec<String>,
    },
    /// Restore focus and move the live cursor to this offset, deferred until
    /// after the buffer update has been applied to the host widget
    MoveCaret(usize),
}

/// Which notes the list pane shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// Every note, fetched unfiltered
    All,
    /// Backend search results for the current query
    SearchResults,
}

/// Visibility rules as a total function of [`EditorState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub compose_visible: bool,
    pub list: ListSource,
}

impl EditorState {
    /// Whether an edit of an existing note is in progress
    #[must_use]
    pub const fn editing_existing(&self) -> bool {
        matches!(self.mode, Mode::Composing(ComposeKind::EditExisting(_)))
    }

    /// Compute what the UI should display.
    ///
    /// The compose panel hides while a search is active, except that an
    /// edit-in-progress takes display priority over the search view.
    #[must_use]
    pub fn visible_view(&self) -> ViewLayout {
        let searching = !self.search_query.is_empty();
        ViewLayout {
            compose_visible: !searching || self.editing_existing(),
            list: if searching {
                ListSource::SearchResults
            } else {
                ListSource::All
            },
        }
    }
}

/// Apply one action to the editor state, returning the next state and an
/// optional command for the host.
#[must_use]
pub fn apply(state: EditorState, action: EditorAction) -> (EditorState, Option<Command>) {
    match action {
        EditorAction::StartCreate => (
            EditorState {
                mode: Mode::Composing(ComposeKind::Create),
                title: String::new(),
                content: String::new(),
                tags_raw: String::new(),
                ..state
            },
            None,
        ),
        EditorAction::StartEdit(note) => (
            EditorState {
                mode: Mode::Composing(ComposeKind::EditExisting(note.id.clone())),
                title: note.title,
                tags_raw: note.tags.join(", "),
                content: note.content,
                ..state
            },
            None,
        ),
        EditorAction::CancelCompose => (clear_compose(state), None),
        EditorAction::SetTitle(title) => (
            EditorState {
                title,
                ..into_composing(state)
            },
            None,
        ),
        EditorAction::SetContent(content) => (
            EditorState {
                content,
                ..into_composing(state)
            },
            None,
        ),
        EditorAction::SetTagsRaw(tags_raw) => (
            EditorState {
                tags_raw,
                ..into_composing(state)
            },
            None,
        ),
        EditorAction::SearchChanged(search_query) => (
            EditorState {
                search_query,
                ..state
            },
            None,
        ),
        EditorAction::InsertFragment {
            selection,
            fragment,
        } => insert_fragment(state, selection, &fragment),
        EditorAction::Save => save(state),
        EditorAction::NoteDeleted(id) => {
            if state.mode == Mode::Composing(ComposeKind::EditExisting(id)) {
                (clear_compose(state), None)
            } else {
                (state, None)
            }
        }
    }
}

/// Field edits while browsing begin a new draft.
fn into_composing(state: EditorState) -> EditorState {
    let mode = match state.mode {
        Mode::Browsing => Mode::Composing(ComposeKind::Create),
        composing => composing,
    };
    EditorState { mode, ..state }
}

fn clear_compose(state: EditorState) -> EditorState {
    EditorState {
        mode: Mode::Browsing,
        title: String::new(),
        content: String::new(),
        tags_raw: String::new(),
        // An active search survives cancel/save
        search_query: state.search_query,
    }
}

fn insert_fragment(
    state: EditorState,
    selection: SelectionRange,
    fragment: &str,
) -> (EditorState, Option<Command>) {
    match splice::splice(&state.content, selection, fragment) {
        Ok(result) => (
            EditorState {
                content: result.buffer,
                ..into_composing(state)
            },
            Some(Command::MoveCaret(result.caret)),
        ),
        Err(error) => {
            // Contract violation in the host integration; abort the splice
            // and keep the buffer intact.
            tracing::warn!("Fragment insertion aborted: {error}");
            (state, None)
        }
    }
}

fn save(state: EditorState) -> (EditorState, Option<Command>) {
    // Title emptiness is the sole save-blocking condition; content may be
    // empty (image-only notes carry everything in the fragment).
    if state.title.is_empty() {
        return (state, None);
    }

    let tags = parse_tags(&state.tags_raw);
    let command = match &state.mode {
        Mode::Composing(ComposeKind::EditExisting(id)) => Command::Update {
            id: id.clone(),
            title: state.title.clone(),
            content: state.content.clone(),
            tags,
        },
        _ => Command::Create {
            title: state.title.clone(),
            content: state.content.clone(),
            tags,
        },
    };

    (clear_compose(state), Some(command))
}
