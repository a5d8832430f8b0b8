//! Plain-text rendering of the notes screen.

use std::fmt::Write;

use notekeeper_core::notes::Note;

use crate::api::NotesBackend;
use crate::app::NotesApp;
use crate::form::FormMode;

pub const ACTIVE_HEADING: &str = "My Active Notes";
pub const ARCHIVED_HEADING: &str = "Archived Notes";
pub const EMPTY_LIST_MESSAGE: &str = "No notes match";

const RULE: &str = "------------------------------------------------------------";

/// Render the whole screen for the current app state.
pub fn render<B: NotesBackend>(app: &NotesApp<B>) -> String {
    let mut out = String::new();
    let heading = if app.is_viewing_archived() {
        ARCHIVED_HEADING
    } else {
        ACTIVE_HEADING
    };
    let _ = writeln!(out, "== {heading} ==");

    if app.form_available() {
        render_form(&mut out, app);
    }

    let _ = writeln!(out, "{RULE}");
    if !app.filter().is_empty() {
        let _ = writeln!(out, "Filter: {}", app.filter());
    }

    let notes = app.visible_notes();
    if notes.is_empty() {
        let _ = writeln!(out, "{EMPTY_LIST_MESSAGE}");
    }
    for note in notes {
        render_note(&mut out, note);
    }
    out
}

fn render_form<B: NotesBackend>(out: &mut String, app: &NotesApp<B>) {
    let form = &app.form;
    match form.mode() {
        FormMode::Idle => {
            let _ = writeln!(out, "[New note]");
        }
        FormMode::Editing(id) => {
            let _ = writeln!(out, "[Editing note {id}]");
        }
    }
    let _ = writeln!(out, "  title:      {}", form.title);
    let _ = writeln!(out, "  content:    {}", form.content);
    let _ = writeln!(out, "  categories: {}", form.categories);
}

/// One list entry: id and title, content, then category chips.
pub fn render_note(out: &mut String, note: &Note) {
    let _ = writeln!(out, "#{} {}", note.id, note.title);
    for line in note.content.lines() {
        let _ = writeln!(out, "    {line}");
    }
    if !note.categories.is_empty() {
        let _ = writeln!(out, "    {}", category_chips(&note.categories));
    }
    let _ = writeln!(out, "    created {}", note.created_at.format("%Y-%m-%d %H:%M"));
}

/// Categories as `#tag` chips separated by spaces.
pub fn category_chips(categories: &[String]) -> String {
    categories
        .iter()
        .map(|category| format!("#{category}"))
        .collect::<Vec<_>>()
        .join(" ")
}
