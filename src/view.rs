//! Item View and Page Rendering
//!
//! [`ItemView`] is purely presentational: it shows one item and hands the
//! checkbox click back to whoever rendered it, through a callback that already
//! knows the item id. It holds no state of its own and never touches the store.

use std::fmt;

use crate::container::{Intent, ListContainer};
use crate::model::DraftField;
use crate::store::TodoStore;

/// Toggle callback bound to one item
pub type ToggleCallback = Box<dyn Fn() -> Intent + Send + Sync>;

/// Presentational unit for a single item
pub struct ItemView {
    title: String,
    description: String,
    completed: bool,
    on_toggle: ToggleCallback,
}

impl ItemView {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
        on_toggle: impl Fn() -> Intent + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed,
            on_toggle: Box::new(on_toggle),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Checkbox interaction: invoke the bound callback
    pub fn toggle(&self) -> Intent {
        (self.on_toggle)()
    }

    /// Checkbox glyph for the completion flag
    pub fn checkbox(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// Checkbox and title on the first line, description indented below
    pub fn render(&self) -> String {
        format!("{} {}\n    {}", self.checkbox(), self.title, self.description)
    }
}

impl fmt::Debug for ItemView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemView")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

/// Render the whole page: header, numbered items, and the add-item form
pub fn render_page<S: TodoStore>(container: &ListContainer<S>) -> String {
    let mut out = String::from("TODO\n====\n");

    let views = container.render();
    if views.is_empty() {
        out.push_str("  (nothing to do)\n");
    }
    for (index, view) in views.iter().enumerate() {
        let rendered = view.render();
        let mut lines = rendered.lines();
        if let Some(first) = lines.next() {
            out.push_str(&format!("{:>3}. {}\n", index + 1, first));
        }
        for line in lines {
            out.push_str(&format!("     {}\n", line));
        }
    }

    out.push_str("\nAdd a Todo\n----------\n");
    if !container.error().is_empty() {
        out.push_str(&format!("! {}\n", container.error()));
    }
    let draft = container.draft();
    out.push_str(&format!("Title:       {}\n", draft.get(DraftField::Title)));
    out.push_str(&format!("Description: {}\n", draft.get(DraftField::Description)));

    out
}
