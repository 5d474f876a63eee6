//! Rich-text editor seam.
//!
//! Blog content is HTML authored in a rich-text editor. Forms only ever need
//! three things from an editor: read the content, replace it, and hear about
//! changes. [`RichTextEditor`] is that surface, so the concrete editor can be
//! swapped without touching form code.

/// Callback invoked with the new content after every change.
pub type ChangeListener = Box<dyn Fn(&str) + Send + Sync>;

/// The narrow editor interface forms depend on.
pub trait RichTextEditor: Send + Sync {
    /// Current HTML content.
    fn content(&self) -> &str;

    /// Replace the content. Listeners fire only if the content changed.
    fn set_content(&mut self, html: &str);

    /// Register a change listener.
    fn on_change(&mut self, listener: ChangeListener);
}

/// An editor that keeps its content in a string buffer.
#[derive(Default)]
pub struct BufferEditor {
    content: String,
    listeners: Vec<ChangeListener>,
}

impl BufferEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor preloaded with `html`, as when opening an existing post.
    #[must_use]
    pub fn with_content(html: &str) -> Self {
        Self {
            content: html.to_owned(),
            listeners: Vec::new(),
        }
    }
}

impl RichTextEditor for BufferEditor {
    fn content(&self) -> &str {
        &self.content
    }

    fn set_content(&mut self, html: &str) {
        if self.content == html {
            return;
        }
        html.clone_into(&mut self.content);
        for listener in &self.listeners {
            listener(&self.content);
        }
    }

    fn on_change(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }
}

impl std::fmt::Debug for BufferEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferEditor")
            .field("len", &self.content.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn set_content_notifies_listeners() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut editor = BufferEditor::new();
        editor.on_change(Box::new(move |html| sink.lock().unwrap().push(html.to_owned())));

        editor.set_content("<p>one</p>");
        editor.set_content("<p>two</p>");

        assert_eq!(editor.content(), "<p>two</p>");
        assert_eq!(*seen.lock().unwrap(), vec!["<p>one</p>", "<p>two</p>"]);
    }

    #[test]
    fn unchanged_content_is_silent() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);

        let mut editor = BufferEditor::with_content("<p>same</p>");
        editor.on_change(Box::new(move |_| *counter.lock().unwrap() += 1));
        editor.set_content("<p>same</p>");

        assert_eq!(*calls.lock().unwrap(), 0);
    }
}
