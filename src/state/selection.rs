//! Staged-file selection for the upload screen.
//!
//! Holds the ordered list of files the user has staged plus the drag
//! indicator, and applies the handful of operations the screen needs:
//! ingest, remove, clear, and the analyze precondition check. All mutation
//! goes through these methods; the views only ever borrow.

use thiserror::Error;

use super::staged::StagedFile;
use crate::notify::Notifier;

/// Where a batch of candidates came from. Both paths behave identically;
/// the source only shows up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestSource {
    Drop,
    Picker,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Removal index no longer valid. Stale indices can reach us when a
    /// removal click races a previous removal, so this stays internal and
    /// is never surfaced to the user.
    #[error("staged file index {index} is out of range (length {len})")]
    OutOfRange { index: usize, len: usize },

    /// Analysis was requested with nothing staged. Recoverable: the user
    /// adds files and retries.
    #[error("no images staged for analysis")]
    EmptySelection,
}

/// Selection state for one upload session. Created empty with the screen,
/// never persisted.
#[derive(Debug, Default)]
pub struct Selection {
    files: Vec<StagedFile>,
    drag_active: bool,
}

impl Selection {
    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Stage every `image/*` candidate, in their original relative order,
    /// after whatever is already staged. Non-image candidates are silently
    /// discarded; duplicates by name are allowed. Never fails.
    ///
    /// Returns the number of files actually appended. A positive count
    /// emits one info notification; an all-filtered batch emits nothing.
    pub fn ingest(
        &mut self,
        candidates: Vec<StagedFile>,
        source: IngestSource,
        notifier: &mut Notifier,
    ) -> usize {
        let accepted: Vec<StagedFile> = candidates
            .into_iter()
            .filter(StagedFile::is_image)
            .collect();

        let appended = accepted.len();
        self.files.extend(accepted);

        if appended > 0 {
            tracing::info!(?source, appended, total = self.files.len(), "staged images");
            notifier.info(
                "Images added",
                format!("{appended} image(s) ready for analysis"),
            );
        }

        appended
    }

    /// Remove the file at `index`, preserving the order of the remainder.
    /// Out-of-range indices leave the selection untouched.
    pub fn remove(&mut self, index: usize) -> Result<StagedFile, SelectionError> {
        if index >= self.files.len() {
            return Err(SelectionError::OutOfRange {
                index,
                len: self.files.len(),
            });
        }

        Ok(self.files.remove(index))
    }

    /// Drop everything staged. No notification.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Drag indicator toggle. Last write wins.
    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    /// Precondition check for the analyze action. The actual analysis lives
    /// behind a service boundary this client does not implement; on success
    /// we only announce that the request went out. Never mutates the
    /// selection.
    pub fn analyze(&self, notifier: &mut Notifier) -> Result<(), SelectionError> {
        if self.files.is_empty() {
            notifier.error(
                "No images",
                "Add images to the selection before starting an analysis",
            );
            return Err(SelectionError::EmptySelection);
        }

        notifier.info(
            "Analysis in progress",
            format!("{} image(s) queued for classification", self.files.len()),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Kind;

    fn image(name: &str) -> StagedFile {
        StagedFile::new(name, "image/png", vec![0; 8])
    }

    fn text_file(name: &str) -> StagedFile {
        StagedFile::new(name, "text/plain", vec![0; 8])
    }

    fn names(selection: &Selection) -> Vec<&str> {
        selection.files().iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_ingest_filters_non_images() {
        let mut selection = Selection::default();
        let mut notifier = Notifier::default();

        let appended = selection.ingest(
            vec![image("a.png"), text_file("b.txt"), image("c.png")],
            IngestSource::Drop,
            &mut notifier,
        );

        assert_eq!(appended, 2);
        assert_eq!(names(&selection), vec!["a.png", "c.png"]);
        assert!(selection.files().iter().all(StagedFile::is_image));
    }

    #[test]
    fn test_ingest_appends_in_order_after_existing() {
        let mut selection = Selection::default();
        let mut notifier = Notifier::default();

        selection.ingest(vec![image("a.png")], IngestSource::Picker, &mut notifier);
        selection.ingest(
            vec![image("b.png"), image("c.png")],
            IngestSource::Drop,
            &mut notifier,
        );

        assert_eq!(names(&selection), vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_ingest_allows_duplicate_names() {
        let mut selection = Selection::default();
        let mut notifier = Notifier::default();

        let appended = selection.ingest(
            vec![image("same.png"), image("same.png")],
            IngestSource::Picker,
            &mut notifier,
        );

        assert_eq!(appended, 2);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_ingest_notifies_with_count() {
        let mut selection = Selection::default();
        let mut notifier = Notifier::default();

        // Mirrors the drop scenario: 3 images + 1 non-image
        let appended = selection.ingest(
            vec![
                image("a.png"),
                image("b.png"),
                image("c.png"),
                text_file("readme.txt"),
            ],
            IngestSource::Drop,
            &mut notifier,
        );

        assert_eq!(appended, 3);
        assert_eq!(selection.len(), 3);

        let notifications = notifier.drain();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, Kind::Info);
        assert!(notifications[0].message.contains('3'));
    }

    #[test]
    fn test_ingest_all_filtered_is_silent() {
        let mut selection = Selection::default();
        let mut notifier = Notifier::default();

        let appended = selection.ingest(
            vec![text_file("a.txt"), text_file("b.txt")],
            IngestSource::Drop,
            &mut notifier,
        );

        assert_eq!(appended, 0);
        assert!(selection.is_empty());
        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn test_remove_middle_preserves_order() {
        let mut selection = Selection::default();
        let mut notifier = Notifier::default();
        selection.ingest(
            vec![image("a.png"), image("b.png"), image("c.png")],
            IngestSource::Picker,
            &mut notifier,
        );

        let removed = selection.remove(1).unwrap();

        assert_eq!(removed.name, "b.png");
        assert_eq!(names(&selection), vec!["a.png", "c.png"]);
    }

    #[test]
    fn test_remove_out_of_range_leaves_state_unchanged() {
        let mut selection = Selection::default();
        let mut notifier = Notifier::default();
        selection.ingest(
            vec![image("a.png"), image("b.png")],
            IngestSource::Picker,
            &mut notifier,
        );

        let err = selection.remove(2).unwrap_err();

        assert_eq!(err, SelectionError::OutOfRange { index: 2, len: 2 });
        assert_eq!(names(&selection), vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_remove_on_empty_selection() {
        let mut selection = Selection::default();

        let err = selection.remove(0).unwrap_err();

        assert_eq!(err, SelectionError::OutOfRange { index: 0, len: 0 });
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::default();
        let mut notifier = Notifier::default();
        selection.ingest(
            vec![image("a.png"), image("b.png")],
            IngestSource::Picker,
            &mut notifier,
        );

        selection.clear();

        assert!(selection.is_empty());

        // Idempotent on an already-empty selection
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_analyze_empty_selection() {
        let selection = Selection::default();
        let mut notifier = Notifier::default();

        let err = selection.analyze(&mut notifier).unwrap_err();

        assert_eq!(err, SelectionError::EmptySelection);
        assert!(selection.is_empty());

        let notifications = notifier.drain();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, Kind::Error);
    }

    #[test]
    fn test_analyze_with_staged_files() {
        let mut selection = Selection::default();
        let mut notifier = Notifier::default();
        selection.ingest(vec![image("a.png")], IngestSource::Picker, &mut notifier);
        notifier.drain();

        assert!(selection.analyze(&mut notifier).is_ok());

        // Analysis never mutates the selection
        assert_eq!(names(&selection), vec!["a.png"]);

        let notifications = notifier.drain();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, Kind::Info);
    }

    #[test]
    fn test_drag_indicator_transitions() {
        let mut selection = Selection::default();
        assert!(!selection.drag_active());

        // Idle -> Dragging on drag-enter
        selection.set_drag_active(true);
        assert!(selection.drag_active());

        // Dragging -> Idle on drop
        selection.set_drag_active(false);
        assert!(!selection.drag_active());
    }
}
