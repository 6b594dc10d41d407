//! Ordered list of profile links.
//!
//! The list starts with one GitHub and one LinkedIn entry and only ever
//! grows; there is no removal. Each entry carries its own [`LockState`] and
//! the list refuses edits to locked entries and copies of unlocked ones, so
//! the invariant holds no matter who calls it.

use super::errors::{ClipboardError, LinkError, LinkResult};
use super::i18n::CUSTOM_LINK_PLACEHOLDER;
use super::models::{Language, LinkEntry, LinkKind, LockState};

/// Destination for copied link values.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkList {
    entries: Vec<LinkEntry>,
}

impl LinkList {
    /// The two permanent entries, labelled in `language`.
    pub fn seeded(language: Language) -> Self {
        let labels = language.labels();
        Self {
            entries: vec![
                LinkEntry::new(LinkKind::GitHub, labels.github),
                LinkEntry::new(LinkKind::LinkedIn, labels.linkedin),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LinkEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkEntry> {
        self.entries.iter()
    }

    /// Appends an empty, unlocked custom link and returns its index.
    pub fn add_link(&mut self) -> usize {
        self.entries
            .push(LinkEntry::new(LinkKind::Custom, CUSTOM_LINK_PLACEHOLDER));
        self.entries.len() - 1
    }

    pub fn change_link(&mut self, index: usize, value: String) -> LinkResult<()> {
        let entry = self.entry_mut(index)?;
        if entry.is_locked() {
            return Err(LinkError::Locked(index));
        }
        entry.value = value;
        Ok(())
    }

    pub fn lock_link(&mut self, index: usize) -> LinkResult<()> {
        self.entry_mut(index)?.lock = LockState::Locked;
        Ok(())
    }

    pub fn unlock_link(&mut self, index: usize) -> LinkResult<()> {
        self.entry_mut(index)?.lock = LockState::Unlocked;
        Ok(())
    }

    /// Writes a locked entry's value to `clipboard`.
    pub fn copy_link(&self, index: usize, clipboard: &mut dyn ClipboardSink) -> LinkResult<()> {
        let entry = self.entries.get(index).ok_or(LinkError::OutOfRange(index))?;
        if !entry.is_locked() {
            return Err(LinkError::NotLocked(index));
        }
        clipboard.write_text(&entry.value)?;
        Ok(())
    }

    /// Re-labels the seeded entries for `language`. Custom placeholders stay.
    pub fn relabel(&mut self, language: Language) {
        let labels = language.labels();
        for entry in &mut self.entries {
            match entry.kind {
                LinkKind::GitHub => entry.placeholder = labels.github.to_string(),
                LinkKind::LinkedIn => entry.placeholder = labels.linkedin.to_string(),
                LinkKind::Custom => {}
            }
        }
    }

    fn entry_mut(&mut self, index: usize) -> LinkResult<&mut LinkEntry> {
        self.entries.get_mut(index).ok_or(LinkError::OutOfRange(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        written: Vec<String>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.written.push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Write("denied".to_string()))
        }
    }

    fn count_kind(list: &LinkList, kind: LinkKind) -> usize {
        list.iter().filter(|l| l.kind == kind).count()
    }

    #[test]
    fn test_seeded_entries() {
        let list = LinkList::seeded(Language::En);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().kind, LinkKind::GitHub);
        assert_eq!(list.get(0).unwrap().placeholder, "GitHub link");
        assert_eq!(list.get(1).unwrap().kind, LinkKind::LinkedIn);
        assert_eq!(list.get(1).unwrap().placeholder, "LinkedIn link");
        assert!(list.iter().all(|l| !l.is_locked() && l.value.is_empty()));
    }

    #[test]
    fn test_add_link_appends_custom_entries() {
        let mut list = LinkList::seeded(Language::En);
        for n in 1..=5 {
            let index = list.add_link();
            assert_eq!(index, n + 1);
            assert_eq!(list.len(), n + 2);
        }

        for entry in list.iter().skip(2) {
            assert_eq!(entry.kind, LinkKind::Custom);
            assert_eq!(entry.value, "");
            assert!(!entry.is_locked());
            assert_eq!(entry.placeholder, "Custom link");
        }
        assert_eq!(count_kind(&list, LinkKind::GitHub), 1);
        assert_eq!(count_kind(&list, LinkKind::LinkedIn), 1);
    }

    #[test]
    fn test_change_link_rejected_while_locked() {
        let mut list = LinkList::seeded(Language::En);
        list.change_link(0, "https://github.com/ana".to_string()).unwrap();
        list.lock_link(0).unwrap();

        let result = list.change_link(0, "https://example.com".to_string());
        assert_eq!(result, Err(LinkError::Locked(0)));
        assert_eq!(list.get(0).unwrap().value, "https://github.com/ana");

        list.unlock_link(0).unwrap();
        list.change_link(0, "https://example.com".to_string()).unwrap();
        assert_eq!(list.get(0).unwrap().value, "https://example.com");
    }

    #[test]
    fn test_out_of_range_is_a_no_op() {
        let mut list = LinkList::seeded(Language::En);
        let before = list.clone();

        assert_eq!(list.change_link(7, "x".to_string()), Err(LinkError::OutOfRange(7)));
        assert_eq!(list.lock_link(7), Err(LinkError::OutOfRange(7)));
        assert_eq!(list.unlock_link(7), Err(LinkError::OutOfRange(7)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_locking_empty_link_is_allowed() {
        let mut list = LinkList::seeded(Language::En);
        list.lock_link(1).unwrap();
        assert!(list.get(1).unwrap().is_locked());
    }

    #[test]
    fn test_copy_requires_lock() {
        let mut list = LinkList::seeded(Language::En);
        list.change_link(1, "https://linkedin.com/in/ana".to_string()).unwrap();
        let mut clipboard = RecordingClipboard::default();

        assert_eq!(list.copy_link(1, &mut clipboard), Err(LinkError::NotLocked(1)));
        assert!(clipboard.written.is_empty());

        list.lock_link(1).unwrap();
        list.copy_link(1, &mut clipboard).unwrap();
        assert_eq!(clipboard.written, vec!["https://linkedin.com/in/ana".to_string()]);
        assert!(list.get(1).unwrap().is_locked());
    }

    #[test]
    fn test_copy_surfaces_clipboard_failure() {
        let mut list = LinkList::seeded(Language::En);
        list.lock_link(0).unwrap();

        let result = list.copy_link(0, &mut BrokenClipboard);
        assert!(matches!(result, Err(LinkError::Clipboard(ClipboardError::Write(_)))));
    }

    #[test]
    fn test_relabel_skips_custom_links() {
        let mut list = LinkList::seeded(Language::En);
        list.add_link();
        list.relabel(Language::Pt);

        assert_eq!(list.get(0).unwrap().placeholder, "Link do GitHub");
        assert_eq!(list.get(1).unwrap().placeholder, "Link do LinkedIn");
        assert_eq!(list.get(2).unwrap().placeholder, "Custom link");
    }
}
