//! In-memory host implementations shared by the theme tests.

use std::cell::RefCell;
use std::rc::Rc;

use super::host::{PreferenceStore, RootElement, StorageError, ToggleControl};
use super::model::{Icon, Theme};

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub value: Rc<RefCell<Option<String>>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub writes: Rc<RefCell<u32>>,
}

impl MemoryStore {
    pub fn with(theme: Theme) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(theme.as_str().to_owned());
        store
    }

    pub fn raw(value: &str) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(value.to_owned());
        store
    }

    pub fn stored(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<Theme>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable);
        }
        Ok(self.value.borrow().as_deref().and_then(Theme::parse))
    }

    fn save(&mut self, theme: Theme) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Access("QuotaExceededError".to_owned()));
        }
        *self.writes.borrow_mut() += 1;
        *self.value.borrow_mut() = Some(theme.as_str().to_owned());
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeRoot {
    pub attribute: Option<String>,
    pub marker: bool,
    pub attribute_writes: u32,
}

impl RootElement for FakeRoot {
    fn theme_attribute(&self) -> Option<String> {
        self.attribute.clone()
    }

    fn set_theme_attribute(&mut self, value: &str) {
        self.attribute_writes += 1;
        self.attribute = Some(value.to_owned());
    }

    fn has_marker_class(&self) -> bool {
        self.marker
    }

    fn set_marker_class(&mut self, present: bool) {
        self.marker = present;
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeToggle {
    pub rendered: Vec<Icon>,
}

impl FakeToggle {
    pub fn current(&self) -> Option<Icon> {
        self.rendered.last().copied()
    }
}

impl ToggleControl for FakeToggle {
    fn render_icon(&mut self, icon: Icon) {
        self.rendered.push(icon);
    }
}
