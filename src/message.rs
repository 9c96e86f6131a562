use crate::WebUiConfig;
use async_lock::RwLock;
use std::{borrow::Cow, collections::HashMap, fmt, sync::Arc, time::Duration};
use tracing::instrument;

pub const HIDDEN: &str = "hidden";

/// Styling category applied as the slot's class.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Severity(Cow<'static, str>);

impl Severity {
    pub const INFO: Severity = Severity(Cow::Borrowed("info"));
    pub const SUCCESS: Severity = Severity(Cow::Borrowed("success"));
    pub const WARNING: Severity = Severity(Cow::Borrowed("warning"));
    pub const ERROR: Severity = Severity(Cow::Borrowed("error"));

    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::INFO
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of class tokens, mirroring a DOM `classList`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Replaces every token, like assigning `className`.
    pub fn set(&mut self, attr: &str) {
        self.0 = attr.split_whitespace().map(str::to_owned).collect();
    }

    pub fn add(&mut self, token: &str) {
        if !self.contains(token) {
            self.0.push(token.to_owned());
        }
    }

    pub fn remove(&mut self, token: &str) {
        self.0.retain(|t| t != token);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn as_attr(&self) -> String {
        self.0.join(" ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    pub text: String,
    pub classes: ClassList,
}

impl Slot {
    pub fn is_hidden(&self) -> bool {
        self.classes.contains(HIDDEN)
    }
}

/// Elements addressable by id. Clones share the same elements.
#[derive(Clone, Debug, Default)]
pub struct Page {
    slots: Arc<RwLock<HashMap<String, Slot>>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_slot(&self, id: impl Into<String>, slot: Slot) {
        self.slots.write().await.insert(id.into(), slot);
    }

    /// Snapshot of the slot as it is right now.
    pub async fn slot(&self, id: &str) -> Option<Slot> {
        self.slots.read().await.get(id).cloned()
    }
}

#[derive(Clone, Debug)]
pub struct MessagePresenter {
    page: Page,
    hide_after: Duration,
}

impl MessagePresenter {
    pub fn new(page: Page, hide_after: Duration) -> Self {
        crate::init();
        Self { page, hide_after }
    }

    pub fn from_config(page: Page, config: &WebUiConfig) -> Self {
        Self::new(page, config.message_hide_delay())
    }

    /// Shows `message` in slot `slot_id` and hides it again after the configured
    /// delay. Missing slots are ignored. Earlier hide timers on the same slot are
    /// left running, so the first one to fire hides the slot.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self, message))]
    pub async fn show_message(&self, slot_id: &str, message: &str, severity: Severity) {
        {
            let mut slots = self.page.slots.write().await;
            let Some(slot) = slots.get_mut(slot_id) else {
                return;
            };
            slot.text = message.to_owned();
            slot.classes.set(severity.as_str());
            slot.classes.remove(HIDDEN);
        }

        let page = self.page.clone();
        let slot_id = slot_id.to_owned();
        let delay = self.hide_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(slot) = page.slots.write().await.get_mut(&slot_id) {
                slot.classes.add(HIDDEN);
            }
            tracing::trace!("hid message slot {}", slot_id);
        });
    }
}
