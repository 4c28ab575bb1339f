// SPDX-License-Identifier: MPL-2.0
//! The transient product draft composed by the registration wizard.
//!
//! A draft lives only in memory for the duration of one registration
//! session. Field setters normalize input at the boundary so the stored
//! representation is always canonical (trimmed name, digit-only price and
//! quantity, duplicate-free insertion-ordered tags).

use super::numeric;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftProduct {
    image: Option<PathBuf>,
    name: String,
    price: String,
    quantity: String,
    tags: Vec<String>,
    registered: bool,
}

impl DraftProduct {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every field, returning the draft to its just-created state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn image(&self) -> Option<&PathBuf> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, path: PathBuf) {
        self.image = Some(path);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Raw digit string; see `display_price` for the grouped form.
    pub fn price(&self) -> &str {
        &self.price
    }

    /// Stores price input with all non-digit characters stripped.
    pub fn set_price(&mut self, input: &str) {
        self.price = numeric::normalize(input);
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn set_quantity(&mut self, input: &str) {
        self.quantity = numeric::normalize(input);
    }

    /// Price with thousands separators, display only.
    pub fn display_price(&self) -> String {
        numeric::format_grouped(&self.price)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Appends a tag unless it trims to empty or is already present
    /// (case-sensitive exact match). Returns whether the tag was added.
    pub fn add_tag(&mut self, candidate: &str) -> bool {
        let tag = candidate.trim();
        if tag.is_empty() || self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Removes a tag by position. Out-of-range indices are ignored; the UI
    /// only ever exposes valid ones.
    pub fn remove_tag(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
        }
    }

    /// Removes a tag by value. Returns whether anything was removed.
    pub fn remove_tag_value(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Marks the draft as settled. Once registered, back-navigation is no
    /// longer intercepted.
    pub fn mark_registered(&mut self) {
        self.registered = true;
    }

    /// Name trimmed to non-empty, required before leaving the info step.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn has_price(&self) -> bool {
        !self.price.is_empty()
    }

    pub fn has_quantity(&self) -> bool {
        !self.quantity.is_empty()
    }

    /// True iff the draft is not settled and any field has been touched.
    /// Drives both the leave-interception prompt and the focus-reentry
    /// prompt.
    pub fn has_unsaved_changes(&self) -> bool {
        if self.registered {
            return false;
        }
        self.image.is_some()
            || !self.name.is_empty()
            || !self.price.is_empty()
            || !self.quantity.is_empty()
            || !self.tags.is_empty()
    }
}
