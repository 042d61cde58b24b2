// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ordered, mutable collection of [`Message`]s.

use std::ops::{Index, IndexMut};

use crate::{ArgumentError, Message, Severity};

/// Ordered sequence of messages with severity queries.
///
/// Duplicates are allowed and insertion order is kept. The severity queries
/// scan the whole collection on every call; nothing is cached, so they are
/// always consistent with the current contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageCollection {
    items: Vec<Message>,
}

impl MessageCollection {
    /// Empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty collection with room for `capacity` messages.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no messages.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Messages in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.items.iter()
    }

    /// Mutable iterator, used to replace messages in place.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Message> {
        self.items.iter_mut()
    }

    /// Messages as a slice.
    pub fn as_slice(&self) -> &[Message] {
        &self.items
    }

    /// Append one message.
    pub fn push(&mut self, message: Message) {
        self.items.push(message);
    }

    /// Append clones of every message in `messages`.
    pub fn extend_from<'a, I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = &'a Message>,
    {
        self.items.extend(messages.into_iter().cloned());
    }

    /// Insert at `index`, shifting later messages right.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::IndexOutOfRange`] when `index > len`.
    pub fn insert(&mut self, index: usize, message: Message) -> Result<(), ArgumentError> {
        if index > self.items.len() {
            return Err(ArgumentError::out_of_range(index, self.items.len()));
        }
        self.items.insert(index, message);
        Ok(())
    }

    /// Remove the first message equal to `message`. Returns whether one was removed.
    pub fn remove(&mut self, message: &Message) -> bool {
        match self.index_of(message) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the message at `index`.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::IndexOutOfRange`] when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<Message, ArgumentError> {
        if index >= self.items.len() {
            return Err(ArgumentError::out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    /// Remove every message.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether a message equal to `message` is present.
    pub fn contains(&self, message: &Message) -> bool {
        self.items.contains(message)
    }

    /// Position of the first message equal to `message`.
    pub fn index_of(&self, message: &Message) -> Option<usize> {
        self.items.iter().position(|m| m == message)
    }

    /// Message at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Message> {
        self.items.get(index)
    }

    /// Replace the message at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::IndexOutOfRange`] when `index >= len`.
    pub fn set(&mut self, index: usize, message: Message) -> Result<Message, ArgumentError> {
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, message)),
            None => Err(ArgumentError::out_of_range(index, self.items.len())),
        }
    }

    /// Whether any message has `Error` severity.
    pub fn has_error(&self) -> bool {
        self.has_severity(Severity::Error)
    }

    /// Whether any message has `Warning` severity.
    pub fn has_warning(&self) -> bool {
        self.has_severity(Severity::Warning)
    }

    /// Whether any message has `Information` severity.
    pub fn has_information(&self) -> bool {
        self.has_severity(Severity::Information)
    }

    /// Whether any message has exactly `severity`.
    pub fn has_severity(&self, severity: Severity) -> bool {
        self.items.iter().any(|m| m.severity() == severity)
    }

    /// Messages of exactly `severity`, in order.
    pub fn of_severity(&self, severity: Severity) -> impl Iterator<Item = &Message> {
        self.items.iter().filter(move |m| m.severity() == severity)
    }

    /// Number of messages of exactly `severity`.
    pub fn count_of(&self, severity: Severity) -> usize {
        self.of_severity(severity).count()
    }

    /// `Error` messages.
    pub fn errors(&self) -> impl Iterator<Item = &Message> {
        self.of_severity(Severity::Error)
    }

    /// `Warning` messages.
    pub fn warnings(&self) -> impl Iterator<Item = &Message> {
        self.of_severity(Severity::Warning)
    }

    /// `Information` messages.
    pub fn information(&self) -> impl Iterator<Item = &Message> {
        self.of_severity(Severity::Information)
    }
}

impl Index<usize> for MessageCollection {
    type Output = Message;

    fn index(&self, index: usize) -> &Message {
        &self.items[index]
    }
}

impl IndexMut<usize> for MessageCollection {
    fn index_mut(&mut self, index: usize) -> &mut Message {
        &mut self.items[index]
    }
}

impl From<Vec<Message>> for MessageCollection {
    fn from(items: Vec<Message>) -> Self {
        Self { items }
    }
}

impl From<MessageCollection> for Vec<Message> {
    fn from(collection: MessageCollection) -> Self {
        collection.items
    }
}

impl FromIterator<Message> for MessageCollection {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Message> for MessageCollection {
    fn extend<I: IntoIterator<Item = Message>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for MessageCollection {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a MessageCollection {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
