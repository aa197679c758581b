//! # Message Log
//!
//! A bounded, turn-indexed log of game messages. Identical consecutive
//! messages collapse into one entry with a repeat count.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What a message is about. Front ends derive colours from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageCategory {
    Welcome,
    PlayerAttack,
    EnemyAttack,
    PlayerDeath,
    EnemyDeath,
    Impossible,
    HealthRecovered,
    StatusEffect,
    Descend,
    Progression,
    Info,
}

/// A single log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub category: MessageCategory,
    /// How many times this text was logged in a row
    pub count: u32,
    /// Turn on which the message was first logged
    pub turn: u64,
}

impl Message {
    /// The text with a `(xN)` suffix when the message repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{Message, MessageCategory};
    ///
    /// let mut message = Message {
    ///     text: "That way is blocked.".to_string(),
    ///     category: MessageCategory::Impossible,
    ///     count: 1,
    ///     turn: 0,
    /// };
    /// assert_eq!(message.full_text(), "That way is blocked.");
    /// message.count = 3;
    /// assert_eq!(message.full_text(), "That way is blocked. (x3)");
    /// ```
    pub fn full_text(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }
}

/// Ordered, bounded message history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    messages: VecDeque<Message>,
    capacity: usize,
}

impl MessageLog {
    /// Creates an empty log keeping at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Appends a message, stacking it onto the last entry when the text and
    /// category match.
    pub fn add(&mut self, text: impl Into<String>, category: MessageCategory, turn: u64) {
        let text = text.into();
        if let Some(last) = self.messages.back_mut() {
            if last.text == text && last.category == category {
                last.count += 1;
                return;
            }
        }
        self.push(Message {
            text,
            category,
            count: 1,
            turn,
        });
    }

    fn push(&mut self, message: Message) {
        while !self.messages.is_empty() && self.messages.len() >= self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.back()
    }

    /// The newest `count` messages, oldest first.
    pub fn recent(&self, count: usize) -> Vec<&Message> {
        let skip = self.messages.len().saturating_sub(count);
        self.messages.iter().skip(skip).collect()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MESSAGE_LOG_CAPACITY)
    }
}
