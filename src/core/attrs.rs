//! Contextual key/value attributes attached to every log entry
//!
//! An [`AttrSet`] belongs to a [`Logger`](crate::Logger) and is cloned into
//! each [`LogEntry`](crate::LogEntry) at dispatch time, so a rendered line
//! always carries the attributes the logger was constructed with.

use super::error::{LoggerError, Result};

/// Default maximum number of attributes per logger.
pub const DEFAULT_MAX_ATTRS: usize = 8;

/// A single key/value attribute, e.g. `machine=HOSTNAME-01`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub key: String,
    pub value: String,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// An attribute with an empty key or value is skipped by the built-in
    /// renderers.
    pub fn is_blank(&self) -> bool {
        self.key.is_empty() || self.value.is_empty()
    }
}

/// What happens when a bounded collection is configured past its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Keep the first `capacity` items, silently drop the rest.
    #[default]
    Discard,
    /// Fail construction with a capacity error.
    Reject,
}

/// An ordered sequence of attributes with a fixed maximum capacity.
///
/// Insertion order is preserved. [`push`](AttrSet::push) refuses writes past
/// capacity instead of growing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrSet {
    attrs: Vec<Attr>,
    capacity: usize,
}

impl AttrSet {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ATTRS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attrs: Vec::new(),
            capacity,
        }
    }

    /// Append an attribute, preserving insertion order.
    ///
    /// Returns `false` without modifying the set when it is already full.
    pub fn push(&mut self, attr: Attr) -> bool {
        if self.attrs.len() >= self.capacity {
            return false;
        }
        self.attrs.push(attr);
        true
    }

    /// Build a set from configuration, applying the overflow policy.
    pub(crate) fn from_config(
        attrs: Vec<Attr>,
        capacity: usize,
        policy: CapacityPolicy,
    ) -> Result<Self> {
        if attrs.len() > capacity && policy == CapacityPolicy::Reject {
            return Err(LoggerError::attr_capacity(capacity));
        }

        let mut set = Self::with_capacity(capacity);
        for attr in attrs {
            if !set.push(attr) {
                break;
            }
        }
        Ok(set)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attr> {
        self.attrs.iter()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for AttrSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a AttrSet {
    type Item = &'a Attr;
    type IntoIter = std::slice::Iter<'a, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut set = AttrSet::new();
        assert!(set.push(Attr::new("service", "api")));
        assert!(set.push(Attr::new("region", "eu-west-1")));

        let keys: Vec<_> = set.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["service", "region"]);
    }

    #[test]
    fn test_push_refuses_past_capacity() {
        let mut set = AttrSet::with_capacity(2);
        assert!(set.push(Attr::new("a", "1")));
        assert!(set.push(Attr::new("b", "2")));
        assert!(!set.push(Attr::new("c", "3")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_config_discard_keeps_oldest() {
        let attrs = vec![
            Attr::new("a", "1"),
            Attr::new("b", "2"),
            Attr::new("c", "3"),
        ];
        let set = AttrSet::from_config(attrs, 2, CapacityPolicy::Discard).unwrap();
        assert_eq!(set.len(), 2);
        let keys: Vec<_> = set.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_from_config_reject_errors_on_overflow() {
        let attrs = vec![
            Attr::new("a", "1"),
            Attr::new("b", "2"),
            Attr::new("c", "3"),
        ];
        let err = AttrSet::from_config(attrs, 2, CapacityPolicy::Reject).unwrap_err();
        assert!(matches!(err, LoggerError::AttrCapacity { capacity: 2 }));
    }

    #[test]
    fn test_blank_attr() {
        assert!(Attr::new("", "value").is_blank());
        assert!(Attr::new("key", "").is_blank());
        assert!(!Attr::new("key", "value").is_blank());
    }
}
