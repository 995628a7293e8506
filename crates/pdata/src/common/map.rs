use std::fmt;
use std::rc::Rc;

use prost::encoding::string;

use super::value::{key_value, key_value_len};
use super::AttributeValue;
use crate::internal::{message_encoded_len, shared, Shared};
use crate::proto::common::{KeyValue, StringKeyValue};

/// Storage behind an [`AttributeMap`].
pub(crate) type AttributesOrig = Vec<(String, AttributeValue)>;

/// Storage behind a [`StringMap`].
pub(crate) type LabelsOrig = Vec<(String, String)>;

fn position<V>(entries: &[(String, V)], key: &str) -> Option<usize> {
    entries.iter().position(|(k, _)| k == key)
}

macro_rules! define_map {
    ($(#[$meta:meta])* $name:ident, $orig:ty, $value:ty) => {
        $(#[$meta])*
        pub struct $name {
            orig: Shared<$orig>,
        }

        impl $name {
            pub(crate) fn from_orig(orig: Shared<$orig>) -> Self {
                Self { orig }
            }

            pub fn new() -> Self {
                Self::from_orig(shared(Vec::new()))
            }

            pub fn len(&self) -> usize {
                self.orig.borrow().len()
            }

            pub fn is_empty(&self) -> bool {
                self.orig.borrow().is_empty()
            }

            /// Returns a copy of the value stored under `key`.
            pub fn get(&self, key: &str) -> Option<$value> {
                let orig = self.orig.borrow();
                position(&orig, key).map(|i| orig[i].1.clone())
            }

            pub fn contains_key(&self, key: &str) -> bool {
                position(&self.orig.borrow(), key).is_some()
            }

            /// Adds `key` only if it is absent. Returns whether it was added.
            pub fn insert(&self, key: impl Into<String>, value: impl Into<$value>) -> bool {
                let key = key.into();
                let mut orig = self.orig.borrow_mut();
                if position(&orig, &key).is_some() {
                    return false;
                }
                orig.push((key, value.into()));
                true
            }

            /// Replaces the value of `key` only if it is present. Returns whether it was replaced.
            pub fn update(&self, key: &str, value: impl Into<$value>) -> bool {
                let mut orig = self.orig.borrow_mut();
                match position(&orig, key) {
                    Some(i) => {
                        orig[i].1 = value.into();
                        true
                    }
                    None => false,
                }
            }

            /// Replaces the value of `key`, or adds it at the end.
            pub fn upsert(&self, key: impl Into<String>, value: impl Into<$value>) {
                let key = key.into();
                let mut orig = self.orig.borrow_mut();
                match position(&orig, &key) {
                    Some(i) => orig[i].1 = value.into(),
                    None => orig.push((key, value.into())),
                }
            }

            pub fn remove(&self, key: &str) -> Option<$value> {
                let mut orig = self.orig.borrow_mut();
                position(&orig, key).map(|i| orig.remove(i).1)
            }

            pub fn clear(&self) {
                self.orig.borrow_mut().clear();
            }

            /// Replaces the whole content with `entries`; later duplicates of a key are dropped.
            pub fn init_from_map<K, V>(&self, entries: impl IntoIterator<Item = (K, V)>)
            where
                K: Into<String>,
                V: Into<$value>,
            {
                let mut orig: $orig = Vec::new();
                for (key, value) in entries {
                    let key = key.into();
                    if position(&orig, &key).is_none() {
                        orig.push((key, value.into()));
                    }
                }
                *self.orig.borrow_mut() = orig;
            }

            /// Orders the entries by key. Insertion order is otherwise preserved.
            pub fn sort(&self) {
                self.orig.borrow_mut().sort_by(|a, b| a.0.cmp(&b.0));
            }

            /// Snapshot of the entries in their current order.
            pub fn iter(&self) -> impl Iterator<Item = (String, $value)> {
                self.orig.borrow().clone().into_iter()
            }

            /// Overwrites `dest` with a deep copy of this map.
            pub fn copy_to(&self, dest: &$name) {
                if Rc::ptr_eq(&self.orig, &dest.orig) {
                    return;
                }
                *dest.orig.borrow_mut() = self.orig.borrow().clone();
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Clone for $name {
            fn clone(&self) -> Self {
                Self::from_orig(shared(self.orig.borrow().clone()))
            }
        }

        impl PartialEq for $name {
            /// Entries are compared in order.
            fn eq(&self, other: &Self) -> bool {
                *self.orig.borrow() == *other.orig.borrow()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(self.iter()).finish()
            }
        }
    };
}

define_map!(
    /// Ordered attribute key/value pairs with unique keys.
    ///
    /// A map returned by a record accessor aliases that record.
    AttributeMap,
    AttributesOrig,
    AttributeValue
);

define_map!(
    /// Ordered string labels with unique keys.
    StringMap,
    LabelsOrig,
    String
);

pub(crate) fn attributes_from_proto(proto: Vec<KeyValue>) -> AttributesOrig {
    proto
        .into_iter()
        .map(|kv| (kv.key, AttributeValue::from_proto_field(kv.value)))
        .collect()
}

pub(crate) fn attributes_to_proto(orig: &AttributesOrig) -> Vec<KeyValue> {
    orig.iter().map(|(k, v)| key_value(k, v)).collect()
}

pub(crate) fn attributes_encoded_len(tag: u32, orig: &AttributesOrig) -> usize {
    orig.iter()
        .map(|(k, v)| message_encoded_len(tag, key_value_len(k, v)))
        .sum()
}

pub(crate) fn labels_from_proto(proto: Vec<StringKeyValue>) -> LabelsOrig {
    proto.into_iter().map(|kv| (kv.key, kv.value)).collect()
}

pub(crate) fn labels_to_proto(orig: &LabelsOrig) -> Vec<StringKeyValue> {
    orig.iter()
        .map(|(key, value)| StringKeyValue {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

pub(crate) fn labels_encoded_len(tag: u32, orig: &LabelsOrig) -> usize {
    let string_len = |tag: u32, s: &String| {
        if s.is_empty() {
            0
        } else {
            string::encoded_len(tag, s)
        }
    };
    orig.iter()
        .map(|(k, v)| {
            message_encoded_len(tag, string_len(1, k) + string_len(2, v))
        })
        .sum()
}

#[cfg(test)]
pub(crate) fn generate_test_attribute_map() -> AttributeMap {
    let tv = AttributeMap::new();
    fill_test_attribute_map(&tv);
    tv
}

#[cfg(test)]
pub(crate) fn fill_test_attribute_map(tv: &AttributeMap) {
    tv.init_from_map([("k", AttributeValue::from("v"))]);
}

#[cfg(test)]
pub(crate) fn generate_test_string_map() -> StringMap {
    let tv = StringMap::new();
    fill_test_string_map(&tv);
    tv
}

#[cfg(test)]
pub(crate) fn fill_test_string_map(tv: &StringMap) {
    tv.init_from_map([("k", "v")]);
}
