// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

use std::fmt::Formatter;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::Scalar;

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = Entries<V>;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a mapping")
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Entries::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Entries(Vec::with_capacity(map.size_hint().unwrap_or_default()));
        while let Some((key, value)) = map.next_entry::<Scalar, V>()? {
            entries.insert(key.into(), value);
        }

        Ok(entries)
    }
}

/// A mapping which remembers the order of its keys
///
/// Keys are kept in the order they first appear in the document. A key that
/// appears again replaces the earlier value but keeps the earlier position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entries<V>(Vec<(String, V)>);

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntriesVisitor(PhantomData))
    }
}

impl<V> Entries<V> {
    fn insert(&mut self, key: String, value: V) {
        match self.0.iter_mut().find(|(k, ..)| *k == key) {
            Some((.., v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::Entries;

    #[test]
    fn order() {
        let entries: Entries<u8> = serde_yaml_ng::from_str("b: 1\na: 2\nc: 3\n").unwrap();
        let keys: Vec<_> = entries.iter().map(|(k, ..)| k).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn duplicate() {
        let entries: Entries<u8> = serde_yaml_ng::from_str("b: 1\na: 2\nb: 3\n").unwrap();
        let pairs: Vec<_> = entries.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(pairs, [("b", 3), ("a", 2)]);
    }

    #[test]
    fn scalar_keys() {
        let entries: Entries<u8> = serde_yaml_ng::from_str("1.0: 1\n2: 2\n").unwrap();
        let pairs: Vec<_> = entries.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(pairs, [("1.0", 1), ("2", 2)]);
    }

    #[test]
    fn null() {
        let entries: Entries<u8> = serde_yaml_ng::from_str("~").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn sequence() {
        assert!(serde_yaml_ng::from_str::<Entries<u8>>("[1, 2]").is_err());
    }
}
