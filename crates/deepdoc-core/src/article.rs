//! Article records returned by the search service.
//!
//! The service ships `occurrences` and `categories` as JSON documents
//! encoded inside string fields. Both are decoded here, while the response
//! is deserialized, so rendering code only ever sees typed values and a
//! malformed field fails the whole response instead of a single view.

use std::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, DeserializeOwned, MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::error::Result;

/// Body of every search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matched documents, in the order the service ranked them.
    #[serde(default)]
    pub results: Vec<Article>,
}

impl SearchResponse {
    /// Decode a response body.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One indexed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Path of the source PDF, unique within a result set.
    pub path: String,

    /// Document title.
    pub title: String,

    /// How often each query term occurs in the document.
    #[serde(default)]
    pub occurrences: Occurrences,

    /// Tags found in the document, grouped by category.
    #[serde(default)]
    pub categories: Categories,

    /// Total term matches, when the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
}

/// A query term and its frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCount {
    pub term: String,
    pub count: u32,
}

/// Term frequencies in the order the service listed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Occurrences(Vec<TermCount>);

impl Occurrences {
    pub fn new(entries: Vec<TermCount>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TermCount> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|t| u64::from(t.count)).sum()
    }
}

/// A tag and how often it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub count: u32,
}

/// A category with the tags found under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub tags: Vec<Tag>,
}

impl Category {
    /// Tags ordered by descending count. Equal counts keep their received
    /// order.
    pub fn tags_by_count(&self) -> Vec<&Tag> {
        let mut tags: Vec<&Tag> = self.tags.iter().collect();
        tags.sort_by(|a, b| b.count.cmp(&a.count));
        tags
    }
}

/// Categories in the order the service listed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Categories(Vec<Category>);

impl Categories {
    pub fn new(categories: Vec<Category>) -> Self {
        Self(categories)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a category by name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.0.iter().find(|c| c.name == name)
    }
}

/// JSON object entries in document order.
struct OrderedMap<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Accepts either an inline JSON object or a string holding one.
struct Encoded<T>(PhantomData<T>);

impl<'de, T: DeserializeOwned> Visitor<'de> for Encoded<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object or a string containing one")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<T, E> {
        serde_json::from_str(v).map_err(|e| E::custom(format!("invalid encoded mapping: {e}")))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<T, A::Error> {
        T::deserialize(de::value::MapAccessDeserializer::new(map))
    }
}

impl<'de> Deserialize<'de> for Occurrences {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let OrderedMap(entries) =
            deserializer.deserialize_any(Encoded::<OrderedMap<u32>>(PhantomData))?;
        Ok(Self(
            entries
                .into_iter()
                .map(|(term, count)| TermCount { term, count })
                .collect(),
        ))
    }
}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let OrderedMap(entries) = deserializer
            .deserialize_any(Encoded::<OrderedMap<Vec<(String, u32)>>>(PhantomData))?;
        Ok(Self(
            entries
                .into_iter()
                .map(|(name, tags)| Category {
                    name,
                    tags: tags
                        .into_iter()
                        .map(|(name, count)| Tag { name, count })
                        .collect(),
                })
                .collect(),
        ))
    }
}

impl Serialize for Occurrences {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.term, &entry.count)?;
        }
        map.end()
    }
}

impl Serialize for Categories {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            let tags: Vec<(&str, u32)> = category
                .tags
                .iter()
                .map(|t| (t.name.as_str(), t.count))
                .collect();
            map.serialize_entry(&category.name, &tags)?;
        }
        map.end()
    }
}
