//! JSON helpers over a [`KeyValueStore`].
//!
//! The site keeps structured records (visitor logs, events, contact
//! messages) as JSON strings, and counters as decimal strings. Unreadable
//! values are treated as absent: a corrupt log starts over, a corrupt counter
//! restarts at zero.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::KeyValueStore;

/// Where [`push_capped`] places a new item, and which end it trims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Append to the end and drop the oldest items from the front.
    Append,
    /// Insert at the front and drop the oldest items from the end.
    Prepend,
}

/// Reads and deserializes the JSON value stored under `key`.
///
/// Returns `None` if the key is missing or the value does not parse.
pub fn read_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(key, error = %err, "ignoring unreadable stored value");
            None
        }
    }
}

/// Serializes `value` as JSON and stores it under `key`.
///
/// Serialization failures are logged and leave the previous value in place.
pub fn write_json<T, S>(store: &mut S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(err) => tracing::warn!(key, error = %err, "failed to serialize value"),
    }
}

/// Reads the JSON array stored under `key`, or an empty list.
pub fn read_list<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    read_json(store, key).unwrap_or_default()
}

/// Adds `item` to the JSON array under `key`, keeping at most `cap` items.
///
/// Existing entries are kept as raw JSON, so records written by older
/// versions survive even if their shape changed. Returns the new length.
pub fn push_capped<T, S>(store: &mut S, key: &str, item: &T, cap: usize, order: Order) -> usize
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let mut items: Vec<serde_json::Value> = read_list(&*store, key);

    let value = match serde_json::to_value(item) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to serialize list item");
            return items.len();
        }
    };

    match order {
        Order::Append => {
            items.push(value);
            if items.len() > cap {
                items.drain(..items.len() - cap);
            }
        }
        Order::Prepend => {
            items.insert(0, value);
            items.truncate(cap);
        }
    }

    write_json(store, key, &items);
    items.len()
}

/// Reads the counter stored under `key`; missing or unreadable counters are 0.
pub fn read_counter<S>(store: &S, key: &str) -> u64
where
    S: KeyValueStore + ?Sized,
{
    store
        .get(key)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}

/// Increments the counter stored under `key` and returns the new value.
pub fn increment_counter<S>(store: &mut S, key: &str) -> u64
where
    S: KeyValueStore + ?Sized,
{
    let next = read_counter(&*store, key).saturating_add(1);
    store.set(key, &next.to_string());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Visit {
        page: String,
    }

    #[test]
    fn test_read_json_missing() {
        let store = MemoryStore::new();
        let value: Option<Visit> = read_json(&store, "visit");
        assert!(value.is_none());
    }

    #[test]
    fn test_read_json_corrupt_is_none() {
        let store = MemoryStore::new().with_entry("visit", "{ nope");
        let value: Option<Visit> = read_json(&store, "visit");
        assert!(value.is_none());
    }

    #[test]
    fn test_write_then_read_json() {
        let mut store = MemoryStore::new();
        write_json(
            &mut store,
            "visit",
            &Visit {
                page: "home".into(),
            },
        );
        let value: Visit = read_json(&store, "visit").unwrap();
        assert_eq!(value.page, "home");
    }

    #[test]
    fn test_push_capped_append_drops_oldest() {
        let mut store = MemoryStore::new();
        for i in 0..5 {
            push_capped(&mut store, "log", &i, 3, Order::Append);
        }
        let items: Vec<i32> = read_list(&store, "log");
        assert_eq!(items, vec![2, 3, 4]);
    }

    #[test]
    fn test_push_capped_prepend_keeps_newest_first() {
        let mut store = MemoryStore::new();
        for i in 0..5 {
            push_capped(&mut store, "log", &i, 3, Order::Prepend);
        }
        let items: Vec<i32> = read_list(&store, "log");
        assert_eq!(items, vec![4, 3, 2]);
    }

    #[test]
    fn test_push_capped_resets_corrupt_list() {
        let mut store = MemoryStore::new().with_entry("log", "\"not a list\"");
        let len = push_capped(&mut store, "log", &"first", 10, Order::Append);
        assert_eq!(len, 1);
        let items: Vec<String> = read_list(&store, "log");
        assert_eq!(items, vec!["first"]);
    }

    #[test]
    fn test_counter_starts_at_zero() {
        let mut store = MemoryStore::new();
        assert_eq!(read_counter(&store, "views"), 0);
        assert_eq!(increment_counter(&mut store, "views"), 1);
        assert_eq!(increment_counter(&mut store, "views"), 2);
        assert_eq!(store.get("views").as_deref(), Some("2"));
    }

    #[test]
    fn test_counter_recovers_from_garbage() {
        let mut store = MemoryStore::new().with_entry("views", "NaN");
        assert_eq!(increment_counter(&mut store, "views"), 1);
    }
}
