//! Declarative field normalization for upstream JSON.
//!
//! Each provider describes its entities as an ordered list of candidate
//! source paths per target field, and one generic interpreter projects the
//! upstream JSON into the canonical shapes. Adding a provider means adding
//! a table, not new code paths.
//!
//! The interpreter is deliberately lenient: upstream APIs rename fields,
//! wrap lists in objects, and return null where an empty list is meant, so
//! anything that does not match degrades to `None`/empty instead of erroring.

use serde_json::Value;
use thingscout_types::{Collection, Thing, ThingFile};

/// Ordered candidate source paths for each canonical entity field.
///
/// Paths are dot-separated and resolved against nested objects, so
/// `"thing.name"` prefers the name inside a `thing` wrapper object over a
/// top-level `name`. The first candidate that resolves to a non-null value
/// wins.
#[derive(Debug, Clone, Copy)]
pub struct EntityMap {
    pub id: &'static [&'static str],
    pub name: &'static [&'static str],
    pub description: &'static [&'static str],
    pub thumbnail: &'static [&'static str],
    pub url: &'static [&'static str],
}

/// Resolve a dot-separated path against nested JSON objects.
fn resolve<'a>(item: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = item;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    if current.is_null() { None } else { Some(current) }
}

/// First candidate path resolving to a non-null scalar, as a string.
///
/// Ids arrive as JSON numbers on some endpoints and strings on others; both
/// coerce.
fn select(item: &Value, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|path| {
        match resolve(item, path)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    })
}

/// Coerce a list body to its items, unwrapping the `hits` wrapper some
/// search endpoints use.
///
/// Upstream returns null in the `hits` field when there are no results
/// instead of an empty list, so anything that is not a non-null array yields
/// an empty slice rather than an error.
fn list_items(body: Option<&Value>) -> &[Value] {
    const EMPTY: &[Value] = &[];
    let Some(body) = body else { return EMPTY };
    let unwrapped = match body {
        Value::Object(obj) if obj.contains_key("hits") => &obj["hits"],
        other => other,
    };
    unwrapped.as_array().map_or(EMPTY, Vec::as_slice)
}

/// Project one upstream object into a [`Thing`].
///
/// An absent, non-object, or empty-object body is "not found" (`None`),
/// never a parse error. Absent fields map to empty string/`None`; they do
/// not drop the entity.
#[must_use]
pub fn thing(map: &EntityMap, item: &Value) -> Option<Thing> {
    match item.as_object() {
        Some(obj) if !obj.is_empty() => {}
        _ => return None,
    }
    Some(Thing {
        id: select(item, map.id).unwrap_or_default(),
        name: select(item, map.name).unwrap_or_default(),
        description: select(item, map.description),
        thumbnail: select(item, map.thumbnail),
        url: select(item, map.url),
    })
}

/// Project one upstream object into a [`ThingFile`].
#[must_use]
pub fn thing_file(map: &EntityMap, item: &Value) -> Option<ThingFile> {
    match item.as_object() {
        Some(obj) if !obj.is_empty() => {}
        _ => return None,
    }
    Some(ThingFile {
        id: select(item, map.id).unwrap_or_default(),
        name: select(item, map.name).unwrap_or_default(),
        thumbnail: select(item, map.thumbnail),
        url: select(item, map.url),
    })
}

/// Project one upstream object into a [`Collection`].
#[must_use]
pub fn collection(map: &EntityMap, item: &Value) -> Option<Collection> {
    match item.as_object() {
        Some(obj) if !obj.is_empty() => {}
        _ => return None,
    }
    Some(Collection {
        id: select(item, map.id).unwrap_or_default(),
        name: select(item, map.name).unwrap_or_default(),
        description: select(item, map.description),
        thumbnail: select(item, map.thumbnail),
        url: select(item, map.url),
    })
}

/// Project a list body into Things, per the [`list_items`] coercion rules.
#[must_use]
pub fn things(map: &EntityMap, body: Option<&Value>) -> Vec<Thing> {
    list_items(body)
        .iter()
        .filter_map(|item| thing(map, item))
        .collect()
}

/// Project a list body into ThingFiles.
#[must_use]
pub fn thing_files(map: &EntityMap, body: Option<&Value>) -> Vec<ThingFile> {
    list_items(body)
        .iter()
        .filter_map(|item| thing_file(map, item))
        .collect()
}

/// Project a list body into Collections.
#[must_use]
pub fn collections(map: &EntityMap, body: Option<&Value>) -> Vec<Collection> {
    list_items(body)
        .iter()
        .filter_map(|item| collection(map, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MAP: EntityMap = EntityMap {
        id: &["id"],
        name: &["thing.name", "name"],
        description: &["description_html", "description"],
        thumbnail: &["thumbnail"],
        url: &["public_url", "url"],
    };

    #[test]
    fn test_resolve_nested_path() {
        let v = json!({"creator": {"public_url": "https://example.com/maker"}});
        assert_eq!(
            resolve(&v, "creator.public_url").unwrap(),
            "https://example.com/maker"
        );
    }

    #[test]
    fn test_resolve_null_is_absent() {
        let v = json!({"name": null});
        assert!(resolve(&v, "name").is_none());
    }

    #[test]
    fn test_select_coerces_numeric_ids() {
        let v = json!({"id": 4486012});
        assert_eq!(select(&v, &["id"]).as_deref(), Some("4486012"));
    }

    #[test]
    fn test_select_ordered_fallback() {
        let both = json!({"public_url": "A", "url": "B"});
        assert_eq!(select(&both, &["public_url", "url"]).as_deref(), Some("A"));
        let only_url = json!({"url": "B"});
        assert_eq!(
            select(&only_url, &["public_url", "url"]).as_deref(),
            Some("B")
        );
    }

    #[test]
    fn test_thing_nested_name_takes_priority() {
        let v = json!({"id": 1, "thing": {"name": "X"}, "name": "Y"});
        assert_eq!(thing(&MAP, &v).unwrap().name, "X");
    }

    #[test]
    fn test_thing_top_level_name_without_wrapper() {
        let v = json!({"id": 1, "name": "Y"});
        assert_eq!(thing(&MAP, &v).unwrap().name, "Y");
    }

    #[test]
    fn test_thing_null_thing_wrapper_falls_back() {
        let v = json!({"id": 1, "thing": null, "name": "Y"});
        assert_eq!(thing(&MAP, &v).unwrap().name, "Y");
    }

    #[test]
    fn test_thing_empty_object_is_none() {
        assert!(thing(&MAP, &json!({})).is_none());
    }

    #[test]
    fn test_thing_null_is_none() {
        assert!(thing(&MAP, &Value::Null).is_none());
        assert!(thing(&MAP, &json!([1, 2])).is_none());
    }

    #[test]
    fn test_thing_description_prefers_html() {
        let v = json!({"id": 1, "description_html": "<p>x</p>", "description": "x"});
        assert_eq!(thing(&MAP, &v).unwrap().description.as_deref(), Some("<p>x</p>"));
    }

    #[test]
    fn test_thing_absent_fields_do_not_drop_entity() {
        let t = thing(&MAP, &json!({"id": 7})).unwrap();
        assert_eq!(t.id, "7");
        assert_eq!(t.name, "");
        assert!(t.description.is_none());
        assert!(t.url.is_none());
    }

    #[test]
    fn test_things_null_hits_is_empty_list() {
        let body = json!({"hits": null});
        assert!(things(&MAP, Some(&body)).is_empty());
    }

    #[test]
    fn test_things_hits_wrapper_equals_unwrapped() {
        let items = json!([
            {"id": 1, "name": "a"},
            {"id": 2, "name": "b"}
        ]);
        let wrapped = json!({"hits": items.clone()});
        assert_eq!(things(&MAP, Some(&wrapped)), things(&MAP, Some(&items)));
        assert_eq!(things(&MAP, Some(&items)).len(), 2);
    }

    #[test]
    fn test_things_non_list_is_empty() {
        assert!(things(&MAP, Some(&json!({"error": "nope"}))).is_empty());
        assert!(things(&MAP, Some(&json!("text"))).is_empty());
        assert!(things(&MAP, None).is_empty());
    }

    #[test]
    fn test_collection_url_from_creator() {
        const COLLECTION_MAP: EntityMap = EntityMap {
            id: &["id"],
            name: &["name"],
            description: &["description"],
            thumbnail: &["thumbnail"],
            url: &["creator.public_url"],
        };
        let with_creator = json!({"id": 9, "name": "Boats", "creator": {"public_url": "C"}});
        assert_eq!(
            collection(&COLLECTION_MAP, &with_creator).unwrap().url.as_deref(),
            Some("C")
        );
        let without_creator = json!({"id": 9, "name": "Boats"});
        assert!(
            collection(&COLLECTION_MAP, &without_creator)
                .unwrap()
                .url
                .is_none()
        );
    }

    #[test]
    fn test_thing_files_list() {
        const FILE_MAP: EntityMap = EntityMap {
            id: &["id"],
            name: &["name"],
            description: &[],
            thumbnail: &["thumbnail"],
            url: &["public_url", "url"],
        };
        let body = json!([
            {"id": 10, "name": "hull.stl", "url": "https://example.com/f/10"},
            null,
            {"id": 11, "name": "deck.stl"}
        ]);
        let files = thing_files(&FILE_MAP, Some(&body));
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].id, "10");
        assert_eq!(files[0].url.as_deref(), Some("https://example.com/f/10"));
        assert_eq!(files[1].name, "deck.stl");
    }
}
