//! Resource name de-duplication for converted Data Packages.

use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

/// Rename repeated resource names so every resource in the list is unique.
///
/// The first resource with a given name keeps it. Later ones get a numeric
/// suffix counting up from zero per base name, so `a, a, a` becomes
/// `a, a0, a1`. A suffixed name that is already in use is skipped.
pub fn ensure_unique_names(resources: &mut [Map<String, Value>]) {
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::new();

    for resource in resources.iter_mut() {
        let Some(name) = resource.get("name").and_then(Value::as_str).map(str::to_owned) else {
            continue;
        };

        if !taken.contains(&name) {
            counters.entry(name.clone()).or_insert(0);
            taken.insert(name);
            continue;
        }

        let counter = counters.entry(name.clone()).or_insert(0);
        let renamed = loop {
            let candidate = format!("{name}{counter}");
            *counter += 1;
            if !taken.contains(&candidate) {
                break candidate;
            }
        };

        tracing::trace!("renaming duplicate resource {name} to {renamed}");
        taken.insert(renamed.clone());
        resource.insert("name".to_owned(), Value::String(renamed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(names: &[&str]) -> Vec<Map<String, Value>> {
        names
            .iter()
            .map(|name| json!({"name": name}).as_object().cloned().unwrap())
            .collect()
    }

    fn names_of(resources: &[Map<String, Value>]) -> Vec<&str> {
        resources
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_repeated_names_get_counters() {
        let mut resources = named(&["a", "a", "a"]);
        ensure_unique_names(&mut resources);
        assert_eq!(names_of(&resources), ["a", "a0", "a1"]);
    }

    #[test]
    fn test_counters_are_per_name() {
        let mut resources = named(&["a", "b", "a", "b", "c"]);
        ensure_unique_names(&mut resources);
        assert_eq!(names_of(&resources), ["a", "b", "a0", "b0", "c"]);
    }

    #[test]
    fn test_suffix_collisions_are_skipped() {
        let mut resources = named(&["a", "a0", "a"]);
        ensure_unique_names(&mut resources);
        assert_eq!(names_of(&resources), ["a", "a0", "a1"]);

        let mut resources = named(&["a", "a", "a0"]);
        ensure_unique_names(&mut resources);
        assert_eq!(names_of(&resources), ["a", "a0", "a00"]);
    }
}
