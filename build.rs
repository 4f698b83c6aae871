use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

const REGISTRY: &str = "catalogs/books.json";

fn main() {
    println!("cargo:rerun-if-changed={REGISTRY}");
    println!("cargo:rerun-if-changed=build.rs");

    let text = std::fs::read_to_string(Path::new(REGISTRY))
        .unwrap_or_else(|e| fail(&format!("cannot read {REGISTRY}: {e}")));
    let root: Value = serde_json::from_str(&text)
        .unwrap_or_else(|e| fail(&format!("{REGISTRY} is not valid JSON: {e}")));

    if root.get("version").and_then(Value::as_str).is_none() {
        fail("registry needs a string \"version\"");
    }
    let books = root
        .get("books")
        .and_then(Value::as_array)
        .unwrap_or_else(|| fail("registry needs a \"books\" array"));

    let mut check = RegistryCheck::default();
    for (index, book) in books.iter().enumerate() {
        check.book(index, book);
    }

    println!(
        "cargo:warning=Book registry: {} books, {} names and aliases",
        books.len(),
        check.lookup_names.len()
    );
}

/// Abort the build with a message pointing at the registry file
fn fail(message: &str) -> ! {
    panic!("\n\nbook registry ({REGISTRY}): {message}\n")
}

/// Names already claimed, mapped to the book that claimed them
#[derive(Default)]
struct RegistryCheck {
    lookup_names: HashMap<String, String>,
    store_keys: HashMap<String, String>,
}

impl RegistryCheck {
    fn book(&mut self, index: usize, book: &Value) {
        let text = |key: &str| book.get(key).and_then(Value::as_str);

        let Some(name) = text("name") else {
            fail(&format!("book #{index} has no \"name\""));
        };
        if text("code").is_none() {
            fail(&format!("{name} has no \"code\""));
        }
        let Some(store_key) = text("store_key") else {
            fail(&format!("{name} has no \"store_key\""));
        };

        // Store keys are file stems in the verse store
        if store_key.is_empty() || !store_key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            fail(&format!("{name}: store key {store_key:?} must be ASCII letters, digits or '_'"));
        }
        if let Some(other) = self.store_keys.insert(store_key.to_string(), name.to_string()) {
            fail(&format!("store key {store_key:?} used by both {other} and {name}"));
        }

        let aliases = book
            .get("aliases")
            .and_then(Value::as_array)
            .map(|a| a.iter().filter_map(Value::as_str).collect::<Vec<_>>())
            .unwrap_or_default();

        for lookup in std::iter::once(name).chain(aliases) {
            if let Some(other) = self.lookup_names.insert(lookup.to_string(), name.to_string()) {
                fail(&format!("{lookup:?} names both {other} and {name}"));
            }
        }
    }
}
