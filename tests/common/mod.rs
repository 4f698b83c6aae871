//! Shared fixtures: a small verse store and calendar on disk.

#![allow(dead_code)]

use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

fn verses(chapter: u32, numbers: impl IntoIterator<Item = u32>) -> serde_json::Value {
    let verses: Vec<_> = numbers
        .into_iter()
        .map(|v| json!({"verse": v, "text": format!("text of {chapter}:{v}")}))
        .collect();
    json!({"chapter": chapter, "verses": verses})
}

fn write_book(dir: &Path, store_key: &str, name: &str, chapters: Vec<serde_json::Value>) {
    let book = json!({"book": name, "chapters": chapters});
    std::fs::write(
        dir.join(format!("{store_key}.json")),
        serde_json::to_string_pretty(&book).unwrap(),
    )
    .unwrap();
}

/// Verse store with Genesis 3, Job 2-4 (chapter 3 split over two records),
/// 1 Kings 2, Psalms 1 and John 1
pub fn verse_store() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_book(root, "genesis", "Genesis", vec![verses(3, 1..=24)]);
    write_book(
        root,
        "job",
        "Job",
        vec![
            verses(2, 1..=13),
            verses(3, 1..=14),
            verses(3, 15..=26),
            verses(4, 1..=21),
        ],
    );
    write_book(root, "1_kings", "1 Kings", vec![verses(2, 1..=46)]);
    write_book(root, "psalms", "Psalms", vec![verses(1, 1..=6)]);
    // John 1:3 deliberately missing
    write_book(root, "john", "John", vec![verses(1, [1, 2, 4, 5])]);

    dir
}

pub const CALENDAR: &str = "\
📅 Friday, October 16, 2026
[Saints]: Martyr Longinus the Centurion
[Feasts]:
[Fasting]: Fast Day (Fish Allowed)
[Readings]: Genesis 3:1-2 • Job 2:13-3:1
📅 Saturday, October 17, 2026 (Tone 3)
[Saints]: Prophet Hosea
[Feasts]:
[Fasting]: Fast-free
[Readings]: Composite 1 - Genesis 3:1-3 • Psalms 1:1-2; John 1:1
📅 Sunday, October 18, 2026
[Saints]: Apostle and Evangelist Luke
[Readings]:
";

pub fn calendar_file(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("calendar.txt");
    std::fs::write(&path, CALENDAR).unwrap();
    path
}
