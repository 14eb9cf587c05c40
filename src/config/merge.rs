use crate::config::model::{ConfigDocument, ScreenEntry};

/// Replace (or insert) the entry for `entry.name`.
///
/// Entries for other screens keep their relative order and the new entry is appended last. All
/// other document settings are copied unchanged. Merging the same entry twice yields the same
/// document as merging it once.
pub fn merge_screen(doc: &ConfigDocument, entry: ScreenEntry) -> ConfigDocument {
    let mut screens: Vec<ScreenEntry> = doc
        .screens
        .iter()
        .filter(|existing| existing.name != entry.name)
        .cloned()
        .collect();
    screens.push(entry);

    ConfigDocument {
        screens,
        settings: doc.settings.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/merge.rs"]
mod tests;
