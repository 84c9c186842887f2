use super::{CmdMessage, CmdResult};
use crate::codec;
use crate::error::{CardzError, Result};
use crate::store::CardStore;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Imports PDFs from `source` that are not already present by content.
///
/// Presence is a SHA-256 digest match against any PDF in the working
/// directory, card or not, so a file that was merely renamed or rescheduled
/// is never imported twice. `keep_stamps` preserves a valid stamp prefix
/// found on the source name; otherwise imports arrive as new cards.
pub fn run<S: CardStore>(store: &mut S, source: &Path, keep_stamps: bool) -> Result<CmdResult> {
    if !source.is_dir() {
        return Err(CardzError::InvalidDirectory(source.to_path_buf()));
    }

    let mut known = HashSet::new();
    for name in store.list()? {
        if codec::is_pdf(&name) {
            known.insert(digest(&store.read_bytes(&name)?));
        }
    }

    let mut result = CmdResult::default();
    let mut imported = 0;
    let mut skipped = 0;
    for (name, path) in source_pdfs(source)? {
        let bytes = fs::read(&path).map_err(CardzError::Io)?;
        if !known.insert(digest(&bytes)) {
            skipped += 1;
            continue;
        }
        let target = target_name(&name, keep_stamps);
        if store.exists(&target) {
            result.add_message(CmdMessage::warning(format!(
                "Already exists, skipping: {}",
                target
            )));
            skipped += 1;
            continue;
        }
        store.write_bytes(&target, &bytes)?;
        result.add_message(CmdMessage::info(format!("Imported: {}", name)));
        imported += 1;
    }

    result.add_message(CmdMessage::success(format!(
        "{} imported, {} skipped",
        imported, skipped
    )));
    Ok(result)
}

/// Depth-1 PDFs in the source directory, sorted by name.
fn source_pdfs(source: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(source).map_err(CardzError::Io)? {
        let entry = entry.map_err(CardzError::Io)?;
        if !entry.file_type().map_err(CardzError::Io)?.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if codec::is_pdf(&name) {
            entries.push((name, entry.path()));
        }
    }
    entries.sort();
    Ok(entries)
}

/// `keep_stamps` keeps a valid stamp prefix on the source name; otherwise a
/// stamped source is reset to the sentinel pair. Unstamped sources get the
/// sentinel either way.
fn target_name(name: &str, keep_stamps: bool) -> String {
    match codec::decode(name) {
        Ok(card) if keep_stamps => card.filename(),
        Ok(card) => codec::encode(0, 0, &card.title),
        Err(_) => codec::encode(0, 0, name),
    }
}

fn digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn source_with(files: &[(&str, &[u8])]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, bytes) in files {
            fs::write(dir.path().join(name), bytes).unwrap();
        }
        dir
    }

    #[test]
    fn missing_source_is_an_invalid_directory() {
        let mut fixture = StoreFixture::new();
        let err = run(&mut fixture.store, Path::new("/no/such/dir"), false).unwrap_err();
        assert!(matches!(err, CardzError::InvalidDirectory(_)));
    }

    #[test]
    fn new_content_arrives_with_the_sentinel_pair() {
        let source = source_with(&[("Algebra.pdf", b"%PDF alpha")]);
        let mut fixture = StoreFixture::new();

        run(&mut fixture.store, source.path(), false).unwrap();

        assert!(fixture
            .store
            .exists("000000000000-000000000000-Algebra.pdf"));
    }

    #[test]
    fn known_content_is_skipped_even_under_another_name() {
        let source = source_with(&[("Renamed.pdf", b"%PDF-1.4")]);
        // StoreFixture cards all share the same placeholder payload.
        let mut fixture = StoreFixture::new().with_scheduled_card(900, 100, "Algebra.pdf");

        let result = run(&mut fixture.store, source.path(), false).unwrap();

        assert!(!fixture
            .store
            .exists("000000000000-000000000000-Renamed.pdf"));
        assert!(result.messages.last().unwrap().content.contains("0 imported"));
    }

    #[test]
    fn stamped_source_is_reset_without_keep_stamps() {
        let source = source_with(&[("000000000900-000000000100-Seen.pdf", b"%PDF seen")]);
        let mut fixture = StoreFixture::new();

        run(&mut fixture.store, source.path(), false).unwrap();

        assert!(fixture.store.exists("000000000000-000000000000-Seen.pdf"));
    }

    #[test]
    fn stamped_source_is_preserved_with_keep_stamps() {
        let source = source_with(&[("000000000900-000000000100-Seen.pdf", b"%PDF seen")]);
        let mut fixture = StoreFixture::new();

        run(&mut fixture.store, source.path(), true).unwrap();

        assert!(fixture.store.exists("000000000900-000000000100-Seen.pdf"));
    }

    #[test]
    fn duplicate_content_within_the_source_imports_once() {
        let source = source_with(&[("One.pdf", b"%PDF same"), ("Two.pdf", b"%PDF same")]);
        let mut fixture = StoreFixture::new();

        let result = run(&mut fixture.store, source.path(), false).unwrap();

        assert!(fixture.store.exists("000000000000-000000000000-One.pdf"));
        assert!(!fixture.store.exists("000000000000-000000000000-Two.pdf"));
        assert!(result
            .messages
            .last()
            .unwrap()
            .content
            .contains("1 imported, 1 skipped"));
    }

    #[test]
    fn occupied_target_name_warns_and_skips() {
        let source = source_with(&[("Algebra.pdf", b"%PDF other")]);
        let mut fixture = StoreFixture::new().with_new_card("Algebra.pdf");

        let result = run(&mut fixture.store, source.path(), false).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("skipping")));
    }

    #[test]
    fn non_pdfs_in_the_source_are_ignored() {
        let source = source_with(&[("notes.txt", b"text")]);
        let mut fixture = StoreFixture::new();

        let result = run(&mut fixture.store, source.path(), false).unwrap();
        assert!(result.messages.last().unwrap().content.contains("0 imported"));
    }
}
