// kubescrub-core/tests/file_pass_tests.rs
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use kubescrub_core::{
    clean_file, clean_tree, discover_files, DocumentSanitizer, FileOutcome, KubescrubError,
    RunObserver, SilentObserver, WriteMode,
};

const POD_WITH_STATUS: &str = "kind: Pod\nmetadata:\n  name: a\n  uid: '1'\nstatus:\n  phase: Running\n";
const POD_CLEAN: &str = "kind: Pod\nmetadata:\n  name: a\n";

fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

#[derive(Default)]
struct Recorder {
    started: Vec<PathBuf>,
    failed: Vec<(PathBuf, String)>,
}

impl RunObserver for Recorder {
    fn on_file_start(&mut self, path: &Path) {
        self.started.push(path.to_path_buf());
    }

    fn on_file_error(&mut self, path: &Path, error: &KubescrubError) {
        self.failed.push((path.to_path_buf(), error.to_string()));
    }
}

#[test]
fn discovery_is_recursive_sorted_and_filtered() -> Result<()> {
    let dir = TempDir::new()?;
    write(dir.path(), "b.yaml", "kind: A\n");
    write(dir.path(), "nested/deep/a.yaml", "kind: A\n");
    write(dir.path(), "notes.txt", "kind: A\n");
    write(dir.path(), "other.yml", "kind: A\n");

    let files = discover_files(dir.path(), "yaml");
    assert_eq!(
        files,
        vec![dir.path().join("b.yaml"), dir.path().join("nested/deep/a.yaml")]
    );
    Ok(())
}

#[test]
fn missing_root_yields_nothing() {
    assert!(discover_files(Path::new("/nonexistent/kubescrub-root"), "yaml").is_empty());
}

#[test_log::test]
fn in_place_mode_overwrites_the_same_path() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write(dir.path(), "pod.yaml", POD_WITH_STATUS);

    let outcome = clean_file(&path, &DocumentSanitizer::default(), WriteMode::InPlace)?;
    assert!(matches!(outcome, FileOutcome::Cleaned(_)));
    assert_eq!(fs::read_to_string(&path)?, POD_CLEAN);
    Ok(())
}

#[test]
fn atomic_mode_matches_in_place_output() -> Result<()> {
    let dir = TempDir::new()?;
    let in_place = write(dir.path(), "a.yaml", POD_WITH_STATUS);
    let atomic = write(dir.path(), "b.yaml", POD_WITH_STATUS);
    let sanitizer = DocumentSanitizer::default();

    clean_file(&in_place, &sanitizer, WriteMode::InPlace)?;
    clean_file(&atomic, &sanitizer, WriteMode::Atomic)?;

    assert_eq!(fs::read_to_string(&in_place)?, fs::read_to_string(&atomic)?);
    let leftovers = fs::read_dir(dir.path())?.count();
    assert_eq!(leftovers, 2);
    Ok(())
}

#[test]
fn check_mode_never_writes() -> Result<()> {
    let dir = TempDir::new()?;
    let dirty = write(dir.path(), "dirty.yaml", POD_WITH_STATUS);
    let clean = write(dir.path(), "clean.yaml", POD_CLEAN);
    let sanitizer = DocumentSanitizer::default();

    assert!(matches!(
        clean_file(&dirty, &sanitizer, WriteMode::Check)?,
        FileOutcome::Cleaned(_)
    ));
    assert!(matches!(
        clean_file(&clean, &sanitizer, WriteMode::Check)?,
        FileOutcome::Unchanged(_)
    ));
    assert_eq!(fs::read_to_string(&dirty)?, POD_WITH_STATUS);
    Ok(())
}

#[test]
fn empty_file_is_left_untouched() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write(dir.path(), "empty.yaml", "");
    let before = fs::metadata(&path)?.modified()?;

    let outcome = clean_file(&path, &DocumentSanitizer::default(), WriteMode::InPlace)?;
    assert_eq!(outcome, FileOutcome::SkippedEmpty);
    assert_eq!(fs::metadata(&path)?.len(), 0);
    assert_eq!(fs::metadata(&path)?.modified()?, before);
    Ok(())
}

#[test]
fn decode_failure_leaves_file_and_returns_error() -> Result<()> {
    let dir = TempDir::new()?;
    let broken = "kind: Pod\nmetadata: [unterminated\n";
    let path = write(dir.path(), "broken.yaml", broken);

    let err = clean_file(&path, &DocumentSanitizer::default(), WriteMode::InPlace).unwrap_err();
    assert!(matches!(err, KubescrubError::Decode(_)));
    assert_eq!(fs::read_to_string(&path)?, broken);
    Ok(())
}

#[test_log::test]
fn tree_run_skips_failures_and_empty_files() -> Result<()> {
    let dir = TempDir::new()?;
    let good = write(dir.path(), "apps/pod.yaml", POD_WITH_STATUS);
    let broken = write(dir.path(), "apps/broken.yaml", "a: [b\n");
    let empty = write(dir.path(), "empty.yaml", "");
    let later = write(dir.path(), "z/sa.yaml", "kind: ServiceAccount\nsecrets: [x]\n");

    let mut recorder = Recorder::default();
    let summary = clean_tree(
        dir.path(),
        &DocumentSanitizer::default(),
        WriteMode::InPlace,
        &mut recorder,
    );

    assert_eq!(summary.cleaned, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped_empty, 1);
    assert_eq!(summary.processed(), 3);

    assert!(!recorder.started.contains(&empty));
    assert_eq!(recorder.failed.len(), 1);
    assert_eq!(recorder.failed[0].0, broken);

    assert_eq!(fs::read_to_string(&good)?, POD_CLEAN);
    assert_eq!(fs::read_to_string(&later)?, "kind: ServiceAccount\n");
    assert_eq!(fs::read_to_string(&empty)?, "");
    Ok(())
}

#[test]
fn second_run_is_a_no_op() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write(
        dir.path(),
        "multi.yaml",
        "kind: ConfigMap\ndata:\n  token: t\n---\nkind: Pod\nstatus: {}\n",
    );
    let sanitizer = DocumentSanitizer::default();

    clean_tree(dir.path(), &sanitizer, WriteMode::InPlace, &mut SilentObserver);
    let first = fs::read_to_string(&path)?;

    let summary = clean_tree(dir.path(), &sanitizer, WriteMode::Check, &mut SilentObserver);
    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.cleaned, 0);
    assert_eq!(fs::read_to_string(&path)?, first);
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlinked_yaml_is_discovered_and_cleaned() -> Result<()> {
    let dir = TempDir::new()?;
    let target = write(
        dir.path(),
        "store/cm-source.txt",
        "kind: ConfigMap\ndata: {DB_PASSWORD: hunter2}\n",
    );
    fs::create_dir_all(dir.path().join("configs"))?;
    let link = dir.path().join("configs/cm.yaml");
    std::os::unix::fs::symlink(&target, &link)?;

    let root = dir.path().join("configs");
    assert_eq!(discover_files(&root, "yaml"), vec![link.clone()]);

    let summary = clean_tree(&root, &DocumentSanitizer::default(), WriteMode::InPlace, &mut SilentObserver);
    assert_eq!(summary.cleaned, 1);
    assert!(fs::symlink_metadata(&link)?.file_type().is_symlink());
    assert_eq!(
        fs::read_to_string(&target)?,
        "kind: ConfigMap\ndata:\n  DB_PASSWORD: '***REDACTED***'\n"
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn atomic_mode_keeps_symlinks_in_place() -> Result<()> {
    let dir = TempDir::new()?;
    let target = write(dir.path(), "store/pod.txt", POD_WITH_STATUS);
    let link = dir.path().join("pod.yaml");
    std::os::unix::fs::symlink(&target, &link)?;

    clean_file(&link, &DocumentSanitizer::default(), WriteMode::Atomic)?;

    assert!(fs::symlink_metadata(&link)?.file_type().is_symlink());
    assert_eq!(fs::read_to_string(&target)?, POD_CLEAN);
    Ok(())
}

#[test]
fn check_mode_flags_comment_only_rewrites() -> Result<()> {
    let dir = TempDir::new()?;
    let input = "kind: Pod  # password: hunter2\n";
    let path = write(dir.path(), "pod.yaml", input);
    let sanitizer = DocumentSanitizer::default();

    let outcome = clean_file(&path, &sanitizer, WriteMode::Check)?;
    let FileOutcome::Cleaned(stats) = outcome else {
        panic!("expected a pending change, got {:?}", outcome);
    };
    assert!(!stats.changed());
    assert_eq!(fs::read_to_string(&path)?, input);

    clean_file(&path, &sanitizer, WriteMode::InPlace)?;
    assert_eq!(fs::read_to_string(&path)?, "kind: Pod\n");
    assert!(matches!(
        clean_file(&path, &sanitizer, WriteMode::Check)?,
        FileOutcome::Unchanged(_)
    ));
    Ok(())
}

#[test]
fn check_mode_flags_dropped_null_documents() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write(dir.path(), "pod.yaml", "---\n---\nkind: Pod\n");
    assert!(matches!(
        clean_file(&path, &DocumentSanitizer::default(), WriteMode::Check)?,
        FileOutcome::Cleaned(_)
    ));
    Ok(())
}

#[test]
fn read_failure_is_reported_and_the_run_continues() -> Result<()> {
    let dir = TempDir::new()?;
    let unreadable = dir.path().join("a-binary.yaml");
    fs::write(&unreadable, [0xff, 0xfe, 0x00, 0x9f, b'\n'])?;
    let later = write(dir.path(), "b-pod.yaml", POD_WITH_STATUS);

    let mut recorder = Recorder::default();
    let summary = clean_tree(
        dir.path(),
        &DocumentSanitizer::default(),
        WriteMode::InPlace,
        &mut recorder,
    );

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.cleaned, 1);
    assert_eq!(recorder.failed.len(), 1);
    assert_eq!(recorder.failed[0].0, unreadable);
    assert!(recorder.failed[0].1.starts_with("I/O error on"), "{}", recorder.failed[0].1);
    assert_eq!(fs::read(&unreadable)?, vec![0xff, 0xfe, 0x00, 0x9f, b'\n']);
    assert_eq!(fs::read_to_string(&later)?, POD_CLEAN);
    Ok(())
}

#[test]
fn non_utf8_file_is_an_io_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("bad.yaml");
    fs::write(&path, [0xc3, 0x28])?;
    let err = clean_file(&path, &DocumentSanitizer::default(), WriteMode::InPlace).unwrap_err();
    assert!(matches!(err, KubescrubError::Io { .. }));
    Ok(())
}
