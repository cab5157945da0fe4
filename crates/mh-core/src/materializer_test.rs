use super::*;
use crate::fs::OsFilesystem;
use crate::migration_name::MigrationName;
use crate::timestamp::Timestamp;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use tempfile::tempdir;

const TS: &str = "20240307090502007";

fn stamped(category: MigrationCategory, name: &str, sub: Option<&str>) -> MigrationRequest {
    MigrationRequest::new(
        category,
        MigrationName::parse(name).unwrap(),
        sub.map(str::to_string),
    )
    .stamp(Timestamp::parse(TS).unwrap())
    .unwrap()
}

/// In-memory filesystem that records writes and can fail on demand.
#[derive(Default)]
struct MemoryFs {
    dirs: RefCell<Vec<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    fail_writes_containing: Option<&'static str>,
}

impl Filesystem for MemoryFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.dirs.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().iter().any(|d| d == path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if let Some(marker) = self.fail_writes_containing {
            if path.to_string_lossy().contains(marker) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}

#[test]
fn test_plan_ddl_without_sub_directory() {
    let fs = MemoryFs::default();
    let m = Materializer::new(&fs, "");
    let result = m
        .plan(&stamped(MigrationCategory::Ddl, "add_users", None))
        .unwrap();

    assert_eq!(
        result.display_paths(),
        [
            format!("DDL/{TS}_add_users/up.sql"),
            format!("DDL/{TS}_add_users/down.sql"),
        ]
    );
    assert!(fs.dirs.borrow().is_empty());
    assert!(fs.files.borrow().is_empty());
}

#[test]
fn test_plan_with_sub_directory() {
    let fs = MemoryFs::default();
    let m = Materializer::new(&fs, "");
    let result = m
        .plan(&stamped(MigrationCategory::Ddl, "idx", Some("perf")))
        .unwrap();
    assert_eq!(result.display_paths()[0], format!("DDL/perf/{TS}_idx/up.sql"));
    assert_eq!(result.display_paths()[1], format!("DDL/perf/{TS}_idx/down.sql"));
}

#[test]
fn test_plan_dml_nested_sub_directory() {
    let fs = MemoryFs::default();
    let m = Materializer::new(&fs, "");
    let result = m
        .plan(&stamped(MigrationCategory::Dml, "seed", Some("a/b")))
        .unwrap();
    assert_eq!(result.display_paths()[0], format!("DML/a/b/{TS}_seed/up.sql"));
}

#[test]
fn test_plan_current_is_flat() {
    let fs = MemoryFs::default();
    let m = Materializer::new(&fs, "");
    let result = m
        .plan(&stamped(MigrationCategory::Current, "local", Some("perf")))
        .unwrap();
    assert_eq!(
        result.display_paths(),
        [
            format!("{TS}_local/up.sql"),
            format!("{TS}_local/down.sql"),
        ]
    );
}

#[test]
fn test_plan_uses_custom_layout() {
    let fs = MemoryFs::default();
    let m = Materializer::new(&fs, "").with_layout(Layout {
        ddl_dir: "schema".to_string(),
        dml_dir: "data".to_string(),
    });
    let ddl = m.plan(&stamped(MigrationCategory::Ddl, "x", None)).unwrap();
    let dml = m.plan(&stamped(MigrationCategory::Dml, "x", None)).unwrap();
    assert_eq!(to_slash(ddl.directory()), format!("schema/{TS}_x"));
    assert_eq!(to_slash(dml.directory()), format!("data/{TS}_x"));
}

#[test]
fn test_unstamped_request_rejected() {
    let fs = MemoryFs::default();
    let m = Materializer::new(&fs, "");
    let request = MigrationRequest::new(
        MigrationCategory::Ddl,
        MigrationName::parse("x").unwrap(),
        None,
    );
    assert!(matches!(
        m.materialize(&request),
        Err(CoreError::InvalidInput { .. })
    ));
    assert!(fs.dirs.borrow().is_empty());
}

#[test]
fn test_materialize_writes_same_template_to_both_files() {
    let fs = MemoryFs::default();
    let m = Materializer::new(&fs, "root").with_line_ending(LineEnding::Lf);
    let result = m
        .materialize(&stamped(MigrationCategory::Dml, "seed", None))
        .unwrap();

    let files = fs.files.borrow();
    let up = &files[&Path::new("root").join(result.up_path())];
    let down = &files[&Path::new("root").join(result.down_path())];
    assert_eq!(up, down);
    assert_eq!(up.as_slice(), Template::Dml.text().as_bytes());
    assert_eq!(
        fs.dirs.borrow().as_slice(),
        &[Path::new("root").join("DML").join(format!("{TS}_seed"))]
    );
}

#[test]
fn test_current_uses_ddl_template() {
    let fs = MemoryFs::default();
    let m = Materializer::new(&fs, "").with_line_ending(LineEnding::Lf);
    let result = m
        .materialize(&stamped(MigrationCategory::Current, "local", None))
        .unwrap();
    let files = fs.files.borrow();
    assert_eq!(
        files[result.up_path()].as_slice(),
        Template::Ddl.text().as_bytes()
    );
}

#[test]
fn test_materialize_all_preserves_order() {
    let fs = MemoryFs::default();
    let m = Materializer::new(&fs, "");
    let requests = vec![
        stamped(MigrationCategory::Ddl, "setup", None),
        stamped(MigrationCategory::Dml, "setup", None),
    ];
    let results = m.materialize_all(&requests).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0].directory().starts_with("DDL"));
    assert!(results[1].directory().starts_with("DML"));
    assert_eq!(fs.files.borrow().len(), 4);
}

#[test]
fn test_materialize_all_stops_at_first_failure() {
    let fs = MemoryFs {
        fail_writes_containing: Some("DML"),
        ..MemoryFs::default()
    };
    let m = Materializer::new(&fs, "");
    let requests = vec![
        stamped(MigrationCategory::Ddl, "setup", None),
        stamped(MigrationCategory::Dml, "setup", None),
    ];
    let err = m.materialize_all(&requests).unwrap_err();

    match err {
        CoreError::Filesystem { path, .. } => assert!(path.contains("up.sql")),
        other => panic!("expected Filesystem error, got {other:?}"),
    }
    // The DDL pair is kept; no rollback.
    assert_eq!(fs.files.borrow().len(), 2);
}

#[test]
fn test_plan_all_writes_nothing() {
    let fs = MemoryFs::default();
    let m = Materializer::new(&fs, "");
    let requests = vec![stamped(MigrationCategory::Ddl, "setup", None)];
    let results = m.plan_all(&requests).unwrap();
    assert_eq!(results.len(), 1);
    assert!(fs.files.borrow().is_empty());
}

#[test]
fn test_round_trip_on_disk_is_latin1_with_native_endings() {
    let dir = tempdir().unwrap();
    let m = Materializer::new(&OsFilesystem, dir.path());
    let result = m
        .materialize(&stamped(MigrationCategory::Ddl, "add_users", None))
        .unwrap();

    let expected = Template::Ddl.render(LineEnding::native());
    for file in [result.up_path(), result.down_path()] {
        let bytes = std::fs::read(dir.path().join(file)).unwrap();
        assert_eq!(bytes, expected.as_bytes());
    }
    assert_eq!(
        result.display_paths()[0],
        format!("DDL/{TS}_add_users/up.sql")
    );
}

#[test]
fn test_crlf_written_to_disk() {
    let dir = tempdir().unwrap();
    let m = Materializer::new(&OsFilesystem, dir.path()).with_line_ending(LineEnding::CrLf);
    let result = m
        .materialize(&stamped(MigrationCategory::Dml, "seed", None))
        .unwrap();
    let bytes = std::fs::read(dir.path().join(result.up_path())).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("BEGIN\r\n"));
    assert!(!text.replace("\r\n", "").contains('\n'));
}

#[test]
fn test_existing_leaf_directory_is_reused() {
    let dir = tempdir().unwrap();
    let leaf = dir.path().join("DDL").join(format!("{TS}_idx"));
    std::fs::create_dir_all(&leaf).unwrap();
    std::fs::write(leaf.join("up.sql"), "stale").unwrap();

    let m = Materializer::new(&OsFilesystem, dir.path()).with_line_ending(LineEnding::Lf);
    m.materialize(&stamped(MigrationCategory::Ddl, "idx", None))
        .unwrap();

    let up = std::fs::read(leaf.join("up.sql")).unwrap();
    assert_eq!(up, Template::Ddl.text().as_bytes());
}

#[test]
fn test_directory_creation_failure_reports_path() {
    let dir = tempdir().unwrap();
    // A regular file where the category folder should go.
    std::fs::write(dir.path().join("DDL"), "not a directory").unwrap();

    let m = Materializer::new(&OsFilesystem, dir.path());
    let err = m
        .materialize(&stamped(MigrationCategory::Ddl, "idx", None))
        .unwrap_err();
    match err {
        CoreError::Filesystem { path, .. } => assert!(path.contains(&format!("{TS}_idx"))),
        other => panic!("expected Filesystem error, got {other:?}"),
    }
}

#[test]
fn test_to_slash_joins_components() {
    let path = Path::new("DDL").join("perf").join("x").join("up.sql");
    assert_eq!(to_slash(&path), "DDL/perf/x/up.sql");
}
