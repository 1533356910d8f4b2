use super::*;

#[test]
fn string_emitter_concatenates_fragments() {
    let mut emitter = StringEmitter::with_capacity(0);
    emitter.emit("void f() {\n");
    emitter.emit("}");
    assert_eq!(emitter.output(), "void f() {\n}");
}

#[test]
fn string_emitter_with_capacity_starts_empty() {
    let emitter = StringEmitter::with_capacity(64);
    assert_eq!(emitter.output(), "");
}

#[test]
fn file_emitter_writes_on_finish() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.cpp");

    let mut emitter = FileEmitter::create(&path).unwrap();
    emitter.emit("bool ok() {\n");
    emitter.emit("}\n");
    emitter.finish().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "bool ok() {\n}\n");
}

#[test]
fn file_emitter_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.cpp");
    std::fs::write(&path, "stale contents that are longer").unwrap();

    let emitter = FileEmitter::create(&path).unwrap();
    emitter.finish().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn file_emitter_reports_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.cpp");
    assert!(FileEmitter::create(&path).is_err());
}
