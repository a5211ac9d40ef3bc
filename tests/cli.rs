use std::fs;
use std::process::Command;

use tempfile::tempdir;

const NOVEL: &str = "\
╔══════════════════════════════╗
║ ГЛАВА 1: Начало              ║
╚══════════════════════════════╝

Было раннее утро.

╔══════════════════════════════╗
║ ГЛАВА 2: Продолжение         ║
╚══════════════════════════════╝

Прошёл год.
";

fn chapterize() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chapterize"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_input_exits_with_one_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("public").join("chapters");

    let status = chapterize()
        .arg("--input")
        .arg(dir.path().join("absent.txt"))
        .arg("--output-dir")
        .arg(&out)
        .current_dir(dir.path())
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    assert!(!out.exists());
}

#[test]
fn splits_novel_into_chapter_files_and_index() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("novel.txt");
    let out = dir.path().join("public").join("chapters");
    fs::write(&input, NOVEL).unwrap();

    let output = chapterize()
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Глава 1: Начало"));
    assert!(stdout.contains("Глава 2: Продолжение"));

    let index: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("index.json")).unwrap()).unwrap();
    assert_eq!(index["total_chapters"], 2);
    assert_eq!(index["chapters"][0]["id"], 1);
    assert_eq!(index["chapters"][0]["number"], 1);
    assert_eq!(index["chapters"][1]["id"], 2);
    assert_eq!(index["chapters"][1]["title"], "Продолжение");

    let first: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("chapter_001.json")).unwrap()).unwrap();
    assert_eq!(first["content"], "Было раннее утро.");
    assert_eq!(first["word_count"], 3);
    assert_eq!(first["char_count"], 17);

    let written = fs::read_dir(&out)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with("chapter_"))
        .count();
    assert_eq!(written, 2);

    // 非 ASCII 原样写入
    let raw = fs::read_to_string(out.join("chapter_002.json")).unwrap();
    assert!(raw.contains("\"title\": \"Продолжение\""));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("novel.txt");
    let out = dir.path().join("out");
    fs::write(&input, NOVEL).unwrap();

    let status = chapterize()
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .arg("--dry-run")
        .current_dir(dir.path())
        .status()
        .unwrap();

    assert!(status.success());
    assert!(!out.exists());
}

#[test]
fn blank_chapter_keeps_its_id_slot() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("novel.txt");
    let out = dir.path().join("chapters");
    fs::write(
        &input,
        "╔════╗\n║ ГЛАВА 1: Пустая ║\n╚════╝\n\n╔════╗\n║ ГЛАВА 2: Вторая ║\n╚════╝\nТекст.\n",
    )
    .unwrap();

    let status = chapterize()
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .current_dir(dir.path())
        .status()
        .unwrap();

    assert!(status.success());
    assert!(!out.join("chapter_001.json").exists());
    let second: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("chapter_002.json")).unwrap()).unwrap();
    assert_eq!(second["id"], 2);

    let index: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("index.json")).unwrap()).unwrap();
    assert_eq!(index["total_chapters"], 1);
    assert_eq!(index["chapters"][0]["id"], 2);
}
