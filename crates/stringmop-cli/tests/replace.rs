use std::fs;
use std::path::{Path, PathBuf};

use stringmop::fuzz_replace;
use stringmop_cli::input::load_strings;
use stringmop_cli::output::write_csv;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "stringmop-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_each_supported_format() {
    let dir = unique_temp_dir("formats");

    let json = dir.join("sources.json");
    write(&json, r#"["Jamón Serpano", "  JUDÍAS \tverdes"]"#);
    let csv = dir.join("sources.CSV");
    write(&csv, "dish\nJamón Serpano\n\"  JUDÍAS \tverdes\"\n");
    let txt = dir.join("sources.txt");
    write(&txt, "Jamón Serpano\n\n  JUDÍAS \tverdes\n");

    let expected = ["Jamón Serpano", "  JUDÍAS \tverdes"];
    assert_eq!(load_strings(&json).unwrap(), expected);
    assert_eq!(load_strings(&csv).unwrap(), expected);
    assert_eq!(load_strings(&txt).unwrap(), expected);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_file_reports_path() {
    let dir = unique_temp_dir("missing");
    let path = dir.join("nope.txt");
    let error = load_strings(&path).unwrap_err();
    assert!(format!("{error:#}").contains("nope.txt"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn loaded_lists_feed_replacement() {
    let dir = unique_temp_dir("replace");
    let sources = dir.join("sources.json");
    write(&sources, r#"["Jamón Serpano", "  JUDÍAS \tverdes"]"#);
    let candidates = dir.join("candidates.json");
    write(&candidates, r#"["jamon \nserrano", "judías verde   "]"#);

    let result = fuzz_replace(
        &load_strings(&sources).unwrap(),
        &load_strings(&candidates).unwrap(),
        90.0,
    );
    assert_eq!(
        result.replacements().collect::<Vec<_>>(),
        [Some("jamon \nserrano"), Some("judías verde   ")]
    );
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn csv_output_snapshot() {
    let result = fuzz_replace(
        &["apple", "bannana", "cherry", "kiwi"],
        &["apple", "banana", "cherry"],
        90.0,
    );
    let mut out = Vec::new();
    write_csv(&result, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    insta::assert_snapshot!(text.trim_end(), @r"
    source,replacement,score
    apple,apple,100.00
    bannana,banana,92.31
    cherry,cherry,100.00
    kiwi,,0.00
    ");
}
