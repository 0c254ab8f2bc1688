use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn run_with_answers(dir: &Path, answers: &str) -> Output {
    run_with_log(dir, answers, None)
}

fn run_with_log(dir: &Path, answers: &str, log: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_tagcloud_app"));
    command
        .current_dir(dir)
        .env_remove("TAGCLOUD_LOG")
        .env_remove("TAGCLOUD_LOG_LEVEL");
    if let Some(destination) = log {
        command.env("TAGCLOUD_LOG", destination);
    }
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(answers.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn writes_cloud_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("in.txt"),
        "the Quick brown fox. The QUICK fox jumps!\n",
    )
    .unwrap();

    let output = run_with_answers(temp.path(), "in.txt\nout.html\n3\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Enter input file path: Enter output file path: \
         Enter number of words to include in the tag cloud: "
    );

    let page = fs::read_to_string(temp.path().join("out.html")).unwrap();
    assert!(page.contains("<title>Top 3 Words in in.txt</title>"));
    assert_eq!(page.matches("class=\"f29\" title=\"count: 2\"").count(), 3);
    assert!(!temp.path().join("tagcloud.log").exists());
}

#[test]
fn non_positive_count_reports_empty_words() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("in.txt"), "words").unwrap();

    for count in ["0", "-2"] {
        let output = run_with_answers(temp.path(), &format!("in.txt\nout.html\n{count}\n"));
        assert!(!output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stderr),
            "ERROR: EMPTY words\n"
        );
        assert!(!temp.path().join("out.html").exists());
    }
}

#[test]
fn unreadable_input_is_reported() {
    let temp = TempDir::new().unwrap();

    let output = run_with_answers(temp.path(), "missing.txt\nout.html\n5\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("ERROR: File not read - missing.txt: "));
    assert!(!temp.path().join("out.html").exists());
}

#[test]
fn unwritable_output_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("in.txt"), "words").unwrap();

    let output = run_with_answers(temp.path(), "in.txt\nnowhere/out.html\n5\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("ERROR: File cannot be written - "));
}

#[test]
fn non_positive_count_leaves_existing_output_untouched() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("in.txt"), "words").unwrap();
    fs::write(temp.path().join("out.html"), "previous page").unwrap();
    let before = entries(temp.path());

    let output = run_with_answers(temp.path(), "in.txt\nout.html\n0\n");
    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "ERROR: EMPTY words\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("out.html")).unwrap(),
        "previous page"
    );
    assert_eq!(entries(temp.path()), before);
}

#[test]
fn default_run_leaves_log_named_input_intact() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tagcloud.log"), "alpha beta alpha").unwrap();

    let output = run_with_answers(temp.path(), "tagcloud.log\nout.html\n5\n");
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(temp.path().join("tagcloud.log")).unwrap(),
        "alpha beta alpha"
    );
    let page = fs::read_to_string(temp.path().join("out.html")).unwrap();
    assert!(page.contains("title=\"count: 2\">alpha</span>"));
    assert!(page.contains("title=\"count: 1\">beta</span>"));
    assert_eq!(entries(temp.path()), vec!["out.html", "tagcloud.log"]);
}

#[test]
fn file_logging_never_writes_into_the_input() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tagcloud.log"), "alpha beta alpha").unwrap();

    let output = run_with_log(temp.path(), "tagcloud.log\nout.html\n5\n", Some("file"));
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(temp.path().join("tagcloud.log")).unwrap(),
        "alpha beta alpha"
    );
    let page = fs::read_to_string(temp.path().join("out.html")).unwrap();
    assert!(page.contains(">alpha</span>"));
}

#[test]
fn file_logging_appends_to_existing_log() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("in.txt"), "one two two").unwrap();
    fs::write(temp.path().join("tagcloud.log"), "earlier run\n").unwrap();

    let output = run_with_log(temp.path(), "in.txt\nout.html\n2\n", Some("file"));
    assert!(output.status.success());
    let log = fs::read_to_string(temp.path().join("tagcloud.log")).unwrap();
    assert!(log.starts_with("earlier run\n"));
    assert!(log.contains("Generating top 2 words"));
}

#[test]
fn rejected_count_creates_no_log_file() {
    let temp = TempDir::new().unwrap();

    let output = run_with_log(temp.path(), "in.txt\nout.html\n0\n", Some("file"));
    assert!(!output.status.success());
    assert!(entries(temp.path()).is_empty());
}
