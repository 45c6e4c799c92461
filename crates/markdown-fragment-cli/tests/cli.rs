//! Integration tests for the mdfrag binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Command with an isolated, empty config so the user's own file is never read.
fn mdfrag(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mdfrag"));
    cmd.arg("--config").arg(config_dir.path().join("config.toml"));
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

mod help {
    use super::*;

    #[test]
    fn shows_usage() {
        let dir = TempDir::new().unwrap();
        mdfrag(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("browse"))
            .stdout(predicate::str::contains("init"));
    }

    #[test]
    fn shows_version() {
        let dir = TempDir::new().unwrap();
        mdfrag(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod render {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_stdin_to_stdout() {
        let dir = TempDir::new().unwrap();
        mdfrag(&dir)
            .arg("render")
            .write_stdin("- a\n- b\n")
            .assert()
            .success()
            .stdout("<ul><li>a</li><li>b</li></ul>\n");
    }

    #[test]
    fn renders_a_file_to_stdout() {
        let dir = TempDir::new().unwrap();
        let page = write(&dir, "page.md", "# Title\n\nSome *text*.\n");

        mdfrag(&dir)
            .arg("render")
            .arg(&page)
            .assert()
            .success()
            .stdout("<h1>Title</h1><br />Some <i>text</i>.\n");
    }

    #[test]
    fn writes_html_files_into_out_dir() {
        let dir = TempDir::new().unwrap();
        write(&dir, "one.md", "# One");
        write(&dir, "two.md", "**two**");
        let out = dir.path().join("out");

        mdfrag(&dir)
            .arg("render")
            .arg(format!("{}/*.md", dir.path().display()))
            .arg("--out-dir")
            .arg(&out)
            .assert()
            .success()
            .stdout("");

        assert_eq!(
            std::fs::read_to_string(out.join("one.html")).unwrap(),
            "<h1>One</h1>"
        );
        assert_eq!(
            std::fs::read_to_string(out.join("two.html")).unwrap(),
            "<b>two</b>"
        );
    }

    #[test]
    fn same_named_files_keep_their_directories_in_out_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("a")).unwrap();
        std::fs::create_dir_all(dir.path().join("b")).unwrap();
        write(&dir, "a/x.md", "# From a");
        write(&dir, "b/x.md", "# From b");
        let out = dir.path().join("out");

        mdfrag(&dir)
            .arg("render")
            .arg(format!("{}/*/x.md", dir.path().display()))
            .arg("--out-dir")
            .arg(&out)
            .assert()
            .success();

        assert_eq!(
            std::fs::read_to_string(out.join("a").join("x.html")).unwrap(),
            "<h1>From a</h1>"
        );
        assert_eq!(
            std::fs::read_to_string(out.join("b").join("x.html")).unwrap(),
            "<h1>From b</h1>"
        );
    }

    #[test]
    fn class_flags_reach_the_markup() {
        let dir = TempDir::new().unwrap();
        mdfrag(&dir)
            .args(["render", "--table-class", "grid", "--blockquote-class", "note"])
            .write_stdin("> q\n\n| a |\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"<blockquote class="note">"#))
            .stdout(predicate::str::contains(r#"<table class="grid">"#));
    }

    #[test]
    fn config_classes_apply_unless_overridden() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "config.toml",
            "[render]\ntable_class = \"from-config\"\nblockquote_class = \"quote\"\n",
        );

        mdfrag(&dir)
            .args(["render", "--table-class", "from-flag"])
            .write_stdin("> q\n\n| a |\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"<blockquote class="quote">"#))
            .stdout(predicate::str::contains(r#"<table class="from-flag">"#));
    }

    #[test]
    fn trace_goes_to_stderr() {
        let dir = TempDir::new().unwrap();
        mdfrag(&dir)
            .args(["render", "--trace"])
            .write_stdin("# Hi\n")
            .assert()
            .success()
            .stdout("<h1>Hi</h1>\n")
            .stderr(predicate::str::contains("== stdin: headings =="))
            .stderr(predicate::str::contains("== stdin: sentinels =="));
    }

    #[test]
    fn invalid_utf8_fails() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.md");
        std::fs::write(&bad, [0x23, 0x20, 0xff, 0xfe]).unwrap();

        mdfrag(&dir)
            .arg("render")
            .arg(&bad)
            .assert()
            .failure()
            .stderr(predicate::str::contains("not valid UTF-8"));
    }

    #[test]
    fn unmatched_pattern_fails() {
        let dir = TempDir::new().unwrap();
        mdfrag(&dir)
            .arg("render")
            .arg(format!("{}/*.md", dir.path().display()))
            .assert()
            .failure()
            .stderr(predicate::str::contains("No files match"));
    }

    #[test]
    fn malformed_config_fails() {
        let dir = TempDir::new().unwrap();
        write(&dir, "config.toml", "[render\n");

        mdfrag(&dir)
            .arg("render")
            .write_stdin("text")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse config file"));
    }
}

mod init {
    use super::*;

    #[test]
    fn writes_a_config_that_render_picks_up() {
        let dir = TempDir::new().unwrap();
        mdfrag(&dir)
            .args(["init", "--notes-path", "/srv/notes", "--table-class", "grid"])
            .assert()
            .success();

        let saved = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
        assert!(saved.contains("notes_path = \"/srv/notes\""));
        assert!(saved.contains("[render]"));
        assert!(saved.contains("table_class = \"grid\""));
        assert!(!saved.contains("blockquote_class"));

        mdfrag(&dir)
            .arg("render")
            .write_stdin("| a |\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"<table class="grid">"#));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        write(&dir, "config.toml", "[render]\ntable_class = \"keep\"\n");

        mdfrag(&dir)
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));

        let kept = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
        assert!(kept.contains("keep"));
    }

    #[test]
    fn force_replaces_a_malformed_config() {
        let dir = TempDir::new().unwrap();
        write(&dir, "config.toml", "[render\n");

        mdfrag(&dir)
            .args(["init", "--force", "--blockquote-class", "quote"])
            .assert()
            .success();

        mdfrag(&dir)
            .arg("render")
            .write_stdin("> q")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"<blockquote class="quote">"#));
    }
}

mod browse {
    use super::*;

    #[test]
    fn missing_directory_fails_before_the_tui_starts() {
        let dir = TempDir::new().unwrap();
        mdfrag(&dir)
            .args(["browse", "/this/path/does/not/exist"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid notes directory"));
    }

    #[test]
    fn no_directory_and_no_config_fails() {
        let dir = TempDir::new().unwrap();
        mdfrag(&dir)
            .arg("browse")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No notes directory given"));
    }
}
