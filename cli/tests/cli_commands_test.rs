//! CLI integration tests.
//!
//! These run the built `sneat` binary against the built-in users or a
//! temporary users file and check what it prints and writes.

#![cfg(all(test, not(target_arch = "wasm32")))]

use std::path::Path;
use std::process::{Command, Output};

fn sneat() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sneat"));
    for var in ["SNEAT_PAGE_SIZE", "SNEAT_EXPORT_FILE_NAME", "SNEAT_USERS_FILE", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to run sneat")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_users_file(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("users.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 10, "name": "Zed Zulu", "email": "zed@example.com", "role": "Admin",
             "department": "IT", "status": "active"},
            {"id": 11, "name": "Amy Alpha", "email": "amy@example.com", "username": "amya",
             "role": "User", "department": "Sales", "status": "locked",
             "profileImage": "https://example.com/amy.png"}
        ]"#,
    )
    .expect("write users file");
    path
}

mod list_tests {
    use super::*;

    #[test]
    fn test_list_second_page() {
        let output = run(sneat().args(["list", "--page-size", "3", "--page", "2"]));

        assert!(output.status.success());
        let text = stdout(&output);
        assert!(text.contains("Alice Williams"), "row 4 starts page 2");
        assert!(!text.contains("John Doe"), "row 1 is on page 1");
        assert!(text.contains("Page 2 of 3"));
        assert!(text.contains("showing 4-6 of 8 user(s)"));
    }

    #[test]
    fn test_list_page_past_the_end_shows_last_page() {
        let output = run(sneat().args(["list", "--page-size", "3", "--page", "99"]));

        assert!(output.status.success());
        assert!(stdout(&output).contains("Page 3 of 3"));
    }

    #[test]
    fn test_list_without_matches() {
        let output = run(sneat().args(["list", "--search", "nobody-here"]));

        assert!(output.status.success());
        assert!(stdout(&output).contains("No users match"));
    }

    #[test]
    fn test_list_rejects_unknown_status() {
        let output = run(sneat().args(["list", "--status", "banned"]));

        assert!(!output.status.success());
    }

    #[test]
    fn test_list_reads_users_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let users_file = write_users_file(dir.path());

        let output = run(sneat()
            .args(["list", "--sort", "name"])
            .arg("--users-file")
            .arg(&users_file));

        assert!(output.status.success());
        let text = stdout(&output);
        let amy = text.find("Amy Alpha").expect("Amy listed");
        let zed = text.find("Zed Zulu").expect("Zed listed");
        assert!(amy < zed, "sorted by name");
    }

    #[test]
    fn test_list_fails_on_missing_users_file() {
        let output = run(sneat().args(["list", "--users-file", "/definitely/not/here.json"]));

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load users"));
    }
}

mod export_tests {
    use super::*;

    #[test]
    fn test_export_active_jane() {
        let dir = tempfile::tempdir().expect("tempdir");
        let csv = dir.path().join("out.csv");

        let output = run(sneat()
            .args(["export", "--status", "active", "--search", "jane", "--output"])
            .arg(&csv));

        assert!(output.status.success());
        assert!(stdout(&output).contains("Exported 1 user(s)"));
        assert_eq!(
            std::fs::read_to_string(&csv).expect("read csv"),
            "ID,Name,Email,Role,Department,Status\n\
             2,Jane Smith,jane.smith@example.com,Manager,HR,active\n"
        );
    }

    #[test]
    fn test_export_ignores_page_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let csv = dir.path().join("all.csv");

        let output = run(sneat()
            .env("SNEAT_PAGE_SIZE", "2")
            .args(["export", "--sort", "id", "--desc", "--output"])
            .arg(&csv));

        assert!(output.status.success());
        let contents = std::fs::read_to_string(&csv).expect("read csv");
        assert_eq!(contents.lines().count(), 9);
        assert!(contents.lines().nth(1).is_some_and(|line| line.starts_with("8,")));
    }

    #[test]
    fn test_export_uses_configured_file_name() {
        let dir = tempfile::tempdir().expect("tempdir");

        let output = run(sneat()
            .current_dir(dir.path())
            .env("SNEAT_EXPORT_FILE_NAME", "people.csv")
            .args(["export", "--role", "Admin"]));

        assert!(output.status.success());
        let contents =
            std::fs::read_to_string(dir.path().join("people.csv")).expect("read csv");
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let csv = dir.path().join("missing").join("out.csv");

        let output = run(sneat().arg("export").arg("--output").arg(&csv));

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Export failed"));
    }
}

mod completions_tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let output = run(sneat().args(["completions", "bash"]));

        assert!(output.status.success());
        let text = stdout(&output);
        assert!(text.contains("export"));
        assert!(text.contains("list"));
    }
}
