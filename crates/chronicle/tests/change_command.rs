use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn chronicle() -> Command {
    let mut cmd = Command::cargo_bin("chronicle").expect("binary exists");
    cmd.env_remove("CHRONICLE_FORCE_TTY");
    cmd
}

/// A project in a git repository whose default branch is tracked by an
/// `origin` remote, checked out on a `feature` branch.
struct Fixture {
    dir: TempDir,
    repo: git2::Repository,
}

impl Fixture {
    fn new() -> Self {
        Self::with_branch("feature")
    }

    fn with_branch(branch: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let repo = git2::Repository::init(dir.path()).expect("init repo");

        {
            let mut config = repo.config().expect("repo config");
            config.set_str("user.name", "Test").expect("set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("set user.email");
        }

        fs::write(
            dir.path().join("Cargo.toml"),
            r#"
[package]
name = "test-project"
version = "0.1.0"
edition = "2021"
"#,
        )
        .expect("write Cargo.toml");

        let fixture = Self { dir, repo };
        fixture.commit_all("Initial commit");

        let default_branch = fixture.current_branch();
        let head = fixture
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("head commit");

        fixture
            .repo
            .remote("origin", "https://example.com/owner/repo.git")
            .expect("add remote");
        fixture
            .repo
            .reference(
                &format!("refs/remotes/origin/{default_branch}"),
                head.id(),
                true,
                "test remote branch",
            )
            .expect("remote branch ref");
        fixture
            .repo
            .reference_symbolic(
                "refs/remotes/origin/HEAD",
                &format!("refs/remotes/origin/{default_branch}"),
                true,
                "test remote head",
            )
            .expect("remote head ref");

        fixture.repo.branch(branch, &head, false).expect("branch");
        fixture
            .repo
            .set_head(&format!("refs/heads/{branch}"))
            .expect("checkout branch");

        let mut config = fixture.repo.config().expect("repo config");
        config
            .set_str(&format!("branch.{branch}.remote"), "origin")
            .expect("set branch remote");

        drop(head);
        fixture
    }

    fn current_branch(&self) -> String {
        self.repo
            .head()
            .ok()
            .and_then(|h| h.shorthand().map(String::from))
            .expect("branch name")
    }

    fn commit_all(&self, message: &str) {
        let mut index = self.repo.index().expect("index");
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .expect("add all");
        index.write().expect("write index");

        let sig = git2::Signature::now("Test", "test@example.com").expect("signature");
        let tree_id = index.write_tree().expect("write tree");
        let tree = self.repo.find_tree(tree_id).expect("find tree");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("commit");
    }

    fn commit_source_change(&self) {
        fs::create_dir_all(self.dir.path().join("src")).expect("create src");
        fs::write(self.dir.path().join("src/lib.rs"), "pub fn touched() {}\n")
            .expect("write source file");
        self.commit_all("Edit source");
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[test]
fn verify_fails_when_changes_lack_a_change_file() {
    let fixture = Fixture::new();
    fixture.commit_source_change();

    chronicle()
        .current_dir(fixture.path())
        .args(["change", "--verify"])
        .assert()
        .failure()
        .stderr(contains("no change file exists for branch 'feature'"));
}

#[test]
fn verify_passes_with_a_matching_change_file() {
    let fixture = Fixture::new();
    fixture.commit_source_change();

    let changes_dir = fixture.path().join("changes");
    fs::create_dir_all(&changes_dir).expect("create changes dir");
    fs::write(
        changes_dir.join("feature_2025-01-01-00-00-00.json"),
        r#"{"changes":[{"packageName":"test-project","comment":"fix bug","type":"PATCH"}]}"#,
    )
    .expect("write change file");

    chronicle()
        .current_dir(fixture.path())
        .args(["change", "--verify"])
        .assert()
        .success()
        .stdout(contains("Verified 1 change file(s) for branch 'feature'."));
}

#[test]
fn verify_passes_when_branch_has_no_changes() {
    let fixture = Fixture::new();

    chronicle()
        .current_dir(fixture.path())
        .args(["change", "--verify"])
        .assert()
        .success()
        .stdout(contains("No source changes detected for branch 'feature'."));
}

#[test]
fn verify_fails_on_an_invalid_change_file() {
    let fixture = Fixture::new();
    fixture.commit_source_change();

    let changes_dir = fixture.path().join("changes");
    fs::create_dir_all(&changes_dir).expect("create changes dir");
    fs::write(
        changes_dir.join("feature_2025-01-01-00-00-00.json"),
        "not json",
    )
    .expect("write broken change file");

    chronicle()
        .current_dir(fixture.path())
        .args(["change", "--verify"])
        .assert()
        .failure()
        .stderr(contains("invalid change file"));
}

#[test]
fn change_without_source_changes_does_nothing() {
    let fixture = Fixture::new();

    chronicle()
        .current_dir(fixture.path())
        .arg("change")
        .assert()
        .success()
        .stdout(contains("Nothing to do."));

    assert!(!fixture.path().join("changes").exists());
}

#[test]
fn change_with_flags_saves_a_record_without_prompting() {
    let fixture = Fixture::new();
    fixture.commit_source_change();

    chronicle()
        .current_dir(fixture.path())
        .args(["change", "--message", "fix bug", "--type", "patch"])
        .assert()
        .success()
        .stdout(contains("Created change file:"));

    let changes_dir = fixture.path().join("changes");
    let entries: Vec<_> = fs::read_dir(&changes_dir)
        .expect("changes dir exists")
        .map(|entry| entry.expect("dir entry").file_name().into_string().expect("utf-8 name"))
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("feature_"));
    assert!(entries[0].ends_with(".json"));

    let content = fs::read_to_string(changes_dir.join(&entries[0])).expect("read change file");
    assert!(content.contains("\"packageName\": \"test-project\""));
    assert!(content.contains("\"comment\": \"fix bug\""));
    assert!(content.contains("\"type\": \"PATCH\""));
}

#[test]
fn branch_name_is_sanitized_in_the_file_name() {
    let fixture = Fixture::with_branch("feature/ABC_123");
    fixture.commit_source_change();

    chronicle()
        .current_dir(fixture.path())
        .args(["change", "--message", "fix bug", "--type", "patch"])
        .assert()
        .success();

    let entries: Vec<_> = fs::read_dir(fixture.path().join("changes"))
        .expect("changes dir exists")
        .map(|entry| entry.expect("dir entry").file_name().into_string().expect("utf-8 name"))
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("feature-ABC-123_"));
}

#[test]
fn prompting_without_a_terminal_fails() {
    let fixture = Fixture::new();
    fixture.commit_source_change();

    chronicle()
        .current_dir(fixture.path())
        .arg("change")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("require a terminal"));
}

#[test]
fn change_outside_a_repository_fails() {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"test-project\"\nversion = \"0.1.0\"\n",
    )
    .expect("write Cargo.toml");

    chronicle()
        .current_dir(dir.path())
        .arg("change")
        .assert()
        .failure()
        .stderr(contains("not a git repository"));
}

#[test]
fn branch_without_upstream_remote_fails() {
    let fixture = Fixture::new();
    fixture.commit_source_change();

    let mut config = fixture.repo.config().expect("repo config");
    config
        .remove("branch.feature.remote")
        .expect("remove upstream config");

    chronicle()
        .current_dir(fixture.path())
        .arg("change")
        .assert()
        .failure()
        .stderr(contains("no upstream remote"));
}
