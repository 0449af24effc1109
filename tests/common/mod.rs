//! Common test utilities for init-bundles integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Server configuration every test repository starts with
pub const RANVIER_JSON: &str = r#"{
  "port": 4000,
  "bundles": [],
  "maxAccountNameLength": 20,
  "dataSources": {
    "Yaml": "ranvier-datasource-file/YamlDataSource"
  }
}"#;

/// A committed game server repository for integration tests
pub struct TestRepo {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to repository root
    pub path: PathBuf,
    /// Scratch directory outside the repository for stand-in tools
    tools: TempDir,
}

impl TestRepo {
    /// Create a repository with `ranvier.json` committed
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let tools = TempDir::new().expect("Failed to create tools directory");

        git2::Repository::init(&path).expect("Failed to init repository");
        let repo = Self { temp, path, tools };
        repo.write_file("ranvier.json", RANVIER_JSON);
        repo.write_file(
            "package.json",
            r#"{"scripts": {"install-bundle": "node ./util/install-bundle.js"}}"#,
        );
        repo.commit_all("Initial commit");
        repo
    }

    /// Write a file in the repository
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the repository
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Stage everything tracked or new and commit it
    pub fn commit_all(&self, message: &str) {
        let repo = git2::Repository::open(&self.path).expect("Failed to open repository");
        let sig = git2::Signature::now("Test", "test@test.com").expect("Failed to sign");
        let mut index = repo.index().expect("Failed to open index");
        index
            .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
            .expect("Failed to add files");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = repo.find_tree(tree_id).expect("Failed to find tree");
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to commit");
    }

    /// Git status flags of a file
    pub fn status_of(&self, path: &str) -> git2::Status {
        let repo = git2::Repository::open(&self.path).expect("Failed to open repository");
        repo.status_file(Path::new(path))
            .expect("Failed to read status")
    }

    /// Path where the stand-in package manager records its calls
    pub fn calls_log(&self) -> PathBuf {
        self.tools.path().join("calls.log")
    }

    /// Arguments of every package manager call, one entry per call
    pub fn recorded_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.calls_log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Create a stand-in package manager that records its arguments.
    /// It fails when the bundle reference ends with `fail_on`.
    #[cfg(unix)]
    pub fn fake_package_manager(&self, fail_on: Option<&str>) -> PathBuf {
        let failure = fail_on
            .map(|suffix| {
                format!("case \"$3\" in *{suffix}) echo \"clone failed\" >&2; exit 1;; esac\n")
            })
            .unwrap_or_default();
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> \"{}\"\n{failure}exit 0\n",
            self.calls_log().display()
        );

        self.write_tool("fake-npm", &script)
    }

    /// Create a stand-in package manager that behaves like the real
    /// `install-bundle` script: it reports progress on stderr and stages a
    /// file under `bundles/` with the git CLI.
    #[cfg(unix)]
    pub fn staging_package_manager(&self) -> PathBuf {
        let script = format!(
            "#!/bin/sh\n\
             echo \"$@\" >> \"{}\"\n\
             name=$(basename \"$3\")\n\
             echo \"Cloning into 'bundles/$name'...\" >&2\n\
             mkdir -p bundles\n\
             echo \"$3\" > \"bundles/$name\"\n\
             git add \"bundles/$name\"\n",
            self.calls_log().display()
        );
        self.write_tool("staging-npm", &script)
    }

    /// Paths of index entries under `prefix`
    pub fn index_entries(&self, prefix: &str) -> Vec<String> {
        let repo = git2::Repository::open(&self.path).expect("Failed to open repository");
        let index = repo.index().expect("Failed to open index");
        index
            .iter()
            .map(|entry| String::from_utf8_lossy(&entry.path).into_owned())
            .filter(|path| path.starts_with(prefix))
            .collect()
    }

    #[cfg(unix)]
    fn write_tool(&self, name: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tools.path().join(name);
        std::fs::write(&path, script).expect("Failed to write stand-in tool");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat stand-in tool")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod stand-in tool");
        path
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
