//! Test environment builder for isolated reposweep testing.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a reposweep CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per line
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {line}"))
            })
            .collect()
    }
}

/// Isolated workspace: `<root>/.repo/` plus a separate HOME.
pub struct TestEnv {
    pub root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Canonical workspace root, matching the paths the binary prints
    pub fn root_path(&self) -> PathBuf {
        std::fs::canonicalize(self.root.path()).expect("Failed to canonicalize root")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root_path().join(relative)
    }

    pub fn repodir(&self) -> PathBuf {
        self.path(".repo")
    }

    pub fn repo_path(&self, relative: &str) -> PathBuf {
        self.repodir().join(relative)
    }

    pub fn read_registry(&self) -> String {
        std::fs::read_to_string(self.repo_path("projects.toml")).unwrap_or_default()
    }

    pub fn mkdirs(&self, dirs: &[&str]) {
        for dir in dirs {
            std::fs::create_dir_all(self.path(dir)).expect("Failed to create directory");
        }
    }

    /// Run reposweep from the workspace root with stdin closed
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = self
            .command(cwd, args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute reposweep");
        Self::output_to_result(output)
    }

    /// Run reposweep from the workspace root, feeding `input` on stdin
    pub fn run_with_input(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(self.root.path(), args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn reposweep");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        let output = child
            .wait_with_output()
            .expect("Failed to wait for reposweep");
        Self::output_to_result(output)
    }

    fn command(&self, cwd: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("REPOSWEEP_REPO_DIR")
            .env_remove("REPOSWEEP_VERBOSITY")
            .env_remove("REPOSWEEP_COLOR");
        cmd
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

struct ProjectSpec {
    name: String,
    path: String,
    objdir: Option<String>,
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    projects: Vec<ProjectSpec>,
    dirs: Vec<String>,
    workspace_config: Option<String>,
}

#[allow(dead_code)]
impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            dirs: Vec::new(),
            workspace_config: None,
        }
    }

    /// Register a project with the default layout and create its directories
    pub fn with_project(mut self, name: &str, path: &str) -> Self {
        self.projects.push(ProjectSpec {
            name: name.to_string(),
            path: path.to_string(),
            objdir: None,
        });
        self
    }

    /// Register a project whose objects live at `objdir` (relative to `.repo/`)
    pub fn with_project_objdir(mut self, name: &str, path: &str, objdir: &str) -> Self {
        self.projects.push(ProjectSpec {
            name: name.to_string(),
            path: path.to_string(),
            objdir: Some(objdir.to_string()),
        });
        self
    }

    /// Extra directories, relative to the workspace root
    pub fn with_dirs(mut self, dirs: &[&str]) -> Self {
        self.dirs.extend(dirs.iter().map(|d| d.to_string()));
        self
    }

    /// `.repo/reposweep.toml` content
    pub fn with_workspace_config(mut self, toml: &str) -> Self {
        self.workspace_config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create workspace dir");
        let home_dir = TempDir::new().expect("Failed to create home dir");
        let repodir = root.path().join(".repo");
        std::fs::create_dir_all(repodir.join("projects")).expect("Failed to create repodir");
        std::fs::create_dir_all(repodir.join("project-objects"))
            .expect("Failed to create repodir");

        let mut registry = String::from("version = 1\n");
        for project in &self.projects {
            let worktree = root.path().join(&project.path);
            std::fs::create_dir_all(&worktree).expect("Failed to create worktree");
            std::fs::write(worktree.join("README"), "tracked file\n")
                .expect("Failed to write worktree file");

            std::fs::create_dir_all(
                repodir
                    .join("projects")
                    .join(format!("{}.git", project.path)),
            )
            .expect("Failed to create gitdir");

            let objdir = match &project.objdir {
                Some(objdir) => repodir.join(objdir),
                None => repodir
                    .join("project-objects")
                    .join(format!("{}.git", project.name)),
            };
            std::fs::create_dir_all(objdir.join("objects")).expect("Failed to create objdir");

            registry.push_str(&format!(
                "\n[[projects]]\nname = \"{}\"\npath = \"{}\"\n",
                project.name, project.path
            ));
            if let Some(objdir) = &project.objdir {
                registry.push_str(&format!("objdir = \"{}\"\n", objdir));
            }
        }
        std::fs::write(repodir.join("projects.toml"), registry)
            .expect("Failed to write registry");

        for dir in &self.dirs {
            std::fs::create_dir_all(root.path().join(dir)).expect("Failed to create directory");
        }

        if let Some(config) = &self.workspace_config {
            std::fs::write(repodir.join("reposweep.toml"), config)
                .expect("Failed to write workspace config");
        }

        TestEnv {
            root,
            home_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_reposweep")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
