//! Test environment builder for isolated fabexport testing.
//!
//! Provides `TestEnv` - a temp directory holding a KiCad project, an isolated
//! HOME and a fake `kicad-cli`, plus helpers to run the fabexport binary.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::*;

/// Result of running a fabexport command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// Layout:
/// - `<tmp>/RPI_Cam3_RL/` - the project directory
/// - `<tmp>/home/` - HOME and XDG_CONFIG_HOME
/// - `<tmp>/bin/kicad-cli` - the fake tool
pub struct TestEnv {
    pub root: TempDir,
    project_dir: PathBuf,
    home_dir: PathBuf,
    tool: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// A complete project with the default fake tool
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_dir.join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.join(relative)
    }

    /// Run fabexport from the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run fabexport from the project directory with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(&self.project_dir, args, env_vars)
    }

    /// Run fabexport from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", &self.home_dir)
            .env("XDG_CONFIG_HOME", self.home_dir.join(".config"))
            .env("FABEXPORT_KICAD_CLI", &self.tool)
            .env_remove("FABEXPORT_LOG")
            .env_remove("FABEXPORT_KEEP_GOING")
            .env_remove("FABEXPORT_FAIL_ON_VIOLATIONS")
            .env_remove("FAKE_KICAD_FAIL");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute fabexport");
        output_to_result(output)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Every file under `output/`, relative path to bytes, sorted
    pub fn output_snapshot(&self) -> Vec<(String, Vec<u8>)> {
        let output = self.project_path("output");
        let mut files: Vec<(String, Vec<u8>)> = super::list_all_files(&output)
            .into_iter()
            .map(|path| {
                let rel = Path::new(&path)
                    .strip_prefix(&output)
                    .unwrap()
                    .to_string_lossy()
                    .into_owned();
                let bytes = fs::read(&path).unwrap();
                (rel, bytes)
            })
            .collect();
        files.sort();
        files
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    with_descriptor: bool,
    with_design_files: bool,
    project_config: Option<String>,
    user_config: Option<String>,
    tool_script: String,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            with_descriptor: true,
            with_design_files: true,
            project_config: None,
            user_config: None,
            tool_script: FAKE_KICAD_CLI.to_string(),
        }
    }

    /// Leave the project directory without a `.kicad_pro`
    pub fn without_descriptor(mut self) -> Self {
        self.with_descriptor = false;
        self
    }

    /// Leave out the schematic and board
    pub fn without_design_files(mut self) -> Self {
        self.with_design_files = false;
        self
    }

    /// `fabexport.toml` in the project directory
    pub fn with_project_config(mut self, content: &str) -> Self {
        self.project_config = Some(content.to_string());
        self
    }

    /// `<XDG_CONFIG_HOME>/fabexport/config.toml`
    pub fn with_user_config(mut self, content: &str) -> Self {
        self.user_config = Some(content.to_string());
        self
    }

    /// Replace the fake tool script
    pub fn with_tool_script(mut self, script: &str) -> Self {
        self.tool_script = script.to_string();
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        let project_dir = root.path().join(PROJECT_DIR);
        let home_dir = root.path().join("home");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&project_dir).unwrap();
        fs::create_dir_all(&home_dir).unwrap();
        fs::create_dir_all(&bin_dir).unwrap();

        if self.with_descriptor {
            fs::write(
                project_dir.join(format!("{}.kicad_pro", PROJECT_NAME)),
                DESCRIPTOR,
            )
            .unwrap();
        }
        if self.with_design_files {
            fs::write(
                project_dir.join(format!("{}.kicad_sch", PROJECT_NAME)),
                SCHEMATIC,
            )
            .unwrap();
            fs::write(project_dir.join(format!("{}.kicad_pcb", PROJECT_NAME)), BOARD).unwrap();
        }
        if let Some(config) = &self.project_config {
            fs::write(project_dir.join("fabexport.toml"), config).unwrap();
        }
        if let Some(config) = &self.user_config {
            let dir = home_dir.join(".config").join("fabexport");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("config.toml"), config).unwrap();
        }

        let tool = bin_dir.join("kicad-cli");
        fs::write(&tool, &self.tool_script).unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

        TestEnv {
            root,
            project_dir,
            home_dir,
            tool,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_fabexport")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
