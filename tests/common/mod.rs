//! Common test utilities for archon-install integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway home directory plus a release directory holding the files to install
#[allow(dead_code)]
pub struct TestInstallEnv {
    /// Temporary directory
    pub temp: TempDir,
    /// Fake `$HOME`
    pub home: PathBuf,
    /// Directory the installer is run from
    pub release: PathBuf,
}

#[allow(dead_code)]
impl TestInstallEnv {
    /// Create home and release directories. `~/.local/bin` is not created.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        let release = temp.path().join("release");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        std::fs::create_dir_all(&release).expect("Failed to create release directory");
        Self {
            temp,
            home,
            release,
        }
    }

    /// Create home and release directories, including `~/.local/bin`
    pub fn with_local_bin() -> Self {
        let env = Self::new();
        std::fs::create_dir_all(env.local_bin()).expect("Failed to create ~/.local/bin");
        env
    }

    /// `~/.local/bin` inside the fake home
    pub fn local_bin(&self) -> PathBuf {
        self.home.join(".local").join("bin")
    }

    /// Write a file in the release directory
    pub fn write_release_file(&self, name: &str, content: &[u8]) {
        std::fs::write(self.release.join(name), content).expect("Failed to write release file");
    }

    /// Write both `archon` and `Archon.pdb`
    pub fn write_release(&self) {
        self.write_release_file("archon", b"\x7fELF\x02\x01\x01archon-binary");
        self.write_release_file("Archon.pdb", b"Microsoft C/C++ MSF 7.00\r\n\x1aDS");
    }

    /// Read an installed file
    pub fn read_installed(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.local_bin().join(name)).expect("Failed to read installed file")
    }

    /// Read a release file
    pub fn read_release(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.release.join(name)).expect("Failed to read release file")
    }

    /// Check if a file exists in `~/.local/bin`
    pub fn installed_exists(&self, name: &str) -> bool {
        self.local_bin().join(name).exists()
    }

    /// Installer command running from the release directory with the fake home
    pub fn cmd(&self) -> Command {
        archon_install_cmd(&self.release, &self.home)
    }
}

impl Default for TestInstallEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Installer command with an isolated cwd and `$HOME`
#[allow(deprecated)]
pub fn archon_install_cmd(cwd: &Path, home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("archon-install").expect("binary should be built");
    cmd.env("HOME", home);
    cmd.current_dir(cwd);
    cmd
}

/// Permission bits of a file
#[cfg(unix)]
#[allow(dead_code)]
pub fn mode_of(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .expect("Failed to read metadata")
        .permissions()
        .mode()
        & 0o777
}
