//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a subtrack command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - MASTER_KEY, BARK_URL, SUBTRACK_LOG and proxy variables removed
    /// - NO_COLOR set so output is plain text
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("subtrack").expect("failed to find subtrack binary");
        cmd.env_remove("MASTER_KEY");
        cmd.env_remove("BARK_URL");
        cmd.env_remove("SUBTRACK_LOG");
        for proxy in ["HTTP_PROXY", "http_proxy", "ALL_PROXY", "all_proxy"] {
            cmd.env_remove(proxy);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run `subtrack` with no arguments.
    pub fn run_bare(&self, master_key: Option<&str>, bark_url: Option<&str>) -> Output {
        let mut cmd = self.cmd();
        if let Some(key) = master_key {
            cmd.env("MASTER_KEY", key);
        }
        if let Some(url) = bark_url {
            cmd.env("BARK_URL", url);
        }
        cmd.output().expect("failed to run subtrack")
    }

    /// Shortcut for `subtrack check --date <date>` with both env vars set.
    pub fn check_on(&self, date: &str, bark_url: &str) -> Output {
        self.cmd()
            .env("MASTER_KEY", super::MASTER_KEY)
            .env("BARK_URL", bark_url)
            .args(["check", "--date", date])
            .output()
            .expect("failed to run subtrack check")
    }

    /// Shortcut for `subtrack check --dry-run --date <date>`.
    pub fn dry_run_on(&self, date: &str) -> Output {
        self.cmd()
            .env("MASTER_KEY", super::MASTER_KEY)
            .args(["check", "--dry-run", "--date", date])
            .output()
            .expect("failed to run subtrack check --dry-run")
    }

    /// Shortcut for `subtrack encrypt <input>`.
    pub fn encrypt(&self, input: &str, master_key: &str) -> Output {
        self.cmd()
            .env("MASTER_KEY", master_key)
            .args(["encrypt", input])
            .output()
            .expect("failed to run subtrack encrypt")
    }

    /// Shortcut for `subtrack decrypt`.
    pub fn decrypt(&self, master_key: &str) -> Output {
        self.cmd()
            .env("MASTER_KEY", master_key)
            .arg("decrypt")
            .output()
            .expect("failed to run subtrack decrypt")
    }
}
