//! Integration tests for stagehand

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn stagehand() -> Command {
        cargo_bin_cmd!("stagehand")
    }

    #[test]
    fn help_displays() {
        stagehand()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Local Buildpack Staging"));
    }

    #[test]
    fn version_displays() {
        stagehand()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("stagehand"));
    }

    #[test]
    fn buildpacks_empty_cache() {
        let home = TempDir::new().unwrap();
        stagehand()
            .env("STAGEHAND_HOME", home.path())
            .arg("buildpacks")
            .assert()
            .success()
            .stdout(predicate::str::contains("No buildpacks in the cache"));
    }

    #[test]
    fn add_buildpack_requires_url() {
        stagehand()
            .arg("add-buildpack")
            .assert()
            .failure()
            .stderr(predicate::str::contains("required"));
    }

    #[test]
    fn add_buildpack_cache_hit_needs_no_network() {
        let home = TempDir::new().unwrap();
        // md5 of "test-buildpack"; the URL below is unreachable, so success
        // proves the second add never touched the network.
        let key = "6b6e885ddb4b5a02f923ae073da6221f";
        std::fs::create_dir_all(home.path().join("buildpacks").join(key)).unwrap();

        stagehand()
            .env("STAGEHAND_HOME", home.path())
            .args(["add-buildpack", "http://127.0.0.1:9/buildpacks/test-buildpack"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already cached"));
    }

    #[test]
    fn buildpacks_lists_cached_entry() {
        let home = TempDir::new().unwrap();
        let key = "6b6e885ddb4b5a02f923ae073da6221f";
        std::fs::create_dir_all(home.path().join("buildpacks").join(key)).unwrap();

        stagehand()
            .env("STAGEHAND_HOME", home.path())
            .arg("buildpacks")
            .assert()
            .success()
            .stdout(predicate::str::contains(key));
    }

    #[test]
    fn config_path() {
        stagehand()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        stagehand()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[staging]"));
    }
}

#[cfg(unix)]
mod staging_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn stagehand() -> Command {
        cargo_bin_cmd!("stagehand")
    }

    /// Write a config pointing the lifecycle builder at `builder`
    fn write_config(dir: &Path, builder: &str) -> std::path::PathBuf {
        let path = dir.join("config.toml");
        fs::write(
            &path,
            format!("[staging]\nbuilder = \"{}\"\n", builder),
        )
        .unwrap();
        path
    }

    /// Install an executable fake builder script
    fn write_builder(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("fake-builder");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn stage_succeeds_with_droplet_and_result() {
        let home = TempDir::new().unwrap();
        let builder = write_builder(
            home.path(),
            r#"mkdir -p "$STAGEHAND_HOME/tmp"
echo test-droplet > "$STAGEHAND_HOME/tmp/droplet"
echo '{"detected_buildpack":"Test","process_types":{"web":"run-app"}}' > "$STAGEHAND_HOME/tmp/result.json""#,
        );
        let config = write_config(home.path(), &builder.to_string_lossy());

        stagehand()
            .env("STAGEHAND_HOME", home.path())
            .args(["--config", &config.to_string_lossy(), "stage"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Running Buildpacks..."))
            .stdout(predicate::str::contains("Staging complete"))
            .stdout(predicate::str::contains("Test"))
            .stdout(predicate::str::contains("run-app"));

        // The droplet the builder produced is non-empty.
        let droplet = fs::read(home.path().join("tmp/droplet")).unwrap();
        assert!(!droplet.is_empty());
    }

    #[test]
    fn stage_without_droplet_reports_missing_buildpack() {
        let home = TempDir::new().unwrap();
        // Builder exits zero but produces nothing; validation must catch it.
        let config = write_config(home.path(), "/bin/true");

        stagehand()
            .env("STAGEHAND_HOME", home.path())
            .args(["--config", &config.to_string_lossy(), "stage"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("Running Buildpacks..."))
            .stderr(predicate::str::contains(
                "have you added a buildpack for this type of application?",
            ));
    }

    #[test]
    fn stage_with_droplet_but_no_result_json() {
        let home = TempDir::new().unwrap();
        let builder = write_builder(
            home.path(),
            r#"mkdir -p "$STAGEHAND_HOME/tmp"
echo test-droplet > "$STAGEHAND_HOME/tmp/droplet""#,
        );
        let config = write_config(home.path(), &builder.to_string_lossy());

        stagehand()
            .env("STAGEHAND_HOME", home.path())
            .args(["--config", &config.to_string_lossy(), "stage"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "no result json was produced by the matching buildpack!",
            ));
    }

    #[test]
    fn config_verbose_enables_info_logs() {
        let home = TempDir::new().unwrap();
        let config = home.path().join("config.toml");
        fs::write(
            &config,
            "[general]\nverbose = true\n\n[staging]\nbuilder = \"/bin/true\"\n",
        )
        .unwrap();

        // No -v flag: the info-level log line comes from the config alone.
        stagehand()
            .env("STAGEHAND_HOME", home.path())
            .args(["--config", &config.to_string_lossy(), "stage"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("Staging with 0 cached buildpacks"));
    }

    #[test]
    fn config_json_log_format() {
        let home = TempDir::new().unwrap();
        let config = home.path().join("config.toml");
        fs::write(
            &config,
            "[general]\nverbose = true\nlog_format = \"json\"\n\n[staging]\nbuilder = \"/bin/true\"\n",
        )
        .unwrap();

        stagehand()
            .env("STAGEHAND_HOME", home.path())
            .args(["--config", &config.to_string_lossy(), "stage"])
            .assert()
            .failure()
            .stdout(predicate::str::contains(
                "\"message\":\"Staging with 0 cached buildpacks\"",
            ));
    }

    #[test]
    fn stage_surfaces_builder_exit_code() {
        let home = TempDir::new().unwrap();
        let config = write_config(home.path(), "/bin/false");

        stagehand()
            .env("STAGEHAND_HOME", home.path())
            .args(["--config", &config.to_string_lossy(), "stage"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("exited with code 1"));
    }
}
