use std::fs;

use artsearch_core::config::Config;
use tempfile::TempDir;

// Runs in its own process, so changing the working directory is safe here.
#[test]
fn load_merges_config_file_over_defaults() {
    let tmp = TempDir::new().expect("tempdir");
    fs::write(
        tmp.path().join("config.toml"),
        "[suggest]\nper_scope_limit = 5\n",
    )
    .expect("write config");

    let original = std::env::current_dir().expect("cwd");
    std::env::set_current_dir(tmp.path()).expect("chdir");
    let config = Config::load().expect("load");
    std::env::set_current_dir(original).expect("restore cwd");

    assert_eq!(config.suggest.per_scope_limit, 5);
    // Untouched sections keep their defaults.
    assert_eq!(config.suggest.min_prefix_len, 2);
    assert_eq!(config.search.max_limit, 100);
}
