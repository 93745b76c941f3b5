use docserve::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
    assert_eq!(cfg.doc_root, "docs");
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml("listen_addr: 127.0.0.1:3000\ndoc_root: site/public\n").unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:3000");
    assert_eq!(cfg.doc_root, "site/public");
}

#[test]
fn test_config_from_yaml_partial_keeps_defaults() {
    let cfg = Config::from_yaml("doc_root: www\n").unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
    assert_eq!(cfg.doc_root, "www");
}

#[test]
fn test_config_from_yaml_rejects_bad_types() {
    assert!(Config::from_yaml("listen_addr: [1, 2]\n").is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1, cfg2);
}

// The only test here that touches process environment.
#[test]
fn test_config_load_from_file_and_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docserve.yaml");
    std::fs::write(&path, "listen_addr: 127.0.0.1:9000\ndoc_root: public\n").unwrap();

    unsafe {
        std::env::set_var("DOCSERVE_CONFIG", &path);
        std::env::remove_var("LISTEN");
        std::env::remove_var("DOC_ROOT");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.doc_root, "public");

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:5000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:5000");
    assert_eq!(cfg.doc_root, "public");

    unsafe {
        std::env::set_var("DOCSERVE_CONFIG", dir.path().join("missing.yaml"));
    }
    assert!(Config::load().is_err());

    unsafe {
        std::env::remove_var("DOCSERVE_CONFIG");
        std::env::remove_var("LISTEN");
    }
    assert_eq!(Config::load().unwrap(), Config::default());
}
