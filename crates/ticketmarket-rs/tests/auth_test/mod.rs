use std::fs;
use ticketmarket_rs::auth::{clear_token, load_token, save_token};

fn temp_token_path(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(".ticketmarket_token_{}_{}", tag, std::process::id()))
}

#[test]
fn test_token_round_trip() {
    let path = temp_token_path("round_trip");

    save_token(&path, "abc123").unwrap();
    assert_eq!(load_token(&path).unwrap(), Some("abc123".to_string()));

    clear_token(&path).unwrap();
    assert_eq!(load_token(&path).unwrap(), None);
}

#[test]
fn test_missing_token_file_is_none() {
    let path = temp_token_path("missing");
    assert_eq!(load_token(&path).unwrap(), None);
    // Clearing a missing file is a no-op.
    clear_token(&path).unwrap();
}

#[test]
fn test_blank_token_file_is_none() {
    let path = temp_token_path("blank");
    fs::write(&path, "  \n").unwrap();
    assert_eq!(load_token(&path).unwrap(), None);
    fs::remove_file(path).unwrap();
}
