//! Integration tests for the lazy token stream

use pbrt_parser::{Error, StreamState, TokenStream};

fn texts(source: &str) -> Vec<String> {
    TokenStream::from_str(source).map(|t| t.text).collect()
}

#[test]
fn test_whitespace_free_input_is_one_token() {
    let source = "LookAt0,0,0weird-but-one-token";
    assert_eq!(texts(source), [source]);
}

#[test]
fn test_empty_input_is_clean_empty_stream() {
    let mut stream = TokenStream::from_str("");
    assert_eq!(stream.advance(), None);
    assert_eq!(stream.state(), StreamState::AtEnd);
}

#[test]
fn test_rejoin_and_resplit_is_idempotent() {
    let source = "  LookAt 0 0 0\t0 0 1\n\n0 1 0  ";
    let first = texts(source);
    let rejoined = first.join(" ");
    assert_eq!(texts(&rejoined), first);
}

#[test]
fn test_fresh_readers_tokenize_identically() {
    let source = "Translate 1 2 3 # comment\nScale 4 5 6";
    let a: Vec<_> = TokenStream::from_str(source).collect();
    let b: Vec<_> = TokenStream::from_str(source).collect();
    assert_eq!(a, b);
}

#[test]
fn test_live_stream_never_equals_end_sentinel() {
    let mut live = TokenStream::from_str("Scale 1 1 1");
    live.advance();
    assert_eq!(live.state(), StreamState::Live);

    let mut done = TokenStream::from_str("x");
    done.advance();
    done.advance();
    assert_eq!(done.state(), StreamState::AtEnd);

    assert_ne!(live.state(), done.state());

    let mut also_done = TokenStream::from_str("");
    also_done.advance();
    assert_eq!(done.state(), also_done.state());
}

#[test]
fn test_dereference_before_advance_fails() {
    let stream = TokenStream::from_str("LookAt");
    assert_eq!(stream.current().unwrap_err(), Error::NoCurrentToken);
}

#[test]
fn test_dereference_after_end_fails() {
    let mut stream = TokenStream::from_str("LookAt");
    stream.advance();
    assert!(stream.current().is_ok());
    stream.advance();
    assert_eq!(stream.current().unwrap_err(), Error::NoCurrentToken);
}

#[test]
fn test_trailing_delimiters_yield_nothing() {
    assert_eq!(texts("Rotate 90 0 0 1\n"), ["Rotate", "90", "0", "0", "1"]);
    assert_eq!(texts(" \t \n "), Vec::<String>::new());
}

#[test]
fn test_positions_survive_collapsed_whitespace() {
    let tokens: Vec<_> = TokenStream::from_str("a\n\n   b").collect();
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (3, 4));
}

#[test]
fn test_comment_to_end_of_line() {
    assert_eq!(
        texts("Scale 1 1 1 # uniform\nTranslate 0 0 0"),
        ["Scale", "1", "1", "1", "Translate", "0", "0", "0"]
    );
}

#[test]
fn test_quoted_token_keeps_interior_whitespace() {
    let tokens = texts("CoordinateSystem \"camera frame\"");
    assert_eq!(tokens, ["CoordinateSystem", "\"camera frame\""]);
}

#[test]
fn test_stream_over_file() {
    let path = std::env::temp_dir().join(format!("pbrt_tokenizer_{}.pbrt", std::process::id()));
    std::fs::write(&path, "Translate 1 2 3").unwrap();
    let tokens: Vec<_> = TokenStream::from_path(&path).unwrap().map(|t| t.text).collect();
    std::fs::remove_file(&path).ok();
    assert_eq!(tokens, ["Translate", "1", "2", "3"]);
}

#[test]
fn test_missing_file_reports_source_unavailable() {
    let err = TokenStream::from_path("/definitely/not/here.pbrt").unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable { .. }));
}
