use treevis::model::{Color, TreeInput};
use treevis::parser::{ByteParser, InMemoryByteSource, InputErrorType, InputParser};
use treevis::{evaluate_reader, parse_input_reader, parse_input_str};

// --- HELPERS ---
fn parse_error_kind(input: &str) -> InputErrorType {
    parse_input_str(input).unwrap_err().kind().clone()
}

// --- TESTS BYTE PARSER ---
#[test]
fn test_parse_integer_sequence() {
    let mut parser = ByteParser::for_str(" \r\n 12\t-3 +4\n");
    assert_eq!(parser.parse_integer().unwrap(), Some(12));
    assert_eq!(parser.parse_integer().unwrap(), Some(-3));
    assert_eq!(parser.parse_integer().unwrap(), Some(4));
    assert_eq!(parser.parse_integer().unwrap(), None);
    assert!(parser.is_eof());
}

#[test]
fn test_skip_whitespace() {
    let mut parser = ByteParser::for_str(" \r  \t\n \t x y");
    parser.skip_whitespace();
    assert_eq!(parser.peek(), Some(b'x'));

    parser.next_byte(); // skip x
    parser.skip_whitespace();
    assert_eq!(parser.peek(), Some(b'y'));
}

#[test]
fn test_invalid_integer_points_at_token() {
    let mut parser = ByteParser::for_str("7 1x2 9");
    assert_eq!(parser.parse_integer().unwrap(), Some(7));

    let error = parser.parse_integer().unwrap_err();
    assert_eq!(error.kind(), &InputErrorType::InvalidInteger("1x2".to_string()));
    assert_eq!(error.position(), 2);
    assert_eq!(parser.position(), 2);
}

#[test]
fn test_integer_overflow_is_invalid() {
    let mut parser = ByteParser::for_str("99999999999999999999");
    let error = parser.parse_integer().unwrap_err();
    assert!(matches!(error.kind(), InputErrorType::InvalidInteger(_)));
}

// --- TESTS INPUT PARSING ---
#[test]
fn test_parse_sample() {
    let input = parse_input_str("5\n4 7 2 5 12\n0 1 0 0 1\n1 2\n1 3\n3 4\n3 5\n").unwrap();

    assert_eq!(input.node_count(), 5);
    assert_eq!(input.values(), &[4, 7, 2, 5, 12]);
    assert_eq!(
        input.colors(),
        &[Color::Red, Color::Green, Color::Red, Color::Red, Color::Green]
    );
    assert_eq!(input.edges(), &[(1, 2), (1, 3), (3, 4), (3, 5)]);
    assert_eq!(input.value_of(5), 12);
    assert_eq!(input.color_of(2), Color::Green);
}

#[test]
fn test_parse_single_vertex_without_edges() {
    let input = parse_input_str("1\n5\n1\n").unwrap();
    assert_eq!(input.node_count(), 1);
    assert!(input.edges().is_empty());
}

#[test]
fn test_parse_ignores_line_layout_and_crlf() {
    let compact = parse_input_str("3 1 2 3 0 1 0 1 2 1 3").unwrap();
    let crlf = parse_input_str("3\r\n1 2 3\r\n0 1 0\r\n1 2\r\n1 3\r\n").unwrap();
    assert_eq!(compact, crlf);
}

#[test]
fn test_parse_from_reader() {
    let bytes: &[u8] = b"2\n6 7\n0 0\n1 2\n";
    let input = parse_input_reader(bytes).unwrap();
    assert_eq!(input.node_count(), 2);

    let aggregates = evaluate_reader(b"2\n6 7\n0 0\n1 2\n".as_slice()).unwrap();
    assert_eq!(aggregates.red_product, 42);
}

#[test]
fn test_input_parser_directly() {
    let byte_parser = ByteParser::for_str("2 1 1 1 1 2 1");
    let input = InputParser::new(byte_parser).parse().unwrap();
    assert_eq!(input.edges(), &[(2, 1)]);
}

#[test]
fn test_input_parser_on_custom_byte_source() {
    let source = InMemoryByteSource::from_vec(b"2\n3 4\n0 0\n1 2\n".to_vec());
    let input = InputParser::new(ByteParser::new(source)).parse().unwrap();
    assert_eq!(input.values(), &[3, 4]);
}

// --- TESTS MALFORMED INPUT ---
#[test]
fn test_empty_input() {
    assert_eq!(
        parse_error_kind(""),
        InputErrorType::UnexpectedEOF("number of vertices".to_string())
    );
    assert_eq!(
        parse_error_kind("  \n "),
        InputErrorType::UnexpectedEOF("number of vertices".to_string())
    );
}

#[test]
fn test_zero_vertices() {
    assert_eq!(parse_error_kind("0"), InputErrorType::EmptyTree);
}

#[test]
fn test_negative_vertex_count() {
    let error = parse_input_str(" -3 1 2").unwrap_err();
    assert_eq!(error.kind(), &InputErrorType::InvalidInteger("-3".to_string()));
    assert_eq!(error.position(), 1);
}

#[test]
fn test_missing_value() {
    assert_eq!(
        parse_error_kind("3\n1 2\n"),
        InputErrorType::UnexpectedEOF("value of vertex 3".to_string())
    );
}

#[test]
fn test_missing_color() {
    assert_eq!(
        parse_error_kind("2\n1 2\n0\n"),
        InputErrorType::UnexpectedEOF("color of vertex 2".to_string())
    );
}

#[test]
fn test_missing_edge() {
    assert_eq!(
        parse_error_kind("3\n1 1 1\n0 0 0\n1 2\n"),
        InputErrorType::UnexpectedEOF("first endpoint of edge 2".to_string())
    );
    assert_eq!(
        parse_error_kind("3\n1 1 1\n0 0 0\n1 2\n3"),
        InputErrorType::UnexpectedEOF("second endpoint of edge 2".to_string())
    );
}

#[test]
fn test_trailing_tokens() {
    let error = parse_input_str("1\n5\n1\n7\n").unwrap_err();
    assert_eq!(error.kind(), &InputErrorType::TrailingInput);
    assert_eq!(error.position(), 6);
}

#[test]
fn test_non_integer_token() {
    let error = parse_input_str("2\n1 x\n0 0\n1 2").unwrap_err();
    assert_eq!(error.kind(), &InputErrorType::InvalidInteger("x".to_string()));
    assert_eq!(error.position(), 4);

    let message = error.to_string();
    assert!(message.starts_with("Invalid integer 'x' at position 4"));
    assert!(message.contains("Context"));
}

#[test]
fn test_invalid_color() {
    assert_eq!(
        parse_error_kind("2\n1 1\n0 2\n1 2"),
        InputErrorType::InvalidColor { vertex: 2, code: 2 }
    );
}

#[test]
fn test_edge_out_of_range() {
    assert_eq!(
        parse_error_kind("2\n1 1\n0 0\n1 3"),
        InputErrorType::EdgeOutOfRange { edge: 1, endpoint: 3 }
    );
    assert_eq!(
        parse_error_kind("3\n1 1 1\n0 0 0\n1 2\n0 3"),
        InputErrorType::EdgeOutOfRange { edge: 2, endpoint: 0 }
    );
    assert_eq!(
        parse_error_kind("2\n1 1\n0 0\n-1 2"),
        InputErrorType::EdgeOutOfRange { edge: 1, endpoint: -1 }
    );
}

#[test]
fn test_self_loop() {
    assert_eq!(
        parse_error_kind("2\n1 1\n0 0\n2 2"),
        InputErrorType::SelfLoop { edge: 1, vertex: 2 }
    );
}

// --- TESTS TREE INPUT VALIDATION ---
#[test]
fn test_tree_input_count_mismatches() {
    let error = TreeInput::new(3, vec![1, 2], vec![0, 0, 0], vec![(1, 2), (2, 3)]).unwrap_err();
    assert_eq!(error.kind(), &InputErrorType::ValueCountMismatch { expected: 3, found: 2 });

    let error = TreeInput::new(3, vec![1, 2, 3], vec![0, 0, 0, 1], vec![(1, 2), (2, 3)]).unwrap_err();
    assert_eq!(error.kind(), &InputErrorType::ColorCountMismatch { expected: 3, found: 4 });

    let error = TreeInput::new(3, vec![1, 2, 3], vec![0, 0, 0], vec![(1, 2)]).unwrap_err();
    assert_eq!(error.kind(), &InputErrorType::EdgeCountMismatch { expected: 2, found: 1 });

    let error = TreeInput::new(0, vec![], vec![], vec![]).unwrap_err();
    assert_eq!(error.kind(), &InputErrorType::EmptyTree);
}

#[test]
fn test_validation_error_has_no_position() {
    let error = TreeInput::new(2, vec![1, 2], vec![0, 5], vec![(1, 2)]).unwrap_err();
    assert_eq!(error.position(), 0);
    assert_eq!(error.to_string(), "Invalid color 5 of vertex 2 - must be 0 or 1");
}

#[test]
fn test_io_error_converts() {
    let io_error = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
    let error = treevis::parser::InputError::from(io_error);
    assert_eq!(error.kind(), &InputErrorType::IoError("stream closed".to_string()));
}
