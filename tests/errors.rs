//! Error surfacing: every fault names where it happened

use maxpath::{max_path_sum, Triangle, TriangleError};
use test_case::test_case;

#[test_case("1 2\n", 1, 1, 2 ; "apex with two items")]
#[test_case("1\n2 3\n4 5\n", 3, 3, 2 ; "short binary row")]
#[test_case("1\n2 3\n4 5 6 7\n", 3, 3, 4 ; "long binary row")]
#[test_case("1\n2 3 4\n5 6 7 8 9\n1 2 3\n", 4, 7, 3 ; "short ternary row")]
#[test_case("1\n2\n3 4\n", 3, 1, 2 ; "column widened")]
fn structure_error_names_line(input: &str, line: usize, expected: usize, actual: usize) {
    match input.parse::<Triangle>() {
        Err(TriangleError::Structure {
            line: l,
            expected: e,
            actual: a,
        }) => assert_eq!((l, e, a), (line, expected, actual)),
        other => panic!("expected structure error, got {other:?}"),
    }
}

#[test_case("x\n", 1, "x" ; "apex token")]
#[test_case("1\n2 three\n", 2, "three" ; "order row token")]
#[test_case("1\n2 3\n4 5 6.5\n", 3, "6.5" ; "float token")]
#[test_case("1\n2 3\n4 5 99999999999999999999\n", 3, "99999999999999999999" ; "overflowing token")]
fn parse_error_names_line_and_token(input: &str, line: usize, token: &str) {
    match input.parse::<Triangle>() {
        Err(TriangleError::Parse { line: l, token: t }) => {
            assert_eq!(l, line);
            assert_eq!(t, token);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn parse_error_wins_over_structure_on_same_line() {
    // Bad token is reported even though the row is also too short
    let err = "1\n2 3\nfoo\n".parse::<Triangle>().unwrap_err();
    assert!(matches!(err, TriangleError::Parse { line: 3, .. }));
}

#[test_case(2 ; "binary")]
#[test_case(3 ; "ternary")]
#[test_case(5 ; "quinary")]
fn child_past_order_is_out_of_range(order: usize) {
    let rows: Vec<Vec<i64>> = (0..3).map(|r| vec![1; 1 + r * (order - 1)]).collect();
    let triangle = Triangle::from_rows(rows).unwrap();
    let head = triangle.head().unwrap();

    for n in order..order + 3 {
        match head.child(n) {
            Err(TriangleError::OutOfRange { id, child }) => {
                assert_eq!(id, 0);
                assert_eq!(child, n);
            }
            other => panic!("expected out-of-range, got {other:?}"),
        }
    }
}

#[test]
fn head_of_empty_triangle() {
    let triangle = Triangle::default();
    let err = triangle.head().unwrap_err();
    assert!(matches!(err, TriangleError::Empty));
    assert_eq!(err.to_string(), "triangle is empty");
    // Evaluation still defines a result
    assert_eq!(max_path_sum(&triangle).unwrap(), 0);
}

#[test]
fn overflowing_sum_from_parsed_input() {
    let triangle: Triangle = "9223372036854775807\n1 1\n".parse().unwrap();
    assert!(matches!(
        max_path_sum(&triangle),
        Err(TriangleError::Overflow { .. })
    ));
    assert!(matches!(
        triangle.path_sum(&[0]),
        Err(TriangleError::Overflow { .. })
    ));
}

#[test]
fn io_errors_propagate() {
    struct Broken;

    impl std::io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"))
        }
    }

    let err = Triangle::read_from(std::io::BufReader::new(Broken)).unwrap_err();
    assert!(matches!(err, TriangleError::Io(_)));
    assert!(err.to_string().contains("disk on fire"));
}
