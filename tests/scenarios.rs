use anydiff::{EditScript, Op, diff, diff_eq, equal};

fn check<A, B, F>(a: &[A], b: &[B], eq: F, expected: &str, distance: usize)
where
    A: std::fmt::Debug,
    B: std::fmt::Debug,
    F: Fn(&A, &B) -> bool,
{
    let script = diff(a, b, &eq);
    assert_eq!(
        script.to_string(),
        expected,
        "diff:\na: {a:?}\nb: {b:?}\nedit:  {script}\nwants: {expected}"
    );
    assert_eq!(script.distance(), distance);
    script.validate(a, b, &eq).expect("script must replay");
}

#[test]
fn bytes_identity() {
    check(b"abcdefg", b"abXceZg", equal, "==+=-=-+=", 4);
}

#[test]
fn lines_identity() {
    let a = ["line 1", "line 2", "line 3", "line 4"];
    let b = ["line 1", "line 2 mod", "line 3", "line 5"];
    check(&a, &b, equal, "=-+=-+", 4);
}

#[test]
fn ints_against_floats() {
    let a = [1i32, 2, 3, 4, 5];
    let b = [2.0f32, 3.5, 4.0, 6.0];
    check(&a, &b, |x: &i32, y: &f32| *x as f32 == *y, "-=-+=-+", 5);
}

#[derive(Debug)]
struct Line {
    num: u32,
    text: &'static str,
}

#[test]
fn records_case_insensitive() {
    let a = [
        Line { num: 1, text: "foo" },
        Line { num: 2, text: "bar" },
        Line { num: 3, text: "baz" },
        Line { num: 4, text: "qux" },
    ];
    let b = [
        Line { num: 1, text: "foo" },
        Line { num: 2, text: "BAR" },
        Line { num: 5, text: "qux" },
    ];
    check(
        &a,
        &b,
        |x: &Line, y: &Line| x.num == y.num && x.text.to_lowercase() == y.text.to_lowercase(),
        "==--+",
        3,
    );
}

#[test]
fn empty_inputs() {
    let none: [u8; 0] = [];
    check(&none, b"abc", equal, "+++", 3);
    check(b"abc", &none, equal, "---", 3);
    check(&none, &none, equal, "", 0);
}

#[test]
fn identical_inputs() {
    let a: Vec<u32> = (0..100).collect();
    let script = diff_eq(&a, &a);
    assert_eq!(script.len(), 100);
    assert!(script.iter().all(|op| *op == Op::Keep));
    assert_eq!(script.distance(), 0);
}

#[test]
fn disjoint_inputs() {
    let script = diff(b"abc", b"wxyz", equal);
    assert_eq!(script.deletions(), 3);
    assert_eq!(script.additions(), 4);
    assert_eq!(script.distance(), 7);
    assert_eq!(script.to_string(), "---++++");
}

#[test]
fn swap_prefers_deletion_first() {
    check(b"ab", b"ba", equal, "-=+", 2);
}

#[test]
fn predicate_is_called_with_a_then_b() {
    // Asymmetric predicate: only a[i] < b[j] matches.
    let a = [1, 5, 9];
    let b = [2, 6, 10];
    check(&a, &b, |x: &i32, y: &i32| x < y && y - x == 1, "===", 0);
}

#[test]
fn rendered_script_parses_back() {
    let script = diff(b"kitten", b"sitting", equal);
    let parsed: EditScript = script.to_string().parse().unwrap();
    assert_eq!(parsed, script);
    assert_eq!(parsed.distance(), 5);
}

#[test]
fn distance_of_parsed_scripts() {
    for (seq, expected) in [
        ("==========", 0),
        ("=-+===--=+", 5),
        ("-----+++++", 10),
    ] {
        let script: EditScript = seq.parse().unwrap();
        assert_eq!(script.distance(), expected, "distance of {seq:?}");
    }
}

#[test]
fn long_inputs_with_sparse_edits() {
    let a: Vec<u32> = (0..2000).collect();
    let mut b = a.clone();
    b.remove(1500);
    b.insert(10, 99_999);
    b[700] = 77_777;
    let script = diff_eq(&a, &b);
    assert_eq!(script.distance(), 4);
    script.validate(&a, &b, equal).unwrap();
}
