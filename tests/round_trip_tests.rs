use soil::{parse, print};

const CANONICAL: &[&str] = &[
    "let x = 10",
    "var x = 10",
    "let x: Int = 10",
    "let finished = true",
    "var finished: Bool = false",
    "let name = \"John Doe\"",
    "let name: String = \"John Doe\"",
    "let quoted = \"she said \\\"hi\\\"\"",
    "let empty = \"\"",
    "let finished: Bool = other",
    "let finished: Int = 1 + 2 * otherValue",
    "let total = a - b - c",
    "let mixed = a * b + c / d % e",
    "var origin: Point = start",
    "let big: Int64 = 9223372036854775807",
];

#[test]
fn test_canonical_text_round_trips() {
    for source in CANONICAL {
        let unit = parse(source).unwrap_or_else(|e| panic!("{source}: {e}"));
        assert_eq!(&print(&unit), source);
    }
}

#[test]
fn test_multi_statement_round_trip() {
    let source = CANONICAL.join("\n");
    let unit = parse(&source).unwrap();

    assert_eq!(unit.statements.len(), CANONICAL.len());
    assert_eq!(print(&unit), source);
}

#[test]
fn test_printed_tree_reparses_equal() {
    let messy = "var   total :Int=1+2*3   // sum\n/* next */let y=total%2-1";
    let tree = parse(messy).unwrap();
    let reparsed = parse(&print(&tree)).unwrap();

    assert_eq!(tree, reparsed);
}
