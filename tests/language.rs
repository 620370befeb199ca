use std::{error::Error, fs};

use skit::interpret;
use walkdir::WalkDir;

fn run(source: &str) -> Result<String, Box<dyn Error>> {
    let mut out = Vec::new();
    interpret(source, &mut out)?;
    Ok(String::from_utf8(out).expect("output is not valid UTF-8"))
}

fn assert_output(source: &str, expected: &str) {
    match run(source) {
        Ok(output) => {
            assert_eq!(output, expected, "unexpected output for script:\n{source}");
        },
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(source: &str) {
    if run(source).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn integer_declaration_and_print() {
    assert_output("x = 5\nPRINT x", "x=5\n");
    assert_output("x = 0\nPRINT x", "x=0\n");
    assert_output("x = -12\nPRINT x", "x=-12\n");
}

#[test]
fn boolean_declaration_and_print() {
    assert_output("x = TRUE\nPRINT x", "x=TRUE\n");
    assert_output("x = FALSE\nPRINT x", "x=FALSE\n");
}

#[test]
fn string_round_trip() {
    assert_output("x = \"hello world\"\nPRINT x", "x=\"hello world\"\n");
    assert_output("x = \"a  b\"\nPRINT x", "x=\"a  b\"\n");
    assert_output("x = \"\"\nPRINT x", "x=\"\"\n");
}

#[test]
fn string_concatenation() {
    assert_output("x = \"foo\"\nx += \"bar\"\nPRINT x", "x=\"foobar\"\n");
    assert_output("x = \"a\"\nx += \" \"\nx += \"b\"\nPRINT x", "x=\"a b\"\n");
}

#[test]
fn concatenation_with_variables() {
    assert_output("a = \"foo\"\nb = \"bar\"\na += b\nPRINT a", "a=\"foobar\"\n");
    // A non-string operand contributes its display text without quote markers.
    assert_output("s = \"n=\"\nn = 4\ns += n\nPRINT s", "s=\"n=4\"\n");
}

#[test]
fn concatenation_requires_quoted_or_bound_operand() {
    assert_output("x = \"a\"\nx += bare\nPRINT x", "x=\"a\"\n");
}

#[test]
fn integer_accumulation() {
    assert_output("x = 5\nx += 3\nx *= 2\nPRINT x", "x=16\n");
    assert_output("x = 10\nx += -4\nPRINT x", "x=6\n");
    assert_output("x = 7\nx *= -1\nPRINT x", "x=-7\n");
}

#[test]
fn arithmetic_with_variables() {
    assert_output("x = 5\ny = 3\nx += y\nPRINT x", "x=8\n");
    assert_output("x = 5\ny = 3\nx *= y\nPRINT x", "x=15\n");
}

#[test]
fn boolean_and_assignment() {
    assert_output("x = TRUE\nx &= FALSE\nPRINT x", "x=FALSE\n");
    assert_output("x = TRUE\nx &= TRUE\nPRINT x", "x=TRUE\n");
    assert_output("x = FALSE\nx &= TRUE\nPRINT x", "x=FALSE\n");
    // Anything that is not exactly TRUE counts as false.
    assert_output("x = TRUE\nx &= yes\nPRINT x", "x=FALSE\n");
}

#[test]
fn copy_assignment() {
    assert_output("x = 5\ny = 0\ny = x\nPRINT y", "y=5\n");
    // Copy-assignment replaces the kind of the target.
    assert_output("s = \"hi\"\nn = 1\nn = s\nPRINT n", "n=\"hi\"\n");
}

#[test]
fn declaration_copies_a_bound_operand() {
    assert_output("x = 5\ny = x\nPRINT y", "y=5\n");
    assert_output("s = \"hi\"\nt = s\nPRINT t", "t=\"hi\"\n");
}

#[test]
fn copy_assignment_from_unbound_name_is_inert() {
    assert_output("x = 5\nx = y\nPRINT x", "x=5\n");
}

#[test]
fn redeclaration_never_refires() {
    // Once x is bound, `x = 7` is copy-assignment from the unbound name `7`,
    // so the kind and value of x stay fixed.
    assert_output("x = 5\nx = 7\nPRINT x", "x=5\n");
    assert_output("x = TRUE\nx = 7\nPRINT x", "x=TRUE\n");
    assert_output("x = \"s\"\nx = TRUE\nPRINT x", "x=\"s\"\n");
}

#[test]
fn short_lines_are_inert() {
    assert_output("x\nx =\nPRINT x", "");
    assert_output("x = 1\nx +=\nPRINT x", "x=1\n");
}

#[test]
fn print_on_unbound_name_is_silent() {
    assert_output("PRINT x", "");
    assert_output("x = 1\nPRINT y\nPRINT x", "x=1\n");
}

#[test]
fn print_requires_exact_keyword_and_bare_name() {
    assert_output("x = 1\nprint x", "");
    // A quoted token is never a variable name.
    assert_output("x = 1\nPRINT \"x\"", "");
}

#[test]
fn wrong_kind_compound_operators_are_inert() {
    assert_output("x = 5\nx &= TRUE\nPRINT x", "x=5\n");
    assert_output("b = TRUE\nb *= 2\nPRINT b", "b=TRUE\n");
    assert_output("b = TRUE\nb += 1\nPRINT b", "b=TRUE\n");
    assert_output("s = \"a\"\ns &= TRUE\nPRINT s", "s=\"a\"\n");
    // A quoted operand never triggers integer addition.
    assert_output("x = 5\nx += \"2\"\nPRINT x", "x=5\n");
}

#[test]
fn unmatched_operators_are_inert() {
    assert_output("x = 5\nx -= 2\nPRINT x", "x=5\n");
    assert_output("x = 5\nx ? 2\nPRINT x", "x=5\n");
}

#[test]
fn operator_and_reserved_checks_are_independent() {
    // `PRINT = 2` declares a variable named PRINT and, on the same line,
    // prints the variable named `=` bound just before it.
    assert_output("= = 2\nPRINT = 2\nPRINT PRINT", "==2\nPRINT=2\n");
}

#[test]
fn malformed_integer_literal_is_fatal() {
    assert_failure("x = 12a3");
    assert_failure("x = 1.5");
    assert_failure("x = foo");
    assert_failure("x = 5\nx += foo");
    assert_failure("x = 5\nx *= \"2\"");
}

#[test]
fn quoted_spans_tokenize_as_one_token() {
    use skit::interpreter::tokenizer::{tokenize, Token};

    let tokens = tokenize("x = \"a b c\"");
    assert_eq!(tokens,
               vec![Token::Word("x".to_string()),
                    Token::Word("=".to_string()),
                    Token::Quoted("\"a b c\"".to_string())]);

    assert_eq!(tokenize("word").len(), 1);
    assert_eq!(tokenize("   ").len(), 0);
}

#[test]
fn example_script_output() {
    let source = fs::read_to_string("tests/example.skit").expect("missing file");
    let expected = fs::read_to_string("tests/example.out").expect("missing file");
    assert_output(&source, &expected);
}

#[test]
fn script_corpus_runs_clean() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "skit")
                                     })
    {
        count += 1;
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        if let Err(e) = run(&source) {
            panic!("Script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
