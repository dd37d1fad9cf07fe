use std::io::Cursor;

use mandrill::repl;

fn session(input: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = repl::start(Cursor::new(input), &mut output) {
        panic!("Shell failed on {input:?}: {e}");
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn bindings_survive_across_lines() {
    assert_eq!(session("var a = 5;\nvar b = a * 2;\nb\n"), ">> 5\n>> 10\n>> 10\n>> ");
}

#[test]
fn closures_survive_across_lines() {
    let input = "var newAdder = func(x) { func(y) { x + y } };\nvar addTwo = newAdder(2);\naddTwo(9)\n";

    assert!(session(input).ends_with(">> 11\n>> "));
}

#[test]
fn errors_do_not_end_the_session() {
    assert_eq!(session("foo\nvar foo = 1\nfoo + 1\n"),
               ">> Runtime error: Identifier not found: 'foo'.\n>> 1\n>> 2\n>> ");
    assert_eq!(session("var = 1\n3\n"),
               ">> Error on line 1: Expected an identifier, found '='.\n>> 3\n>> ");
}

#[test]
fn exit_ends_the_session() {
    assert_eq!(session("1\nexit\n2\n"), ">> 1\n>> ");
    assert_eq!(session("exit"), ">> ");
}

#[test]
fn blank_lines_are_skipped() {
    assert_eq!(session("\n   \n3\n"), ">> >> >> 3\n>> ");
}

#[test]
fn values_render_for_display() {
    assert_eq!(session("\"hi\"\n[\"hi\", 1]\nif (false) { 1 }\n"),
               ">> hi\n>> [\"hi\", 1]\n>> null\n>> ");
}

#[test]
fn windows_line_endings() {
    assert_eq!(session("1 + 1\r\nexit\r\n"), ">> 2\n>> ");
}
