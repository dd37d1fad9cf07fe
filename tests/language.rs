use std::fs;

use mandrill::{
    Error, Value,
    ast::{InfixOperator, PrefixOperator},
    error::{ParseError, RuntimeError},
    interpret,
    interpreter::value::ValueKind,
};
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "mk"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match interpret(&code) {
            Ok(value) => assert_eq!(value, Value::TRUE, "Demo {path:?} did not end with true"),
            Err(e) => panic!("Demo {path:?} failed:\n{code}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo scripts found in demos");
}

fn assert_value(src: &str, expected: &str) {
    match interpret(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "Script: {src}"),
        Err(e) => panic!("Script failed: {src}\nError: {e}"),
    }
}

fn assert_runtime_error(src: &str, expected: RuntimeError) {
    assert_eq!(interpret(src), Err(Error::Runtime(expected)), "Script: {src}");
}

fn assert_failure(src: &str) {
    if interpret(src).is_ok() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
}

#[test]
fn integer_literals() {
    assert_value("5", "5");
    assert_value("10", "10");
    assert_value("-5", "-5");
    assert_value("9223372036854775807", "9223372036854775807");
}

#[test]
fn arithmetic_precedence() {
    assert_value("5 + 5 + 5 + 5 - 10", "10");
    assert_value("2 * 2 * 2 * 2 * 2", "32");
    assert_value("5 + 2 * 10", "25");
    assert_value("2 * (5 + 10)", "30");
    assert_value("3 * 3 * 3 + 10", "37");
    assert_value("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50");
    assert_value("-50 + 100 + -50", "0");
}

#[test]
fn double_negation() {
    assert_value("--5", "5");
    assert_value("---5", "-5");
    assert_value("!!true", "true");
    assert_value("!true", "false");
}

#[test]
fn comparisons_and_equality() {
    assert_value("1 < 2", "true");
    assert_value("1 > 2", "false");
    assert_value("1 <= 1", "true");
    assert_value("2 >= 3", "false");
    assert_value("1 == 1", "true");
    assert_value("1 != 1", "false");
    assert_value("true == true", "true");
    assert_value("true != false", "true");
    assert_value("(1 < 2) == true", "true");
    assert_value("(1 > 2) == true", "false");
}

#[test]
fn operators_are_closed_over_kinds() {
    assert_runtime_error("true + false",
                         RuntimeError::UnsupportedOperator { op:    InfixOperator::Add,
                                                             left:  ValueKind::Boolean,
                                                             right: ValueKind::Boolean, });
    assert_runtime_error("5 + true",
                         RuntimeError::UnsupportedOperator { op:    InfixOperator::Add,
                                                             left:  ValueKind::Integer,
                                                             right: ValueKind::Boolean, });
    assert_runtime_error(r#""a" == "a""#,
                         RuntimeError::UnsupportedOperator { op:    InfixOperator::Equal,
                                                             left:  ValueKind::String,
                                                             right: ValueKind::String, });
    assert_runtime_error("true < false",
                         RuntimeError::UnsupportedOperator { op:    InfixOperator::Less,
                                                             left:  ValueKind::Boolean,
                                                             right: ValueKind::Boolean, });
    assert_runtime_error("-true",
                         RuntimeError::UnsupportedOperand { op:      PrefixOperator::Negate,
                                                            operand: ValueKind::Boolean, });
    assert_runtime_error("!5",
                         RuntimeError::UnsupportedOperand { op:      PrefixOperator::Not,
                                                            operand: ValueKind::Integer, });
}

#[test]
fn division_by_zero_is_error() {
    assert_runtime_error("10 / 0", RuntimeError::DivideByZero);
    assert_runtime_error("var zero = 5 - 5; 1 / zero", RuntimeError::DivideByZero);
}

#[test]
fn integer_overflow_is_error() {
    assert_runtime_error("9223372036854775807 + 1", RuntimeError::IntegerOverflow);
    assert_runtime_error("-9223372036854775807 - 2", RuntimeError::IntegerOverflow);
    assert_value("-9223372036854775807 - 1", "-9223372036854775808");
    assert!(matches!(interpret("9223372036854775808"),
                     Err(Error::Parse(ParseError::InvalidIntegerLiteral { .. }))));
}

#[test]
fn if_else_expressions() {
    assert_value("if (true) { 10 }", "10");
    assert_value("if (1 > 2) { 10 }", "null");
    assert_value("if (1 < 2) { 10 } else { 20 }", "10");
    assert_value("if (1 > 2) { true } else { false }", "false");
    assert_value("if (false) { 1 } else { if (true) { 2 } else { 3 } }", "2");
}

#[test]
fn conditions_must_be_boolean() {
    assert_runtime_error("if (1) { 1 }",
                         RuntimeError::NonBooleanCondition { got: ValueKind::Integer });
    assert_runtime_error(r#"if ("") { 1 } else { 2 }"#,
                         RuntimeError::NonBooleanCondition { got: ValueKind::String });
}

#[test]
fn return_statements() {
    assert_value("return 10;", "10");
    assert_value("return 10; 9;", "10");
    assert_value("return 2 * 5; 9;", "10");
    assert_value("9; return 2 * 5; 9;", "10");
    assert_value("if (true) { if (true) { return 42; } } return 10;", "42");
}

#[test]
fn return_stops_at_function_boundary() {
    assert_value("var f = func() { return 1; 2 }; f() + 10", "11");
    assert_value("var f = func(x) { if (x > 0) { return x; } 0 - x }; f(-3) + f(4)", "7");
    assert_value("var outer = func() { var inner = func() { return 1; }; inner(); 2 }; outer()",
                 "2");
}

#[test]
fn return_inside_operands_unwinds() {
    assert_value("[if (true) { return 7; }]; 99", "7");
    assert_value("var a = [if (true) { return 7; }]; 99", "7");
    assert_value("{1: if (true) { return 3; }}; 99", "3");
    assert_value("-if (true) { return 4; }; 99", "4");
    assert_value("[1, 2][if (true) { return 6; }]; 99", "6");
    assert_value("var f = func() { 1 + if (true) { return 2; } }; f()", "2");
    assert_value("var f = func(x) { 1 + x }; var g = func() { f(if (true) { return 5; }) + 100 }; g()",
                 "5");
    assert_value("var f = func(x) { 1 + x }; f(if (true) { return 5; }); 99", "5");
    assert_value("if (if (true) { return 8; }) { 1 } else { 2 }; 99", "8");
}

#[test]
fn var_bindings() {
    assert_value("var a = 5; a;", "5");
    assert_value("var a = 5 * 5; a;", "25");
    assert_value("var a = 5; var b = a; var c = a + b + 5; c;", "15");
    assert_value("var n = 42; var m = n - 2; m", "40");
    assert_value("var x = 1; var x = x + 1; x", "2");
    assert_value("var x = 5", "5");
}

#[test]
fn undefined_identifier_is_error() {
    assert_runtime_error("foobar",
                         RuntimeError::UndefinedIdentifier { name: "foobar".to_string() });
}

#[test]
fn empty_program_is_null() {
    assert_value("", "null");
    assert_value("// nothing but a comment", "null");
}

#[test]
fn functions_and_calls() {
    assert_value("var identity = func(x) { x; }; identity(5);", "5");
    assert_value("var double = func(x) { x * 2; }; double(5);", "10");
    assert_value("var add = func(x, y) { x + y; }; add(5, add(5, 5));", "15");
    assert_value("func(x) { x; }(5)", "5");
    assert_value("var noop = func() {}; noop()", "null");
}

#[test]
fn function_values_render_as_literals() {
    assert_value("func(x) { x + 2; };", "func(x) {(x + 2);}");
    assert_value("len", "builtin len");
}

#[test]
fn closures_keep_their_scope() {
    assert_value("var newAdder = func(x) { func(y) { x + y } }; var addTwo = newAdder(2); \
                  addTwo(9)",
                 "11");
    assert_value("var x = 10; var f = func() { x }; var g = func(x) { f() }; g(1)", "10");
}

#[test]
fn calls_do_not_leak_bindings() {
    assert_value("var x = 1; var f = func() { var x = 2; x }; f(); x", "1");
    assert_runtime_error("var f = func() { var hidden = 2; hidden }; f(); hidden",
                         RuntimeError::UndefinedIdentifier { name: "hidden".to_string() });
}

#[test]
fn recursion() {
    assert_value("var fact = func(n) { if (n == 0) { 1 } else { n * fact(n - 1) } }; fact(10)",
                 "3628800");
}

#[test]
fn call_errors() {
    assert_runtime_error("var f = func(a, b) { a }; f(1)",
                         RuntimeError::ArityMismatch { expected: 2,
                                                       got:      1, });
    assert_runtime_error("5(1)", RuntimeError::NotCallable { got: ValueKind::Integer });
    assert_runtime_error(r#""f"()"#, RuntimeError::NotCallable { got: ValueKind::String });
}

#[test]
fn evaluation_stops_at_first_error() {
    assert_runtime_error("[1, 2 / 0, missing]", RuntimeError::DivideByZero);
    assert_runtime_error("var f = func(a, b) { a }; f(missing, 1 / 0)",
                         RuntimeError::UndefinedIdentifier { name: "missing".to_string() });
    assert_runtime_error("var a = 1; 1 / 0; var a = 2;", RuntimeError::DivideByZero);
}

#[test]
fn strings() {
    assert_value(r#""Hello World!""#, "Hello World!");
    assert_value(r#""Hello" + " " + "World!""#, "Hello World!");
    assert_value(r#"var s = "line\nbreak"; s"#, r"line\nbreak");
}

#[test]
fn builtin_len() {
    assert_value(r#"len("")"#, "0");
    assert_value(r#"len("four")"#, "4");
    assert_value(r#"len("hello world")"#, "11");
    assert_value("len([1, 2, 3])", "3");
    assert_value(r#"len({"a": 1, "b": 2})"#, "2");
    assert_failure("len(1)");
    assert_runtime_error(r#"len("one", "two")"#,
                         RuntimeError::WrongArgumentCount { name:     "len".to_string(),
                                                            expected: "1".to_string(),
                                                            got:      2, });
}

#[test]
fn builtin_push_does_not_mutate() {
    assert_value("push([1, 2], 3)", "[1, 2, 3]");
    assert_value("var a = [1, 2]; var b = push(a, 3, 4); a", "[1, 2]");
    assert_value("var a = [1, 2]; var b = push(a, 3, 4); b", "[1, 2, 3, 4]");
    assert_failure("push(1, 2)");
    assert_failure("push([1])");
}

#[test]
fn builtin_first_last_rest() {
    assert_value("first([1, 2, 3])", "1");
    assert_value("last([1, 2, 3])", "3");
    assert_value("rest([1, 2, 3])", "[2, 3]");
    assert_value("rest(rest(rest([1, 2, 3])))", "[]");
    assert_value("rest([])", "null");
    assert_value("first([])", "null");
    assert_value("puts(1, 2)", "null");
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_value(r#"var len = func(x) { 0 }; len("abc")"#, "0");
}

#[test]
fn arrays_and_indexing() {
    assert_value("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_value(r#"[1, "two", [true]]"#, r#"[1, "two", [true]]"#);
    assert_value("[1, 2, 3][0]", "1");
    assert_value("[1, 2, 3][1 + 1]", "3");
    assert_value("var i = 0; [1][i]", "1");
    assert_value("var a = [1, 2, 3]; a[0] + a[1] + a[2]", "6");
    assert_runtime_error("[1, 2, 3][3]", RuntimeError::IndexOutOfBounds { index: 3,
                                                                         len:   3, });
    assert_runtime_error("[1, 2, 3][-1]", RuntimeError::IndexOutOfBounds { index: -1,
                                                                          len:   3, });
    assert_runtime_error(r#"[1]["0"]"#,
                         RuntimeError::InvalidIndex { container: ValueKind::Array,
                                                      index:     ValueKind::String, });
    assert_runtime_error("5[0]", RuntimeError::NotIndexable { got: ValueKind::Integer });
}

#[test]
fn hash_literals() {
    assert_value(r#"var two = "two"; {"one": 10 - 9, two: 1 + 1, "thr" + "ee": 6 / 2, 4: 4, true: 5, false: 6}"#,
                 r#"{4: 4, false: 6, true: 5, "one": 1, "three": 3, "two": 2}"#);
    assert_value("{}", "{}");
    assert_value(r#"{"a": 1, "a": 2}["a"]"#, "2");
    assert_runtime_error("{[1]: 2}", RuntimeError::UnhashableKey { got: ValueKind::Array });
    assert_runtime_error("{func() {}: 2}",
                         RuntimeError::UnhashableKey { got: ValueKind::Function });
}

#[test]
fn hash_indexing() {
    assert_value(r#"{"foo": 5}["foo"]"#, "5");
    assert_value(r#"{"foo": 5}["bar"]"#, "null");
    assert_value(r#"var key = "foo"; {"foo": 5}[key]"#, "5");
    assert_value(r#"{}["foo"]"#, "null");
    assert_value("{5: 5}[5]", "5");
    assert_value("{true: 5}[true]", "5");
    assert_value("{false: 5}[false]", "5");
    assert_value(r#"{1: "int"}["1"]"#, "null");
    assert_runtime_error(r#"{"name": "x"}[func(x) { x }]"#,
                         RuntimeError::UnhashableKey { got: ValueKind::Function });
}

#[test]
fn parse_errors_stop_before_evaluation() {
    assert!(matches!(interpret("var x = ;"), Err(Error::Parse(_))));
    assert!(matches!(interpret("puts(1); var = 2"), Err(Error::Parse(_))));
}

#[test]
fn error_messages() {
    let err = interpret("1 / 0").unwrap_err();
    assert_eq!(err.to_string(), "Runtime error: Division by zero.");

    let err = interpret("true + 1").unwrap_err();
    assert_eq!(err.to_string(), "Runtime error: Unsupported operator: BOOLEAN + INTEGER.");

    let err = interpret("var = 1").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Expected an identifier, found '='.");
}
