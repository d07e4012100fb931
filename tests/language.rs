use std::fs;

use clu::{Config, ErrorKind, Report, Value, run_source};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "clu"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        let report = run_source(&source, Config::default());

        if let Some(e) = &report.error {
            panic!("Script {path:?} failed: {e}");
        }
        assert_eq!(report.output, expected.lines().collect::<Vec<_>>(), "output of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn run(src: &str) -> Report {
    run_source(src, Config::default())
}

fn assert_success(src: &str) -> Report {
    let report = run(src);
    if let Some(e) = &report.error {
        panic!("Script failed: {e}\n{src}");
    }
    report
}

fn assert_output(src: &str, expected: &[&str]) {
    let report = assert_success(src);
    assert_eq!(report.output, expected);
}

fn assert_failure(src: &str, kind: ErrorKind) -> Report {
    let report = run(src);
    match &report.error {
        Some(e) => assert_eq!(e.kind(), kind, "unexpected error: {e}"),
        None => panic!("Script succeeded but was expected to fail with {kind}\n{src}"),
    }
    report
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("var x is 1 add 2\noutput x", &["3"]);
    assert_output("var x is 7 * 9\noutput x", &["63"]);
    assert_output("var x is 8 subtract 5\noutput x", &["3"]);
    assert_output("var x is 10 / 4\noutput x", &["2"]);
    assert_output("var x is 10.0 divide 4\noutput x", &["2.5"]);
    assert_output("var x is -7 / 2\noutput x", &["-4"]);
}

#[test]
fn operators_fold_left_to_right_without_precedence() {
    assert_output("output 1 add 2 multiply 3", &["9"]);
    assert_output("output 2 + 3 * 4 - 1", &["19"]);
    assert_output("output 1 add (2 multiply 3)", &["7"]);
}

#[test]
fn assignment_shorthands() {
    assert_output("total is 5\ntotal add 2\noutput total", &["7"]);
    assert_output("name is 'Ann'\nname add '!'\noutput name", &["Ann!"]);
}

#[test]
fn text_concatenation() {
    assert_output("var name is 'Ann'\noutput 'Hi ' + name", &["Hi Ann"]);
    assert_output("output 'n = ' add 1.5", &["n = 1.5"]);
    assert_output("output 'count: ' + 3 + 4", &["count: 34"]);
    assert_output("output \"it's\"", &["it's"]);
}

#[test]
fn output_formatting() {
    assert_output("output 1, 'a', 2.0", &["[1, 'a', 2.0]"]);
    assert_output("output none", &["None"]);
    assert_output("output True", &["True"]);
    assert_output("output 6 / 2.0", &["3.0"]);
    assert_output("output ()", &["[]"]);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_output("# header\n\nvar x is 1 # set x\n   \noutput x", &["1"]);
}

#[test]
fn if_otherwise_runs_exactly_one_branch() {
    let src = "if x greater 5\noutput 'big'\notherwise\noutput 'small'\nend";

    assert_output(&format!("var x is 10\n{src}"), &["big"]);
    assert_output(&format!("var x is 1\n{src}"), &["small"]);
}

#[test]
fn nested_conditionals_inside_a_skipped_branch_stay_skipped() {
    let src = "var x is 1
if x greater 5
    if x less 3
        output 'inner'
    otherwise
        output 'wrong'
    end
otherwise
    output 'outer otherwise'
end";

    assert_output(src, &["outer otherwise"]);
}

#[test]
fn boolean_and_complex_conditions() {
    assert_output("var flag is True\nif flag\noutput 'on'\nend", &["on"]);
    assert_output("var items is ()\nif items\noutput 'full'\notherwise\noutput 'empty'\nend",
                  &["empty"]);
    assert_output("var a is 3\nif a greater 1 and a less 5\noutput 'in range'\nend",
                  &["in range"]);
    assert_output("var a is 3\nif not a equal 3\noutput 'wrong'\notherwise\noutput 'right'\nend",
                  &["right"]);
    assert_output("var a is 3\nif a less 0 or a equal 3\noutput 'yes'\nend", &["yes"]);
    assert_output("if True\noutput 'yes'\nend", &["yes"]);
}

#[test]
fn absent_compares_equal_only_to_itself() {
    assert_output("var x is none\nif x equal none\noutput 'absent'\nend", &["absent"]);
    assert_output("var x is 0\nif x not_equal null\noutput 'present'\nend", &["present"]);
}

#[test]
fn repeat_runs_until_the_bound_fails() {
    let report = assert_success("var x is 0\nrepeat x less 3\nvar x is x add 1\noutput x\nend");

    assert_eq!(report.output, vec!["1", "2", "3"]);
    assert_eq!(report.variables["x"], Value::Integer(3));
}

#[test]
fn repeat_with_an_expression_bound() {
    assert_output("var i is 0\nvar n is 2\nrepeat i less n multiply 2\ni add 1\nend\noutput i",
                  &["4"]);
}

#[test]
fn runaway_repeat_is_reported() {
    let src = "var x is 0\nrepeat x less 1\nvar y is 1\nend";
    let report = run_source(src, Config::default().with_max_iterations(100));

    assert_eq!(report.error.map(|e| e.kind()), Some(ErrorKind::InfiniteLoopSuspected));
}

#[test]
fn foreach_iterates_and_keeps_the_loop_variable() {
    let src = "var nums is 1, 2, 3
var total is 0
foreach n in nums
    var total is total add n
end
output total
output n";

    assert_output(src, &["6", "3"]);
}

#[test]
fn foreach_uses_the_list_captured_at_entry() {
    let src = "var nums is 1, 2
foreach n in nums
    output n
    var nums is 7, 8, 9
end
output len of nums";

    assert_output(src, &["1", "2", "3"]);
}

#[test]
fn foreach_over_a_non_list_is_a_type_error() {
    assert_failure("var x is 5\nforeach n in x\noutput n\nend", ErrorKind::Type);
    assert_failure("foreach n in missing\nend", ErrorKind::Name);
}

#[test]
fn function_calls_restore_caller_state() {
    let src = "var x is 1
function bump -> x
    var x is x add 10
    var y is 2
    output x
end
bump 5
output x";

    let report = assert_success(src);

    assert_eq!(report.output, vec!["15", "1"]);
    assert_eq!(report.variables["x"], Value::Integer(1));
    assert!(!report.variables.contains_key("y"));
}

#[test]
fn functions_see_the_callers_variables() {
    assert_output("var base is 100\nfunction show\noutput base\nend\nshow", &["100"]);
}

#[test]
fn functions_with_several_parameters() {
    let src = "function add_up -> a/b\noutput a add b\nend\nadd_up 2, 3\nadd_up 4 5";
    assert_output(src, &["5", "9"]);
}

#[test]
fn recursive_functions() {
    let src = "function countdown -> n
    if n greater 0
        output n
        countdown (n subtract 1)
    end
end
countdown 3";

    assert_output(src, &["3", "2", "1"]);
}

#[test]
fn later_function_definition_wins() {
    let src = "function f\noutput 'first'\nend\nfunction f\noutput 'second'\nend\nf";
    assert_output(src, &["second"]);
}

#[test]
fn unbounded_recursion_is_reported() {
    let src = "function again\nagain\nend\nagain";
    let report = run_source(src, Config::default().with_max_call_depth(16));

    assert_eq!(report.error.map(|e| e.kind()), Some(ErrorKind::RecursionLimit));
}

#[test]
fn variables_are_restored_after_a_failing_call() {
    let src = "var x is 1\nfunction broken -> x\nvar y is 2\noutput 1 / 0\nend\nbroken 9";
    let report = assert_failure(src, ErrorKind::DivisionByZero);

    assert_eq!(report.variables["x"], Value::Integer(1));
    assert!(!report.variables.contains_key("y"));
}

#[test]
fn builtin_functions() {
    assert_output("output sum of (1,2,3)", &["6"]);
    assert_output("output len of 'abc'", &["3"]);
    assert_output("output first of (10,20,30)", &["10"]);
    assert_output("output int of '123'", &["123"]);
    assert_output("output max of (3, 9, 2)", &["9"]);
    assert_output("output min of (3, 9, 2)", &["2"]);
    assert_output("output average of (1, 2)", &["1.5"]);
    assert_output("output sorted of (3, 1, 2)", &["[1, 2, 3]"]);
    assert_output("output reversed of 'abc'", &["cba"]);
    assert_output("output last of (1, 2)", &["2"]);
    assert_output("output type of 1.5", &["float"]);
    assert_output("output all of (1, 0)", &["False"]);
    assert_output("output any of (0, 1)", &["True"]);
    assert_output("output empty of ()", &["True"]);
    assert_output("output is_bool of True", &["True"]);
    assert_output("output bool of 0", &["False"]);
    assert_output("output float of 2", &["2.0"]);
    assert_output("output int of -3.9", &["-3"]);
}

#[test]
fn builtins_chain_and_accept_call_syntax() {
    assert_output("output len of sorted of (3, 1, 2)", &["3"]);
    assert_output("output len('hello') add 1", &["6"]);
    assert_output("var nums is 1, 2, 3\noutput contains(nums, 2)", &["True"]);
    assert_output("var nums is 1, 2, 3\noutput contains of (nums, 5)", &["False"]);
    assert_output("var mixed is 1, 'a'\noutput contains(mixed, 'a')", &["True"]);
    assert_output("output contains('haystack', 'st')", &["True"]);
}

#[test]
fn builtin_errors() {
    assert_failure("output sum of 5", ErrorKind::Type);
    assert_failure("output max of ()", ErrorKind::Type);
    assert_failure("output average of (1, 'a')", ErrorKind::Type);
    assert_failure("output first of ()", ErrorKind::Index);
    assert_failure("output int of 'abc'", ErrorKind::Type);
    assert_failure("output contains of (1, 2, 3)", ErrorKind::Arity);
    assert_failure("output shout of 'hi'", ErrorKind::Name);
}

#[test]
fn indexing_is_one_based() {
    assert_output("var a is 10,20,30\noutput a[1]", &["10"]);
    assert_output("var a is 10,20,30\nvar i is 2\noutput a[i add 1]", &["30"]);
    assert_output("var s is 'abc'\noutput s[2]", &["b"]);
    assert_failure("var a is 10,20,30\noutput a[4]", ErrorKind::Index);
    assert_failure("var a is 10,20,30\noutput a[0]", ErrorKind::Index);
    assert_failure("var a is 10,20,30\noutput a['x']", ErrorKind::Type);
    assert_failure("var n is 5\noutput n[1]", ErrorKind::Type);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("output 10 / 0", ErrorKind::DivisionByZero);
    assert_failure("output 1.5 divide 0", ErrorKind::DivisionByZero);
}

#[test]
fn unknown_names_are_errors() {
    assert_failure("output missing_var", ErrorKind::Name);
    assert_failure("nothing_here 1", ErrorKind::Name);
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("function f -> a\noutput a\nend\nf 1 2", ErrorKind::Arity);
    assert_failure("function f -> a/b\noutput a\nend\nf 1", ErrorKind::Arity);
}

#[test]
fn sorting_mixed_values() {
    assert_output("output sorted of (3, 1.5, 2)", &["[1.5, 2, 3]"]);
    assert_output("output sorted of ('pear', 'apple')", &["['apple', 'pear']"]);

    let mut items = (1..=37).rev().map(|n| n.to_string()).collect::<Vec<_>>();
    items.insert(5, "'a'".to_string());
    items.insert(20, "'b'".to_string());
    items.insert(30, "1.5".to_string());

    let source = format!("var xs is {}\noutput sorted of xs", items.join(", "));
    let report = assert_failure(&source, ErrorKind::Type);
    assert!(report.output.is_empty());

    let numbers = (1..=50).rev().map(|n| n.to_string()).collect::<Vec<_>>();
    let source = format!("var xs is {}\noutput first of sorted of xs\noutput last of sorted of xs",
                         numbers.join(", "));
    assert_output(&source, &["1", "50"]);
}

#[test]
fn literal_names_cannot_be_assigned() {
    assert_failure("var True is 5", ErrorKind::Parse);
    assert_failure("none is 1", ErrorKind::Parse);
    assert_failure("foreach null in xs\nend", ErrorKind::Parse);
    assert_failure("function f -> a/false\nend", ErrorKind::Parse);
    assert_output("var truthy is True\noutput truthy", &["True"]);
}

#[test]
fn smallest_integer_prints_and_reads_back() {
    assert_output("var low is 0 subtract 9223372036854775807 subtract 1\n\
                   output low\n\
                   var back is -9223372036854775808\n\
                   if back equal low\n\
                   output 'same'\n\
                   end",
                  &["-9223372036854775808", "same"]);
    assert_output("output 5 - -3", &["8"]);
    assert_failure("output -9223372036854775809", ErrorKind::Eval);
}

#[test]
fn incompatible_operands_are_type_errors() {
    assert_failure("output 'a' subtract 1", ErrorKind::Type);
    assert_failure("if 'a' greater 1\nend", ErrorKind::Type);
    assert_failure("var b is True\noutput b add 1", ErrorKind::Type);
}

#[test]
fn integer_overflow_is_reported() {
    assert_failure("output 9223372036854775807 add 1", ErrorKind::Eval);
    assert_failure("output 99999999999999999999", ErrorKind::Eval);
}

#[test]
fn otherwise_without_if_is_error() {
    assert_failure("otherwise", ErrorKind::Eval);
}

#[test]
fn parse_errors_prevent_execution() {
    let report = assert_failure("output 'first'\nvar x 5", ErrorKind::Parse);

    assert!(report.output.is_empty());
    assert!(report.variables.is_empty());
}

#[test]
fn structural_errors_are_parse_errors() {
    assert_failure("repeat x less 3\noutput x", ErrorKind::Parse);
    assert_failure("function f\nfunction g\nend\nend", ErrorKind::Parse);
    assert_failure("if x y z w q\nend", ErrorKind::Parse);
    assert_failure("foreach n of nums\nend", ErrorKind::Parse);
    assert_failure("function f x\nend", ErrorKind::Parse);
    assert_failure("output", ErrorKind::Parse);
}

#[test]
fn first_runtime_error_aborts_the_run() {
    let report = assert_failure("var x is 1\noutput 'before'\noutput 1 / 0\noutput 'after'",
                                ErrorKind::DivisionByZero);

    assert_eq!(report.output, vec!["before"]);
    assert_eq!(report.variables["x"], Value::Integer(1));
}

#[test]
fn errors_carry_their_line() {
    let report = run("var x is 1\n\n# comment\noutput y");
    let error = report.error.expect("expected an error");

    assert_eq!(error.line(), 4);
    assert_eq!(error.to_string(), "Error on line 4: Unknown variable 'y'.");
}
