use std::cmp::Ordering;

use clu::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::ArithmeticOp,
            core::Environment,
            function::core::Builtin,
            runner::Interpreter,
            stack::{ExecutionStack, Marker},
        },
        lexer::tokenize_line,
        parser::core::parse,
        value::core::Value,
    },
};
use pretty_assertions::assert_eq;

fn eval(env: &Environment, src: &str) -> Result<Value, RuntimeError> {
    let tokens = tokenize_line(src, 1).expect("expression should tokenize");
    env.evaluate(&tokens, 1)
}

fn list(items: &[i64]) -> Value {
    Value::from(items.iter().copied().map(Value::Integer).collect::<Vec<_>>())
}

#[test]
fn integer_and_float_literals_evaluate_to_themselves() {
    let env = Environment::new();

    for n in [0_i64, 1, 42, 9_007_199_254_740_993, i64::MAX] {
        assert_eq!(eval(&env, &n.to_string()).unwrap(), Value::Integer(n));
    }
    for text in ["0.5", "3.0", "123.456"] {
        assert_eq!(eval(&env, text).unwrap(), Value::Float(text.parse().unwrap()));
    }
}

#[test]
fn literal_form_survives_reevaluation() {
    let env = Environment::new();
    let values = [Value::Integer(-7),
                  Value::Integer(i64::MIN),
                  Value::Integer(i64::MAX),
                  Value::Integer(12),
                  Value::Float(2.5),
                  Value::Float(-0.25),
                  Value::Float(4.0),
                  Value::from("hello world"),
                  Value::from("it's")];

    for value in values {
        assert_eq!(eval(&env, &value.literal()).unwrap(), value);
    }
}

#[test]
fn comma_separated_tokens_form_a_list() {
    let env = Environment::new();
    assert_eq!(eval(&env, "1 , 2 , 3").unwrap(), list(&[1, 2, 3]));
}

#[test]
fn list_elements_may_be_variables_and_text() {
    let mut env = Environment::new();
    env.set("x", Value::Float(1.5));

    let expected = Value::from(vec![Value::Float(1.5), Value::from("a"), Value::Integer(3)]);
    assert_eq!(eval(&env, "x, 'a', 3").unwrap(), expected);
}

#[test]
fn unknown_names_fail_with_their_name() {
    let env = Environment::new();

    assert_eq!(eval(&env, "ghost"),
               Err(RuntimeError::UnknownVariable { name: "ghost".to_string(),
                                                   line: 1 }));
    assert_eq!(eval(&env, "shout of 1"),
               Err(RuntimeError::UnknownBuiltin { name: "shout".to_string(),
                                                  line: 1 }));
}

#[test]
fn none_and_null_are_absent_unless_bound() {
    let mut env = Environment::new();

    assert_eq!(eval(&env, "none").unwrap(), Value::Absent);
    assert_eq!(eval(&env, "NULL").unwrap(), Value::Absent);

    env.set("none", Value::Integer(1));
    assert_eq!(eval(&env, "none").unwrap(), Value::Integer(1));
}

#[test]
fn malformed_expressions_are_reported() {
    let env = Environment::new();

    assert!(matches!(eval(&env, "1 2"), Err(RuntimeError::Malformed { .. })));
    assert!(matches!(eval(&env, "1 add"), Err(RuntimeError::Malformed { .. })));
    assert!(matches!(eval(&env, "len of"), Err(RuntimeError::Malformed { .. })));
}

#[test]
fn integer_division_floors() {
    let result = ArithmeticOp::Divide.apply(&Value::Integer(-7), &Value::Integer(2), 1);
    assert_eq!(result.unwrap(), Value::Integer(-4));
}

#[test]
fn mixed_operands_promote_to_float() {
    let result = ArithmeticOp::Add.apply(&Value::Integer(1), &Value::Float(0.5), 1);
    assert_eq!(result.unwrap(), Value::Float(1.5));
}

#[test]
fn text_addition_concatenates_string_forms() {
    let result = ArithmeticOp::Add.apply(&Value::from("n = "), &Value::Float(2.0), 1);
    assert_eq!(result.unwrap(), Value::from("n = 2.0"));

    let result = ArithmeticOp::Add.apply(&list(&[1]), &Value::from("!"), 1);
    assert_eq!(result.unwrap(), Value::from("[1]!"));
}

#[test]
fn list_addition_concatenates() {
    let result = ArithmeticOp::Add.apply(&list(&[1, 2]), &list(&[3]), 1);
    assert_eq!(result.unwrap(), list(&[1, 2, 3]));
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(ArithmeticOp::Subtract.apply(&Value::from("a"), &Value::Integer(1), 3),
                     Err(RuntimeError::TypeError { line: 3, .. })));
    assert_eq!(ArithmeticOp::Multiply.apply(&Value::Integer(i64::MAX), &Value::Integer(2), 2),
               Err(RuntimeError::Overflow { line: 2 }));
    assert_eq!(ArithmeticOp::Divide.apply(&Value::Float(1.0), &Value::Integer(0), 5),
               Err(RuntimeError::DivisionByZero { line: 5 }));
    assert_eq!(ArithmeticOp::Divide.apply(&Value::Integer(1), &Value::Integer(0), 6),
               Err(RuntimeError::DivisionByZero { line: 6 }));
}

#[test]
fn comparisons_across_numeric_types() {
    assert_eq!(Value::Integer(2).compare(&Value::Float(2.0), 1).unwrap(), Ordering::Equal);
    assert_eq!(Value::Float(-1.5).compare(&Value::Integer(-1), 1).unwrap(), Ordering::Less);
    assert_eq!(Value::from("apple").compare(&Value::from("banana"), 1).unwrap(),
               Ordering::Less);
    assert_eq!(list(&[1, 2]).compare(&list(&[1, 2, 0]), 1).unwrap(), Ordering::Less);
}

#[test]
fn incompatible_comparisons_are_type_errors() {
    assert!(Value::Boolean(true).compare(&Value::Integer(1), 1).is_err());
    assert!(Value::Absent.compare(&Value::Integer(1), 1).is_err());
    assert!(Value::from("1").equals(&Value::Integer(1), 1).is_err());
}

#[test]
fn absent_equality() {
    assert!(Value::Absent.equals(&Value::Absent, 1).unwrap());
    assert!(!Value::Absent.equals(&Value::Integer(0), 1).unwrap());
    assert!(!Value::from("x").equals(&Value::Absent, 1).unwrap());
}

#[test]
fn truthiness() {
    assert!(Value::Integer(3).is_truthy());
    assert!(!Value::Float(0.0).is_truthy());
    assert!(!Value::from("").is_truthy());
    assert!(list(&[0]).is_truthy());
    assert!(!list(&[]).is_truthy());
    assert!(!Value::Absent.is_truthy());
}

#[test]
fn string_forms() {
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Float(0.1).to_string(), "0.1");
    assert_eq!(Value::Boolean(false).to_string(), "False");
    assert_eq!(Value::Absent.to_string(), "None");

    let nested = Value::from(vec![list(&[1, 2]), Value::from("b")]);
    assert_eq!(nested.to_string(), "[[1, 2], 'b']");
}

#[test]
fn builtin_registry_is_complete() {
    for builtin in Builtin::ALL {
        assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
    }
    assert_eq!(Builtin::ALL.len(), 19);
}

#[test]
fn builtin_results() {
    let nums = list(&[4, 1, 3]);

    assert_eq!(Builtin::Sum.apply(list(&[]), 1).unwrap(), Value::Integer(0));
    assert_eq!(Builtin::Sum.apply(Value::from(vec![Value::Integer(1), Value::Float(0.5)]), 1)
                           .unwrap(),
               Value::Float(1.5));
    assert_eq!(Builtin::Max.apply(nums.clone(), 1).unwrap(), Value::Integer(4));
    assert_eq!(Builtin::Min.apply(nums.clone(), 1).unwrap(), Value::Integer(1));
    assert_eq!(Builtin::Sorted.apply(nums.clone(), 1).unwrap(), list(&[1, 3, 4]));
    assert_eq!(Builtin::Reversed.apply(nums.clone(), 1).unwrap(), list(&[3, 1, 4]));
    assert_eq!(Builtin::Len.apply(nums, 1).unwrap(), Value::Integer(3));
    assert_eq!(Builtin::Sorted.apply(Value::from("cab"), 1).unwrap(),
               Value::from(vec![Value::from("a"), Value::from("b"), Value::from("c")]));
    assert_eq!(Builtin::Empty.apply(Value::Absent, 1).unwrap(), Value::Boolean(true));
    assert_eq!(Builtin::Type.apply(Value::Absent, 1).unwrap(), Value::from("none"));
    assert_eq!(Builtin::Int.apply(Value::from(" 42 "), 1).unwrap(), Value::Integer(42));
    assert_eq!(Builtin::Int.apply(Value::Boolean(true), 1).unwrap(), Value::Integer(1));
    assert_eq!(Builtin::Float.apply(Value::from("2.5"), 1).unwrap(), Value::Float(2.5));
    assert_eq!(Builtin::Str.apply(Value::Float(1.0), 1).unwrap(), Value::from("1.0"));
    assert_eq!(Builtin::Bool.apply(Value::from("no"), 1).unwrap(), Value::Boolean(true));
}

#[test]
fn builtin_failures() {
    assert!(matches!(Builtin::Sorted.apply(Value::from(vec![Value::Integer(1), Value::from("a")]), 4),
                     Err(RuntimeError::TypeError { line: 4, .. })));
    assert!(matches!(Builtin::Last.apply(list(&[]), 2),
                     Err(RuntimeError::IndexOutOfBounds { line: 2, .. })));
    assert!(matches!(Builtin::Contains.apply(Value::Integer(1), 1),
                     Err(RuntimeError::ArgumentCountMismatch { expected: 2, found: 1, .. })));
    assert!(matches!(Builtin::Float.apply(Value::Absent, 1),
                     Err(RuntimeError::TypeError { .. })));
}

#[test]
fn complex_conditions() {
    let mut env = Environment::new();
    env.set("x", Value::Integer(3));
    env.set("flag", Value::Boolean(false));

    assert!(env.evaluate_condition_text("x greater 1 and x less 5", 1).unwrap());
    assert!(env.evaluate_condition_text("flag or x equal 3", 1).unwrap());
    assert!(env.evaluate_condition_text("not flag", 1).unwrap());
    assert!(!env.evaluate_condition_text("x add 1 less_equal 3", 1).unwrap());
    assert!(env.evaluate_condition_text("x", 1).unwrap());
}

#[test]
fn execution_stack_transitions() {
    let mut stack = ExecutionStack::new();

    stack.push(Marker::IfTrue);
    assert!(stack.should_execute());
    assert_eq!(stack.otherwise(), Some(Marker::Skip));
    assert!(!stack.should_execute());

    stack.push(Marker::Skip);
    assert_eq!(stack.otherwise(), Some(Marker::Skip));
    assert_eq!(stack.end(), Some(Marker::Skip));
    assert_eq!(stack.end(), Some(Marker::Skip));
    assert_eq!(stack.end(), None);
    assert!(stack.should_execute());
    assert_eq!(stack.otherwise(), None);
}

#[test]
fn interpreter_leaves_the_stack_balanced() {
    let program = parse(&["var x is 5",
                          "if x greater 1",
                          "output 'a'",
                          "end",
                          "repeat x less 7",
                          "if x equal 5",
                          "output 'five'",
                          "end",
                          "x add 1",
                          "end"]).unwrap();

    let mut out = Vec::new();
    let mut interpreter = Interpreter::new(&program, &mut out);
    interpreter.run().unwrap();

    assert!(interpreter.stack().markers().is_empty());
    assert_eq!(interpreter.variables()["x"], Value::Integer(7));
    assert_eq!(String::from_utf8(out).unwrap(), "a\nfive\n");
}

#[test]
fn interpreter_starts_from_seeded_variables() {
    let program = parse(&["output name + '!'"]).unwrap();

    let mut out = Vec::new();
    let mut interpreter = Interpreter::new(&program, &mut out);
    interpreter.environment_mut().set("name", Value::from("Ada"));
    interpreter.run().unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Ada!\n");
}
