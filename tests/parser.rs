use clu::{
    error::{ErrorKind, ParseError},
    interpreter::{
        lexer::{Token, join_tokens, tokenize, tokenize_line},
        parser::core::{parse, parse_source},
    },
    program::{ConditionOp, InstructionKind},
};
use pretty_assertions::assert_eq;

fn word(s: &str) -> Token {
    Token::Word(s.to_string())
}

#[test]
fn lexer_recognizes_every_token_shape() {
    let tokens = tokenize_line("f -> a/b 3.5 42 'hi' \"yo\" xs[i add 1] len(xs) (1, 2) + ,", 1).unwrap();

    assert_eq!(tokens,
               vec![word("f"),
                    Token::Arrow,
                    Token::ParamList("a/b".to_string()),
                    Token::Float("3.5".to_string()),
                    Token::Integer("42".to_string()),
                    Token::Text("'hi'".to_string()),
                    Token::Text("\"yo\"".to_string()),
                    Token::Indexed("xs[i add 1]".to_string()),
                    Token::Call("len(xs)".to_string()),
                    Token::Group("(1, 2)".to_string()),
                    Token::Symbol("+".to_string()),
                    Token::Symbol(",".to_string())]);
}

#[test]
fn rejoined_tokens_lex_the_same() {
    let tokens = tokenize_line("output 'a  b' + xs[1]", 1).unwrap();
    let again = tokenize_line(&join_tokens(&tokens), 1).unwrap();

    assert_eq!(tokens, again);
}

#[test]
fn comments_and_blank_lines_keep_line_numbers() {
    let lines = tokenize(&["# only a comment", "", "   var x is 1   # trailing", "output x"]).unwrap();

    assert_eq!(lines.iter().map(|l| l.line).collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(lines[0].tokens.len(), 4);
}

#[test]
fn statements_parse_into_instructions() {
    let program = parse_source("var x is 1 add 2\noutput 'x is' + x\ncount add 1\ntotal is 0\nshow x, 2")
        .unwrap();
    let kinds = program.instructions.iter().map(|i| &i.kind).collect::<Vec<_>>();

    assert_eq!(kinds[0],
               &InstructionKind::Assign { name: "x".to_string(),
                                          expr: tokenize_line("1 add 2", 1).unwrap() });
    assert_eq!(kinds[1],
               &InstructionKind::Output { expr: "'x is' + x".to_string() });
    assert_eq!(kinds[2],
               &InstructionKind::Assign { name: "count".to_string(),
                                          expr: tokenize_line("count add 1", 1).unwrap() });
    assert_eq!(kinds[3],
               &InstructionKind::Assign { name: "total".to_string(),
                                          expr: vec![Token::Integer("0".to_string())] });
    assert_eq!(kinds[4],
               &InstructionKind::Call { name: "show".to_string(),
                                        args: vec![word("x"), Token::Integer("2".to_string())] });
}

#[test]
fn if_forms() {
    let program = parse(&["if x greater 5", "if a and b", "if True", "if flag"]).unwrap();
    let tags = program.instructions.iter().map(|i| i.tag()).collect::<Vec<_>>();

    assert_eq!(tags, vec!["if", "if_complex", "if_complex", "if_bool"]);

    match &program.instructions[0].kind {
        InstructionKind::If(condition) => assert_eq!(condition.op, ConditionOp::Greater),
        other => panic!("expected a comparison, got {other:?}"),
    }
}

#[test]
fn blocks_own_their_bodies() {
    let program = parse(&["function f -> n",
                          "repeat n greater 0",
                          "if n equal 2",
                          "output n",
                          "end",
                          "n is n subtract 1",
                          "end",
                          "end",
                          "f 3"]).unwrap();

    let function = &program.functions["f"];
    assert_eq!(function.params, vec!["n".to_string()]);
    assert_eq!(function.body.len(), 1);

    match &function.body[0].kind {
        InstructionKind::Repeat { body, .. } => {
            let tags = body.iter().map(|i| i.tag()).collect::<Vec<_>>();
            assert_eq!(tags, vec!["if", "output", "end", "assign"]);
        },
        other => panic!("expected a repeat block, got {other:?}"),
    }

    assert_eq!(program.instructions.len(), 1);
}

#[test]
fn foreach_header() {
    let program = parse(&["foreach item in items", "output item", "end"]).unwrap();

    match &program.instructions[0].kind {
        InstructionKind::Foreach { var, list, body } => {
            assert_eq!(var, "item");
            assert_eq!(list, "items");
            assert_eq!(body.len(), 1);
        },
        other => panic!("expected foreach, got {other:?}"),
    }
}

#[test]
fn parse_errors_carry_their_line() {
    let cases: &[(&[&str], ParseError)] =
        &[(&["output 1", "var x 5"], ParseError::MissingKeyword { keyword: "is",
                                                                 line:    2, }),
          (&["var x is"], ParseError::MissingExpression { statement: "var",
                                                          line:      1, }),
          (&["", "repeat x less 3", "output x"],
           ParseError::UnterminatedBlock { construct: "repeat",
                                           line:      2, }),
          (&["function f", "function g", "end", "end"], ParseError::NestedFunction { line: 2 }),
          (&["repeat x bigger 3", "end"],
           ParseError::UnknownOperator { operator: "bigger".to_string(),
                                         line:     1, }),
          (&["var null is 1"], ParseError::ReservedName { name: "null".to_string(),
                                                          line: 1, }),
          (&["function f x", "end"], ParseError::MissingKeyword { keyword: "->",
                                                                  line:    1, }),
          (&["function f -> a/a", "end"],
           ParseError::MalformedHeader { construct: "function",
                                         details:   "parameter 'a' is declared twice".to_string(),
                                         line:      1, })];

    for (source, expected) in cases {
        assert_eq!(&parse(*source).unwrap_err(), expected, "parsing {source:?}");
        assert_eq!(expected.kind(), ErrorKind::Parse);
    }
}

#[test]
fn malformed_if_and_foreach_headers() {
    assert!(matches!(parse(&["if a b c d e"]),
                     Err(ParseError::MalformedHeader { construct: "if", .. })));
    assert!(matches!(parse(&["foreach x of xs", "end"]),
                     Err(ParseError::MalformedHeader { construct: "foreach", .. })));
}
