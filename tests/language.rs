use reckon::{Calculator, ErrorKind, EvalError, Settings, get_result};

fn assert_value(src: &str, expected: f64) {
    match Calculator::new().evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "expression {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind, position: usize) -> EvalError {
    match Calculator::new().evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "expression {src:?}: {e}");
            assert_eq!(e.position(), position, "expression {src:?}: {e}");
            e
        },
    }
}

fn strict() -> Calculator {
    Calculator::with_settings(Settings { strict: true,
                                         ..Settings::default() })
}

#[test]
fn precedence_and_grouping() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("10-4-3", 3.0);
    assert_value("64/4/2", 8.0);
    assert_value("2*(3+(4-1))", 12.0);
    assert_value("((7))", 7.0);
}

#[test]
fn repeated_power_groups_right_to_left() {
    assert_value("2^3^2", 512.0);
    assert_value("2^3*2^2", 32.0);
    assert_value("(2^3)^2", 64.0);
}

#[test]
fn modulo_binds_tighter_than_power() {
    assert_value("7%4", 3.0);
    assert_value("5%3^2", 4.0);
    assert_value("2^3%2", 2.0);
    assert_value("1+7%4*2", 7.0);
}

#[test]
fn unary_minus() {
    assert_value("-3", -3.0);
    assert_value("-2^2", -4.0);
    assert_value("2*-3", -6.0);
    assert_value("2--3", 5.0);
    assert_value("--3", 3.0);
    assert_value("-2*3+1", -5.0);
    assert_value("2^-1", 0.5);
}

#[test]
fn prefix_operators_nest() {
    assert_value("-abs-3", -3.0);
    assert_value("--sqrt(16)", 4.0);
    assert_value("2*-sqrt(9)!", -12.0);
    assert_value("log10-(-100)", 2.0);
}

#[test]
fn factorial_and_implicit_multiply() {
    assert_value("3!", 6.0);
    assert_value("3!2", 12.0);
    assert_value("3!!", 720.0);
    assert_value("-3!", -6.0);
    assert_value("2^3!", 64.0);
    assert_value("sqrt(9)!", 6.0);
}

#[test]
fn factorial_outside_domain_falls_through() {
    assert_value("0!", 1.0);
    assert_value("(-4)!", 1.0);
    assert_value("4.7!", 24.0);
}

#[test]
fn implicit_multiplication() {
    assert_value("2pi", 6.283_185_307_2);
    assert_value("3(4+5)", 27.0);
    assert_value("(1+1)(2+2)", 8.0);
    assert_value("2sin(0)", 0.0);
    assert_value("2e", 5.436_563_656_9);
}

#[test]
fn functions() {
    assert_value("sqrt(16)", 4.0);
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("tan(0)", 0.0);
    assert_value("atan(1)*4", 3.141_592_653_6);
    assert_value("asin(1)", 1.570_796_326_8);
    assert_value("acos(1)", 0.0);
    assert_value("abs(-7.5)", 7.5);
    assert_value("ln(e)", 1.0);
    assert_value("log10(1000)", 3.0);
    assert_value("exp(0)", 1.0);
    assert_value("sin(pi)", 0.0);
    assert_value("sqrt(4)^2", 4.0);
}

#[test]
fn two_argument_functions() {
    assert_value("log(2,8)", 3.0);
    assert_value("log(10, 100)", 2.0);
    assert_value("rt(3,27)", 3.0);
    assert_value("rt(2, 9+7)", 4.0);
    assert_value("1+log(2,4)*3", 7.0);
}

#[test]
fn names_are_case_insensitive() {
    assert_value("2*PI", 6.283_185_307_2);
    assert_value("SQRT(25)", 5.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("  1 +   2 ", 3.0);
    assert_value("\t4 * 5\t", 20.0);
    assert_value("1 2 + 1", 13.0);
    assert_value("7;", 7.0);
}

#[test]
fn assignment_and_recall() {
    let mut calc = Calculator::new();
    assert_eq!(calc.evaluate("x=5").unwrap(), 5.0);
    assert_eq!(calc.evaluate("x+1").unwrap(), 6.0);
    assert_eq!(calc.evaluate("X*2").unwrap(), 10.0);
    assert_eq!(calc.variables().get("x"), Some(5.0));
}

#[test]
fn assignment_keeps_pending_operators() {
    let mut calc = Calculator::new();
    assert_eq!(calc.evaluate("2*y=3+1").unwrap(), 8.0);
    assert_eq!(calc.variables().get("y"), Some(4.0));
    assert_eq!(calc.evaluate("(z=2)3").unwrap(), 6.0);
    assert_eq!(calc.variables().get("z"), Some(2.0));
}

#[test]
fn last_answer_chaining() {
    let mut calc = Calculator::new();
    assert_eq!(calc.evaluate("2+2").unwrap(), 4.0);
    assert_eq!(calc.evaluate("r*2").unwrap(), 8.0);
    assert_eq!(calc.evaluate("r").unwrap(), 8.0);
    assert_eq!(calc.variables().last_answer(), 8.0);
}

#[test]
fn failed_evaluation_keeps_last_answer() {
    let mut calc = Calculator::new();
    calc.evaluate("21*2").unwrap();
    assert!(calc.evaluate("21*").is_err());
    assert_eq!(calc.variables().last_answer(), 42.0);
}

#[test]
fn unknown_variables_default_to_zero() {
    assert_value("nothing+1", 1.0);
    assert_value("sin2", 0.0);
}

#[test]
fn rounding_suppresses_float_noise() {
    assert_value("0.1+0.2", 0.3);
    assert_value("1.1*1.1", 1.21);
    assert_value("1/3", 0.333_333_333_3);
}

#[test]
fn precision_is_configurable() {
    let mut calc = Calculator::with_settings(Settings { precision: 2,
                                                       ..Settings::default() });
    assert_eq!(calc.evaluate("2/3").unwrap(), 0.67);
    assert_eq!(calc.evaluate("pi").unwrap(), std::f64::consts::PI);
}

#[test]
fn extreme_precision_keeps_results_finite() {
    for precision in [-400, 400] {
        let mut calc = Calculator::with_settings(Settings { precision,
                                                           ..Settings::default() });
        assert_eq!(calc.evaluate("1/4").unwrap(), 0.25, "precision {precision}");
    }
}

#[test]
fn silent_non_finite_results() {
    let mut calc = Calculator::new();
    assert_eq!(calc.evaluate("1/0").unwrap(), f64::INFINITY);
    assert!(calc.evaluate("asin(2)").unwrap().is_nan());
    assert_eq!(calc.evaluate_formatted("-1/0").unwrap(), "-Infinity");
}

#[test]
fn empty_expressions() {
    assert_failure("", ErrorKind::EmptyExpression, 0);
    assert_failure("   \t  ", ErrorKind::EmptyExpression, 0);
}

#[test]
fn syntax_errors_report_positions() {
    let e = assert_failure("2+", ErrorKind::Syntax, 2);
    assert_eq!(e, EvalError::UnexpectedEnd { position: 2 });
    assert_failure("2+*3", ErrorKind::Syntax, 2);
    assert_failure("2&3", ErrorKind::Syntax, 1);
    assert_failure("1..2", ErrorKind::Syntax, 0);
    assert_failure("sin=1", ErrorKind::Syntax, 3);
    assert_failure("2 +\t3", ErrorKind::Syntax, 2);
}

#[test]
fn missing_structural_tokens() {
    assert_failure("(1+2", ErrorKind::ExpectedToken, 4);
    assert_failure("1+2)", ErrorKind::ExpectedToken, 3);
    assert_failure("log(8)", ErrorKind::ExpectedToken, 5);
    assert_failure("rt-8", ErrorKind::ExpectedToken, 2);
    assert_failure("sin(1,2)", ErrorKind::ExpectedToken, 5);
    assert_failure("1;2", ErrorKind::ExpectedToken, 1);
    assert_failure("2=3", ErrorKind::ExpectedToken, 1);
}

#[test]
fn commas_only_separate_call_arguments() {
    let e = assert_failure("(1,2)", ErrorKind::ExpectedToken, 2);
    assert_eq!(e.to_string(), "Error at position 2: ')' expected.");
    assert_failure("5,6", ErrorKind::ExpectedToken, 1);
    assert_failure("log(2,8,1)", ErrorKind::ExpectedToken, 7);
}

#[test]
fn embedded_terminators_are_unexpected_tokens() {
    let e = assert_failure(";;2", ErrorKind::Syntax, 0);
    assert_eq!(e, EvalError::UnexpectedToken { token:    ";".to_string(),
                                               position: 0, });
    assert_failure("2+;3", ErrorKind::Syntax, 2);
    let e = assert_failure("2*", ErrorKind::Syntax, 2);
    assert_eq!(e, EvalError::UnexpectedEnd { position: 2 });
}

#[test]
fn error_messages() {
    let e = assert_failure("(1", ErrorKind::ExpectedToken, 2);
    assert_eq!(e.to_string(), "Error at position 2: ')' expected.");
    let e = assert_failure("4#", ErrorKind::Syntax, 1);
    assert_eq!(e.to_string(), "Error at position 1: Unexpected token '#'.");
}

#[test]
fn strict_mode_rejects_unknown_variables() {
    let mut calc = strict();
    let e = calc.evaluate("1+foo").unwrap_err();
    assert_eq!(e, EvalError::UnknownVariable { name:     "foo".to_string(),
                                               position: 2, });
    assert_eq!(calc.evaluate("foo=2").unwrap(), 2.0);
    assert_eq!(calc.evaluate("1+foo").unwrap(), 3.0);
}

#[test]
fn strict_mode_rejects_domain_errors() {
    let mut calc = strict();
    assert_eq!(calc.evaluate("(0-3)!").unwrap_err().kind(), ErrorKind::Arithmetic);
    assert_eq!(calc.evaluate("2.5!").unwrap_err().kind(), ErrorKind::Arithmetic);
    assert_eq!(calc.evaluate("1/0").unwrap_err().kind(), ErrorKind::Arithmetic);
    assert_eq!(calc.evaluate("sqrt(0-1)").unwrap_err().kind(), ErrorKind::Arithmetic);
    assert_eq!(calc.evaluate("5!").unwrap(), 120.0);
}

#[test]
fn idempotent_for_fixed_state() {
    let mut calc = Calculator::new();
    calc.evaluate("k=3").unwrap();
    let first = calc.evaluate("k^2+sin(k)").unwrap();
    let second = calc.evaluate("k^2+sin(k)").unwrap();
    assert_eq!(first, second);
}

#[test]
fn one_shot_results_are_formatted() {
    assert_eq!(get_result("2pi").unwrap(), "6.2831853072");
    assert_eq!(get_result("10/4").unwrap(), "2.5");
    assert_eq!(get_result("-0*1").unwrap(), "0");
}
