// tests/expression_tests.rs

use nums::core::NumsError;
use nums::expression::Function;

#[cfg(test)]
mod functions {
    use super::*;

    #[test]
    fn test_polynomial_in_two_variables() {
        let mut f = Function::parse("x^2 + 2xy + y^2").unwrap();
        assert_eq!(f.detect_variables(), vec!["x", "xy", "y"]);
        let mut g = Function::parse("x^2 + 2x*y + y^2").unwrap();
        assert_eq!(g.detect_variables(), vec!["x", "y"]);
        assert_eq!(g.evaluate(&[("x", 3.0), ("y", 4.0)]).unwrap(), 49.0);
        assert!(f.evaluate(&[("x", 3.0), ("y", 4.0)]).is_err());
    }

    #[test]
    fn test_default_value_fills_missing_variables() {
        let mut f = Function::parse("(a + b)(a - b)").unwrap();
        assert_eq!(f.evaluate_with_default(2.0, &[("a", 5.0)]).unwrap(), 21.0);
        assert_eq!(f.evaluate(&[]).unwrap(), 21.0);
    }

    #[test]
    fn test_errors() {
        let mut f = Function::parse("1 / (x - 1)").unwrap();
        assert_eq!(f.evaluate(&[("x", 1.0)]), Err(NumsError::DivisionByZero));
        let mut g = Function::parse("sqrt(x)").unwrap();
        assert!(matches!(g.evaluate(&[("x", -4.0)]), Err(NumsError::InvalidValue { .. })));
        assert!(matches!(Function::parse("2 +* 3"), Err(NumsError::Parse { .. })));
    }

    #[test]
    fn test_display_is_normalized() {
        let f = Function::parse("2 x ** 2 + 3(x + 1)").unwrap();
        assert_eq!(f.to_string(), "2*x^2 + 3*(x + 1)");
        let reparsed = Function::parse(&f.to_string()).unwrap();
        assert_eq!(reparsed.expression(), f.expression());
    }
}
