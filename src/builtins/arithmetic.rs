//! ABOUTME: Arithmetic natives — ADD/+, SUB/-, MULT/*, DIV//, EXP, SQUARE

use crate::env::Environment;
use crate::error::LispError;
use crate::eval::fetch;
use crate::value::Value;

pub fn register(env: &mut Environment) {
    env.define("ADD", Value::Native { name: "ADD".to_string(), func: add });
    env.define("+", Value::Native { name: "ADD".to_string(), func: add });
    env.define("SUB", Value::Native { name: "SUB".to_string(), func: sub });
    env.define("-", Value::Native { name: "SUB".to_string(), func: sub });
    env.define(
        "MULT",
        Value::Native { name: "MULT".to_string(), func: mult },
    );
    env.define("*", Value::Native { name: "MULT".to_string(), func: mult });
    env.define("DIV", Value::Native { name: "DIV".to_string(), func: div });
    env.define("/", Value::Native { name: "DIV".to_string(), func: div });
    env.define("EXP", Value::Native { name: "EXP".to_string(), func: exp });
    env.define(
        "SQUARE",
        Value::Native { name: "SQUARE".to_string(), func: square },
    );
}

/// Fetches `arg` and coerces it to a number, attributing any failure to
/// `function` so the error message carries the operator's display name
/// regardless of which alias (`ADD` vs `+`) was used to call it.
fn number_arg(function: &str, arg: &Value, env: &mut Environment) -> Result<f64, LispError> {
    let fetched = fetch(arg, env)?;
    fetched.as_number().ok_or_else(|| {
        LispError::runtime(
            function,
            format!("expects a number, got {}", fetched.type_name()),
        )
    })
}

pub fn add(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() < 2 {
        return Err(LispError::arity("ADD", "at least 2", args.len()));
    }
    let mut sum = 0.0;
    for arg in args {
        sum += number_arg("ADD", arg, env)?;
    }
    Ok(Value::number(sum))
}

pub fn sub(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity("SUB", "2", args.len()));
    }
    let minuend = number_arg("SUB", &args[0], env)?;
    let subtrahend = number_arg("SUB", &args[1], env)?;
    Ok(Value::number(minuend - subtrahend))
}

pub fn mult(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() < 2 {
        return Err(LispError::arity("MULT", "at least 2", args.len()));
    }
    let mut product = 1.0;
    for arg in args {
        product *= number_arg("MULT", arg, env)?;
    }
    Ok(Value::number(product))
}

pub fn div(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity("DIV", "2", args.len()));
    }
    let dividend = number_arg("DIV", &args[0], env)?;
    let divisor = number_arg("DIV", &args[1], env)?;
    Ok(Value::number(dividend / divisor))
}

pub fn exp(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 2 {
        return Err(LispError::arity("EXP", "2", args.len()));
    }
    let base = number_arg("EXP", &args[0], env)?;
    let exponent = number_arg("EXP", &args[1], env)?;
    Ok(Value::number(base.powf(exponent)))
}

pub fn square(args: &[Value], env: &mut Environment) -> Result<Value, LispError> {
    if args.len() != 1 {
        return Err(LispError::arity("SQUARE", "1", args.len()));
    }
    let n = number_arg("SQUARE", &args[0], env)?;
    Ok(Value::number(n * n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;
    use crate::value::NativeFn;

    fn call(f: NativeFn, args: &[Value]) -> Result<Value, LispError> {
        let mut env = Environment::new();
        register(&mut env);
        f(args, &mut env)
    }

    #[test]
    fn add_sums_all_fetched_arguments() {
        let result = call(add, &[Value::atom("1", false), Value::atom("2", false), Value::atom("3", false)]).unwrap();
        assert_eq!(result.as_number(), Some(6.0));
    }

    #[test]
    fn add_requires_at_least_two_arguments() {
        assert!(matches!(
            call(add, &[Value::atom("1", false)]),
            Err(LispError::ArityError { .. })
        ));
    }

    #[test]
    fn sub_is_minuend_minus_subtrahend() {
        let result = call(sub, &[Value::atom("10", false), Value::atom("3", false)]).unwrap();
        assert_eq!(result.as_number(), Some(7.0));
    }

    #[test]
    fn mult_is_product() {
        let result = call(mult, &[Value::atom("4", false), Value::atom("5", false)]).unwrap();
        assert_eq!(result.as_number(), Some(20.0));
    }

    #[test]
    fn div_by_zero_yields_infinity_instead_of_erroring() {
        let result = call(div, &[Value::atom("1", false), Value::atom("0", false)]).unwrap();
        assert_eq!(result.as_number(), Some(f64::INFINITY));
    }

    #[test]
    fn computed_infinity_feeds_back_into_further_arithmetic() {
        let mut env = Environment::new();
        register(&mut env);
        let infinity = div(&[Value::atom("1", false), Value::atom("0", false)], &mut env).unwrap();
        let result = add(&[infinity, Value::atom("1", false)], &mut env).unwrap();
        assert_eq!(result.as_number(), Some(f64::INFINITY));
    }

    #[test]
    fn square_multiplies_value_by_itself() {
        let result = call(square, &[Value::atom("9", false)]).unwrap();
        assert_eq!(result.as_number(), Some(81.0));
    }

    #[test]
    fn non_numeric_operand_errors_with_the_operators_name() {
        let err = call(add, &[Value::atom("X", true), Value::atom("1", false)]).unwrap_err();
        assert!(err.to_string().starts_with("ADD:"));
    }
}
