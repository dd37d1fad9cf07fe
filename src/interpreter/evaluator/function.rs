use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_block},
        value::{Environment, Value},
    },
};

/// Applies a callable value to evaluated arguments.
///
/// - A closure must receive exactly as many arguments as it declares
///   parameters. Its body runs in a new scope enclosed by the closure's
///   captured scope, with each parameter bound to its argument. A `return`
///   inside the body ends the call; otherwise the value of the last statement
///   is the result.
/// - A builtin is handed the arguments as they are and checks them itself.
/// - Anything else is a `NotCallable` error.
pub fn apply_function(callee: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            let parameters = &function.literal.parameters;
            if arguments.len() != parameters.len() {
                return Err(RuntimeError::ArityMismatch { expected: parameters.len(),
                                                         got:      arguments.len(), });
            }
            trace!("calling {} with {} argument(s)", function.literal, arguments.len());

            let scope = Environment::enclosed(&function.env);
            {
                let mut frame = scope.borrow_mut();
                for (parameter, argument) in parameters.iter().zip(arguments) {
                    frame.set(parameter.name.as_str(), argument);
                }
            }

            Ok(eval_block(&function.literal.body, &scope)?.unwrap_return())
        },
        Value::Builtin(builtin) => {
            trace!("calling builtin {} with {} argument(s)", builtin.name, arguments.len());
            (builtin.func)(&arguments)
        },
        other => Err(RuntimeError::NotCallable { got: other.kind() }),
    }
}
