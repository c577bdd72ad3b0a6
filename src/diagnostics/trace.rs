//! Call tracing around a single operation.
//!
//! [`traced`] prints the arguments of a call, runs it, and prints the value
//! it returned, framed by horizontal rules. The operation is passed in as a
//! closure, so tracing never changes what the operation does.
use log::debug;
use std::fmt::Debug;
use std::time::Instant;

pub const RULE_WIDTH: usize = 60;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn format_args_line<A: Debug + ?Sized>(args: &A) -> String {
    format!("args: {args:?}")
}

pub fn format_result_line<T: Debug + ?Sized>(result: &T) -> String {
    format!("result: {result:?}")
}

/// Run `op`, printing `args` before and its successful result after.
///
/// Errors are returned untouched and nothing is printed for them.
pub fn traced<A, T, E, F>(label: &str, args: &A, op: F) -> Result<T, E>
where
    A: Debug + ?Sized,
    T: Debug,
    F: FnOnce() -> Result<T, E>,
{
    println!("{}", rule());
    println!("{}", format_args_line(args));
    let start = Instant::now();
    let result = op()?;
    debug!(
        "{label} finished in {:.3} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );
    println!("{}", format_result_line(&result));
    println!("{}", rule());
    Ok(result)
}
