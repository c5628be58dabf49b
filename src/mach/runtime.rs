use super::{Function, Imports, Outcome, Printer, Val, Var};
use crate::error;
use crate::lang::ast::{Condition, Expression, RangeArg, Statement};
use crate::lang::{Error, LineNumber, Parser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// Loop iterations allowed in one run.
pub const MAX_ITERATIONS: usize = u16::max_value() as usize;

/// ## Runtime
///
/// Executes a snippet in one synchronous pass. The variable table, the
/// import table and the output buffer belong to the run; `run` resets
/// them before it starts.
pub struct Runtime<R: Rng = StdRng> {
    rng: R,
    var: Var,
    imports: Imports,
    output: String,
    tracing: bool,
    trace: Vec<LineNumber>,
    iterations: usize,
    interrupted: Arc<AtomicBool>,
}

impl Default for Runtime<StdRng> {
    fn default() -> Self {
        Runtime::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Runtime<R> {
    pub fn new(rng: R) -> Runtime<R> {
        Runtime {
            rng,
            var: Var::new(),
            imports: Imports::default(),
            output: String::new(),
            tracing: false,
            trace: vec![],
            iterations: 0,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Record the line number of every executed statement.
    pub fn set_trace(&mut self, tracing: bool) {
        self.tracing = tracing;
    }

    /// Setting the flag stops a running loop at its next iteration.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    pub fn run(&mut self, source: &str) -> Outcome {
        self.var.clear();
        self.imports.clear();
        self.output.clear();
        self.trace.clear();
        self.iterations = 0;
        self.interrupted.store(false, Ordering::SeqCst);
        let error = self.execute(source).err();
        Outcome::new(
            std::mem::take(&mut self.output),
            error,
            std::mem::take(&mut self.trace),
        )
    }

    fn execute(&mut self, source: &str) -> Result<()> {
        for statement in Parser::new(source) {
            self.statement(&statement)?;
        }
        Ok(())
    }

    fn statement(&mut self, statement: &Statement) -> Result<()> {
        let line_number = statement.line_number();
        if self.tracing {
            self.trace.push(line_number);
        }
        match statement {
            Statement::Import(_, module, _) => {
                self.imports.import(module);
                Ok(())
            }
            Statement::Assign(_, name, expr) => {
                let val = self
                    .evaluate(expr)
                    .map_err(|e| e.in_line_number(line_number))?;
                self.var.store(name, val);
                Ok(())
            }
            Statement::If(_, condition, then_block, else_block) => {
                let block = if self.condition(condition) {
                    then_block
                } else {
                    else_block
                };
                for statement in block {
                    self.statement(statement)?;
                }
                Ok(())
            }
            Statement::For(_, name, args, body) => self
                .for_loop(name, args, body)
                .map_err(|e| e.in_line_number(line_number)),
            Statement::Print(_, printable) => {
                let line = Printer::new(&self.var).line(printable);
                self.output.push_str(&line);
                self.output.push('\n');
                Ok(())
            }
        }
    }

    fn evaluate(&mut self, expr: &Expression) -> Result<Val> {
        match expr {
            Expression::RandInt(min, max, text) => match self.imports.get("randint") {
                Some(Function::RandInt) => Ok(Function::randint(&mut self.rng, *min, *max)),
                None => Ok(Val::String(text.clone())),
            },
            Expression::Input(prompt) => {
                let answer = Function::input(&mut self.rng);
                self.output.push_str(&format!("{} {}\n", prompt, answer));
                Ok(Val::Number(answer as f64))
            }
            Expression::String(s) => Ok(Val::String(s.clone())),
            Expression::Number(n) => Ok(Val::Number(*n)),
            Expression::Raw(s) => Ok(Val::String(s.clone())),
        }
    }

    fn condition(&self, condition: &Condition) -> bool {
        match condition {
            Condition::Equal(lhs, rhs) => self
                .var
                .fetch_or_text(lhs)
                .loose_eq(&self.var.fetch_or_text(rhs)),
            Condition::Unsupported(_) => false,
        }
    }

    fn for_loop(&mut self, name: &Rc<str>, args: &[RangeArg], body: &[Statement]) -> Result<()> {
        let mut bounds = Vec::with_capacity(args.len());
        for arg in args {
            bounds.push(self.range_arg(arg)?);
        }
        let (start, stop, step) = match bounds.as_slice() {
            [stop] => (0, *stop, 1),
            [start, stop] => (*start, *stop, 1),
            [start, stop, step] => (*start, *stop, *step),
            _ => return Err(error!(InternalError; "range arguments")),
        };
        if step == 0 {
            return Err(error!(ValueError; "range() arg 3 must not be zero"));
        }
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            self.iteration()?;
            self.var.store(name, Val::Number(i as f64));
            for statement in body {
                self.statement(statement)?;
            }
            i = match i.checked_add(step) {
                Some(i) => i,
                None => break,
            };
        }
        Ok(())
    }

    fn range_arg(&self, arg: &RangeArg) -> Result<i64> {
        match arg {
            RangeArg::Integer(n) => Ok(*n),
            RangeArg::Name(name) => match self.var.fetch(name) {
                Some(Val::Number(n)) if n.fract() == 0.0 && n.abs() < i64::max_value() as f64 => {
                    Ok(*n as i64)
                }
                Some(val) => Err(error!(TypeError; &format!(
                    "'{}' cannot be interpreted as an integer",
                    val
                ))),
                None => Err(error!(NameError; &format!("name '{}' is not defined", name))),
            },
        }
    }

    fn iteration(&mut self) -> Result<()> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Err(error!(KeyboardInterrupt));
        }
        self.iterations += 1;
        if self.iterations > MAX_ITERATIONS {
            return Err(error!(OverflowError; &format!(
                "more than {} loop iterations",
                MAX_ITERATIONS
            )));
        }
        Ok(())
    }
}
