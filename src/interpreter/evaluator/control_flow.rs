use crate::{
    ast::{Branch, Expr, Statement},
    interpreter::evaluator::{
        console::Console,
        core::{EvalResult, Evaluator, Flow},
    },
};

impl<C: Console> Evaluator<C> {
    /// Runs the first branch whose condition is truthy, or the `else` body
    /// if none is.
    ///
    /// Conditions are tested in declared order and testing stops at the
    /// first truthy one.
    pub(crate) fn eval_if(&mut self,
                          branches: &[Branch],
                          otherwise: Option<&[Statement]>)
                          -> EvalResult<Flow> {
        for branch in branches {
            if self.eval(&branch.condition)?.is_truthy() {
                return self.eval_block(&branch.body);
            }
        }

        otherwise.map_or(Ok(Flow::Normal), |body| self.eval_block(body))
    }

    /// Runs `body` while `condition` is truthy, re-testing before every
    /// iteration. A `->` inside the body ends the loop and the enclosing
    /// function.
    pub(crate) fn eval_while(&mut self, condition: &Expr, body: &[Statement]) -> EvalResult<Flow> {
        while self.eval(condition)?.is_truthy() {
            if let flow @ Flow::Return { .. } = self.eval_block(body)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Runs `init` once, then alternates testing `condition`, running
    /// `body` and running `update`.
    ///
    /// The loop variable is an ordinary binding: it stays bound after the
    /// loop, and the body may write to it.
    pub(crate) fn eval_for(&mut self,
                           init: &Statement,
                           condition: &Expr,
                           update: &Statement,
                           body: &[Statement])
                           -> EvalResult<Flow> {
        if let flow @ Flow::Return { .. } = self.eval_statement(init)? {
            return Ok(flow);
        }

        while self.eval(condition)?.is_truthy() {
            if let flow @ Flow::Return { .. } = self.eval_block(body)? {
                return Ok(flow);
            }
            if let flow @ Flow::Return { .. } = self.eval_statement(update)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::{
        config::Config,
        error::RuntimeError,
        interpreter::{
            evaluator::{console::BufferConsole, core::Evaluator},
            lexer::tokenize,
            parser::core::parse,
            value::core::Value,
        },
    };

    fn run(source: &str) -> (Result<(), RuntimeError>, Evaluator<BufferConsole>) {
        let program = parse(&tokenize(source).unwrap()).unwrap();
        let mut evaluator = Evaluator::new(Config::default(), BufferConsole::new());
        let result = evaluator.evaluate(&program).map(|_| ());
        (result, evaluator)
    }

    #[test]
    fn first_truthy_branch_wins() {
        let (result, evaluator) = run("
            score <== 72
            if -> score >= 90 { grade <== \"A\" }
            elif -> score >= 70 { grade <== \"B\" }
            elif -> score >= 50 { grade <== \"C\" }
            else { grade <== \"F\" }
        ");
        result.unwrap();
        assert_eq!(evaluator.environment().value("grade"), Some(&Value::from("B")));
    }

    #[test]
    fn else_runs_when_nothing_matches() {
        let (result, evaluator) = run("if -> 0 { x <== 1 } else { x <== 2 }");
        result.unwrap();
        assert_eq!(evaluator.environment().value("x"), Some(&Value::Integer(2)));
    }

    #[test]
    fn while_tests_before_each_iteration() {
        let (result, evaluator) = run("
            i <== 0
            while -> i < 5 { i <== i + 1 }
            while -> false { never <== true }
        ");
        result.unwrap();
        assert_eq!(evaluator.environment().value("i"), Some(&Value::Integer(5)));
        assert_eq!(evaluator.environment().value("never"), None);
    }

    #[test]
    fn for_loop_sums_an_array() {
        let (result, evaluator) = run("
            <const array> values <== [10, 20, 30]
            <var int> sum <== 0
            for -> i <== 0 ; i < values.length ; i <== i + 1 {
                sum <== sum + values[i]
            }
        ");
        result.unwrap();
        let environment = evaluator.environment();
        assert_eq!(environment.value("sum"), Some(&Value::Integer(60)));
        assert_eq!(environment.value("i"), Some(&Value::Integer(3)));
    }

    #[test]
    fn return_leaves_the_loop_and_the_function() {
        let (result, evaluator) = run("
            <int fn> firstOver(<array> items, <int> limit) {
                for -> i <== 0 ; i < len(items) ; i <== i + 1 {
                    if -> items[i] > limit { -> items[i] }
                }
                -> 0
            }
            <fn> main() {
                print(firstOver([3, 8, 12, 20], 10))
                print(firstOver([1, 2], 10))
            }
        ");
        result.unwrap();
        assert_eq!(evaluator.console().output(), "12\n0\n");
    }

    #[test]
    fn return_at_top_level_is_an_error() {
        let (result, _) = run("if -> true { -> 1 }");
        assert!(matches!(result, Err(RuntimeError::ReturnOutsideFunction { .. })));
    }
}
