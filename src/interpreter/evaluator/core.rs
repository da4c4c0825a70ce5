use crate::{
    ast::{AmountComposite, AmountSigned, Input},
    error::EvaluationError,
    interpreter::{
        evaluator::step::Step,
        value::{
            core::SignedAmount,
            result::{ComputeResult, Computation},
            table::ConversionTable,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Stores the state of one evaluation.
///
/// A `Context` borrows the conversion table, remembers the target currency
/// once the leading directive has been resolved, and numbers and collects the
/// steps taken. [`Context::eval_input`] resets all of it, so one context never
/// carries anything from one line to the next. Contexts are cheap and are
/// meant to be created per evaluation; the table they borrow can be shared.
pub struct Context<'t> {
    table:  &'t ConversionTable,
    target: Option<String>,
    steps:  Vec<Step>,
}

impl<'t> Context<'t> {
    /// Creates a context over `table` with no target currency.
    #[must_use]
    pub const fn new(table: &'t ConversionTable) -> Self {
        Self { table,
               target: None,
               steps: Vec::new() }
    }

    /// Evaluates a whole line.
    ///
    /// This is the main entry point for evaluation:
    /// 1. the per-evaluation state is reset;
    /// 2. the leading directive fixes the target currency;
    /// 3. the expression is accumulated, every term being converted to the
    ///    target on the way;
    /// 4. the sign is applied to produce the result.
    ///
    /// # Errors
    /// `UnknownDirective` if the leading directive is not configured, and any
    /// error raised while evaluating the expression. No partial result is
    /// kept on failure.
    pub fn eval_input(&mut self, input: &Input) -> EvalResult<Computation> {
        self.target = None;
        self.steps.clear();

        let target = self.resolve_directive(&input.conversion.directive,
                                            input.conversion.position)?;
        tracing::trace!(directive = %input.conversion.directive, %target, "target currency resolved");
        self.target = Some(target);

        let total = self.eval_expression(&input.expression)?;

        Ok(Computation { result: ComputeResult::from(&total),
                         steps:  std::mem::take(&mut self.steps), })
    }

    /// Evaluates a single term to a signed amount in its own currency, or in
    /// the currency of its inline conversion.
    pub fn eval_amount_composite(&mut self, composite: &AmountComposite) -> EvalResult<SignedAmount> {
        match composite {
            AmountComposite::Signed(signed) => Ok(Self::eval_amount_signed(signed)),
            AmountComposite::Convertible(convertible) => self.eval_convertible(convertible),
        }
    }

    /// Builds the signed amount a literal denotes.
    #[must_use]
    pub fn eval_amount_signed(signed: &AmountSigned) -> SignedAmount {
        SignedAmount::new(signed.sign,
                          signed.amount.value,
                          signed.amount.currency.as_str())
    }

    /// The target currency of the current evaluation.
    ///
    /// # Errors
    /// `MissingTarget` before the leading directive has been resolved.
    pub fn target(&self) -> EvalResult<&str> {
        self.target.as_deref().ok_or(EvaluationError::MissingTarget)
    }

    /// Fixes the target currency without going through a directive.
    ///
    /// Used to evaluate a bare expression outside of [`Context::eval_input`].
    pub fn set_target(&mut self, currency: impl Into<String>) {
        self.target = Some(currency.into());
    }

    /// Steps recorded so far.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub(super) const fn table(&self) -> &'t ConversionTable {
        self.table
    }

    /// Resolves a directive token through the table.
    pub(super) fn resolve_directive(&self, directive: &str, position: usize) -> EvalResult<String> {
        self.table
            .resolve_directive(directive)
            .map(str::to_string)
            .ok_or_else(|| EvaluationError::UnknownDirective { directive: directive.to_string(),
                                                               position })
    }

    /// Numbers a step after the ones already taken, logs it and records it.
    pub(super) fn record(&mut self, step: impl FnOnce(usize) -> Step) {
        let step = step(self.steps.len());
        tracing::debug!("{step}");
        self.steps.push(step);
    }
}
