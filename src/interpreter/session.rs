use log::debug;

use crate::{
    error::EvalResult,
    interpreter::{
        evaluator::core::{EvalOptions, evaluate_with},
        store::{Resolver, VariableStore},
    },
};

/// One evaluation session.
///
/// A session owns a [`VariableStore`] and the resolver that fills it. Every
/// expression evaluated through the same session sees the bindings made by the
/// ones before it; separate sessions never share bindings.
///
/// ## Usage
///
/// Create a session once, then call [`Session::evaluate`] for each line the
/// operator enters. Dropping the session discards its bindings.
///
/// ```
/// use varcalc::interpreter::session::Session;
///
/// let mut session = Session::new(|_: &str| Ok::<_, std::io::Error>("4".to_string()));
/// assert_eq!(session.evaluate("x + x").unwrap(), 8.0);
/// assert_eq!(session.evaluate("x * 10").unwrap(), 40.0);
/// assert_eq!(session.variables().get("x"), Some(4.0));
/// ```
pub struct Session<R> {
    store:    VariableStore,
    resolver: R,
    options:  EvalOptions,
}

impl<R: Resolver> Session<R> {
    /// Creates a session with an empty store and default options.
    pub fn new(resolver: R) -> Self {
        Self::with_options(resolver, EvalOptions::default())
    }

    /// Creates a session with an empty store and the given options.
    pub fn with_options(resolver: R, options: EvalOptions) -> Self {
        Self { store: VariableStore::new(),
               resolver,
               options }
    }

    /// Evaluates one expression against the session's bindings.
    ///
    /// # Errors
    /// Returns the evaluation error, if any. Bindings made before the failure
    /// are kept.
    pub fn evaluate(&mut self, expression: &str) -> EvalResult<f64> {
        let result = evaluate_with(expression, &mut self.store, &mut self.resolver, self.options);
        match &result {
            Ok(value) => debug!("evaluated {expression:?} = {value}"),
            Err(e) => debug!("evaluation of {expression:?} failed: {}", e.kind()),
        }
        result
    }

    /// The bindings made so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.store
    }

    /// The resolver that answers this session's prompts.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// The options every evaluation in this session uses.
    #[must_use]
    pub const fn options(&self) -> EvalOptions {
        self.options
    }
}
