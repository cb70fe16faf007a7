use std::collections::HashMap;

use log::debug;

use crate::{
    error::{EvalError, EvalResult},
    util::num::parse_real,
};

/// Supplies values for variables the store has not seen yet.
///
/// The resolver is called with a variable name and returns the raw reply typed
/// by the operator. Parsing the reply is the store's job, not the resolver's.
///
/// Any `FnMut(&str) -> std::io::Result<String>` closure is a resolver, which
/// makes scripted resolvers in tests a one-liner.
pub trait Resolver {
    /// Asks for the value of `name` and returns the reply text.
    ///
    /// # Errors
    /// Returns an I/O error if no reply can be obtained, for example when the
    /// input stream is closed.
    fn resolve(&mut self, name: &str) -> std::io::Result<String>;
}

impl<F> Resolver for F where F: FnMut(&str) -> std::io::Result<String>
{
    fn resolve(&mut self, name: &str) -> std::io::Result<String> {
        self(name)
    }
}

/// Variable bindings for one evaluation session.
///
/// A store starts empty and only grows: the first value resolved for a name is
/// kept for the lifetime of the store and the resolver is never asked about
/// that name again.
///
/// The store is plain single-threaded state. Sharing one store between
/// concurrently running sessions requires external synchronization.
#[derive(Debug, Default, Clone)]
pub struct VariableStore {
    bindings: HashMap<String, f64>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing has been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns all bindings ordered by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut bindings: Vec<_> =
            self.bindings.iter().map(|(name, value)| (name.as_str(), *value)).collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }

    /// Returns the value of `name`, resolving and binding it on first use.
    ///
    /// A bound name is returned without side effects. An unbound name is passed
    /// to `resolver`; its reply is parsed as a number and bound before the
    /// value is returned. A failed resolution binds nothing, so the next
    /// evaluation asks again.
    ///
    /// # Errors
    /// - `ResolutionFailed` if the resolver returns an error.
    /// - `NumericParseFailure` if the reply is not a valid number.
    ///
    /// # Example
    /// ```
    /// use varcalc::interpreter::store::VariableStore;
    ///
    /// let mut store = VariableStore::new();
    /// let mut prompts = 0;
    /// let mut resolver = |_: &str| {
    ///     prompts += 1;
    ///     Ok::<_, std::io::Error>("4".to_string())
    /// };
    ///
    /// assert_eq!(store.get_or_resolve("x", &mut resolver).unwrap(), 4.0);
    /// assert_eq!(store.get_or_resolve("x", &mut resolver).unwrap(), 4.0);
    /// assert_eq!(prompts, 1);
    /// ```
    pub fn get_or_resolve<R>(&mut self, name: &str, resolver: &mut R) -> EvalResult<f64>
        where R: Resolver + ?Sized
    {
        if let Some(value) = self.get(name) {
            return Ok(value);
        }

        debug!("resolving unbound variable '{name}'");
        let reply =
            resolver.resolve(name)
                    .map_err(|e| EvalError::ResolutionFailed { name:    name.to_string(),
                                                               details: e.to_string(), })?;
        let value = parse_real(&reply)?;

        debug!("bound '{name}' = {value}");
        self.bindings.insert(name.to_string(), value);
        Ok(value)
    }
}
