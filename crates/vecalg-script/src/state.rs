//! Navigation of a loaded configuration document.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{bail, Context};
use itertools::Itertools;

use crate::{FromValue, Value};

/// A loaded configuration document together with a stack of nested lookups.
///
/// Values are addressed relative to the top of the stack: at depth 0, names refer to the
/// document's top-level (global) entries, otherwise they refer to entries of the table that was
/// pushed last.
///
/// # Examples
///
/// ```
/// # use vecalg::Vec3f;
/// # use vecalg_script::ScriptState;
/// let mut state = ScriptState::load_str(r#"
///     [wand]
///     offset = [0.0, 0.5, -1.0]
/// "#)?;
///
/// state.push_table("wand")?;
/// state.push_value("offset")?;
/// let offset: Vec3f = state.read()?;
/// assert_eq!(offset, [0.0, 0.5, -1.0]);
/// # anyhow::Ok(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptState {
    globals: BTreeMap<String, Value>,
    stack: Vec<String>,
}

impl ScriptState {
    /// Parses a TOML document.
    pub fn load_str(src: &str) -> anyhow::Result<Self> {
        let globals = toml::from_str(src).context("failed to parse configuration document")?;
        Ok(Self {
            globals,
            stack: Vec::new(),
        })
    }

    /// Reads and parses the TOML document at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        let state =
            Self::load_str(&src).with_context(|| format!("failed to load '{}'", path.display()))?;
        log::debug!(
            "loaded '{}' with {} top-level entries",
            path.display(),
            state.globals.len()
        );
        Ok(state)
    }

    /// Serializes the document, including all modifications, back to TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(&self.globals)?)
    }

    /// Returns the number of values currently pushed.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn path(&self) -> String {
        self.stack.iter().join(".")
    }

    fn lookup(&self, path: &[String]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut value = self.globals.get(first)?;
        for name in rest {
            value = value.as_table()?.get(name)?;
        }
        Some(value)
    }

    /// The table names are resolved against.
    fn scope(&self) -> anyhow::Result<&BTreeMap<String, Value>> {
        if self.stack.is_empty() {
            return Ok(&self.globals);
        }
        match self.lookup(&self.stack) {
            Some(Value::Table(table)) => Ok(table),
            Some(other) => bail!("'{}' is a {}, not a table", self.path(), other.type_name()),
            None => bail!("'{}' no longer exists", self.path()),
        }
    }

    fn scope_mut(&mut self) -> anyhow::Result<&mut BTreeMap<String, Value>> {
        let Some((first, rest)) = self.stack.split_first() else {
            return Ok(&mut self.globals);
        };
        let mut value = self.globals.get_mut(first);
        for name in rest {
            value = value
                .and_then(Value::as_table_mut)
                .and_then(|table| table.get_mut(name));
        }
        match value {
            Some(Value::Table(table)) => Ok(table),
            _ => bail!("'{}' is not a table", self.stack.iter().join(".")),
        }
    }

    /// Pushes the value called `name` onto the stack.
    ///
    /// At depth 0, `name` is looked up among the global entries, otherwise in the table at the top
    /// of the stack. Fails if no such value exists.
    pub fn push_value(&mut self, name: &str) -> anyhow::Result<()> {
        let scope = self.scope()?;
        if !scope.contains_key(name) {
            log::debug!("'{}' has no entry '{}'", self.path(), name);
            bail!("'{}' is not defined", name);
        }

        self.stack.push(name.to_string());
        log::trace!("pushed '{}' (depth {})", self.path(), self.depth());
        Ok(())
    }

    /// Pushes the table called `name` onto the stack.
    ///
    /// Like [`ScriptState::push_value`], but additionally fails (leaving the stack unchanged) if
    /// the value is not a table.
    pub fn push_table(&mut self, name: &str) -> anyhow::Result<()> {
        self.push_value(name)?;
        if let Some(value) = self.top().filter(|v| v.as_table().is_none()) {
            let found = value.type_name();
            log::debug!("'{}' is a {}, not a table", self.path(), found);
            self.stack.pop();
            bail!("'{}' is not a table (found {})", name, found);
        }
        Ok(())
    }

    /// Removes the value at the top of the stack.
    pub fn pop(&mut self) -> anyhow::Result<()> {
        match self.stack.pop() {
            Some(name) => {
                log::trace!("popped '{}' (depth {})", name, self.depth());
                Ok(())
            }
            None => bail!("cannot pop from an empty stack"),
        }
    }

    /// Pops every value off the stack.
    pub fn reset(&mut self) {
        log::trace!("reset from depth {}", self.depth());
        self.stack.clear();
    }

    /// Returns the value at the top of the stack, if any.
    pub fn top(&self) -> Option<&Value> {
        self.lookup(&self.stack)
    }

    /// Converts the value at the top of the stack to `V`.
    pub fn read<V: FromValue>(&self) -> anyhow::Result<V> {
        let Some(value) = self.top() else {
            bail!("no value has been pushed");
        };
        V::from_value(value).with_context(|| format!("failed to read '{}'", self.path()))
    }

    /// Returns the names of all entries in the current table.
    ///
    /// At depth 0, these are the names of the global entries.
    pub fn keys(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.scope()?.keys().cloned().collect())
    }

    /// Stores `value` under `name` in the current table, replacing any existing entry.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> anyhow::Result<()> {
        let value = value.into();
        log::trace!("setting '{}' in '{}' to {}", name, self.path(), value);
        self.scope_mut()?.insert(name.to_string(), value);
        Ok(())
    }
}
