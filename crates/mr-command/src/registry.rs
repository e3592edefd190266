//! Symbol → command lookup table.

use std::collections::HashMap;
use std::fmt;

use crate::{Command, CommandError, CommandResult, MoveForward, TurnLeft, TurnRight};

/// Maps instruction characters to [`Command`] implementations.
///
/// Built once at setup time and then only read, so a `&CommandRegistry` can
/// be shared freely between robots and threads.  Registering a command under
/// a symbol that is already taken replaces the previous command.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<char, Box<dyn Command>>,
}

impl CommandRegistry {
    /// An empty registry.  Every lookup fails until commands are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with `L`, `R`, and `F` pre-registered.
    pub fn standard() -> Self {
        Self::new()
            .with(TurnLeft)
            .with(TurnRight)
            .with(MoveForward)
    }

    /// Register `command` and return `self` (builder pattern).
    pub fn with<C: Command>(mut self, command: C) -> Self {
        self.register(command);
        self
    }

    /// Insert `command` under its symbol, overwriting any previous mapping.
    pub fn register<C: Command>(&mut self, command: C) {
        self.register_boxed(Box::new(command));
    }

    /// Like [`register`](Self::register) for an already boxed command.
    pub fn register_boxed(&mut self, command: Box<dyn Command>) {
        let symbol = command.symbol();
        if self.commands.insert(symbol, command).is_some() {
            tracing::debug!(%symbol, "command replaced");
        }
    }

    /// Look up the command registered for `symbol`.
    pub fn get(&self, symbol: char) -> CommandResult<&dyn Command> {
        match self.commands.get(&symbol) {
            Some(command) => Ok(command.as_ref()),
            None => Err(CommandError::UnknownCommand(symbol)),
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.commands.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Registered symbols in ascending order.
    pub fn symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = self.commands.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("symbols", &self.symbols())
            .finish()
    }
}
