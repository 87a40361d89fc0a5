//! Command registry with alias index.
//!
//! The registry is built once at startup by an explicit registration
//! sequence and is read-only afterwards. Registration is idempotent:
//! the first writer wins for both canonical names and aliases, and later
//! duplicates are silently ignored rather than treated as errors.

use crate::command::Command;
use std::collections::HashMap;

/// Registry of commands, keyed by canonical name, with an alias index.
///
/// Iteration order follows registration order so help output is stable.
pub struct Registry<H> {
    commands: HashMap<String, Command<H>>,
    aliases: HashMap<String, String>,
    order: Vec<String>,
}

impl<H> Registry<H> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a command.
    ///
    /// If the canonical name is already taken the whole registration is a
    /// no-op. Aliases already claimed by an earlier command are skipped
    /// individually; the rest of the command still registers.
    pub fn register(&mut self, command: Command<H>) {
        if self.commands.contains_key(&command.name) {
            return;
        }

        for alias in &command.aliases {
            if !self.aliases.contains_key(alias) {
                self.aliases.insert(alias.clone(), command.name.clone());
            }
        }

        self.order.push(command.name.clone());
        self.commands.insert(command.name.clone(), command);
    }

    /// Resolve a token to a command, checking aliases first.
    pub fn resolve(&self, token: &str) -> Option<&Command<H>> {
        let canonical = self.aliases.get(token).map(String::as_str).unwrap_or(token);
        self.commands.get(canonical)
    }

    /// Look up a command by canonical name only (aliases not consulted).
    pub fn get(&self, name: &str) -> Option<&Command<H>> {
        self.commands.get(name)
    }

    /// Render the help line for a command:
    /// `name [| alias]... [--flag[=<arg>]]... usage`.
    ///
    /// Returns `None` if the canonical name is unknown.
    pub fn describe(&self, name: &str) -> Option<String> {
        let command = self.commands.get(name)?;

        let mut txt = command.name.clone();
        for alias in &command.aliases {
            txt.push_str(" | ");
            txt.push_str(alias);
        }
        for flag in &command.flags {
            match &flag.argument {
                Some(arg) => {
                    txt.push_str(&format!(" [--{}=<{}>]", flag.name, arg));
                }
                None => {
                    txt.push_str(&format!(" [--{}]", flag.name));
                }
            }
        }
        if !command.usage.is_empty() {
            txt.push(' ');
            txt.push_str(&command.usage);
        }

        Some(txt)
    }

    /// Iterate commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command<H>> {
        self.order.iter().filter_map(|name| self.commands.get(name))
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of registered aliases.
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}
