//! Command metadata types.
//!
//! A [`Command`] describes one invocable action: its canonical name, alias
//! list, declared flags, and help text. The handler reference is carried as
//! a generic payload so the daemon can store boxed trait objects while unit
//! tests use `()`.

use smallvec::SmallVec;

/// A flag declared by a command.
///
/// A flag with an argument label is typed as `--name=value`; one without is
/// a boolean switch typed as `--name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Flag name as typed after the `--` marker (case-sensitive).
    pub name: String,
    /// Argument label shown in help text, if the flag expects a value.
    pub argument: Option<String>,
}

/// Metadata for one invocable command.
///
/// Commands are built once at startup and never mutated afterwards. The
/// canonical name must be non-empty and contain no whitespace; this is a
/// construction convention, not a runtime check.
#[derive(Debug, Clone)]
pub struct Command<H> {
    /// Unique canonical name.
    pub name: String,
    /// Alternate names, in declaration order.
    pub aliases: Vec<String>,
    /// Declared flags, in declaration order.
    pub flags: SmallVec<[Flag; 2]>,
    /// Free-form description of positional arguments, for help text.
    pub usage: String,
    /// Human-readable summary, for help text.
    pub description: String,
    /// Handler reference invoked on dispatch.
    pub handler: H,
}

impl<H> Command<H> {
    /// Create a command with no aliases, flags, or usage hint.
    pub fn new(name: impl Into<String>, description: impl Into<String>, handler: H) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            flags: SmallVec::new(),
            usage: String::new(),
            description: description.into(),
            handler,
        }
    }

    /// Add an alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Declare a boolean flag (`--name`).
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.flags.push(Flag {
            name: name.into(),
            argument: None,
        });
        self
    }

    /// Declare a valued flag (`--name=value`), with an argument label for
    /// help text.
    pub fn flag_with_arg(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.flags.push(Flag {
            name: name.into(),
            argument: Some(label.into()),
        });
        self
    }

    /// Set the positional-arguments usage hint.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Whether this command declares a flag with the given name.
    ///
    /// Comparison is case-sensitive, matching the wire-level flag grammar.
    pub fn declares_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let cmd = Command::new("translate", "Translate text", ())
            .alias("t")
            .flag_with_arg("to", "lang")
            .flag("verbose")
            .usage("[text]");

        assert_eq!(cmd.name, "translate");
        assert_eq!(cmd.aliases, vec!["t"]);
        assert_eq!(cmd.flags.len(), 2);
        assert_eq!(cmd.flags[0].argument.as_deref(), Some("lang"));
        assert_eq!(cmd.flags[1].argument, None);
        assert_eq!(cmd.usage, "[text]");
    }

    #[test]
    fn test_declares_flag_is_case_sensitive() {
        let cmd = Command::new("x", "", ()).flag("to");
        assert!(cmd.declares_flag("to"));
        assert!(!cmd.declares_flag("To"));
        assert!(!cmd.declares_flag("origin"));
    }
}
