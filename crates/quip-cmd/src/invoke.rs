//! Invocation parsing.
//!
//! Turns one raw message line into a resolved command plus structured
//! arguments, in a single left-to-right pass with no backtracking. The
//! parser never fails: a message either parses to a complete
//! [`Invocation`] or it is not a command invocation at all, in which case
//! `None` is returned and the caller stays silent.

use crate::command::Command;
use crate::registry::Registry;
use std::collections::HashMap;

/// Two-character marker that introduces a flag token.
pub const FLAG_MARKER: &str = "--";

/// Command name fired when the bot is mentioned with nothing after it.
const DEFAULT_COMMAND: &str = "help";

/// Trigger configuration: the literal prefix and the bot's own mention
/// token, both supplied by the hosting collaborator.
#[derive(Debug, Clone)]
pub struct Trigger {
    /// Literal prefix that marks a command (default `!`).
    pub prefix: String,
    /// Exact mention-reference to the bot's identity, e.g. `<@1234>`.
    pub mention: String,
}

impl Trigger {
    /// Create a trigger from a prefix and a mention token.
    pub fn new(prefix: impl Into<String>, mention: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            mention: mention.into(),
        }
    }
}

/// The parse result of one message: a resolved command, the recognized
/// flags, and the residual positional text.
#[derive(Debug)]
pub struct Invocation<'r, H> {
    /// The resolved command.
    pub command: &'r Command<H>,
    /// Recognized flags; boolean flags map to the empty string. Duplicate
    /// flag names keep the last occurrence.
    pub flags: HashMap<String, String>,
    /// Remaining words rejoined with single spaces, in original order.
    pub positional: String,
}

/// Split on the first space, like `str.partition(' ')`: the remainder keeps
/// any further spacing untouched.
fn split_first_space(s: &str) -> (&str, &str) {
    match s.split_once(' ') {
        Some((head, tail)) => (head, tail),
        None => (s, ""),
    }
}

/// Parse one raw message line against the registry.
///
/// `extra_text` carries auxiliary text blocks attached to the message
/// (e.g. rendered embed content); they are folded onto the argument tail,
/// newline-separated, before tokenization.
///
/// Flag recognition is prefix-only: flags are consumed while they form a
/// contiguous run at the front of the token stream. The first token that
/// is not a well-formed `--name[=value]` token, or whose name the resolved
/// command does not declare, permanently ends flag scanning and stays in
/// the positional text along with everything after it. Downstream
/// consumers observe this exact behavior, so it is load-bearing even where
/// a later token would have matched a declared flag.
pub fn parse<'r, H>(
    trigger: &Trigger,
    registry: &'r Registry<H>,
    content: &str,
    extra_text: &[String],
) -> Option<Invocation<'r, H>> {
    // Stage 1: trigger detection.
    let (head, tail) = split_first_space(content);

    let (name, tail) = if !trigger.prefix.is_empty() && head.starts_with(&trigger.prefix) {
        (&head[trigger.prefix.len()..], tail)
    } else if !trigger.mention.is_empty() && head == trigger.mention {
        let (name, rest) = split_first_space(tail);
        if name.is_empty() {
            // Bare mention: the default command fires with empty arguments.
            let command = registry.resolve(DEFAULT_COMMAND)?;
            return Some(Invocation {
                command,
                flags: HashMap::new(),
                positional: String::new(),
            });
        }
        (name, rest)
    } else {
        return None;
    };

    // Stage 2: alias resolution.
    let command = registry.resolve(name)?;

    // Stage 3: fold auxiliary text blocks onto the tail, unconditionally.
    let mut combined = tail.to_string();
    for block in extra_text {
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(block);
    }

    // Stages 4-5: tokenize on single spaces and scan the flag prefix.
    let tokens: Vec<&str> = combined.split(' ').collect();
    let mut flags = HashMap::new();
    let mut idx = 0;
    while idx < tokens.len() {
        let Some(body) = tokens[idx].strip_prefix(FLAG_MARKER) else {
            break;
        };
        let (flag_name, value) = match body.split_once('=') {
            Some((n, v)) => (n, v),
            None => (body, ""),
        };
        if !command.declares_flag(flag_name) {
            break;
        }
        flags.insert(flag_name.to_string(), value.to_string());
        idx += 1;
    }

    // Stage 6: positional assembly.
    let positional = tokens[idx..].join(" ");

    Some(Invocation {
        command,
        flags,
        positional,
    })
}
