//! Command handlers.
//!
//! One file per command, each a small struct implementing [`Handler`].
//! `build_registry` is the explicit registration sequence run once at
//! startup; first registration wins for names and aliases, so the order
//! below is load-bearing.

mod convert;
mod define;
mod help;
mod ping;
mod poll;
mod summarize;
mod translate;

pub use convert::ConvertHandler;
pub use define::DefineHandler;
pub use help::HelpHandler;
pub use ping::PingHandler;
pub use poll::PollHandler;
pub use summarize::SummarizeHandler;
pub use translate::TranslateHandler;

use crate::dispatch::Handler;
use quip_cmd::{Command, Registry};

/// Build the command registry with all handlers registered.
pub fn build_registry() -> Registry<Box<dyn Handler>> {
    let mut registry: Registry<Box<dyn Handler>> = Registry::new();

    registry.register(Command::new("ping", "Pong!", Box::new(PingHandler) as Box<dyn Handler>));
    registry.register(
        Command::new(
            "help",
            "Show command help or list all commands",
            Box::new(HelpHandler) as Box<dyn Handler>,
        )
        .usage("[command]"),
    );
    registry.register(
        Command::new(
            "convert",
            "Convert a quantity between units",
            Box::new(ConvertHandler) as Box<dyn Handler>,
        )
        .alias("c")
        .usage("<number> <unit> to <unit>"),
    );
    registry.register(
        Command::new(
            "translate",
            "Translate text or the replied message",
            Box::new(TranslateHandler) as Box<dyn Handler>,
        )
        .alias("t")
        .flag_with_arg("to", "lang")
        .flag_with_arg("origin", "lang")
        .usage("[text]"),
    );
    registry.register(
        Command::new(
            "define",
            "Define a word or phrase. Language argument must be the language shorthand (e.g. Spanish -> es)",
            Box::new(DefineHandler) as Box<dyn Handler>,
        )
        .alias("d")
        .flag_with_arg("lang", "lang")
        .usage("<word>"),
    );
    registry.register(
        Command::new(
            "summarize",
            "Summarize a term or phrase or find related info",
            Box::new(SummarizeHandler) as Box<dyn Handler>,
        )
        .alias("s")
        .usage("<term>"),
    );
    registry.register(
        Command::new(
            "poll",
            "Create a poll from a comma separated list",
            Box::new(PollHandler) as Box<dyn Handler>,
        )
        .usage("<title>, <item>..."),
    );

    registry
}
