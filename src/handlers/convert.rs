//! Unit conversion handler.

use crate::dispatch::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use quip_cmd::units::{convert_units, format_value};
use std::collections::HashMap;

/// Converts a quantity between two units of the same category.
///
/// The positional surface is exactly `<number> <unit> to <unit>`, with a
/// literal, case-insensitive `to` as the third token.
pub struct ConvertHandler;

#[async_trait]
impl Handler for ConvertHandler {
    async fn handle(
        &self,
        ctx: &mut Context<'_>,
        positional: &str,
        _flags: &HashMap<String, String>,
    ) -> HandlerResult {
        let tokens: Vec<&str> = positional.split_whitespace().collect();

        if tokens.len() != 4 || !tokens[2].eq_ignore_ascii_case("to") {
            return Err(HandlerError::Validation(
                "Usage: <number> <unit> to <unit>".to_string(),
            ));
        }

        let value: f64 = tokens[0].parse().map_err(|_| {
            HandlerError::Validation(format!("Invalid number {}", tokens[0]))
        })?;
        let (from, to) = (tokens[1], tokens[3]);

        let result = convert_units(value, from, to).map_err(|_| {
            HandlerError::Validation(format!("Unknown or incompatible units {from} and {to}"))
        })?;

        ctx.reply(format!(
            "{} {} = {} {}",
            format_value(value),
            from,
            format_value(result),
            to
        ))
        .await
    }
}
