// src/watch/matcher.rs

use std::time::Duration;

use regex::Captures;
use tracing::{debug, warn};

use crate::audio::ActionId;
use crate::watch::registry::Binding;

/// What a single pattern match asks for.
///
/// One appended line can produce several effects, since every binding of the
/// file is tested against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEffect {
    /// Print the matched line to the console, prefixed with the file path.
    Echo { line: String },
    /// Execute the bound action now.
    PlayNow { action: ActionId },
    /// Execute the bound action after `delay`.
    Deferred { action: ActionId, delay: Duration },
}

/// Test one line against a file's bindings, in registration order.
///
/// Substring search semantics: the pattern may match anywhere in the line.
/// Scanning never stops early; a line may match multiple bindings.
///
/// Malformed delayed matches (no capturing group, non-numeric capture) are
/// dropped with a diagnostic; they never abort matching.
pub fn match_line(bindings: &[Binding], line: &str) -> Vec<MatchEffect> {
    let mut effects = Vec::new();

    for binding in bindings {
        let delay = if binding.options.delayed {
            let Some(caps) = binding.pattern.captures(line) else {
                continue;
            };
            match delay_from_captures(&caps) {
                Ok(delay) => Some(delay),
                Err(fault) => {
                    warn!(
                        pattern = %binding.pattern,
                        line,
                        fault = %fault,
                        "dropping delayed match"
                    );
                    continue;
                }
            }
        } else {
            if !binding.pattern.is_match(line) {
                continue;
            }
            None
        };

        debug!(pattern = %binding.pattern, action = %binding.action, "line matched");

        if !binding.options.suppress_echo {
            effects.push(MatchEffect::Echo {
                line: line.to_string(),
            });
        }

        match delay {
            Some(delay) => effects.push(MatchEffect::Deferred {
                action: binding.action.clone(),
                delay,
            }),
            None => effects.push(MatchEffect::PlayNow {
                action: binding.action.clone(),
            }),
        }
    }

    effects
}

/// Extract the deferral from a delayed match: the first capturing group must
/// hold a non-negative number of seconds (fractional allowed).
fn delay_from_captures(caps: &Captures<'_>) -> Result<Duration, String> {
    let group = caps
        .get(1)
        .ok_or_else(|| "delayed pattern has no capturing group".to_string())?;

    let seconds: f64 = group
        .as_str()
        .parse()
        .map_err(|_| format!("captured delay '{}' is not a number", group.as_str()))?;

    Duration::try_from_secs_f64(seconds).map_err(|_| {
        format!(
            "captured delay '{}' is not a representable non-negative duration",
            group.as_str()
        )
    })
}
