//! Fuzzy client matching against event summaries.
//!
//! An event summary like `"Acme Corp,Weekly sync"` is split on a
//! configurable separator and every non-archived client is scored against
//! the token sequence. Tokens are folded last-to-first with a ×0.1 decay
//! on the running score, so the leading token dominates: calendar
//! summaries are expected to lead with the client's name.

use strsim::normalized_levenshtein;

use crate::client::Client;

/// Decay applied to the running score before each earlier token is added.
const TOKEN_DECAY: f64 = 0.1;

/// Split a summary into its raw (untrimmed) tokens.
///
/// A summary without any separator occurrence yields a single token.
pub fn split_summary<'a>(summary: &'a str, separator: &str) -> Vec<&'a str> {
    summary.split(separator).collect()
}

/// Percentage-scale similarity between a summary token and a client name.
fn similarity(token: &str, name: &str) -> f64 {
    normalized_levenshtein(token, name) * 100.0
}

/// Score a client name against the token sequence.
///
/// Folding in reverse with `score = 0.1 * score + sim(token, name)` leaves
/// the first token weighted ×1, the second ×0.1, the third ×0.01, and so
/// on.
pub fn score(tokens: &[&str], name: &str) -> f64 {
    tokens
        .iter()
        .rev()
        .fold(0.0, |acc, token| TOKEN_DECAY * acc + similarity(token, name))
}

/// Select the best-matching non-archived client for a summary.
///
/// Returns `None` unless some client scores strictly above zero. The
/// comparison is strict, so ties keep the earliest client in iteration
/// order.
pub fn best_match<'a>(summary: &str, separator: &str, clients: &'a [Client]) -> Option<&'a Client> {
    let tokens = split_summary(summary, separator);

    let mut best: Option<&Client> = None;
    let mut best_score = 0.0;

    for client in clients.iter().filter(|c| !c.is_archived()) {
        let client_score = score(&tokens, &client.name);
        if client_score > best_score {
            best_score = client_score;
            best = Some(client);
        }
    }

    best
}
