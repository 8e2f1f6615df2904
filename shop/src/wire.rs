//! JSON codec for actions, state and catalog seed files.
//!
//! Actions arrive either one at a time or as newline-delimited JSON (one
//! action object per line). Errors in a stream carry the 1-based line number.

use crate::types::{Category, Product, ShopAction, ShopState};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use thiserror::Error;

/// Errors produced while decoding or encoding wire data
#[derive(Error, Debug)]
pub enum WireError {
    /// A JSON document could not be decoded or encoded
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A line of an action stream could not be decoded
    #[error("Invalid action on line {line}: {source}")]
    Line {
        /// 1-based line number
        line: usize,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// Reading the input failed
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Products and categories used to seed a fresh state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Products to list
    pub products: Vec<Product>,
    /// Categories to offer
    pub categories: Vec<Category>,
}

impl Catalog {
    /// The actions that load this catalog into a state
    #[must_use]
    pub fn into_actions(self) -> [ShopAction; 2] {
        [
            ShopAction::UpdateProducts {
                products: self.products,
            },
            ShopAction::UpdateCategories {
                categories: self.categories,
            },
        ]
    }
}

/// Decode a single action object
///
/// # Errors
///
/// Returns [`WireError::Json`] if the input is not an action object. Unknown
/// `type` tags are not an error; they decode to [`ShopAction::Unrecognized`].
pub fn decode_action(input: &str) -> Result<ShopAction, WireError> {
    Ok(serde_json::from_str(input)?)
}

/// Decode a newline-delimited stream of actions
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns [`WireError::Io`] if reading fails and [`WireError::Line`] for the
/// first line that is not an action object.
pub fn decode_action_stream<R: BufRead>(reader: R) -> Result<Vec<ShopAction>, WireError> {
    let mut actions = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let action = serde_json::from_str(trimmed).map_err(|source| WireError::Line {
            line: index + 1,
            source,
        })?;
        actions.push(action);
    }

    Ok(actions)
}

/// Encode an action as a single-line JSON object
///
/// # Errors
///
/// Returns [`WireError::Json`] if serialization fails.
pub fn encode_action(action: &ShopAction) -> Result<String, WireError> {
    Ok(serde_json::to_string(action)?)
}

/// Encode a state as pretty-printed JSON
///
/// # Errors
///
/// Returns [`WireError::Json`] if serialization fails.
pub fn encode_state(state: &ShopState) -> Result<String, WireError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Decode a catalog seed document
///
/// # Errors
///
/// Returns [`WireError::Json`] if the input is not a catalog object.
pub fn decode_catalog(input: &str) -> Result<Catalog, WireError> {
    Ok(serde_json::from_str(input)?)
}
