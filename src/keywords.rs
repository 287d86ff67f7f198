use anyhow::Result;
use std::collections::HashMap;
use std::fs;

use crate::scanner::token::TokenKind;

/// Builds the reserved-word table the scanner classifies identifiers
/// against. With no path the built-in table is used; a JSON file of
/// `{"canonical name": "surface spelling"}` pairs may re-spell the
/// keywords.
pub fn load_keywords(path: Option<&str>) -> Result<HashMap<String, TokenKind>> {
    let map: HashMap<String, String> = match path {
        Some(p) => {
            let contents = fs::read_to_string(p)?;
            serde_json::from_str(&contents)?
        }
        None => default_keywords(),
    };

    let mut keywords = HashMap::new();
    for (key, value) in map {
        if let Some(kind) = str_to_token_kind(&key) {
            keywords.insert(value, kind);
        }
    }

    Ok(keywords)
}

fn default_keywords() -> HashMap<String, String> {
    HashMap::from([
        ("let".into(), "let".into()),
        ("print".into(), "print".into()),
    ])
}

fn str_to_token_kind(s: &str) -> Option<TokenKind> {
    match s {
        "let" => Some(TokenKind::Let),
        "print" => Some(TokenKind::Print),
        _ => None,
    }
}
