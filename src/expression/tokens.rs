// src/expression/tokens.rs

use crate::core::{NumsError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    // variables, constants and function names alike; the parser tells them apart
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^ or **

    LParen,
    RParen,
}

/// Splits an expression into tokens.
///
/// Supports decimal numbers (`12`, `0.5`, `.5`), identifiers
/// `[a-zA-Z_][a-zA-Z0-9_]*`, the operators `+ - * / ^ **` and parentheses.
/// Whitespace is ignored.
pub fn tokenize(s: &str) -> Result<Vec<Token>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let single = match c {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '/' => Some(Token::Slash),
            '^' => Some(Token::Caret),
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                Some(Token::Caret)
            }
            '*' => Some(Token::Star),
            _ => None,
        };
        if let Some(token) = single {
            out.push(token);
            i += 1;
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            out.push(Token::Ident(chars[start..i].iter().collect()));
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut seen_point = false;
            while i < chars.len() && (chars[i].is_ascii_digit() || (chars[i] == '.' && !seen_point)) {
                seen_point |= chars[i] == '.';
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            let value = text
                .parse::<f64>()
                .map_err(|_| NumsError::parse(format!("invalid number '{}'", text)))?;
            out.push(Token::Number(value));
            continue;
        }

        return Err(NumsError::parse(format!("unexpected character '{}' at {}", c, i)));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_operators() {
        assert_eq!(
            tokenize("2 ** x ^ 3").unwrap(),
            vec![
                Token::Number(2.0),
                Token::Caret,
                Token::Ident("x".to_string()),
                Token::Caret,
                Token::Number(3.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_implicit_product() {
        assert_eq!(
            tokenize("3sin(x)").unwrap(),
            vec![
                Token::Number(3.0),
                Token::Ident("sin".to_string()),
                Token::LParen,
                Token::Ident("x".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_decimals() {
        assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);
        assert_eq!(tokenize("1.25").unwrap(), vec![Token::Number(1.25)]);
        assert!(tokenize(".").is_err());
        assert!(tokenize("2 $ 3").is_err());
    }
}
