//! # Validação por Expressão Regular
//!
//! O tipo `regex` não reformata: funciona como um portão. O formato informado
//! pelo usuário é compilado e testado contra o valor **original** (com pontuação).
//!
//! | Situação               | Resultado         |
//! |------------------------|-------------------|
//! | regex casa             | valor original    |
//! | regex não casa         | `""`              |
//! | regex não compila      | valor original    |
//!
//! As expressões seguem o dialeto das planilhas (ECMAScript): lookahead,
//! lookbehind e referências (`\1`) são aceitos, e `\d` / `\w` casam apenas
//! ASCII. A expressão vem do usuário, então compilação e backtracking têm
//! limites; estourar qualquer um deles devolve o valor original.

use fancy_regex::RegexBuilder;

use crate::error::MaskError;

/// Limite do programa compilado, em bytes.
const REGEX_SIZE_LIMIT: usize = 1 << 20;
/// Passos de backtracking permitidos por teste.
const BACKTRACK_LIMIT: usize = 1_000_000;

const ASCII_DIGIT: &str = "0-9";
const ASCII_WORD: &str = "0-9A-Za-z_";

/// Testa `value` contra `pattern`. `Err` indica expressão inválida ou limite estourado.
pub fn regex_gate(pattern: &str, value: &str) -> Result<String, MaskError> {
    let re = RegexBuilder::new(&ascii_shorthands(pattern))
        .delegate_size_limit(REGEX_SIZE_LIMIT)
        .backtrack_limit(BACKTRACK_LIMIT)
        .build()?;

    let matched = re
        .is_match(value)
        .map_err(|source| MaskError::RegexLimit { source })?;

    if matched {
        Ok(value.to_string())
    } else {
        Ok(String::new())
    }
}

/// Reescreve `\d`, `\D`, `\w` e `\W` como classes ASCII explícitas.
///
/// Dentro de uma classe (`[\d.]`) só `\d` e `\w` são expandidos; as formas
/// negadas ficam como estão.
fn ascii_shorthands(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => match (chars.next(), in_class) {
                (Some('d'), false) => out.push_str(&format!("[{}]", ASCII_DIGIT)),
                (Some('D'), false) => out.push_str(&format!("[^{}]", ASCII_DIGIT)),
                (Some('w'), false) => out.push_str(&format!("[{}]", ASCII_WORD)),
                (Some('W'), false) => out.push_str(&format!("[^{}]", ASCII_WORD)),
                (Some('d'), true) => out.push_str(ASCII_DIGIT),
                (Some('w'), true) => out.push_str(ASCII_WORD),
                (Some(escaped), _) => {
                    out.push('\\');
                    out.push(escaped);
                }
                (None, _) => out.push('\\'),
            },
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_returns_value() {
        let out = regex_gate(r"^\d{4}-[A-Z]{3}$", "2023-ABC").unwrap();
        assert_eq!(out, "2023-ABC");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let out = regex_gate(r"^\d{4}-[A-Z]{3}$", "23-AB").unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_search_is_unanchored() {
        assert_eq!(regex_gate("ABC", "xxABCxx").unwrap(), "xxABCxx");
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        assert_eq!(regex_gate("", "qualquer").unwrap(), "qualquer");
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        assert!(matches!(
            regex_gate("[unclosed", "anything"),
            Err(MaskError::InvalidRegex { .. })
        ));
    }

    #[test]
    fn test_oversized_pattern_is_error() {
        let huge = format!("(?:{}){{1000}}", "a{1000}");
        assert!(regex_gate(&huge, "aaa").is_err());
    }

    #[test]
    fn test_lookahead_is_enforced() {
        // "pelo menos um dígito": sem dígito o portão fecha
        let pattern = r"^(?=.*\d).+$";
        assert_eq!(regex_gate(pattern, "abc").unwrap(), "");
        assert_eq!(regex_gate(pattern, "abc1").unwrap(), "abc1");
    }

    #[test]
    fn test_backreference_is_enforced() {
        let pattern = r"^(ab)\1$";
        assert_eq!(regex_gate(pattern, "abcd").unwrap(), "");
        assert_eq!(regex_gate(pattern, "abab").unwrap(), "abab");
    }

    #[test]
    fn test_digit_shorthand_is_ascii_only() {
        let pattern = r"^\d{4}-[A-Z]{3}$";
        assert_eq!(regex_gate(pattern, "١٢٣٤-ABC").unwrap(), "");
        assert_eq!(regex_gate(r"^\w+$", "ação").unwrap(), "");
        assert_eq!(regex_gate(r"^\w+$", "acao_1").unwrap(), "acao_1");
    }

    #[test]
    fn test_ascii_shorthands_rewrite() {
        assert_eq!(ascii_shorthands(r"\d+"), "[0-9]+");
        assert_eq!(ascii_shorthands(r"[\d.]"), "[0-9.]");
        assert_eq!(ascii_shorthands(r"\W"), "[^0-9A-Za-z_]");
        // Barra escapada seguida de "d" não é o atalho \d
        assert_eq!(ascii_shorthands(r"\\d"), r"\\d");
        assert_eq!(ascii_shorthands(r"\."), r"\.");
    }
}
