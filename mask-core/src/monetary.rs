//! # Máscara Monetária
//!
//! Um formato monetário como `R$ 9.999,99` carrega três informações:
//! o agrupamento da parte inteira (`9.999`), o separador decimal (`,`) com duas
//! casas, e o símbolo de moeda (`R$` ou `$`).
//!
//! ## Algoritmo
//!
//! 1. Completa os dígitos com zeros à esquerda até ter pelo menos 3 (`5` → `005`).
//! 2. Separa parte inteira (tudo menos os 2 últimos) e centavos (2 últimos).
//! 3. Aplica à parte inteira o template formado só pelos `9` e `.` do formato.
//! 4. No formato sem símbolo de moeda, troca o primeiro grupo `9.999,99` por
//!    `inteiro,centavos`.
//! 5. Prefixa `R$ ` se o formato contém `R$`, ou `$` se contém apenas `$`.
//!
//! ```rust
//! use mask_core::monetary::apply_monetary;
//!
//! assert_eq!(apply_monetary("R$ 9.999,99", "123456"), "R$ 1.234,56");
//! assert_eq!(apply_monetary("R$ 9.999,99", "5"), "R$ 0,05");
//! ```

use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use crate::template::{apply_template, PLACEHOLDER};

/// Casas decimais fixas de um valor monetário.
const DECIMAL_PLACES: usize = 2;
const REAL_SYMBOL: &str = "R$";
const DOLLAR_SYMBOL: char = '$';

/// Grupo de marcadores terminado em `,99`: a posição do valor dentro do formato.
fn decimal_group() -> &'static Regex {
    static DECIMAL_GROUP: OnceLock<Regex> = OnceLock::new();
    DECIMAL_GROUP.get_or_init(|| Regex::new(r"9[9.]*,9+").expect("regex estática válida"))
}

/// Verifica se o formato indica moeda (contém `R` ou `$`).
pub fn has_currency_marker(pattern: &str) -> bool {
    pattern.contains(['R', DOLLAR_SYMBOL])
}

/// Aplica a máscara monetária ao fluxo de dígitos.
pub fn apply_monetary(pattern: &str, digits: &str) -> String {
    let padded = format!("{:0>width$}", digits, width = DECIMAL_PLACES + 1);
    // `padded` só contém dígitos ASCII, então o corte por byte é seguro
    let (int_part, dec_part) = padded.split_at(padded.len() - DECIMAL_PLACES);

    let int_template: String = pattern
        .chars()
        .filter(|&c| c == PLACEHOLDER || c == '.')
        .collect();
    let masked_int = apply_template(&int_template, int_part);

    let body_template = pattern
        .replace(REAL_SYMBOL, "")
        .replace(DOLLAR_SYMBOL, "");
    let amount = format!("{},{}", masked_int, dec_part);
    let body = decimal_group().replacen(body_template.trim(), 1, NoExpand(&amount));

    if pattern.contains(REAL_SYMBOL) {
        format!("{} {}", REAL_SYMBOL, body)
    } else if pattern.contains(DOLLAR_SYMBOL) {
        format!("{}{}", DOLLAR_SYMBOL, body)
    } else {
        body.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_format() {
        assert_eq!(apply_monetary("R$ 9.999,99", "123456"), "R$ 1.234,56");
    }

    #[test]
    fn test_pads_small_values() {
        assert_eq!(apply_monetary("R$ 9.999,99", "5"), "R$ 0,05");
        assert_eq!(apply_monetary("R$ 9.999,99", "42"), "R$ 0,42");
        assert_eq!(apply_monetary("R$ 9.999,99", ""), "R$ 0,00");
    }

    #[test]
    fn test_dollar_prefix_has_no_space() {
        assert_eq!(apply_monetary("$ 9.999,99", "123456"), "$1.234,56");
    }

    #[test]
    fn test_literal_suffix_is_kept() {
        assert_eq!(apply_monetary("R$ 9.999,99 BRL", "123456"), "R$ 1.234,56 BRL");
    }

    #[test]
    fn test_pattern_without_decimal_group() {
        // Sem o grupo `9,99` não há onde posicionar o valor; o formato fica como está
        assert_eq!(apply_monetary("R$ 999", "123"), "R$ 999");
    }

    #[test]
    fn test_has_currency_marker() {
        assert!(has_currency_marker("R$ 9,99"));
        assert!(has_currency_marker("$9,99"));
        assert!(has_currency_marker("R 9,99"));
        assert!(!has_currency_marker("9.999,99"));
    }
}
