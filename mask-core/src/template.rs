//! # Máscara por Template
//!
//! Um template mistura caracteres literais com o marcador [`PLACEHOLDER`] (`9`).
//! Cada marcador consome o próximo dígito da entrada; os demais caracteres são
//! copiados como estão.
//!
//! ```rust
//! use mask_core::template::apply_template;
//!
//! assert_eq!(apply_template("99/99/9999", "25122023"), "25/12/2023");
//! // Dígitos insuficientes: o resultado é truncado, sem preenchimento
//! assert_eq!(apply_template("99/99/9999", "2512"), "25/12");
//! ```

/// Marca a posição de um dígito no template.
pub const PLACEHOLDER: char = '9';

/// Pontuação aceita em templates numéricos, além do marcador.
const NUMERIC_PUNCTUATION: &[char] = &['.', '/', ',', '-'];

/// Remove tudo que não é dígito ASCII (`0-9`), gerando o fluxo de dígitos.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Aplica o template aos dígitos, da esquerda para a direita.
///
/// Para assim que o template ou os dígitos acabam. Isso significa que:
/// - dígitos a menos produzem um resultado truncado, sem literais finais;
/// - dígitos a mais são descartados.
pub fn apply_template(template: &str, digits: &str) -> String {
    let mut result = String::with_capacity(template.len());
    let mut source = digits.chars().peekable();

    for mask_char in template.chars() {
        if source.peek().is_none() {
            break;
        }
        if mask_char == PLACEHOLDER {
            if let Some(digit) = source.next() {
                result.push(digit);
            }
        } else {
            result.push(mask_char);
        }
    }
    result
}

/// Verifica se o formato serve como máscara numérica: não vazio e composto apenas
/// pelo marcador e por `.`, `/`, `,` ou `-`.
pub fn is_numeric_template(pattern: &str) -> bool {
    !pattern.is_empty()
        && pattern
            .chars()
            .all(|c| c == PLACEHOLDER || NUMERIC_PUNCTUATION.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_strips_punctuation() {
        assert_eq!(digits_only("123.456.789-01"), "12345678901");
        assert_eq!(digits_only("R$ 1.234,56"), "123456");
        assert_eq!(digits_only("sem dígitos"), "");
    }

    #[test]
    fn test_digits_only_ignores_non_ascii_digits() {
        // Dígitos árabe-índicos não contam como dígitos
        assert_eq!(digits_only("١٢٣4"), "4");
    }

    #[test]
    fn test_apply_template_full() {
        assert_eq!(apply_template("9.999.999", "1234567"), "1.234.567");
    }

    #[test]
    fn test_apply_template_truncates_without_trailing_literals() {
        // Após o último dígito consumido, o "." seguinte não é emitido
        assert_eq!(apply_template("9.999.999", "1234"), "1.234");
        assert_eq!(apply_template("999-", "123"), "123");
    }

    #[test]
    fn test_apply_template_drops_excess_digits() {
        assert_eq!(apply_template("99/99", "123456"), "12/34");
    }

    #[test]
    fn test_apply_template_leading_literals() {
        assert_eq!(apply_template("(99) 9999", "119876"), "(11) 9876");
        assert_eq!(apply_template("(99)", ""), "");
    }

    #[test]
    fn test_is_numeric_template() {
        assert!(is_numeric_template("9.999.999"));
        assert!(is_numeric_template("99/99/9999"));
        assert!(is_numeric_template("9,99-9"));
        assert!(!is_numeric_template(""));
        assert!(!is_numeric_template("R$ 9,99"));
        assert!(!is_numeric_template("(99) 9999"));
        // Só o marcador 9 é aceito; outros dígitos no formato são rejeitados de propósito
        assert!(!is_numeric_template("0.000"));
    }
}
