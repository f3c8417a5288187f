//! # Documentos Brasileiros — CPF e CNPJ
//!
//! Reformatação puramente cosmética: os dígitos são agrupados e pontuados,
//! sem verificar dígitos verificadores.
//!
//! | Documento | Dígitos | Grupos          | Formato              |
//! |-----------|---------|-----------------|----------------------|
//! | CPF       | 11      | 3, 3, 3, 2      | `000.000.000-00`     |
//! | CNPJ      | 14      | 2, 3, 3, 4, 2   | `00.000.000/0000-00` |

use crate::error::MaskError;

pub const CPF_DIGITS: usize = 11;
pub const CNPJ_DIGITS: usize = 14;

/// Layout de um documento: tamanho de cada grupo e o separador que o precede.
struct DocumentLayout {
    name: &'static str,
    groups: &'static [(Option<char>, usize)],
}

impl DocumentLayout {
    fn total_digits(&self) -> usize {
        self.groups.iter().map(|(_, size)| size).sum()
    }

    fn format(&self, digits: &str) -> Result<String, MaskError> {
        let expected = self.total_digits();
        let found = digits.chars().count();
        if found != expected {
            return Err(MaskError::WrongDigitCount {
                kind: self.name,
                expected,
                found,
            });
        }

        let mut result = String::with_capacity(expected + self.groups.len());
        let mut source = digits.chars();
        for (separator, size) in self.groups {
            if let Some(sep) = separator {
                result.push(*sep);
            }
            result.extend(source.by_ref().take(*size));
        }
        Ok(result)
    }
}

const CPF: DocumentLayout = DocumentLayout {
    name: "cpf",
    groups: &[(None, 3), (Some('.'), 3), (Some('.'), 3), (Some('-'), 2)],
};

const CNPJ: DocumentLayout = DocumentLayout {
    name: "cnpj",
    groups: &[
        (None, 2),
        (Some('.'), 3),
        (Some('.'), 3),
        (Some('/'), 4),
        (Some('-'), 2),
    ],
};

/// Formata 11 dígitos como CPF (`123.456.789-01`).
pub fn format_cpf(digits: &str) -> Result<String, MaskError> {
    CPF.format(digits)
}

/// Formata 14 dígitos como CNPJ (`12.345.678/0001-99`).
pub fn format_cnpj(digits: &str) -> Result<String, MaskError> {
    CNPJ.format(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("12345678901").unwrap(), "123.456.789-01");
    }

    #[test]
    fn test_format_cnpj() {
        assert_eq!(format_cnpj("12345678000199").unwrap(), "12.345.678/0001-99");
    }

    #[test]
    fn test_layout_sizes() {
        assert_eq!(CPF.total_digits(), CPF_DIGITS);
        assert_eq!(CNPJ.total_digits(), CNPJ_DIGITS);
    }

    #[test]
    fn test_wrong_digit_count() {
        let err = format_cpf("123").unwrap_err();
        assert!(matches!(
            err,
            MaskError::WrongDigitCount { kind: "cpf", expected: 11, found: 3 }
        ));
        assert!(format_cnpj("12345678901").is_err());
    }
}
