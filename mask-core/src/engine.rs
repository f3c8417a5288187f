//! # Motor de Máscaras — Despacho por Tipo
//!
//! Recebe `(tipo, valor, formato?)` e devolve sempre uma string. O despacho segue
//! uma ordem fixa:
//!
//! 1. `regex` → [`regex_gate`] sobre o valor original.
//! 2. `cpf`, ou `auto` com 11 dígitos → [`format_cpf`].
//! 3. `cnpj`, ou `auto` com 14 dígitos → [`format_cnpj`].
//! 4. `numero` com formato válido → [`apply_template`].
//! 5. `monetario` com símbolo de moeda no formato → [`apply_monetary`].
//! 6. Qualquer outro caso → valor original.
//!
//! Internamente cada ramo devolve `Result<String, MaskError>`; [`apply`] troca
//! qualquer `Err` pelo valor original. O chamador (uma fórmula de planilha) não
//! tem canal de erro, então a função nunca falha.

use tracing::debug;

use crate::document::{format_cnpj, format_cpf, CNPJ_DIGITS, CPF_DIGITS};
use crate::error::MaskError;
use crate::kind::MaskKind;
use crate::monetary::{apply_monetary, has_currency_marker};
use crate::regex_gate::regex_gate;
use crate::template::{apply_template, digits_only, is_numeric_template};

/// Resultado detalhado: o texto final e, quando houve fallback, o motivo.
#[derive(Debug)]
pub struct MaskOutput {
    pub value: String,
    pub fallback: Option<MaskError>,
}

/// Aplica a máscara a partir do tipo em texto. Nunca falha.
///
/// ```rust
/// assert_eq!(mask_core::apply("cpf", "12345678901", None), "123.456.789-01");
/// assert_eq!(mask_core::apply("cpf", "123", None), "123");
/// ```
pub fn apply(kind: &str, value: &str, pattern: Option<&str>) -> String {
    apply_kind(&MaskKind::parse(kind), value, pattern)
}

/// Igual a [`apply`], com o tipo já convertido.
pub fn apply_kind(kind: &MaskKind, value: &str, pattern: Option<&str>) -> String {
    apply_detailed(kind, value, pattern).value
}

/// Aplica a máscara e informa o motivo do fallback, se houver.
pub fn apply_detailed(kind: &MaskKind, value: &str, pattern: Option<&str>) -> MaskOutput {
    match try_apply(kind, value, pattern) {
        Ok(masked) => MaskOutput {
            value: masked,
            fallback: None,
        },
        Err(reason) => {
            debug!(kind = %kind, %reason, "máscara não aplicada, devolvendo valor original");
            MaskOutput {
                value: value.to_string(),
                fallback: Some(reason),
            }
        }
    }
}

/// Despacho interno. `Err` significa "devolva o valor original".
pub fn try_apply(kind: &MaskKind, value: &str, pattern: Option<&str>) -> Result<String, MaskError> {
    // O portão regex testa o valor original; os demais tipos usam só os dígitos
    let digits = || digits_only(value);

    match kind {
        MaskKind::Regex => regex_gate(pattern.unwrap_or(""), value),
        MaskKind::Cpf => format_cpf(&digits()),
        MaskKind::Cnpj => format_cnpj(&digits()),
        MaskKind::Auto => {
            let digits = digits();
            match digits.len() {
                CPF_DIGITS => format_cpf(&digits),
                CNPJ_DIGITS => format_cnpj(&digits),
                found => Err(MaskError::AmbiguousDocument { found }),
            }
        }
        MaskKind::Numero => {
            let pattern = pattern.ok_or(MaskError::MissingPattern { kind: "numero" })?;
            if !is_numeric_template(pattern) {
                return Err(MaskError::InvalidPattern {
                    kind: "numero",
                    pattern: pattern.to_string(),
                });
            }
            Ok(apply_template(pattern, &digits()))
        }
        MaskKind::Monetario => {
            let pattern = pattern.ok_or(MaskError::MissingPattern { kind: "monetario" })?;
            if !has_currency_marker(pattern) {
                return Err(MaskError::InvalidPattern {
                    kind: "monetario",
                    pattern: pattern.to_string(),
                });
            }
            Ok(apply_monetary(pattern, &digits()))
        }
        MaskKind::Other(name) => Err(MaskError::UnknownKind(name.clone())),
    }
}
