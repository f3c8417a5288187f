//! Motivos de fallback do motor de máscaras.
//!
//! Nenhum destes erros chega ao chamador de [`crate::apply`]: todos viram o valor
//! original. Eles existem para que o host possa registrar (e mostrar) por que a
//! máscara não foi aplicada.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskError {
    #[error("expressão regular inválida: {source}")]
    InvalidRegex {
        #[from]
        source: fancy_regex::Error,
    },

    #[error("limite de execução da expressão regular estourado: {source}")]
    RegexLimit {
        #[source]
        source: fancy_regex::Error,
    },

    #[error("{kind} exige {expected} dígitos, recebido {found}")]
    WrongDigitCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("tipo auto exige 11 (CPF) ou 14 (CNPJ) dígitos, recebido {found}")]
    AmbiguousDocument { found: usize },

    #[error("tipo {kind} exige um formato")]
    MissingPattern { kind: &'static str },

    #[error("formato inválido para {kind}: {pattern:?}")]
    InvalidPattern { kind: &'static str, pattern: String },

    #[error("tipo de máscara desconhecido: {0:?}")]
    UnknownKind(String),
}
