//! # Tipos de Máscara
//!
//! O chamador informa o tipo como texto livre (`"cpf"`, `"cnpj"`, ...). Aqui o texto
//! vira um enum fechado, para que o despacho em [`crate::engine`] seja um `match`
//! exaustivo em vez de uma cadeia de comparações de strings.
//!
//! A conversão nunca falha: qualquer valor não reconhecido vira [`MaskKind::Other`],
//! que o motor trata devolvendo o valor original.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tipo de máscara solicitado pelo chamador.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MaskKind {
    /// CPF: 11 dígitos no formato `000.000.000-00`.
    Cpf,
    /// CNPJ: 14 dígitos no formato `00.000.000/0000-00`.
    Cnpj,
    /// Número com máscara customizada (ex: `9.999.999`, `99/99/9999`).
    Numero,
    /// Valor monetário com separador decimal e símbolo de moeda (ex: `R$ 9.999,99`).
    Monetario,
    /// Validação por expressão regular: devolve o valor se casar, `""` se não casar.
    Regex,
    /// Escolhe CPF ou CNPJ pela quantidade de dígitos (11 ou 14).
    Auto,
    /// Tipo desconhecido; o valor original é devolvido sem alteração.
    Other(String),
}

impl MaskKind {
    /// Converte o texto do chamador. A comparação é exata (sensível a maiúsculas).
    pub fn parse(kind: &str) -> Self {
        match kind {
            "cpf" => MaskKind::Cpf,
            "cnpj" => MaskKind::Cnpj,
            "numero" => MaskKind::Numero,
            "monetario" => MaskKind::Monetario,
            "regex" => MaskKind::Regex,
            "auto" => MaskKind::Auto,
            other => MaskKind::Other(other.to_string()),
        }
    }

    /// Nome canônico do tipo, o mesmo aceito por [`MaskKind::parse`].
    pub fn as_str(&self) -> &str {
        match self {
            MaskKind::Cpf => "cpf",
            MaskKind::Cnpj => "cnpj",
            MaskKind::Numero => "numero",
            MaskKind::Monetario => "monetario",
            MaskKind::Regex => "regex",
            MaskKind::Auto => "auto",
            MaskKind::Other(name) => name,
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MaskKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MaskKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(MaskKind::parse(&raw))
    }
}
