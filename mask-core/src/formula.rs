//! # Registro da Fórmula `InputMask`
//!
//! Metadados com que o host publica a fórmula: nome, descrição, parâmetros e
//! exemplos documentados. O servidor web serve este registro em `/formula`, e os
//! testes abaixo garantem que cada exemplo documentado produz a saída anunciada.

use serde::Serialize;

use crate::kind::MaskKind;

pub const FORMULA_NAME: &str = "InputMask";

const FORMULA_DESCRIPTION: &str = "Aplica máscara de CNPJ, CPF, número, monetário, \
formato customizado ou regex, conforme o tipo e formato informado.";

/// Tipo de valor aceito ou devolvido pela fórmula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    String,
}

/// Um parâmetro declarado da fórmula.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub value_type: ValueType,
    pub optional: bool,
}

/// Um exemplo documentado: entrada e saída esperada.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaExample {
    pub label: &'static str,
    pub kind: MaskKind,
    pub value: &'static str,
    pub pattern: Option<&'static str>,
    pub expected: &'static str,
}

/// Registro completo da fórmula.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ParameterSpec>,
    pub result_type: ValueType,
    pub examples: Vec<FormulaExample>,
}

impl FormulaSpec {
    /// Quantidade de parâmetros obrigatórios.
    pub fn required_parameters(&self) -> usize {
        self.parameters.iter().filter(|p| !p.optional).count()
    }
}

/// Registro da fórmula `InputMask`.
pub fn input_mask_formula() -> FormulaSpec {
    FormulaSpec {
        name: FORMULA_NAME,
        description: FORMULA_DESCRIPTION,
        parameters: vec![
            ParameterSpec {
                name: "tipo",
                description: "Tipo de máscara: 'cpf', 'cnpj', 'numero', 'monetario' ou 'regex'.",
                value_type: ValueType::String,
                optional: false,
            },
            ParameterSpec {
                name: "campo",
                description: "Valor a ser formatado (apenas números ou com pontuação).",
                value_type: ValueType::String,
                optional: false,
            },
            ParameterSpec {
                name: "formato",
                description: "Formato customizado (ex: '9.999,99', '99/99/9999', 'R$ 9.999,99') \
                              ou expressão regular. Opcional.",
                value_type: ValueType::String,
                optional: true,
            },
        ],
        result_type: ValueType::String,
        examples: documented_examples(),
    }
}

/// Exemplos publicados junto com a fórmula
pub fn documented_examples() -> Vec<FormulaExample> {
    vec![
        FormulaExample {
            label: "CPF",
            kind: MaskKind::Cpf,
            value: "12345678901",
            pattern: None,
            expected: "123.456.789-01",
        },
        FormulaExample {
            label: "CNPJ",
            kind: MaskKind::Cnpj,
            value: "12345678000199",
            pattern: None,
            expected: "12.345.678/0001-99",
        },
        FormulaExample {
            label: "Número customizado",
            kind: MaskKind::Numero,
            value: "1234567",
            pattern: Some("9.999.999"),
            expected: "1.234.567",
        },
        FormulaExample {
            label: "Data",
            kind: MaskKind::Numero,
            value: "25122023",
            pattern: Some("99/99/9999"),
            expected: "25/12/2023",
        },
        FormulaExample {
            label: "Monetário customizado",
            kind: MaskKind::Monetario,
            value: "123456",
            pattern: Some("R$ 9.999,99"),
            expected: "R$ 1.234,56",
        },
        FormulaExample {
            label: "Regex",
            kind: MaskKind::Regex,
            value: "2023-ABC",
            pattern: Some(r"^\d{4}-[A-Z]{3}$"),
            expected: "2023-ABC",
        },
        FormulaExample {
            label: "Automático",
            kind: MaskKind::Auto,
            value: "12345678000199",
            pattern: None,
            expected: "12.345.678/0001-99",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::apply_kind;

    #[test]
    fn test_documented_examples_hold() {
        for example in documented_examples() {
            let out = apply_kind(&example.kind, example.value, example.pattern);
            assert_eq!(out, example.expected, "exemplo {}", example.label);
        }
    }

    #[test]
    fn test_parameters() {
        let formula = input_mask_formula();
        assert_eq!(formula.name, "InputMask");
        assert_eq!(formula.required_parameters(), 2);
        let names: Vec<&str> = formula.parameters.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["tipo", "campo", "formato"]);
        assert!(formula.parameters[2].optional);
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(input_mask_formula()).unwrap();
        assert_eq!(json["result_type"], "string");
        assert_eq!(json["examples"][0]["kind"], "cpf");
        assert!(json["examples"][0]["pattern"].is_null());
    }
}
