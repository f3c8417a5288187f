//! # mask-core — Máscaras de Entrada
//!
//! Implementa a fórmula `InputMask`: dado um tipo de máscara, um valor bruto e um
//! formato opcional, devolve o valor formatado. É uma função pura, sem estado e
//! sem I/O.
//!
//! ## Tipos Suportados
//!
//! | Tipo        | Formato               | Exemplo de saída       |
//! |-------------|-----------------------|------------------------|
//! | `cpf`       | fixo                  | `123.456.789-01`       |
//! | `cnpj`      | fixo                  | `12.345.678/0001-99`   |
//! | `auto`      | CPF ou CNPJ           | pelo nº de dígitos     |
//! | `numero`    | `9.999.999`           | `1.234.567`            |
//! | `monetario` | `R$ 9.999,99`         | `R$ 1.234,56`          |
//! | `regex`     | expressão regular     | valor ou `""`          |
//!
//! ## Política de Falhas
//!
//! A função **nunca falha**. Quando uma pré-condição não é atendida (quantidade
//! de dígitos errada, formato ausente, regex inválida, tipo desconhecido), o
//! valor original é devolvido. A única exceção é o tipo `regex` com expressão
//! válida que não casa: nesse caso o resultado é `""`.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use mask_core::apply;
//!
//! assert_eq!(apply("cnpj", "12345678000199", None), "12.345.678/0001-99");
//! assert_eq!(apply("monetario", "123456", Some("R$ 9.999,99")), "R$ 1.234,56");
//! assert_eq!(apply("regex", "anything", Some("[unclosed")), "anything");
//! ```
//!
//! ## Módulos Principais
//!
//! - [`engine`]: despacho por tipo e política de fallback.
//! - [`template`]: algoritmo de posicionamento de dígitos no template.
//! - [`document`]: CPF e CNPJ.
//! - [`monetary`]: valores monetários.
//! - [`regex_gate`]: validação por expressão regular.
//! - [`formula`]: metadados de registro da fórmula no host.

pub mod document;
pub mod engine;
pub mod error;
pub mod formula;
pub mod kind;
pub mod monetary;
pub mod regex_gate;
pub mod template;

pub use engine::{apply, apply_detailed, apply_kind, try_apply, MaskOutput};
pub use error::MaskError;
pub use formula::{input_mask_formula, FormulaExample, FormulaSpec};
pub use kind::MaskKind;
