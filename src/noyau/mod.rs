//! Noyau exact (quatre opérations + reste)
//!
//! Organisation interne :
//! - jetons.rs      : tokenisation (nombres décimaux exacts)
//! - rpn.rs         : shunting-yard + calcul RPN
//! - eval.rs        : pipeline complet
//! - format.rs      : affichage décimal minimal
//! - parentheses.rs : BracketStack (saisie)
//! - saisie.rs      : touche -> nouvelle saisie (fonction pure)
//! - reglages.rs    : précision + garde-fous
//! - erreurs.rs     : LexError / EvalError / CalcError

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod parentheses;
pub mod reglages;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use eval::{eval_detaillee, eval_expression};
pub use reglages::Reglages;
pub use saisie::{Saisie, Touche};
