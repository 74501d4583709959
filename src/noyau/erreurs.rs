// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau.
// - LexError  : la lecture caractère par caractère a échoué
// - EvalError : les jetons ne forment pas une expression calculable
// - CalcError : enveloppe des deux (pipeline complet)
//
// Aucune n’est fatale : l’appelant décide de l’affichage (l’UI montre "Error").

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("caractère inattendu '{ch}' (position {pos})")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("nombre mal formé \"{texte}\" (position {pos})")]
    MalformedNumber { texte: String, pos: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expression vide")]
    EmptyExpression,

    #[error("parenthèses non équilibrées")]
    UnbalancedParentheses,

    /// `index` = rang du jeton fautif ; `index == jetons.len()` => fin d’entrée.
    #[error("jeton inattendu (rang {index})")]
    UnexpectedToken { index: usize },

    #[error("division par zéro")]
    DivisionByZero,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
