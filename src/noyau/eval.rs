//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard + validation) -> calcul exact -> affichage décimal
//!
//! Pur : aucun état entre deux appels, aucune E/S. Réentrant.

use num_rational::BigRational;

use super::erreurs::{CalcError, EvalError};
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize, Tok};
use super::reglages::Reglages;
use super::rpn::{eval_rpn, format_rpn, to_rpn};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// Évalue une suite de jetons en valeur exacte.
pub fn evaluate(tokens: &[Tok]) -> Result<BigRational, EvalError> {
    let rpn = to_rpn(tokens)?;
    eval_rpn(&rpn)
}

/// API publique : évalue une expression et retourne le texte à afficher.
pub fn eval_expression(expr_str: &str, reglages: &Reglages) -> Result<String, CalcError> {
    let resultat = tokenize(expr_str)
        .map_err(CalcError::from)
        .and_then(|jetons| evaluate(&jetons).map_err(CalcError::from))
        .map(|valeur| format_resultat(&valeur, reglages.chiffres()));

    match &resultat {
        Ok(affiche) => tracing::debug!(entree = expr_str, resultat = %affiche, "évaluation"),
        Err(e) => tracing::debug!(entree = expr_str, erreur = %e, "évaluation refusée"),
    }
    resultat
}

/// Comme `eval_expression`, avec la démarche (jetons + RPN) pour l’UI.
pub fn eval_detaillee(
    expr_str: &str,
    reglages: &Reglages,
) -> Result<(String, DemarcheNoyau), CalcError> {
    let resultat = detailler(expr_str, reglages);
    match &resultat {
        Ok((affiche, _)) => tracing::debug!(entree = expr_str, resultat = %affiche, "évaluation"),
        Err(e) => tracing::debug!(entree = expr_str, erreur = %e, "évaluation refusée"),
    }
    resultat
}

fn detailler(expr_str: &str, reglages: &Reglages) -> Result<(String, DemarcheNoyau), CalcError> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    let jetons_txt = format_tokens(&jetons);
    tracing::trace!(jetons = %jetons_txt);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_rpn(&rpn);
    tracing::trace!(rpn = %rpn_txt);

    // 3) Valeur exacte, puis affichage
    let valeur = eval_rpn(&rpn)?;
    let affiche = format_resultat(&valeur, reglages.chiffres());

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
    };
    Ok((affiche, d))
}
