//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir la saisie du pavé, les réglages et la dernière démarche,
//! et appliquer les touches via le noyau (fonction pure `Saisie::appuyer`).
//!
//! Contrats :
//! - Aucun parsing ici : tout passe par `noyau::Saisie`.
//! - L’affichage est dérivé de la saisie, jamais modifié “à la main”.

use crate::noyau::saisie::Issue;
use crate::noyau::{Reglages, Saisie, Touche};

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- saisie (entrée brute + parenthèses ouvertes) ---
    pub saisie: Saisie,

    // --- démarche de la dernière évaluation réussie ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl AppCalc {
    /// Applique une touche du pavé (ou du clavier). C vide aussi la démarche.
    pub fn touche(&mut self, touche: Touche) {
        let (suite, issue) = self.saisie.appuyer(touche, &self.reglages);
        self.saisie = suite;
        self.maj_demarche(touche, issue);
    }

    /// Texte du champ d’affichage.
    pub fn affichage(&self) -> &str {
        self.saisie.affichage()
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.reglages.set_chiffres(digits);
    }

    /// Après '=', reprend la démarche fournie par l’évaluation du noyau.
    fn maj_demarche(&mut self, touche: Touche, issue: Issue) {
        match issue {
            Some(Ok((_, d))) => {
                self.demarche = Demarche {
                    jetons: d.jetons,
                    rpn: d.rpn,
                };
            }
            Some(Err(e)) => {
                tracing::debug!(erreur = %e, "Error affiché");
                self.demarche = Demarche::default();
            }
            None if touche == Touche::Efface => self.demarche = Demarche::default(),
            _ => {}
        }
    }
}
