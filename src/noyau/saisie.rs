//! Saisie au pavé : fonction pure (saisie courante, touche) -> (nouvelle saisie, résultat éventuel).
//!
//! Contrats :
//! - L’entrée brute (`entree`) et le texte affiché (`affichage()`) sont distincts.
//! - ')' n’est acceptée que si une '(' est ouverte (BracketStack).
//! - '=' ferme automatiquement les '(' restantes puis évalue.
//! - Après une erreur, la touche suivante repart d’une entrée vide.

use super::erreurs::CalcError;
use super::eval::{eval_detaillee, DemarcheNoyau};
use super::jetons::Op;
use super::parentheses::BracketStack;
use super::reglages::Reglages;

/// Texte affiché à la place d’un résultat quand l’évaluation échoue.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Operateur(Op),
    Ouvrante,
    Fermante,
    Egal,
    Efface,
    Retour,
}

impl Touche {
    /// Touche chiffre, seulement pour 0..=9.
    pub fn chiffre(d: u8) -> Option<Touche> {
        (d <= 9).then_some(Touche::Chiffre(d))
    }

    /// Clavier physique -> touche du pavé.
    pub fn depuis_char(c: char) -> Option<Touche> {
        let t = match c {
            '0'..='9' => return Touche::chiffre(c as u8 - b'0'),
            '.' => Touche::Point,
            '+' => Touche::Operateur(Op::Plus),
            '-' => Touche::Operateur(Op::Minus),
            '*' => Touche::Operateur(Op::Star),
            '/' => Touche::Operateur(Op::Slash),
            '%' => Touche::Operateur(Op::Percent),
            '(' => Touche::Ouvrante,
            ')' => Touche::Fermante,
            '=' => Touche::Egal,
            _ => return None,
        };
        Some(t)
    }

    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Point => ".".into(),
            Touche::Operateur(op) => op.symbole().to_string(),
            Touche::Ouvrante => "(".into(),
            Touche::Fermante => ")".into(),
            Touche::Egal => "=".into(),
            Touche::Efface => "C".into(),
            Touche::Retour => "DEL".into(),
        }
    }

    /// Caractère ajouté à l’entrée (None pour les touches de commande).
    fn symbole(self) -> Option<char> {
        match self {
            Touche::Chiffre(d) => {
                debug_assert!(d <= 9, "Touche::Chiffre({d}) hors 0..=9");
                char::from_digit(u32::from(d), 10)
            }
            Touche::Point => Some('.'),
            Touche::Operateur(op) => Some(op.symbole()),
            Touche::Ouvrante => Some('('),
            Touche::Fermante => Some(')'),
            Touche::Egal | Touche::Efface | Touche::Retour => None,
        }
    }
}

/// Issue d’un '=' : texte affiché et démarche de cette même évaluation.
pub type Issue = Option<Result<(String, DemarcheNoyau), CalcError>>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Saisie {
    entree: String,
    parentheses: BracketStack,
    en_erreur: bool,
}

impl Saisie {
    pub fn entree(&self) -> &str {
        &self.entree
    }

    pub fn parentheses_ouvertes(&self) -> usize {
        self.parentheses.depth()
    }

    pub fn en_erreur(&self) -> bool {
        self.en_erreur
    }

    /// Texte du champ d’affichage (dérivé, jamais modifié directement).
    pub fn affichage(&self) -> &str {
        if self.en_erreur {
            TEXTE_ERREUR
        } else {
            &self.entree
        }
    }

    /// Applique une touche. Ne modifie pas `self`.
    pub fn appuyer(&self, touche: Touche, reglages: &Reglages) -> (Saisie, Issue) {
        tracing::trace!(?touche, entree = %self.entree, "touche");

        let mut s = if self.en_erreur {
            Saisie::default()
        } else {
            self.clone()
        };

        match touche {
            Touche::Efface => (Saisie::default(), None),
            Touche::Egal => s.evaluer(reglages),
            Touche::Retour => {
                s.retour();
                (s, None)
            }
            Touche::Fermante => {
                // ')' sans '(' ouverte : touche ignorée
                if s.a_de_la_place(reglages) && s.parentheses.pop() {
                    s.entree.push(')');
                }
                (s, None)
            }
            Touche::Ouvrante => {
                if s.a_de_la_place(reglages) {
                    s.parentheses.push();
                    s.entree.push('(');
                }
                (s, None)
            }
            Touche::Chiffre(_) | Touche::Point | Touche::Operateur(_) => {
                if let Some(c) = touche.symbole() {
                    if s.a_de_la_place(reglages) {
                        s.entree.push(c);
                    }
                }
                (s, None)
            }
        }
    }

    fn a_de_la_place(&self, reglages: &Reglages) -> bool {
        self.entree.chars().count() < reglages.longueur_max()
    }

    fn retour(&mut self) {
        match self.entree.pop() {
            Some('(') => {
                self.parentheses.pop();
            }
            Some(')') => self.parentheses.push(),
            _ => {}
        }
    }

    fn evaluer(mut self, reglages: &Reglages) -> (Saisie, Issue) {
        for _ in 0..self.parentheses.close_all() {
            self.entree.push(')');
        }

        match eval_detaillee(&self.entree, reglages) {
            Ok((affiche, demarche)) => {
                // le résultat devient la nouvelle entrée (calculs enchaînés)
                let suite = Saisie {
                    entree: affiche.clone(),
                    parentheses: BracketStack::new(),
                    en_erreur: false,
                };
                (suite, Some(Ok((affiche, demarche))))
            }
            Err(e) => {
                let suite = Saisie {
                    en_erreur: true,
                    ..Saisie::default()
                };
                (suite, Some(Err(e)))
            }
        }
    }
}
