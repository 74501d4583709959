//! Réglages du noyau (précision d’affichage, garde-fous de saisie).
//!
//! Une valeur par défaut raisonnable
//! et des bornes, pour qu’aucun réglage ne puisse geler l’UI.

/// Décimales affichées pour un développement infini (1/3 -> 16 chiffres).
pub const CHIFFRES_DEFAUT: usize = 16;

/// Garde-fou : on borne la précision.
pub const CHIFFRES_MAX: usize = 200;

/// Longueur maximale de l’entrée (en caractères).
pub const LONGUEUR_DEFAUT: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    chiffres: usize,
    longueur_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self::new(CHIFFRES_DEFAUT, LONGUEUR_DEFAUT)
    }
}

impl Reglages {
    /// Valeurs bornées : chiffres <= CHIFFRES_MAX, longueur_max >= 1.
    pub fn new(chiffres: usize, longueur_max: usize) -> Self {
        Self {
            chiffres: chiffres.min(CHIFFRES_MAX),
            longueur_max: longueur_max.max(1),
        }
    }

    pub fn chiffres(&self) -> usize {
        self.chiffres
    }

    pub fn longueur_max(&self) -> usize {
        self.longueur_max
    }

    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.min(CHIFFRES_MAX);
    }
}
