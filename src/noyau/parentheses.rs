// src/noyau/parentheses.rs
//
// Pile des parenthèses ouvertes pendant la saisie (pas pendant l’évaluation).
// Tous les marqueurs sont identiques : un compteur suffit.
//
// Invariant : depth() = nb '(' tapées - nb ')' acceptées, jamais négatif.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BracketStack {
    profondeur: usize,
}

impl BracketStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) {
        self.profondeur += 1;
    }

    /// Retire une '(' si possible. `false` => la ')' tapée doit être ignorée.
    pub fn pop(&mut self) -> bool {
        if self.profondeur == 0 {
            return false;
        }
        self.profondeur -= 1;
        true
    }

    pub fn depth(&self) -> usize {
        self.profondeur
    }

    /// Nombre de ')' à ajouter avant d’évaluer ; remet la pile à zéro.
    pub fn close_all(&mut self) -> usize {
        std::mem::take(&mut self.profondeur)
    }
}
