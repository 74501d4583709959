// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier physique en touches du pavé

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

/// Clavier -> touches, dans l’ordre de frappe.
/// Enter = '=', Escape = C, Backspace = DEL ; les caractères passent par `Touche::depuis_char`.
fn touches_depuis_evenements(events: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().filter_map(Touche::depuis_char)),
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Touche::Egal),
                egui::Key::Escape => out.push(Touche::Efface),
                egui::Key::Backspace => out.push(Touche::Retour),
                _ => {}
            },
            _ => {}
        }
    }
    out
}

fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| touches_depuis_evenements(&i.events))
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for t in touches_clavier(ctx) {
            self.touche(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
