// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Champ d’affichage en lecture seule, aligné à droite
// - Pavé 4×5 : chiffres, + - * / %, ( ), ., C, =
// - Ligne annexe : DEL + précision (décimales affichées)
// - Démarche repliable (jetons + RPN)
//
// Les clics ne font qu’envoyer une `Touche` à l’état ; aucune chirurgie de texte ici.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::jetons::Op;
use crate::noyau::reglages::CHIFFRES_MAX;
use crate::noyau::Touche;

/// Disposition du pavé (4 lignes × 5 colonnes).
const PAVE: [[Touche; 5]; 4] = [
    [
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Op::Slash),
        Touche::Efface,
    ],
    [
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Op::Star),
        Touche::Ouvrante,
    ],
    [
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Op::Minus),
        Touche::Fermante,
    ],
    [
        Touche::Chiffre(0),
        Touche::Operateur(Op::Percent),
        Touche::Point,
        Touche::Operateur(Op::Plus),
        Touche::Egal,
    ],
];

const TAILLE_BOUTON: [f32; 2] = [40.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        ui.add_space(8.0);
        self.ui_annexe(ui);

        ui.add_space(8.0);
        ui.separator();
        self.ui_demarche(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // copie locale : le champ ne doit jamais écrire dans la saisie
        let mut texte = self.affichage().to_string();
        let mut champ = egui::TextEdit::singleline(&mut texte)
            .hint_text("Entrer une expression")
            .horizontal_align(egui::Align::RIGHT)
            .interactive(false)
            .code_editor();
        if self.saisie.en_erreur() {
            champ = champ.text_color(ui.visuals().error_fg_color);
        }
        ui.add_sized([ui.available_width(), 40.0], champ);

        let ouvertes = self.saisie.parentheses_ouvertes();
        if ouvertes > 0 {
            ui.weak(format!("parenthèses ouvertes : {ouvertes}"));
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_annexe(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(ui, Touche::Retour);

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.reglages.chiffres() as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=CHIFFRES_MAX as u32),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, contenu: &str) {
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(contenu);
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(touche.libelle()));
        if resp.clicked() {
            self.touche(touche);
        }
    }
}
