// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Afficheur en lecture seule: toute la saisie passe par les touches
// - Panneau scientifique et historique repliables (touches "sci" / "hist")
// - L'historique défile jusqu'à la dernière opération à l'ouverture

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::FonctionScalaire;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice réelle");
                ui.add_space(6.0);

                self.ui_afficheur(ui);

                ui.add_space(6.0);

                self.ui_actions(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                if self.panneau_sci {
                    ui.add_space(8.0);
                    ui.separator();
                    self.ui_panneau_sci(ui);
                }

                if self.historique_visible {
                    ui.add_space(8.0);
                    ui.separator();
                    self.ui_historique(ui);
                }
            });
    }

    fn ui_afficheur(&mut self, ui: &mut egui::Ui) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Monospace));
                ui.monospace(if self.affichage.is_empty() {
                    "0"
                } else {
                    self.affichage.as_str()
                });
            });
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let c = ui
                .add_sized([56.0, 30.0], egui::Button::new("C"))
                .on_hover_text("Efface expression et afficheur");
            if c.clicked() {
                self.effacer();
            }

            ui.separator();

            let sci = ui
                .add_sized([56.0, 30.0], egui::Button::new("sci"))
                .on_hover_text("Montre / cache le panneau scientifique");
            if sci.clicked() {
                self.basculer_panneau_sci();
            }

            let hist = ui
                .add_sized([56.0, 30.0], egui::Button::new("hist"))
                .on_hover_text("Montre / cache l'historique");
            if hist.clicked() {
                self.basculer_historique();
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calc_reelle")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "(", Touche::Texte("("));
                self.bouton_insert(ui, ")", Touche::Texte(")"));
                self.bouton_insert(ui, "√", Touche::Texte("√"));
                self.bouton_insert(ui, "^", Touche::Texte("^"));
                self.bouton_insert(ui, "π", Touche::Pi);
                ui.end_row();

                self.bouton_insert(ui, "7", Touche::Texte("7"));
                self.bouton_insert(ui, "8", Touche::Texte("8"));
                self.bouton_insert(ui, "9", Touche::Texte("9"));
                self.bouton_insert(ui, "/", Touche::Texte("/"));
                self.bouton_insert(ui, "e", Touche::E);
                ui.end_row();

                self.bouton_insert(ui, "4", Touche::Texte("4"));
                self.bouton_insert(ui, "5", Touche::Texte("5"));
                self.bouton_insert(ui, "6", Touche::Texte("6"));
                self.bouton_insert(ui, "*", Touche::Texte("*"));
                ui.label("");
                ui.end_row();

                self.bouton_insert(ui, "1", Touche::Texte("1"));
                self.bouton_insert(ui, "2", Touche::Texte("2"));
                self.bouton_insert(ui, "3", Touche::Texte("3"));
                self.bouton_insert(ui, "-", Touche::Texte("-"));
                ui.label("");
                ui.end_row();

                self.bouton_insert(ui, "0", Touche::Texte("0"));
                self.bouton_insert(ui, ".", Touche::Texte("."));
                self.bouton_egal(ui);
                self.bouton_insert(ui, "+", Touche::Texte("+"));
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_panneau_sci(&mut self, ui: &mut egui::Ui) {
        ui.label("Scientifique (sur la valeur affichée) :");
        ui.horizontal_wrapped(|ui| {
            for f in FonctionScalaire::TOUTES {
                let resp = ui.add_sized([64.0, 28.0], egui::Button::new(f.etiquette()));
                if resp.clicked() {
                    self.appliquer_scalaire(f);
                }
            }
        });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.label("Historique :");

        egui::ScrollArea::vertical()
            .id_source("historique_calc")
            .max_height(160.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.monospace("(vide)");
                    return;
                }
                for ligne in &self.historique {
                    ui.monospace(ligne);
                }
                if self.defiler_historique {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                    self.defiler_historique = false;
                }
            });
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Texte(t) => self.inserer(t),
            // les constantes s'insèrent via leur rendu décimal
            Touche::Pi => self.inserer_pi(),
            Touche::E => self.inserer_e(),
        }
    }

    fn bouton_egal(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new("="));
        if resp.clicked() {
            self.egal();
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Texte(&'static str),
    Pi,
    E,
}
