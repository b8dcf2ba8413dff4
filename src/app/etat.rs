//! src/app/etat.rs
//!
//! État UI (sans vue): la session de calcul.
//!
//! Rôle : contenir l'état de la calculatrice (expression accumulée, texte
//! de l'afficheur, historique, visibilité des panneaux) et les actions des
//! touches. C'est un objet de session explicite passé aux gestionnaires,
//! pas un état global de processus.
//!
//! Contrats :
//! - Aucun algorithme ici : le noyau fait tout le travail d'évaluation.
//! - `=` réinjecte le résultat formaté comme nouvelle expression
//!   ("continuer à calculer"); un échec vide l'expression entièrement.
//! - Les fonctions scalaires s'appliquent à la valeur LUE sur l'afficheur,
//!   pas à l'expression.

use tracing::warn;

use crate::noyau::{
    evaluer_expression, format_resultat, ligne_historique, FonctionScalaire,
};

/// Texte de l'afficheur quand une évaluation échoue.
const AFFICHAGE_ERREUR: &str = "Erreur";

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- session ---
    pub expression: String,      // expression accumulée, envoyée au noyau par '='
    pub affichage: String,       // texte du grand afficheur
    pub historique: Vec<String>, // lignes "expression = résultat"

    // --- panneaux ---
    pub historique_visible: bool,
    pub panneau_sci: bool,

    // --- UX ---
    // Demande à la vue de défiler l'historique jusqu'à la dernière ligne.
    pub defiler_historique: bool,
}

impl AppCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Touches chiffres / opérateurs / parenthèses / √ / ^ :
    /// concatène le texte de la touche et reflète l'expression à l'écran.
    pub fn inserer(&mut self, texte: &str) {
        self.expression.push_str(texte);
        self.affichage = self.expression.clone();
    }

    /// Touche π : insère le rendu décimal de la constante.
    pub fn inserer_pi(&mut self) {
        self.inserer(&format_resultat(std::f64::consts::PI));
    }

    /// Touche e : insère le rendu décimal de la constante.
    pub fn inserer_e(&mut self) {
        self.inserer(&format_resultat(std::f64::consts::E));
    }

    /// C : vide expression et afficheur.
    pub fn effacer(&mut self) {
        self.expression.clear();
        self.affichage.clear();
    }

    /* ------------------------ Évaluation ------------------------ */

    /// '=' : une évaluation du noyau.
    /// Succès : afficheur = résultat, ligne d'historique ajoutée, et le
    /// résultat devient la nouvelle expression. Échec : afficheur "Erreur",
    /// expression vidée (l'utilisateur retape), session prête pour la suite.
    pub fn egal(&mut self) {
        if self.expression.trim().is_empty() {
            return;
        }

        match evaluer_expression(&self.expression) {
            Ok(valeur) => {
                let texte = format_resultat(valeur);
                self.historique
                    .push(ligne_historique(&self.expression, valeur));
                if self.historique_visible {
                    self.defiler_historique = true;
                }
                self.affichage = texte.clone();
                self.expression = texte;
            }
            Err(e) => {
                warn!(expression = %self.expression, erreur = %e, "évaluation échouée");
                self.affichage = AFFICHAGE_ERREUR.to_string();
                self.expression.clear();
            }
        }
    }

    /// Touche scientifique : lit la valeur de l'afficheur, applique la
    /// transformation, réaffiche. NaN s'affiche tel quel, sans traitement
    /// spécial. Un afficheur illisible ("Erreur", vide) laisse tout en l'état.
    pub fn appliquer_scalaire(&mut self, f: FonctionScalaire) {
        let x: f64 = match self.affichage.trim().parse() {
            Ok(x) => x,
            Err(_) => {
                warn!(affichage = %self.affichage, "afficheur non numérique, touche ignorée");
                return;
            }
        };

        let (_succes, valeur) = f.appliquer_simple(x);
        self.affichage = format_resultat(valeur);
    }

    /* ------------------------ Panneaux ------------------------ */

    /// Montre / cache l'historique; à l'ouverture, défile jusqu'à la
    /// dernière opération.
    pub fn basculer_historique(&mut self) {
        self.historique_visible = !self.historique_visible;
        if self.historique_visible && !self.historique.is_empty() {
            self.defiler_historique = true;
        }
    }

    pub fn basculer_panneau_sci(&mut self) {
        self.panneau_sci = !self.panneau_sci;
    }
}
