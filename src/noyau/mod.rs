//! Noyau réel (f64)
//!
//! Organisation interne :
//! - jetons.rs  : modèle de jetons (arité/précédence/associativité) + tokenisation
//! - rpn.rs     : shunting-yard (infixe -> postfixe)
//! - eval.rs    : évaluation RPN + pipeline complet + vue booléenne
//! - erreur.rs  : taxonomie (malformée / nombre invalide / division par zéro)
//! - trig.rs    : fonctions scalaires (sin..atan, deg<->rad)
//! - format.rs  : rendu re-analysable des résultats + lignes d'historique
//!
//! Le noyau est pur et synchrone: aucun état ne survit à un appel.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod trig;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evaluer_expression, evaluer_simple};
pub use format::{format_resultat, ligne_historique};
pub use trig::FonctionScalaire;
