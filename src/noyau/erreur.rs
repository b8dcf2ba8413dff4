// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du noyau.
// Trois familles seulement, détectées au plus près de la source:
// - parenthèses / pile finale   => ExpressionMalformee (rpn.rs, eval.rs)
// - numéral illisible           => NombreInvalide      (eval.rs)
// - dénominateur nul            => DivisionParZero     (eval.rs)
//
// Le contrat booléen historique (succès + NaN) vit dans eval::evaluer_simple;
// ici on garde la forme riche pour les appelants qui veulent le diagnostic.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Parenthèses déséquilibrées ou pile d'opérandes incohérente en fin d'évaluation.
    #[error("expression malformée: {0}")]
    ExpressionMalformee(&'static str),

    /// Un jeton nombre ne se lit pas comme un f64 (ex: "1.2.3").
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    /// Opérande droit de '/' exactement nul.
    #[error("division par zéro")]
    DivisionParZero,
}
