// src/noyau/trig.rs
//
// Fonctions scalaires: une valeur f64 en entrée, une valeur f64 en sortie.
// Sémantique IEEE-754 pure: un argument hors domaine (asin(2)) rend la
// sentinelle NaN, jamais une erreur. Le contrat appelant distingue
// "a produit un nombre" de "a échoué"; ici c'est TOUJOURS "a produit
// un nombre".

use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionScalaire {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    DegVersRad,
    RadVersDeg,
}

impl FonctionScalaire {
    /// Les huit transformations, dans l'ordre des touches du panneau.
    pub const TOUTES: [FonctionScalaire; 8] = [
        FonctionScalaire::Sin,
        FonctionScalaire::Cos,
        FonctionScalaire::Tan,
        FonctionScalaire::Asin,
        FonctionScalaire::Acos,
        FonctionScalaire::Atan,
        FonctionScalaire::DegVersRad,
        FonctionScalaire::RadVersDeg,
    ];

    /// Libellé de touche.
    pub fn etiquette(self) -> &'static str {
        match self {
            FonctionScalaire::Sin => "sin",
            FonctionScalaire::Cos => "cos",
            FonctionScalaire::Tan => "tan",
            FonctionScalaire::Asin => "asin",
            FonctionScalaire::Acos => "acos",
            FonctionScalaire::Atan => "atan",
            FonctionScalaire::DegVersRad => "deg→rad",
            FonctionScalaire::RadVersDeg => "rad→deg",
        }
    }

    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            FonctionScalaire::Sin => x.sin(),
            FonctionScalaire::Cos => x.cos(),
            FonctionScalaire::Tan => x.tan(),
            FonctionScalaire::Asin => x.asin(),
            FonctionScalaire::Acos => x.acos(),
            FonctionScalaire::Atan => x.atan(),
            FonctionScalaire::DegVersRad => x * (PI / 180.0),
            FonctionScalaire::RadVersDeg => x * (180.0 / PI),
        }
    }

    /// Vue booléenne du contrat historique: (succès, valeur).
    /// Le succès est inconditionnel, hors-domaine compris (NaN).
    pub fn appliquer_simple(self, x: f64) -> (bool, f64) {
        (true, self.appliquer(x))
    }
}
