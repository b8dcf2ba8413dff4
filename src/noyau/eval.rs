//! Noyau réel: évaluation (pipeline complet)
//!
//! tokenize -> RPN -> pile d'opérandes f64
//!
//! Tout l'état de travail (jetons, deux piles) est local à l'appel:
//! `evaluer_expression` est réentrante, sans état partagé entre appels.

use tracing::debug;

use super::erreur::ErreurEval;
use super::jetons::{format_jetons, tokenize, Arite, Jeton, Operateur};
use super::rpn::vers_rpn;

/// Évalue une suite RPN avec une pile d'opérandes f64.
///
/// - Nombre: parse f64 (point décimal fixe, indépendant de la locale),
///   sinon NombreInvalide
/// - √: dépile UN opérande, empile sqrt (négatif => NaN IEEE, pas une erreur)
/// - binaire: dépile b PUIS a (b empilé en dernier), calcule a op b
/// - '/' échoue si b == 0 exactement
/// - fin: la pile doit contenir exactement une valeur
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(txt) => {
                let v: f64 = txt
                    .parse()
                    .map_err(|_| ErreurEval::NombreInvalide(txt.clone()))?;
                pile.push(v);
            }

            Jeton::Op(op) => match op.arite() {
                Arite::Unaire => {
                    let a = pile
                        .pop()
                        .ok_or(ErreurEval::ExpressionMalformee("opérande manquant"))?;
                    pile.push(a.sqrt());
                }
                Arite::Binaire => {
                    // ordre de dépilage: b d'abord, il a été empilé après a
                    let b = pile
                        .pop()
                        .ok_or(ErreurEval::ExpressionMalformee("opérande manquant"))?;
                    let a = pile
                        .pop()
                        .ok_or(ErreurEval::ExpressionMalformee("opérande manquant"))?;

                    let v = match op {
                        Operateur::Plus => a + b,
                        Operateur::Moins => a - b,
                        Operateur::Fois => a * b,
                        Operateur::Division => {
                            if b == 0.0 {
                                return Err(ErreurEval::DivisionParZero);
                            }
                            a / b
                        }
                        Operateur::Puissance => a.powf(b),
                        // arité unaire, traitée dans la branche au-dessus
                        Operateur::Racine => unreachable!(),
                    };
                    pile.push(v);
                }
            },

            Jeton::ParG | Jeton::ParD => {
                return Err(ErreurEval::ExpressionMalformee(
                    "parenthèse inattendue en RPN",
                ))
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurEval::ExpressionMalformee("pile finale incohérente"));
    }
    Ok(pile.pop().unwrap())
}

/// API publique riche: évalue une expression et retourne la valeur f64
/// ou l'erreur précise (parenthèses, numéral, division par zéro).
pub fn evaluer_expression(expr: &str) -> Result<f64, ErreurEval> {
    // 1) Jetons
    let jetons = tokenize(expr);
    debug!(jetons = %format_jetons(&jetons), "tokenisation");

    // 2) RPN
    let rpn = vers_rpn(&jetons)?;
    debug!(rpn = %format_jetons(&rpn), "conversion postfixe");

    // 3) Pile d'opérandes
    eval_rpn(&rpn)
}

/// Vue booléenne du contrat historique: (succès, valeur).
/// Tout échec est replié en (false, NaN), la taxonomie n'est pas exposée.
/// Les appelants qui veulent le diagnostic passent par `evaluer_expression`.
pub fn evaluer_simple(expr: &str) -> (bool, f64) {
    match evaluer_expression(expr) {
        Ok(v) => (true, v),
        Err(_) => (false, f64::NAN),
    }
}
