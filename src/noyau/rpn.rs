// src/noyau/rpn.rs
//
// Shunting-yard: infixe -> RPN (postfixe)
//
// Règles:
// - Nombre: sortie directe
// - √ (unaire, préfixe): empilé sans condition; il n'a pas d'opérande à
//   sa gauche, donc aucun test de dépilage à son arrivée. Il ressort comme
//   n'importe quel opérateur et consommera UN opérande à l'évaluation.
// - opérateur binaire: dépile tant que le sommet est un vrai opérateur et
//   que (préc sommet > préc op) ou (égalité et op associatif à gauche)
// - '(' : empilé sans condition
// - ')' : dépile jusqu'à '(' (jetée); pile vide avant => parenthèses dépareillées
// - fin: vidage de la pile; toute parenthèse restante => erreur
//
// La sortie ne contient jamais de parenthèse.

use super::erreur::ErreurEval;
use super::jetons::{Arite, Jeton};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn vers_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurEval> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(_) => out.push(jeton),

            Jeton::Op(op) if op.arite() == Arite::Unaire => {
                // √ : empilé tel quel
                ops.push(jeton);
            }

            Jeton::Op(op) => {
                // Le motif s'arrête tout seul sur '(' (pas un Op: précédence
                // sentinelle 0, on ne dépile pas au-delà).
                while let Some(Jeton::Op(sommet)) = ops.last() {
                    let p_sommet = sommet.precedence();
                    let p_op = op.precedence();

                    let doit_pop =
                        p_sommet > p_op || (p_sommet == p_op && !op.droite_associatif());

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(jeton);
            }

            Jeton::ParG => ops.push(jeton),

            Jeton::ParD => loop {
                match ops.pop() {
                    Some(Jeton::ParG) => break, // '(' jetée
                    Some(sommet) => out.push(sommet),
                    None => {
                        return Err(ErreurEval::ExpressionMalformee(
                            "parenthèses dépareillées",
                        ))
                    }
                }
            },
        }
    }

    // vide la pile ops; une '(' restée ici n'a jamais été fermée
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::ParG | Jeton::ParD) {
            return Err(ErreurEval::ExpressionMalformee("parenthèse non fermée"));
        }
        out.push(op);
    }

    Ok(out)
}
