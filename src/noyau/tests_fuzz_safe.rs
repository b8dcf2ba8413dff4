//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - générateur "équilibré" => seule erreur légitime : division par zéro
//! - générateur "poubelle" => jamais de panique, échecs confinés à la taxonomie
//! - invariant clé : échec de la vue booléenne => sentinelle NaN

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval::{evaluer_expression, evaluer_simple};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits entiers + quelques décimaux; 0 inclus (utile pour /0)
    match rng.pick(8) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2".to_string(),
        3 => "7".to_string(),
        4 => "12".to_string(),
        5 => "0.5".to_string(),
        6 => "3.25".to_string(),
        _ => "100".to_string(),
    }
}

/// Expressions entièrement parenthésées: toujours bien formées, donc
/// la seule erreur admissible à l'évaluation est la division par zéro.
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("√({})", gen_expr(rng, depth - 1)),
        _ => {
            // exposants bornés pour garder des valeurs finies lisibles
            let e = if rng.coin() { "2" } else { "0.5" };
            format!("({}^{})", gen_expr(rng, depth - 1), e)
        }
    }
}

/// Soupe de caractères: alphabet accepté + intrus, sans aucune structure.
fn gen_poubelle(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '9', '.', '+', '-', '*', '/', '^', '(', ')', '√', ' ', 'a', 'Z', '#', 'é',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_equilibrees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        match evaluer_expression(&expr) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                // bien formée + numéraux valides => seule la division par
                // zéro est une issue légitime
                assert_eq!(e, ErreurEval::DivisionParZero, "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune division par zéro vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes expressions => mêmes bits de sortie.
    let passe = |seed: u64| -> Vec<u64> {
        let mut rng = Rng::new(seed);
        (0..60)
            .map(|_| {
                let (ok, v) = evaluer_simple(&gen_expr(&mut rng, 4));
                if ok {
                    v.to_bits()
                } else {
                    u64::MAX
                }
            })
            .collect()
    };

    assert_eq!(passe(0xBADC0DE_u64), passe(0xBADC0DE_u64));
}

#[test]
fn fuzz_safe_soupe_de_caracteres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_poubelle(&mut rng, 24);

        // invariant: jamais de panique; échec => sentinelle NaN
        let (ok, v) = evaluer_simple(&expr);
        if !ok {
            assert!(v.is_nan(), "échec sans NaN pour expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_somme_plate_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Le pipeline est entièrement itératif (pas d'AST récursif):
    // une somme plate longue doit passer sans broncher.
    let mut expr = String::from("1");
    for _ in 0..5000 {
        expr.push_str("+1");
    }
    budget(t0, max);

    let (ok, v) = evaluer_simple(&expr);
    assert!(ok);
    assert_eq!(v, 5001.0);
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // 2000 niveaux de parenthèses: les deux piles sont des Vec, pas la
    // pile d'appels
    let n = 2000;
    let mut expr = String::new();
    for _ in 0..n {
        expr.push('(');
    }
    expr.push('7');
    for _ in 0..n {
        expr.push(')');
    }
    budget(t0, max);

    let (ok, v) = evaluer_simple(&expr);
    assert!(ok);
    assert_eq!(v, 7.0);
}
