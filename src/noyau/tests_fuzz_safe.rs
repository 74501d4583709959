//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : tout résultat affiché se ré-évalue en lui-même

use std::time::{Duration, Instant};

use super::erreurs::{CalcError, EvalError};
use super::saisie::{Saisie, Touche};
use super::{eval_expression, Reglages};

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

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let ent = rng.pick(20);
    match rng.pick(4) {
        0 => format!("{ent}.{}", rng.pick(100)),
        1 => format!("00{ent}"),
        _ => format!("{ent}"),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!("{a}+{}", gen_expr(rng, depth - 1)),
        2 => format!("{a}-{}", gen_expr(rng, depth - 1)),
        3 => format!("{a}*{}", gen_expr(rng, depth - 1)),
        4 => format!("{a}/{}", gen_expr(rng, depth - 1)),
        5 => format!("{a}%{}", gen_expr(rng, depth - 1)),
        6 => format!("-({a})"),
        _ => format!("({a})"),
    }
}

/// Suite de caractères “pavé” quelconque, souvent mal formée.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789.+-*/%() ";
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_aller_retour() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);
    let reglages = Reglages::default();

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let r1 = eval_expression(&expr, &reglages);
        let r2 = eval_expression(&expr, &reglages);
        assert_eq!(r1, r2, "non déterministe: expr={expr:?}");

        match r1 {
            Ok(affiche) => {
                let encore = eval_expression(&affiche, &reglages);
                assert_eq!(encore.as_ref(), Ok(&affiche), "aller-retour: expr={expr:?}");
                seen_ok += 1;
            }
            // Une expression générée est toujours bien formée.
            Err(e) => {
                assert_eq!(
                    e,
                    CalcError::Eval(EvalError::DivisionByZero),
                    "erreur non attendue: expr={expr:?}"
                );
                seen_div0 += 1;
            }
        }
    }

    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);
    let reglages = Reglages::default();

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_err = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let len = 1 + rng.pick(24) as usize;
        let s = gen_bruit(&mut rng, len);
        if eval_expression(&s, &reglages).is_err() {
            seen_err += 1;
        }
    }

    assert!(seen_err > 0);
}

#[test]
fn fuzz_safe_touches_parentheses_coherentes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);
    let reglages = Reglages::default();

    let mut rng = Rng::new(0x5EED_u64);
    let touches: Vec<Touche> = "0123456789.+-*/%()"
        .chars()
        .filter_map(Touche::depuis_char)
        .chain([Touche::Retour, Touche::Egal])
        .collect();

    let mut s = Saisie::default();
    for _ in 0..2000 {
        budget(t0, max);

        let t = if rng.coin() && rng.coin() && rng.coin() {
            Touche::Egal
        } else {
            touches[rng.pick(touches.len() as u32) as usize]
        };
        let (suite, issue) = s.appuyer(t, &reglages);
        s = suite;

        if issue.is_some() {
            assert_eq!(s.parentheses_ouvertes(), 0);
        }
        if !s.en_erreur() {
            let ouvertes = s.entree().matches('(').count();
            let fermees = s.entree().matches(')').count();
            assert_eq!(
                s.parentheses_ouvertes(),
                ouvertes - fermees,
                "entree={:?}",
                s.entree()
            );
        }
    }
}

#[test]
fn fuzz_safe_imbrication_profonde_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);
    let reglages = Reglages::default();

    // RPN itérative : aucune récursion, donc pas de débordement de pile.
    let n = 5000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(eval_expression(&expr, &reglages).as_deref(), Ok("1"));

    let expr = format!("{}7", "-".repeat(n + 1));
    assert_eq!(eval_expression(&expr, &reglages).as_deref(), Ok("-7"));

    budget(t0, max);
}
