//! Propriétés (proptest) : exactitude entière, aller-retour d’affichage, pile des parenthèses.

use proptest::prelude::*;

use super::erreurs::{CalcError, EvalError};
use super::parentheses::BracketStack;
use super::{eval_expression, Reglages};

fn eval(s: &str) -> Result<String, CalcError> {
    eval_expression(s, &Reglages::default())
}

#[derive(Clone, Copy, Debug)]
enum Mouvement {
    Push,
    Pop,
}

fn mouvement() -> impl Strategy<Value = Mouvement> {
    prop_oneof![Just(Mouvement::Push), Just(Mouvement::Pop)]
}

proptest! {
    #[test]
    fn prop_entiers_sans_division_exacts(
        a in 0i64..1_000_000,
        b in 0i64..1_000_000,
        c in 0i64..1_000_000,
    ) {
        let attendu = a + b * c - a * b;
        prop_assert_eq!(eval(&format!("{a}+{b}*{c}-{a}*{b}")), Ok(attendu.to_string()));
    }

    #[test]
    fn prop_division_entiere_exacte(q in -10_000i64..10_000, b in 1i64..10_000) {
        let a = q * b;
        prop_assert_eq!(eval(&format!("{a}/{b}")), Ok(q.to_string()));
    }

    #[test]
    fn prop_reste_tronque(a in -10_000i64..10_000, b in 1i64..500) {
        // i64 % suit déjà la troncature (signe du dividende)
        prop_assert_eq!(eval(&format!("{a}%{b}")), Ok((a % b).to_string()));
    }

    #[test]
    fn prop_aller_retour_affichage(
        a in -1000i64..1000,
        b in -1000i64..1000,
        op in prop::sample::select(vec!['+', '-', '*', '/', '%']),
    ) {
        match eval(&format!("{a}{op}({b})")) {
            Ok(affiche) => prop_assert_eq!(eval(&affiche), Ok(affiche.clone())),
            Err(e) => {
                prop_assert_eq!(b, 0);
                prop_assert_eq!(e, CalcError::Eval(EvalError::DivisionByZero));
            }
        }
    }

    #[test]
    fn prop_zeros_de_tete_sans_effet(n in 0u32..100_000, zeros in 0usize..6) {
        let s = format!("{}{n}", "0".repeat(zeros));
        prop_assert_eq!(eval(&s), Ok(n.to_string()));
    }

    #[test]
    fn prop_pile_jamais_negative(mouvements in prop::collection::vec(mouvement(), 0..64)) {
        let mut pile = BracketStack::new();
        let mut modele: i64 = 0;
        for m in mouvements {
            match m {
                Mouvement::Push => {
                    pile.push();
                    modele += 1;
                }
                Mouvement::Pop => {
                    let retire = pile.pop();
                    prop_assert_eq!(retire, modele > 0);
                    modele = (modele - 1).max(0);
                }
            }
            prop_assert_eq!(pile.depth() as i64, modele);
        }
        prop_assert_eq!(pile.close_all() as i64, modele);
        prop_assert_eq!(pile.depth(), 0);
    }
}
