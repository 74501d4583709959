// src/noyau/format.rs
//
// Affichage d’un résultat exact en décimal “calculatrice” :
// - entier        -> "42" (pas de point)
// - décimal fini  -> "0.125" (forme minimale, sans zéros finaux)
// - décimal infini -> tronqué à `chiffres` décimales puis zéros finaux retirés
// Jamais de notation scientifique.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Nombre de décimales d’un rationnel à développement fini, sinon None.
/// d = 2^a * 5^b  =>  max(a, b) décimales.
fn decimales_finies(denom: &BigInt) -> Option<usize> {
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut d = denom.clone();
    let mut a: usize = 0;
    let mut b: usize = 0;

    while (&d % &deux).is_zero() && !d.is_zero() {
        d /= &deux;
        a += 1;
    }
    while (&d % &cinq).is_zero() && !d.is_zero() {
        d /= &cinq;
        b += 1;
    }

    if d.is_one() {
        Some(a.max(b))
    } else {
        None
    }
}

/// Convertit un entier “scalé” positif (×10^digits) en texte décimal minimal.
fn scaled_to_decimal(scaled: &BigInt, digits: usize) -> String {
    let scale = pow10(digits);
    let int_part = scaled / &scale;
    let frac_part = scaled % &scale;

    if digits == 0 || frac_part.is_zero() {
        return format!("{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{int_part}.{frac}")
}

/// Texte affiché pour un résultat.
/// `chiffres` borne les décimales d’un développement infini (troncature vers zéro).
pub fn format_resultat(r: &BigRational, chiffres: usize) -> String {
    if r.is_integer() {
        return format!("{}", r.numer());
    }

    let digits = match decimales_finies(r.denom()) {
        Some(k) => k,
        None => chiffres,
    };

    // troncature vers zéro : on travaille sur |r|
    let n = r.numer().abs();
    let scaled = (n * pow10(digits)) / r.denom();

    let texte = scaled_to_decimal(&scaled, digits);
    if r.is_negative() && texte != "0" {
        format!("-{texte}")
    } else {
        texte
    }
}
