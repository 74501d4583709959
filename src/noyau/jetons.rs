// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreurs::LexError;
use super::format::format_resultat;
use super::reglages::CHIFFRES_MAX;

/// Opérateurs binaires (et `+`/`-` unaires, décidés par le parse).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Percent => '%',
        }
    }

    fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '%' => Some(Op::Percent),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),
    Op(Op),
    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12, 007 -> 7)
/// - décimaux (ex: 3.25, .5, 5.) -> rationnel exact
/// - opérateurs + - * / %
/// - parenthèses ( )
/// - espaces ignorés
pub fn tokenize(s: &str) -> Result<Vec<Tok>, LexError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        if let Some(op) = Op::depuis_char(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        // Nombre : plus longue suite de chiffres et de points.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            let r = lire_nombre(&texte).ok_or(LexError::MalformedNumber { texte, pos: start })?;
            out.push(Tok::Num(r));
            continue;
        }

        return Err(LexError::InvalidCharacter { ch: c, pos: i });
    }

    Ok(out)
}

/// "12.50" -> 1250/100 ; au plus un point, au moins un chiffre.
/// Les zéros de tête disparaissent ici (BigInt ne les garde pas).
fn lire_nombre(texte: &str) -> Option<BigRational> {
    let (ent, frac) = match texte.split_once('.') {
        Some((e, f)) => {
            if f.contains('.') {
                return None;
            }
            (e, f)
        }
        None => (texte, ""),
    };
    if ent.is_empty() && frac.is_empty() {
        return None;
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let d = BigInt::from(10).pow(frac.len() as u32);
    Some(BigRational::new(n, d))
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
/// Les nombres sont réécrits sous forme minimale (007 -> 7, 2.50 -> 2.5).
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_resultat(r, CHIFFRES_MAX),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
