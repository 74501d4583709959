// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la forme
// - Puis calculer la RPN sur une pile de rationnels
//
// Règles:
// - '+'/'-' arrivant quand on attend une VALEUR => signe unaire (préfixe,
//   plus prioritaire que * / %). "2*-3" => 2 * (-3).
// - Une valeur là où on attend un opérateur ("2 3", "2(3)") => UnexpectedToken.
// - '%' = reste tronqué : a - trunc(a/b)*b (signe du dividende).

use num_rational::BigRational;
use num_traits::Zero;

use super::erreurs::EvalError;
use super::format::format_resultat;
use super::jetons::{Op, Tok};
use super::reglages::CHIFFRES_MAX;

/// Élément de sortie RPN (les parenthèses ont disparu).
#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Num(BigRational),
    Bin(Op),
    Neg,
    Pos,
}

/// Élément de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Bin(Op),
    Neg,
    Pos,
    LPar,
}

fn precedence(p: Pile) -> i32 {
    match p {
        Pile::Bin(Op::Plus | Op::Minus) => 1,
        Pile::Bin(Op::Star | Op::Slash | Op::Percent) => 2,
        Pile::Neg | Pile::Pos => 3,
        Pile::LPar => 0,
    }
}

fn vers_rpn(p: Pile) -> Option<Rpn> {
    match p {
        Pile::Bin(op) => Some(Rpn::Bin(op)),
        Pile::Neg => Some(Rpn::Neg),
        Pile::Pos => Some(Rpn::Pos),
        Pile::LPar => None,
    }
}

/// Vérifie l’équilibre des parenthèses, indépendamment de la saisie.
fn verifie_parentheses(tokens: &[Tok]) -> Result<(), EvalError> {
    let mut prof: usize = 0;
    for t in tokens {
        match t {
            Tok::LPar => prof += 1,
            Tok::RPar => {
                prof = prof
                    .checked_sub(1)
                    .ok_or(EvalError::UnbalancedParentheses)?;
            }
            _ => {}
        }
    }
    if prof != 0 {
        return Err(EvalError::UnbalancedParentheses);
    }
    Ok(())
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, LPar, Num(3), Plus, Num(4), RPar]
///   rpn:    [Num(2), Num(3), Num(4), Plus, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }
    verifie_parentheses(tokens)?;

    let mut out: Vec<Rpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    // true tant qu’on attend un opérande (début, après un opérateur, après '(').
    let mut attend_valeur = true;

    for (index, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(r) => {
                if !attend_valeur {
                    return Err(EvalError::UnexpectedToken { index });
                }
                out.push(Rpn::Num(r.clone()));
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(EvalError::UnexpectedToken { index });
                }
                ops.push(Pile::LPar);
            }

            Tok::RPar => {
                // "()" ou "(2+)"
                if attend_valeur {
                    return Err(EvalError::UnexpectedToken { index });
                }
                loop {
                    match ops.pop() {
                        Some(Pile::LPar) => break,
                        Some(p) => out.extend(vers_rpn(p)),
                        None => return Err(EvalError::UnbalancedParentheses),
                    }
                }
            }

            Tok::Op(op) if attend_valeur => match op {
                // préfixe : rien à dépiler
                Op::Minus => ops.push(Pile::Neg),
                Op::Plus => ops.push(Pile::Pos),
                _ => return Err(EvalError::UnexpectedToken { index }),
            },

            Tok::Op(op) => {
                let courant = Pile::Bin(*op);
                // gauche-associatif : on sort tout ce qui est au moins aussi prioritaire
                while let Some(&top) = ops.last() {
                    if matches!(top, Pile::LPar) || precedence(top) < precedence(courant) {
                        break;
                    }
                    ops.pop();
                    out.extend(vers_rpn(top));
                }
                ops.push(courant);
                attend_valeur = true;
            }
        }
    }

    if attend_valeur {
        return Err(EvalError::UnexpectedToken {
            index: tokens.len(),
        });
    }

    while let Some(p) = ops.pop() {
        match vers_rpn(p) {
            Some(r) => out.push(r),
            None => return Err(EvalError::UnbalancedParentheses),
        }
    }

    Ok(out)
}

/// Calcule une RPN sur une pile de rationnels exacts.
pub fn eval_rpn(rpn: &[Rpn]) -> Result<BigRational, EvalError> {
    let mut st: Vec<BigRational> = Vec::new();
    // Une RPN issue de to_rpn est toujours bien formée ; sinon on signale la fin.
    let mal_forme = EvalError::UnexpectedToken { index: rpn.len() };

    for r in rpn {
        match r {
            Rpn::Num(v) => st.push(v.clone()),
            Rpn::Neg => {
                let a = st.pop().ok_or_else(|| mal_forme.clone())?;
                st.push(-a);
            }
            Rpn::Pos => {
                if st.is_empty() {
                    return Err(mal_forme);
                }
            }
            Rpn::Bin(op) => {
                let b = st.pop().ok_or_else(|| mal_forme.clone())?;
                let a = st.pop().ok_or_else(|| mal_forme.clone())?;
                st.push(applique(*op, a, b)?);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(mal_forme),
    }
}

fn applique(op: Op, a: BigRational, b: BigRational) -> Result<BigRational, EvalError> {
    Ok(match op {
        Op::Plus => a + b,
        Op::Minus => a - b,
        Op::Star => a * b,
        Op::Slash => {
            if b.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        Op::Percent => {
            if b.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            let q = (&a / &b).trunc();
            a - q * b
        }
    })
}

/// Format utilitaire (démarche) : RPN en texte.
pub fn format_rpn(rpn: &[Rpn]) -> String {
    let mut out = Vec::new();
    for r in rpn {
        let s = match r {
            Rpn::Num(v) => format_resultat(v, CHIFFRES_MAX),
            Rpn::Bin(op) => op.symbole().to_string(),
            Rpn::Neg => "neg".to_string(),
            Rpn::Pos => "pos".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
