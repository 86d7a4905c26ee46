// Text helpers shared by `Term` and `SparsePoly` rendering.

/// Renders the monomial `x^exp`; the constant monomial is `"1"`.
/// The ASCII form always writes the exponent (`x^1`), the Unicode form 
/// is the compact one (`x`, `x²`).
pub fn mono(exp: usize, unicode: bool) -> String {
    if exp == 0 { 
        "1".to_string()
    } else if unicode && exp == 1 { 
        "x".to_string()
    } else if unicode { 
        let e = superscript(exp);
        format!("x{e}")
    } else { 
        format!("x^{exp}")
    }
}

/// Joins `(monomial, coeff)` pairs into a signed sum. 
/// 
/// The first term keeps its own sign, following terms are joined by 
/// `" + "` or `" - "`. A constant monomial is dropped from its term. 
/// With `omit_unit`, coefficients `1` and `-1` are dropped as well.
/// An empty sum is `"0"`.
pub fn lc<S>(mut terms: S, omit_unit: bool) -> String
where S: Iterator<Item = (String, String)> { 
    let mut res: Vec<String> = vec![];

    let term = |x: String, r: String| -> String { 
        if x == "1" { 
            r
        } else if omit_unit && r == "1" { 
            x
        } else if omit_unit && r == "-1" { 
            format!("-{x}")
        } else { 
            format!("{r}{x}")
        }
    };

    if let Some((x, r)) = terms.next() {
        res.push(term(x, r))
    }

    for (x, r) in terms {
        let (op, r) = match r.strip_prefix('-') { 
            Some(r) => ("-", r.to_owned()),
            None    => ("+", r)
        };
        res.push(op.to_string());
        res.push(term(x, r));
    }

    if res.is_empty() { 
        "0".to_string()
    } else { 
        res.join(" ")
    }
}

pub fn superscript(d: usize) -> String { 
    d.to_string().chars().map(|c| 
        match c { 
            '1' => '\u{00B9}',
            '2' => '\u{00B2}',
            '3' => '\u{00B3}',
            _ => c.to_digit(10)
                .and_then(|d| char::from_u32(('\u{2070}' as u32) + d))
                .unwrap_or(c)
        }
    ).collect()
}
