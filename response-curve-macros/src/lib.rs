use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, ExprArray, Lit, Token, UnOp, parse_macro_input};

/// Creates a `SampledCurve` at compile time from literal table entries.
///
/// This macro checks the table at compile time and expands to a
/// `SampledCurve` directly, without the `Result` returned by the runtime
/// constructors. Evaluation is unchanged.
///
/// # Format
///
/// `sampled!(min, max, [s0, s1, ...])` where every value is a numeric
/// literal, optionally negated. Integer literals are accepted.
///
/// Rejected at compile time:
/// - an empty entry list
/// - `min >= max`
/// - anything other than a numeric literal
///
/// # Examples
///
/// ```ignore
/// use response_curve::{Curve, sampled};
///
/// let curve = sampled!(0.0, 1.0, [0.0, 10.0, 20.0]);
/// assert!((curve.evaluate(0.5) - 15.0).abs() < 1e-9);
///
/// // Negative and integer entries
/// let curve = sampled!(-1, 1, [-4, 0, 4.5]);
/// ```
#[proc_macro]
pub fn sampled(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as TableInput);

    match input.evaluate() {
        Ok((min, max, entries)) => {
            let expanded = quote! {
                {
                    ::response_curve::SampledCurve::from_literal_table(
                        #min,
                        #max,
                        ::std::vec![#(#entries),*],
                    )
                }
            };

            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid sample table: {}", e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

struct TableInput {
    min: Expr,
    max: Expr,
    entries: ExprArray,
}

impl Parse for TableInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let min = input.parse()?;
        input.parse::<Token![,]>()?;
        let max = input.parse()?;
        input.parse::<Token![,]>()?;
        let entries = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        Ok(Self { min, max, entries })
    }
}

impl TableInput {
    fn evaluate(&self) -> Result<(f64, f64, Vec<f64>), String> {
        let min = parse_number(&self.min).map_err(|e| format!("min: {}", e))?;
        let max = parse_number(&self.max).map_err(|e| format!("max: {}", e))?;
        let entries = self
            .entries
            .elems
            .iter()
            .enumerate()
            .map(|(i, expr)| parse_number(expr).map_err(|e| format!("entry {}: {}", i, e)))
            .collect::<Result<Vec<f64>, String>>()?;

        check_table(min, max, &entries)?;
        Ok((min, max, entries))
    }
}

fn parse_number(expr: &Expr) -> Result<f64, String> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Float(f) => f
                .base10_parse::<f64>()
                .map_err(|_| format!("invalid float '{}'", f)),
            Lit::Int(i) => i
                .base10_parse::<i64>()
                .map(|v| v as f64)
                .map_err(|_| format!("invalid integer '{}'", i)),
            _ => Err("expected a numeric literal".to_string()),
        },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            parse_number(&unary.expr).map(|v| -v)
        }
        Expr::Paren(paren) => parse_number(&paren.expr),
        _ => Err("expected a numeric literal".to_string()),
    }
}

fn check_table(min: f64, max: f64, entries: &[f64]) -> Result<(), String> {
    if entries.is_empty() {
        return Err("table has no entries".to_string());
    }
    if min >= max {
        return Err(format!("min {} must be below max {}", min, max));
    }
    Ok(())
}
