use std::marker::PhantomData;
use log::info;
use spoly::Coeff;
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub p: String,

    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    #[arg(short = 't', long, default_value = "i64")]
    pub c_type: CType,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App<R>
where R: Coeff {
    args: Args,
    _coeff: PhantomData<R>
}

impl<R> App<R>
where R: Coeff {
    pub fn new(args: Args) -> Self { 
        App { args, _coeff: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> { 
        let x = self.args.x;
        ensure!(x.is_finite(), "`x` must be finite, got {x}.");

        let p = parse_poly::<R>(&self.args.p)?;
        info!("eval: {} terms at x = {x}", p.nterms());

        let v = p.evaluate(x);
        Ok(v.to_string())
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    fn args(p: &str, x: f64) -> Args { 
        Args { 
            p: p.to_string(), 
            x,
            ..Default::default()
        }
    }

    #[test]
    fn eval() { 
        let res = dispatch(&args("2 3 2 2 0", 2.0));
        assert_eq!(res.unwrap(), "14");
    }

    #[test]
    fn eval_at_zero() { 
        let res = dispatch(&args("2 3 2 -2 0", 0.0));
        assert_eq!(res.unwrap(), "-2");
    }

    #[test]
    fn eval_fraction() { 
        let res = dispatch(&args("1 4 1", -0.25));
        assert_eq!(res.unwrap(), "-1");

        let res = dispatch(&args("1 1 1", 0.5));
        assert_eq!(res.unwrap(), "0.5");
    }

    #[test]
    fn eval_zero_poly() { 
        let res = dispatch(&args("0", 3.0));
        assert_eq!(res.unwrap(), "0");
    }

    #[test]
    fn non_finite() { 
        let res = dispatch(&args("1 1 1", f64::NAN));
        assert!(res.is_err());
    }
}
