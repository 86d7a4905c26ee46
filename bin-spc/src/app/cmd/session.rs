use std::io::BufRead;
use std::marker::PhantomData;
use std::str::FromStr;
use log::info;
use spoly::{read_poly, Coeff, SparsePoly};
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    #[arg(short = 't', long, default_value = "i64")]
    pub c_type: CType,

    #[arg(short, long, default_value = "ascii")]
    pub format: Format,

    /// don't print prompts to stderr.
    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App<R>
where R: Coeff {
    args: Args,
    buff: String,
    _coeff: PhantomData<R>
}

impl<R> App<R>
where R: Coeff {
    pub fn new(args: Args) -> Self { 
        let buff = String::with_capacity(256);
        App { args, buff, _coeff: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> { 
        let stdin = std::io::stdin();
        self.run_with(stdin.lock())
    }

    pub fn run_with<B>(&mut self, reader: B) -> Result<String, Box<dyn std::error::Error>>
    where B: BufRead { 
        let mut tokens = Tokens::new(reader);

        self.prompt("Enter the first polynomial (n coef1 exp1 coef2 exp2 ...): ");
        let p = self.read_poly(&mut tokens, "first")?;

        self.prompt("Enter the second polynomial (n coef1 exp1 coef2 exp2 ...): ");
        let q = self.read_poly(&mut tokens, "second")?;

        info!("p = {p}, q = {q}");

        let style = self.args.format.style();
        let sum = &p + &q;
        self.out(&format!("Sum of polynomials: {}", sum.to_string_with(style)));

        self.prompt("Enter a value for x to evaluate: ");
        let x = tokens.next();
        Self::check_read(&mut tokens)?;

        let Some(x) = x else { 
            return err!("missing value for x.")
        };
        let Ok(x) = f64::from_str(&x) else { 
            return err!("invalid value for x: '{x}'.")
        };
        ensure!(x.is_finite(), "`x` must be finite, got {x}.");

        let v = p.evaluate(x);
        self.out(&format!("Evaluation of first polynomial: {v}"));

        Ok(self.flush())
    }

    fn read_poly<B>(&self, tokens: &mut Tokens<B>, which: &str) -> Result<SparsePoly<R>, Box<dyn std::error::Error>>
    where B: BufRead { 
        let res = read_poly(&mut *tokens);
        Self::check_read(tokens)?;

        match res { 
            Ok(p) => Ok(p),
            Err(e) => err!("invalid {which} polynomial: {e}")
        }
    }

    fn check_read<B>(tokens: &mut Tokens<B>) -> Result<(), Box<dyn std::error::Error>>
    where B: BufRead { 
        match tokens.take_error() { 
            Some(e) => err!("failed to read input: {e}"),
            None => Ok(())
        }
    }

    fn prompt(&self, msg: &str) { 
        if !self.args.quiet { 
            eprint!("{msg}");
        }
    }

    fn out(&mut self, str: &str) { 
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    fn flush(&mut self) -> String { 
        let res = std::mem::take(&mut self.buff);
        res.trim().to_string()
    }
}
