use std::marker::PhantomData;
use derive_more::Display;
use log::info;
use spoly::{Coeff, SparsePoly};
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch!(App, args)
}

#[derive(Clone, Copy, PartialEq, Eq, Display, Debug, Default)]
pub enum Op { 
    #[default] Add, 
    Sub, 
    Mul
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub p: String,

    pub q: String,

    #[arg(skip)]
    pub op: Op,

    #[arg(short = 't', long, default_value = "i64")]
    pub c_type: CType,

    #[arg(short, long, default_value = "ascii")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

impl Args { 
    pub fn with_op(&self, op: Op) -> Self { 
        Self { op, ..self.clone() }
    }
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
        let p = parse_poly::<R>(&self.args.p)?;
        let q = parse_poly::<R>(&self.args.q)?;

        info!("{}: {} terms, {} terms", self.args.op, p.nterms(), q.nterms());

        let r = self.compute(&p, &q);
        self.out(&r.to_string_with(self.args.format.style()));

        Ok(self.flush())
    }

    fn compute(&self, p: &SparsePoly<R>, q: &SparsePoly<R>) -> SparsePoly<R> { 
        match self.args.op { 
            Op::Add => p + q,
            Op::Sub => p - q,
            Op::Mul => p * q,
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
