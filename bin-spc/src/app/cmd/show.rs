use std::marker::PhantomData;
use spoly::Coeff;
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub p: String,

    #[arg(short = 't', long, default_value = "i64")]
    pub c_type: CType,

    #[arg(short, long, default_value = "ascii")]
    pub format: Format,

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
        let p = parse_poly::<R>(&self.args.p)?;

        let deg = match p.degree() { 
            Some(d) => d.to_string(),
            None    => "-".to_string()
        };

        self.out(&p.to_string_with(self.args.format.style()));
        self.out(&format!("degree: {deg}"));
        self.out(&format!("terms: {}", p.nterms()));
        self.out(&format!("input: {}", p.to_input_string()));

        Ok(self.flush())
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
