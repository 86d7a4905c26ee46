use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{arith, eval, session, show};
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// P + Q
    Add(arith::Args),
    /// P - Q
    Sub(arith::Args),
    /// P * Q
    Mul(arith::Args),
    /// P evaluated at X
    Eval(eval::Args),
    /// P with its degree and term count
    Show(show::Args),
    /// reads P, Q and X from stdin, prints P + Q and P(X)
    Session(session::Args),
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        let level = match &self.command { 
            Cmd::Add(args)     => args.log,
            Cmd::Sub(args)     => args.log,
            Cmd::Mul(args)     => args.log,
            Cmd::Eval(args)    => args.log,
            Cmd::Show(args)    => args.log,
            Cmd::Session(args) => args.log,
        };
        spoly::util::log::level_for(level)
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> { 
        self.init_logger();

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        if let Err(e) = spoly::util::log::init_simple_logger(l) { 
            eprintln!("failed to init logger: {e}");
        }
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> { 
        use arith::Op;

        guard_panic(||
            match &self.args.command { 
                Cmd::Add(args)     => arith::dispatch(&args.with_op(Op::Add)),
                Cmd::Sub(args)     => arith::dispatch(&args.with_op(Op::Sub)),
                Cmd::Mul(args)     => arith::dispatch(&args.with_op(Op::Mul)),
                Cmd::Eval(args)    => eval::dispatch(args),
                Cmd::Show(args)    => show::dispatch(args),
                Cmd::Session(args) => session::dispatch(args),
            }
        )
    }
}
