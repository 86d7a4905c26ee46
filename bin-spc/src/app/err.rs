use spoly::ParseError;

#[derive(Debug, derive_more::Display)]
pub enum Error { 
    #[display("{_0}")]
    Msg(String),

    #[display("invalid {what} '{input}': {source}")]
    Input { what: String, input: String, source: ParseError },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self { 
            Error::Input { source, .. } => Some(source),
            _ => None
        }
    }
}

macro_rules! err {
    ($($arg:tt)*) => {{
        use crate::app::err::*;
        let e = Error::Msg(format!($($arg)*));
        Err( e.into() )
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond { 
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
