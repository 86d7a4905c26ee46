use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;
use spoly::{Coeff, SparsePoly};
use crate::app::err::*;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration) 
where F: FnOnce() -> Res { 
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

pub fn parse_poly<R>(input: &str) -> Result<SparsePoly<R>, Box<dyn std::error::Error>>
where R: Coeff { 
    SparsePoly::from_str(input).map_err(|source| {
        let what = "polynomial".to_string();
        let input = input.trim().to_string();
        Error::Input { what, input, source }.into()
    })
}

// Whitespace-separated tokens pulled lazily, line by line, from a reader.
// A read error ends the iteration and is kept for `take_error`.
pub struct Tokens<B> { 
    reader: B,
    buff: VecDeque<String>,
    error: Option<std::io::Error>
}

impl<B> Tokens<B>
where B: BufRead { 
    pub fn new(reader: B) -> Self { 
        Self { reader, buff: VecDeque::new(), error: None }
    }

    pub fn take_error(&mut self) -> Option<std::io::Error> { 
        self.error.take()
    }
}

impl<B> Iterator for Tokens<B>
where B: BufRead { 
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while self.buff.is_empty() { 
            if self.error.is_some() { 
                return None
            }
            let mut line = String::new();
            match self.reader.read_line(&mut line) { 
                Ok(0) => return None,
                Ok(_) => self.buff.extend(line.split_whitespace().map(String::from)),
                Err(e) => { 
                    self.error = Some(e);
                    return None
                }
            }
        }
        self.buff.pop_front()
    }
}
