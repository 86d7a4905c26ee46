use clap::ValueEnum;
use derive_more::Display;
use spoly::Style;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum CType { 
    I32, 
    #[default] I64, 
    I128
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Format { 
    #[default] Ascii, 
    Unicode
}

impl Format { 
    pub fn style(&self) -> Style { 
        match self { 
            Format::Ascii   => Style::Ascii,
            Format::Unicode => Style::Unicode
        }
    }
}
