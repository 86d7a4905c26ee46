// Runs `$app<R>` with the coefficient type `R` selected by `$args.c_type`.
macro_rules! dispatch {
    ($app:ident, $args:expr) => {{
        use crate::app::utils::*;

        match $args.c_type {
            CType::I32  => run!(i32,  $app, $args),
            CType::I64  => run!(i64,  $app, $args),
            CType::I128 => run!(i128, $app, $args),
        }
    }};
}

macro_rules! run {
    ($c_type:ty, $app:ident, $args:expr) => {{
        let mut app: $app<$c_type> = $app::new($args.clone());
        app.run()
    }}
}

pub(crate) use {dispatch, run};
