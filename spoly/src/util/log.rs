use log::LevelFilter;

/// Maps a `-v`-style count to a level filter: 
/// 0 = off, 1 = info, 2 = debug, 3 or more = trace.
pub fn level_for(verbosity: u8) -> LevelFilter { 
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// Logs go to stderr so that results on stdout stay pipeable.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> { 
    use simplelog::*;

    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Trace, Some(Color::Green))
        .build();

    TermLogger::init(l, config, TerminalMode::Stderr, ColorChoice::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() { 
        assert_eq!(level_for(0), LevelFilter::Off);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }
}
