mod app;
use app::App;

fn main() {
    let app = App::new();

    match app.run() { 
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{e}");
            eprintln!("\x1b[0;31merror\x1b[0m: {e}");
            std::process::exit(1)
        }
    }
}
