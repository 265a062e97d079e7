mod cli_runtime;

fn main() {
    changed_files::logging::init();
    if let Err(err) = cli_runtime::run() {
        let message = format!("{:#}", err);
        println!("{}", changed_files::logging::error_command(&message));
        tracing::error!("{}", message);
        std::process::exit(1);
    }
}
