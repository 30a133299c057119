use react_forge::{
    cli::{get_log_level_from_verbose, parse_cli, run_init, run_new, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    // Determine verbosity from respective command args
    let dispatch_result = match cli.command {
        Commands::New(args) => {
            let lvl = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(lvl).init();
            run_new(args)
        }
        Commands::Init(args) => {
            let lvl = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(lvl).init();
            run_init(args)
        }
    };

    if let Err(err) = dispatch_result {
        default_error_handler(err);
    }
}
