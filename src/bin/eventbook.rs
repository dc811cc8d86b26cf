use std::io;

use clap::Parser;

use eventbook::cli::Cli;
use eventbook::config;
use eventbook::shell::{self, Session};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level().to_string()))
        .init();

    if let Some(organization) = &cli.organization {
        config::set_default_organization(organization);
    }

    let mut session = Session::new().with_format(cli.format);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(err) = shell::run(&mut session, stdin.lock(), &mut stdout) {
        log::error!("Shell stopped: {}", err);
        std::process::exit(1);
    }
}
