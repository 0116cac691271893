use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};

mod cli;
mod util;
mod cmd_init;
mod cmd_menu;
mod cmd_add;
mod cmd_list;
mod cmd_search_name;
mod cmd_search_phone;
mod cmd_status;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Пример: RUST_LOG=debug ./rolodex ...
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    match cli.cmd {
        cli::Cmd::Init { path } =>
            cmd_init::exec(path),

        cli::Cmd::Menu { path, locale } =>
            cmd_menu::exec(path, locale),

        cli::Cmd::Add { path, full_name, phone, email, street, city, state, zip, country } =>
            cmd_add::exec(path, full_name, phone, email, street, city, state, zip, country),

        cli::Cmd::List { path, json } =>
            cmd_list::exec(path, json),

        cli::Cmd::SearchName { path, name, json } =>
            cmd_search_name::exec(path, name, json),

        cli::Cmd::SearchPhone { path, phone, json } =>
            cmd_search_phone::exec(path, phone, json),

        cli::Cmd::Status { path, json } =>
            cmd_status::exec(path, json),
    }
}
