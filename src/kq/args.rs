use clap::Parser;

/// The kq surface is positional and fuzzy (`kq 1234 redismetric logs`), so
/// clap collects one free-form token vector and the router interprets it.
/// `allow_hyphen_values` lets flags like `-f` reach the router untouched.
#[derive(Parser, Debug)]
#[command(name = "kq")]
#[command(about = "A fuzzy, forgiving command-line companion for kubectl", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Command tokens, e.g. `all ns`, `find pod <query>`,
    /// `<namespace> <pod> logs [-f]`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}
