pub mod args;
pub mod runner;

pub use args::{
    get_cli, get_log_level_from_verbose, ChainArgs, Cli, Commands, DirArgs, ListArgs,
    RenderArgs, ValidateArgs, VarArgs,
};
pub use runner::{dispatch, run};
