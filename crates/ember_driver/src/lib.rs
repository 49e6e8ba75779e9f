mod builtin;
mod init;
mod session;
mod validator;

pub use builtin::{builtin_commands, BuiltInCommand, HelpCommand, InitCommand};
pub use init::{run_init, Dsl, InitError, InitOutcome};
pub use session::BuildSession;
pub use validator::{BuildLayoutError, BuildLayoutValidator, ValidateError, BUILD_BASICS_TOPIC, BUILD_INIT_TOPIC};
