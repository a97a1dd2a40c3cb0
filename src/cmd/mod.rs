/// Field state inspection command.
pub mod check;
/// Adapter decode command.
pub mod decode;
mod util;
