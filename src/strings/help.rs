//! # Help Strings
//!
//! Text printed by the interactive console.

pub const PROMPT: &str = "☯ >>> ";

pub const BANNER: &str = "\
Type a message and press enter. `/quit` or Ctrl-D to leave.
Try: \"hello\", \"what can you do\", \"good things\", \"set a timer\".";

pub const QUIT_COMMANDS: [&str; 3] = ["/quit", "/exit", "/q"];

pub const NO_RESPONSE: &str = "…";

pub fn turn_failed(err: &str) -> String {
    format!("⚠️ Internal error: {err}")
}

pub fn bot_line(name: &str, text: &str) -> String {
    format!("{name}: {text}")
}
