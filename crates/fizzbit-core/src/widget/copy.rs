//! Fixed user-facing copy shown by the widget.

pub const EMPTY_INPUT_WARNING: &str = "Please enter a message!";

pub const BUSY_NOTICE: &str = "Please wait for the current response!";

pub const GENERIC_FAILURE: &str = "Fizzbit glitched. Try again.";

pub const NETWORK_FAILURE: &str = "Fizzbit lost signal. Check your connection and try again.";

pub const GREETING: &str =
    "😼🛸 Yo Earthling. I'm Fizzbit — the alien cat who naps on Saturn and overshares chaotic space facts. Ask me anything cosmic... or don't. I'll talk anyway 💫";

pub fn too_long_warning(max_chars: usize) -> String {
    format!("Message too long! Keep it under {max_chars} characters.")
}
