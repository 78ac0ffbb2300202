const SPACE: u32 = 32;
const KEY_N: u32 = 78;
const KEY_Q: u32 = 81;
const KEY_R: u32 = 82;

/// A control action requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pause or resume the animation.
    TogglePlay,
    /// Advance a single frame, only while paused.
    Step,
    /// Re-initialize the parameters from the current session seed.
    Reset,
    /// Start a new session with a fresh seed and no points.
    NewGame,
}

impl Command {
    /// Maps a raw key code into a command, letters are matched regardless of their case.
    ///
    /// # Returns
    /// `None` if the key is not bound to any command.
    pub fn from_key_code(code: u32) -> Option<Self> {
        let code = match char::from_u32(code) {
            Some(c) if c.is_ascii_lowercase() => c.to_ascii_uppercase() as u32,
            _ => code,
        };

        match code {
            SPACE => Some(Command::TogglePlay),
            KEY_N => Some(Command::Step),
            KEY_R => Some(Command::Reset),
            KEY_Q => Some(Command::NewGame),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys() {
        assert_eq!(Command::from_key_code(32), Some(Command::TogglePlay));
        assert_eq!(Command::from_key_code(78), Some(Command::Step));
        assert_eq!(Command::from_key_code(81), Some(Command::NewGame));
        assert_eq!(Command::from_key_code(82), Some(Command::Reset));
    }

    #[test]
    fn lowercase_letters() {
        assert_eq!(Command::from_key_code('n' as u32), Some(Command::Step));
        assert_eq!(Command::from_key_code('r' as u32), Some(Command::Reset));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(Command::from_key_code('x' as u32), None);
        assert_eq!(Command::from_key_code(13), None);
        assert_eq!(Command::from_key_code(0xD800), None);
    }
}
