use std::str::FromStr;

use memory_maze_core::Direction;
use thiserror::Error;

/// One discrete request from the player at the keyboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    UseToken,
    Reset,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown command {0:?}: w/a/s/d to move, t or space to use a memory token, r to reset, q to quit")]
pub struct UnknownCommand(pub String);

impl FromStr for Intent {
    type Err = UnknownCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        use Direction::*;
        use Intent::*;

        let command = line.trim();
        if command.is_empty() && line.contains(' ') {
            return Ok(UseToken);
        }

        Ok(match command.to_ascii_lowercase().as_str() {
            "w" | "k" | "up" => Move(Up),
            "s" | "j" | "down" => Move(Down),
            "a" | "h" | "left" => Move(Left),
            "d" | "l" | "right" => Move(Right),
            "t" | "space" | "token" => UseToken,
            "r" | "reset" => Reset,
            "q" | "quit" | "exit" => Quit,
            _ => return Err(UnknownCommand(command.to_owned())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_words() {
        assert_eq!("w".parse::<Intent>(), Ok(Intent::Move(Direction::Up)));
        assert_eq!("Down\n".parse::<Intent>(), Ok(Intent::Move(Direction::Down)));
        assert_eq!(" h ".parse::<Intent>(), Ok(Intent::Move(Direction::Left)));
        assert_eq!("right".parse::<Intent>(), Ok(Intent::Move(Direction::Right)));
        assert_eq!("token".parse::<Intent>(), Ok(Intent::UseToken));
        assert_eq!(" ".parse::<Intent>(), Ok(Intent::UseToken));
        assert_eq!("R".parse::<Intent>(), Ok(Intent::Reset));
        assert_eq!("q".parse::<Intent>(), Ok(Intent::Quit));
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!(
            "jump".parse::<Intent>(),
            Err(UnknownCommand("jump".to_owned()))
        );
        assert!("".parse::<Intent>().is_err());
    }
}
