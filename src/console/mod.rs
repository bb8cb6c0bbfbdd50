//! Interactive roster and server collection.
//!
//! Retry loops live here so invalid input never reaches the game: empty or
//! duplicate names are re-prompted, `done` is refused until enough players
//! have joined, and unknown server names are asked for again. Running out
//! of input is reported as `UnexpectedEof`.

use std::io::{self, BufRead, Write};

use crate::core::roster::names_match;
use crate::core::{PlayerId, Roster};

/// Word that ends name entry, matched case-insensitively.
pub const DONE: &str = "done";

/// Prompts on `output` and reads answers from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Collect player names until `done` with at least `min_players`.
    pub fn read_player_names(&mut self, min_players: usize) -> io::Result<Vec<String>> {
        writeln!(
            self.output,
            "Enter player names. Type '{DONE}' when finished. You need at least {min_players} players to start the game."
        )?;

        let mut names: Vec<String> = Vec::new();
        loop {
            let name = self.ask("Enter player name: ")?;

            if names_match(&name, DONE) {
                if names.len() < min_players {
                    writeln!(self.output, "You need at least {min_players} players!")?;
                    continue;
                }
                return Ok(names);
            }

            if name.is_empty() {
                writeln!(self.output, "Name cannot be empty. Try again.")?;
                continue;
            }

            if names.iter().any(|n| names_match(n, &name)) {
                writeln!(self.output, "Name already taken. Try again.")?;
                continue;
            }

            names.push(name);
        }
    }

    /// Ask who serves first until the answer matches someone on `roster`.
    pub fn read_server(&mut self, roster: &Roster) -> io::Result<PlayerId> {
        loop {
            let name = self.ask("Enter the name of the player who will serve first: ")?;
            match roster.find(&name) {
                Some(id) => return Ok(id),
                None => writeln!(self.output, "Name not in the player list. Try again.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn test_reads_names_until_done() {
        let mut console = console("Ann\nBob\nDONE\n");
        let names = console.read_player_names(2).unwrap();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_done_refused_below_minimum() {
        let mut console = console("Ann\ndone\nBob\ndone\n");
        let names = console.read_player_names(2).unwrap();

        assert_eq!(names, vec!["Ann", "Bob"]);
        assert!(transcript(console).contains("You need at least 2 players!"));
    }

    #[test]
    fn test_empty_and_duplicate_names_reprompted() {
        let mut console = console("  \nAnn\nann\nBob\ndone\n");
        let names = console.read_player_names(2).unwrap();

        assert_eq!(names, vec!["Ann", "Bob"]);
        let out = transcript(console);
        assert!(out.contains("Name cannot be empty. Try again."));
        assert!(out.contains("Name already taken. Try again."));
    }

    #[test]
    fn test_non_ascii_duplicate_reprompted() {
        let mut console = console("Émile\némile\nÖlaf\ndone\n");
        let names = console.read_player_names(2).unwrap();

        assert_eq!(names, vec!["Émile", "Ölaf"]);
        assert!(transcript(console).contains("Name already taken. Try again."));
    }

    #[test]
    fn test_non_ascii_server_matches_any_case() {
        let roster = Roster::new(["Ölaf", "Bob"], 2).unwrap();
        let mut console = console("ölaf\n");

        assert_eq!(console.read_server(&roster).unwrap(), PlayerId::new(0));
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut console = console("Ann\n");
        let err = console.read_player_names(2).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_server_is_case_insensitive() {
        let roster = Roster::new(["Ann", "Bob"], 2).unwrap();
        let mut console = console("Zed\nbOB\n");

        let server = console.read_server(&roster).unwrap();

        assert_eq!(server, PlayerId::new(1));
        assert!(transcript(console).contains("Name not in the player list. Try again."));
    }
}
